/*!
Per-type dispatch records.

Every name type owns a hash function, a comparison function and an optional
free function. Built-in types use the defaults; callers obtain new types at
runtime through [`TypeRegistry::allocate`] and may override any subset of
the three functions.
*/

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::core::constants::name_types;
use crate::core::error::{Error, Result};
use crate::core::names::entry::NamedEntry;
use crate::core::names::hash::{string_compare, string_hash};

/// Hash function for names of one type
pub type HashFn = Arc<dyn Fn(&str) -> u64 + Send + Sync>;

/// Comparison function for names of one type
pub type CompareFn = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Called with the owned entry whenever it leaves the table
pub type FreeFn<T> = Arc<dyn Fn(NamedEntry<T>) + Send + Sync>;

/// Handlers in effect for one type
pub struct TypeHandlers<T> {
    hash: HashFn,
    compare: CompareFn,
    free: Option<FreeFn<T>>,
}

impl<T> Clone for TypeHandlers<T> {
    fn clone(&self) -> Self {
        Self {
            hash: Arc::clone(&self.hash),
            compare: Arc::clone(&self.compare),
            free: self.free.clone(),
        }
    }
}

impl<T> Default for TypeHandlers<T> {
    fn default() -> Self {
        Self {
            hash: Arc::new(string_hash),
            compare: Arc::new(string_compare),
            free: None,
        }
    }
}

impl<T> fmt::Debug for TypeHandlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandlers")
            .field("free", &self.free.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> TypeHandlers<T> {
    pub fn hash(&self, name: &str) -> u64 {
        (self.hash)(name)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        (self.compare)(a, b)
    }

    pub fn free_fn(&self) -> Option<&FreeFn<T>> {
        self.free.as_ref()
    }

    pub fn has_free(&self) -> bool {
        self.free.is_some()
    }

    /// Overwrite the fields the hooks supply, keep the rest
    fn apply(&mut self, hooks: TypeHooks<T>) {
        if let Some(hash) = hooks.hash {
            self.hash = hash;
        }
        if let Some(compare) = hooks.compare {
            self.compare = compare;
        }
        if let Some(free) = hooks.free {
            self.free = Some(free);
        }
    }
}

/// Optional overrides passed when allocating a type slot
pub struct TypeHooks<T> {
    hash: Option<HashFn>,
    compare: Option<CompareFn>,
    free: Option<FreeFn<T>>,
}

impl<T> Default for TypeHooks<T> {
    fn default() -> Self {
        Self {
            hash: None,
            compare: None,
            free: None,
        }
    }
}

impl<T> TypeHooks<T> {
    /// Hooks that keep every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom hash function
    pub fn with_hash<F>(mut self, hash: F) -> Self
    where
        F: Fn(&str) -> u64 + Send + Sync + 'static,
    {
        self.hash = Some(Arc::new(hash));
        self
    }

    /// Use a custom comparison function
    pub fn with_compare<F>(mut self, compare: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        self.compare = Some(Arc::new(compare));
        self
    }

    /// Release payloads through `free` when entries leave the table
    pub fn with_free<F>(mut self, free: F) -> Self
    where
        F: Fn(NamedEntry<T>) + Send + Sync + 'static,
    {
        self.free = Some(Arc::new(free));
        self
    }
}

/// Growable list of handlers indexed by type number
pub struct TypeRegistry<T> {
    /// Slot `i` holds the handlers of type `i`
    slots: Vec<TypeHandlers<T>>,

    /// Next id handed out by `allocate`; never rewound
    next_type: i32,

    /// Handlers for types without a slot
    fallback: TypeHandlers<T>,
}

impl<T> Default for TypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("slots", &self.slots.len())
            .field("next_type", &self.next_type)
            .finish()
    }
}

impl<T> TypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_type: name_types::NUM,
            fallback: TypeHandlers::default(),
        }
    }

    /// Allocate a fresh type id and install `hooks` for it.
    ///
    /// Slots between the current end of the list and the new id are
    /// backfilled with default handlers.
    pub fn allocate(&mut self, hooks: TypeHooks<T>) -> Result<i32> {
        let id = self.next_type;
        if id >= name_types::ALIAS {
            return Err(Error::AllocationFailure("type id space exhausted"));
        }
        let wanted = id as usize + 1;

        if self.slots.len() < wanted {
            self.slots
                .try_reserve(wanted - self.slots.len())
                .map_err(|_| Error::AllocationFailure("type handler list"))?;
            self.slots.resize_with(wanted, TypeHandlers::default);
        }
        self.next_type += 1;

        self.slots[id as usize].apply(hooks);
        log::debug!(
            "allocated name type {} (custom free: {})",
            id,
            self.slots[id as usize].has_free()
        );
        Ok(id)
    }

    /// Handlers for `name_type`, falling back to the defaults
    pub fn handlers_for(&self, name_type: i32) -> &TypeHandlers<T> {
        usize::try_from(name_type)
            .ok()
            .and_then(|idx| self.slots.get(idx))
            .unwrap_or(&self.fallback)
    }

    /// Whether `name_type` has a slot in the list
    pub fn is_allocated(&self, name_type: i32) -> bool {
        usize::try_from(name_type).is_ok_and(|idx| idx < self.slots.len())
    }

    /// The id the next call to `allocate` will return
    pub fn next_type(&self) -> i32 {
        self.next_type
    }

    /// Drop every slot. The id counter keeps its value.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn test_allocate_returns_fresh_ids() {
        let mut registry: TypeRegistry<u8> = TypeRegistry::new();
        let first = registry.allocate(TypeHooks::new()).unwrap();
        let second = registry.allocate(TypeHooks::new()).unwrap();

        assert_eq!(first, name_types::NUM);
        assert_eq!(second, first + 1);
        assert!(registry.is_allocated(second));
        // Built-in slots are backfilled too
        assert!(registry.is_allocated(name_types::MD_METH));
    }

    #[test]
    fn test_defaults_for_unallocated_types() {
        let registry: TypeRegistry<u8> = TypeRegistry::new();
        let handlers = registry.handlers_for(42);
        assert_eq!(handlers.hash("md5"), string_hash("md5"));
        assert_eq!(handlers.compare("a", "b"), Ordering::Less);
        assert!(!handlers.has_free());

        assert!(!registry.handlers_for(-3).has_free());
    }

    #[test]
    fn test_hooks_override_only_supplied_fields() {
        let mut registry: TypeRegistry<u8> = TypeRegistry::new();
        let id = registry
            .allocate(TypeHooks::new().with_hash(|_| 7))
            .unwrap();

        let handlers = registry.handlers_for(id);
        assert_eq!(handlers.hash("anything"), 7);
        assert_eq!(handlers.compare("x", "x"), Ordering::Equal);
        assert!(!handlers.has_free());
    }

    #[test]
    fn test_free_hook_is_installed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut registry: TypeRegistry<u8> = TypeRegistry::new();
        let id = registry
            .allocate(TypeHooks::new().with_free(move |_| {
                counter.fetch_add(1, AtomicOrdering::SeqCst);
            }))
            .unwrap();

        let free = registry.handlers_for(id).free_fn().cloned().unwrap();
        free(NamedEntry::new("x".to_string(), id, crate::EntryData::Value(1)));
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn test_clear_keeps_counter() {
        let mut registry: TypeRegistry<u8> = TypeRegistry::new();
        let first = registry.allocate(TypeHooks::new()).unwrap();
        registry.clear();

        assert!(!registry.is_allocated(first));
        let second = registry.allocate(TypeHooks::new()).unwrap();
        assert!(second > first);
    }
}
