/*!
The name registry.

[`NameRegistry`] ties the table, the type handlers, alias resolution and
enumeration together and owns their lifecycle. A registry starts
uninitialized; [`NameRegistry::init`] or the first [`NameRegistry::add`]
creates the table, and a full [`NameRegistry::cleanup`] returns it to the
uninitialized state.

Entries leave the table through exactly one path (overwrite, remove or
cleanup), and each departure hands the owned entry to the free function of
its type exactly once. Lookups and enumeration never call it.
*/

use crate::core::config::RegistryConfig;
use crate::core::constants::{name_types, split_alias, CLEANUP_ALL};
use crate::core::error::{invalid_input, not_found, Error, Result};
use crate::core::names::entry::{EntryData, NamedEntry};
use crate::core::names::enumerate;
use crate::core::names::handlers::{FreeFn, TypeHooks, TypeRegistry};
use crate::core::names::resolver;
use crate::core::names::table::NameTable;

/// Which entries a cleanup removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupScope {
    /// Every entry; the table and type handlers are destroyed as well
    All,

    /// Entries of one type; the table stays
    Type(i32),
}

impl From<i32> for CleanupScope {
    fn from(name_type: i32) -> Self {
        if name_type < 0 {
            CleanupScope::All
        } else {
            CleanupScope::Type(name_type & !name_types::ALIAS)
        }
    }
}

impl CleanupScope {
    /// Raw type value understood by `From<i32>`
    pub fn as_raw(&self) -> i32 {
        match self {
            CleanupScope::All => CLEANUP_ALL,
            CleanupScope::Type(name_type) => *name_type,
        }
    }
}

/// An entry that has left the table and still needs its free function run.
pub(crate) struct Eviction<T> {
    entry: NamedEntry<T>,
    free: Option<FreeFn<T>>,
}

impl<T> Eviction<T> {
    /// Hand the entry to its free function, or drop it if there is none
    pub(crate) fn release(self) {
        log::trace!(
            "releasing {:?} (type {})",
            self.entry.name(),
            self.entry.name_type()
        );
        if let Some(free) = self.free {
            free(self.entry);
        }
    }
}

pub(crate) fn release_all<T>(evictions: Vec<Eviction<T>>) {
    for eviction in evictions {
        eviction.release();
    }
}

/// Typed name registry
#[derive(Debug)]
pub struct NameRegistry<T> {
    config: RegistryConfig,
    table: Option<NameTable<T>>,
    types: TypeRegistry<T>,
}

impl<T> Default for NameRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NameRegistry<T> {
    /// Create an uninitialized registry with the standard configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an uninitialized registry with a specific configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            table: None,
            types: TypeRegistry::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create the table if it does not exist yet. Idempotent.
    pub fn init(&mut self) -> Result<()> {
        self.table_mut().map(|_| ())
    }

    pub fn is_initialized(&self) -> bool {
        self.table.is_some()
    }

    fn table_mut(&mut self) -> Result<&mut NameTable<T>> {
        if self.table.is_none() {
            let table = NameTable::with_capacity(self.config.initial_capacity())?;
            log::debug!(
                "name table created ({} buckets reserved)",
                self.config.initial_capacity()
            );
            self.table = Some(table);
        }
        self.table.as_mut().ok_or(Error::Uninitialized)
    }

    /// Allocate a new name type with optional custom handlers.
    ///
    /// Every call returns a new id, starting at [`name_types::NUM`].
    pub fn allocate_type_slot(&mut self, hooks: TypeHooks<T>) -> Result<i32> {
        self.types.allocate(hooks)
    }

    /// Allocate a new name type with the default handlers
    pub fn allocate_default_type(&mut self) -> Result<i32> {
        self.allocate_type_slot(TypeHooks::new())
    }

    pub fn types(&self) -> &TypeRegistry<T> {
        &self.types
    }

    /// Register `data` under `(name_type, name)`.
    ///
    /// An existing entry under the same key is replaced and released through
    /// its type's free function. `name_type` must not carry the alias flag;
    /// use [`NameRegistry::add_alias`] for aliases.
    pub fn add(&mut self, name: impl Into<String>, name_type: i32, data: T) -> Result<()> {
        let evicted = self.insert(name.into(), name_type, EntryData::Value(data))?;
        if let Some(eviction) = evicted {
            eviction.release();
        }
        Ok(())
    }

    /// Register `name` as an alias of `target` within `name_type`.
    ///
    /// The alias flag on `name_type` is accepted and ignored.
    pub fn add_alias(
        &mut self,
        name: impl Into<String>,
        name_type: i32,
        target: impl Into<String>,
    ) -> Result<()> {
        let evicted = self.insert(
            name.into(),
            name_type | name_types::ALIAS,
            EntryData::Alias(target.into()),
        )?;
        if let Some(eviction) = evicted {
            eviction.release();
        }
        Ok(())
    }

    /// Insert without releasing the displaced entry
    pub(crate) fn insert(
        &mut self,
        name: String,
        name_type: i32,
        data: EntryData<T>,
    ) -> Result<Option<Eviction<T>>> {
        let (base_type, alias) = split_alias(name_type);
        if base_type < 0 {
            return invalid_input(format!("negative name type {}", base_type));
        }
        if alias != data.is_alias() {
            return invalid_input(format!(
                "alias flag on type {:#x} does not match the payload of {:?}",
                name_type, name
            ));
        }

        self.table_mut()?;
        let table = self.table.as_mut().ok_or(Error::Uninitialized)?;
        let previous = table.insert(&self.types, NamedEntry::new(name, base_type, data))?;

        Ok(previous.map(|entry| {
            log::trace!("replaced {:?} (type {})", entry.name(), base_type);
            self.evict(entry)
        }))
    }

    fn evict(&self, entry: NamedEntry<T>) -> Eviction<T> {
        let free = self.types.handlers_for(entry.name_type()).free_fn().cloned();
        Eviction { entry, free }
    }

    /// Look up `(name_type, name)`.
    ///
    /// With the alias flag set on `name_type` the stored payload is returned
    /// as is, alias or not. Without it alias entries are followed to the
    /// canonical entry; a dangling or over-long chain yields `None`.
    pub fn get(&self, name: &str, name_type: i32) -> Option<&EntryData<T>> {
        self.get_entry(name, name_type).map(NamedEntry::data)
    }

    /// Like [`NameRegistry::get`] but returns the whole entry
    pub fn get_entry(&self, name: &str, name_type: i32) -> Option<&NamedEntry<T>> {
        let table = self.table.as_ref()?;
        let (base_type, literal) = split_alias(name_type);

        if literal {
            table.find(&self.types, name, base_type)
        } else {
            resolver::resolve(
                table,
                &self.types,
                name,
                base_type,
                self.config.max_alias_depth(),
            )
        }
    }

    /// Resolve `name` through any aliases to its value
    pub fn resolve(&self, name: &str, name_type: i32) -> Option<&T> {
        self.get(name, name_type & !name_types::ALIAS)
            .and_then(EntryData::value)
    }

    /// Whether an entry is stored under exactly `(name_type, name)`
    pub fn contains(&self, name: &str, name_type: i32) -> bool {
        self.get(name, name_type | name_types::ALIAS).is_some()
    }

    /// Remove the entry stored under `(name_type, name)` and release it.
    ///
    /// The alias flag on `name_type` is ignored.
    pub fn remove(&mut self, name: &str, name_type: i32) -> Result<()> {
        self.take(name, name_type)?.release();
        Ok(())
    }

    /// Remove without releasing
    pub(crate) fn take(&mut self, name: &str, name_type: i32) -> Result<Eviction<T>> {
        let (base_type, _) = split_alias(name_type);
        let table = self.table.as_mut().ok_or(Error::Uninitialized)?;

        match table.remove(&self.types, name, base_type) {
            Some(entry) => {
                log::trace!("removed {:?} (type {})", name, base_type);
                Ok(self.evict(entry))
            }
            None => not_found(name, base_type),
        }
    }

    /// Number of entries across all types
    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, NameTable::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every entry of `name_type` in table order
    pub fn for_each_of_type<F>(&self, name_type: i32, visit: F)
    where
        F: FnMut(&NamedEntry<T>),
    {
        if let Some(table) = self.table.as_ref() {
            enumerate::for_each_of_type(table, name_type, visit);
        }
    }

    /// Visit every entry of `name_type` in ascending name order.
    ///
    /// If the scratch list cannot be allocated nothing is visited.
    pub fn for_each_of_type_sorted<F>(&self, name_type: i32, visit: F)
    where
        F: FnMut(&NamedEntry<T>),
    {
        if let Err(err) = self.try_for_each_of_type_sorted(name_type, visit) {
            log::warn!("sorted enumeration of type {} skipped: {}", name_type, err);
        }
    }

    /// Visit every entry of `name_type` in ascending name order, reporting
    /// allocation failure of the scratch list.
    pub fn try_for_each_of_type_sorted<F>(&self, name_type: i32, mut visit: F) -> Result<()>
    where
        F: FnMut(&NamedEntry<T>),
    {
        let Some(table) = self.table.as_ref() else {
            return Ok(());
        };
        for entry in enumerate::sorted_of_type(table, name_type)? {
            visit(entry);
        }
        Ok(())
    }

    /// Names of `name_type` in ascending order
    pub fn names_of_type(&self, name_type: i32) -> Vec<String> {
        let mut names = Vec::new();
        self.for_each_of_type_sorted(name_type, |entry| names.push(entry.name().to_string()));
        names
    }

    /// Remove entries and release them.
    ///
    /// [`CleanupScope::All`] (or any negative type) also destroys the table
    /// and the type handlers; the registry must be initialized again before
    /// lookups find anything. Does nothing on an uninitialized registry.
    pub fn cleanup(&mut self, scope: impl Into<CleanupScope>) {
        release_all(self.sweep(scope.into()));
    }

    /// Remove entries without releasing them
    pub(crate) fn sweep(&mut self, scope: CleanupScope) -> Vec<Eviction<T>> {
        let Some(table) = self.table.as_mut() else {
            return Vec::new();
        };

        let removed = match scope {
            CleanupScope::All => table.drain_all(),
            CleanupScope::Type(name_type) => {
                let removed = table.drain_type(&self.types, name_type);
                if self.config.shrink_on_cleanup() {
                    table.shrink_to_fit();
                }
                removed
            }
        };
        log::debug!("cleanup {:?} removed {} entries", scope, removed.len());

        // Free functions are looked up before the handlers go away
        let evictions = removed.into_iter().map(|entry| self.evict(entry)).collect();

        if scope == CleanupScope::All {
            self.table = None;
            self.types.clear();
        }
        evictions
    }
}
