/*!
Process-wide name registry.

Library code that has no registry handle of its own registers and looks up
names here. Payloads are type-erased; [`get_as`] recovers the concrete type.
*/

use std::any::Any;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::error::Result;
use crate::core::names::entry::{EntryData, NamedEntry};
use crate::core::names::handlers::TypeHooks;
use crate::core::names::registry::CleanupScope;
use crate::core::names::shared::SharedNameRegistry;

/// Payload stored in the process-wide registry
pub type GlobalData = Arc<dyn Any + Send + Sync>;

// Global registry instance
static REGISTRY: Lazy<SharedNameRegistry<GlobalData>> = Lazy::new(SharedNameRegistry::new);

/// Handle to the process-wide registry
pub fn registry() -> &'static SharedNameRegistry<GlobalData> {
    &REGISTRY
}

/// Create the process-wide table if needed
pub fn init() -> Result<()> {
    REGISTRY.init()
}

/// Allocate a new name type in the process-wide registry
pub fn allocate_type_slot(hooks: TypeHooks<GlobalData>) -> Result<i32> {
    REGISTRY.allocate_type_slot(hooks)
}

/// Register a value under `(name_type, name)`
pub fn add<V: Any + Send + Sync>(name: &str, name_type: i32, value: V) -> Result<()> {
    REGISTRY.add(name, name_type, Arc::new(value))
}

/// Register `name` as an alias of `target`
pub fn add_alias(name: &str, name_type: i32, target: &str) -> Result<()> {
    REGISTRY.add_alias(name, name_type, target)
}

/// Look up `(name_type, name)`; see [`NameRegistry::get`](crate::NameRegistry::get)
pub fn get(name: &str, name_type: i32) -> Option<EntryData<GlobalData>> {
    REGISTRY.get(name, name_type).ok().flatten()
}

/// Resolve `name` and downcast its value to `V`
pub fn get_as<V: Any + Send + Sync>(name: &str, name_type: i32) -> Option<Arc<V>> {
    let value = REGISTRY.resolve(name, name_type).ok().flatten()?;
    value.downcast::<V>().ok()
}

/// Remove `(name_type, name)` and release it
pub fn remove(name: &str, name_type: i32) -> Result<()> {
    REGISTRY.remove(name, name_type)
}

/// Visit every entry of `name_type`
pub fn for_each_of_type<F>(name_type: i32, visit: F) -> Result<()>
where
    F: FnMut(&NamedEntry<GlobalData>),
{
    REGISTRY.for_each_of_type(name_type, visit)
}

/// Visit every entry of `name_type` in name order
pub fn for_each_of_type_sorted<F>(name_type: i32, visit: F) -> Result<()>
where
    F: FnMut(&NamedEntry<GlobalData>),
{
    REGISTRY.for_each_of_type_sorted(name_type, visit)
}

/// List all names of `name_type` in ascending order
pub fn names_of_type(name_type: i32) -> Vec<String> {
    REGISTRY.names_of_type(name_type).unwrap_or_default()
}

/// Clean up the process-wide registry
pub fn cleanup(scope: impl Into<CleanupScope>) -> Result<()> {
    REGISTRY.cleanup(scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests share the process-wide registry, so each works in its own type.

    #[derive(Debug, PartialEq)]
    struct Digest {
        size: usize,
    }

    #[test]
    fn test_register_and_downcast() {
        let t = allocate_type_slot(TypeHooks::new()).unwrap();
        add("sha3-256", t, Digest { size: 32 }).unwrap();
        add_alias("SHA3-256", t, "sha3-256").unwrap();

        assert_eq!(*get_as::<Digest>("SHA3-256", t).unwrap(), Digest { size: 32 });
        assert!(get_as::<u32>("SHA3-256", t).is_none());
        assert!(get("SHA3-256", t | crate::core::constants::name_types::ALIAS)
            .unwrap()
            .is_alias());
    }

    #[test]
    fn test_scoped_cleanup_in_global() {
        let t = allocate_type_slot(TypeHooks::new()).unwrap();
        let other = allocate_type_slot(TypeHooks::new()).unwrap();
        add("b", t, 1u8).unwrap();
        add("a", t, 2u8).unwrap();
        add("keep", other, 3u8).unwrap();

        assert_eq!(names_of_type(t), vec!["a", "b"]);
        cleanup(t).unwrap();
        assert!(names_of_type(t).is_empty());
        assert!(get_as::<u8>("keep", other).is_some());
        remove("keep", other).unwrap();
        assert!(remove("keep", other).is_err());
    }
}
