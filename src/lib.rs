/*!
# PQC Names

A typed registry of human-readable names for cryptographic algorithms,
ciphers, digests and other named objects.

## Overview

- Entries are keyed by `(type, name)` and carry either a value or an alias
- Built-in types for digests, ciphers, public key and compression methods
- New types allocated at runtime with their own hash, compare and free functions
- Alias chains resolved to the canonical entry, bounded against cycles
- Enumeration of a type in table order or sorted by name
- Free functions run exactly once for every entry that leaves the registry

## Example

```
use pqc_names::{name_types, EntryData, NameRegistry};

let mut registry = NameRegistry::new();
registry.add("sha256", name_types::MD_METH, 32usize)?;
registry.add_alias("SHA-256", name_types::MD_METH, "sha256")?;

assert_eq!(registry.resolve("SHA-256", name_types::MD_METH), Some(&32));
assert_eq!(
    registry.get("SHA-256", name_types::MD_METH | name_types::ALIAS),
    Some(&EntryData::Alias("sha256".to_string()))
);
# Ok::<(), pqc_names::Error>(())
```
*/

// Core registry components
pub mod core;

// Re-export commonly used types for convenience
pub use self::core::config::RegistryConfig;
pub use self::core::constants::{name_types, split_alias, CLEANUP_ALL, MAX_ALIAS_DEPTH};
pub use self::core::error::{Error, Result};
pub use self::core::names::{
    global, string_compare, string_hash, CleanupScope, CompareFn, EntryData, FreeFn, HashFn,
    NameRegistry, NamedEntry, SharedNameRegistry, TypeHandlers, TypeHooks,
};
