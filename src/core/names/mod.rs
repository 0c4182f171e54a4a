/*!
Named-object registry.

Entries are keyed by `(type, name)`. Types below
[`name_types::NUM`](crate::core::constants::name_types::NUM) are built in;
further types are allocated at runtime, each with its own hash, comparison
and free functions.

- [`NameRegistry`]: single-owner registry
- [`SharedNameRegistry`]: lock-protected handle for multi-threaded hosts
- [`global`]: process-wide instance
*/

pub mod entry;
pub mod enumerate;
pub mod global;
pub mod handlers;
pub mod hash;
pub mod registry;
pub mod resolver;
pub mod shared;
pub mod table;

pub use entry::{EntryData, NamedEntry};
pub use handlers::{CompareFn, FreeFn, HashFn, TypeHandlers, TypeHooks, TypeRegistry};
pub use hash::{string_compare, string_hash};
pub use registry::{CleanupScope, NameRegistry};
pub use shared::SharedNameRegistry;
pub use table::NameTable;
