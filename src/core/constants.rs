/*!
Constants for the name registry.

Built-in type identifiers and the alias flag are part of the external
contract: higher-level code stores names under these numbers and relies on
the flag layout when it asks for literal alias entries.
*/

/// Built-in name types
pub mod name_types {
    /// Undefined type, never used for real entries
    pub const UNDEF: i32 = 0x00;

    /// Message digest names
    pub const MD_METH: i32 = 0x01;

    /// Cipher names
    pub const CIPHER_METH: i32 = 0x02;

    /// Public key method names
    pub const PKEY_METH: i32 = 0x03;

    /// Compression method names
    pub const COMP_METH: i32 = 0x04;

    /// Number of built-in types; the first dynamically allocated type id
    pub const NUM: i32 = 0x05;

    /// Flag bit marking an alias entry (on add) or a literal alias lookup (on get)
    pub const ALIAS: i32 = 0x8000;
}

/// Type value passed to cleanup to tear down every type and the registry itself
pub const CLEANUP_ALL: i32 = -1;

/// Maximum number of alias redirections followed by a resolving lookup
pub const MAX_ALIAS_DEPTH: usize = 10;

/// Configuration defaults
pub mod defaults {
    /// Buckets reserved when the table is created
    pub const INITIAL_CAPACITY: usize = 64;

    /// Buckets reserved by the compact preset
    pub const COMPACT_CAPACITY: usize = 8;
}

/// Split a type value into its base type and alias flag.
#[inline]
pub fn split_alias(name_type: i32) -> (i32, bool) {
    (name_type & !name_types::ALIAS, name_type & name_types::ALIAS != 0)
}
