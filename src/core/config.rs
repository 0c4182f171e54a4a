/*!
Registry configuration.

Presets cover the common cases; individual knobs are set with the `with_*`
builder methods.
*/

use crate::core::constants::{defaults, MAX_ALIAS_DEPTH};

/// Configuration for a [`NameRegistry`](crate::NameRegistry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Buckets reserved when the table is created
    initial_capacity: usize,

    /// Whether to release spare capacity after a type-scoped cleanup
    shrink_on_cleanup: bool,

    /// Maximum alias redirections before a lookup gives up
    max_alias_depth: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RegistryConfig {
    /// Create configuration for a general purpose registry
    pub fn standard() -> Self {
        Self {
            initial_capacity: defaults::INITIAL_CAPACITY,
            shrink_on_cleanup: true,
            max_alias_depth: MAX_ALIAS_DEPTH,
        }
    }

    /// Create configuration for a registry holding a handful of names
    pub fn compact() -> Self {
        Self {
            initial_capacity: defaults::COMPACT_CAPACITY,
            shrink_on_cleanup: true,
            max_alias_depth: MAX_ALIAS_DEPTH,
        }
    }

    /// Set the number of buckets reserved at init
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable shrinking after a type-scoped cleanup
    pub fn with_shrink_on_cleanup(mut self, enable: bool) -> Self {
        self.shrink_on_cleanup = enable;
        self
    }

    /// Set the alias redirection limit
    pub fn with_max_alias_depth(mut self, depth: usize) -> Self {
        self.max_alias_depth = depth;
        self
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn shrink_on_cleanup(&self) -> bool {
        self.shrink_on_cleanup
    }

    pub fn max_alias_depth(&self) -> usize {
        self.max_alias_depth
    }
}
