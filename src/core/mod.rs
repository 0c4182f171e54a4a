//! Core components for the name registry.
//!
//! This module contains the registry itself together with its constants,
//! configuration and error handling.

// Named-object registry
pub mod names;

// Registry configuration
pub mod config;

// Type ids and limits
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::config::RegistryConfig;
pub use self::error::{Error, Result};
pub use self::names::{CleanupScope, NameRegistry, SharedNameRegistry};
