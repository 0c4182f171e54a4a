/*!
Error handling for the name registry.

Every failure is a local return value. Lookups report a missing entry with
`None`; mutating operations return [`Result`].
*/

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backing table or handler list could not grow
    #[error("Allocation failed: {0}")]
    AllocationFailure(&'static str),

    /// No entry under the requested name and type
    #[error("Name not found: {name:?} (type {name_type})")]
    NotFound {
        name: String,
        name_type: i32,
    },

    /// Operation needs a table that has not been created yet
    #[error("Name registry not initialized")]
    Uninitialized,

    /// Arguments that cannot describe an entry
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A thread panicked while holding the registry lock
    #[error("Registry lock poisoned")]
    LockPoisoned,
}

impl Error {
    /// Whether this error means the entry was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Build an `Error::NotFound` result
pub fn not_found<T>(name: &str, name_type: i32) -> Result<T> {
    Err(Error::NotFound {
        name: name.to_string(),
        name_type,
    })
}

/// Build an `Error::InvalidInput` result
pub fn invalid_input<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::InvalidInput(msg.into()))
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::LockPoisoned
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailure("reserve")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = not_found::<()>("sha256", 1).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Name not found: \"sha256\" (type 1)");
    }

    #[test]
    fn test_try_reserve_maps_to_allocation_failure() {
        let mut v: Vec<u64> = Vec::new();
        let err: Error = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, Error::AllocationFailure(_)));
    }
}
