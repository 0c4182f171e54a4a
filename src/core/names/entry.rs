/*!
Entries stored in the name table.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Payload of a named entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum EntryData<T> {
    /// Terminal value supplied by the caller
    Value(T),

    /// Name of another entry of the same type
    Alias(String),
}

impl<T> EntryData<T> {
    /// Whether this payload redirects to another name
    pub fn is_alias(&self) -> bool {
        matches!(self, EntryData::Alias(_))
    }

    /// The terminal value, if this is not an alias
    pub fn value(&self) -> Option<&T> {
        match self {
            EntryData::Value(value) => Some(value),
            EntryData::Alias(_) => None,
        }
    }

    /// The alias target, if this is an alias
    pub fn alias_target(&self) -> Option<&str> {
        match self {
            EntryData::Value(_) => None,
            EntryData::Alias(target) => Some(target),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            EntryData::Value(value) => Some(value),
            EntryData::Alias(_) => None,
        }
    }
}

/// A `(type, name) -> data` record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct NamedEntry<T> {
    name: String,
    name_type: i32,
    data: EntryData<T>,
}

impl<T> NamedEntry<T> {
    pub(crate) fn new(name: String, name_type: i32, data: EntryData<T>) -> Self {
        Self {
            name,
            name_type,
            data,
        }
    }

    /// Name the entry is stored under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base type of the entry (never carries the alias flag)
    pub fn name_type(&self) -> i32 {
        self.name_type
    }

    pub fn is_alias(&self) -> bool {
        self.data.is_alias()
    }

    pub fn data(&self) -> &EntryData<T> {
        &self.data
    }

    /// Split the entry into its owned parts
    pub fn into_parts(self) -> (String, i32, EntryData<T>) {
        (self.name, self.name_type, self.data)
    }
}
