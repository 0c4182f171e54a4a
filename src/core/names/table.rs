/*!
Hash table of named entries.

Entries are chained in buckets keyed by `hash(name) ^ type`, where `hash` is
the hash function registered for the entry's type. Two keys are equal when
their types match and the type's comparison function reports `Equal`.
*/

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::core::error::{Error, Result};
use crate::core::names::entry::NamedEntry;
use crate::core::names::handlers::TypeRegistry;

/// Storage for all entries of a registry
#[derive(Debug)]
pub struct NameTable<T> {
    buckets: FxHashMap<u64, Vec<NamedEntry<T>>>,
    len: usize,
}

impl<T> NameTable<T> {
    /// Create a table with `capacity` buckets reserved
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buckets = FxHashMap::default();
        buckets
            .try_reserve(capacity)
            .map_err(|_| Error::AllocationFailure("name table"))?;
        Ok(Self { buckets, len: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn key(types: &TypeRegistry<T>, name: &str, name_type: i32) -> u64 {
        types.handlers_for(name_type).hash(name) ^ (name_type as u64)
    }

    fn position(
        bucket: &[NamedEntry<T>],
        types: &TypeRegistry<T>,
        name: &str,
        name_type: i32,
    ) -> Option<usize> {
        let handlers = types.handlers_for(name_type);
        bucket.iter().position(|entry| {
            entry.name_type() == name_type
                && handlers.compare(entry.name(), name) == Ordering::Equal
        })
    }

    /// Find the entry stored under `(name_type, name)`
    pub fn find(&self, types: &TypeRegistry<T>, name: &str, name_type: i32) -> Option<&NamedEntry<T>> {
        let bucket = self.buckets.get(&Self::key(types, name, name_type))?;
        Self::position(bucket, types, name, name_type).map(|idx| &bucket[idx])
    }

    /// Insert `entry`, returning the entry it displaced.
    pub fn insert(
        &mut self,
        types: &TypeRegistry<T>,
        entry: NamedEntry<T>,
    ) -> Result<Option<NamedEntry<T>>> {
        let key = Self::key(types, entry.name(), entry.name_type());

        if let Some(bucket) = self.buckets.get_mut(&key) {
            if let Some(idx) = Self::position(bucket, types, entry.name(), entry.name_type()) {
                return Ok(Some(std::mem::replace(&mut bucket[idx], entry)));
            }
            bucket
                .try_reserve(1)
                .map_err(|_| Error::AllocationFailure("name table bucket"))?;
            bucket.push(entry);
        } else {
            self.buckets
                .try_reserve(1)
                .map_err(|_| Error::AllocationFailure("name table"))?;
            let mut bucket = Vec::new();
            bucket
                .try_reserve_exact(1)
                .map_err(|_| Error::AllocationFailure("name table bucket"))?;
            bucket.push(entry);
            self.buckets.insert(key, bucket);
        }

        self.len += 1;
        Ok(None)
    }

    /// Remove and return the entry stored under `(name_type, name)`
    pub fn remove(
        &mut self,
        types: &TypeRegistry<T>,
        name: &str,
        name_type: i32,
    ) -> Option<NamedEntry<T>> {
        let key = Self::key(types, name, name_type);
        let bucket = self.buckets.get_mut(&key)?;
        let idx = Self::position(bucket, types, name, name_type)?;
        let removed = bucket.swap_remove(idx);
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        self.len -= 1;
        Some(removed)
    }

    /// Iterate all entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &NamedEntry<T>> {
        self.buckets.values().flatten()
    }

    /// Iterate entries of one type in table order
    pub fn iter_type(&self, name_type: i32) -> impl Iterator<Item = &NamedEntry<T>> {
        self.iter().filter(move |entry| entry.name_type() == name_type)
    }

    /// Remove every entry of `name_type`.
    ///
    /// Matching keys are collected first and removed afterwards, so the
    /// sweep never observes a table it is mutating.
    pub fn drain_type(&mut self, types: &TypeRegistry<T>, name_type: i32) -> Vec<NamedEntry<T>> {
        let keys: Vec<String> = self
            .iter_type(name_type)
            .map(|entry| entry.name().to_string())
            .collect();

        keys.iter()
            .filter_map(|name| self.remove(types, name, name_type))
            .collect()
    }

    /// Remove every entry
    pub fn drain_all(&mut self) -> Vec<NamedEntry<T>> {
        self.len = 0;
        self.buckets.drain().flat_map(|(_, bucket)| bucket).collect()
    }

    /// Release spare bucket capacity
    pub fn shrink_to_fit(&mut self) {
        self.buckets.shrink_to_fit();
    }
}
