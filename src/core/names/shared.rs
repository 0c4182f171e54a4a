/*!
Thread-safe handle to a name registry.

Lookups, resolution and enumeration take the read lock; everything that
mutates the registry takes the write lock. Free functions of removed or
replaced entries run after the write lock has been released, so they may
call back into the same registry.
*/

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::config::RegistryConfig;
use crate::core::error::Result;
use crate::core::names::entry::{EntryData, NamedEntry};
use crate::core::names::handlers::TypeHooks;
use crate::core::names::registry::{release_all, CleanupScope, NameRegistry};

/// Cloneable, lock-protected [`NameRegistry`]
#[derive(Debug)]
pub struct SharedNameRegistry<T> {
    inner: Arc<RwLock<NameRegistry<T>>>,
}

impl<T> Clone for SharedNameRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedNameRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<NameRegistry<T>> for SharedNameRegistry<T> {
    fn from(registry: NameRegistry<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl<T> SharedNameRegistry<T> {
    pub fn new() -> Self {
        NameRegistry::new().into()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        NameRegistry::with_config(config).into()
    }

    /// Acquire the read lock
    pub fn read(&self) -> Result<RwLockReadGuard<'_, NameRegistry<T>>> {
        Ok(self.inner.read()?)
    }

    /// Acquire the write lock.
    ///
    /// Free functions triggered through the guard run while it is held.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, NameRegistry<T>>> {
        Ok(self.inner.write()?)
    }

    pub fn init(&self) -> Result<()> {
        self.write()?.init()
    }

    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.read()?.is_initialized())
    }

    pub fn allocate_type_slot(&self, hooks: TypeHooks<T>) -> Result<i32> {
        self.write()?.allocate_type_slot(hooks)
    }

    pub fn add(&self, name: impl Into<String>, name_type: i32, data: T) -> Result<()> {
        let evicted = self
            .write()?
            .insert(name.into(), name_type, EntryData::Value(data))?;
        if let Some(eviction) = evicted {
            eviction.release();
        }
        Ok(())
    }

    pub fn add_alias(
        &self,
        name: impl Into<String>,
        name_type: i32,
        target: impl Into<String>,
    ) -> Result<()> {
        let evicted = self.write()?.insert(
            name.into(),
            name_type | crate::core::constants::name_types::ALIAS,
            EntryData::Alias(target.into()),
        )?;
        if let Some(eviction) = evicted {
            eviction.release();
        }
        Ok(())
    }

    pub fn remove(&self, name: &str, name_type: i32) -> Result<()> {
        let eviction = self.write()?.take(name, name_type)?;
        eviction.release();
        Ok(())
    }

    pub fn cleanup(&self, scope: impl Into<CleanupScope>) -> Result<()> {
        let evictions = self.write()?.sweep(scope.into());
        release_all(evictions);
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn contains(&self, name: &str, name_type: i32) -> Result<bool> {
        Ok(self.read()?.contains(name, name_type))
    }

    /// Visit every entry of `name_type` under the read lock
    pub fn for_each_of_type<F>(&self, name_type: i32, visit: F) -> Result<()>
    where
        F: FnMut(&NamedEntry<T>),
    {
        self.read()?.for_each_of_type(name_type, visit);
        Ok(())
    }

    /// Visit every entry of `name_type` in name order under the read lock
    pub fn for_each_of_type_sorted<F>(&self, name_type: i32, visit: F) -> Result<()>
    where
        F: FnMut(&NamedEntry<T>),
    {
        self.read()?.for_each_of_type_sorted(name_type, visit);
        Ok(())
    }

    pub fn names_of_type(&self, name_type: i32) -> Result<Vec<String>> {
        Ok(self.read()?.names_of_type(name_type))
    }
}

impl<T: Clone> SharedNameRegistry<T> {
    /// Clone of the payload [`NameRegistry::get`] would return
    pub fn get(&self, name: &str, name_type: i32) -> Result<Option<EntryData<T>>> {
        Ok(self.read()?.get(name, name_type).cloned())
    }

    /// Clone of the value `name` resolves to
    pub fn resolve(&self, name: &str, name_type: i32) -> Result<Option<T>> {
        Ok(self.read()?.resolve(name, name_type).cloned())
    }
}
