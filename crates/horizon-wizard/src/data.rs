//! Wizard-scoped data shared by the controller and every screen.
//!
//! [`WizardData`] is a cheap-to-clone handle onto one map. Every clone sees
//! every mutation immediately, from any thread. Values are keyed by
//! [`DataKey`], a typed name the embedding application declares once:
//!
//! ```
//! use horizon_wizard::{DataKey, WizardData};
//!
//! const ACTION: DataKey<String> = DataKey::new("action");
//!
//! let data = WizardData::new();
//! let seen_by_screen = data.clone();
//!
//! data.insert(&ACTION, "create".to_string());
//! assert_eq!(seen_by_screen.get(&ACTION).as_deref(), Some("create"));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use static_assertions::assert_impl_all;

/// A typed key into [`WizardData`].
///
/// Two keys with the same name address the same slot; reading it back with a
/// different value type yields `None`.
pub struct DataKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DataKey<T> {
    /// Declare a key.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The key's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for DataKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DataKey<T> {}

impl<T> fmt::Debug for DataKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DataKey").field(&self.name).finish()
    }
}

type Value = Box<dyn Any + Send + Sync>;

/// Shared key/value store scoped to one wizard session.
#[derive(Clone, Default)]
pub struct WizardData {
    entries: Arc<RwLock<HashMap<&'static str, Value>>>,
}

assert_impl_all!(WizardData: Send, Sync);

impl WizardData {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, returning the previous one if it had the same type.
    pub fn insert<T>(&self, key: &DataKey<T>, value: T) -> Option<T>
    where
        T: Any + Send + Sync,
    {
        self.entries
            .write()
            .insert(key.name, Box::new(value))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    /// Get a clone of a value.
    pub fn get<T>(&self, key: &DataKey<T>) -> Option<T>
    where
        T: Any + Clone,
    {
        self.with(key, T::clone)
    }

    /// Borrow a value for the duration of `f`.
    pub fn with<T, R>(&self, key: &DataKey<T>, f: impl FnOnce(&T) -> R) -> Option<R>
    where
        T: Any,
    {
        let entries = self.entries.read();
        entries.get(key.name)?.downcast_ref::<T>().map(f)
    }

    /// Mutate a value in place.
    pub fn update<T, R>(&self, key: &DataKey<T>, f: impl FnOnce(&mut T) -> R) -> Option<R>
    where
        T: Any,
    {
        let mut entries = self.entries.write();
        entries.get_mut(key.name)?.downcast_mut::<T>().map(f)
    }

    /// Remove a value, returning it if it had the requested type.
    pub fn remove<T>(&self, key: &DataKey<T>) -> Option<T>
    where
        T: Any,
    {
        self.entries
            .write()
            .remove(key.name)
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    /// Whether any value is stored under the key's name.
    pub fn contains<T>(&self, key: &DataKey<T>) -> bool {
        self.entries.read().contains_key(key.name)
    }

    /// Remove every value.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Whether two handles share the same store.
    pub fn ptr_eq(&self, other: &WizardData) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl fmt::Debug for WizardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read();
        let mut keys: Vec<_> = entries.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("WizardData").field("keys", &keys).finish()
    }
}
