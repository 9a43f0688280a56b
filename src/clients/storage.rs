//! In-memory store for Spotify objects, keyed by their `id` field.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::clients::errors::{Error, Result};

/// In-memory map from item id to the full JSON object.
///
/// The store has no persistence, no capacity bound and no internal locking;
/// callers accessing it from several tasks must guard it themselves, e.g.
/// behind a mutex. Listing preserves insertion order.
#[derive(Debug, Default)]
pub struct StorageService {
    items: HashMap<String, Value>,
    order: Vec<String>,
}

impl StorageService {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item under its `id` field, overwriting any existing entry.
    ///
    /// Returns the stored item. Items without a string `id` field are
    /// rejected with [`Error::InvalidItemError`]. Overwriting keeps the
    /// key's original position in listing order.
    pub fn add_item(&mut self, item: Value) -> Result<Value> {
        let key = item
            .get("id")
            .and_then(Value::as_str)
            .ok_or(Error::InvalidItemError)?
            .to_string();

        debug!("Storing item under key {key:?}");
        if self.items.insert(key.clone(), item.clone()).is_none() {
            self.order.push(key);
        }
        Ok(item)
    }

    /// All stored items, in insertion order.
    #[must_use]
    pub fn get_all_items(&self) -> Vec<&Value> {
        self.order
            .iter()
            .filter_map(|key| self.items.get(key))
            .collect()
    }

    /// Look up an item by key.
    pub fn get_item_by_id(&self, key: &str) -> Result<&Value> {
        self.items
            .get(key)
            .ok_or_else(|| Error::NotFoundError(key.to_string()))
    }

    /// Replace the item stored under an existing key.
    ///
    /// The item's own `id` field is not checked against `key`; the caller
    /// picks the slot. Fails with [`Error::NotFoundError`] if the key is
    /// absent.
    pub fn update_item(&mut self, item: Value, key: &str) -> Result<Value> {
        match self.items.get_mut(key) {
            Some(stored) => {
                debug!("Updating item under key {key:?}");
                *stored = item.clone();
                Ok(item)
            }
            None => Err(Error::NotFoundError(key.to_string())),
        }
    }

    /// Remove the item stored under a key.
    pub fn delete_by_id(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.order.retain(|stored_key| stored_key != key);
            debug!("Deleted item under key {key:?}");
            Ok(())
        } else {
            Err(Error::NotFoundError(key.to_string()))
        }
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
