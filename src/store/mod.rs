pub mod file;
pub mod keys;
pub mod memory;

use serde_json::Value;

use crate::error::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed JSON storage. A `set` either fully replaces the value or has
/// no effect.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
