pub mod json_backend;
pub mod ledger_store;
pub mod memory;

use crate::errors::Result;

/// Well-known keys in the persisted key-value layout.
pub mod keys {
    /// JSON array of ledger entries.
    pub const TRANSACTIONS: &str = "transactions";
    /// Presentation preference, `"enabled"` or `"disabled"`.
    pub const DARK_MODE: &str = "darkMode";
}

/// Abstraction over string key-value persistence (a local-storage analogue).
///
/// Values are opaque strings; callers own their encoding. Writes are
/// last-call-wins with no transactional guarantee across keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

pub use json_backend::JsonFileStore;
pub use ledger_store::LedgerStore;
pub use memory::MemoryStore;
