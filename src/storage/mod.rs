//! Storage abstraction layer
//!
//! The service only ever reads; backends expose lookups by key.

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

pub mod local;

/// Storage backend trait
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read object from storage. A missing object is reported as `Error::NotFound`.
    async fn get(&self, key: &str) -> Result<Bytes>;

    /// Check if a readable object exists under `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Human readable location of an object, for logs and health output
    fn location(&self, key: &str) -> String;
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local { root_path: String },
}

/// Create storage backend from config
pub fn create_storage(config: StorageConfig) -> Box<dyn StorageBackend> {
    match config {
        StorageConfig::Local { root_path } => Box::new(local::LocalStorage::new(root_path)),
    }
}
