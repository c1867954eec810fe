//! Properties document loading
//!
//! The document is re-read and re-parsed on every call. Its shape is not
//! inspected: whatever JSON value is on disk is handed back. Numbers keep
//! their literal text (`arbitrary_precision`) and nesting depth is not
//! limited; the parser grows its stack through `serde_stacker` instead.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::storage::StorageBackend;
use crate::Result;

/// Default file name of the properties document
pub const DEFAULT_DOCUMENT_KEY: &str = "properties.json";

/// Loads the properties document from a storage backend
pub struct PropertyCatalog {
    storage: Arc<dyn StorageBackend>,
    key: String,
}

impl PropertyCatalog {
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Key of the document within the backend
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where the document lives, e.g. an absolute file path
    pub fn location(&self) -> String {
        self.storage.location(&self.key)
    }

    /// Read and parse the document.
    ///
    /// Errors are `NotFound` when the backend has no such object,
    /// `InvalidJson` when the bytes do not parse and `Io` for anything else.
    pub async fn load(&self) -> Result<Value> {
        let bytes = self.storage.get(&self.key).await?;
        parse_document(&bytes)
    }

    pub async fn is_present(&self) -> Result<bool> {
        self.storage.exists(&self.key).await
    }
}

fn parse_document(bytes: &[u8]) -> Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
