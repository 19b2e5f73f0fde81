// src/application/ports/kv.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("kv store unavailable: {0}")]
pub struct KvError(pub String);

pub type KvPair = (Vec<u8>, Vec<u8>);

/// Byte-oriented store partitioned into named buckets. Buckets spring into
/// existence on first write.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, KvError>;

    /// Writes only when `key` is absent. Returns `false` if it already existed.
    async fn insert_new(&self, bucket: &str, key: Vec<u8>, value: Vec<u8>)
    -> Result<bool, KvError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, bucket: &str, key: &[u8]) -> Result<bool, KvError>;

    /// All pairs whose key starts with `prefix`, in key order.
    async fn scan_prefix(&self, bucket: &str, prefix: &[u8]) -> Result<Vec<KvPair>, KvError>;
}
