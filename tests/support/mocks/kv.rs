// tests/support/mocks/kv.rs
use async_trait::async_trait;
use tenant_core::application::ports::kv::{KvError, KvPair, KvStore};
use tenant_core::infrastructure::InMemoryKvStore;

/// Store whose backend can never be reached.
#[derive(Default)]
pub struct FailingKvStore;

fn refused() -> KvError {
    KvError("connection refused".into())
}

#[async_trait]
impl KvStore for FailingKvStore {
    async fn get(&self, _bucket: &str, _key: &[u8]) -> Result<Option<Vec<u8>>, KvError> {
        Err(refused())
    }

    async fn insert_new(
        &self,
        _bucket: &str,
        _key: Vec<u8>,
        _value: Vec<u8>,
    ) -> Result<bool, KvError> {
        Err(refused())
    }

    async fn delete(&self, _bucket: &str, _key: &[u8]) -> Result<bool, KvError> {
        Err(refused())
    }

    async fn scan_prefix(&self, _bucket: &str, _prefix: &[u8]) -> Result<Vec<KvPair>, KvError> {
        Err(refused())
    }
}

/// Working store whose prefix scans fail, so lookups by resource break while
/// point reads and writes still succeed.
#[derive(Default)]
pub struct ScanFailingKvStore {
    inner: InMemoryKvStore,
}

#[async_trait]
impl KvStore for ScanFailingKvStore {
    async fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, KvError> {
        self.inner.get(bucket, key).await
    }

    async fn insert_new(
        &self,
        bucket: &str,
        key: Vec<u8>,
        value: Vec<u8>,
    ) -> Result<bool, KvError> {
        self.inner.insert_new(bucket, key, value).await
    }

    async fn delete(&self, bucket: &str, key: &[u8]) -> Result<bool, KvError> {
        self.inner.delete(bucket, key).await
    }

    async fn scan_prefix(&self, _bucket: &str, _prefix: &[u8]) -> Result<Vec<KvPair>, KvError> {
        Err(refused())
    }
}
