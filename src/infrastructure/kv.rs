// src/infrastructure/kv.rs
use crate::application::ports::kv::{KvError, KvPair, KvStore};
use async_trait::async_trait;
use std::{
    collections::{BTreeMap, HashMap},
    sync::RwLock,
};

type Bucket = BTreeMap<Vec<u8>, Vec<u8>>;

#[derive(Default)]
pub struct InMemoryKvStore {
    buckets: RwLock<HashMap<String, Bucket>>,
}

fn poisoned() -> KvError {
    KvError("in-memory store lock poisoned".into())
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, KvError> {
        let buckets = self.buckets.read().map_err(|_| poisoned())?;
        Ok(buckets.get(bucket).and_then(|b| b.get(key).cloned()))
    }

    async fn insert_new(
        &self,
        bucket: &str,
        key: Vec<u8>,
        value: Vec<u8>,
    ) -> Result<bool, KvError> {
        let mut buckets = self.buckets.write().map_err(|_| poisoned())?;
        let entries = buckets.entry(bucket.to_string()).or_default();
        if entries.contains_key(&key) {
            return Ok(false);
        }
        entries.insert(key, value);
        Ok(true)
    }

    async fn delete(&self, bucket: &str, key: &[u8]) -> Result<bool, KvError> {
        let mut buckets = self.buckets.write().map_err(|_| poisoned())?;
        Ok(buckets
            .get_mut(bucket)
            .is_some_and(|b| b.remove(key).is_some()))
    }

    async fn scan_prefix(&self, bucket: &str, prefix: &[u8]) -> Result<Vec<KvPair>, KvError> {
        let buckets = self.buckets.read().map_err(|_| poisoned())?;
        let Some(entries) = buckets.get(bucket) else {
            return Ok(Vec::new());
        };
        Ok(entries
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
