// src/infrastructure/ids.rs
use crate::{application::ports::ids::IdGenerator, domain::id::PlatformId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing ids starting at the seed. Zero is skipped.
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> PlatformId {
        loop {
            let value = self.next.fetch_add(1, Ordering::Relaxed);
            if let Ok(id) = PlatformId::new(value) {
                return id;
            }
        }
    }
}
