// src/application/ports/ids.rs
use crate::domain::id::PlatformId;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> PlatformId;
}
