// tests/support/mocks/mod.rs
pub mod kv;
pub mod organizations;
pub mod sink;
pub mod time;

pub use kv::{FailingKvStore, ScanFailingKvStore};
pub use organizations::{PendingOrganizationService, StubOrganizationService, id, sample_org};
pub use sink::{CapturedEntry, CapturingSink};
pub use time::{FixedClock, FixedIdGenerator, fixed_now};
