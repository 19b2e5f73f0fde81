// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use tenant_core::application::ports::{ids::IdGenerator, time::Clock};
use tenant_core::domain::id::PlatformId;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by fixtures.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Default, Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Hands out the same id every time.
pub struct FixedIdGenerator(pub PlatformId);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> PlatformId {
        self.0
    }
}
