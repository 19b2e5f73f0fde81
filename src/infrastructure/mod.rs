// src/infrastructure/mod.rs
pub mod ids;
pub mod kv;
pub mod logging;
pub mod organizations;
pub mod resource_mappings;
pub mod telemetry;
#[cfg(test)]
mod test_writer;
pub mod time;

pub use ids::SequentialIdGenerator;
pub use kv::InMemoryKvStore;
pub use logging::TracingLogSink;
pub use organizations::InMemoryOrganizationService;
pub use resource_mappings::KvUserResourceMappingService;
pub use time::SystemClock;
