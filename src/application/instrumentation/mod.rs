// src/application/instrumentation/mod.rs
pub mod organization;
pub mod timer;

pub use organization::OrganizationLogger;
pub use timer::CallTimer;
