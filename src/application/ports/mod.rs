// src/application/ports/mod.rs
pub mod ids;
pub mod kv;
pub mod logging;
pub mod time;
