// src/application/mod.rs
pub mod instrumentation;
pub mod ports;
