// src/domain/mod.rs
pub mod errors;
pub mod find_options;
pub mod id;
pub mod organization;
pub mod resource_mapping;
