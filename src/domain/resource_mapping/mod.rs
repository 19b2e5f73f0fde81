// src/domain/resource_mapping/mod.rs
pub mod entity;
pub mod errors;
pub mod service;

pub use entity::{ResourceType, UserResourceMapping, UserResourceMappingFilter, UserType};
pub use service::UserResourceMappingService;
