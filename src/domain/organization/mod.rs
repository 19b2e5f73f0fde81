// src/domain/organization/mod.rs
pub mod entity;
pub mod service;

pub use entity::{NewOrganization, Organization, OrganizationFilter, OrganizationUpdate};
pub use service::OrganizationService;
