// src/domain/resource_mapping/service.rs
use crate::domain::{
    errors::DomainResult,
    id::PlatformId,
    resource_mapping::entity::{ResourceType, UserResourceMapping, UserResourceMappingFilter},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserResourceMappingService: Send + Sync {
    async fn create_mapping(&self, mapping: UserResourceMapping) -> DomainResult<()>;

    async fn find_mappings(
        &self,
        filter: UserResourceMappingFilter,
    ) -> DomainResult<Vec<UserResourceMapping>>;

    async fn delete_mapping(
        &self,
        resource_id: PlatformId,
        user_id: PlatformId,
        resource_type: ResourceType,
    ) -> DomainResult<()>;
}
