// src/domain/organization/service.rs
use crate::domain::{
    errors::DomainResult,
    find_options::FindOptions,
    id::PlatformId,
    organization::entity::{NewOrganization, Organization, OrganizationFilter, OrganizationUpdate},
};
use async_trait::async_trait;

/// The operation set every organization backend provides, and that
/// decorators such as the logging middleware re-expose unchanged.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    async fn create_organization(&self, new_org: NewOrganization) -> DomainResult<Organization>;

    async fn find_organization_by_id(&self, id: PlatformId) -> DomainResult<Organization>;

    async fn find_organization(&self, filter: OrganizationFilter) -> DomainResult<Organization>;

    /// Returns the page of matches and its length.
    async fn find_organizations(
        &self,
        filter: OrganizationFilter,
        opts: FindOptions,
    ) -> DomainResult<(Vec<Organization>, usize)>;

    async fn update_organization(
        &self,
        id: PlatformId,
        update: OrganizationUpdate,
    ) -> DomainResult<Organization>;

    async fn delete_organization(&self, id: PlatformId) -> DomainResult<()>;
}
