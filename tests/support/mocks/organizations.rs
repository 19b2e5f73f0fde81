// tests/support/mocks/organizations.rs
use async_trait::async_trait;
use std::sync::Mutex;
use tenant_core::domain::{
    errors::{ClassifiedError, DomainResult},
    find_options::FindOptions,
    id::PlatformId,
    organization::{
        NewOrganization, Organization, OrganizationFilter, OrganizationService, OrganizationUpdate,
    },
};

use super::time::fixed_now;

pub fn id(value: u64) -> PlatformId {
    PlatformId::new(value).unwrap()
}

pub fn sample_org(value: u64) -> Organization {
    Organization {
        id: id(value),
        name: format!("org-{value}"),
        description: String::new(),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

/// Answers every call with a canned organization, or with a freshly built
/// error when `failure` is set. Records the options handed to list calls.
#[derive(Default)]
pub struct StubOrganizationService {
    failure: Option<fn() -> ClassifiedError>,
    last_opts: Mutex<Option<FindOptions>>,
}

impl StubOrganizationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: fn() -> ClassifiedError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn last_opts(&self) -> Option<FindOptions> {
        self.last_opts.lock().unwrap().clone()
    }

    fn answer<T>(&self, value: T) -> DomainResult<T> {
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl OrganizationService for StubOrganizationService {
    async fn create_organization(&self, new_org: NewOrganization) -> DomainResult<Organization> {
        let mut org = sample_org(1);
        org.name = new_org.name;
        org.description = new_org.description;
        self.answer(org)
    }

    async fn find_organization_by_id(&self, id: PlatformId) -> DomainResult<Organization> {
        self.answer(sample_org(id.get()))
    }

    async fn find_organization(&self, _filter: OrganizationFilter) -> DomainResult<Organization> {
        self.answer(sample_org(2))
    }

    async fn find_organizations(
        &self,
        _filter: OrganizationFilter,
        opts: FindOptions,
    ) -> DomainResult<(Vec<Organization>, usize)> {
        *self.last_opts.lock().unwrap() = Some(opts);
        self.answer((vec![sample_org(3), sample_org(4)], 2))
    }

    async fn update_organization(
        &self,
        id: PlatformId,
        update: OrganizationUpdate,
    ) -> DomainResult<Organization> {
        let mut org = sample_org(id.get());
        org.apply(update, fixed_now());
        self.answer(org)
    }

    async fn delete_organization(&self, _id: PlatformId) -> DomainResult<()> {
        self.answer(())
    }
}

/// Never completes. Used to observe what happens when callers give up.
#[derive(Default)]
pub struct PendingOrganizationService;

#[async_trait]
impl OrganizationService for PendingOrganizationService {
    async fn create_organization(&self, _new_org: NewOrganization) -> DomainResult<Organization> {
        std::future::pending().await
    }

    async fn find_organization_by_id(&self, _id: PlatformId) -> DomainResult<Organization> {
        std::future::pending().await
    }

    async fn find_organization(&self, _filter: OrganizationFilter) -> DomainResult<Organization> {
        std::future::pending().await
    }

    async fn find_organizations(
        &self,
        _filter: OrganizationFilter,
        _opts: FindOptions,
    ) -> DomainResult<(Vec<Organization>, usize)> {
        std::future::pending().await
    }

    async fn update_organization(
        &self,
        _id: PlatformId,
        _update: OrganizationUpdate,
    ) -> DomainResult<Organization> {
        std::future::pending().await
    }

    async fn delete_organization(&self, _id: PlatformId) -> DomainResult<()> {
        std::future::pending().await
    }
}
