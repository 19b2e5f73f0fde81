// src/application/instrumentation/organization.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::{
        instrumentation::timer::CallTimer,
        ports::logging::{LogField, LogSink},
    },
    domain::{
        errors::DomainResult,
        find_options::FindOptions,
        id::PlatformId,
        organization::{
            NewOrganization, Organization, OrganizationFilter, OrganizationService,
            OrganizationUpdate,
        },
    },
};

/// Logging middleware for an [`OrganizationService`].
///
/// Every call is forwarded untouched to the wrapped service; its duration and
/// outcome are written to the sink as one entry (info on success, error on
/// failure). Results and errors come back exactly as the wrapped service
/// produced them.
pub struct OrganizationLogger {
    sink: Arc<dyn LogSink>,
    inner: Arc<dyn OrganizationService>,
}

impl OrganizationLogger {
    pub fn new(sink: Arc<dyn LogSink>, inner: Arc<dyn OrganizationService>) -> Self {
        Self { sink, inner }
    }
}

#[async_trait]
impl OrganizationService for OrganizationLogger {
    async fn create_organization(&self, new_org: NewOrganization) -> DomainResult<Organization> {
        let mut timer = CallTimer::start(self.sink.as_ref(), "create_organization");
        let result = self.inner.create_organization(new_org).await;
        timer.record(&result, "org create", || "failed to create org".into());
        result
    }

    async fn find_organization_by_id(&self, id: PlatformId) -> DomainResult<Organization> {
        let mut timer = CallTimer::start(self.sink.as_ref(), "find_organization_by_id");
        let result = self.inner.find_organization_by_id(id).await;
        timer.record(&result, "org find by ID", || {
            format!("failed to find org with ID {id}")
        });
        result
    }

    async fn find_organization(&self, filter: OrganizationFilter) -> DomainResult<Organization> {
        let mut timer = CallTimer::start(self.sink.as_ref(), "find_organization")
            .with_context(LogField::text("filter", format!("{filter:?}")));
        let result = self.inner.find_organization(filter).await;
        timer.record(&result, "org find", || {
            "failed to find org matching the given filter".into()
        });
        result
    }

    async fn find_organizations(
        &self,
        filter: OrganizationFilter,
        opts: FindOptions,
    ) -> DomainResult<(Vec<Organization>, usize)> {
        let mut timer = CallTimer::start(self.sink.as_ref(), "find_organizations")
            .with_context(LogField::text("filter", format!("{filter:?}")));
        let result = self.inner.find_organizations(filter, opts).await;
        timer.record(&result, "orgs find", || {
            "failed to find org matching the given filter".into()
        });
        result
    }

    async fn update_organization(
        &self,
        id: PlatformId,
        update: OrganizationUpdate,
    ) -> DomainResult<Organization> {
        let mut timer = CallTimer::start(self.sink.as_ref(), "update_organization")
            .with_context(LogField::text("id", id));
        let result = self.inner.update_organization(id, update).await;
        timer.record(&result, "org update", || "failed to update org".into());
        result
    }

    async fn delete_organization(&self, id: PlatformId) -> DomainResult<()> {
        let mut timer = CallTimer::start(self.sink.as_ref(), "delete_organization");
        let result = self.inner.delete_organization(id).await;
        timer.record(&result, "org delete", || {
            format!("failed to delete org with ID {id}")
        });
        result
    }
}
