// src/infrastructure/organizations.rs
use crate::{
    application::ports::{ids::IdGenerator, time::Clock},
    domain::{
        errors::{ClassifiedError, DomainResult},
        find_options::{FindOptions, SortKey},
        id::PlatformId,
        organization::{
            NewOrganization, Organization, OrganizationFilter, OrganizationService,
            OrganizationUpdate, entity::validate_org_name,
        },
        resource_mapping::{ResourceType, UserResourceMappingFilter, UserResourceMappingService},
    },
};
use async_trait::async_trait;
use std::{
    collections::{BTreeMap, HashSet, btree_map::Entry},
    sync::{Arc, RwLock},
};

const ORG_OP: &str = "tenant/organization";

fn org_not_found() -> ClassifiedError {
    ClassifiedError::not_found("organization not found").with_op(ORG_OP)
}

fn poisoned() -> ClassifiedError {
    ClassifiedError::internal("organization store lock poisoned").with_op(ORG_OP)
}

/// Reference organization backend keeping everything in process memory.
///
/// Ownership lookups (`OrganizationFilter::user_id`) and the cleanup on delete
/// go through the user resource mapping service.
pub struct InMemoryOrganizationService {
    orgs: RwLock<BTreeMap<PlatformId, Organization>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    mappings: Arc<dyn UserResourceMappingService>,
}

impl InMemoryOrganizationService {
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        mappings: Arc<dyn UserResourceMappingService>,
    ) -> Self {
        Self {
            orgs: RwLock::new(BTreeMap::new()),
            clock,
            ids,
            mappings,
        }
    }

    async fn orgs_for_user(&self, user_id: PlatformId) -> DomainResult<HashSet<PlatformId>> {
        let mappings = self
            .mappings
            .find_mappings(UserResourceMappingFilter::for_user(user_id, ResourceType::Orgs))
            .await?;
        Ok(mappings.into_iter().map(|m| m.resource_id).collect())
    }

    fn matching(
        &self,
        filter: &OrganizationFilter,
        allowed: Option<&HashSet<PlatformId>>,
    ) -> DomainResult<Vec<Organization>> {
        let orgs = self.orgs.read().map_err(|_| poisoned())?;
        Ok(orgs
            .values()
            .filter(|org| filter.id.is_none_or(|id| id == org.id))
            .filter(|org| filter.name.as_deref().is_none_or(|name| name == org.name))
            .filter(|org| allowed.is_none_or(|ids| ids.contains(&org.id)))
            .cloned()
            .collect())
    }
}

fn sort(orgs: &mut [Organization], opts: &FindOptions) {
    match opts.sort_by {
        Some(SortKey::Name) => orgs.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::CreatedAt) => orgs.sort_by_key(|org| org.created_at),
        Some(SortKey::Id) | None => orgs.sort_by_key(|org| org.id),
    }
    if opts.descending {
        orgs.reverse();
    }
}

#[async_trait]
impl OrganizationService for InMemoryOrganizationService {
    async fn create_organization(&self, new_org: NewOrganization) -> DomainResult<Organization> {
        let name = validate_org_name(&new_org.name)?;
        let now = self.clock.now();
        let org = Organization {
            id: self.ids.next_id(),
            name,
            description: new_org.description,
            created_at: now,
            updated_at: now,
        };
        let mut orgs = self.orgs.write().map_err(|_| poisoned())?;
        match orgs.entry(org.id) {
            Entry::Vacant(slot) => {
                slot.insert(org.clone());
                Ok(org)
            }
            Entry::Occupied(_) => Err(ClassifiedError::internal(format!(
                "organization id {} is already in use",
                org.id
            ))
            .with_op(ORG_OP)),
        }
    }

    async fn find_organization_by_id(&self, id: PlatformId) -> DomainResult<Organization> {
        let orgs = self.orgs.read().map_err(|_| poisoned())?;
        orgs.get(&id).cloned().ok_or_else(org_not_found)
    }

    async fn find_organization(&self, filter: OrganizationFilter) -> DomainResult<Organization> {
        if filter.is_empty() {
            return Err(ClassifiedError::invalid("no filter parameters provided").with_op(ORG_OP));
        }
        if let (Some(id), None, None) = (filter.id, &filter.name, filter.user_id) {
            return self.find_organization_by_id(id).await;
        }
        let (orgs, _) = self
            .find_organizations(filter, FindOptions::default().with_limit(1))
            .await?;
        orgs.into_iter().next().ok_or_else(org_not_found)
    }

    async fn find_organizations(
        &self,
        filter: OrganizationFilter,
        opts: FindOptions,
    ) -> DomainResult<(Vec<Organization>, usize)> {
        let allowed = match filter.user_id {
            Some(user_id) => Some(self.orgs_for_user(user_id).await?),
            None => None,
        };
        let mut orgs = self.matching(&filter, allowed.as_ref())?;
        sort(&mut orgs, &opts);
        let page = opts.page(orgs);
        let count = page.len();
        Ok((page, count))
    }

    async fn update_organization(
        &self,
        id: PlatformId,
        mut update: OrganizationUpdate,
    ) -> DomainResult<Organization> {
        if let Some(name) = update.name.take() {
            update.name = Some(validate_org_name(&name)?);
        }
        let now = self.clock.now();
        let mut orgs = self.orgs.write().map_err(|_| poisoned())?;
        let org = orgs.get_mut(&id).ok_or_else(org_not_found)?;
        org.apply(update, now);
        Ok(org.clone())
    }

    // Mappings go first so a failed cleanup leaves the org in place and the
    // delete can be retried.
    async fn delete_organization(&self, id: PlatformId) -> DomainResult<()> {
        {
            let orgs = self.orgs.read().map_err(|_| poisoned())?;
            if !orgs.contains_key(&id) {
                return Err(org_not_found());
            }
        }
        let owners = self
            .mappings
            .find_mappings(UserResourceMappingFilter::for_resource(id, ResourceType::Orgs))
            .await?;
        for mapping in owners {
            self.mappings
                .delete_mapping(mapping.resource_id, mapping.user_id, mapping.resource_type)
                .await?;
        }
        let mut orgs = self.orgs.write().map_err(|_| poisoned())?;
        orgs.remove(&id).map(|_| ()).ok_or_else(org_not_found)
    }
}
