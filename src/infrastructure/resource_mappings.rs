// src/infrastructure/resource_mappings.rs
use crate::{
    application::ports::kv::KvStore,
    domain::{
        errors::DomainResult,
        id::PlatformId,
        resource_mapping::{
            ResourceType, UserResourceMapping, UserResourceMappingFilter,
            UserResourceMappingService,
            errors::{
                corrupt_urm, invalid_urm_id, non_unique_mapping, unavailable_urm_service,
                unprocessable_mapping, urm_not_found,
            },
        },
    },
};
use async_trait::async_trait;
use std::sync::Arc;

pub const URM_BUCKET: &str = "userresourcemappingsv1";

const ID_LEN: usize = 16;

type KeyParts = (PlatformId, PlatformId, ResourceType);

/// Keys are the resource id, the user id and the resource type, ids hex
/// encoded, so a prefix scan on the resource id yields every user mapped to
/// it and a user may hold one mapping per resource type.
fn mapping_key(
    resource_id: PlatformId,
    user_id: PlatformId,
    resource_type: ResourceType,
) -> Vec<u8> {
    format!("{resource_id}{user_id}{resource_type}").into_bytes()
}

fn decode_key(key: &[u8]) -> DomainResult<KeyParts> {
    let key = std::str::from_utf8(key).map_err(|_| invalid_urm_id())?;
    let resource = key.get(..ID_LEN).ok_or_else(invalid_urm_id)?;
    let user = key.get(ID_LEN..ID_LEN * 2).ok_or_else(invalid_urm_id)?;
    let kind = key.get(ID_LEN * 2..).ok_or_else(invalid_urm_id)?;
    let resource_id: PlatformId = resource.parse().map_err(|_| invalid_urm_id())?;
    let user_id: PlatformId = user.parse().map_err(|_| invalid_urm_id())?;
    let resource_type: ResourceType = kind.parse().map_err(|_| invalid_urm_id())?;
    Ok((resource_id, user_id, resource_type))
}

fn decode_mapping(key: &[u8], value: &[u8]) -> DomainResult<UserResourceMapping> {
    let (resource_id, user_id, resource_type) = decode_key(key)?;
    let mapping: UserResourceMapping = serde_json::from_slice(value).map_err(corrupt_urm)?;
    if (mapping.resource_id, mapping.user_id, mapping.resource_type)
        != (resource_id, user_id, resource_type)
    {
        return Err(corrupt_urm(format!(
            "record for key {resource_id}{user_id}{resource_type} describes {}{}{}",
            mapping.resource_id, mapping.user_id, mapping.resource_type
        )));
    }
    Ok(mapping)
}

/// User resource mappings stored as JSON documents in a [`KvStore`].
pub struct KvUserResourceMappingService {
    kv: Arc<dyn KvStore>,
}

impl KvUserResourceMappingService {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl UserResourceMappingService for KvUserResourceMappingService {
    async fn create_mapping(&self, mapping: UserResourceMapping) -> DomainResult<()> {
        let value = serde_json::to_vec(&mapping).map_err(unprocessable_mapping)?;
        let key = mapping_key(mapping.resource_id, mapping.user_id, mapping.resource_type);
        let inserted = self
            .kv
            .insert_new(URM_BUCKET, key, value)
            .await
            .map_err(unavailable_urm_service)?;
        if !inserted {
            return Err(non_unique_mapping(mapping.user_id));
        }
        Ok(())
    }

    async fn find_mappings(
        &self,
        filter: UserResourceMappingFilter,
    ) -> DomainResult<Vec<UserResourceMapping>> {
        if let (Some(resource_id), Some(user_id), Some(resource_type)) =
            (filter.resource_id, filter.user_id, filter.resource_type)
        {
            let key = mapping_key(resource_id, user_id, resource_type);
            let value = self
                .kv
                .get(URM_BUCKET, &key)
                .await
                .map_err(unavailable_urm_service)?;
            return match value {
                Some(value) => {
                    let mapping = decode_mapping(&key, &value)?;
                    Ok(filter.matches(&mapping).then_some(mapping).into_iter().collect())
                }
                None => Ok(Vec::new()),
            };
        }

        let prefix = filter
            .resource_id
            .map(|id| id.to_string().into_bytes())
            .unwrap_or_default();
        let pairs = self
            .kv
            .scan_prefix(URM_BUCKET, &prefix)
            .await
            .map_err(unavailable_urm_service)?;

        let mut found = Vec::new();
        for (key, value) in pairs {
            let mapping = decode_mapping(&key, &value)?;
            if filter.matches(&mapping) {
                found.push(mapping);
            }
        }
        Ok(found)
    }

    async fn delete_mapping(
        &self,
        resource_id: PlatformId,
        user_id: PlatformId,
        resource_type: ResourceType,
    ) -> DomainResult<()> {
        let removed = self
            .kv
            .delete(URM_BUCKET, &mapping_key(resource_id, user_id, resource_type))
            .await
            .map_err(unavailable_urm_service)?;
        if !removed {
            return Err(urm_not_found());
        }
        Ok(())
    }
}
