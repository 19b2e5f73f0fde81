// src/domain/resource_mapping/entity.rs
use crate::domain::{errors::ClassifiedError, id::PlatformId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Orgs,
    Buckets,
    Dashboards,
    Tasks,
    Users,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Orgs => "orgs",
            ResourceType::Buckets => "buckets",
            ResourceType::Dashboards => "dashboards",
            ResourceType::Tasks => "tasks",
            ResourceType::Users => "users",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ClassifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orgs" => Ok(ResourceType::Orgs),
            "buckets" => Ok(ResourceType::Buckets),
            "dashboards" => Ok(ResourceType::Dashboards),
            "tasks" => Ok(ResourceType::Tasks),
            "users" => Ok(ResourceType::Users),
            other => Err(ClassifiedError::invalid(format!(
                "unknown resource type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Owner,
    Member,
}

/// Grants a user a role over one resource. At most one mapping exists per
/// `(user_id, resource_id, resource_type)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResourceMapping {
    pub user_id: PlatformId,
    pub user_type: UserType,
    pub resource_type: ResourceType,
    pub resource_id: PlatformId,
}

impl UserResourceMapping {
    pub fn owner(user_id: PlatformId, resource_type: ResourceType, resource_id: PlatformId) -> Self {
        Self {
            user_id,
            user_type: UserType::Owner,
            resource_type,
            resource_id,
        }
    }

    pub fn member(user_id: PlatformId, resource_type: ResourceType, resource_id: PlatformId) -> Self {
        Self {
            user_id,
            user_type: UserType::Member,
            resource_type,
            resource_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserResourceMappingFilter {
    pub user_id: Option<PlatformId>,
    pub resource_id: Option<PlatformId>,
    pub resource_type: Option<ResourceType>,
    pub user_type: Option<UserType>,
}

impl UserResourceMappingFilter {
    pub fn for_user(user_id: PlatformId, resource_type: ResourceType) -> Self {
        Self {
            user_id: Some(user_id),
            resource_type: Some(resource_type),
            ..Self::default()
        }
    }

    pub fn for_resource(resource_id: PlatformId, resource_type: ResourceType) -> Self {
        Self {
            resource_id: Some(resource_id),
            resource_type: Some(resource_type),
            ..Self::default()
        }
    }

    pub fn matches(&self, mapping: &UserResourceMapping) -> bool {
        self.user_id.is_none_or(|id| id == mapping.user_id)
            && self.resource_id.is_none_or(|id| id == mapping.resource_id)
            && self.resource_type.is_none_or(|t| t == mapping.resource_type)
            && self.user_type.is_none_or(|t| t == mapping.user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u64) -> PlatformId {
        PlatformId::new(v).unwrap()
    }

    #[test]
    fn filter_requires_every_set_field() {
        let mapping = UserResourceMapping::owner(id(1), ResourceType::Orgs, id(2));
        assert!(UserResourceMappingFilter::default().matches(&mapping));
        assert!(UserResourceMappingFilter::for_user(id(1), ResourceType::Orgs).matches(&mapping));
        assert!(!UserResourceMappingFilter::for_user(id(1), ResourceType::Buckets).matches(&mapping));
        let members_only = UserResourceMappingFilter {
            user_type: Some(UserType::Member),
            ..UserResourceMappingFilter::default()
        };
        assert!(!members_only.matches(&mapping));
    }

    #[test]
    fn resource_type_parses_its_own_label() {
        for t in [
            ResourceType::Orgs,
            ResourceType::Buckets,
            ResourceType::Dashboards,
            ResourceType::Tasks,
            ResourceType::Users,
        ] {
            assert_eq!(t.as_str().parse::<ResourceType>().unwrap(), t);
        }
        assert!("widgets".parse::<ResourceType>().is_err());
    }

    #[test]
    fn json_uses_camel_case_and_hex_ids() {
        let mapping = UserResourceMapping::member(id(10), ResourceType::Buckets, id(11));
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["userId"], "000000000000000a");
        assert_eq!(json["resourceType"], "buckets");
        assert_eq!(json["userType"], "member");
    }
}
