// src/domain/organization/entity.rs
use crate::domain::{
    errors::{ClassifiedError, DomainResult},
    id::PlatformId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: PlatformId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    pub fn apply(&mut self, update: OrganizationUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrganization {
    pub name: String,
    pub description: String,
}

impl NewOrganization {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Lookup criteria. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationFilter {
    pub id: Option<PlatformId>,
    pub name: Option<String>,
    pub user_id: Option<PlatformId>,
}

impl OrganizationFilter {
    pub fn by_id(id: PlatformId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn for_user(user_id: PlatformId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.user_id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl OrganizationUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn describe(description: impl Into<String>) -> Self {
        Self {
            name: None,
            description: Some(description.into()),
        }
    }
}

/// Trims the name and rejects blank values.
pub fn validate_org_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ClassifiedError::invalid("org name is empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;

    #[test]
    fn apply_only_touches_set_fields() {
        let created = Utc::now();
        let mut org = Organization {
            id: PlatformId::new(1).unwrap(),
            name: "influx".into(),
            description: "metrics".into(),
            created_at: created,
            updated_at: created,
        };
        let later = created + chrono::Duration::seconds(5);
        org.apply(OrganizationUpdate::describe("time series"), later);
        assert_eq!(org.name, "influx");
        assert_eq!(org.description, "time series");
        assert_eq!(org.updated_at, later);
        assert_eq!(org.created_at, created);
    }

    #[test]
    fn blank_names_are_invalid() {
        assert_eq!(validate_org_name("  acme ").unwrap(), "acme");
        assert!(validate_org_name("   ").unwrap_err().is(ErrorKind::Invalid));
    }
}
