// src/domain/id.rs
use crate::domain::errors::{ClassifiedError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const ENCODED_LEN: usize = 16;

/// Non-zero 64-bit identifier, encoded as 16 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformId(u64);

impl PlatformId {
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            Err(ClassifiedError::invalid("id cannot be zero"))
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for PlatformId {
    type Err = ClassifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ENCODED_LEN {
            return Err(ClassifiedError::invalid(format!(
                "id must have a length of {ENCODED_LEN} bytes"
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ClassifiedError::invalid("id must be hex encoded"));
        }
        let value = u64::from_str_radix(s, 16)
            .map_err(|err| ClassifiedError::invalid("id must be hex encoded").with_cause(err))?;
        Self::new(value)
    }
}

impl TryFrom<String> for PlatformId {
    type Error = ClassifiedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlatformId> for String {
    fn from(value: PlatformId) -> Self {
        value.to_string()
    }
}
