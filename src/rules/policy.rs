//! Booking policy configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::builder::PolicyBuilder;
use crate::core::CORPORATE_DOMAIN;

/// Errors that can occur when building or loading a [`BookingPolicy`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The JSON document could not be read as a policy
    #[error("Policy deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The corporate domain is blank or not a bare domain name
    #[error("Invalid corporate domain '{0}'")]
    InvalidDomain(String),
}

/// Settings for business-rule validation.
///
/// Only the accepted contact domain is configurable. Room capacities and wire
/// codes are fixed by the wire contract.
///
/// Loadable from JSON with camelCase keys; missing keys take their default
/// and unknown keys are rejected.
///
/// # Example
///
/// ```rust
/// use agenda::rules::BookingPolicy;
///
/// let policy = BookingPolicy::from_json(r#"{"corporateDomain": "example.com"}"#).unwrap();
/// assert_eq!(policy.corporate_domain(), "example.com");
///
/// let defaults = BookingPolicy::from_json("{}").unwrap();
/// assert_eq!(defaults, BookingPolicy::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BookingPolicy {
    pub(crate) corporate_domain: String,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            corporate_domain: CORPORATE_DOMAIN.to_string(),
        }
    }
}

impl BookingPolicy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// Domain every contact email must belong to.
    pub fn corporate_domain(&self) -> &str {
        &self.corporate_domain
    }

    /// Load a policy from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(raw)
            .map_err(|error| PolicyError::DeserializationFailed(error.to_string()))?;
        check_domain(&policy.corporate_domain)?;
        Ok(policy)
    }
}

pub(crate) fn check_domain(domain: &str) -> Result<(), PolicyError> {
    let malformed = domain.is_empty()
        || domain.contains('@')
        || domain.chars().any(char::is_whitespace);
    if malformed {
        return Err(PolicyError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}
