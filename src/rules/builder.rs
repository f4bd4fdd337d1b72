//! Builder API for booking policies.

use super::policy::{check_domain, BookingPolicy, PolicyError};

/// Builder for creating a [`BookingPolicy`]
pub struct PolicyBuilder {
    corporate_domain: Option<String>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            corporate_domain: None,
        }
    }

    /// Set the domain contact emails must belong to
    pub fn corporate_domain(mut self, domain: impl Into<String>) -> Self {
        self.corporate_domain = Some(domain.into());
        self
    }

    /// Build the policy, falling back to defaults for unset values
    pub fn build(self) -> Result<BookingPolicy, PolicyError> {
        let policy = match self.corporate_domain {
            Some(corporate_domain) => BookingPolicy { corporate_domain },
            None => BookingPolicy::default(),
        };
        check_domain(&policy.corporate_domain)?;
        Ok(policy)
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
