//! Corporate contact identities derived from email addresses.

use serde::Serialize;
use stillwater::validation::Validation;

use super::error::{MeetingError, ValidationResult};

/// The organization domain accepted by default.
pub const CORPORATE_DOMAIN: &str = "acme.org";

/// A person inside the organization, identified by a
/// `firstname.lastname@<domain>` address.
///
/// Only obtainable through [`CorporateContact::parse`] or
/// [`validate_contact`], so an instance never holds an invalid email.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateContact {
    first_name: String,
    last_name: String,
    email: String,
}

impl CorporateContact {
    /// Parse `email`, accepting only addresses under `domain`.
    ///
    /// The first name has its first letter capitalized, the last name is
    /// upper-cased and the email is kept verbatim.
    ///
    /// # Example
    ///
    /// ```rust
    /// use agenda::core::CorporateContact;
    ///
    /// let contact = CorporateContact::parse("jane.smith@example.com", "example.com")
    ///     .into_result()
    ///     .unwrap();
    /// assert_eq!(contact.first_name(), "Jane");
    /// assert_eq!(contact.last_name(), "SMITH");
    /// ```
    pub fn parse(email: &str, domain: &str) -> ValidationResult<Self> {
        let (username, email_domain) = email.split_once('@').unwrap_or((email, ""));

        if email_domain != domain {
            return Validation::failure(MeetingError::InvalidDomain {
                expected: domain.to_string(),
                domain: email_domain.to_string(),
            });
        }

        let segments: Vec<&str> = username.split('.').collect();
        match segments.as_slice() {
            [first, last] if !first.is_empty() && !last.is_empty() => {
                Validation::success(Self {
                    first_name: capitalize(first),
                    last_name: last.to_uppercase(),
                    email: email.to_string(),
                })
            }
            _ => Validation::failure(MeetingError::InvalidUsernameFormat {
                username: username.to_string(),
            }),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// `"<FirstName> <LASTNAME>"`, as used in confirmation messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validate a contact email against the default [`CORPORATE_DOMAIN`].
pub fn validate_contact(email: &str) -> ValidationResult<CorporateContact> {
    CorporateContact::parse(email, CORPORATE_DOMAIN)
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
