//! Error taxonomy shared by every validation stage.

use stillwater::validation::Validation;
use stillwater::Semigroup;
use thiserror::Error;

use super::catalog::MeetingRoom;

/// Outcome of a validation stage: either the validated value or the first
/// error encountered.
pub type ValidationResult<T> = Validation<T, MeetingError>;

/// Errors produced while turning a raw payload into a [`Meeting`](super::Meeting).
///
/// The `Display` output of every variant is display text and part of the
/// public contract. Use [`MeetingError::code`] when a stable machine-readable
/// identifier is needed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MeetingError {
    #[error("Email domain must be '{expected}', '{domain}' is not valid.")]
    InvalidDomain { expected: String, domain: String },

    #[error("Username must be 'firstname.lastname', '{username}' is not valid.")]
    InvalidUsernameFormat { username: String },

    #[error("Unknown {kind} code: '{code}'")]
    UnknownCode { kind: &'static str, code: String },

    /// Structural failure. The message never reveals which rule failed; the
    /// cause is kept in `fault`.
    #[error("Raw object is not valid")]
    MalformedPayload { fault: StructuralFault },

    #[error("max capacity for {} is {} ({guests} guests required)", .room.venue(), .room.capacity())]
    CapacityExceeded { room: MeetingRoom, guests: u32 },
}

impl MeetingError {
    pub(crate) fn malformed(fault: StructuralFault) -> Self {
        Self::MalformedPayload { fault }
    }

    /// Stable snake_case identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDomain { .. } => "invalid_domain",
            Self::InvalidUsernameFormat { .. } => "invalid_username_format",
            Self::UnknownCode { .. } => "unknown_code",
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }

    /// The structural cause, for malformed payloads only.
    pub fn fault(&self) -> Option<StructuralFault> {
        match self {
            Self::MalformedPayload { fault } => Some(*fault),
            _ => None,
        }
    }
}

/// Pipelines are fail-fast: when two failures meet, the earlier one wins.
impl Semigroup for MeetingError {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

/// The specific structural rule a raw payload broke.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum StructuralFault {
    #[error("payload is not valid JSON")]
    Unparseable,

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("`type` is missing or not one of \"in_person\", \"online\"")]
    UnknownDiscriminator,

    #[error("a field has the wrong JSON type")]
    WrongFieldType,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("title is blank")]
    BlankTitle,

    #[error("contactEmail is not a syntactically valid email address")]
    InvalidEmail,

    #[error("`{0}` holds an unknown code")]
    UnknownCode(&'static str),

    #[error("nGuests must be at least 1")]
    NonPositiveGuests,

    #[error("nGuests is too large")]
    GuestCountTooLarge,

    #[error("videoLink is not a valid absolute URL")]
    InvalidVideoLink,
}

impl StructuralFault {
    /// Stable snake_case identifier of the fault.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unparseable => "unparseable",
            Self::NotAnObject => "not_an_object",
            Self::UnknownDiscriminator => "unknown_discriminator",
            Self::WrongFieldType => "wrong_field_type",
            Self::MissingField(_) => "missing_field",
            Self::BlankTitle => "blank_title",
            Self::InvalidEmail => "invalid_email",
            Self::UnknownCode(_) => "unknown_code",
            Self::NonPositiveGuests => "non_positive_guests",
            Self::GuestCountTooLarge => "guest_count_too_large",
            Self::InvalidVideoLink => "invalid_video_link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_message_is_opaque() {
        let error = MeetingError::malformed(StructuralFault::MissingField("title"));
        assert_eq!(error.to_string(), "Raw object is not valid");
        assert_eq!(error.fault(), Some(StructuralFault::MissingField("title")));
    }

    #[test]
    fn capacity_message_names_venue_and_capacity() {
        let error = MeetingError::CapacityExceeded {
            room: MeetingRoom::Amphitheater,
            guests: 201,
        };
        assert_eq!(
            error.to_string(),
            "max capacity for the amphitheater is 200 (201 guests required)"
        );
    }

    #[test]
    fn combine_keeps_first_error() {
        let first = MeetingError::InvalidUsernameFormat {
            username: "johndoe".to_string(),
        };
        let second = MeetingError::CapacityExceeded {
            room: MeetingRoom::Room101,
            guests: 21,
        };
        assert_eq!(first.clone().combine(second), first);
    }

    #[test]
    fn codes_are_distinct() {
        let errors = [
            MeetingError::InvalidDomain {
                expected: "acme.org".to_string(),
                domain: "gmail.com".to_string(),
            },
            MeetingError::InvalidUsernameFormat {
                username: "x".to_string(),
            },
            MeetingError::UnknownCode {
                kind: "meeting room",
                code: "huge".to_string(),
            },
            MeetingError::malformed(StructuralFault::Unparseable),
            MeetingError::CapacityExceeded {
                room: MeetingRoom::Room42,
                guests: 51,
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(MeetingError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors[1].fault().is_none());
    }
}
