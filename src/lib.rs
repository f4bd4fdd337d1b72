//! Agenda: typed meeting bookings from untyped payloads
//!
//! Agenda follows Stillwater's "pure core, imperative shell" philosophy. A raw
//! JSON payload goes through two validation stages in strict order, and the
//! result is either a strongly-typed [`Meeting`] or the first error found:
//!
//! 1. **Structural** ([`framework`]): shape, required fields, email and URL
//!    syntax, room and platform codes.
//! 2. **Business** ([`rules`]): corporate contact rules and room capacity.
//!
//! Every stage returns a [`ValidationResult`], Stillwater's `Validation`
//! specialised to [`MeetingError`]. All validation is pure; the only side
//! effect lives in the optional [`sink`].
//!
//! # Core Concepts
//!
//! - **MeetingRequest**: the decoded, not yet business-validated request
//! - **Meeting**: an immutable value that passed both stages
//! - **WireCode**: closed enumerations with wire codes and display labels
//! - **BookingPolicy**: configuration for the business stage
//!
//! # Example
//!
//! ```rust
//! use agenda::{meeting_from_raw, Meeting};
//!
//! let raw = r#"{
//!     "title": "Team Meeting",
//!     "contactEmail": "john.doe@acme.org",
//!     "type": "in_person",
//!     "meetingRoom": "small",
//!     "nGuests": 5
//! }"#;
//!
//! match meeting_from_raw(raw).into_result() {
//!     Ok(Meeting::InPerson(meeting)) => {
//!         assert_eq!(meeting.contact().last_name(), "DOE");
//!         assert_eq!(meeting.free_seats(), 15);
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//!
//! let error = meeting_from_raw("null").into_result().unwrap_err();
//! assert_eq!(error.to_string(), "Raw object is not valid");
//! ```

pub mod core;
pub mod framework;
pub mod pipeline;
pub mod rules;
pub mod sink;

// Re-export commonly used types
pub use self::core::{
    validate_contact, CorporateContact, InPersonMeeting, Meeting, MeetingError, MeetingRoom,
    OnlineMeeting, StructuralFault, ValidationResult, VideoPlatform, WireCode,
};
pub use framework::{decode, MeetingRequest};
pub use pipeline::{meeting_from_raw, meeting_from_value};
pub use rules::{validate, BookingPolicy};
pub use sink::{MeetingSink, MemorySink, TracingSink};

// Used by `wire_enum!` expansions in downstream crates.
#[doc(hidden)]
pub use serde as __serde;
