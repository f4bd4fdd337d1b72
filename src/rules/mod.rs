//! Business-rule validation.
//!
//! Runs after structural decoding and turns a [`MeetingRequest`] into a
//! [`Meeting`]:
//!
//! 1. the contact email must belong to the policy's corporate domain and
//!    read `firstname.lastname`;
//! 2. for in-person meetings the guest count must fit the room.
//!
//! Unlike error-accumulating validation, these rules are fail-fast: the first
//! failure is returned and the remaining rules are skipped.
//!
//! # Example
//!
//! ```rust
//! use agenda::framework::decode;
//! use agenda::rules::validate;
//!
//! let raw = r#"{"type": "in_person", "title": "Team Meeting",
//!               "contactEmail": "john.doe@acme.org",
//!               "meetingRoom": "small", "nGuests": 21}"#;
//! let error = decode(raw)
//!     .and_then(validate)
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(error.to_string(), "max capacity for room 101 is 20 (21 guests required)");
//! ```
//!
//! [`MeetingRequest`]: crate::framework::MeetingRequest
//! [`Meeting`]: crate::core::Meeting

pub mod builder;
pub mod capacity;
pub mod policy;
mod validate;

pub use builder::PolicyBuilder;
pub use capacity::check_capacity;
pub use policy::{BookingPolicy, PolicyError};
pub use validate::validate;
