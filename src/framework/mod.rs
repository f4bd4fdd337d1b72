//! Structural validation of raw meeting payloads.
//!
//! The wire payload is a JSON object with a `type` discriminator
//! (`"in_person"` or `"online"`) and camelCase fields. Decoding checks shape
//! only: required fields, non-blank title, email and URL syntax, known room
//! and platform codes, and a positive guest count. Business rules are applied
//! afterwards by [`crate::rules`].

mod decode;
mod request;
mod syntax;

pub use decode::{decode, decode_value};
pub use request::{InPersonRequest, MeetingRequest, OnlineRequest, IN_PERSON_TAG, ONLINE_TAG};
