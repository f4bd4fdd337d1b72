//! Core booking domain types.
//!
//! This module contains the pure functional core:
//! - Wire-coded enumerations via the `WireCode` trait and `wire_enum!`
//! - Rooms, platforms and their code tables
//! - Corporate contacts derived from email addresses
//! - Validated meeting values and the shared error taxonomy
//!
//! Nothing here performs I/O.

mod catalog;
mod code;
mod contact;
mod error;
mod macros;
mod meeting;

pub use catalog::{map_platform_code, map_room_code, MeetingRoom, VideoPlatform};
pub use code::WireCode;
pub use contact::{validate_contact, CorporateContact, CORPORATE_DOMAIN};
pub use error::{MeetingError, StructuralFault, ValidationResult};
pub use meeting::{InPersonMeeting, Meeting, OnlineMeeting};
