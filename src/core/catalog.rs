//! Bookable rooms and supported video platforms.
//!
//! The code tables below are part of the public wire contract.

use super::code::WireCode;
use super::error::MeetingError;

crate::wire_enum! {
    /// A physical room that can host an in-person meeting.
    pub enum MeetingRoom {
        Room101 => ("small", "Room-101"),
        Room42 => ("medium", "Room-42"),
        Amphitheater => ("large", "Amphitheater"),
    }
    kind: "meeting room"
}

crate::wire_enum! {
    /// A video-conferencing platform for online meetings.
    pub enum VideoPlatform {
        Zoom => ("zoom", "zoom"),
        Meet => ("meet", "meet"),
        Teams => ("teams", "teams"),
    }
    kind: "video platform"
}

impl MeetingRoom {
    /// Maximum number of guests the room holds (inclusive).
    pub fn capacity(&self) -> u32 {
        match self {
            Self::Room101 => 20,
            Self::Room42 => 50,
            Self::Amphitheater => 200,
        }
    }

    /// How the room is referred to in capacity messages.
    pub fn venue(&self) -> &'static str {
        match self {
            Self::Room101 => "room 101",
            Self::Room42 => "room 42",
            Self::Amphitheater => "the amphitheater",
        }
    }
}

/// Translate a room size code (`small`, `medium`, `large`) into a room.
pub fn map_room_code(code: &str) -> Result<MeetingRoom, MeetingError> {
    MeetingRoom::from_code(code)
}

/// Translate a platform code (`zoom`, `meet`, `teams`) into a platform.
pub fn map_platform_code(code: &str) -> Result<VideoPlatform, MeetingError> {
    VideoPlatform::from_code(code)
}
