//! Structurally valid meeting requests.

use serde::Serialize;
use url::Url;

use crate::core::{MeetingRoom, VideoPlatform};

/// Discriminator value for in-person requests.
pub const IN_PERSON_TAG: &str = "in_person";
/// Discriminator value for online requests.
pub const ONLINE_TAG: &str = "online";

/// A meeting request that passed structural decoding.
///
/// Shape only: the contact email is syntactically valid but its domain and
/// username have not been checked, and the guest count has not been compared
/// with the room capacity. Serializes back to the wire payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeetingRequest {
    InPerson(InPersonRequest),
    Online(OnlineRequest),
}

impl MeetingRequest {
    pub fn title(&self) -> &str {
        match self {
            Self::InPerson(request) => &request.title,
            Self::Online(request) => &request.title,
        }
    }

    pub fn contact_email(&self) -> &str {
        match self {
            Self::InPerson(request) => &request.contact_email,
            Self::Online(request) => &request.contact_email,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InPersonRequest {
    pub title: String,
    pub contact_email: String,
    pub meeting_room: MeetingRoom,
    #[serde(rename = "nGuests")]
    pub number_of_guests: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineRequest {
    pub title: String,
    pub contact_email: String,
    pub video_platform: VideoPlatform,
    pub video_link: Url,
}
