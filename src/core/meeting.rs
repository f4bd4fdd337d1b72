//! Validated meeting values.
//!
//! A [`Meeting`] exists only after a request passed both structural and
//! business validation. Fields are private and there is no public
//! constructor; values are immutable once built.

use serde::Serialize;
use url::Url;

use super::catalog::{MeetingRoom, VideoPlatform};
use super::contact::CorporateContact;

/// A booked meeting, either in a room or on a video platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Meeting {
    InPerson(InPersonMeeting),
    Online(OnlineMeeting),
}

impl Meeting {
    pub fn title(&self) -> &str {
        match self {
            Self::InPerson(meeting) => meeting.title(),
            Self::Online(meeting) => meeting.title(),
        }
    }

    pub fn contact(&self) -> &CorporateContact {
        match self {
            Self::InPerson(meeting) => meeting.contact(),
            Self::Online(meeting) => meeting.contact(),
        }
    }

    /// One human-readable line naming who booked which room or platform.
    pub fn summary(&self) -> String {
        match self {
            Self::InPerson(meeting) => meeting.summary(),
            Self::Online(meeting) => meeting.summary(),
        }
    }
}

/// A meeting held in one of the [`MeetingRoom`]s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InPersonMeeting {
    title: String,
    contact: CorporateContact,
    meeting_room: MeetingRoom,
    n_guests: u32,
}

impl InPersonMeeting {
    pub(crate) fn new(
        title: String,
        contact: CorporateContact,
        meeting_room: MeetingRoom,
        n_guests: u32,
    ) -> Self {
        Self {
            title,
            contact,
            meeting_room,
            n_guests,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contact(&self) -> &CorporateContact {
        &self.contact
    }

    pub fn meeting_room(&self) -> MeetingRoom {
        self.meeting_room
    }

    pub fn n_guests(&self) -> u32 {
        self.n_guests
    }

    /// Seats left in the room after the guests are seated.
    pub fn free_seats(&self) -> u32 {
        self.meeting_room.capacity().saturating_sub(self.n_guests)
    }

    /// Confirmation line, e.g. `"John DOE booked Room-101"`.
    pub fn summary(&self) -> String {
        format!("{} booked {}", self.contact.full_name(), self.meeting_room)
    }
}

/// A meeting held on a [`VideoPlatform`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineMeeting {
    title: String,
    contact: CorporateContact,
    video_platform: VideoPlatform,
    video_link: Url,
}

impl OnlineMeeting {
    pub(crate) fn new(
        title: String,
        contact: CorporateContact,
        video_platform: VideoPlatform,
        video_link: Url,
    ) -> Self {
        Self {
            title,
            contact,
            video_platform,
            video_link,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contact(&self) -> &CorporateContact {
        &self.contact
    }

    pub fn video_platform(&self) -> VideoPlatform {
        self.video_platform
    }

    pub fn video_link(&self) -> &Url {
        &self.video_link
    }

    /// Confirmation line, e.g. `"Team LEAD booked a zoom meeting"`.
    pub fn summary(&self) -> String {
        format!(
            "{} booked a {} meeting",
            self.contact.full_name(),
            self.video_platform
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::validate_contact;
    use serde_json::json;

    fn contact(email: &str) -> CorporateContact {
        validate_contact(email).into_result().unwrap()
    }

    fn team_meeting() -> InPersonMeeting {
        InPersonMeeting::new(
            "Team Meeting".to_string(),
            contact("john.doe@acme.org"),
            MeetingRoom::Room101,
            5,
        )
    }

    #[test]
    fn in_person_summary_names_contact_and_room() {
        assert_eq!(team_meeting().summary(), "John DOE booked Room-101");
    }

    #[test]
    fn free_seats_is_capacity_minus_guests() {
        assert_eq!(team_meeting().free_seats(), 15);

        let full = InPersonMeeting::new(
            "All hands".to_string(),
            contact("ceo.boss@acme.org"),
            MeetingRoom::Amphitheater,
            200,
        );
        assert_eq!(full.free_seats(), 0);
    }

    #[test]
    fn online_summary_names_platform() {
        let meeting = OnlineMeeting::new(
            "Weekly Standup".to_string(),
            contact("team.lead@acme.org"),
            VideoPlatform::Zoom,
            Url::parse("https://zoom.us/j/123456789").unwrap(),
        );
        assert_eq!(meeting.summary(), "Team LEAD booked a zoom meeting");
        assert_eq!(Meeting::Online(meeting).title(), "Weekly Standup");
    }

    #[test]
    fn meeting_serializes_to_wire_shape() {
        let meeting = Meeting::InPerson(team_meeting());

        assert_eq!(
            serde_json::to_value(&meeting).unwrap(),
            json!({
                "type": "in_person",
                "title": "Team Meeting",
                "contact": {
                    "firstName": "John",
                    "lastName": "DOE",
                    "email": "john.doe@acme.org"
                },
                "meetingRoom": "small",
                "nGuests": 5
            })
        );
    }
}
