//! Business-rule validation of structurally valid requests.

use stillwater::validation::Validation;
use tracing::debug;

use super::capacity::check_capacity;
use super::policy::BookingPolicy;
use crate::core::{CorporateContact, InPersonMeeting, Meeting, OnlineMeeting, ValidationResult};
use crate::framework::{InPersonRequest, MeetingRequest, OnlineRequest};

impl BookingPolicy {
    /// Apply the business rules to a decoded request.
    ///
    /// The contact is validated first and its error propagates unchanged.
    /// In-person requests are then checked against the room capacity. The
    /// first failure wins. The request's shape is never re-checked.
    pub fn validate(&self, request: MeetingRequest) -> ValidationResult<Meeting> {
        let result = match request {
            MeetingRequest::InPerson(request) => self.validate_in_person(request),
            MeetingRequest::Online(request) => self.validate_online(request),
        };

        if let Validation::Failure(error) = &result {
            debug!(code = error.code(), "meeting request rejected: {error}");
        }
        result
    }

    fn validate_in_person(&self, request: InPersonRequest) -> ValidationResult<Meeting> {
        let InPersonRequest {
            title,
            contact_email,
            meeting_room,
            number_of_guests,
        } = request;

        CorporateContact::parse(&contact_email, &self.corporate_domain)
            .and_then(|contact| {
                Validation::from_result(check_capacity(meeting_room, number_of_guests))
                    .map(|()| contact)
            })
            .map(|contact| {
                Meeting::InPerson(InPersonMeeting::new(
                    title,
                    contact,
                    meeting_room,
                    number_of_guests,
                ))
            })
    }

    fn validate_online(&self, request: OnlineRequest) -> ValidationResult<Meeting> {
        let OnlineRequest {
            title,
            contact_email,
            video_platform,
            video_link,
        } = request;

        CorporateContact::parse(&contact_email, &self.corporate_domain).map(|contact| {
            Meeting::Online(OnlineMeeting::new(
                title,
                contact,
                video_platform,
                video_link,
            ))
        })
    }
}

/// Validate a request against the default [`BookingPolicy`].
pub fn validate(request: MeetingRequest) -> ValidationResult<Meeting> {
    BookingPolicy::default().validate(request)
}
