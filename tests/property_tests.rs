//! Property-based tests for the booking pipeline.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated payloads.

use agenda::core::{MeetingRoom, WireCode};
use agenda::framework::decode;
use agenda::{meeting_from_raw, validate, validate_contact, MeetingError, StructuralFault};
use proptest::prelude::*;
use serde_json::json;
use stillwater::Validation;

prop_compose! {
    fn arbitrary_room()(variant in 0..3u8) -> MeetingRoom {
        match variant {
            0 => MeetingRoom::Room101,
            1 => MeetingRoom::Room42,
            _ => MeetingRoom::Amphitheater,
        }
    }
}

prop_compose! {
    fn arbitrary_username()(first in "[a-z]{1,12}", last in "[a-z]{1,12}") -> (String, String) {
        (first, last)
    }
}

fn in_person_payload(email: &str, room: MeetingRoom, guests: u32) -> String {
    json!({
        "title": "Planning",
        "contactEmail": email,
        "type": "in_person",
        "meetingRoom": room.code(),
        "nGuests": guests
    })
    .to_string()
}

proptest! {
    #[test]
    fn decode_is_total(raw in ".*") {
        match decode(&raw) {
            Validation::Success(_) => {}
            Validation::Failure(error) => {
                prop_assert_eq!(error.to_string(), "Raw object is not valid");
                prop_assert!(error.fault().is_some());
            }
        }
    }

    #[test]
    fn capacity_boundary_is_inclusive(room in arbitrary_room(), guests in 1u32..=250) {
        let result = meeting_from_raw(&in_person_payload("john.doe@acme.org", room, guests));

        if guests <= room.capacity() {
            prop_assert!(result.is_success());
        } else {
            let error = result.into_result().unwrap_err();
            prop_assert_eq!(
                error.to_string(),
                format!(
                    "max capacity for {} is {} ({} guests required)",
                    room.venue(),
                    room.capacity(),
                    guests
                )
            );
        }
    }

    #[test]
    fn validation_is_idempotent(
        (first, last) in arbitrary_username(),
        room in arbitrary_room(),
        guests in 1u32..=20,
    ) {
        let raw = in_person_payload(&format!("{first}.{last}@acme.org"), room, guests);

        let once = meeting_from_raw(&raw);
        let twice = meeting_from_raw(&raw);
        prop_assert!(once.is_success());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn decoded_request_reencodes_to_itself(
        (first, last) in arbitrary_username(),
        room in arbitrary_room(),
        guests in 1u32..=10_000,
    ) {
        let raw = in_person_payload(&format!("{first}.{last}@acme.org"), room, guests);
        let request = decode(&raw).into_result().unwrap();

        let reencoded = serde_json::to_string(&request).unwrap();
        let redecoded = decode(&reencoded).into_result().unwrap();

        prop_assert_eq!(&redecoded, &request);
        prop_assert_eq!(validate(redecoded), validate(request));
    }

    #[test]
    fn contact_errors_win_over_capacity(
        domain in "[a-z]{1,10}\\.(com|net|io)",
        room in arbitrary_room(),
        overflow in 1u32..100,
    ) {
        let guests = room.capacity() + overflow;
        let result = meeting_from_raw(&in_person_payload(&format!("john.doe@{domain}"), room, guests));

        let is_domain_error = matches!(result, Validation::Failure(MeetingError::InvalidDomain { .. }));
        prop_assert!(is_domain_error);
    }

    #[test]
    fn contact_names_are_derived_from_email((first, last) in arbitrary_username()) {
        let contact = validate_contact(&format!("{first}.{last}@acme.org"))
            .into_result()
            .unwrap();

        prop_assert_eq!(contact.first_name().to_lowercase(), first.clone());
        prop_assert!(contact.first_name().starts_with(|c: char| c.is_ascii_uppercase()));
        prop_assert_eq!(&contact.first_name()[1..], &first[1..]);
        prop_assert_eq!(contact.last_name(), last.to_uppercase());
    }

    #[test]
    fn usernames_without_dot_are_rejected(username in "[a-z]{1,20}") {
        let error = validate_contact(&format!("{username}@acme.org"))
            .into_result()
            .unwrap_err();

        prop_assert_eq!(
            error.to_string(),
            format!("Username must be 'firstname.lastname', '{username}' is not valid.")
        );
    }

    #[test]
    fn unknown_room_codes_are_structural_failures(code in "[A-Za-z0-9-]{1,12}") {
        prop_assume!(MeetingRoom::from_code(&code).is_err());

        let raw = json!({
            "title": "Planning",
            "contactEmail": "john.doe@acme.org",
            "type": "in_person",
            "meetingRoom": code,
            "nGuests": 3
        })
        .to_string();
        let error = decode(&raw).into_result().unwrap_err();

        prop_assert_eq!(error.fault(), Some(StructuralFault::UnknownCode("meetingRoom")));
    }
}
