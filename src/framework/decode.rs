//! Structural decoding of raw payloads into [`MeetingRequest`]s.

use serde::Deserialize;
use serde_json::{Number, Value};
use stillwater::validation::Validation;
use tracing::debug;

use super::request::{InPersonRequest, MeetingRequest, OnlineRequest, IN_PERSON_TAG, ONLINE_TAG};
use super::syntax::{is_valid_email, parse_link};
use crate::core::{
    map_platform_code, map_room_code, MeetingError, StructuralFault, ValidationResult,
};

/// Decode raw JSON text into a [`MeetingRequest`].
///
/// Any structural violation fails with [`MeetingError::MalformedPayload`],
/// whose message is always `"Raw object is not valid"`. The specific cause
/// is available through [`MeetingError::fault`].
///
/// # Example
///
/// ```rust
/// use agenda::framework::{decode, MeetingRequest};
///
/// let raw = r#"{"type": "online", "title": "Standup",
///               "contactEmail": "team.lead@acme.org",
///               "videoPlatform": "zoom", "videoLink": "https://zoom.us/j/1"}"#;
/// let request = decode(raw).into_result().unwrap();
/// assert!(matches!(request, MeetingRequest::Online(_)));
///
/// let error = decode("null").into_result().unwrap_err();
/// assert_eq!(error.to_string(), "Raw object is not valid");
/// ```
pub fn decode(raw: &str) -> ValidationResult<MeetingRequest> {
    let result = serde_json::from_str::<Value>(raw)
        .map_err(|_| StructuralFault::Unparseable)
        .and_then(|value| request_from_value(&value));
    finish(result)
}

/// Decode an already-parsed JSON value.
pub fn decode_value(value: &Value) -> ValidationResult<MeetingRequest> {
    finish(request_from_value(value))
}

fn finish(result: Result<MeetingRequest, StructuralFault>) -> ValidationResult<MeetingRequest> {
    Validation::from_result(result.map_err(|fault| {
        debug!(fault = fault.code(), "rejected raw meeting payload: {fault}");
        MeetingError::malformed(fault)
    }))
}

/// Wire fields of an in-person payload. Every field is optional here so a
/// missing field is reported as such rather than as a type error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InPersonFields {
    title: Option<String>,
    contact_email: Option<String>,
    meeting_room: Option<String>,
    #[serde(rename = "nGuests")]
    n_guests: Option<Number>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OnlineFields {
    title: Option<String>,
    contact_email: Option<String>,
    video_platform: Option<String>,
    video_link: Option<String>,
}

fn request_from_value(value: &Value) -> Result<MeetingRequest, StructuralFault> {
    let object = value.as_object().ok_or(StructuralFault::NotAnObject)?;

    match object.get("type").and_then(Value::as_str) {
        Some(IN_PERSON_TAG) => in_person(value).map(MeetingRequest::InPerson),
        Some(ONLINE_TAG) => online(value).map(MeetingRequest::Online),
        _ => Err(StructuralFault::UnknownDiscriminator),
    }
}

fn in_person(value: &Value) -> Result<InPersonRequest, StructuralFault> {
    let fields =
        InPersonFields::deserialize(value).map_err(|_| StructuralFault::WrongFieldType)?;

    let title = title(fields.title)?;
    let contact_email = contact_email(fields.contact_email)?;
    let room_code = required(fields.meeting_room, "meetingRoom")?;
    let meeting_room =
        map_room_code(&room_code).map_err(|_| StructuralFault::UnknownCode("meetingRoom"))?;
    let number_of_guests = guest_count(required(fields.n_guests, "nGuests")?)?;

    Ok(InPersonRequest {
        title,
        contact_email,
        meeting_room,
        number_of_guests,
    })
}

fn online(value: &Value) -> Result<OnlineRequest, StructuralFault> {
    let fields = OnlineFields::deserialize(value).map_err(|_| StructuralFault::WrongFieldType)?;

    let title = title(fields.title)?;
    let contact_email = contact_email(fields.contact_email)?;
    let platform_code = required(fields.video_platform, "videoPlatform")?;
    let video_platform = map_platform_code(&platform_code)
        .map_err(|_| StructuralFault::UnknownCode("videoPlatform"))?;
    let video_link = parse_link(&required(fields.video_link, "videoLink")?)
        .ok_or(StructuralFault::InvalidVideoLink)?;

    Ok(OnlineRequest {
        title,
        contact_email,
        video_platform,
        video_link,
    })
}

fn required<T>(field: Option<T>, name: &'static str) -> Result<T, StructuralFault> {
    field.ok_or(StructuralFault::MissingField(name))
}

fn title(field: Option<String>) -> Result<String, StructuralFault> {
    let title = required(field, "title")?;
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StructuralFault::BlankTitle);
    }
    Ok(trimmed.to_string())
}

fn contact_email(field: Option<String>) -> Result<String, StructuralFault> {
    let email = required(field, "contactEmail")?;
    if !is_valid_email(&email) {
        return Err(StructuralFault::InvalidEmail);
    }
    Ok(email)
}

/// Guest counts are whole numbers; `5.0` is accepted as `5`, `4.5` is not.
fn guest_count(guests: Number) -> Result<u32, StructuralFault> {
    if let Some(count) = guests.as_u64() {
        if count == 0 {
            return Err(StructuralFault::NonPositiveGuests);
        }
        return u32::try_from(count).map_err(|_| StructuralFault::GuestCountTooLarge);
    }
    if guests.is_i64() {
        return Err(StructuralFault::NonPositiveGuests);
    }

    let count = guests.as_f64().ok_or(StructuralFault::WrongFieldType)?;
    if !count.is_finite() || count.fract() != 0.0 {
        return Err(StructuralFault::WrongFieldType);
    }
    if count < 1.0 {
        return Err(StructuralFault::NonPositiveGuests);
    }
    if count > f64::from(u32::MAX) {
        return Err(StructuralFault::GuestCountTooLarge);
    }
    Ok(count as u32)
}
