//! End-to-end booking: decode, validate, optionally save.

use serde_json::Value;
use stillwater::validation::Validation;

use crate::core::{Meeting, ValidationResult};
use crate::framework::{decode, decode_value};
use crate::rules::BookingPolicy;
use crate::sink::MeetingSink;

impl BookingPolicy {
    /// Turn raw JSON text into a validated [`Meeting`].
    ///
    /// Structural decoding runs first; business rules only see requests that
    /// passed it.
    pub fn meeting_from_raw(&self, raw: &str) -> ValidationResult<Meeting> {
        decode(raw).and_then(|request| self.validate(request))
    }

    /// Like [`BookingPolicy::meeting_from_raw`], for an already-parsed value.
    pub fn meeting_from_value(&self, value: &Value) -> ValidationResult<Meeting> {
        decode_value(value).and_then(|request| self.validate(request))
    }

    /// Run the pipeline and hand a successful meeting to `sink`.
    ///
    /// Failures are returned without touching the sink.
    pub fn book<K>(&self, raw: &str, sink: &K) -> ValidationResult<Meeting>
    where
        K: MeetingSink + ?Sized,
    {
        let result = self.meeting_from_raw(raw);
        if let Validation::Success(meeting) = &result {
            sink.save(meeting);
        }
        result
    }
}

/// Turn raw JSON text into a validated [`Meeting`] under the default policy.
///
/// # Example
///
/// ```rust
/// use agenda::meeting_from_raw;
///
/// let meeting = meeting_from_raw(
///     r#"{"type": "in_person", "title": "Team Meeting",
///         "contactEmail": "john.doe@acme.org",
///         "meetingRoom": "small", "nGuests": 5}"#,
/// )
/// .into_result()
/// .unwrap();
/// assert_eq!(meeting.summary(), "John DOE booked Room-101");
/// ```
pub fn meeting_from_raw(raw: &str) -> ValidationResult<Meeting> {
    BookingPolicy::default().meeting_from_raw(raw)
}

/// Turn an already-parsed payload into a validated [`Meeting`] under the
/// default policy.
pub fn meeting_from_value(value: &Value) -> ValidationResult<Meeting> {
    BookingPolicy::default().meeting_from_value(value)
}
