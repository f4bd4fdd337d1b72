//! Closed enumerations exchanged on the wire as short codes.
//!
//! Every enumeration in the booking domain has two string faces: the wire
//! code accepted in payloads and the label shown to people. Both come from a
//! single lookup table per type, never from string comparisons scattered
//! across call sites.

use std::fmt::Debug;

use super::error::MeetingError;

/// Trait for enumerations with a wire code and a display label.
///
/// All methods are pure. Implementations are normally generated by
/// [`wire_enum!`](crate::wire_enum), which keeps the codes, labels and
/// variant list in one place.
///
/// # Example
///
/// ```rust
/// use agenda::core::WireCode;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Shift {
///     Early,
///     Late,
/// }
///
/// impl WireCode for Shift {
///     const KIND: &'static str = "shift";
///     const ALL: &'static [Self] = &[Self::Early, Self::Late];
///
///     fn code(&self) -> &'static str {
///         match self {
///             Self::Early => "am",
///             Self::Late => "pm",
///         }
///     }
///
///     fn label(&self) -> &'static str {
///         match self {
///             Self::Early => "Morning",
///             Self::Late => "Afternoon",
///         }
///     }
/// }
///
/// assert_eq!(Shift::from_code("pm").unwrap(), Shift::Late);
/// assert!(Shift::from_code("Morning").is_err());
/// ```
pub trait WireCode: Copy + Eq + Debug + Send + Sync + 'static {
    /// Human-readable name of the enumeration, used in error messages.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Code accepted on the wire.
    fn code(&self) -> &'static str;

    /// Label for display. Never accepted as input.
    fn label(&self) -> &'static str;

    /// Look a variant up by its wire code.
    ///
    /// Matching is exact; anything outside the accepted alphabet fails with
    /// [`MeetingError::UnknownCode`].
    fn from_code(code: &str) -> Result<Self, MeetingError> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.code() == code)
            .ok_or_else(|| MeetingError::UnknownCode {
                kind: Self::KIND,
                code: code.to_string(),
            })
    }
}
