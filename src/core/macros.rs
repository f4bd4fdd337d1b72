//! Macros for declaring wire-coded enumerations.

/// Declare an enumeration together with its wire-code/label table.
///
/// Generates the enum (`Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`),
/// a [`WireCode`](crate::core::WireCode) implementation, `Display` (label),
/// `FromStr` (wire code) and `Serialize` (wire code).
///
/// # Example
///
/// ```
/// use agenda::core::WireCode;
/// use agenda::wire_enum;
///
/// wire_enum! {
///     pub enum Floor {
///         Ground => ("ground", "Ground floor"),
///         Roof => ("roof", "Rooftop"),
///     }
///     kind: "floor"
/// }
///
/// assert_eq!(Floor::from_code("roof").unwrap(), Floor::Roof);
/// assert_eq!(Floor::Ground.to_string(), "Ground floor");
/// assert_eq!("ground".parse::<Floor>().unwrap(), Floor::Ground);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($code:literal, $label:literal)
            ),* $(,)?
        }

        kind: $kind:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::WireCode for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),*
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::WireCode::label(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::MeetingError;

            fn from_str(code: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::core::WireCode>::from_code(code)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str($crate::core::WireCode::code(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{MeetingError, WireCode};

    wire_enum! {
        enum Lane {
            Fast => ("fast", "Fast lane"),
            Slow => ("slow", "Slow lane"),
        }
        kind: "lane"
    }

    #[test]
    fn wire_enum_macro_generates_lookup_table() {
        assert_eq!(Lane::ALL, &[Lane::Fast, Lane::Slow]);
        assert_eq!(Lane::Fast.code(), "fast");
        assert_eq!(Lane::Slow.label(), "Slow lane");
        assert_eq!(Lane::KIND, "lane");
    }

    #[test]
    fn wire_enum_display_uses_label() {
        assert_eq!(Lane::Fast.to_string(), "Fast lane");
    }

    #[test]
    fn wire_enum_parses_codes_only() {
        assert_eq!("slow".parse::<Lane>(), Ok(Lane::Slow));
        assert_eq!(
            "Slow lane".parse::<Lane>(),
            Err(MeetingError::UnknownCode {
                kind: "lane",
                code: "Slow lane".to_string(),
            })
        );
    }

    #[test]
    fn wire_enum_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Lane::Slow).unwrap(), "\"slow\"");
    }

    #[test]
    fn wire_enum_supports_visibility() {
        wire_enum! {
            pub enum Public {
                Only => ("only", "Only"),
            }
            kind: "public"
        }

        assert_eq!(Public::Only.code(), "only");
    }
}
