//! Helper macros for closed wire enumerations.

/// Define a closed enumeration whose variants map one-to-one onto wire strings.
///
/// This macro generates the enum along with:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`
/// - `Serialize`, `Deserialize` (as the wire string)
/// - `FromStr`, `TryFrom<String>` (unknown values become the given `ValidationError` variant)
/// - `Display`, `From<Self> for &'static str`
/// - `as_str()` and an `ALL` constant listing every variant
///
/// # Example
///
/// ```ignore
/// wire_enum! {
///     /// Colour of a parcel label.
///     LabelColour, LabelColour {
///         /// Red label.
///         Red => "red",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The value sent to and received from the platform.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::error::ValidationError::$err(other.to_string())),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(value: String) -> ::std::result::Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }
    };
}
