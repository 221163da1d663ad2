//! Lowercase string labels shared by the categorical enums.
//!
//! Every labelled enum renders as a lowercase `&str`, parses strictly through
//! [`FromStr`](std::str::FromStr), and decodes leniently through `serde`: a
//! label outside the known set becomes the enum's fallback variant so stored
//! data with stray values still loads.

use thiserror::Error;

/// Error returned when a string does not name a known label.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use strainwise_core::ThcTolerance;
///
/// let err = ThcTolerance::from_str("extreme").unwrap_err();
/// assert_eq!(err.to_string(), "unknown THC tolerance 'extreme'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseLabelError {
    /// Human-readable name of the label family.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Declare a lowercase-labelled enum with a `serde` fallback variant.
///
/// A `;` line separates the known variants from the fallback so each side
/// can carry its own attributes.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
            ;
            $(#[$fmeta:meta])* fallback $fallback:ident => $flabel:literal,
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
            $(#[$fmeta])*
            #[serde(rename = $flabel)]
            #[serde(other)]
            $fallback,
        }

        impl $name {
            /// Return the label as a lowercase `&str`.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::$fallback => $flabel,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::label::ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $( $label => Ok(Self::$variant), )+
                    _ => Err($crate::label::ParseLabelError {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use labelled_enum;
