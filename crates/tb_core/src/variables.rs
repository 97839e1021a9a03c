//! variables.rs
//! Policy enums with explicit wire tokens, and the supported bracket shapes.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ------------ Bracket shapes ------------

/// First-round slot counts the engine accepts (powers of two).
pub const SUPPORTED_BRACKET_SIZES: [usize; 6] = [2, 4, 8, 16, 32, 64];

/// Largest supported slot count.
pub const MAX_BRACKET_SIZE: usize = 64;

/// Minimum participants for any bracket.
pub const MIN_PARTICIPANTS: usize = 2;

#[inline]
pub fn is_supported_size(n: usize) -> bool {
    SUPPORTED_BRACKET_SIZES.contains(&n)
}

// ------------ Macros ------------

/// Define an enum with explicit wire tokens shared by serde and `FromStr`/`Display`.
macro_rules! token_enum {
    ($(#[$m:meta])* $name:ident => { $($variant:ident = $token:literal),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_token())
            }
        }

        impl FromStr for $name {
            type Err = UnknownToken;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(UnknownToken(other.to_string())),
                }
            }
        }
    };
}

/// Unrecognized wire token for a policy enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token: {0}")]
pub struct UnknownToken(pub String);

// ------------ Canonical enums (wire tokens explicit) ------------

token_enum!(
    /// How participants are put into bracket-entry order.
    SeedingMethod => {
        Seeded = "seeded",
        Random = "random"
    }
);

token_enum!(
    /// Which record applies when several outcomes name the same (round, pair).
    DuplicateOutcomePolicy => {
        FirstWins = "first_wins",
        LastWins  = "last_wins"
    }
);

impl Default for SeedingMethod {
    fn default() -> Self {
        SeedingMethod::Seeded
    }
}

impl Default for DuplicateOutcomePolicy {
    fn default() -> Self {
        DuplicateOutcomePolicy::FirstWins
    }
}
