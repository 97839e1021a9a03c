//! crates/tb_core/src/ids.rs
//! Participant and match identifiers.
//! Participant ids are opaque caller strings (exact, case-sensitive); match ids
//! have a strict `R{round}-M{n}` shape derived from the bracket position.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned when parsing a `MatchId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("match id must look like R<round>-M<n>")]
    BadShape,
    #[error("match id round and number must be >= 1")]
    ZeroComponent,
}

macro_rules! simple_string_newtype {
    ($(#[$m:meta])* $name:ident, serde($($serde:tt)*)) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde($($serde)*))]
        pub struct $name(String);

        impl $name {
            #[inline] pub fn as_str(&self) -> &str { &self.0 }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str { &self.0 }
        }
    }
}

simple_string_newtype!(
    /// Caller-assigned participant identity. Emptiness is rejected by the
    /// input validator, not here, so a malformed request still deserializes.
    ParticipantId,
    serde(transparent)
);

impl ParticipantId {
    #[inline]
    pub fn new(s: impl Into<String>) -> Self {
        ParticipantId(s.into())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId(s.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        ParticipantId(s)
    }
}

simple_string_newtype!(
    /// "R{round}-M{index+1}", stable and human-diffable. Deserializes through
    /// `FromStr`, so wire ids are validated and normalized like parsed ones.
    MatchId,
    serde(try_from = "String", into = "String")
);

impl MatchId {
    /// Build from a 1-based round and a 0-based match index within that round.
    pub fn new(round: u32, index: usize) -> Self {
        MatchId(format!("R{round}-M{}", index + 1))
    }

    /// 1-based round number encoded in the id.
    pub fn round(&self) -> u32 {
        split_match_id(&self.0).map(|(r, _)| r).unwrap_or(0)
    }

    /// 0-based match index within the round.
    pub fn index(&self) -> usize {
        split_match_id(&self.0)
            .map(|(_, n)| (n as usize).saturating_sub(1))
            .unwrap_or(0)
    }
}

fn split_match_id(s: &str) -> Option<(u32, u32)> {
    let rest = s.strip_prefix('R')?;
    let (round, n) = rest.split_once("-M")?;
    if round.is_empty() || n.is_empty() {
        return None;
    }
    if !round.bytes().all(|b| b.is_ascii_digit()) || !n.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((round.parse().ok()?, n.parse().ok()?))
}

impl FromStr for MatchId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (round, n) = split_match_id(s).ok_or(IdError::BadShape)?;
        if round == 0 || n == 0 {
            return Err(IdError::ZeroComponent);
        }
        // Normalize away leading zeros so ids compare by position.
        Ok(MatchId::new(round, (n - 1) as usize))
    }
}

impl TryFrom<String> for MatchId {
    type Error = IdError;
    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.0
    }
}
