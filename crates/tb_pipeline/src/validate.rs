//! crates/tb_pipeline/src/validate.rs
//! Structural validation before any construction.
//! Pure, no RNG; the first violated precondition is returned.
//!
//! Check order:
//!   1) too few participants
//!   2) per participant, in input order: missing id, then duplicate id
//!   3) odd count while byes are disallowed
//!   4) unsupported bracket size (covering size > 64, or not an exact
//!      supported size while byes are disallowed)

use std::collections::BTreeSet;

use tb_algo::sizing::{covering_size, is_exact_fit};
use tb_core::entities::BracketInput;
use tb_core::errors::InvalidInputError;
use tb_core::variables::MIN_PARTICIPANTS;

/// Shape facts established by a passing validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validated {
    /// Participant count.
    pub count: usize,
    /// First-round slot count (supported power of two ≥ `count`).
    pub slots: usize,
}

/// Top-level entry point.
pub fn validate(input: &BracketInput) -> Result<Validated, InvalidInputError> {
    let count = input.participants.len();
    if count < MIN_PARTICIPANTS {
        return Err(InvalidInputError::TooFewParticipants { count });
    }

    check_ids(input)?;

    if !input.allow_byes && count % 2 == 1 {
        return Err(InvalidInputError::OddCountWithoutByes { count });
    }

    let slots = covering_size(count).ok_or(InvalidInputError::UnsupportedBracketSize {
        count,
        allow_byes: input.allow_byes,
    })?;
    if !input.allow_byes && !is_exact_fit(count) {
        return Err(InvalidInputError::UnsupportedBracketSize { count, allow_byes: false });
    }

    Ok(Validated { count, slots })
}

fn check_ids(input: &BracketInput) -> Result<(), InvalidInputError> {
    let mut seen = BTreeSet::<&str>::new();
    for (index, p) in input.participants.iter().enumerate() {
        if p.id.is_empty() {
            return Err(InvalidInputError::MissingId { index });
        }
        if !seen.insert(p.id.as_str()) {
            return Err(InvalidInputError::DuplicateParticipantId { id: p.id.to_string() });
        }
    }
    Ok(())
}
