// crates/tb_algo/src/naming.rs
//
// Round names and side placement.
//
// Naming is most-specific-first: Final, Semi-Finals, Quarter-Finals (slots ≥ 8),
// then "Round of N" for the opening round of 16/32/64-slot brackets, then
// "Round {r}". First rounds of 4- and 8-slot brackets are already covered by
// the Semi/Quarter rules.

use tb_core::entities::Side;

pub const FINAL: &str = "Final";
pub const SEMI_FINALS: &str = "Semi-Finals";
pub const QUARTER_FINALS: &str = "Quarter-Finals";

/// Display name for 1-based `round` of a bracket with `slots` entry positions.
pub fn round_name(round: u32, slots: usize) -> String {
    let total = crate::sizing::round_count(slots);
    if round == total {
        return FINAL.to_string();
    }
    if round + 1 == total {
        return SEMI_FINALS.to_string();
    }
    if slots >= 8 && round + 2 == total {
        return QUARTER_FINALS.to_string();
    }
    if round == 1 && matches!(slots, 16 | 32 | 64) {
        return format!("Round of {slots}");
    }
    format!("Round {round}")
}

/// Side and 1-based position of match `index` within a round of `match_count`
/// matches. The single match of the last round is the final.
pub fn side_and_position(round: u32, total_rounds: u32, index: usize, match_count: usize) -> (Side, u32) {
    if round == total_rounds {
        return (Side::Final, 1);
    }
    let half = match_count / 2;
    if index < half {
        (Side::A, index as u32 + 1)
    } else {
        (Side::B, (index - half) as u32 + 1)
    }
}
