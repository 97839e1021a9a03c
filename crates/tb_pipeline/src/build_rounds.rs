//! BUILD_ROUNDS stage: round metadata and first-round matches.
//!
//! - `rounds.len() == log2(slots)`, `match_count(r) == slots >> r`.
//! - Round-1 match `i` is slot `i` vs slot `slots-1-i` (fold pairing).
//! - A round-1 match with exactly one present endpoint is resolved here:
//!   the present participant advances. Later rounds start empty and are
//!   filled by BIND_RESULTS.

use tb_algo::naming::{round_name, side_and_position};
use tb_algo::propagation::bye_winner;
use tb_algo::sizing::{match_count, round_count};
use tb_algo::slots::fold_pairs;
use tb_core::entities::{Match, Round, Slot};
use tb_core::ids::MatchId;

pub fn build_rounds(slots: usize) -> Vec<Round> {
    let n = round_count(slots);
    (1..=n)
        .map(|r| Round {
            round_index: r,
            round_name: round_name(r, slots),
            match_count: match_count(slots, r),
        })
        .collect()
}

/// Match shell for `index` within `round`: identity, naming and side, no teams.
pub(crate) fn empty_match(round: &Round, total_rounds: u32, index: usize) -> Match {
    let (side, position) = side_and_position(round.round_index, total_rounds, index, round.match_count);
    Match {
        match_id: MatchId::new(round.round_index, index),
        round_index: round.round_index,
        round_name: round.round_name.clone(),
        side,
        position,
        team_a: None,
        team_b: None,
        winner_id: None,
    }
}

/// Round-1 matches from the slot layout, byes already resolved.
pub fn first_round(layout: &[Slot], rounds: &[Round]) -> Vec<Match> {
    let Some(r1) = rounds.first() else {
        return Vec::new();
    };
    let total = rounds.len() as u32;

    fold_pairs(layout.len())
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| {
            let mut m = empty_match(r1, total, i);
            m.team_a = layout[a].occupant.clone();
            m.team_b = layout[b].occupant.clone();
            m.winner_id = bye_winner(m.team_a.as_ref(), m.team_b.as_ref());
            m
        })
        .collect()
}
