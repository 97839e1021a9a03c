//! BIND_RESULTS stage: bind winners and propagate them forward.
//!
//! Round 1 endpoints come from the slot layout. For round `r > 1`, match `i`
//! takes `teamA` from the winner of `(r-1, 2i)` and `teamB` from the winner of
//! `(r-1, 2i+1)`. A winner is only asked for once both endpoints are known and
//! the match was not already resolved by a bye.
//!
//! Where winners come from is abstracted by `WinnerSource`: recorded outcomes
//! for generation, an organizer's draft map for `DraftBracket`.

use std::collections::BTreeSet;

use tb_algo::propagation::{feeders, OutcomeIndex, RejectReason};
use tb_core::entities::{Match, MatchOutcome, Round};
use tb_core::ids::ParticipantId;
use tb_core::variables::DuplicateOutcomePolicy;

use crate::build_rounds::empty_match;

/// Supplies winners for matches whose two endpoints are both populated.
pub trait WinnerSource {
    /// Winner for `m`, if known. Answers naming neither endpoint are ignored.
    fn winner_for(&mut self, m: &Match) -> Option<ParticipantId>;
}

/// Winner source backed by recorded outcomes; tracks which records bound.
#[derive(Debug)]
pub struct RecordedOutcomes<'a> {
    index: &'a OutcomeIndex,
    applied: BTreeSet<usize>,
}

impl<'a> RecordedOutcomes<'a> {
    pub fn new(index: &'a OutcomeIndex) -> Self {
        Self { index, applied: BTreeSet::new() }
    }

    /// Input positions of records that set a winner.
    pub fn applied(&self) -> &BTreeSet<usize> {
        &self.applied
    }
}

impl WinnerSource for RecordedOutcomes<'_> {
    fn winner_for(&mut self, m: &Match) -> Option<ParticipantId> {
        let (a, b) = (m.team_a.as_ref()?, m.team_b.as_ref()?);
        let hit = self.index.lookup(m.round_index, &a.id, &b.id)?;
        self.applied.insert(hit.source);
        Some(hit.winner.clone())
    }
}

/// Build the outcome index, logging every record that can never bind.
pub fn index_outcomes(outcomes: &[MatchOutcome], policy: DuplicateOutcomePolicy) -> OutcomeIndex {
    let index = OutcomeIndex::build(outcomes, policy);
    for r in index.rejected() {
        let o = &outcomes[r.source];
        match r.reason {
            RejectReason::WinnerNotInPair => tracing::warn!(
                record = r.source,
                round = o.round,
                "skipping outcome: winner {} is neither {} nor {}",
                o.winner,
                o.player_a,
                o.player_b
            ),
            RejectReason::Superseded { by } => tracing::warn!(
                record = r.source,
                round = o.round,
                superseded_by = by,
                policy = %policy,
                "skipping duplicate outcome for {} vs {}",
                o.player_a,
                o.player_b
            ),
        }
    }
    index
}

/// Fill every round from `first_round`. Output is ordered by round, then index.
pub fn bind_and_propagate<W: WinnerSource>(
    rounds: &[Round],
    first_round: Vec<Match>,
    source: &mut W,
) -> Vec<Match> {
    let total = rounds.len() as u32;
    let mut all: Vec<Match> = Vec::with_capacity(rounds.iter().map(|r| r.match_count).sum());

    let mut current = first_round;
    for m in current.iter_mut() {
        bind(m, source);
    }
    log_round(1, &current);

    for round in rounds.iter().skip(1) {
        let next: Vec<Match> = (0..round.match_count)
            .map(|i| {
                let (fa, fb) = feeders(i);
                let mut m = empty_match(round, total, i);
                m.team_a = current.get(fa).and_then(Match::winner).cloned();
                m.team_b = current.get(fb).and_then(Match::winner).cloned();
                bind(&mut m, source);
                m
            })
            .collect();
        log_round(round.round_index, &next);
        all.append(&mut current);
        current = next;
    }
    all.append(&mut current);
    all
}

fn bind<W: WinnerSource>(m: &mut Match, source: &mut W) {
    if m.winner_id.is_some() || !m.has_both_teams() {
        return;
    }
    if let Some(w) = source.winner_for(m) {
        if m.involves(&w) {
            m.winner_id = Some(w);
        } else {
            tracing::debug!(match_id = %m.match_id, winner = %w, "ignoring winner not on match");
        }
    }
}

fn log_round(round: u32, matches: &[Match]) {
    tracing::debug!(
        round,
        matches = matches.len(),
        decided = matches.iter().filter(|m| m.winner_id.is_some()).count(),
        "bound round"
    );
}
