//! Draft reducer for an organizer's in-progress edits.
//!
//! A `DraftBracket` never mutates a `Bracket`. It keeps the request, the
//! fixed first-round skeleton (so a random draw stays put between edits) and
//! its own winners keyed by match id. Every view re-runs propagation with the
//! draft winners as the winner source; a draft winner that no longer names an
//! endpoint of its match is stale and is dropped on the next `apply`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tb_core::entities::{Bracket, BracketInput, Match, MatchOutcome};
use tb_core::errors::InvalidInputError;
use tb_core::ids::{MatchId, ParticipantId};
use tb_core::rng::RandomSource;

use crate::bind_results::{index_outcomes, RecordedOutcomes, WinnerSource};
use crate::{build_skeleton, complete, request_rng, Skeleton};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error(transparent)]
    Invalid(#[from] InvalidInputError),

    #[error("unknown match: {match_id}")]
    UnknownMatch { match_id: MatchId },

    #[error("match {match_id} does not have two participants")]
    MissingOpponent { match_id: MatchId },

    #[error("{winner} is not a participant of match {match_id}")]
    WinnerNotOnMatch { match_id: MatchId, winner: ParticipantId },
}

/// One organizer edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum DraftAction {
    #[serde(rename = "setWinner")]
    SetWinner {
        #[serde(rename = "matchId")]
        match_id: MatchId,
        winner: ParticipantId,
    },
    #[serde(rename = "clearWinner")]
    ClearWinner {
        #[serde(rename = "matchId")]
        match_id: MatchId,
    },
}

#[derive(Clone, Debug)]
pub struct DraftBracket {
    input: BracketInput,
    skeleton: Skeleton,
    winners: BTreeMap<MatchId, ParticipantId>,
}

/// Draft winners as a winner source; remembers which ones bound.
struct DraftWinners<'a> {
    winners: &'a BTreeMap<MatchId, ParticipantId>,
    bound: BTreeSet<MatchId>,
}

impl WinnerSource for DraftWinners<'_> {
    fn winner_for(&mut self, m: &Match) -> Option<ParticipantId> {
        let w = self.winners.get(&m.match_id).filter(|w| m.involves(w))?;
        self.bound.insert(m.match_id.clone());
        Some(w.clone())
    }
}

impl DraftBracket {
    /// Start a draft from the request, seeded with the winners its recorded
    /// results already produce.
    pub fn new(input: &BracketInput) -> Result<Self, DraftError> {
        let mut rng = request_rng(input);
        Self::with_rng(input, &mut rng)
    }

    pub fn with_rng<R: RandomSource>(input: &BracketInput, rng: &mut R) -> Result<Self, DraftError> {
        let skeleton = build_skeleton(input, rng)?;
        let index = index_outcomes(&input.results, input.duplicate_outcome_policy);
        let recorded = complete(input, &skeleton, &mut RecordedOutcomes::new(&index));
        let winners = recorded
            .matches
            .iter()
            .filter(|m| m.has_both_teams())
            .filter_map(|m| m.winner_id.clone().map(|w| (m.match_id.clone(), w)))
            .collect();
        Ok(Self { input: input.clone(), skeleton, winners })
    }

    /// Apply one edit, returning the next draft. `self` is left untouched.
    pub fn apply(&self, action: DraftAction) -> Result<Self, DraftError> {
        let current = self.view();
        let mut winners = self.winners.clone();

        match action {
            DraftAction::SetWinner { match_id, winner } => {
                let m = current
                    .get_match(&match_id)
                    .ok_or_else(|| DraftError::UnknownMatch { match_id: match_id.clone() })?;
                if !m.has_both_teams() {
                    return Err(DraftError::MissingOpponent { match_id });
                }
                if !m.involves(&winner) {
                    return Err(DraftError::WinnerNotOnMatch { match_id, winner });
                }
                winners.insert(match_id, winner);
            }
            DraftAction::ClearWinner { match_id } => {
                if current.get_match(&match_id).is_none() {
                    return Err(DraftError::UnknownMatch { match_id });
                }
                winners.remove(&match_id);
            }
        }

        let mut next = Self { input: self.input.clone(), skeleton: self.skeleton.clone(), winners };
        let (_, bound) = next.resolve();
        let before = next.winners.len();
        next.winners.retain(|id, _| bound.contains(id));
        if next.winners.len() != before {
            tracing::debug!(dropped = before - next.winners.len(), "dropped stale draft winners");
        }
        Ok(next)
    }

    /// Current bracket with draft winners propagated.
    pub fn view(&self) -> Bracket {
        self.resolve().0
    }

    pub fn winners(&self) -> &BTreeMap<MatchId, ParticipantId> {
        &self.winners
    }

    /// Decided non-bye matches as outcome records, in bracket order.
    pub fn to_outcomes(&self) -> Vec<MatchOutcome> {
        self.view()
            .matches
            .iter()
            .filter_map(|m| {
                let (a, b, w) = (m.team_a.as_ref()?, m.team_b.as_ref()?, m.winner_id.as_ref()?);
                Some(MatchOutcome::new(m.round_index, a.id.clone(), b.id.clone(), w.clone()))
            })
            .collect()
    }

    fn resolve(&self) -> (Bracket, BTreeSet<MatchId>) {
        let mut source = DraftWinners { winners: &self.winners, bound: BTreeSet::new() };
        let bracket = complete(&self.input, &self.skeleton, &mut source);
        (bracket, source.bound)
    }
}
