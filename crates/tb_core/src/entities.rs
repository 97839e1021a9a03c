//! crates/tb_core/src/entities.rs
//! Bracket entities (participants, outcomes, slots, matches, rounds) and the
//! request/response shapes. Wire names are camelCase.

use crate::ids::{MatchId, ParticipantId};
use crate::variables::{DuplicateOutcomePolicy, SeedingMethod};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/*                                   Inputs                                   */
/* -------------------------------------------------------------------------- */

/// A bracket entrant. `seed` is only read by the seeded ordering policy; any
/// JSON number is accepted (negative and fractional included).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Participant {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: ParticipantId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub seed: Option<f64>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), seed: None }
    }

    pub fn seeded(id: impl Into<ParticipantId>, name: impl Into<String>, seed: impl Into<f64>) -> Self {
        Self { id: id.into(), name: name.into(), seed: Some(seed.into()) }
    }
}

/// Externally recorded result. `player_a`/`player_b` may come in either order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchOutcome {
    pub round: u32,
    pub player_a: ParticipantId,
    pub player_b: ParticipantId,
    pub winner: ParticipantId,
}

impl MatchOutcome {
    pub fn new(
        round: u32,
        player_a: impl Into<ParticipantId>,
        player_b: impl Into<ParticipantId>,
        winner: impl Into<ParticipantId>,
    ) -> Self {
        Self {
            round,
            player_a: player_a.into(),
            player_b: player_b.into(),
            winner: winner.into(),
        }
    }

    /// True iff `winner` is one of the two named players.
    pub fn winner_in_pair(&self) -> bool {
        self.winner == self.player_a || self.winner == self.player_b
    }
}

/// Caller-supplied labels for the two halves of the draw.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SideLabels {
    pub left_label: String,
    pub right_label: String,
}

impl Default for SideLabels {
    fn default() -> Self {
        Self { left_label: "Side A".to_string(), right_label: "Side B".to_string() }
    }
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

/// Full generation request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BracketInput {
    pub tournament_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tournament_name: String,
    pub participants: Vec<Participant>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub allow_byes: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seeding_method: SeedingMethod,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sides: SideLabels,
    #[cfg_attr(feature = "serde", serde(default))]
    pub results: Vec<MatchOutcome>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duplicate_outcome_policy: DuplicateOutcomePolicy,
    /// Seed for the `random` policy; OS entropy when absent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub random_seed: Option<u64>,
}

impl BracketInput {
    /// Request with defaults: byes allowed, seeded order, no results.
    pub fn new(
        tournament_id: impl Into<String>,
        tournament_name: impl Into<String>,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            tournament_name: tournament_name.into(),
            participants,
            allow_byes: true,
            seeding_method: SeedingMethod::default(),
            sides: SideLabels::default(),
            results: Vec::new(),
            duplicate_outcome_policy: DuplicateOutcomePolicy::default(),
            random_seed: None,
        }
    }

    pub fn with_results(mut self, results: Vec<MatchOutcome>) -> Self {
        self.results = results;
        self
    }

    pub fn with_allow_byes(mut self, allow_byes: bool) -> Self {
        self.allow_byes = allow_byes;
        self
    }

    pub fn with_seeding(mut self, method: SeedingMethod) -> Self {
        self.seeding_method = method;
        self
    }
}

/* -------------------------------------------------------------------------- */
/*                                 Structure                                  */
/* -------------------------------------------------------------------------- */

/// One first-round entry position; `None` occupant is a bye.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub occupant: Option<Participant>,
}

impl Slot {
    #[inline]
    pub fn is_bye(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Half of the draw a match belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    A,
    B,
    Final,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Round {
    pub round_index: u32,
    pub round_name: String,
    pub match_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Match {
    pub match_id: MatchId,
    pub round_index: u32,
    pub round_name: String,
    pub side: Side,
    /// 1-based position within `side`.
    pub position: u32,
    pub team_a: Option<Participant>,
    pub team_b: Option<Participant>,
    pub winner_id: Option<ParticipantId>,
}

impl Match {
    #[inline]
    pub fn has_both_teams(&self) -> bool {
        self.team_a.is_some() && self.team_b.is_some()
    }

    pub fn involves(&self, id: &ParticipantId) -> bool {
        self.team_a.as_ref().is_some_and(|p| p.id == *id)
            || self.team_b.as_ref().is_some_and(|p| p.id == *id)
    }

    /// The resolved winner as a full participant record.
    pub fn winner(&self) -> Option<&Participant> {
        let winner = self.winner_id.as_ref()?;
        [self.team_a.as_ref(), self.team_b.as_ref()]
            .into_iter()
            .flatten()
            .find(|p| p.id == *winner)
    }
}

/// Output side labels, keyed by `Side` token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BracketSides {
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: String,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    pub b: String,
}

impl From<&SideLabels> for BracketSides {
    fn from(l: &SideLabels) -> Self {
        Self { a: l.left_label.clone(), b: l.right_label.clone() }
    }
}

/// Immutable bracket view. Matches are ordered by round, then index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Bracket {
    pub tournament_id: String,
    pub tournament_name: String,
    pub total_participants: usize,
    pub rounds: Vec<Round>,
    pub matches: Vec<Match>,
    pub sides: BracketSides,
}

impl Bracket {
    /// First-round slot count (`2^rounds`).
    #[inline]
    pub fn slots(&self) -> usize {
        1usize << self.rounds.len()
    }

    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().filter(move |m| m.round_index == round)
    }

    pub fn get_match(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.match_id == *id)
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.matches.iter().find(|m| m.side == Side::Final)
    }

    /// Winner of the final, once bound.
    pub fn champion(&self) -> Option<&Participant> {
        self.final_match().and_then(Match::winner)
    }

    /// Label for a side; `None` for the final.
    pub fn side_label(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => Some(&self.sides.a),
            Side::B => Some(&self.sides.b),
            Side::Final => None,
        }
    }
}
