// crates/tb_algo/src/propagation.rs
//
// Winner propagation arithmetic and the order-independent outcome index.
//
// Round r match i is fed by round r-1 matches 2i (endpoint A) and 2i+1
// (endpoint B). Kept as plain index arithmetic.
//
// Outcome records are keyed by (round, unordered pair) so callers may submit
// A/B in either order. Duplicates resolve per `DuplicateOutcomePolicy`;
// records whose winner is not in the named pair never enter the index.

use std::collections::BTreeMap;

use tb_core::entities::{MatchOutcome, Participant};
use tb_core::ids::ParticipantId;
use tb_core::variables::DuplicateOutcomePolicy;

/// Previous-round match indices feeding match `index`: (A-feeder, B-feeder).
#[inline]
pub fn feeders(index: usize) -> (usize, usize) {
    (2 * index, 2 * index + 1)
}

/// Round-1 bye resolution: exactly one present endpoint wins outright.
pub fn bye_winner(a: Option<&Participant>, b: Option<&Participant>) -> Option<ParticipantId> {
    match (a, b) {
        (Some(p), None) | (None, Some(p)) => Some(p.id.clone()),
        _ => None,
    }
}

// ----------------------------- Outcome index -----------------------------

/// Canonical key: round plus the pair with the smaller id first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct OutcomeKey {
    pub round: u32,
    pub lo: ParticipantId,
    pub hi: ParticipantId,
}

impl OutcomeKey {
    pub fn new(round: u32, a: &ParticipantId, b: &ParticipantId) -> Self {
        let (lo, hi) = if a.as_str() <= b.as_str() { (a, b) } else { (b, a) };
        Self { round, lo: lo.clone(), hi: hi.clone() }
    }
}

/// Winner recorded for one key, with the input position it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedOutcome {
    pub winner: ParticipantId,
    /// 0-based position in the caller's outcome list.
    pub source: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// `winner` names neither player of the record.
    WinnerNotInPair,
    /// Another record for the same (round, pair) took precedence.
    Superseded { by: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectedOutcome {
    pub source: usize,
    pub reason: RejectReason,
}

/// Lookup table from (round, unordered pair) to the applicable winner.
#[derive(Clone, Debug, Default)]
pub struct OutcomeIndex {
    entries: BTreeMap<OutcomeKey, IndexedOutcome>,
    rejected: Vec<RejectedOutcome>,
}

impl OutcomeIndex {
    /// Index `outcomes` in input order under `policy`.
    pub fn build(outcomes: &[MatchOutcome], policy: DuplicateOutcomePolicy) -> Self {
        let mut entries: BTreeMap<OutcomeKey, IndexedOutcome> = BTreeMap::new();
        let mut rejected = Vec::new();

        for (source, o) in outcomes.iter().enumerate() {
            if !o.winner_in_pair() {
                rejected.push(RejectedOutcome { source, reason: RejectReason::WinnerNotInPair });
                continue;
            }
            let key = OutcomeKey::new(o.round, &o.player_a, &o.player_b);
            let incoming = IndexedOutcome { winner: o.winner.clone(), source };
            match (entries.get(&key), policy) {
                (Some(existing), DuplicateOutcomePolicy::FirstWins) => {
                    rejected.push(RejectedOutcome {
                        source,
                        reason: RejectReason::Superseded { by: existing.source },
                    });
                }
                (Some(existing), DuplicateOutcomePolicy::LastWins) => {
                    rejected.push(RejectedOutcome {
                        source: existing.source,
                        reason: RejectReason::Superseded { by: source },
                    });
                    entries.insert(key, incoming);
                }
                (None, _) => {
                    entries.insert(key, incoming);
                }
            }
        }

        rejected.sort_by_key(|r| r.source);
        Self { entries, rejected }
    }

    /// Applicable record for this round and pair, in either order.
    pub fn lookup(&self, round: u32, a: &ParticipantId, b: &ParticipantId) -> Option<&IndexedOutcome> {
        self.entries.get(&OutcomeKey::new(round, a, b))
    }

    /// Records that were never eligible to bind.
    pub fn rejected(&self) -> &[RejectedOutcome] {
        &self.rejected
    }
}
