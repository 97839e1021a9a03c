//! Outcome binding report.
//!
//! Non-fatal findings about the caller's outcome records. The bracket is
//! never affected by the report; it only explains which records did not
//! bind and why. One issue per record, sorted by (code, record index).

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tb_algo::propagation::{OutcomeIndex, RejectReason};
use tb_core::entities::{Match, MatchOutcome};
use tb_core::ids::ParticipantId;

pub const CODE_BYE_OVERRIDE: &str = "Outcome.ByeOverride";
pub const CODE_SUPERSEDED: &str = "Outcome.Superseded";
pub const CODE_UNMATCHED: &str = "Outcome.Unmatched";
pub const CODE_WINNER_NOT_IN_PAIR: &str = "Outcome.WinnerNotInPair";

/// One finding about a single outcome record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeIssue {
    pub code: &'static str,
    /// 0-based position in the request's `results`.
    pub record: usize,
    pub message: String,
}

/// Deterministic report; `applied` lists records that set a winner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeReport {
    pub applied: Vec<usize>,
    pub issues: Vec<OutcomeIssue>,
}

impl OutcomeReport {
    /// True iff every record bound to a match.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Classify every record against the index and what actually bound.
pub fn build_report(
    outcomes: &[MatchOutcome],
    index: &OutcomeIndex,
    applied: &BTreeSet<usize>,
    first_round: &[Match],
) -> OutcomeReport {
    // Participants advanced by a round-1 bye.
    let bye_advanced: BTreeSet<&ParticipantId> = first_round
        .iter()
        .filter(|m| !m.has_both_teams())
        .filter_map(|m| m.winner_id.as_ref())
        .collect();

    let mut issues = Vec::new();
    let rejected: BTreeMap<usize, RejectReason> =
        index.rejected().iter().map(|r| (r.source, r.reason)).collect();

    for (record, o) in outcomes.iter().enumerate() {
        if applied.contains(&record) {
            continue;
        }
        // A record superseded by one that never bound is judged on its own pairing.
        let reason = rejected.get(&record).copied().filter(|r| match r {
            RejectReason::Superseded { by } => applied.contains(by),
            RejectReason::WinnerNotInPair => true,
        });
        let pair = format!("round {} {} vs {}", o.round, o.player_a, o.player_b);
        let issue = match reason {
            Some(RejectReason::WinnerNotInPair) => OutcomeIssue {
                code: CODE_WINNER_NOT_IN_PAIR,
                record,
                message: format!("{pair}: winner {} is not in the pair", o.winner),
            },
            Some(RejectReason::Superseded { by }) => OutcomeIssue {
                code: CODE_SUPERSEDED,
                record,
                message: format!("{pair}: superseded by record {by}"),
            },
            None if o.round == 1
                && (bye_advanced.contains(&o.player_a) || bye_advanced.contains(&o.player_b)) =>
            {
                OutcomeIssue {
                    code: CODE_BYE_OVERRIDE,
                    record,
                    message: format!("{pair}: pairing already resolved by a bye"),
                }
            }
            None => OutcomeIssue {
                code: CODE_UNMATCHED,
                record,
                message: format!("{pair}: no generated match has this pairing"),
            },
        };
        issues.push(issue);
    }

    sort_issues_stably(&mut issues);
    OutcomeReport { applied: applied.iter().copied().collect(), issues }
}

fn sort_issues_stably(issues: &mut [OutcomeIssue]) {
    issues.sort_by(|a, b| a.code.cmp(b.code).then(a.record.cmp(&b.record)));
}
