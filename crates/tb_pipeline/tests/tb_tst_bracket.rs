//! TB-BRACKET v0: end-to-end bracket generation tests.
//!
//! Scenarios (5 seeded / 4 unseeded / 3 without byes), propagation and
//! order-independence properties, duplicate-outcome policies, the outcome
//! report and the draft reducer, all through the public pipeline surface.

use proptest::prelude::*;

use tb_core::entities::{Bracket, BracketInput, Match, MatchOutcome, Participant, Side};
use tb_core::ids::MatchId;
use tb_core::rng::SeedRng;
use tb_core::variables::{DuplicateOutcomePolicy, SeedingMethod};
use tb_pipeline::report::{CODE_BYE_OVERRIDE, CODE_SUPERSEDED, CODE_UNMATCHED, CODE_WINNER_NOT_IN_PAIR};
use tb_pipeline::{generate_bracket, generate_bracket_report, generate_bracket_with_rng, DraftAction, DraftBracket};

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn seeded_field(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::seeded(format!("p{:02}", i + 1), format!("Player {}", i + 1), i as u32 + 1))
        .collect()
}

fn named(ids: &[&str]) -> Vec<Participant> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Participant::seeded(*id, id.to_uppercase(), i as u32 + 1))
        .collect()
}

fn team(m: &Match, a: bool) -> Option<&str> {
    let t = if a { &m.team_a } else { &m.team_b };
    t.as_ref().map(|p| p.id.as_str())
}

fn winner(m: &Match) -> Option<&str> {
    m.winner_id.as_ref().map(|w| w.as_str())
}

fn get<'a>(b: &'a Bracket, id: &str) -> &'a Match {
    let id: MatchId = id.parse().expect("match id");
    b.get_match(&id).expect("match present")
}

/// Decide every undecided, fully populated match for endpoint A (or B).
fn decide_all(b: &Bracket, pick_a: bool) -> Vec<MatchOutcome> {
    b.matches
        .iter()
        .filter(|m| m.has_both_teams() && m.winner_id.is_none())
        .filter_map(|m| {
            let (a, bb) = (team(m, true)?, team(m, false)?);
            Some(MatchOutcome::new(m.round_index, a, bb, if pick_a { a } else { bb }))
        })
        .collect()
}

/// Play the bracket to completion by repeatedly feeding decisions back in.
fn play_out(mut input: BracketInput, pick_a: bool) -> Bracket {
    loop {
        let b = generate_bracket(&input).expect("valid input");
        let more = decide_all(&b, pick_a);
        if more.is_empty() {
            return b;
        }
        input.results.extend(more);
    }
}

// -----------------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------------

#[test]
fn five_seeded_participants_fill_eight_slots() {
    let input = BracketInput::new("t5", "Five", named(&["A", "B", "C", "D", "E"]));
    let b = generate_bracket(&input).unwrap();

    assert_eq!(b.total_participants, 5);
    assert_eq!(b.slots(), 8);
    let names: Vec<&str> = b.rounds.iter().map(|r| r.round_name.as_str()).collect();
    assert_eq!(names, vec!["Quarter-Finals", "Semi-Finals", "Final"]);

    let r1: Vec<&Match> = b.matches_in_round(1).collect();
    let pairs: Vec<(Option<&str>, Option<&str>)> = r1.iter().map(|m| (team(m, true), team(m, false))).collect();
    assert_eq!(
        pairs,
        vec![(Some("A"), None), (Some("B"), None), (Some("C"), None), (Some("D"), Some("E"))]
    );
    let winners: Vec<Option<&str>> = r1.iter().map(|m| winner(m)).collect();
    assert_eq!(winners, vec![Some("A"), Some("B"), Some("C"), None]);

    // Semi-final A is fully populated by bye winners; B waits on D vs E.
    let sa = get(&b, "R2-M1");
    assert_eq!((team(sa, true), team(sa, false)), (Some("A"), Some("B")));
    let sb = get(&b, "R2-M2");
    assert_eq!((team(sb, true), team(sb, false)), (Some("C"), None));

    // Supplying D vs E (in reverse order) fills the second semi.
    let b = generate_bracket(&input.with_results(vec![MatchOutcome::new(1, "E", "D", "E")])).unwrap();
    assert_eq!(winner(get(&b, "R1-M4")), Some("E"));
    let sb = get(&b, "R2-M2");
    assert_eq!((team(sb, true), team(sb, false)), (Some("C"), Some("E")));
}

#[test]
fn four_participants_without_results() {
    let ps = vec![
        Participant::new("w", "W"),
        Participant::new("x", "X"),
        Participant::new("y", "Y"),
        Participant::new("z", "Z"),
    ];
    let b = generate_bracket(&BracketInput::new("t4", "Four", ps)).unwrap();

    assert_eq!(b.rounds.len(), 2);
    assert_eq!(b.rounds[0].round_name, "Semi-Finals");
    assert_eq!(b.rounds[1].round_name, "Final");
    assert_eq!(b.matches.len(), 3);
    assert!(b.matches.iter().all(|m| m.winner_id.is_none()));

    let fin = b.final_match().unwrap();
    assert_eq!(fin.match_id.as_str(), "R2-M1");
    assert_eq!(fin.side, Side::Final);
    assert!(fin.team_a.is_none() && fin.team_b.is_none());
}

#[test]
fn three_participants_without_byes_is_rejected() {
    let input = BracketInput::new("t3", "Three", named(&["a", "b", "c"])).with_allow_byes(false);
    let err = generate_bracket(&input).unwrap_err();
    assert_eq!(err.reason(), "odd count without byes");
}

#[test]
fn sixty_five_participants_is_unsupported() {
    let err = generate_bracket(&BracketInput::new("t", "T", seeded_field(65))).unwrap_err();
    assert_eq!(err.reason(), "unsupported bracket size");
}

// -----------------------------------------------------------------------------
// Output shape
// -----------------------------------------------------------------------------

#[test]
fn sides_positions_and_labels() {
    let mut input = BracketInput::new("t", "T", seeded_field(8));
    input.sides.left_label = "North".into();
    input.sides.right_label = "South".into();
    let b = generate_bracket(&input).unwrap();

    let r1: Vec<(Side, u32)> = b.matches_in_round(1).map(|m| (m.side, m.position)).collect();
    assert_eq!(r1, vec![(Side::A, 1), (Side::A, 2), (Side::B, 1), (Side::B, 2)]);
    assert_eq!(b.side_label(Side::A), Some("North"));
    assert_eq!(b.side_label(Side::B), Some("South"));
    assert_eq!(b.side_label(Side::Final), None);

    let semis: Vec<(Side, u32)> = b.matches_in_round(2).map(|m| (m.side, m.position)).collect();
    assert_eq!(semis, vec![(Side::A, 1), (Side::B, 1)]);
}

#[test]
fn bracket_json_uses_camel_case_and_side_tokens() {
    let b = generate_bracket(&BracketInput::new("t", "Cup", named(&["a", "b"]))).unwrap();
    let v = serde_json::to_value(&b).unwrap();
    assert_eq!(v["tournamentId"], "t");
    assert_eq!(v["totalParticipants"], 2);
    assert_eq!(v["rounds"][0]["roundName"], "Final");
    assert_eq!(v["rounds"][0]["matchCount"], 1);
    assert_eq!(v["matches"][0]["matchId"], "R1-M1");
    assert_eq!(v["matches"][0]["side"], "Final");
    assert_eq!(v["matches"][0]["teamA"]["id"], "a");
    assert!(v["matches"][0]["winnerId"].is_null());
    assert_eq!(v["sides"]["A"], "Side A");
    assert_eq!(v["sides"]["B"], "Side B");
}

#[test]
fn request_json_round_trips_into_generation() {
    let raw = r#"{
        "tournamentId": "cup-7",
        "tournamentName": "Cup",
        "participants": [
            {"id": "a", "name": "A", "seed": 2},
            {"id": "b", "name": "B", "seed": 1},
            {"id": "c", "name": "C"}
        ],
        "results": [{"round": 1, "playerA": "c", "playerB": "a", "winner": "c"}]
    }"#;
    let input: BracketInput = serde_json::from_str(raw).unwrap();
    let b = generate_bracket(&input).unwrap();
    // Order b, a, c: R1-M1 = b vs bye, R1-M2 = a vs c.
    assert_eq!(winner(get(&b, "R1-M1")), Some("b"));
    assert_eq!(winner(get(&b, "R1-M2")), Some("c"));
    let fin = get(&b, "R2-M1");
    assert_eq!((team(fin, true), team(fin, false)), (Some("b"), Some("c")));
}

#[test]
fn negative_and_fractional_seeds_order_the_draw() {
    let raw = r#"{
        "tournamentId": "cup-8",
        "participants": [
            {"id": "two", "name": "Two", "seed": 2},
            {"id": "half", "name": "Half", "seed": 1.5},
            {"id": "neg", "name": "Neg", "seed": -1},
            {"id": "none", "name": "None"}
        ]
    }"#;
    let input: BracketInput = serde_json::from_str(raw).unwrap();
    let b = generate_bracket(&input).unwrap();
    // Order neg, half, two, none: R1-M1 = neg vs none, R1-M2 = half vs two.
    let r1 = get(&b, "R1-M1");
    assert_eq!((team(r1, true), team(r1, false)), (Some("neg"), Some("none")));
    let r2 = get(&b, "R1-M2");
    assert_eq!((team(r2, true), team(r2, false)), (Some("half"), Some("two")));
}

// -----------------------------------------------------------------------------
// Outcomes: duplicates, invalid records, report
// -----------------------------------------------------------------------------

#[test]
fn duplicate_outcomes_first_wins_by_default() {
    let dupes = vec![MatchOutcome::new(1, "a", "b", "a"), MatchOutcome::new(1, "b", "a", "b")];
    let input = BracketInput::new("t", "T", named(&["a", "b"])).with_results(dupes);

    let b = generate_bracket(&input).unwrap();
    assert_eq!(b.champion().map(|p| p.id.as_str()), Some("a"));

    let mut last = input.clone();
    last.duplicate_outcome_policy = DuplicateOutcomePolicy::LastWins;
    let b = generate_bracket(&last).unwrap();
    assert_eq!(b.champion().map(|p| p.id.as_str()), Some("b"));
}

#[test]
fn report_explains_every_unbound_record() {
    // 3 entrants: R1-M1 = a vs bye, R1-M2 = b vs c
    let results = vec![
        MatchOutcome::new(1, "c", "b", "b"), // 0 applied
        MatchOutcome::new(1, "b", "c", "c"), // 1 superseded by 0
        MatchOutcome::new(1, "a", "c", "a"), // 2 a advanced by bye
        MatchOutcome::new(2, "a", "b", "q"), // 3 winner not in pair
        MatchOutcome::new(2, "a", "c", "a"), // 4 c never reached round 2
        MatchOutcome::new(2, "b", "a", "a"), // 5 applied
    ];
    let input = BracketInput::new("t", "T", named(&["a", "b", "c"])).with_results(results);
    let (b, report) = generate_bracket_report(&input, &mut SeedRng::from_seed_u64(0)).unwrap();

    assert_eq!(b.champion().map(|p| p.id.as_str()), Some("a"));
    assert_eq!(report.applied, vec![0, 5]);
    let got: Vec<(&str, usize)> = report.issues.iter().map(|i| (i.code, i.record)).collect();
    assert_eq!(
        got,
        vec![
            (CODE_BYE_OVERRIDE, 2),
            (CODE_SUPERSEDED, 1),
            (CODE_UNMATCHED, 4),
            (CODE_WINNER_NOT_IN_PAIR, 3),
        ]
    );
}

#[test]
fn duplicates_for_a_missing_pairing_are_all_unmatched() {
    // x and y never meet; neither duplicate binds, so neither is "superseded".
    let results = vec![MatchOutcome::new(1, "x", "y", "x"), MatchOutcome::new(1, "y", "x", "y")];
    for policy in [DuplicateOutcomePolicy::FirstWins, DuplicateOutcomePolicy::LastWins] {
        let mut input = BracketInput::new("t", "T", named(&["a", "b"])).with_results(results.clone());
        input.duplicate_outcome_policy = policy;
        let (_, report) = generate_bracket_report(&input, &mut SeedRng::from_seed_u64(0)).unwrap();
        let got: Vec<(&str, usize)> = report.issues.iter().map(|i| (i.code, i.record)).collect();
        assert_eq!(got, vec![(CODE_UNMATCHED, 0), (CODE_UNMATCHED, 1)], "{policy}");
    }
}

#[test]
fn invalid_winner_does_not_shadow_later_record() {
    let results = vec![MatchOutcome::new(1, "a", "b", "zz"), MatchOutcome::new(1, "a", "b", "b")];
    let input = BracketInput::new("t", "T", named(&["a", "b"])).with_results(results);
    let b = generate_bracket(&input).unwrap();
    assert_eq!(b.champion().map(|p| p.id.as_str()), Some("b"));
}

#[test]
fn outcomes_for_a_round_do_not_bind_in_another() {
    let input = BracketInput::new("t", "T", named(&["a", "b", "c", "d"]))
        .with_results(vec![MatchOutcome::new(2, "a", "d", "a")]);
    let b = generate_bracket(&input).unwrap();
    assert_eq!(winner(get(&b, "R1-M1")), None);
}

// -----------------------------------------------------------------------------
// Random seeding
// -----------------------------------------------------------------------------

#[test]
fn random_seeding_reproducible_with_seed() {
    let mut input = BracketInput::new("t", "T", seeded_field(12)).with_seeding(SeedingMethod::Random);
    input.random_seed = Some(2024);
    let a = generate_bracket(&input).unwrap();
    let b = generate_bracket(&input).unwrap();
    assert_eq!(a, b);

    let c = generate_bracket_with_rng(&input, &mut SeedRng::from_seed_u64(2024)).unwrap();
    assert_eq!(a, c);
}

#[test]
fn random_seeding_without_seed_still_valid() {
    let input = BracketInput::new("t", "T", seeded_field(7)).with_seeding(SeedingMethod::Random);
    let b = generate_bracket(&input).unwrap();
    let mut ids: Vec<&str> = b
        .matches_in_round(1)
        .flat_map(|m| [team(m, true), team(m, false)])
        .flatten()
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["p01", "p02", "p03", "p04", "p05", "p06", "p07"]);
}

// -----------------------------------------------------------------------------
// Draft reducer ↔ generation
// -----------------------------------------------------------------------------

#[test]
fn draft_outcomes_regenerate_the_same_bracket() {
    let input = BracketInput::new("t", "T", seeded_field(6));
    let draft = DraftBracket::new(&input)
        .unwrap()
        .apply(DraftAction::SetWinner { match_id: "R1-M3".parse().unwrap(), winner: "p06".into() })
        .unwrap()
        .apply(DraftAction::SetWinner { match_id: "R1-M4".parse().unwrap(), winner: "p04".into() })
        .unwrap()
        .apply(DraftAction::SetWinner { match_id: "R2-M2".parse().unwrap(), winner: "p04".into() })
        .unwrap();
    assert_eq!(draft.to_outcomes().len(), 3);

    let regenerated = generate_bracket(&input.clone().with_results(draft.to_outcomes())).unwrap();
    assert_eq!(regenerated, draft.view());
    let fin = get(&regenerated, "R3-M1");
    assert_eq!((team(fin, true), team(fin, false)), (None, Some("p04")));
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shape_invariants(n in 2usize..=64) {
        let b = generate_bracket(&BracketInput::new("t", "T", seeded_field(n))).unwrap();
        let slots = b.slots();
        prop_assert!(slots.is_power_of_two() && slots >= n && slots / 2 < n);
        prop_assert_eq!(b.rounds.len() as u32, slots.trailing_zeros());
        for r in &b.rounds {
            prop_assert_eq!(r.match_count, slots >> r.round_index);
            prop_assert_eq!(b.matches_in_round(r.round_index).count(), r.match_count);
        }
        prop_assert_eq!(b.rounds.last().map(|r| r.match_count), Some(1));

        // Every participant exactly once in round 1; one-bye matches auto-resolve.
        let mut seen: Vec<&str> = Vec::new();
        for m in b.matches_in_round(1) {
            seen.extend(team(m, true));
            seen.extend(team(m, false));
            if m.team_a.is_some() != m.team_b.is_some() {
                prop_assert!(winner(m).is_some());
                prop_assert!(winner(m) == team(m, true) || winner(m) == team(m, false));
            }
        }
        seen.sort_unstable();
        let mut expected: Vec<String> = seeded_field(n).into_iter().map(|p| p.id.to_string()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_is_input_order_independent(n in 2usize..=32, rot in 0usize..32) {
        let ps = seeded_field(n);
        let mut rotated = ps.clone();
        rotated.rotate_left(rot % n);
        let a = generate_bracket(&BracketInput::new("t", "T", ps)).unwrap();
        let b = generate_bracket(&BracketInput::new("t", "T", rotated)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn outcome_order_and_pair_order_do_not_matter(n in 2usize..=32, pick_a in any::<bool>()) {
        let input = BracketInput::new("t", "T", seeded_field(n));
        let full = play_out(input.clone(), pick_a);
        prop_assert!(full.champion().is_some());

        // Same records, reversed list and swapped A/B.
        let mut flipped = input.clone();
        let mut recs: Vec<MatchOutcome> = full
            .matches
            .iter()
            .filter(|m| m.has_both_teams())
            .filter_map(|m| {
                Some(MatchOutcome::new(
                    m.round_index,
                    team(m, false)?,
                    team(m, true)?,
                    winner(m)?,
                ))
            })
            .collect();
        recs.reverse();
        flipped.results = recs;
        prop_assert_eq!(generate_bracket(&flipped).unwrap(), full);
    }

    #[test]
    fn later_rounds_come_from_designated_feeders(n in 2usize..=64, pick_a in any::<bool>()) {
        let b = play_out(BracketInput::new("t", "T", seeded_field(n)), pick_a);
        for r in b.rounds.iter().skip(1) {
            let prev: Vec<&Match> = b.matches_in_round(r.round_index - 1).collect();
            for (i, m) in b.matches_in_round(r.round_index).enumerate() {
                prop_assert_eq!(team(m, true), winner(prev[2 * i]));
                prop_assert_eq!(team(m, false), winner(prev[2 * i + 1]));
                if let Some(w) = winner(m) {
                    prop_assert!(Some(w) == team(m, true) || Some(w) == team(m, false));
                }
            }
        }
    }
}
