//! tb_pipeline: deterministic bracket pipeline
//! (validate → seed → allocate → build_rounds → bind_results → assemble).
//!
//! The crate is I/O-free: it takes a typed `BracketInput` and returns a
//! `Bracket` value. Loading, hashing and file output live in `tb_io`.
//! Every call rebuilds the bracket from scratch; nothing is cached.

pub mod allocate;
pub mod assemble;
pub mod bind_results;
pub mod build_rounds;
pub mod draft;
pub mod report;
pub mod seed;
pub mod validate;

use tb_core::entities::{Bracket, BracketInput, Match, Round};
use tb_core::errors::InvalidInputError;
use tb_core::rng::{RandomSource, SeedRng};
use tb_core::variables::SeedingMethod;

use crate::bind_results::{index_outcomes, RecordedOutcomes};

pub use bind_results::WinnerSource;
pub use draft::{DraftAction, DraftBracket, DraftError};
pub use report::{OutcomeIssue, OutcomeReport};
pub use validate::{validate, Validated};

// --------------------------------- Skeleton ---------------------------------

/// Everything that does not depend on outcomes: round metadata and the
/// first round with byes resolved.
#[derive(Clone, Debug)]
pub(crate) struct Skeleton {
    pub(crate) rounds: Vec<Round>,
    pub(crate) first_round: Vec<Match>,
}

pub(crate) fn build_skeleton<R: RandomSource>(
    input: &BracketInput,
    rng: &mut R,
) -> Result<Skeleton, InvalidInputError> {
    let v = validate::validate(input)?;
    let ordered = seed::seed(input, rng);
    let layout = allocate::allocate(&ordered, v.slots);
    let rounds = build_rounds::build_rounds(v.slots);
    let first_round = build_rounds::first_round(&layout, &rounds);
    tracing::debug!(
        tournament = %input.tournament_id,
        participants = v.count,
        slots = v.slots,
        rounds = rounds.len(),
        "built bracket skeleton"
    );
    Ok(Skeleton { rounds, first_round })
}

pub(crate) fn complete<W: WinnerSource>(input: &BracketInput, skeleton: &Skeleton, source: &mut W) -> Bracket {
    let matches = bind_results::bind_and_propagate(&skeleton.rounds, skeleton.first_round.clone(), source);
    assemble::assemble(input, skeleton.rounds.clone(), matches)
}

// -------------------------------- Public API --------------------------------

/// RNG implied by the request: `randomSeed` when set, OS entropy for the
/// `random` policy otherwise. The seeded policy never draws from it.
pub fn request_rng(input: &BracketInput) -> SeedRng {
    match (input.random_seed, input.seeding_method) {
        (Some(seed), _) => SeedRng::from_seed_u64(seed),
        (None, SeedingMethod::Random) => SeedRng::from_entropy(),
        (None, SeedingMethod::Seeded) => SeedRng::from_seed_u64(0),
    }
}

/// Build the bracket for `input`.
pub fn generate_bracket(input: &BracketInput) -> Result<Bracket, InvalidInputError> {
    let mut rng = request_rng(input);
    generate_bracket_with_rng(input, &mut rng)
}

/// Same as `generate_bracket`, with an injected random source for the
/// `random` seeding policy.
pub fn generate_bracket_with_rng<R: RandomSource>(
    input: &BracketInput,
    rng: &mut R,
) -> Result<Bracket, InvalidInputError> {
    generate_bracket_report(input, rng).map(|(bracket, _)| bracket)
}

/// Build the bracket and report which outcome records did not bind.
pub fn generate_bracket_report<R: RandomSource>(
    input: &BracketInput,
    rng: &mut R,
) -> Result<(Bracket, OutcomeReport), InvalidInputError> {
    let skeleton = build_skeleton(input, rng)?;
    let index = index_outcomes(&input.results, input.duplicate_outcome_policy);
    let mut source = RecordedOutcomes::new(&index);
    let bracket = complete(input, &skeleton, &mut source);
    let report = report::build_report(&input.results, &index, source.applied(), &skeleton.first_round);
    tracing::debug!(
        applied = report.applied.len(),
        issues = report.issues.len(),
        champion = bracket.champion().map(|p| p.id.as_str()).unwrap_or(""),
        "bracket complete"
    );
    Ok((bracket, report))
}
