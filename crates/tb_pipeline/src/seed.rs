//! SEED stage: bracket-entry order per the request's seeding policy.

use tb_algo::seeding::order_participants;
use tb_core::entities::{BracketInput, Participant};
use tb_core::rng::RandomSource;

/// Order the validated participants. Only the `random` policy draws from `rng`.
pub fn seed<R: RandomSource>(input: &BracketInput, rng: &mut R) -> Vec<Participant> {
    let ordered = order_participants(&input.participants, input.seeding_method, rng);
    tracing::debug!(
        method = %input.seeding_method,
        first = ordered.first().map(|p| p.id.as_str()).unwrap_or(""),
        "seeded {} participants",
        ordered.len()
    );
    ordered
}
