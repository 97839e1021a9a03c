// crates/tb_algo/src/seeding.rs
//
// Bracket-entry order: the order participants are laid into consecutive slots
// before fold pairing. Output length always equals input length (no padding).

use tb_core::determinism::sort_participants_seeded;
use tb_core::entities::Participant;
use tb_core::rng::RandomSource;
use tb_core::variables::SeedingMethod;

/// Ascending by seed (missing seed last), ties by id. Input order is irrelevant.
pub fn order_seeded(participants: &[Participant]) -> Vec<Participant> {
    let mut out = participants.to_vec();
    sort_participants_seeded(&mut out);
    out
}

/// Uniform random permutation drawn from `rng`.
///
/// The shuffle starts from the canonical seeded order, so a fixed RNG stream
/// gives the same draw regardless of how the caller listed participants.
pub fn order_random<R: RandomSource>(participants: &[Participant], rng: &mut R) -> Vec<Participant> {
    let mut out = order_seeded(participants);
    rng.shuffle_in_place(&mut out);
    out
}

/// Dispatch on the seeding policy.
pub fn order_participants<R: RandomSource>(
    participants: &[Participant],
    method: SeedingMethod,
    rng: &mut R,
) -> Vec<Participant> {
    match method {
        SeedingMethod::Seeded => order_seeded(participants),
        SeedingMethod::Random => order_random(participants, rng),
    }
}
