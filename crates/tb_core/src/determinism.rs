//! Determinism utilities: stable total orders for seeding.
//!
//! I/O-free. Seeded entry order is **always** `(seed, id)` with a missing seed
//! ranking after every present one, so the result never depends on the order
//! the caller listed participants in.

use core::cmp::Ordering;

use crate::entities::Participant;
use crate::ids::ParticipantId;

/* -------------------------------------------------------------------------- */
/*                               Stable Ordering                              */
/* -------------------------------------------------------------------------- */

/// Provide a **total**, stable order for values that must sort canonically.
pub trait StableOrd {
    fn stable_cmp(&self, other: &Self) -> Ordering;
}

impl StableOrd for ParticipantId {
    #[inline]
    fn stable_cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl StableOrd for Participant {
    /// Canonical seeded order is `(seed ascending, missing last, id)`.
    #[inline]
    fn stable_cmp(&self, other: &Self) -> Ordering {
        cmp_seed(self.seed, other.seed).then_with(|| self.id.stable_cmp(&other.id))
    }
}

/// Compare optional seeds with `None` treated as +infinity.
/// Present seeds use the IEEE total order, so the result is always total.
#[inline]
pub fn cmp_seed(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/* -------------------------------------------------------------------------- */
/*                            Canonical sort helpers                           */
/* -------------------------------------------------------------------------- */

/// Sort participants **in place** into canonical seeded order.
#[inline]
pub fn sort_participants_seeded(xs: &mut [Participant]) {
    xs.sort_by(|a, b| a.stable_cmp(b));
}

/* ---------------------------------- Tests --------------------------------- */
