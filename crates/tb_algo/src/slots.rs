// crates/tb_algo/src/slots.rs
//
// Slot allocation and fold pairing.
//
// Ordered participant `i` takes slot `i`; the trailing `slots - count`
// positions are byes. Round-1 match `i` pairs slot `i` with slot
// `slots - 1 - i`, so the lowest slot indices (top seeds) meet the trailing
// bye slots first.

use tb_core::entities::{Participant, Slot};

/// Lay `ordered` into `slots` positions, padding with byes.
/// `ordered.len()` must not exceed `slots`.
pub fn allocate_slots(ordered: &[Participant], slots: usize) -> Vec<Slot> {
    debug_assert!(ordered.len() <= slots);
    (0..slots)
        .map(|index| Slot { index, occupant: ordered.get(index).cloned() })
        .collect()
}

/// Slot indices for round-1 match `i`.
#[inline]
pub fn fold_pair(slots: usize, i: usize) -> (usize, usize) {
    (i, slots - 1 - i)
}

/// All round-1 slot pairs in match order.
pub fn fold_pairs(slots: usize) -> Vec<(usize, usize)> {
    (0..slots / 2).map(|i| fold_pair(slots, i)).collect()
}
