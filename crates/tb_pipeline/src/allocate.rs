//! ALLOCATE stage: lay ordered participants into `slots` positions.
//! Trailing positions are byes; the count was already checked by VALIDATE.

use tb_algo::sizing::bye_count;
use tb_algo::slots::allocate_slots;
use tb_core::entities::{Participant, Slot};

pub fn allocate(ordered: &[Participant], slots: usize) -> Vec<Slot> {
    let layout = allocate_slots(ordered, slots);
    tracing::debug!(slots, byes = bye_count(slots, ordered.len()), "allocated slots");
    layout
}
