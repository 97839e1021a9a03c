// crates/tb_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Pure bracket algorithms. No I/O, no logging; every function here is a
//! deterministic function of its arguments (plus the injected `RandomSource`
//! for the random seeding policy).

pub mod naming;
pub mod propagation;
pub mod seeding;
pub mod sizing;
pub mod slots;

// Convenience re-exports (pipeline imports these from crate root)
pub use naming::{round_name, side_and_position};
pub use propagation::{
    bye_winner, feeders, IndexedOutcome, OutcomeIndex, OutcomeKey, RejectReason, RejectedOutcome,
};
pub use seeding::{order_participants, order_random, order_seeded};
pub use sizing::{bye_count, covering_size, is_exact_fit, match_count, round_count};
pub use slots::{allocate_slots, fold_pair, fold_pairs};
