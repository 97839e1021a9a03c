//! tb_core: Core types, policies, ordering helpers, and seedable RNG.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`tb_algo`, `tb_pipeline`, `tb_io`, `tb_cli`).
//!
//! - Identifiers: `ParticipantId`, `MatchId` (`R{round}-M{n}`)
//! - Entities: `Participant`, `MatchOutcome`, `Slot`, `Match`, `Round`, `Bracket`
//! - Request shape: `BracketInput` and its side labels
//! - Policies: `SeedingMethod`, `DuplicateOutcomePolicy`, supported sizes
//! - Stable ordering for seeded entry order
//! - Seedable RNG (ChaCha20) behind the `RandomSource` trait
//!
//! Serialization derives are gated behind the `serde` feature (on by default).

#![forbid(unsafe_code)]

pub mod determinism;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod rng;
pub mod variables;

pub use entities::{
    Bracket, BracketInput, BracketSides, Match, MatchOutcome, Participant, Round, Side,
    SideLabels, Slot,
};
pub use errors::InvalidInputError;
pub use ids::{IdError, MatchId, ParticipantId};
pub use rng::{RandomSource, SeedRng};
pub use variables::{DuplicateOutcomePolicy, SeedingMethod};
