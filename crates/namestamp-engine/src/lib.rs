//! Namestamp Engine - Deterministic timestamp assignment
//!
//! Maps an arbitrary short name to a synthetic "last modified" instant:
//! - Name Normalizer: raw input -> canonical effective name
//! - Category Classifier: effective name -> (category key, index)
//! - Payload Extractor + Lexicographic Fraction Encoder: payload -> [0,1)
//! - Slot Assigner: fraction -> bounded integer slot
//! - Stable Nudge: single-bit hash perturbation for same-slot outputs
//! - Timestamp Composer: (index, slot, nudge) -> absolute instant
//!
//! The whole pipeline is a pure, total function of the input string plus
//! the static configuration tables. No clock, no randomness, no I/O.

pub mod encode;
pub mod engine;
pub mod normalize;
pub mod nudge;

pub use encode::*;
pub use engine::*;
pub use normalize::*;
pub use nudge::*;
