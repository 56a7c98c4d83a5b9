//! Error types for namestamp

use thiserror::Error;

/// Configuration and validation errors.
///
/// The planning pipeline itself is total and never fails; errors only
/// arise when building custom tables or engine configuration.
#[derive(Error, Debug)]
pub enum StampError {
    #[error("category order table is missing the DEFAULT entry")]
    MissingDefault,

    #[error("duplicate category key: {0}")]
    DuplicateCategory(String),

    #[error("override references unknown category: {0}")]
    UnknownOverrideCategory(String),

    #[error("slots_per_category must be positive, got {0}")]
    NoSlots(u32),

    #[error("seconds_between_items must be at least 2, got {0}")]
    SpacingTooSmall(i64),
}

/// Result type for namestamp operations.
pub type StampResult<T> = Result<T, StampError>;
