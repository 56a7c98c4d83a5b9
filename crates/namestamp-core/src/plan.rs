//! The Plan record - the sole output of the assignment engine

use chrono::{DateTime, Utc};

/// Everything the engine derives from one input name.
///
/// A Plan is a pure function of the input string for a fixed
/// configuration: same input, bit-identical Plan, every time. It has no
/// identity beyond its fields and is never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Raw input as received.
    pub input: String,
    /// Canonical, category-prefixed name after override resolution.
    pub effective_name: String,
    /// Display label for the category (key suffixed with `*`, or the
    /// literal `APPS` / `DEFAULT`). Cosmetic only.
    pub category: String,
    /// Category key used for classification.
    pub category_key: String,
    /// Zero-based position of the category in the order table.
    pub category_index: usize,
    /// Position within the category's time block.
    pub slot: u32,
    /// Total seconds subtracted from the base instant.
    pub offset_seconds: i64,
    /// The string actually used for intra-category ordering.
    pub payload_used: String,
    /// Final absolute instant.
    pub instant: DateTime<Utc>,
    /// The same instant rendered in the host's local calendar.
    pub iso_local: String,
    /// Milliseconds since the Unix epoch.
    pub epoch_millis: i64,
}
