//! Stamp Engine - orchestrates the pipeline and composes the timestamp

use chrono::{DateTime, Duration, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

use namestamp_core::{category_label, CategoryTable, Plan, StampError, StampResult};

use crate::{lex_fraction, normalize, nudge_bit, payload_for, ENCODE_DEPTH};

/// Base civil wall time: 2098-12-31 23:59:59, read in the host's local
/// calendar. Every assigned timestamp is this instant minus an offset, so
/// lower offsets mean "newer".
const BASE_YEAR: i32 = 2098;
const BASE_MONTH: u32 = 12;
const BASE_DAY: u32 = 31;
const BASE_HOUR: u32 = 23;
const BASE_MIN: u32 = 59;
const BASE_SEC: u32 = 59;

/// Engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Size of each category's time block, in slots.
    pub slots_per_category: u32,
    /// Seconds between adjacent slots.
    pub seconds_between_items: i64,
    /// Payload characters read by the fraction encoder.
    pub encode_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            slots_per_category: 10_000,
            seconds_between_items: 2,
            encode_depth: ENCODE_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Validate the block-separation invariants.
    ///
    /// Spacing below 2 would let the nudge push the newest member of one
    /// category onto the boundary of the block above it.
    pub fn validate(&self) -> StampResult<()> {
        if self.slots_per_category == 0 {
            return Err(StampError::NoSlots(self.slots_per_category));
        }
        if self.seconds_between_items < 2 {
            return Err(StampError::SpacingTooSmall(self.seconds_between_items));
        }
        Ok(())
    }

    /// Total seconds spanned by one category block.
    pub fn block_seconds(&self) -> i64 {
        self.slots_per_category as i64 * self.seconds_between_items
    }
}

/// The deterministic timestamp assignment engine.
///
/// Pure and reentrant: `plan` takes `&self`, touches no shared state and
/// never blocks, so one engine can serve any number of concurrent callers.
pub struct StampEngine {
    config: EngineConfig,
    table: CategoryTable,
    base: DateTime<Utc>,
}

impl StampEngine {
    /// Engine with the built-in tables and default configuration.
    pub fn new() -> Self {
        StampEngine {
            config: EngineConfig::default(),
            table: CategoryTable::builtin(),
            base: base_instant(),
        }
    }

    /// Engine with custom configuration and tables.
    pub fn with_config(config: EngineConfig, table: CategoryTable) -> StampResult<Self> {
        config.validate()?;
        Ok(StampEngine {
            config,
            table,
            base: base_instant(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// The fixed base instant all offsets are subtracted from.
    pub fn base(&self) -> DateTime<Utc> {
        self.base
    }

    /// Run the full pipeline for one name.
    ///
    /// Total for every string input, including the empty string: every
    /// stage has an explicit fallback, so this never fails.
    pub fn plan(&self, name: &str) -> Plan {
        let effective = normalize(&self.table, name);
        let (category_index, key) = self.table.classify(&effective);
        let payload = payload_for(&effective, key);

        let fraction = lex_fraction(&payload, self.config.encode_depth);
        let slot = crate::slot_for(fraction, self.config.slots_per_category);
        let nudge = nudge_bit(&effective) as i64;

        let category_offset = category_index as i64 * self.config.block_seconds();
        let name_offset = slot as i64 * self.config.seconds_between_items + nudge;
        let offset_seconds = category_offset + name_offset;

        let instant = self.base - Duration::seconds(offset_seconds);
        let local = instant.with_timezone(&Local);

        Plan {
            input: name.to_string(),
            effective_name: effective,
            category: category_label(key),
            category_key: key.to_string(),
            category_index,
            slot,
            offset_seconds,
            payload_used: payload,
            instant,
            iso_local: local.to_rfc3339_opts(SecondsFormat::Secs, false),
            epoch_millis: instant.timestamp_millis(),
        }
    }
}

impl Default for StampEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the base wall time against the local timezone.
///
/// The fallback arms cover DST gaps and invalid dates, neither of which
/// can occur for the fixed base wall time; they exist so no panic path
/// survives into the mapping.
fn base_instant() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(BASE_YEAR, BASE_MONTH, BASE_DAY)
        .and_then(|d| d.and_hms_opt(BASE_HOUR, BASE_MIN, BASE_SEC))
        .and_then(|wall| Local.from_local_datetime(&wall).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
