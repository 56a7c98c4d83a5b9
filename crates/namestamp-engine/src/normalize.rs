//! Name Normalizer - raw input to canonical effective name

use namestamp_core::{builtin_category, CategoryTable, APPS_KEY};

/// Normalize a raw name to its effective form.
///
/// Trim, uppercase, then resolve in order:
/// 1. exact match in the override table -> category key + name,
/// 2. exact match in the hard-coded built-in list -> same prefixing,
/// 3. otherwise unchanged (the name is assumed to carry its own prefix
///    or to belong to the default bucket).
///
/// A match on the `APPS` pseudo-category yields the literal effective
/// name `APPS`, since the classifier matches that token exactly.
///
/// Empty input is not an error here: it normalizes to the empty string
/// and flows through the rest of the pipeline.
pub fn normalize(table: &CategoryTable, raw: &str) -> String {
    let upper = raw.trim().to_uppercase();

    if let Some(key) = table.override_category(&upper) {
        return prefixed(key, &upper);
    }
    // Built-ins are checked even when the override table has been edited
    // to drop them; the two layers are intentionally redundant.
    if let Some(key) = builtin_category(&upper) {
        return prefixed(key, &upper);
    }

    upper
}

fn prefixed(key: &str, name: &str) -> String {
    if key == APPS_KEY {
        APPS_KEY.to_string()
    } else {
        format!("{key}{name}")
    }
}
