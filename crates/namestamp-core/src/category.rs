//! Category tables and classification
//!
//! Categories establish the coarse ordering of names: every member of a
//! lower-indexed category receives a strictly newer timestamp than every
//! member of a higher-indexed one. The order table is an explicit ordered
//! list because classification is first-match prefix testing - some keys
//! are prefixes of others, so an unordered map lookup would be wrong.

use crate::error::{StampError, StampResult};

/// Sentinel category for names matching no prefix rule.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Pseudo-category for the empty-prefix bucket. Matched by exact token,
/// never by prefix.
pub const APPS_KEY: &str = "APPS";

/// Default category order, newest block first.
pub const DEFAULT_ORDER: [&str; 8] = [
    "APP_", "APPS", "PS1_", "RAA_", "DEFAULT", "SYS_", "ZZY_", "ZZZ_",
];

/// Default override table: exact uppercase names treated as members of a
/// category despite carrying no matching prefix.
pub const DEFAULT_OVERRIDES: [(&str, &[&str]); 3] = [
    ("RAA_", &["RESTART", "REBOOT"]),
    ("SYS_", &["BOOT", "SHUTDOWN"]),
    (APPS_KEY, &["HOME"]),
];

/// Hard-coded exact names checked after the override table.
///
/// This duplicates the default overrides on purpose: it is a safety net
/// that survives any edit to the configurable table. Keep both layers.
pub const BUILTIN_NAMES: [(&str, &str); 5] = [
    ("RESTART", "RAA_"),
    ("REBOOT", "RAA_"),
    ("BOOT", "SYS_"),
    ("SHUTDOWN", "SYS_"),
    ("HOME", APPS_KEY),
];

/// Resolve a built-in exact name to its category key.
pub fn builtin_category(upper: &str) -> Option<&'static str> {
    BUILTIN_NAMES
        .iter()
        .find(|(name, _)| *name == upper)
        .map(|(_, key)| *key)
}

/// Display label for a category key. Cosmetic only, never used in ordering.
pub fn category_label(key: &str) -> String {
    if key == APPS_KEY || key == DEFAULT_KEY {
        key.to_string()
    } else {
        format!("{key}*")
    }
}

/// Validated category configuration: the order table plus the override
/// table. Immutable after construction.
#[derive(Clone, Debug)]
pub struct CategoryTable {
    order: Vec<String>,
    overrides: Vec<(String, Vec<String>)>,
    default_index: usize,
}

impl CategoryTable {
    /// Build a table from custom configuration.
    ///
    /// The order table must contain `DEFAULT` exactly once and no
    /// duplicate keys; every override category must appear in the order
    /// table.
    pub fn new(
        order: Vec<String>,
        overrides: Vec<(String, Vec<String>)>,
    ) -> StampResult<Self> {
        for (i, key) in order.iter().enumerate() {
            if order[..i].contains(key) {
                return Err(StampError::DuplicateCategory(key.clone()));
            }
        }

        let default_index = order
            .iter()
            .position(|k| k == DEFAULT_KEY)
            .ok_or(StampError::MissingDefault)?;

        for (key, _) in &overrides {
            if !order.contains(key) {
                return Err(StampError::UnknownOverrideCategory(key.clone()));
            }
        }

        Ok(CategoryTable {
            order,
            overrides,
            default_index,
        })
    }

    /// The built-in table: default order and default overrides.
    pub fn builtin() -> Self {
        let order = DEFAULT_ORDER.iter().map(|k| k.to_string()).collect();
        let overrides = DEFAULT_OVERRIDES
            .iter()
            .map(|(key, names)| {
                (
                    key.to_string(),
                    names.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect();

        // The default tables are statically well-formed.
        match Self::new(order, overrides) {
            Ok(table) => table,
            Err(_) => unreachable!("default category tables are valid"),
        }
    }

    /// Number of categories, including `DEFAULT`.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index of the `DEFAULT` sentinel.
    pub fn default_index(&self) -> usize {
        self.default_index
    }

    /// Zero-based index of a category key, if present.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }

    /// Look up an exact uppercase name in the override table.
    /// Entries are scanned in table order; the first match wins.
    pub fn override_category(&self, upper: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(_, names)| names.iter().any(|n| n == upper))
            .map(|(key, _)| key.as_str())
    }

    /// Classify an effective name into (category index, category key).
    ///
    /// Rules are evaluated in table order, first match wins:
    /// - `APPS` matches only the exact token,
    /// - `SYS_` also accepts a bare `SYS` with no trailing underscore,
    /// - every other key is a plain prefix test,
    /// - `DEFAULT` never matches directly; it is the fallback.
    pub fn classify(&self, effective: &str) -> (usize, &str) {
        for (index, key) in self.order.iter().enumerate() {
            let matched = match key.as_str() {
                DEFAULT_KEY => false,
                APPS_KEY => effective == APPS_KEY,
                "SYS_" => effective == "SYS" || effective.starts_with("SYS_"),
                prefix => effective.starts_with(prefix),
            };
            if matched {
                return (index, key);
            }
        }
        (self.default_index, DEFAULT_KEY)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let table = CategoryTable::builtin();
        assert_eq!(table.len(), DEFAULT_ORDER.len());
        assert_eq!(table.index_of(DEFAULT_KEY), Some(table.default_index()));
    }

    #[test]
    fn test_classify_prefixes() {
        let table = CategoryTable::builtin();
        assert_eq!(table.classify("APP_ALPHA"), (0, "APP_"));
        assert_eq!(table.classify("RAA_RESTART"), (3, "RAA_"));
        assert_eq!(table.classify("SYS_BOOT"), (5, "SYS_"));
        assert_eq!(table.classify("ZZZ_LAST"), (7, "ZZZ_"));
    }

    #[test]
    fn test_classify_apps_is_exact() {
        let table = CategoryTable::builtin();
        assert_eq!(table.classify("APPS"), (1, APPS_KEY));
        // Longer strings do not match the exact token and carry no known
        // prefix, so they fall through to DEFAULT.
        assert_eq!(table.classify("APPSX"), (4, DEFAULT_KEY));
    }

    #[test]
    fn test_classify_bare_sys() {
        let table = CategoryTable::builtin();
        assert_eq!(table.classify("SYS"), (5, "SYS_"));
        assert_eq!(table.classify("SYSTEM"), (4, DEFAULT_KEY));
    }

    #[test]
    fn test_classify_unmatched_falls_to_default() {
        let table = CategoryTable::builtin();
        assert_eq!(table.classify("WHATEVER"), (4, DEFAULT_KEY));
        assert_eq!(table.classify(""), (4, DEFAULT_KEY));
    }

    #[test]
    fn test_override_lookup() {
        let table = CategoryTable::builtin();
        assert_eq!(table.override_category("RESTART"), Some("RAA_"));
        assert_eq!(table.override_category("BOOT"), Some("SYS_"));
        assert_eq!(table.override_category("HOME"), Some(APPS_KEY));
        assert_eq!(table.override_category("UNKNOWN"), None);
    }

    #[test]
    fn test_builtin_names_survive_empty_override_table() {
        // The hard-coded list is independent of the configurable table.
        assert_eq!(builtin_category("RESTART"), Some("RAA_"));
        assert_eq!(builtin_category("BOOT"), Some("SYS_"));
        assert_eq!(builtin_category("HOME"), Some(APPS_KEY));
        assert_eq!(builtin_category("OTHER"), None);
    }

    #[test]
    fn test_new_rejects_missing_default() {
        let err = CategoryTable::new(vec!["APP_".into()], vec![]);
        assert!(matches!(err, Err(StampError::MissingDefault)));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = CategoryTable::new(
            vec!["APP_".into(), "APP_".into(), DEFAULT_KEY.into()],
            vec![],
        );
        assert!(matches!(err, Err(StampError::DuplicateCategory(_))));
    }

    #[test]
    fn test_new_rejects_unknown_override_category() {
        let err = CategoryTable::new(
            vec![DEFAULT_KEY.into()],
            vec![("XYZ_".into(), vec!["NAME".into()])],
        );
        assert!(matches!(err, Err(StampError::UnknownOverrideCategory(_))));
    }

    #[test]
    fn test_labels() {
        assert_eq!(category_label("RAA_"), "RAA_*");
        assert_eq!(category_label(APPS_KEY), "APPS");
        assert_eq!(category_label(DEFAULT_KEY), "DEFAULT");
    }
}
