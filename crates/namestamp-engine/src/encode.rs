//! Payload extraction, lexicographic fraction encoding, slot assignment

use namestamp_core::{charset, APPS_KEY, DEFAULT_KEY};

/// Maximum number of payload characters the encoder reads.
///
/// Characters beyond this depth cannot affect the slot anyway - their
/// positional weight is far below f64 resolution. The cap is part of the
/// observable behavior and must not be raised for "more precision".
pub const ENCODE_DEPTH: usize = 128;

/// Derive the ordering payload from an effective name and its category.
///
/// - `APPS`: the constant literal `APPS` (the whole bucket shares one
///   slot; the nudge separates its members),
/// - `DEFAULT`: the effective name with dashes removed,
/// - otherwise: the effective name with its key prefix stripped (when
///   present) and dashes removed.
///
/// Dash removal makes `A-B` and `AB` sort identically.
pub fn payload_for(effective: &str, key: &str) -> String {
    if key == APPS_KEY {
        return APPS_KEY.to_string();
    }

    let stripped = if key == DEFAULT_KEY {
        effective
    } else {
        // A bare "SYS" classified as SYS_ carries no prefix to strip.
        effective.strip_prefix(key).unwrap_or(effective)
    };

    stripped.chars().filter(|&c| c != '-').collect()
}

/// Map a payload to its position in lexicographic space, as a real number
/// in [0, 1).
///
/// The payload is read as a base-RADIX numeral where the character at
/// 1-based position `i` contributes `(rank + 1) / RADIX^i`. This is the
/// standard order-preserving embedding of strings over an ordered
/// alphabet into the unit interval, truncated by f64 precision and the
/// depth cap - both accepted fidelity losses.
///
/// The empty payload maps to exactly 0.0.
pub fn lex_fraction(payload: &str, depth: usize) -> f64 {
    let mut fraction = 0.0;
    let mut scale = 1.0;
    for c in payload.chars().take(depth) {
        scale /= charset::RADIX as f64;
        fraction += (charset::rank(c) + 1) as f64 * scale;
    }
    fraction
}

/// Quantize a fraction into an integer slot.
///
/// `floor(fraction * slots)`, clamped to `slots - 1`. The clamp can only
/// fire through float rounding at the fraction's supremum, never
/// mathematically, but it must be guarded.
pub fn slot_for(fraction: f64, slots: u32) -> u32 {
    let raw = (fraction * slots as f64).floor() as i64;
    raw.clamp(0, slots as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_strips_prefix_and_dashes() {
        assert_eq!(payload_for("RAA_RESTART", "RAA_"), "RESTART");
        assert_eq!(payload_for("ZZZ_A-B", "ZZZ_"), "AB");
        assert_eq!(payload_for("ZZZ_AB", "ZZZ_"), "AB");
    }

    #[test]
    fn test_payload_bare_sys() {
        assert_eq!(payload_for("SYS", "SYS_"), "SYS");
        assert_eq!(payload_for("SYS_BOOT", "SYS_"), "BOOT");
    }

    #[test]
    fn test_payload_default_keeps_name() {
        assert_eq!(payload_for("SOME-NAME", DEFAULT_KEY), "SOMENAME");
        assert_eq!(payload_for("", DEFAULT_KEY), "");
    }

    #[test]
    fn test_payload_apps_is_constant() {
        assert_eq!(payload_for("APPS", APPS_KEY), "APPS");
    }

    #[test]
    fn test_fraction_empty_is_zero() {
        assert_eq!(lex_fraction("", ENCODE_DEPTH), 0.0);
    }

    #[test]
    fn test_fraction_in_unit_interval() {
        for payload in ["", "A", "Z", "....", "HELLO WORLD", "ZZZZZZZZZZZZ"] {
            let f = lex_fraction(payload, ENCODE_DEPTH);
            assert!((0.0..1.0).contains(&f), "{payload:?} -> {f}");
        }
        // Worst case: max-rank characters at full depth.
        let worst = ".".repeat(ENCODE_DEPTH * 2);
        let f = lex_fraction(&worst, ENCODE_DEPTH);
        assert!(f < 1.0, "supremum reached: {f}");
    }

    #[test]
    fn test_fraction_preserves_lexicographic_order() {
        let cases = [
            ("A", "B"),
            ("A", "AB"),
            ("AB", "B"),
            ("0", "A"),
            (" ", "0"),
            ("Z", "_"),
            ("ALPHA", "ALPHB"),
        ];
        for (lo, hi) in cases {
            assert!(
                lex_fraction(lo, ENCODE_DEPTH) < lex_fraction(hi, ENCODE_DEPTH),
                "{lo:?} should encode below {hi:?}"
            );
        }
    }

    #[test]
    fn test_fraction_unknown_chars_sort_largest() {
        // Lowercase is outside the charset and ranks above every letter.
        assert!(lex_fraction("a", ENCODE_DEPTH) > lex_fraction("Z", ENCODE_DEPTH));
    }

    #[test]
    fn test_fraction_depth_cap() {
        let head = "A".repeat(ENCODE_DEPTH);
        let long = format!("{head}ZZZZZ");
        assert_eq!(
            lex_fraction(&head, ENCODE_DEPTH),
            lex_fraction(&long, ENCODE_DEPTH)
        );
    }

    #[test]
    fn test_slot_bounds() {
        assert_eq!(slot_for(0.0, 10_000), 0);
        assert_eq!(slot_for(0.5, 10_000), 5_000);
        assert_eq!(slot_for(0.99999999, 10_000), 9_999);
        // Guard: a fraction rounded up to 1.0 must still clamp.
        assert_eq!(slot_for(1.0, 10_000), 9_999);
    }
}
