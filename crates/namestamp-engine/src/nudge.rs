//! Stable Nudge - deterministic single-bit perturbation
//!
//! Two different payloads can quantize to the same slot. The nudge shifts
//! the final timestamp by at most one second so same-slot outputs are not
//! visibly identical. It is a cosmetic tie-spreader, not a collision
//! resolution guarantee.

const FNV_SEED: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-16 code units of a string.
///
/// UTF-16 units (not bytes) are the hashed alphabet; changing this would
/// silently change every assigned timestamp.
pub fn fnv1a_utf16(s: &str) -> u32 {
    let mut hash = FNV_SEED;
    for unit in s.encode_utf16() {
        hash ^= unit as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The nudge: least-significant bit of the effective name's hash.
#[inline]
pub fn nudge_bit(effective: &str) -> u32 {
    fnv1a_utf16(effective) & 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let h1 = fnv1a_utf16("RAA_RESTART");
        let h2 = fnv1a_utf16("RAA_RESTART");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_empty_string_hashes_to_seed() {
        assert_eq!(fnv1a_utf16(""), FNV_SEED);
        assert_eq!(nudge_bit(""), 1);
    }

    #[test]
    fn test_nudge_is_a_bit() {
        for name in ["SYS_BOOT", "RAA_RESTART", "APPS", "", "ZZZ_X"] {
            assert!(nudge_bit(name) <= 1);
        }
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(fnv1a_utf16("AB"), fnv1a_utf16("BA"));
    }

    #[test]
    fn test_different_names_usually_differ() {
        assert_ne!(fnv1a_utf16("SYS_BOOT"), fnv1a_utf16("SYS_BOOT2"));
    }
}
