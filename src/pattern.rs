//! Cyclic pattern generation for buffer overflow offset detection.
//!
//! Generates Metasploit-style patterns where every 3-byte subsequence
//! within one alphabet cycle appears exactly once. Used to determine
//! exact buffer overflow offsets by finding where a captured register
//! or return-address value sits in the original pattern.

/// Character sets used for pattern generation.
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Length in bytes of one full triplet cycle (26 * 26 * 10 triplets).
pub const CYCLE_LENGTH: usize = UPPER.len() * LOWER.len() * DIGITS.len() * 3;

/// Generate a cyclic pattern of exactly `length` bytes.
///
/// Triplets (upper, lower, digit) are emitted in Cartesian order with the
/// uppercase letter as the outermost loop, so the sequence starts
/// `Aa0Aa1Aa2...`. The pattern for a shorter length is always a prefix of
/// the pattern for a longer one. Lengths beyond one full cycle
/// (20,280 bytes) restart the cycle from `Aa0`; subsequence uniqueness
/// only holds within a single cycle.
pub fn generate(length: usize) -> String {
    let mut pattern = String::with_capacity(length);

    while pattern.len() < length {
        'cycle: for &u in UPPER {
            for &l in LOWER {
                for &d in DIGITS {
                    if pattern.len() >= length {
                        break 'cycle;
                    }
                    pattern.push(u as char);
                    pattern.push(l as char);
                    pattern.push(d as char);
                }
            }
        }
    }

    // The final triplet may overshoot by up to 2 bytes.
    pattern.truncate(length);
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern() {
        assert_eq!(generate(0), "");
    }

    #[test]
    fn pattern_starts_correctly() {
        assert_eq!(generate(12), "Aa0Aa1Aa2Aa3");
    }

    #[test]
    fn known_64_byte_pattern() {
        assert_eq!(
            generate(64),
            "Aa0Aa1Aa2Aa3Aa4Aa5Aa6Aa7Aa8Aa9Ab0Ab1Ab2Ab3Ab4Ab5Ab6Ab7Ab8Ab9Ac0A"
        );
    }

    #[test]
    fn pattern_length_exact() {
        for length in [1, 2, 3, 4, 63, 64, 100, 6760, 20280] {
            assert_eq!(generate(length).len(), length);
        }
    }

    #[test]
    fn shorter_pattern_is_prefix_of_longer() {
        let long = generate(512);
        for length in [0, 1, 31, 256, 511] {
            assert_eq!(generate(length), long[..length]);
        }
    }

    #[test]
    fn unique_triplet_subsequences() {
        let pattern = generate(300);
        let mut seen = std::collections::HashSet::new();
        for chunk in pattern.as_bytes().windows(3) {
            assert!(
                seen.insert(chunk.to_vec()),
                "duplicate 3-byte subsequence found: {:?}",
                chunk
            );
        }
    }

    #[test]
    fn cycle_repeats_past_full_length() {
        let pattern = generate(CYCLE_LENGTH + 6);
        assert_eq!(pattern.len(), CYCLE_LENGTH + 6);
        assert_eq!(&pattern[CYCLE_LENGTH..], "Aa0Aa1");
        // Prefix stability holds across the cycle boundary too.
        assert_eq!(generate(CYCLE_LENGTH), pattern[..CYCLE_LENGTH]);
    }
}
