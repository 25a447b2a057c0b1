//! Offset lookup within a cyclic pattern.
//!
//! Regenerates the pattern for the requested length and reports every
//! position where the query bytes occur. Matches may overlap; the scan
//! resumes one byte after each hit.

use crate::error::Result;
use crate::pattern;
use crate::query;

/// Find every offset of `value` inside the cyclic pattern of `length` bytes.
///
/// `value` is normalized first (see [`query::normalize`]); validation
/// failures propagate before any pattern is generated. Offsets are
/// 0-based and ascending. No match is a normal empty result, not an
/// error.
pub fn find(value: &str, length: usize) -> Result<Vec<usize>> {
    let needle = query::normalize(value)?;
    let pattern = pattern::generate(length);
    Ok(scan(pattern.as_bytes(), &needle))
}

/// Find every offset of a raw u16 value, e.g. a clobbered 16-bit register.
pub fn find_u16(value: u16, length: usize) -> Vec<usize> {
    scan(pattern::generate(length).as_bytes(), &value.to_le_bytes())
}

/// Find every offset of a raw u32 value, e.g. a crashed EIP.
pub fn find_u32(value: u32, length: usize) -> Vec<usize> {
    scan(pattern::generate(length).as_bytes(), &value.to_le_bytes())
}

/// Find every offset of a raw u64 value, e.g. a crashed RIP.
pub fn find_u64(value: u64, length: usize) -> Vec<usize> {
    scan(pattern::generate(length).as_bytes(), &value.to_le_bytes())
}

/// Find every occurrence of `needle` in `haystack`, overlapping included.
fn scan(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(i, _)| i)
        .collect()
}
