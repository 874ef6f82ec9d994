//! Byte-level grammar helpers shared by the rules.
//!
//! Expressions are plain ASCII, so matching is done directly on bytes
//! instead of going through a regex engine.

/// The wildcard token.
pub const WILDCARD: &str = "*";

/// Returns true if `s` is one or more ASCII decimal digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is two or more comma-separated digit groups.
pub fn is_digit_list(s: &str) -> bool {
    s.contains(',') && s.split(',').all(is_digits)
}

/// Returns true if `s` is a digit group or the wildcard token.
pub fn is_digits_or_wildcard(s: &str) -> bool {
    s == WILDCARD || is_digits(s)
}

/// Parse a digit group, saturating at `u64::MAX`.
///
/// The caller has already matched the grammar, so every byte is a digit.
/// Anything above `u32::MAX` is above every domain maximum, so the rules
/// report it through their usual bound checks.
pub fn parse_number(s: &str) -> u64 {
    s.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(b.wrapping_sub(b'0')))
    })
}

/// Values `start, start + step, ...` strictly below `limit`.
///
/// `limit` must not exceed `u32::MAX + 1`, so every yielded value fits a
/// `u32`.
pub fn stepped(start: u64, limit: u64, step: u64) -> Vec<u32> {
    debug_assert!(step > 0);
    let mut values = Vec::new();
    let mut next = Some(start);
    while let Some(value) = next {
        if value >= limit {
            break;
        }
        let Ok(value) = u32::try_from(value) else {
            break;
        };
        values.push(value);
        next = u64::from(value).checked_add(step);
    }
    values
}
