//! Inclusive ranges with an optional step, e.g. `1-5` or `0-30/10`.

use super::check_step;
use crate::domain::Domain;
use crate::error::ExpandError;
use crate::grammar::{is_digits, parse_number, stepped};

/// The textual parts of a range expression.
struct Parts<'a> {
    start: &'a str,
    end: &'a str,
    step: Option<&'a str>,
}

fn split(expression: &str) -> Option<Parts<'_>> {
    let (start, rest) = expression.split_once('-')?;
    let (end, step) = match rest.split_once('/') {
        Some((end, step)) => (end, Some(step)),
        None => (rest, None),
    };

    if !is_digits(start) || !is_digits(end) || !step.is_none_or(is_digits) {
        return None;
    }
    Some(Parts { start, end, step })
}

pub(super) fn matches(expression: &str) -> bool {
    split(expression).is_some()
}

/// `start, start + step, ...` up to and including `end`.
///
/// Only the range bounds are checked against the domain; values inside a
/// gappy domain are not checked one by one.
pub(super) fn expand(expression: &str, domain: &Domain) -> Result<Vec<u32>, ExpandError> {
    let parts = split(expression).ok_or_else(|| ExpandError::NoRuleMatched {
        expression: expression.to_string(),
    })?;

    let start = parse_number(parts.start);
    let end = parse_number(parts.end);
    let step = parts.step.map_or(1, parse_number);

    check_step(step, domain)?;
    if start > end {
        return Err(ExpandError::RangeInverted { start, end });
    }
    if start < u64::from(domain.min()) {
        return Err(ExpandError::RangeBelowDomain {
            start,
            min: domain.min(),
        });
    }
    if end > u64::from(domain.max()) {
        return Err(ExpandError::RangeAboveDomain {
            end,
            max: domain.max(),
        });
    }

    // end <= domain max, so end + 1 cannot overflow
    Ok(stepped(start, end + 1, step))
}
