//! Stepped sequences from a base, e.g. `*/15` or `5/10`.

use super::check_step;
use crate::domain::Domain;
use crate::error::ExpandError;
use crate::grammar::{WILDCARD, is_digits, is_digits_or_wildcard, parse_number, stepped};

fn split(expression: &str) -> Option<(&str, &str)> {
    let (base, step) = expression.split_once('/')?;
    (is_digits_or_wildcard(base) && is_digits(step)).then_some((base, step))
}

pub(super) fn matches(expression: &str) -> bool {
    split(expression).is_some()
}

/// `base, base + step, ...` strictly below the domain maximum.
///
/// A `*` base starts at 0. The base is not checked against the domain.
pub(super) fn expand(expression: &str, domain: &Domain) -> Result<Vec<u32>, ExpandError> {
    let (base, step) = split(expression).ok_or_else(|| ExpandError::NoRuleMatched {
        expression: expression.to_string(),
    })?;

    let base = if base == WILDCARD {
        0
    } else {
        parse_number(base)
    };
    let step = parse_number(step);

    check_step(step, domain)?;

    Ok(stepped(base, u64::from(domain.max()), step))
}
