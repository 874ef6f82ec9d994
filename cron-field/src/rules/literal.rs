//! A single value, e.g. `30`.

use super::check_member;
use crate::domain::Domain;
use crate::error::ExpandError;
use crate::grammar::{is_digits, parse_number};

/// One or more digits. The empty string is not a literal.
pub(super) fn matches(expression: &str) -> bool {
    is_digits(expression)
}

pub(super) fn expand(expression: &str, domain: &Domain) -> Result<Vec<u32>, ExpandError> {
    let value = check_member(parse_number(expression), domain)?;
    Ok(vec![value])
}
