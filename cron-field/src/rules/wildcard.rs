//! `*`: every legal value.

use crate::domain::Domain;
use crate::grammar::WILDCARD;

pub(super) fn matches(expression: &str) -> bool {
    expression == WILDCARD
}

/// The whole domain, in domain order.
pub(super) fn expand(domain: &Domain) -> Vec<u32> {
    domain.as_slice().to_vec()
}
