//! Field expansion rules.
//!
//! Each rule owns one grammar and the algorithm that expands a matching
//! expression into concrete values. The set of rules is closed, so they are
//! variants of a single enum rather than trait objects.
//!
//! # Grammars
//!
//! - **Step**: `<digits-or-*>/<digits>`, e.g. `*/15`, `5/10`
//! - **List**: `<digits>,<digits>[,...]`, e.g. `1,15,30`
//! - **Wildcard**: `*`
//! - **Literal**: `<digits>`, e.g. `30`
//! - **Range**: `<digits>-<digits>[/<digits>]`, e.g. `1-5`, `0-30/10`
//! - **Fallback**: matches anything and always fails
//!
//! # Bounds
//!
//! Ranges include `end` when it lands on a step. Steps never include the
//! domain maximum, even when it lands on a step.

mod list;
mod literal;
mod range;
mod step;
mod wildcard;

use crate::domain::Domain;
use crate::error::ExpandError;

/// A matcher and expander for one expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Step,
    List,
    Wildcard,
    Literal,
    Range,
    /// Terminal rule: matches every expression and reports that no real
    /// grammar accepted it.
    Fallback,
}

impl Rule {
    /// Rule name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Step => "step",
            Rule::List => "list",
            Rule::Wildcard => "wildcard",
            Rule::Literal => "literal",
            Rule::Range => "range",
            Rule::Fallback => "fallback",
        }
    }

    /// Returns true if `expression` belongs to this rule's grammar.
    ///
    /// Never fails, whatever the input.
    pub fn matches(&self, expression: &str) -> bool {
        match self {
            Rule::Step => step::matches(expression),
            Rule::List => list::matches(expression),
            Rule::Wildcard => wildcard::matches(expression),
            Rule::Literal => literal::matches(expression),
            Rule::Range => range::matches(expression),
            Rule::Fallback => true,
        }
    }

    /// Expand `expression` into the values it selects from `domain`.
    ///
    /// Only meaningful after [`Rule::matches`] returned true for the same
    /// expression.
    pub fn expand(&self, expression: &str, domain: &Domain) -> Result<Vec<u32>, ExpandError> {
        match self {
            Rule::Step => step::expand(expression, domain),
            Rule::List => list::expand(expression, domain),
            Rule::Wildcard => Ok(wildcard::expand(domain)),
            Rule::Literal => literal::expand(expression, domain),
            Rule::Range => range::expand(expression, domain),
            Rule::Fallback => Err(ExpandError::NoRuleMatched {
                expression: expression.to_string(),
            }),
        }
    }
}

/// Step size checks shared by the step and range rules.
///
/// Oversized is checked before zero.
fn check_step(step: u64, domain: &Domain) -> Result<(), ExpandError> {
    let max = domain.max();
    if step > u64::from(max) {
        return Err(ExpandError::StepTooLarge { step, max });
    }
    if step == 0 {
        return Err(ExpandError::ZeroStep);
    }
    Ok(())
}

/// Fails unless `value` is a legal value.
fn check_member(value: u64, domain: &Domain) -> Result<u32, ExpandError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| domain.contains(v))
        .ok_or(ExpandError::ValueNotInDomain { value })
}
