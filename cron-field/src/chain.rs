//! Rule chain dispatching.
//!
//! Tries each rule's grammar in a fixed order and hands the expression to
//! the first rule that accepts it. Narrow grammars come first: step must
//! precede literal and range so `*/5` and `5/10` are never misread.
//! The fallback rule is always last and turns "nothing matched" into an
//! error.

use tracing::{debug, trace};

use crate::domain::{Domain, Field};
use crate::error::ExpandError;
use crate::rules::Rule;

/// The rule order used by [`RuleChain::standard`].
const STANDARD_ORDER: [Rule; 6] = [
    Rule::Step,
    Rule::List,
    Rule::Wildcard,
    Rule::Literal,
    Rule::Range,
    Rule::Fallback,
];

/// An ordered set of rules ending in [`Rule::Fallback`].
///
/// Holds no mutable state, so one chain can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use cron_field::RuleChain;
/// use cron_field::domain::Domain;
///
/// let chain = RuleChain::standard();
/// let minutes = Domain::inclusive(0, 59).unwrap();
///
/// assert_eq!(chain.expand("*/15", &minutes).unwrap(), vec![0, 15, 30, 45]);
/// assert!(chain.expand("abc", &minutes).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleChain {
    rules: [Rule; 6],
}

impl RuleChain {
    /// The chain: step, list, wildcard, literal, range, fallback.
    pub const fn standard() -> Self {
        Self {
            rules: STANDARD_ORDER,
        }
    }

    /// Rules in the order they are tried.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The first rule whose grammar accepts `expression`.
    ///
    /// Always returns a rule, because the chain ends in the fallback.
    pub fn select(&self, expression: &str) -> Rule {
        for rule in self.rules {
            trace!(expression, rule = rule.name(), "trying rule");
            if rule.matches(expression) {
                return rule;
            }
        }
        Rule::Fallback
    }

    /// Expand `expression` into the values it selects from `domain`.
    ///
    /// Errors from the selected rule are returned unchanged.
    pub fn expand(&self, expression: &str, domain: &Domain) -> Result<Vec<u32>, ExpandError> {
        let rule = self.select(expression);
        debug!(expression, rule = rule.name(), "rule selected");

        rule.expand(expression, domain).inspect_err(|e| {
            debug!(
                expression,
                rule = rule.name(),
                error = %e,
                "expansion failed"
            );
        })
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Expand one field expression against a raw list of legal values.
///
/// The values must be non-empty and strictly ascending; otherwise this
/// fails with [`ExpandError::EmptyDomain`] or [`ExpandError::UnsortedDomain`]
/// before any rule is tried.
///
/// # Examples
///
/// ```
/// use cron_field::{ExpandError, expand};
///
/// let minutes: Vec<u32> = (0..=59).collect();
///
/// assert_eq!(expand("1-5/2", &minutes).unwrap(), vec![1, 3, 5]);
/// assert_eq!(expand("5,1,1", &minutes).unwrap(), vec![1, 1, 5]);
/// assert_eq!(expand("5-1", &minutes), Err(ExpandError::RangeInverted { start: 5, end: 1 }));
/// assert_eq!(expand("*/1", &[]), Err(ExpandError::EmptyDomain));
/// ```
pub fn expand(expression: &str, domain: &[u32]) -> Result<Vec<u32>, ExpandError> {
    let domain = Domain::try_from(domain)?;
    RuleChain::standard().expand(expression, &domain)
}

/// Expand one field expression using the field's standard domain.
///
/// ```
/// use cron_field::domain::Field;
/// use cron_field::expand_field;
///
/// assert_eq!(expand_field(Field::Hour, "*/6").unwrap(), vec![0, 6, 12, 18]);
/// ```
pub fn expand_field(field: Field, expression: &str) -> Result<Vec<u32>, ExpandError> {
    RuleChain::standard().expand(expression, &field.domain())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for non-empty, strictly ascending domains.
    fn domain_values() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::btree_set(0u32..200, 1..40)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        /// Wildcard returns the domain unchanged
        #[test]
        fn wildcard_identity(values in domain_values()) {
            prop_assert_eq!(expand("*", &values).unwrap(), values);
        }

        /// Members expand to themselves, non-members are rejected
        #[test]
        fn literal_membership(values in domain_values(), v in 0u32..250) {
            let result = expand(&v.to_string(), &values);
            if values.contains(&v) {
                prop_assert_eq!(result.unwrap(), vec![v]);
            } else {
                prop_assert_eq!(result, Err(ExpandError::ValueNotInDomain { value: u64::from(v) }));
            }
        }

        /// Step results are ascending and below the domain max
        #[test]
        fn step_within_bounds(max in 1u32..120, base in 0u32..120, step in 1u32..120) {
            prop_assume!(step <= max);
            let values: Vec<u32> = (0..=max).collect();
            let result = expand(&format!("{base}/{step}"), &values).unwrap();
            prop_assert!(result.iter().all(|&v| v >= base && v < max));
            prop_assert!(result.windows(2).all(|w| w[1] - w[0] == step));
        }

        /// Range results start at start and never pass end
        #[test]
        fn range_within_bounds(start in 0u32..60, len in 0u32..60, step in 1u32..60) {
            let end = (start + len).min(59);
            let values: Vec<u32> = (0..=59).collect();
            let result = expand(&format!("{start}-{end}/{step}"), &values).unwrap();
            prop_assert_eq!(result.first(), Some(&start));
            prop_assert!(result.iter().all(|&v| v <= end));
            prop_assert!(result.last().unwrap() + step > end);
        }

        /// Same inputs, same output
        #[test]
        fn idempotent(expr in "[0-9*,/-]{0,8}", values in domain_values()) {
            prop_assert_eq!(expand(&expr, &values), expand(&expr, &values));
        }

        /// Arbitrary input never panics
        #[test]
        fn never_panics(expr in "\\PC{0,12}") {
            let values: Vec<u32> = (0..=59).collect();
            let _ = expand(&expr, &values);
        }
    }
}
