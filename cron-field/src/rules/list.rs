//! Comma-separated values, e.g. `1,15,30`.

use super::check_member;
use crate::domain::Domain;
use crate::error::ExpandError;
use crate::grammar::{is_digit_list, parse_number};

/// At least two digit groups. A bare literal is not a list.
pub(super) fn matches(expression: &str) -> bool {
    is_digit_list(expression)
}

/// Every listed value, sorted ascending. Duplicates are kept.
pub(super) fn expand(expression: &str, domain: &Domain) -> Result<Vec<u32>, ExpandError> {
    let mut values = expression
        .split(',')
        .map(|group| check_member(parse_number(group), domain))
        .collect::<Result<Vec<_>, _>>()?;
    values.sort_unstable();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes() -> Domain {
        Domain::inclusive(0, 59).unwrap()
    }

    #[test]
    fn matches_lists() {
        assert!(matches("1,2"));
        assert!(matches("0,15,30,45"));
        assert!(!matches("1"));
        assert!(!matches("1,"));
        assert!(!matches("1-5,7"));
        assert!(!matches("*,1"));
    }

    #[test]
    fn sorts_and_keeps_duplicates() {
        assert_eq!(expand("5,1,1", &minutes()), Ok(vec![1, 1, 5]));
        assert_eq!(expand("30,0,15", &minutes()), Ok(vec![0, 15, 30]));
    }

    #[test]
    fn rejects_any_non_member() {
        assert_eq!(
            expand("1,60,2", &minutes()),
            Err(ExpandError::ValueNotInDomain { value: 60 })
        );
    }

    #[test]
    fn element_past_u32_is_not_in_domain() {
        assert_eq!(
            expand("1,4294967296", &minutes()),
            Err(ExpandError::ValueNotInDomain {
                value: 4_294_967_296
            })
        );
    }

    #[test]
    fn first_bad_element_is_reported() {
        assert_eq!(
            expand("70,80", &minutes()),
            Err(ExpandError::ValueNotInDomain { value: 70 })
        );
    }
}
