//! The validated value domain.

use std::fmt;

use crate::error::ExpandError;

/// An ordered, duplicate-free, non-empty set of legal values for a field.
///
/// The first element is the smallest legal value and the last is the
/// largest. Rules read the domain but never modify it.
///
/// # Examples
///
/// ```
/// use cron_field::domain::Domain;
///
/// let minutes = Domain::inclusive(0, 59).unwrap();
/// assert_eq!(minutes.min(), 0);
/// assert_eq!(minutes.max(), 59);
/// assert!(minutes.contains(30));
///
/// // Empty and unsorted domains are rejected
/// assert!(Domain::new(vec![]).is_err());
/// assert!(Domain::new(vec![3, 1, 2]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Domain(Vec<u32>);

impl Domain {
    /// Build a domain from explicit values.
    ///
    /// The values must be non-empty and strictly ascending.
    pub fn new(values: Vec<u32>) -> Result<Self, ExpandError> {
        if values.is_empty() {
            return Err(ExpandError::EmptyDomain);
        }
        if values.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ExpandError::UnsortedDomain);
        }
        Ok(Self(values))
    }

    /// Build a contiguous domain `min..=max`.
    pub fn inclusive(min: u32, max: u32) -> Result<Self, ExpandError> {
        if min > max {
            return Err(ExpandError::EmptyDomain);
        }
        Ok(Self::contiguous(min, max))
    }

    /// Caller guarantees `min <= max`.
    pub(super) fn contiguous(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);
        Self((min..=max).collect())
    }

    // Construction rejects empty domains, so the first and last values exist.

    /// Returns the smallest legal value.
    pub fn min(&self) -> u32 {
        self.0.first().copied().unwrap_or_default()
    }

    /// Returns the largest legal value.
    pub fn max(&self) -> u32 {
        self.0.last().copied().unwrap_or_default()
    }

    /// Returns true if `value` is a legal value.
    pub fn contains(&self, value: u32) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    /// Number of legal values (never zero).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed domain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<&[u32]> for Domain {
    type Error = ExpandError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain({}..={}, {} values)", self.min(), self.max(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        let d = Domain::inclusive(1, 31).unwrap();
        assert_eq!(d.min(), 1);
        assert_eq!(d.max(), 31);
        assert_eq!(d.len(), 31);
        assert!(!d.is_empty());
    }

    #[test]
    fn single_value_domain() {
        let d = Domain::inclusive(7, 7).unwrap();
        assert_eq!(d.min(), 7);
        assert_eq!(d.max(), 7);
        assert_eq!(d.as_slice(), &[7]);
    }

    #[test]
    fn inverted_inclusive_is_empty() {
        assert_eq!(Domain::inclusive(5, 4), Err(ExpandError::EmptyDomain));
    }

    #[test]
    fn reject_empty() {
        assert_eq!(Domain::new(vec![]), Err(ExpandError::EmptyDomain));
    }

    #[test]
    fn reject_unsorted() {
        assert_eq!(Domain::new(vec![2, 1]), Err(ExpandError::UnsortedDomain));
    }

    #[test]
    fn reject_duplicates() {
        assert_eq!(
            Domain::new(vec![1, 2, 2, 3]),
            Err(ExpandError::UnsortedDomain)
        );
    }

    #[test]
    fn gaps_are_allowed() {
        let d = Domain::new(vec![0, 10, 20]).unwrap();
        assert!(d.contains(10));
        assert!(!d.contains(5));
        assert_eq!(d.max(), 20);
    }

    #[test]
    fn try_from_slice() {
        let values = [0u32, 1, 2];
        let d = Domain::try_from(&values[..]).unwrap();
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![0, 1, 2]);

        let empty: [u32; 0] = [];
        assert!(Domain::try_from(&empty[..]).is_err());
    }

    #[test]
    fn debug() {
        let d = Domain::inclusive(0, 59).unwrap();
        assert_eq!(format!("{:?}", d), "Domain(0..=59, 60 values)");
    }
}
