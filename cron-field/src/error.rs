//! Expansion error types.
//!
//! Every failure is fatal for the field being expanded. Errors carry the
//! offending values so the caller can report them with field context.
//! Numbers read from the expression are `u64` (saturating), domain bounds
//! are `u32`.

/// Errors raised while expanding a field expression against a domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// The expression matches none of the known grammars
    #[error("none of the rules matched expression {expression:?}")]
    NoRuleMatched { expression: String },

    /// A literal or list element is not a legal value for the field
    #[error("value {value} is not in the domain")]
    ValueNotInDomain { value: u64 },

    /// A step of zero would never advance
    #[error("step cannot be zero")]
    ZeroStep,

    /// The step is larger than the largest legal value
    #[error("step {step} is larger than the maximum value {max}")]
    StepTooLarge { step: u64, max: u32 },

    /// Range start is after range end
    #[error("range start {start} is greater than range end {end}")]
    RangeInverted { start: u64, end: u64 },

    /// Range start is below the smallest legal value
    #[error("range start {start} is less than the minimum value {min}")]
    RangeBelowDomain { start: u64, min: u32 },

    /// Range end is above the largest legal value
    #[error("range end {end} is greater than the maximum value {max}")]
    RangeAboveDomain { end: u64, max: u32 },

    /// The domain has no values
    #[error("domain must have at least one value")]
    EmptyDomain,

    /// The domain is not strictly ascending
    #[error("domain must be sorted ascending without duplicates")]
    UnsortedDomain,
}
