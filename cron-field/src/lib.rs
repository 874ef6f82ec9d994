//! Schedule field expansion.
//!
//! Turns one field of a cron-style schedule (`*`, `30`, `1,15`, `1-5/2`,
//! `*/15`) into the concrete values it selects from that field's domain.
//! Splitting a full schedule into fields is left to the caller.

pub mod chain;
pub mod domain;
pub mod error;
pub(crate) mod grammar;
pub mod rules;

pub use chain::{RuleChain, expand, expand_field};
pub use error::ExpandError;
