//! Value domains for schedule fields.
//!
//! A [`Domain`] is the ordered set of legal integers for one field. It is
//! validated at construction time, so rule expansion can rely on a
//! non-empty, strictly ascending sequence.

mod field;
mod values;

pub use field::{Field, UnknownField};
pub use values::Domain;
