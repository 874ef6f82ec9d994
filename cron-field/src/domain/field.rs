//! Standard schedule field presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Domain;

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0:?}")]
pub struct UnknownField(String);

/// One position in a five-field schedule expression.
///
/// Each field knows its conventional domain. Values are not interpreted
/// beyond that: weekday 0 is just 0.
///
/// # Examples
///
/// ```
/// use cron_field::domain::Field;
///
/// let hour: Field = "hour".parse().unwrap();
/// assert_eq!(hour.domain().max(), 23);
///
/// assert!("century".parse::<Field>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// All fields in schedule order.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Inclusive `(min, max)` bounds of the field.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (0, 6),
        }
    }

    /// The legal values for this field.
    pub fn domain(&self) -> Domain {
        let (min, max) = self.bounds();
        Domain::contiguous(min, max)
    }

    /// Returns the canonical field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day_of_month",
            Field::Month => "month",
            Field::DayOfWeek => "day_of_week",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" | "min" => Ok(Field::Minute),
            "hour" => Ok(Field::Hour),
            "day_of_month" | "dom" => Ok(Field::DayOfMonth),
            "month" | "mon" => Ok(Field::Month),
            "day_of_week" | "dow" => Ok(Field::DayOfWeek),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
