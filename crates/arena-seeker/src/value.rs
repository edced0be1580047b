//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the runtime value of an attribute extracted
//! from a record. It borrows text from the record and copies numbers.

use std::cmp::Ordering;

use crate::attribute::Kind;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use arena_seeker::{Attribute, GameRecord, Number, Seekable, Value};
///
/// let game = GameRecord::builder("Go").max_players(2).build();
/// assert_eq!(game.field_value(Attribute::Name), Value::Text("Go"));
/// assert_eq!(game.field_value(Attribute::MaxPlayers), Value::Number(Number::Integer(2)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Attribute not present on this record.
    None,
}

impl<'a> Value<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the text value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The kind of this value, or `None` for a missing value.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Text(_) => Some(Kind::Text),
            Value::Number(n) => Some(n.kind()),
            Value::None => None,
        }
    }
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::None => Ok(()),
        }
    }
}

/// Numeric attribute value.
///
/// Integers and reals are kept apart: comparing an integer with a real is a
/// kind mismatch and yields no ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    /// Parses `text` as a number of the given kind.
    ///
    /// Returns `None` for [`Kind::Text`] or when the text does not parse.
    pub fn parse(kind: Kind, text: &str) -> Option<Number> {
        match kind {
            Kind::Integer => text.parse().ok().map(Number::Integer),
            Kind::Real => text.parse().ok().map(Number::Real),
            Kind::Text => None,
        }
    }

    pub fn kind(self) -> Kind {
        match self {
            Number::Integer(_) => Kind::Integer,
            Number::Real(_) => Kind::Real,
        }
    }

    /// Compares two numbers of the same kind.
    ///
    /// Returns `None` on a kind mismatch or when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (Number::Real(a), Number::Real(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }

    /// Orders two numbers of the same kind for sorting.
    ///
    /// Unlike [`Number::compare`] this is total over reals: NaN sorts after
    /// every other value and all NaNs are equal. Returns `None` only on a
    /// kind mismatch.
    pub fn sort_cmp(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (Number::Real(a), Number::Real(b)) => Some(match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.total_cmp(&b),
            }),
            _ => None,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

/// Reals always show a fractional part, so `10.0` renders as `10.0`.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Real(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Number::Real(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(n as i64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(n as i64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Real(n)
    }
}
