//! Ordering types for result sorting.
//!
//! Provides [`Dir`] for sort direction and [`SortKey`] for attribute-based
//! ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::attribute::Attribute;
use crate::error::{Result, SeekerError};
use crate::traits::Seekable;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// `Asc` when `ascending` is true, `Desc` otherwise.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl FromStr for Dir {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Ok(Dir::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Dir::Desc)
        } else {
            Err(SeekerError::InvalidDirection(s.to_string()))
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sortable attribute paired with a direction.
///
/// Construction checks the schema, so a `SortKey` never refers to an
/// attribute that forbids sorting. The default key is name ascending.
///
/// ```
/// use arena_seeker::{Attribute, Dir, SortKey};
///
/// let key: SortKey = "rating:desc".parse().unwrap();
/// assert_eq!(key.attribute(), Attribute::Rating);
/// assert_eq!(key.dir(), Dir::Desc);
///
/// assert!(SortKey::asc(Attribute::Id).is_err());
/// assert_eq!(SortKey::parse_or_default("shoe size"), SortKey::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    attribute: Attribute,
    dir: Dir,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey {
            attribute: Attribute::Name,
            dir: Dir::Asc,
        }
    }
}

impl SortKey {
    /// Creates a sort key, failing if the schema forbids sorting by `attribute`.
    pub fn new(attribute: Attribute, dir: Dir) -> Result<Self> {
        if !attribute.is_sortable() {
            return Err(SeekerError::UnsortableAttribute(attribute.name()));
        }
        Ok(SortKey { attribute, dir })
    }

    pub fn asc(attribute: Attribute) -> Result<Self> {
        SortKey::new(attribute, Dir::Asc)
    }

    pub fn desc(attribute: Attribute) -> Result<Self> {
        SortKey::new(attribute, Dir::Desc)
    }

    /// Parses `attr` or `attr:asc` / `attr:desc`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (attribute, dir) = match raw.split_once(':') {
            Some((attribute, dir)) => (attribute, dir.parse()?),
            None => (raw, Dir::Asc),
        };
        SortKey::new(Attribute::resolve(attribute)?, dir)
    }

    /// Like [`SortKey::parse`], but falls back to name ascending.
    pub fn parse_or_default(raw: &str) -> Self {
        SortKey::parse(raw).unwrap_or_else(|e| {
            log::debug!("sort '{raw}' not usable ({e}), sorting by name");
            SortKey::default()
        })
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Returns the same attribute in the opposite direction.
    pub fn reversed(self) -> Self {
        SortKey {
            dir: Dir::from_ascending(!self.dir.is_asc()),
            ..self
        }
    }

    /// Compares two records by this key.
    pub fn compare<T: Seekable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        let base = compare_values(
            &a.field_value(self.attribute),
            &b.field_value(self.attribute),
        )
        .unwrap_or(Ordering::Equal);
        self.dir.apply(base)
    }

    /// Returns this key as a standalone comparator.
    pub fn comparator<T: Seekable + ?Sized>(self) -> impl Fn(&T, &T) -> Ordering {
        move |a: &T, b: &T| self.compare(a, b)
    }

    /// Sorts records in place. The sort is stable.
    pub fn sort<T: Seekable>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortKey {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::parse(s)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.attribute, self.dir)
    }
}

/// Compares two values of the same kind.
///
/// Text compares case-insensitively and NaN sorts after every other real.
/// Returns `None` only if the kinds don't match. Missing values sort last.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => Some(compare_text(a, b)),
        (Value::Number(a), Value::Number(b)) => a.sort_cmp(*b),

        // None values sort last
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        // Kind mismatch - cannot compare
        _ => None,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
