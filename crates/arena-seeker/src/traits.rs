//! The accessor seam between records and the engine.

use crate::attribute::Attribute;
use crate::value::Value;

/// Trait for types that conditions and sort keys can read attributes from.
///
/// [`GameRecord`](crate::GameRecord) implements it; other record types only
/// need to map each [`Attribute`] to a [`Value`].
///
/// # Example
///
/// ```
/// use arena_seeker::{Attribute, Condition, Number, Seekable, Value};
///
/// struct Listing {
///     title: String,
///     seats: u32,
/// }
///
/// impl Seekable for Listing {
///     fn field_value(&self, attribute: Attribute) -> Value<'_> {
///         match attribute {
///             Attribute::Name => Value::Text(&self.title),
///             Attribute::MaxPlayers => Value::Number(Number::from(self.seats)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let listing = Listing { title: "Go".into(), seats: 2 };
/// let condition = Condition::parse("maxPlayers<=4").unwrap();
/// assert!(condition.matches(&listing));
/// ```
pub trait Seekable {
    /// Returns the value of an attribute for comparison.
    ///
    /// Return [`Value::None`] for attributes the type does not carry; such
    /// attributes never match a condition and sort last.
    fn field_value(&self, attribute: Attribute) -> Value<'_>;
}

impl<T: Seekable + ?Sized> Seekable for &T {
    fn field_value(&self, attribute: Attribute) -> Value<'_> {
        (**self).field_value(attribute)
    }
}
