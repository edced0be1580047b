//! Filter conditions.
//!
//! A [`Condition`] is one parsed `attribute operator value` clause. It
//! knows how to normalize its value for the attribute's kind and how to
//! test a record against it.

use crate::attribute::{Attribute, Kind};
use crate::error::{Result, SeekerError};
use crate::op::{split_clause, Op};
use crate::traits::Seekable;
use crate::value::{Number, Value};

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use arena_seeker::{Attribute, Condition, GameRecord, Op};
///
/// let condition = Condition::parse("rating >= 8.0").unwrap();
/// assert_eq!(condition.attribute(), Attribute::Rating);
/// assert_eq!(condition.op(), Op::Gte);
/// assert_eq!(condition.value(), "8.0");
///
/// let game = GameRecord::builder("Chess").rating(10.0).build();
/// assert!(condition.matches(&game));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    attribute: Attribute,
    op: Op,
    value: String,
    number: Option<Number>,
}

impl Condition {
    /// Parses one clause.
    ///
    /// Text values keep their inner spacing and lose only the surrounding
    /// whitespace; numeric values lose all whitespace. A numeric value that
    /// does not parse still yields a condition, one that matches nothing
    /// except through `~=`.
    pub fn parse(clause: &str) -> Result<Condition> {
        if clause.trim().is_empty() {
            return Err(SeekerError::malformed(clause, "empty clause"));
        }
        let (attribute, op, value) = split_clause(clause)?;
        let attribute = Attribute::resolve(attribute)?;
        if !attribute.is_filterable() {
            return Err(SeekerError::UnfilterableAttribute(attribute.name()));
        }
        let value = normalize(attribute.kind(), value);
        if value.is_empty() {
            return Err(SeekerError::malformed(clause, "no value given"));
        }
        Ok(Condition::new(attribute, op, value))
    }

    /// Builds a condition from typed parts.
    ///
    /// The value is normalized the same way [`Condition::parse`] does it.
    pub fn new(attribute: Attribute, op: Op, value: impl AsRef<str>) -> Condition {
        let value = normalize(attribute.kind(), value.as_ref());
        let number = Number::parse(attribute.kind(), &value);
        Condition {
            attribute,
            op,
            value,
            number,
        }
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// The normalized value text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value as a number of the attribute's kind.
    pub fn number(&self) -> Result<Number> {
        self.number.ok_or_else(|| SeekerError::UnparseableValue {
            attribute: self.attribute.name(),
            value: self.value.clone(),
        })
    }

    /// Tests a record against this condition.
    ///
    /// Missing values, kind mismatches and unparseable numbers all yield
    /// `false`.
    pub fn matches<T: Seekable + ?Sized>(&self, record: &T) -> bool {
        match (self.attribute.kind(), record.field_value(self.attribute)) {
            (Kind::Text, Value::Text(text)) => self.match_text(text),
            (Kind::Integer | Kind::Real, Value::Number(field)) => self.match_number(field),
            _ => false,
        }
    }

    fn match_text(&self, field: &str) -> bool {
        let field = field.to_lowercase();
        let pattern = self.value.to_lowercase();
        match self.op {
            Op::Contains => field.contains(&pattern),
            op => op.eval_ordering(field.as_str().cmp(pattern.as_str())),
        }
    }

    fn match_number(&self, field: Number) -> bool {
        if self.op == Op::Contains {
            return field.to_string().contains(&self.value);
        }
        match self.number() {
            Ok(clause) => match field.compare(clause) {
                Some(ordering) => self.op.eval_ordering(ordering),
                None => false, // NaN or kind mismatch
            },
            Err(_) => false,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.attribute, self.op, self.value)
    }
}

fn normalize(kind: Kind, value: &str) -> String {
    match kind {
        Kind::Text => value.trim().to_string(),
        Kind::Integer | Kind::Real => value.chars().filter(|c| !c.is_whitespace()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameRecord;

    fn test_game() -> GameRecord {
        GameRecord::builder("Test Game")
            .id(2)
            .players(4, 10)
            .play_time(30, 60)
            .difficulty(2.0)
            .rank(2)
            .rating(1.3)
            .year(2020)
            .build()
    }

    fn named(name: &str) -> GameRecord {
        GameRecord::builder(name).build()
    }

    #[test]
    fn parse_numeric_clause() {
        let condition = Condition::parse("rating>=8.0").unwrap();
        assert_eq!(condition.attribute(), Attribute::Rating);
        assert_eq!(condition.op(), Op::Gte);
        assert_eq!(condition.value(), "8.0");
        assert_eq!(condition.number(), Ok(Number::Real(8.0)));
    }

    #[test]
    fn parse_strips_whitespace_from_numbers() {
        let condition = Condition::parse(" minPlayers >= 2 ").unwrap();
        assert_eq!(condition.attribute(), Attribute::MinPlayers);
        assert_eq!(condition.value(), "2");

        let condition = Condition::parse("year==2 0 2 0").unwrap();
        assert_eq!(condition.number(), Ok(Number::Integer(2020)));
    }

    #[test]
    fn parse_keeps_inner_spacing_for_text() {
        let condition = Condition::parse("name ==  Go Fish  ").unwrap();
        assert_eq!(condition.value(), "Go Fish");
        assert!(condition.matches(&named("go fish")));
        assert!(!condition.matches(&named("gofish")));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            Condition::parse(""),
            Err(SeekerError::MalformedClause { .. })
        ));
        assert!(matches!(
            Condition::parse("   "),
            Err(SeekerError::MalformedClause { .. })
        ));
        assert!(matches!(
            Condition::parse("invalid condition"),
            Err(SeekerError::MalformedClause { .. })
        ));
        assert!(matches!(
            Condition::parse("==3"),
            Err(SeekerError::MalformedClause { .. })
        ));
        assert!(matches!(
            Condition::parse("rank== "),
            Err(SeekerError::MalformedClause { .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_attribute() {
        assert_eq!(
            Condition::parse("colour==red"),
            Err(SeekerError::UnknownAttribute("colour".to_string()))
        );
    }

    #[test]
    fn every_attribute_passes_the_filter_gate() {
        for attribute in Attribute::ALL {
            let condition = Condition::parse(&format!("{}==1", attribute.name())).unwrap();
            assert_eq!(condition.attribute(), attribute);
        }
        assert_eq!(
            SeekerError::UnfilterableAttribute("id").to_string(),
            "filtering by id is not allowed"
        );
    }

    #[test]
    fn unparseable_number_matches_nothing() {
        let condition = Condition::parse("minPlayers>=two").unwrap();
        assert!(matches!(
            condition.number(),
            Err(SeekerError::UnparseableValue { .. })
        ));
        assert!(!condition.matches(&test_game()));

        let condition = Condition::parse("minPlayers!=two").unwrap();
        assert!(!condition.matches(&test_game()));

        // Integer attributes do not accept reals.
        let condition = Condition::parse("minPlayers>=2.5").unwrap();
        assert!(!condition.matches(&test_game()));
    }

    #[test]
    fn numeric_operators() {
        let game = test_game();
        assert!(Condition::parse("minPlayers>2").unwrap().matches(&game));
        assert!(!Condition::parse("minPlayers>4").unwrap().matches(&game));
        assert!(Condition::parse("minPlayers>=4").unwrap().matches(&game));
        assert!(Condition::parse("maxPlayers<=10").unwrap().matches(&game));
        assert!(!Condition::parse("maxPlayers<10").unwrap().matches(&game));
        assert!(Condition::parse("year==2020").unwrap().matches(&game));
        assert!(Condition::parse("year!=2019").unwrap().matches(&game));
        assert!(!Condition::parse("rating>=7.5").unwrap().matches(&game));
        assert!(Condition::parse("difficulty<2.5").unwrap().matches(&game));
        assert!(Condition::parse("id==2").unwrap().matches(&game));
    }

    #[test]
    fn real_attribute_accepts_integer_text() {
        let condition = Condition::parse("difficulty==2").unwrap();
        assert!(condition.matches(&test_game()));
    }

    #[test]
    fn numeric_contains_uses_text_form() {
        let game = test_game();
        assert!(Condition::parse("year~=20").unwrap().matches(&game));
        assert!(!Condition::parse("year~=19").unwrap().matches(&game));
        assert!(Condition::parse("difficulty~=2.0").unwrap().matches(&game));
        assert!(Condition::parse("rating~=.3").unwrap().matches(&game));
    }

    #[test]
    fn text_contains_is_case_insensitive() {
        let condition = Condition::parse("name~=go").unwrap();
        for name in ["Go", "golang", "GoRami", "Go Fish"] {
            assert!(condition.matches(&named(name)), "{name}");
        }
        assert!(!condition.matches(&named("Chess")));
    }

    #[test]
    fn text_ordering_is_lexicographic() {
        let game = named("Catan");
        assert!(Condition::parse("name==CATAN").unwrap().matches(&game));
        assert!(!Condition::parse("name!=catan").unwrap().matches(&game));
        assert!(Condition::parse("name>b").unwrap().matches(&game));
        assert!(Condition::parse("name<d").unwrap().matches(&game));
        assert!(Condition::parse("name>=catan").unwrap().matches(&game));
        assert!(Condition::parse("name<=catan").unwrap().matches(&game));
        assert!(!Condition::parse("name>catan").unwrap().matches(&game));
    }

    #[test]
    fn text_value_may_contain_operator_characters() {
        let condition = Condition::parse("name==a>b").unwrap();
        assert_eq!(condition.op(), Op::Eq);
        assert_eq!(condition.value(), "a>b");
        assert!(condition.matches(&named("A>B")));
    }

    #[test]
    fn missing_value_never_matches() {
        struct Bare;
        impl Seekable for Bare {
            fn field_value(&self, _attribute: Attribute) -> Value<'_> {
                Value::None
            }
        }

        assert!(!Condition::parse("name!=x").unwrap().matches(&Bare));
        assert!(!Condition::parse("rank!=1").unwrap().matches(&Bare));
    }

    #[test]
    fn kind_mismatch_never_matches() {
        struct Wrong;
        impl Seekable for Wrong {
            fn field_value(&self, attribute: Attribute) -> Value<'_> {
                match attribute {
                    Attribute::Name => Value::Number(Number::Integer(1)),
                    Attribute::Rating => Value::Number(Number::Integer(8)),
                    _ => Value::Text("8"),
                }
            }
        }

        assert!(!Condition::parse("name==1").unwrap().matches(&Wrong));
        assert!(!Condition::parse("rating>=8.0").unwrap().matches(&Wrong));
        assert!(!Condition::parse("rank==8").unwrap().matches(&Wrong));
    }

    #[test]
    fn typed_constructor_normalizes() {
        let condition = Condition::new(Attribute::Rank, Op::Lte, " 1 0 ");
        assert_eq!(condition.value(), "10");
        assert_eq!(condition.number(), Ok(Number::Integer(10)));
        assert_eq!(condition.to_string(), "rank<=10");
    }
}
