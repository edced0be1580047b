//! Comparison operators for filter clauses.
//!
//! The [`Op`] enum defines the seven operators of the filter language and
//! how to find them inside a raw clause such as `rating>=8.0`.

use std::cmp::Ordering;

use crate::error::{Result, SeekerError};

/// Comparison operator for a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `~=`, substring match.
    Contains,
}

impl Op {
    /// Every operator, two-character tokens first.
    ///
    /// Detection tries tokens in this order at each position, so `>=` is
    /// found before its prefix `>`.
    pub const ALL: [Op; 7] = [
        Op::Gte,
        Op::Lte,
        Op::Eq,
        Op::Ne,
        Op::Contains,
        Op::Gt,
        Op::Lt,
    ];

    /// The textual token of this operator.
    pub fn token(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::Contains => "~=",
        }
    }

    /// Looks up the operator written exactly as `token`.
    pub fn from_token(token: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.token() == token)
    }

    /// Finds the first operator in `text` and its byte offset.
    ///
    /// The occurrence with the smallest start wins; at the same start the
    /// longer token wins.
    ///
    /// ```
    /// use arena_seeker::Op;
    ///
    /// assert_eq!(Op::detect("rating>=8.0"), Some((Op::Gte, 6)));
    /// assert_eq!(Op::detect("name==a>b"), Some((Op::Eq, 4)));
    /// assert_eq!(Op::detect("bogus"), None);
    /// ```
    pub fn detect(text: &str) -> Option<(Op, usize)> {
        text.char_indices().find_map(|(pos, _)| {
            let rest = &text[pos..];
            Op::ALL
                .into_iter()
                .find(|op| rest.starts_with(op.token()))
                .map(|op| (op, pos))
        })
    }

    /// Returns `true` for the ordering operators `>`, `<`, `>=`, `<=`.
    pub fn is_ordering(self) -> bool {
        matches!(self, Op::Gt | Op::Lt | Op::Gte | Op::Lte)
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// `Contains` is not ordering-based and always yields `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "equals",
            Op::Ne => "not equals",
            Op::Gt => "greater than",
            Op::Lt => "less than",
            Op::Gte => "greater than or equal",
            Op::Lte => "less than or equal",
            Op::Contains => "contains",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Splits a raw clause into attribute text, operator and value text.
///
/// The attribute text is everything before the detected token and must not
/// be blank. The value text is everything after the token, untouched.
pub fn split_clause(clause: &str) -> Result<(&str, Op, &str)> {
    let (op, pos) =
        Op::detect(clause).ok_or_else(|| SeekerError::malformed(clause, "no operator found"))?;
    let attribute = &clause[..pos];
    if attribute.trim().is_empty() {
        return Err(SeekerError::malformed(clause, "no attribute named"));
    }
    Ok((attribute, op, &clause[pos + op.token().len()..]))
}
