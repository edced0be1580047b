//! The attribute schema.
//!
//! [`Attribute`] is the closed set of game fields the engine knows how to
//! filter and sort on. Each variant carries its logical name, the column
//! name used by catalog files, its [`Kind`], and whether the schema allows
//! it in filter clauses and sort requests.

use std::str::FromStr;

use crate::error::{Result, SeekerError};

/// The value kind of an attribute, governing parsing and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Free text, compared case-insensitively.
    Text,
    /// Whole numbers.
    Integer,
    /// Floating point numbers.
    Real,
}

impl Kind {
    /// Returns `true` for [`Kind::Integer`] and [`Kind::Real`].
    pub fn is_numeric(self) -> bool {
        matches!(self, Kind::Integer | Kind::Real)
    }

    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Integer => "integer",
            Kind::Real => "real",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A filterable/sortable field of a board game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Id,
    Rating,
    Difficulty,
    Rank,
    MinPlayers,
    MaxPlayers,
    MinPlayTime,
    MaxPlayTime,
    Year,
}

/// One row of the schema table.
///
/// `filterable` is currently true for every attribute; it is the policy
/// switch `Condition::parse` checks, so a field can be made sort-only by
/// flipping it here. `sortable` is false only for `Id`.
struct Entry {
    name: &'static str,
    column: &'static str,
    aliases: &'static [&'static str],
    kind: Kind,
    filterable: bool,
    sortable: bool,
}

impl Attribute {
    /// Every attribute, in schema order.
    pub const ALL: [Attribute; 10] = [
        Attribute::Name,
        Attribute::Id,
        Attribute::Rating,
        Attribute::Difficulty,
        Attribute::Rank,
        Attribute::MinPlayers,
        Attribute::MaxPlayers,
        Attribute::MinPlayTime,
        Attribute::MaxPlayTime,
        Attribute::Year,
    ];

    fn entry(self) -> &'static Entry {
        match self {
            Attribute::Name => &Entry {
                name: "name",
                column: "objectname",
                aliases: &[],
                kind: Kind::Text,
                filterable: true,
                sortable: true,
            },
            // Ids are arbitrary catalog keys; ordering by them is meaningless.
            Attribute::Id => &Entry {
                name: "id",
                column: "objectid",
                aliases: &[],
                kind: Kind::Integer,
                filterable: true,
                sortable: false,
            },
            Attribute::Rating => &Entry {
                name: "rating",
                column: "average",
                aliases: &[],
                kind: Kind::Real,
                filterable: true,
                sortable: true,
            },
            Attribute::Difficulty => &Entry {
                name: "difficulty",
                column: "avgweight",
                aliases: &["weight"],
                kind: Kind::Real,
                filterable: true,
                sortable: true,
            },
            Attribute::Rank => &Entry {
                name: "rank",
                column: "rank",
                aliases: &[],
                kind: Kind::Integer,
                filterable: true,
                sortable: true,
            },
            Attribute::MinPlayers => &Entry {
                name: "minPlayers",
                column: "minplayers",
                aliases: &["min_players"],
                kind: Kind::Integer,
                filterable: true,
                sortable: true,
            },
            Attribute::MaxPlayers => &Entry {
                name: "maxPlayers",
                column: "maxplayers",
                aliases: &["max_players"],
                kind: Kind::Integer,
                filterable: true,
                sortable: true,
            },
            Attribute::MinPlayTime => &Entry {
                name: "minPlayTime",
                column: "minplaytime",
                aliases: &["min_time"],
                kind: Kind::Integer,
                filterable: true,
                sortable: true,
            },
            Attribute::MaxPlayTime => &Entry {
                name: "maxPlayTime",
                column: "maxplaytime",
                aliases: &["max_time"],
                kind: Kind::Integer,
                filterable: true,
                sortable: true,
            },
            Attribute::Year => &Entry {
                name: "year",
                column: "yearpublished",
                aliases: &["yearPublished"],
                kind: Kind::Integer,
                filterable: true,
                sortable: true,
            },
        }
    }

    /// Resolves an attribute by logical name, column name or alias.
    ///
    /// Lookup ignores case and surrounding whitespace.
    ///
    /// ```
    /// use arena_seeker::Attribute;
    ///
    /// assert_eq!(Attribute::resolve("MINPLAYERS").unwrap(), Attribute::MinPlayers);
    /// assert_eq!(Attribute::resolve("average").unwrap(), Attribute::Rating);
    /// assert!(Attribute::resolve("colour").is_err());
    /// ```
    pub fn resolve(name: &str) -> Result<Attribute> {
        let name = name.trim();
        Attribute::ALL
            .into_iter()
            .find(|attr| {
                let entry = attr.entry();
                entry.name.eq_ignore_ascii_case(name)
                    || entry.column.eq_ignore_ascii_case(name)
                    || entry.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| SeekerError::UnknownAttribute(name.to_string()))
    }

    /// Finds the attribute stored under a catalog column header.
    pub fn from_column(column: &str) -> Option<Attribute> {
        let column = column.trim();
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.column().eq_ignore_ascii_case(column))
    }

    /// The logical name used in filter text.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// The column header used by catalog files.
    pub fn column(self) -> &'static str {
        self.entry().column
    }

    pub fn kind(self) -> Kind {
        self.entry().kind
    }

    /// Whether filter clauses may reference this attribute.
    pub fn is_filterable(self) -> bool {
        self.entry().filterable
    }

    /// Whether results may be sorted by this attribute.
    pub fn is_sortable(self) -> bool {
        self.entry().sortable
    }
}

impl FromStr for Attribute {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Attribute::resolve(s)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
