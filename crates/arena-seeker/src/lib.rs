//! Arena Seeker - typed filter and sort engine for board game catalogs.
//!
//! Arena Seeker takes a catalog of [`GameRecord`]s and narrows it with a
//! small textual filter language, then sorts the survivors. It supports:
//!
//! - A fixed attribute schema with text, integer and real kinds
//! - Seven comparison operators, detected by position inside a clause
//! - Comma-separated clauses combined with AND
//! - Case-insensitive text matching and ordering
//! - Type-aware sorting with a direction, stable for equal keys
//!
//! # Quick Start
//!
//! ```rust
//! use arena_seeker::{Attribute, GameRecord, QueryEngine};
//!
//! let mut engine = QueryEngine::new(vec![
//!     GameRecord::builder("Go").players(2, 2).rating(7.5).build(),
//!     GameRecord::builder("Go Fish").players(2, 6).rating(5.1).build(),
//!     GameRecord::builder("Chess").players(2, 2).rating(10.0).build(),
//! ]);
//!
//! let names: Vec<&str> = engine
//!     .filter("name~=go, maxPlayers<=4")
//!     .map(|game| game.name())
//!     .collect();
//! assert_eq!(names, ["Go"]);
//!
//! // Every call starts again from the whole catalog.
//! let by_rating: Vec<&str> = engine
//!     .filter_sorted("", Attribute::Rating, false)
//!     .unwrap()
//!     .map(|game| game.name())
//!     .collect();
//! assert_eq!(by_rating, ["Chess", "Go", "Go Fish"]);
//! ```
//!
//! # Filter Language
//!
//! ```text
//! filterText := clause (',' clause)*
//! clause     := attrName operator value | 'sort:' attrName (':' ('asc'|'desc'))?
//! operator   := '==' | '!=' | '>=' | '<=' | '>' | '<' | '~='
//! ```
//!
//! Clauses that do not parse are dropped rather than reported; an empty
//! filter matches every game.
//!
//! | Kind | `==` `!=` `<` `>` `<=` `>=` | `~=` |
//! |------|-----------------------------|------|
//! | Text | case-insensitive lexicographic | case-insensitive substring |
//! | Integer / Real | numeric | substring of the number's text |

mod attribute;
mod condition;
mod engine;
mod error;
mod game;
mod op;
mod ordering;
mod query;
mod traits;
mod value;

// Re-export public API
pub use attribute::{Attribute, Kind};
pub use condition::Condition;
pub use engine::{Games, QueryEngine, State};
pub use error::{Result, SeekerError};
pub use game::{GameRecord, GameRecordBuilder};
pub use op::{split_clause, Op};
pub use ordering::{compare_values, Dir, SortKey};
pub use query::{compute_view, Query};
pub use traits::Seekable;
pub use value::{Number, Value};
