//! Arena Planner - pick board games to play from a catalog.
//!
//! This crate wraps the [`arena_seeker`] query engine with the pieces an
//! interactive planner needs:
//!
//! - [`load_games`] / [`parse_games`]: read a CSV catalog
//! - [`GameList`]: the set of games the user has picked
//! - [`Console`]: a line-oriented shell over both
//!
//! # Example
//!
//! ```rust
//! use arena_planner::{parse_games, GameList};
//! use arena_seeker::QueryEngine;
//!
//! let csv = "\
//! objectname,objectid,average,avgweight,rank,minplayers,maxplayers,minplaytime,maxplaytime,yearpublished
//! Go,188,7.6,3.9,250,2,2,30,180,-2200
//! Go Fish,8,4.2,1.0,12000,2,6,10,15,1850
//! Chess,171,7.0,3.7,400,2,2,10,120,1475
//! ";
//! let mut engine = QueryEngine::new(parse_games(csv.as_bytes()).unwrap());
//! engine.filter("name~=go");
//!
//! let mut list = GameList::new();
//! list.add("all", engine.current()).unwrap();
//! assert_eq!(list.names(), ["Go", "Go Fish"]);
//! ```

mod config;
mod console;
mod error;
mod game_list;
mod loader;

pub use config::{PlannerConfig, DEFAULT_CATALOG};
pub use console::{write_results, Console};
pub use error::{PlannerError, Result};
pub use game_list::{GameList, Selector, DEFAULT_LIST_FILE};
pub use loader::{load_games, parse_games};
