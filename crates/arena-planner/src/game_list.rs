//! The user's list of games to play.
//!
//! A [`GameList`] is a set of records kept in case-insensitive name order.
//! Games are added by picking from a candidate sequence (normally the
//! engine's current results) and removed by picking from the list itself.
//! Both use the same selector syntax:
//!
//! | Selector | Meaning |
//! |----------|---------|
//! | `all` | every candidate (add) or every listed game (remove) |
//! | `3` | the third entry, 1-based |
//! | `2-5` | entries two through five, inclusive |
//! | anything else | games with that name, ignoring case |

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use arena_seeker::{GameRecord, SortKey};

use crate::error::{PlannerError, Result};

/// File the list is saved to when no name is given.
pub const DEFAULT_LIST_FILE: &str = "games_list.txt";

/// A parsed list selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    All,
    /// 1-based position.
    Index(usize),
    /// 1-based inclusive range.
    Range(usize, usize),
    Name(&'a str),
}

impl<'a> Selector<'a> {
    /// Parses a selector. Only blank input and numeric-looking input that
    /// is neither an index nor a range are rejected.
    ///
    /// ```
    /// use arena_planner::Selector;
    ///
    /// assert_eq!(Selector::parse("ALL").unwrap(), Selector::All);
    /// assert_eq!(Selector::parse("2 - 4").unwrap(), Selector::Range(2, 4));
    /// assert_eq!(Selector::parse("Go Fish").unwrap(), Selector::Name("Go Fish"));
    /// assert!(Selector::parse("1-2-3").is_err());
    /// ```
    pub fn parse(input: &'a str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PlannerError::EmptySelection);
        }
        if input.eq_ignore_ascii_case("all") {
            return Ok(Selector::All);
        }
        if let Ok(index) = input.parse() {
            return Ok(Selector::Index(index));
        }
        if let Some((start, end)) = input.split_once('-') {
            if let (Ok(start), Ok(end)) = (start.trim().parse(), end.trim().parse()) {
                return Ok(Selector::Range(start, end));
            }
        }
        if input
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c.is_whitespace())
        {
            return Err(PlannerError::invalid_selection(input));
        }
        Ok(Selector::Name(input))
    }

    /// The slice of `items` this positional selector covers.
    fn positions<'s, T>(&self, items: &'s [T]) -> Result<&'s [T]> {
        let len = items.len();
        match *self {
            Selector::All => Ok(items),
            Selector::Index(index) => {
                if index == 0 || index > len {
                    return Err(PlannerError::IndexOutOfRange { index, len });
                }
                Ok(&items[index - 1..index])
            }
            Selector::Range(start, end) => {
                if start == 0 || end > len || start > end {
                    return Err(PlannerError::InvalidRange { start, end, len });
                }
                Ok(&items[start - 1..end])
            }
            Selector::Name(name) => Err(PlannerError::not_found(name)),
        }
    }
}

/// An ordered set of games the user plans to play.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: Vec<GameRecord>,
}

impl GameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds games picked from `candidates` and returns how many were new.
    ///
    /// A name matching any candidate (ignoring case) wins over reading the
    /// selector as an index, so a game called "1830" can be added by name.
    pub fn add<'g>(
        &mut self,
        selector: &str,
        candidates: impl IntoIterator<Item = &'g GameRecord>,
    ) -> Result<usize> {
        let candidates: Vec<&GameRecord> = candidates.into_iter().collect();
        let parsed = Selector::parse(selector);

        let named: Vec<&GameRecord> = candidates
            .iter()
            .copied()
            .filter(|game| game.name().eq_ignore_ascii_case(selector.trim()))
            .collect();
        let picked = if !named.is_empty() && !matches!(parsed, Ok(Selector::All)) {
            named
        } else {
            parsed?.positions(&candidates)?.to_vec()
        };

        let before = self.games.len();
        for game in picked {
            if !self.games.contains(game) {
                self.games.push(game.clone());
            }
        }
        SortKey::default().sort(&mut self.games);
        Ok(self.games.len() - before)
    }

    /// Removes games and returns how many were dropped.
    ///
    /// Indices and ranges count from 1 in the list's own order.
    pub fn remove(&mut self, selector: &str) -> Result<usize> {
        let before = self.games.len();
        match Selector::parse(selector)? {
            Selector::Name(name) => {
                self.games.retain(|game| !game.name().eq_ignore_ascii_case(name));
                if self.games.len() == before {
                    return Err(PlannerError::not_found(name));
                }
            }
            positional => {
                let doomed = positional.positions(&self.games)?.to_vec();
                self.games.retain(|game| !doomed.contains(game));
            }
        }
        Ok(before - self.games.len())
    }

    /// Listed games, in name order.
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn names(&self) -> Vec<&str> {
        self.games.iter().map(|game| game.name()).collect()
    }

    pub fn count(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Writes one name per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for name in self.names() {
            writeln!(out, "{name}")?;
        }
        out.flush()
    }

    /// Saves the list to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        log::info!("saved {} games to {}", self.count(), path.display());
        Ok(())
    }
}
