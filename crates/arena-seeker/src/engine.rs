//! The stateful query engine.
//!
//! [`QueryEngine`] owns the catalog and remembers the result of its last
//! filter call as the working subset. Every call to a `filter*` method
//! starts again from the full catalog; the working subset is only kept so
//! callers such as the selection list can index into "what the user is
//! looking at" via [`QueryEngine::current`].

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::attribute::Attribute;
use crate::error::Result;
use crate::game::GameRecord;
use crate::ordering::{Dir, SortKey};
use crate::query::{select, Query};

/// Whether the engine holds a working subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No filter applied since construction or the last reset.
    Fresh,
    /// A filter call has produced a working subset.
    Filtered,
}

#[derive(Debug, Clone)]
struct View {
    indices: Vec<usize>,
    sort: SortKey,
}

/// Holds the catalog and answers filter requests against it.
///
/// # Example
///
/// ```
/// use arena_seeker::{Attribute, GameRecord, QueryEngine};
///
/// let mut engine = QueryEngine::new(vec![
///     GameRecord::builder("Go").players(2, 5).rating(7.5).build(),
///     GameRecord::builder("Chess").players(2, 2).rating(10.0).build(),
/// ]);
///
/// let names: Vec<&str> = engine
///     .filter_sorted("minPlayers>=2,maxPlayers<=5", Attribute::Rating, false)
///     .unwrap()
///     .map(|g| g.name())
///     .collect();
/// assert_eq!(names, ["Chess", "Go"]);
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine {
    records: Vec<GameRecord>,
    working: Option<View>,
}

impl QueryEngine {
    /// Creates an engine over `records`, dropping exact duplicates.
    pub fn new(records: impl IntoIterator<Item = GameRecord>) -> Self {
        let mut seen = HashSet::new();
        let records: Vec<GameRecord> = records
            .into_iter()
            .filter(|r| seen.insert(r.clone()))
            .collect();
        log::debug!("query engine holds {} games", records.len());
        QueryEngine {
            records,
            working: None,
        }
    }

    /// The full catalog, in load order.
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> State {
        match self.working {
            Some(_) => State::Filtered,
            None => State::Fresh,
        }
    }

    /// Filters by `text`, sorted by name ascending unless the text carries
    /// a `sort:` clause.
    pub fn filter(&mut self, text: &str) -> Games<'_> {
        self.filter_with(text, SortKey::default())
    }

    /// Filters by `text`, sorted ascending by `sort_on`.
    ///
    /// Fails if the schema forbids sorting by `sort_on`.
    pub fn filter_by(&mut self, text: &str, sort_on: Attribute) -> Result<Games<'_>> {
        self.filter_sorted(text, sort_on, true)
    }

    /// Filters by `text`, sorted by `sort_on` in the given direction.
    ///
    /// Fails if the schema forbids sorting by `sort_on`.
    pub fn filter_sorted(
        &mut self,
        text: &str,
        sort_on: Attribute,
        ascending: bool,
    ) -> Result<Games<'_>> {
        let key = SortKey::new(sort_on, Dir::from_ascending(ascending))?;
        Ok(self.filter_with(text, key))
    }

    /// Like [`QueryEngine::filter_sorted`], with the sort attribute given by
    /// name.
    ///
    /// Fails if `sort_on` names no attribute or one that cannot be sorted.
    pub fn filter_sorted_str(
        &mut self,
        text: &str,
        sort_on: &str,
        ascending: bool,
    ) -> Result<Games<'_>> {
        let attribute = Attribute::resolve(sort_on)?;
        self.filter_sorted(text, attribute, ascending)
    }

    /// Filters by `text` with an explicit sort key.
    ///
    /// A `sort:` clause inside the text takes precedence over `key`.
    pub fn filter_with(&mut self, text: &str, key: SortKey) -> Games<'_> {
        let query = Query::parse(text);
        self.apply(&query, key)
    }

    /// Runs an already parsed query over the full catalog and makes the
    /// result the working subset.
    pub fn apply(&mut self, query: &Query, key: SortKey) -> Games<'_> {
        let sort = query.sort_or(key);
        let indices = select(&self.records, query, sort);
        log::debug!(
            "{} condition(s), sorted by {sort}: {} of {} games",
            query.conditions().len(),
            indices.len(),
            self.records.len()
        );
        self.working = Some(View { indices, sort });
        self.current()
    }

    /// The working subset from the last filter call.
    ///
    /// When fresh, this is the whole catalog sorted by name.
    pub fn current(&self) -> Games<'_> {
        match &self.working {
            Some(view) => Games::new(&self.records, view.indices.clone(), view.sort),
            None => {
                let sort = SortKey::default();
                Games::new(&self.records, select(&self.records, &Query::new(), sort), sort)
            }
        }
    }

    /// Drops the working subset. Calling it again is a no-op.
    pub fn reset(&mut self) {
        if self.working.take().is_some() {
            log::debug!("working subset cleared");
        }
    }
}

/// Ordered filter results.
///
/// A one-shot iterator over records borrowed from the engine; filter again
/// to get a fresh one.
#[derive(Debug)]
pub struct Games<'a> {
    records: &'a [GameRecord],
    indices: std::vec::IntoIter<usize>,
    sort: SortKey,
}

impl<'a> Games<'a> {
    fn new(records: &'a [GameRecord], indices: Vec<usize>, sort: SortKey) -> Self {
        Games {
            records,
            indices: indices.into_iter(),
            sort,
        }
    }

    /// The sort key that ordered these results.
    pub fn sort_key(&self) -> SortKey {
        self.sort
    }
}

impl<'a> Iterator for Games<'a> {
    type Item = &'a GameRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|i| &self.records[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Games<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(|i| &self.records[i])
    }
}

impl ExactSizeIterator for Games<'_> {}

impl FusedIterator for Games<'_> {}
