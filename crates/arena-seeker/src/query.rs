//! Parsed filter text and the pure filtering pass.
//!
//! A [`Query`] is the typed form of one filter string: the conditions that
//! parsed, in order, and an optional sort clause. [`compute_view`] runs one
//! pass of a query over a record slice.

use crate::condition::Condition;
use crate::ordering::SortKey;
use crate::traits::Seekable;

const SORT_PREFIX: &str = "sort:";

/// A parsed filter: AND-composed conditions plus an optional sort.
///
/// # Example
///
/// ```
/// use arena_seeker::{Attribute, Query, SortKey};
///
/// let query = Query::parse("minPlayers>=2, bogus, sort:rating:desc");
/// assert_eq!(query.conditions().len(), 1);
/// assert_eq!(query.sort(), Some(SortKey::desc(Attribute::Rating).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    conditions: Vec<Condition>,
    sort: Option<SortKey>,
}

impl Query {
    /// Creates an empty query, which matches everything.
    pub fn new() -> Self {
        Query::default()
    }

    /// Parses comma-separated filter text.
    ///
    /// Clauses that fail to parse are dropped. A `sort:attr[:asc|desc]`
    /// clause sets the sort; if its attribute cannot be sorted on, the sort
    /// falls back to name ascending.
    pub fn parse(text: &str) -> Self {
        let mut query = Query::new();
        for clause in text.split(',') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            if let Some(sort) = strip_sort_prefix(clause) {
                query.sort = Some(SortKey::parse_or_default(sort));
                continue;
            }
            match Condition::parse(clause) {
                Ok(condition) => query.conditions.push(condition),
                Err(e) => log::debug!("dropping clause '{clause}': {e}"),
            }
        }
        query
    }

    /// Adds a condition.
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Sets the sort key.
    pub fn order_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The sort clause, if the query carries one.
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// The query's own sort key, or `fallback` when it has none.
    pub fn sort_or(&self, fallback: SortKey) -> SortKey {
        self.sort.unwrap_or(fallback)
    }

    /// Returns `true` if this query has no conditions (matches everything).
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Tests if a single record satisfies every condition.
    pub fn matches<T: Seekable + ?Sized>(&self, record: &T) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }

    /// Counts matching records.
    pub fn count<T: Seekable>(&self, records: &[T]) -> usize {
        records.iter().filter(|r| self.matches(*r)).count()
    }
}

/// Runs one filtering pass over `records`.
///
/// Conditions narrow the full slice left to right, then the survivors are
/// stably sorted by the query's sort, or by `fallback` if it has none.
pub fn compute_view<'a, T: Seekable>(
    records: &'a [T],
    query: &Query,
    fallback: SortKey,
) -> Vec<&'a T> {
    select(records, query, query.sort_or(fallback))
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Indices of the records that pass `query`, ordered by `sort`.
pub(crate) fn select<T: Seekable>(records: &[T], query: &Query, sort: SortKey) -> Vec<usize> {
    let mut selected: Vec<usize> = (0..records.len()).collect();
    for condition in query.conditions() {
        selected.retain(|&i| condition.matches(&records[i]));
        log::trace!("{condition}: {} records left", selected.len());
    }
    selected.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));
    selected
}

fn strip_sort_prefix(clause: &str) -> Option<&str> {
    let head = clause.get(..SORT_PREFIX.len())?;
    head.eq_ignore_ascii_case(SORT_PREFIX)
        .then_some(&clause[SORT_PREFIX.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::game::GameRecord;
    use crate::op::Op;

    fn sample_games() -> Vec<GameRecord> {
        vec![
            GameRecord::builder("Go")
                .players(2, 5)
                .rating(7.5)
                .year(1000)
                .build(),
            GameRecord::builder("Chess")
                .players(2, 2)
                .rating(10.0)
                .year(1475)
                .build(),
            GameRecord::builder("Catan")
                .players(3, 4)
                .rating(7.1)
                .year(1995)
                .build(),
            GameRecord::builder("Gloomhaven")
                .players(1, 4)
                .rating(8.7)
                .year(2017)
                .build(),
        ]
    }

    fn names<'a>(view: &[&'a GameRecord]) -> Vec<&'a str> {
        view.iter().map(|g| g.name()).collect()
    }

    #[test]
    fn parse_empty_text() {
        let query = Query::parse("");
        assert!(query.is_empty());
        assert_eq!(query.sort(), None);
        assert_eq!(Query::parse(" , ,"), Query::new());
    }

    #[test]
    fn parse_keeps_clause_order() {
        let query = Query::parse("rating>7, name~=g");
        let attrs: Vec<Attribute> = query.conditions().iter().map(|c| c.attribute()).collect();
        assert_eq!(attrs, [Attribute::Rating, Attribute::Name]);
    }

    #[test]
    fn parse_drops_bad_clauses() {
        let query = Query::parse("bogus,colour==red,==3,year>2000");
        assert_eq!(query.conditions().len(), 1);
        assert_eq!(query.conditions()[0].op(), Op::Gt);
    }

    #[test]
    fn parse_sort_clause() {
        let query = Query::parse("SORT:year:desc");
        assert_eq!(query.sort(), Some(SortKey::desc(Attribute::Year).unwrap()));

        let query = Query::parse("sort:minplayers");
        assert_eq!(query.sort(), Some(SortKey::asc(Attribute::MinPlayers).unwrap()));

        let query = Query::parse("sort:id:desc");
        assert_eq!(query.sort(), Some(SortKey::default()));
    }

    #[test]
    fn sort_or_prefers_query_sort() {
        let fallback = SortKey::asc(Attribute::Rank).unwrap();
        assert_eq!(Query::new().sort_or(fallback), fallback);
        assert_eq!(
            Query::parse("sort:name").sort_or(fallback),
            SortKey::default()
        );
    }

    #[test]
    fn builder_methods() {
        let query = Query::new()
            .and(Condition::new(Attribute::MinPlayers, Op::Gte, "2"))
            .order_by(SortKey::desc(Attribute::Rating).unwrap());
        let games = sample_games();
        let view = compute_view(&games, &query, SortKey::default());
        assert_eq!(names(&view), ["Chess", "Go", "Catan"]);
    }

    #[test]
    fn compute_view_and_composes() {
        let games = sample_games();
        let view = compute_view(
            &games,
            &Query::parse("minPlayers>=2,maxPlayers<=4"),
            SortKey::default(),
        );
        assert_eq!(names(&view), ["Catan", "Chess"]);
    }

    #[test]
    fn compute_view_empty_query_sorts_everything() {
        let games = sample_games();
        let view = compute_view(&games, &Query::new(), SortKey::default());
        assert_eq!(names(&view), ["Catan", "Chess", "Gloomhaven", "Go"]);
    }

    #[test]
    fn count_and_matches() {
        let games = sample_games();
        let query = Query::parse("name~=g");
        assert_eq!(query.count(&games), 2);
        assert!(query.matches(&games[0]));
        assert!(!query.matches(&games[1]));
    }
}
