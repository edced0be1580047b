//! Reading game catalogs from CSV.
//!
//! The first row names the columns. Columns are matched to attributes by
//! their catalog header (`objectname`, `average`, `minplayers`, ...), in
//! any order; columns the schema does not know are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use arena_seeker::{Attribute, GameRecord};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{PlannerError, Result};

/// Loads a catalog from a CSV file.
pub fn load_games(path: impl AsRef<Path>) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let games = parse_games(file)?;
    log::info!("loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

/// Parses CSV content with a header row into game records.
///
/// Fails if the header lacks a schema column. Rows with missing cells or
/// numbers that do not parse are skipped with a warning. Empty input yields
/// an empty catalog.
pub fn parse_games<R: Read>(reader: R) -> Result<Vec<GameRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let columns = Columns::from_headers(&headers)?;

    let mut games = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping malformed catalog row: {e}");
                continue;
            }
        };
        match columns.read(&row) {
            Ok(game) => games.push(game),
            Err(e) => {
                let line = row.position().map_or(0, |p| p.line());
                log::warn!("skipping catalog row at line {line}: {e}");
            }
        }
    }
    Ok(games)
}

#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("missing {0} value")]
    Missing(&'static str),

    #[error("{column} value '{value}' is not a number")]
    NotANumber { column: &'static str, value: String },
}

/// Header position of every schema attribute.
struct Columns(HashMap<Attribute, usize>);

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut positions = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            match Attribute::from_column(header) {
                Some(attribute) => {
                    positions.entry(attribute).or_insert(i);
                }
                None => log::debug!("ignoring catalog column '{header}'"),
            }
        }
        if let Some(missing) = Attribute::ALL
            .into_iter()
            .find(|attribute| !positions.contains_key(attribute))
        {
            return Err(PlannerError::MissingColumn(missing.column()));
        }
        Ok(Columns(positions))
    }

    fn cell<'r>(
        &self,
        row: &'r StringRecord,
        attribute: Attribute,
    ) -> std::result::Result<&'r str, RowError> {
        self.0
            .get(&attribute)
            .and_then(|&i| row.get(i))
            .filter(|cell| !cell.is_empty())
            .ok_or(RowError::Missing(attribute.column()))
    }

    fn number<T: FromStr>(
        &self,
        row: &StringRecord,
        attribute: Attribute,
    ) -> std::result::Result<T, RowError> {
        let cell = self.cell(row, attribute)?;
        cell.parse().map_err(|_| RowError::NotANumber {
            column: attribute.column(),
            value: cell.to_string(),
        })
    }

    fn read(&self, row: &StringRecord) -> std::result::Result<GameRecord, RowError> {
        Ok(GameRecord::builder(self.cell(row, Attribute::Name)?)
            .id(self.number(row, Attribute::Id)?)
            .min_players(self.number(row, Attribute::MinPlayers)?)
            .max_players(self.number(row, Attribute::MaxPlayers)?)
            .play_time(
                self.number(row, Attribute::MinPlayTime)?,
                self.number(row, Attribute::MaxPlayTime)?,
            )
            .difficulty(self.number(row, Attribute::Difficulty)?)
            .rank(self.number(row, Attribute::Rank)?)
            .rating(self.number(row, Attribute::Rating)?)
            .year(self.number(row, Attribute::Year)?)
            .build())
    }
}
