//! The board game record.

use std::hash::{Hash, Hasher};

use crate::attribute::Attribute;
use crate::traits::Seekable;
use crate::value::{Number, Value};

/// One board game from the catalog.
///
/// Records are immutable once built. Equality and hashing cover every
/// field, with reals compared by bit pattern, so two records with the same
/// fields are the same game as far as sets are concerned.
///
/// ```
/// use arena_seeker::GameRecord;
///
/// let game = GameRecord::builder("Chess")
///     .players(2, 2)
///     .play_time(10, 120)
///     .rating(10.0)
///     .build();
///
/// assert_eq!(game.name(), "Chess");
/// assert_eq!(game.max_players(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameRecord {
    name: String,
    id: i64,
    min_players: u32,
    max_players: u32,
    min_play_time: u32,
    max_play_time: u32,
    difficulty: f64,
    rank: u32,
    rating: f64,
    year: i32,
}

impl GameRecord {
    /// Starts building a record with the given name and all other fields zero.
    pub fn builder(name: impl Into<String>) -> GameRecordBuilder {
        GameRecordBuilder {
            record: GameRecord {
                name: name.into(),
                id: 0,
                min_players: 0,
                max_players: 0,
                min_play_time: 0,
                max_play_time: 0,
                difficulty: 0.0,
                rank: 0,
                rating: 0.0,
                year: 0,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn min_players(&self) -> u32 {
        self.min_players
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    /// Minimum play time in minutes.
    pub fn min_play_time(&self) -> u32 {
        self.min_play_time
    }

    /// Maximum play time in minutes.
    pub fn max_play_time(&self) -> u32 {
        self.max_play_time
    }

    /// Average weight, roughly 1 (light) to 5 (heavy).
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Year of publication.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Renders the name, followed by the given attribute's value unless the
    /// attribute is the name itself.
    ///
    /// ```
    /// use arena_seeker::{Attribute, GameRecord};
    ///
    /// let game = GameRecord::builder("Go").rating(7.5).build();
    /// assert_eq!(game.describe(Attribute::Name), "Go");
    /// assert_eq!(game.describe(Attribute::Rating), "Go (rating: 7.5)");
    /// ```
    pub fn describe(&self, attribute: Attribute) -> String {
        match attribute {
            Attribute::Name => self.name.clone(),
            other => format!("{} ({}: {})", self.name, other, self.field_value(other)),
        }
    }

    fn key(&self) -> (&str, i64, u32, u32, u32, u32, u64, u32, u64, i32) {
        (
            &self.name,
            self.id,
            self.min_players,
            self.max_players,
            self.min_play_time,
            self.max_play_time,
            self.difficulty.to_bits(),
            self.rank,
            self.rating.to_bits(),
            self.year,
        )
    }
}

impl PartialEq for GameRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for GameRecord {}

impl Hash for GameRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Seekable for GameRecord {
    fn field_value(&self, attribute: Attribute) -> Value<'_> {
        match attribute {
            Attribute::Name => Value::Text(&self.name),
            Attribute::Id => Value::Number(Number::from(self.id)),
            Attribute::Rating => Value::Number(Number::from(self.rating)),
            Attribute::Difficulty => Value::Number(Number::from(self.difficulty)),
            Attribute::Rank => Value::Number(Number::from(self.rank)),
            Attribute::MinPlayers => Value::Number(Number::from(self.min_players)),
            Attribute::MaxPlayers => Value::Number(Number::from(self.max_players)),
            Attribute::MinPlayTime => Value::Number(Number::from(self.min_play_time)),
            Attribute::MaxPlayTime => Value::Number(Number::from(self.max_play_time)),
            Attribute::Year => Value::Number(Number::from(self.year)),
        }
    }
}

/// Fluent builder for [`GameRecord`].
#[derive(Debug, Clone)]
pub struct GameRecordBuilder {
    record: GameRecord,
}

impl GameRecordBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.record.id = id;
        self
    }

    /// Sets both player counts.
    pub fn players(mut self, min: u32, max: u32) -> Self {
        self.record.min_players = min;
        self.record.max_players = max;
        self
    }

    pub fn min_players(mut self, n: u32) -> Self {
        self.record.min_players = n;
        self
    }

    pub fn max_players(mut self, n: u32) -> Self {
        self.record.max_players = n;
        self
    }

    /// Sets both play times, in minutes.
    pub fn play_time(mut self, min: u32, max: u32) -> Self {
        self.record.min_play_time = min;
        self.record.max_play_time = max;
        self
    }

    pub fn difficulty(mut self, difficulty: f64) -> Self {
        self.record.difficulty = difficulty;
        self
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.record.rank = rank;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.record.rating = rating;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.record.year = year;
        self
    }

    pub fn build(self) -> GameRecord {
        self.record
    }
}
