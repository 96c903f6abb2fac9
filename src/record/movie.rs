//! Base table rows
//!
//! `MovieRecord` is one row of the immutable base table. Each row carries a
//! stable `RowId` assigned at load time; derived views reference it so
//! downstream code can map back to the parent movie.

use chrono::NaiveDate;
use serde::Serialize;

/// Stable identity of a row in the base table, assigned at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowId(pub usize);

/// Numeric fields usable as range bounds, sort keys and aggregation metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Budget,
    Revenue,
    Popularity,
    VoteAverage,
    ReleaseYear,
}

impl NumericField {
    /// Returns the source column name
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericField::Budget => "budget",
            NumericField::Revenue => "revenue",
            NumericField::Popularity => "popularity",
            NumericField::VoteAverage => "vote_average",
            NumericField::ReleaseYear => "release_year",
        }
    }
}

/// One row of the base table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    /// Row identity, stable for the session
    pub id: RowId,
    /// Movie title, non-empty
    pub title: String,
    /// Release year
    pub release_year: i32,
    /// Release date, when the source row carried a parseable one
    pub release_date: Option<NaiveDate>,
    /// Ordered, duplicate-free genre sequence
    pub genres: Vec<String>,
    /// ISO-like language code
    pub original_language: String,
    /// Budget in currency units; zero marks the record financially incomplete
    pub budget: f64,
    /// Revenue in currency units; zero marks the record financially incomplete
    pub revenue: f64,
    /// Popularity score
    pub popularity: f64,
    /// Average vote
    pub vote_average: f64,
    /// External identifier resolved after load; None when resolution failed
    pub external_link: Option<String>,
}

impl MovieRecord {
    /// Returns true if both financial fields are non-zero
    pub fn has_complete_financials(&self) -> bool {
        self.budget != 0.0 && self.revenue != 0.0
    }
}

/// Field access shared by base and exploded rows.
///
/// This is the seam that lets one predicate engine, ranker and aggregator
/// serve both table shapes.
pub trait RecordFields {
    /// Movie title
    fn title(&self) -> &str;

    /// Original language code
    fn original_language(&self) -> &str;

    /// Release year
    fn release_year(&self) -> i32;

    /// Value of a numeric field
    fn numeric(&self, field: NumericField) -> f64;

    /// True if the row's genre set contains `genre`
    fn has_genre(&self, genre: &str) -> bool;
}

impl RecordFields for MovieRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn original_language(&self) -> &str {
        &self.original_language
    }

    fn release_year(&self) -> i32 {
        self.release_year
    }

    fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Budget => self.budget,
            NumericField::Revenue => self.revenue,
            NumericField::Popularity => self.popularity,
            NumericField::VoteAverage => self.vote_average,
            NumericField::ReleaseYear => f64::from(self.release_year),
        }
    }

    fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Immutable base table, built once at load time
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MovieTable {
    rows: Vec<MovieRecord>,
}

impl MovieTable {
    /// Creates a table from rows
    pub fn new(rows: Vec<MovieRecord>) -> Self {
        Self { rows }
    }

    /// Returns the rows as a slice
    pub fn rows(&self) -> &[MovieRecord] {
        &self.rows
    }

    /// Consumes the table, returning its rows
    pub fn into_rows(self) -> Vec<MovieRecord> {
        self.rows
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.rows.iter()
    }

    /// Looks up a row by identity
    pub fn get(&self, id: RowId) -> Option<&MovieRecord> {
        self.rows.iter().find(|record| record.id == id)
    }

    /// Rows with non-zero budget and revenue.
    ///
    /// Records with either at zero are incomplete for financial analyses;
    /// this view is defined once and applied only where a caller asks.
    pub fn without_zero_financials(&self) -> MovieTable {
        MovieTable::new(
            self.rows
                .iter()
                .filter(|record| record.has_complete_financials())
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: usize, title: &str, budget: f64, revenue: f64) -> MovieRecord {
        MovieRecord {
            id: RowId(id),
            title: title.to_string(),
            release_year: 2000,
            release_date: None,
            genres: vec!["Action".to_string()],
            original_language: "en".to_string(),
            budget,
            revenue,
            popularity: 1.0,
            vote_average: 5.0,
            external_link: None,
        }
    }

    #[test]
    fn test_numeric_field_access() {
        let record = make_record(0, "Test", 100.0, 250.0);
        assert_eq!(record.numeric(NumericField::Budget), 100.0);
        assert_eq!(record.numeric(NumericField::Revenue), 250.0);
        assert_eq!(record.numeric(NumericField::ReleaseYear), 2000.0);
    }

    #[test]
    fn test_genre_membership() {
        let record = make_record(0, "Test", 1.0, 1.0);
        assert!(record.has_genre("Action"));
        assert!(!record.has_genre("Comedy"));
    }

    #[test]
    fn test_without_zero_financials() {
        let table = MovieTable::new(vec![
            make_record(0, "Complete", 10.0, 20.0),
            make_record(1, "NoBudget", 0.0, 20.0),
            make_record(2, "NoRevenue", 10.0, 0.0),
        ]);

        let complete = table.without_zero_financials();
        assert_eq!(complete.len(), 1);
        assert_eq!(complete.rows()[0].title, "Complete");
        // Source table is untouched
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let table = MovieTable::new(vec![make_record(0, "A", 1.0, 1.0), make_record(1, "B", 1.0, 1.0)]);
        assert_eq!(table.get(RowId(1)).map(|r| r.title.as_str()), Some("B"));
        assert!(table.get(RowId(7)).is_none());
    }
}
