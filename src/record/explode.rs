//! Genre expansion
//!
//! `explode` derives a one-to-many view of the base table: one row per
//! (movie, genre) pair, all other fields duplicated. The derived view
//! references parent rows by `RowId`, so a movie's exploded row count
//! always equals its genre count and collapsing by identity recovers the
//! original genre sequence.
//!
//! Exploding never fails: a malformed genres field is rejected at load
//! time, before a table exists.

use serde::Serialize;

use super::movie::{MovieRecord, MovieTable, NumericField, RecordFields, RowId};

/// One (movie, genre) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplodedRecord {
    /// Identity of the parent row in the base table
    pub source: RowId,
    /// Movie title
    pub title: String,
    /// Release year
    pub release_year: i32,
    /// Single genre carried by this row
    pub genre: String,
    /// ISO-like language code
    pub original_language: String,
    /// Budget in currency units
    pub budget: f64,
    /// Revenue in currency units
    pub revenue: f64,
    /// Popularity score
    pub popularity: f64,
    /// Average vote
    pub vote_average: f64,
    /// External identifier of the parent row
    pub external_link: Option<String>,
}

impl RecordFields for ExplodedRecord {
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
        self.genre == genre
    }
}

/// Derived one-row-per-genre view of a base table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExplodedTable {
    rows: Vec<ExplodedRecord>,
}

impl ExplodedTable {
    /// Creates a table from rows
    pub fn new(rows: Vec<ExplodedRecord>) -> Self {
        Self { rows }
    }

    /// Returns the rows as a slice
    pub fn rows(&self) -> &[ExplodedRecord] {
        &self.rows
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
    pub fn iter(&self) -> impl Iterator<Item = &ExplodedRecord> {
        self.rows.iter()
    }
}

/// Expands every row of the base table into one row per genre.
///
/// Pure and repeatable: the same table always produces the same view, in
/// base-row order with genres in their stored order.
pub fn explode(table: &MovieTable) -> ExplodedTable {
    let mut rows = Vec::new();
    for record in table.iter() {
        for genre in &record.genres {
            rows.push(exploded_row(record, genre.clone()));
        }
    }
    ExplodedTable::new(rows)
}

fn exploded_row(record: &MovieRecord, genre: String) -> ExplodedRecord {
    ExplodedRecord {
        source: record.id,
        title: record.title.clone(),
        release_year: record.release_year,
        genre,
        original_language: record.original_language.clone(),
        budget: record.budget,
        revenue: record.revenue,
        popularity: record.popularity,
        vote_average: record.vote_average,
        external_link: record.external_link.clone(),
    }
}

/// Rebuilds each movie's genre sequence from an exploded view.
///
/// Groups by parent identity in first-seen order; genres keep their row
/// order within each group.
pub fn collapse(table: &ExplodedTable) -> Vec<(RowId, Vec<String>)> {
    let mut order: Vec<RowId> = Vec::new();
    let mut groups: std::collections::HashMap<RowId, Vec<String>> = std::collections::HashMap::new();

    for row in table.iter() {
        let genres = groups.entry(row.source).or_insert_with(|| {
            order.push(row.source);
            Vec::new()
        });
        genres.push(row.genre.clone());
    }

    order
        .into_iter()
        .map(|id| {
            let genres = groups.remove(&id).unwrap_or_default();
            (id, genres)
        })
        .collect()
}
