//! CSV loading
//!
//! Reads the delimited source table into a `MovieTable`, assigning each
//! row its `RowId`. Fields arrive as text and are validated here so type
//! violations surface as `ParseError`s with row context, not as opaque
//! deserialization failures.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::observability::Logger;
use crate::record::{parse_genre_list, MovieRecord, MovieTable, ParseError, RowId};

use super::errors::{LoadError, LoadResult};

/// One row as stored in the source file
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    title: String,
    release_year: String,
    #[serde(default)]
    release_date: Option<String>,
    genres: String,
    original_language: String,
    budget: String,
    revenue: String,
    popularity: String,
    vote_average: String,
    /// Present only in pre-enriched exports
    #[serde(default)]
    links: Option<String>,
}

/// Loads a movie table from a CSV file
pub fn load_csv_path(path: impl AsRef<Path>) -> LoadResult<MovieTable> {
    let file = File::open(path.as_ref())?;
    load_csv(file)
}

/// Loads a movie table from any CSV reader.
///
/// Fails fast with the first row that violates the type constraints;
/// there is no partial table.
pub fn load_csv<R: io::Read>(reader: R) -> LoadResult<MovieTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize::<RawMovieRow>().enumerate() {
        let raw = result?;
        // Line 1 is the header
        let line = index + 2;
        let record = build_record(RowId(index), raw).map_err(|source| LoadError::Row { line, source })?;
        rows.push(record);
    }

    let table = MovieTable::new(rows);
    Logger::info("LOAD_COMPLETE", &[("rows", &table.len().to_string())]);
    Ok(table)
}

fn build_record(id: RowId, raw: RawMovieRow) -> Result<MovieRecord, ParseError> {
    let title = raw.title.trim().to_string();
    if title.is_empty() {
        return Err(ParseError::EmptyTitle);
    }

    let release_year = raw
        .release_year
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::year(raw.release_year.as_str()))?;

    // Unlike the fields above, a bad date is merely absent
    let release_date = raw
        .release_date
        .as_deref()
        .and_then(|date| NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok());

    let genres = parse_genre_list(&raw.genres)?;

    let budget = parse_non_negative("budget", &raw.budget)?;
    let revenue = parse_non_negative("revenue", &raw.revenue)?;
    let popularity = parse_non_negative("popularity", &raw.popularity)?;
    let vote_average = parse_non_negative("vote_average", &raw.vote_average)?;

    Ok(MovieRecord {
        id,
        title,
        release_year,
        release_date,
        genres,
        original_language: raw.original_language.trim().to_string(),
        budget,
        revenue,
        popularity,
        vote_average,
        external_link: normalize_link(raw.links),
    })
}

fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::numeric(field, raw))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::Negative { field, value });
    }
    Ok(value)
}

/// Maps empty cells and the resolver's sentinel to an absent link
fn normalize_link(raw: Option<String>) -> Option<String> {
    raw.map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty() && link != crate::links::LINK_NOT_FOUND)
}
