//! Query dispatcher
//!
//! One decision table over (attribute, restriction shape) replaces the
//! branching that used to be copy-pasted per chart call site:
//!
//! | attribute           | restriction | action                                   |
//! |---------------------|-------------|------------------------------------------|
//! | genres              | list        | explode, filter by any-of membership     |
//! | genres              | single      | explode, filter by equality              |
//! | genres              | none        | full exploded table, unfiltered          |
//! | original_language   | list        | filter base table by membership          |
//! | original_language   | single      | filter base table by equality            |
//! | release_year        | list        | coerce to integers, filter base by set   |
//! | release_year        | single      | coerce to integer, filter base by equality |
//! | anything else       | —           | group base table, mean of the metric     |
//!
//! The branch taken changes both the row granularity of the result and
//! whether an aggregate or a row-level set is returned. An empty list
//! restriction narrows nothing and takes the no-restriction branch.

use crate::query::FilterSpec;
use crate::record::{ExplodedTable, MovieTable};
use crate::stats::group_mean;

use super::errors::{DispatchError, DispatchResult};
use super::result::QueryResult;
use super::spec::{Attribute, QuerySpec, Restriction};

/// Resolves a query spec to the right combination of explode, filter and
/// group-mean over one immutable snapshot
pub struct QueryDispatcher<'a> {
    base: &'a MovieTable,
    exploded: &'a ExplodedTable,
}

impl<'a> QueryDispatcher<'a> {
    /// Creates a dispatcher over a base table and its exploded view
    pub fn new(base: &'a MovieTable, exploded: &'a ExplodedTable) -> Self {
        Self { base, exploded }
    }

    /// Executes the decision table for one query spec
    pub fn dispatch(&self, spec: &QuerySpec) -> DispatchResult<QueryResult> {
        match (spec.attribute, spec.restriction.clone().normalize()) {
            (Attribute::Genres, Restriction::Many(genres)) => Ok(QueryResult::ExplodedRows(
                self.exploded.filter(&FilterSpec::new().genre_any_of(genres)),
            )),
            (Attribute::Genres, Restriction::Single(genre)) => Ok(QueryResult::ExplodedRows(
                self.exploded.filter(&FilterSpec::new().genre_eq(genre)),
            )),
            (Attribute::Genres, Restriction::None) => {
                Ok(QueryResult::ExplodedRows(self.exploded.clone()))
            }
            (Attribute::OriginalLanguage, Restriction::Many(langs)) => Ok(QueryResult::Rows(
                self.base.filter(&FilterSpec::new().language_in(langs)),
            )),
            (Attribute::OriginalLanguage, Restriction::Single(lang)) => Ok(QueryResult::Rows(
                self.base.filter(&FilterSpec::new().language_eq(lang)),
            )),
            (Attribute::ReleaseYear, Restriction::Many(raw_years)) => {
                let years = raw_years
                    .iter()
                    .map(|raw| coerce_year(raw))
                    .collect::<DispatchResult<Vec<i32>>>()?;
                Ok(QueryResult::Rows(
                    self.base.filter(&FilterSpec::new().year_in(years)),
                ))
            }
            (Attribute::ReleaseYear, Restriction::Single(raw_year)) => {
                let year = coerce_year(&raw_year)?;
                Ok(QueryResult::Rows(
                    self.base.filter(&FilterSpec::new().year_eq(year)),
                ))
            }
            (attribute, Restriction::None) => {
                let grouped = group_mean(
                    self.base.rows(),
                    attribute.as_str(),
                    |record| attribute.group_key(record),
                    &[spec.metric],
                )?;
                Ok(QueryResult::Grouped(grouped))
            }
        }
    }
}

/// Coerces one restriction value to an integer year
fn coerce_year(raw: &str) -> DispatchResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| DispatchError::invalid_restriction("release_year", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{explode, MovieRecord, NumericField, RowId};

    fn make_record(id: usize, lang: &str, year: i32, genres: &[&str], revenue: f64) -> MovieRecord {
        MovieRecord {
            id: RowId(id),
            title: format!("movie-{id}"),
            release_year: year,
            release_date: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            original_language: lang.to_string(),
            budget: 10.0,
            revenue,
            popularity: 1.0,
            vote_average: 5.0,
            external_link: None,
        }
    }

    fn sample_base() -> MovieTable {
        MovieTable::new(vec![
            make_record(0, "en", 1999, &["Action", "Comedy"], 100.0),
            make_record(1, "fr", 2001, &["Drama"], 50.0),
            make_record(2, "en", 1999, &["Comedy"], 80.0),
        ])
    }

    fn dispatch(spec: &QuerySpec) -> DispatchResult<QueryResult> {
        let base = sample_base();
        let exploded = explode(&base);
        QueryDispatcher::new(&base, &exploded).dispatch(spec)
    }

    #[test]
    fn test_genre_list_returns_exploded_membership() {
        let spec = QuerySpec::new(Attribute::Genres, NumericField::Revenue)
            .many(vec!["Drama".to_string(), "Comedy".to_string()]);

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::ExplodedRows(table) => {
                // Comedy rows from movies 0 and 2, Drama row from movie 1
                assert_eq!(table.len(), 3);
                assert!(table.iter().all(|r| r.genre == "Drama" || r.genre == "Comedy"));
            }
            other => panic!("expected exploded rows, got {other:?}"),
        }
    }

    #[test]
    fn test_genre_single_returns_exploded_equality() {
        let spec = QuerySpec::new(Attribute::Genres, NumericField::Revenue).single("Comedy");

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::ExplodedRows(table) => {
                assert_eq!(table.len(), 2);
                assert!(table.iter().all(|r| r.genre == "Comedy"));
            }
            other => panic!("expected exploded rows, got {other:?}"),
        }
    }

    #[test]
    fn test_genre_none_returns_full_exploded_table() {
        let spec = QuerySpec::new(Attribute::Genres, NumericField::Revenue);

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::ExplodedRows(table) => assert_eq!(table.len(), 4),
            other => panic!("expected exploded rows, got {other:?}"),
        }
    }

    #[test]
    fn test_language_single_filters_base_table() {
        let spec = QuerySpec::new(Attribute::OriginalLanguage, NumericField::Budget).single("en");

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::Rows(table) => {
                assert_eq!(table.len(), 2);
                assert!(table.iter().all(|r| r.original_language == "en"));
            }
            other => panic!("expected base rows, got {other:?}"),
        }
    }

    #[test]
    fn test_language_none_groups_by_language() {
        let spec = QuerySpec::new(Attribute::OriginalLanguage, NumericField::Budget);

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::Grouped(grouped) => {
                assert_eq!(grouped.group_by, "original_language");
                let keys: Vec<&str> = grouped.keys().collect();
                assert_eq!(keys, vec!["en", "fr"]);
            }
            other => panic!("expected grouped means, got {other:?}"),
        }
    }

    #[test]
    fn test_year_list_coerces_and_filters_base() {
        let spec = QuerySpec::new(Attribute::ReleaseYear, NumericField::Revenue)
            .many(vec!["1999".to_string(), "2010".to_string()]);

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::Rows(table) => {
                assert_eq!(table.len(), 2);
                assert!(table.iter().all(|r| r.release_year == 1999));
            }
            other => panic!("expected base rows, got {other:?}"),
        }
    }

    #[test]
    fn test_year_single_coerces_and_filters_base() {
        let spec = QuerySpec::new(Attribute::ReleaseYear, NumericField::Revenue).single(" 2001 ");

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::Rows(table) => {
                assert_eq!(table.len(), 1);
                assert_eq!(table.rows()[0].original_language, "fr");
            }
            other => panic!("expected base rows, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_year_aborts_query() {
        let spec = QuerySpec::new(Attribute::ReleaseYear, NumericField::Revenue)
            .many(vec!["1999".to_string(), "ninety-nine".to_string()]);

        let err = dispatch(&spec).unwrap_err();
        assert_eq!(
            err,
            DispatchError::invalid_restriction("release_year", "ninety-nine")
        );
    }

    #[test]
    fn test_empty_list_behaves_as_no_restriction() {
        let spec = QuerySpec::new(Attribute::Genres, NumericField::Revenue).many(Vec::new());

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::ExplodedRows(table) => assert_eq!(table.len(), 4),
            other => panic!("expected exploded rows, got {other:?}"),
        }
    }

    #[test]
    fn test_year_none_groups_by_year() {
        let spec = QuerySpec::new(Attribute::ReleaseYear, NumericField::Revenue);

        let result = dispatch(&spec).unwrap();
        match result {
            QueryResult::Grouped(grouped) => {
                let keys: Vec<&str> = grouped.keys().collect();
                assert_eq!(keys, vec!["1999", "2001"]);
                // Mean revenue for 1999: (100 + 80) / 2
                assert_eq!(grouped.get("1999").unwrap().means, vec![90.0]);
            }
            other => panic!("expected grouped means, got {other:?}"),
        }
    }

    #[test]
    fn test_grouping_empty_table_reports_empty_input() {
        let base = MovieTable::default();
        let exploded = explode(&base);
        let dispatcher = QueryDispatcher::new(&base, &exploded);

        let spec = QuerySpec::new(Attribute::OriginalLanguage, NumericField::Budget);
        assert!(matches!(
            dispatcher.dispatch(&spec),
            Err(DispatchError::Stats(_))
        ));
    }
}
