//! Filter predicates
//!
//! A `FilterSpec` is a conjunction of predicates (AND semantics). Each
//! predicate is total over both table shapes via `RecordFields`.
//!
//! Semantics:
//! - Empty search text, empty categorical restriction and empty membership
//!   sets are no-ops, never errors
//! - Range bounds are inclusive; an unset bound imposes no constraint;
//!   `from > to` matches nothing (empty result, not an error)
//! - Genre membership is any-of (OR), never all-of

use crate::record::{NumericField, RecordFields};

/// A single filter predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match on the title
    TitleContains(String),
    /// Inclusive numeric range on a named field
    Range {
        /// Field the bounds apply to
        field: NumericField,
        /// Lower bound, inclusive; None imposes no constraint
        from: Option<f64>,
        /// Upper bound, inclusive; None imposes no constraint
        to: Option<f64>,
    },
    /// Exact match on the original language
    LanguageEq(String),
    /// Membership in a set of languages
    LanguageIn(Vec<String>),
    /// Exact match against the row's genre set
    GenreEq(String),
    /// Any-of membership against the row's genre set
    GenreAnyOf(Vec<String>),
    /// Exact match on the release year
    YearEq(i32),
    /// Membership in a set of release years
    YearIn(Vec<i32>),
}

impl Predicate {
    /// Evaluates this predicate against one row
    pub fn matches<R: RecordFields>(&self, row: &R) -> bool {
        match self {
            Predicate::TitleContains(text) => {
                text.is_empty()
                    || row
                        .title()
                        .to_lowercase()
                        .contains(&text.to_lowercase())
            }
            Predicate::Range { field, from, to } => {
                let value = row.numeric(*field);
                from.map_or(true, |lo| value >= lo) && to.map_or(true, |hi| value <= hi)
            }
            Predicate::LanguageEq(lang) => lang.is_empty() || row.original_language() == lang,
            Predicate::LanguageIn(langs) => {
                langs.is_empty() || langs.iter().any(|lang| row.original_language() == lang)
            }
            Predicate::GenreEq(genre) => genre.is_empty() || row.has_genre(genre),
            Predicate::GenreAnyOf(genres) => {
                genres.is_empty() || genres.iter().any(|genre| row.has_genre(genre))
            }
            Predicate::YearEq(year) => row.release_year() == *year,
            Predicate::YearIn(years) => years.is_empty() || years.contains(&row.release_year()),
        }
    }
}

/// Conjunction of zero or more predicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    predicates: Vec<Predicate>,
}

impl FilterSpec {
    /// Creates an empty spec that matches every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds a case-insensitive title search
    pub fn title_contains(self, text: impl Into<String>) -> Self {
        self.with(Predicate::TitleContains(text.into()))
    }

    /// Adds an inclusive numeric range
    pub fn range(self, field: NumericField, from: Option<f64>, to: Option<f64>) -> Self {
        self.with(Predicate::Range { field, from, to })
    }

    /// Adds a language equality match
    pub fn language_eq(self, lang: impl Into<String>) -> Self {
        self.with(Predicate::LanguageEq(lang.into()))
    }

    /// Adds a language membership match
    pub fn language_in(self, langs: Vec<String>) -> Self {
        self.with(Predicate::LanguageIn(langs))
    }

    /// Adds a genre equality match
    pub fn genre_eq(self, genre: impl Into<String>) -> Self {
        self.with(Predicate::GenreEq(genre.into()))
    }

    /// Adds an any-of genre membership match
    pub fn genre_any_of(self, genres: Vec<String>) -> Self {
        self.with(Predicate::GenreAnyOf(genres))
    }

    /// Adds a release-year equality match
    pub fn year_eq(self, year: i32) -> Self {
        self.with(Predicate::YearEq(year))
    }

    /// Adds a release-year membership match
    pub fn year_in(self, years: Vec<i32>) -> Self {
        self.with(Predicate::YearIn(years))
    }

    /// Returns the predicates
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns true if the spec has no predicates
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluates the whole conjunction against one row
    pub fn matches<R: RecordFields>(&self, row: &R) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(row))
    }
}
