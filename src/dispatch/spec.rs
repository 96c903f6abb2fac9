//! Query specification types
//!
//! A query is an (attribute, restriction, metric) triple. The attribute
//! carries its kind and the restriction its shape; together they select
//! the dispatch branch. The tagged `Restriction` variant replaces the
//! type-sniffing the per-call-site branching used to do.

use crate::record::{MovieRecord, NumericField};

/// Queryable attributes, each with a fixed kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Multi-valued categorical: a movie carries several genres
    Genres,
    /// Single-valued categorical
    OriginalLanguage,
    /// Temporal/numeric
    ReleaseYear,
}

impl Attribute {
    /// Returns the source column name
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Genres => "genres",
            Attribute::OriginalLanguage => "original_language",
            Attribute::ReleaseYear => "release_year",
        }
    }

    /// Returns the attribute kind driving dispatch
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Genres => AttributeKind::MultiCategorical,
            Attribute::OriginalLanguage => AttributeKind::SingleCategorical,
            Attribute::ReleaseYear => AttributeKind::Numeric,
        }
    }

    /// Grouping key of a base-table row for this attribute.
    ///
    /// Multi-valued attributes key on the whole stored sequence; per-genre
    /// grouping goes through the exploded view instead.
    pub fn group_key(&self, record: &MovieRecord) -> String {
        match self {
            Attribute::Genres => record.genres.join("|"),
            Attribute::OriginalLanguage => record.original_language.clone(),
            Attribute::ReleaseYear => record.release_year.to_string(),
        }
    }
}

/// Attribute kinds recognized by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Categorical with several values per record
    MultiCategorical,
    /// Categorical with one value per record
    SingleCategorical,
    /// Numeric or temporal
    Numeric,
}

/// Shape of the value(s) narrowing a query to part of an attribute's domain
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Restriction {
    /// No narrowing
    #[default]
    None,
    /// A single value
    Single(String),
    /// A list of values
    Many(Vec<String>),
}

impl Restriction {
    /// Collapses degenerate shapes: an empty list narrows nothing and
    /// behaves exactly like no restriction
    pub fn normalize(self) -> Restriction {
        match self {
            Restriction::Many(values) if values.is_empty() => Restriction::None,
            other => other,
        }
    }

    /// Returns true if no narrowing applies
    pub fn is_none(&self) -> bool {
        matches!(self, Restriction::None)
    }
}

/// One query: attribute, restriction and target metric
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Attribute the query is keyed on
    pub attribute: Attribute,
    /// Optional narrowing of the attribute's domain
    pub restriction: Restriction,
    /// Metric the caller wants plotted or aggregated
    pub metric: NumericField,
}

impl QuerySpec {
    /// Creates an unrestricted query
    pub fn new(attribute: Attribute, metric: NumericField) -> Self {
        Self {
            attribute,
            restriction: Restriction::None,
            metric,
        }
    }

    /// Sets a single-value restriction
    pub fn single(mut self, value: impl Into<String>) -> Self {
        self.restriction = Restriction::Single(value.into());
        self
    }

    /// Sets a list restriction
    pub fn many(mut self, values: Vec<String>) -> Self {
        self.restriction = Restriction::Many(values);
        self
    }
}
