//! Genre list parsing
//!
//! The source table stores genres as a serialized list literal, e.g.
//! `['Action', 'Comedy']` or `["Action", "Comedy"]`. Parsing produces a
//! set-like sequence: insertion order is kept, duplicates are dropped.

use super::errors::{ParseError, RecordResult};

/// Parses a serialized list literal into a duplicate-free genre sequence.
///
/// Fails if the field is not bracketed, if an item is unquoted or
/// unterminated, or if the list is empty after parsing.
pub fn parse_genre_list(raw: &str) -> RecordResult<Vec<String>> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ParseError::genres(raw))?;

    let items = parse_quoted_items(inner).ok_or_else(|| ParseError::genres(raw))?;

    let mut genres: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let genre = item.trim().to_string();
        if genre.is_empty() {
            continue;
        }
        if !genres.contains(&genre) {
            genres.push(genre);
        }
    }

    if genres.is_empty() {
        return Err(ParseError::genres(raw));
    }
    Ok(genres)
}

/// Scans a comma-separated run of quoted strings.
///
/// Accepts both single and double quotes with backslash escapes. Returns
/// None on any malformed item.
fn parse_quoted_items(inner: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace() || *c == ',') {
            chars.next();
        }

        let quote = match chars.next() {
            None => break,
            Some(c @ ('\'' | '"')) => c,
            Some(_) => return None,
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                None => return None, // unterminated
                Some('\\') => match chars.next() {
                    Some(escaped) => item.push(escaped),
                    None => return None,
                },
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
            }
        }
        items.push(item);
    }

    Some(items)
}
