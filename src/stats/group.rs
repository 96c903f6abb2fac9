//! Grouped means
//!
//! Groups rows by a key and computes the mean of one or more value fields
//! per group, in first-seen key order.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::{NumericField, RecordFields};

use super::errors::{StatsError, StatsResult};

/// One group: its key and the mean of each value field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeanRow {
    /// Group key
    pub key: String,
    /// Means, one per requested value field, in request order
    pub means: Vec<f64>,
}

/// Grouped means over a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedMeans {
    /// Attribute the rows were grouped by
    pub group_by: String,
    /// Value fields, in request order
    pub value_fields: Vec<NumericField>,
    /// Groups in first-seen order
    pub groups: Vec<GroupMeanRow>,
}

impl GroupedMeans {
    /// Returns the number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.key.as_str())
    }

    /// Looks up a group by key
    pub fn get(&self, key: &str) -> Option<&GroupMeanRow> {
        self.groups.iter().find(|group| group.key == key)
    }
}

/// Groups `rows` by `key_fn` and computes per-group means.
///
/// Group order is the order keys are first seen in the input. Fails with
/// `StatsError::EmptyInput` on a zero-row table; otherwise it never fails.
pub fn group_mean<R, K>(
    rows: &[R],
    group_by: &str,
    key_fn: K,
    value_fields: &[NumericField],
) -> StatsResult<GroupedMeans>
where
    R: RecordFields,
    K: Fn(&R) -> String,
{
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (usize, Vec<f64>)> = HashMap::new();

    for row in rows {
        let key = key_fn(row);
        let entry = sums.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (0, vec![0.0; value_fields.len()])
        });
        entry.0 += 1;
        for (i, field) in value_fields.iter().enumerate() {
            entry.1[i] += row.numeric(*field);
        }
    }

    let groups = order
        .into_iter()
        .map(|key| {
            let (count, totals) = &sums[&key];
            let means = totals.iter().map(|total| total / *count as f64).collect();
            GroupMeanRow { key, means }
        })
        .collect();

    Ok(GroupedMeans {
        group_by: group_by.to_string(),
        value_fields: value_fields.to_vec(),
        groups,
    })
}
