//! WHERE-clause construction
//!
//! [`FilterBuilder`] collects ordered field constraints and renders them
//! into a single WQL filter clause. Wildcard handling mirrors the provider
//! convention: `*` in a wildcard-enabled value translates to the SQL `%`
//! marker, and the clause switches from `=` to `LIKE` whenever the
//! translated value contains `%`. Values are interpolated as-is; neither
//! `'` nor a literal `%` is escaped.

use serde::{Deserialize, Serialize};

/// A single field constraint: field name, comparison value, and whether
/// glob wildcards are honored in the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Field name, interpolated verbatim into the clause
    pub field: String,

    /// Comparison value; a blank value drops the constraint entirely
    pub value: String,

    /// When set, `*` is translated to `%` and `LIKE` is used for values
    /// that contain `%` after translation
    #[serde(default)]
    pub wildcard: bool,
}

impl Constraint {
    /// Exact-match constraint
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            wildcard: false,
        }
    }

    /// Wildcard-enabled constraint
    pub fn like(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            wildcard: true,
        }
    }

    /// Render the constraint as a WQL comparison, or `None` when the value
    /// is empty or whitespace-only (omission, not an empty comparison, is
    /// the absence policy).
    fn render(&self) -> Option<String> {
        if self.value.trim().is_empty() {
            return None;
        }

        if self.wildcard {
            let value = self.value.replace('*', "%");
            if value.contains('%') {
                return Some(format!("{} LIKE '{}'", self.field, value));
            }
            return Some(format!("{}='{}'", self.field, value));
        }

        Some(format!("{}='{}'", self.field, self.value))
    }
}

/// Ordered accumulator of field constraints.
///
/// Surviving clauses join with ` AND ` in insertion order; a builder whose
/// constraints are all blank renders the empty string. The builder is a
/// pure function of its inputs: identical constraint sequences always
/// render identical strings.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    constraints: Vec<Constraint>,
}

impl FilterBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exact-match constraint
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.constraints.push(Constraint::eq(field, value));
        self
    }

    /// Append a wildcard-enabled constraint
    pub fn like(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.constraints.push(Constraint::like(field, value));
        self
    }

    /// Append a pre-built constraint
    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Render the filter clause
    pub fn build(&self) -> String {
        self.constraints
            .iter()
            .filter_map(Constraint::render)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
