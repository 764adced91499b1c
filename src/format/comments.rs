//! Comment rows.
//!
//! Comment type names are open-ended, so the rows of a block are discovered
//! from the data: one `Comment[<name>]` row per distinct name, in the order
//! names are first seen when scanning the entities (and each entity's own
//! comments) left to right. Cells stay aligned with the block's entity
//! order; several values of one name on the same entity share a cell,
//! joined by `;`.

use std::collections::HashSet;

use crate::model::{Comment, Commentable};

use super::attributes::comment_label;
use super::row::{format_scalar, join_values, push_cell, COLUMN_SEPARATOR, LINE_TERMINATOR};

/// Comments of a list of entities, pivoted into one row per type name
#[derive(Debug, Clone)]
pub struct CommentPivot<'a> {
    types: Vec<&'a str>,
    buckets: Vec<&'a [Comment]>,
}

impl<'a> CommentPivot<'a> {
    /// Scan `entities` and collect type names in first-seen order
    pub fn new<C: Commentable>(entities: &'a [C]) -> Self {
        let buckets: Vec<&'a [Comment]> = entities.iter().map(|e| e.comments()).collect();

        let mut seen = HashSet::new();
        let mut types = Vec::new();
        for comment in entities.iter().flat_map(|e| e.comments()) {
            if seen.insert(comment.name.as_str()) {
                types.push(comment.name.as_str());
            }
        }

        Self { types, buckets }
    }

    /// Distinct type names in discovery order
    pub fn types(&self) -> &[&'a str] {
        &self.types
    }

    /// Number of entities (value cells per row)
    pub fn width(&self) -> usize {
        self.buckets.len()
    }

    /// True when no entity has any comment
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Cells of the row for `name`, one per entity
    pub fn cells(&self, name: &str) -> Vec<String> {
        self.buckets
            .iter()
            .map(|bucket| {
                join_values(
                    bucket
                        .iter()
                        .filter(|c| c.name == name)
                        .map(|c| c.value.as_str()),
                )
            })
            .collect()
    }

    /// Render one row per type name
    pub fn rows(&self) -> Vec<String> {
        self.types
            .iter()
            .map(|name| {
                let mut row = String::new();
                push_cell(&mut row, &comment_label(name));
                for cell in self.cells(name) {
                    row.push(COLUMN_SEPARATOR);
                    push_cell(&mut row, &cell);
                }
                row.push(LINE_TERMINATOR);
                row
            })
            .collect()
    }
}

/// Pivot the comments of `entities` and render the rows
///
/// Yields nothing when none of the entities has a comment.
pub fn format_comment_pivot<C: Commentable>(entities: &[C]) -> String {
    CommentPivot::new(entities).rows().concat()
}

/// Rows for the comments of a single entity, one row per comment in order
pub fn simple_comment_rows(comments: &[Comment]) -> Vec<String> {
    comments
        .iter()
        .map(|c| format_scalar(&comment_label(&c.name), Some(&c.value)))
        .collect()
}

/// Render comments of a single entity without any alignment
pub fn format_simple_comments(comments: &[Comment]) -> String {
    simple_comment_rows(comments).concat()
}
