//! # Investigation File Writer
//!
//! Serializes an [`Investigation`](crate::model::Investigation) into the
//! ISA-Tab investigation file format.
//!
//! ## Layers
//!
//! 1. [`attributes`]: literal row labels, merged labels and `Comment[...]`
//! 2. [`row`]: one row per attribute, one tab-separated cell per entity
//! 3. [`comments`]: discovery and pivoting of free-form comment types
//! 4. [`blocks`]: the fixed block sequence of the file
//! 5. [`InvestigationWriter`]: streams the blocks into a sink
//!
//! ## Output
//!
//! ```text
//! ONTOLOGY SOURCE REFERENCE
//! Term Source Name	CRediT	AGRO
//! ...
//! INVESTIGATION
//! Investigation Identifier	I1
//! ...
//! ```
//!
//! Cells are separated by `\t`, rows end with `\n` on every platform and the
//! text is UTF-8.

pub mod attributes;
pub mod blocks;
pub mod comments;
mod config;
mod error;
pub mod row;
mod stats;
mod writer_impl;


pub use attributes::{comment_label, merge_labels, Attribute, MergedLabel, Section, Suffix};
pub use blocks::{Block, BlockComposer};
pub use comments::{format_comment_pivot, format_simple_comments, CommentPivot};
pub use config::WriterConfig;
pub use error::WriterError;
pub use row::{format_row, format_scalar, quote_cell};
pub use stats::WriterStats;
pub use writer_impl::{to_isatab_string, write_investigation_file, InvestigationWriter, ENCODING};
