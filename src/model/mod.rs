//! # Investigation Metadata Model
//!
//! Typed, hierarchical model of the experiment metadata written to an ISA-Tab
//! investigation file.
//!
//! ## Structure
//!
//! ```text
//! Investigation
//! ├── ontologies      (term sources referenced by annotations)
//! ├── publications
//! ├── contacts
//! ├── comments
//! └── studies
//!     ├── design descriptors
//!     ├── publications
//!     ├── contacts
//!     └── comments
//! ```
//!
//! Every list keeps insertion order: the i-th item always ends up in the i-th
//! value column of its block. [`Investigation`] and [`Study`] only hand out
//! read-only slices; lists grow through the `add_*` operations, and
//! [`Investigation::add_study`] refuses duplicate study identifiers and file
//! names.

mod comment;
mod error;
mod investigation;
mod ontology;
mod person;
mod publication;
mod study;


pub use crate::controlled_vocabulary::OntologyAnnotation;
pub use comment::{Comment, Commentable};
pub use error::ModelError;
pub use investigation::Investigation;
pub use ontology::Ontology;
pub use person::Person;
pub use publication::{Author, Publication};
pub use study::Study;
