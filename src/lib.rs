//! # isatab - ISA-Tab Investigation File Writer
//!
//! `isatab` builds a typed model of experiment metadata (an investigation with
//! ontology sources, publications, contacts and studies) and writes it as an
//! ISA-Tab investigation file (`i_investigation.txt`).
//!
//! ## Key Features
//!
//! - **Order-Preserving Output**: value column *i* of every row is the *i*-th
//!   item of the block's list, exactly as inserted.
//!
//! - **Fixed Block Shape**: every block and every row is written even when its
//!   list is empty or values are missing; absent values are empty cells.
//!
//! - **Merged Annotation Columns**: ontology-annotated attributes are written
//!   as term, `Term Accession Number` and `Term Source REF` rows.
//!
//! - **Comment Pivoting**: free-form `Comment[...]` types are discovered from
//!   the data and aligned across contacts, publications and design
//!   descriptors.
//!
//! - **Safe Writes**: files are staged and moved into place only after a
//!   complete flush; I/O failures are always reported.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use isatab::controlled_vocabulary::credit_roles;
//! use isatab::format::{write_investigation_file, WriterConfig};
//! use isatab::model::{Comment, Investigation, Person, Study};
//!
//! let mut investigation = Investigation::new("I1");
//! investigation.set_title("Drought Stress Response in Arabidopsis thaliana");
//!
//! let credit = investigation.add_ontology(credit_roles::ontology());
//!
//! let mut person = Person::new("Junker", "Astrid");
//! person.add_role(credit_roles::project_administration(&credit));
//! person.add_comment(Comment::new("Person ID", "https://orcid.org/0000-0002-4656-0308"));
//! investigation.add_contact(person);
//!
//! investigation.add_study(Study::new("1745AJ", "s_study.txt"))?;
//!
//! let stats = write_investigation_file(
//!     "i_investigation.txt",
//!     &investigation,
//!     &WriterConfig::default(),
//! )?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`]: investigation, study, contact, publication and comment types
//! - [`controlled_vocabulary`]: ontology annotations and common terms
//! - [`format`]: labels, rows, comment pivoting, blocks and the file writer

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod controlled_vocabulary;
pub mod format;
pub mod model;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::controlled_vocabulary::{credit_roles, publication_status, OntologyAnnotation};
    pub use crate::format::{
        to_isatab_string, write_investigation_file, BlockComposer, InvestigationWriter,
        WriterConfig, WriterError, WriterStats,
    };
    pub use crate::model::{
        Author, Comment, Commentable, Investigation, ModelError, Ontology, Person, Publication,
        Study,
    };
}
