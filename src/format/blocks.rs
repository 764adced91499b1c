//! Block composition.
//!
//! An investigation file is a fixed sequence of blocks, each opened by a
//! section heading:
//!
//! 1. `ONTOLOGY SOURCE REFERENCE`
//! 2. `INVESTIGATION`
//! 3. `INVESTIGATION PUBLICATIONS`
//! 4. `INVESTIGATION CONTACTS`
//! 5. per study: `STUDY`, `STUDY DESIGN DESCRIPTORS`, `STUDY PUBLICATIONS`,
//!    `STUDY CONTACTS`
//!
//! Every block is emitted even when its list is empty; absent values become
//! empty cells and never fail composition.

use chrono::NaiveDate;
use log::debug;

use crate::controlled_vocabulary::OntologyAnnotation;
use crate::model::{Author, Commentable, Investigation, Person, Publication, Study};

use super::attributes::{Attribute, MergedLabel, Section};
use super::comments::{simple_comment_rows, CommentPivot};
use super::row::{format_heading, format_row, format_scalar, join_values};

/// Date format of submission and release dates (ISO 8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between authors in the author list cell
pub const AUTHOR_SEPARATOR: &str = "; ";

/// A rendered block: its heading row followed by its attribute rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    section: Section,
    text: String,
    rows: usize,
}

impl Block {
    fn new(section: Section) -> Self {
        let mut block = Self {
            section,
            text: String::new(),
            rows: 0,
        };
        block.push(format_heading(section));
        block
    }

    fn push(&mut self, row: String) {
        self.text.push_str(&row);
        self.rows += 1;
    }

    fn extend(&mut self, rows: Vec<String>) {
        for row in rows {
            self.push(row);
        }
    }

    /// Section this block belongs to
    pub fn section(&self) -> Section {
        self.section
    }

    /// Rendered text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of rows, heading included
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Take the rendered text
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Labels of a publication block, per scope
struct PublicationColumns {
    section: Section,
    pubmed_id: Attribute,
    doi: Attribute,
    author_list: Attribute,
    title: Attribute,
    status: Attribute,
}

const INVESTIGATION_PUBLICATIONS: PublicationColumns = PublicationColumns {
    section: Section::InvestigationPublications,
    pubmed_id: Attribute::InvestigationPubMedId,
    doi: Attribute::InvestigationPublicationDoi,
    author_list: Attribute::InvestigationPublicationAuthorList,
    title: Attribute::InvestigationPublicationTitle,
    status: Attribute::InvestigationPublicationStatus,
};

const STUDY_PUBLICATIONS: PublicationColumns = PublicationColumns {
    section: Section::StudyPublications,
    pubmed_id: Attribute::StudyPubMedId,
    doi: Attribute::StudyPublicationDoi,
    author_list: Attribute::StudyPublicationAuthorList,
    title: Attribute::StudyPublicationTitle,
    status: Attribute::StudyPublicationStatus,
};

/// Labels of a contact block, per scope
struct ContactColumns {
    section: Section,
    last_name: Attribute,
    first_name: Attribute,
    mid_initials: Attribute,
    email: Attribute,
    phone: Attribute,
    fax: Attribute,
    address: Attribute,
    affiliation: Attribute,
    roles: Attribute,
}

const INVESTIGATION_CONTACTS: ContactColumns = ContactColumns {
    section: Section::InvestigationContacts,
    last_name: Attribute::InvestigationPersonLastName,
    first_name: Attribute::InvestigationPersonFirstName,
    mid_initials: Attribute::InvestigationPersonMidInitials,
    email: Attribute::InvestigationPersonEmail,
    phone: Attribute::InvestigationPersonPhone,
    fax: Attribute::InvestigationPersonFax,
    address: Attribute::InvestigationPersonAddress,
    affiliation: Attribute::InvestigationPersonAffiliation,
    roles: Attribute::InvestigationPersonRoles,
};

const STUDY_CONTACTS: ContactColumns = ContactColumns {
    section: Section::StudyContacts,
    last_name: Attribute::StudyPersonLastName,
    first_name: Attribute::StudyPersonFirstName,
    mid_initials: Attribute::StudyPersonMidInitials,
    email: Attribute::StudyPersonEmail,
    phone: Attribute::StudyPersonPhone,
    fax: Attribute::StudyPersonFax,
    address: Attribute::StudyPersonAddress,
    affiliation: Attribute::StudyPersonAffiliation,
    roles: Attribute::StudyPersonRoles,
};

/// Builds the blocks of one investigation
///
/// Holds a shared borrow for the whole pass, so the model cannot change
/// while blocks are being composed.
#[derive(Debug, Clone, Copy)]
pub struct BlockComposer<'a> {
    investigation: &'a Investigation,
}

impl<'a> BlockComposer<'a> {
    /// Create a composer over `investigation`
    pub fn new(investigation: &'a Investigation) -> Self {
        Self { investigation }
    }

    /// All blocks in file order
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = vec![
            self.ontology_sources(),
            self.investigation_header(),
            self.investigation_publications(),
            self.investigation_contacts(),
        ];
        for study in self.investigation.studies() {
            blocks.extend(study_blocks(study));
        }
        blocks
    }

    /// `ONTOLOGY SOURCE REFERENCE`: one column per ontology
    pub fn ontology_sources(&self) -> Block {
        let ontologies = self.investigation.ontologies();
        let mut block = Block::new(Section::OntologySourceReference);
        block.push(format_row(Attribute::TermSourceName.label(), ontologies, |o| {
            Some(o.name.as_str())
        }));
        block.push(format_row(Attribute::TermSourceFile.label(), ontologies, |o| {
            o.url.as_deref()
        }));
        block.push(format_row(Attribute::TermSourceVersion.label(), ontologies, |o| {
            o.version.as_deref()
        }));
        block.push(format_row(
            Attribute::TermSourceDescription.label(),
            ontologies,
            |o| o.description.as_deref(),
        ));
        finish(block)
    }

    /// `INVESTIGATION`: header scalars and the investigation's own comments
    pub fn investigation_header(&self) -> Block {
        let investigation = self.investigation;
        let mut block = Block::new(Section::Investigation);
        block.push(format_scalar(
            Attribute::InvestigationIdentifier.label(),
            Some(investigation.identifier()),
        ));
        block.push(format_scalar(
            Attribute::InvestigationTitle.label(),
            investigation.title(),
        ));
        block.push(format_scalar(
            Attribute::InvestigationDescription.label(),
            investigation.description(),
        ));
        block.push(format_scalar(
            Attribute::InvestigationSubmissionDate.label(),
            format_date(investigation.submission_date()).as_deref(),
        ));
        block.push(format_scalar(
            Attribute::InvestigationPublicReleaseDate.label(),
            format_date(investigation.public_release_date()).as_deref(),
        ));
        block.extend(simple_comment_rows(investigation.comments()));
        finish(block)
    }

    /// `INVESTIGATION PUBLICATIONS`
    pub fn investigation_publications(&self) -> Block {
        publications_block(&INVESTIGATION_PUBLICATIONS, self.investigation.publications())
    }

    /// `INVESTIGATION CONTACTS`
    pub fn investigation_contacts(&self) -> Block {
        contacts_block(&INVESTIGATION_CONTACTS, self.investigation.contacts())
    }
}

/// The four blocks of one study, in file order
pub fn study_blocks(study: &Study) -> [Block; 4] {
    [
        study_header(study),
        study_design_descriptors(study),
        publications_block(&STUDY_PUBLICATIONS, study.publications()),
        contacts_block(&STUDY_CONTACTS, study.contacts()),
    ]
}

/// `STUDY`: header scalars and the study's own comments
pub fn study_header(study: &Study) -> Block {
    let mut block = Block::new(Section::Study);
    block.push(format_scalar(
        Attribute::StudyIdentifier.label(),
        Some(study.identifier()),
    ));
    block.push(format_scalar(
        Attribute::StudyFileName.label(),
        Some(study.file_name()),
    ));
    block.push(format_scalar(Attribute::StudyTitle.label(), study.title()));
    block.push(format_scalar(
        Attribute::StudyDescription.label(),
        study.description(),
    ));
    block.push(format_scalar(
        Attribute::StudySubmissionDate.label(),
        format_date(study.submission_date()).as_deref(),
    ));
    block.push(format_scalar(
        Attribute::StudyPublicReleaseDate.label(),
        format_date(study.public_release_date()).as_deref(),
    ));
    block.extend(simple_comment_rows(study.comments()));
    finish(block)
}

/// `STUDY DESIGN DESCRIPTORS`: merged term rows and pivoted comments
pub fn study_design_descriptors(study: &Study) -> Block {
    let descriptors = study.design_descriptors();
    let mut block = Block::new(Section::StudyDesignDescriptors);
    push_annotation_rows(&mut block, Attribute::StudyDesignType, descriptors, Some);
    block.extend(CommentPivot::new(descriptors).rows());
    finish(block)
}

fn publications_block(columns: &PublicationColumns, publications: &[Publication]) -> Block {
    let mut block = Block::new(columns.section);
    block.push(format_row(columns.pubmed_id.label(), publications, |p| {
        p.pubmed_id.as_deref()
    }));
    block.push(format_row(columns.doi.label(), publications, |p| {
        p.doi.as_deref()
    }));
    block.push(format_row(columns.author_list.label(), publications, |p| {
        Some(format_author_list(&p.authors))
    }));
    block.push(format_row(columns.title.label(), publications, |p| {
        p.title.as_deref()
    }));
    push_annotation_rows(&mut block, columns.status, publications, |p| {
        p.status.as_ref()
    });
    block.extend(CommentPivot::new(publications).rows());
    finish(block)
}

fn contacts_block(columns: &ContactColumns, contacts: &[Person]) -> Block {
    let mut block = Block::new(columns.section);
    block.push(format_row(columns.last_name.label(), contacts, |p| {
        p.last_name.as_deref()
    }));
    block.push(format_row(columns.first_name.label(), contacts, |p| {
        p.first_name.as_deref()
    }));
    block.push(format_row(columns.mid_initials.label(), contacts, |p| {
        p.mid_initials.as_deref()
    }));
    block.push(format_row(columns.email.label(), contacts, |p| {
        p.email.as_deref()
    }));
    block.push(format_row(columns.phone.label(), contacts, |p| {
        p.phone.as_deref()
    }));
    block.push(format_row(columns.fax.label(), contacts, |p| p.fax.as_deref()));
    block.push(format_row(columns.address.label(), contacts, |p| {
        p.address.as_deref()
    }));
    block.push(format_row(columns.affiliation.label(), contacts, |p| {
        p.affiliation.as_deref()
    }));

    // Roles are multi-valued: one `;`-separated entry per role in every
    // merged row, empty where a role lacks accession or source.
    let roles = columns.roles;
    block.push(format_row(&MergedLabel::term(roles).render(), contacts, |p| {
        Some(join_values(p.roles.iter().map(|r| r.term.as_str())))
    }));
    block.push(format_row(&MergedLabel::accession(roles).render(), contacts, |p| {
        Some(join_values(
            p.roles.iter().map(|r| r.term_accession.as_deref().unwrap_or("")),
        ))
    }));
    block.push(format_row(&MergedLabel::source_ref(roles).render(), contacts, |p| {
        Some(join_values(
            p.roles.iter().map(|r| r.source_name().unwrap_or("")),
        ))
    }));

    block.extend(CommentPivot::new(contacts).rows());
    finish(block)
}

/// Push the term, accession and source REF rows of an annotated attribute
fn push_annotation_rows<'a, T, F>(block: &mut Block, base: Attribute, items: &'a [T], annotation: F)
where
    F: Fn(&'a T) -> Option<&'a OntologyAnnotation>,
{
    block.push(format_row(&MergedLabel::term(base).render(), items, |item| {
        annotation(item).map(|a| a.term.as_str())
    }));
    block.push(format_row(&MergedLabel::accession(base).render(), items, |item| {
        annotation(item).and_then(|a| a.term_accession.as_deref())
    }));
    block.push(format_row(&MergedLabel::source_ref(base).render(), items, |item| {
        annotation(item).and_then(|a| a.source_name())
    }));
}

fn finish(block: Block) -> Block {
    debug!("Composed {} block ({} rows)", block.section(), block.row_count());
    block
}

/// Author list cell: `"Last, F"` per author joined by `"; "`
pub fn format_author_list(authors: &[Author]) -> String {
    authors
        .iter()
        .map(Author::citation_name)
        .collect::<Vec<_>>()
        .join(AUTHOR_SEPARATOR)
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}
