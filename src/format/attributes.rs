//! Row labels of the investigation file.
//!
//! Labels are written verbatim as the first cell of a row. The only labels
//! built at runtime are `Comment[<name>]` and merged labels
//! (`"<Attribute> <Suffix>"`).

use std::fmt;

/// Section headings, written as label-only rows opening each block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// ONTOLOGY SOURCE REFERENCE
    OntologySourceReference,
    /// INVESTIGATION
    Investigation,
    /// INVESTIGATION PUBLICATIONS
    InvestigationPublications,
    /// INVESTIGATION CONTACTS
    InvestigationContacts,
    /// STUDY
    Study,
    /// STUDY DESIGN DESCRIPTORS
    StudyDesignDescriptors,
    /// STUDY PUBLICATIONS
    StudyPublications,
    /// STUDY CONTACTS
    StudyContacts,
}

impl Section {
    /// Literal heading
    pub const fn label(self) -> &'static str {
        match self {
            Section::OntologySourceReference => "ONTOLOGY SOURCE REFERENCE",
            Section::Investigation => "INVESTIGATION",
            Section::InvestigationPublications => "INVESTIGATION PUBLICATIONS",
            Section::InvestigationContacts => "INVESTIGATION CONTACTS",
            Section::Study => "STUDY",
            Section::StudyDesignDescriptors => "STUDY DESIGN DESCRIPTORS",
            Section::StudyPublications => "STUDY PUBLICATIONS",
            Section::StudyContacts => "STUDY CONTACTS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every attribute row the writer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    // Ontology sources
    /// Term Source Name
    TermSourceName,
    /// Term Source File
    TermSourceFile,
    /// Term Source Version
    TermSourceVersion,
    /// Term Source Description
    TermSourceDescription,

    // Investigation
    /// Investigation Identifier
    InvestigationIdentifier,
    /// Investigation Title
    InvestigationTitle,
    /// Investigation Description
    InvestigationDescription,
    /// Investigation Submission Date
    InvestigationSubmissionDate,
    /// Investigation Public Release Date
    InvestigationPublicReleaseDate,

    // Investigation publications
    /// Investigation PubMed ID
    InvestigationPubMedId,
    /// Investigation Publication DOI
    InvestigationPublicationDoi,
    /// Investigation Publication Author List
    InvestigationPublicationAuthorList,
    /// Investigation Publication Title
    InvestigationPublicationTitle,
    /// Investigation Publication Status
    InvestigationPublicationStatus,

    // Investigation contacts
    /// Investigation Person Last Name
    InvestigationPersonLastName,
    /// Investigation Person First Name
    InvestigationPersonFirstName,
    /// Investigation Person Mid Initials
    InvestigationPersonMidInitials,
    /// Investigation Person Email
    InvestigationPersonEmail,
    /// Investigation Person Phone
    InvestigationPersonPhone,
    /// Investigation Person Fax
    InvestigationPersonFax,
    /// Investigation Person Address
    InvestigationPersonAddress,
    /// Investigation Person Affiliation
    InvestigationPersonAffiliation,
    /// Investigation Person Roles
    InvestigationPersonRoles,

    // Study
    /// Study Identifier
    StudyIdentifier,
    /// Study File Name
    StudyFileName,
    /// Study Title
    StudyTitle,
    /// Study Description
    StudyDescription,
    /// Study Submission Date
    StudySubmissionDate,
    /// Study Public Release Date
    StudyPublicReleaseDate,

    // Study design descriptors
    /// Study Design Type
    StudyDesignType,

    // Study publications
    /// Study PubMed ID
    StudyPubMedId,
    /// Study Publication DOI
    StudyPublicationDoi,
    /// Study Publication Author List
    StudyPublicationAuthorList,
    /// Study Publication Title
    StudyPublicationTitle,
    /// Study Publication Status
    StudyPublicationStatus,

    // Study contacts
    /// Study Person Last Name
    StudyPersonLastName,
    /// Study Person First Name
    StudyPersonFirstName,
    /// Study Person Mid Initials
    StudyPersonMidInitials,
    /// Study Person Email
    StudyPersonEmail,
    /// Study Person Phone
    StudyPersonPhone,
    /// Study Person Fax
    StudyPersonFax,
    /// Study Person Address
    StudyPersonAddress,
    /// Study Person Affiliation
    StudyPersonAffiliation,
    /// Study Person Roles
    StudyPersonRoles,
}

impl Attribute {
    /// Literal row label
    pub const fn label(self) -> &'static str {
        use Attribute::*;
        match self {
            TermSourceName => "Term Source Name",
            TermSourceFile => "Term Source File",
            TermSourceVersion => "Term Source Version",
            TermSourceDescription => "Term Source Description",

            InvestigationIdentifier => "Investigation Identifier",
            InvestigationTitle => "Investigation Title",
            InvestigationDescription => "Investigation Description",
            InvestigationSubmissionDate => "Investigation Submission Date",
            InvestigationPublicReleaseDate => "Investigation Public Release Date",

            InvestigationPubMedId => "Investigation PubMed ID",
            InvestigationPublicationDoi => "Investigation Publication DOI",
            InvestigationPublicationAuthorList => "Investigation Publication Author List",
            InvestigationPublicationTitle => "Investigation Publication Title",
            InvestigationPublicationStatus => "Investigation Publication Status",

            InvestigationPersonLastName => "Investigation Person Last Name",
            InvestigationPersonFirstName => "Investigation Person First Name",
            InvestigationPersonMidInitials => "Investigation Person Mid Initials",
            InvestigationPersonEmail => "Investigation Person Email",
            InvestigationPersonPhone => "Investigation Person Phone",
            InvestigationPersonFax => "Investigation Person Fax",
            InvestigationPersonAddress => "Investigation Person Address",
            InvestigationPersonAffiliation => "Investigation Person Affiliation",
            InvestigationPersonRoles => "Investigation Person Roles",

            StudyIdentifier => "Study Identifier",
            StudyFileName => "Study File Name",
            StudyTitle => "Study Title",
            StudyDescription => "Study Description",
            StudySubmissionDate => "Study Submission Date",
            StudyPublicReleaseDate => "Study Public Release Date",

            StudyDesignType => "Study Design Type",

            StudyPubMedId => "Study PubMed ID",
            StudyPublicationDoi => "Study Publication DOI",
            StudyPublicationAuthorList => "Study Publication Author List",
            StudyPublicationTitle => "Study Publication Title",
            StudyPublicationStatus => "Study Publication Status",

            StudyPersonLastName => "Study Person Last Name",
            StudyPersonFirstName => "Study Person First Name",
            StudyPersonMidInitials => "Study Person Mid Initials",
            StudyPersonEmail => "Study Person Email",
            StudyPersonPhone => "Study Person Phone",
            StudyPersonFax => "Study Person Fax",
            StudyPersonAddress => "Study Person Address",
            StudyPersonAffiliation => "Study Person Affiliation",
            StudyPersonRoles => "Study Person Roles",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed suffixes of merged ontology-annotation rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// Term Accession Number
    TermAccessionNumber,
    /// Term Source REF
    TermSourceRef,
}

impl Suffix {
    /// Literal suffix label
    pub const fn label(self) -> &'static str {
        match self {
            Suffix::TermAccessionNumber => "Term Accession Number",
            Suffix::TermSourceRef => "Term Source REF",
        }
    }
}

/// Label of one row of a merged (term / accession / source) attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergedLabel {
    /// Attribute the row belongs to
    pub base: Attribute,
    /// `None` for the term row itself
    pub suffix: Option<Suffix>,
}

impl MergedLabel {
    /// Term row of `base`
    pub const fn term(base: Attribute) -> Self {
        Self { base, suffix: None }
    }

    /// Accession number row of `base`
    pub const fn accession(base: Attribute) -> Self {
        Self {
            base,
            suffix: Some(Suffix::TermAccessionNumber),
        }
    }

    /// Source REF row of `base`
    pub const fn source_ref(base: Attribute) -> Self {
        Self {
            base,
            suffix: Some(Suffix::TermSourceRef),
        }
    }

    /// Rendered label
    pub fn render(&self) -> String {
        match self.suffix {
            Some(suffix) => merge_labels(self.base.label(), suffix.label()),
            None => self.base.label().to_string(),
        }
    }
}

impl fmt::Display for MergedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Join a base label and a suffix label with a single space
pub fn merge_labels(base: &str, suffix: &str) -> String {
    format!("{} {}", base, suffix)
}

/// Label of a comment row: `Comment[<name>]`
pub fn comment_label(name: &str) -> String {
    format!("Comment[{}]", name)
}
