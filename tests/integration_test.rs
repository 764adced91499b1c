//! Integration tests for isatab
//!
//! These tests write investigation files to disk and re-read them as TSV.

use isatab::controlled_vocabulary::{credit_roles, OntologyAnnotation};
use isatab::format::{
    to_isatab_string, write_investigation_file, InvestigationWriter, WriterConfig, WriterError,
};
use isatab::model::{Author, Comment, Investigation, ModelError, Ontology, Person, Publication, Study};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Read a written investigation file back as rows of cells
fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .has_headers(false)
        .quoting(false)
        .from_path(path)
        .unwrap();

    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn sample_investigation() -> Investigation {
    let mut investigation = Investigation::new("I1");
    investigation.set_title("T");
    let credit = investigation.add_ontology(credit_roles::ontology());

    let mut a = Person::new("Doe", "Jane");
    a.add_role(credit_roles::data_curation(&credit));
    a.add_comment(Comment::new("Modified", "2020"));
    let mut b = Person::new("Smith", "Bob");
    b.add_comment(Comment::new("Modified", "2021"));
    b.add_comment(Comment::new("Source", "x"));
    investigation.add_contact(a);
    investigation.add_contact(b);

    let mut publication = Publication::new("Paper").with_status(
        OntologyAnnotation::new("published").with_source(&credit),
    );
    publication.add_author(Author::new("Doe", "Jane"));
    publication.add_author(Author::new("Smith", "Bob"));
    investigation.add_publication(publication);

    let mut study = Study::new("S1", "f.txt");
    study.add_design_descriptor(OntologyAnnotation::new("Factorial").with_accession("A1"));
    study.add_publication(Publication::new("Study paper"));
    investigation.add_study(study).unwrap();
    investigation
}

/// Test the complete end-to-end layout of a minimal investigation
#[test]
fn test_end_to_end_minimal_investigation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("i_investigation.txt");

    let mut investigation = Investigation::new("I1");
    investigation.set_title("T");
    investigation.add_ontology(Ontology::new("AGRO", "http://purl.obolibrary.org/obo/agro.owl"));
    investigation.add_study(Study::new("S1", "f.txt")).unwrap();

    let stats = write_investigation_file(&path, &investigation, &WriterConfig::default()).unwrap();
    assert_eq!(stats.blocks_written, 8);
    assert_eq!(stats.studies_written, 1);

    let text = fs::read_to_string(&path).unwrap();
    let expected = "\
ONTOLOGY SOURCE REFERENCE
Term Source Name\tAGRO
Term Source File\thttp://purl.obolibrary.org/obo/agro.owl
Term Source Version\t
Term Source Description\t
INVESTIGATION
Investigation Identifier\tI1
Investigation Title\tT
Investigation Description\t
Investigation Submission Date\t
Investigation Public Release Date\t
INVESTIGATION PUBLICATIONS
Investigation PubMed ID
Investigation Publication DOI
Investigation Publication Author List
Investigation Publication Title
Investigation Publication Status
Investigation Publication Status Term Accession Number
Investigation Publication Status Term Source REF
INVESTIGATION CONTACTS
Investigation Person Last Name
Investigation Person First Name
Investigation Person Mid Initials
Investigation Person Email
Investigation Person Phone
Investigation Person Fax
Investigation Person Address
Investigation Person Affiliation
Investigation Person Roles
Investigation Person Roles Term Accession Number
Investigation Person Roles Term Source REF
STUDY
Study Identifier\tS1
Study File Name\tf.txt
Study Title\t
Study Description\t
Study Submission Date\t
Study Public Release Date\t
STUDY DESIGN DESCRIPTORS
Study Design Type
Study Design Type Term Accession Number
Study Design Type Term Source REF
STUDY PUBLICATIONS
Study PubMed ID
Study Publication DOI
Study Publication Author List
Study Publication Title
Study Publication Status
Study Publication Status Term Accession Number
Study Publication Status Term Source REF
STUDY CONTACTS
Study Person Last Name
Study Person First Name
Study Person Mid Initials
Study Person Email
Study Person Phone
Study Person Fax
Study Person Address
Study Person Affiliation
Study Person Roles
Study Person Roles Term Accession Number
Study Person Roles Term Source REF
";
    assert_eq!(text, expected);
    assert_eq!(stats.rows_written, expected.lines().count());
    assert!(!text.contains('\r'));
}

/// Every row of a block has exactly one cell per entity of that block
#[test]
fn test_rows_have_block_width() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("i_investigation.txt");
    let investigation = sample_investigation();

    write_investigation_file(&path, &investigation, &WriterConfig::default()).unwrap();
    let rows = read_rows(&path);

    let width_of = |label: &str| -> usize {
        rows.iter()
            .find(|r| r[0] == label)
            .map(|r| r.len() - 1)
            .unwrap_or_else(|| panic!("missing row {}", label))
    };

    for row in &rows {
        let label = row[0].as_str();
        let cells = row.len() - 1;
        if label.starts_with("Investigation Person") {
            assert_eq!(cells, 2, "{}", label);
        } else if label.starts_with("Investigation Pub") {
            assert_eq!(cells, 1, "{}", label);
        } else if label.starts_with("Term Source") {
            assert_eq!(cells, 1, "{}", label);
        } else if label.starts_with("Study Design Type") || label.starts_with("Study Pub") {
            assert_eq!(cells, 1, "{}", label);
        } else if label.starts_with("Study Person") {
            assert_eq!(cells, 0, "{}", label);
        }
        assert!(row.iter().all(|c| c != "null"));
    }

    assert_eq!(width_of("Comment[Modified]"), 2);
    assert_eq!(width_of("Comment[Source]"), 2);
}

#[test]
fn test_written_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("i_investigation.txt");
    write_investigation_file(&path, &sample_investigation(), &WriterConfig::direct()).unwrap();

    let rows = read_rows(&path);
    let cells = |label: &str| -> Vec<String> {
        rows.iter()
            .find(|r| r[0] == label)
            .map(|r| r[1..].to_vec())
            .unwrap_or_default()
    };

    assert_eq!(cells("Investigation Publication Author List"), ["Doe, J; Smith, B"]);
    assert_eq!(cells("Investigation Publication Status Term Source REF"), ["CRediT"]);
    assert_eq!(cells("Investigation Publication Status Term Accession Number"), [""]);
    assert_eq!(cells("Comment[Modified]"), ["2020", "2021"]);
    assert_eq!(cells("Comment[Source]"), ["", "x"]);
    assert_eq!(cells("Study Design Type Term Accession Number"), ["A1"]);
    assert_eq!(cells("Study Design Type Term Source REF"), [""]);
    assert_eq!(cells("Study Publication Title"), ["Study paper"]);
}

#[test]
fn test_writing_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let investigation = sample_investigation();

    write_investigation_file(&first, &investigation, &WriterConfig::default()).unwrap();
    write_investigation_file(&second, &investigation, &WriterConfig::default()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        to_isatab_string(&investigation)
    );
}

#[test]
fn test_duplicate_study_is_rejected() {
    let mut investigation = Investigation::new("I1");
    investigation.add_study(Study::new("S1", "a.txt")).unwrap();

    let result = investigation.add_study(Study::new("S1", "b.txt"));
    assert!(matches!(result, Err(ModelError::DuplicateStudyIdentifier(_))));
    assert_eq!(investigation.studies().len(), 1);
    assert_eq!(investigation.studies()[0].file_name(), "a.txt");
}

#[test]
fn test_atomic_write_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("i_investigation.txt");
    fs::write(&path, "stale").unwrap();

    write_investigation_file(&path, &Investigation::new("I1"), &WriterConfig::default()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("ONTOLOGY SOURCE REFERENCE\n"));
    // Only the destination remains; the staging file was moved into place
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("i_investigation.txt");
    let investigation = Investigation::new("I1");

    let atomic = write_investigation_file(&path, &investigation, &WriterConfig::default());
    assert!(matches!(atomic, Err(WriterError::IoError(_))));

    let direct = write_investigation_file(&path, &investigation, &WriterConfig::direct());
    assert!(matches!(direct, Err(WriterError::IoError(_))));
    assert!(!path.exists());
}

#[test]
fn test_writer_into_vec() {
    let investigation = sample_investigation();
    let mut writer = InvestigationWriter::new(Vec::new(), &WriterConfig::default());
    writer.write_investigation(&investigation).unwrap();
    let (bytes, stats) = writer.into_inner().unwrap();

    assert_eq!(stats.bytes_written, bytes.len() as u64);
    assert_eq!(String::from_utf8(bytes).unwrap(), to_isatab_string(&investigation));
}

#[test]
fn test_json_model_to_file() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("investigation.json");
    let out_path = dir.path().join("i_investigation.txt");

    let investigation = sample_investigation();
    fs::write(&json_path, investigation.to_json().unwrap()).unwrap();

    let loaded = Investigation::from_json_file(&json_path).unwrap();
    write_investigation_file(&out_path, &loaded, &WriterConfig::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        to_isatab_string(&investigation)
    );
}

/// Values with tabs or line breaks still read back as one cell each
#[test]
fn test_embedded_separators_keep_row_width() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("i_investigation.txt");

    let mut a = Person::new("Doe\tX", "Jane");
    a.add_comment(Comment::new("Note", "line1\nline2"));
    let mut b = Person::new("Smith", "Bob");
    b.add_comment(Comment::new("Note", "say \"hi\""));

    let mut investigation = Investigation::new("I1");
    investigation.set_title("Title\twith tab");
    investigation.add_contact(a);
    investigation.add_contact(b);

    write_investigation_file(&path, &investigation, &WriterConfig::default()).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .has_headers(false)
        .from_path(&path)
        .unwrap();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();

    let cells = |label: &str| -> Vec<String> {
        rows.iter()
            .find(|r| r[0] == label)
            .map(|r| r[1..].to_vec())
            .unwrap_or_else(|| panic!("missing row {}", label))
    };

    assert_eq!(cells("Investigation Title"), ["Title\twith tab"]);
    assert_eq!(cells("Investigation Person Last Name"), ["Doe\tX", "Smith"]);
    assert_eq!(cells("Comment[Note]"), ["line1\nline2", "say \"hi\""]);
    assert!(rows.iter().all(|r| !r[0].starts_with("line2")));
    for row in rows.iter().filter(|r| r[0].starts_with("Investigation Person")) {
        assert_eq!(row.len() - 1, 2, "{}", row[0]);
    }
}

#[cfg(unix)]
#[test]
fn test_atomic_and_direct_writes_have_same_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let atomic = dir.path().join("atomic.txt");
    let direct = dir.path().join("direct.txt");
    let investigation = sample_investigation();

    write_investigation_file(&atomic, &investigation, &WriterConfig::default()).unwrap();
    write_investigation_file(&direct, &investigation, &WriterConfig::direct()).unwrap();

    let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&atomic), mode(&direct));
}

#[cfg(unix)]
#[test]
fn test_atomic_write_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("i_investigation.txt");
    fs::write(&path, "stale").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    write_investigation_file(&path, &sample_investigation(), &WriterConfig::default()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o640);
}
