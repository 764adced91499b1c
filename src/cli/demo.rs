use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

use isatab::controlled_vocabulary::{credit_roles, OntologyAnnotation};
use isatab::format::{write_investigation_file, WriterConfig};
use isatab::model::{Author, Comment, Investigation, Ontology, Person, Publication, Study};

use super::write::print_summary;

const IPK_ADDRESS: &str = "Corrensstrasse 3, 06466 Stadt Seeland, OT Gatersleben, Germany";
const IPK_AFFILIATION: &str =
    "Leibniz Institute of Plant Genetics and Crop Plant Research (IPK) Gatersleben";

/// Write the drought stress sample investigation
pub fn run(output: PathBuf, json: Option<PathBuf>) -> Result<()> {
    info!("Building sample investigation");
    let investigation = build_demo_investigation()?;

    if let Some(json_path) = json {
        let model = investigation.to_json()?;
        std::fs::write(&json_path, model)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        info!("JSON model: {}", json_path.display());
    }

    let stats = write_investigation_file(&output, &investigation, &WriterConfig::default())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_summary(&output, &stats);
    Ok(())
}

/// Drought stress experiment on Arabidopsis thaliana (MIAPPE example)
fn build_demo_investigation() -> Result<Investigation> {
    let mut investigation = Investigation::new("Investigation ID");
    investigation.set_title("Drought Stress Response in Arabidopsis thaliana");
    investigation.set_description("An experiment about drought stress in Arabidopsis thaliana");
    if let Some(date) = NaiveDate::from_ymd_opt(2019, 1, 16) {
        investigation.set_submission_date(date);
    }

    for (name, value) in [
        ("Owning Organisation URI", "http://www.ipk-gatersleben.de/"),
        (
            "Investigation Keywords",
            "plant phenotyping, image analysis, arabidopsis thaliana, lemnatec",
        ),
        (
            "License",
            "CC BY 4.0 (Creative Commons Attribution) - https://creativecommons.org/licenses/by/4.0/legalcode",
        ),
        ("MIAPPE version", "1.1"),
    ] {
        investigation.add_comment(Comment::new(name, value));
    }

    let credit = investigation.add_ontology(credit_roles::ontology());
    investigation.add_ontology(
        Ontology::new(
            "AGRO",
            "http://purl.obolibrary.org/obo/agro/releases/2018-05-14/agro.owl",
        )
        .with_version("2018-05-14")
        .with_description("Agronomy Ontology"),
    );
    investigation.add_ontology(
        Ontology::new("UO", "http://data.bioontology.org/ontologies/UO")
            .with_version("38802")
            .with_description("Units of Measurement Ontology"),
    );

    let mut astrid = Person::new("Junker", "Astrid")
        .with_email("junkera@ipk-gatersleben.de")
        .with_address(IPK_ADDRESS)
        .with_affiliation(IPK_AFFILIATION);
    astrid.add_role(credit_roles::project_administration(&credit));
    astrid.add_comment(Comment::new(
        "Person ID",
        "https://orcid.org/0000-0002-4656-0308",
    ));

    let mut dennis = Person::new("Psaroudakis", "Dennis")
        .with_email("psaroudakis@ipk-gatersleben.de")
        .with_address(IPK_ADDRESS)
        .with_affiliation(IPK_AFFILIATION);
    dennis.add_role(credit_roles::data_curation(&credit));
    dennis.add_comment(Comment::new(
        "Person ID",
        "https://orcid.org/0000-0002-7521-798X",
    ));

    let mut publication = Publication::new("A title").with_doi("PUB DOI").with_status(
        OntologyAnnotation::new("fictional")
            .with_accession("access123")
            .with_source(&credit),
    );
    publication.add_author(Author::new("Psaroudakis", "Dennis"));
    investigation.add_publication(publication);

    let mut study = Study::new("1745AJ", "s_study.txt");
    study.set_title("Drought Stress Response in Arabidopsis thaliana");
    for (name, value) in [
        ("Study Start Date", ""),
        ("Study Country", "Germany"),
        ("Study Experimental Site", "LemnaTec Facility"),
        ("Study Longitude", "11.27778"),
    ] {
        study.add_comment(Comment::new(name, value));
    }

    let mut design = OntologyAnnotation::new("Study Design");
    design.add_comment(Comment::new(
        "Observation Unit Level Hierarchy",
        "side>lane>block>pot",
    ));
    design.add_comment(Comment::new("Experimental Unit Level Hierarchy", "plant"));
    study.add_design_descriptor(design);

    study.add_contact(astrid.clone());
    study.add_contact(dennis.clone());
    investigation.add_contact(astrid);
    investigation.add_contact(dennis);

    investigation
        .add_study(study)
        .context("Failed to add sample study")?;

    Ok(investigation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isatab::format::to_isatab_string;

    #[test]
    fn test_demo_investigation() {
        let investigation = build_demo_investigation().unwrap();
        assert_eq!(investigation.ontologies().len(), 3);
        assert_eq!(investigation.contacts().len(), 2);
        assert_eq!(investigation.studies().len(), 1);

        let text = to_isatab_string(&investigation);
        assert!(text.contains("Investigation Person Roles Term Source REF\tCRediT\tCRediT\n"));
        assert!(text.contains(
            "Comment[Person ID]\thttps://orcid.org/0000-0002-4656-0308\thttps://orcid.org/0000-0002-7521-798X\n"
        ));
        assert!(text.contains("Study Design Type Term Accession Number\t\n"));
        assert!(text.contains("Investigation Publication Author List\tPsaroudakis, D\n"));
    }
}
