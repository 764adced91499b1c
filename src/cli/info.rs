use anyhow::{Context, Result};
use std::path::PathBuf;

use isatab::format::CommentPivot;
use isatab::model::{Commentable, Investigation};

/// Display a summary of a JSON investigation model
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let investigation = Investigation::from_json_file(&file)
        .with_context(|| format!("Failed to load investigation model: {}", file.display()))?;

    println!("Investigation Information");
    println!("=========================");
    println!("File: {}", file.display());
    println!("Identifier: {}", investigation.identifier());
    if let Some(title) = investigation.title() {
        println!("Title: {}", title);
    }
    println!();

    println!("Investigation:");
    println!("  Ontology sources: {}", investigation.ontologies().len());
    println!("  Publications: {}", investigation.publications().len());
    println!("  Contacts: {}", investigation.contacts().len());
    println!("  Comments: {}", investigation.comments().len());
    println!(
        "  Contact comment types: {}",
        CommentPivot::new(investigation.contacts()).types().join(", ")
    );
    println!();

    println!("Studies: {}", investigation.studies().len());
    for study in investigation.studies() {
        println!("  {} ({})", study.identifier(), study.file_name());
        println!("    Design descriptors: {}", study.design_descriptors().len());
        println!("    Publications: {}", study.publications().len());
        println!("    Contacts: {}", study.contacts().len());
        println!("    Comments: {}", study.comments().len());
    }

    Ok(())
}

