use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use quiz_gen::{glob_pattern, matches_language, Language, ARTIFACT_EXTENSION};

pub fn run(output_dir: PathBuf, base_title: &str, language: Option<Language>) -> Result<()> {
    let pattern = glob_pattern(base_title, ARTIFACT_EXTENSION, language);
    log::debug!("listing {} against {pattern}", output_dir.display());

    let prefix = format!("{base_title} | ");
    let suffix = format!(".{ARTIFACT_EXTENSION}");

    let mut artifacts = Vec::new();

    for entry in fs::read_dir(&output_dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };

        if !name.starts_with(&prefix) || !name.ends_with(&suffix) {
            continue;
        }

        if let Some(language) = language {
            if !matches_language(&name, language) {
                continue;
            }
        }

        artifacts.push((name, entry.metadata()?.len()));
    }

    artifacts.sort();

    if artifacts.is_empty() {
        println!("no quiz files found in {}", output_dir.display());
        return Ok(());
    }

    println!(
        "found {} quiz file(s) in {}:",
        artifacts.len(),
        output_dir.display()
    );
    for (name, size) in artifacts {
        println!("  {name} ({size} bytes)");
    }

    Ok(())
}
