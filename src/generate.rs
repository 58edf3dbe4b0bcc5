use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Local;
use quiz_gen::{generate_variants, GenerateOptions, Language, PresentationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn run(
    languages: &[Language],
    variants: u32,
    output_dir: PathBuf,
    data_dir: PathBuf,
    seed: Option<u64>,
    results_sheet: Option<String>,
) -> Result<()> {
    if variants == 0 {
        bail!("number of variants must be positive");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let presentation = PresentationConfig {
        results_sheet_id: results_sheet,
        ..PresentationConfig::default()
    };
    let date = Local::now().date_naive();

    let mut produced = 0;

    for &language in languages {
        let options = GenerateOptions {
            language,
            variants,
            date,
            output_dir: output_dir.clone(),
            data_dir: data_dir.clone(),
            presentation: presentation.clone(),
        };

        match generate_variants(&mut rng, &options) {
            Ok(paths) => produced += paths.len(),
            Err(error) => log::error!("{language} generation failed: {error}"),
        }
    }

    if produced == 0 {
        bail!("no quiz files were generated");
    }

    log::info!(
        "generation complete: {produced} quiz file(s) saved to {}",
        output_dir.display()
    );

    Ok(())
}
