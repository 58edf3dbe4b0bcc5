use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{error, info};
use rand::Rng;

use crate::assemble::{assemble, CollectionSpec};
use crate::data::randomize;
use crate::error::Error;
use crate::helpers::write_artifact;
use crate::naming::{Language, VariantIdentity};
use crate::script::{render_script, PresentationConfig};

pub const ARTIFACT_EXTENSION: &str = "gs";

/// Fixed per-language draw: three questions from M1 (fundamentals), four
/// from M2 (ethics), three from M3 (applications).
pub fn collection_specs(data_dir: &Path, language: Language) -> Vec<CollectionSpec> {
    let base = data_dir.join(language.dir_name()).join("L0");

    vec![
        CollectionSpec {
            path: base.join("M1").join("m1.json"),
            count: 3,
        },
        CollectionSpec {
            path: base.join("M2").join("m2.json"),
            count: 4,
        },
        CollectionSpec {
            path: base.join("M3").join("m3.json"),
            count: 3,
        },
    ]
}

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub language: Language,
    pub variants: u32,
    pub date: NaiveDate,
    pub output_dir: PathBuf,
    pub data_dir: PathBuf,
    pub presentation: PresentationConfig,
}

/// Generates `options.variants` quiz artifacts for one language. A failed
/// variant is logged and skipped; the call fails only when nothing at all
/// was produced.
pub fn generate_variants<R: Rng>(
    rng: &mut R,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>, Error> {
    info!(
        "generating {} quiz variants in {}",
        options.variants, options.language
    );

    let specs = collection_specs(&options.data_dir, options.language);

    let mut produced = Vec::new();
    let mut last_error = None;

    for number in 1..=options.variants {
        let identity = VariantIdentity::new(options.language, options.date, number);

        match generate_variant(rng, &specs, &identity, options) {
            Ok(path) => {
                info!(
                    "generated variant {number}/{}: {}",
                    options.variants,
                    path.display()
                );
                produced.push(path);
            }
            Err(err) => {
                error!("failed to generate variant {number}: {err}");
                last_error = Some(err);
            }
        }
    }

    info!(
        "generated {}/{} quiz variants",
        produced.len(),
        options.variants
    );

    if produced.is_empty() {
        Err(last_error.unwrap_or(Error::NoVariantsProduced))
    } else {
        Ok(produced)
    }
}

fn generate_variant<R: Rng>(
    rng: &mut R,
    specs: &[CollectionSpec],
    identity: &VariantIdentity,
    options: &GenerateOptions,
) -> Result<PathBuf, Error> {
    let presentation = options.presentation.for_variant(identity);

    let records = assemble(rng, specs)?;
    let questions = randomize(rng, &records, true);
    let script = render_script(&questions, &presentation);

    let path = options.output_dir.join(identity.file_name(
        &options.presentation.title,
        ARTIFACT_EXTENSION,
    ));
    write_artifact(&path, &script)?;

    Ok(path)
}
