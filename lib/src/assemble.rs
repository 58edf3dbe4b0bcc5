use std::path::PathBuf;

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{load_questions, QuestionRecord};
use crate::error::Error;

/// One (collection, required count) pair: draw `count` questions from the
/// bank at `path`.
#[derive(Clone, Debug)]
pub struct CollectionSpec {
    pub path: PathBuf,
    pub count: usize,
}

/// Draws `spec.count` questions uniformly without replacement from each
/// collection, then shuffles the concatenated pool so the emitted order
/// carries no per-collection grouping.
///
/// Sampling and shuffling both advance the caller's `rng`; callers wanting
/// reproducible output seed it themselves and reuse it across calls.
pub fn assemble<R: Rng>(
    rng: &mut R,
    specs: &[CollectionSpec],
) -> Result<Vec<QuestionRecord>, Error> {
    let mut pool = Vec::new();

    for spec in specs {
        info!(
            "drawing {} questions from {}",
            spec.count,
            spec.path.display()
        );

        let questions = load_questions(&spec.path)?;

        if questions.len() < spec.count {
            return Err(Error::InsufficientQuestions {
                path: spec.path.clone(),
                available: questions.len(),
                required: spec.count,
            });
        }

        pool.extend(questions.choose_multiple(rng, spec.count).cloned());
    }

    pool.shuffle(rng);

    info!("assembled {} questions total", pool.len());

    Ok(pool)
}
