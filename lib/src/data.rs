use std::path::Path;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;
use crate::helpers::read_collection_data;
use crate::raw_data::RawQuestionRecord;

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: String,
}

impl QuestionRecord {
    /// Validates the loader invariants: exactly four options and a correct
    /// answer present verbatim among them. When the correct string matches
    /// more than one option, the first match wins everywhere downstream.
    fn check(&self, index: usize) -> bool {
        if self.prompt.is_empty() {
            warn!("question {index}: empty prompt, skipping");
            return false;
        }

        if self.options.len() != OPTION_COUNT {
            warn!(
                "question {index}: expected exactly {OPTION_COUNT} options, got {}, skipping",
                self.options.len()
            );
            return false;
        }

        if !self.options.contains(&self.correct_option) {
            warn!("question {index}: correct answer not found among options, skipping");
            return false;
        }

        true
    }
}

/// Loads one question collection, keeping only records that pass
/// validation. Individual bad records are skipped with a warning; only
/// structural problems (missing file, top level not an array) fail the
/// load.
pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>, Error> {
    let raw_data = read_collection_data(path)?;

    let entries: Vec<serde_json::Value> =
        serde_json::from_slice(&raw_data).map_err(|error| Error::MalformedInput {
            path: path.to_owned(),
            reason: error.to_string(),
        })?;

    let total = entries.len();
    let mut questions = Vec::with_capacity(total);

    for (index, entry) in entries.into_iter().enumerate() {
        let raw: RawQuestionRecord = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("question {index}: {error}, skipping");
                continue;
            }
        };

        let question = QuestionRecord::from(raw);
        if question.check(index) {
            questions.push(question);
        }
    }

    info!(
        "loaded {} valid questions from {} ({total} total)",
        questions.len(),
        path.display()
    );

    Ok(questions)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

/// Reorders each question's options and recomputes the 0-based index of
/// the correct choice. With `shuffle` off the original order is kept, so
/// `correct_index` is just the original position of the correct answer.
pub fn randomize<R: Rng>(
    rng: &mut R,
    questions: &[QuestionRecord],
    shuffle: bool,
) -> Vec<AssembledQuestion> {
    let assembled: Vec<AssembledQuestion> = questions
        .iter()
        .filter_map(|question| {
            let mut choices = question.options.clone();
            if shuffle {
                choices.shuffle(rng);
            }

            // Unreachable for loader-validated records.
            let correct_index = match choices
                .iter()
                .position(|choice| choice == &question.correct_option)
            {
                Some(index) => index,
                None => {
                    warn!(
                        "question {:?}: correct answer not found among choices, skipping",
                        question.prompt
                    );
                    return None;
                }
            };

            Some(AssembledQuestion {
                prompt: question.prompt.clone(),
                choices,
                correct_index,
            })
        })
        .collect();

    info!(
        "randomized {} questions (shuffle={shuffle})",
        assembled.len()
    );

    assembled
}
