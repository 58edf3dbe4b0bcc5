use serde::Deserialize;

use crate::data::QuestionRecord;

/// On-disk shape of one question bank entry. Field names follow the JSON
/// banks (`question`/`answers`/`correct`); unknown extra fields are
/// tolerated, missing required ones disqualify the record.
#[derive(Deserialize, Debug)]
pub struct RawQuestionRecord {
    pub question: String,
    pub answers: Vec<String>,
    pub correct: String,
}

impl From<RawQuestionRecord> for QuestionRecord {
    fn from(raw: RawQuestionRecord) -> Self {
        Self {
            prompt: raw.question,
            options: raw.answers,
            correct_option: raw.correct,
        }
    }
}
