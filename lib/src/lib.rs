pub mod assemble;
pub mod data;
pub mod error;
pub mod helpers;
pub mod naming;
mod raw_data;
pub mod script;
pub mod variants;

pub use assemble::{assemble, CollectionSpec};
pub use data::{load_questions, randomize, AssembledQuestion, QuestionRecord};
pub use error::Error;
pub use naming::{glob_pattern, matches_language, Language, VariantIdentity};
pub use script::{render_script, PresentationConfig};
pub use variants::{collection_specs, generate_variants, GenerateOptions, ARTIFACT_EXTENSION};
