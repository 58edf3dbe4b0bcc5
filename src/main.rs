use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use quiz_gen::Language;

mod generate;
mod list;

#[derive(Parser)]
#[clap(about = "Generates uploadable quiz variants from JSON question banks")]
struct QuizGenerator {
    #[clap(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy)]
enum LanguageArg {
    Eng,
    Srb,
    Both,
}

impl std::fmt::Display for LanguageArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LanguageArg::Eng => "eng",
            LanguageArg::Srb => "srb",
            LanguageArg::Both => "both",
        };
        f.write_str(name)
    }
}

impl LanguageArg {
    fn languages(self) -> Vec<Language> {
        match self {
            LanguageArg::Eng => vec![Language::Eng],
            LanguageArg::Srb => vec![Language::Srb],
            LanguageArg::Both => vec![Language::Eng, Language::Srb],
        }
    }

    fn filter(self) -> Option<Language> {
        match self {
            LanguageArg::Eng => Some(Language::Eng),
            LanguageArg::Srb => Some(Language::Srb),
            LanguageArg::Both => None,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Generate quiz variant artifacts
    Generate {
        #[clap(short, long, value_enum, default_value_t = LanguageArg::Eng)]
        language: LanguageArg,

        #[clap(short = 'n', long, value_parser, default_value_t = 10)]
        variants: u32,

        #[clap(short, long, value_parser, value_name = "DIR", default_value = "/tmp")]
        output_dir: PathBuf,

        #[clap(short, long, value_parser, value_name = "DIR", default_value = "QAPool")]
        data_dir: PathBuf,

        /// Fixed RNG seed for reproducible draws
        #[clap(long, value_parser)]
        seed: Option<u64>,

        /// Spreadsheet document id to route form responses to
        #[clap(long, value_parser, value_name = "SHEET_ID")]
        results_sheet: Option<String>,
    },

    /// List previously generated quiz artifacts
    List {
        #[clap(short, long, value_parser, value_name = "DIR", default_value = "/tmp")]
        output_dir: PathBuf,

        #[clap(short, long, value_enum)]
        language: Option<LanguageArg>,

        #[clap(short, long, value_parser, default_value = "AI Fundamentals")]
        base_title: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = QuizGenerator::parse();

    let result = match cli.command {
        Command::Generate {
            language,
            variants,
            output_dir,
            data_dir,
            seed,
            results_sheet,
        } => generate::run(
            &language.languages(),
            variants,
            output_dir,
            data_dir,
            seed,
            results_sheet,
        ),
        Command::List {
            output_dir,
            language,
            base_title,
        } => list::run(
            output_dir,
            &base_title,
            language.and_then(LanguageArg::filter),
        ),
    };

    if let Err(error) = result {
        log::error!("{error:#}");
        process::exit(1);
    }
}
