use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use quiz_gen::{
    generate_variants, GenerateOptions, Language, PresentationConfig,
};

fn write_bank(data_dir: &Path, language: Language, module: &str, size: usize) {
    let dir = data_dir
        .join(language.dir_name())
        .join("L0")
        .join(module.to_uppercase());
    fs::create_dir_all(&dir).unwrap();

    let entries: Vec<String> = (0..size)
        .map(|n| {
            format!(
                r#"{{"question": "{} {module} Q{n}", "answers": ["alpha", "beta", "gamma", "delta"], "correct": "gamma"}}"#,
                language.tag()
            )
        })
        .collect();

    fs::write(
        dir.join(format!("{module}.json")),
        format!("[{}]", entries.join(",")),
    )
    .unwrap();
}

fn seed_banks(data_dir: &Path) {
    for language in [Language::Eng, Language::Srb] {
        for module in ["m1", "m2", "m3"] {
            write_bank(data_dir, language, module, 8);
        }
    }
}

fn options(data_dir: &Path, output_dir: &Path, language: Language) -> GenerateOptions {
    GenerateOptions {
        language,
        variants: 2,
        date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
        output_dir: output_dir.to_owned(),
        data_dir: data_dir.to_owned(),
        presentation: PresentationConfig::default(),
    }
}

#[test]
fn generates_full_variant_set_per_language() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    seed_banks(data.path());

    let mut rng = StdRng::seed_from_u64(42);
    let mut all_paths = Vec::new();

    for language in [Language::Eng, Language::Srb] {
        let paths =
            generate_variants(&mut rng, &options(data.path(), out.path(), language)).unwrap();
        assert_eq!(paths.len(), 2);
        all_paths.extend(paths);
    }

    assert_eq!(all_paths.len(), 4);

    for path in &all_paths {
        let script = fs::read_to_string(path).unwrap();

        // 3 + 4 + 3 questions embedded per variant.
        assert_eq!(script.matches("question: \"").count(), 10);
        assert!(script.contains("function createQuizForm()"));
        assert!(script.contains("function onFormSubmit(e)"));
        assert!(script.contains("MailApp.sendEmail(email, subject, body);"));
    }

    let eng_script = fs::read_to_string(&all_paths[0]).unwrap();
    assert!(eng_script.contains("ENG m"));
    assert!(!eng_script.contains("SRB m"));

    let srb_script = fs::read_to_string(&all_paths[2]).unwrap();
    assert!(srb_script.contains("SRB m"));
}

#[test]
fn same_seed_reproduces_the_same_artifacts() {
    let data = TempDir::new().unwrap();
    seed_banks(data.path());

    let first_out = TempDir::new().unwrap();
    let mut first_rng = StdRng::seed_from_u64(7);
    let first = generate_variants(
        &mut first_rng,
        &options(data.path(), first_out.path(), Language::Eng),
    )
    .unwrap();

    let second_out = TempDir::new().unwrap();
    let mut second_rng = StdRng::seed_from_u64(7);
    let second = generate_variants(
        &mut second_rng,
        &options(data.path(), second_out.path(), Language::Eng),
    )
    .unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(
            fs::read_to_string(a).unwrap(),
            fs::read_to_string(b).unwrap()
        );
    }
}
