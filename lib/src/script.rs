use crate::data::AssembledQuestion;
use crate::naming::VariantIdentity;

/// Non-content parameters applied uniformly to one rendered artifact.
/// Every field is explicit; the renderer has no defaults of its own.
#[derive(Clone, Debug)]
pub struct PresentationConfig {
    pub title: String,
    pub description: String,
    pub points_per_question: u32,
    /// Pass/fail boundary as a fraction, e.g. 0.70.
    pub pass_threshold: f64,
    pub collect_email: bool,
    pub limit_one_response: bool,
    pub show_link_to_respond_again: bool,
    pub confirmation_message: String,
    /// Spreadsheet document id the form's responses are routed to, when
    /// set.
    pub results_sheet_id: Option<String>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title: "AI Fundamentals".to_owned(),
            description:
                "Test your knowledge across AI fundamentals, ethics, and practical applications"
                    .to_owned(),
            points_per_question: 5,
            pass_threshold: 0.70,
            collect_email: true,
            limit_one_response: true,
            show_link_to_respond_again: false,
            confirmation_message: "Thanks for taking the quiz! Your results will be displayed \
                                   immediately after submission. You need 70% or higher to pass."
                .to_owned(),
            results_sheet_id: None,
        }
    }
}

impl PresentationConfig {
    /// The per-variant config: same parameters, title suffixed with the
    /// variant's language tag and number. A fresh value per variant keeps
    /// the shared template untouched across loop iterations.
    pub fn for_variant(&self, identity: &VariantIdentity) -> Self {
        Self {
            title: identity.composed_title(&self.title),
            ..self.clone()
        }
    }
}

/// Escapes free text for embedding inside a single- or double-quoted
/// JavaScript string literal. The escape character goes first so the
/// later replacements cannot be double-escaped.
pub fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Renders a pass-threshold fraction as a percentage with at most one
/// decimal place, so binary rounding noise (0.33 * 100.0) never leaks
/// into the artifact.
fn format_percent(fraction: f64) -> String {
    let pct = (fraction * 1000.0).round() / 10.0;
    if pct.fract() == 0.0 {
        format!("{pct:.0}")
    } else {
        format!("{pct:.1}")
    }
}

fn format_questions_js(questions: &[AssembledQuestion]) -> String {
    let mut array = String::from("[\n");

    for (index, question) in questions.iter().enumerate() {
        let choices = question
            .choices
            .iter()
            .map(|choice| format!("\"{}\"", escape_js(choice)))
            .collect::<Vec<_>>()
            .join(", ");

        array.push_str(&format!(
            "    {{\n      question: \"{}\",\n      choices: [{}],\n      correct: {}\n    }}",
            escape_js(&question.prompt),
            choices,
            question.correct_index
        ));

        if index + 1 < questions.len() {
            array.push(',');
        }
        array.push('\n');
    }

    array.push_str("  ]");
    array
}

/// Renders the complete Google Apps Script artifact: the embedded
/// question pool plus the form-building and grading boilerplate. Pure
/// function of its inputs; identical inputs give byte-identical output.
pub fn render_script(questions: &[AssembledQuestion], presentation: &PresentationConfig) -> String {
    let pool = format_questions_js(questions);
    let count = questions.len();
    let points = presentation.points_per_question;
    let threshold_pct = format_percent(presentation.pass_threshold);
    let title = escape_js(&presentation.title);

    let mut script = String::new();

    script.push_str(&format!(
        "/**\n\
         \u{20}* Creates a {count}-question multiple-choice quiz form.\n\
         \u{20}* Autograded at {points} point(s) per question with immediate feedback;\n\
         \u{20}* respondents receive a PASS/FAIL email at the {threshold_pct}% threshold.\n\
         \u{20}*/\n\
         function createQuizForm() {{\n"
    ));

    script.push_str(&format!("  const questionsPool = {pool};\n\n"));

    script.push_str(&format!(
        "  const selectedQuestions = shuffleArray(questionsPool).slice(0, {count});\n\n"
    ));

    script.push_str(&format!(
        "  const form = FormApp.create('{title}')\n\
         \u{20}   .setIsQuiz(true)\n\
         \u{20}   .setCollectEmail({})\n\
         \u{20}   .setShowLinkToRespondAgain({});\n\n",
        presentation.collect_email, presentation.show_link_to_respond_again
    ));

    script.push_str(&format!(
        "  form.setTitle('{title}');\n\
         \u{20} form.setDescription('{}');\n\
         \u{20} form.setPublishingSummary(false);\n\
         \u{20} form.setLimitOneResponsePerUser({});\n\
         \u{20} form.setConfirmationMessage('{}');\n",
        escape_js(&presentation.description),
        presentation.limit_one_response,
        escape_js(&presentation.confirmation_message)
    ));

    if let Some(sheet_id) = &presentation.results_sheet_id {
        script.push_str(&format!(
            "  form.setDestination(FormApp.DestinationType.SPREADSHEET, '{}');\n",
            escape_js(sheet_id)
        ));
    }

    script.push_str(&format!(
        "\n\
         \u{20} const addChoiceQuestion = (questionData) => {{\n\
         \u{20}   const item = form.addMultipleChoiceItem();\n\
         \u{20}   item.setTitle(questionData.question).setPoints({points}).setRequired(true);\n\
         \n\
         \u{20}   const choices = questionData.choices.map((choice, index) =>\n\
         \u{20}     item.createChoice(choice, index === questionData.correct)\n\
         \u{20}   );\n\
         \u{20}   item.setChoices(choices);\n\
         \n\
         \u{20}   const fbCorrect = FormApp.createFeedback().setText('Correct!').build();\n\
         \u{20}   const fbIncorrect = FormApp.createFeedback().setText('Review this topic.').build();\n\
         \u{20}   item.setFeedbackForCorrect(fbCorrect);\n\
         \u{20}   item.setFeedbackForIncorrect(fbIncorrect);\n\
         \n\
         \u{20}   return item;\n\
         \u{20} }};\n\
         \n\
         \u{20} selectedQuestions.forEach(questionData => {{\n\
         \u{20}   addChoiceQuestion(questionData);\n\
         \u{20} }});\n\
         \n\
         \u{20} // Drop stale submit triggers so result emails are not duplicated.\n\
         \u{20} ScriptApp.getProjectTriggers()\n\
         \u{20}   .filter(trigger => trigger.getHandlerFunction() === 'onFormSubmit')\n\
         \u{20}   .forEach(trigger => ScriptApp.deleteTrigger(trigger));\n\
         \n\
         \u{20} ScriptApp.newTrigger('onFormSubmit')\n\
         \u{20}   .forForm(form)\n\
         \u{20}   .onFormSubmit()\n\
         \u{20}   .create();\n\n"
    ));

    script.push_str(&format!(
        "  const totalPoints = selectedQuestions.length * {points};\n\
         \u{20} const passingScore = Math.ceil(totalPoints * {});\n\
         \n\
         \u{20} Logger.log('Questions: ' + selectedQuestions.length);\n\
         \u{20} Logger.log('Total possible points: ' + totalPoints);\n\
         \u{20} Logger.log('Passing score ({threshold_pct}%): ' + passingScore + ' points');\n\
         \u{20} Logger.log('Edit form: ' + form.getEditUrl());\n\
         \u{20} Logger.log('Live quiz: ' + form.getPublishedUrl());\n\
         \n\
         \u{20} return {{\n\
         \u{20}   publishedUrl: form.getPublishedUrl(),\n\
         \u{20}   editUrl: form.getEditUrl(),\n\
         \u{20}   formId: form.getId()\n\
         \u{20} }};\n\
         }}\n\n",
        presentation.pass_threshold
    ));

    script.push_str(
        "function shuffleArray(array) {\n\
         \u{20} let currentIndex = array.length, temporaryValue, randomIndex;\n\
         \u{20} while (0 !== currentIndex) {\n\
         \u{20}   randomIndex = Math.floor(Math.random() * currentIndex);\n\
         \u{20}   currentIndex--;\n\
         \u{20}   temporaryValue = array[currentIndex];\n\
         \u{20}   array[currentIndex] = array[randomIndex];\n\
         \u{20}   array[randomIndex] = temporaryValue;\n\
         \u{20} }\n\
         \u{20} return array;\n\
         }\n\n",
    );

    script.push_str(&format!(
        "/**\n\
         \u{20}* Recomputes the score from the recorded answers against the\n\
         \u{20}* marked-correct choices, then emails a PASS/FAIL result at the\n\
         \u{20}* {threshold_pct}% threshold.\n\
         \u{20}*/\n\
         function onFormSubmit(e) {{\n\
         \u{20} const form = e.source;\n\
         \u{20} const response = e.response;\n\
         \n\
         \u{20} const email = response.getRespondentEmail();\n\
         \u{20} if (!email) return;\n\
         \n\
         \u{20} const mcItems = form.getItems(FormApp.ItemType.MULTIPLE_CHOICE);\n\
         \u{20} let totalPoints = 0;\n\
         \u{20} let earnedPoints = 0;\n\
         \n\
         \u{20} mcItems.forEach(item => {{\n\
         \u{20}   const mci = item.asMultipleChoiceItem();\n\
         \u{20}   const points = mci.getPoints() || 0;\n\
         \u{20}   totalPoints += points;\n\
         \n\
         \u{20}   const ir = response.getResponseForItem(item);\n\
         \u{20}   const answer = ir ? ir.getResponse() : null;\n\
         \n\
         \u{20}   const correctChoice = mci.getChoices().find(c => c.isCorrectAnswer());\n\
         \u{20}   const correctValue = correctChoice ? correctChoice.getValue() : null;\n\
         \n\
         \u{20}   if (answer !== null && correctValue !== null && answer === correctValue) {{\n\
         \u{20}     earnedPoints += points;\n\
         \u{20}   }}\n\
         \u{20} }});\n\
         \n\
         \u{20} const pct = totalPoints > 0 ? (earnedPoints / totalPoints) * 100 : 0;\n\
         \u{20} const passed = pct >= {threshold_pct};\n\
         \n\
         \u{20} const subject = 'Your quiz result: ' + Math.round(pct) + '% - ' + (passed ? 'PASS' : 'FAIL');\n\
         \u{20} const body = 'Thanks for taking the quiz!\\n\\n'\n\
         \u{20}   + 'Score: ' + earnedPoints + ' / ' + totalPoints + ' (' + pct.toFixed(1) + '%)\\n'\n\
         \u{20}   + 'Result: ' + (passed ? 'PASS' : 'FAIL') + '\\n'\n\
         \u{20}   + 'Threshold: {threshold_pct}%\\n\\n'\n\
         \u{20}   + 'If the confirmation page shows a \"View score\" button, use it to review correct answers.';\n\
         \n\
         \u{20} MailApp.sendEmail(email, subject, body);\n\
         }}\n"
    ));

    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_questions() -> Vec<AssembledQuestion> {
        vec![
            AssembledQuestion {
                prompt: "What is 'AI'?".to_owned(),
                choices: vec![
                    "Artificial Intelligence".to_owned(),
                    "Automated Input".to_owned(),
                    "Analog Interface".to_owned(),
                    "Applied Inference".to_owned(),
                ],
                correct_index: 0,
            },
            AssembledQuestion {
                prompt: "Line\nbreak?".to_owned(),
                choices: vec!["y".to_owned(), "n".to_owned(), "a".to_owned(), "b".to_owned()],
                correct_index: 2,
            },
        ]
    }

    #[test]
    fn escapes_in_order_without_double_escaping() {
        assert_eq!(escape_js(r"back\slash"), r"back\\slash");
        assert_eq!(escape_js("it's"), r"it\'s");
        assert_eq!(escape_js(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_js("a\nb\rc"), r"a\nb\rc");
        // A pre-escaped quote gains one backslash level, not two.
        assert_eq!(escape_js(r"\'"), r"\\\'");
    }

    #[test]
    fn rendering_is_idempotent() {
        let questions = sample_questions();
        let presentation = PresentationConfig::default();

        let first = render_script(&questions, &presentation);
        let second = render_script(&questions, &presentation);

        assert_eq!(first, second);
    }

    #[test]
    fn embeds_pool_and_configuration() {
        let questions = sample_questions();
        let presentation = PresentationConfig {
            title: "My Quiz [ENG] Variant 2".to_owned(),
            ..PresentationConfig::default()
        };

        let script = render_script(&questions, &presentation);

        assert!(script.contains("question: \"What is \\'AI\\'?\""));
        assert!(script.contains("question: \"Line\\nbreak?\""));
        assert!(script.contains("correct: 2"));
        assert!(script.contains("FormApp.create('My Quiz [ENG] Variant 2')"));
        assert!(script.contains(".setPoints(5)"));
        assert!(script.contains("pct >= 70;"));
        assert!(script.contains("shuffleArray(questionsPool).slice(0, 2)"));
        assert!(script.contains("setLimitOneResponsePerUser(true)"));
    }

    #[test]
    fn threshold_percentage_renders_without_float_noise() {
        assert_eq!(format_percent(0.70), "70");
        assert_eq!(format_percent(0.33), "33");
        assert_eq!(format_percent(0.675), "67.5");
        assert_eq!(format_percent(1.0), "100");

        let script = render_script(
            &sample_questions(),
            &PresentationConfig {
                pass_threshold: 0.33,
                ..PresentationConfig::default()
            },
        );

        assert!(script.contains("pct >= 33;"));
        assert!(script.contains("Threshold: 33%"));
        assert!(!script.contains("33.000000000000004"));
    }

    #[test]
    fn results_sheet_destination_is_optional() {
        let questions = sample_questions();

        let without = render_script(&questions, &PresentationConfig::default());
        assert!(!without.contains("setDestination"));

        let with = render_script(
            &questions,
            &PresentationConfig {
                results_sheet_id: Some("sheet-123".to_owned()),
                ..PresentationConfig::default()
            },
        );
        assert!(with.contains(
            "form.setDestination(FormApp.DestinationType.SPREADSHEET, 'sheet-123');"
        ));
    }
}
