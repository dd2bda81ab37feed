//! End-to-end grading through configuration, file loading and adapters

use std::path::Path;

use cot_grader::prelude::*;
use cot_grader::reporting::load_responses_from_str;

const MMLU: &str = r#"{
    "high_school_biology": [
        {"meta_data": [], "question": "Which organelle makes ATP?\nA. nucleus\nB. mitochondrion\nC. ribosome\nD. vacuole",
         "answer": "B", "choices_list": ["nucleus", "mitochondrion", "ribosome", "vacuole"], "domain": "biology"}
    ],
    "elementary_mathematics": [
        {"meta_data": [], "question": "What is 2 + 3?\nA. 4\nB. five\nC. 10\nD. 6",
         "answer": "B", "choices_list": ["4", "five", "10", "6"], "domain": "math"}
    ]
}"#;

const BBH: &str = r#"{
    "object_counting": [
        {"meta_data": {"input": "How many legs does a spider have?", "target": "8"},
         "question": "How many legs does a spider have?", "answer": "8", "domain": "counting"}
    ],
    "date_understanding": [
        {"meta_data": {"input": "...", "target": "(C)",
                       "structured": {"question": "Which date?", "choices": ["01/01", "02/01", "03/01", "04/01", "05/01", "06/01"],
                                      "answer_flag": "F", "answer_content": "06/01"}},
         "question": "Which date is a month after 05/01?", "answer": "F", "domain": "dates"}
    ]
}"#;

const GSM8K: &str = r#"{
    "math": [
        {"meta_data": {"question": "...", "answer": "... #### 1,234"},
         "question": "A shop sells 1,000 apples and 234 pears. How many fruits?", "answer": "1,234"}
    ]
}"#;

const GPQA: &str = r#"{
    "physics": [
        {"meta_data": [], "question": "Which boson carries the strong force?",
         "answer": "A", "choices_list": ["gluon", "photon", "Z boson", "Higgs"],
         "answer_content": "gluon", "pure_question": "Which boson?"}
    ]
}"#;

fn write_dataset(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(format!("{}.json", name));
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().replace('\\', "/")
}

fn setup() -> (tempfile::TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        r#"
[datasets.mmlu]
family = "letter_choice"
path = "{}"

[datasets.bbh]
family = "mixed_choice"
path = "{}"

[datasets.gsm8k]
family = "numeric_boxed"
path = "{}"

[datasets.gpqa]
family = "science_choice"
path = "{}"
"#,
        write_dataset(dir.path(), "mmlu", MMLU),
        write_dataset(dir.path(), "bbh", BBH),
        write_dataset(dir.path(), "gsm8k", GSM8K),
        write_dataset(dir.path(), "gpqa", GPQA),
    );
    let config = Config::from_toml(&toml).unwrap();
    (dir, config)
}

fn open(config: &Config, name: &str) -> std::sync::Arc<dyn AnswerAdapter> {
    let dataset = config.dataset(name).unwrap();
    let items = load_items_from_file(&dataset.path).unwrap();
    create_adapter(dataset.family, items)
}

#[test]
fn error_sentinel_never_matches() {
    let (_dir, config) = setup();
    for name in ["mmlu", "bbh", "gsm8k", "gpqa"] {
        let adapter = open(&config, name);
        let reference = adapter.reference_answer(0).unwrap();
        let verdict = adapter.verdict(Some(ERROR_SENTINEL), &reference, 0).unwrap();
        assert!(!verdict.matched, "{}", name);
        assert_eq!(verdict.diagnostic, format!("`error` <=> `{}`", reference));
    }
}

#[test]
fn reference_answers_grade_as_matches() {
    let (_dir, config) = setup();
    for name in ["mmlu", "bbh", "gsm8k", "gpqa"] {
        let adapter = open(&config, name);
        for index in 0..adapter.len() {
            let reference = adapter.reference_answer(index).unwrap();
            let verdict = adapter.verdict(Some(&reference), &reference, index).unwrap();
            assert!(verdict.matched, "{} #{}: {}", name, index, verdict.diagnostic);
        }
    }
}

#[test]
fn letter_choice_accepts_letter_or_full_text() {
    let (_dir, config) = setup();
    let mmlu = open(&config, "mmlu");

    // Category order from the file is kept: biology first.
    assert!(mmlu.prompt(0).unwrap().contains("Which organelle makes ATP?"));

    for index in 0..mmlu.len() {
        assert!(mmlu.verdict(Some("B"), "b", index).unwrap().matched);
    }
    assert!(mmlu.verdict(Some("b. five"), "B", 1).unwrap().matched);
    assert!(!mmlu.verdict(Some("b. five"), "B", 0).unwrap().matched);
    assert!(mmlu.verdict(Some("B. Mitochondrion"), "B", 0).unwrap().matched);
}

#[test]
fn mixed_choice_handles_free_text_and_six_options() {
    let (_dir, config) = setup();
    let bbh = open(&config, "bbh");

    let v = bbh.verdict(Some(" Paris "), "paris", 0).unwrap();
    assert!(v.matched);

    assert!(bbh.verdict(Some("f"), "F", 1).unwrap().matched);
    assert!(bbh.verdict(Some("F. 06/01"), "F", 1).unwrap().matched);
    assert!(!bbh.verdict(Some("E"), "F", 1).unwrap().matched);
}

#[test]
fn numeric_boxed_takes_last_span_and_ignores_commas() {
    let (_dir, config) = setup();
    let gsm8k = open(&config, "gsm8k");

    let trace = "<THOUGHT>1,000 + 234</THOUGHT>\nTherefore, the final answer is \\boxed{1,234}.";
    assert!(gsm8k.verdict(Some(trace), "1234", 0).unwrap().matched);
    assert!(gsm8k.verdict(Some(trace), "1,234", 0).unwrap().matched);

    let two_spans = "First \\boxed{7}, finally \\boxed{42}";
    assert!(gsm8k.verdict(Some(two_spans), "42", 0).unwrap().matched);
    assert!(!gsm8k.verdict(Some(two_spans), "7", 0).unwrap().matched);
}

#[test]
fn science_choice_rejects_wrong_option_text() {
    let (_dir, config) = setup();
    let gpqa = open(&config, "gpqa");
    assert!(gpqa.verdict(Some("a"), "A", 0).unwrap().matched);
    assert!(gpqa.verdict(Some("A. Gluon"), "A", 0).unwrap().matched);
    assert!(!gpqa.verdict(Some("A. photon"), "A", 0).unwrap().matched);
}

#[test]
fn grading_a_response_file() {
    let (_dir, config) = setup();
    let gsm8k = open(&config, "gsm8k");

    let responses = load_responses_from_str(
        "{\"index\": 0, \"response\": \"\\\\boxed{1234}\"}\n{\"index\": 0, \"response\": \"error\"}\n{\"index\": 0}\n",
    )
    .unwrap();
    let graded = grade_all(gsm8k.as_ref(), "gsm8k", &responses).unwrap();

    let outcomes: Vec<bool> = graded.iter().map(|g| g.matched).collect();
    assert_eq!(outcomes, vec![true, false, false]);
    assert_eq!(graded[1].diagnostic, "`error` <=> `1,234`");
}

#[test]
fn structural_errors_propagate() {
    let (_dir, config) = setup();
    let mmlu = open(&config, "mmlu");

    assert_eq!(
        mmlu.prompt(10).unwrap_err(),
        GradeError::IndexOutOfRange { index: 10, len: 2 }
    );
    assert!(matches!(
        mmlu.verdict(Some("five"), "(B)", 1),
        Err(GradeError::Record { index: 1, source: RecordError::InvalidAnswerLetter(_) })
    ));
}
