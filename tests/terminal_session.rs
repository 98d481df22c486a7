use std::sync::Mutex;

use async_trait::async_trait;
use kisilik_lib::controller::{RootController, UiState};
use kisilik_lib::prediction::{
    FeatureImportance, PersonalityFeatures, PredictionError, PredictionResult, Predictor,
};
use kisilik_lib::quiz::AnswerVector;
use kisilik_lib::terminal::TerminalApp;

/// Records every submission and answers with a fixed outcome.
struct ScriptedPredictor {
    fail: bool,
    seen: Mutex<Vec<AnswerVector>>,
}

impl ScriptedPredictor {
    fn new(fail: bool) -> Self {
        Self { fail, seen: Mutex::new(Vec::new()) }
    }

    fn seen(&self) -> Vec<AnswerVector> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Predictor for ScriptedPredictor {
    async fn predict(&self, answers: &AnswerVector) -> Result<PredictionResult, PredictionError> {
        self.seen.lock().unwrap().push(*answers);
        if self.fail {
            return Err(PredictionError::Unreachable);
        }
        Ok(PredictionResult {
            features: PersonalityFeatures { ext: 3.0, est: 3.0, agr: 3.0, csn: 3.0, opn: 3.0 },
            prediction: "Uyumlu Destekçi".to_string(),
            cluster_id: 3,
            confidence: Some(0.6),
            all_probabilities: Some(
                [("Sosyal Lider", 0.3), ("Uyumlu Destekçi", 0.6), ("Analitik Düşünür", 0.1)]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
        })
    }

    async fn feature_importance(&self) -> Result<FeatureImportance, PredictionError> {
        Ok(FeatureImportance {
            question_importance: Default::default(),
            dimension_importance: [("OPN".to_string(), 0.05)].into_iter().collect(),
        })
    }
}

fn script(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn fifty_threes() -> Vec<&'static str> {
    vec!["3"; 50]
}

async fn run_bytes(
    predictor: ScriptedPredictor,
    input: &[u8],
) -> TerminalApp<ScriptedPredictor, Vec<u8>> {
    colored::control::set_override(false);
    let mut app = TerminalApp::new(RootController::new(predictor), "http://test:8000", Vec::new());
    app.run(input).await.unwrap();
    app
}

async fn run(
    predictor: ScriptedPredictor,
    lines: &[&str],
) -> TerminalApp<ScriptedPredictor, Vec<u8>> {
    run_bytes(predictor, script(lines).as_bytes()).await
}

#[tokio::test]
async fn answering_everything_and_submitting_shows_result() {
    let mut lines = fifty_threes();
    lines.extend(["s", "q"]);
    let app = run(ScriptedPredictor::new(false), &lines).await;

    let seen = app.controller().predictor().seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].as_slice(), &[3u8; 50][..]);
    assert!(matches!(app.controller().state(), UiState::Result(_)));

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Random Forest modeli analiz yapıyor..."));
    assert!(output.contains("Kişilik Tipiniz: Uyumlu Destekçi"));
    assert!(output.contains("%60.0"));
    assert!(output.contains("3.00 / 5"));
    let first = output.find("Uyumlu Destekçi\n").unwrap();
    let second = output.find("Sosyal Lider\n").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn early_submit_is_refused() {
    let app = run(ScriptedPredictor::new(false), &["5", "5", "s", "q"]).await;

    assert!(app.controller().predictor().seen().is_empty());
    assert_eq!(app.form().answered_count(), 2);
    assert_eq!(app.controller().state(), &UiState::Idle);

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Lütfen tüm soruları cevaplayın. (2 / 50)"));
}

#[tokio::test]
async fn failed_submission_keeps_answers_for_retry() {
    let mut lines = fifty_threes();
    lines.extend(["s", "s", "q"]);
    let app = run(ScriptedPredictor::new(true), &lines).await;

    assert_eq!(app.controller().predictor().seen().len(), 2);
    assert_eq!(app.form().answered_count(), 50);
    assert!(matches!(app.controller().state(), UiState::Error(_)));

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Hata: API sunucusuna ulaşılamıyor."));
    assert!(output.contains("API Durumu: http://test:8000"));
}

#[tokio::test]
async fn edits_change_only_the_named_question() {
    let mut lines = fifty_threes();
    lines.extend(["12=5", "50 1", "s", "q"]);
    let app = run(ScriptedPredictor::new(false), &lines).await;

    let seen = app.controller().predictor().seen();
    let mut expected = [3u8; 50];
    expected[11] = 5;
    expected[49] = 1;
    assert_eq!(seen[0].as_slice(), &expected[..]);
}

#[tokio::test]
async fn reset_after_result_starts_a_fresh_form() {
    let mut lines = fifty_threes();
    lines.extend(["s", "d", "r", "q"]);
    let app = run(ScriptedPredictor::new(false), &lines).await;

    assert_eq!(app.controller().state(), &UiState::Idle);
    assert_eq!(app.form().answered_count(), 0);

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Açıklık (Openness)"));
    assert!(output.trim_end().ends_with("Partilerin gözdesi benim. (1-5)"));
}

#[tokio::test]
async fn latin5_bytes_do_not_end_the_session() {
    // "gönder" typed on an ISO-8859-9 console
    let input = b"3\ng\xf6nder\n3\n3\nq\n";
    let app = run_bytes(ScriptedPredictor::new(false), input).await;

    assert_eq!(app.form().answered_count(), 3);
    assert!(app.controller().predictor().seen().is_empty());

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Anlaşılamadı: 'g\u{FFFD}nder'"));
    assert!(output.contains("Cevaplanan sorular: 3 / 50"));
}

#[tokio::test]
async fn listing_shows_choice_labels_and_intro() {
    let app = run(ScriptedPredictor::new(false), &["4", "l", "q"]).await;

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("%88.7 doğruluk oranında"));
    assert!(output.contains("1. Partilerin gözdesi benim. -> 4 - Katılıyorum"));
    assert!(output.contains("1. Partilerin gözdesi benim. [4 - Katılıyorum]"));
    assert!(output.contains("2. Çok konuşmam. [Seçiniz]"));
}
