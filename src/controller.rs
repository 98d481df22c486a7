use log::{error, info, warn};

use crate::prediction::{PredictionError, PredictionResult, Predictor};
use crate::quiz::AnswerVector;

/// Top-level screen state. Exactly one is active.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading,
    Result(PredictionResult),
    Error(String),
}

/// What the frontend should draw for the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// Questionnaire, with the error banner above it when `error` is set.
    Form { error: Option<&'a str> },
    Loading,
    Result(&'a PredictionResult),
}

pub struct RootController<P> {
    predictor: P,
    state: UiState,
}

impl<P: Predictor> RootController<P> {
    pub fn new(predictor: P) -> Self {
        Self {
            predictor,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            UiState::Idle => View::Form { error: None },
            UiState::Error(message) => View::Form { error: Some(message.as_str()) },
            UiState::Loading => View::Loading,
            UiState::Result(result) => View::Result(result),
        }
    }

    /// Enter `Loading` if the form is on screen. Returns false when a
    /// submission is already in flight or a result is being shown.
    pub fn begin_submit(&mut self) -> bool {
        match self.state {
            UiState::Idle | UiState::Error(_) => {
                self.state = UiState::Loading;
                true
            }
            UiState::Loading => {
                warn!("Submission ignored: a prediction is already in flight");
                false
            }
            UiState::Result(_) => {
                warn!("Submission ignored: a result is on screen");
                false
            }
        }
    }

    /// Leave `Loading` with the outcome of the request. Outcomes arriving in
    /// any other state are dropped.
    pub fn finish_submit(&mut self, outcome: Result<PredictionResult, PredictionError>) {
        if !matches!(self.state, UiState::Loading) {
            warn!("Dropping prediction outcome outside of loading state");
            return;
        }
        self.state = match outcome {
            Ok(result) => {
                info!("Tahmin alındı: {}", result.prediction);
                UiState::Result(result)
            }
            Err(e) => {
                error!("Uygulama hatası: {:?}", e);
                UiState::Error(e.to_string())
            }
        };
    }

    pub async fn submit(&mut self, answers: AnswerVector) -> &UiState {
        if !self.begin_submit() {
            return &self.state;
        }
        info!("Form gönderiliyor, cevap sayısı: {}", answers.len());
        let outcome = self.predictor.predict(&answers).await;
        self.finish_submit(outcome);
        &self.state
    }

    /// Back to an empty form, dropping the result and any stale error.
    pub fn reset(&mut self) -> bool {
        match self.state {
            UiState::Result(_) | UiState::Error(_) => {
                self.state = UiState::Idle;
                true
            }
            UiState::Idle => true,
            UiState::Loading => {
                warn!("Reset ignored while a prediction is in flight");
                false
            }
        }
    }
}
