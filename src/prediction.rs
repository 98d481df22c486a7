use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use log::{debug, error, info};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::quiz::{AnswerVector, Category};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const UNKNOWN_ERROR_DETAIL: &str = "Bilinmeyen hata";

/// Failure of a call to the prediction service. The `Display` text is the
/// message shown to the user.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// The service answered with a non-success status.
    #[error("API Hatası ({status}): {detail}")]
    Server { status: u16, detail: String },
    /// Sent, but no response came back (connect failure, DNS, timeout).
    #[error("API sunucusuna ulaşılamıyor. Lütfen sunucunun çalıştığından emin olun.")]
    Unreachable,
    /// The request could not be built or its response could not be read.
    #[error("İstek hatası: {0}")]
    Request(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersonalityFeatures {
    pub ext: f64, // Extraversion
    pub est: f64, // Emotional Stability
    pub agr: f64, // Agreeableness
    pub csn: f64, // Conscientiousness
    pub opn: f64, // Openness
}

impl PersonalityFeatures {
    pub fn value(&self, category: Category) -> f64 {
        match category {
            Category::Ext => self.ext,
            Category::Est => self.est,
            Category::Agr => self.agr,
            Category::Csn => self.csn,
            Category::Opn => self.opn,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub features: PersonalityFeatures,
    pub prediction: String,
    pub cluster_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Keeps the key order of the response body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_probabilities: Option<IndexMap<String, f64>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelInfo {
    pub model_type: String,
    pub features: u32,
    pub classes: u32,
    #[serde(default)]
    pub personality_types: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureImportance {
    pub question_importance: IndexMap<String, f64>,
    pub dimension_importance: IndexMap<String, f64>,
}

/// Body of `POST /predict`.
#[derive(Serialize, Debug)]
pub struct PredictRequest<'a> {
    pub questions: &'a AnswerVector,
}

/// The calls the application makes against the prediction service.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, answers: &AnswerVector) -> Result<PredictionResult, PredictionError>;

    async fn feature_importance(&self) -> Result<FeatureImportance, PredictionError>;
}

#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send the answers to `POST /predict` exactly as given.
    pub async fn predict_personality(
        &self,
        answers: &AnswerVector,
    ) -> Result<PredictionResult, PredictionError> {
        let url = self.endpoint("predict");
        info!("API isteği gönderiliyor: {} ({} cevap)", url, answers.len());

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { questions: answers })
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;

        let result: PredictionResult = read_json(&url, response).await?;
        info!(
            "API yanıtı alındı: {} (küme {}, güven {:?})",
            result.prediction, result.cluster_id, result.confidence
        );
        Ok(result)
    }

    pub async fn model_info(&self) -> Result<ModelInfo, PredictionError> {
        self.get_json("model-info").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PredictionError> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;

        read_json(&url, response).await
    }
}

#[async_trait]
impl Predictor for PredictionClient {
    async fn predict(&self, answers: &AnswerVector) -> Result<PredictionResult, PredictionError> {
        self.predict_personality(answers).await
    }

    async fn feature_importance(&self) -> Result<FeatureImportance, PredictionError> {
        self.get_json("feature-importance").await
    }
}

fn classify_send_error(url: &str, e: reqwest::Error) -> PredictionError {
    if e.is_builder() {
        error!("İstek oluşturulamadı ({}): {}", url, e);
        return PredictionError::Request(e.to_string());
    }
    error!(
        "Yanıt alınamadı ({}): {} (timeout: {}, connect: {})",
        url,
        e,
        e.is_timeout(),
        e.is_connect()
    );
    PredictionError::Unreachable
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, PredictionError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("API hatası ({}) {}: {}", status.as_u16(), url, body);
        return Err(PredictionError::Server {
            status: status.as_u16(),
            detail: extract_detail(&body),
        });
    }

    let body = response.text().await.map_err(|e| {
        error!("Yanıt okunamadı ({}): {}", url, e);
        if e.is_timeout() {
            PredictionError::Unreachable
        } else {
            PredictionError::Request(e.to_string())
        }
    })?;

    serde_json::from_str(&body).map_err(|e| {
        error!("Yanıt çözümlenemedi ({}): {} / {}", url, e, body);
        PredictionError::Request(e.to_string())
    })
}

/// `detail` field of an error body, or the generic fallback.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("detail").cloned())
        .and_then(|detail| match detail {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| UNKNOWN_ERROR_DETAIL.to_string())
}
