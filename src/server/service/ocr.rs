//! Plate recognition backends.
//!
//! Text recognition runs in an external service. The gate validation only needs raw text
//! candidates back; turning them into a plate is done by [`crate::server::util::plate`].

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::server::error::AppError;

/// Reads text from a camera frame.
#[async_trait]
pub trait PlateRecognizer: Send + Sync {
    /// Returns every piece of text found in the image, in reading order.
    async fn read_text(&self, image: &[u8]) -> Result<Vec<String>, AppError>;
}

#[derive(Serialize)]
struct RecognizeRequest {
    image_base64: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    texts: Vec<String>,
}

/// Recognizer backed by an HTTP OCR service.
///
/// Posts `{"image_base64": "..."}` and expects `{"texts": ["...", ...]}` back.
pub struct HttpPlateRecognizer {
    client: reqwest::Client,
    url: String,
}

impl HttpPlateRecognizer {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl PlateRecognizer for HttpPlateRecognizer {
    async fn read_text(&self, image: &[u8]) -> Result<Vec<String>, AppError> {
        let response = self
            .client
            .post(&self.url)
            .json(&RecognizeRequest {
                image_base64: STANDARD.encode(image),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<RecognizeResponse>()
            .await?;

        tracing::debug!("OCR service returned {} text candidates", response.texts.len());

        Ok(response.texts)
    }
}

/// Recognizer used when no OCR service is configured. Every scan fails to read.
pub struct DisabledRecognizer;

#[async_trait]
impl PlateRecognizer for DisabledRecognizer {
    async fn read_text(&self, _image: &[u8]) -> Result<Vec<String>, AppError> {
        Ok(Vec::new())
    }
}

/// Recognizer returning fixed text, for tests.
#[cfg(test)]
pub struct StaticRecognizer {
    texts: Vec<String>,
}

#[cfg(test)]
impl StaticRecognizer {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            texts: texts.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PlateRecognizer for StaticRecognizer {
    async fn read_text(&self, _image: &[u8]) -> Result<Vec<String>, AppError> {
        Ok(self.texts.clone())
    }
}

/// Recognizer that always errors, for tests.
#[cfg(test)]
pub struct FailingRecognizer;

#[cfg(test)]
#[async_trait]
impl PlateRecognizer for FailingRecognizer {
    async fn read_text(&self, _image: &[u8]) -> Result<Vec<String>, AppError> {
        Err(AppError::InternalError("OCR service unreachable".to_string()))
    }
}
