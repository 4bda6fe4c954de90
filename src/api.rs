/// Remote prediction service client
///
/// The client uploads the selected image as a multipart POST to
/// `{API_BASE}/predict/` and expects a JSON verdict back. The base URL comes
/// from the DETECTOR_API_URL environment variable, falling back to the local
/// development server.

use serde::Deserialize;
use thiserror::Error;

use crate::state::selection::SelectedImage;

/// Where requests go when DETECTOR_API_URL is not set
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Base URL of the prediction service.
/// Missing configuration is not an error; local development is the default.
pub fn api_base() -> String {
    std::env::var("DETECTOR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Verdict returned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Prediction {
    pub is_fake: bool,
    pub confidence: f32,
}

impl Prediction {
    /// Confidence as a whole percentage, rounded to nearest
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }

    /// Headline verdict for the result card
    pub fn verdict(&self) -> &'static str {
        if self.is_fake {
            "Deepfake Detected"
        } else {
            "Authentic Image"
        }
    }
}

/// Ways a prediction request can fail once it leaves the client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure: the service could not be reached at all
    #[error("Could not reach the detection server. Is it running? ({0})")]
    Network(String),

    /// The service answered with a non-success HTTP status
    #[error("The detection server returned an error (HTTP {0}).")]
    Server(u16),

    /// Success status but the body was not a well-formed verdict
    #[error("Unexpected response from the detection server: {0}")]
    Protocol(String),
}

fn endpoint(base: &str) -> String {
    format!("{}/predict/", base.trim_end_matches('/'))
}

/// Upload an image and await its verdict.
///
/// Exactly one request per call, no retries. A response that parses but
/// carries a confidence outside [0, 1] is treated as a protocol error
/// rather than surfaced as a half-valid verdict.
pub async fn predict(base: String, image: SelectedImage) -> Result<Prediction, ApiError> {
    let part = reqwest::multipart::Part::bytes(image.bytes().as_ref().clone())
        .file_name(image.name().to_string())
        .mime_str(image.mime())
        .map_err(|e| ApiError::Protocol(format!("invalid MIME type {:?}: {}", image.mime(), e)))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::new();
    let response = client
        .post(endpoint(&base))
        .multipart(form)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        // The body is not consulted on a failed status
        return Err(ApiError::Server(status.as_u16()));
    }

    let prediction: Prediction = response
        .json()
        .await
        .map_err(|e| ApiError::Protocol(e.to_string()))?;

    if !(0.0..=1.0).contains(&prediction.confidence) {
        return Err(ApiError::Protocol(format!(
            "confidence {} outside the 0.0-1.0 range",
            prediction.confidence
        )));
    }

    Ok(prediction)
}
