use serde::{Deserialize, Serialize};

/// A single candidate condition returned by the diagnosis service.
///
/// Instances are only decoded from service responses; the UI stores and
/// renders them as-is, in the order the service ranked them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub label: String,
    pub probability: f64,
}

impl DiagnosisResult {
    /// Probability formatted for display, e.g. `0.8421` -> `"84.21%"`.
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

/// Request body for `POST {base_url}/dx/send_text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DxRequest {
    pub symptoms: String,
}

/// Response body from the diagnosis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DxResponse {
    pub predictions: Vec<DiagnosisResult>,
}
