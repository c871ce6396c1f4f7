use crate::config::Config;
use crate::models::{DiagnosisResult, DxRequest, DxResponse};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum DxError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("diagnosis service returned status {0}")]
    Status(StatusCode),
    #[error("could not decode diagnosis response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote diagnosis service.
#[derive(Clone)]
pub struct DxClient {
    client: Client,
    base_url: String,
}

impl DxClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Submit a free-text symptom description and return the ranked
    /// predictions in the order the service produced them.
    pub async fn send_text(&self, symptoms: &str) -> Result<Vec<DiagnosisResult>, DxError> {
        let url = format!("{}/dx/send_text", self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&DxRequest {
                symptoms: symptoms.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("diagnosis request failed with status {}", status);
            return Err(DxError::Status(status));
        }

        // Decode from text so a malformed body surfaces as a decode error
        // rather than a transport error.
        let body = response.text().await?;
        let decoded: DxResponse = serde_json::from_str(&body).map_err(|e| {
            error!("could not decode diagnosis response: {}", e);
            e
        })?;

        Ok(decoded.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_stores_base_url() {
        let client = DxClient::new("http://127.0.0.1:8080/api");
        assert_eq!(client.base_url, "http://127.0.0.1:8080/api");
    }
}
