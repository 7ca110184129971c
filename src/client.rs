//! HTTP client for the remote prediction service.
//!
//! The service exposes two documented endpoints, `GET /accuracy` and
//! `POST /predict`, plus a banner at `GET /`. All network access goes through
//! [`PredictionService`] so the session can run against a fake.

use std::future::Future;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::data_models::{
    AccuracyResponse, PredictRequest, PredictResponse, StatusResponse, Verdict,
};
use crate::error::{Result, VerifierError};

pub trait PredictionService: Send + Sync {
    /// Historical model accuracy as a fraction between 0 and 1.
    fn fetch_accuracy(&self) -> impl Future<Output = Result<f64>> + Send;

    /// Classify a piece of article text.
    fn predict(&self, text: &str) -> impl Future<Output = Result<Verdict>> + Send;
}

pub struct VerifierClient {
    base_url: String,
    client: Client,
}

impl VerifierClient {
    pub fn new(api_uri: &str) -> Result<Self> {
        Ok(Self {
            base_url: api_uri.trim_end_matches('/').to_string(),
            client: Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Banner served at the service root.
    pub async fn health(&self) -> Result<String> {
        let endpoint = self.endpoint("");
        let res = self.client.get(&endpoint).send().await?;
        let body: StatusResponse = read_json(&endpoint, res).await?;
        Ok(body.message)
    }
}

impl PredictionService for VerifierClient {
    async fn fetch_accuracy(&self) -> Result<f64> {
        let endpoint = self.endpoint("accuracy");
        log::debug!("fetching accuracy from {endpoint}");
        let res = self.client.get(&endpoint).send().await?;
        let body: AccuracyResponse = read_json(&endpoint, res).await?;
        Ok(body.accuracy)
    }

    async fn predict(&self, text: &str) -> Result<Verdict> {
        let endpoint = self.endpoint("predict");
        log::debug!("posting {} bytes to {endpoint}", text.len());
        let payload = PredictRequest {
            text: text.to_string(),
        };
        let res = self.client.post(&endpoint).json(&payload).send().await?;
        let body: PredictResponse = read_json(&endpoint, res).await?;
        Ok(Verdict::from_prediction(body.prediction))
    }
}

async fn read_json<T: DeserializeOwned>(endpoint: &str, res: Response) -> Result<T> {
    let status = res.status();
    if !status.is_success() {
        return Err(VerifierError::Status {
            endpoint: endpoint.to_string(),
            status,
        });
    }
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = VerifierClient::new("http://localhost:7000///").unwrap();
        assert_eq!(client.base_url(), "http://localhost:7000");
        assert_eq!(client.endpoint("predict"), "http://localhost:7000/predict");
        assert_eq!(client.endpoint("/accuracy"), "http://localhost:7000/accuracy");
    }

    #[test]
    fn root_endpoint_keeps_single_slash() {
        let client = VerifierClient::new("http://localhost:7000").unwrap();
        assert_eq!(client.endpoint(""), "http://localhost:7000/");
    }
}
