use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification returned by the prediction service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    #[serde(rename = "Real News")]
    Real,
    #[serde(rename = "Fake News")]
    Fake,
}

impl Verdict {
    /// The service answers `1` for real news; anything else counts as fake.
    pub fn from_prediction(prediction: i64) -> Verdict {
        if prediction == 1 {
            Verdict::Real
        } else {
            Verdict::Fake
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Real => "Real News",
            Verdict::Fake => "Fake News",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::Real => "This article appears to be genuine.",
            Verdict::Fake => "This article may contain false information.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user query and the label it got back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub content: String,
    pub result: Verdict,
}

impl SearchRecord {
    pub fn new(content: String, result: Verdict) -> SearchRecord {
        SearchRecord { content, result }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PredictResponse {
    pub prediction: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccuracyResponse {
    pub accuracy: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusResponse {
    pub message: String,
}
