pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod history;
pub mod render;
pub mod session;
pub mod storage;

pub use client::{PredictionService, VerifierClient};
pub use data_models::{SearchRecord, Verdict};
pub use error::{Result, VerifierError};
pub use session::Session;
