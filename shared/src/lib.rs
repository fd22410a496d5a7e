//! Platform-independent core of the Tamatar leaf disease client: the
//! prediction model, the API client, and the picker and shell state machines.

pub mod capture;
pub mod client;
pub mod config;
pub mod error;
pub mod prediction;
pub mod shell;

pub use client::{ApiClient, PredictionService, RawResponse, Transport, TransportError};
pub use config::ApiConfig;
pub use error::AppError;
pub use prediction::{ConfidenceTier, Prediction};
pub use shell::{Effect, Msg, Phase, Shell};
