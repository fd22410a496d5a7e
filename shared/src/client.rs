use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::prediction::Prediction;

pub const IMAGE_FIELD: &str = "image";

/// Status line and body of an HTTP response, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// The request never produced a response (offline, DNS, CORS, aborted).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// HTTP capability the client runs on. The browser build implements it with
/// `fetch`; tests implement it in memory.
#[async_trait(?Send)]
pub trait Transport {
    type Upload;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        upload: &Self::Upload,
    ) -> Result<RawResponse, TransportError>;

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// What the application shell needs from the outside world.
#[async_trait(?Send)]
pub trait PredictionService {
    type Image;

    async fn predict(&self, image: &Self::Image) -> Result<Prediction, AppError>;
}

pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub async fn predict_disease(&self, image: &T::Upload) -> Result<Prediction, AppError> {
        let url = self.config.predict_url();
        log::info!("POST {}", url);

        let response = self
            .transport
            .post_multipart(&url, IMAGE_FIELD, image)
            .await
            .map_err(|err| {
                log::error!("Prediction request failed: {}", err);
                AppError::from_transport_message(&err.message)
            })?;

        interpret_prediction(response)
    }

    /// True iff `GET /health` answers with a 2xx. Transport failures count
    /// as unhealthy.
    pub async fn check_api_health(&self) -> bool {
        let url = self.config.health_url();
        match self.transport.get(&url).await {
            Ok(response) => {
                log::debug!("Health check returned {}", response.status);
                response.ok()
            }
            Err(err) => {
                log::warn!("Health check failed: {}", err);
                false
            }
        }
    }
}

#[async_trait(?Send)]
impl<T: Transport> PredictionService for ApiClient<T> {
    type Image = T::Upload;

    async fn predict(&self, image: &Self::Image) -> Result<Prediction, AppError> {
        self.predict_disease(image).await
    }
}

pub fn interpret_prediction(response: RawResponse) -> Result<Prediction, AppError> {
    if !response.ok() {
        log::warn!(
            "Server error: {} {} - {}",
            response.status,
            response.status_text,
            response.body
        );
        return Err(AppError::Server {
            status: response.status,
            status_text: response.status_text,
        });
    }

    serde_json::from_str::<Prediction>(&response.body).map_err(|err| {
        log::error!("Failed to parse response: {}", err);
        AppError::InvalidResponse(err.to_string())
    })
}
