pub const VALIDATION_MESSAGE: &str = "Please select an image first";
pub const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Messages browsers use when `fetch` itself fails (Chromium, Firefox, Safari).
const FETCH_FAILURE_MESSAGES: [&str; 3] = [
    "Failed to fetch",
    "NetworkError when attempting to fetch resource.",
    "Load failed",
];

/// Everything that can go wrong between pressing "Analyze" and seeing a result.
/// The `Display` text is what the user reads in the error banner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    #[error("{}", NETWORK_MESSAGE)]
    Network,
    #[error("{}", server_message(.status, .status_text))]
    Server { status: u16, status_text: String },
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
    #[error("{}", unknown_message(.0))]
    Unknown(Option<String>),
}

fn server_message(status: &u16, status_text: &str) -> String {
    format!("Server error: {} {}", status, status_text.trim())
        .trim_end()
        .to_string()
}

fn unknown_message(message: &Option<String>) -> &str {
    match message.as_deref() {
        Some(message) if !message.trim().is_empty() => message,
        _ => GENERIC_FAILURE_MESSAGE,
    }
}

impl AppError {
    /// Classifies a fetch-level failure by its message. Only the browsers'
    /// "could not reach the server" messages count as network errors.
    pub fn from_transport_message(message: &str) -> Self {
        if FETCH_FAILURE_MESSAGES.contains(&message.trim()) {
            Self::Network
        } else {
            Self::Unknown(Some(message.to_string()))
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_exact() {
        assert_eq!(AppError::Validation.user_message(), "Please select an image first");
    }

    #[test]
    fn fetch_failures_become_network_errors() {
        for message in FETCH_FAILURE_MESSAGES {
            assert_eq!(AppError::from_transport_message(message), AppError::Network);
        }
        assert_eq!(
            AppError::from_transport_message("Failed to fetch").to_string(),
            "Network error. Please check your internet connection."
        );
    }

    #[test]
    fn other_transport_failures_keep_their_message() {
        let err = AppError::from_transport_message("FormData unavailable");
        assert_eq!(err, AppError::Unknown(Some("FormData unavailable".into())));
        assert_eq!(err.to_string(), "FormData unavailable");
    }

    #[test]
    fn server_error_carries_status() {
        let err = AppError::Server {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "Server error: 500 Internal Server Error");

        let err = AppError::Server {
            status: 503,
            status_text: String::new(),
        };
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn unknown_error_falls_back_to_generic_message() {
        assert_eq!(AppError::Unknown(None).to_string(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(AppError::Unknown(Some("  ".into())).to_string(), GENERIC_FAILURE_MESSAGE);
    }
}
