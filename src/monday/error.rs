/// Failures surfaced by a raw GraphQL request
#[derive(Debug, Clone, PartialEq)]
pub enum MondayApiError {
    /// The request could not be sent, or the API answered with a non-2xx status
    Transport {
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },
    /// The response body was not valid JSON
    Decode(String),
}

impl MondayApiError {
    /// Build a transport error for a non-2xx response
    pub fn from_status(status: u16, body: String) -> Self {
        Self::Transport {
            status: Some(status),
            message: format!("HTTP status {}", status),
            body: Some(body),
        }
    }

    /// Convert a reqwest error into a transport error
    pub fn from_reqwest_error(error: reqwest::Error) -> Self {
        tracing::debug!("Raw reqwest error: {:?}", error);

        let kind = if error.is_timeout() {
            "Request timed out"
        } else if error.is_connect() {
            "Connection error"
        } else if error.is_builder() {
            "Invalid request"
        } else if error.is_body() || error.is_decode() {
            "Response body error"
        } else if error.is_redirect() {
            "Redirect error"
        } else {
            "HTTP error"
        };
        let message = format!("{}: {}", kind, error);
        tracing::error!("Error making request to Monday.com API: {}", message);

        Self::Transport {
            status: error.status().map(|s| s.as_u16()),
            message,
            body: None,
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::Decode(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl std::fmt::Display for MondayApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport {
                message,
                body: Some(body),
                ..
            } => write!(f, "Transport error: {} (response: {})", message, body),
            Self::Transport { message, .. } => write!(f, "Transport error: {}", message),
            Self::Decode(msg) => write!(f, "Error decoding JSON response: {}", msg),
        }
    }
}

impl std::error::Error for MondayApiError {}
