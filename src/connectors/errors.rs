use std::fmt;

/// Errors that can occur while talking to the analytics service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// Non-2xx status; message is the response body or the status phrase
    RemoteService { status: u16, message: String },
    /// Request exceeded the configured timeout
    Timeout(String),
    /// Service unreachable (DNS, refused connection, TLS)
    Unreachable(String),
    /// Response body did not match the expected shape
    InvalidResponse(String),
    /// The caller cancelled the request before it completed
    Cancelled,
    /// Internal error in connector
    Internal(String),
}

impl ConnectorError {
    /// Build a `RemoteService` error, falling back to the canonical status
    /// phrase when the body is blank.
    pub fn remote(status: reqwest::StatusCode, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            body.to_string()
        };
        Self::RemoteService {
            status: status.as_u16(),
            message,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoteService { status, message } => {
                write!(f, "Analytics API error {}: {}", status, message)
            }
            Self::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            Self::Unreachable(msg) => write!(f, "Service unreachable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::Cancelled => write!(f, "Request cancelled"),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Unreachable(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_remote_uses_body_when_present() {
        let err = ConnectorError::remote(StatusCode::BAD_REQUEST, "message must not be empty");
        assert_eq!(
            err,
            ConnectorError::RemoteService {
                status: 400,
                message: "message must not be empty".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Analytics API error 400: message must not be empty"
        );
    }

    #[test]
    fn test_remote_falls_back_to_status_phrase() {
        let err = ConnectorError::remote(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(
            err.to_string(),
            "Analytics API error 500: Internal Server Error"
        );
    }

    #[test]
    fn test_cancelled_flag() {
        assert!(ConnectorError::Cancelled.is_cancelled());
        assert!(!ConnectorError::Timeout("slow".to_string()).is_cancelled());
    }
}
