use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during one user action. All variants are
/// recovered at the controller boundary; none propagate past it.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The request could not be sent or the response never arrived.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(StatusCode),

    /// A stream frame carried a payload that is not valid JSON.
    #[error("malformed stream event: {0}")]
    StreamProtocol(#[from] serde_json::Error),

    /// A complete stream frame carried bytes that are not valid UTF-8.
    #[error("malformed stream frame: {0}")]
    FrameEncoding(#[from] std::str::Utf8Error),

    /// The server reported a failure through an `error` field in the stream.
    #[error("{0}")]
    Upstream(String),

    /// The email action was invoked before any result was generated.
    #[error("no insights available to email")]
    MissingResults,
}

impl ControllerError {
    /// Message shown to the user on the error banner or email control.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_mentions_status() {
        let err = ControllerError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn test_upstream_message_is_verbatim() {
        let err = ControllerError::Upstream("model unavailable".to_string());
        assert_eq!(err.user_message(), "model unavailable");
    }

    #[test]
    fn test_stream_protocol_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ControllerError = serde_err.into();
        assert!(matches!(err, ControllerError::StreamProtocol(_)));
        assert!(err.user_message().starts_with("malformed stream event"));
    }

    #[test]
    fn test_frame_encoding_from_utf8_error() {
        let utf8_err = std::str::from_utf8(&[0xE9]).unwrap_err();
        let err: ControllerError = utf8_err.into();
        assert!(matches!(err, ControllerError::FrameEncoding(_)));
        assert!(err.user_message().starts_with("malformed stream frame"));
    }

    #[test]
    fn test_missing_results_message() {
        let err = ControllerError::MissingResults;
        assert_eq!(err.user_message(), "no insights available to email");
    }
}
