use crate::domain::envelope::ApiError;

/// Failure raised while writing or reading a response envelope
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The envelope could not be serialized. Nothing was written to the sink.
    #[error("jsonresp: failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    /// The sink failed after the status code was committed.
    #[error("jsonresp: failed to write response: {0}")]
    Write(#[source] std::io::Error),

    /// The input is not a well-formed envelope.
    #[error("jsonresp: failed to read response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The envelope parsed, but `data` does not fit the requested type.
    #[error("jsonresp: failed to unmarshal response: {0}")]
    Unmarshal(#[source] serde_json::Error),

    /// The envelope carried an `error` object.
    #[error(transparent)]
    Server(#[from] ApiError),

    /// The HTTP client failed before a body was available.
    #[error("jsonresp: failed to fetch response: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CodecError {
    /// The error reported by the server, if this failure is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Server(err) => Some(err),
            _ => None,
        }
    }

    /// Wildcard match against a server-reported error, see [`ApiError::is`].
    /// Local codec failures never match.
    pub fn is(&self, target: &ApiError) -> bool {
        self.api_error().is_some_and(|err| err.is(target))
    }
}

/// Result type for envelope operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Walk an error's source chain looking for an [`ApiError`] matching `target`.
pub fn is_api_error(err: &(dyn std::error::Error + 'static), target: &ApiError) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(api_error) = err.downcast_ref::<ApiError>() {
            if api_error.is(target) {
                return true;
            }
        }
        if let Some(codec_error) = err.downcast_ref::<CodecError>() {
            if codec_error.is(target) {
                return true;
            }
        }
        current = err.source();
    }
    false
}
