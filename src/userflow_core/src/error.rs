use thiserror::Error;

/// Errors raised while building user-flow responses.
///
/// `InvalidArgument` and `InvalidBody` come from bad input and are surfaced to
/// the calling handler, which decides whether to answer with a validation
/// error or abort. `Serialization` is never expected once a value has been
/// constructed and is treated as an internal failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserFlowError {
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: &'static str,
    },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Failed to serialize response: {0}")]
    Serialization(String),
}

impl UserFlowError {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: &'static str) -> Self {
        UserFlowError::InvalidArgument { parameter, reason }
    }

    /// True for errors caused by caller input rather than by the encoder itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            UserFlowError::InvalidArgument { .. } | UserFlowError::InvalidBody(_)
        )
    }
}

impl From<serde_json::Error> for UserFlowError {
    fn from(error: serde_json::Error) -> Self {
        UserFlowError::Serialization(error.to_string())
    }
}
