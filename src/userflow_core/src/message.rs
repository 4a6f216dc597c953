use serde::Serialize;

use crate::error::UserFlowError;

/// A message shown to the end user: never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserMessage(String);

impl UserMessage {
    pub(crate) fn parse(
        value: impl Into<String>,
        parameter: &'static str,
    ) -> Result<Self, UserFlowError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(UserFlowError::invalid_argument(parameter, "cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for UserMessage {
    type Error = UserFlowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value, "message")
    }
}

impl TryFrom<&str> for UserMessage {
    type Error = UserFlowError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value, "message")
    }
}

impl AsRef<str> for UserMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
