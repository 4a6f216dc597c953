//! Responses for the API connector webhook called during account creation.
//!
//! The contract is a flat JSON object:
//!
//! | Action          | HTTP | Body                                                               |
//! |-----------------|------|--------------------------------------------------------------------|
//! | Continue        | 200  | `{"version":"1.0.0","action":"Continue",...claims}`                 |
//! | ShowBlockPage   | 200  | `{"version":"1.0.0","action":"ShowBlockPage","userMessage":"…"}`    |
//! | ValidationError | 400  | `{"version":"1.0.0","status":400,"action":"ValidationError",...}`   |

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{error::UserFlowError, message::UserMessage, protocol::api_connector as wire};

/// Contract version understood by the platform.
pub const API_VERSION: &str = "1.0.0";

/// Claims returned on Continue, merged at the top level of the body.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// The value of the `action` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiConnectorAction {
    Continue,
    ShowBlockPage,
    ValidationError,
}

impl ApiConnectorAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiConnectorAction::Continue => wire::CONTINUE,
            ApiConnectorAction::ShowBlockPage => wire::SHOW_BLOCK_PAGE,
            ApiConnectorAction::ValidationError => wire::VALIDATION_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiConnectorResponse {
    Continue { claims: Claims },
    ShowBlockPage { user_message: UserMessage },
    ValidationError { user_message: UserMessage },
}

impl ApiConnectorResponse {
    /// Let the flow continue, optionally prefilling or overriding claims.
    ///
    /// Claims are written after `version` and `action`, so a claim with one of
    /// those names replaces the contract value. Existing connectors rely on
    /// this merge order; see [`ApiConnectorResponse::overridden_contract_keys`].
    pub fn continue_with(claims: Option<Claims>) -> Self {
        ApiConnectorResponse::Continue {
            claims: claims.unwrap_or_default(),
        }
    }

    /// Stop the flow and show `user_message` on a block page.
    pub fn show_block_page(user_message: impl Into<String>) -> Result<Self, UserFlowError> {
        Ok(ApiConnectorResponse::ShowBlockPage {
            user_message: UserMessage::parse(user_message, "user_message")?,
        })
    }

    /// Keep the attribute page displayed with `user_message`.
    pub fn validation_error(user_message: impl Into<String>) -> Result<Self, UserFlowError> {
        Ok(ApiConnectorResponse::ValidationError {
            user_message: UserMessage::parse(user_message, "user_message")?,
        })
    }

    pub fn action(&self) -> ApiConnectorAction {
        match self {
            ApiConnectorResponse::Continue { .. } => ApiConnectorAction::Continue,
            ApiConnectorResponse::ShowBlockPage { .. } => ApiConnectorAction::ShowBlockPage,
            ApiConnectorResponse::ValidationError { .. } => ApiConnectorAction::ValidationError,
        }
    }

    /// HTTP status; validation errors must also carry it in the body.
    pub fn status(&self) -> u16 {
        match self {
            ApiConnectorResponse::ValidationError { .. } => 400,
            _ => 200,
        }
    }

    /// Contract keys (`version`, `action`) replaced by a Continue claim.
    pub fn overridden_contract_keys(&self) -> Vec<&'static str> {
        match self {
            ApiConnectorResponse::Continue { claims } => [wire::VERSION, wire::ACTION]
                .into_iter()
                .filter(|key| claims.contains_key(*key))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, UserFlowError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ApiConnectorResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiConnectorResponse::Continue { claims } => {
                // Build the merged object first so an overriding claim keeps
                // a single key in the output.
                let mut body = Claims::new();
                body.insert(wire::VERSION.to_string(), API_VERSION.into());
                body.insert(wire::ACTION.to_string(), self.action().as_str().into());
                for (name, value) in claims {
                    body.insert(name.clone(), value.clone());
                }
                body.serialize(serializer)
            }
            ApiConnectorResponse::ShowBlockPage { user_message } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry(wire::VERSION, API_VERSION)?;
                map.serialize_entry(wire::ACTION, self.action().as_str())?;
                map.serialize_entry(wire::USER_MESSAGE, user_message)?;
                map.end()
            }
            ApiConnectorResponse::ValidationError { user_message } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry(wire::VERSION, API_VERSION)?;
                map.serialize_entry(wire::STATUS, &self.status())?;
                map.serialize_entry(wire::ACTION, self.action().as_str())?;
                map.serialize_entry(wire::USER_MESSAGE, user_message)?;
                map.end()
            }
        }
    }
}
