//! Actions returned to the identity platform for the Start and Submit events.
//!
//! Each event has its own closed set of actions, so an action that is only
//! legal for Submit cannot be placed in a Start envelope. The `@odata.type`
//! discriminator is derived from the variant and cannot be supplied by callers.
//!
//! Serialization is written by hand: optional properties are emitted only when
//! they hold a value, never as `null` or `""`.

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use crate::{
    error::UserFlowError,
    message::UserMessage,
    protocol::{json, odata},
};

/// Attribute name to value, in insertion order.
pub type AttributeValues = serde_json::Map<String, serde_json::Value>;

/// Attribute name to error message shown next to the field.
///
/// Entries are emitted in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeErrors(serde_json::Map<String, Value>);

impl AttributeErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for `attribute`, replacing any earlier one in place.
    pub fn insert(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.0.insert(attribute.into(), Value::String(message.into()));
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Payload of a block page action, shared by Start and Submit.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPage {
    message: UserMessage,
    title: Option<String>,
}

impl BlockPage {
    /// A blank `title` is treated as no title.
    pub fn new(message: impl Into<String>, title: Option<String>) -> Result<Self, UserFlowError> {
        Ok(Self {
            message: UserMessage::try_from(message.into())?,
            title: title.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn message(&self) -> &UserMessage {
        &self.message
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(title) = &self.title {
            map.serialize_entry(json::TITLE, title)?;
        }
        map.serialize_entry(json::MESSAGE, &self.message)
    }
}

/// Actions accepted in response to `OnAttributeCollectionStart`.
#[derive(Debug, Clone, PartialEq)]
pub enum StartAction {
    ContinueWithDefaultBehavior,
    SetPrefillValues { inputs: AttributeValues },
    ShowBlockPage(BlockPage),
}

impl StartAction {
    pub fn continue_with_default_behavior() -> Self {
        StartAction::ContinueWithDefaultBehavior
    }

    /// Prefill input values before the attribute page renders.
    pub fn set_prefill_values(inputs: AttributeValues) -> Self {
        StartAction::SetPrefillValues { inputs }
    }

    pub fn show_block_page(
        message: impl Into<String>,
        title: Option<String>,
    ) -> Result<Self, UserFlowError> {
        Ok(StartAction::ShowBlockPage(BlockPage::new(message, title)?))
    }

    pub fn odata_type(&self) -> &'static str {
        match self {
            StartAction::ContinueWithDefaultBehavior => odata::actions::START_CONTINUE,
            StartAction::SetPrefillValues { .. } => odata::actions::START_PREFILL,
            StartAction::ShowBlockPage(_) => odata::actions::START_BLOCK,
        }
    }
}

impl Serialize for StartAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(json::ODATA_TYPE, self.odata_type())?;

        match self {
            StartAction::ContinueWithDefaultBehavior => {}
            StartAction::SetPrefillValues { inputs } => {
                map.serialize_entry(json::INPUTS, inputs)?;
            }
            StartAction::ShowBlockPage(page) => page.serialize_fields(&mut map)?,
        }

        map.end()
    }
}

/// Actions accepted in response to `OnAttributeCollectionSubmit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    ContinueWithDefaultBehavior,
    ModifyAttributeValues {
        attributes: AttributeValues,
    },
    ShowValidationError {
        message: UserMessage,
        attribute_errors: AttributeErrors,
    },
    ShowBlockPage(BlockPage),
}

impl SubmitAction {
    pub fn continue_with_default_behavior() -> Self {
        SubmitAction::ContinueWithDefaultBehavior
    }

    /// Override submitted values (e.g. normalize casing) and continue.
    pub fn modify_attribute_values(attributes: AttributeValues) -> Self {
        SubmitAction::ModifyAttributeValues { attributes }
    }

    /// Keep the attribute page displayed with a top-level message and
    /// optional per-field messages.
    pub fn show_validation_error(
        message: impl Into<String>,
        attribute_errors: Option<AttributeErrors>,
    ) -> Result<Self, UserFlowError> {
        Ok(SubmitAction::ShowValidationError {
            message: UserMessage::try_from(message.into())?,
            attribute_errors: attribute_errors.unwrap_or_default(),
        })
    }

    pub fn show_block_page(
        message: impl Into<String>,
        title: Option<String>,
    ) -> Result<Self, UserFlowError> {
        Ok(SubmitAction::ShowBlockPage(BlockPage::new(message, title)?))
    }

    pub fn odata_type(&self) -> &'static str {
        match self {
            SubmitAction::ContinueWithDefaultBehavior => odata::actions::SUBMIT_CONTINUE,
            SubmitAction::ModifyAttributeValues { .. } => odata::actions::SUBMIT_MODIFY,
            SubmitAction::ShowValidationError { .. } => odata::actions::SUBMIT_VALIDATE,
            SubmitAction::ShowBlockPage(_) => odata::actions::SUBMIT_BLOCK,
        }
    }
}

impl Serialize for SubmitAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(json::ODATA_TYPE, self.odata_type())?;

        match self {
            SubmitAction::ContinueWithDefaultBehavior => {}
            SubmitAction::ModifyAttributeValues { attributes } => {
                map.serialize_entry(json::ATTRIBUTES, attributes)?;
            }
            SubmitAction::ShowValidationError {
                message,
                attribute_errors,
            } => {
                map.serialize_entry(json::MESSAGE, message)?;
                map.serialize_entry(json::ATTRIBUTE_ERRORS, attribute_errors)?;
            }
            SubmitAction::ShowBlockPage(page) => page.serialize_fields(&mut map)?,
        }

        map.end()
    }
}
