//! Response envelopes for the Start and Submit events.
//!
//! ```text
//! { "data": { "@odata.type": "<event>ResponseData",
//!             "actions": [ { "@odata.type": "<action>", ... } ] } }
//! ```
//!
//! The event kind is a type parameter: the envelope discriminator comes from
//! it and the action list only accepts that event's actions, so a Submit-only
//! action handed to [`encode_start`] is a compile error.

use std::fmt::Debug;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    actions::{StartAction, SubmitAction},
    error::UserFlowError,
    protocol::{json, odata},
};

/// An attribute-collection event the platform calls the webhook for.
pub trait ExtensionEvent: Debug + Clone + PartialEq {
    /// `@odata.type` of the `data` object.
    const ODATA_TYPE: &'static str;

    /// The actions that may be returned for this event.
    type Action: Serialize + Debug + Clone + PartialEq;
}

/// `OnAttributeCollectionStart`: before the attribute page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeCollectionStart;

impl ExtensionEvent for AttributeCollectionStart {
    const ODATA_TYPE: &'static str = odata::data::START;
    type Action = StartAction;
}

/// `OnAttributeCollectionSubmit`: after the user submits the attribute page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeCollectionSubmit;

impl ExtensionEvent for AttributeCollectionSubmit {
    const ODATA_TYPE: &'static str = odata::data::SUBMIT;
    type Action = SubmitAction;
}

/// The `{ "data": ... }` body returned for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<E: ExtensionEvent> {
    actions: Vec<E::Action>,
}

impl<E: ExtensionEvent> ResponseEnvelope<E> {
    /// Envelope with an ordered list of actions. The platform acts on the
    /// first one; a single action is the common case.
    ///
    /// The list only accepts the event's own actions:
    ///
    /// ```compile_fail
    /// use userflow_core::{AttributeCollectionStart, ResponseEnvelope, SubmitAction};
    ///
    /// let _ = ResponseEnvelope::<AttributeCollectionStart>::new(vec![
    ///     SubmitAction::continue_with_default_behavior(),
    /// ]);
    /// ```
    ///
    /// ```compile_fail
    /// use userflow_core::{AttributeCollectionSubmit, ResponseEnvelope, StartAction};
    ///
    /// let _ = ResponseEnvelope::<AttributeCollectionSubmit>::new(Vec::new())
    ///     .with_action(StartAction::continue_with_default_behavior());
    /// ```
    pub fn new(actions: Vec<E::Action>) -> Self {
        Self { actions }
    }

    pub fn with_action(mut self, action: E::Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn odata_type(&self) -> &'static str {
        E::ODATA_TYPE
    }

    pub fn actions(&self) -> &[E::Action] {
        &self.actions
    }

    /// Serialize the envelope to its wire form.
    ///
    /// Failure here means an encoder defect, not bad input.
    pub fn to_json(&self) -> Result<String, UserFlowError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<E: ExtensionEvent> Serialize for ResponseEnvelope<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            json::DATA,
            &ResponseData {
                odata_type: E::ODATA_TYPE,
                actions: &self.actions,
            },
        )?;
        map.end()
    }
}

struct ResponseData<'a, A> {
    odata_type: &'static str,
    actions: &'a [A],
}

impl<A: Serialize> Serialize for ResponseData<'_, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(json::ODATA_TYPE, self.odata_type)?;
        map.serialize_entry(json::ACTIONS, self.actions)?;
        map.end()
    }
}

/// Wrap a Start action in its envelope.
///
/// ```
/// use userflow_core::{StartAction, encode_start};
///
/// let envelope = encode_start(StartAction::continue_with_default_behavior());
/// assert_eq!(
///     envelope.odata_type(),
///     "microsoft.graph.onAttributeCollectionStartResponseData"
/// );
/// ```
///
/// Submit actions are rejected at compile time:
///
/// ```compile_fail
/// use userflow_core::{AttributeValues, SubmitAction, encode_start};
///
/// encode_start(SubmitAction::modify_attribute_values(AttributeValues::new()));
/// ```
pub fn encode_start(action: StartAction) -> ResponseEnvelope<AttributeCollectionStart> {
    ResponseEnvelope::new(vec![action])
}

/// Wrap a Submit action in its envelope.
///
/// ```compile_fail
/// use userflow_core::{AttributeValues, StartAction, encode_submit};
///
/// encode_submit(StartAction::set_prefill_values(AttributeValues::new()));
/// ```
pub fn encode_submit(action: SubmitAction) -> ResponseEnvelope<AttributeCollectionSubmit> {
    ResponseEnvelope::new(vec![action])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::AttributeValues;
    use quickcheck_macros::quickcheck;
    use serde_json::{Value, json};

    fn parse(envelope_json: &str) -> Value {
        serde_json::from_str(envelope_json).unwrap()
    }

    #[test]
    fn test_start_continue_uses_correct_discriminators() {
        let json = encode_start(StartAction::continue_with_default_behavior())
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            r#"{"data":{"@odata.type":"microsoft.graph.onAttributeCollectionStartResponseData","actions":[{"@odata.type":"microsoft.graph.attributeCollectionStart.continueWithDefaultBehavior"}]}}"#
        );
    }

    #[test]
    fn test_submit_continue_uses_correct_discriminators() {
        let value = parse(
            &encode_submit(SubmitAction::continue_with_default_behavior())
                .to_json()
                .unwrap(),
        );

        assert_eq!(
            value["data"]["@odata.type"],
            "microsoft.graph.onAttributeCollectionSubmitResponseData"
        );
        assert_eq!(
            value["data"]["actions"][0]["@odata.type"],
            "microsoft.graph.attributeCollectionSubmit.continueWithDefaultBehavior"
        );
    }

    #[test]
    fn test_prefill_envelope_nests_inputs_in_action() {
        let mut inputs = AttributeValues::new();
        inputs.insert("city".to_string(), json!("Oslo"));

        let value = parse(
            &encode_start(StartAction::set_prefill_values(inputs))
                .to_json()
                .unwrap(),
        );
        let action = &value["data"]["actions"][0];

        assert_eq!(action["inputs"]["city"], "Oslo");
        assert!(action.get("title").is_none());
        assert!(action.get("message").is_none());
    }

    #[test]
    fn test_block_page_without_title_has_no_title_property() {
        let envelope = encode_submit(SubmitAction::show_block_page("msg", None).unwrap());
        let value = parse(&envelope.to_json().unwrap());

        let action = value["data"]["actions"][0].as_object().unwrap();
        assert!(!action.contains_key("title"));
        assert_eq!(action["message"], "msg");
    }

    #[test]
    fn test_envelope_can_carry_several_actions_in_order() {
        let envelope = ResponseEnvelope::<AttributeCollectionStart>::new(Vec::new())
            .with_action(StartAction::show_block_page("first", None).unwrap())
            .with_action(StartAction::continue_with_default_behavior());

        assert_eq!(envelope.actions().len(), 2);
        let value = parse(&envelope.to_json().unwrap());
        assert_eq!(value["data"]["actions"][0]["message"], "first");
        assert_eq!(
            value["data"]["actions"][1]["@odata.type"],
            "microsoft.graph.attributeCollectionStart.continueWithDefaultBehavior"
        );
    }

    #[test]
    fn test_envelope_discriminator_comes_from_event() {
        assert_eq!(
            encode_start(StartAction::continue_with_default_behavior()).odata_type(),
            odata::data::START
        );
        assert_eq!(
            encode_submit(SubmitAction::continue_with_default_behavior()).odata_type(),
            odata::data::SUBMIT
        );
    }

    #[quickcheck]
    fn prop_encoding_is_byte_stable(entries: Vec<(String, String)>) -> bool {
        let attributes: AttributeValues = entries
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();
        let envelope = encode_submit(SubmitAction::modify_attribute_values(attributes));

        envelope.to_json().unwrap() == envelope.clone().to_json().unwrap()
    }
}
