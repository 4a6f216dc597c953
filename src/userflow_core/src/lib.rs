pub mod actions;
pub mod api_connector;
pub mod body;
pub mod claim_key;
pub mod envelope;
pub mod error;
pub mod http_abstraction;
pub mod message;
pub mod protocol;

// Re-export commonly used types for convenience
pub use actions::{AttributeErrors, AttributeValues, BlockPage, StartAction, SubmitAction};

pub use api_connector::{API_VERSION, ApiConnectorAction, ApiConnectorResponse, Claims};

pub use body::{RequestBody, find_ignore_case, get_object, get_string, parse_body};

pub use claim_key::{build_extension_claim_key, extension_key, try_build_extension_claim_key};

pub use envelope::{
    AttributeCollectionStart, AttributeCollectionSubmit, ExtensionEvent, ResponseEnvelope,
    encode_start, encode_submit,
};

pub use error::UserFlowError;
pub use message::UserMessage;

pub use http_abstraction::{FlowRequest, FlowResponseBuilder, FlowResponseHelpers};
