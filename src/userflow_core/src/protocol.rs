//! Wire-level names for the user-flow webhook contracts.
//!
//! Property names and `@odata.type` discriminators are dictated by the identity
//! platform and compared case-sensitively by its parser.

/// JSON property names used in Start/Submit payloads.
pub mod json {
    /// OData discriminator property name.
    pub const ODATA_TYPE: &str = "@odata.type";
    /// Envelope property that contains the response data.
    pub const DATA: &str = "data";
    /// List of action objects.
    pub const ACTIONS: &str = "actions";
    /// Inputs to prefill on the Start page.
    pub const INPUTS: &str = "inputs";
    /// Attribute values to modify on Submit.
    pub const ATTRIBUTES: &str = "attributes";
    /// Optional title of a block page.
    pub const TITLE: &str = "title";
    /// Message text for block pages and validation errors.
    pub const MESSAGE: &str = "message";
    /// Per-attribute error messages keyed by attribute name.
    pub const ATTRIBUTE_ERRORS: &str = "attributeErrors";
}

/// `@odata.type` values used in the Start/Submit response contract.
pub mod odata {
    /// Discriminators of the `data` envelope.
    pub mod data {
        pub const START: &str = "microsoft.graph.onAttributeCollectionStartResponseData";
        pub const SUBMIT: &str = "microsoft.graph.onAttributeCollectionSubmitResponseData";
    }

    /// Discriminators of the action objects.
    pub mod actions {
        pub const START_CONTINUE: &str =
            "microsoft.graph.attributeCollectionStart.continueWithDefaultBehavior";
        pub const START_PREFILL: &str = "microsoft.graph.attributeCollectionStart.setPrefillValues";
        pub const START_BLOCK: &str = "microsoft.graph.attributeCollectionStart.showBlockPage";

        pub const SUBMIT_CONTINUE: &str =
            "microsoft.graph.attributeCollectionSubmit.continueWithDefaultBehavior";
        pub const SUBMIT_MODIFY: &str =
            "microsoft.graph.attributeCollectionSubmit.modifyAttributeValues";
        pub const SUBMIT_VALIDATE: &str =
            "microsoft.graph.attributeCollectionSubmit.showValidationError";
        pub const SUBMIT_BLOCK: &str = "microsoft.graph.attributeCollectionSubmit.showBlockPage";
    }
}

/// Property names and values of the flat API connector contract.
pub mod api_connector {
    pub const VERSION: &str = "version";
    pub const ACTION: &str = "action";
    pub const STATUS: &str = "status";
    pub const USER_MESSAGE: &str = "userMessage";

    pub const CONTINUE: &str = "Continue";
    pub const SHOW_BLOCK_PAGE: &str = "ShowBlockPage";
    pub const VALIDATION_ERROR: &str = "ValidationError";
}

/// Media type of every response body.
pub const APPLICATION_JSON: &str = "application/json";
