//! Axum webhook routes.
//!
//! Each route reads the raw body, decides on an outcome, and hands it to a
//! framework-agnostic responder from `userflow_adapters::handlers`.

pub mod attribute_collection_start;
pub mod attribute_collection_submit;
pub mod error;
pub mod signup_before_create;

pub use attribute_collection_start::attribute_collection_start;
pub use attribute_collection_submit::attribute_collection_submit;
pub use error::RouteError;
pub use signup_before_create::signup_before_create;

pub const SIGNUP_BEFORE_CREATE_PATH: &str = "/api/b2c/signup-before-create";
pub const ATTRIBUTE_COLLECTION_START_PATH: &str = "/api/entra/attribute-collection-start";
pub const ATTRIBUTE_COLLECTION_SUBMIT_PATH: &str = "/api/entra/attribute-collection-submit";
