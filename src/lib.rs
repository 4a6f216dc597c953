//! # Userflow - identity platform user-flow webhook toolkit
//!
//! Facade crate re-exporting the public APIs of the user-flow components:
//! response encoders for the API connector and for the Start/Submit custom
//! authentication extension events, the claim key builder, Basic auth, and
//! an Axum service exposing the sample webhook routes.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! userflow = { path = "../userflow" }
//! ```
//!
//! ## Structure
//!
//! - **Encoders**: `ResponseEnvelope`, `StartAction`, `SubmitAction`, `ApiConnectorResponse`
//! - **Claim keys**: `build_extension_claim_key`, `try_build_extension_claim_key`
//! - **Responders**: framework-agnostic handlers writing through `FlowResponseBuilder`
//! - **Service**: `UserFlowService` - Axum router with the webhook routes

// ============================================================================
// Core Encoding
// ============================================================================

/// Response encoders, action model and protocol constants
pub mod core {
    pub use userflow_core::*;
}

// Re-export most commonly used core types at the root level
pub use userflow_core::{
    ApiConnectorAction, ApiConnectorResponse, AttributeCollectionStart,
    AttributeCollectionSubmit, AttributeErrors, AttributeValues, BlockPage, Claims,
    ExtensionEvent, ResponseEnvelope, StartAction, SubmitAction, UserFlowError, UserMessage,
    build_extension_claim_key, encode_start, encode_submit, try_build_extension_claim_key,
};

// ============================================================================
// Adapters
// ============================================================================

/// Framework-agnostic adapters
pub mod adapters {
    /// Responders writing encoded bodies through a response builder
    pub mod handlers {
        pub use userflow_adapters::handlers::*;
    }

    /// Basic authentication
    pub mod auth {
        pub use userflow_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use userflow_adapters::config::*;
    }
}

pub use userflow_adapters::{
    auth::{BasicAuthCredentials, BasicAuthError, BasicAuthValidator},
    config::ServiceSettings,
};

// ============================================================================
// Axum Integration
// ============================================================================

pub mod axum_adapters {
    pub use userflow_axum::*;
}

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

/// Webhook service
pub use userflow_service::UserFlowService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
