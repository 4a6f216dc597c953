//! Axum integration for the user-flow responders.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  userflow_core: HTTP trait definitions   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  userflow_axum: Axum implementations     │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - Basic auth middleware                 │
//! │  - Webhook routes                        │
//! └──────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod middleware;
pub mod routes;

pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use middleware::require_basic_auth;
