//! Framework-agnostic adapters around the user-flow core: responders that
//! encode a decision and hand it to a response builder, Basic credential
//! validation, and service settings.

pub mod auth;
pub mod config;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;
