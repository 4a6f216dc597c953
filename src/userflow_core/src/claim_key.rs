//! Directory-extension claim keys.
//!
//! The identity platform stores custom attributes under
//! `extension_<appIdWithoutHyphens>_<attributeName>`, where the application id
//! is the client id of the extensions app registration.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::error::UserFlowError;

static ATTRIBUTE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("attribute name pattern is a valid regex")
});

/// Formats a claim key from an application id that is already in the
/// 32-hex-digit form. No validation is performed.
pub fn extension_key(app_id_no_dashes: &str, attribute_name: &str) -> String {
    format!("extension_{app_id_no_dashes}_{attribute_name}")
}

/// Validates the application id and attribute name and returns the claim key.
///
/// Accepted application id forms are the usual GUID textual forms: 32 hex
/// digits, hyphenated, braced or parenthesized, in any letter case. The id is
/// normalized to lowercase hex without separators.
///
/// # Errors
///
/// `InvalidArgument` when the id is not a GUID, the attribute name is blank,
/// or the attribute name does not start with a letter followed by letters,
/// digits or underscores.
pub fn build_extension_claim_key(
    app_id: &str,
    attribute_name: &str,
) -> Result<String, UserFlowError> {
    let app_id = parse_guid(app_id).ok_or_else(|| {
        UserFlowError::invalid_argument(
            "app_id",
            "expected a GUID (application/client id of the extensions app)",
        )
    })?;

    if attribute_name.trim().is_empty() {
        return Err(UserFlowError::invalid_argument(
            "attribute_name",
            "attribute name cannot be empty",
        ));
    }

    if !ATTRIBUTE_NAME_REGEX.is_match(attribute_name) {
        return Err(UserFlowError::invalid_argument(
            "attribute_name",
            "attribute name should start with a letter and contain letters, digits, or underscore only",
        ));
    }

    Ok(extension_key(&app_id.simple().to_string(), attribute_name))
}

/// Non-failing variant of [`build_extension_claim_key`].
pub fn try_build_extension_claim_key(app_id: &str, attribute_name: &str) -> Option<String> {
    build_extension_claim_key(app_id, attribute_name).ok()
}

fn parse_guid(input: &str) -> Option<Uuid> {
    let input = input.trim();

    // `uuid` also understands URNs, which are not a GUID textual form
    if input.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("urn:")) {
        return None;
    }

    match input.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        // Parenthesized GUIDs always carry hyphens
        Some(inner) if inner.len() == 36 => Uuid::parse_str(inner).ok(),
        Some(_) => None,
        None => Uuid::parse_str(input).ok(),
    }
}
