//! Validation of destination hostnames written to the mapping store.

use crate::error::{StoreError, StoreResult};
use url::Host;

/// Checks that `value` is a bare hostname usable as a redirect destination.
///
/// # Rules
///
/// - Length: 1-253 characters
/// - ASCII letters, digits, dots, and hyphens only (no scheme, port, path, or query)
/// - Must not start or end with a dot or hyphen
/// - Must parse as a host
///
/// # Errors
///
/// Returns [`StoreError::InvalidDestination`] describing the first rule broken.
///
/// # Examples
///
/// ```
/// use redirector::utils::destination::validate_destination;
///
/// assert!(validate_destination("site.example.io").is_ok());
/// assert!(validate_destination("https://site.example.io/").is_err());
/// ```
pub fn validate_destination(value: &str) -> StoreResult<()> {
    let invalid = |reason| {
        Err(StoreError::InvalidDestination {
            value: value.to_string(),
            reason,
        })
    };

    if value.is_empty() || value.len() > 253 {
        return invalid("length must be between 1 and 253");
    }

    if value.contains("://") {
        return invalid("must not include a scheme");
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return invalid("allowed characters are a-z, 0-9, dots, hyphens");
    }

    if value.starts_with(['.', '-']) || value.ends_with(['.', '-']) {
        return invalid("must not start or end with a dot or hyphen");
    }

    if Host::parse(value).is_err() {
        return invalid("not a valid host");
    }

    Ok(())
}
