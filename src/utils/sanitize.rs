//! Space name validation for hub URL safety.
//!
//! Space names follow the `owner/name` format (e.g., `evalstate/flux1_schnell`).
//! They are interpolated into hub API paths, so the format is checked before
//! any request is built.

use crate::SpaceError;

/// Allowed characters in either half of a space name.
fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty()
        && part != "."
        && part != ".."
        && part.chars().all(is_valid_name_char)
        && part.len() <= 96
}

/// Validate that `space_name` is a safe `owner/name` pair.
///
/// Returns the (owner, name) parts if valid.
///
/// ```ignore
/// let (owner, name) = validate_space_name("evalstate/flux1_schnell")?;
/// assert_eq!(owner, "evalstate");
/// ```
pub fn validate_space_name(space_name: &str) -> Result<(&str, &str), SpaceError> {
    let (owner, name) = space_name.split_once('/').ok_or_else(|| {
        SpaceError::InvalidParameters(format!(
            "Invalid space name '{}': expected 'owner/space-name' format",
            space_name
        ))
    })?;

    if !is_valid_part(owner) || !is_valid_part(name) {
        return Err(SpaceError::InvalidParameters(format!(
            "Invalid space name '{}': owner and name must be alphanumeric with '-', '_' or '.'",
            space_name
        )));
    }

    Ok((owner, name))
}
