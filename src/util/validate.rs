//! Form validation helpers shared by the login and register pages.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Required-fields failure message, one clause per missing field.
pub fn required_message(missing: &[&str]) -> String {
    missing
        .iter()
        .map(|field| format!("{field} is required"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Minimal email shape check: a local part of plain characters, then `@`,
/// then a non-empty domain.
///
/// The backend owns real validation; this only catches obvious typos
/// before a round-trip.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
}
