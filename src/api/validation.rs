//! Purpose: Boundary validation for values arriving from a presentation layer.
//! Exports: `require_non_empty`.
//! Role: Every required field is checked here before any store access.
//! Invariants: Validation failures never leave a partial write behind.

use crate::core::error::{Error, ErrorKind};

/// Reject empty or whitespace-only required fields, naming the field
/// in the error so an adapter can point at the offending input.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::new(ErrorKind::Validation)
            .with_message("required field must not be empty")
            .with_field(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::require_non_empty;
    use crate::core::error::ErrorKind;

    #[test]
    fn accepts_ordinary_text() {
        require_non_empty("title", "Dune").expect("valid");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        for value in ["", "   ", "\t\n"] {
            let err = require_non_empty("title", value).expect_err("invalid");
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.field(), Some("title"));
        }
    }
}
