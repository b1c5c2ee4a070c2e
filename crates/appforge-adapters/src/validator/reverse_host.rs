//! Reverse-host package-id rules (`com.example.app`).

use appforge_core::{
    application::ports::PackageIdValidator,
    domain::{DomainError, PackageId},
    error::ForgeResult,
};
use tracing::trace;

/// Default package-id validator.
///
/// - empty or dot-free candidates are not identifiers at all (`Ok(None)`)
/// - every dot-separated segment must be non-empty, start with an ASCII
///   letter and contain only ASCII letters, digits and `_`
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseHostValidator;

impl ReverseHostValidator {
    pub fn new() -> Self {
        Self
    }
}

impl PackageIdValidator for ReverseHostValidator {
    fn validate(&self, candidate: &str) -> ForgeResult<Option<PackageId>> {
        if !candidate.contains('.') {
            trace!(candidate, "Not a reverse-host identifier");
            return Ok(None);
        }

        for (index, segment) in candidate.split('.').enumerate() {
            let reason = if segment.is_empty() {
                Some(format!("segment {} is empty", index + 1))
            } else if !segment.starts_with(|c: char| c.is_ascii_alphabetic()) {
                Some(format!("segment '{segment}' must start with a letter"))
            } else if let Some(bad) = segment
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
            {
                Some(format!("segment '{segment}' contains '{bad}'"))
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(DomainError::InvalidPackageId {
                    candidate: candidate.to_owned(),
                    reason,
                }
                .into());
            }
        }

        Ok(Some(PackageId::from_validated(candidate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_core::error::ErrorKind;

    fn validate(candidate: &str) -> ForgeResult<Option<PackageId>> {
        ReverseHostValidator::new().validate(candidate)
    }

    #[test]
    fn accepts_reverse_host_ids() {
        for id in ["com.example.foo", "org.acme.app_2", "a.b"] {
            assert_eq!(
                validate(id).unwrap().as_ref().map(PackageId::as_str),
                Some(id)
            );
        }
    }

    #[test]
    fn dot_free_candidates_are_not_ids() {
        assert_eq!(validate("not-a-project").unwrap(), None);
        assert_eq!(validate("").unwrap(), None);
    }

    #[test]
    fn malformed_dotted_candidates_are_errors() {
        for bad in ["com..foo", ".com.foo", "com.foo.", "com.1foo", "com.ex-ample"] {
            let err = validate(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPackageId, "{bad}");
        }
    }
}
