//! Upload Policy
//!
//! One accepted file kind, checked by declared MIME type only.
//! The server re-checks; this only saves a round trip.

use crate::error::{ApiError, ApiResult};

pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    accepted_mime: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(PDF_MIME)
    }
}

impl UploadPolicy {
    pub fn new(accepted_mime: impl Into<String>) -> Self {
        Self {
            accepted_mime: accepted_mime.into(),
        }
    }

    pub fn accepted_mime(&self) -> &str {
        &self.accepted_mime
    }

    pub fn accepts(&self, declared: &str) -> bool {
        declared.trim().eq_ignore_ascii_case(&self.accepted_mime)
    }

    pub fn check(&self, declared: &str) -> ApiResult<()> {
        if self.accepts(declared) {
            Ok(())
        } else {
            Err(ApiError::Validation(format!(
                "unsupported file type `{}`, expected `{}`",
                declared, self.accepted_mime
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_declared_type_only() {
        let policy = UploadPolicy::default();
        assert!(policy.accepts("application/pdf"));
        assert!(policy.accepts("Application/PDF"));
        assert!(!policy.accepts("image/png"));
        assert!(!policy.accepts(""));
        assert!(matches!(policy.check("text/plain"), Err(ApiError::Validation(_))));
    }
}
