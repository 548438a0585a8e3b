// src/application/validation.rs
//
// Schema validation for the one write path that has it: creating an article
// under a user. Every other write path deliberately accepts its payload
// unchecked (see DESIGN.md).
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{STATE_DRAFT, STATE_PUBLISHED};
use serde::Deserialize;
use validator::Validate;

/// Candidate article payload for the validated create path. Unknown fields
/// are stripped by deserialization; the schema bounds what remains.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ArticleDraft {
    #[validate(length(max = 10, message = "title must be at most 10 characters"))]
    pub title: String,
    #[validate(length(max = 1000, message = "content must be at most 1000 characters"))]
    pub content: String,
    pub state: String,
}

/// Check `draft` against the article schema, collecting every violation
/// rather than stopping at the first one.
pub fn validate_draft(draft: &ArticleDraft) -> ApplicationResult<()> {
    let mut issues = Vec::new();

    if let Err(errors) = draft.validate() {
        for field_errors in errors.field_errors().values() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_deref()
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("invalid value ({})", error.code));
                issues.push(message);
            }
        }
    }

    if draft.state != STATE_DRAFT && draft.state != STATE_PUBLISHED {
        issues.push("state must be DRAFT or PUBLISHED".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::SchemaViolation(issues))
    }
}
