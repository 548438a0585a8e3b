use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// The two states articles move between by convention. Stored and compared
/// as raw strings: only the validated write path enforces the enumeration,
/// every other path accepts whatever string the client sent.
pub const STATE_DRAFT: &str = "DRAFT";
pub const STATE_PUBLISHED: &str = "PUBLISHED";
