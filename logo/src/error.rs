//! Errors returned by controller operations.

use crate::style::StyleAttribute;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("no recent work named {name:?}")]
    UnknownWork { name: String },
    #[error("no work is selected for editing")]
    NoSelection,
    #[error("{attribute:?} expects an integer, got {value:?}")]
    InvalidNumber { attribute: StyleAttribute, value: String },
    #[error("a work named {name:?} already exists")]
    DuplicateName { name: String },
    #[error("work names must not be empty")]
    EmptyName,
}

impl EditorError {
    /// Whether the error should be reported to the user rather than only logged.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::DuplicateName { .. } | Self::EmptyName)
    }
}
