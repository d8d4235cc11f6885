//! Modal state: the two-phase delete confirmation and the text-input overlay.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;


/// Delete confirmation. `request` shows the yes/no dialog; `confirm` and
/// `cancel` both return to idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending,
}

impl DeleteConfirm {
    pub fn request(&mut self) {
        *self = Self::Pending;
    }

    /// Returns whether a request was outstanding.
    pub fn confirm(&mut self) -> bool {
        std::mem::take(self) == Self::Pending
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

/// What the text-input overlay is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPurpose {
    /// Name for a new work.
    CreateWork,
    /// Replacement text for the selected work.
    EditText,
}

/// The text-input overlay and what it is open for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextOverlay {
    #[default]
    Closed,
    Open { purpose: TextPurpose },
}

impl TextOverlay {
    pub fn open(&mut self, purpose: TextPurpose) {
        *self = Self::Open { purpose };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn purpose(&self) -> Option<TextPurpose> {
        match self {
            Self::Closed => None,
            Self::Open { purpose } => Some(*purpose),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}
