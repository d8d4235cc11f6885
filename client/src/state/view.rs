//! Presentation state driven by controller actions.
//!
//! DESIGN
//! ======
//! `ViewState` is the view half of the editor: the controller never writes
//! to it directly, it only returns `Action`s. Applying an action here is
//! pure; the one action that must reach the DOM imperatively (an inline
//! style on the preview element) is handed back to the caller.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use logo::dialog::TextPurpose;
use logo::editor::{Action, Screen};
use logo::work::Work;

/// The text-input overlay as shown on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputView {
    pub purpose: TextPurpose,
    pub prefill: String,
}

/// What the page currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    /// Delete confirmation dialog visible.
    pub dialog_open: bool,
    pub text_input: Option<TextInputView>,
    /// Message in the confirm modal, if shown.
    pub notice: Option<String>,
    /// Work rendered in the preview and edit controls.
    pub preview: Option<Work>,
}

/// An inline style write for the preview element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewStyle {
    pub property: &'static str,
    pub value: String,
}

impl ViewState {
    /// Apply one controller action. Returns the preview style to set, if the
    /// action was `SetPreviewStyle`.
    pub fn apply(&mut self, action: &Action) -> Option<PreviewStyle> {
        match action {
            Action::SetPreviewStyle { property, value } => {
                return Some(PreviewStyle { property: *property, value: value.clone() });
            }
            Action::LoadWork(work) => self.preview = Some(work.clone()),
            Action::Navigate(screen) => {
                self.screen = *screen;
                if *screen == Screen::Home {
                    self.preview = None;
                }
            }
            Action::ShowDialog => self.dialog_open = true,
            Action::HideDialog => self.dialog_open = false,
            Action::OpenTextInput { purpose, prefill } => {
                self.text_input = Some(TextInputView { purpose: *purpose, prefill: prefill.clone() });
            }
            Action::CloseTextInput => self.text_input = None,
            Action::ShowNotice(message) => self.notice = Some(message.clone()),
            Action::HideNotice => self.notice = None,
        }
        None
    }

    #[must_use]
    pub fn text_input_for(&self, purpose: TextPurpose) -> Option<&TextInputView> {
        self.text_input.as_ref().filter(|t| t.purpose == purpose)
    }
}
