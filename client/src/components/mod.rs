//! UI components for the editor screens and modals.

pub mod confirm_modal;
pub mod edit_screen;
pub mod home_screen;
pub mod logo_preview;
pub mod text_input_modal;
pub mod yes_no_modal;
