//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The model and controller state (`logo::editor::EditorCore`) is provided as
//! its own signal. `view` holds only what the page shows: the current screen,
//! open modals, and the work loaded into the preview.

pub mod view;
