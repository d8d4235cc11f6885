//! Model and controller core for the goLogoLo logo editor.
//!
//! This crate has no browser dependencies. The WASM client resolves DOM
//! events into [`editor::Command`]s (reading the triggering control's value
//! on the way in), hands them to [`editor::EditorCore`], and applies the
//! returned [`editor::Action`]s to the page: inline styles on the preview
//! element, dialogs, overlays, and screen changes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Command dispatch and the testable [`editor::EditorCore`] |
//! | [`store`] | Recent-works collection and the current selection |
//! | [`work`] | The `Work` type and its per-field setters |
//! | [`style`] | Style attributes and their control/CSS configuration table |
//! | [`dialog`] | Delete confirmation and text-input overlay state machines |
//! | [`bind`] | Element/event binding table and registration |
//! | [`consts`] | DOM element identifiers and defaults |
//! | [`error`] | Error type for controller operations |

pub mod bind;
pub mod consts;
pub mod dialog;
pub mod editor;
pub mod error;
pub mod store;
pub mod style;
pub mod work;
