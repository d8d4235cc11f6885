//! DOM host for the editor controller.
//!
//! ARCHITECTURE
//! ============
//! Controls are rendered by Leptos with the ids in `logo::consts` but carry
//! no `on:` handlers. After each render this module looks the controls up by
//! id and attaches listeners from the `logo::bind` table; missing elements
//! are skipped. A fired listener reads the control's current value, runs the
//! command through `EditorCore`, and applies the returned actions: inline
//! styles go straight to the preview element, everything else goes through
//! `ViewState`.

use leptos::prelude::*;
use logo::bind::{self, ElementRegistry, EventKind, Trigger};
use logo::consts;
use logo::editor::{Command, EditorCore};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::state::view::{PreviewStyle, ViewState};

/// Prefix of the marker attribute set on elements that already have a
/// listener for an event kind.
const BOUND_ATTR: &str = "data-bound";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Run a command through the controller and apply the resulting actions.
pub fn dispatch(editor: RwSignal<EditorCore>, ui: RwSignal<ViewState>, command: Command) {
    let mut actions = Vec::new();
    editor.update(|core| actions = core.handle(command));
    if actions.is_empty() {
        return;
    }

    let mut styles = Vec::new();
    ui.update(|view| styles = actions.iter().filter_map(|a| view.apply(a)).collect());

    if let Some(document) = document() {
        for style in &styles {
            set_preview_style(&document, style);
        }
    }
}

/// Write one inline style on the preview element. No-op if it is not rendered.
fn set_preview_style(document: &Document, style: &PreviewStyle) {
    let Some(preview) = document
        .get_element_by_id(consts::LOGO_TEXT)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if let Err(err) = preview.style().set_property(style.property, &style.value) {
        log::warn!("preview {}: {err:?}", style.property);
    }
}

/// Current value of an `<input>` control, if present.
fn read_control_value(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Attach `handler` to `event` on `element` unless a previous pass already did.
fn listen(element: &Element, event: EventKind, mut handler: impl FnMut() + 'static) -> bool {
    let marker = format!("{BOUND_ATTR}-{}", event.as_str());
    if element.has_attribute(&marker) {
        return true;
    }

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| handler());
    if let Err(err) = element.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref()) {
        log::warn!("listen {} on #{}: {err:?}", event.as_str(), element.id());
        return false;
    }
    // The listener lives as long as the element.
    closure.forget();

    if let Err(err) = element.set_attribute(&marker, "") {
        log::debug!("mark #{}: {err:?}", element.id());
    }
    true
}

/// `ElementRegistry` over the live document.
struct DomRegistry {
    document: Document,
    editor: RwSignal<EditorCore>,
    ui: RwSignal<ViewState>,
}

impl ElementRegistry for DomRegistry {
    fn bind(&mut self, element_id: &str, event: EventKind, trigger: Trigger) -> bool {
        let Some(element) = self.document.get_element_by_id(element_id) else {
            return false;
        };
        let (editor, ui) = (self.editor, self.ui);
        listen(&element, event, move || {
            let Some(document) = document() else {
                return;
            };
            match trigger.resolve(|id| read_control_value(&document, id)) {
                Some(command) => dispatch(editor, ui, command),
                None => log::warn!("{trigger:?}: control value unavailable"),
            }
        })
    }
}

/// Bind a recent-work link. The work name is read from the link when it is
/// clicked, so a keyed re-render that renames the link stays correct.
pub fn register_recent_work_handler(element: &Element, editor: RwSignal<EditorCore>, ui: RwSignal<ViewState>) -> bool {
    let link = element.clone();
    listen(element, EventKind::Click, move || {
        if let Some(name) = link.get_attribute(consts::RECENT_WORK_NAME_ATTR) {
            dispatch(editor, ui, bind::recent_work_command(&name));
        }
    })
}

/// Bind every control and recent-work link present in the document.
/// Returns how many elements are bound.
pub fn register_event_handlers(editor: RwSignal<EditorCore>, ui: RwSignal<ViewState>) -> usize {
    let Some(document) = document() else {
        return 0;
    };

    let mut links = 0;
    if let Ok(nodes) = document.query_selector_all(&format!("[{}]", consts::RECENT_WORK_NAME_ATTR)) {
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            if register_recent_work_handler(&element, editor, ui) {
                links += 1;
            }
        }
    }

    let mut registry = DomRegistry { document, editor, ui };
    bind::register_event_handlers(&mut registry) + links
}
