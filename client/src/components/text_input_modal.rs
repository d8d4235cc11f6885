//! Text-input overlay, used both to name a new logo and to edit its text.

use leptos::prelude::*;
use logo::consts;
use logo::dialog::TextPurpose;

use crate::state::view::ViewState;

/// Element ids and copy for one use of the overlay.
struct Layout {
    modal: &'static str,
    field: &'static str,
    enter: &'static str,
    cancel: &'static str,
    title: &'static str,
}

fn layout(purpose: TextPurpose) -> Layout {
    match purpose {
        TextPurpose::CreateWork => Layout {
            modal: consts::TEXT_INPUT_MODAL,
            field: consts::TEXT_INPUT_MODAL_TEXTFIELD,
            enter: consts::TEXT_INPUT_MODAL_ENTER_BUTTON,
            cancel: consts::TEXT_INPUT_MODAL_CANCEL_BUTTON,
            title: "Name your new logo",
        },
        TextPurpose::EditText => Layout {
            modal: consts::EDIT_TEXT_INPUT_MODAL,
            field: consts::EDIT_TEXT_INPUT_MODAL_TEXTFIELD,
            enter: consts::EDIT_TEXT_INPUT_MODAL_ENTER_BUTTON,
            cancel: consts::EDIT_TEXT_INPUT_MODAL_CANCEL_BUTTON,
            title: "Edit logo text",
        },
    }
}

/// Overlay shown while `ViewState::text_input` is open for `purpose`. The
/// field starts from the prefill captured when the overlay opened; later view
/// updates (such as the name notice) do not reset what the user typed.
#[component]
pub fn TextInputModal(purpose: TextPurpose) -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewState>>();
    let Layout { modal, field, enter, cancel, title } = layout(purpose);

    view! {
        <Show when=move || ui.with(|v| v.text_input_for(purpose).is_some())>
            <div id=modal class="dialog-backdrop">
                <div class="dialog">
                    <h2>{title}</h2>
                    <input
                        id=field
                        class="dialog__input"
                        type="text"
                        prop:value=ui.with_untracked(|v| {
                            v.text_input_for(purpose).map(|t| t.prefill.clone()).unwrap_or_default()
                        })
                    />
                    <div class="dialog__actions">
                        <button id=cancel class="btn">
                            "Cancel"
                        </button>
                        <button id=enter class="btn btn--primary">
                            "Enter"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
