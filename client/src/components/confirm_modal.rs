//! Notice modal with a single OK button.

use leptos::prelude::*;
use logo::consts;

use crate::state::view::ViewState;

#[component]
pub fn ConfirmModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewState>>();

    let message = move || ui.with(|v| v.notice.clone().unwrap_or_default());

    view! {
        <Show when=move || ui.with(|v| v.notice.is_some())>
            <div id=consts::CONFIRM_MODAL class="dialog-backdrop dialog-backdrop--top">
                <div class="dialog" role="alertdialog">
                    <p class="dialog__message">{message}</p>
                    <div class="dialog__actions">
                        <button id=consts::CONFIRM_MODAL_OK_BUTTON class="btn btn--primary">
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
