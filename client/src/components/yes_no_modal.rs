//! Delete confirmation dialog.

use leptos::prelude::*;
use logo::consts;

use crate::state::view::ViewState;

#[component]
pub fn YesNoModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewState>>();

    view! {
        <Show when=move || ui.with(|v| v.dialog_open)>
            <div id=consts::YES_NO_MODAL class="dialog-backdrop">
                <div class="dialog" role="alertdialog">
                    <h2>"Delete this logo?"</h2>
                    <p>"This cannot be undone."</p>
                    <div class="dialog__actions">
                        <button id=consts::YES_NO_MODAL_NO_BUTTON class="btn">
                            "No"
                        </button>
                        <button id=consts::YES_NO_MODAL_YES_BUTTON class="btn btn--danger">
                            "Yes"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
