//! The editor page: the current screen plus the modals that overlay it.

use leptos::prelude::*;
use logo::dialog::TextPurpose;
use logo::editor::Screen;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::edit_screen::EditScreen;
use crate::components::home_screen::HomeScreen;
use crate::components::text_input_modal::TextInputModal;
use crate::components::yes_no_modal::YesNoModal;
use crate::state::view::ViewState;

/// Shows the home or edit screen and re-binds controls after every change
/// to what is rendered.
#[component]
pub fn EditorPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewState>>();

    #[cfg(feature = "hydrate")]
    {
        let editor = expect_context::<RwSignal<logo::editor::EditorCore>>();
        Effect::new(move || {
            // Screens, modals, and the recent-work list all add elements.
            ui.track();
            editor.track();
            let bound = crate::host::register_event_handlers(editor, ui);
            log::debug!("{bound} elements bound");
        });
    }

    view! {
        <main class="appster">
            {move || match ui.with(|v| v.screen) {
                Screen::Home => view! { <HomeScreen/> }.into_any(),
                Screen::Edit => view! { <EditScreen/> }.into_any(),
            }}
            <YesNoModal/>
            <TextInputModal purpose=TextPurpose::CreateWork/>
            <TextInputModal purpose=TextPurpose::EditText/>
            <ConfirmModal/>
        </main>
    }
}
