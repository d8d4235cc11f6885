//! Home screen: recent-work links and the new-work button.

use leptos::prelude::*;
use logo::consts;
use logo::editor::EditorCore;

/// Lists saved works in creation order. Each link carries its work name in
/// `data-work-name`; the DOM host binds the clicks.
#[component]
pub fn HomeScreen() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();

    let names = move || {
        editor.with(|core| {
            core.store
                .recent_work()
                .iter()
                .map(|w| w.name.clone())
                .collect::<Vec<_>>()
        })
    };
    let is_empty = move || editor.with(|core| core.store.is_empty());

    view! {
        <section id=consts::HOME_SCREEN class="home-screen">
            <header class="home-screen__header">
                <h1 class="home-screen__title">"goLogoLo"</h1>
                <button id=consts::HOME_NEW_WORK_BUTTON class="btn btn--primary">
                    "+ New Logo"
                </button>
            </header>

            <h2 class="home-screen__subtitle">"Recent Work"</h2>
            <Show when=is_empty>
                <p class="home-screen__empty">"No logos yet."</p>
            </Show>
            <ul id=consts::HOME_RECENT_WORK_LIST class="home-screen__recent">
                <For
                    each=names
                    key=|name| name.clone()
                    children=move |name| {
                        let work_name = name.clone();
                        view! {
                            <li class="home-screen__recent-item">
                                <button class="home-screen__recent-link" data-work-name=work_name>
                                    {name}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
