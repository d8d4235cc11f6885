//! The logo preview element that style controls write to.

#[cfg(test)]
#[path = "logo_preview_test.rs"]
mod logo_preview_test;

use leptos::prelude::*;
use logo::consts;
use logo::work::Work;

use crate::state::view::ViewState;

/// Inline style for a work's preview: a solid border plus every attribute.
pub fn preview_style(work: &Work) -> String {
    std::iter::once("border-style: solid".to_owned())
        .chain(
            work.css_declarations()
                .into_iter()
                .map(|(property, value)| format!("{property}: {value}")),
        )
        .collect::<Vec<_>>()
        .join("; ")
}

/// Renders the loaded work. The DOM host also writes inline styles to this
/// element directly while a control is being dragged.
#[component]
pub fn LogoPreview() -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewState>>();

    let style = move || ui.with(|v| v.preview.as_ref().map(preview_style).unwrap_or_default());
    let text = move || ui.with(|v| v.preview.as_ref().map(|w| w.text.clone()).unwrap_or_default());

    view! {
        <div class="logo-preview">
            <div id=consts::LOGO_TEXT class="logo-preview__text" style=style>
                {text}
            </div>
        </div>
    }
}
