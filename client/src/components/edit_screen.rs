//! Edit screen: toolbar, style controls, and the logo preview.

use leptos::prelude::*;
use logo::consts;
use logo::style::StyleAttribute;

use crate::components::logo_preview::LogoPreview;
use crate::state::view::ViewState;

/// Label and slider range for each control, in table order. Colors have no range.
const CONTROLS: [(StyleAttribute, &str, Option<(u32, u32)>); 8] = [
    (StyleAttribute::TextColor, "Text Color", None),
    (StyleAttribute::BackgroundColor, "Background Color", None),
    (StyleAttribute::BorderColor, "Border Color", None),
    (StyleAttribute::FontSize, "Font Size", Some((4, 144))),
    (StyleAttribute::BorderRadius, "Border Radius", Some((0, 50))),
    (StyleAttribute::BorderThickness, "Border Thickness", Some((0, 50))),
    (StyleAttribute::Padding, "Padding", Some((0, 100))),
    (StyleAttribute::Margin, "Margin", Some((0, 100))),
];

#[component]
pub fn EditScreen() -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewState>>();

    let name = move || ui.with(|v| v.preview.as_ref().map(|w| w.name.clone()).unwrap_or_default());

    let controls = CONTROLS
        .into_iter()
        .map(|(attribute, label, range)| {
            let value = move || {
                ui.with(|v| {
                    v.preview
                        .as_ref()
                        .map(|w| w.style(attribute).to_owned())
                        .unwrap_or_default()
                })
            };
            match range {
                None => view! {
                    <label class="edit-screen__control">
                        <span class="edit-screen__label">{label}</span>
                        <input id=attribute.control_id() type="color" prop:value=value/>
                    </label>
                }
                .into_any(),
                Some((min, max)) => view! {
                    <label class="edit-screen__control">
                        <span class="edit-screen__label">{label}</span>
                        <input
                            id=attribute.control_id()
                            type="range"
                            min=min.to_string()
                            max=max.to_string()
                            prop:value=value
                        />
                        <span class="edit-screen__readout">{value}</span>
                    </label>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <section id=consts::EDIT_SCREEN class="edit-screen">
            <nav class="edit-screen__toolbar">
                <button id=consts::EDIT_HOME_LINK class="edit-screen__home" title="Back to recent work">
                    "goLogoLo"
                </button>
                <input
                    id=consts::EDIT_NAME_TEXTFIELD
                    class="edit-screen__name"
                    type="text"
                    prop:value=name
                />
                <button id=consts::EDIT_TRASH class="btn btn--danger" title="Delete logo">
                    "\u{1F5D1}"
                </button>
            </nav>

            <div class="edit-screen__body">
                <div class="edit-screen__controls">
                    <button id=consts::EDIT_TEXT_BUTTON class="btn">
                        "Edit Text"
                    </button>
                    {controls}
                </div>
                <LogoPreview/>
            </div>
        </section>
    }
}
