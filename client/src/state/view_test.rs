use super::*;

use logo::editor::{Command, EditorCore};

fn apply_all(view: &mut ViewState, actions: &[Action]) -> Vec<PreviewStyle> {
    actions.iter().filter_map(|a| view.apply(a)).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn view_state_default_is_home_with_nothing_open() {
    let view = ViewState::default();
    assert_eq!(view.screen, Screen::Home);
    assert!(!view.dialog_open);
    assert!(view.text_input.is_none());
    assert!(view.notice.is_none());
    assert!(view.preview.is_none());
}

// =============================================================
// apply
// =============================================================

#[test]
fn set_preview_style_is_returned_not_stored() {
    let mut view = ViewState::default();
    let style = view.apply(&Action::SetPreviewStyle { property: "font-size", value: "24px".to_owned() });
    assert_eq!(style, Some(PreviewStyle { property: "font-size", value: "24px".to_owned() }));
    assert_eq!(view, ViewState::default());
}

#[test]
fn dialog_show_and_hide() {
    let mut view = ViewState::default();
    view.apply(&Action::ShowDialog);
    assert!(view.dialog_open);
    view.apply(&Action::HideDialog);
    assert!(!view.dialog_open);
}

#[test]
fn navigating_home_clears_preview() {
    let mut view = ViewState::default();
    view.apply(&Action::Navigate(Screen::Edit));
    view.apply(&Action::LoadWork(Work::new("Logo1")));
    view.apply(&Action::Navigate(Screen::Home));
    assert_eq!(view.screen, Screen::Home);
    assert!(view.preview.is_none());
}

#[test]
fn text_input_is_scoped_by_purpose() {
    let mut view = ViewState::default();
    view.apply(&Action::OpenTextInput { purpose: TextPurpose::EditText, prefill: "Hello".to_owned() });
    assert!(view.text_input_for(TextPurpose::CreateWork).is_none());
    assert_eq!(view.text_input_for(TextPurpose::EditText).unwrap().prefill, "Hello");
    view.apply(&Action::CloseTextInput);
    assert!(view.text_input.is_none());
}

#[test]
fn notice_show_and_hide() {
    let mut view = ViewState::default();
    view.apply(&Action::ShowNotice("bad name".to_owned()));
    assert_eq!(view.notice.as_deref(), Some("bad name"));
    view.apply(&Action::HideNotice);
    assert!(view.notice.is_none());
}

// =============================================================
// With the controller
// =============================================================

#[test]
fn edit_session_round_trip() {
    let mut core = EditorCore::new();
    let mut view = ViewState::default();

    apply_all(&mut view, &core.handle(Command::CreateNewWork));
    assert!(view.text_input_for(TextPurpose::CreateWork).is_some());
    apply_all(&mut view, &core.handle(Command::EnterCreateWork { name: "Logo1".to_owned() }));
    assert!(view.text_input.is_none());

    apply_all(&mut view, &core.handle(Command::EditWork { name: "Logo1".to_owned() }));
    assert_eq!(view.screen, Screen::Edit);

    let styles = apply_all(
        &mut view,
        &core.handle(Command::ChangeStyle {
            attribute: logo::style::StyleAttribute::FontSize,
            value: "24".to_owned(),
        }),
    );
    assert_eq!(styles, vec![PreviewStyle { property: "font-size", value: "24px".to_owned() }]);
    assert_eq!(view.preview.as_ref().unwrap().font_size, "24");
}

#[test]
fn delete_flow_closes_dialog_and_returns_home() {
    let mut core = EditorCore::new();
    let mut view = ViewState::default();
    core.handle(Command::EnterCreateWork { name: "A".to_owned() });
    apply_all(&mut view, &core.handle(Command::EditWork { name: "A".to_owned() }));

    apply_all(&mut view, &core.handle(Command::DeleteWork));
    assert!(view.dialog_open);
    apply_all(&mut view, &core.handle(Command::ConfirmDeleteWork));
    assert!(!view.dialog_open);
    assert_eq!(view.screen, Screen::Home);
    assert!(core.store.is_empty());
}
