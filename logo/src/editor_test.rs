use super::*;

// =============================================================
// Helpers
// =============================================================

fn core_with(names: &[&str]) -> EditorCore {
    let mut core = EditorCore::new();
    for name in names {
        core.handle(Command::CreateNewWork);
        core.handle(Command::EnterCreateWork { name: (*name).to_owned() });
    }
    core
}

fn edit(core: &mut EditorCore, name: &str) -> Vec<Action> {
    core.handle(Command::EditWork { name: name.to_owned() })
}

fn names(core: &EditorCore) -> Vec<&str> {
    core.store.recent_work().iter().map(|w| w.name.as_str()).collect()
}

fn collection_entry<'a>(core: &'a EditorCore, name: &str) -> &'a Work {
    core.store.get_recent_work(name).unwrap()
}

// =============================================================
// Create
// =============================================================

#[test]
fn create_new_work_opens_name_prompt() {
    let mut core = EditorCore::new();
    let actions = core.handle(Command::CreateNewWork);
    assert_eq!(actions, vec![Action::OpenTextInput { purpose: TextPurpose::CreateWork, prefill: String::new() }]);
    assert_eq!(core.overlay.purpose(), Some(TextPurpose::CreateWork));
}

#[test]
fn enter_create_work_appends_without_selecting() {
    let mut core = EditorCore::new();
    core.handle(Command::CreateNewWork);
    let actions = core.handle(Command::EnterCreateWork { name: "Logo1".to_owned() });
    assert_eq!(names(&core), ["Logo1"]);
    assert!(core.store.selected().is_none());
    assert_eq!(actions, vec![Action::CloseTextInput, Action::Navigate(Screen::Home)]);
    assert!(!core.overlay.is_open());
}

#[test]
fn enter_create_work_with_taken_name_shows_notice() {
    let mut core = core_with(&["Logo1"]);
    core.handle(Command::CreateNewWork);
    let actions = core.handle(Command::EnterCreateWork { name: "Logo1".to_owned() });
    assert_eq!(actions, vec![Action::ShowNotice(consts::INVALID_NAME_NOTICE.to_owned())]);
    assert_eq!(names(&core), ["Logo1"]);
    assert!(core.overlay.is_open());
    assert!(core.notice.is_some());
}

#[test]
fn enter_create_work_with_blank_name_shows_notice() {
    let mut core = EditorCore::new();
    core.handle(Command::CreateNewWork);
    let actions = core.handle(Command::EnterCreateWork { name: "  ".to_owned() });
    assert!(matches!(actions.as_slice(), [Action::ShowNotice(_)]));
    assert!(core.store.is_empty());
}

#[test]
fn confirm_ok_hides_notice() {
    let mut core = EditorCore::new();
    core.handle(Command::EnterCreateWork { name: String::new() });
    let actions = core.handle(Command::ConfirmOk);
    assert_eq!(actions, vec![Action::HideNotice]);
    assert!(core.notice.is_none());
}

#[test]
fn cancel_create_closes_prompt_without_mutation() {
    let mut core = EditorCore::new();
    core.handle(Command::CreateNewWork);
    let actions = core.handle(Command::CancelCreateWork);
    assert_eq!(actions, vec![Action::CloseTextInput]);
    assert!(core.store.is_empty());
}

// =============================================================
// Edit selection / navigation
// =============================================================

#[test]
fn edit_work_selects_and_navigates() {
    let mut core = core_with(&["Logo1"]);
    let actions = edit(&mut core, "Logo1");
    let work = collection_entry(&core, "Logo1").clone();
    assert_eq!(core.store.selected(), Some(&work));
    assert_eq!(core.screen, Screen::Edit);
    assert_eq!(actions, vec![Action::Navigate(Screen::Edit), Action::LoadWork(work)]);
}

#[test]
fn edit_unknown_work_is_a_no_op() {
    let mut core = core_with(&["Logo1"]);
    let actions = edit(&mut core, "Missing");
    assert!(actions.is_empty());
    assert!(core.store.selected().is_none());
    assert_eq!(core.screen, Screen::Home);
}

#[test]
fn edit_work_reports_unknown_name() {
    let mut core = EditorCore::new();
    assert_eq!(core.edit_work("x"), Err(EditorError::UnknownWork { name: "x".to_owned() }));
}

#[test]
fn go_home_switches_screen() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    assert_eq!(core.handle(Command::GoHome), vec![Action::Navigate(Screen::Home)]);
    assert_eq!(core.screen, Screen::Home);
}

// =============================================================
// Style changes
// =============================================================

#[test]
fn font_size_change_updates_preview_selection_and_collection() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    let actions = core.handle(Command::ChangeStyle { attribute: StyleAttribute::FontSize, value: "24".to_owned() });

    assert_eq!(actions[0], Action::SetPreviewStyle { property: "font-size", value: "24px".to_owned() });
    assert_eq!(core.store.selected().unwrap().font_size, "24");
    assert_eq!(collection_entry(&core, "Logo1").font_size, "24");
    assert!(matches!(&actions[1], Action::LoadWork(w) if w.font_size == "24"));
}

#[test]
fn every_attribute_updates_all_three_places() {
    let mut core = core_with(&["A", "B"]);
    edit(&mut core, "B");
    for attribute in StyleAttribute::ALL {
        let value = if attribute.is_numeric() { "17" } else { "#123456" };
        let expected = if attribute.is_numeric() { "17px" } else { "#123456" };
        let actions = core.handle(Command::ChangeStyle { attribute, value: value.to_owned() });

        assert_eq!(
            actions[0],
            Action::SetPreviewStyle { property: attribute.css_property(), value: expected.to_owned() }
        );
        assert_eq!(core.store.selected().unwrap().style(attribute), value);
        assert_eq!(collection_entry(&core, "B").style(attribute), value);
    }
    assert_eq!(collection_entry(&core, "A"), &Work { id: collection_entry(&core, "A").id, ..Work::new("A") });
}

#[test]
fn colors_pass_through_unchanged() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    let actions =
        core.handle(Command::ChangeStyle { attribute: StyleAttribute::BorderColor, value: "#00ff00".to_owned() });
    assert_eq!(actions[0], Action::SetPreviewStyle { property: "border-color", value: "#00ff00".to_owned() });
}

#[test]
fn style_change_without_selection_does_nothing() {
    let mut core = core_with(&["Logo1"]);
    let before = core.store.clone();
    let actions = core.handle(Command::ChangeStyle { attribute: StyleAttribute::Margin, value: "4".to_owned() });
    assert!(actions.is_empty());
    assert_eq!(core.store, before);
}

#[test]
fn non_numeric_slider_value_is_rejected() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    let actions = core.handle(Command::ChangeStyle { attribute: StyleAttribute::Padding, value: "abc".to_owned() });
    assert!(actions.is_empty());
    assert_eq!(collection_entry(&core, "Logo1").padding, consts::DEFAULT_PADDING);
}

#[test]
fn out_of_range_values_are_accepted() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    core.handle(Command::ChangeStyle { attribute: StyleAttribute::BorderRadius, value: "9999".to_owned() });
    assert_eq!(collection_entry(&core, "Logo1").border_radius, "9999");
}

#[test]
fn overlong_numeric_value_still_applies() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    let actions = core
        .handle(Command::ChangeStyle { attribute: StyleAttribute::Margin, value: "99999999999999999999".to_owned() });
    assert_eq!(actions[0], Action::SetPreviewStyle { property: "margin", value: format!("{}px", i64::MAX) });
    assert_eq!(collection_entry(&core, "Logo1").margin, "99999999999999999999");
}

// =============================================================
// Delete
// =============================================================

#[test]
fn request_then_confirm_removes_selected_work() {
    let mut core = core_with(&["A", "B"]);
    edit(&mut core, "A");
    assert_eq!(core.handle(Command::DeleteWork), vec![Action::ShowDialog]);
    assert_eq!(core.delete, DeleteConfirm::Pending);

    let actions = core.handle(Command::ConfirmDeleteWork);
    assert_eq!(names(&core), ["B"]);
    assert!(core.store.selected().is_none());
    assert_eq!(core.delete, DeleteConfirm::Idle);
    assert_eq!(actions, vec![Action::HideDialog, Action::Navigate(Screen::Home)]);
}

#[test]
fn confirm_without_request_still_removes() {
    let mut core = core_with(&["A", "B"]);
    edit(&mut core, "B");
    core.handle(Command::ConfirmDeleteWork);
    assert_eq!(names(&core), ["A"]);
    assert!(core.store.selected().is_none());
}

#[test]
fn confirm_twice_is_idempotent() {
    let mut core = core_with(&["A", "B"]);
    edit(&mut core, "A");
    core.handle(Command::DeleteWork);
    core.handle(Command::ConfirmDeleteWork);
    core.handle(Command::ConfirmDeleteWork);
    assert_eq!(names(&core), ["B"]);
}

#[test]
fn cancel_delete_never_mutates() {
    let mut core = core_with(&["A", "B"]);
    edit(&mut core, "A");
    let before = core.store.clone();
    core.handle(Command::DeleteWork);
    let actions = core.handle(Command::CancelDeleteWork);
    assert_eq!(actions, vec![Action::HideDialog]);
    assert_eq!(core.store, before);
    assert_eq!(core.delete, DeleteConfirm::Idle);
    assert_eq!(core.screen, Screen::Edit);
}

// =============================================================
// Edit text
// =============================================================

#[test]
fn edit_text_prefills_current_text() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    core.handle(Command::EnterEditText { text: "Hello".to_owned() });

    let actions = core.handle(Command::EditText);
    assert_eq!(actions, vec![Action::OpenTextInput { purpose: TextPurpose::EditText, prefill: "Hello".to_owned() }]);
}

#[test]
fn enter_edit_text_writes_and_closes() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    core.handle(Command::EditText);
    let actions = core.handle(Command::EnterEditText { text: "World".to_owned() });

    assert_eq!(core.store.selected().unwrap().text, "World");
    assert_eq!(collection_entry(&core, "Logo1").text, "World");
    assert!(!core.overlay.is_open());
    assert_eq!(actions[0], Action::CloseTextInput);
    assert!(matches!(&actions[1], Action::LoadWork(w) if w.text == "World"));
}

#[test]
fn cancel_edit_text_leaves_text_unchanged() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    core.handle(Command::EnterEditText { text: "Hello".to_owned() });
    core.handle(Command::EditText);
    let actions = core.handle(Command::CancelEditText);
    assert_eq!(actions, vec![Action::CloseTextInput]);
    assert_eq!(collection_entry(&core, "Logo1").text, "Hello");
}

#[test]
fn edit_text_without_selection_does_nothing() {
    let mut core = core_with(&["Logo1"]);
    assert!(core.handle(Command::EditText).is_empty());
    assert!(!core.overlay.is_open());
}

// =============================================================
// Rename
// =============================================================

#[test]
fn rename_updates_collection_and_keeps_selection() {
    let mut core = core_with(&["Logo1"]);
    edit(&mut core, "Logo1");
    let actions = core.handle(Command::RenameWork { name: "Logo2".to_owned() });
    assert_eq!(names(&core), ["Logo2"]);
    assert_eq!(core.store.selected().unwrap().name, "Logo2");
    assert!(matches!(actions.as_slice(), [Action::LoadWork(w)] if w.name == "Logo2"));
}

#[test]
fn rename_to_taken_name_shows_notice() {
    let mut core = core_with(&["A", "B"]);
    edit(&mut core, "A");
    let actions = core.handle(Command::RenameWork { name: "B".to_owned() });
    assert_eq!(actions, vec![Action::ShowNotice(consts::INVALID_NAME_NOTICE.to_owned())]);
    assert_eq!(names(&core), ["A", "B"]);
}
