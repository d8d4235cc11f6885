//! Controller core: resolves UI commands against the work store and returns
//! the view-side effects the host must apply.
//!
//! Every handler runs to completion inside one [`EditorCore::handle`] call.
//! Model mutation happens here; the DOM is only ever touched by the host,
//! which applies the returned [`Action`]s in order.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::consts;
use crate::dialog::{DeleteConfirm, TextOverlay, TextPurpose};
use crate::error::EditorError;
use crate::store::WorkStore;
use crate::style::StyleAttribute;
use crate::work::Work;

/// Top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Recent-work list and the new-work button.
    #[default]
    Home,
    /// Controls and preview for the selected work.
    Edit,
}

/// A UI event with the triggering control's value already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateNewWork,
    EnterCreateWork { name: String },
    CancelCreateWork,
    ConfirmOk,
    GoHome,
    EditWork { name: String },
    DeleteWork,
    ConfirmDeleteWork,
    CancelDeleteWork,
    EditText,
    EnterEditText { text: String },
    CancelEditText,
    RenameWork { name: String },
    ChangeStyle { attribute: StyleAttribute, value: String },
}

/// Effects returned from handlers for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set an inline style on the preview element.
    SetPreviewStyle { property: &'static str, value: String },
    /// Re-render the preview and edit controls from this work.
    LoadWork(Work),
    Navigate(Screen),
    ShowDialog,
    HideDialog,
    OpenTextInput { purpose: TextPurpose, prefill: String },
    CloseTextInput,
    ShowNotice(String),
    HideNotice,
}

/// All controller state: the model plus modal and screen state.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    pub store: WorkStore,
    pub screen: Screen,
    pub delete: DeleteConfirm,
    pub overlay: TextOverlay,
    pub notice: Option<String>,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a command. Failures are logged and produce no actions.
    pub fn handle(&mut self, command: Command) -> Vec<Action> {
        log::debug!("handle {command:?}");
        let result = match command {
            Command::CreateNewWork => Ok(self.create_new_work()),
            Command::EnterCreateWork { name } => Ok(self.enter_create_work(&name)),
            Command::CancelCreateWork => Ok(self.close_text_input()),
            Command::ConfirmOk => Ok(self.confirm_ok()),
            Command::GoHome => Ok(self.go_home()),
            Command::EditWork { name } => self.edit_work(&name),
            Command::DeleteWork => Ok(self.delete_work()),
            Command::ConfirmDeleteWork => Ok(self.confirm_delete_work()),
            Command::CancelDeleteWork => Ok(self.cancel_delete_work()),
            Command::EditText => self.edit_text(),
            Command::EnterEditText { text } => self.enter_edit_text(text),
            Command::CancelEditText => Ok(self.close_text_input()),
            Command::RenameWork { name } => self.rename_work(&name),
            Command::ChangeStyle { attribute, value } => self.change_style(attribute, &value),
        };
        match result {
            Ok(actions) => actions,
            Err(err) if err.is_user_facing() => self.show_notice(consts::INVALID_NAME_NOTICE),
            Err(err) => {
                log::warn!("command ignored: {err}");
                Vec::new()
            }
        }
    }

    // --- Navigation ---

    /// Show the home screen.
    pub fn go_home(&mut self) -> Vec<Action> {
        self.screen = Screen::Home;
        vec![Action::Navigate(Screen::Home)]
    }

    /// Show the recent-work list after it changed. The list lives on the
    /// home screen.
    pub fn go_list(&mut self) -> Vec<Action> {
        self.go_home()
    }

    /// Show the edit screen loaded with `work`.
    pub fn go_edit(&mut self, work: Work) -> Vec<Action> {
        self.screen = Screen::Edit;
        vec![Action::Navigate(Screen::Edit), Action::LoadWork(work)]
    }

    // --- Create ---

    /// Prompt for the name of a new work.
    pub fn create_new_work(&mut self) -> Vec<Action> {
        self.overlay.open(TextPurpose::CreateWork);
        vec![Action::OpenTextInput { purpose: TextPurpose::CreateWork, prefill: String::new() }]
    }

    /// Create a work from the name prompt. A rejected name raises the notice
    /// and leaves the prompt open.
    pub fn enter_create_work(&mut self, name: &str) -> Vec<Action> {
        match self.store.create(name) {
            Ok(id) => {
                log::info!("created work {id}");
                let mut actions = self.close_text_input();
                actions.extend(self.go_list());
                actions
            }
            Err(err) => {
                log::debug!("create rejected: {err}");
                self.show_notice(consts::INVALID_NAME_NOTICE)
            }
        }
    }

    /// Dismiss the notice modal.
    pub fn confirm_ok(&mut self) -> Vec<Action> {
        self.notice = None;
        vec![Action::HideNotice]
    }

    // --- Edit selection ---

    /// Select the named work and open it on the edit screen.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownWork`] if no work has that name; nothing changes.
    pub fn edit_work(&mut self, name: &str) -> Result<Vec<Action>, EditorError> {
        let work = self
            .store
            .get_recent_work(name)
            .cloned()
            .ok_or_else(|| EditorError::UnknownWork { name: name.to_owned() })?;
        self.store.select(work.id);
        Ok(self.go_edit(work))
    }

    // --- Delete ---

    /// Ask for confirmation before deleting the selected work.
    pub fn delete_work(&mut self) -> Vec<Action> {
        self.delete.request();
        vec![Action::ShowDialog]
    }

    /// Remove the selected work and return home. Safe to call without a
    /// prior request or without a selection.
    pub fn confirm_delete_work(&mut self) -> Vec<Action> {
        if !self.delete.confirm() {
            log::debug!("delete confirmed without a pending request");
        }
        if let Some(id) = self.store.selected_id() {
            if let Some(work) = self.store.remove_work(id) {
                log::info!("removed work {:?}", work.name);
            }
        }
        self.store.clear_selection();
        let mut actions = vec![Action::HideDialog];
        actions.extend(self.go_home());
        actions
    }

    /// Dismiss the delete dialog without touching the model.
    pub fn cancel_delete_work(&mut self) -> Vec<Action> {
        self.delete.cancel();
        vec![Action::HideDialog]
    }

    // --- Text ---

    /// Open the text overlay pre-filled with the selected work's text.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSelection`] if nothing is being edited.
    pub fn edit_text(&mut self) -> Result<Vec<Action>, EditorError> {
        let text = self.store.selected().ok_or(EditorError::NoSelection)?.text.clone();
        self.overlay.open(TextPurpose::EditText);
        Ok(vec![Action::OpenTextInput { purpose: TextPurpose::EditText, prefill: text }])
    }

    /// Commit overlay text to the selected work.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSelection`] if nothing is being edited.
    pub fn enter_edit_text(&mut self, text: String) -> Result<Vec<Action>, EditorError> {
        let work = self.store.selected_mut().ok_or(EditorError::NoSelection)?;
        work.set_text(text);
        let work = work.clone();
        let mut actions = self.close_text_input();
        actions.push(Action::LoadWork(work));
        Ok(actions)
    }

    /// Close the overlay without committing.
    pub fn close_text_input(&mut self) -> Vec<Action> {
        self.overlay.close();
        vec![Action::CloseTextInput]
    }

    // --- Rename ---

    /// Rename the selected work.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSelection`] if nothing is being edited, or a name
    /// validation error (surfaced as the notice by [`EditorCore::handle`]).
    pub fn rename_work(&mut self, name: &str) -> Result<Vec<Action>, EditorError> {
        let id = self.store.selected_id().ok_or(EditorError::NoSelection)?;
        self.store.update_list_name(id, name)?;
        let work = self.store.selected().cloned().ok_or(EditorError::NoSelection)?;
        Ok(vec![Action::LoadWork(work)])
    }

    // --- Style ---

    /// Apply a control value to the preview and the selected work.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSelection`] if nothing is being edited, or
    /// [`EditorError::InvalidNumber`] for a non-integer numeric value. In
    /// both cases neither the preview nor the model changes.
    pub fn change_style(&mut self, attribute: StyleAttribute, value: &str) -> Result<Vec<Action>, EditorError> {
        let work = self.store.selected_mut().ok_or(EditorError::NoSelection)?;
        let css_value = attribute.css_value(value)?;
        work.set_style(attribute, value);
        Ok(vec![
            Action::SetPreviewStyle { property: attribute.css_property(), value: css_value },
            Action::LoadWork(work.clone()),
        ])
    }

    fn show_notice(&mut self, message: &str) -> Vec<Action> {
        self.notice = Some(message.to_owned());
        vec![Action::ShowNotice(message.to_owned())]
    }
}
