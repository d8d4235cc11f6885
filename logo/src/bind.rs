//! Element/event binding table and registration.
//!
//! The host renders controls with the ids in [`crate::consts`] and then calls
//! [`register_event_handlers`] with something that can find elements by id.
//! Elements that are not in the current DOM are skipped without error; the
//! host calls this again whenever it rebuilds a screen or opens a modal.
//!
//! When a bound element fires, the host resolves its [`Trigger`] into a
//! [`Command`] with [`Trigger::resolve`], reading control values as needed.

#[cfg(test)]
#[path = "bind_test.rs"]
mod bind_test;


use crate::consts;
use crate::editor::Command;
use crate::style::StyleAttribute;

/// DOM event kinds the editor listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Change,
}

impl EventKind {
    /// DOM event name as passed to `addEventListener`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Change => "change",
        }
    }
}

/// What a bound element does when its event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    CreateNewWork,
    EnterCreateWork,
    CancelCreateWork,
    ConfirmOk,
    GoHome,
    DeleteWork,
    ConfirmDeleteWork,
    CancelDeleteWork,
    EditText,
    EnterEditText,
    CancelEditText,
    RenameWork,
    ChangeStyle(StyleAttribute),
}

/// One row of the binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub element_id: &'static str,
    pub event: EventKind,
    pub trigger: Trigger,
}

const fn click(element_id: &'static str, trigger: Trigger) -> Binding {
    Binding { element_id, event: EventKind::Click, trigger }
}

const fn input(element_id: &'static str, trigger: Trigger) -> Binding {
    Binding { element_id, event: EventKind::Input, trigger }
}

/// Every controller-bound control except the per-work links on the home
/// screen; those resolve through [`recent_work_command`].
pub const BINDINGS: [Binding; 20] = [
    // Home screen.
    click(consts::HOME_NEW_WORK_BUTTON, Trigger::CreateNewWork),
    // Edit screen.
    click(consts::EDIT_HOME_LINK, Trigger::GoHome),
    click(consts::EDIT_TRASH, Trigger::DeleteWork),
    Binding { element_id: consts::EDIT_NAME_TEXTFIELD, event: EventKind::Change, trigger: Trigger::RenameWork },
    click(consts::EDIT_TEXT_BUTTON, Trigger::EditText),
    // Modals.
    click(consts::YES_NO_MODAL_YES_BUTTON, Trigger::ConfirmDeleteWork),
    click(consts::YES_NO_MODAL_NO_BUTTON, Trigger::CancelDeleteWork),
    click(consts::TEXT_INPUT_MODAL_ENTER_BUTTON, Trigger::EnterCreateWork),
    click(consts::TEXT_INPUT_MODAL_CANCEL_BUTTON, Trigger::CancelCreateWork),
    click(consts::EDIT_TEXT_INPUT_MODAL_ENTER_BUTTON, Trigger::EnterEditText),
    click(consts::EDIT_TEXT_INPUT_MODAL_CANCEL_BUTTON, Trigger::CancelEditText),
    click(consts::CONFIRM_MODAL_OK_BUTTON, Trigger::ConfirmOk),
    // Style controls.
    input(consts::TEXT_COLOR_PICKER, Trigger::ChangeStyle(StyleAttribute::TextColor)),
    input(consts::BACKGROUND_COLOR_PICKER, Trigger::ChangeStyle(StyleAttribute::BackgroundColor)),
    input(consts::BORDER_COLOR_PICKER, Trigger::ChangeStyle(StyleAttribute::BorderColor)),
    input(consts::FONT_SIZE_SLIDER, Trigger::ChangeStyle(StyleAttribute::FontSize)),
    input(consts::BORDER_RADIUS_SLIDER, Trigger::ChangeStyle(StyleAttribute::BorderRadius)),
    input(consts::BORDER_THICKNESS_SLIDER, Trigger::ChangeStyle(StyleAttribute::BorderThickness)),
    input(consts::PADDING_SLIDER, Trigger::ChangeStyle(StyleAttribute::Padding)),
    input(consts::MARGIN_SLIDER, Trigger::ChangeStyle(StyleAttribute::Margin)),
];

/// Something that can attach a listener to an element looked up by id.
pub trait ElementRegistry {
    /// Attach `trigger` to `event` on the element with `element_id`.
    /// Returns `false` when the element is not present.
    fn bind(&mut self, element_id: &str, event: EventKind, trigger: Trigger) -> bool;
}

/// Bind every row of [`BINDINGS`] whose element is present. Returns the
/// number of rows bound.
pub fn register_event_handlers<R: ElementRegistry + ?Sized>(registry: &mut R) -> usize {
    let bound = BINDINGS
        .iter()
        .filter(|b| registry.bind(b.element_id, b.event, b.trigger))
        .count();
    log::debug!("bound {bound} of {} controls", BINDINGS.len());
    bound
}

/// Command for a click on a recent-work link.
#[must_use]
pub fn recent_work_command(work_name: &str) -> Command {
    Command::EditWork { name: work_name.to_owned() }
}

impl Trigger {
    /// Build the command for this trigger. `read_value` returns the current
    /// value of the control with the given element id, or `None` when the
    /// control is missing; triggers that need a missing value resolve to
    /// `None`.
    pub fn resolve<F>(self, mut read_value: F) -> Option<Command>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let command = match self {
            Self::CreateNewWork => Command::CreateNewWork,
            Self::EnterCreateWork => Command::EnterCreateWork { name: read_value(consts::TEXT_INPUT_MODAL_TEXTFIELD)? },
            Self::CancelCreateWork => Command::CancelCreateWork,
            Self::ConfirmOk => Command::ConfirmOk,
            Self::GoHome => Command::GoHome,
            Self::DeleteWork => Command::DeleteWork,
            Self::ConfirmDeleteWork => Command::ConfirmDeleteWork,
            Self::CancelDeleteWork => Command::CancelDeleteWork,
            Self::EditText => Command::EditText,
            Self::EnterEditText => Command::EnterEditText { text: read_value(consts::EDIT_TEXT_INPUT_MODAL_TEXTFIELD)? },
            Self::CancelEditText => Command::CancelEditText,
            Self::RenameWork => Command::RenameWork { name: read_value(consts::EDIT_NAME_TEXTFIELD)? },
            Self::ChangeStyle(attribute) => {
                Command::ChangeStyle { attribute, value: read_value(attribute.control_id())? }
            }
        };
        Some(command)
    }
}
