//! DOM element identifiers and model defaults shared by the core and the client.

// ── Home screen ─────────────────────────────────────────────────

pub const HOME_SCREEN: &str = "appster_home";
pub const HOME_NEW_WORK_BUTTON: &str = "appster_home_new_work_button";
pub const HOME_RECENT_WORK_LIST: &str = "appster_home_recent_work_list";

/// Attribute on each recent-work link carrying the work's name.
pub const RECENT_WORK_NAME_ATTR: &str = "data-work-name";

// ── Edit screen ─────────────────────────────────────────────────

pub const EDIT_SCREEN: &str = "appster_edit";
pub const EDIT_HOME_LINK: &str = "appster_edit_home_link";
pub const EDIT_TRASH: &str = "appster_edit_trash";
pub const EDIT_NAME_TEXTFIELD: &str = "appster_edit_name_textfield";

/// The preview element that receives inline styles.
pub const LOGO_TEXT: &str = "gologolo_text";
pub const EDIT_TEXT_BUTTON: &str = "gologolo_edit_text_button";
pub const TEXT_COLOR_PICKER: &str = "gologolo_text_color_picker";
pub const BACKGROUND_COLOR_PICKER: &str = "gologolo_background_color_picker";
pub const BORDER_COLOR_PICKER: &str = "gologolo_border_color_picker";
pub const FONT_SIZE_SLIDER: &str = "gologolo_font_size_slider";
pub const BORDER_RADIUS_SLIDER: &str = "gologolo_border_radius_slider";
pub const BORDER_THICKNESS_SLIDER: &str = "gologolo_border_thickness_slider";
pub const PADDING_SLIDER: &str = "gologolo_padding_slider";
pub const MARGIN_SLIDER: &str = "gologolo_margin_slider";

// ── Modals ──────────────────────────────────────────────────────

pub const YES_NO_MODAL: &str = "appster_yes_no_modal";
pub const YES_NO_MODAL_YES_BUTTON: &str = "appster_yes_no_modal_yes_button";
pub const YES_NO_MODAL_NO_BUTTON: &str = "appster_yes_no_modal_no_button";

pub const TEXT_INPUT_MODAL: &str = "appster_text_input_modal";
pub const TEXT_INPUT_MODAL_TEXTFIELD: &str = "appster_text_input_modal_textfield";
pub const TEXT_INPUT_MODAL_ENTER_BUTTON: &str = "appster_text_input_modal_enter_button";
pub const TEXT_INPUT_MODAL_CANCEL_BUTTON: &str = "appster_text_input_modal_cancel_button";

pub const EDIT_TEXT_INPUT_MODAL: &str = "appster_edit_text_input_modal";
pub const EDIT_TEXT_INPUT_MODAL_TEXTFIELD: &str = "appster_edit_text_input_modal_textfield";
pub const EDIT_TEXT_INPUT_MODAL_ENTER_BUTTON: &str = "appster_edit_text_input_modal_enter_button";
pub const EDIT_TEXT_INPUT_MODAL_CANCEL_BUTTON: &str = "appster_edit_text_input_modal_cancel_button";

pub const CONFIRM_MODAL: &str = "appster_confirm_modal";
pub const CONFIRM_MODAL_OK_BUTTON: &str = "appster_confirm_modal_ok_button";

// ── Model defaults ──────────────────────────────────────────────

pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_BORDER_COLOR: &str = "#000000";
pub const DEFAULT_FONT_SIZE: &str = "24";
pub const DEFAULT_BORDER_RADIUS: &str = "0";
pub const DEFAULT_BORDER_THICKNESS: &str = "0";
pub const DEFAULT_PADDING: &str = "0";
pub const DEFAULT_MARGIN: &str = "0";

/// Shown in the confirm modal when a new or renamed work's name is rejected.
pub const INVALID_NAME_NOTICE: &str = "Logo names must be at least one character long and unique.";
