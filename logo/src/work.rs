//! A single saved logo design.

#[cfg(test)]
#[path = "work_test.rs"]
mod work_test;

use uuid::Uuid;

use crate::consts;
use crate::style::StyleAttribute;

/// Stable identifier for a work. Survives renames.
pub type WorkId = Uuid;

/// One saved logo. Style fields hold the raw control value (numeric fields
/// are unitless, e.g. `"24"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    pub id: WorkId,
    pub name: String,
    pub text: String,
    pub text_color: String,
    pub background_color: String,
    pub border_color: String,
    pub border_radius: String,
    pub border_thickness: String,
    pub padding: String,
    pub margin: String,
    pub font_size: String,
}

impl Work {
    /// A new work with default styling whose text is its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            text: name.clone(),
            name,
            text_color: consts::DEFAULT_TEXT_COLOR.to_owned(),
            background_color: consts::DEFAULT_BACKGROUND_COLOR.to_owned(),
            border_color: consts::DEFAULT_BORDER_COLOR.to_owned(),
            border_radius: consts::DEFAULT_BORDER_RADIUS.to_owned(),
            border_thickness: consts::DEFAULT_BORDER_THICKNESS.to_owned(),
            padding: consts::DEFAULT_PADDING.to_owned(),
            margin: consts::DEFAULT_MARGIN.to_owned(),
            font_size: consts::DEFAULT_FONT_SIZE.to_owned(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_text_color(&mut self, value: impl Into<String>) {
        self.text_color = value.into();
    }

    pub fn set_background_color(&mut self, value: impl Into<String>) {
        self.background_color = value.into();
    }

    pub fn set_border_color(&mut self, value: impl Into<String>) {
        self.border_color = value.into();
    }

    pub fn set_border_radius(&mut self, value: impl Into<String>) {
        self.border_radius = value.into();
    }

    pub fn set_border_thickness(&mut self, value: impl Into<String>) {
        self.border_thickness = value.into();
    }

    pub fn set_font_size(&mut self, value: impl Into<String>) {
        self.font_size = value.into();
    }

    pub fn set_padding(&mut self, value: impl Into<String>) {
        self.padding = value.into();
    }

    pub fn set_margin(&mut self, value: impl Into<String>) {
        self.margin = value.into();
    }

    /// Route a style write to the matching setter.
    pub fn set_style(&mut self, attribute: StyleAttribute, value: impl Into<String>) {
        match attribute {
            StyleAttribute::TextColor => self.set_text_color(value),
            StyleAttribute::BackgroundColor => self.set_background_color(value),
            StyleAttribute::BorderColor => self.set_border_color(value),
            StyleAttribute::FontSize => self.set_font_size(value),
            StyleAttribute::BorderRadius => self.set_border_radius(value),
            StyleAttribute::BorderThickness => self.set_border_thickness(value),
            StyleAttribute::Padding => self.set_padding(value),
            StyleAttribute::Margin => self.set_margin(value),
        }
    }

    /// The stored (raw) value of a style attribute.
    #[must_use]
    pub fn style(&self, attribute: StyleAttribute) -> &str {
        match attribute {
            StyleAttribute::TextColor => &self.text_color,
            StyleAttribute::BackgroundColor => &self.background_color,
            StyleAttribute::BorderColor => &self.border_color,
            StyleAttribute::FontSize => &self.font_size,
            StyleAttribute::BorderRadius => &self.border_radius,
            StyleAttribute::BorderThickness => &self.border_thickness,
            StyleAttribute::Padding => &self.padding,
            StyleAttribute::Margin => &self.margin,
        }
    }

    /// `(css property, css value)` pairs for rendering the preview. Stored
    /// values that fail to parse are skipped.
    #[must_use]
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        StyleAttribute::ALL
            .iter()
            .filter_map(|&attribute| match attribute.css_value(self.style(attribute)) {
                Ok(value) => Some((attribute.css_property(), value)),
                Err(_) => None,
            })
            .collect()
    }
}
