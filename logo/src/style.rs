//! Style attributes and the table that maps each one to its control, CSS
//! property, and unit.
//!
//! Every visual attribute of a work is edited through the same handler; the
//! differences between them live entirely in [`StyleSpec`].

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;


use crate::consts;
use crate::error::EditorError;

/// A visual attribute of a work that has its own control on the edit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    TextColor,
    BackgroundColor,
    BorderColor,
    FontSize,
    BorderRadius,
    BorderThickness,
    Padding,
    Margin,
}

/// CSS unit appended to a value when it is written to the preview element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Value is used verbatim (colors).
    None,
    /// Value is parsed as an integer and suffixed with `px`.
    Px,
}

/// Configuration row for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub attribute: StyleAttribute,
    /// Element id of the control that edits this attribute.
    pub control_id: &'static str,
    /// CSS property set on the preview element.
    pub css_property: &'static str,
    pub unit: Unit,
}

/// One row per attribute, in the order the controls appear on the edit screen.
pub const STYLE_TABLE: [StyleSpec; 8] = [
    StyleSpec {
        attribute: StyleAttribute::TextColor,
        control_id: consts::TEXT_COLOR_PICKER,
        css_property: "color",
        unit: Unit::None,
    },
    StyleSpec {
        attribute: StyleAttribute::BackgroundColor,
        control_id: consts::BACKGROUND_COLOR_PICKER,
        css_property: "background-color",
        unit: Unit::None,
    },
    StyleSpec {
        attribute: StyleAttribute::BorderColor,
        control_id: consts::BORDER_COLOR_PICKER,
        css_property: "border-color",
        unit: Unit::None,
    },
    StyleSpec {
        attribute: StyleAttribute::FontSize,
        control_id: consts::FONT_SIZE_SLIDER,
        css_property: "font-size",
        unit: Unit::Px,
    },
    StyleSpec {
        attribute: StyleAttribute::BorderRadius,
        control_id: consts::BORDER_RADIUS_SLIDER,
        css_property: "border-radius",
        unit: Unit::Px,
    },
    StyleSpec {
        attribute: StyleAttribute::BorderThickness,
        control_id: consts::BORDER_THICKNESS_SLIDER,
        css_property: "border-width",
        unit: Unit::Px,
    },
    StyleSpec {
        attribute: StyleAttribute::Padding,
        control_id: consts::PADDING_SLIDER,
        css_property: "padding",
        unit: Unit::Px,
    },
    StyleSpec {
        attribute: StyleAttribute::Margin,
        control_id: consts::MARGIN_SLIDER,
        css_property: "margin",
        unit: Unit::Px,
    },
];

impl StyleAttribute {
    /// All attributes, in table order.
    pub const ALL: [StyleAttribute; 8] = [
        Self::TextColor,
        Self::BackgroundColor,
        Self::BorderColor,
        Self::FontSize,
        Self::BorderRadius,
        Self::BorderThickness,
        Self::Padding,
        Self::Margin,
    ];

    /// The configuration row for this attribute.
    #[must_use]
    pub fn spec(self) -> &'static StyleSpec {
        // Table rows are declared in the same order as `ALL`.
        &STYLE_TABLE[self as usize]
    }

    #[must_use]
    pub fn control_id(self) -> &'static str {
        self.spec().control_id
    }

    #[must_use]
    pub fn css_property(self) -> &'static str {
        self.spec().css_property
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        self.spec().unit == Unit::Px
    }

    /// Convert a raw control value to the value written to the preview's
    /// inline style.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidNumber`] if a numeric attribute's value
    /// does not start with an integer.
    pub fn css_value(self, raw: &str) -> Result<String, EditorError> {
        match self.spec().unit {
            Unit::None => Ok(raw.to_owned()),
            Unit::Px => {
                let n = parse_leading_int(raw)
                    .ok_or_else(|| EditorError::InvalidNumber { attribute: self, value: raw.to_owned() })?;
                Ok(format!("{n}px"))
            }
        }
    }
}

/// Parse the integer prefix of `raw`, ignoring leading whitespace and any
/// trailing non-digit characters (`" 24.7em"` → 24). Digit runs too long for
/// an `i64` saturate.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    match digits[..end].parse::<i64>() {
        Ok(n) => Some(sign * n),
        Err(_) if sign < 0 => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
