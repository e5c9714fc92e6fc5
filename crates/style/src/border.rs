use crate::color::Color;
use crate::property::Style;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderStyle {
    fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::None => "none",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `border` style property: width in pixels, line style, and color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Border {
    pub width: u32,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub fn new(width: u32, style: BorderStyle, color: Color) -> Self {
        Self { width, style, color }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 1,
            style: BorderStyle::default(),
            color: Color::new("#000000"),
        }
    }
}

impl Style for Border {
    fn name(&self) -> &'static str {
        "border"
    }

    fn value(&self) -> String {
        format!("{}px {} {}", self.width, self.style, self.color.as_str())
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declaration())
    }
}
