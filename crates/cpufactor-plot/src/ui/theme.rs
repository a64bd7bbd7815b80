//! Color themes.

use crate::class::FactorClass;
use ratatui::style::Color;

pub struct Theme {
    pub foreground: Color,
    pub muted: Color,
    pub highlight: Color,
    pub unit: Color,
    pub multiple: Color,
    pub half: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            foreground: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            unit: Color::Red,
            multiple: Color::Green,
            half: Color::LightBlue,
        }
    }

    pub fn light() -> Self {
        Self {
            foreground: Color::Black,
            muted: Color::Gray,
            highlight: Color::Magenta,
            unit: Color::Rgb(222, 0, 0),
            multiple: Color::Rgb(0, 160, 0),
            half: Color::Rgb(0, 0, 222),
        }
    }

    /// Theme by name, falling back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn class_color(&self, class: FactorClass) -> Color {
        match class {
            FactorClass::Unit => self.unit,
            FactorClass::Multiple => self.multiple,
            FactorClass::Half => self.half,
        }
    }
}
