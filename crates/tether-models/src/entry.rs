use std::fmt;

use tether_core::Color;

/// A color together with the label shown next to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorEntry {
    color: Color,
    label: String,
}

impl ColorEntry {
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.color)
    }
}

/// The six selectable colors, in display order.
pub fn standard_catalog() -> Vec<ColorEntry> {
    vec![
        ColorEntry::new(Color::RED, "red"),
        ColorEntry::new(Color::WHITE, "white"),
        ColorEntry::new(Color::GREEN, "green"),
        ColorEntry::new(Color::YELLOW, "yellow"),
        ColorEntry::new(Color::BLUE, "blue"),
        ColorEntry::new(Color::BLACK, "black"),
    ]
}
