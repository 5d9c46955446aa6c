//! Visual configuration for the controls.
//!
//! Every control expresses its state through the opacity of a single tint
//! color. The tables here hold those opacities along with the geometry
//! ratios. All types deserialize with defaults for missing fields, so a host
//! can load a partial theme from its own config file.

use serde::{Deserialize, Serialize};
use tbdom::{Color, Fill};

/// Opacity of one layer in each interaction state.
///
/// `active` means checked for a checkbox, pressed for a button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateOpacity {
    pub idle: f32,
    pub hover: f32,
    pub active: f32,
}

impl StateOpacity {
    pub const fn new(idle: f32, hover: f32, active: f32) -> Self {
        Self {
            idle,
            hover,
            active,
        }
    }

    /// Active wins over hover, hover over idle.
    pub fn resolve(&self, active: bool, hover: bool) -> f32 {
        if active {
            self.active
        } else if hover {
            self.hover
        } else {
            self.idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxStyle {
    pub color: Color,
    pub background: StateOpacity,
    pub glyph: StateOpacity,
    /// Corner radius as a fraction of the box side.
    pub corner_ratio: f32,
    /// Glyph point size as a fraction of the box side.
    pub glyph_ratio: f32,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            background: StateOpacity::new(0.1, 0.15, 0.4),
            glyph: StateOpacity::new(0.0, 0.15, 0.85),
            corner_ratio: 0.2,
            glyph_ratio: 0.6,
        }
    }
}

impl CheckboxStyle {
    pub fn background_fill(&self, checked: bool, hover: bool) -> Fill {
        Fill::new(self.color, self.background.resolve(checked, hover))
    }

    pub fn glyph_fill(&self, checked: bool, hover: bool) -> Fill {
        Fill::new(self.color, self.glyph.resolve(checked, hover))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolButtonStyle {
    pub color: Color,
    pub background: StateOpacity,
    pub glyph: StateOpacity,
    /// Corner radius as a fraction of the smaller side.
    pub corner_ratio: f32,
}

impl Default for SymbolButtonStyle {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            background: StateOpacity::new(0.0, 0.15, 0.3),
            glyph: StateOpacity::new(0.7, 0.7, 1.0),
            corner_ratio: 0.2,
        }
    }
}

impl SymbolButtonStyle {
    pub fn background_fill(&self, pressed: bool, hover: bool) -> Fill {
        Fill::new(self.color, self.background.resolve(pressed, hover))
    }

    pub fn glyph_fill(&self, pressed: bool, hover: bool) -> Fill {
        Fill::new(self.color, self.glyph.resolve(pressed, hover))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    pub color: Color,
    /// Track opacity while the pointer is away.
    pub background: f32,
    /// Track opacity while the pointer is over the control.
    pub background_hover: f32,
    /// Opacity of the selected segment's highlight.
    pub highlight: f32,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            background: 0.1,
            background_hover: 0.13,
            highlight: 0.4,
        }
    }
}

impl PickerStyle {
    pub fn background_fill(&self, hover: bool) -> Fill {
        let opacity = if hover {
            self.background_hover
        } else {
            self.background
        };
        Fill::new(self.color, opacity)
    }

    pub fn highlight_fill(&self) -> Fill {
        Fill::new(self.color, self.highlight)
    }
}

/// Styles for all controls, applied by hosts that build many controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub checkbox: CheckboxStyle,
    pub symbol_button: SymbolButtonStyle,
    pub picker: PickerStyle,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tint every control with the same color.
    pub fn tint(mut self, color: Color) -> Self {
        self.checkbox.color = color;
        self.symbol_button.color = color;
        self.picker.color = color;
        self
    }

    pub fn checkbox(mut self, style: CheckboxStyle) -> Self {
        self.checkbox = style;
        self
    }

    pub fn symbol_button(mut self, style: SymbolButtonStyle) -> Self {
        self.symbol_button = style;
        self
    }

    pub fn picker(mut self, style: PickerStyle) -> Self {
        self.picker = style;
        self
    }
}
