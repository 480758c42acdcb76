//! Light and night themes for the terminal user interface.

use ratatui::style::Color;

// These support the two visual variants of the screen:
// a white surface with a peach input field, or near-black everything.

/// Fixed set of colors for one theme variant.
pub struct Palette {
    /// Screen background behind every widget.
    pub background: Color,
    /// Primary text color.
    pub text: Color,
    /// Fill of the draft input line.
    pub input_background: Color,
    /// Border color for blocks and task row separators.
    pub border: Color,
    /// Checkbox glyph color.
    pub checkbox: Color,
    /// Accent for the add action, focus border and selection.
    pub accent: Color,
    /// Delete affordance color.
    pub delete: Color,
    /// Text color of completed tasks.
    pub completed: Color,
    /// Placeholder and secondary text.
    pub placeholder: Color,
}

/// Palette for light mode.
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    text: Color::Rgb(51, 51, 51),
    input_background: Color::Rgb(255, 229, 204),
    border: Color::Rgb(229, 229, 229),
    checkbox: Color::Rgb(0, 0, 0),
    accent: Color::Rgb(137, 207, 240),
    delete: Color::Rgb(255, 77, 77),
    completed: Color::Rgb(170, 170, 170),
    placeholder: Color::Rgb(85, 85, 85),
};

/// Palette for night mode.
pub const DARK: Palette = Palette {
    background: Color::Rgb(0, 0, 0),
    text: Color::Rgb(255, 255, 255),
    input_background: Color::Rgb(51, 51, 51),
    border: Color::Rgb(85, 85, 85),
    checkbox: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(137, 207, 240),
    delete: Color::Rgb(255, 77, 77),
    completed: Color::Rgb(170, 170, 170),
    placeholder: Color::Rgb(221, 221, 221),
};

/// UI theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Check if night mode is active.
    pub fn is_dark(&self) -> bool {
        matches!(self, Mode::Dark)
    }

    /// Flip between light and night mode.
    pub fn toggle(&mut self) {
        *self = match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        };
    }

    /// The fixed palette for the active mode.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Mode::Light => &LIGHT,
            Mode::Dark => &DARK,
        }
    }

    /// Label shown in the header next to the theme switch hint.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Light => "Light Mode",
            Mode::Dark => "Night Mode",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Light
    }
}
