// Style Configuration
// Per-widget badge/tab styling shared by every composite view

use ratatui::style::Modifier;
use serde::Deserialize;

use super::color::TwoStateColor;

/// Default title width (in cells) while a badge is shown
pub const DEFAULT_TAB_TEXT_MAX_WIDTH: u16 = 12;

/// Terminal stand-in for a typeface: a set of text modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    modifiers: Modifier,
}

impl Font {
    pub fn new(modifiers: Modifier) -> Self {
        Self { modifiers }
    }

    pub fn normal() -> Self {
        Self::new(Modifier::empty())
    }

    pub fn bold() -> Self {
        Self::new(Modifier::BOLD)
    }

    pub fn italic() -> Self {
        Self::new(Modifier::ITALIC)
    }

    pub fn modifiers(&self) -> Modifier {
        self.modifiers
    }

    /// Parse a font name such as "bold", "italic" or "bold_italic"
    ///
    /// Names are joined with `_` or `+`. Returns `None` for unknown parts.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut modifiers = Modifier::empty();
        for part in name.to_lowercase().split(['_', '+']) {
            modifiers |= match part.trim() {
                "normal" | "regular" => Modifier::empty(),
                "bold" => Modifier::BOLD,
                "italic" => Modifier::ITALIC,
                "underlined" | "underline" => Modifier::UNDERLINED,
                "dim" => Modifier::DIM,
                _ => return None,
            };
        }
        Some(Self::new(modifiers))
    }
}

/// Where text is elided when it exceeds its available width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateAt {
    Start,
    Middle,
    End,
}

/// Style attributes owned by the tab strip
///
/// Sizes of `0.0` and `None` fields mean "leave the platform default".
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub badge_background_colors: TwoStateColor,
    pub badge_text_colors: TwoStateColor,
    pub badge_text_size: f32,
    pub tab_text_size: f32,
    pub badge_font: Option<Font>,
    pub tab_font: Option<Font>,
    pub badge_truncate_at: Option<TruncateAt>,
    pub tab_truncate_at: Option<TruncateAt>,
    /// Title clamp applied while a badge is visible
    pub tab_text_max_width: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            badge_background_colors: TwoStateColor::default(),
            badge_text_colors: TwoStateColor::default(),
            badge_text_size: 0.0,
            tab_text_size: 0.0,
            badge_font: None,
            tab_font: None,
            badge_truncate_at: None,
            tab_truncate_at: None,
            tab_text_max_width: DEFAULT_TAB_TEXT_MAX_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_from_name() {
        assert_eq!(Font::from_name("bold"), Some(Font::bold()));
        assert_eq!(
            Font::from_name("Bold_Italic").map(|f| f.modifiers()),
            Some(Modifier::BOLD | Modifier::ITALIC)
        );
        assert_eq!(Font::from_name("normal"), Some(Font::normal()));
        assert_eq!(Font::from_name("comic_sans"), None);
    }

    #[test]
    fn test_truncate_at_deserialize() {
        let value: TruncateAt = serde_yaml::from_str("middle").unwrap();
        assert_eq!(value, TruncateAt::Middle);
    }
}
