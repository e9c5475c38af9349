// Two-State Colors
// Selected/unselected color pairs and the resolver that fills them from a theme

use ratatui::style::Color;

/// Color used when neither an override nor a theme color is available
pub const NEUTRAL_COLOR: Color = Color::Reset;

/// A color with distinct values for the selected and unselected tab state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoStateColor {
    /// Color while the owning tab is selected
    pub selected: Color,
    /// Color for every other state
    pub unselected: Color,
}

impl TwoStateColor {
    pub fn new(selected: Color, unselected: Color) -> Self {
        Self { selected, unselected }
    }

    /// Same color in both states
    pub fn uniform(color: Color) -> Self {
        Self::new(color, color)
    }

    /// Pick the variant for the given selection state
    pub fn resolve(&self, selected: bool) -> Color {
        if selected {
            self.selected
        } else {
            self.unselected
        }
    }

    /// Keep the unselected variant and replace the selected one
    pub fn with_selected(self, selected: Color) -> Self {
        Self {
            selected,
            unselected: self.unselected,
        }
    }
}

impl Default for TwoStateColor {
    fn default() -> Self {
        Self::uniform(NEUTRAL_COLOR)
    }
}

/// Host environment colors used for defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    /// Primary color, used for the selected badge text
    pub primary: Option<Color>,
    /// Darker primary variant, used for the unselected badge text
    pub primary_dark: Option<Color>,
    /// Default badge background pair
    pub badge_background: Option<TwoStateColor>,
}

impl Theme {
    /// True when the theme cannot provide both primary colors
    pub fn is_incomplete(&self) -> bool {
        self.primary.is_none() || self.primary_dark.is_none()
    }
}

/// Resolves two-state colors from explicit overrides or theme defaults.
///
/// Resolution never fails: badges are cosmetic, so a missing theme color turns
/// into [`NEUTRAL_COLOR`] instead of an error.
pub struct ColorResolver;

impl ColorResolver {
    /// Use `explicit` verbatim, otherwise build the pair from the theme colors
    pub fn resolve(
        explicit: Option<TwoStateColor>,
        theme_selected: Option<Color>,
        theme_unselected: Option<Color>,
    ) -> TwoStateColor {
        explicit.unwrap_or_else(|| TwoStateColor {
            selected: theme_selected.unwrap_or(NEUTRAL_COLOR),
            unselected: theme_unselected.unwrap_or(NEUTRAL_COLOR),
        })
    }

    /// Primary when selected, primary-dark otherwise
    pub fn from_theme(theme: &Theme) -> TwoStateColor {
        Self::resolve(None, theme.primary, theme.primary_dark)
    }

    /// Badge background: explicit pair, then the theme's badge pair, then primary colors
    pub fn badge_background(explicit: Option<TwoStateColor>, theme: &Theme) -> TwoStateColor {
        Self::resolve(explicit.or(theme.badge_background), theme.primary, theme.primary_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        let explicit = TwoStateColor::new(Color::Red, Color::Blue);
        let resolved = ColorResolver::resolve(Some(explicit), Some(Color::Green), Some(Color::Yellow));
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn test_theme_defaults() {
        let theme = Theme {
            primary: Some(Color::Cyan),
            primary_dark: Some(Color::Blue),
            badge_background: None,
        };
        let resolved = ColorResolver::from_theme(&theme);
        assert_eq!(resolved.resolve(true), Color::Cyan);
        assert_eq!(resolved.resolve(false), Color::Blue);
    }

    #[test]
    fn test_missing_theme_falls_back_to_neutral() {
        let resolved = ColorResolver::from_theme(&Theme::default());
        assert_eq!(resolved, TwoStateColor::uniform(NEUTRAL_COLOR));
        assert!(Theme::default().is_incomplete());
    }

    #[test]
    fn test_badge_background_order() {
        let pair = TwoStateColor::new(Color::Magenta, Color::Gray);
        let theme = Theme {
            primary: Some(Color::Cyan),
            primary_dark: Some(Color::Blue),
            badge_background: Some(pair),
        };
        assert_eq!(ColorResolver::badge_background(None, &theme), pair);

        let explicit = TwoStateColor::uniform(Color::White);
        assert_eq!(ColorResolver::badge_background(Some(explicit), &theme), explicit);

        let bare = Theme { badge_background: None, ..theme };
        assert_eq!(ColorResolver::badge_background(None, &bare).selected, Color::Cyan);
    }

    #[test]
    fn test_with_selected_keeps_unselected() {
        let merged = TwoStateColor::new(Color::Red, Color::Blue).with_selected(Color::Green);
        assert_eq!(merged, TwoStateColor::new(Color::Green, Color::Blue));
    }
}
