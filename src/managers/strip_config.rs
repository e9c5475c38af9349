// Strip Configuration
// YAML configuration structures and their conversion into a validated style

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;

use crate::core::{
    ColorResolver, Font, Icon, StyleConfig, Tab, Theme, TruncateAt, TwoStateColor,
    DEFAULT_TAB_TEXT_MAX_WIDTH,
};
use crate::elements::DEFAULT_TRANSITION;
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Two-state color from YAML: one color for both states, or an explicit pair
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TwoStateColorYaml {
    Uniform(String),
    Pair { selected: String, unselected: String },
}

/// Theme colors from YAML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeYaml {
    pub primary: Option<String>,
    pub primary_dark: Option<String>,
    pub badge_background: Option<TwoStateColorYaml>,
}

/// Tab definition from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab title (may be empty for icon-only tabs)
    #[serde(default)]
    pub title: String,
    /// Optional icon glyph
    pub icon: Option<String>,
}

/// Badged tab strip configuration from YAML (every field optional)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StripConfigYaml {
    pub badge_background_color: Option<TwoStateColorYaml>,
    pub badge_text_color: Option<TwoStateColorYaml>,
    /// Merged into the background pair as its selected variant
    pub badge_selected_background_color: Option<String>,
    /// Merged into the text pair as its selected variant
    pub badge_selected_text_color: Option<String>,
    pub badge_text_size: Option<f32>,
    pub tab_text_size: Option<f32>,
    pub badge_font: Option<String>,
    pub tab_font: Option<String>,
    pub badge_truncate_at: Option<TruncateAt>,
    pub tab_truncate_at: Option<TruncateAt>,
    /// Title width while a badge is visible (defaults to 12)
    pub tab_text_max_width: Option<u16>,
    pub tab_text_colors: Option<TwoStateColorYaml>,
    /// Badge transition length (defaults to 250)
    pub transition_millis: Option<u64>,
    pub theme: ThemeYaml,
    pub tabs: Vec<TabConfigYaml>,
}

/// Everything a strip needs at construction, already validated
#[derive(Debug, Clone)]
pub struct StripSettings {
    pub style: StyleConfig,
    pub theme: Theme,
    /// Override for the base strip's tab text colors
    pub tab_text_colors: Option<TwoStateColor>,
    pub transition: Duration,
    pub tabs: Vec<Tab>,
}

/// Load strip configuration from a YAML file
pub fn load_config(path: &Path) -> Result<StripConfigYaml> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strip config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid strip config {}", path.display()))
}

/// Parse strip configuration from YAML text
pub fn parse_config(contents: &str) -> Result<StripConfigYaml> {
    let config: StripConfigYaml = serde_yaml::from_str(contents)?;
    Ok(config)
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn color_or_warn(field: &str, value: &str) -> Option<Color> {
    let color = parse_color(value);
    if color.is_none() {
        tracing::warn!(target: "badged_tabs", field, value, "Unknown color, ignoring");
    }
    color
}

fn font_or_warn(field: &str, value: &str) -> Option<Font> {
    let font = Font::from_name(value);
    if font.is_none() {
        tracing::warn!(target: "badged_tabs", field, value, "Unknown font, ignoring");
    }
    font
}

fn convert_two_state(field: &str, value: &TwoStateColorYaml) -> Option<TwoStateColor> {
    match value {
        TwoStateColorYaml::Uniform(color) => color_or_warn(field, color).map(TwoStateColor::uniform),
        TwoStateColorYaml::Pair { selected, unselected } => Some(TwoStateColor::new(
            color_or_warn(field, selected)?,
            color_or_warn(field, unselected)?,
        )),
    }
}

/// Convert YAML theme colors to a theme
pub fn convert_theme(config: &ThemeYaml) -> Theme {
    Theme {
        primary: config.primary.as_deref().and_then(|c| color_or_warn("theme.primary", c)),
        primary_dark: config
            .primary_dark
            .as_deref()
            .and_then(|c| color_or_warn("theme.primary_dark", c)),
        badge_background: config
            .badge_background
            .as_ref()
            .and_then(|c| convert_two_state("theme.badge_background", c)),
    }
}

/// Convert YAML attributes, merged with theme defaults, into a style
pub fn convert_style_config(config: &StripConfigYaml, theme: &Theme) -> StyleConfig {
    let explicit_background = config
        .badge_background_color
        .as_ref()
        .and_then(|c| convert_two_state("badge_background_color", c));
    let mut badge_background_colors = ColorResolver::badge_background(explicit_background, theme);

    let explicit_text = config
        .badge_text_color
        .as_ref()
        .and_then(|c| convert_two_state("badge_text_color", c));
    let mut badge_text_colors = ColorResolver::resolve(explicit_text, theme.primary, theme.primary_dark);

    // Selected overrides merge into whatever pair was resolved above
    if let Some(selected) = config
        .badge_selected_background_color
        .as_deref()
        .and_then(|c| color_or_warn("badge_selected_background_color", c))
    {
        badge_background_colors = badge_background_colors.with_selected(selected);
    }
    if let Some(selected) = config
        .badge_selected_text_color
        .as_deref()
        .and_then(|c| color_or_warn("badge_selected_text_color", c))
    {
        badge_text_colors = badge_text_colors.with_selected(selected);
    }

    StyleConfig {
        badge_background_colors,
        badge_text_colors,
        badge_text_size: config.badge_text_size.filter(|s| *s > 0.0).unwrap_or(0.0),
        tab_text_size: config.tab_text_size.filter(|s| *s > 0.0).unwrap_or(0.0),
        badge_font: config.badge_font.as_deref().and_then(|f| font_or_warn("badge_font", f)),
        tab_font: config.tab_font.as_deref().and_then(|f| font_or_warn("tab_font", f)),
        badge_truncate_at: config.badge_truncate_at,
        tab_truncate_at: config.tab_truncate_at,
        tab_text_max_width: config.tab_text_max_width.unwrap_or(DEFAULT_TAB_TEXT_MAX_WIDTH),
    }
}

/// Convert YAML tab definitions to unbuilt tabs
pub fn create_tabs(config: &StripConfigYaml) -> Vec<Tab> {
    config
        .tabs
        .iter()
        .map(|t| {
            let tab = Tab::new(t.title.clone());
            match &t.icon {
                Some(glyph) => tab.with_icon(Icon::new(glyph.clone())),
                None => tab,
            }
        })
        .collect()
}

/// Convert a whole YAML configuration
pub fn convert_strip_config(config: &StripConfigYaml) -> StripSettings {
    let theme = convert_theme(&config.theme);
    StripSettings {
        style: convert_style_config(config, &theme),
        theme,
        tab_text_colors: config
            .tab_text_colors
            .as_ref()
            .and_then(|c| convert_two_state("tab_text_colors", c)),
        transition: config
            .transition_millis
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TRANSITION),
        tabs: create_tabs(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NEUTRAL_COLOR;

    const SAMPLE: &str = r##"
badge_text_color: white
badge_selected_background_color: "#E53935"
badge_font: bold
tab_truncate_at: end
tab_text_max_width: 8
transition_millis: 100
theme:
  primary: cyan
  primary_dark: dark_cyan
  badge_background:
    selected: red
    unselected: gray
tabs:
  - title: SECTIONS 1
    icon: "✉"
  - title: SECT 2
"##;

    #[test]
    fn test_convert_sample() {
        let config = parse_config(SAMPLE).unwrap();
        let settings = convert_strip_config(&config);

        assert_eq!(settings.style.badge_text_colors, TwoStateColor::uniform(Color::White));
        assert_eq!(
            settings.style.badge_background_colors,
            TwoStateColor::new(Color::Rgb(0xE5, 0x39, 0x35), Color::Gray)
        );
        assert_eq!(settings.style.badge_font, Some(Font::bold()));
        assert_eq!(settings.style.tab_truncate_at, Some(TruncateAt::End));
        assert_eq!(settings.style.tab_text_max_width, 8);
        assert_eq!(settings.transition, Duration::from_millis(100));
        assert_eq!(settings.tabs.len(), 2);
        assert_eq!(settings.tabs[0].icon().map(Icon::glyph), Some("✉"));
        assert!(settings.tabs[1].icon().is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("{}").unwrap();
        let settings = convert_strip_config(&config);

        assert!(settings.theme.is_incomplete());
        assert_eq!(settings.style.badge_text_colors, TwoStateColor::uniform(NEUTRAL_COLOR));
        assert_eq!(settings.style.tab_text_size, 0.0);
        assert_eq!(settings.style.tab_text_max_width, DEFAULT_TAB_TEXT_MAX_WIDTH);
        assert_eq!(settings.transition, DEFAULT_TRANSITION);
        assert!(settings.tabs.is_empty());
    }

    #[test]
    fn test_badge_text_defaults_to_theme() {
        let config = parse_config("theme: { primary: cyan, primary_dark: blue }").unwrap();
        let settings = convert_strip_config(&config);
        assert_eq!(settings.style.badge_text_colors, TwoStateColor::new(Color::Cyan, Color::Blue));
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let config = parse_config("badge_text_color: not-a-color\ntab_font: wingdings").unwrap();
        let settings = convert_strip_config(&config);
        assert_eq!(settings.style.badge_text_colors, TwoStateColor::uniform(NEUTRAL_COLOR));
        assert_eq!(settings.style.tab_font, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/strip.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read strip config"));
    }
}
