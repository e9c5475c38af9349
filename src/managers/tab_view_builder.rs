// Tab View Builder
// Builds a tab's composite view, or restyles the one it already owns

use crate::core::{StripError, StyleConfig, Tab, TwoStateColor, Visibility};
use crate::elements::RenderSurface;

/// Applies the strip style to per-tab composite views
pub struct TabViewBuilder;

impl TabViewBuilder {
    /// Build the tab's view, inflating a fresh template only if it has none yet
    pub fn build(
        tab: &mut Tab,
        style: &StyleConfig,
        tab_text_colors: TwoStateColor,
        surface: &mut dyn RenderSurface,
    ) {
        if tab.view.is_none() {
            tab.view = Some(surface.inflate_tab_view());
        }
        Self::apply(tab, style, tab_text_colors);
    }

    /// Restyle an already built view in place
    ///
    /// Badge visibility, badge text and the title clamp are left as they are.
    pub fn rebuild(
        tab: &mut Tab,
        index: usize,
        style: &StyleConfig,
        tab_text_colors: TwoStateColor,
    ) -> Result<(), StripError> {
        if !tab.is_built() {
            return Err(StripError::ViewNotBuilt { index });
        }
        Self::apply(tab, style, tab_text_colors);
        Ok(())
    }

    /// Re-apply only the icon slot
    pub fn apply_icon(
        tab: &mut Tab,
        index: usize,
        tab_text_colors: TwoStateColor,
    ) -> Result<(), StripError> {
        if !tab.is_built() {
            return Err(StripError::ViewNotBuilt { index });
        }
        Self::icon(tab, tab_text_colors);
        Ok(())
    }

    fn apply(tab: &mut Tab, style: &StyleConfig, tab_text_colors: TwoStateColor) {
        Self::title(tab, style, tab_text_colors);
        Self::icon(tab, tab_text_colors);
        Self::badge(tab, style);
    }

    fn title(tab: &mut Tab, style: &StyleConfig, tab_text_colors: TwoStateColor) {
        let Tab { title: text, view, .. } = tab;
        let Some(view) = view.as_mut() else {
            return;
        };
        let title = view.title_mut();

        title.set_colors(tab_text_colors);
        if style.tab_text_size != 0.0 {
            title.set_text_size(style.tab_text_size);
        }
        if let Some(truncate_at) = style.tab_truncate_at {
            title.set_truncate_at(truncate_at);
        }
        if let Some(font) = style.tab_font {
            title.set_font(font);
        }

        if text.is_empty() {
            title.set_visibility(Visibility::Gone);
        } else {
            title.set_text(text);
            title.set_visibility(Visibility::Visible);
        }
    }

    fn icon(tab: &mut Tab, tab_text_colors: TwoStateColor) {
        let Tab { icon, view, .. } = tab;
        // Tabs without an icon keep the slot hidden and untouched
        if let (Some(icon), Some(view)) = (icon.as_ref(), view.as_mut()) {
            view.icon_mut().show(icon.clone(), tab_text_colors);
        }
    }

    fn badge(tab: &mut Tab, style: &StyleConfig) {
        let Some(view) = tab.view.as_mut() else {
            return;
        };
        let badge = view.badge_mut();

        let label = badge.label_mut();
        label.set_colors(style.badge_text_colors);
        if let Some(truncate_at) = style.badge_truncate_at {
            label.set_truncate_at(truncate_at);
        }
        if let Some(font) = style.badge_font {
            label.set_font(font);
        }
        if style.badge_text_size != 0.0 {
            label.set_text_size(style.badge_text_size);
        }

        badge.set_background(style.badge_background_colors);
    }
}
