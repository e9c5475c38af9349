// Badge Controller
// Shows, updates and hides a tab's badge and adjusts the title clamp to match

use crate::core::{CompositeView, MaxWidth, StripError, TabStrip, Visibility};
use crate::elements::RenderSurface;

/// Owns the `set_badge_text` mutation of composite views
pub struct BadgeController;

impl BadgeController {
    /// Set (`Some`) or hide (`None`) the badge of the tab at `index`.
    ///
    /// Nothing is mutated when the tab or its view is missing.
    pub fn set_badge_text<S: TabStrip + ?Sized>(
        strip: &mut S,
        index: usize,
        text: Option<&str>,
        max_width: u16,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), StripError> {
        let count = strip.tab_count();
        let tab = strip
            .tab_at_mut(index)
            .ok_or(StripError::TabNotFound { index, count })?;
        let view = tab
            .view
            .as_mut()
            .ok_or(StripError::ViewNotBuilt { index })?;

        Self::apply(view, text, max_width);
        surface.begin_delayed_transition(view);
        Ok(())
    }

    /// Badge text of the tab at `index`, `None` while the badge is hidden
    pub fn badge_text<S: TabStrip + ?Sized>(strip: &S, index: usize) -> Option<String> {
        strip
            .tab_at(index)
            .and_then(|tab| tab.view())
            .and_then(CompositeView::badge_text)
            .map(str::to_string)
    }

    fn apply(view: &mut CompositeView, text: Option<&str>, max_width: u16) {
        match text {
            None => {
                view.badge_mut().label_mut().set_visibility(Visibility::Gone);
                view.title_mut().set_max_width(MaxWidth::Unconstrained);
            }
            Some(text) => {
                view.badge_mut().label_mut().set_text(text);
                view.title_mut().set_max_width(MaxWidth::Clamped(max_width));
                view.badge_mut().label_mut().set_visibility(Visibility::Visible);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicTabStrip, StyleConfig, Tab};
    use crate::elements::TerminalSurface;
    use crate::managers::TabViewBuilder;

    fn built_strip(surface: &mut TerminalSurface) -> BasicTabStrip {
        let mut strip = BasicTabStrip::new();
        for title in ["A", "B"] {
            let index = strip.insert_tab(Tab::new(title), strip.tab_count(), false);
            let colors = strip.tab_text_colors();
            if let Some(tab) = strip.tab_at_mut(index) {
                TabViewBuilder::build(tab, &StyleConfig::default(), colors, surface);
            }
        }
        strip
    }

    #[test]
    fn test_show_then_hide() {
        let mut surface = TerminalSurface::default();
        let mut strip = built_strip(&mut surface);

        BadgeController::set_badge_text(&mut strip, 1, Some("X"), 12, &mut surface).unwrap();
        let view = strip.tab_at(1).and_then(Tab::view).unwrap();
        assert_eq!(view.badge_text(), Some("X"));
        assert_eq!(view.title().max_width(), MaxWidth::Clamped(12));
        assert!(surface.transitions().is_animating(view.id()));

        BadgeController::set_badge_text(&mut strip, 1, None, 12, &mut surface).unwrap();
        let view = strip.tab_at(1).and_then(Tab::view).unwrap();
        assert!(!view.badge().is_visible());
        assert_eq!(view.title().max_width(), MaxWidth::Unconstrained);
        assert_eq!(BadgeController::badge_text(&strip, 1), None);
    }

    #[test]
    fn test_overwrite_does_not_accumulate() {
        let mut surface = TerminalSurface::default();
        let mut strip = built_strip(&mut surface);

        for text in ["A", "B", "B"] {
            BadgeController::set_badge_text(&mut strip, 0, Some(text), 12, &mut surface).unwrap();
        }
        assert_eq!(BadgeController::badge_text(&strip, 0), Some("B".to_string()));
    }

    #[test]
    fn test_missing_tab_and_unbuilt_view() {
        let mut surface = TerminalSurface::default();
        let mut strip = built_strip(&mut surface);

        let result = BadgeController::set_badge_text(&mut strip, 99, Some("X"), 12, &mut surface);
        assert_eq!(result, Err(StripError::TabNotFound { index: 99, count: 2 }));

        strip.insert_tab(Tab::new("raw"), 2, false);
        let result = BadgeController::set_badge_text(&mut strip, 2, Some("X"), 12, &mut surface);
        assert_eq!(result, Err(StripError::ViewNotBuilt { index: 2 }));
        assert_eq!(BadgeController::badge_text(&strip, 2), None);
    }
}
