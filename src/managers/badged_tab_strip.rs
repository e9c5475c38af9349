// Badged Tab Strip
// Tab strip widget whose tabs carry an optional badge next to the title
//
// Usage:
//   let mut strip = BadgedTabStrip::with_defaults(StyleConfig::default());
//   strip.add_tabs(["SECTIONS 1", "SECT 2", "SECT 3"].map(Tab::new));
//   strip.set_badge_text(0, Some("1"));
//   // Inside terminal.draw(...)
//   strip.render(f, area);

use std::collections::HashSet;
use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Color,
    widgets::Paragraph,
    Frame,
};

use super::badge_controller::BadgeController;
use super::strip_config::{convert_strip_config, StripConfigYaml, StripSettings};
use super::tab_view_builder::TabViewBuilder;
use crate::core::{
    BasicTabStrip, DiagnosticSink, Font, Icon, StripError, StyleConfig, Tab, TabStrip,
    TracingSink, TruncateAt, TwoStateColor,
};
use crate::elements::{TabBounds, TabLine, TabLineItem, TerminalSurface};

/// Tab strip with per-tab badges.
///
/// Wraps a base [`TabStrip`] for ordering and selection and owns the shared
/// [`StyleConfig`]. Every style setter rebuilds all built tabs in index order.
/// Failed lookups are reported to the diagnostic sink and change nothing.
pub struct BadgedTabStrip<S: TabStrip = BasicTabStrip> {
    base: S,
    style: StyleConfig,
    surface: TerminalSurface,
    sink: Box<dyn DiagnosticSink>,
    separator_color: Color,
    /// Tab bounds from the last render (absolute coordinates)
    last_bounds: Vec<TabBounds>,
}

impl BadgedTabStrip<BasicTabStrip> {
    /// Plain base strip, default surface, diagnostics through `tracing`
    pub fn with_defaults(style: StyleConfig) -> Self {
        Self::new(BasicTabStrip::new(), style, TerminalSurface::default(), Box::new(TracingSink))
    }

    /// Build a strip from validated settings and add its configured tabs
    pub fn from_settings(settings: StripSettings, sink: Box<dyn DiagnosticSink>) -> Self {
        if settings.theme.is_incomplete() {
            sink.report(&StripError::MissingTheme);
        }

        let mut base = BasicTabStrip::new();
        if let Some(colors) = settings.tab_text_colors {
            base.set_tab_text_colors(colors);
        }

        let mut strip = Self::new(base, settings.style, TerminalSurface::new(settings.transition), sink);
        strip.add_tabs(settings.tabs);
        strip
    }

    /// Build a strip straight from YAML configuration
    pub fn from_config(config: &StripConfigYaml) -> Self {
        Self::from_settings(convert_strip_config(config), Box::new(TracingSink))
    }
}

impl<S: TabStrip> BadgedTabStrip<S> {
    pub fn new(
        base: S,
        style: StyleConfig,
        surface: TerminalSurface,
        sink: Box<dyn DiagnosticSink>,
    ) -> Self {
        let mut strip = Self {
            base,
            style,
            surface,
            sink,
            separator_color: Color::White,
            last_bounds: Vec::new(),
        };
        // Tabs the base strip already holds get their views now
        for index in 0..strip.base.tab_count() {
            strip.build_tab(index);
        }
        strip
    }

    fn report(&self, condition: StripError) {
        self.sink.report(&condition);
    }

    fn not_found(&self, index: usize) -> StripError {
        StripError::TabNotFound {
            index,
            count: self.base.tab_count(),
        }
    }

    fn build_tab(&mut self, index: usize) {
        let colors = self.base.tab_text_colors();
        match self.base.tab_at_mut(index) {
            Some(tab) => TabViewBuilder::build(tab, &self.style, colors, &mut self.surface),
            None => self.report(self.not_found(index)),
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Tabs                                              │
    // └────────────────────────────────────────────────────────────────────────────────────────┘

    /// Append a tab, selecting it when it is the first one
    pub fn add_tab(&mut self, tab: Tab) {
        let position = self.base.tab_count();
        self.add_tab_at(tab, position, position == 0);
    }

    /// Insert through the base strip, then build only the new tab's view
    pub fn add_tab_at(&mut self, tab: Tab, position: usize, select: bool) {
        let index = self.base.insert_tab(tab, position, select);
        self.build_tab(index);
    }

    /// Add host-supplied tab descriptors in order
    pub fn add_tabs(&mut self, tabs: impl IntoIterator<Item = Tab>) {
        for tab in tabs {
            self.add_tab(tab);
        }
    }

    /// Remove a tab; its composite view goes with it
    pub fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        let removed = self.base.remove_tab(index);
        if removed.is_none() {
            self.report(self.not_found(index));
        }
        removed
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.base.tab_at(index)
    }

    pub fn tab_count(&self) -> usize {
        self.base.tab_count()
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    /// Replace a tab's icon and re-apply only that tab's icon slot
    pub fn set_icon(&mut self, position: usize, icon: Icon) {
        let colors = self.base.tab_text_colors();
        let result = match self.base.tab_at_mut(position) {
            Some(tab) => {
                tab.icon = Some(icon);
                TabViewBuilder::apply_icon(tab, position, colors)
            }
            None => Err(self.not_found(position)),
        };
        if let Err(condition) = result {
            self.report(condition);
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Badges                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────┘

    /// Show `text` as the badge of tab `index`, or hide the badge with `None`
    pub fn set_badge_text(&mut self, index: usize, text: Option<&str>) {
        let result = BadgeController::set_badge_text(
            &mut self.base,
            index,
            text,
            self.style.tab_text_max_width,
            &mut self.surface,
        );
        if let Err(condition) = result {
            self.report(condition);
        }
    }

    /// Current badge text, read back from the tab's view
    pub fn badge_text(&self, index: usize) -> Option<String> {
        BadgeController::badge_text(&self.base, index)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Style                                             │
    // └────────────────────────────────────────────────────────────────────────────────────────┘

    /// Re-apply the style to every built tab, in index order
    pub fn update_tab_views(&mut self) {
        let colors = self.base.tab_text_colors();
        for index in 0..self.base.tab_count() {
            let result = match self.base.tab_at_mut(index) {
                Some(tab) => TabViewBuilder::rebuild(tab, index, &self.style, colors),
                None => Err(self.not_found(index)),
            };
            // One broken tab must not stop the others from restyling
            if let Err(condition) = result {
                self.report(condition);
            }
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn badge_background_colors(&self) -> TwoStateColor {
        self.style.badge_background_colors
    }

    pub fn set_badge_background_colors(&mut self, colors: TwoStateColor) {
        self.style.badge_background_colors = colors;
        self.update_tab_views();
    }

    pub fn badge_text_colors(&self) -> TwoStateColor {
        self.style.badge_text_colors
    }

    pub fn set_badge_text_colors(&mut self, colors: TwoStateColor) {
        self.style.badge_text_colors = colors;
        self.update_tab_views();
    }

    pub fn tab_text_colors(&self) -> TwoStateColor {
        self.base.tab_text_colors()
    }

    /// Delegates to the base strip, then restyles titles and icons
    pub fn set_tab_text_colors(&mut self, colors: TwoStateColor) {
        self.base.set_tab_text_colors(colors);
        self.update_tab_views();
    }

    pub fn tab_text_size(&self) -> f32 {
        self.style.tab_text_size
    }

    pub fn set_tab_text_size(&mut self, size: f32) {
        self.style.tab_text_size = size;
        self.update_tab_views();
    }

    pub fn badge_text_size(&self) -> f32 {
        self.style.badge_text_size
    }

    pub fn set_badge_text_size(&mut self, size: f32) {
        self.style.badge_text_size = size;
        self.update_tab_views();
    }

    pub fn tab_font(&self) -> Option<Font> {
        self.style.tab_font
    }

    pub fn set_tab_font(&mut self, font: Option<Font>) {
        self.style.tab_font = font;
        self.update_tab_views();
    }

    pub fn badge_font(&self) -> Option<Font> {
        self.style.badge_font
    }

    pub fn set_badge_font(&mut self, font: Option<Font>) {
        self.style.badge_font = font;
        self.update_tab_views();
    }

    pub fn tab_truncate_at(&self) -> Option<TruncateAt> {
        self.style.tab_truncate_at
    }

    pub fn set_tab_truncate_at(&mut self, truncate_at: Option<TruncateAt>) {
        self.style.tab_truncate_at = truncate_at;
        self.update_tab_views();
    }

    pub fn badge_truncate_at(&self) -> Option<TruncateAt> {
        self.style.badge_truncate_at
    }

    pub fn set_badge_truncate_at(&mut self, truncate_at: Option<TruncateAt>) {
        self.style.badge_truncate_at = truncate_at;
        self.update_tab_views();
    }

    pub fn with_separator_color(mut self, color: Color) -> Self {
        self.separator_color = color;
        self
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Selection                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn selected_index(&self) -> Option<usize> {
        self.base.selected_index()
    }

    /// Forwarded page selection; out of range is reported
    pub fn select_tab(&mut self, index: usize) {
        if !self.base.select(index) {
            self.report(self.not_found(index));
        }
    }

    /// Navigate by `delta` tabs, wrapping around
    pub fn navigate(&mut self, delta: isize) -> bool {
        let count = self.base.tab_count();
        if count == 0 {
            return false;
        }
        let current = self.base.selected_index().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(count as isize) as usize;
        self.base.select(next)
    }

    pub fn select_next(&mut self) -> bool {
        self.navigate(1)
    }

    pub fn select_previous(&mut self) -> bool {
        self.navigate(-1)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Rendering                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────┘

    /// True while a badge transition still needs frames
    pub fn is_animating(&self) -> bool {
        self.surface.transitions().has_active()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.render_at(f, area, Instant::now());
    }

    /// Draw the strip on the first row of `area` as of `now`
    pub fn render_at(&mut self, f: &mut Frame, area: Rect, now: Instant) {
        self.last_bounds.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let selected = self.base.selected_index();
        let base = &self.base;
        let items = (0..base.tab_count()).filter_map(|index| {
            let view = base.tab_at(index)?.view()?;
            Some(TabLineItem {
                index,
                view,
                selected: selected == Some(index),
            })
        });
        let tab_line = TabLine::build(items, &mut self.surface, self.separator_color, now);

        let live: HashSet<_> = (0..base.tab_count())
            .filter_map(|index| base.tab_at(index)?.view().map(|view| view.id()))
            .collect();
        let transitions = self.surface.transitions_mut();
        transitions.settle();
        transitions.retain(&live);

        self.last_bounds = tab_line
            .bounds
            .iter()
            .map(|b| TabBounds {
                x: area.x.saturating_add(b.x),
                y: area.y.saturating_add(b.y),
                ..*b
            })
            .collect();

        let line_area = Rect { height: 1, ..area };
        f.render_widget(Paragraph::new(tab_line.line), line_area);
    }

    /// Index of the tab drawn at (column, row) on the last render
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        self.last_bounds
            .iter()
            .find(|b| b.contains(column, row))
            .map(|b| b.index)
    }

    pub fn tab_bounds(&self) -> &[TabBounds] {
        &self.last_bounds
    }
}
