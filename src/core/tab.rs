// Tabs and the base tab strip capability
// The badged strip wraps any `TabStrip` implementation instead of extending one

use ratatui::style::Color;

use super::color::TwoStateColor;
use super::composite_view::CompositeView;

/// Terminal glyph standing in for a tab image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }
}

/// One navigational section
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub(crate) title: String,
    pub(crate) icon: Option<Icon>,
    /// Built on tab-add, dropped only with the tab
    pub(crate) view: Option<CompositeView>,
}

impl Tab {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            view: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn view(&self) -> Option<&CompositeView> {
        self.view.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.view.is_some()
    }
}

/// Capability set of a plain tab strip: ordered tabs, selection and tab text colors
pub trait TabStrip {
    /// Insert at `position` (clamped to the tab count) and return the actual index
    fn insert_tab(&mut self, tab: Tab, position: usize, select: bool) -> usize;

    /// Remove and return the tab at `index`
    fn remove_tab(&mut self, index: usize) -> Option<Tab>;

    fn tab_at(&self, index: usize) -> Option<&Tab>;

    fn tab_at_mut(&mut self, index: usize) -> Option<&mut Tab>;

    fn tab_count(&self) -> usize;

    fn selected_index(&self) -> Option<usize>;

    /// Select the tab at `index`; false when out of range
    fn select(&mut self, index: usize) -> bool;

    fn tab_text_colors(&self) -> TwoStateColor;

    fn set_tab_text_colors(&mut self, colors: TwoStateColor);
}

/// Default `TabStrip` backed by a vector
#[derive(Debug, Clone)]
pub struct BasicTabStrip {
    tabs: Vec<Tab>,
    selected: Option<usize>,
    text_colors: TwoStateColor,
}

impl BasicTabStrip {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            selected: None,
            text_colors: TwoStateColor::new(Color::White, Color::Rgb(0x77, 0x77, 0x77)),
        }
    }
}

impl Default for BasicTabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStrip for BasicTabStrip {
    fn insert_tab(&mut self, tab: Tab, position: usize, select: bool) -> usize {
        let position = position.min(self.tabs.len());
        self.tabs.insert(position, tab);

        if select {
            self.selected = Some(position);
        } else if let Some(selected) = self.selected {
            // Keep the same tab selected after the shift
            if position <= selected {
                self.selected = Some(selected + 1);
            }
        }
        position
    }

    fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);

        self.selected = match self.selected {
            _ if self.tabs.is_empty() => None,
            Some(selected) if selected == index => Some(index.saturating_sub(1)),
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Some(tab)
    }

    fn tab_at(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn tab_at_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    fn tab_text_colors(&self) -> TwoStateColor {
        self.text_colors
    }

    fn set_tab_text_colors(&mut self, colors: TwoStateColor) {
        self.text_colors = colors;
    }
}
