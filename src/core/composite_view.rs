// Composite Tab View
// Three-slot visual (title, icon, badge) owned by a single tab
//
// Slot state is readable by anyone, but only the tab view builder and the badge
// controller mutate it, through the crate-private setters below.

use super::color::TwoStateColor;
use super::style::{Font, TruncateAt};
use super::tab::Icon;

/// Stable identity of a composite view (keys layout transitions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Slot visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Hidden and takes no space
    Gone,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Maximum width constraint for a text slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxWidth {
    Unconstrained,
    /// Clamp to this many cells
    Clamped(u16),
}

impl MaxWidth {
    /// Apply the constraint to a natural width
    pub fn clamp(&self, width: u16) -> u16 {
        match self {
            MaxWidth::Unconstrained => width,
            MaxWidth::Clamped(max) => width.min(*max),
        }
    }
}

/// Text label slot (used for the title and, wrapped, for the badge)
#[derive(Debug, Clone, PartialEq)]
pub struct TextSlot {
    text: String,
    visibility: Visibility,
    colors: Option<TwoStateColor>,
    text_size: Option<f32>,
    font: Option<Font>,
    truncate_at: Option<TruncateAt>,
    max_width: MaxWidth,
}

impl TextSlot {
    fn with_visibility(visibility: Visibility) -> Self {
        Self {
            text: String::new(),
            visibility,
            colors: None,
            text_size: None,
            font: None,
            truncate_at: None,
            max_width: MaxWidth::Unconstrained,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn colors(&self) -> Option<TwoStateColor> {
        self.colors
    }

    pub fn text_size(&self) -> Option<f32> {
        self.text_size
    }

    pub fn font(&self) -> Option<Font> {
        self.font
    }

    pub fn truncate_at(&self) -> Option<TruncateAt> {
        self.truncate_at
    }

    pub fn max_width(&self) -> MaxWidth {
        self.max_width
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
        }
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub(crate) fn set_colors(&mut self, colors: TwoStateColor) {
        self.colors = Some(colors);
    }

    pub(crate) fn set_text_size(&mut self, size: f32) {
        self.text_size = Some(size);
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    pub(crate) fn set_truncate_at(&mut self, truncate_at: TruncateAt) {
        self.truncate_at = Some(truncate_at);
    }

    pub(crate) fn set_max_width(&mut self, max_width: MaxWidth) {
        self.max_width = max_width;
    }
}

/// Icon slot, only shown for tabs that declare an icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconSlot {
    icon: Option<Icon>,
    tint: Option<TwoStateColor>,
    visibility: Visibility,
}

impl IconSlot {
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn tint(&self) -> Option<TwoStateColor> {
        self.tint
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub(crate) fn show(&mut self, icon: Icon, tint: TwoStateColor) {
        self.icon = Some(icon);
        self.tint = Some(tint);
        self.visibility = Visibility::Visible;
    }
}

/// Badge slot: a text label drawn over a tinted background
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeSlot {
    label: TextSlot,
    background: Option<TwoStateColor>,
}

impl BadgeSlot {
    pub fn label(&self) -> &TextSlot {
        &self.label
    }

    pub fn background(&self) -> Option<TwoStateColor> {
        self.background
    }

    pub fn is_visible(&self) -> bool {
        self.label.is_visible()
    }

    pub(crate) fn label_mut(&mut self) -> &mut TextSlot {
        &mut self.label
    }

    pub(crate) fn set_background(&mut self, background: TwoStateColor) {
        self.background = Some(background);
    }
}

/// The per-tab visual: title, optional icon, optional badge
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeView {
    id: ViewId,
    title: TextSlot,
    icon: IconSlot,
    badge: BadgeSlot,
}

impl CompositeView {
    /// Fresh template: visible empty title, hidden icon, hidden badge
    pub(crate) fn template(id: ViewId) -> Self {
        Self {
            id,
            title: TextSlot::with_visibility(Visibility::Visible),
            icon: IconSlot {
                icon: None,
                tint: None,
                visibility: Visibility::Gone,
            },
            badge: BadgeSlot {
                label: TextSlot::with_visibility(Visibility::Gone),
                background: None,
            },
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn title(&self) -> &TextSlot {
        &self.title
    }

    pub fn icon(&self) -> &IconSlot {
        &self.icon
    }

    pub fn badge(&self) -> &BadgeSlot {
        &self.badge
    }

    /// Badge text when the badge is shown
    pub fn badge_text(&self) -> Option<&str> {
        self.badge.is_visible().then(|| self.badge.label.text())
    }

    pub(crate) fn title_mut(&mut self) -> &mut TextSlot {
        &mut self.title
    }

    pub(crate) fn icon_mut(&mut self) -> &mut IconSlot {
        &mut self.icon
    }

    pub(crate) fn badge_mut(&mut self) -> &mut BadgeSlot {
        &mut self.badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_slots() {
        let view = CompositeView::template(ViewId::new(7));
        assert_eq!(view.id().id(), 7);
        assert!(view.title().is_visible());
        assert!(!view.icon().is_visible());
        assert!(!view.badge().is_visible());
        assert_eq!(view.title().max_width(), MaxWidth::Unconstrained);
        assert_eq!(view.badge_text(), None);
    }

    #[test]
    fn test_max_width_clamp() {
        assert_eq!(MaxWidth::Unconstrained.clamp(40), 40);
        assert_eq!(MaxWidth::Clamped(12).clamp(40), 12);
        assert_eq!(MaxWidth::Clamped(12).clamp(5), 5);
    }
}
