// Tab Line
// Turns composite views into a single styled ratatui line
//
// Expected output (tab 0 selected, badges on tabs 0 and 2):
// ── [ SECTIONS 1  2  ] ─ SECT 2 ─ SECT 3  13213131  ──

use std::time::Instant;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::surface::TerminalSurface;
use crate::core::{CompositeView, TextSlot};
use crate::utilities::{text_width, truncate_text};

/// Widest badge label, in cells, before its truncate-at policy applies
pub const BADGE_MAX_WIDTH: u16 = 8;

const LEADING: &str = "── ";
const SEPARATOR: &str = " ─ ";
const TRAILING: &str = " ──";
const SELECTED_OPEN: &str = "[ ";
const SELECTED_CLOSE: &str = " ]";

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    /// Index of the tab in the strip
    pub index: usize,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// One tab as seen by the line builder
pub struct TabLineItem<'a> {
    pub index: usize,
    pub view: &'a CompositeView,
    pub selected: bool,
}

/// Built line plus the tab bounds, relative to the start of the line
pub struct TabLine {
    pub line: Line<'static>,
    pub bounds: Vec<TabBounds>,
}

impl TabLine {
    /// Build the strip line. Title widths go through the surface so badge
    /// toggles animate.
    pub fn build<'a>(
        items: impl IntoIterator<Item = TabLineItem<'a>>,
        surface: &mut TerminalSurface,
        separator_color: Color,
        now: Instant,
    ) -> Self {
        let separator_style = Style::default().fg(separator_color);
        let mut spans = vec![Span::styled(LEADING, separator_style)];
        let mut bounds = Vec::new();
        // Positions past u16::MAX pin to the edge
        let mut x = text_width(LEADING);

        for (position, item) in items.into_iter().enumerate() {
            if position > 0 {
                spans.push(Span::styled(SEPARATOR, separator_style));
                x = x.saturating_add(text_width(SEPARATOR));
            }

            let start = x;
            if item.selected {
                spans.push(Span::styled(SELECTED_OPEN, separator_style));
                x = x.saturating_add(text_width(SELECTED_OPEN));
            }
            for span in tab_spans(item.view, item.selected, surface, now) {
                x = x.saturating_add(text_width(&span.content));
                spans.push(span);
            }
            if item.selected {
                spans.push(Span::styled(SELECTED_CLOSE, separator_style));
                x = x.saturating_add(text_width(SELECTED_CLOSE));
            }

            bounds.push(TabBounds {
                index: item.index,
                x: start,
                y: 0,
                width: x - start,
                height: 1,
            });
        }

        spans.push(Span::styled(TRAILING, separator_style));

        Self {
            line: Line::from(spans),
            bounds,
        }
    }

    /// Total width of the line in cells
    pub fn width(&self) -> u16 {
        self.line.width().min(u16::MAX as usize) as u16
    }
}

fn slot_style(slot: &TextSlot, selected: bool) -> Style {
    let mut style = Style::default();
    if let Some(colors) = slot.colors() {
        style = style.fg(colors.resolve(selected));
    }
    if let Some(font) = slot.font() {
        style = style.add_modifier(font.modifiers());
    }
    // Terminal cells have a fixed glyph size, so text_size is not drawn here
    style
}

/// Spans for one tab: icon, title, badge (each only when visible)
fn tab_spans(
    view: &CompositeView,
    selected: bool,
    surface: &mut TerminalSurface,
    now: Instant,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(4);

    let icon = view.icon();
    if let (true, Some(glyph)) = (icon.is_visible(), icon.icon()) {
        let mut style = Style::default();
        if let Some(tint) = icon.tint() {
            style = style.fg(tint.resolve(selected));
        }
        spans.push(Span::styled(format!("{} ", glyph.glyph()), style));
    }

    let title = view.title();
    if title.is_visible() {
        let target = title.max_width().clamp(text_width(title.text()));
        let width = surface.animated_width(view.id(), target, now);
        let text = truncate_text(title.text(), width, title.truncate_at());
        spans.push(Span::styled(text, slot_style(title, selected)));
    }

    let badge = view.badge();
    if badge.is_visible() {
        let label = badge.label();
        let text = truncate_text(label.text(), BADGE_MAX_WIDTH, label.truncate_at());
        let mut style = slot_style(label, selected);
        if let Some(background) = badge.background() {
            style = style.bg(background.resolve(selected));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", text), style));
    }

    spans
}
