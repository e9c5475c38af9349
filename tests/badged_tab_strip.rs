// Badged tab strip scenarios, driven through the public API only

use std::rc::Rc;

use badged_tabs::{
    BadgedTabStrip, BasicTabStrip, Icon, MaxWidth, RecordingSink, StripError, StyleConfig, Tab,
    TerminalSurface, Visibility,
};

fn strip(titles: &[&str]) -> (BadgedTabStrip, Rc<RecordingSink>) {
    let sink = Rc::new(RecordingSink::new());
    let mut strip = BadgedTabStrip::new(
        BasicTabStrip::new(),
        StyleConfig::default(),
        TerminalSurface::default(),
        Box::new(sink.clone()),
    );
    strip.add_tabs(titles.iter().map(|t| Tab::new(*t)));
    (strip, sink)
}

fn badge_visible(strip: &BadgedTabStrip, index: usize) -> bool {
    strip
        .tab(index)
        .and_then(Tab::view)
        .map(|v| v.badge().is_visible())
        .unwrap_or(false)
}

fn title_max_width(strip: &BadgedTabStrip, index: usize) -> MaxWidth {
    strip.tab(index).and_then(Tab::view).unwrap().title().max_width()
}

#[test]
fn test_slot_visibility_follows_tab_definition() {
    let (mut strip, _sink) = strip(&[]);
    strip.add_tab(Tab::new("Inbox").with_icon(Icon::new("✉")));
    strip.add_tab(Tab::new(""));
    strip.add_tab(Tab::new("").with_icon(Icon::new("★")));

    let expected = [(true, true), (false, false), (false, true)];
    for (index, (title_visible, icon_visible)) in expected.into_iter().enumerate() {
        let view = strip.tab(index).and_then(Tab::view).unwrap();
        assert_eq!(view.title().is_visible(), title_visible, "title of tab {index}");
        assert_eq!(view.icon().is_visible(), icon_visible, "icon of tab {index}");
        assert_eq!(view.badge().label().visibility(), Visibility::Gone);
    }
}

#[test]
fn test_show_then_hide_restores_initial_state() {
    let (mut strip, _sink) = strip(&["A", "B", "C"]);
    let initial = strip.tab(1).cloned();

    strip.set_badge_text(1, Some("X"));
    strip.set_badge_text(1, None);

    assert!(!badge_visible(&strip, 1));
    assert_eq!(title_max_width(&strip, 1), MaxWidth::Unconstrained);
    let after = strip.tab(1).and_then(Tab::view).unwrap();
    assert_eq!(after.id(), initial.as_ref().and_then(Tab::view).unwrap().id());
}

#[test]
fn test_badge_overwrite() {
    let (mut strip, _sink) = strip(&["A"]);
    strip.set_badge_text(0, Some("A"));
    strip.set_badge_text(0, Some("B"));

    assert_eq!(strip.badge_text(0).as_deref(), Some("B"));
    assert!(badge_visible(&strip, 0));
}

#[test]
fn test_style_setter_keeps_badges() {
    let (mut strip, _sink) = strip(&["A", "B", "C"]);
    strip.set_badge_text(2, Some("7"));

    strip.set_tab_text_size(20.0);

    for index in 0..3 {
        let view = strip.tab(index).and_then(Tab::view).unwrap();
        assert_eq!(view.title().text_size(), Some(20.0));
    }
    assert_eq!(strip.badge_text(2).as_deref(), Some("7"));
    assert!(!badge_visible(&strip, 0));
    assert!(!badge_visible(&strip, 1));
}

#[test]
fn test_out_of_range_badge_is_a_logged_no_op() {
    let (mut strip, sink) = strip(&["A", "B", "C"]);
    let before: Vec<_> = (0..3).map(|i| strip.tab(i).cloned()).collect();

    strip.set_badge_text(99, Some("X"));

    let after: Vec<_> = (0..3).map(|i| strip.tab(i).cloned()).collect();
    assert_eq!(before, after);
    assert_eq!(sink.conditions(), vec![StripError::TabNotFound { index: 99, count: 3 }]);
}

#[test]
fn test_three_tab_scenario() {
    let (mut strip, sink) = strip(&["A", "B", "C"]);
    let max_width = strip.style().tab_text_max_width;

    strip.set_badge_text(0, Some("1"));
    assert_eq!(strip.badge_text(0).as_deref(), Some("1"));
    assert_eq!(title_max_width(&strip, 0), MaxWidth::Clamped(max_width));
    assert!(!badge_visible(&strip, 1));
    assert!(!badge_visible(&strip, 2));
    assert_eq!(title_max_width(&strip, 1), MaxWidth::Unconstrained);

    strip.set_badge_text(2, Some("13213131"));
    assert_eq!(strip.badge_text(2).as_deref(), Some("13213131"));

    strip.set_badge_text(0, None);
    assert!(!badge_visible(&strip, 0));
    assert_eq!(title_max_width(&strip, 0), MaxWidth::Unconstrained);
    assert_eq!(strip.badge_text(2).as_deref(), Some("13213131"));

    assert!(sink.is_empty());
}

#[test]
fn test_removed_tab_takes_its_view() {
    let (mut strip, _sink) = strip(&["A", "B"]);
    strip.set_badge_text(1, Some("4"));

    let removed = strip.remove_tab(1).unwrap();
    assert_eq!(removed.view().and_then(|v| v.badge_text()), Some("4"));
    assert_eq!(strip.tab_count(), 1);
    assert_eq!(strip.badge_text(1), None);
}
