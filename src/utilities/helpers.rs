// Helper utilities for the tab strip
use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::TruncateAt;

/// Ellipsis inserted by truncate-at policies
pub const ELLIPSIS: char = '…';

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color name ("cyan", "dark_blue") or a hex string ("#1E88E5")
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "reset" | "default" => Color::Reset,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Display width in cells, wide glyphs counting two
pub fn text_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Longest prefix of `chars` that fits in `budget` cells, as (char count, cells used)
fn fit_front(chars: &[char], budget: usize) -> (usize, usize) {
    let mut used = 0;
    for (taken, &c) in chars.iter().enumerate() {
        let w = char_width(c);
        if used + w > budget {
            return (taken, used);
        }
        used += w;
    }
    (chars.len(), used)
}

/// Longest suffix of `chars` that fits in `budget` cells, as a char count
fn fit_back(chars: &[char], budget: usize) -> usize {
    let mut used = 0;
    for (taken, &c) in chars.iter().rev().enumerate() {
        let w = char_width(c);
        if used + w > budget {
            return taken;
        }
        used += w;
    }
    chars.len()
}

/// Fit `text` into `width` cells.
///
/// With no policy the text is clipped at the end. Policies replace the elided
/// part with a single ellipsis at the start, middle or end. A wide glyph that
/// would straddle the limit is dropped whole.
pub fn truncate_text(text: &str, width: u16, policy: Option<TruncateAt>) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let Some(policy) = policy else {
        let (taken, _) = fit_front(&chars, width);
        return chars[..taken].iter().collect();
    };

    // One cell goes to the ellipsis
    let keep = width - 1;
    let mut out = String::with_capacity(width * 4);
    match policy {
        TruncateAt::End => {
            let (taken, _) = fit_front(&chars, keep);
            out.extend(&chars[..taken]);
            out.push(ELLIPSIS);
        }
        TruncateAt::Start => {
            let taken = fit_back(&chars, keep);
            out.push(ELLIPSIS);
            out.extend(&chars[chars.len() - taken..]);
        }
        TruncateAt::Middle => {
            let (head, used) = fit_front(&chars, keep.div_ceil(2));
            let tail = fit_back(&chars[head..], keep - used);
            out.extend(&chars[..head]);
            out.push(ELLIPSIS);
            out.extend(&chars[chars.len() - tail..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("dark_blue"), Some(Color::Rgb(0, 0, 139)));
        assert_eq!(parse_color("#1E88E5"), Some(Color::Rgb(0x1E, 0x88, 0xE5)));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_text("SECT 2", 12, Some(TruncateAt::End)), "SECT 2");
    }

    #[test]
    fn test_truncate_policies() {
        assert_eq!(truncate_text("ABCDEFGHIJ", 5, None), "ABCDE");
        assert_eq!(truncate_text("ABCDEFGHIJ", 5, Some(TruncateAt::End)), "ABCD…");
        assert_eq!(truncate_text("ABCDEFGHIJ", 5, Some(TruncateAt::Start)), "…GHIJ");
        assert_eq!(truncate_text("ABCDEFGHIJ", 6, Some(TruncateAt::Middle)), "ABC…IJ");
        assert_eq!(truncate_text("ABCDEFGHIJ", 0, Some(TruncateAt::Middle)), "");
    }

    #[test]
    fn test_wide_glyphs_count_two_cells() {
        assert_eq!(text_width("日本語"), 6);
        assert_eq!(text_width("SECT 2"), 6);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_truncate_wide_glyphs_by_cells() {
        let title = "日本語日本語";
        assert_eq!(truncate_text(title, 4, None), "日本");
        assert_eq!(truncate_text(title, 5, None), "日本");
        assert_eq!(truncate_text(title, 4, Some(TruncateAt::End)), "日…");
        assert_eq!(truncate_text(title, 5, Some(TruncateAt::End)), "日本…");
        assert_eq!(truncate_text(title, 5, Some(TruncateAt::Start)), "…本語");
        assert_eq!(truncate_text(title, 7, Some(TruncateAt::Middle)), "日…本語");
        assert_eq!(truncate_text(title, 12, Some(TruncateAt::End)), title);

        for width in 0..12 {
            for policy in [None, Some(TruncateAt::Start), Some(TruncateAt::Middle), Some(TruncateAt::End)] {
                assert!(text_width(&truncate_text(title, width, policy)) <= width);
            }
        }
    }
}
