use std::sync::OnceLock;

use regex::Regex;

/// Unordered list type with owned marker constants.
pub struct BulletList;

impl BulletList {
    /// Bullet markers, each including its mandatory space.
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Returns the marker length if `line` is a bullet item.
    pub fn prefix_len(line: &str) -> Option<usize> {
        Self::MARKERS
            .iter()
            .find(|marker| line.starts_with(*marker))
            .map(|marker| marker.len())
    }
}

/// Ordered list type: ASCII digits, a dot, then one whitespace character.
///
/// Whitespace includes the byte order mark and excludes U+0085.
pub struct OrderedList;

impl OrderedList {
    /// Returns the marker length if `line` is a numbered item.
    ///
    /// The length covers the whole whitespace character, which may be more
    /// than one byte.
    pub fn prefix_len(line: &str) -> Option<usize> {
        static MARKER: OnceLock<Regex> = OnceLock::new();
        let marker = MARKER.get_or_init(|| {
            Regex::new(r"^[0-9]+\.[[\s\x{FEFF}]--\x{85}]").expect("Invalid list marker regex")
        });
        marker.find(line).map(|m| m.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_markers() {
        assert_eq!(BulletList::prefix_len("- a"), Some(2));
        assert_eq!(BulletList::prefix_len("* a"), Some(2));
        assert_eq!(BulletList::prefix_len("-a"), None);
        assert_eq!(BulletList::prefix_len("+ a"), None);
        assert_eq!(BulletList::prefix_len("  - a"), None);
    }

    #[test]
    fn ordered_markers() {
        assert_eq!(OrderedList::prefix_len("1. a"), Some(3));
        assert_eq!(OrderedList::prefix_len("42. a"), Some(4));
        assert_eq!(OrderedList::prefix_len("3.\ta"), Some(3));
        assert_eq!(OrderedList::prefix_len("1.a"), None);
        assert_eq!(OrderedList::prefix_len("1) a"), None);
        assert_eq!(OrderedList::prefix_len("a. b"), None);
    }

    #[test]
    fn ordered_marker_ignores_non_ascii_digits() {
        assert_eq!(OrderedList::prefix_len("٣. a"), None);
    }

    #[test]
    fn ordered_marker_with_wide_space() {
        // U+3000 IDEOGRAPHIC SPACE is three bytes.
        assert_eq!(OrderedList::prefix_len("1.\u{3000}a"), Some(5));
    }

    #[test]
    fn ordered_marker_whitespace_set() {
        assert_eq!(OrderedList::prefix_len("1.\u{FEFF}x"), Some(5));
        assert_eq!(OrderedList::prefix_len("1.\u{A0}x"), Some(4));
        assert_eq!(OrderedList::prefix_len("1.\u{85}x"), None);
    }
}
