use crate::lines::SourceLine;

use super::kinds::{BulletList, Heading, HeadingLevel, OrderedList, Quote};

/// What a line opens, decided from its raw prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet,
    Ordered,
    Heading(HeadingLevel),
    Quote,
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently, without reference to the lines
/// around it. Whether a list item continues or starts a list is the
/// builder's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based source line index.
    pub index: usize,
    /// The raw line text.
    pub line: &'a str,
    pub kind: LineKind,
    /// Byte length of the structural prefix (`- `, `1. `, `## `, ...).
    pub prefix_len: usize,
}

/// Classifies individual lines by structural prefix.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Prefixes are checked in a fixed order and the first match wins:
    /// bullet, numbered, heading 1 to 3, quote, blank, then plain text.
    pub fn classify<'a>(&self, sl: &SourceLine<'a>) -> LineClass<'a> {
        let line = sl.text;
        let (kind, prefix_len) = if let Some(len) = BulletList::prefix_len(line) {
            (LineKind::Bullet, len)
        } else if let Some(len) = OrderedList::prefix_len(line) {
            (LineKind::Ordered, len)
        } else if let Some((level, len)) = Heading::detect(line) {
            (LineKind::Heading(level), len)
        } else if let Some(len) = Quote::prefix_len(line) {
            (LineKind::Quote, len)
        } else if is_blank(line) {
            (LineKind::Blank, 0)
        } else {
            (LineKind::Text, 0)
        };

        LineClass {
            index: sl.index,
            line,
            kind,
            prefix_len,
        }
    }
}

/// A blank line holds only Unicode `White_Space` or the byte order mark.
/// U+0085 NEXT LINE does not count.
fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}
