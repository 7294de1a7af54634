//! Editor formatting commands: toolbar wraps, clear formatting, shortcuts.

use std::{ops::Range, sync::OnceLock};

use regex::Regex;

/// A toolbar formatting command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Quote,
    List,
    NumberedList,
    Link,
    Heading1,
    Heading2,
    Heading3,
}

impl Format {
    /// Wraps `selected` in this format's markdown syntax.
    pub fn wrap(self, selected: &str) -> String {
        match self {
            Format::Bold => format!("**{selected}**"),
            Format::Italic => format!("*{selected}*"),
            Format::Underline => format!("__{selected}__"),
            Format::Strikethrough => format!("~~{selected}~~"),
            Format::Code => format!("`{selected}`"),
            Format::Quote => format!("> {selected}"),
            Format::List => format!("- {selected}"),
            Format::NumberedList => format!("1. {selected}"),
            Format::Link => format!("[{selected}](url)"),
            Format::Heading1 => format!("# {selected}"),
            Format::Heading2 => format!("## {selected}"),
            Format::Heading3 => format!("### {selected}"),
        }
    }
}

/// What a Ctrl/Cmd keyboard shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Apply(Format),
    ClearFormatting,
}

impl Shortcut {
    /// Maps a key name (as reported by the browser) to a shortcut.
    pub fn from_key(key: &str) -> Option<Self> {
        let shortcut = match key.to_lowercase().as_str() {
            "b" => Shortcut::Apply(Format::Bold),
            "i" => Shortcut::Apply(Format::Italic),
            "u" => Shortcut::Apply(Format::Underline),
            "k" => Shortcut::Apply(Format::Link),
            "q" => Shortcut::Apply(Format::Quote),
            "l" => Shortcut::Apply(Format::List),
            "o" => Shortcut::Apply(Format::NumberedList),
            "`" => Shortcut::Apply(Format::Code),
            "backspace" => Shortcut::ClearFormatting,
            _ => return None,
        };
        Some(shortcut)
    }
}

/// Removes markdown formatting from `text`, keeping the formatted content.
///
/// Inline delimiters are removed everywhere. Quote and list markers are only
/// removed at the very start of `text`, not at the start of each line.
pub fn clear_formatting(text: &str) -> String {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        [
            r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*",
            r"\*([^\r\n\x{2028}\x{2029}]*?)\*",
            r"__([^\r\n\x{2028}\x{2029}]*?)__",
            r"~~([^\r\n\x{2028}\x{2029}]*?)~~",
            r"`([^\r\n\x{2028}\x{2029}]*?)`",
            r"\A>[[\s\x{FEFF}]--\x{85}]*()",
            r"\A[-*][[\s\x{FEFF}]--\x{85}]*()",
            r"\A[0-9]+\.[[\s\x{FEFF}]--\x{85}]*()",
            r"\[([^\r\n\x{2028}\x{2029}]*?)\]\([^\r\n\x{2028}\x{2029}]*?\)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid clear formatting regex"))
        .collect()
    });

    let mut out = text.to_string();
    for pattern in patterns {
        out = pattern.replace_all(&out, "${1}").into_owned();
    }
    out
}

/// A byte range selected in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Editor content after a command, with the new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub content: String,
    /// Covers the replacement text.
    pub selection: Selection,
}

/// Applies `format` to the selected text.
///
/// Returns `None` when nothing is selected or the selection is not a valid
/// range of character boundaries in `content`.
pub fn apply_format(content: &str, selection: Selection, format: Format) -> Option<Edit> {
    replace_selection(content, selection, |selected| format.wrap(selected))
}

/// Clears formatting inside the selected text.
pub fn clear_selection(content: &str, selection: Selection) -> Option<Edit> {
    replace_selection(content, selection, clear_formatting)
}

fn replace_selection(
    content: &str,
    selection: Selection,
    replace: impl FnOnce(&str) -> String,
) -> Option<Edit> {
    let selected = content.get(selection.range()).filter(|s| !s.is_empty())?;
    let replacement = replace(selected);

    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..selection.start]);
    out.push_str(&replacement);
    out.push_str(&content[selection.end..]);

    Some(Edit {
        content: out,
        selection: Selection::new(selection.start, selection.start + replacement.len()),
    })
}
