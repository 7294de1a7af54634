/// A single line of source text with its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Zero-based line index, used as a stable display key.
    pub index: usize,
    /// The line text without its trailing `\n`.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`, split on `\n`.
///
/// Unlike [`str::lines`], an empty input yields one empty line and a trailing
/// `\n` yields a final empty line. A `\r` before the newline stays part of the
/// line text.
pub fn source_lines(text: &str) -> impl Iterator<Item = SourceLine<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(index, text)| SourceLine { index, text })
}
