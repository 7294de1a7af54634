//! # Inline Substitution
//!
//! Emphasis, code and link syntax inside a single line.
//!
//! ## Pipeline
//!
//! A fixed, ordered table of regex rules (`rules`) is applied to each line.
//! Every rule replaces all of its non-overlapping matches before the next one
//! runs, so later rules see the output of earlier ones:
//!
//! 1. `**bold**`
//! 2. `*italic*`
//! 3. `__underline__`
//! 4. `~~strikethrough~~`
//! 5. `` `code` ``
//! 6. `[label](url)`
//!
//! Unmatched delimiters are left in place as literal text.
//!
//! ## Modules
//!
//! - **`types`**: `Inline`, `InlineSpan` and `SpanKind`
//! - **`rules`**: the rule table and the legacy markup `substitute` pass
//! - **`spans`**: the structured `extract` pass producing plain text and spans

pub mod rules;
pub mod spans;
pub mod types;

pub use rules::substitute;
pub use spans::extract;
pub use types::{Inline, InlineSpan, SpanKind};

/// Builds the inline content for a line whose structural prefix is
/// `prefix_len` bytes long.
///
/// `substituted` is `line` after [`substitute`]. The legacy markup is cut
/// from the substituted line, the structured form is extracted from the
/// original line after its prefix.
pub fn inline_content(line: &str, substituted: &str, prefix_len: usize) -> Inline {
    let (text, spans) = extract(line.get(prefix_len..).unwrap_or_default());
    Inline {
        html: substituted
            .get(prefix_len..)
            .unwrap_or_default()
            .to_string(),
        text,
        spans,
    }
}
