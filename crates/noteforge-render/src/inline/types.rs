use std::ops::Range;

use serde::Serialize;

/// The kind of an inline span, with any attributes it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanKind {
    /// `**text**`
    Strong,
    /// `*text*`
    Emphasis,
    /// `__text__`
    Underline,
    /// `~~text~~`
    Strikethrough,
    /// `` `text` ``
    Code,
    /// `[label](href)`. The href is kept verbatim.
    Link { href: String },
}

/// A formatted region of an [`Inline`]'s plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    #[serde(flatten)]
    pub kind: SpanKind,
    /// Byte range into [`Inline::text`]. May be empty.
    pub range: Range<usize>,
}

/// Inline content of a block, in both legacy and structured form.
///
/// `html` is the markup produced by the substitution pipeline and must be
/// treated as trusted only when the source text is. `text` and `spans` carry
/// the same formatting as data, so the rendering boundary decides how to
/// escape it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inline {
    pub html: String,
    pub text: String,
    pub spans: Vec<InlineSpan>,
}

impl Inline {
    /// Returns the slice of [`Inline::text`] covered by `span`.
    ///
    /// Returns an empty string if the span does not belong to this content.
    pub fn span_text(&self, span: &InlineSpan) -> &str {
        self.text.get(span.range.clone()).unwrap_or_default()
    }
}
