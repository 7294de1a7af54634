//! Line-oriented markdown renderer for NoteForge note previews and share pages.
//!
//! [`render`] turns a note body into [`Block`]s: headings, paragraphs, quotes,
//! line breaks and lists, each carrying inline content with emphasis, code and
//! links resolved. It is total and pure. [`html::HtmlRenderer`] turns blocks
//! into markup at the display boundary.

pub mod blocks;
pub mod document;
pub mod format;
pub mod html;
pub mod inline;
pub mod lines;

pub use blocks::{Block, HeadingLevel, KeyedBlock};
pub use document::{DocumentError, NoteDocument};
pub use html::{HtmlOptions, HtmlRenderer, MarkupMode};
pub use inline::{Inline, InlineSpan, SpanKind};

use blocks::{BlockBuilder, MarkdownLineClassifier};
use lines::source_lines;

/// Renders `text` into blocks, in source order.
pub fn render(text: &str) -> Vec<Block> {
    render_keyed(text).into_iter().map(|k| k.block).collect()
}

/// Renders `text` into blocks keyed by the first source line of each.
pub fn render_keyed(text: &str) -> Vec<KeyedBlock> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    let mut line_count = 0usize;

    for line in source_lines(text) {
        let lc = classifier.classify(&line);
        builder.push(&lc);
        line_count += 1;
    }

    let blocks = builder.finish();
    log::trace!("rendered {line_count} lines into {} blocks", blocks.len());
    blocks
}
