use serde::Serialize;

use crate::inline::Inline;

use super::kinds::HeadingLevel;

/// One rendered unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: HeadingLevel,
        content: Inline,
    },
    Paragraph(Inline),
    Quote(Inline),
    /// An empty or whitespace-only line.
    LineBreak,
    /// A contiguous run of list lines of the same type.
    List { ordered: bool, items: Vec<Inline> },
}

/// A block paired with the index of the first source line that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedBlock {
    pub key: usize,
    pub block: Block,
}
