use crate::inline::{Inline, inline_content, substitute};

use super::{
    classify::{LineClass, LineKind},
    types::{Block, KeyedBlock},
};

/// Which kind of list, if any, the builder is buffering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    NoList,
    BufferingUnordered,
    BufferingOrdered,
}

/// The open list: its type and the items collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAccumulator {
    pub ordered: bool,
    /// Index of the line that opened the list.
    pub first_line: usize,
    pub items: Vec<Inline>,
}

/// Folds classified lines into blocks.
///
/// Every non-list line becomes exactly one block. List lines are buffered in
/// a [`ListAccumulator`] and emitted as one `List` block when a line of
/// another kind arrives, or at [`BlockBuilder::finish`].
pub struct BlockBuilder {
    list: Option<ListAccumulator>,
    out: Vec<KeyedBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let content = || inline_content(c.line, &substitute(c.line), c.prefix_len);

        let block = match c.kind {
            LineKind::Bullet => return self.push_item(false, c.index, content()),
            LineKind::Ordered => return self.push_item(true, c.index, content()),
            LineKind::Heading(level) => Block::Heading {
                level,
                content: content(),
            },
            LineKind::Quote => Block::Quote(content()),
            LineKind::Blank => Block::LineBreak,
            LineKind::Text => Block::Paragraph(content()),
        };

        self.flush_list();
        self.out.push(KeyedBlock {
            key: c.index,
            block,
        });
    }

    pub fn finish(mut self) -> Vec<KeyedBlock> {
        // EOF flush
        self.flush_list();
        self.out
    }

    /// Returns the current list buffering state.
    pub fn state(&self) -> ListState {
        match &self.list {
            None => ListState::NoList,
            Some(acc) if acc.ordered => ListState::BufferingOrdered,
            Some(_) => ListState::BufferingUnordered,
        }
    }

    /// Returns the blocks emitted so far, excluding any open list.
    pub fn emitted(&self) -> &[KeyedBlock] {
        &self.out
    }

    fn push_item(&mut self, ordered: bool, index: usize, item: Inline) {
        if self.list.as_ref().is_some_and(|acc| acc.ordered != ordered) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| ListAccumulator {
                ordered,
                first_line: index,
                items: vec![],
            })
            .items
            .push(item);
    }

    fn flush_list(&mut self) {
        if let Some(acc) = self.list.take() {
            self.out.push(KeyedBlock {
                key: acc.first_line,
                block: Block::List {
                    ordered: acc.ordered,
                    items: acc.items,
                },
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
