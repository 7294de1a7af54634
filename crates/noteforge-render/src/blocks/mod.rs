//! # Block Rendering
//!
//! Two-phase, single forward pass over the source lines.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified by its raw
//!    prefix into a `LineClass` (bullet, numbered, heading, quote, blank, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds the classes
//!    into `Block`s, buffering contiguous list lines in a `ListAccumulator`
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `KeyedBlock`
//! - **`kinds`**: block-specific types with owned prefixes (lists, headings, quotes)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for list buffering
//!
//! ## Key Invariants
//!
//! - Every line yields at most one block; a run of same-type list lines
//!   yields a single `List`
//! - Blocks come out in source order
//! - Classification always looks at the original line, never at the
//!   substituted markup

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, ListAccumulator, ListState};
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use kinds::HeadingLevel;
pub use types::{Block, KeyedBlock};
