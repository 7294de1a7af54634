//! # Block Kinds
//!
//! Block-specific types that own their line prefixes. The classifier asks
//! these types whether a line opens their block; it never hardcodes `- `,
//! `# ` or `> ` itself.

pub mod heading;
pub mod list;
pub mod quote;

pub use heading::{Heading, HeadingLevel};
pub use list::{BulletList, OrderedList};
pub use quote::Quote;
