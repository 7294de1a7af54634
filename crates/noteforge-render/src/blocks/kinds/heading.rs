use serde::Serialize;

/// Heading depth. Only the first three levels are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Returns the numeric level, 1 to 3.
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// Heading block type with owned prefix constants.
pub struct Heading;

impl Heading {
    /// Heading prefixes in detection order.
    pub const PREFIXES: [(HeadingLevel, &'static str); 3] = [
        (HeadingLevel::H1, "# "),
        (HeadingLevel::H2, "## "),
        (HeadingLevel::H3, "### "),
    ];

    /// Returns the level and prefix length if `line` is a heading line.
    pub fn detect(line: &str) -> Option<(HeadingLevel, usize)> {
        Self::PREFIXES
            .iter()
            .find(|(_, prefix)| line.starts_with(prefix))
            .map(|&(level, prefix)| (level, prefix.len()))
    }
}
