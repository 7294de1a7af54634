/// Quote block type with owned prefix constant.
pub struct Quote;

impl Quote {
    /// The quote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the prefix length if `line` is a quote line.
    pub fn prefix_len(line: &str) -> Option<usize> {
        line.starts_with(Self::PREFIX).then_some(Self::PREFIX.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_needs_space() {
        assert_eq!(Quote::prefix_len("> said"), Some(2));
        assert_eq!(Quote::prefix_len(">said"), None);
        assert_eq!(Quote::prefix_len(" > said"), None);
    }
}
