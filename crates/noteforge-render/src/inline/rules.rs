use std::sync::OnceLock;

use regex::Regex;

/// Which construct an inline rule recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Link,
}

/// One step of the inline substitution pipeline.
///
/// Capture group 1 is the displayed content. Links also capture the href in
/// group 2.
pub struct Rule {
    pub kind: RuleKind,
    pub pattern: Regex,
    pub template: &'static str,
}

// Captured runs are lazy and never cross a line terminator.
const RULE_SOURCES: [(RuleKind, &str, &str); 6] = [
    (
        RuleKind::Bold,
        r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*",
        "<strong>${1}</strong>",
    ),
    (
        RuleKind::Italic,
        r"\*([^\r\n\x{2028}\x{2029}]*?)\*",
        "<em>${1}</em>",
    ),
    (
        RuleKind::Underline,
        r"__([^\r\n\x{2028}\x{2029}]*?)__",
        "<u>${1}</u>",
    ),
    (
        RuleKind::Strikethrough,
        r"~~([^\r\n\x{2028}\x{2029}]*?)~~",
        "<del>${1}</del>",
    ),
    (
        RuleKind::Code,
        r"`([^\r\n\x{2028}\x{2029}]*?)`",
        r#"<code class="bg-muted px-1 rounded">${1}</code>"#,
    ),
    (
        RuleKind::Link,
        r"\[([^\r\n\x{2028}\x{2029}]*?)\]\(([^\r\n\x{2028}\x{2029}]*?)\)",
        r#"<a href="${2}" class="text-blue-600 underline">${1}</a>"#,
    ),
];

/// Returns the inline rules in application order.
///
/// Later rules run over the output of earlier ones, so the order decides how
/// nested or ambiguous delimiters resolve: `***x***` becomes bold wrapping an
/// italic remainder rather than the other way round.
pub fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_SOURCES
            .iter()
            .map(|&(kind, pattern, template)| Rule {
                kind,
                pattern: Regex::new(pattern).expect("Invalid inline rule regex"),
                template,
            })
            .collect()
    })
}

/// Runs the full substitution pipeline over one line, producing legacy markup.
///
/// Text outside the recognised constructs, including hrefs and code content,
/// is passed through unescaped.
pub fn substitute(line: &str) -> String {
    let mut out = line.to_string();
    for rule in rules() {
        out = rule.pattern.replace_all(&out, rule.template).into_owned();
    }
    out
}
