use std::ops::Range;

use super::{
    rules::{RuleKind, rules},
    types::{InlineSpan, SpanKind},
};

/// Runs the inline rule pipeline over `line`, producing plain text and spans.
///
/// Each rule matches against the text left by the previous rules, exactly as
/// the markup substitution does. The delimiters of every match are removed
/// and its content is recorded as a span. Spans recorded by earlier rules are
/// shifted to stay over the same characters. A boundary that falls inside a
/// removed delimiter (for example an emphasis that closes inside a link's
/// href) is clamped to where the delimiter was.
pub fn extract(line: &str) -> (String, Vec<InlineSpan>) {
    let mut text = line.to_string();
    let mut spans: Vec<InlineSpan> = Vec::new();

    for rule in rules() {
        let mut removed: Vec<Range<usize>> = Vec::new();
        let mut added: Vec<(SpanKind, Range<usize>)> = Vec::new();

        for caps in rule.pattern.captures_iter(&text) {
            let (Some(full), Some(content)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let kind = match rule.kind {
                RuleKind::Bold => SpanKind::Strong,
                RuleKind::Italic => SpanKind::Emphasis,
                RuleKind::Underline => SpanKind::Underline,
                RuleKind::Strikethrough => SpanKind::Strikethrough,
                RuleKind::Code => SpanKind::Code,
                RuleKind::Link => SpanKind::Link {
                    href: caps
                        .get(2)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                },
            };
            removed.push(full.start()..content.start());
            removed.push(content.end()..full.end());
            added.push((kind, content.range()));
        }

        if removed.is_empty() {
            continue;
        }

        let next = without_ranges(&text, &removed);
        let removals = Removals::new(removed);
        for span in &mut spans {
            span.range = removals.remap_range(&span.range);
        }
        spans.extend(added.into_iter().map(|(kind, range)| InlineSpan {
            range: removals.remap_range(&range),
            kind,
        }));
        text = next;
    }

    (text, spans)
}

/// Copies `text` leaving out the sorted, non-overlapping `removed` ranges.
fn without_ranges(text: &str, removed: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    for r in removed {
        out.push_str(&text[pos..r.start]);
        pos = r.end;
    }
    out.push_str(&text[pos..]);
    out
}

/// Sorted, non-overlapping ranges cut out of a text, with the total length
/// removed before each one.
struct Removals {
    ranges: Vec<Range<usize>>,
    shifts: Vec<usize>,
}

impl Removals {
    fn new(ranges: Vec<Range<usize>>) -> Self {
        let shifts = ranges
            .iter()
            .scan(0, |total, r| {
                let before = *total;
                *total += r.len();
                Some(before)
            })
            .collect();
        Self { ranges, shifts }
    }

    fn remap_range(&self, range: &Range<usize>) -> Range<usize> {
        self.remap(range.start)..self.remap(range.end)
    }

    /// Maps an offset in the original text to the text with the ranges cut
    /// out. Offsets inside a removed range land where it started.
    fn remap(&self, pos: usize) -> usize {
        let before = self.ranges.partition_point(|r| r.start < pos);
        let Some(last) = before.checked_sub(1) else {
            return pos;
        };
        let r = &self.ranges[last];
        if pos < r.end {
            r.start - self.shifts[last]
        } else {
            pos - self.shifts[last] - r.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(kind: SpanKind, range: Range<usize>) -> InlineSpan {
        InlineSpan { kind, range }
    }

    #[test]
    fn plain_text_has_no_spans() {
        let (text, spans) = extract("just words");
        assert_eq!(text, "just words");
        assert!(spans.is_empty());
    }

    #[test]
    fn bold_and_italic() {
        let (text, spans) = extract("**bold** and *italic*");
        assert_eq!(text, "bold and italic");
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Strong, 0..4),
                span(SpanKind::Emphasis, 9..15)
            ]
        );
    }

    #[test]
    fn earlier_spans_shift_with_later_removals() {
        let (text, spans) = extract("*a* **b**");
        assert_eq!(text, "a b");
        assert_eq!(
            spans,
            vec![span(SpanKind::Strong, 2..3), span(SpanKind::Emphasis, 0..1)]
        );
    }

    #[test]
    fn overlapping_markup_becomes_overlapping_spans() {
        // Markup form: <strong><em>x</strong></em>
        let (text, spans) = extract("***x***");
        assert_eq!(text, "x");
        assert_eq!(
            spans,
            vec![span(SpanKind::Strong, 0..1), span(SpanKind::Emphasis, 0..1)]
        );
    }

    #[test]
    fn link_keeps_href_out_of_text() {
        let (text, spans) = extract("see [docs](https://example.com) now");
        assert_eq!(text, "see docs now");
        assert_eq!(
            spans,
            vec![span(
                SpanKind::Link {
                    href: "https://example.com".into()
                },
                4..8
            )]
        );
    }

    #[test]
    fn code_content_is_text() {
        let (text, spans) = extract("run `cargo` here");
        assert_eq!(text, "run cargo here");
        assert_eq!(spans, vec![span(SpanKind::Code, 4..9)]);
    }

    #[test]
    fn boundary_inside_href_is_clamped() {
        let (text, spans) = extract("*a [x](b* c)");
        assert_eq!(text, "a x");
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Emphasis, 0..3),
                span(SpanKind::Link { href: "b c".into() }, 2..3)
            ]
        );
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        let (text, spans) = extract("é **ü** ß");
        assert_eq!(text, "é ü ß");
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].range.clone()], "ü");
    }

    #[test]
    fn remap_offsets() {
        let removals = Removals::new(vec![1..3, 5..6]);
        let mapped: Vec<usize> = (0..=8).map(|pos| removals.remap(pos)).collect();
        assert_eq!(mapped, vec![0, 1, 1, 1, 2, 3, 3, 4, 5]);
    }

    #[test]
    fn remap_with_adjacent_removals() {
        // `**` then `*` removed back to back.
        let removals = Removals::new(vec![0..2, 2..3, 4..7]);
        assert_eq!(removals.remap(0), 0);
        assert_eq!(removals.remap(2), 0);
        assert_eq!(removals.remap(3), 0);
        assert_eq!(removals.remap(4), 1);
        assert_eq!(removals.remap(5), 1);
        assert_eq!(removals.remap(7), 1);
        assert_eq!(removals.remap(9), 3);
    }

    #[test]
    fn many_spans_on_one_line() {
        let n = 50_000;
        let (text, spans) = extract(&"*a* ".repeat(n));
        assert_eq!(text, "a ".repeat(n));
        assert_eq!(spans.len(), n);
        assert_eq!(spans[n - 1], span(SpanKind::Emphasis, 2 * (n - 1)..2 * (n - 1) + 1));
    }
}
