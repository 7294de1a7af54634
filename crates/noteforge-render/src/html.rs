//! HTML output for rendered blocks.
//!
//! Produces the markup used by the note editor preview and the public share
//! page. Inline content is emitted in one of two modes:
//!
//! - `sanitized` (default): plain text is escaped and tags are rebuilt from
//!   the structured spans, with hrefs restricted to an allow-list of schemes
//! - `trusted`: the legacy substitution markup is injected verbatim, which is
//!   only safe for content the caller already trusts

use std::{cmp::Reverse, collections::BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    blocks::{Block, HeadingLevel},
    inline::{Inline, InlineSpan, SpanKind},
    render,
};

/// How inline content is turned into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupMode {
    #[default]
    Sanitized,
    Trusted,
}

/// Options for [`HtmlRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub markup: MarkupMode,
    /// Schemes a link href may use in sanitized mode. Relative hrefs are
    /// always allowed. Compared case-insensitively.
    pub allowed_link_schemes: Vec<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            markup: MarkupMode::Sanitized,
            allowed_link_schemes: vec!["http".into(), "https".into(), "mailto".into()],
        }
    }
}

const CODE_OPEN: &str = r#"<code class="bg-muted px-1 rounded">"#;
const LINK_CLASS: &str = "text-blue-600 underline";

/// HTML renderer for block sequences.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Renders markdown source straight to HTML.
    pub fn render_markdown(&self, text: &str) -> String {
        self.render_blocks(&render(text))
    }

    /// Renders blocks, one element per line.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|b| self.render_block(b))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, content } => {
                let (tag, class) = match level {
                    HeadingLevel::H1 => ("h1", "text-2xl font-bold my-2"),
                    HeadingLevel::H2 => ("h2", "text-xl font-bold my-2"),
                    HeadingLevel::H3 => ("h3", "text-lg font-bold my-2"),
                };
                format!(
                    r#"<{tag} class="{class}">{}</{tag}>"#,
                    self.render_inline(content)
                )
            }
            Block::Paragraph(content) => {
                format!(r#"<p class="my-1">{}</p>"#, self.render_inline(content))
            }
            Block::Quote(content) => format!(
                r#"<blockquote class="border-l-4 border-gray-300 pl-4 my-2 italic">{}</blockquote>"#,
                self.render_inline(content)
            ),
            Block::LineBreak => "<br>".to_string(),
            Block::List { ordered, items } => {
                let (tag, class) = if *ordered {
                    ("ol", "my-2 list-decimal list-inside")
                } else {
                    ("ul", "my-2 list-disc list-inside")
                };
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", self.render_inline(item)))
                    .collect();
                format!(r#"<{tag} class="{class}">{items}</{tag}>"#)
            }
        }
    }

    /// Renders a complete public note: escaped title, then the rendered body.
    ///
    /// An empty or missing title is shown as "Untitled".
    pub fn render_note(&self, title: Option<&str>, body: &str) -> String {
        let title = title.filter(|t| !t.is_empty()).unwrap_or("Untitled");
        format!(
            "<article class=\"note\">\n<h1 class=\"text-2xl font-bold mb-4\">{}</h1>\n<div class=\"prose prose-sm max-w-none\">\n{}\n</div>\n</article>",
            html_escape::encode_text(title),
            self.render_markdown(body)
        )
    }

    pub fn render_inline(&self, inline: &Inline) -> String {
        match self.options.markup {
            MarkupMode::Trusted => inline.html.clone(),
            MarkupMode::Sanitized => self.sanitized_inline(inline),
        }
    }

    /// Returns whether `href` may be emitted as a link target.
    ///
    /// ASCII whitespace and control characters are ignored while looking for
    /// the scheme, since browsers strip them too. An href whose first `:`
    /// comes after a `/`, `?` or `#` is relative.
    pub fn is_allowed_href(&self, href: &str) -> bool {
        let cleaned: String = href
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
            .collect();
        let Some(colon) = cleaned.find(':') else {
            return true;
        };
        let scheme = &cleaned[..colon];
        if scheme.contains(['/', '?', '#']) {
            return true;
        }
        self.options
            .allowed_link_schemes
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    }

    fn keep_span(&self, text: &str, span: &InlineSpan) -> bool {
        let r = &span.range;
        if r.start > r.end
            || r.end > text.len()
            || !text.is_char_boundary(r.start)
            || !text.is_char_boundary(r.end)
        {
            return false;
        }
        if let SpanKind::Link { href } = &span.kind
            && !self.is_allowed_href(href)
        {
            log::debug!("dropping link with disallowed scheme: {href:?}");
            return false;
        }
        true
    }

    /// Rebuilds properly nested markup from possibly overlapping spans.
    ///
    /// Spans are ordered outermost first (earlier start, then later end, then
    /// pipeline order). Boundaries are swept left to right with the set of
    /// spans covering each one. At each boundary the open tags that no longer
    /// apply are closed, and tags above them are reopened as needed.
    fn sanitized_inline(&self, inline: &Inline) -> String {
        let text = inline.text.as_str();
        let mut spans: Vec<&InlineSpan> = inline
            .spans
            .iter()
            .filter(|s| self.keep_span(text, s))
            .collect();
        spans.sort_by_key(|s| (s.range.start, Reverse(s.range.end)));

        let mut by_end: Vec<usize> = (0..spans.len()).collect();
        by_end.sort_by_key(|&i| spans[i].range.end);

        let mut bounds: Vec<usize> = spans
            .iter()
            .flat_map(|s| [s.range.start, s.range.end])
            .chain([0, text.len()])
            .collect();
        bounds.sort_unstable();
        bounds.dedup();

        let mut out = String::with_capacity(text.len());
        let mut stack: Vec<usize> = vec![];
        let mut active: BTreeSet<usize> = BTreeSet::new();
        let mut empties: Vec<usize> = vec![];
        let (mut next_start, mut next_end) = (0, 0);

        for (w, &pos) in bounds.iter().enumerate() {
            while next_end < by_end.len() && spans[by_end[next_end]].range.end <= pos {
                active.remove(&by_end[next_end]);
                next_end += 1;
            }
            empties.clear();
            while next_start < spans.len() && spans[next_start].range.start <= pos {
                if spans[next_start].range.is_empty() {
                    empties.push(next_start);
                } else {
                    active.insert(next_start);
                }
                next_start += 1;
            }

            let common = stack
                .iter()
                .zip(&active)
                .take_while(|(a, b)| a == b)
                .count();

            for &i in stack[common..].iter().rev() {
                close_tag(&spans[i].kind, &mut out);
            }
            stack.truncate(common);

            for &i in &empties {
                open_tag(&spans[i].kind, &mut out);
                close_tag(&spans[i].kind, &mut out);
            }

            for &i in active.iter().skip(common) {
                open_tag(&spans[i].kind, &mut out);
                stack.push(i);
            }

            if let Some(&next) = bounds.get(w + 1) {
                out.push_str(&html_escape::encode_text(&text[pos..next]));
            }
        }

        for &i in stack.iter().rev() {
            close_tag(&spans[i].kind, &mut out);
        }
        out
    }
}

fn open_tag(kind: &SpanKind, out: &mut String) {
    match kind {
        SpanKind::Strong => out.push_str("<strong>"),
        SpanKind::Emphasis => out.push_str("<em>"),
        SpanKind::Underline => out.push_str("<u>"),
        SpanKind::Strikethrough => out.push_str("<del>"),
        SpanKind::Code => out.push_str(CODE_OPEN),
        SpanKind::Link { href } => {
            out.push_str("<a href=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(href));
            out.push_str("\" class=\"");
            out.push_str(LINK_CLASS);
            out.push_str("\">");
        }
    }
}

fn close_tag(kind: &SpanKind, out: &mut String) {
    out.push_str(match kind {
        SpanKind::Strong => "</strong>",
        SpanKind::Emphasis => "</em>",
        SpanKind::Underline => "</u>",
        SpanKind::Strikethrough => "</del>",
        SpanKind::Code => "</code>",
        SpanKind::Link { .. } => "</a>",
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sanitized(text: &str) -> String {
        HtmlRenderer::default().render_markdown(text)
    }

    fn trusted(text: &str) -> String {
        HtmlRenderer::new(HtmlOptions {
            markup: MarkupMode::Trusted,
            ..HtmlOptions::default()
        })
        .render_markdown(text)
    }

    #[test]
    fn default_mode_is_sanitized() {
        assert_eq!(HtmlOptions::default().markup, MarkupMode::Sanitized);
    }

    #[test]
    fn escapes_text() {
        assert_eq!(
            sanitized("<script>alert(1)</script>"),
            r#"<p class="my-1">&lt;script&gt;alert(1)&lt;/script&gt;</p>"#
        );
    }

    #[test]
    fn trusted_injects_markup() {
        assert_eq!(
            trusted("<b>hi</b> **x**"),
            r#"<p class="my-1"><b>hi</b> <strong>x</strong></p>"#
        );
    }

    #[test]
    fn nested_spans() {
        assert_eq!(
            sanitized("**a *b* c**"),
            r#"<p class="my-1"><strong>a <em>b</em> c</strong></p>"#
        );
    }

    #[test]
    fn overlapping_spans_are_split() {
        // Legacy markup would be <strong>a*b</strong>c* -> <strong>a<em>b</strong>c</em>
        assert_eq!(
            sanitized("**a*b**c*"),
            r#"<p class="my-1"><strong>a<em>b</em></strong><em>c</em></p>"#
        );
    }

    #[test]
    fn empty_span_renders_empty_tag() {
        assert_eq!(sanitized("x****y"), r#"<p class="my-1">x<strong></strong>y</p>"#);
    }

    #[test]
    fn spans_sharing_a_boundary_reopen_in_order() {
        assert_eq!(
            sanitized("*a*~~b~~ **c**"),
            r#"<p class="my-1"><em>a</em><del>b</del> <strong>c</strong></p>"#
        );
    }

    #[test]
    fn disallowed_link_keeps_label() {
        assert_eq!(
            sanitized("[click](javascript:alert(1))"),
            r#"<p class="my-1">click)</p>"#
        );
    }

    #[test]
    fn href_is_attribute_escaped() {
        assert_eq!(
            sanitized(r#"[x](https://e.com/?q="a")"#),
            r#"<p class="my-1"><a href="https://e.com/?q=&quot;a&quot;" class="text-blue-600 underline">x</a></p>"#
        );
    }

    #[test]
    fn href_scheme_detection() {
        let r = HtmlRenderer::default();
        assert!(r.is_allowed_href("https://example.com"));
        assert!(r.is_allowed_href("HTTP://example.com"));
        assert!(r.is_allowed_href("mailto:a@b.c"));
        assert!(r.is_allowed_href("/notes/1"));
        assert!(r.is_allowed_href("page#sec:2"));
        assert!(r.is_allowed_href("url"));
        assert!(!r.is_allowed_href("javascript:alert(1)"));
        assert!(!r.is_allowed_href(" java\tscript:alert(1)"));
        assert!(!r.is_allowed_href("data:text/html,hi"));
    }

    #[test]
    fn custom_scheme_allow_list() {
        let r = HtmlRenderer::new(HtmlOptions {
            allowed_link_schemes: vec!["noteforge".into()],
            ..HtmlOptions::default()
        });
        assert!(r.is_allowed_href("noteforge:note/1"));
        assert!(!r.is_allowed_href("https://example.com"));
    }

    #[test]
    fn out_of_range_spans_are_ignored() {
        let inline = Inline {
            html: String::new(),
            text: "abc".into(),
            spans: vec![InlineSpan {
                kind: SpanKind::Strong,
                range: 2..10,
            }],
        };
        assert_eq!(HtmlRenderer::default().render_inline(&inline), "abc");
    }

    #[test]
    fn note_title_defaults_and_escapes() {
        let r = HtmlRenderer::default();
        assert!(r.render_note(None, "").contains(">Untitled</h1>"));
        assert!(r.render_note(Some(""), "").contains(">Untitled</h1>"));
        assert!(r.render_note(Some("a<b"), "").contains(">a&lt;b</h1>"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: HtmlOptions = serde_json::from_str(r#"{"markup":"trusted"}"#).unwrap();
        assert_eq!(opts.markup, MarkupMode::Trusted);
        assert_eq!(opts.allowed_link_schemes, HtmlOptions::default().allowed_link_schemes);
    }
}
