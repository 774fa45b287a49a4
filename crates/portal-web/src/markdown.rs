//! Markdown returned by the endpoint, rendered for `inner_html`.
//!
//! The endpoint is remote and untrusted, so raw HTML blocks are escaped to
//! text and `javascript:` links are neutralised before rendering.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render markdown to an HTML fragment safe to inject into the page.
pub fn render_markdown(source: &str) -> String {
    let events = Parser::new_ext(source, options()).map(sanitize);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Text content of the rendered document, one line per block.
/// This is what lands on the clipboard.
pub fn plain_text(source: &str) -> String {
    let mut out = String::with_capacity(source.len());

    for event in Parser::new_ext(source, options()) {
        match event {
            Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
                out.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Start(
                Tag::Paragraph
                | Tag::Heading { .. }
                | Tag::List(_)
                | Tag::Item
                | Tag::CodeBlock(_)
                | Tag::BlockQuote(_)
                | Tag::Table(_),
            ) => break_line(&mut out),
            Event::End(TagEnd::TableCell) => out.push('\t'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::HtmlBlock
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => {
                if out.ends_with('\t') {
                    out.pop();
                }
                break_line(&mut out);
            }
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") || scheme.starts_with("data:text/html") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = render_markdown("# Report\n\nHello **world**");
        assert_eq!(html, "<h1>Report</h1>\n<p>Hello <strong>world</strong></p>\n");
    }

    #[test]
    fn extensions_enabled() {
        let html = render_markdown("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;there&lt;/b&gt;"));
    }

    #[test]
    fn script_links_are_neutralised() {
        let html = render_markdown("[click](javascript:alert(1)) and [ok](https://example.com)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn plain_text_one_line_per_block() {
        let text = plain_text("# Title\n\nHello **world**\n\n- a\n- b");
        assert_eq!(text, "Title\nHello world\na\nb");
    }

    #[test]
    fn plain_text_keeps_code() {
        let text = plain_text("Run `make`:\n\n```\nmake all\n```");
        assert_eq!(text, "Run make:\nmake all");
    }

    #[test]
    fn plain_text_tabs_table_cells() {
        let text = plain_text("| a | b |\n|---|---|\n| 1 | 2 |");
        assert_eq!(text, "a\tb\n1\t2");
    }

    #[test]
    fn plain_text_splits_nested_list_items() {
        let text = plain_text("- parent\n  - child\n- next");
        assert_eq!(text, "parent\nchild\nnext");
    }

    #[test]
    fn plain_text_splits_code_inside_item() {
        let text = plain_text("- step\n  ```\n  make\n  ```\n");
        assert_eq!(text, "step\nmake");
    }

    #[test]
    fn plain_text_splits_quote_after_text() {
        let text = plain_text("- note\n  > quoted");
        assert_eq!(text, "note\nquoted");
    }

    #[test]
    fn empty_source() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(plain_text(""), "");
    }
}
