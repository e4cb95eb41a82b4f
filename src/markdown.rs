//! Converts post Markdown into HTML and into a small document tree
//! ([`Node`]) which [`crate::summary`] walks to produce post summaries.
//!
//! Line breaks inside a paragraph are significant in posts (the source is
//! written with hard wraps), so every soft break is rendered as a hard break.

use pulldown_cmark::{html, Event, Options, Parser};

/// A node in a parsed post. Container elements (paragraphs, emphasis,
/// list items, ...) become [`Node::Composite`], text-bearing leaves (text,
/// inline code, raw HTML) become [`Node::Text`], and everything else (line
/// breaks, rules, ...) becomes [`Node::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Composite(Vec<Node>),
    Other,
}

/// A post's Markdown parsed into a [`Node`] tree plus its HTML rendering.
#[derive(Clone, Debug)]
pub struct RenderedPost {
    /// The root of the document tree. Always a [`Node::Composite`].
    pub root: Node,

    /// The post body rendered as HTML.
    pub html: String,
}

/// Parses `markdown` into a [`RenderedPost`].
pub fn render(markdown: &str) -> RenderedPost {
    let events: Vec<Event> = Parser::new_ext(markdown, options())
        .map(hard_wrap)
        .collect();

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html, events.iter().cloned());

    RenderedPost {
        root: tree(events),
        html,
    }
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options
}

fn hard_wrap(event: Event) -> Event {
    match event {
        Event::SoftBreak => Event::HardBreak,
        _ => event,
    }
}

/// Folds a flat stream of events into a [`Node`] tree. Each `Start` opens a
/// new composite which is closed by the matching `End`. pulldown-cmark splits
/// a single run of text at brackets, escapes, entities, and `<`, so adjacent
/// text and raw HTML events are merged back into one [`Node::Text`].
fn tree<'a, I>(events: I) -> Node
where
    I: IntoIterator<Item = Event<'a>>,
{
    let mut stack: Vec<Vec<Node>> = vec![Vec::new()];
    let mut in_run = false;
    for event in events {
        match event {
            Event::Text(text) | Event::Html(text) => {
                if in_run {
                    if let Some(Node::Text(run)) = stack.last_mut().and_then(|c| c.last_mut()) {
                        run.push_str(&text);
                        continue;
                    }
                }
                push(&mut stack, Node::Text(text.into_string()));
                in_run = true;
                continue;
            }
            Event::Start(_) => stack.push(Vec::new()),
            Event::End(_) => {
                if stack.len() > 1 {
                    if let Some(children) = stack.pop() {
                        push(&mut stack, Node::Composite(children));
                    }
                }
            }
            Event::Code(text) => push(&mut stack, Node::Text(text.into_string())),
            _ => push(&mut stack, Node::Other),
        }
        in_run = false;
    }

    while stack.len() > 1 {
        if let Some(children) = stack.pop() {
            push(&mut stack, Node::Composite(children));
        }
    }
    Node::Composite(stack.pop().unwrap_or_default())
}

fn push(stack: &mut Vec<Vec<Node>>, node: Node) {
    if let Some(children) = stack.last_mut() {
        children.push(node);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn text(s: &str) -> Node {
        Node::Text(s.to_owned())
    }

    #[test]
    fn test_render_paragraph() {
        let post = render("Hello world. This is extra.");
        assert_eq!("<p>Hello world. This is extra.</p>\n", post.html);
        assert_eq!(
            Node::Composite(vec![Node::Composite(vec![text(
                "Hello world. This is extra."
            )])]),
            post.root,
        );
    }

    #[test]
    fn test_render_hard_wraps() {
        let post = render("first line\nsecond line");
        assert_eq!("<p>first line<br />\nsecond line</p>\n", post.html);
        assert_eq!(
            Node::Composite(vec![Node::Composite(vec![
                text("first line"),
                Node::Other,
                text("second line"),
            ])]),
            post.root,
        );
    }

    #[test]
    fn test_render_nested_inline() {
        let post = render("# Title\n\nsome *emphasized* `code`");
        assert_eq!(
            Node::Composite(vec![
                Node::Composite(vec![text("Title")]),
                Node::Composite(vec![
                    text("some "),
                    Node::Composite(vec![text("emphasized")]),
                    text(" "),
                    text("code"),
                ]),
            ]),
            post.root,
        );
    }

    #[test]
    fn test_render_fenced_code() {
        let post = render("```java\nint x = 1;\n```\n");
        assert!(post
            .html
            .contains("<pre><code class=\"language-java\">int x = 1;\n</code></pre>"));
        assert_eq!(
            Node::Composite(vec![Node::Composite(vec![text("int x = 1;\n")])]),
            post.root,
        );
    }

    #[test]
    fn test_render_rule() {
        let post = render("---\n");
        assert_eq!(Node::Composite(vec![Node::Other]), post.root);
    }

    #[test]
    fn test_render_empty() {
        let post = render("");
        assert_eq!(Node::Composite(Vec::new()), post.root);
        assert!(post.html.is_empty());
    }

    #[test]
    fn test_render_merges_split_text() {
        for source in &[
            "see [the docs] for details. more",
            "x < y is true. more",
            "escaped \\* star here. more",
            "AT&amp;T rocks. more",
        ] {
            let wanted = source.replace("\\*", "*").replace("&amp;", "&");
            assert_eq!(
                Node::Composite(vec![Node::Composite(vec![text(&wanted)])]),
                render(source).root,
                "`{}` should be a single text leaf",
                source,
            );
        }
    }

    #[test]
    fn test_render_inline_html_is_text() {
        let post = render("a <b>bold</b> claim. more");
        assert_eq!(
            Node::Composite(vec![Node::Composite(vec![text(
                "a <b>bold</b> claim. more"
            )])]),
            post.root,
        );
    }

    #[test]
    fn test_render_link_is_composite() {
        let post = render("see [the docs](https://example.org) now");
        assert_eq!(
            Node::Composite(vec![Node::Composite(vec![
                text("see "),
                Node::Composite(vec![text("the docs")]),
                text(" now"),
            ])]),
            post.root,
        );
    }
}
