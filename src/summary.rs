//! Extracts a short summary from a parsed post for index pages and the RSS
//! feed. A summary is either the post's first sentence (everything up to and
//! including the first `.`) or, failing that, its first 128 characters
//! followed by an ellipsis.

use crate::markdown::Node;

/// The number of characters after which a summary is cut off.
pub const MAX_LENGTH: usize = 128;

const ELLIPSIS: &str = "...";

/// Selects the line-break token inserted between text leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flavor {
    /// For index pages; text leaves are separated by `<br/>`.
    Html,

    /// For the RSS feed; text leaves are separated by `\n`.
    Plain,
}

impl Flavor {
    fn line_break(self) -> &'static str {
        match self {
            Flavor::Html => "<br/>",
            Flavor::Plain => "\n",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Walk {
    Continue,
    Stop,
}

/// Summarizes the document rooted at `root` by walking it depth first.
pub fn summary(root: &Node, flavor: Flavor) -> String {
    let mut summary = Summary {
        out: String::new(),
        length: 0,
        flavor,
    };
    summary.visit(root);
    summary.out
}

struct Summary {
    out: String,

    /// The length of `out` in chars.
    length: usize,

    flavor: Flavor,
}

impl Summary {
    fn visit(&mut self, node: &Node) -> Walk {
        match node {
            Node::Text(text) => self.on_text(text),
            Node::Composite(children) => {
                for child in children {
                    if self.visit(child) == Walk::Stop {
                        return Walk::Stop;
                    }
                }
                Walk::Continue
            }
            Node::Other => Walk::Continue,
        }
    }

    fn on_text(&mut self, text: &str) -> Walk {
        if let Some(i) = text.find('.') {
            self.push(&text[..=i]);
            return Walk::Stop;
        }

        self.push(text);
        if self.length > MAX_LENGTH {
            self.truncate(MAX_LENGTH);
            self.out.push_str(ELLIPSIS);
            return Walk::Stop;
        }

        self.push(self.flavor.line_break());
        Walk::Continue
    }

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
        self.length += s.chars().count();
    }

    fn truncate(&mut self, chars: usize) {
        if let Some((i, _)) = self.out.char_indices().nth(chars) {
            self.out.truncate(i);
            self.length = chars;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::markdown::render;

    fn text(s: &str) -> Node {
        Node::Text(s.to_owned())
    }

    #[test]
    fn test_first_sentence() {
        let root = render("Hello world. This is extra.").root;
        assert_eq!("Hello world.", summary(&root, Flavor::Html));
        assert_eq!("Hello world.", summary(&root, Flavor::Plain));
    }

    #[test]
    fn test_truncates_long_text() {
        let long = "a".repeat(200);
        let root = render(&long).root;
        let wanted = format!("{}...", "a".repeat(MAX_LENGTH));
        assert_eq!(wanted, summary(&root, Flavor::Html));
        assert_eq!(wanted, summary(&root, Flavor::Plain));
    }

    #[test]
    fn test_sentence_takes_priority_over_length() {
        let sentence = format!("{}.", "b".repeat(180));
        let root = Node::Composite(vec![text(&sentence)]);
        assert_eq!(sentence, summary(&root, Flavor::Plain));
    }

    #[test]
    fn test_line_breaks_between_leaves() {
        let root = Node::Composite(vec![
            Node::Composite(vec![text("Title")]),
            Node::Composite(vec![text("some prose"), Node::Other, text("more. Rest")]),
        ]);
        assert_eq!("Title<br/>some prose<br/>more.", summary(&root, Flavor::Html));
        assert_eq!("Title\nsome prose\nmore.", summary(&root, Flavor::Plain));
    }

    #[test]
    fn test_stop_skips_later_siblings() {
        let root = Node::Composite(vec![
            Node::Composite(vec![text("Done."), text("never")]),
            text("never either"),
        ]);
        assert_eq!("Done.", summary(&root, Flavor::Plain));
    }

    #[test]
    fn test_short_text_without_sentence() {
        let root = Node::Composite(vec![text("no period here")]);
        assert_eq!("no period here\n", summary(&root, Flavor::Plain));
        assert_eq!("no period here<br/>", summary(&root, Flavor::Html));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!("", summary(&Node::Composite(Vec::new()), Flavor::Html));
        assert_eq!("", summary(&Node::Other, Flavor::Html));
    }

    #[test]
    fn test_bounded_length() {
        let leaves: Vec<Node> = (0..40).map(|i| text(&format!("word{}", i))).collect();
        let root = Node::Composite(leaves);
        for flavor in &[Flavor::Html, Flavor::Plain] {
            let s = summary(&root, *flavor);
            assert!(s.ends_with(ELLIPSIS));
            assert_eq!(MAX_LENGTH + ELLIPSIS.len(), s.chars().count());
        }
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let root = Node::Composite(vec![text(&"é".repeat(150))]);
        let s = summary(&root, Flavor::Plain);
        assert_eq!(format!("{}...", "é".repeat(MAX_LENGTH)), s);
    }

    #[test]
    fn test_inline_markdown_stays_one_sentence() {
        let cases = [
            ("see [the docs] for details. more", "see [the docs] for details."),
            ("x < y is true. more", "x < y is true."),
            ("escaped \\* star here. more", "escaped * star here."),
            ("AT&amp;T rocks. more", "AT&T rocks."),
            ("a <b>bold</b> claim. more", "a <b>bold</b> claim."),
        ];
        for (source, wanted) in &cases {
            let root = render(source).root;
            assert_eq!(*wanted, summary(&root, Flavor::Html), "html: `{}`", source);
            assert_eq!(*wanted, summary(&root, Flavor::Plain), "plain: `{}`", source);
        }
    }

    #[test]
    fn test_link_text_is_its_own_leaf() {
        let root = render("see [the docs](https://example.org) for details. more").root;
        assert_eq!("see <br/>the docs<br/> for details.", summary(&root, Flavor::Html));
        assert_eq!("see \nthe docs\n for details.", summary(&root, Flavor::Plain));
    }

    #[test]
    fn test_inline_code_and_hard_wraps() {
        let root = render("call `run()`\nthen stop. more").root;
        assert_eq!("call <br/>run()<br/>then stop.", summary(&root, Flavor::Html));
        assert_eq!("call \nrun()\nthen stop.", summary(&root, Flavor::Plain));
    }
}
