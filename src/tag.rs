//! Defines the [`TagVocabulary`] and [`TagSet`] types. A post's tags aren't
//! declared anywhere; they're discovered by scanning every raw line of the
//! post for words that belong to the configured vocabulary.

use std::collections::{BTreeSet, HashSet};
use std::iter::FromIterator;

/// The fixed set of recognized tag keywords. Entries are stored lower-cased
/// so that matching is case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagVocabulary(HashSet<String>);

impl TagVocabulary {
    /// Parses a comma-separated list of tags (e.g., `java,jvm,lambda`).
    /// Entries are trimmed and lower-cased; empty entries are dropped.
    pub fn parse(list: &str) -> TagVocabulary {
        list.split(',').collect()
    }

    /// Returns `true` if `word` (already lower-cased) is a recognized tag.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scans a single line of raw post text and adds each vocabulary word
    /// it finds to `tags`. The line is split on every non-word character
    /// (anything other than an ASCII letter, digit, or underscore) and each
    /// resulting token is lower-cased before lookup.
    pub fn scan_line(&self, line: &str, tags: &mut TagSet) {
        for token in line.split(|c: char| !is_word_char(c)) {
            if token.is_empty() {
                continue;
            }
            let token = token.to_lowercase();
            if self.contains(&token) {
                tags.0.insert(token);
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for TagVocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        TagVocabulary(
            iter.into_iter()
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The tags discovered in a single post. The set is ordered only so that
/// rendered tag lists are stable from one build to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> TagSet {
        TagSet::default()
    }

    /// Builds a [`TagSet`] by scanning each of `lines` against `vocabulary`.
    pub fn scan<'a, I>(vocabulary: &TagVocabulary, lines: I) -> TagSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tags = TagSet::new();
        for line in lines {
            vocabulary.scan_line(line, &mut tags);
        }
        tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn vocabulary() -> TagVocabulary {
        TagVocabulary::parse("java,jvm,lambda")
    }

    #[test]
    fn test_parse_vocabulary() {
        let vocabulary = TagVocabulary::parse(" Java, jvm ,,LAMBDA,");
        assert_eq!(3, vocabulary.len());
        assert!(vocabulary.contains("java"));
        assert!(vocabulary.contains("jvm"));
        assert!(vocabulary.contains("lambda"));
    }

    #[test]
    fn test_scan_case_insensitive() {
        for line in &["Java", "JAVA", "java", "jAvA rocks"] {
            let tags = TagSet::scan(&vocabulary(), vec![*line]);
            assert!(tags.contains("java"), "`{}` should be tagged java", line);
            assert_eq!(1, tags.len());
        }
    }

    #[test]
    fn test_scan_splits_on_non_word_characters() {
        let tags = TagSet::scan(
            &vocabulary(),
            vec!["(java)/jvm.lambda!", "javascript jvms lambda_calculus"],
        );
        let tags: Vec<&str> = tags.iter().collect();
        assert_eq!(vec!["java", "jvm", "lambda"], tags);
    }

    #[test]
    fn test_scan_raw_markdown_lines() {
        let tags = TagSet::scan(
            &vocabulary(),
            vec!["```java", "var f = (x) -> x; // a **Lambda**", "```"],
        );
        assert!(tags.contains("java"));
        assert!(tags.contains("lambda"));
        assert!(!tags.contains("jvm"));
    }

    #[test]
    fn test_scan_no_matches() {
        let tags = TagSet::scan(&vocabulary(), vec!["Hello world.", ""]);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_scan_order_independent_and_idempotent() {
        let lines = vec!["about the JVM", "and Java", "and java again"];
        let forward = TagSet::scan(&vocabulary(), lines.iter().copied());
        let backward = TagSet::scan(&vocabulary(), lines.iter().rev().copied());
        assert_eq!(forward, backward);

        let mut twice = forward.clone();
        for line in &lines {
            vocabulary().scan_line(line, &mut twice);
        }
        assert_eq!(forward, twice);
    }

    #[test]
    fn test_scan_empty_vocabulary() {
        let tags = TagSet::scan(&TagVocabulary::parse(""), vec!["java jvm"]);
        assert!(tags.is_empty());
    }
}
