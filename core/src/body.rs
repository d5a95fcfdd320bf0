//! Long-form article bodies and the line format they are written in.
//!
//! Bodies are stored apart from the catalog and may lag behind it: a slug can
//! be listed without having a body yet, in which case a per-locale placeholder
//! is served instead.
//!
//! Each line of a body is read on its own:
//!
//! | line            | block                      |
//! |-----------------|----------------------------|
//! | `## Title`      | level 2 heading            |
//! | `### Title`     | level 3 heading            |
//! | `- item`        | unordered list item        |
//! | `1. item`       | ordered list item          |
//! | blank           | nothing                    |
//! | anything else   | paragraph                  |

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::{locale::Locale, samples};

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("ordered item pattern is valid"));

/// One structural block of an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block<'a> {
    /// `## ` line
    Heading2(&'a str),
    /// `### ` line
    Heading3(&'a str),
    /// `- ` line
    UnorderedItem(&'a str),
    /// `<n>.` line
    OrderedItem(&'a str),
    /// Any other non-blank line
    Paragraph(&'a str),
}

impl<'a> Block<'a> {
    /// The text of the block with its marker removed.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Heading2(text)
            | Self::Heading3(text)
            | Self::UnorderedItem(text)
            | Self::OrderedItem(text)
            | Self::Paragraph(text) => *text,
        }
    }
}

/// Split a body into blocks, one per non-blank line.
///
/// Consecutive list items are returned individually; grouping them is up to
/// the caller.
#[must_use]
pub fn parse_blocks(text: &str) -> Vec<Block<'_>> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Block<'_>> {
    if let Some(text) = line.strip_prefix("## ") {
        return Some(Block::Heading2(text));
    }
    if let Some(text) = line.strip_prefix("### ") {
        return Some(Block::Heading3(text));
    }
    if let Some(text) = line.strip_prefix("- ") {
        return Some(Block::UnorderedItem(text));
    }
    if let Some(marker) = ORDERED_ITEM.find(line) {
        return Some(Block::OrderedItem(&line[marker.end()..]));
    }
    if line.trim().is_empty() {
        return None;
    }
    Some(Block::Paragraph(line))
}

/// The body text served for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyText<'a> {
    /// Text written for the article, in `locale`.
    Authored {
        /// The body
        text: &'a str,
        /// Language the body is written in
        locale: Locale,
    },
    /// Nothing has been written yet.
    Placeholder(Locale),
}

impl<'a> BodyText<'a> {
    /// The text to render.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Authored { text, .. } => *text,
            Self::Placeholder(locale) => locale.placeholder(),
        }
    }

    /// Whether no body was written for the article.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// See [`parse_blocks`].
    #[must_use]
    pub fn blocks(&self) -> Vec<Block<'a>> {
        parse_blocks(self.as_str())
    }
}

/// Article bodies keyed by slug, then locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyStore {
    bodies: IndexMap<String, IndexMap<Locale, String>>,
}

impl BodyStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bodies shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        let mut store = Self::new();
        for (slug, locale, text) in samples::BODIES {
            store.insert(*slug, *locale, *text);
        }
        store
    }

    /// Add or replace the body of `slug` in `locale`.
    pub fn insert(&mut self, slug: impl Into<String>, locale: Locale, text: impl Into<String>) {
        self.bodies
            .entry(slug.into())
            .or_default()
            .insert(locale, text.into());
    }

    /// The body of `slug` written in exactly `locale`.
    #[must_use]
    pub fn get(&self, slug: &str, locale: Locale) -> Option<&str> {
        self.bodies.get(slug)?.get(&locale).map(String::as_str)
    }

    /// The body to serve for `slug` in `locale`.
    ///
    /// Falls back to the default locale's body when the requested translation
    /// is missing, and to the locale's placeholder when the slug has no body.
    #[must_use]
    pub fn lookup(&self, slug: &str, locale: Locale) -> BodyText<'_> {
        let Some(variants) = self.bodies.get(slug) else {
            return BodyText::Placeholder(locale);
        };
        if let Some(text) = variants.get(&locale) {
            return BodyText::Authored { text, locale };
        }
        let fallback = Locale::default();
        match variants.get(&fallback) {
            Some(text) => {
                warn!(slug, %locale, "Article body is not translated, serving {fallback}");
                BodyText::Authored {
                    text,
                    locale: fallback,
                }
            }
            None => BodyText::Placeholder(locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_line() {
        let body = "\n## Why\n### Detail\n- item one\n12. numbered\n3.tight\nJust text\n   \n";
        assert_eq!(
            parse_blocks(body),
            [
                Block::Heading2("Why"),
                Block::Heading3("Detail"),
                Block::UnorderedItem("item one"),
                Block::OrderedItem("numbered"),
                Block::OrderedItem("tight"),
                Block::Paragraph("Just text"),
            ]
        );
    }

    #[test]
    fn markers_need_their_space() {
        assert_eq!(parse_blocks("##Tight"), [Block::Paragraph("##Tight")]);
        assert_eq!(parse_blocks("-tight"), [Block::Paragraph("-tight")]);
        assert_eq!(parse_blocks("#### Deep"), [Block::Paragraph("#### Deep")]);
        assert_eq!(parse_blocks("Item 1. here"), [Block::Paragraph("Item 1. here")]);
    }

    #[test]
    fn indented_lines_are_paragraphs() {
        assert_eq!(parse_blocks("  - nested"), [Block::Paragraph("  - nested")]);
    }

    #[test]
    fn english_password_body_has_its_heading() {
        let store = BodyStore::builtin();
        let body = store.lookup("password-security", Locale::En);
        assert!(!body.is_placeholder());
        assert!(body.as_str().contains("Why Password Security Matters"));
        assert!(
            body.blocks()
                .contains(&Block::Heading2("Why Password Security Matters"))
        );
    }

    #[test]
    fn unknown_slug_gets_the_placeholder() {
        let store = BodyStore::builtin();
        let body = store.lookup("nonexistent-topic", Locale::En);
        assert_eq!(body, BodyText::Placeholder(Locale::En));
        assert_eq!(body.as_str(), "Content coming soon...");
        assert_eq!(
            store.lookup("nonexistent-topic", Locale::Nl).as_str(),
            "Inhoud binnenkort beschikbaar..."
        );
        assert_eq!(body.blocks(), [Block::Paragraph("Content coming soon...")]);
    }

    #[test]
    fn missing_translation_falls_back_to_default_locale() {
        let mut store = BodyStore::new();
        store.insert("vpn-basics", Locale::En, "## English only");
        let body = store.lookup("vpn-basics", Locale::Nl);
        assert_eq!(
            body,
            BodyText::Authored {
                text: "## English only",
                locale: Locale::En
            }
        );
        assert_eq!(store.get("vpn-basics", Locale::Nl), None);

        let mut dutch_only = BodyStore::new();
        dutch_only.insert("vpn-gebruik", Locale::Nl, "Alleen Nederlands");
        assert_eq!(
            dutch_only.lookup("vpn-gebruik", Locale::En),
            BodyText::Placeholder(Locale::En)
        );
    }

    #[test]
    fn builtin_bodies_exist_in_both_locales() {
        let store = BodyStore::builtin();
        for slug in ["password-security", "two-factor-auth"] {
            for locale in Locale::ALL {
                assert!(store.get(slug, locale).is_some(), "{slug} {locale}");
            }
        }
        let dutch = store.lookup("two-factor-auth", Locale::Nl);
        assert!(dutch.blocks().contains(&Block::Heading2("2FA Instellen")));
    }
}
