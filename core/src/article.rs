//! Resolved articles and the cards that list them.

use serde::Serialize;

use crate::{catalog::RawArticle, category::Category, locale::Locale, read_time::ReadTime};

/// Number of keywords shown on an article card.
const CARD_KEYWORDS: usize = 3;

/// A resolved catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    slug: String,
    title: String,
    description: String,
    category: Category,
    keywords: Vec<String>,
    read_time: ReadTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl Article {
    /// Build an article from its raw catalog entry.
    #[must_use]
    pub fn from_raw(slug: impl Into<String>, raw: RawArticle, read_time: ReadTime) -> Self {
        Self {
            slug: slug.into(),
            title: raw.title,
            description: raw.description,
            category: raw.category,
            keywords: raw.keywords.unwrap_or_default(),
            read_time,
            published: raw.published_date,
            updated: raw.updated_date,
            author: raw.author,
        }
    }

    /// Unique key of the article within its catalog.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Localized title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Localized short summary.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Difficulty category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Keywords in display order.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The keywords a card has room for.
    #[must_use]
    pub fn card_keywords(&self) -> &[String] {
        &self.keywords[..self.keywords.len().min(CARD_KEYWORDS)]
    }

    /// Estimated reading time.
    #[must_use]
    pub const fn read_time(&self) -> ReadTime {
        self.read_time
    }

    /// Publication date as written in the catalog.
    #[must_use]
    pub fn published(&self) -> Option<&str> {
        self.published.as_deref()
    }

    /// Last update date as written in the catalog.
    #[must_use]
    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    /// Author name, if the catalog gives one.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Site-relative link to the article page.
    #[must_use]
    pub fn href(&self, locale: Locale) -> String {
        format!("/{}/articles/{}", locale.code(), self.slug)
    }
}

/// An article prepared for a listing, optionally marked as featured.
///
/// The flag only changes presentation; the article itself is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleCard<'a> {
    #[serde(flatten)]
    article: &'a Article,
    featured: bool,
}

impl<'a> ArticleCard<'a> {
    /// A regular card.
    #[must_use]
    pub const fn new(article: &'a Article) -> Self {
        Self {
            article,
            featured: false,
        }
    }

    /// A card marked as featured.
    #[must_use]
    pub const fn featured(article: &'a Article) -> Self {
        Self {
            article,
            featured: true,
        }
    }

    /// The article behind the card.
    #[must_use]
    pub const fn article(&self) -> &'a Article {
        self.article
    }

    /// Whether the card is shown as featured.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.featured
    }
}
