//! Message catalogs and the articles resolved from them.
//!
//! A locale's messages are a JSON object of namespaces. The `articles`
//! namespace maps slugs to [`RawArticle`] entries; every other namespace holds
//! plain UI strings. [`Messages::from_json`] validates the shape once, after
//! which [`resolve`] projects the entries into a [`Catalog`].
//!
//! ```json
//! {
//!   "nav": { "articles": "Articles" },
//!   "articles": {
//!     "password-security": {
//!       "title": "Password Security",
//!       "description": "Build strong passwords",
//!       "category": "Beginner",
//!       "keywords": ["passwords"]
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    article::{Article, ArticleCard},
    category::Category,
    query::{self, CategoryFilter},
    read_time::ReadTimePolicy,
};

/// An `articles` entry exactly as the message catalog states it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Localized title
    pub title: String,
    /// Localized short summary
    pub description: String,
    /// Category label
    pub category: Category,
    /// Keywords in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Publication date, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Last update date, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl RawArticle {
    /// An entry with only the required fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: Category::from(category),
            keywords: None,
            published_date: None,
            updated_date: None,
            author: None,
        }
    }

    /// Attach keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }
}

/// Errors raised while reading a message catalog.
#[derive(Debug, Error)]
pub enum FailToParseMessages {
    /// The document is not valid JSON or an entry has the wrong shape.
    #[error("Invalid message catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returned when a slug was added twice to the same catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Article `{0}` already exists")]
pub struct DuplicateSlug(pub String);

/// One locale's messages: the article entries plus every other namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default, deserialize_with = "nullable_map")]
    articles: IndexMap<String, RawArticle>,
    #[serde(flatten)]
    namespaces: IndexMap<String, Value>,
}

fn nullable_map<'de, D>(deserializer: D) -> Result<IndexMap<String, RawArticle>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IndexMap<String, RawArticle>>::deserialize(deserializer)
        .map(Option::unwrap_or_default)
}

impl Messages {
    /// Parse a JSON message document.
    ///
    /// A missing or `null` `articles` namespace is an empty catalog.
    ///
    /// # Errors
    /// Returns `FailToParseMessages::Json` if the document is malformed or any
    /// article entry lacks a required field.
    pub fn from_json(json: &str) -> Result<Self, FailToParseMessages> {
        Ok(serde_json::from_str(json)?)
    }

    /// Messages holding only the given article entries.
    #[must_use]
    pub fn with_articles(articles: IndexMap<String, RawArticle>) -> Self {
        Self {
            articles,
            namespaces: IndexMap::new(),
        }
    }

    /// Pretty-printed JSON document.
    ///
    /// # Errors
    /// Returns `FailToParseMessages::Json` if a namespace value cannot be
    /// serialized, which does not happen for values read from JSON.
    pub fn to_json_pretty(&self) -> Result<String, FailToParseMessages> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Raw article entries in catalog order.
    #[must_use]
    pub const fn articles(&self) -> &IndexMap<String, RawArticle> {
        &self.articles
    }

    /// Append an article entry.
    ///
    /// # Errors
    /// Returns `DuplicateSlug` if the slug is already present.
    pub fn add_article(
        &mut self,
        slug: impl Into<String>,
        article: RawArticle,
    ) -> Result<(), DuplicateSlug> {
        let slug = slug.into();
        if self.articles.contains_key(&slug) {
            return Err(DuplicateSlug(slug));
        }
        self.articles.insert(slug, article);
        Ok(())
    }

    /// Look up a UI string, e.g. `text("nav", "articles")`.
    #[must_use]
    pub fn text(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces.get(namespace)?.get(key)?.as_str()
    }

    /// Insert or replace a UI string.
    pub fn set_text(&mut self, namespace: &str, key: &str, text: impl Into<String>) {
        let entry = self
            .namespaces
            .entry(namespace.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert(key.to_string(), Value::String(text.into()));
        }
    }

    /// Resolve the article entries into a catalog.
    #[must_use]
    pub fn resolve(&self, policy: impl ReadTimePolicy) -> Catalog {
        resolve(&self.articles, policy)
    }
}

/// Project raw entries into articles, keeping catalog order.
///
/// Nothing is dropped, reordered or merged; each article gets the reading time
/// `policy` estimates for it.
pub fn resolve(raw: &IndexMap<String, RawArticle>, policy: impl ReadTimePolicy) -> Catalog {
    let articles: Vec<Article> = raw
        .iter()
        .map(|(slug, entry)| {
            if !entry.category.is_named() {
                warn!(slug = %slug, category = %entry.category, "Article has an unknown category");
            }
            let read_time = policy.estimate(slug, entry);
            Article::from_raw(slug.clone(), entry.clone(), read_time)
        })
        .collect();
    debug!(count = articles.len(), "Resolved article catalog");
    Catalog { articles }
}

/// The referenced article has no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Article `{slug}` not found")]
pub struct ArticleNotFound {
    /// The slug that was asked for
    pub slug: String,
}

/// The resolved articles of one locale, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// All articles in catalog order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the catalog has no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Slugs in catalog order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(Article::slug)
    }

    /// Find an article by slug.
    ///
    /// # Errors
    /// Returns `ArticleNotFound` if the slug has no entry.
    pub fn get(&self, slug: &str) -> Result<&Article, ArticleNotFound> {
        self.articles
            .iter()
            .find(|article| article.slug() == slug)
            .ok_or_else(|| ArticleNotFound {
                slug: slug.to_string(),
            })
    }

    /// See [`query::filter_by_category`].
    #[must_use]
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Article> {
        query::filter_by_category(&self.articles, filter)
    }

    /// See [`query::search`].
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Article> {
        query::search(&self.articles, query)
    }

    /// See [`query::related`].
    #[must_use]
    pub fn related(&self, slug: &str) -> Vec<&Article> {
        query::related(&self.articles, slug)
    }

    /// See [`query::featured`].
    #[must_use]
    pub fn featured(&self) -> Vec<ArticleCard<'_>> {
        query::featured(&self.articles)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Article;
    type IntoIter = core::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_time::{ConstantReadTime, ReadTime};

    const SAMPLE: &str = r#"{
        "nav": { "articles": "Articles", "home": "Home" },
        "articles": {
            "password-security": {
                "title": "Password Security",
                "description": "Build strong, unique passwords",
                "category": "Beginner",
                "keywords": ["passwords", "managers"]
            },
            "two-factor-auth": {
                "title": "Two-Factor Auth",
                "description": "Add a second factor",
                "category": "Intermediate"
            },
            "browser-fingerprinting": {
                "title": "Browser Fingerprinting",
                "description": "How sites recognise you",
                "category": "Wizard"
            }
        }
    }"#;

    #[test]
    fn resolve_keeps_every_entry_in_order() {
        let messages = Messages::from_json(SAMPLE).unwrap();
        let catalog = messages.resolve(ConstantReadTime::default());

        assert_eq!(catalog.len(), messages.articles().len());
        let slugs: Vec<_> = catalog.slugs().collect();
        let keys: Vec<_> = messages.articles().keys().map(String::as_str).collect();
        assert_eq!(slugs, keys);
        assert!(
            catalog
                .articles()
                .iter()
                .all(|article| article.read_time() == ReadTime::DEFAULT)
        );
    }

    #[test]
    fn unknown_category_does_not_fail() {
        let catalog = Messages::from_json(SAMPLE)
            .unwrap()
            .resolve(ConstantReadTime::default());
        let article = catalog.get("browser-fingerprinting").unwrap();
        assert_eq!(article.category(), &Category::Other("Wizard".into()));
    }

    #[test]
    fn missing_or_null_articles_is_empty() {
        for json in [r#"{ "nav": {} }"#, r#"{ "articles": null }"#, "{}"] {
            let messages = Messages::from_json(json).unwrap();
            assert!(messages.resolve(ConstantReadTime::default()).is_empty());
        }
    }

    #[test]
    fn malformed_entry_is_rejected() {
        let json = r#"{ "articles": { "broken": { "title": "No description" } } }"#;
        assert!(Messages::from_json(json).is_err());
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = Messages::from_json(SAMPLE)
            .unwrap()
            .resolve(ConstantReadTime::default());
        let err = catalog.get("nonexistent-topic").unwrap_err();
        assert_eq!(err.slug, "nonexistent-topic");
    }

    #[test]
    fn ui_strings_are_read_from_namespaces() {
        let mut messages = Messages::from_json(SAMPLE).unwrap();
        assert_eq!(messages.text("nav", "articles"), Some("Articles"));
        assert_eq!(messages.text("nav", "missing"), None);
        assert_eq!(messages.text("articles", "password-security"), None);

        messages.set_text("search", "results", "Results");
        assert_eq!(messages.text("search", "results"), Some("Results"));
    }

    #[test]
    fn adding_an_existing_slug_fails() {
        let mut messages = Messages::from_json(SAMPLE).unwrap();
        let entry = RawArticle::new("Again", "Duplicate", "Beginner");
        assert_eq!(
            messages.add_article("two-factor-auth", entry.clone()),
            Err(DuplicateSlug("two-factor-auth".into()))
        );
        messages.add_article("vpn-basics", entry).unwrap();
        assert_eq!(messages.articles().keys().last().unwrap(), "vpn-basics");
    }

    #[test]
    fn json_round_trip_keeps_namespaces() {
        let messages = Messages::from_json(SAMPLE).unwrap();
        let json = messages.to_json_pretty().unwrap();
        let again = Messages::from_json(&json).unwrap();
        assert_eq!(again, messages);
    }
}
