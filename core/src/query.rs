//! Listing queries over a resolved catalog.
//!
//! Every query preserves catalog order and answers "nothing" with an empty
//! vector. Related and featured selections are positional, not similarity
//! based: every article sees the same neighbours.

use core::{convert::Infallible, str::FromStr};

use crate::{
    article::{Article, ArticleCard},
    category::Category,
};

/// How many related articles an article page shows.
pub const RELATED_COUNT: usize = 2;

/// How many articles the home page features.
pub const FEATURED_COUNT: usize = 3;

/// The token that disables category filtering.
pub const ALL_TOKEN: &str = "All";

/// A `level` filter as requested by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Keep articles whose category label equals this token, ignoring case.
    Token(String),
}

impl CategoryFilter {
    /// Interpret the optional `level` parameter.
    ///
    /// Absent, blank and `all` (any case) select everything.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => Self::All,
            Some(token) if token.eq_ignore_ascii_case(ALL_TOKEN) => Self::All,
            Some(token) => Self::Token(token.to_string()),
        }
    }

    /// Whether `article` passes the filter.
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Token(token) => article.category().matches_token(token),
        }
    }

    /// Whether this filter selects exactly `category`, for highlighting.
    #[must_use]
    pub fn selects(&self, category: &Category) -> bool {
        match self {
            Self::All => false,
            Self::Token(token) => category.matches_token(token),
        }
    }

    /// The token, unless the filter selects everything.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Token(token) => Some(token),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_param(Some(token)))
    }
}

/// Keep the articles whose category matches `filter`.
#[must_use]
pub fn filter_by_category<'a>(articles: &'a [Article], filter: &CategoryFilter) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| filter.matches(article))
        .collect()
}

/// Case-insensitive substring search over title, description and category.
///
/// A blank query matches nothing.
#[must_use]
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| {
            article.title().to_lowercase().contains(&needle)
                || article.description().to_lowercase().contains(&needle)
                || article.category().label().to_lowercase().contains(&needle)
        })
        .collect()
}

/// The first [`RELATED_COUNT`] articles other than `slug`.
#[must_use]
pub fn related<'a>(articles: &'a [Article], slug: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| article.slug() != slug)
        .take(RELATED_COUNT)
        .collect()
}

/// The first [`FEATURED_COUNT`] articles, marked as featured.
#[must_use]
pub fn featured(articles: &[Article]) -> Vec<ArticleCard<'_>> {
    articles
        .iter()
        .take(FEATURED_COUNT)
        .map(ArticleCard::featured)
        .collect()
}

/// A `q` parameter as requested by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchRequest {
    /// Nothing was asked; distinct from a search without results.
    #[default]
    NoQuery,
    /// Search for this text.
    Query(String),
}

/// What a [`SearchRequest`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// No query was given.
    NoQuery,
    /// The query ran; `articles` may be empty.
    Results {
        /// The query as given
        query: &'a str,
        /// Matches in catalog order
        articles: Vec<&'a Article>,
    },
}

impl SearchRequest {
    /// Interpret the optional `q` parameter. Absent or blank means no query.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(query) if !query.trim().is_empty() => Self::Query(query.to_string()),
            _ => Self::NoQuery,
        }
    }

    /// The query text, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::NoQuery => None,
            Self::Query(query) => Some(query),
        }
    }

    /// Run the request against `articles`.
    #[must_use]
    pub fn run<'a>(&'a self, articles: &'a [Article]) -> SearchOutcome<'a> {
        match self {
            Self::NoQuery => SearchOutcome::NoQuery,
            Self::Query(query) => SearchOutcome::Results {
                query,
                articles: search(articles, query),
            },
        }
    }
}
