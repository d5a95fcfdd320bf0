//! Article catalog for Keypoint.
//!
//! Resolves a locale's message catalog into typed [`article::Article`] records
//! and answers the listing questions the site asks of it: level filters,
//! free-text search, related and featured selections, and long-form body lookup.
//!
//! Every operation takes the catalog snapshot explicitly. Nothing here caches,
//! performs I/O, or holds state between calls.

pub mod article;
pub mod body;
pub mod catalog;
pub mod category;
pub mod locale;
pub mod query;
pub mod read_time;

mod samples;

pub use article::{Article, ArticleCard};
pub use body::{Block, BodyStore, BodyText, parse_blocks};
pub use catalog::{ArticleNotFound, Catalog, FailToParseMessages, Messages, RawArticle};
pub use category::{Category, CategoryStyle, Level};
pub use locale::Locale;
pub use query::{CategoryFilter, SearchRequest};
pub use read_time::{ConstantReadTime, ReadTime, ReadTimePolicy, WordsPerMinute};
