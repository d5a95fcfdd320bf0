//! Estimated reading time attached to every resolved article.

use core::{fmt, num::NonZeroU32};

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::{body::BodyStore, catalog::RawArticle, locale::Locale};

/// Reading time in whole minutes, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReadTime(NonZeroU32);

impl ReadTime {
    /// The time every article is credited with under the constant policy.
    pub const DEFAULT: Self = Self(NonZeroU32::new(5).expect("5 is not zero"));

    /// The shortest possible reading time.
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Build from minutes, rounding zero up to one minute.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        NonZeroU32::new(minutes).map_or(Self::MIN, Self)
    }

    /// Minutes as a plain integer.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0.get()
    }
}

impl Default for ReadTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decides how long an article takes to read.
pub trait ReadTimePolicy {
    /// Estimate the reading time of the catalog entry `slug`.
    fn estimate(&self, slug: &str, article: &RawArticle) -> ReadTime;
}

impl<P: ReadTimePolicy + ?Sized> ReadTimePolicy for &P {
    fn estimate(&self, slug: &str, article: &RawArticle) -> ReadTime {
        (**self).estimate(slug, article)
    }
}

/// Credits every article with the same reading time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantReadTime(pub ReadTime);

impl ReadTimePolicy for ConstantReadTime {
    fn estimate(&self, _slug: &str, _article: &RawArticle) -> ReadTime {
        self.0
    }
}

/// Derives the reading time from the word count of the article body.
///
/// Articles without a body are measured by their placeholder text, which
/// always comes out at one minute.
#[derive(Debug, Clone, Copy)]
pub struct WordsPerMinute<'a> {
    bodies: &'a BodyStore,
    locale: Locale,
    rate: NonZeroU32,
}

impl<'a> WordsPerMinute<'a> {
    /// Typical adult reading speed.
    pub const DEFAULT_RATE: NonZeroU32 = NonZeroU32::new(200).expect("200 is not zero");

    /// Measure bodies written in `locale` at `rate` words per minute.
    #[must_use]
    pub const fn new(bodies: &'a BodyStore, locale: Locale, rate: NonZeroU32) -> Self {
        Self {
            bodies,
            locale,
            rate,
        }
    }
}

impl ReadTimePolicy for WordsPerMinute<'_> {
    fn estimate(&self, slug: &str, _article: &RawArticle) -> ReadTime {
        let text = self.bodies.lookup(slug, self.locale);
        let words = u32::try_from(text.as_str().unicode_words().count()).unwrap_or(u32::MAX);
        ReadTime::from_minutes(words.div_ceil(self.rate.get()))
    }
}
