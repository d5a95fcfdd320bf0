//! Site manifest
//!
//! The manifest lives in `Keypoint.toml` at the root of the workspace.

use std::{future::Future, num::NonZeroU32, path::Path};

use keypoint_core::{
    BodyStore, Catalog, ConstantReadTime, Locale, Messages, ReadTime, WordsPerMinute,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::utils::{read_to_string, write};

/// Metadata for a site workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    title: String,
    description: String,
    owner: String,
    #[serde(default)]
    default_locale: Locale,
    #[serde(default)]
    locales: Vec<Locale>,
    #[serde(default)]
    read_time: ReadTimeConfig,
    #[serde(default)]
    contact: ContactLinks,
}

impl SiteManifest {
    /// Create a manifest serving every supported locale, English first.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            owner: owner.into(),
            default_locale: Locale::default(),
            locales: Locale::ALL.to_vec(),
            read_time: ReadTimeConfig::default(),
            contact: ContactLinks::default(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The locale `/` redirects to.
    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Locales the site is published in, the default locale first.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales = vec![self.default_locale];
        locales.extend(
            self.locales
                .iter()
                .copied()
                .filter(|locale| *locale != self.default_locale),
        );
        locales
    }

    /// Whether pages are published in `locale`.
    #[must_use]
    pub fn serves(&self, locale: Locale) -> bool {
        locale == self.default_locale || self.locales.contains(&locale)
    }

    #[must_use]
    pub const fn read_time(&self) -> &ReadTimeConfig {
        &self.read_time
    }

    /// Replace the reading time policy.
    pub fn set_read_time(&mut self, read_time: ReadTimeConfig) {
        self.read_time = read_time;
    }

    /// Where visitors can reach the people behind the site.
    #[must_use]
    pub const fn contact(&self) -> &ContactLinks {
        &self.contact
    }

    /// Restrict the site to the given locales.
    pub fn set_locales(&mut self, default_locale: Locale, locales: impl Into<Vec<Locale>>) {
        self.default_locale = default_locale;
        self.locales = locales.into();
    }
}

/// Channels listed on the contact page
///
/// ```toml
/// [contact]
/// email = "hello@keypoint.privacy"
/// github = "https://github.com/keypoint"
/// twitter = "https://twitter.com/keypoint"
/// linkedin = "https://linkedin.com/company/keypoint"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    /// Address for general inquiries
    pub email: String,
    /// Source repository or organization page
    pub github: String,
    /// Social profile for feedback
    pub twitter: String,
    /// Company page for careers
    pub linkedin: String,
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self {
            email: "hello@keypoint.privacy".to_string(),
            github: "https://github.com/keypoint".to_string(),
            twitter: "https://twitter.com/keypoint".to_string(),
            linkedin: "https://linkedin.com/company/keypoint".to_string(),
        }
    }
}

/// How reading times are estimated
///
/// ```toml
/// [read_time]
/// policy = "words-per-minute"
/// words_per_minute = 180
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum ReadTimeConfig {
    /// Every article takes the same time
    Constant {
        /// Minutes credited to every article
        #[serde(default = "default_minutes")]
        minutes: u32,
    },
    /// Count the words of the article body
    WordsPerMinute {
        /// Reading speed
        #[serde(default = "default_rate")]
        words_per_minute: u32,
    },
}

const fn default_minutes() -> u32 {
    ReadTime::DEFAULT.minutes()
}

const fn default_rate() -> u32 {
    WordsPerMinute::DEFAULT_RATE.get()
}

impl Default for ReadTimeConfig {
    fn default() -> Self {
        Self::Constant {
            minutes: default_minutes(),
        }
    }
}

impl ReadTimeConfig {
    /// Resolve `messages` into a catalog using this policy.
    #[must_use]
    pub fn resolve(&self, messages: &Messages, bodies: &BodyStore, locale: Locale) -> Catalog {
        match *self {
            Self::Constant { minutes } => {
                messages.resolve(ConstantReadTime(ReadTime::from_minutes(minutes)))
            }
            Self::WordsPerMinute { words_per_minute } => {
                let rate = NonZeroU32::new(words_per_minute).unwrap_or(WordsPerMinute::DEFAULT_RATE);
                messages.resolve(WordsPerMinute::new(bodies, locale, rate))
            }
        }
    }
}

/// Errors that can occur when opening metadata files
#[derive(Debug, thiserror::Error)]
pub enum FailToOpenMetadata {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Extension trait for metadata serialization and file operations
pub trait MetadataExt: Serialize + DeserializeOwned {
    /// Read and parse the metadata file at `path`
    ///
    /// # Errors
    /// Returns `FailToOpenMetadata` if the file cannot be read or parsed
    fn open(
        path: impl AsRef<Path>,
    ) -> impl Future<Output = Result<Self, FailToOpenMetadata>> + Send + Sync {
        let path = path.as_ref().to_path_buf();
        async move {
            let content = read_to_string(&path).await?;
            let metadata = toml::from_str(&content)?;
            Ok(metadata)
        }
    }

    /// Export the metadata to a TOML string
    #[must_use]
    fn to_toml(&self) -> String {
        toml::to_string_pretty(self).expect("Failed to serialize metadata to TOML")
    }

    /// Save the metadata to a file at the given path
    /// # Errors
    /// Returns an `std::io::Error` if the file cannot be written
    fn save_to_file(
        &self,
        path: impl AsRef<Path>,
    ) -> impl Future<Output = Result<(), std::io::Error>> + Send + Sync {
        let path = path.as_ref().to_path_buf();
        let toml_str = self.to_toml();
        async move { write(path, toml_str.as_bytes()).await }
    }
}

impl MetadataExt for SiteManifest {}
