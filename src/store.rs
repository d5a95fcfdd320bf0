//! Where message catalogs come from.
//!
//! Every page asks its store for a fresh snapshot, so edits to the message
//! files show up on the next request without restarting the server.

use std::{collections::HashMap, future::Future, sync::Arc};

use keypoint_core::{FailToParseMessages, Locale, Messages};
use thiserror::Error;

/// Errors that can occur when loading a locale's messages
#[derive(Debug, Error)]
pub enum FailToLoadMessages {
    /// The messages could not be read
    #[error("Fail to read `{locale}` messages: {source}")]
    Io {
        /// Locale being loaded
        locale: Locale,
        /// Underlying error
        source: std::io::Error,
    },
    /// The messages are not a valid catalog
    #[error("Fail to parse `{locale}` messages: {source}")]
    Parse {
        /// Locale being loaded
        locale: Locale,
        /// Underlying error
        source: FailToParseMessages,
    },
}

/// A source of per-locale message catalogs.
pub trait MessageStore: Send + Sync + 'static {
    /// Load a snapshot of `locale`'s messages.
    ///
    /// A locale without any messages loads as an empty catalog.
    fn load(
        &self,
        locale: Locale,
    ) -> impl Future<Output = Result<Messages, FailToLoadMessages>> + Send;
}

impl<S: MessageStore> MessageStore for Arc<S> {
    fn load(
        &self,
        locale: Locale,
    ) -> impl Future<Output = Result<Messages, FailToLoadMessages>> + Send {
        S::load(self, locale)
    }
}

/// Messages held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticMessages {
    messages: HashMap<Locale, Messages>,
}

impl StaticMessages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`StaticMessages::insert`].
    #[must_use]
    pub fn with(mut self, locale: Locale, messages: Messages) -> Self {
        self.insert(locale, messages);
        self
    }

    pub fn insert(&mut self, locale: Locale, messages: Messages) {
        self.messages.insert(locale, messages);
    }
}

impl MessageStore for StaticMessages {
    async fn load(&self, locale: Locale) -> Result<Messages, FailToLoadMessages> {
        Ok(self.messages.get(&locale).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use keypoint_core::RawArticle;

    use super::*;

    #[tokio::test]
    async fn unknown_locale_loads_empty() {
        let mut messages = Messages::default();
        messages
            .add_article("vpn-basics", RawArticle::new("VPN Basics", "Tunnels", "Beginner"))
            .unwrap();
        let store = Arc::new(StaticMessages::new().with(Locale::En, messages.clone()));

        assert_eq!(store.load(Locale::En).await.unwrap(), messages);
        assert!(store.load(Locale::Nl).await.unwrap().articles().is_empty());
    }
}
