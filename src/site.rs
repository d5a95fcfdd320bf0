//! The pages of a site, rendered from a message store.

use std::sync::Arc;

use keypoint_core::{
    ArticleNotFound, BodyStore, Catalog, CategoryFilter, Locale, Messages, SearchRequest,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    metadata::SiteManifest,
    render::{self, LinkMode, PageContext},
    store::{FailToLoadMessages, MessageStore},
    workspace::Workspace,
};

/// Errors that can occur when producing a page
#[derive(Debug, Error)]
pub enum PageError {
    /// No article with that slug
    #[error(transparent)]
    ArticleNotFound(#[from] ArticleNotFound),
    /// The site is not published in this locale
    #[error("Locale `{0}` is not published")]
    LocaleNotServed(Locale),
    /// The messages could not be loaded
    #[error(transparent)]
    Load(#[from] FailToLoadMessages),
    /// A template failed to render
    #[error("Fail to render page: {0}")]
    Render(#[from] askama::Error),
}

impl PageError {
    /// Whether the visitor asked for something that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound(_) | Self::LocaleNotServed(_))
    }
}

/// A site: its manifest, article bodies and where its messages come from.
#[derive(Debug)]
pub struct Site<S>(Arc<SiteInner<S>>);

#[derive(Debug)]
struct SiteInner<S> {
    store: S,
    manifest: SiteManifest,
    bodies: BodyStore,
}

impl<S> Clone for Site<S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Site<Workspace> {
    /// A site reading messages from the workspace's `messages/` directory.
    #[must_use]
    pub fn from_workspace(workspace: Workspace) -> Self {
        let manifest = workspace.manifest().clone();
        Self::new(workspace, manifest, BodyStore::builtin())
    }
}

impl<S: MessageStore> Site<S> {
    pub fn new(store: S, manifest: SiteManifest, bodies: BodyStore) -> Self {
        Self(Arc::new(SiteInner {
            store,
            manifest,
            bodies,
        }))
    }

    #[must_use]
    pub fn manifest(&self) -> &SiteManifest {
        &self.0.manifest
    }

    #[must_use]
    pub fn bodies(&self) -> &BodyStore {
        &self.0.bodies
    }

    /// Load and resolve `locale`'s catalog as it is right now.
    ///
    /// # Errors
    /// Returns `PageError::LocaleNotServed` for locales the site is not
    /// published in, and `PageError::Load` if the messages cannot be loaded.
    pub async fn snapshot(&self, locale: Locale) -> Result<Snapshot<'_>, PageError> {
        if !self.manifest().serves(locale) {
            return Err(PageError::LocaleNotServed(locale));
        }
        let messages = self.0.store.load(locale).await?;
        let catalog = self
            .manifest()
            .read_time()
            .resolve(&messages, self.bodies(), locale);
        debug!(%locale, articles = catalog.len(), "Loaded catalog snapshot");
        Ok(Snapshot {
            manifest: self.manifest(),
            bodies: self.bodies(),
            locale,
            links: LinkMode::Query,
            messages,
            catalog,
        })
    }

    /// # Errors
    /// See [`Site::snapshot`].
    pub async fn catalog(&self, locale: Locale) -> Result<Catalog, PageError> {
        Ok(self.snapshot(locale).await?.catalog)
    }

    /// # Errors
    /// See [`Snapshot::home`].
    pub async fn home(&self, locale: Locale) -> Result<String, PageError> {
        self.snapshot(locale).await?.home()
    }

    /// # Errors
    /// See [`Snapshot::articles`].
    pub async fn articles(
        &self,
        locale: Locale,
        filter: &CategoryFilter,
    ) -> Result<String, PageError> {
        self.snapshot(locale).await?.articles(filter)
    }

    /// # Errors
    /// See [`Snapshot::article`].
    pub async fn article(&self, locale: Locale, slug: &str) -> Result<String, PageError> {
        self.snapshot(locale).await?.article(slug)
    }

    /// # Errors
    /// See [`Snapshot::search`].
    pub async fn search(
        &self,
        locale: Locale,
        request: &SearchRequest,
    ) -> Result<String, PageError> {
        self.snapshot(locale).await?.search(request)
    }

    /// # Errors
    /// See [`Snapshot::about`].
    pub async fn about(&self, locale: Locale) -> Result<String, PageError> {
        self.snapshot(locale).await?.about()
    }

    /// # Errors
    /// See [`Snapshot::contact`].
    pub async fn contact(&self, locale: Locale) -> Result<String, PageError> {
        self.snapshot(locale).await?.contact()
    }

    /// The not-found page, in `locale` when the site is published in it and
    /// in the default locale otherwise.
    ///
    /// # Errors
    /// Returns `PageError::Load` or `PageError::Render`.
    pub async fn not_found(&self, locale: Option<Locale>) -> Result<String, PageError> {
        let locale = locale
            .filter(|locale| self.manifest().serves(*locale))
            .unwrap_or_else(|| self.manifest().default_locale());
        self.snapshot(locale).await?.not_found()
    }
}

/// One locale's messages and catalog, loaded once and rendered from.
#[derive(Debug)]
pub struct Snapshot<'a> {
    manifest: &'a SiteManifest,
    bodies: &'a BodyStore,
    locale: Locale,
    links: LinkMode,
    messages: Messages,
    catalog: Catalog,
}

impl Snapshot<'_> {
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render with `links` instead of query-string links.
    #[must_use]
    pub fn with_links(mut self, links: LinkMode) -> Self {
        self.links = links;
        self
    }

    fn context(&self) -> PageContext<'_> {
        PageContext::new(self.manifest, self.locale, &self.messages).with_links(self.links)
    }

    /// # Errors
    /// Returns `PageError::Render` if the template fails.
    pub fn home(&self) -> Result<String, PageError> {
        Ok(render::home(&self.context(), &self.catalog)?)
    }

    /// # Errors
    /// Returns `PageError::Render` if the template fails.
    pub fn articles(&self, filter: &CategoryFilter) -> Result<String, PageError> {
        Ok(render::articles(&self.context(), &self.catalog, filter)?)
    }

    /// # Errors
    /// Returns `PageError::ArticleNotFound` for unknown slugs.
    pub fn article(&self, slug: &str) -> Result<String, PageError> {
        let article = self.catalog.get(slug)?;
        let body = self.bodies.lookup(slug, self.locale);
        Ok(render::article(
            &self.context(),
            &self.catalog,
            article,
            body,
        )?)
    }

    /// # Errors
    /// Returns `PageError::Render` if the template fails.
    pub fn search(&self, request: &SearchRequest) -> Result<String, PageError> {
        Ok(render::search(&self.context(), &self.catalog, request)?)
    }

    /// # Errors
    /// Returns `PageError::Render` if the template fails.
    pub fn about(&self) -> Result<String, PageError> {
        Ok(render::about(&self.context())?)
    }

    /// # Errors
    /// Returns `PageError::Render` if the template fails.
    pub fn contact(&self) -> Result<String, PageError> {
        Ok(render::contact(&self.context())?)
    }

    /// # Errors
    /// Returns `PageError::Render` if the template fails.
    pub fn not_found(&self) -> Result<String, PageError> {
        Ok(render::not_found(&self.context())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::ReadTimeConfig, scaffold, store::StaticMessages};

    fn site() -> Site<StaticMessages> {
        let mut manifest = SiteManifest::new("Keypoint", "Your Privacy Hub", "Alex");
        manifest.set_locales(Locale::En, [Locale::En]);
        let store = StaticMessages::new()
            .with(Locale::En, scaffold::messages(Locale::En))
            .with(Locale::Nl, scaffold::messages(Locale::Nl));
        Site::new(store, manifest, BodyStore::builtin())
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let err = site()
            .article(Locale::En, "nonexistent-topic")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, PageError::ArticleNotFound(ArticleNotFound { slug }) if slug == "nonexistent-topic"));
    }

    #[tokio::test]
    async fn unpublished_locale_is_not_found() {
        let site = site();
        let err = site.home(Locale::Nl).await.unwrap_err();
        assert!(matches!(err, PageError::LocaleNotServed(Locale::Nl)));

        let page = site.not_found(Some(Locale::Nl)).await.unwrap();
        assert!(page.contains("Page not found"));
    }

    #[tokio::test]
    async fn read_time_follows_the_manifest_policy() {
        let mut manifest = SiteManifest::new("Keypoint", "Your Privacy Hub", "Alex");
        manifest.set_read_time(ReadTimeConfig::WordsPerMinute {
            words_per_minute: 10,
        });
        let store = StaticMessages::new().with(Locale::En, scaffold::messages(Locale::En));
        let site = Site::new(store, manifest, BodyStore::builtin());

        let catalog = site.catalog(Locale::En).await.unwrap();
        let counted = catalog.get("password-security").unwrap().read_time();
        assert!(counted.minutes() > 5);
        let missing_body = catalog.get("vpn-basics").unwrap().read_time();
        assert_eq!(missing_body.minutes(), 1);
    }

    #[tokio::test]
    async fn snapshot_resolves_every_entry() {
        let site = site();
        let snapshot = site.snapshot(Locale::En).await.unwrap();
        assert_eq!(snapshot.catalog().len(), 4);
        let html = snapshot.article("two-factor-auth").unwrap();
        assert!(html.contains("What is Two-Factor Authentication?"));
    }
}
