use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use keypoint_core::{
    Locale, Messages, RawArticle, catalog::DuplicateSlug, catalog::FailToParseMessages,
};
use thiserror::Error;
use tokio::fs::{self as async_fs, create_dir};
use tracing::{debug, info};

use crate::{
    metadata::{FailToOpenMetadata, MetadataExt, SiteManifest},
    scaffold,
    store::{FailToLoadMessages, MessageStore},
    utils::{read_to_string, write},
};

const MANIFEST_FILE: &str = "Keypoint.toml";

/// structure of workspace is as follows:
/// ```text
/// /workspace-root
/// ├── Keypoint.toml
/// ├── messages
/// │   ├── en.json
/// │   └── nl.json
/// ├── assets
/// │   └── style.css
/// └── build
/// ```
#[derive(Debug, Clone)]
pub struct Workspace(Arc<WorkspaceInner>);

#[derive(Debug, Clone)]
struct WorkspaceInner {
    path: PathBuf,
    manifest: SiteManifest,
}

#[derive(Debug, Error)]
pub enum FailToCreateArticle {
    #[error("Article title cannot be empty")]
    EmptyTitle,
    #[error("{0}")]
    Duplicate(#[from] DuplicateSlug),
    #[error("Fail to load messages: {0}")]
    Load(#[from] FailToLoadMessages),
    #[error("Fail to encode messages: {0}")]
    Encode(#[from] FailToParseMessages),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Workspace {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FailToOpenMetadata> {
        let manifest = SiteManifest::open(path.as_ref().join(MANIFEST_FILE)).await?;
        Ok(Self::new(path.as_ref(), manifest))
    }

    pub fn new(path: impl AsRef<Path>, manifest: SiteManifest) -> Self {
        Self(
            WorkspaceInner {
                path: path.as_ref().to_path_buf(),
                manifest,
            }
            .into(),
        )
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root().join(MANIFEST_FILE)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.0.path
    }

    pub fn messages_dir(&self) -> PathBuf {
        self.root().join("messages")
    }

    pub fn messages_path(&self, locale: Locale) -> PathBuf {
        self.messages_dir().join(format!("{}.json", locale.code()))
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("assets")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root().join("build")
    }

    #[must_use]
    pub fn manifest(&self) -> &SiteManifest {
        &self.0.manifest
    }

    /// Scaffold a new site named `name` inside `root`.
    pub async fn create(root: impl AsRef<Path>, name: String) -> color_eyre::eyre::Result<Self> {
        let root = root.as_ref().join(&name);
        create_dir(&root).await?;

        let manifest = SiteManifest::new(name, "Your Privacy Hub", detect_local_user());
        let workspace = Self::new(&root, manifest);
        workspace
            .manifest()
            .save_to_file(workspace.manifest_path())
            .await?;

        for locale in Locale::ALL {
            let messages = scaffold::messages(locale);
            write(workspace.messages_path(locale), messages.to_json_pretty()?).await?;
        }
        write(workspace.assets_dir().join("style.css"), scaffold::STYLESHEET).await?;

        info!(path = %root.display(), "Created site workspace");
        Ok(workspace)
    }

    /// Add a catalog entry to every locale the site is published in.
    ///
    /// The slug is derived from the title. Each locale gets the same title and
    /// description until someone translates them.
    ///
    /// Every catalog is written to a sibling `.tmp` file first and renamed
    /// into place once all of them were written. A locale that already holds
    /// this exact entry is left alone, so an interrupted run can be repeated.
    pub async fn create_article(
        &self,
        title: &str,
        description: &str,
        category: &str,
    ) -> Result<String, FailToCreateArticle> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FailToCreateArticle::EmptyTitle);
        }
        let slug = slug::slugify(title);
        if slug.is_empty() {
            return Err(FailToCreateArticle::EmptyTitle);
        }
        let entry = RawArticle::new(title, description, category);

        let mut updated = Vec::new();
        for locale in self.manifest().locales() {
            let mut messages = self.load(locale).await?;
            if messages.articles().get(&slug) == Some(&entry) {
                debug!(slug, %locale, "Article entry already present");
                continue;
            }
            messages.add_article(&slug, entry.clone())?;
            updated.push((locale, messages.to_json_pretty()?));
        }
        if updated.is_empty() {
            return Err(DuplicateSlug(slug).into());
        }

        let mut staged = Vec::with_capacity(updated.len());
        for (locale, json) in updated {
            let target = self.messages_path(locale);
            let temp = target.with_extension("json.tmp");
            if let Err(err) = write(&temp, json).await {
                discard(&staged).await;
                return Err(err.into());
            }
            staged.push((locale, temp, target));
        }

        for (locale, temp, target) in &staged {
            async_fs::rename(temp, target).await?;
            debug!(slug, %locale, "Added article entry");
        }
        Ok(slug)
    }

    pub async fn clean(&self) -> Result<(), std::io::Error> {
        let build_dir = self.build_dir();
        if build_dir.exists() {
            async_fs::remove_dir_all(build_dir).await?;
        }
        Ok(())
    }
}

impl MessageStore for Workspace {
    async fn load(&self, locale: Locale) -> Result<Messages, FailToLoadMessages> {
        let path = self.messages_path(locale);
        match read_to_string(&path).await {
            Ok(json) => Messages::from_json(&json).map_err(|source| FailToLoadMessages::Parse {
                locale,
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(%locale, path = %path.display(), "No messages for locale");
                Ok(Messages::default())
            }
            Err(err) => Err(FailToLoadMessages::Io { locale, source: err }),
        }
    }
}

async fn discard(staged: &[(Locale, PathBuf, PathBuf)]) {
    for (_, temp, _) in staged {
        if let Err(err) = async_fs::remove_file(temp).await {
            debug!(path = %temp.display(), "Fail to remove staged catalog: {err}");
        }
    }
}

fn detect_local_user() -> String {
    whoami::realname()
}
