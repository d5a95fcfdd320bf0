use std::path::{Component, Path};

use color_eyre::eyre::{self, WrapErr};
use keypoint_core::{Category, CategoryFilter};
use tokio::fs as async_fs;
use tracing::{debug, info, warn};

use crate::{
    render::{self, LinkMode},
    site::Site,
    utils::{copy_dir, file_exists, write},
    workspace::Workspace,
};

/// Writes a workspace out as a static site.
///
/// ```text
/// build
/// ├── index.html            redirect to the default locale
/// ├── 404.html
/// ├── assets/
/// └── <locale>
///     ├── index.html
///     ├── articles/index.html
///     ├── articles/<slug>/index.html
///     ├── levels/<level>/index.html
///     ├── about/index.html
///     └── contact/index.html
/// ```
///
/// A static host ignores query strings, so generated pages link to one
/// `levels/<level>` page per category and carry no search form.
#[derive(Debug, Clone)]
pub struct Engine {
    workspace: Workspace,
    site: Site<Workspace>,
}

impl Engine {
    #[must_use]
    pub fn new(workspace: Workspace) -> Self {
        let site = Site::from_workspace(workspace.clone());
        Self { workspace, site }
    }

    pub async fn generate(&self, output: impl AsRef<Path>) -> eyre::Result<()> {
        let output = output.as_ref();
        if async_fs::metadata(output).await.is_ok() {
            async_fs::remove_dir_all(output).await?;
        }
        async_fs::create_dir_all(output).await?;

        let manifest = self.site.manifest();
        for locale in manifest.locales() {
            let snapshot = self
                .site
                .snapshot(locale)
                .await
                .wrap_err_with(|| format!("Fail to load `{locale}` catalog"))?
                .with_links(LinkMode::Static);
            let root = output.join(locale.code());

            write(root.join("index.html"), snapshot.home()?).await?;
            write(
                root.join("articles/index.html"),
                snapshot.articles(&CategoryFilter::All)?,
            )
            .await?;
            for category in Category::NAMED {
                let token = category.label().to_lowercase();
                let html = snapshot.articles(&CategoryFilter::Token(token.clone()))?;
                write(root.join("levels").join(&token).join("index.html"), html).await?;
            }
            for slug in snapshot.catalog().slugs() {
                if !is_path_segment(slug) {
                    warn!(%locale, slug, "Skipping article whose slug is not a file name");
                    continue;
                }
                let html = snapshot.article(slug)?;
                write(root.join("articles").join(slug).join("index.html"), html).await?;
                debug!(%locale, slug, "Generated article");
            }
            write(root.join("about/index.html"), snapshot.about()?).await?;
            write(root.join("contact/index.html"), snapshot.contact()?).await?;
            info!(%locale, articles = snapshot.catalog().len(), "Generated locale");
        }

        let default_locale = manifest.default_locale();
        let not_found = self
            .site
            .snapshot(default_locale)
            .await?
            .with_links(LinkMode::Static)
            .not_found()?;
        write(output.join("404.html"), not_found).await?;
        write(
            output.join("index.html"),
            render::redirect(&format!("/{}", default_locale.code()))?,
        )
        .await?;

        let assets = self.workspace.assets_dir();
        if async_fs::metadata(&assets).await.is_ok() {
            let copied = copy_dir(&assets, output.join("assets")).await?;
            debug!(copied, "Copied assets");
        }

        Ok(())
    }
}

fn is_path_segment(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == slug
    )
}

impl Workspace {
    /// Generate the static site into `output`.
    pub async fn generate(&self, output: impl AsRef<Path>) -> eyre::Result<()> {
        Engine::new(self.clone()).generate(output).await
    }

    /// Whether `generate` has produced a site in the build directory.
    pub async fn is_generated(&self) -> std::io::Result<bool> {
        file_exists(self.build_dir().join("index.html")).await
    }
}

#[cfg(test)]
mod tests {
    use keypoint_core::Locale;

    use super::*;
    use crate::utils::read_to_string;

    #[tokio::test]
    async fn generates_every_locale_and_article() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(dir.path(), "privacy".into()).await.unwrap();
        workspace.generate(workspace.build_dir()).await.unwrap();
        assert!(workspace.is_generated().await.unwrap());

        let build = workspace.build_dir();
        for locale in Locale::ALL {
            let root = build.join(locale.code());
            for page in [
                "index.html",
                "articles/index.html",
                "levels/beginner/index.html",
                "levels/gevorderd/index.html",
                "about/index.html",
                "contact/index.html",
            ] {
                assert!(file_exists(root.join(page)).await.unwrap(), "{locale}/{page}");
            }
            assert!(!file_exists(root.join("search/index.html")).await.unwrap());
            assert!(
                file_exists(root.join("articles/password-security/index.html"))
                    .await
                    .unwrap()
            );
        }

        let redirect = read_to_string(build.join("index.html")).await.unwrap();
        assert!(redirect.contains("url=/en"));
        assert!(file_exists(build.join("404.html")).await.unwrap());
        assert!(file_exists(build.join("assets/style.css")).await.unwrap());

        let dutch = read_to_string(build.join("nl/articles/password-security/index.html"))
            .await
            .unwrap();
        assert!(dutch.contains("Waarom Wachtwoordbeveiliging Belangrijk Is"));
    }

    #[tokio::test]
    async fn generated_pages_link_to_level_pages() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(dir.path(), "privacy".into()).await.unwrap();
        workspace.generate(workspace.build_dir()).await.unwrap();
        let build = workspace.build_dir();

        let home = read_to_string(build.join("en/index.html")).await.unwrap();
        assert!(home.contains(r#"href="/en/levels/beginner""#));
        assert!(!home.contains("?level="));
        assert!(!home.contains(r#"name="q""#));
        assert!(!home.contains(r#"href="/en/search""#));

        let advanced = read_to_string(build.join("nl/levels/gevorderd/index.html"))
            .await
            .unwrap();
        assert!(advanced.contains(r#"<a href="/nl/levels/gevorderd" class="active""#));
        assert!(advanced.contains("Browser Fingerprinting"));
        assert!(!advanced.contains("Begrijpen"));
        assert!(advanced.contains(r#"href="/en/levels/gevorderd""#));

        let missing = read_to_string(build.join("404.html")).await.unwrap();
        assert!(!missing.contains(r#"name="q""#));
    }

    #[test]
    fn slugs_must_be_single_segments() {
        assert!(is_path_segment("password-security"));
        for slug in ["", "..", "a/b", "/etc", "./x"] {
            assert!(!is_path_segment(slug), "{slug}");
        }
    }

    #[tokio::test]
    async fn clean_removes_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(dir.path(), "privacy".into()).await.unwrap();
        workspace.generate(workspace.build_dir()).await.unwrap();
        workspace.clean().await.unwrap();
        assert!(!workspace.is_generated().await.unwrap());
    }
}
