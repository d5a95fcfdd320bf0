use std::{
    net::TcpListener,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    extract::{Path as UrlPath, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use color_eyre::eyre::{self, eyre};
use keypoint_core::{CategoryFilter, Locale, SearchRequest};
use serde::Deserialize;
use tokio::fs as async_fs;
use tracing::{debug, error, info};

use crate::{
    site::{PageError, Site, Snapshot},
    store::MessageStore,
    workspace::Workspace,
};

/// Serve `workspace` over HTTP on `host:port` until the process is stopped.
///
/// With `allow_fallback` the next free port is taken when `port` is busy.
/// Pages are rendered per request from the messages on disk.
///
/// # Errors
/// Returns an error if no port can be bound or the server fails.
pub async fn serve(
    workspace: Workspace,
    host: String,
    port: u16,
    allow_fallback: bool,
) -> eyre::Result<()> {
    let port = select_port(&host, port, allow_fallback)?;
    let assets = workspace.assets_dir();
    let app = router(Site::from_workspace(workspace), assets);

    let address = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Serving at http://{address}");
    axum::serve(listener, app).await?;
    Ok(())
}

struct ServeState<S> {
    site: Site<S>,
    assets: Arc<PathBuf>,
}

impl<S> Clone for ServeState<S> {
    fn clone(&self) -> Self {
        Self {
            site: self.site.clone(),
            assets: self.assets.clone(),
        }
    }
}

/// Routes of the site.
///
/// | route                          | page                         |
/// |--------------------------------|------------------------------|
/// | `/`                            | redirect to default locale   |
/// | `/{locale}`                    | home                         |
/// | `/{locale}/articles?level=`    | article list                 |
/// | `/{locale}/articles/{slug}`    | article                      |
/// | `/{locale}/search?q=`          | search                       |
/// | `/{locale}/about`              | about                        |
/// | `/{locale}/contact`            | contact channels             |
/// | `/assets/{path}`               | static files                 |
pub fn router<S: MessageStore>(site: Site<S>, assets: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/", get(root_handler::<S>))
        .route("/assets/*path", get(asset_handler::<S>))
        .route("/:locale", get(home_handler::<S>))
        .route("/:locale/articles", get(articles_handler::<S>))
        .route("/:locale/articles/:slug", get(article_handler::<S>))
        .route("/:locale/search", get(search_handler::<S>))
        .route("/:locale/about", get(about_handler::<S>))
        .route("/:locale/contact", get(contact_handler::<S>))
        .fallback(fallback_handler::<S>)
        .with_state(ServeState {
            site,
            assets: Arc::new(assets.into()),
        })
}

#[derive(Debug, Deserialize)]
struct ListParams {
    level: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

async fn root_handler<S: MessageStore>(State(state): State<ServeState<S>>) -> Redirect {
    let locale = state.site.manifest().default_locale();
    Redirect::temporary(&format!("/{}", locale.code()))
}

async fn home_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath(locale): UrlPath<String>,
) -> Response {
    render_page(&state.site, &locale, |snapshot| snapshot.home()).await
}

async fn articles_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath(locale): UrlPath<String>,
    Query(params): Query<ListParams>,
) -> Response {
    let filter = CategoryFilter::from_param(params.level.as_deref());
    render_page(&state.site, &locale, |snapshot| snapshot.articles(&filter)).await
}

async fn article_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath((locale, slug)): UrlPath<(String, String)>,
) -> Response {
    render_page(&state.site, &locale, |snapshot| snapshot.article(&slug)).await
}

async fn search_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath(locale): UrlPath<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    let request = SearchRequest::from_param(params.q.as_deref());
    render_page(&state.site, &locale, |snapshot| snapshot.search(&request)).await
}

async fn about_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath(locale): UrlPath<String>,
) -> Response {
    render_page(&state.site, &locale, |snapshot| snapshot.about()).await
}

async fn contact_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath(locale): UrlPath<String>,
) -> Response {
    render_page(&state.site, &locale, |snapshot| snapshot.contact()).await
}

async fn fallback_handler<S: MessageStore>(State(state): State<ServeState<S>>) -> Response {
    not_found_response(&state.site, None).await
}

async fn asset_handler<S: MessageStore>(
    State(state): State<ServeState<S>>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    let Some(relative) = sanitize_relative_path(&path) else {
        return not_found_response(&state.site, None).await;
    };
    let full = state.assets.join(relative);
    match async_fs::read(&full).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, guess_content_type(&full))], bytes).into_response(),
        Err(err)
            if matches!(
                err.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::IsADirectory
            ) =>
        {
            not_found_response(&state.site, None).await
        }
        Err(err) => {
            error!(path = %full.display(), "Fail to read asset: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn render_page<S: MessageStore>(
    site: &Site<S>,
    locale: &str,
    page: impl FnOnce(&Snapshot<'_>) -> Result<String, PageError> + Send,
) -> Response {
    let Ok(locale) = locale.parse::<Locale>() else {
        debug!(locale, "Unsupported locale");
        return not_found_response(site, None).await;
    };
    let result = match site.snapshot(locale).await {
        Ok(snapshot) => page(&snapshot),
        Err(err) => Err(err),
    };
    match result {
        Ok(html) => Html(html).into_response(),
        Err(err) if err.is_not_found() => {
            debug!(%locale, "{err}");
            not_found_response(site, Some(locale)).await
        }
        Err(err) => internal_error(&err),
    }
}

async fn not_found_response<S: MessageStore>(site: &Site<S>, locale: Option<Locale>) -> Response {
    match site.not_found(locale).await {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => internal_error(&err),
    }
}

fn internal_error(err: &PageError) -> Response {
    error!("Fail to serve page: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

fn sanitize_relative_path(path: &str) -> Option<PathBuf> {
    let mut buf = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(segment) => buf.push(segment),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => return None,
        }
    }
    if buf.as_os_str().is_empty() {
        return None;
    }
    Some(buf)
}

fn guess_content_type(path: &Path) -> HeaderValue {
    mime_guess::from_path(path)
        .first_raw()
        .and_then(|mime| HeaderValue::from_str(mime).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"))
}

fn select_port(host: &str, start: u16, allow_fallback: bool) -> eyre::Result<u16> {
    if !allow_fallback {
        return Ok(start);
    }

    for port in start..start.saturating_add(50) {
        let addr = format!("{host}:{port}");
        if TcpListener::bind(&addr).is_ok() {
            info!("Selected available port {}", port);
            return Ok(port);
        }
    }

    Err(eyre!("No available port found starting at {}", start))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use keypoint_core::BodyStore;
    use tower::ServiceExt;

    use super::*;
    use crate::{metadata::SiteManifest, scaffold, store::StaticMessages};

    fn app(assets: &Path) -> Router {
        let store = StaticMessages::new()
            .with(Locale::En, scaffold::messages(Locale::En))
            .with(Locale::Nl, scaffold::messages(Locale::Nl));
        let manifest = SiteManifest::new("Keypoint", "Your Privacy Hub", "Alex");
        router(Site::new(store, manifest, BodyStore::builtin()), assets)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_redirects_to_default_locale() {
        let response = app(Path::new("assets"))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en");
    }

    #[tokio::test]
    async fn level_filter_is_applied() {
        let (status, body) = fetch(app(Path::new("assets")), "/en/articles?level=beginner").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Password Security Basics"));
        assert!(body.contains("Two-Factor Authentication"));
        assert!(!body.contains("Understanding VPNs"));

        let (_, all) = fetch(app(Path::new("assets")), "/en/articles?level=ALL").await;
        assert!(all.contains("Understanding VPNs"));
    }

    #[tokio::test]
    async fn article_page_and_unknown_slug() {
        let (status, body) = fetch(app(Path::new("assets")), "/en/articles/password-security").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Why Password Security Matters"));

        let (status, body) = fetch(app(Path::new("assets")), "/nl/articles/nonexistent-topic").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Pagina niet gevonden"));
    }

    #[tokio::test]
    async fn about_and_contact_are_localized() {
        let (status, body) = fetch(app(Path::new("assets")), "/en/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("About Keypoint"));
        assert!(body.contains(r#"href="/en/contact""#));
        assert!(body.contains(r#"<a href="/en/about" class="active" aria-current="page">About</a>"#));

        let (status, body) = fetch(app(Path::new("assets")), "/nl/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Neem Contact Op"));
        assert!(body.contains(r#"href="mailto:hello@keypoint.privacy""#));
        assert!(body.contains("Volg ons op Twitter"));

        let (status, _) = fetch(app(Path::new("assets")), "/fr/about").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn served_pages_keep_query_links() {
        let (_, body) = fetch(app(Path::new("assets")), "/en").await;
        assert!(body.contains(r#"href="/en/articles?level=beginner""#));
        assert!(body.contains(r#"name="q""#));
    }

    #[tokio::test]
    async fn unknown_locale_is_not_found() {
        let (status, body) = fetch(app(Path::new("assets")), "/fr/articles").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn search_query_is_decoded() {
        let (status, body) = fetch(app(Path::new("assets")), "/en/search?q=two%20factor").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("0 results for &quot;two factor&quot;"));

        let (_, body) = fetch(app(Path::new("assets")), "/en/search?q=Two-Factor").await;
        assert!(body.contains("1 result for &quot;Two-Factor&quot;"));

        let (_, body) = fetch(app(Path::new("assets")), "/en/search?q=%20%20").await;
        assert!(body.contains("Enter a search term to find articles"));
    }

    #[tokio::test]
    async fn assets_are_served_with_their_type() {
        let dir = tempfile::tempdir().unwrap();
        crate::utils::write(dir.path().join("style.css"), scaffold::STYLESHEET)
            .await
            .unwrap();

        let response = app(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/assets/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

        let (status, _) = fetch(app(dir.path()), "/assets/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn parent_segments_are_rejected() {
        assert_eq!(sanitize_relative_path("../secret"), None);
        assert_eq!(sanitize_relative_path(""), None);
        assert_eq!(
            sanitize_relative_path("/icons/lock.svg"),
            Some(PathBuf::from("icons/lock.svg"))
        );
    }
}
