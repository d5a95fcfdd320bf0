//! Scaffold a workspace, add an article, then generate and serve it.

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use keypoint::{serve, site::Site, workspace::Workspace};
use keypoint_core::Locale;
use tower::ServiceExt;

async fn fetch(workspace: &Workspace, uri: &str) -> (StatusCode, String) {
    let app = serve::router(Site::from_workspace(workspace.clone()), workspace.assets_dir());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn created_article_is_served_in_every_locale() {
    let dir = tempfile::tempdir().unwrap();
    let created = Workspace::create(dir.path(), "privacy-hub".to_string())
        .await
        .unwrap();
    let slug = created
        .create_article("Secure Messaging", "Pick an end-to-end encrypted app", "Intermediate")
        .await
        .unwrap();
    assert_eq!(slug, "secure-messaging");

    let workspace = Workspace::open(dir.path().join("privacy-hub")).await.unwrap();

    let (status, body) = fetch(&workspace, "/en/articles/secure-messaging").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Secure Messaging"));
    assert!(body.contains("Pick an end-to-end encrypted app"));

    let (status, body) = fetch(&workspace, "/nl/articles?level=intermediate").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Secure Messaging"));
    assert!(body.contains("VPN&#x27;s Begrijpen"));

    let (_, body) = fetch(&workspace, "/en/search?q=encrypted").await;
    assert!(body.contains("1 result for &quot;encrypted&quot;"));

    let (status, _) = fetch(&workspace, "/en/articles/secure-messaging-2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generated_site_contains_created_article() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::create(dir.path(), "privacy-hub".to_string())
        .await
        .unwrap();
    workspace
        .create_article("Private Browsing", "", "Beginner")
        .await
        .unwrap();

    workspace.generate(workspace.build_dir()).await.unwrap();
    assert!(workspace.is_generated().await.unwrap());

    for locale in Locale::ALL {
        let page = workspace
            .build_dir()
            .join(locale.code())
            .join("articles/private-browsing/index.html");
        let html = tokio::fs::read_to_string(&page).await.unwrap();
        assert!(html.contains("Private Browsing"));
        assert!(html.contains(&format!("lang=\"{}\"", locale.code())));

        let beginner = workspace
            .build_dir()
            .join(locale.code())
            .join("levels/beginner/index.html");
        let html = tokio::fs::read_to_string(&beginner).await.unwrap();
        assert!(html.contains("Private Browsing"));
        assert!(html.contains(&format!("/{}/articles/private-browsing", locale.code())));
    }

    let stylesheet = workspace.build_dir().join("assets/style.css");
    assert!(stylesheet.exists());

    workspace.clean().await.unwrap();
    assert!(!workspace.build_dir().exists());
}
