use color_eyre::{Section, eyre};
use keypoint::{site::Site, workspace::Workspace};
use keypoint_core::{Article, CategoryFilter, Locale};

fn pick_locale(workspace: &Workspace, locale: Option<&str>) -> eyre::Result<Locale> {
    match locale {
        Some(code) => code
            .parse::<Locale>()
            .note("Supported locales are `en` and `nl`"),
        None => Ok(workspace.manifest().default_locale()),
    }
}

pub async fn list(
    workspace: &Workspace,
    locale: Option<&str>,
    level: Option<&str>,
    emit_json: bool,
) -> eyre::Result<()> {
    let locale = pick_locale(workspace, locale)?;
    let site = Site::from_workspace(workspace.clone());
    let catalog = site.catalog(locale).await.note("Failed to load catalog")?;
    let filter = CategoryFilter::from_param(level);
    let articles = catalog.filter(&filter);

    if emit_json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }
    println!("{} article(s) in `{locale}`:", articles.len());
    print_articles(&articles, locale);
    Ok(())
}

pub async fn search(
    workspace: &Workspace,
    query: &str,
    locale: Option<&str>,
    emit_json: bool,
) -> eyre::Result<()> {
    let locale = pick_locale(workspace, locale)?;
    let site = Site::from_workspace(workspace.clone());
    let catalog = site.catalog(locale).await.note("Failed to load catalog")?;
    let hits = catalog.search(query);

    if emit_json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No results for \"{query}\"");
        return Ok(());
    }

    println!("Found {} result(s):", hits.len());
    print_articles(&hits, locale);
    Ok(())
}

fn print_articles(articles: &[&Article], locale: Locale) {
    for article in articles {
        println!(
            "• {} [{}] -> {}",
            article.title(),
            article.category(),
            article.href(locale)
        );
        if !article.description().is_empty() {
            println!("  {}", article.description());
        }
    }
}
