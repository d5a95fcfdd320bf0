//! HTML pages.
//!
//! Templates live in `templates/` and are compiled in by `askama`. Every value
//! a template shows is prepared here, so the templates only loop and branch on
//! plain fields.

use askama::Template;
use keypoint_core::{
    Article, ArticleCard, Block, BodyText, Catalog, Category, CategoryFilter, Level, Locale,
    Messages, SearchRequest, query::SearchOutcome,
};
use time::OffsetDateTime;

use crate::metadata::SiteManifest;

macro_rules! labels {
    ($($field:ident => $namespace:literal . $key:literal or $fallback:literal;)*) => {
        /// UI strings of one locale, falling back to English for missing keys.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct Labels {
            $(
                #[doc = concat!("`", $namespace, ".", $key, "`")]
                pub $field: String,
            )*
        }

        impl Labels {
            /// Read every label from the message namespaces.
            #[must_use]
            pub fn from_messages(messages: &Messages) -> Self {
                Self {
                    $($field: messages.text($namespace, $key).unwrap_or($fallback).to_string(),)*
                }
            }
        }

        impl Default for Labels {
            fn default() -> Self {
                Self {
                    $($field: $fallback.to_string(),)*
                }
            }
        }
    };
}

labels! {
    nav_home => "nav"."home" or "Home";
    nav_articles => "nav"."articles" or "Articles";
    nav_search => "nav"."search" or "Search";
    nav_about => "nav"."about" or "About";
    nav_contact => "nav"."contact" or "Contact Us";
    search_placeholder => "nav"."searchPlaceholder" or "Search articles...";
    language => "nav"."language" or "Language";
    hero_title => "hero"."title" or "Your Privacy, Your Control";
    hero_subtitle => "hero"."subtitle" or "Empowering you with knowledge to protect your digital life.";
    hero_cta => "hero"."cta" or "Start Learning";
    featured_heading => "home"."featured" or "Featured Articles";
    view_all => "home"."viewAll" or "View All Articles";
    topics_heading => "home"."topics" or "Explore Topics";
    filter_label => "list"."filter" or "Filter by level:";
    filter_all => "list"."all" or "All";
    list_empty => "list"."empty" or "No articles found for this level.";
    search_results => "search"."results" or "Search Results";
    no_results => "search"."noResults" or "No results found";
    try_different => "search"."tryDifferent" or "Try a different search term";
    search_prompt => "search"."prompt" or "Enter a search term to find articles";
    result_one => "search"."result" or "result";
    result_many => "search"."resultPlural" or "results";
    result_for => "search"."for" or "for";
    read_time => "article"."readTime" or "min read";
    published => "article"."published" or "Published";
    updated => "article"."updated" or "Updated";
    related => "article"."related" or "Related Articles";
    read_article => "article"."readArticle" or "Read Article";
    learn_more => "article"."learnMore" or "Learn More";
    featured => "article"."featured" or "Featured";
    back => "article"."back" or "Back to Articles";
    not_found_title => "notFound"."title" or "Page not found";
    not_found_message => "notFound"."message" or "The page you are looking for does not exist.";
    copyright => "footer"."copyright" or "All rights reserved.";
    about_title => "about"."title" or "About Keypoint";
    about_intro => "about"."intro" or "We're on a mission to make privacy education accessible to everyone, regardless of their technical background or location.";
    mission_heading => "about"."missionTitle" or "Our Mission";
    mission_problem => "about"."missionProblem" or "In an increasingly digital world, privacy has become a fundamental right that everyone should understand and be able to exercise. Yet privacy education is often scattered, technical and out of reach for most people.";
    mission_answer => "about"."missionAnswer" or "Keypoint was created to bridge this gap. Everyone deserves to understand how to protect their personal information, whatever their technical expertise.";
    mission_reach => "about"."missionReach" or "We publish clear privacy guidance in several languages, so digital security education can reach everyone.";
    values_heading => "about"."valuesTitle" or "Our Values";
    values_subtitle => "about"."valuesSubtitle" or "The principles that guide everything we do";
    value_access => "about"."accessTitle" or "Accessibility First";
    value_access_text => "about"."accessText" or "Privacy education should be available to everyone, regardless of technical background or ability.";
    value_global => "about"."globalTitle" or "Global Perspective";
    value_global_text => "about"."globalText" or "Privacy knows no borders. We publish in multiple languages for a worldwide audience.";
    value_open => "about"."openTitle" or "Transparency";
    value_open_text => "about"."openText" or "We are open about how we work and how we protect your data when you visit this site.";
    join_heading => "about"."joinTitle" or "Join Our Community";
    join_text => "about"."joinText" or "Whether you're here to learn or to contribute, we're glad you're part of our mission.";
    contribute => "about"."contribute" or "Contribute on GitHub";
    get_in_touch => "about"."getInTouch" or "Get in Touch";
    contact_title => "contact"."title" or "Get in Touch";
    contact_intro => "contact"."intro" or "Have questions, suggestions, or want to contribute? We'd love to hear from you.";
    inquiries => "contact"."generalTitle" or "General Inquiries";
    inquiries_text => "contact"."generalText" or "Questions about Keypoint, partnerships, or media inquiries.";
    contributing => "contact"."contributingTitle" or "Contributing";
    contributing_text => "contact"."contributingText" or "Want to help improve Keypoint? Check out our open-source projects.";
    github_link => "contact"."githubLink" or "View on GitHub";
    feedback => "contact"."feedbackTitle" or "Feedback & Suggestions";
    feedback_text => "contact"."feedbackText" or "Share your thoughts or suggest new article topics.";
    twitter_link => "contact"."twitterLink" or "Follow us on Twitter";
    careers => "contact"."careersTitle" or "Careers";
    careers_text => "contact"."careersText" or "Interested in joining our team? Check out open positions.";
    linkedin_link => "contact"."linkedinLink" or "LinkedIn Page";
    response_time => "contact"."responseTime" or "We typically respond within 1-2 business days.";
}

/// How pages link to filtered lists and search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkMode {
    /// Served pages: `?level=` filters and a working search form.
    #[default]
    Query,
    /// Generated pages: one `levels/<token>` page per category, no search.
    Static,
}

/// What every page of one locale shares.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    manifest: &'a SiteManifest,
    locale: Locale,
    labels: Labels,
    links: LinkMode,
}

impl<'a> PageContext<'a> {
    #[must_use]
    pub fn new(manifest: &'a SiteManifest, locale: Locale, messages: &Messages) -> Self {
        Self {
            manifest,
            locale,
            labels: Labels::from_messages(messages),
            links: LinkMode::Query,
        }
    }

    /// Link filters and search the way `links` asks for.
    #[must_use]
    pub fn with_links(mut self, links: LinkMode) -> Self {
        self.links = links;
        self
    }

    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    fn href(&self, path: &str) -> String {
        format!("/{}{path}", self.locale.code())
    }

    /// Path of the list filtered to `token`, or the full list.
    fn level_path(&self, token: Option<&str>) -> String {
        match (token, self.links) {
            (None, _) => Page::Articles.path().to_string(),
            (Some(token), LinkMode::Query) => format!("/articles?level={token}"),
            (Some(token), LinkMode::Static) => format!("/levels/{token}"),
        }
    }

    const fn search_enabled(&self) -> bool {
        matches!(self.links, LinkMode::Query)
    }

    fn read_time(&self, article: &Article) -> String {
        format!("{} {}", article.read_time(), self.labels.read_time)
    }

    fn chrome(&self, page: Page, path: &str, title: Option<&str>) -> Chrome<'_> {
        let site_title = self.manifest.title();
        let nav = [
            (Page::Home, &self.labels.nav_home),
            (Page::Articles, &self.labels.nav_articles),
            (Page::About, &self.labels.nav_about),
            (Page::Search, &self.labels.nav_search),
        ]
        .into_iter()
        .filter(|(target, _)| *target != Page::Search || self.search_enabled())
        .map(|(target, label)| NavLink {
            href: self.href(target.path()),
            label,
            active: target == page,
        })
        .collect();

        let languages = self
            .manifest
            .locales()
            .into_iter()
            .map(|locale| LanguageLink {
                code: locale.code(),
                name: locale.native_name(),
                href: format!("/{}{path}", locale.code()),
                current: locale == self.locale,
            })
            .collect();

        Chrome {
            lang: self.locale.code(),
            title: title.map_or_else(
                || site_title.to_string(),
                |title| format!("{title} - {site_title}"),
            ),
            description: self.manifest.description(),
            owner: self.manifest.owner(),
            site_title,
            home_href: self.href(""),
            contact_href: self.href(Page::Contact.path()),
            contact_label: &self.labels.nav_contact,
            search_enabled: self.search_enabled(),
            search_action: self.href(Page::Search.path()),
            search_label: &self.labels.nav_search,
            search_placeholder: &self.labels.search_placeholder,
            language_label: &self.labels.language,
            copyright: &self.labels.copyright,
            year: OffsetDateTime::now_utc().year(),
            nav,
            languages,
        }
    }

    fn card<'c>(&'c self, card: ArticleCard<'c>) -> CardView<'c> {
        let article = card.article();
        let style = article.category().style();
        CardView {
            href: article.href(self.locale),
            title: article.title(),
            description: article.description(),
            category: article.category().label(),
            badge: style.badge,
            icon: style.icon,
            level: article.category().level().map_or("", Level::token),
            keywords: article.card_keywords(),
            read_time: self.read_time(article),
            featured: card.is_featured(),
            cta: if card.is_featured() {
                &self.labels.read_article
            } else {
                &self.labels.learn_more
            },
        }
    }

    fn cards<'c>(&'c self, articles: impl IntoIterator<Item = &'c Article>) -> Vec<CardView<'c>> {
        articles
            .into_iter()
            .map(|article| self.card(ArticleCard::new(article)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Articles,
    Article,
    Search,
    About,
    Contact,
    NotFound,
}

impl Page {
    const fn path(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "",
            Self::Articles | Self::Article => "/articles",
            Self::Search => "/search",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }
}

#[derive(Debug)]
struct Chrome<'a> {
    lang: &'static str,
    title: String,
    description: &'a str,
    owner: &'a str,
    site_title: &'a str,
    home_href: String,
    contact_href: String,
    contact_label: &'a str,
    search_enabled: bool,
    search_action: String,
    search_label: &'a str,
    search_placeholder: &'a str,
    language_label: &'a str,
    copyright: &'a str,
    year: i32,
    nav: Vec<NavLink<'a>>,
    languages: Vec<LanguageLink>,
}

#[derive(Debug)]
struct NavLink<'a> {
    href: String,
    label: &'a str,
    active: bool,
}

#[derive(Debug)]
struct LanguageLink {
    code: &'static str,
    name: &'static str,
    href: String,
    current: bool,
}

#[derive(Debug)]
struct CardView<'a> {
    href: String,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    badge: &'static str,
    icon: &'static str,
    level: &'static str,
    keywords: &'a [String],
    read_time: String,
    featured: bool,
    cta: &'a str,
}

#[derive(Debug)]
struct TopicView {
    title: &'static str,
    icon: &'static str,
    href: String,
    count: usize,
}

#[derive(Debug)]
struct ChannelView<'a> {
    icon: &'static str,
    title: &'a str,
    text: &'a str,
    href: String,
    link: &'a str,
}

#[derive(Debug)]
struct FilterLink<'a> {
    label: &'a str,
    href: String,
    active: bool,
}

/// A body block ready for HTML, with consecutive list items merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock<'a> {
    /// Element name: `h2`, `h3`, `p`, `ul` or `ol`
    pub tag: &'static str,
    /// Text of non-list blocks
    pub text: &'a str,
    /// Items of list blocks
    pub items: Vec<&'a str>,
}

/// Merge runs of list items into single `ul`/`ol` blocks.
#[must_use]
pub fn group_blocks<'a>(blocks: &[Block<'a>]) -> Vec<HtmlBlock<'a>> {
    let mut grouped: Vec<HtmlBlock<'a>> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let (tag, list) = match block {
            Block::Heading2(_) => ("h2", false),
            Block::Heading3(_) => ("h3", false),
            Block::UnorderedItem(_) => ("ul", true),
            Block::OrderedItem(_) => ("ol", true),
            Block::Paragraph(_) => ("p", false),
        };
        if !list {
            grouped.push(HtmlBlock {
                tag,
                text: block.text(),
                items: Vec::new(),
            });
            continue;
        }
        match grouped.last_mut() {
            Some(last) if last.tag == tag => last.items.push(block.text()),
            _ => grouped.push(HtmlBlock {
                tag,
                text: "",
                items: vec![block.text()],
            }),
        }
    }
    grouped
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
    articles_href: String,
    featured: Vec<CardView<'a>>,
    topics: Vec<TopicView>,
}

#[derive(Template)]
#[template(path = "articles.html")]
struct ArticlesTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
    filters: Vec<FilterLink<'a>>,
    cards: Vec<CardView<'a>>,
}

#[derive(Template)]
#[template(path = "article.html")]
struct ArticleTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
    back_href: String,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    badge: &'static str,
    icon: &'static str,
    read_time: String,
    meta: Vec<String>,
    placeholder: bool,
    blocks: Vec<HtmlBlock<'a>>,
    related: Vec<CardView<'a>>,
}

#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
    articles_href: String,
    query: &'a str,
    has_query: bool,
    summary: String,
    cards: Vec<CardView<'a>>,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
    github: &'a str,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
    channels: Vec<ChannelView<'a>>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    chrome: Chrome<'a>,
    labels: &'a Labels,
}

#[derive(Template)]
#[template(path = "redirect.html")]
struct RedirectTemplate<'a> {
    target: &'a str,
}

const fn level_title(level: Level) -> &'static str {
    match level {
        Level::Beginner => "Beginner",
        Level::Intermediate => "Intermediate",
        Level::Advanced => "Advanced",
        Level::Expert => "Expert",
    }
}

/// Landing page: hero, featured articles and one topic per level.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn home(ctx: &PageContext<'_>, catalog: &Catalog) -> askama::Result<String> {
    let topics = Level::ALL
        .into_iter()
        .map(|level| {
            let filter = CategoryFilter::Token(level.token().to_string());
            TopicView {
                title: level_title(level),
                icon: Category::from(level_title(level)).style().icon,
                href: ctx.href(&ctx.level_path(Some(level.token()))),
                count: catalog.filter(&filter).len(),
            }
        })
        .collect();

    HomeTemplate {
        chrome: ctx.chrome(Page::Home, "", None),
        labels: ctx.labels(),
        articles_href: ctx.href(Page::Articles.path()),
        featured: catalog
            .featured()
            .into_iter()
            .map(|card| ctx.card(card))
            .collect(),
        topics,
    }
    .render()
}

/// Article listing with the level filter bar.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn articles(
    ctx: &PageContext<'_>,
    catalog: &Catalog,
    filter: &CategoryFilter,
) -> askama::Result<String> {
    let named = Category::NAMED;
    let mut filters = vec![FilterLink {
        label: &ctx.labels().filter_all,
        href: ctx.href(&ctx.level_path(None)),
        active: *filter == CategoryFilter::All,
    }];
    filters.extend(named.iter().map(|category| FilterLink {
        label: category.label(),
        href: ctx.href(&ctx.level_path(Some(&category.label().to_lowercase()))),
        active: filter.selects(category),
    }));
    let path = match ctx.links {
        LinkMode::Query => Page::Articles.path().to_string(),
        LinkMode::Static => ctx.level_path(filter.token()),
    };

    ArticlesTemplate {
        chrome: ctx.chrome(Page::Articles, &path, Some(&ctx.labels().nav_articles)),
        labels: ctx.labels(),
        filters,
        cards: ctx.cards(catalog.filter(filter)),
    }
    .render()
}

/// One article with its body and related articles.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn article(
    ctx: &PageContext<'_>,
    catalog: &Catalog,
    article: &Article,
    body: BodyText<'_>,
) -> askama::Result<String> {
    let labels = ctx.labels();
    let style = article.category().style();
    let mut meta = Vec::new();
    if let Some(date) = article.published() {
        meta.push(format!("{} {date}", labels.published));
    }
    if let Some(date) = article.updated() {
        meta.push(format!("{} {date}", labels.updated));
    }
    if let Some(author) = article.author() {
        meta.push(author.to_string());
    }
    let blocks = body.blocks();

    ArticleTemplate {
        chrome: ctx.chrome(
            Page::Article,
            &format!("/articles/{}", article.slug()),
            Some(article.title()),
        ),
        labels,
        back_href: ctx.href(Page::Articles.path()),
        title: article.title(),
        description: article.description(),
        category: article.category().label(),
        badge: style.badge,
        icon: style.icon,
        read_time: ctx.read_time(article),
        meta,
        placeholder: body.is_placeholder(),
        blocks: group_blocks(&blocks),
        related: ctx.cards(catalog.related(article.slug())),
    }
    .render()
}

/// Search page in its no-query, results or no-results state.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn search(
    ctx: &PageContext<'_>,
    catalog: &Catalog,
    request: &SearchRequest,
) -> askama::Result<String> {
    let labels = ctx.labels();
    let (query, summary, cards) = match request.run(catalog.articles()) {
        SearchOutcome::NoQuery => ("", String::new(), Vec::new()),
        SearchOutcome::Results { query, articles } => {
            let noun = if articles.len() == 1 {
                &labels.result_one
            } else {
                &labels.result_many
            };
            let summary = format!("{} {noun} {} \"{query}\"", articles.len(), labels.result_for);
            (query, summary, ctx.cards(articles))
        }
    };

    SearchTemplate {
        chrome: ctx.chrome(
            Page::Search,
            Page::Search.path(),
            Some(&labels.search_results),
        ),
        labels,
        articles_href: ctx.href(Page::Articles.path()),
        query,
        has_query: request.query().is_some(),
        summary,
        cards,
    }
    .render()
}

/// Who runs the site and what they stand for.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn about(ctx: &PageContext<'_>) -> askama::Result<String> {
    AboutTemplate {
        chrome: ctx.chrome(Page::About, Page::About.path(), Some(&ctx.labels().nav_about)),
        labels: ctx.labels(),
        github: &ctx.manifest.contact().github,
    }
    .render()
}

/// Contact channels from the manifest. There is no form to submit.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn contact(ctx: &PageContext<'_>) -> askama::Result<String> {
    let labels = ctx.labels();
    let links = ctx.manifest.contact();
    let channels = vec![
        ChannelView {
            icon: "mail",
            title: &labels.inquiries,
            text: &labels.inquiries_text,
            href: format!("mailto:{}", links.email),
            link: &links.email,
        },
        ChannelView {
            icon: "github",
            title: &labels.contributing,
            text: &labels.contributing_text,
            href: links.github.clone(),
            link: &labels.github_link,
        },
        ChannelView {
            icon: "twitter",
            title: &labels.feedback,
            text: &labels.feedback_text,
            href: links.twitter.clone(),
            link: &labels.twitter_link,
        },
        ChannelView {
            icon: "linkedin",
            title: &labels.careers,
            text: &labels.careers_text,
            href: links.linkedin.clone(),
            link: &labels.linkedin_link,
        },
    ];

    ContactTemplate {
        chrome: ctx.chrome(Page::Contact, Page::Contact.path(), Some(&labels.contact_title)),
        labels,
        channels,
    }
    .render()
}

/// The page served for unknown slugs, locales and routes.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn not_found(ctx: &PageContext<'_>) -> askama::Result<String> {
    NotFoundTemplate {
        chrome: ctx.chrome(Page::NotFound, "", Some(&ctx.labels().not_found_title)),
        labels: ctx.labels(),
    }
    .render()
}

/// A page that sends the browser to `target`.
///
/// # Errors
/// Returns the template error if rendering fails.
pub fn redirect(target: &str) -> askama::Result<String> {
    RedirectTemplate { target }.render()
}

#[cfg(test)]
mod tests {
    use keypoint_core::{BodyStore, ConstantReadTime, RawArticle};

    use super::*;
    use crate::scaffold;

    fn fixture(locale: Locale) -> (SiteManifest, Messages) {
        (
            SiteManifest::new("Keypoint", "Your Privacy Hub", "Alex"),
            scaffold::messages(locale),
        )
    }

    #[test]
    fn list_items_are_grouped() {
        let blocks = keypoint_core::parse_blocks(
            "## Tips\n- one\n- two\n1. first\n2. second\nDone\n- again",
        );
        let grouped = group_blocks(&blocks);
        let shape: Vec<_> = grouped
            .iter()
            .map(|block| (block.tag, block.text, block.items.len()))
            .collect();
        assert_eq!(
            shape,
            [
                ("h2", "Tips", 0),
                ("ul", "", 2),
                ("ol", "", 2),
                ("p", "Done", 0),
                ("ul", "", 1),
            ]
        );
    }

    #[test]
    fn missing_labels_fall_back_to_english() {
        let mut messages = Messages::default();
        messages.set_text("nav", "articles", "Artikelen");
        let labels = Labels::from_messages(&messages);
        assert_eq!(labels.nav_articles, "Artikelen");
        assert_eq!(labels.nav_home, Labels::default().nav_home);
    }

    #[test]
    fn home_features_first_three() {
        let (manifest, messages) = fixture(Locale::En);
        let catalog = messages.resolve(ConstantReadTime::default());
        let ctx = PageContext::new(&manifest, Locale::En, &messages);
        let html = home(&ctx, &catalog).unwrap();

        assert!(html.contains("Your Privacy, Your Control"));
        assert!(html.contains("Understanding VPNs"));
        assert_eq!(html.matches("Read Article").count(), 3);
        assert!(html.contains("5 min read"));
        assert!(html.contains("/en/articles?level=beginner"));
    }

    #[test]
    fn article_page_shows_body_and_related() {
        let (manifest, messages) = fixture(Locale::En);
        let catalog = messages.resolve(ConstantReadTime::default());
        let bodies = BodyStore::builtin();
        let ctx = PageContext::new(&manifest, Locale::En, &messages);
        let article = catalog.get("password-security").unwrap();
        let html = super::article(
            &ctx,
            &catalog,
            article,
            bodies.lookup(article.slug(), Locale::En),
        )
        .unwrap();

        assert!(html.contains("<h2>Why Password Security Matters</h2>"));
        assert!(html.contains("<li>At least 12 characters long</li>"));
        assert!(html.contains("Two-Factor Authentication"));
        assert!(html.contains("Learn More"));
        assert!(html.contains(r#"href="/nl/articles/password-security""#));
    }

    #[test]
    fn placeholder_body_is_rendered() {
        let (manifest, mut messages) = fixture(Locale::Nl);
        messages
            .add_article("tor", RawArticle::new("Tor", "Anoniem surfen", "Expert"))
            .unwrap();
        let catalog = messages.resolve(ConstantReadTime::default());
        let ctx = PageContext::new(&manifest, Locale::Nl, &messages);
        let article = catalog.get("tor").unwrap();
        let html = super::article(
            &ctx,
            &catalog,
            article,
            BodyStore::new().lookup("tor", Locale::Nl),
        )
        .unwrap();
        assert!(html.contains("<p>Inhoud binnenkort beschikbaar...</p>"));
        assert!(html.contains("badge-advanced"));
    }

    #[test]
    fn search_states_are_distinct() {
        let (manifest, messages) = fixture(Locale::En);
        let catalog = messages.resolve(ConstantReadTime::default());
        let ctx = PageContext::new(&manifest, Locale::En, &messages);

        let idle = search(&ctx, &catalog, &SearchRequest::NoQuery).unwrap();
        assert!(idle.contains("Enter a search term to find articles"));
        assert!(!idle.contains("No results found"));

        let one = search(&ctx, &catalog, &SearchRequest::from_param(Some("vpn"))).unwrap();
        assert!(one.contains("1 result for &quot;vpn&quot;"));

        let none = search(&ctx, &catalog, &SearchRequest::from_param(Some("zzz"))).unwrap();
        assert!(none.contains("0 results for &quot;zzz&quot;"));
        assert!(none.contains("No results found"));
    }

    #[test]
    fn filter_bar_marks_the_active_level() {
        let (manifest, messages) = fixture(Locale::Nl);
        let catalog = messages.resolve(ConstantReadTime::default());
        let ctx = PageContext::new(&manifest, Locale::Nl, &messages);

        let html = articles(&ctx, &catalog, &CategoryFilter::from_param(Some("gevorderd"))).unwrap();
        assert!(html.contains(r#"<a href="/nl/articles?level=gevorderd" class="active""#));
        assert!(html.contains("Browser Fingerprinting"));
        assert!(!html.contains("Begrijpen"));

        let empty = articles(&ctx, &catalog, &CategoryFilter::from_param(Some("advanced"))).unwrap();
        assert!(empty.contains("Geen artikelen gevonden voor dit niveau."));
    }

    #[test]
    fn static_links_point_at_level_pages() {
        let (manifest, messages) = fixture(Locale::En);
        let catalog = messages.resolve(ConstantReadTime::default());
        let ctx = PageContext::new(&manifest, Locale::En, &messages).with_links(LinkMode::Static);

        let html = articles(&ctx, &catalog, &CategoryFilter::from_param(Some("beginner"))).unwrap();
        assert!(html.contains(r#"<a href="/en/levels/beginner" class="active""#));
        assert!(html.contains(r#"<a href="/en/articles">All</a>"#));
        assert!(html.contains(r#"href="/nl/levels/beginner""#));
        assert!(!html.contains(r#"role="search""#));

        let home = home(&ctx, &catalog).unwrap();
        assert!(home.contains(r#"href="/en/levels/expert""#));
    }

    #[test]
    fn about_page_uses_locale_labels() {
        let (manifest, messages) = fixture(Locale::Nl);
        let ctx = PageContext::new(&manifest, Locale::Nl, &messages);
        let html = about(&ctx).unwrap();
        assert!(html.contains("<h1>Over Keypoint</h1>"));
        assert!(html.contains("Transparantie"));
        assert!(html.contains(r#"href="https://github.com/keypoint""#));
        assert!(html.contains(r#"<meta name="author" content="Alex">"#));
        assert!(html.contains(r#"<a class="contact-link" href="/nl/contact">Contact</a>"#));
    }

    #[test]
    fn user_text_is_escaped() {
        let manifest = SiteManifest::new("Keypoint", "Your Privacy Hub", "Alex");
        let mut messages = Messages::default();
        messages
            .add_article("xss", RawArticle::new("<script>", "desc", "Beginner"))
            .unwrap();
        let catalog = messages.resolve(ConstantReadTime::default());
        let ctx = PageContext::new(&manifest, Locale::En, &messages);
        let html = home(&ctx, &catalog).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
