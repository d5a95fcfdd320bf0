//! Starter content written by `keypoint create`.

use indexmap::IndexMap;
use keypoint_core::{Locale, Messages, RawArticle};

struct SampleArticle {
    slug: &'static str,
    category: [&'static str; 2],
    keywords: [&'static [&'static str]; 2],
    title: [&'static str; 2],
    description: [&'static str; 2],
}

const SAMPLE_ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        slug: "password-security",
        category: ["Beginner", "Beginner"],
        keywords: [
            &["passwords", "password managers", "credential stuffing", "passphrases"],
            &["wachtwoorden", "wachtwoordmanagers", "wachtwoordzinnen"],
        ],
        title: ["Password Security Basics", "Basis Wachtwoordbeveiliging"],
        description: [
            "Learn how to create strong passwords and keep them safe.",
            "Leer hoe je sterke wachtwoorden maakt en ze veilig bewaart.",
        ],
    },
    SampleArticle {
        slug: "two-factor-auth",
        category: ["Beginner", "Beginner"],
        keywords: [&["2fa", "authenticator apps", "hardware keys"], &["2fa", "authenticator-apps"]],
        title: ["Two-Factor Authentication", "Twee-Factor Authenticatie"],
        description: [
            "Add a second layer of protection to your accounts.",
            "Voeg een tweede beveiligingslaag toe aan je accounts.",
        ],
    },
    SampleArticle {
        slug: "vpn-basics",
        category: ["Intermediate", "Intermediate"],
        keywords: [&["vpn", "encryption", "public wifi"], &["vpn", "versleuteling", "openbare wifi"]],
        title: ["Understanding VPNs", "VPN's Begrijpen"],
        description: [
            "What a VPN protects, and what it does not.",
            "Wat een VPN beschermt, en wat niet.",
        ],
    },
    SampleArticle {
        slug: "browser-fingerprinting",
        category: ["Advanced", "Gevorderd"],
        keywords: [&["fingerprinting", "tracking", "browsers"], &["fingerprinting", "tracking"]],
        title: ["Browser Fingerprinting", "Browser Fingerprinting"],
        description: [
            "How websites recognise you without cookies.",
            "Hoe websites je herkennen zonder cookies.",
        ],
    },
];

const UI_TEXT: &[(&str, &str, &str, &str)] = &[
    ("nav", "home", "Home", "Home"),
    ("nav", "articles", "Articles", "Artikelen"),
    ("nav", "search", "Search", "Zoeken"),
    ("nav", "about", "About", "Over Ons"),
    ("nav", "contact", "Contact Us", "Contact"),
    ("nav", "searchPlaceholder", "Search articles...", "Zoek artikelen..."),
    ("nav", "language", "Language", "Taal"),
    ("hero", "title", "Your Privacy, Your Control", "Jouw Privacy, Jouw Controle"),
    (
        "hero",
        "subtitle",
        "Empowering you with knowledge to protect your digital life.",
        "Kennis om je digitale leven te beschermen.",
    ),
    ("hero", "cta", "Start Learning", "Begin met Leren"),
    ("home", "featured", "Featured Articles", "Uitgelichte Artikelen"),
    ("home", "viewAll", "View All Articles", "Bekijk Alle Artikelen"),
    ("home", "topics", "Explore Topics", "Ontdek Onderwerpen"),
    ("list", "filter", "Filter by level:", "Filter op niveau:"),
    ("list", "all", "All", "Alle"),
    ("list", "empty", "No articles found for this level.", "Geen artikelen gevonden voor dit niveau."),
    ("search", "results", "Search Results", "Zoekresultaten"),
    ("search", "noResults", "No results found", "Geen resultaten gevonden"),
    (
        "search",
        "tryDifferent",
        "Try a different search term",
        "Probeer een andere zoekterm",
    ),
    (
        "search",
        "prompt",
        "Enter a search term to find articles",
        "Voer een zoekterm in om artikelen te vinden",
    ),
    ("search", "result", "result", "resultaat"),
    ("search", "resultPlural", "results", "resultaten"),
    ("search", "for", "for", "voor"),
    ("article", "readTime", "min read", "min lezen"),
    ("article", "published", "Published", "Gepubliceerd"),
    ("article", "updated", "Updated", "Bijgewerkt"),
    ("article", "related", "Related Articles", "Gerelateerde Artikelen"),
    ("article", "readArticle", "Read Article", "Lees Artikel"),
    ("article", "learnMore", "Learn More", "Meer Informatie"),
    ("article", "featured", "Featured", "Uitgelicht"),
    ("article", "back", "Back to Articles", "Terug naar Artikelen"),
    ("notFound", "title", "Page not found", "Pagina niet gevonden"),
    (
        "notFound",
        "message",
        "The page you are looking for does not exist.",
        "De pagina die je zoekt bestaat niet.",
    ),
    ("footer", "copyright", "All rights reserved.", "Alle rechten voorbehouden."),
    ("about", "title", "About Keypoint", "Over Keypoint"),
    (
        "about",
        "intro",
        "We're on a mission to make privacy education accessible to everyone, regardless of their technical background or location.",
        "Onze missie is privacy-educatie toegankelijk te maken voor iedereen, ongeacht technische achtergrond of locatie.",
    ),
    ("about", "missionTitle", "Our Mission", "Onze Missie"),
    (
        "about",
        "missionProblem",
        "In an increasingly digital world, privacy has become a fundamental right that everyone should understand and be able to exercise. Yet privacy education is often scattered, technical and out of reach for most people.",
        "In een steeds digitalere wereld is privacy een grondrecht dat iedereen moet begrijpen en kunnen uitoefenen. Toch is privacy-educatie vaak versnipperd, technisch en voor de meeste mensen onbereikbaar.",
    ),
    (
        "about",
        "missionAnswer",
        "Keypoint was created to bridge this gap. Everyone deserves to understand how to protect their personal information, whatever their technical expertise.",
        "Keypoint is opgericht om die kloof te overbruggen. Iedereen verdient het om te begrijpen hoe je persoonlijke gegevens beschermt, ongeacht technische kennis.",
    ),
    (
        "about",
        "missionReach",
        "We publish clear privacy guidance in several languages, so digital security education can reach everyone.",
        "We publiceren heldere privacy-adviezen in meerdere talen, zodat digitale veiligheid iedereen bereikt.",
    ),
    ("about", "valuesTitle", "Our Values", "Onze Waarden"),
    (
        "about",
        "valuesSubtitle",
        "The principles that guide everything we do",
        "De principes achter alles wat we doen",
    ),
    ("about", "accessTitle", "Accessibility First", "Toegankelijkheid Voorop"),
    (
        "about",
        "accessText",
        "Privacy education should be available to everyone, regardless of technical background or ability.",
        "Privacy-educatie hoort voor iedereen beschikbaar te zijn, ongeacht technische achtergrond of beperking.",
    ),
    ("about", "globalTitle", "Global Perspective", "Wereldwijd Perspectief"),
    (
        "about",
        "globalText",
        "Privacy knows no borders. We publish in multiple languages for a worldwide audience.",
        "Privacy kent geen grenzen. We publiceren in meerdere talen voor een wereldwijd publiek.",
    ),
    ("about", "openTitle", "Transparency", "Transparantie"),
    (
        "about",
        "openText",
        "We are open about how we work and how we protect your data when you visit this site.",
        "We zijn open over hoe we werken en hoe we je gegevens beschermen wanneer je deze site bezoekt.",
    ),
    ("about", "joinTitle", "Join Our Community", "Word Deel van Onze Gemeenschap"),
    (
        "about",
        "joinText",
        "Whether you're here to learn or to contribute, we're glad you're part of our mission.",
        "Of je nu komt om te leren of om bij te dragen, we zijn blij dat je deel uitmaakt van onze missie.",
    ),
    ("about", "contribute", "Contribute on GitHub", "Bijdragen op GitHub"),
    ("about", "getInTouch", "Get in Touch", "Neem Contact Op"),
    ("contact", "title", "Get in Touch", "Neem Contact Op"),
    (
        "contact",
        "intro",
        "Have questions, suggestions, or want to contribute? We'd love to hear from you.",
        "Vragen, suggesties of wil je bijdragen? We horen graag van je.",
    ),
    ("contact", "generalTitle", "General Inquiries", "Algemene Vragen"),
    (
        "contact",
        "generalText",
        "Questions about Keypoint, partnerships, or media inquiries.",
        "Vragen over Keypoint, samenwerkingen of persvragen.",
    ),
    ("contact", "contributingTitle", "Contributing", "Bijdragen"),
    (
        "contact",
        "contributingText",
        "Want to help improve Keypoint? Check out our open-source projects.",
        "Wil je Keypoint helpen verbeteren? Bekijk onze open-source projecten.",
    ),
    ("contact", "githubLink", "View on GitHub", "Bekijk op GitHub"),
    ("contact", "feedbackTitle", "Feedback & Suggestions", "Feedback & Suggesties"),
    (
        "contact",
        "feedbackText",
        "Share your thoughts or suggest new article topics.",
        "Deel je mening of stel nieuwe onderwerpen voor.",
    ),
    ("contact", "twitterLink", "Follow us on Twitter", "Volg ons op Twitter"),
    ("contact", "careersTitle", "Careers", "Vacatures"),
    (
        "contact",
        "careersText",
        "Interested in joining our team? Check out open positions.",
        "Interesse om ons team te versterken? Bekijk de openstaande vacatures.",
    ),
    ("contact", "linkedinLink", "LinkedIn Page", "LinkedIn-pagina"),
    (
        "contact",
        "responseTime",
        "We typically respond within 1-2 business days.",
        "We reageren doorgaans binnen 1-2 werkdagen.",
    ),
];

fn pick<T: Copy>(pair: [T; 2], locale: Locale) -> T {
    match locale {
        Locale::En => pair[0],
        Locale::Nl => pair[1],
    }
}

/// Starter messages for `locale`: a small catalog plus every UI string.
#[must_use]
pub fn messages(locale: Locale) -> Messages {
    let articles: IndexMap<String, RawArticle> = SAMPLE_ARTICLES
        .iter()
        .map(|sample| {
            let entry = RawArticle::new(
                pick(sample.title, locale),
                pick(sample.description, locale),
                pick(sample.category, locale),
            )
            .with_keywords(pick(sample.keywords, locale).iter().copied());
            (sample.slug.to_string(), entry)
        })
        .collect();

    let mut messages = Messages::with_articles(articles);
    for (namespace, key, en, nl) in UI_TEXT {
        messages.set_text(namespace, key, pick([*en, *nl], locale));
    }
    messages
}

/// Default stylesheet served from `/assets/style.css`.
pub const STYLESHEET: &str = r#":root {
  --primary: #2563eb;
  --text: #111827;
  --muted: #4b5563;
  --surface: #f9fafb;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
  color: var(--text);
  background: var(--surface);
}

.container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
.site-header, .site-footer { background: #fff; border-bottom: 1px solid #e5e7eb; }
.site-header nav { display: flex; gap: 1.5rem; align-items: center; padding: 1rem 0; }
.site-header a { color: var(--muted); text-decoration: none; }
.site-header a.active { color: var(--primary); font-weight: 600; }
.hero { background: var(--primary); color: #fff; padding: 4rem 0; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 1rem; padding: 1.5rem; }
.card.featured { border: 2px solid var(--primary); }
.badge { display: inline-block; padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; }
.badge-beginner { background: #dcfce7; color: #166534; }
.badge-intermediate { background: #dbeafe; color: #1e40af; }
.badge-advanced { background: #f3e8ff; color: #6b21a8; }
.bg-gray-100 { background: #f3f4f6; }
.text-gray-800 { color: #1f2937; }
.keyword { color: var(--muted); font-size: 0.75rem; margin-right: 0.5rem; }
.filters a { margin-right: 0.75rem; }
.filters a.active { font-weight: 700; }
.article-body { background: #fff; padding: 2rem; border-radius: 1rem; }
"#;

#[cfg(test)]
mod tests {
    use keypoint_core::Category;

    use super::*;

    #[test]
    fn every_locale_gets_the_same_slugs() {
        let english = messages(Locale::En);
        let dutch = messages(Locale::Nl);
        assert!(english.articles().keys().eq(dutch.articles().keys()));
    }

    #[test]
    fn dutch_catalog_uses_its_own_advanced_label() {
        let dutch = messages(Locale::Nl);
        assert_eq!(
            dutch.articles()["browser-fingerprinting"].category,
            Category::Gevorderd
        );
        assert_eq!(dutch.text("nav", "articles"), Some("Artikelen"));
    }
}
