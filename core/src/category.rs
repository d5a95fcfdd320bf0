//! Article categories and the levels they map to.

use core::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Difficulty category of an article.
///
/// The named variants are the fixed vocabulary used by the catalogs. `Gevorderd`
/// is the Dutch catalog's own label and is kept distinct from `Advanced`; use
/// [`Category::level`] when the two need to be treated alike.
///
/// Any other value parses into [`Category::Other`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// `Beginner`
    Beginner,
    /// `Intermediate`
    Intermediate,
    /// `Advanced`
    Advanced,
    /// `Expert`
    Expert,
    /// `Gevorderd`, the Dutch catalog's advanced label
    Gevorderd,
    /// A label outside the fixed vocabulary, kept verbatim
    Other(String),
}

/// Locale-independent difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fundamentals
    Beginner,
    /// Deeper understanding
    Intermediate,
    /// Advanced techniques
    Advanced,
    /// Expert material
    Expert,
}

/// Icon and badge class a category is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Icon name
    pub icon: &'static str,
    /// CSS class of the badge
    pub badge: &'static str,
}

impl CategoryStyle {
    /// Style used for categories outside the fixed vocabulary.
    pub const FALLBACK: Self = Self {
        icon: "shield",
        badge: "badge bg-gray-100 text-gray-800",
    };
}

impl Category {
    /// Every named category, in the order the filter bar lists them.
    pub const NAMED: [Self; 5] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
        Self::Gevorderd,
    ];

    /// The label as written in the catalog.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Gevorderd => "Gevorderd",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Whether the label is part of the fixed vocabulary.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Case-insensitive comparison of the label against a filter token.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        self.label().to_lowercase() == token.to_lowercase()
    }

    /// Normalize onto the shared level scale.
    ///
    /// This is the only place `Gevorderd` and `Advanced` meet. Filtering never
    /// goes through it.
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        match self {
            Self::Beginner => Some(Level::Beginner),
            Self::Intermediate => Some(Level::Intermediate),
            Self::Advanced | Self::Gevorderd => Some(Level::Advanced),
            Self::Expert => Some(Level::Expert),
            Self::Other(_) => None,
        }
    }

    /// Icon and badge for presentation, falling back for unknown labels.
    #[must_use]
    pub const fn style(&self) -> CategoryStyle {
        match self {
            Self::Beginner => CategoryStyle {
                icon: "lock",
                badge: "badge-beginner",
            },
            Self::Gevorderd => CategoryStyle {
                icon: "lock",
                badge: "badge-intermediate",
            },
            Self::Intermediate => CategoryStyle {
                icon: "shield",
                badge: "badge-intermediate",
            },
            Self::Advanced | Self::Expert => CategoryStyle {
                icon: "cpu",
                badge: "badge-advanced",
            },
            Self::Other(_) => CategoryStyle::FALLBACK,
        }
    }
}

impl Level {
    /// Every level, easiest first.
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// The filter token linking to this level.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "Beginner" => Self::Beginner,
            "Intermediate" => Self::Intermediate,
            "Advanced" => Self::Advanced,
            "Expert" => Self::Expert,
            "Gevorderd" => Self::Gevorderd,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from(label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_labels_round_trip() {
        for category in Category::NAMED {
            assert_eq!(Category::from(category.label()), category);
        }
    }

    #[test]
    fn unknown_label_is_kept() {
        let category = Category::from("Wizard");
        assert_eq!(category, Category::Other("Wizard".into()));
        assert_eq!(category.label(), "Wizard");
        assert!(!category.is_named());
        assert_eq!(category.style(), CategoryStyle::FALLBACK);
        assert_eq!(category.level(), None);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(Category::from("beginner"), Category::Other("beginner".into()));
    }

    #[test]
    fn token_match_ignores_case() {
        assert!(Category::Beginner.matches_token("beginner"));
        assert!(Category::Beginner.matches_token("BEGINNER"));
        assert!(!Category::Beginner.matches_token("begin"));
        assert!(Category::Other("Wizard".into()).matches_token("wizard"));
    }

    #[test]
    fn gevorderd_is_not_advanced() {
        assert_ne!(Category::Gevorderd, Category::Advanced);
        assert!(!Category::Gevorderd.matches_token("advanced"));
        assert_eq!(Category::Gevorderd.level(), Category::Advanced.level());
    }

    #[test]
    fn serde_uses_the_label() {
        let json = serde_json::to_string(&Category::Expert).unwrap();
        assert_eq!(json, "\"Expert\"");
        let parsed: Category = serde_json::from_str("\"Gevorderd\"").unwrap();
        assert_eq!(parsed, Category::Gevorderd);
    }
}
