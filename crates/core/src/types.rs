use crate::catalog::ArticleCatalog;
use crate::content::{CommonMarkClassifier, LineClassifier, TextToBlocks};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Complete site configuration
///
/// Built once (from the sample data or a `site.toml`) and then only read.
/// Renderers take it by reference so a different data source can be swapped
/// in without touching call sites.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub profile: SiteProfile,
    pub nav: Vec<NavigationEntry>,
    pub home: HomePage,
    pub about: AboutPage,
    pub articles: ArticleCatalog,
    pub renderer: RendererKind,
}

/// Site identity and layout defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Short name shown as the navigation logo
    pub name: String,
    /// Default `<title>` used by pages without their own metadata
    pub title: String,
    pub description: String,
    /// Value of the `<html lang>` attribute
    pub lang: String,
    /// Suffix for page titles and the footer copyright line
    pub brand: String,
}

/// One link in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub path: String,
    pub label: String,
}

impl NavigationEntry {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Home page hero and skills grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub headline: String,
    /// Trailing part of the headline rendered in the accent color
    pub highlight: String,
    pub tagline: String,
    pub skills: Vec<String>,
}

/// Static biography page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPage {
    pub title: String,
    pub description: String,
    pub intro: Vec<String>,
    pub skills: Vec<String>,
    pub contact_intro: String,
    #[serde(default, rename = "contact")]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub text: String,
    pub href: String,
}

impl Contact {
    /// Whether the link leaves the site (opens in a new tab)
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    /// Raw article body, classified into blocks at render time
    pub content: String,
}

impl Article {
    /// Publication date as an ISO 8601 calendar date
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Site-relative URL of the article page
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Which text-to-blocks strategy renders article bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Line-by-line prefix classifier
    #[default]
    Lines,
    /// CommonMark parser
    CommonMark,
}

impl RendererKind {
    pub fn classifier(self) -> Box<dyn TextToBlocks + Send + Sync> {
        match self {
            RendererKind::Lines => Box::new(LineClassifier),
            RendererKind::CommonMark => Box::new(CommonMarkClassifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_iso_date_and_href() {
        let article = Article {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            tags: vec![],
            content: String::new(),
        };
        assert_eq!(article.iso_date(), "2025-03-02");
        assert_eq!(article.href(), "/blog/hello");
    }

    #[test]
    fn test_contact_is_external() {
        let mail = Contact {
            label: "Email".to_string(),
            text: "example@clay.blog".to_string(),
            href: "mailto:example@clay.blog".to_string(),
        };
        let github = Contact {
            label: "GitHub".to_string(),
            text: "github.com/clay".to_string(),
            href: "https://github.com/clay".to_string(),
        };
        assert!(!mail.is_external());
        assert!(github.is_external());
    }

    #[test]
    fn test_renderer_kind_default_is_lines() {
        assert_eq!(RendererKind::default(), RendererKind::Lines);
    }
}
