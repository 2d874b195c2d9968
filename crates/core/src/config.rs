use crate::catalog::ArticleCatalog;
use crate::error::{Error, Result};
use crate::sample::sample_site;
use crate::types::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
    site: RawSite,
    #[serde(default)]
    nav: Vec<NavigationEntry>,
    home: HomePage,
    about: AboutPage,
    #[serde(default)]
    article: Vec<RawArticle>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawSite {
    name: String,
    title: String,
    description: String,
    lang: String,
    brand: String,
    #[serde(default)]
    renderer: RendererKind,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawArticle {
    slug: String,
    title: String,
    description: String,
    date: toml::Value, // Quoted string or native TOML date
    #[serde(default)]
    tags: Vec<String>,
    content: String,
}

fn article_date(slug: &str, value: &toml::Value) -> Result<NaiveDate> {
    let invalid =
        |detail: String| Error::ConfigParse(format!("Invalid date for article '{}': {}", slug, detail));

    match value {
        toml::Value::String(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| invalid(e.to_string()))
        }
        toml::Value::Datetime(dt) => match (dt.date, dt.time) {
            (Some(d), None) => NaiveDate::from_ymd_opt(d.year.into(), d.month.into(), d.day.into())
                .ok_or_else(|| invalid(format!("{} is out of range", dt))),
            _ => Err(invalid(format!("expected a date without time, found {}", dt))),
        },
        other => Err(invalid(format!("expected a date, found {}", other.type_str()))),
    }
}

/// Load the site from `path`, or the built-in sample content when `None`
pub fn load_site(path: Option<&Path>) -> Result<Site> {
    match path {
        Some(path) => parse_site_toml(path),
        None => Ok(sample_site()),
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let articles: Result<Vec<Article>> = raw
        .article
        .into_iter()
        .map(|a| {
            let date = article_date(&a.slug, &a.date)?;

            Ok(Article {
                slug: a.slug,
                title: a.title,
                description: a.description,
                date,
                tags: a.tags,
                content: a.content,
            })
        })
        .collect();

    let site = Site {
        profile: SiteProfile {
            name: raw.site.name,
            title: raw.site.title,
            description: raw.site.description,
            lang: raw.site.lang,
            brand: raw.site.brand,
        },
        nav: raw.nav,
        home: raw.home,
        about: raw.about,
        articles: ArticleCatalog::new(articles?),
        renderer: raw.site.renderer,
    };

    validate_site(&site)?;
    Ok(site)
}

/// Serialize a site back into site.toml form
pub fn to_site_toml(site: &Site) -> Result<String> {
    let raw = RawConfig {
        site: RawSite {
            name: site.profile.name.clone(),
            title: site.profile.title.clone(),
            description: site.profile.description.clone(),
            lang: site.profile.lang.clone(),
            brand: site.profile.brand.clone(),
            renderer: site.renderer,
        },
        nav: site.nav.clone(),
        home: site.home.clone(),
        about: site.about.clone(),
        article: site
            .articles
            .all()
            .iter()
            .map(|a| RawArticle {
                slug: a.slug.clone(),
                title: a.title.clone(),
                description: a.description.clone(),
                date: toml::Value::String(a.iso_date()),
                tags: a.tags.clone(),
                content: a.content.clone(),
            })
            .collect(),
    };

    toml::to_string_pretty(&raw).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Check the invariants renderers rely on.
///
/// - navigation paths start with `/` and are unique
/// - article slugs are non-empty, URL-safe (ASCII alphanumerics and `-`)
///   and unique
pub fn validate_site(site: &Site) -> Result<()> {
    let mut paths = HashSet::new();
    for entry in &site.nav {
        if !entry.path.starts_with('/') {
            return Err(Error::ConfigParse(format!(
                "Navigation path must start with '/': '{}'",
                entry.path
            )));
        }
        if !paths.insert(entry.path.as_str()) {
            return Err(Error::ConfigParse(format!(
                "Duplicate navigation path: '{}'",
                entry.path
            )));
        }
    }

    let mut slugs = HashSet::new();
    for article in site.articles.all() {
        validate_slug(&article.slug)?;
        if !slugs.insert(article.slug.as_str()) {
            return Err(Error::ConfigParse(format!(
                "Duplicate article slug: '{}'",
                article.slug
            )));
        }
    }

    Ok(())
}

fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::ConfigParse("Empty article slug".to_string()));
    }

    if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(Error::ConfigParse(format!(
            "Article slug '{}' may only contain ASCII letters, digits and '-'",
            slug
        )));
    }

    Ok(())
}
