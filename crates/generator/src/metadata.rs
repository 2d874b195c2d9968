//! Per-route `<head>` metadata.

use clay_blog_core::{Article, Site};
use html_escape::encode_double_quoted_attribute as attr;
use html_escape::encode_text as text;
use serde::Serialize;

pub const ARTICLE_NOT_FOUND_TITLE: &str = "404 - 文章未找到";
pub const ARTICLE_NOT_FOUND_DESCRIPTION: &str = "無法找到請求的文章";
pub const PAGE_NOT_FOUND_TITLE: &str = "404 - 頁面未找到";
pub const PAGE_NOT_FOUND_DESCRIPTION: &str = "無法找到請求的頁面";

const BLOG_TITLE: &str = "我的文章";
const BLOG_DESCRIPTION_SUFFIX: &str = "的技術文章、想法與心得分享";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: String,
    pub tags: Vec<String>,
}

impl PageMetadata {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            open_graph: None,
        }
    }

    /// Layout defaults, used by the home page
    pub fn home(site: &Site) -> Self {
        Self::new(&site.profile.title, &site.profile.description)
    }

    pub fn about(site: &Site) -> Self {
        Self::new(
            branded(site, &site.about.title),
            &site.about.description,
        )
    }

    pub fn blog(site: &Site) -> Self {
        Self::new(
            branded(site, BLOG_TITLE),
            format!("{}{}", site.profile.name, BLOG_DESCRIPTION_SUFFIX),
        )
    }

    pub fn article(site: &Site, article: &Article) -> Self {
        Self {
            title: branded(site, &article.title),
            description: article.description.clone(),
            open_graph: Some(OpenGraph {
                title: article.title.clone(),
                description: article.description.clone(),
                kind: "article".to_string(),
                published_time: article.iso_date(),
                tags: article.tags.clone(),
            }),
        }
    }

    pub fn article_not_found() -> Self {
        Self::new(ARTICLE_NOT_FOUND_TITLE, ARTICLE_NOT_FOUND_DESCRIPTION)
    }

    pub fn page_not_found() -> Self {
        Self::new(PAGE_NOT_FOUND_TITLE, PAGE_NOT_FOUND_DESCRIPTION)
    }

    /// `<title>` and `<meta>` tags for the document head
    pub fn head_tags(&self) -> String {
        let mut tags = vec![
            format!("    <title>{}</title>", text(&self.title)),
            meta_name("description", &self.description),
        ];

        if let Some(og) = &self.open_graph {
            tags.push(meta_property("og:title", &og.title));
            tags.push(meta_property("og:description", &og.description));
            tags.push(meta_property("og:type", &og.kind));
            tags.push(meta_property("article:published_time", &og.published_time));
            for tag in &og.tags {
                tags.push(meta_property("article:tag", tag));
            }
        }

        tags.join("\n")
    }
}

fn branded(site: &Site, title: &str) -> String {
    format!("{} | {}", title, site.profile.brand)
}

fn meta_name(name: &str, content: &str) -> String {
    format!(r#"    <meta name="{}" content="{}">"#, name, attr(content))
}

fn meta_property(property: &str, content: &str) -> String {
    format!(r#"    <meta property="{}" content="{}">"#, property, attr(content))
}
