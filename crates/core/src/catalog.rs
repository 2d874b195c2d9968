use crate::error::{Error, Result};
use crate::types::Article;

/// Number of articles shown on the home page
pub const RECENT_ARTICLE_COUNT: usize = 3;

/// Immutable, ordered list of articles
///
/// Declaration order is kept everywhere: listings and the recent-articles
/// slice never re-sort by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Look up an article by exact slug
    pub fn find_by_slug(&self, slug: &str) -> Result<&Article> {
        self.articles
            .iter()
            .find(|article| article.slug == slug)
            .ok_or_else(|| Error::ArticleNotFound(slug.to_string()))
    }

    /// The first `count` articles in declaration order
    pub fn recent(&self, count: usize) -> &[Article] {
        &self.articles[..count.min(self.articles.len())]
    }

    /// Every slug, for static path enumeration
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|article| article.slug.as_str())
    }
}
