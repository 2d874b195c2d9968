// Static site generation for the blog: routing, metadata and HTML pages.

pub mod components;
pub mod metadata;
pub mod pages;
pub mod route;

use chrono::Datelike;
use clay_blog_core::{MenuState, Navigation, Site};
use serde::Serialize;

pub use metadata::{OpenGraph, PageMetadata};
pub use route::Route;

/// Path of the fallback page written by static builds
pub const NOT_FOUND_FILE: &str = "404.html";

/// Options shared by every rendered page
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Year printed in the footer
    pub year: i32,
    /// Whether this is for preview mode (adds SSE reload)
    pub live_reload: bool,
}

impl RenderOptions {
    pub fn new(live_reload: bool) -> Self {
        Self {
            year: chrono::Local::now().year(),
            live_reload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Ok,
    NotFound,
}

/// One fully rendered HTML document
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: PageStatus,
    pub metadata: PageMetadata,
    pub html: String,
}

/// Render the page for `path`.
///
/// Unknown paths and unknown article slugs produce a `NotFound` page with
/// the matching not-found metadata; this never fails.
pub fn render_page(site: &Site, path: &str, menu: MenuState, options: RenderOptions) -> RenderedPage {
    let route = Route::resolve(path);
    tracing::debug!(path, ?route, ?menu, "rendering page");

    let (status, metadata, body) = match route {
        Route::Home => (PageStatus::Ok, PageMetadata::home(site), pages::home(site)),
        Route::About => (PageStatus::Ok, PageMetadata::about(site), pages::about(site)),
        Route::Blog => (PageStatus::Ok, PageMetadata::blog(site), pages::blog(site)),
        Route::Article(slug) => match site.articles.find_by_slug(slug) {
            Ok(article) => (
                PageStatus::Ok,
                PageMetadata::article(site, article),
                pages::article(site, article),
            ),
            Err(err) => {
                tracing::debug!(%err, "article lookup failed");
                (
                    PageStatus::NotFound,
                    PageMetadata::article_not_found(),
                    pages::article_not_found(),
                )
            }
        },
        Route::NotFound => (
            PageStatus::NotFound,
            PageMetadata::page_not_found(),
            pages::page_not_found(),
        ),
    };

    let nav = Navigation::new(&site.nav, path, menu);
    let html = components::document(
        site,
        &metadata,
        &nav,
        &body,
        options.year,
        options.live_reload,
    );

    RenderedPage {
        status,
        metadata,
        html,
    }
}

/// Every path that is pre-rendered by a static build, in a stable order
pub fn static_paths(site: &Site) -> Vec<String> {
    let mut paths = vec!["/".to_string(), "/about".to_string(), "/blog".to_string()];
    paths.extend(site.articles.slugs().map(|slug| format!("/blog/{}", slug)));
    paths
}

/// One pre-rendered page of a static build
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPage {
    /// Route path, e.g. `/blog/my-post`
    pub path: String,
    /// File relative to the output directory, e.g. `blog/my-post/index.html`
    pub file: String,
    pub status: PageStatus,
    pub metadata: PageMetadata,
    #[serde(skip)]
    pub html: String,
}

pub struct GeneratedSite {
    pub pages: Vec<GeneratedPage>,
}

impl GeneratedSite {
    pub fn page(&self, path: &str) -> Option<&GeneratedPage> {
        self.pages.iter().find(|page| page.path == path)
    }
}

/// Pre-render every static path plus the fallback not-found page
pub fn generate_site(site: &Site, options: RenderOptions) -> GeneratedSite {
    let mut pages: Vec<GeneratedPage> = static_paths(site)
        .into_iter()
        .map(|path| {
            let rendered = render_page(site, &path, MenuState::Closed, options);
            GeneratedPage {
                file: route::output_file(&path),
                path,
                status: rendered.status,
                metadata: rendered.metadata,
                html: rendered.html,
            }
        })
        .collect();

    let not_found = render_page(site, "/404", MenuState::Closed, options);
    pages.push(GeneratedPage {
        path: "/404".to_string(),
        file: NOT_FOUND_FILE.to_string(),
        status: not_found.status,
        metadata: not_found.metadata,
        html: not_found.html,
    });

    tracing::info!(pages = pages.len(), "generated site");
    GeneratedSite { pages }
}
