use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{RawQuery, State},
    http::{StatusCode, Uri},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use clay_blog_core::{MenuState, Site, load_site, parse_site_toml};
use clay_blog_generator::{PageStatus, RenderOptions, render_page};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    site: Arc<RwLock<Arc<Site>>>,
    reload_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        let (reload_tx, _) = broadcast::channel::<()>(100);
        Self {
            site: Arc::new(RwLock::new(Arc::new(site))),
            reload_tx,
        }
    }

    /// Snapshot of the current site; requests never hold the lock while rendering
    fn snapshot(&self) -> Arc<Site> {
        match self.site.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace(&self, site: Site) {
        let mut guard = match self.site.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(site);
    }
}

/// The `menu` value of a query string, only when it appears exactly once
fn menu_param(query: Option<&str>) -> Option<&str> {
    let mut values = query
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| match pair.split_once('=') {
            Some(("menu", value)) => Some(value),
            None if pair == "menu" => Some(""),
            _ => None,
        });
    let first = values.next()?;
    match values.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Start preview server with hot reload for local development.
///
/// This command:
/// - Loads site.toml (or the built-in sample content)
/// - Serves every page, including 404 pages with a 404 status
/// - Watches site.toml for changes and triggers hot reload
///
/// # Arguments
///
/// * `config` - Optional path to site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(config: Option<PathBuf>, port: u16) -> Result<()> {
    println!("📝 Starting preview server...");

    if let Some(path) = &config
        && !path.exists()
    {
        anyhow::bail!(
            "site.toml not found: {}\nRun 'clay-blog init <dir>' first",
            path.display()
        );
    }

    let site = load_site(config.as_deref()).context("Failed to load site configuration")?;

    println!("   ✓ Loaded: {}", site.profile.title);
    println!("   ✓ Articles: {}", site.articles.len());

    let state = AppState::new(site);
    let app = router(state.clone());

    // File watching only makes sense for a real config file
    if let Some(path) = config {
        let watcher_state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = watch_config(path, watcher_state).await {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/_reload", get(sse_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Re-parse site.toml and swap it in. On error the previous site stays live.
pub fn reload_site(state: &AppState, path: &Path) -> Result<()> {
    let site = parse_site_toml(path)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    state.replace(site);
    let _ = state.reload_tx.send(());
    Ok(())
}

/// Watch site.toml and trigger reload
async fn watch_config(path: PathBuf, state: AppState) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    // Editors often replace the file, so watch its directory
    let file_name = path
        .file_name()
        .context("Config path has no file name")?
        .to_os_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) => {
                if event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()))
                {
                    match reload_site(&state, &path) {
                        Ok(()) => println!("   📝 site.toml changed, reloading..."),
                        Err(e) => tracing::warn!("Keeping previous site: {:#}", e),
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Every other path renders a page
async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Response {
    let site = state.snapshot();
    let menu = MenuState::from_query(menu_param(query.as_deref()));
    let page = render_page(&site, uri.path(), menu, RenderOptions::new(true));

    match page.status {
        PageStatus::Ok => Html(page.html).into_response(),
        PageStatus::NotFound => (StatusCode::NOT_FOUND, Html(page.html)).into_response(),
    }
}
