//! Shared page chrome: document shell, navigation bar, footer, tag chips.

use crate::metadata::PageMetadata;
use clay_blog_core::nav::{MenuState, NavLink, Navigation};
use clay_blog_core::{BlockKind, ContentBlock, Site};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const ACTIVE_LINK: &str = "text-blue-600";
const INACTIVE_LINK: &str = "text-gray-700";

/// Utility classes used by the markup. A trimmed-down subset of the
/// Tailwind names so class lists read the same as the design.
const STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", "Noto Sans TC", sans-serif; line-height: 1.6; color: #111827; background: #fff; }
a { color: inherit; text-decoration: none; }
[hidden] { display: none !important; }
.hidden { display: none; }
.container { max-width: 72rem; margin: 0 auto; padding: 1rem; }
.site-header { border-bottom: 1px solid #e5e7eb; }
.site-nav { display: flex; align-items: center; justify-content: space-between; }
.logo { font-size: 1.25rem; font-weight: 700; color: #1f2937; }
.nav-links a { font-weight: 500; margin-left: 2rem; }
.mobile-menu { padding-top: 1rem; margin-top: 1rem; border-top: 1px solid #f3f4f6; }
.mobile-menu nav { display: flex; flex-direction: column; gap: 1rem; }
.menu-button { padding: 0.5rem; }
.text-blue-600 { color: #2563eb; }
.text-gray-700 { color: #374151; }
.text-muted { color: #6b7280; font-size: 0.875rem; }
.tag { display: inline-block; background: #f3f4f6; color: #374151; font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 0.25rem; margin-right: 0.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1.5rem; }
.grid { display: grid; gap: 1.5rem; }
.btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-weight: 500; border: 1px solid #d1d5db; }
.btn-primary { background: #2563eb; color: #fff; border-color: #2563eb; }
h1 { font-size: 2rem; font-weight: 700; margin: 2rem 0 1rem; }
h2 { font-size: 1.5rem; font-weight: 700; margin: 2rem 0 1rem; }
p { margin: 1rem 0; }
pre { background: #f3f4f6; padding: 1rem; border-radius: 0.25rem; margin: 1rem 0; overflow-x: auto; font-family: ui-monospace, monospace; font-size: 0.875rem; }
footer { border-top: 1px solid #e5e7eb; margin-top: 2rem; text-align: center; font-size: 0.875rem; color: #6b7280; }
@media (min-width: 768px) {
    .md\:flex { display: flex; }
    .md\:hidden { display: none; }
    .grid { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); }
}
"#;

/// Mirrors `MenuState` in the browser: the button toggles, any mobile
/// link closes.
const MENU_SCRIPT: &str = r#"<script>
    (() => {
        const toggle = document.getElementById('menu-toggle');
        const menu = document.getElementById('mobile-menu');
        if (!toggle || !menu) return;
        const setOpen = (open) => {
            menu.hidden = !open;
            toggle.setAttribute('aria-expanded', String(open));
        };
        toggle.addEventListener('click', (event) => {
            event.preventDefault();
            setOpen(menu.hidden);
        });
        menu.querySelectorAll('[data-menu-link]').forEach((link) => {
            link.addEventListener('click', () => setOpen(false));
        });
    })();
    </script>"#;

const RELOAD_SCRIPT: &str = r#"<script>
    // Hot reload via Server-Sent Events
    const eventSource = new EventSource('/_reload');
    eventSource.onmessage = () => {
        console.log('Reloading...');
        location.reload();
    };
    eventSource.onerror = () => {
        console.log('Preview server disconnected');
        eventSource.close();
    };
    </script>"#;

/// Wrap a page body in the full HTML document
pub fn document(
    site: &Site,
    metadata: &PageMetadata,
    nav: &Navigation<'_>,
    body: &str,
    year: i32,
    live_reload: bool,
) -> String {
    let reload_script = if live_reload { RELOAD_SCRIPT } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{head}
    <style>{style}</style>
</head>
<body>
{navigation}
    <main class="container">
{body}
    </main>
    <footer class="container">
        © {year} {brand}. All rights reserved.
    </footer>
    {menu_script}
    {reload_script}
</body>
</html>
"#,
        lang = attr(&site.profile.lang),
        head = metadata.head_tags(),
        style = STYLESHEET,
        navigation = navigation(&site.profile.name, nav),
        body = body,
        year = year,
        brand = text(&site.profile.brand),
        menu_script = MENU_SCRIPT,
        reload_script = reload_script,
    )
}

/// Header with the desktop link row, the menu button and the mobile overlay.
///
/// Both link sets come from the same `Navigation`, so they always list the
/// same entries in the same order.
pub fn navigation(site_name: &str, nav: &Navigation<'_>) -> String {
    let menu = nav.menu();
    let desktop: String = nav
        .desktop_links()
        .iter()
        .map(|link| nav_link(link, false))
        .collect();
    let mobile: String = nav
        .mobile_links()
        .iter()
        .map(|link| nav_link(link, true))
        .collect();
    let (open_icon, close_icon) = match menu {
        MenuState::Open => ("opacity-0", "opacity-100"),
        MenuState::Closed => ("opacity-100", "opacity-0"),
    };
    let hidden = if menu.is_open() { "" } else { " hidden" };

    format!(
        r#"    <header class="site-header">
        <div class="container">
            <nav class="site-nav">
                <a href="/" class="logo">{name}</a>
                <div data-testid="desktop-nav" class="nav-links hidden md:flex">{desktop}</div>
                <a id="menu-toggle" href="{toggle}" role="button" class="menu-button md:hidden" aria-label="選單" aria-expanded="{expanded}" aria-controls="mobile-menu">
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" class="{open_icon}"><path d="M4 6H20M4 12H20M4 18H20" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" class="{close_icon}"><path d="M6 18L18 6M6 6L18 18" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>
                </a>
            </nav>
            <div id="mobile-menu" data-testid="mobile-nav" class="mobile-menu md:hidden"{hidden}>
                <nav>{mobile}</nav>
            </div>
        </div>
    </header>"#,
        name = text(site_name),
        desktop = desktop,
        toggle = attr(&nav.toggle_href()),
        expanded = menu.is_open(),
        open_icon = open_icon,
        close_icon = close_icon,
        hidden = hidden,
        mobile = mobile,
    )
}

fn nav_link(link: &NavLink<'_>, mobile: bool) -> String {
    let color = if link.active { ACTIVE_LINK } else { INACTIVE_LINK };
    let current = if link.active {
        r#" aria-current="page""#
    } else {
        ""
    };
    let marker = if mobile { " data-menu-link" } else { "" };

    format!(
        r#"<a href="{}" class="{}"{}{}>{}</a>"#,
        attr(link.path),
        color,
        current,
        marker,
        text(link.label)
    )
}

/// Row of tag chips
pub fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let chips: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, text(tag)))
        .collect();
    format!(r#"<div class="tags">{}</div>"#, chips)
}

/// Render classified article blocks. `Skip` renders as nothing.
pub fn content_blocks(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| {
            let body = text(&block.text);
            match block.kind {
                BlockKind::Heading1 => Some(format!("<h1>{}</h1>", body)),
                BlockKind::Heading2 => Some(format!("<h2>{}</h2>", body)),
                BlockKind::CodeFence => Some(format!("<pre>{}</pre>", body)),
                BlockKind::Paragraph => Some(format!("<p>{}</p>", body)),
                BlockKind::Skip => None,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
