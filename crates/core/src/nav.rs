//! Navigation bar state: active-link resolution and the mobile menu toggle.

use crate::types::NavigationEntry;

/// Whether a navigation entry is the current page.
///
/// Exact string equality only: `/blog/my-post` does not activate `/blog`,
/// and `/about/` does not activate `/about`.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
}

/// Open/closed state of the mobile menu overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn close() -> MenuState {
        MenuState::Closed
    }

    /// A navigation link was followed; the overlay never survives it.
    pub fn link_activated(self) -> MenuState {
        MenuState::close()
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Parse the `menu` query value used by the preview server
    pub fn from_query(value: Option<&str>) -> MenuState {
        match value {
            Some("open") => MenuState::Open,
            _ => MenuState::Closed,
        }
    }
}

/// A navigation link resolved against the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink<'a> {
    pub path: &'a str,
    pub label: &'a str,
    pub active: bool,
}

/// Navigation bar for one rendered page
#[derive(Debug, Clone)]
pub struct Navigation<'a> {
    entries: &'a [NavigationEntry],
    current_path: &'a str,
    menu: MenuState,
}

impl<'a> Navigation<'a> {
    pub fn new(entries: &'a [NavigationEntry], current_path: &'a str, menu: MenuState) -> Self {
        Self {
            entries,
            current_path,
            menu,
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Href of the menu button: the same page with the toggled menu state
    pub fn toggle_href(&self) -> String {
        match self.menu.toggle() {
            MenuState::Open => format!("{}?menu=open", self.current_path),
            MenuState::Closed => self.current_path.to_string(),
        }
    }

    /// Links shown at wide viewports
    pub fn desktop_links(&self) -> Vec<NavLink<'a>> {
        self.links()
    }

    /// Links shown in the overlay while the menu is open
    pub fn mobile_links(&self) -> Vec<NavLink<'a>> {
        self.links()
    }

    fn links(&self) -> Vec<NavLink<'a>> {
        self.entries
            .iter()
            .map(|entry| NavLink {
                path: &entry.path,
                label: &entry.label,
                active: is_active(self.current_path, &entry.path),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<NavigationEntry> {
        vec![
            NavigationEntry::new("/about", "關於我"),
            NavigationEntry::new("/blog", "我的文章"),
        ]
    }

    #[test]
    fn test_is_active_exact_match_only() {
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about/team", "/about"));
        assert!(!is_active("/", "/about"));
        assert!(!is_active("/blog/my-post", "/blog"));
        assert!(!is_active("/about/", "/about"));
    }

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_menu_toggle_alternates() {
        let first = MenuState::default().toggle();
        let second = first.toggle();
        let third = second.toggle();
        assert_eq!(first, MenuState::Open);
        assert_eq!(second, MenuState::Closed);
        assert_eq!(third, MenuState::Open);
    }

    #[test]
    fn test_link_activated_always_closes() {
        assert_eq!(MenuState::Open.link_activated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.link_activated(), MenuState::Closed);
        assert_eq!(MenuState::close(), MenuState::Closed);
    }

    #[test]
    fn test_menu_from_query() {
        assert_eq!(MenuState::from_query(Some("open")), MenuState::Open);
        assert_eq!(MenuState::from_query(Some("closed")), MenuState::Closed);
        assert_eq!(MenuState::from_query(Some("OPEN")), MenuState::Closed);
        assert_eq!(MenuState::from_query(None), MenuState::Closed);
    }

    #[test]
    fn test_desktop_and_mobile_links_match() {
        let entries = entries();
        for path in ["/", "/about", "/blog", "/blog/some-post"] {
            for menu in [MenuState::Open, MenuState::Closed] {
                let nav = Navigation::new(&entries, path, menu);
                assert_eq!(nav.desktop_links(), nav.mobile_links());
                assert_eq!(nav.desktop_links().len(), entries.len());
            }
        }
    }

    #[test]
    fn test_links_preserve_configured_order() {
        let entries = entries();
        let nav = Navigation::new(&entries, "/", MenuState::Closed);
        let paths: Vec<&str> = nav.desktop_links().iter().map(|l| l.path).collect();
        assert_eq!(paths, vec!["/about", "/blog"]);
    }

    #[test]
    fn test_only_current_entry_is_active() {
        let entries = entries();
        let nav = Navigation::new(&entries, "/about", MenuState::Closed);
        let links = nav.desktop_links();
        assert!(links[0].active);
        assert!(!links[1].active);
        assert_eq!(links[0].label, "關於我");

        let home = Navigation::new(&entries, "/", MenuState::Closed);
        assert!(home.desktop_links().iter().all(|l| !l.active));
    }

    #[test]
    fn test_article_page_does_not_activate_blog() {
        let entries = entries();
        let nav = Navigation::new(&entries, "/blog/getting-started-with-nextjs", MenuState::Closed);
        assert!(nav.desktop_links().iter().all(|l| !l.active));
        assert!(nav.mobile_links().iter().all(|l| !l.active));
    }

    #[test]
    fn test_toggle_href() {
        let entries = entries();
        let closed = Navigation::new(&entries, "/blog", MenuState::Closed);
        assert_eq!(closed.toggle_href(), "/blog?menu=open");
        let open = Navigation::new(&entries, "/blog", MenuState::Open);
        assert_eq!(open.toggle_href(), "/blog");
    }
}
