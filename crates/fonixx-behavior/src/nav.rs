//! Navbar scroll state, the mobile menu, and the active-page link.

use fonixx_common::{DomCommand, Page, PageSnapshot, Target};
use fonixx_config::schema::NavConfig;
use tracing::debug;

const SCROLLED: &str = "scrolled";
const ACTIVE: &str = "active";

/// The file name the current page is served as.
///
/// Last path segment, or `default_page` when the path ends in `/`.
pub fn current_page<'a>(path: &'a str, default_page: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => default_page,
    }
}

#[derive(Debug)]
pub struct NavBar {
    config: NavConfig,
    scrolled: bool,
    menu_open: bool,
    has_toggle: bool,
}

impl NavBar {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            scrolled: false,
            menu_open: false,
            has_toggle: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Wire up against a freshly loaded page and mark the link for the
    /// current page. Returns the matched `href`, if any.
    pub fn attach(&mut self, page: &mut dyn Page, snapshot: &PageSnapshot) -> Option<String> {
        // A new document starts at the top with the menu closed.
        self.has_toggle = snapshot.has_menu_toggle;
        self.menu_open = false;
        self.scrolled = false;

        let current = current_page(&snapshot.path, &self.config.default_page);
        let matched: Vec<&String> = snapshot
            .nav_links
            .iter()
            .filter(|href| href.as_str() == current)
            .collect();

        // Duplicate hrefs share one selector.
        if let Some(href) = matched.first() {
            page.apply(DomCommand::add_class(self.link_target(href), ACTIVE));
        }
        debug!(current, matched = matched.len(), "nav attached");
        matched.first().map(|h| (*h).clone())
    }

    /// Returns `true` if the navbar's `scrolled` state changed.
    pub fn on_scroll(&mut self, page: &mut dyn Page, y: f64) -> bool {
        let scrolled = y > self.config.scroll_threshold;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        let navbar = Target::selector(self.config.navbar_selector.clone());
        page.apply(if scrolled {
            DomCommand::add_class(navbar, SCROLLED)
        } else {
            DomCommand::remove_class(navbar, SCROLLED)
        });
        true
    }

    /// Flip the mobile menu. Returns whether it is now open.
    pub fn toggle_menu(&mut self, page: &mut dyn Page) -> bool {
        if !self.has_toggle {
            debug!("menu toggle without a toggle button");
            return self.menu_open;
        }
        self.set_menu(page, !self.menu_open);
        self.menu_open
    }

    /// A nav link was clicked; the mobile menu closes.
    pub fn link_clicked(&mut self, page: &mut dyn Page) -> bool {
        if !self.has_toggle || !self.menu_open {
            return false;
        }
        self.set_menu(page, false);
        true
    }

    fn set_menu(&mut self, page: &mut dyn Page, open: bool) {
        self.menu_open = open;
        let menu = Target::selector(self.config.menu_selector.clone());
        let (class_cmd, icon) = if open {
            (DomCommand::add_class(menu, ACTIVE), &self.config.open_icon)
        } else {
            (DomCommand::remove_class(menu, ACTIVE), &self.config.closed_icon)
        };
        page.apply(class_cmd);
        page.apply(DomCommand::SetText {
            target: Target::selector(format!("{} i", self.config.toggle_selector)),
            text: icon.clone(),
        });
    }

    fn link_target(&self, href: &str) -> Target {
        let escaped = href.replace('\\', "\\\\").replace('"', "\\\"");
        Target::selector(format!("{} a[href=\"{}\"]", self.config.menu_selector, escaped))
    }
}
