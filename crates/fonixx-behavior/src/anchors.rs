//! Smooth scrolling for in-page `#fragment` links.

use fonixx_common::{DomCommand, Page, ScrollBehavior, ScrollBlock, Target};
use fonixx_config::schema::ScrollConfig;

/// The element id an in-page `href` points at.
///
/// `None` for anything that is not `#<id>`.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorScroller {
    behavior: ScrollBehavior,
    block: ScrollBlock,
}

impl AnchorScroller {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            behavior: config.behavior,
            block: config.block,
        }
    }

    /// Handle a click on an anchor. The page has already suppressed the
    /// default jump; this scrolls only when the target exists.
    pub fn on_click(&self, page: &mut dyn Page, href: &str) -> bool {
        let Some(id) = fragment(href) else {
            return false;
        };
        if !page.has_element(id) {
            return false;
        }
        page.apply(DomCommand::ScrollIntoView {
            target: Target::id(id),
            behavior: self.behavior,
            block: self.block,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn fragment_strips_hash() {
        assert_eq!(fragment("#contact"), Some("contact"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("about.html"), None);
        assert_eq!(fragment("about.html#team"), None);
    }

    #[test]
    fn scrolls_existing_target_smoothly() {
        let mut page = MemoryPage::new().with_element("contact");
        let scroller = AnchorScroller::default();

        assert!(scroller.on_click(&mut page, "#contact"));
        assert_eq!(page.scrolls(), &[Target::id("contact")]);
        assert_eq!(
            page.commands()[0],
            DomCommand::ScrollIntoView {
                target: Target::id("contact"),
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Start,
            }
        );
    }

    #[test]
    fn missing_target_does_nothing() {
        let mut page = MemoryPage::new();
        let scroller = AnchorScroller::default();

        assert!(!scroller.on_click(&mut page, "#nowhere"));
        assert!(!scroller.on_click(&mut page, "#"));
        assert!(page.commands().is_empty());
    }

    #[test]
    fn configured_behavior_is_used() {
        let mut page = MemoryPage::new().with_element("top");
        let scroller = AnchorScroller::new(&ScrollConfig {
            behavior: ScrollBehavior::Instant,
            block: ScrollBlock::Center,
        });

        scroller.on_click(&mut page, "#top");
        assert!(matches!(
            page.commands()[0],
            DomCommand::ScrollIntoView {
                behavior: ScrollBehavior::Instant,
                block: ScrollBlock::Center,
                ..
            }
        ));
    }
}
