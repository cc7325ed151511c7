//! Events reported by the page.
//!
//! The wire shape matches the IPC envelope the page bridge posts:
//! `{"kind": "<event>", "payload": {...}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::PageError;

/// What the page knows about itself once the document is ready.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    /// `location.pathname` of the loaded document.
    pub path: String,
    /// Every `id` attribute present in the document.
    pub element_ids: Vec<String>,
    /// Ids the bridge assigned to elements matching the reveal selectors.
    pub reveal_targets: Vec<String>,
    /// `href` attribute of each link in the nav menu, in document order.
    pub nav_links: Vec<String>,
    /// Whether the page has a mobile menu toggle.
    pub has_menu_toggle: bool,
    /// Whether the page has a contact form.
    pub has_contact_form: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum PageEvent {
    /// Document finished loading (`DOMContentLoaded`).
    Ready(PageSnapshot),
    /// Contact form submitted; carries the current value of every named field.
    Submit { fields: BTreeMap<String, String> },
    /// The user edited a form field.
    Input { field: String, value: String },
    /// Window scrolled to `y` pixels.
    Scroll { y: f64 },
    /// Mobile menu toggle clicked.
    MenuToggle,
    /// A link inside the nav menu was clicked.
    NavLinkClick { href: String },
    /// A link whose `href` starts with `#` was clicked.
    AnchorClick { href: String },
    /// An observed element crossed into the viewport.
    Intersect { element: String, ratio: f64 },
    /// The page is about to be unloaded.
    BeforeUnload,
}

impl PageEvent {
    /// Every `kind` string the page may send.
    pub const KINDS: &'static [&'static str] = &[
        "ready",
        "submit",
        "input",
        "scroll",
        "menu_toggle",
        "nav_link_click",
        "anchor_click",
        "intersect",
        "before_unload",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ready(_) => "ready",
            Self::Submit { .. } => "submit",
            Self::Input { .. } => "input",
            Self::Scroll { .. } => "scroll",
            Self::MenuToggle => "menu_toggle",
            Self::NavLinkClick { .. } => "nav_link_click",
            Self::AnchorClick { .. } => "anchor_click",
            Self::Intersect { .. } => "intersect",
            Self::BeforeUnload => "before_unload",
        }
    }

    /// Parse a raw IPC body, distinguishing unknown kinds from bad payloads.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| PageError::Bridge(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, PageError> {
        let kind = value
            .get("kind")
            .and_then(|k| k.as_str())
            .ok_or_else(|| PageError::UnknownEvent(String::new()))?
            .to_string();

        if !Self::KINDS.contains(&kind.as_str()) {
            return Err(PageError::UnknownEvent(kind));
        }

        serde_json::from_value(value).map_err(|e| PageError::MalformedPayload {
            kind,
            reason: e.to_string(),
        })
    }
}
