//! Page mutations, expressed as data.
//!
//! The behavior layer never touches a document directly. It emits
//! `DomCommand`s; a page implementation applies them (the webview bridge
//! forwards them to JavaScript, the in-memory page records them).

use serde::{Deserialize, Serialize};

use crate::id::ElementId;

/// Which element(s) a command applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// All elements matching a CSS selector.
    Selector(String),
    /// The element with this `id`.
    Id(String),
    /// The contact-form control with this `name` attribute.
    Field(String),
}

impl Target {
    pub fn selector(s: impl Into<String>) -> Self {
        Self::Selector(s.into())
    }

    pub fn id(s: impl Into<String>) -> Self {
        Self::Id(s.into())
    }

    pub fn field(s: impl Into<String>) -> Self {
        Self::Field(s.into())
    }
}

/// An element created by the behavior layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub class: String,
    pub text: String,
    /// Inline `style` attribute (CSS text).
    pub css: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomCommand {
    AddClass {
        target: Target,
        class: String,
    },
    RemoveClass {
        target: Target,
        class: String,
    },
    SetText {
        target: Target,
        text: String,
    },
    /// Set one inline style property; an empty value clears it.
    SetStyle {
        target: Target,
        property: String,
        value: String,
    },
    /// Append `element` to the parent of the named form field.
    AppendToField {
        field: String,
        element: Element,
    },
    /// Append `element` to the contact form.
    AppendToForm {
        element: Element,
    },
    /// Remove a previously created element. Removing a missing id is a no-op.
    Remove {
        id: ElementId,
    },
    /// Reset every contact-form control to its empty/unselected state.
    ResetForm,
    ScrollIntoView {
        target: Target,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
}

impl DomCommand {
    pub fn add_class(target: Target, class: impl Into<String>) -> Self {
        Self::AddClass {
            target,
            class: class.into(),
        }
    }

    pub fn remove_class(target: Target, class: impl Into<String>) -> Self {
        Self::RemoveClass {
            target,
            class: class.into(),
        }
    }

    pub fn set_style(target: Target, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property: property.into(),
            value: value.into(),
        }
    }
}
