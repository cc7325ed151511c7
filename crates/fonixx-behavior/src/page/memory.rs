//! A page that lives entirely in memory.
//!
//! Models just enough of the document for the behaviors: the five contact
//! form controls, classes, inline styles and text per target, and the
//! elements the behaviors create. Every applied command is also logged.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use fonixx_common::{DomCommand, Element, Page, PageEvent, PageSnapshot, Target};

use crate::form::FieldName;

#[derive(Debug, Default)]
pub struct MemoryPage {
    path: String,
    fields: BTreeMap<String, String>,
    has_form: bool,
    has_menu_toggle: bool,
    element_ids: BTreeSet<String>,
    nav_links: Vec<String>,
    reveal_targets: Vec<String>,
    classes: HashMap<Target, BTreeSet<String>>,
    styles: HashMap<Target, BTreeMap<String, String>>,
    texts: HashMap<Target, String>,
    annotations: Vec<(String, Element)>,
    notices: Vec<Element>,
    scrolls: Vec<Target>,
    commands: Vec<DomCommand>,
}

impl MemoryPage {
    /// An empty document at `/index.html` with no form.
    pub fn new() -> Self {
        Self {
            path: "/index.html".into(),
            ..Default::default()
        }
    }

    /// A document with an empty contact form and a mobile menu toggle.
    pub fn contact_form() -> Self {
        let mut page = Self::new();
        page.has_form = true;
        page.has_menu_toggle = true;
        for name in FieldName::ALL {
            page.fields.insert(name.as_str().to_string(), String::new());
        }
        page
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_nav_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nav_links = links.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reveal_targets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reveal_targets = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.element_ids.insert(id.into());
        self
    }

    pub fn without_menu_toggle(mut self) -> Self {
        self.has_menu_toggle = false;
        self
    }

    /// Remove one control from the form.
    pub fn without_field(mut self, field: FieldName) -> Self {
        self.fields.remove(field.as_str());
        self
    }

    /// Load the same document again: controls come back empty and every
    /// class, style, text and created element is gone. The command log and
    /// the builder's elements are kept.
    pub fn reload(&mut self) {
        for (_, el) in self.annotations.drain(..) {
            self.element_ids.remove(el.id.as_str());
        }
        for el in self.notices.drain(..) {
            self.element_ids.remove(el.id.as_str());
        }
        for value in self.fields.values_mut() {
            value.clear();
        }
        self.classes.clear();
        self.styles.clear();
        self.texts.clear();
        self.scrolls.clear();
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        if let Some(slot) = self.fields.get_mut(field.as_str()) {
            *slot = value.into();
        }
    }

    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.fields.get(field.as_str()).map(String::as_str)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            path: self.path.clone(),
            element_ids: self.element_ids.iter().cloned().collect(),
            reveal_targets: self.reveal_targets.clone(),
            nav_links: self.nav_links.clone(),
            has_menu_toggle: self.has_menu_toggle,
            has_contact_form: self.has_form,
        }
    }

    pub fn ready_event(&self) -> PageEvent {
        PageEvent::Ready(self.snapshot())
    }

    /// The event the page bridge would send for a submit right now.
    pub fn submit_event(&self) -> PageEvent {
        PageEvent::Submit {
            fields: self.fields.clone(),
        }
    }

    /// The event the page bridge would send after the user types `value`.
    pub fn input_event(&self, field: FieldName, value: impl Into<String>) -> PageEvent {
        PageEvent::Input {
            field: field.as_str().to_string(),
            value: value.into(),
        }
    }

    /// Live annotations as `(field name, element)`, in insertion order.
    pub fn annotations(&self) -> Vec<(&str, &Element)> {
        self.annotations
            .iter()
            .map(|(field, el)| (field.as_str(), el))
            .collect()
    }

    pub fn notices(&self) -> &[Element] {
        &self.notices
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes
            .get(target)
            .is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, target: &Target, property: &str) -> Option<&str> {
        self.styles
            .get(target)
            .and_then(|props| props.get(property))
            .map(String::as_str)
    }

    pub fn text(&self, target: &Target) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    pub fn scrolls(&self) -> &[Target] {
        &self.scrolls
    }

    pub fn commands(&self) -> &[DomCommand] {
        &self.commands
    }

    fn update(&mut self, command: &DomCommand) {
        match command {
            DomCommand::AddClass { target, class } => {
                self.classes
                    .entry(target.clone())
                    .or_default()
                    .insert(class.clone());
            }
            DomCommand::RemoveClass { target, class } => {
                if let Some(set) = self.classes.get_mut(target) {
                    set.remove(class);
                }
            }
            DomCommand::SetText { target, text } => {
                self.texts.insert(target.clone(), text.clone());
            }
            DomCommand::SetStyle {
                target,
                property,
                value,
            } => {
                let props = self.styles.entry(target.clone()).or_default();
                if value.is_empty() {
                    props.remove(property);
                } else {
                    props.insert(property.clone(), value.clone());
                }
            }
            DomCommand::AppendToField { field, element } => {
                if self.fields.contains_key(field) {
                    self.element_ids.insert(element.id.to_string());
                    self.annotations.push((field.clone(), element.clone()));
                }
            }
            DomCommand::AppendToForm { element } => {
                if self.has_form {
                    self.element_ids.insert(element.id.to_string());
                    self.notices.push(element.clone());
                }
            }
            DomCommand::Remove { id } => {
                self.element_ids.remove(id.as_str());
                self.annotations.retain(|(_, el)| el.id != *id);
                self.notices.retain(|el| el.id != *id);
            }
            DomCommand::ResetForm => {
                for value in self.fields.values_mut() {
                    value.clear();
                }
            }
            DomCommand::ScrollIntoView { target, .. } => {
                self.scrolls.push(target.clone());
            }
        }
    }
}

impl Page for MemoryPage {
    fn field_value(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned()
    }

    fn has_element(&self, id: &str) -> bool {
        self.element_ids.contains(id)
    }

    fn apply(&mut self, command: DomCommand) {
        self.update(&command);
        self.commands.push(command);
    }

    fn observe(&mut self, event: &PageEvent) {
        match event {
            PageEvent::Submit { fields } => {
                for (name, value) in fields {
                    if let Some(slot) = self.fields.get_mut(name) {
                        slot.clone_from(value);
                    }
                }
            }
            PageEvent::Input { field, value } => {
                if let Some(slot) = self.fields.get_mut(field) {
                    slot.clone_from(value);
                }
            }
            _ => {}
        }
    }
}
