//! The live page, as mirrored from bridge events.
//!
//! Reads are answered from what the page last reported; writes are queued
//! and flushed to the webview by the host after each event.

use std::collections::{BTreeMap, HashSet};

use fonixx_common::{DomCommand, Page, PageEvent};

#[derive(Debug, Default)]
pub struct BridgePage {
    fields: BTreeMap<String, String>,
    element_ids: HashSet<String>,
    outbox: Vec<DomCommand>,
}

impl BridgePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands applied since the last call, in order.
    pub fn take_outbox(&mut self) -> Vec<DomCommand> {
        std::mem::take(&mut self.outbox)
    }

    pub fn pending(&self) -> usize {
        self.outbox.len()
    }
}

impl Page for BridgePage {
    fn field_value(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned()
    }

    fn has_element(&self, id: &str) -> bool {
        self.element_ids.contains(id)
    }

    fn apply(&mut self, command: DomCommand) {
        match &command {
            DomCommand::AppendToField { element, .. } | DomCommand::AppendToForm { element } => {
                self.element_ids.insert(element.id.to_string());
            }
            DomCommand::Remove { id } => {
                self.element_ids.remove(id.as_str());
            }
            DomCommand::ResetForm => {
                for value in self.fields.values_mut() {
                    value.clear();
                }
            }
            _ => {}
        }
        self.outbox.push(command);
    }

    fn observe(&mut self, event: &PageEvent) {
        match event {
            PageEvent::Ready(snapshot) => {
                self.element_ids = snapshot.element_ids.iter().cloned().collect();
                self.fields.clear();
                self.outbox.clear();
            }
            // The submit payload lists exactly the controls the form has.
            PageEvent::Submit { fields } => self.fields.clone_from(fields),
            PageEvent::Input { field, value } => {
                self.fields.insert(field.clone(), value.clone());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fonixx_common::{Element, ElementId, PageSnapshot, Target};

    fn ready(ids: &[&str]) -> PageEvent {
        PageEvent::Ready(PageSnapshot {
            element_ids: ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        })
    }

    #[test]
    fn ready_replaces_known_ids() {
        let mut page = BridgePage::new();
        page.observe(&ready(&["contact", "services"]));
        assert!(page.has_element("contact"));

        page.observe(&ready(&["about"]));
        assert!(!page.has_element("contact"));
        assert!(page.has_element("about"));
    }

    #[test]
    fn submit_mirrors_exactly_the_sent_fields() {
        let mut page = BridgePage::new();
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Ada".to_string());
        page.observe(&PageEvent::Submit { fields });

        assert_eq!(page.field_value("name").as_deref(), Some("Ada"));
        assert_eq!(page.field_value("phone"), None);
    }

    #[test]
    fn created_and_removed_elements_are_tracked() {
        let mut page = BridgePage::new();
        let element = Element {
            id: ElementId::from("notice-1"),
            class: "success-message".into(),
            text: "ok".into(),
            css: String::new(),
        };
        page.apply(DomCommand::AppendToForm { element });
        assert!(page.has_element("notice-1"));

        page.apply(DomCommand::Remove {
            id: "notice-1".into(),
        });
        assert!(!page.has_element("notice-1"));
        assert_eq!(page.pending(), 2);
    }

    #[test]
    fn outbox_drains_in_order() {
        let mut page = BridgePage::new();
        page.apply(DomCommand::add_class(Target::selector(".navbar"), "scrolled"));
        page.apply(DomCommand::ResetForm);

        let sent = page.take_outbox();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1], DomCommand::ResetForm);
        assert!(page.take_outbox().is_empty());
    }

    #[test]
    fn reset_clears_mirrored_values() {
        let mut page = BridgePage::new();
        page.observe(&PageEvent::Input {
            field: "email".into(),
            value: "a@b.co".into(),
        });
        page.apply(DomCommand::ResetForm);
        assert_eq!(page.field_value("email").as_deref(), Some(""));
    }
}
