//! The page abstraction every behavior runs against.

use crate::dom::DomCommand;
use crate::events::PageEvent;

/// A live document, as seen by the behavior layer.
///
/// Reads are limited to what the behaviors need (form control values and
/// element existence); every write goes through [`DomCommand`].
pub trait Page {
    /// Current value of the contact-form control named `field`, or `None`
    /// if the form has no such control.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Whether an element with this `id` exists.
    fn has_element(&self, id: &str) -> bool;

    fn apply(&mut self, command: DomCommand);

    /// Called with every event before it is dispatched, so pages that
    /// mirror remote state can refresh it.
    fn observe(&mut self, _event: &PageEvent) {}
}
