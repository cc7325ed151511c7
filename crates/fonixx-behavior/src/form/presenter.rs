//! Inline error annotations next to invalid fields.

use fonixx_common::{DomCommand, Element, ElementId, Page, Target};
use fonixx_config::FonixxConfig;
use tracing::debug;

use super::field::{FieldName, FIELD_COUNT};

/// Renders and removes per-field error annotations.
pub trait Presenter {
    /// Annotate `field` with `message` and mark it invalid. The annotation
    /// is removed the next time the user edits the field.
    fn present(&mut self, page: &mut dyn Page, field: FieldName, message: &str);

    /// Remove every annotation. Calling it again is a no-op.
    fn clear_all(&mut self, page: &mut dyn Page);

    /// The user changed `field`. Returns `true` if an annotation was removed.
    fn field_edited(&mut self, page: &mut dyn Page, field: FieldName) -> bool;

    /// Forget every annotation without writing to the page. Used when the
    /// document the annotations lived in has been replaced.
    fn forget_all(&mut self);

    /// Fields that currently carry an annotation, in form order.
    fn annotated(&self) -> Vec<FieldName>;
}

/// Inline style shared by every annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationStyle {
    pub color: String,
    pub font_size: String,
    pub margin_top: String,
}

impl AnnotationStyle {
    pub fn from_config(config: &FonixxConfig) -> Self {
        Self {
            color: config.theme.error.clone(),
            font_size: config.form.error_font_size.clone(),
            margin_top: config.form.error_margin_top.clone(),
        }
    }

    fn css(&self) -> String {
        format!(
            "color: {}; font-size: {}; margin-top: {};",
            self.color, self.font_size, self.margin_top
        )
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self::from_config(&FonixxConfig::default())
    }
}

/// At most one live annotation per field.
#[derive(Debug, Default)]
pub struct AnnotationSet {
    slots: [Option<ElementId>; FIELD_COUNT],
}

impl AnnotationSet {
    /// Record `id` for `field`, returning the annotation it replaces.
    pub fn insert(&mut self, field: FieldName, id: ElementId) -> Option<ElementId> {
        self.slots[field.index()].replace(id)
    }

    pub fn take(&mut self, field: FieldName) -> Option<ElementId> {
        self.slots[field.index()].take()
    }

    pub fn get(&self, field: FieldName) -> Option<&ElementId> {
        self.slots[field.index()].as_ref()
    }

    pub fn fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.slots[f.index()].is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The stock presenter: an `error-message` element appended to the
/// field's parent plus an error-colored border on the field.
#[derive(Debug, Default)]
pub struct InlinePresenter {
    style: AnnotationStyle,
    annotations: AnnotationSet,
}

impl InlinePresenter {
    pub fn new(style: AnnotationStyle) -> Self {
        Self {
            style,
            annotations: AnnotationSet::default(),
        }
    }

    pub fn annotation_id(&self, field: FieldName) -> Option<&ElementId> {
        self.annotations.get(field)
    }

    fn remove(&self, page: &mut dyn Page, field: FieldName, id: ElementId) {
        page.apply(DomCommand::Remove { id });
        page.apply(DomCommand::set_style(
            Target::field(field.as_str()),
            "border-color",
            "",
        ));
    }
}

impl Presenter for InlinePresenter {
    fn present(&mut self, page: &mut dyn Page, field: FieldName, message: &str) {
        if page.field_value(field.as_str()).is_none() {
            debug!(field = %field, message, "no control to annotate");
            return;
        }
        let id = ElementId::new("error");
        if let Some(stale) = self.annotations.insert(field, id.clone()) {
            page.apply(DomCommand::Remove { id: stale });
        }

        debug!(field = %field, id = %id, message, "presenting field error");

        page.apply(DomCommand::AppendToField {
            field: field.as_str().to_string(),
            element: Element {
                id,
                class: "error-message".into(),
                text: message.to_string(),
                css: self.style.css(),
            },
        });
        page.apply(DomCommand::set_style(
            Target::field(field.as_str()),
            "border-color",
            self.style.color.clone(),
        ));
    }

    fn clear_all(&mut self, page: &mut dyn Page) {
        for field in FieldName::ALL {
            if let Some(id) = self.annotations.take(field) {
                self.remove(page, field, id);
            }
        }
    }

    fn field_edited(&mut self, page: &mut dyn Page, field: FieldName) -> bool {
        match self.annotations.take(field) {
            Some(id) => {
                debug!(field = %field, "clearing error after edit");
                self.remove(page, field, id);
                true
            }
            None => false,
        }
    }

    fn forget_all(&mut self) {
        self.annotations = AnnotationSet::default();
    }

    fn annotated(&self) -> Vec<FieldName> {
        self.annotations.fields()
    }
}
