//! Contact form validation and feedback.

mod controller;
mod field;
mod notice;
mod presenter;
mod validator;

pub use controller::{FormController, FormState, SubmissionOutcome};
pub use field::{FieldName, FieldRule, FormField, UnknownField};
pub use notice::{NoticeSpec, NoticeTask};
pub use presenter::{AnnotationSet, AnnotationStyle, InlinePresenter, Presenter};
pub use validator::{validate, validate_all, FieldError, ValidationResult};
