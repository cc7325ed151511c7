//! Submit handling for the contact form.

use std::time::Instant;

use fonixx_common::{DomCommand, ElementId, Page};
use tracing::{debug, info};

use super::field::FieldName;
use super::notice::{NoticeSpec, NoticeTask};
use super::presenter::Presenter;
use super::validator::{validate_all, ValidationResult};
use crate::timer::{TaskHandle, TimerQueue};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing submitted yet.
    Idle,
    Validating,
    /// Last submit failed; annotations are showing.
    Annotated,
    /// Last submit passed; the form was cleared.
    Reset,
}

impl FormState {
    pub fn is_idle(self) -> bool {
        !matches!(self, Self::Validating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub all_valid: bool,
    pub results: Vec<ValidationResult>,
    /// The success notice shown, if the submission passed.
    pub notice: Option<ElementId>,
}

impl SubmissionOutcome {
    pub fn failed_fields(&self) -> Vec<FieldName> {
        self.results
            .iter()
            .filter(|r| !r.is_valid())
            .map(|r| r.field.name)
            .collect()
    }
}

pub struct FormController<P: Presenter> {
    presenter: P,
    notice: NoticeSpec,
    timers: TimerQueue<NoticeTask>,
    handles: Vec<TaskHandle>,
    state: FormState,
}

impl<P: Presenter> FormController<P> {
    pub fn new(presenter: P, notice: NoticeSpec) -> Self {
        Self {
            presenter,
            notice,
            timers: TimerQueue::new(),
            handles: Vec::new(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Run one validation pass over the live form.
    ///
    /// Native submission is already suppressed by the page; nothing is sent
    /// anywhere. Every field is checked even after one fails.
    pub fn on_submit(&mut self, page: &mut dyn Page, now: Instant) -> SubmissionOutcome {
        self.state = FormState::Validating;
        self.presenter.clear_all(page);

        let results = validate_all(|name| page.field_value(name.as_str()));

        for result in &results {
            if let Some(message) = result.message() {
                self.presenter.present(page, result.field.name, message);
            }
        }

        let all_valid = results.iter().all(ValidationResult::is_valid);

        let notice = if all_valid {
            let id = self.show_notice(page, now);
            page.apply(DomCommand::ResetForm);
            self.state = FormState::Reset;
            info!("contact form submitted");
            Some(id)
        } else {
            self.state = FormState::Annotated;
            debug!(
                invalid = results.iter().filter(|r| !r.is_valid()).count(),
                "contact form rejected"
            );
            None
        };

        SubmissionOutcome {
            all_valid,
            results,
            notice,
        }
    }

    /// The user edited `field`; drop its annotation if it has one.
    pub fn on_input(&mut self, page: &mut dyn Page, field: FieldName) -> bool {
        self.presenter.field_edited(page, field)
    }

    /// Apply notice fades/removals due at `now`. Returns how many ran.
    pub fn tick(&mut self, page: &mut dyn Page, now: Instant) -> usize {
        let due = self.timers.take_due(now);
        let count = due.len();
        for task in due {
            page.apply(task.command(&self.notice));
        }
        if count > 0 && self.timers.is_empty() {
            self.handles.clear();
        }
        count
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// A new document replaced the old one. Annotations and notices went
    /// with it, so only the bookkeeping is dropped.
    pub fn detach(&mut self) {
        let cancelled = self.cancel_pending();
        self.presenter.forget_all();
        self.state = FormState::Idle;
        debug!(cancelled, "contact form detached");
    }

    /// Drop every pending notice step without touching the page.
    pub fn cancel_pending(&mut self) -> usize {
        self.handles
            .drain(..)
            .filter(|h| self.timers.cancel(*h))
            .count()
    }

    fn show_notice(&mut self, page: &mut dyn Page, now: Instant) -> ElementId {
        let id = ElementId::new("notice");
        page.apply(DomCommand::AppendToForm {
            element: self.notice.element(id.clone()),
        });

        let fade_at = now + self.notice.delay;
        let remove_at = fade_at + self.notice.fade;
        self.handles
            .push(self.timers.schedule(fade_at, NoticeTask::Fade(id.clone())));
        self.handles
            .push(self.timers.schedule(remove_at, NoticeTask::Remove(id.clone())));
        id
    }
}
