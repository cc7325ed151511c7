//! Wires every behavior to one page and routes its events.

use std::time::Instant;

use fonixx_common::{DomCommand, Page, PageError, PageEvent, PageSnapshot, Target};
use fonixx_config::FonixxConfig;
use tracing::{debug, info};

use crate::anchors::AnchorScroller;
use crate::form::{
    AnnotationStyle, FieldName, FormController, InlinePresenter, NoticeSpec, SubmissionOutcome,
};
use crate::nav::NavBar;
use crate::reveal::Reveal;

/// What handling one event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// The event caused no change.
    Ignored,
    /// The page was updated.
    Applied,
    /// A contact form submission was validated.
    Submitted(SubmissionOutcome),
}

pub struct Site<P: Page> {
    page: P,
    nav: NavBar,
    reveal: Reveal,
    anchors: AnchorScroller,
    form: FormController<InlinePresenter>,
    snapshot: Option<PageSnapshot>,
}

impl<P: Page> Site<P> {
    /// Register every behavior against `page`. Nothing is written to the
    /// page until it reports ready.
    pub fn init(config: &FonixxConfig, page: P) -> Self {
        let form = FormController::new(
            InlinePresenter::new(AnnotationStyle::from_config(config)),
            NoticeSpec::from_config(config),
        );
        Self {
            page,
            nav: NavBar::new(config.nav.clone()),
            reveal: Reveal::new(config.reveal.clone()),
            anchors: AnchorScroller::new(&config.scroll),
            form,
            snapshot: None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn form(&self) -> &FormController<InlinePresenter> {
        &self.form
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    /// The snapshot from the last `ready`, if the page has reported one.
    pub fn snapshot(&self) -> Option<&PageSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn handle(&mut self, event: &PageEvent, now: Instant) -> Result<Handled, PageError> {
        self.page.observe(event);
        debug!(kind = event.kind(), "page event");

        let handled = match event {
            PageEvent::Ready(snapshot) => {
                self.on_ready(snapshot);
                Handled::Applied
            }
            PageEvent::Submit { .. } => {
                Handled::Submitted(self.form.on_submit(&mut self.page, now))
            }
            PageEvent::Input { field, .. } => {
                let name = field.parse::<FieldName>().map_err(|e| {
                    PageError::MalformedPayload {
                        kind: event.kind().to_string(),
                        reason: e.to_string(),
                    }
                })?;
                applied(self.form.on_input(&mut self.page, name))
            }
            PageEvent::Scroll { y } => applied(self.nav.on_scroll(&mut self.page, *y)),
            PageEvent::MenuToggle => {
                let before = self.nav.is_menu_open();
                applied(self.nav.toggle_menu(&mut self.page) != before)
            }
            PageEvent::NavLinkClick { .. } => applied(self.nav.link_clicked(&mut self.page)),
            PageEvent::AnchorClick { href } => applied(self.anchors.on_click(&mut self.page, href)),
            PageEvent::Intersect { element, ratio } => {
                applied(self.reveal.on_intersect(&mut self.page, element, *ratio))
            }
            PageEvent::BeforeUnload => {
                self.on_leave();
                Handled::Applied
            }
        };
        Ok(handled)
    }

    /// Run timers due at `now`. Returns how many ran.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.form.tick(&mut self.page, now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.form.next_deadline()
    }

    /// Drop pending timers without touching the page.
    pub fn cancel_pending(&mut self) -> usize {
        self.form.cancel_pending()
    }

    fn on_ready(&mut self, snapshot: &PageSnapshot) {
        self.form.detach();
        self.nav.attach(&mut self.page, snapshot);
        let hidden = self.reveal.attach(&mut self.page, &snapshot.reveal_targets);
        info!(
            path = %snapshot.path,
            reveal = hidden,
            form = snapshot.has_contact_form,
            "page ready"
        );
        self.snapshot = Some(snapshot.clone());
    }

    fn on_leave(&mut self) {
        let body = Target::selector("body");
        self.page
            .apply(DomCommand::set_style(body.clone(), "transition", "opacity 0.3s ease"));
        self.page.apply(DomCommand::set_style(body, "opacity", "0"));
        let cancelled = self.cancel_pending();
        debug!(cancelled, "page leaving");
    }
}

fn applied(changed: bool) -> Handled {
    if changed {
        Handled::Applied
    } else {
        Handled::Ignored
    }
}

#[cfg(test)]
mod tests;
