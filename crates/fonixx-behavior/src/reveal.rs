//! Scroll-triggered reveal: hidden at load, animated in once.

use std::collections::BTreeSet;

use fonixx_common::{DomCommand, Page, Target};
use fonixx_config::schema::RevealConfig;
use tracing::debug;

#[derive(Debug)]
pub struct Reveal {
    config: RevealConfig,
    pending: BTreeSet<String>,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            pending: BTreeSet::new(),
        }
    }

    /// Hide `targets` and start watching them. Returns how many were hidden.
    ///
    /// Targets still pending from a previous document are forgotten; the
    /// bridge reuses `reveal-N` ids on every load.
    pub fn attach(&mut self, page: &mut dyn Page, targets: &[String]) -> usize {
        self.pending.clear();
        if !self.config.enabled {
            return 0;
        }
        let mut hidden = 0;
        for id in targets {
            if self.pending.insert(id.clone()) {
                page.apply(DomCommand::set_style(Target::id(id.as_str()), "opacity", "0"));
                hidden += 1;
            }
        }
        debug!(hidden, "reveal targets attached");
        hidden
    }

    /// `element` crossed into view at `ratio`. Returns `true` if it was
    /// revealed by this call.
    pub fn on_intersect(&mut self, page: &mut dyn Page, element: &str, ratio: f64) -> bool {
        if ratio < self.config.threshold || !self.pending.remove(element) {
            return false;
        }
        page.apply(DomCommand::set_style(
            Target::id(element),
            "animation",
            self.config.animation.clone(),
        ));
        true
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
