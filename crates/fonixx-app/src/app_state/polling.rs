//! Event draining, timer pumping, and wake-up scheduling.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use fonixx_webview::{PageLoadState, WebViewEvent};

use super::core::FonixxApp;
use super::types::POLL_INTERVAL;

/// Next wake-up: one poll interval out, or sooner if a timer is due.
pub(super) fn next_wake(now: Instant, poll: Duration, deadline: Option<Instant>) -> Instant {
    let poll_at = now + poll;
    match deadline {
        Some(at) if at < poll_at => at,
        _ => poll_at,
    }
}

impl FonixxApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events(now);
        }

        let ran = self.site.tick(now);
        if ran > 0 {
            tracing::debug!(ran, "timers fired");
        }
        self.flush_commands();

        event_loop.set_control_flow(ControlFlow::WaitUntil(next_wake(
            Instant::now(),
            POLL_INTERVAL,
            self.site.next_deadline(),
        )));
    }

    fn poll_webview_events(&mut self, now: Instant) {
        let events = match self.manager {
            Some(ref manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body, now),
                WebViewEvent::PageLoad { state, url } => {
                    if state == PageLoadState::Finished {
                        tracing::info!(url = %url, "page loaded");
                    }
                }
                WebViewEvent::TitleChanged { title } => {
                    if let Some(ref window) = self.window {
                        window.set_title(&title);
                    }
                }
                WebViewEvent::NavigationRequested { url } => {
                    if let Some(ref mut handle) = self.webview {
                        handle.set_url(url);
                    }
                }
            }
        }
    }

    /// Send every queued DOM command to the page.
    pub(super) fn flush_commands(&mut self) {
        let commands = self.site.page_mut().take_outbox();
        if commands.is_empty() {
            return;
        }
        match self.webview {
            Some(ref handle) => {
                if let Err(e) = handle.apply_commands(&commands) {
                    tracing::warn!(error = %e, count = commands.len(), "Failed to apply dom commands");
                }
            }
            None => tracing::debug!(count = commands.len(), "no webview; dom commands dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_wakes_after_poll_interval() {
        let now = Instant::now();
        assert_eq!(next_wake(now, POLL_INTERVAL, None), now + POLL_INTERVAL);
    }

    #[test]
    fn due_timer_wakes_sooner() {
        let now = Instant::now();
        let soon = now + Duration::from_millis(3);
        assert_eq!(next_wake(now, POLL_INTERVAL, Some(soon)), soon);
    }

    #[test]
    fn distant_timer_does_not_delay_polling() {
        let now = Instant::now();
        let later = now + Duration::from_secs(5);
        assert_eq!(next_wake(now, POLL_INTERVAL, Some(later)), now + POLL_INTERVAL);
    }
}
