//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::bounds::window_rect;
use super::core::FonixxApp;

impl ApplicationHandler for FonixxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref handle) = self.webview {
                        if let Err(e) = handle.set_bounds(window_rect(size)) {
                            tracing::warn!(error = %e, "Failed to resize webview");
                        }
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl FonixxApp {
    /// Drop pending notice timers, then the webview before its window.
    fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");
        let dropped = self.site.cancel_pending();
        tracing::debug!(dropped, "pending timers dropped");
        self.webview = None;
        self.manager = None;
        self.window = None;
        self.should_exit = true;
    }
}
