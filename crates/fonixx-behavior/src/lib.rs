//! Behavior layer for the Fonixx site.
//!
//! Every behavior is a small state machine that reads from and writes to
//! a [`fonixx_common::Page`]. [`Site`] wires them together:
//!
//! ```rust
//! use std::time::Instant;
//! use fonixx_behavior::{MemoryPage, Site};
//! use fonixx_config::FonixxConfig;
//!
//! let mut site = Site::init(&FonixxConfig::default(), MemoryPage::contact_form());
//! let submit = site.page().submit_event();
//! site.handle(&submit, Instant::now()).unwrap();
//! assert_eq!(site.page().annotations().len(), 5);
//! ```

pub mod anchors;
pub mod form;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod site;
pub mod timer;

pub use anchors::AnchorScroller;
pub use form::{FieldName, FormController, Presenter, SubmissionOutcome};
pub use nav::NavBar;
pub use page::MemoryPage;
pub use reveal::Reveal;
pub use site::{Handled, Site};
pub use timer::{TaskHandle, TimerQueue};
