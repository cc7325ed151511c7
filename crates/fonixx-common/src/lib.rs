pub mod dom;
pub mod errors;
pub mod events;
pub mod id;
pub mod page;

pub use dom::{DomCommand, Element, ScrollBehavior, ScrollBlock, Target};
pub use errors::{ConfigError, FonixxError, PageError};
pub use events::{PageEvent, PageSnapshot};
pub use id::{new_correlation_id, ElementId};
pub use page::Page;

pub type Result<T> = std::result::Result<T, FonixxError>;
