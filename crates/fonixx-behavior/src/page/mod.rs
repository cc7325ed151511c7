//! Page implementations owned by the behavior layer.

mod memory;

pub use memory::MemoryPage;
