//! Storage implementations
//!
//! Persistence is out of scope for the layer itself; the bundled in-memory
//! service covers tests and development.

pub mod in_memory;

pub use in_memory::InMemoryService;
