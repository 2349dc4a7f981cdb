//! Database-style backend implementations
//!
//! These backends hold the key-value data in process, optionally persisted
//! as a whole to a file.

mod in_memory;

pub use in_memory::InMemory;
