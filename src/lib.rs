//! TUI Memory (workspace facade crate).
//!
//! Re-exports the member crates as `tui_memory::{core,engine,input,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub use tui_memory_core as core;
pub use tui_memory_engine as engine;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
