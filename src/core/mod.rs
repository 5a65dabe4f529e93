//! Core automaton types.
//!
//! This module contains the pure vocabulary every automaton is built from:
//! - States via the `State` trait (and the `state_enum!` macro)
//! - Per-run context via the `Context` trait
//! - The `Automaton` description itself
//! - Immutable step records and the ordered trace
//!
//! Nothing in this module performs I/O or holds global state.

mod automaton;
mod context;
mod macros;
mod state;
mod trace;

pub use automaton::Automaton;
pub use context::Context;
pub use state::State;
pub use trace::{Step, Trace};
