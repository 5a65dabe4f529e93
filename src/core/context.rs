//! Per-run context carried alongside the automaton state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Flags and counters accumulated during a single run.
///
/// A context is created by [`Automaton::init_context`](super::Automaton::init_context)
/// at the start of every run and is owned by that run alone. Step records hold
/// copies, so a context must be cheap to clone.
pub trait Context:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Whether the run has hit a disallowed character.
    fn is_trapped(&self) -> bool;
}
