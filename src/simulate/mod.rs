//! Generic simulation driver.
//!
//! One routine serves every [`Automaton`]: it replays the input one
//! character at a time, records a [`Step`](crate::core::Step) per consumed
//! character and stops consuming once the trap state is reached.
//!
//! # Key Concepts
//!
//! - **Simulation**: an in-progress run that can be fed incrementally
//! - **SimulationResult**: the finished trace plus the verdict
//! - **Empty input**: never accepted, whatever the automaton says

mod driver;
mod result;

pub use driver::Simulation;
pub use result::{EdgeCount, SimulationResult, Verdict};

use crate::core::Automaton;

/// Run `input` through `automaton` from a fresh context.
///
/// Never fails: malformed input drives the automaton into its trap state
/// and yields `accepted == false`.
///
/// # Example
///
/// ```rust
/// use form_automata::core::State;
/// use form_automata::password::PasswordAutomaton;
/// use form_automata::simulate::simulate;
///
/// let result = simulate(&PasswordAutomaton::default(), "Abcdefg!");
/// assert!(!result.accepted);
/// assert_eq!(result.final_state.name(), "TRAP");
/// assert_eq!(result.steps.trapped_at(), Some(7));
/// ```
pub fn simulate<A: Automaton>(automaton: &A, input: &str) -> SimulationResult<A::State, A::Context> {
    let mut run = Simulation::new(automaton);
    run.feed_str(input);
    run.finish()
}
