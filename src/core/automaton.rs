//! The automaton description shared by every validator.

use super::context::Context;
use super::state::State;
use crate::classify::SymbolCategory;
use crate::simulate::{self, SimulationResult};

/// Static description of a deterministic automaton with side context.
///
/// Implementations are immutable values: all per-run data lives in the
/// [`Context`] handed to [`Automaton::step`], so one definition can serve any
/// number of concurrent runs.
///
/// # Example
///
/// ```rust
/// use form_automata::core::{Automaton, State};
/// use form_automata::email::EmailAutomaton;
///
/// let email = EmailAutomaton::default();
/// assert_eq!(email.start().name(), "S");
/// assert_eq!(email.trap().name(), "TRAP");
///
/// let result = email.simulate("a@b.co");
/// assert!(result.accepted);
/// assert_eq!(result.final_state.name(), "TLD");
/// ```
pub trait Automaton: Send + Sync {
    type State: State;
    type Context: Context;

    /// Stable identifier used in logs and exports.
    fn id(&self) -> &str;

    /// Every state, in display order.
    fn states(&self) -> &[Self::State];

    fn start(&self) -> Self::State;

    fn trap(&self) -> Self::State;

    /// Fresh context for a new run.
    fn init_context(&self) -> Self::Context;

    /// Transition function. May update `context`.
    fn step(&self, state: &Self::State, symbol: char, context: &mut Self::Context)
        -> Self::State;

    /// Acceptance predicate, usable on any intermediate state of a run.
    fn is_accepting(&self, state: &Self::State, context: &Self::Context) -> bool;

    /// Edge category of a character in this automaton's alphabet.
    fn categorize(&self, symbol: char) -> SymbolCategory;

    /// Explanation of an edge category, in this automaton's terms.
    fn hint(&self, category: SymbolCategory) -> &'static str {
        category.hint()
    }

    /// Run the whole input through this automaton.
    fn simulate(&self, input: &str) -> SimulationResult<Self::State, Self::Context>
    where
        Self: Sized,
    {
        simulate::simulate(self, input)
    }

    /// Shorthand for `simulate(input).accepted`.
    fn accepts(&self, input: &str) -> bool
    where
        Self: Sized,
    {
        self.simulate(input).accepted
    }
}
