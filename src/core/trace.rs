//! Step records and the ordered trace of a run.

use super::context::Context;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single consumed character.
///
/// Steps are immutable facts: `context` is a copy of the run's context
/// right after the transition, not a view into it.
///
/// # Example
///
/// ```rust
/// use form_automata::core::{State, Step};
/// use form_automata::email::{EmailContext, EmailState};
///
/// let step = Step {
///     index: 0,
///     symbol: 'a',
///     from: EmailState::Start,
///     to: EmailState::Local,
///     context: EmailContext {
///         local_length: 1,
///         ..EmailContext::default()
///     },
/// };
/// assert_eq!(step.to.name(), "L");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State, C: Context> {
    /// Character position in the input
    pub index: usize,
    /// The character consumed
    pub symbol: char,
    /// The state before the character
    pub from: S,
    /// The state after the character
    pub to: S,
    /// Context snapshot taken after the transition
    pub context: C,
}

/// Ordered steps of one run, in input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct Trace<S: State, C: Context> {
    steps: Vec<Step<S, C>>,
}

impl<S: State, C: Context> Default for Trace<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, C: Context> Trace<S, C> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step. Only the simulation driver records steps.
    pub(crate) fn record(&mut self, step: Step<S, C>) {
        self.steps.push(step);
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step<S, C>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step<S, C>> {
        self.steps.last()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first step followed by the `to` state
    /// of every step. An empty trace has an empty path.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Index of the character that drove the run into its trap state.
    pub fn trapped_at(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|step| step.to.is_trap())
            .map(|step| step.index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<S, C>> {
        self.steps.iter()
    }
}

impl<'a, S: State, C: Context> IntoIterator for &'a Trace<S, C> {
    type Item = &'a Step<S, C>;
    type IntoIter = std::slice::Iter<'a, Step<S, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
