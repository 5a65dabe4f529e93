//! Incremental driver that feeds characters through an automaton.

use crate::core::{Automaton, State, Step, Trace};
use crate::simulate::result::SimulationResult;
use tracing::{debug, trace};

/// One in-progress run of an automaton.
///
/// The run owns its context and trace; the automaton is only borrowed, so
/// any number of runs can share one definition.
pub struct Simulation<'a, A: Automaton> {
    automaton: &'a A,
    current: A::State,
    context: A::Context,
    trace: Trace<A::State, A::Context>,
    offered: usize,
}

impl<'a, A: Automaton> Simulation<'a, A> {
    /// Start a run in the automaton's start state with a fresh context.
    pub fn new(automaton: &'a A) -> Self {
        Self {
            automaton,
            current: automaton.start(),
            context: automaton.init_context(),
            trace: Trace::new(),
            offered: 0,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &A::State {
        &self.current
    }

    /// Get current context (pure)
    pub fn context(&self) -> &A::Context {
        &self.context
    }

    /// Get steps recorded so far (pure)
    pub fn trace(&self) -> &Trace<A::State, A::Context> {
        &self.trace
    }

    /// Check if the run sits in the trap state (pure)
    pub fn is_trapped(&self) -> bool {
        self.current == self.automaton.trap()
    }

    /// Acceptance verdict if the input ended here.
    ///
    /// A run that was never fed a character never accepts.
    pub fn is_accepting(&self) -> bool {
        self.offered > 0 && self.automaton.is_accepting(&self.current, &self.context)
    }

    /// Consume one character.
    ///
    /// Returns the recorded step, or `None` when the run is already trapped
    /// and the character was not consumed.
    pub fn feed(&mut self, symbol: char) -> Option<&Step<A::State, A::Context>> {
        let index = self.offered;
        self.offered += 1;

        if self.is_trapped() {
            return None;
        }

        let from = self.current.clone();
        let to = self.automaton.step(&from, symbol, &mut self.context);

        trace!(
            automaton = self.automaton.id(),
            index,
            from = from.name(),
            to = to.name(),
            "Step"
        );
        if to == self.automaton.trap() {
            debug!(
                automaton = self.automaton.id(),
                index,
                from = from.name(),
                "Input trapped"
            );
        }

        self.trace.record(Step {
            index,
            symbol,
            from,
            to: to.clone(),
            context: self.context.clone(),
        });
        self.current = to;
        self.trace.last()
    }

    /// Consume characters in order until the input ends or the run traps.
    pub fn feed_str(&mut self, input: &str) {
        for symbol in input.chars() {
            if self.feed(symbol).is_none() {
                break;
            }
        }
    }

    /// End the run and compute the verdict.
    pub fn finish(self) -> SimulationResult<A::State, A::Context> {
        let accepted = self.is_accepting();

        debug!(
            automaton = self.automaton.id(),
            steps = self.trace.len(),
            final_state = self.current.name(),
            accepted,
            "Simulation finished"
        );

        SimulationResult {
            steps: self.trace,
            final_state: self.current,
            accepted,
            final_context: self.context,
        }
    }
}
