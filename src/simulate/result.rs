//! Outcome of a finished run.

use crate::classify::SymbolCategory;
use crate::core::{Automaton, Context, State, Trace};
use serde::{Deserialize, Serialize};

/// Result of simulating one input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SimulationResult<S: State, C: Context> {
    /// One step per consumed character, in input order
    pub steps: Trace<S, C>,
    /// State after the last consumed character
    pub final_state: S,
    pub accepted: bool,
    /// Context after the last consumed character
    pub final_context: C,
}

/// Why an input was accepted or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    /// A disallowed character at `index` drove the run into the trap.
    Trapped { index: usize },
    /// The input ended before the pattern was complete.
    Incomplete,
}

/// How often one `(from, to, category)` edge was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EdgeCount<S: State> {
    pub from: S,
    pub to: S,
    pub category: SymbolCategory,
    pub count: usize,
}

impl<S: State, C: Context> SimulationResult<S, C> {
    pub fn is_trapped(&self) -> bool {
        self.final_state.is_trap()
    }

    /// Classify the outcome.
    pub fn verdict(&self) -> Verdict {
        if self.accepted {
            return Verdict::Accepted;
        }
        match self.steps.trapped_at() {
            Some(index) => Verdict::Trapped { index },
            None => Verdict::Incomplete,
        }
    }

    /// Acceptance after each step, in order.
    ///
    /// Lets a consumer show a live "accepting" indicator while replaying the
    /// trace without re-running the automaton.
    pub fn acceptance_timeline<A>(&self, automaton: &A) -> Vec<bool>
    where
        A: Automaton<State = S, Context = C>,
    {
        self.steps
            .iter()
            .map(|step| automaton.is_accepting(&step.to, &step.context))
            .collect()
    }

    /// Edge multiplicities over the trace, in first-seen order.
    pub fn edge_counts<A>(&self, automaton: &A) -> Vec<EdgeCount<S>>
    where
        A: Automaton<State = S, Context = C>,
    {
        let mut edges: Vec<EdgeCount<S>> = Vec::new();
        for step in &self.steps {
            let category = automaton.categorize(step.symbol);
            let existing = edges.iter_mut().find(|edge| {
                edge.from == step.from && edge.to == step.to && edge.category == category
            });
            match existing {
                Some(edge) => edge.count += 1,
                None => edges.push(EdgeCount {
                    from: step.from.clone(),
                    to: step.to.clone(),
                    category,
                    count: 1,
                }),
            }
        }
        edges
    }
}
