//! Validation-based audit of automaton definitions.
//!
//! The simulator trusts its automaton: it compares against `trap()` to stop
//! consuming input and never checks that a transition lands on a known
//! state. This module checks those assumptions up front, using Stillwater's
//! `Validation` to report every problem in one pass instead of the first.
//!
//! # Example
//!
//! ```rust
//! use form_automata::audit::audit;
//! use form_automata::email::EmailAutomaton;
//! use form_automata::password::PasswordAutomaton;
//!
//! assert!(audit(&EmailAutomaton::default()).is_success());
//! assert!(audit(&PasswordAutomaton::default()).is_success());
//! ```

mod violations;

pub use violations::DefinitionViolation;

use crate::core::{Automaton, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of an audit: success, or every violation found.
pub type AuditResult = Validation<(), NonEmptyVec<DefinitionViolation>>;

/// Characters every transition is probed with: printable ASCII plus a few
/// characters outside the alphabet entirely.
pub fn probe_symbols() -> impl Iterator<Item = char> {
    (' '..='~').chain(['\0', '\t', 'é', 'ß', '€'])
}

fn require(ok: bool, violation: impl FnOnce() -> DefinitionViolation) -> AuditResult {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check an automaton definition, accumulating ALL violations.
pub fn audit<A: Automaton>(automaton: &A) -> AuditResult {
    let states = automaton.states();
    let start = automaton.start();
    let trap = automaton.trap();
    let mut checks: Vec<AuditResult> = Vec::new();

    checks.push(require(states.contains(&start), || {
        DefinitionViolation::StartNotListed {
            state: start.name().to_string(),
        }
    }));
    checks.push(require(states.contains(&trap), || {
        DefinitionViolation::TrapNotListed {
            state: trap.name().to_string(),
        }
    }));
    checks.push(require(start != trap, || DefinitionViolation::StartIsTrap {
        state: start.name().to_string(),
    }));
    checks.push(require(trap.is_trap(), || DefinitionViolation::TrapNotMarked {
        state: trap.name().to_string(),
    }));

    for (position, state) in states.iter().enumerate() {
        let first = states.iter().position(|s| s == state) == Some(position);
        let count = states.iter().filter(|s| *s == state).count();
        checks.push(require(!first || count == 1, || {
            DefinitionViolation::DuplicateState {
                state: state.name().to_string(),
                count,
            }
        }));
    }

    let mut trap_accepts = automaton.is_accepting(&trap, &automaton.init_context());
    for symbol in probe_symbols() {
        let mut context = automaton.init_context();
        let to = automaton.step(&trap, symbol, &mut context);
        trap_accepts |= automaton.is_accepting(&trap, &context);
        checks.push(require(to == trap, || DefinitionViolation::TrapNotAbsorbing {
            state: trap.name().to_string(),
            to: to.name().to_string(),
            symbol,
        }));
    }
    checks.push(require(!trap_accepts, || DefinitionViolation::TrapAccepting {
        state: trap.name().to_string(),
    }));

    for from in states {
        for symbol in probe_symbols() {
            let mut context = automaton.init_context();
            let to = automaton.step(from, symbol, &mut context);
            checks.push(require(states.contains(&to), || {
                DefinitionViolation::UnlistedTarget {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    symbol,
                }
            }));
        }
    }

    debug!(automaton = automaton.id(), checks = checks.len(), "Audited definition");

    Validation::all_vec(checks).map(|_| ())
}
