//! Findings reported by the definition audit.

use thiserror::Error;

/// A way in which an automaton definition breaks the DFA contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("Start state '{state}' is not listed in states()")]
    StartNotListed { state: String },

    #[error("Trap state '{state}' is not listed in states()")]
    TrapNotListed { state: String },

    #[error("State '{state}' is listed {count} times")]
    DuplicateState { state: String, count: usize },

    #[error("Start state '{state}' is also the trap state")]
    StartIsTrap { state: String },

    #[error("Trap state '{state}' does not report is_trap()")]
    TrapNotMarked { state: String },

    #[error("Trap state '{state}' moves to '{to}' on {symbol:?}")]
    TrapNotAbsorbing {
        state: String,
        to: String,
        symbol: char,
    },

    #[error("Trap state '{state}' is accepting")]
    TrapAccepting { state: String },

    #[error("Transition from '{from}' on {symbol:?} reaches unlisted state '{to}'")]
    UnlistedTarget {
        from: String,
        to: String,
        symbol: char,
    },
}
