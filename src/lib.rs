//! Form Automata: deterministic automata for email and password validation
//!
//! Each validator is an explicit DFA: a character sequence is stepped through
//! named states while a small context (flags and counters) accumulates what
//! the state label alone cannot express. A single generic driver runs any
//! automaton and returns the full per-character trace plus a verdict, so
//! consumers can replay, animate or explain a rejection without touching
//! automaton internals.
//!
//! # Core Concepts
//!
//! - **Automaton**: static description (`states`, `start`, `trap`,
//!   `init_context`, `step`, `is_accepting`) via the `Automaton` trait
//! - **Simulation**: one run over one input, producing a `SimulationResult`
//! - **Trap**: absorbing failure state; invalid characters are transitions,
//!   never errors
//!
//! # Example
//!
//! ```rust
//! use form_automata::core::{Automaton, State};
//! use form_automata::email::EmailAutomaton;
//! use form_automata::password::PasswordAutomaton;
//!
//! let email = EmailAutomaton::default();
//! assert!(email.accepts("user.name+tag@sub.example.com"));
//! assert!(!email.accepts("a@b.c"));
//!
//! let password = PasswordAutomaton::default();
//! let result = password.simulate("abcdefg1");
//! assert!(!result.accepted);
//! assert_eq!(result.final_state.name(), "101");
//!
//! for step in &result.steps {
//!     println!("{} '{}' {} -> {}", step.index, step.symbol, step.from.name(), step.to.name());
//! }
//! ```

pub mod audit;
pub mod classify;
pub mod config;
pub mod core;
pub mod email;
pub mod export;
pub mod password;
pub mod run;
pub mod simulate;

// Re-export commonly used types
pub use self::core::{Automaton, Context, State, Step, Trace};
pub use email::{EmailAutomaton, EmailContext, EmailState};
pub use password::{PasswordAutomaton, PasswordContext, PasswordState};
pub use simulate::{simulate, Simulation, SimulationResult, Verdict};
