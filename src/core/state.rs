//! Core State trait for automaton states.
//!
//! All automaton states implement this trait, which provides pure methods
//! for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for automaton states.
///
/// States are small immutable values. The canonical label returned by
/// [`State::name`] is what diagrams, logs and exported traces show.
///
/// # Required Traits
///
/// - `Clone`: states are copied into every step record
/// - `PartialEq`: the driver compares against the trap state
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: traces can be exported
///
/// # Example
///
/// ```rust
/// use form_automata::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ParityState {
///     Even,
///     Odd,
///     Trap,
/// }
///
/// impl State for ParityState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "EVEN",
///             Self::Odd => "ODD",
///             Self::Trap => "TRAP",
///         }
///     }
///
///     fn is_trap(&self) -> bool {
///         matches!(self, Self::Trap)
///     }
/// }
///
/// assert_eq!(ParityState::Odd.name(), "ODD");
/// assert_eq!(ParityState::Odd.description(), "ODD");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Canonical label of the state.
    fn name(&self) -> &str;

    /// Check if this is the absorbing failure state.
    ///
    /// Default implementation returns `false`.
    fn is_trap(&self) -> bool {
        false
    }

    /// Human-readable explanation of what being in this state means.
    ///
    /// Defaults to the label.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
        Trap,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "START",
                Self::Middle => "MIDDLE",
                Self::Trap => "TRAP",
            }
        }

        fn is_trap(&self) -> bool {
            matches!(self, Self::Trap)
        }
    }

    #[test]
    fn state_name_returns_label() {
        assert_eq!(TestState::Start.name(), "START");
        assert_eq!(TestState::Middle.name(), "MIDDLE");
        assert_eq!(TestState::Trap.name(), "TRAP");
    }

    #[test]
    fn is_trap_identifies_failure_state() {
        assert!(!TestState::Start.is_trap());
        assert!(!TestState::Middle.is_trap());
        assert!(TestState::Trap.is_trap());
    }

    #[test]
    fn description_defaults_to_name() {
        assert_eq!(TestState::Middle.description(), "MIDDLE");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Middle;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
