//! Email address automaton.
//!
//! Approximates `^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$` as an
//! explicit DFA. Only the segment after the last dot is checked as a TLD
//! (letters only, at least `min_tld_length` of them); earlier domain labels
//! may contain digits and hyphens.

use crate::classify::{
    is_digit, is_domain_label_char, is_letter, is_local_email_char, SymbolCategory,
};
use crate::core::{Automaton, Context};
use serde::{Deserialize, Serialize};

/// Shortest accepted top-level domain.
pub const DEFAULT_MIN_TLD_LENGTH: usize = 2;

crate::state_enum! {
    /// States of the email automaton.
    pub enum EmailState {
        Start("S", "Start. Waiting for the first character of the local part."),
        Local("L", "Local part (before @). Letters, digits and . _ % + - are allowed."),
        Domain("D", "Domain label: letters, digits and hyphens, labels separated by dots."),
        AfterDot("AFTER_DOT", "A dot was read in the domain; a new label or the TLD begins."),
        Tld("TLD", "Top-level domain such as com: letters only, at least two of them."),
        Trap("TRAP", "Trap: the input can no longer be a valid email address."),
    }
    trap: [Trap]
}

/// Flags and counters of one email run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContext {
    /// An `@` separated the local part from the domain
    pub seen_at: bool,
    /// At least one dot appeared in the domain
    pub seen_dot: bool,
    pub local_length: usize,
    /// Letters since the last domain dot
    pub tld_length: usize,
    pub trap: bool,
}

impl Context for EmailContext {
    fn is_trapped(&self) -> bool {
        self.trap
    }
}

/// DFA for email addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailAutomaton {
    min_tld_length: usize,
}

impl EmailAutomaton {
    pub const fn new() -> Self {
        Self::with_min_tld_length(DEFAULT_MIN_TLD_LENGTH)
    }

    pub const fn with_min_tld_length(min_tld_length: usize) -> Self {
        Self { min_tld_length }
    }

    pub fn min_tld_length(&self) -> usize {
        self.min_tld_length
    }
}

impl Default for EmailAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

fn trapped(context: &mut EmailContext) -> EmailState {
    context.trap = true;
    EmailState::Trap
}

impl Automaton for EmailAutomaton {
    type State = EmailState;
    type Context = EmailContext;

    fn id(&self) -> &str {
        "email"
    }

    fn states(&self) -> &[EmailState] {
        EmailState::ALL
    }

    fn start(&self) -> EmailState {
        EmailState::Start
    }

    fn trap(&self) -> EmailState {
        EmailState::Trap
    }

    fn init_context(&self) -> EmailContext {
        EmailContext::default()
    }

    fn step(&self, state: &EmailState, symbol: char, context: &mut EmailContext) -> EmailState {
        match state {
            EmailState::Start if is_local_email_char(symbol) => {
                context.local_length = 1;
                EmailState::Local
            }
            EmailState::Local if is_local_email_char(symbol) => {
                context.local_length += 1;
                EmailState::Local
            }
            EmailState::Local if symbol == '@' && context.local_length >= 1 => {
                context.seen_at = true;
                context.tld_length = 0;
                EmailState::Domain
            }
            EmailState::Domain if is_domain_label_char(symbol) => EmailState::Domain,
            EmailState::Domain | EmailState::Tld if symbol == '.' => {
                context.seen_dot = true;
                context.tld_length = 0;
                EmailState::AfterDot
            }
            EmailState::AfterDot if is_letter(symbol) => {
                context.tld_length = 1;
                EmailState::Tld
            }
            EmailState::Tld if is_letter(symbol) => {
                context.tld_length += 1;
                EmailState::Tld
            }
            // Not a TLD after all: the domain continues with another label.
            EmailState::AfterDot | EmailState::Tld if is_digit(symbol) || symbol == '-' => {
                EmailState::Domain
            }
            EmailState::Trap => EmailState::Trap,
            _ => trapped(context),
        }
    }

    fn is_accepting(&self, state: &EmailState, context: &EmailContext) -> bool {
        *state == EmailState::Tld
            && context.seen_at
            && context.seen_dot
            && context.tld_length >= self.min_tld_length
            && !context.trap
    }

    fn categorize(&self, symbol: char) -> SymbolCategory {
        SymbolCategory::of(symbol)
    }

    fn hint(&self, category: SymbolCategory) -> &'static str {
        match category {
            SymbolCategory::Invalid => "Character not allowed in an email address",
            other => other.hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    fn states_of(input: &str) -> Vec<String> {
        let email = EmailAutomaton::default();
        let mut state = email.start();
        let mut context = email.init_context();
        let mut names = vec![state.name().to_string()];
        for symbol in input.chars() {
            state = email.step(&state, symbol, &mut context);
            names.push(state.name().to_string());
        }
        names
    }

    #[test]
    fn start_moves_to_local_on_local_char() {
        let email = EmailAutomaton::default();
        let mut context = email.init_context();
        let next = email.step(&EmailState::Start, '+', &mut context);
        assert_eq!(next, EmailState::Local);
        assert_eq!(context.local_length, 1);
    }

    #[test]
    fn start_traps_on_at() {
        let email = EmailAutomaton::default();
        let mut context = email.init_context();
        let next = email.step(&EmailState::Start, '@', &mut context);
        assert_eq!(next, EmailState::Trap);
        assert!(context.trap);
    }

    #[test]
    fn at_resets_tld_tracking() {
        let email = EmailAutomaton::default();
        let mut context = EmailContext {
            local_length: 3,
            tld_length: 5,
            ..EmailContext::default()
        };
        let next = email.step(&EmailState::Local, '@', &mut context);
        assert_eq!(next, EmailState::Domain);
        assert!(context.seen_at);
        assert_eq!(context.tld_length, 0);
    }

    #[test]
    fn at_requires_local_part() {
        let email = EmailAutomaton::default();
        let mut context = email.init_context();
        let next = email.step(&EmailState::Local, '@', &mut context);
        assert_eq!(next, EmailState::Trap);
    }

    #[test]
    fn second_at_traps_in_domain() {
        assert_eq!(states_of("a@@"), vec!["S", "L", "D", "TRAP"]);
    }

    #[test]
    fn digit_after_dot_returns_to_domain() {
        assert_eq!(
            states_of("a@b.1c.de"),
            vec!["S", "L", "D", "D", "AFTER_DOT", "D", "D", "AFTER_DOT", "TLD", "TLD"]
        );
    }

    #[test]
    fn hyphen_inside_tld_returns_to_domain() {
        assert_eq!(
            states_of("a@b.c-d"),
            vec!["S", "L", "D", "D", "AFTER_DOT", "TLD", "D", "D"]
        );
    }

    #[test]
    fn consecutive_dots_trap() {
        assert_eq!(
            states_of("a@b..c"),
            vec!["S", "L", "D", "D", "AFTER_DOT", "TRAP", "TRAP"]
        );
    }

    #[test]
    fn trap_is_absorbing_and_leaves_context_alone() {
        let email = EmailAutomaton::default();
        let mut context = EmailContext {
            trap: true,
            local_length: 2,
            ..EmailContext::default()
        };
        let before = context;
        for symbol in ['a', '@', '.', '1', ' '] {
            assert_eq!(email.step(&EmailState::Trap, symbol, &mut context), EmailState::Trap);
        }
        assert_eq!(context, before);
    }

    #[test]
    fn acceptance_requires_tld_length() {
        let email = EmailAutomaton::default();
        let mut context = EmailContext {
            seen_at: true,
            seen_dot: true,
            local_length: 1,
            tld_length: 1,
            trap: false,
        };
        assert!(!email.is_accepting(&EmailState::Tld, &context));
        context.tld_length = 2;
        assert!(email.is_accepting(&EmailState::Tld, &context));
        assert!(!email.is_accepting(&EmailState::Domain, &context));
    }

    #[test]
    fn configurable_tld_minimum() {
        let strict = EmailAutomaton::with_min_tld_length(3);
        assert!(!strict.accepts("a@b.co"));
        assert!(strict.accepts("a@b.com"));
        assert_eq!(strict.min_tld_length(), 3);
    }

    #[test]
    fn labels_match_state_set() {
        let names: Vec<&str> = EmailState::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["S", "L", "D", "AFTER_DOT", "TLD", "TRAP"]);
    }

    #[test]
    fn invalid_hint_mentions_email() {
        let email = EmailAutomaton::default();
        assert!(email.hint(SymbolCategory::Invalid).contains("email"));
        assert_eq!(email.hint(SymbolCategory::Dot), SymbolCategory::Dot.hint());
    }
}
