//! Password automaton.
//!
//! Approximates `^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)[A-Za-z\d]{8,}$`. The state
//! records which character classes have been seen as three bits `LUD`
//! (lowercase, uppercase, digit); the length lives in the context.

use crate::classify::{is_alphanumeric, is_digit, is_lowercase, is_uppercase, SymbolCategory};
use crate::core::{Automaton, Context, State};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest accepted password.
pub const DEFAULT_MIN_LENGTH: usize = 8;

const TRAP_LABEL: &str = "TRAP";

/// Labels indexed by [`CharClasses::bits`].
const CLASS_LABELS: [&str; 8] = ["000", "001", "010", "011", "100", "101", "110", "111"];

/// Character classes seen so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
}

impl CharClasses {
    pub const NONE: Self = Self::from_bits(0b000);
    /// All three classes present.
    pub const COMPLETE: Self = Self::from_bits(0b111);

    /// Pack as `LUD`, lowercase in the high bit.
    pub const fn bits(self) -> u8 {
        (self.lowercase as u8) << 2 | (self.uppercase as u8) << 1 | self.digit as u8
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self {
            lowercase: bits & 0b100 != 0,
            uppercase: bits & 0b010 != 0,
            digit: bits & 0b001 != 0,
        }
    }

    /// Number of classes present.
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Whether every class in `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.bits() & other.bits() == other.bits()
    }

    /// Add the class of `symbol`. Letters and digits set exactly one bit;
    /// anything else leaves the classes untouched.
    pub fn with_symbol(self, symbol: char) -> Self {
        Self {
            lowercase: self.lowercase || is_lowercase(symbol),
            uppercase: self.uppercase || is_uppercase(symbol),
            digit: self.digit || is_digit(symbol),
        }
    }
}

/// State of the password automaton: a class bit pattern or the trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PasswordState {
    Classes(CharClasses),
    Trap,
}

impl PasswordState {
    /// Every state in layered order: `000`, singles, pairs, `111`, `TRAP`.
    pub const ALL: &'static [PasswordState] = &[
        Self::Classes(CharClasses::from_bits(0b000)),
        Self::Classes(CharClasses::from_bits(0b100)),
        Self::Classes(CharClasses::from_bits(0b010)),
        Self::Classes(CharClasses::from_bits(0b001)),
        Self::Classes(CharClasses::from_bits(0b110)),
        Self::Classes(CharClasses::from_bits(0b101)),
        Self::Classes(CharClasses::from_bits(0b011)),
        Self::Classes(CharClasses::from_bits(0b111)),
        Self::Trap,
    ];

    /// Class bits, or `None` for the trap.
    pub fn classes(&self) -> Option<CharClasses> {
        match self {
            Self::Classes(classes) => Some(*classes),
            Self::Trap => None,
        }
    }
}

impl State for PasswordState {
    fn name(&self) -> &str {
        match self {
            Self::Classes(classes) => CLASS_LABELS[classes.bits() as usize],
            Self::Trap => TRAP_LABEL,
        }
    }

    fn is_trap(&self) -> bool {
        matches!(self, Self::Trap)
    }

    fn description(&self) -> String {
        let Self::Classes(classes) = self else {
            return "Trap: a character other than a letter or digit was read.".to_string();
        };
        let yes_no = |present: bool| if present { "yes" } else { "no" };
        format!(
            "State {}: lowercase {}, uppercase {}, digit {}. Accepts at 111 once the minimum length is reached.",
            self.name(),
            yes_no(classes.lowercase),
            yes_no(classes.uppercase),
            yes_no(classes.digit),
        )
    }
}

impl fmt::Display for PasswordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that is not a password state label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown password state label '{0}'")]
pub struct UnknownStateLabel(pub String);

impl FromStr for PasswordState {
    type Err = UnknownStateLabel;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label == TRAP_LABEL {
            return Ok(Self::Trap);
        }
        CLASS_LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .map(|bits| Self::Classes(CharClasses::from_bits(bits as u8)))
            .ok_or_else(|| UnknownStateLabel(label.to_string()))
    }
}

impl From<PasswordState> for String {
    fn from(state: PasswordState) -> Self {
        state.name().to_string()
    }
}

impl TryFrom<String> for PasswordState {
    type Error = UnknownStateLabel;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Counters of one password run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordContext {
    /// Letters and digits consumed
    pub length: usize,
    pub trap: bool,
}

impl Context for PasswordContext {
    fn is_trapped(&self) -> bool {
        self.trap
    }
}

/// DFA for passwords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordAutomaton {
    min_length: usize,
}

impl PasswordAutomaton {
    pub const fn new() -> Self {
        Self::with_min_length(DEFAULT_MIN_LENGTH)
    }

    pub const fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for PasswordAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton for PasswordAutomaton {
    type State = PasswordState;
    type Context = PasswordContext;

    fn id(&self) -> &str {
        "password"
    }

    fn states(&self) -> &[PasswordState] {
        PasswordState::ALL
    }

    fn start(&self) -> PasswordState {
        PasswordState::Classes(CharClasses::NONE)
    }

    fn trap(&self) -> PasswordState {
        PasswordState::Trap
    }

    fn init_context(&self) -> PasswordContext {
        PasswordContext::default()
    }

    fn step(
        &self,
        state: &PasswordState,
        symbol: char,
        context: &mut PasswordContext,
    ) -> PasswordState {
        let PasswordState::Classes(classes) = state else {
            return PasswordState::Trap;
        };
        if !is_alphanumeric(symbol) {
            context.trap = true;
            return PasswordState::Trap;
        }
        context.length += 1;
        PasswordState::Classes(classes.with_symbol(symbol))
    }

    fn is_accepting(&self, state: &PasswordState, context: &PasswordContext) -> bool {
        *state == PasswordState::Classes(CharClasses::COMPLETE)
            && context.length >= self.min_length
            && !context.trap
    }

    fn categorize(&self, symbol: char) -> SymbolCategory {
        match symbol {
            c if is_lowercase(c) => SymbolCategory::Lowercase,
            c if is_uppercase(c) => SymbolCategory::Uppercase,
            c if is_digit(c) => SymbolCategory::Digit,
            _ => SymbolCategory::Invalid,
        }
    }

    fn hint(&self, category: SymbolCategory) -> &'static str {
        match category {
            SymbolCategory::Lowercase | SymbolCategory::Uppercase | SymbolCategory::Digit => {
                category.hint()
            }
            _ => "Invalid character: only letters and digits are allowed",
        }
    }
}
