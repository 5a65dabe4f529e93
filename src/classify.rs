//! Character classification for the automata.
//!
//! Every predicate here is ASCII-only: anything outside the ASCII range is
//! rejected rather than interpreted.

use serde::{Deserialize, Serialize};

/// `A-Z` or `a-z`.
pub fn is_letter(symbol: char) -> bool {
    symbol.is_ascii_alphabetic()
}

/// `a-z`.
pub fn is_lowercase(symbol: char) -> bool {
    symbol.is_ascii_lowercase()
}

/// `A-Z`.
pub fn is_uppercase(symbol: char) -> bool {
    symbol.is_ascii_uppercase()
}

/// `0-9`.
pub fn is_digit(symbol: char) -> bool {
    symbol.is_ascii_digit()
}

pub fn is_alphanumeric(symbol: char) -> bool {
    is_letter(symbol) || is_digit(symbol)
}

/// Characters allowed in the local part of an email address.
pub fn is_local_email_char(symbol: char) -> bool {
    is_alphanumeric(symbol) || matches!(symbol, '.' | '_' | '%' | '+' | '-')
}

/// Characters allowed anywhere in an email domain, dots included.
pub fn is_domain_char(symbol: char) -> bool {
    is_alphanumeric(symbol) || matches!(symbol, '.' | '-')
}

/// Characters allowed inside a single domain label.
pub fn is_domain_label_char(symbol: char) -> bool {
    is_alphanumeric(symbol) || symbol == '-'
}

/// Coarse category of an input character, used to label transitions.
///
/// Consumers that draw a diagram group steps by `(from, to, category)`;
/// the engine itself never branches on a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolCategory {
    Lowercase,
    Uppercase,
    Digit,
    At,
    Dot,
    Underscore,
    Percent,
    Plus,
    Hyphen,
    Invalid,
}

impl SymbolCategory {
    /// Short label suitable for an edge.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lowercase => "letter",
            Self::Uppercase => "LETTER",
            Self::Digit => "digit",
            Self::At => "@",
            Self::Dot => ".",
            Self::Underscore => "_",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Hyphen => "-",
            Self::Invalid => "invalid",
        }
    }

    /// One-sentence explanation of the category.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Lowercase => "Lowercase letter [a-z]",
            Self::Uppercase => "Uppercase letter [A-Z]",
            Self::Digit => "Digit [0-9]",
            Self::At => "Separator between the local part and the domain",
            Self::Dot => "Dot between domain labels; the last segment is the TLD",
            Self::Underscore | Self::Percent | Self::Plus => {
                "Symbol allowed in the local part"
            }
            Self::Hyphen => "Hyphen, allowed in the local part and inside domain labels",
            Self::Invalid => "Character not allowed by the pattern",
        }
    }

    /// Categorize any character the way the email alphabet sees it.
    pub fn of(symbol: char) -> Self {
        match symbol {
            '@' => Self::At,
            '.' => Self::Dot,
            '_' => Self::Underscore,
            '%' => Self::Percent,
            '+' => Self::Plus,
            '-' => Self::Hyphen,
            c if is_lowercase(c) => Self::Lowercase,
            c if is_uppercase(c) => Self::Uppercase,
            c if is_digit(c) => Self::Digit,
            _ => Self::Invalid,
        }
    }
}
