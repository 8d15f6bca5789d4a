//! Character classes consumed by the automaton
//!
//! Only ASCII letters and digits are alphanumeric here. Every other code
//! point, including non-ASCII letters and control characters, is a
//! [`Kind::Symbol`] and is accepted only where a grammar lists it as an extra.

/// Coarse class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `A-Z` / `a-z`
    Letter,
    /// `0-9`
    Digit,
    /// `@`
    At,
    /// `.`
    Dot,
    /// Anything else
    Symbol,
}

/// Class of a character under a given grammar
///
/// `local_extra` and `domain_extra` record whether the grammar admits the
/// character as an extra symbol in the local part or in a domain label. A
/// `.` can be both a [`Kind::Dot`] and a local extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass {
    pub kind: Kind,
    pub local_extra: bool,
    pub domain_extra: bool,
}

// ALPHA          =  %x41-5A / %x61-7A   ; A-Z / a-z
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

// DIGIT          =  %x30-39
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alnum(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Local part extras of the permissive grammar: `.`, `_`, `+`, `-`
///
/// Other grammars list their own extras, see
/// [`Grammar::classify`](crate::grammar::Grammar::classify).
pub fn is_local_extra(c: char) -> bool {
    matches!(c, '.' | '_' | '+' | '-')
}

/// Domain label extras of the permissive grammar: `-`
///
/// Other grammars list their own extras, see
/// [`Grammar::classify`](crate::grammar::Grammar::classify).
pub fn is_domain_extra(c: char) -> bool {
    c == '-'
}

pub fn is_dot(c: char) -> bool {
    c == '.'
}

pub fn is_at(c: char) -> bool {
    c == '@'
}

/// Returns the coarse [`Kind`] of `c`. Total over `char`.
pub fn kind(c: char) -> Kind {
    if is_letter(c) {
        Kind::Letter
    } else if is_digit(c) {
        Kind::Digit
    } else if is_at(c) {
        Kind::At
    } else if is_dot(c) {
        Kind::Dot
    } else {
        Kind::Symbol
    }
}
