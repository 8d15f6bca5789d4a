//! Declarative pattern recognizer
//!
//! A [`Pattern`] is compiled once and then shared. A match always spans
//! the whole input.

use std::fmt::Write;

use regex::Regex;

use crate::{grammar::Grammar, Error};

/// Whole-string pattern matcher for one grammar variant
///
/// # Examples
///
/// ```
/// use addrcheck::{pattern::Pattern, Grammar};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let pattern = Pattern::new(&Grammar::PERMISSIVE)?;
/// assert!(pattern.is_match("user@mail.example.com"));
/// assert!(!pattern.is_match("user@example"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles the declarative pattern shipped with `grammar`.
    ///
    /// Grammars without one get [`Pattern::equivalent`].
    pub fn new(grammar: &Grammar) -> Result<Self, Error> {
        match grammar.pattern() {
            Some(body) => Pattern::anchored(body),
            None => Pattern::equivalent(grammar),
        }
    }

    /// Compiles a pattern derived from the automaton table of `grammar`,
    /// accepting exactly the strings the automaton accepts.
    pub fn equivalent(grammar: &Grammar) -> Result<Self, Error> {
        grammar.validate()?;

        let local = class(grammar.local_extra());
        let domain = class(grammar.domain_extra());
        let mut body = format!(r"[a-zA-Z0-9][{local}]*@[a-zA-Z0-9][{domain}]*\.[a-zA-Z]+");
        if grammar.tld_reentry() {
            body.push_str(r"(?:\.[a-zA-Z]+)*");
        }
        Pattern::anchored(&body)
    }

    fn anchored(body: &str) -> Result<Self, Error> {
        let regex = Regex::new(&format!(r"\A(?:{body})\z"))?;
        Ok(Pattern { regex })
    }

    /// Source of the compiled pattern, anchors included.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns `true` iff the whole of `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

// Contents of a bracket expression: alphanumerics plus each extra escaped.
fn class(extra: &str) -> String {
    let mut set = String::from("a-zA-Z0-9");
    for c in extra.chars() {
        // `write!` to a `String` cannot fail
        let _ = write!(set, "\\x{{{:X}}}", u32::from(c));
    }
    set
}

/// Matches `input` against the permissive grammar's declarative pattern.
///
/// The pattern is compiled on every call; keep a [`Pattern`] around when
/// matching more than a handful of inputs.
///
/// ```
/// assert!(addrcheck::recognize_pattern("a@b.co"));
/// assert!(addrcheck::recognize_pattern("a@mail.example.com"));
/// assert!(!addrcheck::recognize_pattern("a@b"));
/// ```
pub fn recognize_pattern(input: &str) -> bool {
    Pattern::new(&Grammar::PERMISSIVE).is_ok_and(|pattern| pattern.is_match(input))
}
