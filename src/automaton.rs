//! Deterministic finite automaton recognizer
//!
//! The automaton walks the input one `char` at a time. The current
//! [`State`] is the only thing carried between characters, and the first
//! character without a transition ends the scan.

use crate::{
    grammar::{Grammar, State, Transition},
    Error,
};

/// Result of scanning a whole input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input ended in the accepting state
    Accepted,
    /// A character had no transition from `state`
    Rejected {
        state: State,
        /// Byte offset of `found` in the input
        offset: usize,
        found: char,
    },
    /// The input ended in a non-accepting state
    Incomplete(State),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// Address recognizer driven by a [`Grammar`]
///
/// # Examples
///
/// ```
/// use addrcheck::{automaton::{Dfa, Outcome}, grammar::State};
///
/// let dfa = Dfa::default();
/// assert!(dfa.recognize("a.b+c-d@sub-domain.org"));
/// assert_eq!(dfa.run("a@b"), Outcome::Incomplete(State::Domain));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dfa {
    grammar: Grammar,
}

impl Dfa {
    /// Creates an automaton for `grammar`, which must pass
    /// [`Grammar::validate`].
    pub fn new(grammar: Grammar) -> Result<Self, Error> {
        grammar.validate()?;
        Ok(Dfa { grammar })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Scans `input` and reports where it stopped.
    pub fn run(&self, input: &str) -> Outcome {
        let mut state = State::Start;

        for (offset, found) in input.char_indices() {
            match self.grammar.step(state, found) {
                Transition::Next(next) => state = next,
                Transition::Reject => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%state, offset, ?found, "rejected by {} automaton", self.grammar);

                    return Outcome::Rejected {
                        state,
                        offset,
                        found,
                    };
                }
            }
        }

        if state.is_accepting() {
            Outcome::Accepted
        } else {
            Outcome::Incomplete(state)
        }
    }

    /// Returns `true` iff the whole of `input` belongs to the grammar.
    pub fn recognize(&self, input: &str) -> bool {
        self.run(input).is_accepted()
    }
}

/// Recognizes `input` with the permissive grammar.
///
/// ```
/// assert!(addrcheck::recognize("a@b.co"));
/// assert!(!addrcheck::recognize("a@mail.example.com"));
/// ```
pub fn recognize(input: &str) -> bool {
    Dfa::default().recognize(input)
}
