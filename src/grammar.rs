//! Grammar variants and the transition function of the address automaton
//!
//! A [`Grammar`] is the configuration of the automaton: which extra symbols
//! are allowed in the local part and in domain labels, whether a dot after
//! the top level label starts a new one, and the declarative pattern that
//! accompanies the variant.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::{
    classify::{self, CharClass, Kind},
    Error,
};

/// State of the address automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// Nothing consumed yet
    Start,
    /// Inside the local part
    Local,
    /// Just consumed the `@`
    AfterAt,
    /// Inside a domain label
    Domain,
    /// Just consumed the dot before the top level label
    AfterDot,
    /// Inside the top level label, the only accepting state
    Tld,
}

impl State {
    /// All states, in scanning order.
    pub const ALL: [State; 6] = [
        State::Start,
        State::Local,
        State::AfterAt,
        State::Domain,
        State::AfterDot,
        State::Tld,
    ];

    pub fn is_accepting(self) -> bool {
        self == State::Tld
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            State::Start => "start",
            State::Local => "local part",
            State::AfterAt => "after @",
            State::Domain => "domain",
            State::AfterDot => "after dot",
            State::Tld => "top level label",
        })
    }
}

/// Outcome of feeding one character to a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Next(State),
    Reject,
}

/// One grammar variant
///
/// The three named variants are [`Grammar::PLAIN`], [`Grammar::LOOSE_TLD`]
/// and [`Grammar::PERMISSIVE`] (the default). Custom variants are built from
/// [`Grammar::new`]:
///
/// ```
/// use addrcheck::{automaton::Dfa, Grammar};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// const UNDERSCORES: Grammar = Grammar::new("underscores")
///     .with_local_extra("_")
///     .with_domain_extra("_");
///
/// let dfa = Dfa::new(UNDERSCORES)?;
/// assert!(dfa.recognize("first_last@my_host.org"));
/// assert!(!dfa.recognize("first.last@host.org"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grammar {
    name: &'static str,
    local_extra: &'static str,
    domain_extra: &'static str,
    tld_reentry: bool,
    pattern: Option<&'static str>,
}

impl Grammar {
    /// Dots in the local part, alphanumeric domain and top level label.
    pub const PLAIN: Grammar = Grammar::new("plain")
        .with_local_extra(".")
        .with_pattern(r"[a-zA-Z0-9.]+@[a-zA-Z0-9]+\.[a-zA-Z0-9]+");

    /// Same automaton as [`Grammar::PLAIN`], but the pattern lets the part
    /// after the first dot contain further dots.
    pub const LOOSE_TLD: Grammar = Grammar::new("loose-tld")
        .with_local_extra(".")
        .with_pattern(r"[a-zA-Z0-9.]+@[a-zA-Z0-9]+\.[a-zA-Z0-9.]+");

    /// `.`, `_`, `+` and `-` in the local part, `-` in domain labels.
    pub const PERMISSIVE: Grammar = Grammar::new("permissive")
        .with_local_extra("._+-")
        .with_domain_extra("-")
        .with_pattern(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+");

    /// Every named variant.
    pub const VARIANTS: [Grammar; 3] = [Grammar::PLAIN, Grammar::LOOSE_TLD, Grammar::PERMISSIVE];

    /// Creates a grammar with no extra symbols, no TLD re-entry and no
    /// declarative pattern of its own.
    pub const fn new(name: &'static str) -> Self {
        Grammar {
            name,
            local_extra: "",
            domain_extra: "",
            tld_reentry: false,
            pattern: None,
        }
    }

    /// Symbols allowed in the local part after its first character.
    pub const fn with_local_extra(mut self, symbols: &'static str) -> Self {
        self.local_extra = symbols;
        self
    }

    /// Symbols allowed in a domain label after its first character.
    pub const fn with_domain_extra(mut self, symbols: &'static str) -> Self {
        self.domain_extra = symbols;
        self
    }

    /// Lets a dot inside the top level label start another label, so that
    /// `user@mail.example.com` is accepted. Off in every named variant.
    pub const fn with_tld_reentry(mut self, reentry: bool) -> Self {
        self.tld_reentry = reentry;
        self
    }

    /// Declarative pattern shipped with this variant, without anchors.
    pub const fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn local_extra(&self) -> &'static str {
        self.local_extra
    }

    pub fn domain_extra(&self) -> &'static str {
        self.domain_extra
    }

    pub fn tld_reentry(&self) -> bool {
        self.tld_reentry
    }

    pub fn pattern(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Checks that the extra symbols cannot shadow the structural ones.
    pub fn validate(&self) -> Result<(), Error> {
        if self.local_extra.contains('@') || self.domain_extra.contains('@') {
            return Err(Error::InvalidGrammar("`@` cannot be an extra symbol"));
        }
        if self.domain_extra.contains('.') {
            return Err(Error::InvalidGrammar(
                "`.` cannot be a domain label extra symbol",
            ));
        }
        Ok(())
    }

    /// Classifies `c` under this grammar.
    pub fn classify(&self, c: char) -> CharClass {
        let permissive = Grammar::PERMISSIVE;
        let (local_extra, domain_extra) = if self.local_extra == permissive.local_extra
            && self.domain_extra == permissive.domain_extra
        {
            (classify::is_local_extra(c), classify::is_domain_extra(c))
        } else {
            (self.local_extra.contains(c), self.domain_extra.contains(c))
        };

        CharClass {
            kind: classify::kind(c),
            local_extra,
            domain_extra,
        }
    }

    /// The transition function. Every state and class pair has an outcome.
    pub fn transition(&self, state: State, class: CharClass) -> Transition {
        use self::{
            State::{AfterAt, AfterDot, Domain, Local, Start, Tld},
            Transition::{Next, Reject},
        };

        match state {
            Start => match class.kind {
                Kind::Letter | Kind::Digit => Next(Local),
                Kind::At | Kind::Dot | Kind::Symbol => Reject,
            },
            Local => match class.kind {
                Kind::Letter | Kind::Digit => Next(Local),
                Kind::At => Next(AfterAt),
                Kind::Dot | Kind::Symbol if class.local_extra => Next(Local),
                Kind::Dot | Kind::Symbol => Reject,
            },
            AfterAt => match class.kind {
                Kind::Letter | Kind::Digit => Next(Domain),
                Kind::At | Kind::Dot | Kind::Symbol => Reject,
            },
            Domain => match class.kind {
                Kind::Letter | Kind::Digit => Next(Domain),
                Kind::Dot => Next(AfterDot),
                Kind::Symbol if class.domain_extra => Next(Domain),
                Kind::At | Kind::Symbol => Reject,
            },
            AfterDot => match class.kind {
                Kind::Letter => Next(Tld),
                Kind::Digit | Kind::At | Kind::Dot | Kind::Symbol => Reject,
            },
            Tld => match class.kind {
                Kind::Letter => Next(Tld),
                Kind::Dot if self.tld_reentry => Next(AfterDot),
                Kind::Digit | Kind::At | Kind::Dot | Kind::Symbol => Reject,
            },
        }
    }

    /// Feeds one character to `state`.
    pub fn step(&self, state: State, c: char) -> Transition {
        self.transition(state, self.classify(c))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::PERMISSIVE
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name)
    }
}

impl FromStr for Grammar {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        Grammar::VARIANTS
            .into_iter()
            .find(|grammar| grammar.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownGrammar(name.to_owned()))
    }
}
