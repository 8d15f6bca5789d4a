//! Conformance harness
//!
//! Runs the automaton and the declarative pattern side by side over a
//! labeled corpus, scores each against the labels and records every input
//! on which they disagree with each other.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    automaton::Dfa,
    corpus::{Corpus, Entry, Label},
    grammar::Grammar,
    pattern::Pattern,
    Error,
};

/// Verdicts of both recognizers on one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdicts {
    pub pattern: bool,
    pub dfa: bool,
}

impl Verdicts {
    pub fn disagree(&self) -> bool {
        self.pattern != self.dfa
    }
}

/// One evaluated corpus entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    pub email: String,
    pub expected: Label,
    pub verdicts: Verdicts,
}

impl Case {
    pub fn pattern_correct(&self) -> bool {
        self.verdicts.pattern == self.expected.is_valid()
    }

    pub fn dfa_correct(&self) -> bool {
        self.verdicts.dfa == self.expected.is_valid()
    }

    /// The recognizers disagree, whichever of them matches the label.
    pub fn disagrees(&self) -> bool {
        self.verdicts.disagree()
    }
}

/// Share of correct verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accuracy {
    /// Nothing was evaluated
    NoData,
    Ratio { correct: usize, total: usize },
}

impl Accuracy {
    pub fn new(correct: usize, total: usize) -> Self {
        if total == 0 {
            Accuracy::NoData
        } else {
            Accuracy::Ratio { correct, total }
        }
    }

    /// Percentage of correct verdicts, `None` without data.
    pub fn percent(&self) -> Option<f64> {
        match *self {
            Accuracy::NoData | Accuracy::Ratio { total: 0, .. } => None,
            Accuracy::Ratio { correct, total } => Some(correct as f64 * 100.0 / total as f64),
        }
    }
}

impl Display for Accuracy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (*self, self.percent()) {
            (Accuracy::Ratio { correct, total }, Some(percent)) => {
                write!(f, "{correct}/{total} ({percent:.1}%)")
            }
            _ => f.write_str("no data"),
        }
    }
}

/// Outcome of one harness run
///
/// Reports built from disjoint sets of cases can be combined with
/// [`Report::merge`], or collected from cases computed anywhere, so a run
/// split across threads adds up to the sequential one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    total: usize,
    pattern_correct: usize,
    dfa_correct: usize,
    skipped: usize,
    cases: Vec<Case>,
}

impl Report {
    /// Number of evaluated entries.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn pattern_correct(&self) -> usize {
        self.pattern_correct
    }

    pub fn dfa_correct(&self) -> usize {
        self.dfa_correct
    }

    /// Number of malformed corpus lines left out of the run.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn pattern_accuracy(&self) -> Accuracy {
        Accuracy::new(self.pattern_correct, self.total)
    }

    pub fn dfa_accuracy(&self) -> Accuracy {
        Accuracy::new(self.dfa_correct, self.total)
    }

    /// Every evaluated case, in corpus order.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Cases on which the two recognizers disagree.
    pub fn disagreements(&self) -> impl Iterator<Item = &Case> + '_ {
        self.cases.iter().filter(|case| case.disagrees())
    }

    pub fn push(&mut self, case: Case) {
        self.total += 1;
        self.pattern_correct += usize::from(case.pattern_correct());
        self.dfa_correct += usize::from(case.dfa_correct());
        self.cases.push(case);
    }

    /// Appends the cases of `other` after those of `self`.
    pub fn merge(mut self, other: Report) -> Report {
        self.total += other.total;
        self.pattern_correct += other.pattern_correct;
        self.dfa_correct += other.dfa_correct;
        self.skipped += other.skipped;
        self.cases.extend(other.cases);
        self
    }
}

impl Extend<Case> for Report {
    fn extend<I: IntoIterator<Item = Case>>(&mut self, iter: I) {
        for case in iter {
            self.push(case);
        }
    }
}

impl FromIterator<Case> for Report {
    fn from_iter<I: IntoIterator<Item = Case>>(iter: I) -> Self {
        let mut report = Report::default();
        report.extend(iter);
        report
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Total tests: {}", self.total)?;
        writeln!(f, "Pattern method accuracy: {}", self.pattern_accuracy())?;
        writeln!(f, "Finite automaton accuracy: {}", self.dfa_accuracy())?;
        writeln!(f, "Skipped lines: {}", self.skipped)?;
        write!(f, "Disagreements: {}", self.disagreements().count())
    }
}

/// Both recognizers for one grammar
///
/// # Examples
///
/// ```
/// use addrcheck::{corpus::Corpus, Grammar, Harness};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let harness = Harness::for_grammar(Grammar::PERMISSIVE)?;
/// let corpus = Corpus::parse("a@b.co,valid\nbad,invalid\nx@y,invalid\nno-comma-here");
///
/// let report = harness.run(&corpus);
/// assert_eq!(report.total(), 3);
/// assert_eq!(report.skipped(), 1);
/// assert_eq!(report.dfa_correct(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Harness {
    dfa: Dfa,
    pattern: Pattern,
}

impl Harness {
    pub fn new(dfa: Dfa, pattern: Pattern) -> Self {
        Harness { dfa, pattern }
    }

    /// Pairs the automaton of `grammar` with its declarative pattern.
    pub fn for_grammar(grammar: Grammar) -> Result<Self, Error> {
        Ok(Harness::new(Dfa::new(grammar)?, Pattern::new(&grammar)?))
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Runs both recognizers on `input`.
    pub fn check(&self, input: &str) -> Verdicts {
        let verdicts = Verdicts {
            pattern: self.pattern.is_match(input),
            dfa: self.dfa.recognize(input),
        };

        #[cfg(feature = "tracing")]
        if verdicts.disagree() {
            tracing::warn!(
                input,
                pattern = verdicts.pattern,
                dfa = verdicts.dfa,
                "recognizers disagree"
            );
        }

        verdicts
    }

    pub fn evaluate(&self, entry: &Entry) -> Case {
        Case {
            email: entry.email.clone(),
            expected: entry.label,
            verdicts: self.check(&entry.email),
        }
    }

    /// Evaluates `entries` in order.
    pub fn run_corpus<'a, I>(&self, entries: I) -> Report
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries
            .into_iter()
            .map(|entry| self.evaluate(entry))
            .collect()
    }

    /// Evaluates a parsed corpus, counting its skipped lines.
    pub fn run(&self, corpus: &Corpus) -> Report {
        let mut report = self.run_corpus(corpus);
        report.skipped = corpus.skipped().len();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            grammar = %self.dfa.grammar(),
            total = report.total,
            skipped = report.skipped,
            "corpus run finished"
        );

        report
    }
}
