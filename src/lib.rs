//! # addrcheck
//!
//! Two recognizers for a deliberately small email address grammar, and a
//! harness that keeps them honest with each other.
//!
//! * [`automaton::Dfa`] walks the input one character at a time through six
//!   explicit states, `Start`, `Local`, `AfterAt`, `Domain`, `AfterDot` and
//!   `Tld`, accepting only when the input ends in `Tld`.
//! * [`pattern::Pattern`] is a whole-string regular expression for the same
//!   grammar variant.
//! * [`Harness`] runs both over a labeled [`corpus::Corpus`] and reports
//!   their accuracy and every input on which they disagree.
//!
//! The grammar is a value, see [`Grammar`]. The default variant allows `.`,
//! `_`, `+` and `-` in the local part and `-` in domain labels. Addresses
//! with several domain labels such as `user@mail.example.com` are rejected
//! by the automaton while the declarative pattern accepts them, unless TLD
//! re-entry is switched on with [`Grammar::with_tld_reentry`].
//!
//! ## Usage
//!
//! ```rust
//! use addrcheck::{corpus::Corpus, Grammar, Harness};
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! assert!(addrcheck::recognize("a.b+c-d@sub-domain.org"));
//! assert!(!addrcheck::recognize("a@b..co"));
//!
//! let harness = Harness::for_grammar(Grammar::PERMISSIVE)?;
//! let verdicts = harness.check("user@mail.example.com");
//! assert!(verdicts.disagree());
//!
//! let corpus = Corpus::parse("a@b.co,valid\nuser@mail.example.com,valid\n");
//! let report = harness.run(&corpus);
//! assert_eq!(report.disagreements().count(), 1);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * **tracing**: log rejections, skipped corpus lines and disagreements
//!   through the `tracing` crate
//! * **serde**: `Serialize`/`Deserialize` for corpus entries, states and
//!   reports

#![doc(html_root_url = "https://docs.rs/addrcheck/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    rust_2018_idioms,
    clippy::string_add,
    clippy::string_add_assign,
    clippy::clone_on_ref_ptr,
    clippy::verbose_file_reads,
    clippy::unnecessary_self_imports,
    clippy::string_to_string,
    clippy::mem_forget,
    clippy::cast_lossless,
    clippy::inefficient_to_string,
    clippy::inline_always,
    clippy::linkedlist,
    clippy::macro_use_imports,
    clippy::manual_assert,
    clippy::unnecessary_join,
    clippy::wildcard_imports,
    clippy::zero_sized_map_values
)]

pub mod automaton;
pub mod classify;
pub mod corpus;
mod error;
pub mod grammar;
pub mod harness;
pub mod pattern;

pub use crate::{
    automaton::recognize,
    error::Error,
    grammar::Grammar,
    harness::{Harness, Report},
    pattern::recognize_pattern,
};
