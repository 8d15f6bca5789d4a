//! Parser for one corpus record.
//!
//! ```text
//! record          =       email "," label
//! email           =       field
//! label           =       field                      ; "valid", or anything
//!                                                    ;  else for invalid
//! field           =       *(%x00-2B / %x2D-10FFFF)   ; anything but ","
//! ```

use chumsky::{error::Cheap, prelude::*};

use super::Label;

const SEPARATOR: char = ',';

// field           =       *(%x00-2B / %x2D-10FFFF)
fn field() -> impl Parser<char, String, Error = Cheap<char>> {
    filter(|c: &char| *c != SEPARATOR).repeated().collect()
}

// label           =       field
fn label() -> impl Parser<char, Label, Error = Cheap<char>> {
    field().map(|label| Label::from(label == "valid"))
}

// record          =       email "," label
pub(super) fn record() -> impl Parser<char, (String, Label), Error = Cheap<char>> {
    field()
        .then_ignore(just(SEPARATOR))
        .then(label())
        .then_ignore(end())
}
