//! Labeled corpora of addresses
//!
//! A corpus is plain text, one `<email>,<label>` record per line. A label of
//! exactly `valid` marks a valid address, any other label an invalid one.
//! Commas cannot be escaped, so an address containing one makes its line
//! malformed. Malformed lines are kept aside
//! as [`SkippedLine`]s and never abort parsing.

mod parsers;

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use chumsky::{error::Cheap, Parser};

use crate::Error;

/// Expected verdict of a corpus entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Label {
    Valid,
    Invalid,
}

impl Label {
    pub fn is_valid(self) -> bool {
        self == Label::Valid
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Valid => "valid",
            Label::Invalid => "invalid",
        }
    }
}

impl From<bool> for Label {
    fn from(valid: bool) -> Self {
        if valid {
            Label::Valid
        } else {
            Label::Invalid
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// An address and the verdict it should get
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub email: String,
    pub label: Label,
}

impl Entry {
    pub fn new<E: Into<String>>(email: E, label: Label) -> Self {
        Entry {
            email: email.into(),
            label,
        }
    }

    /// `true` if the entry is labeled `valid`.
    pub fn expected(&self) -> bool {
        self.label.is_valid()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{},{}", self.email, self.label)
    }
}

impl FromStr for Entry {
    type Err = Error;

    /// Parses a single record.
    ///
    /// ```
    /// use addrcheck::corpus::{Entry, Label};
    ///
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let entry: Entry = "a@b.co,valid".parse()?;
    /// assert_eq!(entry, Entry::new("a@b.co", Label::Valid));
    /// assert!("no-comma-here".parse::<Entry>().is_err());
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(src: &str) -> Result<Self, Error> {
        let (email, label) = parsers::record()
            .parse(src)
            .map_err(|_errs| Error::MalformedRecord(src.to_owned()))?;
        Ok(Entry { email, label })
    }
}

/// A corpus line that is not a record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub content: String,
}

/// Parsed corpus: the well-formed entries, in order, and the skipped lines
///
/// # Examples
///
/// ```
/// use addrcheck::corpus::Corpus;
///
/// let corpus = Corpus::parse("a@b.co,valid\n\nno-comma-here\nbad,invalid\n");
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.skipped().len(), 1);
/// assert_eq!(corpus.skipped()[0].line, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<Entry>,
    skipped: Vec<SkippedLine>,
}

impl Corpus {
    /// Parses corpus text. Blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        let parser = parsers::record();
        let mut corpus = Corpus::default();
        for (index, line) in text.lines().enumerate() {
            corpus.push_line(&parser, index + 1, line);
        }
        corpus
    }

    /// Reads and parses corpus text from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let parser = parsers::record();
        let mut corpus = Corpus::default();
        for (index, line) in reader.lines().enumerate() {
            corpus.push_line(&parser, index + 1, &line?);
        }
        Ok(corpus)
    }

    /// Reads and parses the corpus file at `path`.
    ///
    /// A missing file is reported as [`Error::CorpusNotFound`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::CorpusNotFound(path.to_path_buf()),
            _ => Error::Io(err),
        })?;
        let corpus = Corpus::from_reader(BufReader::new(file))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path.display(),
            entries = corpus.len(),
            skipped = corpus.skipped.len(),
            "loaded corpus"
        );

        Ok(corpus)
    }

    fn push_line<P>(&mut self, parser: &P, line: usize, raw: &str)
    where
        P: Parser<char, (String, Label), Error = Cheap<char>>,
    {
        let content = raw.trim();
        if content.is_empty() {
            return;
        }

        match parser.parse(content) {
            Ok((email, label)) => self.entries.push(Entry { email, label }),
            Err(_errs) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(line, content, "skipping malformed corpus line");

                self.skipped.push(SkippedLine {
                    line,
                    content: content.to_owned(),
                });
            }
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Lines that were not records, in order.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Number of well-formed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Corpus {
    fn from(entries: Vec<Entry>) -> Self {
        Corpus {
            entries,
            skipped: Vec::new(),
        }
    }
}

impl FromIterator<Entry> for Corpus {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Corpus::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
