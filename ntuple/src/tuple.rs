use crate::tokenize::{tokenize, Word};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Number of consecutive words in a tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleSize(NonZeroUsize);

impl TupleSize {
    pub const DEFAULT: TupleSize = TupleSize(match NonZeroUsize::new(3) {
        Some(n) => n,
        None => unreachable!(),
    });

    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    /// Parse a user-supplied size. Anything that isn't a positive integer falls
    /// back to `default`.
    pub fn parse_or(s: &str, default: TupleSize) -> Self {
        s.trim().parse().unwrap_or(default)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TupleSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for TupleSize {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NonZeroUsize>().map(Self)
    }
}

impl Display for TupleSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `n` consecutive words taken from one line. A consumed tuple is empty and
/// never matches anything again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tuple(Vec<Word>);

impl Tuple {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    pub fn words(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_consumed(&self) -> bool {
        self.0.is_empty()
    }

    pub fn consume(&mut self) {
        self.0.clear();
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

/// What happened to a single line fed to a [`TupleExtractor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Extracted(usize),
    TooShort { words: usize },
}

/// Builds the tuple list of one document a line at a time.
pub struct TupleExtractor {
    size: TupleSize,
    tuples: Vec<Tuple>,
}

impl TupleExtractor {
    pub fn new(size: TupleSize) -> Self {
        let tuples = Vec::new();
        Self { size, tuples }
    }

    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        let words = tokenize(line);
        let n = self.size.get();

        if words.len() < n {
            return LineOutcome::TooShort { words: words.len() };
        }

        let before = self.tuples.len();
        self.tuples
            .extend(words.windows(n).map(|window| Tuple(window.to_vec())));

        LineOutcome::Extracted(self.tuples.len() - before)
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn finish(self) -> Vec<Tuple> {
        self.tuples
    }
}

/// Extract every tuple of `size` words from `lines`, in line order and then
/// window order. Lines with too few words are skipped.
pub fn extract_tuples<I, S>(lines: I, size: TupleSize) -> Vec<Tuple>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = TupleExtractor::new(size);
    for line in lines {
        extractor.push_line(line.as_ref());
    }
    extractor.finish()
}
