use ntuple::TupleSize;
use snafu::prelude::*;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const USAGE: &str = concat!(
    "usage: [path to file of synonyms] [path to file1] [path to file2] ",
    "(optional; default = 3)[tuple size]"
);

/// One comparison: a synonym file, two documents and the tuple size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub synonyms: PathBuf,
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub tuple_size: TupleSize,
}

#[derive(Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(Err)))]
pub enum RequestError {
    #[snafu(display("{USAGE}"))]
    Arity { fields: usize },

    #[snafu(display("{USAGE}"))]
    BlankPath,

    #[snafu(display("{USAGE}"))]
    MissingSynonyms,
}

/// Empty or whitespace-only. Paths that aren't valid UTF-8 are never blank.
fn is_blank(path: &OsStr) -> bool {
    path.to_str().is_some_and(|s| s.trim().is_empty())
}

impl Request {
    /// Build a request from its parts. `tuple_size` is used as given when it is
    /// a positive integer, otherwise `default_size` applies.
    pub fn new<P: Into<PathBuf>>(
        synonyms: P,
        file1: &str,
        file2: &str,
        tuple_size: Option<&str>,
        default_size: TupleSize,
    ) -> Result<Self, RequestError> {
        let synonyms = synonyms.into();
        let blank = is_blank(synonyms.as_os_str())
            || [file1, file2].iter().any(|s| s.trim().is_empty());
        ensure!(!blank, BlankPathErr);

        let tuple_size = tuple_size
            .map(|s| TupleSize::parse_or(s, default_size))
            .unwrap_or(default_size);

        Ok(Self {
            synonyms,
            file1: file1.into(),
            file2: file2.into(),
            tuple_size,
        })
    }

    /// Make every path absolute against `dir`. Absolute paths are kept.
    pub fn resolve(self, dir: &Path) -> Self {
        Self {
            synonyms: dir.join(self.synonyms),
            file1: dir.join(self.file1),
            file2: dir.join(self.file2),
            ..self
        }
    }

    /// Parse an interactive directive line. Fields are separated by single
    /// spaces, so doubled spaces produce blank fields.
    pub fn parse(line: &str, default_size: TupleSize) -> Result<Self, RequestError> {
        let fields = line.split(' ').collect::<Vec<_>>();

        match fields.as_slice() {
            [synonyms, file1, file2] => Self::new(*synonyms, file1, file2, None, default_size),
            [synonyms, file1, file2, n] => {
                Self::new(*synonyms, file1, file2, Some(*n), default_size)
            }
            _ => ArityErr {
                fields: fields.len(),
            }
            .fail(),
        }
    }
}
