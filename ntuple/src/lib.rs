//! N-tuple extraction and synonym-aware overlap between two documents.
//!
//! ```
//! use ntuple::{compute_overlap, extract_tuples, Synonyms, TupleSize};
//!
//! let synonyms = Synonyms::from_lines(["red blue"]);
//! let a = extract_tuples(["Red car, here."], TupleSize::DEFAULT);
//! let b = extract_tuples(["blue car here"], TupleSize::DEFAULT);
//!
//! assert_eq!(compute_overlap(&a, &b, &synonyms).ratio(), Some(1.0));
//! ```

pub mod engine;
pub mod synonym;
pub mod tokenize;
pub mod tuple;

pub use engine::{compute_overlap, is_match, matches, Equivalence, MatchedPair, Overlap};
pub use synonym::{SynonymSet, Synonyms};
pub use tokenize::{normalize, tokenize, Word};
pub use tuple::{extract_tuples, LineOutcome, Tuple, TupleExtractor, TupleSize};
