//! Greedy, consumption-based tuple matching.
//!
//! Every tuple of the first document is paired with the first tuple of the
//! second document, in extraction order, that is still unconsumed and
//! equivalent to it. Both tuples are then consumed. The result is a maximal
//! matching rather than a maximum one, and it depends on extraction order.
//!
//! Two tuples are equivalent when they are identical, or when some synonym set
//! intersects each of them anywhere. The words need not be in the same
//! position, nor even be the same word of the set, so unrelated tuples that
//! each contain a member of a common set count as a match.
//!
//! The ratio is always taken over the second document's tuple count.

use crate::synonym::Synonyms;
use crate::tuple::Tuple;
use serde::Serialize;

/// Why two tuples were considered equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Equivalence {
    Identical,
    /// Index of the first synonym set that intersects both tuples.
    Synonym { set: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    pub left: usize,
    pub right: usize,
    pub equivalence: Equivalence,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Overlap {
    pub matched: usize,
    pub total: usize,
    pub pairs: Vec<MatchedPair>,
}

impl Overlap {
    /// `matched / total`, or `None` when the second document has no tuples.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.matched as f64 / self.total as f64)
        }
    }

    pub fn identical_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|pair| pair.equivalence == Equivalence::Identical)
            .count()
    }
}

/// Test two tuples for equivalence. Consumed tuples never match.
pub fn matches(t1: &Tuple, t2: &Tuple, synonyms: &Synonyms) -> Option<Equivalence> {
    if t1.is_consumed() || t2.is_consumed() {
        return None;
    }

    if t1 == t2 {
        return Some(Equivalence::Identical);
    }

    synonyms
        .iter()
        .position(|set| set.intersects(t1) && set.intersects(t2))
        .map(|set| Equivalence::Synonym { set })
}

pub fn is_match(t1: &Tuple, t2: &Tuple, synonyms: &Synonyms) -> bool {
    matches(t1, t2, synonyms).is_some()
}

/// Count the tuples of `tuples2` matched by `tuples1`. The inputs are left
/// untouched; matching consumes tuples in private copies.
pub fn compute_overlap(tuples1: &[Tuple], tuples2: &[Tuple], synonyms: &Synonyms) -> Overlap {
    let mut left = tuples1.to_vec();
    let mut right = tuples2.to_vec();
    let mut pairs = Vec::new();

    for (i, t1) in left.iter_mut().enumerate() {
        let found = right
            .iter_mut()
            .enumerate()
            .find_map(|(j, t2)| matches(t1, t2, synonyms).map(|eq| (j, t2, eq)));

        if let Some((j, t2, equivalence)) = found {
            t1.consume();
            t2.consume();
            pairs.push(MatchedPair {
                left: i,
                right: j,
                equivalence,
            });
        }
    }

    Overlap {
        matched: pairs.len(),
        total: tuples2.len(),
        pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::SynonymSet;
    use crate::tuple::{extract_tuples, TupleSize};

    fn t(words: &str) -> Tuple {
        Tuple::new(words.split(' '))
    }

    fn syns(lines: &[&str]) -> Synonyms {
        Synonyms::from_lines(lines)
    }

    #[test]
    fn tuple_matches_itself_without_synonyms() {
        let tuple = t("the cat sat");
        assert_eq!(
            matches(&tuple, &tuple, &Synonyms::new()),
            Some(Equivalence::Identical)
        );
    }

    #[test]
    fn same_words_in_other_order_do_not_match_without_synonyms() {
        assert!(!is_match(&t("a b c"), &t("c b a"), &Synonyms::new()));
    }

    #[test]
    fn consumed_tuples_never_match() {
        let mut tuple = t("a b");
        tuple.consume();
        assert!(!is_match(&tuple, &tuple, &Synonyms::new()));
        assert!(!is_match(&tuple, &t("a b"), &syns(&["a b"])));
    }

    #[test]
    fn synonym_match_on_aligned_words() {
        let synonyms = syns(&["red blue"]);
        assert_eq!(
            matches(&t("red car here"), &t("blue car here"), &synonyms),
            Some(Equivalence::Synonym { set: 0 })
        );
    }

    #[test]
    fn synonym_match_needs_no_alignment() {
        let synonyms = syns(&["red blue"]);
        assert!(is_match(&t("red x y"), &t("p q blue"), &synonyms));
        assert!(is_match(&t("red x y"), &t("red p q"), &synonyms));
    }

    #[test]
    fn synonym_sets_are_not_chained() {
        let synonyms = syns(&["a b", "b c"]);
        assert!(!is_match(&t("a x"), &t("c y"), &synonyms));
    }

    #[test]
    fn first_matching_set_is_reported() {
        let synonyms = syns(&["x y", "a b", "a b c"]);
        assert_eq!(
            matches(&t("a"), &t("b"), &synonyms),
            Some(Equivalence::Synonym { set: 1 })
        );
    }

    #[test]
    fn set_order_does_not_change_outcome_for_disjoint_sets() {
        let tuples1 = vec![t("red car here"), t("big dog ran")];
        let tuples2 = vec![t("large dog ran"), t("blue car here"), t("no match at")];

        let forward = compute_overlap(&tuples1, &tuples2, &syns(&["red blue", "big large"]));
        let reverse = compute_overlap(&tuples1, &tuples2, &syns(&["big large", "red blue"]));

        assert_eq!(forward.matched, 2);
        assert_eq!(forward.ratio(), reverse.ratio());
    }

    #[test]
    fn each_tuple_is_counted_at_most_once() {
        let synonyms = Synonyms::new();

        let many_left = compute_overlap(&[t("a b"), t("a b"), t("a b")], &[t("a b")], &synonyms);
        assert_eq!(many_left.matched, 1);
        assert_eq!(many_left.ratio(), Some(1.0));

        let many_right = compute_overlap(&[t("a b")], &[t("a b"), t("a b")], &synonyms);
        assert_eq!(many_right.matched, 1);
        assert_eq!(many_right.ratio(), Some(0.5));
    }

    #[test]
    fn first_found_partner_wins_even_when_worse() {
        // [a] takes [b] through the first set, leaving [c] with nothing.
        let synonyms = syns(&["a b", "c b"]);
        let overlap = compute_overlap(&[t("a"), t("c")], &[t("b"), t("a")], &synonyms);

        assert_eq!(overlap.matched, 1);
        assert_eq!(
            overlap.pairs,
            vec![MatchedPair {
                left: 0,
                right: 0,
                equivalence: Equivalence::Synonym { set: 0 },
            }]
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let tuples1 = vec![t("a b")];
        let tuples2 = vec![t("a b")];
        compute_overlap(&tuples1, &tuples2, &Synonyms::new());

        assert!(!tuples1[0].is_consumed());
        assert!(!tuples2[0].is_consumed());
        assert_eq!(compute_overlap(&tuples1, &tuples2, &Synonyms::new()).matched, 1);
    }

    #[test]
    fn ratio_uses_second_document_only() {
        let tuples1 = vec![t("a"), t("b"), t("c"), t("d")];
        let tuples2 = vec![t("a"), t("z")];

        assert_eq!(compute_overlap(&tuples1, &tuples2, &Synonyms::new()).ratio(), Some(0.5));
        assert_eq!(compute_overlap(&tuples2, &tuples1, &Synonyms::new()).ratio(), Some(0.25));
    }

    #[test]
    fn empty_second_document_is_undefined() {
        let overlap = compute_overlap(&[t("a b")], &[], &Synonyms::new());
        assert_eq!(overlap.total, 0);
        assert_eq!(overlap.ratio(), None);
    }

    #[test]
    fn counts_identical_pairs() {
        let synonyms = syns(&["cat dog"]);
        let overlap = compute_overlap(&[t("cat"), t("sat")], &[t("dog"), t("sat")], &synonyms);
        assert_eq!(overlap.matched, 2);
        assert_eq!(overlap.identical_count(), 1);
    }

    #[test]
    fn identical_documents_fully_overlap() {
        let n = TupleSize::DEFAULT;
        let tuples1 = extract_tuples(["the cat sat"], n);
        let tuples2 = extract_tuples(["the cat sat"], n);

        assert_eq!(tuples1, vec![t("the cat sat")]);
        assert_eq!(compute_overlap(&tuples1, &tuples2, &Synonyms::new()).ratio(), Some(1.0));
    }

    #[test]
    fn synonym_documents_fully_overlap() {
        let n = TupleSize::DEFAULT;
        let tuples1 = extract_tuples(["red car here"], n);
        let tuples2 = extract_tuples(["blue car here"], n);
        let synonyms: Synonyms = [["red", "blue"].into_iter().collect::<SynonymSet>()]
            .into_iter()
            .collect();

        assert_eq!(compute_overlap(&tuples1, &tuples2, &synonyms).ratio(), Some(1.0));
    }

    #[test]
    fn unrelated_documents_do_not_overlap() {
        let n = TupleSize::DEFAULT;
        let tuples1 = extract_tuples(["one two three four"], n);
        let tuples2 = extract_tuples(["five six seven eight"], n);
        let synonyms = syns(&["alpha beta"]);

        assert_eq!(compute_overlap(&tuples1, &tuples2, &synonyms).ratio(), Some(0.0));
    }
}
