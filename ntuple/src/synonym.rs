use crate::tokenize::{tokenize, Word};
use crate::tuple::Tuple;
use std::collections::HashSet;

/// Words that are interchangeable with each other, read from one line of a
/// synonym file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SynonymSet(HashSet<Word>);

impl SynonymSet {
    pub fn from_line(line: &str) -> Self {
        Self(tokenize(line).into_iter().collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Whether any word of `tuple`, in any position, belongs to this set.
    pub fn intersects(&self, tuple: &Tuple) -> bool {
        tuple.words().iter().any(|word| self.0.contains(word))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<W: Into<Word>> FromIterator<W> for SynonymSet {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Synonym sets in file order. Sets are kept apart: two sets sharing a word
/// are not merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Synonyms {
    sets: Vec<SynonymSet>,
}

impl Synonyms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut synonyms = Self::new();
        for line in lines {
            synonyms.push_line(line.as_ref());
        }
        synonyms
    }

    pub fn push_line(&mut self, line: &str) {
        self.sets.push(SynonymSet::from_line(line));
    }

    pub fn iter(&self) -> impl Iterator<Item = &SynonymSet> {
        self.sets.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SynonymSet> {
        self.sets.get(index)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<SynonymSet> for Synonyms {
    fn from_iter<I: IntoIterator<Item = SynonymSet>>(iter: I) -> Self {
        let sets = iter.into_iter().collect();
        Self { sets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_set_per_line() {
        let synonyms = Synonyms::from_lines(["run sprint jog", "Big, LARGE"]);
        assert_eq!(synonyms.len(), 2);

        let second = synonyms.get(1).unwrap();
        assert!(second.contains("big"));
        assert!(second.contains("large"));
        assert!(!second.contains("run"));
    }

    #[test]
    fn duplicate_words_in_a_line_collapse() {
        let set = SynonymSet::from_line("go go gone");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn blank_line_is_the_empty_word_set() {
        let set = SynonymSet::from_line("");
        assert_eq!(set.len(), 1);
        assert!(set.contains(""));
    }

    #[test]
    fn sets_sharing_a_word_are_not_merged() {
        let synonyms = Synonyms::from_lines(["a b", "b c"]);
        assert_eq!(synonyms.len(), 2);
        assert!(!synonyms.get(0).unwrap().contains("c"));
    }

    #[test]
    fn intersects_any_position() {
        let set: SynonymSet = ["red", "blue"].into_iter().collect();
        assert!(set.intersects(&Tuple::new(["car", "is", "blue"])));
        assert!(!set.intersects(&Tuple::new(["car", "is", "green"])));
    }

    #[test]
    fn consumed_tuple_intersects_nothing() {
        let set: SynonymSet = ["red"].into_iter().collect();
        let mut tuple = Tuple::new(["red"]);
        tuple.consume();
        assert!(!set.intersects(&tuple));
    }
}
