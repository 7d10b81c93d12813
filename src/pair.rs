use std::fmt;

use itertools::Itertools;

use crate::{
    geometry::{center_letter_pair, letter_count, side_letter_pairs, LetterPair},
    group::LengthGroups,
};

/// Two distinct, equal-length words laid out left to right in the two side
/// rows. `reversed` gives the other orientation of the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<'s> {
    pub(crate) left: &'s str,
    pub(crate) right: &'s str,
}

impl<'s> Pair<'s> {
    pub fn new(left: &'s str, right: &'s str) -> Option<Pair<'s>> {
        if left == right || letter_count(left) != letter_count(right) {
            return None;
        }
        Some(Pair { left, right })
    }

    pub fn left(&self) -> &'s str {
        self.left
    }

    pub fn right(&self) -> &'s str {
        self.right
    }

    pub fn len(&self) -> usize {
        letter_count(self.left)
    }

    pub fn reversed(&self) -> Pair<'s> {
        Pair {
            left: self.right,
            right: self.left,
        }
    }

    pub fn orientations(&self) -> [Pair<'s>; 2] {
        [*self, self.reversed()]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.left == word || self.right == word
    }

    pub fn shares_word(&self, other: &Pair) -> bool {
        self.contains(other.left) || self.contains(other.right)
    }

    pub fn center_letters(&self) -> Option<LetterPair> {
        center_letter_pair(self.left, self.right)
    }

    pub fn side_letters(&self) -> [LetterPair; 2] {
        side_letter_pairs(self.left, self.right)
    }
}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// Every unordered pair within each length group, shortest length first and
/// in input order within a group.
pub fn generate_pairs<'s>(groups: &LengthGroups<'s>) -> Vec<Pair<'s>> {
    groups
        .iter()
        .flat_map(|(_, group)| group_pairs(group))
        .collect()
}

pub(crate) fn group_pairs<'a, 's>(group: &'a [&'s str]) -> impl Iterator<Item = Pair<'s>> + 'a {
    group
        .iter()
        .copied()
        .tuple_combinations()
        .filter_map(|(left, right)| Pair::new(left, right))
}

#[cfg(test)]
mod tests {
    use super::{generate_pairs, Pair};
    use crate::group::LengthGroups;

    #[test]
    fn new_rejects_self_and_cross_length() {
        assert!(Pair::new("AAAXAAAXAAA", "AAAXAAAXAAA").is_none());
        assert!(Pair::new("AAAXAAAXAAA", "CCXCCCCXCC").is_none());
        assert!(Pair::new("AAAXAAAXAAA", "BBBXZBBYBBW").is_some());
    }

    #[test]
    fn orientations_works() {
        let pair = Pair::new("AAAXAAAXAAA", "BBBXZBBYBBW").unwrap();
        let [forwards, backwards] = pair.orientations();

        assert_eq!(pair, forwards);
        assert_eq!("BBBXZBBYBBW", backwards.left());
        assert_eq!("AAAXAAAXAAA", backwards.right());
        assert_eq!(pair, backwards.reversed());
    }

    #[test]
    fn shares_word_works() {
        let a = Pair::new("UHHHHHZHHHH", "BBBXZBBYBBW").unwrap();
        let b = Pair::new("AAAXAAAXAAA", "BBBXZBBYBBW").unwrap();
        let c = Pair::new("FFZFFFFFFFFFU", "WGGGGGGGGGZGG").unwrap();

        assert!(a.shares_word(&b));
        assert!(!a.shares_word(&c));
    }

    #[test]
    fn generate_pairs_works() {
        let words = vec![
            "UHHHHHZHHHH",
            "AAAXAAAXAAA",
            "BBBXZBBYBBW",
            "CCXCCCCXCC",
            "DDXDDDDYDD",
            "FFZFFFFFFFFFU",
        ];
        let groups = LengthGroups::build(&words).unwrap();
        let pairs = generate_pairs(&groups);

        let expected = vec![
            ("CCXCCCCXCC", "DDXDDDDYDD"),
            ("UHHHHHZHHHH", "AAAXAAAXAAA"),
            ("UHHHHHZHHHH", "BBBXZBBYBBW"),
            ("AAAXAAAXAAA", "BBBXZBBYBBW"),
        ];
        assert_eq!(
            expected,
            pairs
                .iter()
                .map(|pair| (pair.left(), pair.right()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn generate_pairs_is_quadratic_per_group() {
        let words: Vec<String> = (0..20).map(|i| format!("WORD{:04}", i)).collect();
        let groups = LengthGroups::build(&words).unwrap();

        assert_eq!(20 * 19 / 2, generate_pairs(&groups).len());
    }
}
