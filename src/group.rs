use std::collections::BTreeMap;

use log::debug;
use rustc_hash::FxHashSet;

use crate::{
    error::{Result, ThemeError},
    geometry::{letter_count, MAX_THEME_LENGTH, MIN_THEME_LENGTH},
};

/// Words bucketed by length. Built once per search and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LengthGroups<'s> {
    groups: BTreeMap<usize, Vec<&'s str>>,
    words: Vec<&'s str>,
}

impl<'s> LengthGroups<'s> {
    /// Validates every word before grouping anything: a single word outside
    /// 7..=15 fails the whole batch. Repeats of a word keep their first
    /// occurrence only.
    pub fn build<S: AsRef<str>>(words: &'s [S]) -> Result<LengthGroups<'s>> {
        let words: Vec<&'s str> = words.iter().map(|word| word.as_ref()).collect();

        if let Some(word) = words
            .iter()
            .find(|word| !(MIN_THEME_LENGTH..=MAX_THEME_LENGTH).contains(&letter_count(word)))
        {
            return Err(ThemeError::Length {
                word: word.to_string(),
                length: letter_count(word),
            });
        }

        let mut seen = FxHashSet::default();
        let mut result = LengthGroups::default();

        for word in words {
            if !seen.insert(word) {
                debug!("Ignoring repeated word {}", word);
                continue;
            }
            result
                .groups
                .entry(letter_count(word))
                .or_insert_with(Vec::new)
                .push(word);
            result.words.push(word);
        }

        for (length, group) in &result.groups {
            debug!("{} words of length {}", group.len(), length);
        }

        Ok(result)
    }

    /// Distinct words in input order.
    pub fn words(&self) -> &[&'s str] {
        &self.words
    }

    pub fn group(&self, length: usize) -> &[&'s str] {
        self.groups.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'s str])> + '_ {
        self.groups
            .iter()
            .map(|(length, group)| (*length, group.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::LengthGroups;
    use crate::error::ThemeError;

    #[test]
    fn build_works() {
        let words = vec![
            "UHHHHHZHHHH",
            "AAAXAAAXAAA",
            "CCXCCCCXCC",
            "BBBXZBBYBBW",
        ];
        let groups = LengthGroups::build(&words).unwrap();

        assert_eq!(
            vec!["UHHHHHZHHHH", "AAAXAAAXAAA", "BBBXZBBYBBW"],
            groups.group(11)
        );
        assert_eq!(vec!["CCXCCCCXCC"], groups.group(10));
        assert!(groups.group(12).is_empty());
        assert_eq!(
            vec![10, 11],
            groups.iter().map(|(length, _)| length).collect::<Vec<_>>()
        );
        assert_eq!(4, groups.words().len());
    }

    #[test]
    fn build_accepts_string_input() {
        let words = vec![String::from("SEVENLY"), String::from("FIFTEENLETTERSS")];
        let groups = LengthGroups::build(&words).unwrap();

        assert_eq!(vec!["SEVENLY"], groups.group(7));
        assert_eq!(vec!["FIFTEENLETTERSS"], groups.group(15));
    }

    #[test]
    fn short_word_fails_whole_batch() {
        let words = vec!["AAAXAAAXAAA", "SHORT", "BBBXZBBYBBW"];

        assert_eq!(
            Err(ThemeError::Length {
                word: String::from("SHORT"),
                length: 5
            }),
            LengthGroups::build(&words)
        );
    }

    #[test]
    fn length_counts_letters_not_bytes() {
        assert_eq!(
            Err(ThemeError::Length {
                word: String::from("ÉÉÉÉ"),
                length: 4
            }),
            LengthGroups::build(&["ÉÉÉÉ"])
        );

        let groups = LengthGroups::build(&["ÀÀÀÀÀÀÀ", "ÉÉÉÉÉÉÉ", "AAAAAAAAAAAAAA"]).unwrap();
        assert_eq!(vec!["ÀÀÀÀÀÀÀ", "ÉÉÉÉÉÉÉ"], groups.group(7));
        assert_eq!(vec!["AAAAAAAAAAAAAA"], groups.group(14));
    }

    #[test]
    fn long_word_fails_whole_batch() {
        let words = vec!["SIXTEENLETTERSSS"];
        let err = LengthGroups::build(&words).unwrap_err();

        assert!(err.to_string().contains("SIXTEENLETTERSSS"));
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn repeated_words_are_collapsed() {
        let words = vec!["AAAXAAAXAAA", "BBBXZBBYBBW", "AAAXAAAXAAA"];
        let groups = LengthGroups::build(&words).unwrap();

        assert_eq!(vec!["AAAXAAAXAAA", "BBBXZBBYBBW"], groups.group(11));
        assert_eq!(2, groups.words().len());
    }
}
