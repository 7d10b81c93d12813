//! Reading the word lists the curation pipeline writes out.
//!
//! Accepted shapes:
//!
//! * one word per line (`wls_best.txt`),
//! * one `word;score` per line (`crossword_wordlist_scored.txt`),
//! * a JSON array of words,
//! * a JSON object mapping words to scores (`wordlist.json`).
//!
//! Words are cleaned the same way the pipeline cleans them: anything that is
//! not an ASCII letter is dropped and the rest is uppercased.

use std::{fs, path::Path, str::FromStr};

use log::{debug, warn};
use serde_json::Value;

use crate::{
    error::WordListError,
    geometry::{letter_count, MAX_THEME_LENGTH, MIN_THEME_LENGTH},
};

pub type Result<T> = std::result::Result<T, WordListError>;

/// Quality tiers, best last. A scored word belongs to a tier when its score
/// is strictly above the tier's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Fair,
    Good,
    Great,
    Best,
}

impl Tier {
    pub fn threshold(&self) -> f64 {
        match self {
            Tier::Fair => 25.0,
            Tier::Good => 42.0,
            Tier::Great => 45.0,
            Tier::Best => 47.0,
        }
    }
}

impl FromStr for Tier {
    type Err = WordListError;

    fn from_str(s: &str) -> Result<Tier> {
        match s.to_ascii_lowercase().as_str() {
            "fair" => Ok(Tier::Fair),
            "good" => Ok(Tier::Good),
            "great" => Ok(Tier::Great),
            "best" => Ok(Tier::Best),
            _ => Err(WordListError::UnknownTier(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordList {
    entries: Vec<(String, Option<f64>)>,
}

pub fn cleanup(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl WordList {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<WordList> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let result = WordList::parse(&contents)?;

        debug!("Loaded {} words from {}", result.len(), path.display());
        Ok(result)
    }

    pub fn parse(contents: &str) -> Result<WordList> {
        match contents.trim_start().chars().next() {
            Some('[') | Some('{') => WordList::from_json(serde_json::from_str(contents)?),
            _ => WordList::from_lines(contents),
        }
    }

    pub fn from_json(json: Value) -> Result<WordList> {
        let mut result = WordList::default();

        match json {
            Value::Array(words) => {
                for (index, word) in words.iter().enumerate() {
                    match word.as_str() {
                        Some(word) => result.push(word, None),
                        None => {
                            return Err(WordListError::Format {
                                line: index + 1,
                                content: word.to_string(),
                            })
                        }
                    }
                }
            }
            Value::Object(scores) => {
                for (index, (word, score)) in scores.iter().enumerate() {
                    match score {
                        Value::Number(score) => result.push(word, score.as_f64()),
                        Value::Null => result.push(word, None),
                        _ => {
                            return Err(WordListError::Format {
                                line: index + 1,
                                content: format!("{}: {}", word, score),
                            })
                        }
                    }
                }
            }
            other => return Err(WordListError::JsonShape(other.to_string())),
        }

        Ok(result)
    }

    pub fn from_lines(contents: &str) -> Result<WordList> {
        let mut result = WordList::default();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.split_once(';') {
                Some((word, score)) => {
                    let score = score.trim().parse::<f64>().map_err(|_| WordListError::Format {
                        line: index + 1,
                        content: line.to_owned(),
                    })?;
                    result.push(word, Some(score));
                }
                None => result.push(line, None),
            }
        }

        Ok(result)
    }

    fn push(&mut self, raw: &str, score: Option<f64>) {
        let word = cleanup(raw);
        if word.is_empty() {
            warn!("Skipping \"{}\": no letters left after cleanup", raw);
            return;
        }
        self.entries.push((word, score));
    }

    /// Words scored above the tier's threshold. Unscored words are assumed
    /// to have been tiered already and are kept.
    pub fn tier(&self, tier: Tier) -> WordList {
        self.filter(|_, score| score.map_or(true, |score| score > tier.threshold()))
    }

    /// Words a theme can actually use: 7 to 15 letters.
    pub fn usable(&self) -> WordList {
        self.filter(|word, _| {
            (MIN_THEME_LENGTH..=MAX_THEME_LENGTH).contains(&letter_count(word))
        })
    }

    fn filter<F: Fn(&str, Option<f64>) -> bool>(&self, keep: F) -> WordList {
        WordList {
            entries: self
                .entries
                .iter()
                .filter(|(word, score)| keep(word, *score))
                .cloned()
                .collect(),
        }
    }

    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|(word, _)| word.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
