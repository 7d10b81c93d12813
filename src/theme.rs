use std::fmt;

use serde_json::{json, Value};

use crate::{geometry::LetterPair, pair::Pair};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Theme<'s> {
    /// A pair in the side rows and a single word down the center row.
    Center {
        letters: LetterPair,
        pair: Pair<'s>,
        center: &'s str,
    },
    /// Two pairs in mirrored side rows. `letters` are the side letter pairs
    /// of `second`.
    Paired {
        letters: [LetterPair; 2],
        first: Pair<'s>,
        second: Pair<'s>,
    },
}

impl<'s> Theme<'s> {
    pub fn words(&self) -> Vec<&'s str> {
        match self {
            Theme::Center { pair, center, .. } => vec![pair.left, pair.right, *center],
            Theme::Paired { first, second, .. } => {
                vec![first.left, first.right, second.left, second.right]
            }
        }
    }

    /// The theme's entries with orientation dropped: each pair's words
    /// sorted, then the entries sorted. Flipping a pair or swapping the two
    /// rows keeps the key; splitting the same words into different pairs
    /// does not.
    pub fn key(&self) -> Vec<Vec<&'s str>> {
        let mut entries = match self {
            Theme::Center { pair, center, .. } => vec![pair_key(pair), vec![*center]],
            Theme::Paired { first, second, .. } => vec![pair_key(first), pair_key(second)],
        };
        entries.sort_unstable();
        entries
    }

    pub fn is_center(&self) -> bool {
        matches!(self, Theme::Center { .. })
    }

    pub fn to_json(&self) -> Value {
        match self {
            Theme::Center {
                letters,
                pair,
                center,
            } => json!({
                "kind": "center",
                "letters": letter_pair_json(letters),
                "pair": [pair.left, pair.right],
                "center": center,
            }),
            Theme::Paired {
                letters,
                first,
                second,
            } => json!({
                "kind": "paired",
                "letters": letters.iter().map(letter_pair_json).collect::<Vec<_>>(),
                "first": [first.left, first.right],
                "second": [second.left, second.right],
            }),
        }
    }
}

fn pair_key<'s>(pair: &Pair<'s>) -> Vec<&'s str> {
    let mut words = vec![pair.left, pair.right];
    words.sort_unstable();
    words
}

fn letter_pair_json(&(a, b): &LetterPair) -> Value {
    json!([a.to_string(), b.to_string()])
}

impl fmt::Display for Theme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Center {
                letters: (a, b),
                pair,
                center,
            } => write!(f, "[{}{}] {} + {}", a, b, pair, center),
            Theme::Paired {
                letters: [(a, b), (c, d)],
                first,
                second,
            } => write!(f, "[{}{} {}{}] {} + {}", a, b, c, d, first, second),
        }
    }
}
