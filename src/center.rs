use crate::{
    geometry::{letter_count, LetterPair},
    pair::Pair,
    theme::Theme,
};

/// Tries `word` down the center row between the two entries of `pair`.
///
/// Only odd-length words have a middle cell to pivot on; even-length words
/// and words already in the pair never match.
pub fn center_match<'s>(pair: &Pair<'s>, word: &'s str) -> Option<Theme<'s>> {
    if pair.contains(word) || letter_count(word) % 2 == 0 {
        return None;
    }

    let letters = pair.center_letters()?;
    if !has_mirrored_letters(word, letters) {
        return None;
    }

    Some(Theme::Center {
        letters,
        pair: *pair,
        center: word,
    })
}

/// True when some offset `i` from either end of `word` reads `letters`.
/// The cells next to the middle are skipped: two forced letters cannot be
/// squeezed together at the pivot.
fn has_mirrored_letters(word: &str, (a, b): LetterPair) -> bool {
    let letters: Vec<char> = word.chars().collect();
    let last = letters.len() - 1;

    (0..(letters.len() / 2).saturating_sub(1)).any(|i| letters[i] == a && letters[last - i] == b)
}
