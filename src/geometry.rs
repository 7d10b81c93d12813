//! Letter alignments forced by 180° rotational symmetry of a 15x15 grid.

pub const GRID_WIDTH: usize = 15;
pub const CENTER_COLUMN: usize = 7;

pub const MIN_THEME_LENGTH: usize = 7;
pub const MAX_THEME_LENGTH: usize = GRID_WIDTH;

/// Two grid cells that the symmetry maps onto one another.
pub type LetterPair = (char, char);

/// Length in letters, not bytes.
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

fn pad(length: usize) -> usize {
    GRID_WIDTH - length
}

/// The letters that land on the same center-row cell when `first` and
/// `second` sit in the two symmetric side rows.
///
/// ```text
/// AAAXAAAXAAA
///     BBBXZBBYBBW
/// ```
///
/// gives `('X', 'X')`. Words shorter than 8 never reach the center column.
pub fn center_letter_pair(first: &str, second: &str) -> Option<LetterPair> {
    debug_assert_eq!(letter_count(first), letter_count(second));

    let length = letter_count(first);
    if length <= CENTER_COLUMN {
        return None;
    }

    Some((
        first.chars().nth(CENTER_COLUMN)?,
        second.chars().nth(CENTER_COLUMN - pad(length))?,
    ))
}

/// The two tip alignments a neighbouring pair has to mirror.
///
/// ```text
/// BBBXZBBYBBW
///     UHHHHHZHHHH
/// ```
///
/// gives `[('Z', 'U'), ('W', 'Z')]`. Below 10 letters the entries are only
/// assumed to connect at their ends.
pub fn side_letter_pairs(first: &str, second: &str) -> [LetterPair; 2] {
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();
    debug_assert_eq!(first.len(), second.len());

    let length = first.len();
    let last = length - 1;

    if length < 10 {
        return [(first[0], second[0]), (first[last], second[last])];
    }

    let pad = pad(length);
    [(first[pad], second[0]), (first[last], second[last - pad])]
}

/// True when `first` read forwards equals `second` read backwards, once
/// both are flattened to four letters.
pub fn mirrored(first: &[LetterPair; 2], second: &[LetterPair; 2]) -> bool {
    let forwards = first.iter().flat_map(|&(a, b)| [a, b]);
    let backwards = second.iter().rev().flat_map(|&(a, b)| [b, a]);

    forwards.eq(backwards)
}
