use crate::{geometry::mirrored, pair::Pair, theme::Theme};

/// Every orientation of `first` and `second` whose side rows mirror each
/// other under a half turn of the grid.
///
/// ```text
///     F
/// BBBXZBBYBBW
///     F     G
///     F     G
///     UHHHHHZHHHH
///           G
/// ```
///
/// `(BBBXZBBYBBW, UHHHHHZHHHH)` has side letters `ZU WZ` and
/// `(FFZFFFFFFFFFU, WGGGGGGGGGZGG)` has `ZW UZ`, which read backwards is
/// `ZU WZ`. Pairs sharing a word never match.
pub fn symmetric_matches<'s>(first: &Pair<'s>, second: &Pair<'s>) -> Vec<Theme<'s>> {
    if first.shares_word(second) {
        return vec![];
    }

    let mut result = vec![];
    for upper in first.orientations() {
        let upper_letters = upper.side_letters();
        for lower in second.orientations() {
            let letters = lower.side_letters();
            if mirrored(&upper_letters, &letters) {
                result.push(Theme::Paired {
                    letters,
                    first: upper,
                    second: lower,
                });
            }
        }
    }
    result
}
