use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::{
    center::center_match, error::Result, symmetry::symmetric_matches, theme::Theme,
};

use super::{Finder, FinderConfig, OrientationFilter, ThemeSearch};

/// Splits both stages across the rayon pool. Each pair is a unit of work:
/// in the first stage it is tried against every word, in the second against
/// every later pair. Workers share nothing but the read-only search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelFinder {
    config: FinderConfig,
}

impl ParallelFinder {
    pub fn new(config: FinderConfig) -> ParallelFinder {
        ParallelFinder { config }
    }
}

impl Finder for ParallelFinder {
    fn find<'s, S: AsRef<str>>(&self, words: &'s [S]) -> Result<Vec<Theme<'s>>> {
        let search = ThemeSearch::new(words, self.config)?;
        let now = Instant::now();

        let pairs = search.pairs();
        let words = search.words();
        let policy = self.config.pair_lengths;

        let mut result: Vec<Theme<'s>> = pairs
            .par_iter()
            .flat_map_iter(|pair| {
                words
                    .iter()
                    .filter_map(move |&word| center_match(pair, word))
            })
            .collect();
        let center_count = result.len();

        let paired: Vec<Theme<'s>> = pairs
            .par_iter()
            .enumerate()
            .flat_map_iter(|(index, first)| {
                pairs[index + 1..]
                    .iter()
                    .filter(move |second| policy.allows(first, second))
                    .flat_map(move |second| symmetric_matches(first, second))
            })
            .collect();

        // collect keeps pair order, so collapsing picks the same orientation
        // the sequential finder would
        let mut filter = OrientationFilter::new(&self.config);
        result.extend(paired.into_iter().filter(|theme| filter.keep(theme)));

        info!(
            "Found {} center themes and {} paired themes in {}ms on {} threads",
            center_count,
            result.len() - center_count,
            now.elapsed().as_millis(),
            rayon::current_num_threads()
        );

        Ok(result)
    }
}
