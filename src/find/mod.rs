use std::time::Instant;

use itertools::Itertools;
use log::info;
use rustc_hash::FxHashSet;

use crate::{
    center::center_match,
    error::Result,
    group::LengthGroups,
    pair::{generate_pairs, Pair},
    symmetry::symmetric_matches,
    theme::Theme,
};

pub mod parallel;
pub mod simple;

pub trait Finder {
    fn find<'s, S: AsRef<str>>(&self, words: &'s [S]) -> Result<Vec<Theme<'s>>>;
}

/// Which pairs may share the two side rows of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairLengthPolicy {
    /// Any two pairs, whatever their lengths. Only the tip letters constrain
    /// the match.
    Mixed,
    /// Both pairs must be the same length.
    SameLength,
}

impl PairLengthPolicy {
    pub fn allows(&self, first: &Pair, second: &Pair) -> bool {
        match self {
            PairLengthPolicy::Mixed => true,
            PairLengthPolicy::SameLength => first.len() == second.len(),
        }
    }
}

impl Default for PairLengthPolicy {
    fn default() -> Self {
        PairLengthPolicy::Mixed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinderConfig {
    pub pair_lengths: PairLengthPolicy,
    /// Report each theme once, in its first matching orientation, instead
    /// of once per orientation. The same words split into different pairs
    /// are still different themes.
    pub collapse_orientations: bool,
}

/// Drops themes whose key has already been seen, when enabled.
pub(crate) struct OrientationFilter<'s> {
    enabled: bool,
    seen: FxHashSet<Vec<Vec<&'s str>>>,
}

impl<'s> OrientationFilter<'s> {
    pub(crate) fn new(config: &FinderConfig) -> OrientationFilter<'s> {
        OrientationFilter {
            enabled: config.collapse_orientations,
            seen: FxHashSet::default(),
        }
    }

    pub(crate) fn keep(&mut self, theme: &Theme<'s>) -> bool {
        !self.enabled || self.seen.insert(theme.key())
    }
}

/// Validated, grouped and paired words, ready to be searched.
///
/// Nothing is matched until one of the theme iterators is driven, so a
/// caller can stop after the first few themes.
#[derive(Debug, Clone)]
pub struct ThemeSearch<'s> {
    groups: LengthGroups<'s>,
    pairs: Vec<Pair<'s>>,
    config: FinderConfig,
}

impl<'s> ThemeSearch<'s> {
    pub fn new<S: AsRef<str>>(words: &'s [S], config: FinderConfig) -> Result<ThemeSearch<'s>> {
        let now = Instant::now();

        let groups = LengthGroups::build(words)?;
        let pairs = generate_pairs(&groups);

        info!(
            "Prepared {} words in {} length groups, {} pairs in {}ms",
            groups.words().len(),
            groups.iter().count(),
            pairs.len(),
            now.elapsed().as_millis()
        );

        Ok(ThemeSearch {
            groups,
            pairs,
            config,
        })
    }

    pub fn words(&self) -> &[&'s str] {
        self.groups.words()
    }

    pub fn pairs(&self) -> &[Pair<'s>] {
        &self.pairs
    }

    /// Every pair against every word for the center row.
    pub fn center_themes(&self) -> impl Iterator<Item = Theme<'s>> + '_ {
        let words = self.groups.words();
        self.pairs
            .iter()
            .flat_map(move |pair| words.iter().filter_map(move |&word| center_match(pair, word)))
    }

    /// Every unordered combination of two pairs the length policy allows.
    pub fn pair_combinations(&self) -> impl Iterator<Item = (&Pair<'s>, &Pair<'s>)> + '_ {
        let policy = self.config.pair_lengths;
        self.pairs
            .iter()
            .tuple_combinations()
            .filter(move |(first, second)| policy.allows(first, second))
    }

    /// Every allowed pair combination through the symmetry matcher, with
    /// orientations collapsed when configured.
    pub fn paired_themes(&self) -> impl Iterator<Item = Theme<'s>> + '_ {
        self.match_pairs(self.pair_combinations())
    }

    /// The paired stage over an arbitrary run of combinations, so a finder
    /// can watch the combinations go by.
    pub(crate) fn match_pairs<'a, I>(
        &'a self,
        combinations: I,
    ) -> impl Iterator<Item = Theme<'s>> + 'a
    where
        I: Iterator<Item = (&'a Pair<'s>, &'a Pair<'s>)> + 'a,
    {
        let mut filter = OrientationFilter::new(&self.config);
        combinations
            .flat_map(|(first, second)| symmetric_matches(first, second))
            .filter(move |theme| filter.keep(theme))
    }

    /// Center themes, then paired themes, produced on demand.
    pub fn themes(&self) -> impl Iterator<Item = Theme<'s>> + '_ {
        self.center_themes().chain(self.paired_themes())
    }
}

/// Runs the whole search on the current thread with default settings.
pub fn find_themes<S: AsRef<str>>(words: &[S]) -> Result<Vec<Theme<'_>>> {
    simple::SimpleFinder::default().find(words)
}
