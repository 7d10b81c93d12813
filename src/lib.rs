//! Finds crossword themes: long entries whose letters line up once the grid
//! is given 180° rotational symmetry.
//!
//! A theme is either a pair of equal-length entries in two symmetric side
//! rows with a single entry down the center row, or two such pairs whose
//! side rows mirror each other. Only the forced letter alignments are
//! checked; no grid is built.

pub mod center;
pub mod error;
pub mod find;
pub mod geometry;
pub mod group;
pub mod pair;
pub mod symmetry;
pub mod theme;
pub mod wordlist;

pub use crate::{
    error::{ThemeError, WordListError},
    find::{find_themes, Finder, FinderConfig, PairLengthPolicy, ThemeSearch},
    pair::Pair,
    theme::Theme,
    wordlist::{Tier, WordList},
};
