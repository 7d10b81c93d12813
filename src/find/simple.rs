use std::time::Instant;

use log::{debug, info};

use crate::{error::Result, theme::Theme};

use super::{Finder, FinderConfig, ThemeSearch};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFinder {
    config: FinderConfig,
}

impl SimpleFinder {
    pub fn new(config: FinderConfig) -> SimpleFinder {
        SimpleFinder { config }
    }
}

impl Finder for SimpleFinder {
    fn find<'s, S: AsRef<str>>(&self, words: &'s [S]) -> Result<Vec<Theme<'s>>> {
        let search = ThemeSearch::new(words, self.config)?;
        let thread_start = Instant::now();

        let mut result: Vec<Theme<'s>> = search.center_themes().collect();
        let center_count = result.len();

        let mut combination_count: u64 = 0;
        let combinations = search.pair_combinations().inspect(|_| {
            combination_count += 1;

            if combination_count % 100_000 == 0 {
                debug!(
                    "Checked {} pair combinations, throughput: {}/ms",
                    combination_count,
                    combination_count as f32 / thread_start.elapsed().as_millis().max(1) as f32
                );
            }
        });
        result.extend(search.match_pairs(combinations));

        info!(
            "Found {} center themes and {} paired themes in {}ms",
            center_count,
            result.len() - center_count,
            thread_start.elapsed().as_millis()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::SimpleFinder;
    use crate::{
        find::{Finder, FinderConfig, PairLengthPolicy, ThemeSearch},
        pair::Pair,
        theme::Theme,
    };

    #[test]
    fn find_works() {
        let words = vec![
            String::from("UHHHHHZHHHH"),
            String::from("AAAXAAAXAAA"),
            String::from("BBBXZBBYBBW"),
            String::from("CCXCCCCCXCC"),
            String::from("FFZFFFFFFFFFU"),
            String::from("WGGGGGGGGGZGG"),
        ];

        let result = SimpleFinder::default().find(&words).unwrap();

        assert_eq!(
            vec![
                Theme::Center {
                    letters: ('X', 'X'),
                    pair: Pair::new("AAAXAAAXAAA", "BBBXZBBYBBW").unwrap(),
                    center: "CCXCCCCCXCC",
                },
                Theme::Paired {
                    letters: [('Z', 'W'), ('U', 'Z')],
                    first: Pair::new("BBBXZBBYBBW", "UHHHHHZHHHH").unwrap(),
                    second: Pair::new("FFZFFFFFFFFFU", "WGGGGGGGGGZGG").unwrap(),
                },
            ],
            result
        );
    }

    #[test]
    fn find_nothing_works() {
        let words: Vec<String> = vec![];
        assert!(SimpleFinder::new(FinderConfig::default())
            .find(&words)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn find_matches_lazy_search() {
        let words = vec![
            "AAAXAAAXAAA",
            "BBBXZBBYBBW",
            "CCXCCCCCXCC",
            "ABBBBBBBA",
            "ACCCCCCCA",
            "ADDDDDDDA",
            "AEEEEEEEA",
        ];

        for config in vec![
            FinderConfig::default(),
            FinderConfig {
                pair_lengths: PairLengthPolicy::SameLength,
                collapse_orientations: true,
            },
        ] {
            let search = ThemeSearch::new(&words, config).unwrap();
            let expected: Vec<Theme> = search.themes().collect();

            assert!(!expected.is_empty());
            assert_eq!(expected, SimpleFinder::new(config).find(&words).unwrap());
        }
    }
}
