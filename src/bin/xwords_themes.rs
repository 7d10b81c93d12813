use std::time::Instant;

use clap::{App, Arg};
use log::info;
use xwords_themes::{
    find::{parallel::ParallelFinder, simple::SimpleFinder},
    Finder, FinderConfig, PairLengthPolicy, Theme, ThemeSearch, Tier, WordList,
};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("xwords-themes")
        .about("Finds symmetric crossword themes in a word list")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Word list: one word (or word;score) per line, or JSON")
                .required(true),
        )
        .arg(
            Arg::with_name("tier")
                .short("t")
                .long("tier")
                .value_name("TIER")
                .possible_values(&["fair", "good", "great", "best"])
                .help("Only keep scored words in this tier or better"),
        )
        .arg(
            Arg::with_name("usable-only")
                .short("u")
                .long("usable-only")
                .help("Drop words outside 7 to 15 letters instead of failing"),
        )
        .arg(
            Arg::with_name("same-length")
                .long("same-length")
                .help("Only match pairs of the same length against each other"),
        )
        .arg(
            Arg::with_name("collapse")
                .long("collapse")
                .help("Report each theme once, whatever its orientations"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("COUNT")
                .help("Stop after this many themes"),
        )
        .arg(
            Arg::with_name("parallel")
                .long("parallel")
                .conflicts_with("limit")
                .help("Search on all cores"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print one JSON object per theme"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false),
        )
        .get_matches();

    let input = matches.value_of("input").ok_or("input not included")?;
    let mut list = WordList::load(input).map_err(|err| err.to_string())?;

    if let Some(tier) = matches.value_of("tier") {
        let tier = tier.parse::<Tier>().map_err(|err| err.to_string())?;
        list = list.tier(tier);
    }
    if matches.is_present("usable-only") {
        list = list.usable();
    }
    info!("Searching {} words from {}", list.len(), input);

    let config = FinderConfig {
        pair_lengths: if matches.is_present("same-length") {
            PairLengthPolicy::SameLength
        } else {
            PairLengthPolicy::Mixed
        },
        collapse_orientations: matches.is_present("collapse"),
    };

    let limit = match matches.value_of("limit") {
        Some(limit) => Some(
            limit
                .parse::<usize>()
                .map_err(|_| format!("Failed to parse limit \"{}\"", limit))?,
        ),
        None => None,
    };

    if matches.is_present("profile") {
        start_profiler()?;
    }

    let json = matches.is_present("json");
    let words = list.words();
    let now = Instant::now();

    let count = match limit {
        Some(limit) => {
            let search = ThemeSearch::new(&words, config).map_err(|err| err.to_string())?;
            print_themes(search.themes().take(limit), json)
        }
        None if matches.is_present("parallel") => {
            print_themes(find(ParallelFinder::new(config), &words)?, json)
        }
        None => print_themes(find(SimpleFinder::new(config), &words)?, json),
    };

    info!("Printed {} themes in {}ms", count, now.elapsed().as_millis());
    Ok(())
}

fn find<F: Finder>(finder: F, words: &[String]) -> Result<Vec<Theme<'_>>, String> {
    finder.find(words).map_err(|err| err.to_string())
}

fn print_themes<'s, I: IntoIterator<Item = Theme<'s>>>(themes: I, json: bool) -> usize {
    let mut count = 0;
    for theme in themes {
        if json {
            println!("{}", theme.to_json());
        } else {
            println!("{}", theme);
        }
        count += 1;
    }
    count
}

#[cfg(unix)]
fn start_profiler() -> Result<(), String> {
    let guard = pprof::ProfilerGuard::new(100).map_err(|err| err.to_string())?;
    std::thread::spawn(move || loop {
        if let Ok(report) = guard.report().build() {
            if let Ok(file) = std::fs::File::create("flamegraph.svg") {
                if let Err(err) = report.flamegraph(file) {
                    log::warn!("Failed to write flamegraph: {}", err);
                }
            }
        }
        std::thread::sleep(std::time::Duration::from_secs(5))
    });
    Ok(())
}

#[cfg(not(unix))]
fn start_profiler() -> Result<(), String> {
    Err(String::from("Profiling is only supported on unix"))
}
