//! The little bit of plumbing every puzzle binary needs: find and read the
//! input file, set up logging, and time a part.
//!
//! Puzzle logic stays in the year crates.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Run one puzzle solution")]
pub struct Args {
    /// Puzzle input file (defaults to `input/dayNN.txt` in the year's crate)
    pub input: Option<PathBuf>,
}

/// Where a day's input lives when no path is given on the command line.
pub fn default_input_path(crate_dir: impl AsRef<Path>, day: u8) -> PathBuf {
    crate_dir
        .as_ref()
        .join("input")
        .join(format!("day{day:02}.txt"))
}

/// Installs the stderr logger and reads the puzzle input.
///
/// Call it as `aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?`.
pub fn load(crate_dir: &str, day: u8) -> Result<String> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();

    let args = Args::parse();
    let path = args
        .input
        .unwrap_or_else(|| default_input_path(crate_dir, day));

    read(&path)
}

fn read(path: &Path) -> Result<String> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("could not read puzzle input at {}", path.display()))?;

    info!(path = %path.display(), bytes = input.len(), "loaded input");

    Ok(input)
}

pub fn time<F>(f: F)
where
    F: FnOnce(),
{
    let t0 = Instant::now();
    f();
    info!(elapsed = ?t0.elapsed(), "took");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path() {
        assert_eq!(
            default_input_path("/tmp/aoc2020", 7),
            PathBuf::from("/tmp/aoc2020/input/day07.txt")
        );

        assert_eq!(
            default_input_path("/tmp/aoc2020", 25),
            PathBuf::from("/tmp/aoc2020/input/day25.txt")
        );
    }

    #[test]
    fn missing_input_mentions_path() {
        let err = read(Path::new("/definitely/not/here/day01.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here/day01.txt"));
    }

    #[test]
    fn time_runs_the_part_once() {
        let mut runs = 0;
        time(|| runs += 1);
        assert_eq!(runs, 1);
    }

    #[test]
    fn cli_takes_optional_path() {
        let args = Args::try_parse_from(["day01"]).unwrap();
        assert_eq!(args.input, None);

        let args = Args::try_parse_from(["day01", "my-input.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("my-input.txt")));
    }
}
