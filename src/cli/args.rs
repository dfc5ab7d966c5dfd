//! CLI argument definitions

use crate::engine::Constraints;
use crate::sort::{SortSpec, SortSpecError};
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordtool")]
#[command(about = "Find words in the dictionary that meet various letter-based constraints")]
#[command(version)]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the number of words found, not the words themselves
    #[arg(short = 'c', long)]
    pub count_only: bool,

    /// Sort order for output words: 'a'/'A' alphabetical ascending/descending,
    /// 'l'/'L' length ascending/descending, 'r' to reverse the order
    #[arg(short, long, value_parser = parse_sort_spec)]
    pub sort: Option<SortSpec>,

    /// Dictionary file to search within (use '-' for stdin)
    #[arg(short, long, value_name = "FILENAME")]
    pub dictionary: Option<PathBuf>,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Custom configuration file path
    #[arg(long, value_name = "FILENAME")]
    pub config: Option<PathBuf>,

    /// Remember the given --dictionary and --sort as defaults
    #[arg(long)]
    pub save_defaults: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Filtering options.
///
/// Each is optional; an unspecified or empty option leaves the constraint
/// inactive. For -a, -l and -i the number of times a letter occurs in the
/// option string is the number of occurrences allowed or required.
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Filtering arguments")]
pub struct FilterArgs {
    /// Letters available for constructing words; words may only use these
    /// ('?' is a wildcard for any one letter) (conflicts with -l)
    #[arg(short, long, default_value = "", conflicts_with = "limited")]
    pub available: String,

    /// Letters in limited supply; all other letters are unlimited unless
    /// excluded with -x (conflicts with -a)
    #[arg(short, long, default_value = "")]
    pub limited: String,

    /// Letters to exclude: words must contain none of these
    #[arg(short = 'x', long, default_value = "")]
    pub exclude: String,

    /// Letters to include: words must contain all of these
    #[arg(short, long, default_value = "")]
    pub include: String,

    /// Words must match this regular expression
    #[arg(short, long, default_value = "", value_name = "REGULAR_EXPRESSION")]
    pub pattern: String,

    /// Minimum length of word to find
    #[arg(long = "min", default_value_t = 0, value_name = "MIN_LENGTH")]
    pub min_length: usize,

    /// Maximum length of word to find
    #[arg(long = "max", default_value_t = 0, value_name = "MAX_LENGTH")]
    pub max_length: usize,
}

impl From<&FilterArgs> for Constraints {
    fn from(args: &FilterArgs) -> Self {
        Self {
            available_letters: args.available.clone(),
            limited_letters: args.limited.clone(),
            excluded_letters: args.exclude.clone(),
            included_letters: args.include.clone(),
            pattern: args.pattern.clone(),
            min_length: args.min_length,
            max_length: args.max_length,
        }
    }
}

fn parse_sort_spec(s: &str) -> Result<SortSpec, SortSpecError> {
    s.parse()
}
