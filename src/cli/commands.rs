//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::engine::{Constraints, WordTool};
use crate::sort::SortSpec;

use super::args::Cli;
use super::paths::PersistentConfig;

/// Dictionary argument meaning "read the word list from stdin".
pub const STDIN_DICTIONARY: &str = "-";

/// Run a search as described by the parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    let config = PersistentConfig::load_from(cli.config.as_deref())?;
    let settings = config.merge_with_cli(
        cli.dictionary.clone(),
        cli.sort.as_ref().map(ToString::to_string),
    );

    if cli.save_defaults {
        save_defaults(&settings, cli.config.as_deref())?;
    }

    let sort = match &cli.sort {
        Some(spec) => Some(spec.clone()),
        None => settings
            .sort
            .as_deref()
            .map(str::parse::<SortSpec>)
            .transpose()
            .context("Invalid sort specifier in config file")?,
    };

    let mut tool = open_word_tool(settings.dictionary.as_deref())?;
    tool.apply(&Constraints::from(&cli.filters))?;

    if cli.verbose {
        report_constraints(&tool);
        eprintln!("Finding words...");
    }

    let mut words = tool.find_words();

    if cli.verbose {
        eprintln!("{} words found\n", words.len().to_string().green().bold());
    }

    if let Some(spec) = &sort {
        debug!(sort = %spec, "sorting results");
        spec.apply(&mut words);
    }

    let rendered = render_results(&words, cli.count_only);
    write_output(cli.output.as_deref(), &rendered)
}

/// Build an engine over the named dictionary, stdin for `-`, or the default
/// word list
pub fn open_word_tool(dictionary: Option<&Path>) -> Result<WordTool> {
    let tool = match dictionary {
        Some(path) if path == Path::new(STDIN_DICTIONARY) => {
            WordTool::from_reader(io::stdin().lock(), "<stdin>")?
        }
        Some(path) => WordTool::from_dictionary_file(path)?,
        None => WordTool::new()?,
    };
    Ok(tool)
}

/// Format found words for output: one per line, or just the count
pub fn render_results(words: &[String], count_only: bool) -> String {
    if count_only {
        format!("{}\n", words.len())
    } else {
        let mut out = words.join("\n");
        out.push('\n');
        out
    }
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(contents.as_bytes())
                .and_then(|_| writer.flush())
                .with_context(|| format!("Failed to write output file: {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

fn save_defaults(settings: &PersistentConfig, config_path: Option<&Path>) -> Result<()> {
    if settings.dictionary.as_deref() == Some(Path::new(STDIN_DICTIONARY)) {
        bail!("Cannot save stdin ('-') as the default dictionary");
    }
    settings.save_to(config_path)?;
    eprintln!("{} default settings", "Saved".green());
    Ok(())
}

fn report_constraints(tool: &WordTool) {
    let label = |text: &str| text.cyan().to_string();

    eprintln!("{} {}", label("Using dictionary:"), tool.dictionary_source());
    eprintln!("{} {}", label("Available letters:"), tool.available_letters());
    eprintln!("{} {}", label("Limited letters:"), tool.limited_letters());
    eprintln!("{} {}", label("Excluded letters:"), tool.excluded_letters());
    eprintln!("{} {}", label("Included letters:"), tool.included_letters());
    eprintln!("{} {}", label("Words must match:"), tool.pattern());
    eprintln!("{} {}", label("Minimum length:"), tool.min_length());
    if tool.max_length() > 0 {
        eprintln!("{} {}", label("Maximum length:"), tool.max_length());
    } else {
        eprintln!("No maximum length set.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_words() {
        let words = vec!["cat".to_string(), "tar".to_string()];
        assert_eq!(render_results(&words, false), "cat\ntar\n");
    }

    #[test]
    fn test_render_count() {
        let words = vec!["cat".to_string(), "tar".to_string()];
        assert_eq!(render_results(&words, true), "2\n");
    }

    #[test]
    fn test_render_nothing_found() {
        assert_eq!(render_results(&[], false), "\n");
        assert_eq!(render_results(&[], true), "0\n");
    }
}
