use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::ValueEnum;
use quickopen_fuzzy_search::FuzzySearch;
use quickopen_fuzzy_search::SearchConfig;
use quickopen_fuzzy_search::SearchResult;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Rank a list of candidate paths against a fuzzy query.
#[derive(Debug, Parser)]
#[command(name = "quickopen", version)]
pub struct QuickOpenCli {
    /// Query words; separate words may match anywhere in a candidate.
    #[arg(value_name = "QUERY", num_args = 0.., trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Candidate list, one per line. Reads stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub candidates: Option<PathBuf>,

    /// TOML file with search settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of results.
    #[arg(short = 'n', long = "limit")]
    pub limit: Option<usize>,

    /// Query characters allowed to go unmatched per candidate.
    #[arg(short = 'm', long)]
    pub max_misses: Option<usize>,

    /// Only accept query words that appear literally.
    #[arg(long)]
    pub exact: bool,

    /// Ignore the first N characters of every candidate.
    #[arg(long, value_name = "N")]
    pub start_offset: Option<usize>,

    /// Prefix text output with each result's score.
    #[arg(long)]
    pub scores: bool,

    /// Select the output format.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ndjson,
}

impl QuickOpenCli {
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.candidates.as_ref() {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                self.run_with(BufReader::new(file), &mut out)
            }
            None => self.run_with(std::io::stdin().lock(), &mut out),
        }
    }

    pub fn run_with(&self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        let config = self.search_config()?;
        let targets = read_candidates(input)?;
        let query = self.query.join(" ");
        debug!("searching {} candidates for {query:?}", targets.len());

        let search = FuzzySearch::with_query(config, &query);
        let results = search.search_all(&targets);
        render(&results, self.output_format, self.scores, out)
    }

    /// Settings file first, then command line overrides.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                SearchConfig::from_toml_str(&text)
                    .with_context(|| format!("failed to load {}", path.display()))?
            }
            None => SearchConfig::default(),
        };
        if self.exact {
            config.allow_subsequences = false;
            config.max_misses = 0;
        }
        if let Some(limit) = self.limit {
            config.max_results = limit;
        }
        if let Some(max_misses) = self.max_misses {
            config.max_misses = max_misses;
        }
        if let Some(start_offset) = self.start_offset {
            config.start_offset = start_offset;
        }
        Ok(config)
    }
}

/// Non-empty lines with any trailing `\r` removed.
pub fn read_candidates(input: impl BufRead) -> Result<Vec<String>> {
    let mut targets = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read candidate list")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            targets.push(line.to_string());
        }
    }
    Ok(targets)
}

fn render(
    results: &[SearchResult],
    format: OutputFormat,
    scores: bool,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                if scores {
                    writeln!(out, "{}\t{}", result.score, result.target)?;
                } else {
                    writeln!(out, "{}", result.target)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
        OutputFormat::Ndjson => {
            for result in results {
                serde_json::to_writer(&mut *out, result)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
