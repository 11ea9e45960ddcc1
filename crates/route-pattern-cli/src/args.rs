use anyhow::Result;
use clap::Args;
use route_pattern::CompileOptions;
use std::path::PathBuf;
use tracing::warn;

/// Option flags shared by every subcommand
///
/// Flags are applied on top of `--config`, which is applied on top of the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct PatternArgs {
    /// TOML file with pattern options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Default delimiter for repeated parameters
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Segment separator characters (e.g. "./")
    #[arg(long)]
    pub delimiters: Option<String>,

    /// Do not allow a trailing delimiter
    #[arg(long)]
    pub strict: bool,

    /// Do not anchor at the start of the path
    #[arg(long)]
    pub no_start: bool,

    /// Prefix matching: do not anchor at the end of the path
    #[arg(long)]
    pub no_end: bool,

    /// Extra terminator that may follow a match (repeatable)
    #[arg(long = "ends-with", value_name = "TEXT")]
    pub ends_with: Vec<String>,
}

impl PatternArgs {
    pub fn to_options(&self) -> Result<CompileOptions> {
        let mut options = match &self.config {
            Some(path) => {
                if !path.exists() {
                    warn!("Options file not found: {:?}, using defaults", path);
                }
                CompileOptions::load(path)?
            }
            None => CompileOptions::default(),
        };

        if let Some(delimiter) = &self.delimiter {
            options = options.with_delimiter(delimiter.as_str());
        }
        if let Some(delimiters) = &self.delimiters {
            options = options.with_delimiters(delimiters.as_str());
        }
        if self.strict {
            options = options.with_strict(true);
        }
        if self.no_start {
            options = options.with_start(false);
        }
        if self.no_end {
            options = options.with_end(false);
        }

        Ok(self
            .ends_with
            .iter()
            .fold(options, |options, terminator| {
                options.with_ends_with(terminator.as_str())
            }))
    }
}
