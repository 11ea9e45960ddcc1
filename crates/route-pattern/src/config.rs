// File: src/config.rs
// Purpose: Parse and compile options, loadable from a TOML table

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options used while tokenizing a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Default separator for repeated parameters (default: "/")
    pub delimiter: String,

    /// Characters that count as segment separators, one per char (default: "./")
    pub delimiters: String,
}

/// Options used while synthesizing the regex
///
/// # Examples
///
/// ```
/// use route_pattern::CompileOptions;
///
/// let options = CompileOptions::new()
///     .with_strict(true)
///     .with_end(false)
///     .with_ends_with("?");
///
/// assert!(options.strict);
/// assert!(!options.end);
/// assert_eq!(options.ends_with, vec!["?".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    #[serde(flatten)]
    pub parse: ParseOptions,

    /// Disallow the optional trailing delimiter (default: false)
    pub strict: bool,

    /// Anchor at the start of the input (default: true)
    pub start: bool,

    /// Anchor at the end of the input; false gives prefix matching (default: true)
    pub end: bool,

    /// Literal strings, besides end of input, that may follow a match
    pub ends_with: Vec<String>,
}

fn default_delimiter() -> String {
    "/".to_string()
}

fn default_delimiters() -> String {
    "./".to_string()
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            delimiters: default_delimiters(),
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            strict: false,
            start: true,
            end: true,
            ends_with: Vec::new(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replaces the delimiter set
    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Checks if `c` is in the delimiter set
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the parse-level options
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Sets the default delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.parse.delimiter = delimiter.into();
        self
    }

    /// Replaces the delimiter set
    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.parse.delimiters = delimiters.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: bool) -> Self {
        self.end = end;
        self
    }

    /// Adds one end-of-pattern terminator
    pub fn with_ends_with(mut self, terminator: impl Into<String>) -> Self {
        self.ends_with.push(terminator.into());
        self
    }

    /// Parses options from a TOML document
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse pattern options")
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default options
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: CompileOptions = toml::from_str(&content)
            .with_context(|| format!("Failed to parse options file: {:?}", path))?;

        Ok(options)
    }
}
