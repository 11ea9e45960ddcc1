/// Regex synthesis from route tokens
///
/// Walks the token list once and assembles a single expression:
///
/// | Token                         | Emitted                              |
/// |-------------------------------|--------------------------------------|
/// | literal                       | escaped text                         |
/// | required parameter            | `PREFIX(CAPTURE)`                    |
/// | optional parameter            | `(?:PREFIX(CAPTURE))?`               |
/// | optional, partial parameter   | `PREFIX(CAPTURE)?`                   |
/// | repeated capture              | `(?:P)(?:DELIM(?:P))*`               |
///
/// followed by the end-of-pattern tail selected by `strict`, `end` and `ends_with`.

use fancy_regex::Regex;
use tracing::debug;

use crate::config::CompileOptions;
use crate::error::{PatternError, Result};
use crate::escape::escape_string;
use crate::parser::parse;
use crate::token::{Parameter, Token};

/// A compiled route pattern
///
/// `keys()[i]` names capture group `i + 1` of `regex()`.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    keys: Vec<Parameter>,
}

impl CompiledPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Parameters in capture-group order
    pub fn keys(&self) -> &[Parameter] {
        &self.keys
    }

    /// The assembled regex source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn into_parts(self) -> (Regex, Vec<Parameter>) {
        (self.regex, self.keys)
    }
}

/// Builds the capture body of a parameter, expanding repeats
fn capture_for(param: &Parameter) -> String {
    if param.repeat {
        format!(
            "(?:{pattern})(?:{delim}(?:{pattern}))*",
            pattern = param.pattern,
            delim = escape_string(&param.delimiter),
        )
    } else {
        param.pattern.clone()
    }
}

/// Emits one parameter, handling optional and partial groups
fn parameter_fragment(param: &Parameter) -> String {
    let capture = capture_for(param);
    let prefix = escape_string(&param.prefix_str());

    match (param.optional, param.partial) {
        (true, true) => format!("{prefix}({capture})?"),
        (true, false) => format!("(?:{prefix}({capture}))?"),
        (false, _) => format!("{prefix}({capture})"),
    }
}

/// `t1|t2|...|$` with each custom terminator escaped
fn terminators(options: &CompileOptions) -> String {
    options
        .ends_with
        .iter()
        .map(|t| escape_string(t))
        .chain(std::iter::once("$".to_string()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Appends the end-of-pattern tail
fn push_tail(route: &mut String, options: &CompileOptions, is_end_delimited: bool) {
    let delimiter = escape_string(&options.parse.delimiter);
    let ends_with = terminators(options);

    if options.end {
        if !options.strict {
            route.push_str(&format!("(?:{delimiter})?"));
        }
        if ends_with == "$" {
            route.push('$');
        } else {
            route.push_str(&format!("(?={ends_with})"));
        }
    } else {
        if !options.strict {
            route.push_str(&format!("(?:{delimiter}(?={ends_with}))?"));
        }
        if !is_end_delimited {
            route.push_str(&format!("(?={delimiter}|{ends_with})"));
        }
    }
}

/// Assembles the regex source and collects the keys, without compiling
fn assemble(tokens: &[Token], options: &CompileOptions) -> (String, Vec<Parameter>) {
    let mut route = String::new();
    let mut keys = Vec::new();
    let mut is_end_delimited = tokens.is_empty();

    if options.start {
        route.push('^');
    }

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(text) => {
                route.push_str(&escape_string(text));
                is_end_delimited = i == tokens.len() - 1
                    && text
                        .chars()
                        .next_back()
                        .is_some_and(|c| options.parse.is_delimiter(c));
            }
            Token::Parameter(param) => {
                route.push_str(&parameter_fragment(param));
                keys.push(param.clone());
            }
        }
    }

    push_tail(&mut route, options, is_end_delimited);
    (route, keys)
}

fn build(source_pattern: &str, tokens: &[Token], options: &CompileOptions) -> Result<CompiledPattern> {
    let (route, keys) = assemble(tokens, options);

    debug!(
        pattern = source_pattern,
        regex = %route,
        keys = keys.len(),
        "compiled route pattern"
    );

    let regex = Regex::new(&route).map_err(|source| PatternError::InvalidRegex {
        source_pattern: source_pattern.to_string(),
        regex: route.clone(),
        source,
    })?;

    Ok(CompiledPattern { regex, keys })
}

/// Synthesizes a regex from an already tokenized pattern
pub fn tokens_to_regex(tokens: &[Token], options: &CompileOptions) -> Result<CompiledPattern> {
    build("", tokens, options)
}

/// Compiles a route pattern into a regex and its parameter keys
///
/// # Examples
///
/// ```
/// use route_pattern::{compile, CompileOptions};
///
/// let compiled = compile("/user/:id(\\d+)", &CompileOptions::default()).unwrap();
/// assert_eq!(compiled.keys()[0].name, "id");
///
/// let caps = compiled.regex().captures("/user/42").unwrap().unwrap();
/// assert_eq!(caps.get(1).map(|m| m.as_str()), Some("42"));
/// assert!(!compiled.regex().is_match("/user/abc").unwrap());
/// ```
///
/// # Errors
///
/// [`PatternError::InvalidRegex`] when an inline capture is not valid regex syntax.
pub fn compile(pattern: &str, options: &CompileOptions) -> Result<CompiledPattern> {
    let tokens = parse(pattern, &options.parse);
    build(pattern, &tokens, options)
}

/// Compiles with [`CompileOptions::default`]
pub fn compile_with_defaults(pattern: &str) -> Result<CompiledPattern> {
    compile(pattern, &CompileOptions::default())
}
