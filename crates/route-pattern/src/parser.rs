/// Pattern tokenizer
///
/// Hand-written single-pass scanner. At every position it tries, in order:
///
/// 1. **Escape**: `\x` → `x` appended to the current literal run
/// 2. **Named parameter**: `:name`, `:name(pattern)`, each with an optional `+ * ?`
/// 3. **Unnamed group**: `(pattern)` with an optional `+ * ?`
///
/// Anything else is literal text. The three alternatives start with distinct
/// characters (`\`, `:`, `(`), so at most one can apply at a position.

use tracing::trace;

use crate::config::ParseOptions;
use crate::escape::{escape_group, escape_string};
use crate::token::{Parameter, Token};

/// A recognised construct and the char index just past it
#[derive(Debug, PartialEq)]
struct Scanned {
    lexeme: Lexeme,
    end: usize,
}

#[derive(Debug, PartialEq)]
enum Lexeme {
    Escaped(char),
    Parameter {
        name: Option<String>,
        pattern: Option<String>,
        modifier: Option<char>,
    },
}

/// Running state of the scan
///
/// All mutation during tokenization goes through this accumulator.
struct ParseState<'a> {
    options: &'a ParseOptions,
    tokens: Vec<Token>,
    literal: String,
    literal_escaped: bool,
    positional: usize,
}

impl<'a> ParseState<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            tokens: Vec::new(),
            literal: String::new(),
            literal_escaped: false,
            positional: 0,
        }
    }

    fn push_char(&mut self, c: char) {
        self.literal.push(c);
    }

    fn push_escaped(&mut self, c: char) {
        self.literal.push(c);
        self.literal_escaped = true;
    }

    /// Takes the trailing delimiter off the literal run, if it may serve as a prefix
    ///
    /// A run holding an escaped character keeps its text intact.
    fn take_prefix(&mut self) -> Option<char> {
        if self.literal_escaped {
            return None;
        }
        let last = self.literal.chars().next_back()?;
        if self.options.is_delimiter(last) {
            self.literal.pop();
            Some(last)
        } else {
            None
        }
    }

    fn flush_literal(&mut self) {
        if self.literal.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.literal);
        trace!(literal = %text, "route pattern token");
        self.tokens.push(Token::Literal(text));
        self.literal_escaped = false;
    }

    fn push_parameter(
        &mut self,
        name: Option<String>,
        pattern: Option<String>,
        modifier: Option<char>,
        next: Option<char>,
    ) {
        let prefix = self.take_prefix();
        self.flush_literal();

        let repeat = matches!(modifier, Some('+') | Some('*'));
        let optional = matches!(modifier, Some('?') | Some('*'));
        let partial = optional && matches!((prefix, next), (Some(p), Some(n)) if n != p);

        let delimiter = prefix
            .map(String::from)
            .unwrap_or_else(|| self.options.delimiter.clone());

        let name = name.unwrap_or_else(|| {
            self.positional += 1;
            self.positional.to_string()
        });

        let pattern = match pattern {
            Some(group) if !group.is_empty() => escape_group(&group),
            _ => format!("[^{}]+?", escape_string(&delimiter)),
        };

        let param = Parameter {
            name,
            prefix,
            delimiter,
            optional,
            repeat,
            partial,
            pattern,
        };
        trace!(?param, "route pattern token");
        self.tokens.push(Token::Parameter(param));
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_literal();
        self.tokens
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_modifier(c: char) -> bool {
    matches!(c, '+' | '*' | '?')
}

/// `\` followed by any character except a newline
fn scan_escape(chars: &[char], at: usize) -> Option<Scanned> {
    match chars.get(at + 1) {
        Some(&c) if c != '\n' => Some(Scanned {
            lexeme: Lexeme::Escaped(c),
            end: at + 2,
        }),
        _ => None,
    }
}

/// Parenthesised capture body starting at `chars[at] == '('`
///
/// The body is one or more of: an escape pair, or any char but `\ ( )`.
/// Returns the body and the index past the closing paren.
fn scan_group(chars: &[char], at: usize) -> Option<(String, usize)> {
    if chars.get(at) != Some(&'(') {
        return None;
    }
    let body_start = at + 1;
    let mut k = body_start;
    loop {
        match chars.get(k) {
            Some('\\') => match chars.get(k + 1) {
                Some(&c) if c != '\n' => k += 2,
                _ => return None,
            },
            Some('(') | None => return None,
            Some(')') if k > body_start => {
                return Some((chars[body_start..k].iter().collect(), k + 1));
            }
            Some(')') => return None,
            Some(_) => k += 1,
        }
    }
}

fn scan_modifier(chars: &[char], at: usize) -> (Option<char>, usize) {
    match chars.get(at) {
        Some(&c) if is_modifier(c) => (Some(c), at + 1),
        _ => (None, at),
    }
}

/// `:name` then an optional `(pattern)` then an optional modifier
fn scan_named(chars: &[char], at: usize) -> Option<Scanned> {
    let name_start = at + 1;
    let name_end = chars[name_start..]
        .iter()
        .position(|&c| !is_word_char(c))
        .map_or(chars.len(), |offset| name_start + offset);

    if name_end == name_start {
        return None;
    }

    let name: String = chars[name_start..name_end].iter().collect();
    let (pattern, after_group) = match scan_group(chars, name_end) {
        Some((body, end)) => (Some(body), end),
        None => (None, name_end),
    };
    let (modifier, end) = scan_modifier(chars, after_group);

    Some(Scanned {
        lexeme: Lexeme::Parameter {
            name: Some(name),
            pattern,
            modifier,
        },
        end,
    })
}

/// `(pattern)` then an optional modifier
fn scan_unnamed(chars: &[char], at: usize) -> Option<Scanned> {
    let (body, after_group) = scan_group(chars, at)?;
    let (modifier, end) = scan_modifier(chars, after_group);

    Some(Scanned {
        lexeme: Lexeme::Parameter {
            name: None,
            pattern: Some(body),
            modifier,
        },
        end,
    })
}

fn scan_at(chars: &[char], at: usize) -> Option<Scanned> {
    match chars[at] {
        '\\' => scan_escape(chars, at),
        ':' => scan_named(chars, at),
        '(' => scan_unnamed(chars, at),
        _ => None,
    }
}

/// Tokenizes a route pattern
///
/// Never fails: text that is not an escape, parameter or group is literal.
///
/// # Examples
///
/// ```
/// use route_pattern::{parse, ParseOptions, Token};
///
/// let tokens = parse("/user/:id(\\d+)?", &ParseOptions::default());
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0], Token::Literal("/user".to_string()));
///
/// let id = tokens[1].as_parameter().unwrap();
/// assert_eq!(id.name, "id");
/// assert_eq!(id.prefix, Some('/'));
/// assert_eq!(id.pattern, "\\d+");
/// assert!(id.optional);
/// ```
pub fn parse(pattern: &str, options: &ParseOptions) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut state = ParseState::new(options);
    let mut at = 0;

    while at < chars.len() {
        match scan_at(&chars, at) {
            Some(Scanned {
                lexeme: Lexeme::Escaped(c),
                end,
            }) => {
                state.push_escaped(c);
                at = end;
            }
            Some(Scanned {
                lexeme:
                    Lexeme::Parameter {
                        name,
                        pattern,
                        modifier,
                    },
                end,
            }) => {
                state.push_parameter(name, pattern, modifier, chars.get(end).copied());
                at = end;
            }
            None => {
                state.push_char(chars[at]);
                at += 1;
            }
        }
    }

    state.finish()
}

/// Tokenizes with the default `/` delimiter and `./` delimiter set
pub fn parse_with_defaults(pattern: &str) -> Vec<Token> {
    parse(pattern, &ParseOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lit(s: &str) -> Token {
        Token::Literal(s.to_string())
    }

    #[test]
    fn test_scan_group_simple() {
        assert_eq!(scan_group(&chars(r"(\d+)x"), 0), Some((r"\d+".to_string(), 5)));
    }

    #[test]
    fn test_scan_group_escaped_parens() {
        assert_eq!(
            scan_group(&chars(r"(a\)b)"), 0),
            Some((r"a\)b".to_string(), 6))
        );
    }

    #[test]
    fn test_scan_group_rejects() {
        assert_eq!(scan_group(&chars("()"), 0), None);
        assert_eq!(scan_group(&chars("(abc"), 0), None);
        assert_eq!(scan_group(&chars("(a(b))"), 0), None);
        assert_eq!(scan_group(&chars("(a\\"), 0), None);
        assert_eq!(scan_group(&chars("abc"), 0), None);
    }

    #[test]
    fn test_scan_named_without_group() {
        let scanned = scan_named(&chars(":id/rest"), 0).unwrap();
        assert_eq!(scanned.end, 3);
        assert_eq!(
            scanned.lexeme,
            Lexeme::Parameter {
                name: Some("id".to_string()),
                pattern: None,
                modifier: None,
            }
        );
    }

    #[test]
    fn test_scan_named_requires_word() {
        assert_eq!(scan_named(&chars(":-x"), 0), None);
        assert_eq!(scan_named(&chars(":"), 0), None);
    }

    #[test]
    fn test_scan_named_unclosed_group_is_literal() {
        // the group is dropped, only `:a` is consumed
        let scanned = scan_named(&chars(":a(b"), 0).unwrap();
        assert_eq!(scanned.end, 2);
    }

    #[test]
    fn test_scan_escape_at_end() {
        assert_eq!(scan_escape(&chars("\\"), 0), None);
        assert_eq!(scan_escape(&chars("\\\n"), 0), None);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_with_defaults("").is_empty());
    }

    #[test]
    fn test_parse_literal_only() {
        assert_eq!(parse_with_defaults("/about/us"), vec![lit("/about/us")]);
    }

    #[test]
    fn test_parse_prefix_absorbed() {
        let tokens = parse_with_defaults("/users/:id");
        assert_eq!(tokens[0], lit("/users"));
        let id = tokens[1].as_parameter().unwrap();
        assert_eq!(id.prefix, Some('/'));
        assert_eq!(id.delimiter, "/");
        assert_eq!(id.pattern, "[^/]+?");
    }

    #[test]
    fn test_parse_no_prefix_uses_default_delimiter() {
        let tokens = parse_with_defaults(":id");
        let id = tokens[0].as_parameter().unwrap();
        assert_eq!(id.prefix, None);
        assert_eq!(id.delimiter, "/");
    }

    #[test]
    fn test_parse_dot_prefix() {
        let tokens = parse_with_defaults("/file.:ext");
        assert_eq!(tokens[0], lit("/file"));
        let ext = tokens[1].as_parameter().unwrap();
        assert_eq!(ext.prefix, Some('.'));
        assert_eq!(ext.delimiter, ".");
        assert_eq!(ext.pattern, r"[^\.]+?");
    }

    #[test]
    fn test_parse_escaped_run_keeps_delimiter() {
        let tokens = parse_with_defaults(r"\(x/:id");
        assert_eq!(tokens[0], lit("(x/"));
        assert_eq!(tokens[1].as_parameter().unwrap().prefix, None);
    }

    #[test]
    fn test_parse_escape_flag_resets_after_flush() {
        let tokens = parse_with_defaults(r"\:a/:b/:c");
        assert_eq!(tokens[0], lit(":a/"));
        assert_eq!(tokens[1].as_parameter().unwrap().prefix, None);
        assert_eq!(tokens[2].as_parameter().unwrap().prefix, Some('/'));
    }

    #[test]
    fn test_parse_trailing_text() {
        let tokens = parse_with_defaults("/:id/edit");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], lit("/edit"));
    }

    #[test]
    fn test_parse_partial() {
        let tokens = parse_with_defaults("/:a?-x");
        assert!(tokens[0].as_parameter().unwrap().partial);

        let tokens = parse_with_defaults("/:a?/x");
        assert!(!tokens[0].as_parameter().unwrap().partial);

        // nothing follows
        let tokens = parse_with_defaults("/:a?");
        assert!(!tokens[0].as_parameter().unwrap().partial);

        // no prefix
        let tokens = parse_with_defaults(":a?-x");
        assert!(!tokens[0].as_parameter().unwrap().partial);

        // required parameters are never partial
        let tokens = parse_with_defaults("/:a-x");
        assert!(!tokens[0].as_parameter().unwrap().partial);
    }

    #[test]
    fn test_parse_custom_delimiters() {
        let options = ParseOptions::default()
            .with_delimiter("-")
            .with_delimiters("-");
        let tokens = parse("/a-:b/:c", &options);

        assert_eq!(tokens[0], lit("/a"));
        let b = tokens[1].as_parameter().unwrap();
        assert_eq!(b.prefix, Some('-'));
        assert_eq!(tokens[2], lit("/"));
        let c = tokens[3].as_parameter().unwrap();
        assert_eq!(c.prefix, None);
        assert_eq!(c.delimiter, "-");
        assert_eq!(c.pattern, "[^-]+?");
    }

    #[test]
    fn test_parse_non_ascii_literal() {
        let tokens = parse_with_defaults("/café/:nom");
        assert_eq!(tokens[0], lit("/café"));
        assert_eq!(tokens[1].as_parameter().unwrap().name, "nom");
    }
}
