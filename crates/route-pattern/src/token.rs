/// Token types produced by the pattern tokenizer
///
/// A parsed pattern is an ordered list of [`Token`]s: literal runs of text and
/// parameters that become capture groups in the compiled regex.

use serde::Serialize;

/// One parsed unit of a route pattern
///
/// Literal text lives in its own variant; parameters carry their full shape.
///
/// # Examples
///
/// ```
/// use route_pattern::{parse_with_defaults, Token};
///
/// let tokens = parse_with_defaults("/users/:id");
/// assert_eq!(tokens[0], Token::Literal("/users".to_string()));
/// assert!(matches!(&tokens[1], Token::Parameter(p) if p.name == "id"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// Text matched verbatim
    Literal(String),
    /// Named (`:id`) or positional (`(\d+)`) capture
    Parameter(Parameter),
}

/// A capturing placeholder in a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Identifier from `:name`, or the 1-based position of an unnamed group
    pub name: String,
    /// Delimiter absorbed from the preceding literal, if any
    pub prefix: Option<char>,
    /// Separator between repetitions of a repeated parameter
    pub delimiter: String,
    /// Set by the `?` and `*` modifiers
    pub optional: bool,
    /// Set by the `+` and `*` modifiers
    pub repeat: bool,
    /// Optional parameter whose prefix stays outside the optional group
    pub partial: bool,
    /// Regex fragment matching the parameter value
    pub pattern: String,
}

impl Token {
    /// Checks if this token is literal text
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// Returns the literal text, if this is a literal token
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Token::Literal(text) => Some(text.as_str()),
            Token::Parameter(_) => None,
        }
    }

    /// Returns the parameter, if this is a parameter token
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Token::Literal(_) => None,
            Token::Parameter(param) => Some(param),
        }
    }
}

impl Parameter {
    /// The modifier character this parameter was declared with
    ///
    /// ```
    /// use route_pattern::parse_with_defaults;
    ///
    /// let tokens = parse_with_defaults("/files/:path*");
    /// let param = tokens[1].as_parameter().unwrap();
    /// assert_eq!(param.modifier(), Some('*'));
    /// ```
    pub fn modifier(&self) -> Option<char> {
        match (self.optional, self.repeat) {
            (true, true) => Some('*'),
            (true, false) => Some('?'),
            (false, true) => Some('+'),
            (false, false) => None,
        }
    }

    /// Prefix rendered as a string (empty when nothing was absorbed)
    pub fn prefix_str(&self) -> String {
        self.prefix.map(String::from).unwrap_or_default()
    }
}

impl From<Parameter> for Token {
    fn from(param: Parameter) -> Self {
        Token::Parameter(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(optional: bool, repeat: bool) -> Parameter {
        Parameter {
            name: "id".to_string(),
            prefix: Some('/'),
            delimiter: "/".to_string(),
            optional,
            repeat,
            partial: false,
            pattern: "[^/]+?".to_string(),
        }
    }

    #[test]
    fn test_modifier_from_flags() {
        assert_eq!(param(false, false).modifier(), None);
        assert_eq!(param(true, false).modifier(), Some('?'));
        assert_eq!(param(false, true).modifier(), Some('+'));
        assert_eq!(param(true, true).modifier(), Some('*'));
    }

    #[test]
    fn test_accessors() {
        let lit = Token::Literal("/about".to_string());
        assert!(lit.is_literal());
        assert_eq!(lit.as_literal(), Some("/about"));
        assert!(lit.as_parameter().is_none());

        let p: Token = param(false, false).into();
        assert!(!p.is_literal());
        assert_eq!(p.as_literal(), None);
        assert_eq!(p.as_parameter().map(|p| p.name.as_str()), Some("id"));
    }

    #[test]
    fn test_prefix_str() {
        assert_eq!(param(false, false).prefix_str(), "/");

        let mut bare = param(false, false);
        bare.prefix = None;
        assert_eq!(bare.prefix_str(), "");
    }
}
