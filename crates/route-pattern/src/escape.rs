/// Escaping for text spliced into a synthesized regex
///
/// Two separate tables on purpose:
/// - [`escape_string`] for literal path text, prefixes, delimiters and terminators
/// - [`escape_group`] for user-supplied capture patterns, which are already regex
///   syntax and only need the grouping/assertion characters neutralised

use once_cell::sync::Lazy;
use regex::Regex;

/// `. + * ? = ^ ! : $ { } ( ) [ ] | \`
static STRING_META: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.+*?=^!:${}()\[\]|\\])").expect("static escape pattern"));

/// `= ! : $ / ( )`
static GROUP_META: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([=!:$/()])").expect("static escape pattern"));

/// Escapes literal text so it matches itself
///
/// `/` is not escaped; it has no meaning in the regex dialect.
///
/// ```
/// use route_pattern::escape::escape_string;
///
/// assert_eq!(escape_string("/api/v1.0"), r"/api/v1\.0");
/// assert_eq!(escape_string("a:b"), r"a\:b");
/// ```
pub fn escape_string(text: &str) -> String {
    STRING_META.replace_all(text, r"\$1").into_owned()
}

/// Escapes the characters of an inline capture pattern that would open
/// groups, assertions or anchors
///
/// ```
/// use route_pattern::escape::escape_group;
///
/// assert_eq!(escape_group(r"\d+"), r"\d+");
/// assert_eq!(escape_group("a/b"), r"a\/b");
/// ```
pub fn escape_group(group: &str) -> String {
    GROUP_META.replace_all(group, r"\$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string_metachars() {
        assert_eq!(
            escape_string(".+*?=^!:${}()[]|\\"),
            r"\.\+\*\?\=\^\!\:\$\{\}\(\)\[\]\|\\"
        );
    }

    #[test]
    fn test_escape_string_leaves_plain_text() {
        assert_eq!(escape_string("/users/new-item_2"), "/users/new-item_2");
        assert_eq!(escape_string(""), "");
    }

    #[test]
    fn test_escape_group_metachars() {
        assert_eq!(escape_group("=!:$/()"), r"\=\!\:\$\/\(\)");
    }

    #[test]
    fn test_escape_group_keeps_regex_syntax() {
        // classes, quantifiers and alternation pass through untouched
        assert_eq!(escape_group(r"[a-z]{2,3}|\w+?"), r"[a-z]{2,3}|\w+?");
    }

    #[test]
    fn test_escapers_differ() {
        assert_eq!(escape_string("a.b/c"), r"a\.b/c");
        assert_eq!(escape_group("a.b/c"), r"a.b\/c");
    }
}
