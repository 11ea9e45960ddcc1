// Plain-text rendering of tokens, keys and match results

use route_pattern::{Parameter, Token};

fn flags(param: &Parameter) -> String {
    let mut flags = Vec::new();
    if param.optional {
        flags.push("optional");
    }
    if param.repeat {
        flags.push("repeat");
    }
    if param.partial {
        flags.push("partial");
    }
    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(",")
    }
}

pub fn parameter(param: &Parameter) -> String {
    format!(
        ":{name}  prefix={prefix:?} delimiter={delimiter:?} pattern={pattern:?} flags={flags}",
        name = param.name,
        prefix = param.prefix_str(),
        delimiter = param.delimiter,
        pattern = param.pattern,
        flags = flags(param),
    )
}

pub fn token(index: usize, token: &Token) -> String {
    match token {
        Token::Literal(text) => format!("{index:>3}  literal    {text:?}"),
        Token::Parameter(param) => format!("{index:>3}  parameter  {}", parameter(param)),
    }
}

/// One line per key: `name = value` or `name = (none)`
pub fn binding(name: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("    {name} = {value:?}"),
        None => format!("    {name} = (none)"),
    }
}
