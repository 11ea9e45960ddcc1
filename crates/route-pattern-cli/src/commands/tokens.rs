use anyhow::Result;
use route_pattern::{parse, CompileOptions};

use crate::render;

pub fn run(pattern: &str, options: &CompileOptions, json: bool) -> Result<()> {
    let tokens = parse(pattern, &options.parse);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    if tokens.is_empty() {
        println!("(no tokens)");
    }
    for (index, token) in tokens.iter().enumerate() {
        println!("{}", render::token(index, token));
    }
    Ok(())
}
