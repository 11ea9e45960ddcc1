use anyhow::Result;
use route_pattern::{compile, CompileOptions};
use serde_json::json;

use crate::render;

pub fn run(pattern: &str, options: &CompileOptions, json: bool) -> Result<()> {
    let compiled = compile(pattern, options)?;

    if json {
        let out = json!({
            "pattern": pattern,
            "regex": compiled.as_str(),
            "keys": compiled.keys(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("regex: {}", compiled.as_str());
    println!("keys:  {}", compiled.keys().len());
    for (i, key) in compiled.keys().iter().enumerate() {
        println!("  ${}  {}", i + 1, render::parameter(key));
    }
    Ok(())
}
