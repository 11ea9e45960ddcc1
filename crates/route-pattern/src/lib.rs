//! # Route Pattern
//!
//! Compiles Express-style route patterns into anchored regular expressions.
//!
//! Supported syntax:
//! - Literal text (`/about`)
//! - Named parameters (`/users/:id`)
//! - Constrained parameters (`/users/:id(\d+)`)
//! - Unnamed groups, named by position (`/archive/(\d{4})`)
//! - Modifiers: optional `?`, zero-or-more `*`, one-or-more `+`
//! - Escapes (`/a\:b` matches the text `/a:b`)
//!
//! ## Pipeline
//!
//! ```text
//! pattern ──parse──▶ [Token] ──tokens_to_regex──▶ (Regex, [Parameter])
//! ```
//!
//! Both stages are pure functions of `(pattern, options)`. Matching paths and
//! dispatching requests is left to the caller: capture group `i + 1` of the
//! regex holds the value of `keys()[i]`.
//!
//! ## Prefix matching
//!
//! With `end = false` the regex only has to match a leading run of whole
//! segments, which is what nested routers need:
//!
//! ```
//! use route_pattern::{compile, CompileOptions};
//!
//! let options = CompileOptions::new().with_end(false);
//! let compiled = compile("/api/:version", &options).unwrap();
//!
//! let m = compiled.regex().find("/api/v2/users").unwrap().unwrap();
//! assert_eq!(m.as_str(), "/api/v2");
//! assert!(!compiled.regex().is_match("/api").unwrap());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod compiler;
pub mod config;
pub mod error;
pub mod escape;
pub mod parser;
pub mod token;

// ============================================================================
// Public API
// ============================================================================

pub use compiler::{compile, compile_with_defaults, tokens_to_regex, CompiledPattern};
pub use config::{CompileOptions, ParseOptions};
pub use error::PatternError;
pub use parser::{parse, parse_with_defaults};
pub use token::{Parameter, Token};
