//! Class-name parsing.
//!
//! A [`Grammar`] is built from the type tokens of a property registry and
//! splits a utility class name into its prefix, type, value, unit and
//! optional secondary value.
//!
//! # Usage
//!
//! ```ignore
//! use atomcss::parser::Grammar;
//!
//! let grammar = Grammar::new(&config.property);
//! if let Some(token) = grammar.parse("hover:bg-[255_0_0]") {
//!     println!("{} -> {}", token.kind, token.value);
//! }
//! ```

mod grammar;
mod token;

pub use grammar::{split_prefix, Grammar};
pub use token::{ParsedToken, Secondary};

pub(crate) use token::is_bracketed;
