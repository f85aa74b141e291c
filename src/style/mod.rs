//! Style accumulation and stylesheet emission.

mod accumulator;
mod declaration;
mod emit;
mod escape;

pub use accumulator::{StyleKey, StyleMap};
pub use declaration::Declaration;
pub use emit::emit_stylesheet;
pub use escape::escape_selector;
