//! Resolution of class names into CSS declarations.
//!
//! Three kinds of class name are understood:
//!
//! - shorthand classes parsed by the grammar (`bg-primary`)
//! - custom classes from the `classes` registry (`center`)
//! - aliases expanding to a list of shorthand classes (`btn`)

mod case;
mod class;
mod shorthand;
mod value;

pub use case::to_kebab_case;
pub use class::{resolve_alias, resolve_custom_class, AliasExpansion};
pub use shorthand::{resolve_shorthand, Shorthand};
pub use value::{resolve_value, substitute_placeholders};
