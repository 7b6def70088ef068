//! Query templates.
//!
//! A query may contain `$0<name>` placeholders. Each distinct name is
//! resolved once by the user; a value starting with `/for` lists variants
//! and fans the query out into one concrete query per variant.
//!
//! - [`placeholder`]: scanning templates for placeholders
//! - [`value`]: parsing resolved values and holding the bindings
//! - [`expander`]: turning a template plus bindings into concrete queries

pub mod expander;
pub mod placeholder;
pub mod value;

pub use expander::{ConcreteQuery, expand};
pub use placeholder::{PLACEHOLDER_PREFIX, QueryTemplate, Segment, extract_placeholders};
pub use value::{PlaceholderBindings, PlaceholderValue, VARIANT_MARKER, parse_placeholder_value};
