//! Style pipeline: raw props → canonical property sets → stylesheet text.
//!
//! - [`props`] / [`value`]: what component authors write
//! - [`shorthand`]: alias table and per-property token scales
//! - [`tokenizer`]: logos lexer for composite values
//! - [`resolve`]: shorthand expansion and token resolution
//! - [`cascade`]: mobile-first flattening for the active tier
//! - [`stylesheet`]: per-state QSS blocks
//! - [`cache`]: memoized stylesheet text

pub mod cache;
pub mod cascade;
pub mod property_set;
pub mod props;
pub mod resolve;
pub mod shorthand;
pub mod stylesheet;
pub mod tokenizer;
pub mod value;

pub use cache::{CacheStats, Fingerprint, StyleCache};
pub use cascade::{cascade, Responsive};
pub use property_set::{ComponentStateStyles, PropertyValue, StylePropertySet};
pub use props::{RawProps, StateKey, StateProps};
pub use resolve::{expand, expand_states};
pub use shorthand::Shorthand;
pub use stylesheet::{generate, generate_with_indent, GenerateError, DEFAULT_INDENT};
pub use value::{PropValue, RawValue};
