//! Proc macros for poly-style: `props!` shorthand prop bags.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `poly-style`.

use proc_macro::TokenStream;

mod props_macro;

/// Build a `RawProps` bag with compile-time checked structure.
///
/// # Syntax
///
/// - `key: value`: a fixed value; any expression convertible into `RawValue`
/// - `key: { base: value, lg: value }`: a responsive value; `base` is required
/// - keys are identifiers, kebab-case identifiers (`padding-top`) or string literals
///
/// Entries keep their written order, so a later key overrides an earlier one
/// that writes the same property.
///
/// # Example
///
/// ```ignore
/// let props = props! {
///     p: { base: "md", lg: 24 },
///     bg: "blue.6",
///     padding-top: 4,
/// };
/// ```
#[proc_macro]
pub fn props(input: TokenStream) -> TokenStream {
    props_macro::props_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
