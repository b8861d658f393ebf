//! props! macro: parse a shorthand prop bag at compile time and generate RawProps code.

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Error, Expr, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A property or tier key: `bg`, `padding-top`, or `"padding-top"`.
#[derive(Debug, Clone)]
pub(crate) struct Key {
    pub name: String,
    pub span: Span,
}

/// The value side of an entry.
pub(crate) enum PropValue {
    /// Any expression convertible into a raw value.
    Fixed(Expr),
    /// `{ base: .., lg: .. }`, in written order.
    Responsive(Vec<(Key, Expr)>),
}

/// A single `key: value` entry.
pub(crate) struct PropEntry {
    pub key: Key,
    pub value: PropValue,
}

/// The top-level input to the props! macro.
struct PropsInput {
    entries: Vec<PropEntry>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for Key {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            return Ok(Key {
                name: lit.value(),
                span: lit.span(),
            });
        }

        // Kebab-case: ident - ident - ident ...
        let first: Ident = input.parse()?;
        let mut name = first.to_string();
        while input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            let next: Ident = input.parse()?;
            name.push('-');
            name.push_str(&next.to_string());
        }
        Ok(Key {
            name,
            span: first.span(),
        })
    }
}

impl Parse for PropsInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut entries = Vec::new();
        while !input.is_empty() {
            entries.push(parse_entry(input)?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(PropsInput { entries })
    }
}

/// Parse `key: value`.
pub(crate) fn parse_entry(input: ParseStream) -> Result<PropEntry> {
    let key: Key = input.parse()?;
    input.parse::<Token![:]>()?;

    let value = if input.peek(syn::token::Brace) {
        let content;
        braced!(content in input);
        PropValue::Responsive(parse_tiers(&content, &key)?)
    } else {
        PropValue::Fixed(input.parse()?)
    };

    Ok(PropEntry { key, value })
}

/// Parse the inside of a responsive value: `base: "md", lg: 24`.
fn parse_tiers(input: ParseStream, property: &Key) -> Result<Vec<(Key, Expr)>> {
    let mut tiers: Vec<(Key, Expr)> = Vec::new();
    let mut seen = HashSet::new();
    while !input.is_empty() {
        let tier: Key = input.parse()?;
        input.parse::<Token![:]>()?;
        let value: Expr = input.parse()?;
        if !seen.insert(tier.name.clone()) {
            return Err(Error::new(
                tier.span,
                format!("tier `{}` is given twice", tier.name),
            ));
        }
        tiers.push((tier, value));
        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }

    if !seen.contains("base") {
        return Err(Error::new(
            property.span,
            format!("responsive value for `{}` has no `base` tier", property.name),
        ));
    }
    Ok(tiers)
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate the insert statement for one entry.
fn generate_entry(entry: &PropEntry) -> TokenStream {
    let key = &entry.key.name;
    match &entry.value {
        PropValue::Fixed(expr) => quote! {
            __props.insert(#key, ::poly_style::style::RawValue::from(#expr));
        },
        PropValue::Responsive(tiers) => {
            let pairs = tiers.iter().map(|(tier, expr)| {
                let tier = &tier.name;
                quote! { (#tier, ::poly_style::style::PropValue::from(#expr)) }
            });
            quote! {
                __props.insert(#key, ::poly_style::style::RawValue::responsive([#(#pairs),*]));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Entry point: generate code for the entire props! macro.
pub(crate) fn props_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: PropsInput = syn::parse2(input)?;
    let inserts = parsed.entries.iter().map(generate_entry);

    Ok(quote! {
        {
            let mut __props = ::poly_style::style::RawProps::new();
            #(#inserts)*
            __props
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    // Helper: parse a props input.
    fn parse_props(tokens: TokenStream) -> Result<PropsInput> {
        syn::parse2(tokens)
    }

    // Helper: parse and generate.
    fn gen(tokens: TokenStream) -> Result<TokenStream> {
        props_impl(tokens)
    }

    // -----------------------------------------------------------------------
    // Parsing tests
    // -----------------------------------------------------------------------

    #[test]
    fn parse_fixed_entries() {
        let input = parse_props(quote! { p: "md", bg: "blue.6", w: 240 }).unwrap();
        let keys: Vec<&str> = input.entries.iter().map(|e| e.key.name.as_str()).collect();
        assert_eq!(keys, vec!["p", "bg", "w"]);
        assert!(input.entries.iter().all(|e| matches!(e.value, PropValue::Fixed(_))));
    }

    #[test]
    fn parse_kebab_and_string_keys() {
        let input = parse_props(quote! { padding-top: 4, "margin-left": 8 }).unwrap();
        assert_eq!(input.entries[0].key.name, "padding-top");
        assert_eq!(input.entries[1].key.name, "margin-left");
    }

    #[test]
    fn parse_trailing_comma() {
        let input = parse_props(quote! { p: "md", }).unwrap();
        assert_eq!(input.entries.len(), 1);
    }

    #[test]
    fn parse_empty() {
        let input = parse_props(quote! {}).unwrap();
        assert!(input.entries.is_empty());
    }

    #[test]
    fn parse_responsive_value() {
        let input = parse_props(quote! { p: { base: "md", lg: 24 } }).unwrap();
        match &input.entries[0].value {
            PropValue::Responsive(tiers) => {
                let names: Vec<&str> = tiers.iter().map(|(k, _)| k.name.as_str()).collect();
                assert_eq!(names, vec!["base", "lg"]);
            }
            PropValue::Fixed(_) => panic!("expected responsive"),
        }
    }

    #[test]
    fn parse_negative_and_float_values() {
        let input = parse_props(quote! { mt: -4, lh: 1.5 }).unwrap();
        assert_eq!(input.entries.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Error tests
    // -----------------------------------------------------------------------

    #[test]
    fn responsive_without_base_is_an_error() {
        let err = gen(quote! { p: { sm: 4, lg: 8 } }).unwrap_err();
        assert!(err.to_string().contains("no `base` tier"));
    }

    #[test]
    fn duplicate_tier_is_an_error() {
        let err = gen(quote! { p: { base: 4, base: 8 } }).unwrap_err();
        assert!(err.to_string().contains("given twice"));
    }

    #[test]
    fn missing_colon_is_an_error() {
        assert!(gen(quote! { p "md" }).is_err());
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert!(gen(quote! { p: "md" bg: "blue.6" }).is_err());
    }

    // -----------------------------------------------------------------------
    // Code generation tests
    // -----------------------------------------------------------------------

    #[test]
    fn gen_fixed_insert() {
        let output = gen(quote! { bg: "blue.6" }).unwrap().to_string();
        assert!(output.contains("RawProps :: new ()"));
        assert!(output.contains(
            "__props . insert (\"bg\" , :: poly_style :: style :: RawValue :: from (\"blue.6\"))"
        ));
    }

    #[test]
    fn gen_responsive_insert() {
        let output = gen(quote! { p: { base: "md", lg: 24 } }).unwrap().to_string();
        assert!(output.contains("RawValue :: responsive"));
        assert!(output
            .contains("(\"base\" , :: poly_style :: style :: PropValue :: from (\"md\"))"));
        assert!(output.contains("(\"lg\" , :: poly_style :: style :: PropValue :: from (24))"));
    }
}
