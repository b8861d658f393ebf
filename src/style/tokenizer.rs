//! logos-based tokenizer for composite style values.
//!
//! Values like `1px solid blue.6` or `0 0 0 2px primary.3` mix literals with
//! token references. The tokenizer finds the references; everything else is
//! copied through untouched, including the whitespace between tokens.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `blue.6` as Reference beats `blue` as Ident)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#1c7ed6` matches [`ValueToken::HexColor`], never a reference
//! - `1.5rem` matches [`ValueToken::Dimension`], not `Number` + `Ident`
//! - `spacing.md` matches [`ValueToken::Reference`], not `Ident` + `Ident`

use std::ops::Range;

use logos::Logos;

/// Token produced by the value lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum ValueToken {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Hex color: `#fff`, `#1c7ed6`, `#1c7ed680`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Number with a unit suffix: `1px`, `1.5rem`, `50%`, `-2em`.
    #[regex(r"-?([0-9]+|[0-9]*\.[0-9]+)([a-zA-Z]+|%)")]
    Dimension,

    /// Dotted token reference: `blue.6`, `blue.-3`, `spacing.md`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*\.-?[a-zA-Z0-9_-]+")]
    Reference,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Bare number: `0`, `-4`, `0.05`.
    #[regex(r"-?([0-9]+|[0-9]*\.[0-9]+)")]
    Number,

    /// Identifier: keywords, named colors, bare scale keys, family names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Punctuation ──────────────────────────────────────────────────

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token("/")]
    Slash,
}

/// Tokenize a value into `(token, span)` pairs.
///
/// Characters logos cannot lex are dropped from the result; [`rewrite`] still
/// copies them through because it works from spans.
pub fn tokenize(input: &str) -> Vec<(ValueToken, Range<usize>)> {
    ValueToken::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}

/// Whether `input` is a single token (nothing to split).
pub fn is_single_token(input: &str) -> bool {
    let tokens = tokenize(input);
    tokens.len() == 1 && tokens[0].1 == (0..input.len())
}

/// Rebuild `input`, replacing each token for which `replace` returns
/// `Some`. Text between tokens is kept verbatim.
///
/// `replace` also receives the following token, so callers can tell a
/// function name (`rgba(`) from a plain identifier.
pub fn rewrite<E, F>(input: &str, mut replace: F) -> Result<String, E>
where
    F: FnMut(ValueToken, &str, Option<ValueToken>) -> Result<Option<String>, E>,
{
    let tokens = tokenize(input);
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for (i, (token, span)) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1).map(|(t, _)| *t);
        out.push_str(&input[last..span.start]);
        let text = &input[span.clone()];
        match replace(*token, text, next)? {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(text),
        }
        last = span.end;
    }
    out.push_str(&input[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<ValueToken> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    /// Helper: tokenize and return (token, slice) pairs.
    fn tokens_with_text(input: &str) -> Vec<(ValueToken, String)> {
        tokenize(input)
            .into_iter()
            .map(|(t, span)| (t, input[span].to_string()))
            .collect()
    }

    #[test]
    fn border_shorthand() {
        let result = tokens_with_text("1px solid blue.6");
        assert_eq!(result[0], (ValueToken::Dimension, "1px".into()));
        assert_eq!(result[1], (ValueToken::Ident, "solid".into()));
        assert_eq!(result[2], (ValueToken::Reference, "blue.6".into()));
    }

    #[test]
    fn reference_with_negative_index() {
        assert_eq!(tokens("blue.-3"), vec![ValueToken::Reference]);
    }

    #[test]
    fn qualified_scale_reference() {
        assert_eq!(tokens("spacing.md"), vec![ValueToken::Reference]);
    }

    #[test]
    fn hex_color_is_not_a_reference() {
        assert_eq!(tokens("#1c7ed6"), vec![ValueToken::HexColor]);
    }

    #[test]
    fn fractional_numbers_are_not_references() {
        assert_eq!(tokens("1.5"), vec![ValueToken::Number]);
        assert_eq!(tokens(".5"), vec![ValueToken::Number]);
        assert_eq!(tokens("1.5rem"), vec![ValueToken::Dimension]);
    }

    #[test]
    fn shadow_value() {
        let result = tokens("0 1px 3px rgba(0, 0, 0, 0.05)");
        assert_eq!(
            result,
            vec![
                ValueToken::Number,
                ValueToken::Dimension,
                ValueToken::Dimension,
                ValueToken::Ident,
                ValueToken::ParenOpen,
                ValueToken::Number,
                ValueToken::Comma,
                ValueToken::Number,
                ValueToken::Comma,
                ValueToken::Number,
                ValueToken::Comma,
                ValueToken::Number,
                ValueToken::ParenClose,
            ]
        );
    }

    #[test]
    fn strings() {
        let result = tokens_with_text(r#""Segoe UI", 'Inter'"#);
        assert_eq!(result[0], (ValueToken::StringLiteral, "\"Segoe UI\"".into()));
        assert_eq!(result[1], (ValueToken::Comma, ",".into()));
        assert_eq!(result[2], (ValueToken::StringLiteralSingle, "'Inter'".into()));
    }

    #[test]
    fn single_token_detection() {
        assert!(is_single_token("blue.6"));
        assert!(is_single_token("md"));
        assert!(!is_single_token("1px solid"));
        assert!(!is_single_token(" md"));
        assert!(!is_single_token(""));
    }

    #[test]
    fn rewrite_preserves_spacing() {
        let out = rewrite::<Infallible, _>("1px  solid  blue.6", |token, _, _| {
            Ok((token == ValueToken::Reference).then(|| "#1c7ed6".to_string()))
        })
        .unwrap();
        assert_eq!(out, "1px  solid  #1c7ed6");
    }

    #[test]
    fn rewrite_keeps_unlexable_text() {
        let out = rewrite::<Infallible, _>("calc(100% - md) !x", |token, text, _| {
            Ok((token == ValueToken::Ident && text == "md").then(|| "16px".to_string()))
        })
        .unwrap();
        assert_eq!(out, "calc(100% - 16px) !x");
    }

    #[test]
    fn rewrite_reports_next_token() {
        let mut seen = Vec::new();
        rewrite::<Infallible, _>("rgba(0)", |token, _, next| {
            seen.push((token, next));
            Ok(None)
        })
        .unwrap();
        assert_eq!(seen[0], (ValueToken::Ident, Some(ValueToken::ParenOpen)));
        assert_eq!(seen[3], (ValueToken::ParenClose, None));
    }

    #[test]
    fn empty_input() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }
}
