//! Shorthand aliases and the token scale each canonical property reads from.

use crate::theme::TokenScale;

/// A recognised shorthand key. Keys outside this set are canonical property
/// names (or unknown ones) and pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    P,
    Px,
    Py,
    Pt,
    Pr,
    Pb,
    Pl,
    M,
    Mx,
    My,
    Mt,
    Mr,
    Mb,
    Ml,
    Bg,
    C,
    Gap,
    RowGap,
    ColumnGap,
    Justify,
    Align,
    W,
    H,
    Miw,
    Maw,
    Mih,
    Mah,
    Radius,
    Bd,
    Fz,
    Fw,
    Lh,
    Ff,
    Ta,
    Tt,
    Td,
    Opacity,
    Shadow,
}

impl Shorthand {
    pub fn from_key(key: &str) -> Option<Self> {
        let shorthand = match key {
            "p" => Shorthand::P,
            "px" => Shorthand::Px,
            "py" => Shorthand::Py,
            "pt" => Shorthand::Pt,
            "pr" => Shorthand::Pr,
            "pb" => Shorthand::Pb,
            "pl" => Shorthand::Pl,
            "m" => Shorthand::M,
            "mx" => Shorthand::Mx,
            "my" => Shorthand::My,
            "mt" => Shorthand::Mt,
            "mr" => Shorthand::Mr,
            "mb" => Shorthand::Mb,
            "ml" => Shorthand::Ml,
            "bg" => Shorthand::Bg,
            "c" => Shorthand::C,
            "gap" => Shorthand::Gap,
            "rowGap" => Shorthand::RowGap,
            "columnGap" => Shorthand::ColumnGap,
            "justify" => Shorthand::Justify,
            "align" => Shorthand::Align,
            "w" => Shorthand::W,
            "h" => Shorthand::H,
            "miw" => Shorthand::Miw,
            "maw" => Shorthand::Maw,
            "mih" => Shorthand::Mih,
            "mah" => Shorthand::Mah,
            "radius" | "br" => Shorthand::Radius,
            "bd" => Shorthand::Bd,
            "fz" => Shorthand::Fz,
            "fw" => Shorthand::Fw,
            "lh" => Shorthand::Lh,
            "ff" => Shorthand::Ff,
            "ta" => Shorthand::Ta,
            "tt" => Shorthand::Tt,
            "td" => Shorthand::Td,
            "opacity" => Shorthand::Opacity,
            "shadow" => Shorthand::Shadow,
            _ => return None,
        };
        Some(shorthand)
    }

    /// Canonical properties this shorthand writes.
    pub fn expansion(self) -> &'static [&'static str] {
        match self {
            Shorthand::P => &["padding"],
            Shorthand::Px => &["padding-left", "padding-right"],
            Shorthand::Py => &["padding-top", "padding-bottom"],
            Shorthand::Pt => &["padding-top"],
            Shorthand::Pr => &["padding-right"],
            Shorthand::Pb => &["padding-bottom"],
            Shorthand::Pl => &["padding-left"],
            Shorthand::M => &["margin"],
            Shorthand::Mx => &["margin-left", "margin-right"],
            Shorthand::My => &["margin-top", "margin-bottom"],
            Shorthand::Mt => &["margin-top"],
            Shorthand::Mr => &["margin-right"],
            Shorthand::Mb => &["margin-bottom"],
            Shorthand::Ml => &["margin-left"],
            Shorthand::Bg => &["background-color"],
            Shorthand::C => &["color"],
            Shorthand::Gap => &["gap"],
            Shorthand::RowGap => &["row-gap"],
            Shorthand::ColumnGap => &["column-gap"],
            Shorthand::Justify => &["justify-content"],
            Shorthand::Align => &["align-items"],
            Shorthand::W => &["width"],
            Shorthand::H => &["height"],
            Shorthand::Miw => &["min-width"],
            Shorthand::Maw => &["max-width"],
            Shorthand::Mih => &["min-height"],
            Shorthand::Mah => &["max-height"],
            Shorthand::Radius => &["border-radius"],
            Shorthand::Bd => &["border"],
            Shorthand::Fz => &["font-size"],
            Shorthand::Fw => &["font-weight"],
            Shorthand::Lh => &["line-height"],
            Shorthand::Ff => &["font-family"],
            Shorthand::Ta => &["text-align"],
            Shorthand::Tt => &["text-transform"],
            Shorthand::Td => &["text-decoration"],
            Shorthand::Opacity => &["opacity"],
            Shorthand::Shadow => &["box-shadow"],
        }
    }
}

/// Canonical properties for `key`: the shorthand's expansion, or the key
/// itself when it is not a shorthand.
pub fn canonical_properties(key: &str) -> Vec<&str> {
    match Shorthand::from_key(key) {
        Some(shorthand) => shorthand.expansion().to_vec(),
        None => vec![key],
    }
}

/// The token scale bare keys of `property` are looked up in.
pub fn scale_for(property: &str) -> Option<TokenScale> {
    if property.starts_with("padding") || property.starts_with("margin") {
        return Some(TokenScale::Spacing);
    }
    if property.starts_with("border-") && property.ends_with("radius") {
        return Some(TokenScale::Radius);
    }
    match property {
        "gap" | "row-gap" | "column-gap" => Some(TokenScale::Spacing),
        "box-shadow" => Some(TokenScale::Shadow),
        "font-size" => Some(TokenScale::FontSize),
        "font-weight" => Some(TokenScale::FontWeight),
        "line-height" => Some(TokenScale::LineHeight),
        "color"
        | "background-color"
        | "background"
        | "border-color"
        | "selection-color"
        | "selection-background-color"
        | "alternate-background-color"
        | "gridline-color"
        | "outline-color" => Some(TokenScale::Color),
        _ => None,
    }
}
