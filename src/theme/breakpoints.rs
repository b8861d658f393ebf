//! Ordered breakpoint table and active-tier lookup.
//!
//! Tiers are mobile-first: a tier is active once the observed width reaches its
//! minimum, and stays active until the next tier's minimum is reached. The
//! first tier is always `base` at width 0.

use std::fmt;

/// Name of the mandatory zero-width tier.
pub const BASE_TIER: &str = "base";

/// The observed size of a window or container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: Option<f32>,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            height: None,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

/// A single named tier and its minimum width.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: f32,
}

/// Why a breakpoint table was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BreakpointError {
    #[error("breakpoint table is empty")]
    Empty,
    #[error("first breakpoint must be `base` at width 0, found `{name}` at {min_width}")]
    MissingBase { name: String, min_width: f32 },
    #[error("breakpoint `{name}` ({min_width}) must be wider than `{previous}` ({previous_width})")]
    NotIncreasing {
        name: String,
        min_width: f32,
        previous: String,
        previous_width: f32,
    },
    #[error("duplicate breakpoint name `{0}`")]
    DuplicateName(String),
    #[error("breakpoint `{0}` has a non-finite or negative width")]
    InvalidWidth(String),
}

/// A validated breakpoint table, sorted ascending, starting at `base`.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    tiers: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Validate and build a table from `(name, min_width)` pairs in declared order.
    ///
    /// The order is not corrected: unsorted input is rejected.
    pub fn new<I, S>(tiers: I) -> Result<Self, BreakpointError>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let tiers: Vec<Breakpoint> = tiers
            .into_iter()
            .map(|(name, min_width)| Breakpoint {
                name: name.into(),
                min_width,
            })
            .collect();

        let first = tiers.first().ok_or(BreakpointError::Empty)?;
        if first.name != BASE_TIER || first.min_width != 0.0 {
            return Err(BreakpointError::MissingBase {
                name: first.name.clone(),
                min_width: first.min_width,
            });
        }

        for (i, tier) in tiers.iter().enumerate() {
            if !tier.min_width.is_finite() || tier.min_width < 0.0 {
                return Err(BreakpointError::InvalidWidth(tier.name.clone()));
            }
            if tiers[..i].iter().any(|t| t.name == tier.name) {
                return Err(BreakpointError::DuplicateName(tier.name.clone()));
            }
            if i > 0 {
                let previous = &tiers[i - 1];
                if tier.min_width <= previous.min_width {
                    return Err(BreakpointError::NotIncreasing {
                        name: tier.name.clone(),
                        min_width: tier.min_width,
                        previous: previous.name.clone(),
                        previous_width: previous.min_width,
                    });
                }
            }
        }

        Ok(Self { tiers })
    }

    /// Name of the greatest tier whose minimum width is `<= width`.
    ///
    /// Boundaries are inclusive. Widths below zero (or NaN) resolve to `base`.
    pub fn active_tier(&self, width: f32) -> &str {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_width <= width)
            .map_or(BASE_TIER, |tier| tier.name.as_str())
    }

    /// Position of `name` in ascending order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Minimum width of `name`, if defined.
    pub fn min_width(&self, name: &str) -> Option<f32> {
        self.tiers
            .iter()
            .find(|tier| tier.name == name)
            .map(|tier| tier.min_width)
    }

    /// Tier names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|tier| tier.name.as_str())
    }

    /// Tier names from `base` up to and including `tier`.
    ///
    /// An unknown tier yields only `base`.
    pub fn up_to<'a>(&'a self, tier: &str) -> &'a [Breakpoint] {
        let end = self.index_of(tier).unwrap_or(0);
        &self.tiers[..=end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl fmt::Display for Breakpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tier) in self.tiers.iter().enumerate() {
            if i > 0 {
                f.write_str(" < ")?;
            }
            write!(f, "{}({})", tier.name, tier.min_width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Breakpoints {
        Breakpoints::new([
            ("base", 0.0),
            ("sm", 576.0),
            ("md", 768.0),
            ("lg", 992.0),
            ("xl", 1200.0),
        ])
        .unwrap()
    }

    #[test]
    fn active_tier_picks_greatest_reached() {
        let bp = table();
        assert_eq!(bp.active_tier(0.0), "base");
        assert_eq!(bp.active_tier(320.0), "base");
        assert_eq!(bp.active_tier(600.0), "sm");
        assert_eq!(bp.active_tier(900.0), "md");
        assert_eq!(bp.active_tier(5000.0), "xl");
    }

    #[test]
    fn boundary_is_inclusive() {
        let bp = table();
        assert_eq!(bp.active_tier(992.0), "lg");
        assert_eq!(bp.active_tier(991.0), "md");
        assert_eq!(bp.active_tier(991.9), "md");
    }

    #[test]
    fn negative_and_nan_widths_resolve_to_base() {
        let bp = table();
        assert_eq!(bp.active_tier(-10.0), "base");
        assert_eq!(bp.active_tier(f32::NAN), "base");
    }

    #[test]
    fn rejects_unsorted() {
        let err = Breakpoints::new([("base", 0.0), ("md", 768.0), ("sm", 576.0)]).unwrap_err();
        assert!(matches!(err, BreakpointError::NotIncreasing { ref name, .. } if name == "sm"));
    }

    #[test]
    fn rejects_duplicate_widths() {
        let err = Breakpoints::new([("base", 0.0), ("sm", 576.0), ("md", 576.0)]).unwrap_err();
        assert!(matches!(err, BreakpointError::NotIncreasing { .. }));
    }

    #[test]
    fn rejects_missing_base() {
        assert_eq!(
            Breakpoints::new(Vec::<(String, f32)>::new()).unwrap_err(),
            BreakpointError::Empty
        );
        assert!(matches!(
            Breakpoints::new([("sm", 0.0), ("md", 768.0)]).unwrap_err(),
            BreakpointError::MissingBase { .. }
        ));
        assert!(matches!(
            Breakpoints::new([("base", 10.0)]).unwrap_err(),
            BreakpointError::MissingBase { .. }
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Breakpoints::new([("base", 0.0), ("sm", 576.0), ("sm", 800.0)]).unwrap_err();
        assert_eq!(err, BreakpointError::DuplicateName("sm".into()));
    }

    #[test]
    fn rejects_infinite_width() {
        let err = Breakpoints::new([("base", 0.0), ("huge", f32::INFINITY)]).unwrap_err();
        assert_eq!(err, BreakpointError::InvalidWidth("huge".into()));
    }

    #[test]
    fn up_to_includes_active() {
        let bp = table();
        let names: Vec<&str> = bp.up_to("md").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["base", "sm", "md"]);
        assert_eq!(bp.up_to("unknown").len(), 1);
    }

    #[test]
    fn display_lists_tiers() {
        let bp = Breakpoints::new([("base", 0.0), ("sm", 576.0)]).unwrap();
        assert_eq!(bp.to_string(), "base(0) < sm(576)");
    }

    #[test]
    fn viewport_builder() {
        let vp = Viewport::new(800.0).with_height(600.0);
        assert_eq!(vp.width, 800.0);
        assert_eq!(vp.height, Some(600.0));
    }
}
