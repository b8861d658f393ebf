use crate::theme::Breakpoints;

/// The active tier moved.
#[derive(Debug, Clone, PartialEq)]
pub struct TierChange {
    pub from: String,
    pub to: String,
    /// Width that caused the change.
    pub width: f32,
}

/// Tracks the active tier for a stream of widths.
#[derive(Debug, Clone)]
pub struct TierTracker {
    breakpoints: Breakpoints,
    tier: String,
    width: f32,
}

impl TierTracker {
    pub fn new(breakpoints: Breakpoints, width: f32) -> Self {
        let tier = breakpoints.active_tier(width).to_owned();
        Self {
            breakpoints,
            tier,
            width,
        }
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Record a new width. Returns the change if the tier moved.
    pub fn observe(&mut self, width: f32) -> Option<TierChange> {
        self.width = width;
        let next = self.breakpoints.active_tier(width);
        if next == self.tier {
            return None;
        }
        let change = TierChange {
            from: std::mem::replace(&mut self.tier, next.to_owned()),
            to: next.to_owned(),
            width,
        };
        tracing::debug!(from = %change.from, to = %change.to, width, "breakpoint tier changed");
        Some(change)
    }

    /// Swap the breakpoint table (after a theme switch) and re-evaluate the
    /// last width against it.
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) -> Option<TierChange> {
        self.replace_breakpoints(breakpoints);
        self.observe(self.width)
    }

    /// Swap the breakpoint table without evaluating. The next
    /// [`TierTracker::observe`] compares against the tier held so far.
    pub(crate) fn replace_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.breakpoints = breakpoints;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_theme;

    #[test]
    fn reports_only_crossings() {
        let theme = fixture_theme();
        let mut tracker = TierTracker::new(theme.breakpoints().clone(), 320.0);
        assert_eq!(tracker.tier(), "base");
        assert_eq!(tracker.observe(500.0), None);

        let change = tracker.observe(768.0).unwrap();
        assert_eq!(change.from, "base");
        assert_eq!(change.to, "md");
        assert_eq!(tracker.observe(900.0), None);
        assert_eq!(tracker.tier(), "md");
        assert_eq!(tracker.width(), 900.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let theme = fixture_theme();
        let mut tracker = TierTracker::new(theme.breakpoints().clone(), 991.0);
        assert_eq!(tracker.tier(), "md");
        assert_eq!(tracker.observe(992.0).map(|c| c.to), Some("lg".to_owned()));
    }

    #[test]
    fn new_breakpoints_reevaluate_width() {
        let theme = fixture_theme();
        let mut tracker = TierTracker::new(theme.breakpoints().clone(), 700.0);
        assert_eq!(tracker.tier(), "sm");

        let wider = Breakpoints::new([("base", 0.0), ("sm", 800.0)]).unwrap();
        let change = tracker.set_breakpoints(wider).unwrap();
        assert_eq!(change.to, "base");
    }
}
