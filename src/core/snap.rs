//! Scroll snapping toward pinned sections
//!
//! Pinned sections lock in place for part of the scroll range while their
//! content animates. Once all of them have reported their offsets, a single
//! [`SnapRule`] is derived that pulls the scroll position toward the center of
//! the nearest pinned section, while leaving free-scrolling content alone.
//!
//! All positions handled by a [`SnapRule`] are fractional: the raw scroll
//! offset divided by the document's maximum scroll extent.

use serde::Serialize;

/// Buffer around each pinned region, as a fraction of the total scroll.
pub const PINNED_ZONE_BUFFER: f64 = 0.05;

/// Farthest distance from a region center that still snaps.
pub const SNAP_REACH: f64 = 0.15;

/// Default minimum snap animation duration (seconds)
pub const DEFAULT_MIN_DURATION: f64 = 0.15;

/// Default maximum snap animation duration (seconds)
pub const DEFAULT_MAX_DURATION: f64 = 0.4;

/// A pinned section as reported at registration time, in raw pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PinnedTrigger {
    /// Ordering key (document order of the section)
    pub order: usize,
    /// Scroll offset where the pin begins
    pub start: f64,
    /// Scroll offset where the pin releases; `None` means a zero-length pin
    pub end: Option<f64>,
}

impl PinnedTrigger {
    pub fn new(order: usize, start: f64, end: Option<f64>) -> Self {
        Self { order, start, end }
    }

    /// Progress through the pin at raw scroll `offset`, in `[0,1]`.
    ///
    /// A zero-length pin jumps from 0 to 1 at its start.
    pub fn progress_at(&self, offset: f64) -> f64 {
        let end = self.end.unwrap_or(self.start);
        if end <= self.start {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / (end - self.start)).clamp(0.0, 1.0)
    }
}

/// A pinned section normalized into fractional scroll space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PinnedRegion {
    pub start: f64,
    pub end: f64,
    /// Midpoint by duration
    pub center: f64,
}

impl PinnedRegion {
    /// Normalize a trigger by the maximum scroll extent.
    pub fn from_trigger(trigger: &PinnedTrigger, max_scroll: f64) -> Self {
        let end = trigger.end.unwrap_or(trigger.start);
        Self {
            start: trigger.start / max_scroll,
            end: end / max_scroll,
            center: (trigger.start + (end - trigger.start) * 0.5) / max_scroll,
        }
    }

    /// Whether `value` lies inside this region widened by `buffer` on both sides.
    pub fn contains_buffered(&self, value: f64, buffer: f64) -> bool {
        value >= self.start - buffer && value <= self.end + buffer
    }
}

/// Timing curve used by the snap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Ease {
    Linear,
    /// Decelerating quadratic (`power2.out`)
    #[default]
    PowerTwoOut,
    /// Accelerating quadratic (`power2.in`)
    PowerTwoIn,
}

impl Ease {
    /// Map linear progress `t` in `[0,1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::PowerTwoOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::PowerTwoIn => t * t,
        }
    }
}

/// Animation parameters for a snap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapConfig {
    /// Minimum animation duration in seconds
    pub min_duration: f64,
    /// Maximum animation duration in seconds
    pub max_duration: f64,
    /// Delay after scrolling stops before the snap starts, in seconds
    pub delay: f64,
    pub ease: Ease,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
            delay: 0.0,
            ease: Ease::PowerTwoOut,
        }
    }
}

impl SnapConfig {
    /// Animation duration for a snap covering `distance` (fractional).
    ///
    /// Grows linearly from `min_duration` at zero distance to `max_duration`
    /// at [`SNAP_REACH`], and never leaves that range.
    pub fn duration_for(&self, distance: f64) -> f64 {
        let ratio = (distance.abs() / SNAP_REACH).clamp(0.0, 1.0);
        let duration = self.min_duration * (1.0 - ratio) + self.max_duration * ratio;
        duration.clamp(self.min_duration, self.max_duration)
    }
}

/// Resolver from a fractional scroll position to a snap target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapRule {
    regions: Vec<PinnedRegion>,
    config: SnapConfig,
}

impl SnapRule {
    /// Derive a snap rule from the registered pinned triggers.
    ///
    /// Returns `None` for the degenerate short page: no pinned triggers, or a
    /// maximum scroll extent that is zero, negative or not finite.
    pub fn from_triggers(triggers: &[PinnedTrigger], max_scroll: f64) -> Option<Self> {
        Self::with_config(triggers, max_scroll, SnapConfig::default())
    }

    pub fn with_config(
        triggers: &[PinnedTrigger],
        max_scroll: f64,
        config: SnapConfig,
    ) -> Option<Self> {
        if triggers.is_empty() || !max_scroll.is_finite() || max_scroll <= 0.0 {
            return None;
        }

        let mut sorted = triggers.to_vec();
        sorted.sort_by(|a, b| {
            a.start
                .total_cmp(&b.start)
                .then_with(|| a.order.cmp(&b.order))
        });

        let regions = sorted
            .iter()
            .map(|t| PinnedRegion::from_trigger(t, max_scroll))
            .collect();

        Some(Self { regions, config })
    }

    pub fn regions(&self) -> &[PinnedRegion] {
        &self.regions
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Whether `value` is within the buffered range of any pinned region.
    pub fn in_pinned_zone(&self, value: f64) -> bool {
        self.regions
            .iter()
            .any(|r| r.contains_buffered(value, PINNED_ZONE_BUFFER))
    }

    /// Region whose center is nearest to `value`. The first region wins ties.
    pub fn nearest_region(&self, value: f64) -> Option<&PinnedRegion> {
        let mut regions = self.regions.iter();
        let first = regions.next()?;
        Some(regions.fold(first, |closest, r| {
            if (r.center - value).abs() < (closest.center - value).abs() {
                r
            } else {
                closest
            }
        }))
    }

    /// Target position for the current fractional scroll position.
    ///
    /// Returns `value` unchanged outside pinned zones, or when the nearest
    /// center is farther than [`SNAP_REACH`]. The result is within `[0,1]`.
    pub fn resolve(&self, value: f64) -> f64 {
        if !self.in_pinned_zone(value) {
            return value.clamp(0.0, 1.0);
        }

        let target = match self.nearest_region(value) {
            Some(region) if (region.center - value).abs() <= SNAP_REACH => region.center,
            _ => value,
        };

        target.clamp(0.0, 1.0)
    }
}

/// Slack when matching an observed scroll offset against written ones (px)
pub const SCROLL_ECHO_TOLERANCE: f64 = 2.0;

/// Whether `observed` lies on the stretch `covered` (start, latest) that a
/// running snap animation has already scrolled through.
pub fn is_scroll_echo(covered: Option<(f64, f64)>, observed: f64) -> bool {
    covered.is_some_and(|(from, to)| {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        observed >= lo - SCROLL_ECHO_TOLERANCE && observed <= hi + SCROLL_ECHO_TOLERANCE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pin_rule() -> SnapRule {
        // Regions [0.0, 0.2] center 0.1 and [0.5, 0.7] center 0.6
        SnapRule::from_triggers(
            &[
                PinnedTrigger::new(1, 500.0, Some(700.0)),
                PinnedTrigger::new(0, 0.0, Some(200.0)),
            ],
            1000.0,
        )
        .unwrap()
    }

    #[test]
    fn test_no_triggers_yields_no_rule() {
        assert!(SnapRule::from_triggers(&[], 1000.0).is_none());
    }

    #[test]
    fn test_zero_max_scroll_yields_no_rule() {
        let triggers = [PinnedTrigger::new(0, 0.0, Some(100.0))];
        assert!(SnapRule::from_triggers(&triggers, 0.0).is_none());
        assert!(SnapRule::from_triggers(&triggers, f64::NAN).is_none());
        assert!(SnapRule::from_triggers(&triggers, -10.0).is_none());
    }

    #[test]
    fn test_regions_sorted_and_normalized() {
        let rule = two_pin_rule();
        let regions = rule.regions();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].start, 0.0);
        assert_eq!(regions[0].end, 0.2);
        assert!((regions[0].center - 0.1).abs() < 1e-9);
        assert_eq!(regions[1].start, 0.5);
        assert!((regions[1].center - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_pin_contributes_center() {
        let rule = SnapRule::from_triggers(&[PinnedTrigger::new(0, 400.0, None)], 1000.0).unwrap();
        let region = rule.regions()[0];

        assert_eq!(region.start, 0.4);
        assert_eq!(region.end, 0.4);
        assert_eq!(region.center, 0.4);
        assert_eq!(rule.resolve(0.43), 0.4);
    }

    #[test]
    fn test_identity_outside_pinned_zones() {
        let rule = two_pin_rule();

        for value in [0.26, 0.3, 0.4, 0.44, 0.76, 0.9, 1.0] {
            assert_eq!(rule.resolve(value), value, "value {value} should not snap");
        }
    }

    #[test]
    fn test_snaps_to_center_inside_zone() {
        let rule = two_pin_rule();

        assert!((rule.resolve(0.02) - 0.1).abs() < 1e-9);
        assert!((rule.resolve(0.18) - 0.1).abs() < 1e-9);
        assert!((rule.resolve(0.52) - 0.6).abs() < 1e-9);
        assert!((rule.resolve(0.74) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_no_far_snapping_within_long_region() {
        // One long pin [0.1, 0.9], center 0.5
        let rule =
            SnapRule::from_triggers(&[PinnedTrigger::new(0, 100.0, Some(900.0))], 1000.0).unwrap();

        assert!(rule.in_pinned_zone(0.2));
        assert_eq!(rule.resolve(0.2), 0.2);
        assert_eq!(rule.resolve(0.8), 0.8);
        assert_eq!(rule.resolve(0.4), 0.5);
    }

    #[test]
    fn test_tie_resolves_to_first_region() {
        // Adjacent pins with centers 0.375 and 0.625, equidistant from 0.5
        let rule = SnapRule::from_triggers(
            &[
                PinnedTrigger::new(0, 250.0, Some(500.0)),
                PinnedTrigger::new(1, 500.0, Some(750.0)),
            ],
            1000.0,
        )
        .unwrap();

        let nearest = rule.nearest_region(0.5).unwrap();
        assert_eq!(nearest.center, 0.375);
        assert_eq!(rule.resolve(0.5), 0.375);
    }

    #[test]
    fn test_output_clamped_to_unit_range() {
        let rule =
            SnapRule::from_triggers(&[PinnedTrigger::new(0, 0.0, Some(100.0))], 1000.0).unwrap();

        assert_eq!(rule.resolve(-0.5), 0.0);
        assert_eq!(rule.resolve(1.5), 1.0);
        assert!((rule.resolve(-0.01) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_trigger_progress() {
        let trigger = PinnedTrigger::new(0, 1000.0, Some(1800.0));
        assert_eq!(trigger.progress_at(900.0), 0.0);
        assert_eq!(trigger.progress_at(1200.0), 0.25);
        assert_eq!(trigger.progress_at(2500.0), 1.0);

        let zero = PinnedTrigger::new(1, 500.0, None);
        assert_eq!(zero.progress_at(499.0), 0.0);
        assert_eq!(zero.progress_at(500.0), 1.0);
    }

    #[test]
    fn test_duration_bounds() {
        let config = SnapConfig::default();

        assert_eq!(config.duration_for(0.0), 0.15);
        assert_eq!(config.duration_for(0.15), 0.4);
        assert_eq!(config.duration_for(2.0), 0.4);
        let mid = config.duration_for(0.075);
        assert!(mid > 0.15 && mid < 0.4);
    }

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::PowerTwoOut, Ease::PowerTwoIn] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
        assert_eq!(Ease::PowerTwoOut.apply(0.5), 0.75);
        assert_eq!(Ease::PowerTwoIn.apply(0.5), 0.25);
        assert_eq!(Ease::default(), Ease::PowerTwoOut);
    }

    #[test]
    fn test_scroll_echo_on_covered_path() {
        // Animation from 1000px has reached 1180px so far
        let covered = Some((1000.0, 1180.0));

        assert!(is_scroll_echo(covered, 1180.0));
        // Scroll events can lag a frame behind the latest write
        assert!(is_scroll_echo(covered, 1090.0));
        assert!(is_scroll_echo(covered, 1181.5));

        // Upward snaps cover the path in reverse
        assert!(is_scroll_echo(Some((1180.0, 1000.0)), 1050.0));
    }

    #[test]
    fn test_user_scroll_is_not_an_echo() {
        let covered = Some((1000.0, 1180.0));

        assert!(!is_scroll_echo(covered, 1400.0));
        assert!(!is_scroll_echo(covered, 900.0));
        // Nothing written yet: any scroll comes from the user
        assert!(!is_scroll_echo(None, 1000.0));
    }
}
