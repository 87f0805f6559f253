//! Sequencing logic for the page's entrance choreography.
//!
//! Everything in this module is plain math over elapsed time and scroll
//! positions; the DOM-facing driver lives in `app::animate`. Elements render
//! fully visible and the driver only moves them between the animated pose and
//! the resting pose, so a scheduler that never starts leaves the page static
//! but readable.

/// Fraction of the viewport height a section's top edge must cross before its
/// reveal animation plays.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

/// Delay before the hero cascade starts, giving the browser one paint to
/// settle layout.
pub const HERO_DELAY: f64 = 0.1;

/// How far the hero background slides over the hero's full scroll range.
pub const PARALLAX_DISTANCE: f64 = 50.0;

/// Step indices into [`hero_cascade`].
pub const HERO_TEXT: usize = 0;
pub const HERO_IMAGE: usize = 1;
pub const HERO_BUTTONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease on both ends.
    QuadInOut,
    /// Cubic deceleration.
    CubicOut,
    /// Cubic deceleration that overshoots the target by the given amount
    /// before settling.
    BackOut(f64),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + overshoot * (t - 1.0).powi(2)
            }
        }
    }
}

/// Property deltas a step animates, each as `(from, to)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub opacity: (f64, f64),
    pub translate_y: (f64, f64),
    pub scale: (f64, f64),
}

impl Tween {
    /// Fade in while rising from `from_y` pixels below the resting position.
    pub fn fade_rise(from_y: f64) -> Self {
        Self {
            opacity: (0.0, 1.0),
            translate_y: (from_y, 0.0),
            scale: (1.0, 1.0),
        }
    }

    /// Fade in while scaling up from `from_scale` to full size.
    pub fn fade_scale(from_scale: f64) -> Self {
        Self {
            opacity: (0.0, 1.0),
            translate_y: (0.0, 0.0),
            scale: (from_scale, 1.0),
        }
    }

    fn at(&self, progress: f64) -> Sample {
        Sample {
            opacity: lerp(self.opacity, progress),
            translate_y: lerp(self.translate_y, progress),
            scale: lerp(self.scale, progress),
        }
    }
}

fn lerp((from, to): (f64, f64), progress: f64) -> f64 {
    from + (to - from) * progress
}

/// Interpolated pose for one animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Sample {
    pub fn css_transform(&self) -> String {
        format!(
            "translateY({:.2}px) scale({:.4})",
            self.translate_y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Seconds into the timeline at which this step starts. Assigned when the
    /// step is appended to a [`Timeline`].
    pub at: f64,
    pub duration: f64,
    pub easing: Easing,
    pub tween: Tween,
}

impl Step {
    pub fn new(duration: f64, easing: Easing, tween: Tween) -> Self {
        Self {
            at: 0.0,
            duration,
            easing,
            tween,
        }
    }
}

/// An ordered sequence of steps with explicit start offsets. Steps are
/// appended back-to-back; `then_overlapping` starts a step a fixed number of
/// seconds before the previous step finishes, which is how the hero cascade
/// gets its fixed-order overlapping feel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, mut step: Step) -> Self {
        step.at = self.end;
        self.end = step.at + step.duration;
        self.steps.push(step);
        self
    }

    pub fn then_overlapping(mut self, mut step: Step, overlap: f64) -> Self {
        step.at = (self.end - overlap).max(0.0);
        self.end = self.end.max(step.at + step.duration);
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total running time in seconds.
    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn step_start(&self, index: usize) -> f64 {
        self.steps[index].at
    }

    /// Pose of step `index` at `elapsed` seconds into the timeline. Before
    /// the step starts this is its `from` pose; after it ends, its `to` pose.
    pub fn sample(&self, index: usize, elapsed: f64) -> Sample {
        let step = &self.steps[index];
        let progress = if step.duration <= 0.0 {
            1.0
        } else {
            ((elapsed - step.at) / step.duration).clamp(0.0, 1.0)
        };
        step.tween.at(step.easing.apply(progress))
    }

    pub fn sample_all(&self, elapsed: f64) -> Vec<Sample> {
        (0..self.steps.len())
            .map(|i| self.sample(i, elapsed))
            .collect()
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.end
    }
}

/// The hero entrance cascade: text first, then the profile image overlapping
/// the tail of the text step, then the call-to-action buttons overlapping the
/// image step. Step order is fixed; only the overlap offsets tie them
/// together.
pub fn hero_cascade() -> Timeline {
    Timeline::new()
        .then(Step::new(1.0, Easing::CubicOut, Tween::fade_rise(50.0)))
        .then_overlapping(
            Step::new(1.2, Easing::BackOut(1.2), Tween::fade_scale(0.9)),
            0.6,
        )
        .then_overlapping(Step::new(0.8, Easing::CubicOut, Tween::fade_rise(30.0)), 0.4)
}

/// The one-step entrance each below-the-fold section plays when its reveal
/// trigger fires.
pub fn section_reveal() -> Step {
    Step::new(1.0, Easing::CubicOut, Tween::fade_rise(60.0))
}

/// One-shot trigger for a section's reveal animation. `check` flips the
/// trigger the first time the section's top edge crosses
/// [`REVEAL_VIEWPORT_FRACTION`] of the viewport; once fired it stays fired
/// for the life of the mount, so scrolling away and back never replays the
/// animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    #[default]
    Armed,
    Fired,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::Armed
    }

    /// `section_top` is the section's top edge in viewport coordinates.
    /// Returns true exactly once, on the transition from armed to fired.
    pub fn check(&mut self, section_top: f64, viewport_height: f64) -> bool {
        match self {
            Self::Armed if section_top < viewport_height * REVEAL_VIEWPORT_FRACTION => {
                *self = Self::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(self, Self::Fired)
    }
}

/// Endless vertical bob for the profile image: rest, up by `amplitude`, back
/// to rest, repeat. Each leg lasts `half_period` seconds and is eased on both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLoop {
    pub amplitude: f64,
    pub half_period: f64,
}

impl FloatLoop {
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        let cycle = elapsed.rem_euclid(2.0 * self.half_period);
        let leg = cycle / self.half_period;
        let raw = if leg <= 1.0 { leg } else { 2.0 - leg };
        -self.amplitude * Easing::QuadInOut.apply(raw)
    }
}

/// Float parameters for the hero profile image.
pub fn hero_float() -> FloatLoop {
    FloatLoop {
        amplitude: 20.0,
        half_period: 3.0,
    }
}

/// Vertical offset for the hero background as a linear function of how far
/// the hero region has been scrolled past, clamped to the region's bounds.
pub fn parallax_shift(scroll_y: f64, region_top: f64, region_height: f64) -> f64 {
    if region_height <= 0.0 {
        return 0.0;
    }
    let progress = ((scroll_y - region_top) / region_height).clamp(0.0, 1.0);
    -PARALLAX_DISTANCE * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn easing_curves_hit_their_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::QuadInOut,
            Easing::CubicOut,
            Easing::BackOut(1.2),
        ] {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert!(close(Easing::CubicOut.apply(-2.0), 0.0));
        assert!(close(Easing::CubicOut.apply(3.0), 1.0));
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (0..100)
            .map(|i| Easing::BackOut(1.2).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "back.out should overshoot, peaked at {peak}");
    }

    #[test]
    fn hero_cascade_starts_in_fixed_order() {
        let cascade = hero_cascade();
        assert_eq!(cascade.len(), 3);
        let text = cascade.step_start(HERO_TEXT);
        let image = cascade.step_start(HERO_IMAGE);
        let buttons = cascade.step_start(HERO_BUTTONS);
        assert!(
            text < image && image < buttons,
            "cascade must start text ({text}) before image ({image}) before buttons ({buttons})"
        );
    }

    #[test]
    fn hero_cascade_overlaps_instead_of_chaining() {
        let cascade = hero_cascade();
        // The image starts while the text step is still running.
        assert!(cascade.step_start(HERO_IMAGE) < 1.0);
        // The full cascade is shorter than the sum of its step durations.
        assert!(cascade.duration() < 1.0 + 1.2 + 0.8);
    }

    #[test]
    fn sample_before_start_is_the_from_pose() {
        let cascade = hero_cascade();
        let image = cascade.sample(HERO_IMAGE, 0.0);
        assert!(close(image.opacity, 0.0));
        assert!(close(image.scale, 0.9));
    }

    #[test]
    fn sample_after_end_is_the_resting_pose() {
        let cascade = hero_cascade();
        for (i, sample) in cascade.sample_all(cascade.duration() + 1.0).iter().enumerate() {
            assert!(close(sample.opacity, 1.0), "step {i} opacity");
            assert!(close(sample.translate_y, 0.0), "step {i} translate");
            assert!(close(sample.scale, 1.0), "step {i} scale");
        }
        assert!(cascade.is_complete(cascade.duration()));
        assert!(!cascade.is_complete(cascade.duration() - 0.1));
    }

    #[test]
    fn zero_duration_step_snaps_to_resting_pose() {
        let timeline = Timeline::new().then(Step::new(
            0.0,
            Easing::Linear,
            Tween::fade_rise(10.0),
        ));
        let sample = timeline.sample(0, 0.0);
        assert!(close(sample.opacity, 1.0));
        assert!(close(sample.translate_y, 0.0));
    }

    #[test]
    fn reveal_trigger_fires_exactly_once() {
        let mut trigger = RevealTrigger::new();
        // Section below the fold: armed, no fire.
        assert!(!trigger.check(900.0, 800.0));
        assert!(!trigger.is_fired());
        // Top edge crosses 80% of the viewport: fires.
        assert!(trigger.check(639.0, 800.0));
        assert!(trigger.is_fired());
        // Scrolling further, or back above the threshold, never re-fires.
        assert!(!trigger.check(100.0, 800.0));
        assert!(!trigger.check(900.0, 800.0));
        assert!(!trigger.check(639.0, 800.0));
        assert!(trigger.is_fired());
    }

    #[test]
    fn reveal_trigger_threshold_is_eighty_percent() {
        let mut at_threshold = RevealTrigger::new();
        assert!(!at_threshold.check(640.0, 800.0), "at the line is not past it");
        let mut past_threshold = RevealTrigger::new();
        assert!(past_threshold.check(639.99, 800.0));
    }

    #[test]
    fn float_loop_returns_to_rest_each_period() {
        let float = hero_float();
        assert!(close(float.offset_at(0.0), 0.0));
        assert!(close(float.offset_at(float.half_period), -float.amplitude));
        assert!(close(float.offset_at(2.0 * float.half_period), 0.0));
        assert!(close(
            float.offset_at(7.0 * float.half_period),
            -float.amplitude
        ));
    }

    #[test]
    fn float_loop_stays_within_amplitude() {
        let float = hero_float();
        for i in 0..1000 {
            let offset = float.offset_at(i as f64 * 0.01);
            assert!((-float.amplitude..=0.0).contains(&offset), "offset {offset}");
        }
    }

    #[test]
    fn parallax_is_clamped_to_the_region() {
        assert!(close(parallax_shift(0.0, 0.0, 600.0), 0.0));
        assert!(close(parallax_shift(300.0, 0.0, 600.0), -PARALLAX_DISTANCE / 2.0));
        assert!(close(parallax_shift(600.0, 0.0, 600.0), -PARALLAX_DISTANCE));
        assert!(close(parallax_shift(5000.0, 0.0, 600.0), -PARALLAX_DISTANCE));
        // Region further down the page: no shift until the region is reached.
        assert!(close(parallax_shift(100.0, 400.0, 600.0), 0.0));
    }

    #[test]
    fn parallax_is_monotone_over_the_region() {
        let mut last = parallax_shift(0.0, 0.0, 600.0);
        for i in 1..=60 {
            let next = parallax_shift(i as f64 * 10.0, 0.0, 600.0);
            assert!(next <= last, "parallax must move one way");
            last = next;
        }
    }

    #[test]
    fn parallax_ignores_degenerate_regions() {
        assert!(close(parallax_shift(100.0, 0.0, 0.0), 0.0));
    }

    #[test]
    fn css_transform_renders_both_axes() {
        let sample = Sample {
            opacity: 0.5,
            translate_y: 12.0,
            scale: 0.95,
        };
        assert_eq!(sample.css_transform(), "translateY(12.00px) scale(0.9500)");
    }
}
