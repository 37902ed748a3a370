//! Time-based interpolation of a single geometric property.
//!
//! Animations are fire-and-forget: retargeting a [`Tween`] while it is still
//! moving starts the new transition from the value currently presented, so the
//! latest write always wins and nothing is queued.

use std::time::Duration;

/// Easing curve applied to the linear progress of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, gentle settle (cubic).
    #[default]
    EaseOut,
    /// Gentle start and settle (cubic).
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolates one `f64` from a start value to a target over a duration.
///
/// The target is the model value: logic reads [`Tween::target`], renderers
/// read [`Tween::value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A settled tween resting at `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Use a different easing curve for subsequent transitions.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start a transition towards `to`, beginning at the presented value.
    ///
    /// A zero `duration` snaps immediately.
    pub fn animate_to(&mut self, to: f64, duration: Duration) {
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
    }

    /// Jump to `value` with no transition.
    pub fn snap_to(&mut self, value: f64) {
        self.animate_to(value, Duration::ZERO);
    }

    /// Advance the clock by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// The model value this tween is heading to.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// The presented value at the current point of the transition.
    pub fn value(&self) -> f64 {
        if self.is_settled() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Whether the presented value has reached the target.
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::settled(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn settled_tween_reports_its_value() {
        let tween = Tween::settled(4.0);
        assert_eq!(tween.value(), 4.0);
        assert_eq!(tween.target(), 4.0);
        assert!(tween.is_settled());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tween = Tween::settled(0.0);
        tween.animate_to(10.0, Duration::ZERO);
        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_settled());
    }

    #[test]
    fn target_is_visible_before_any_tick() {
        let mut tween = Tween::settled(0.0);
        tween.animate_to(10.0, MS_300);
        assert_eq!(tween.target(), 10.0);
        assert_eq!(tween.value(), 0.0);
        assert!(!tween.is_settled());
    }

    #[test]
    fn progress_is_monotonic_and_finishes_at_target() {
        let mut tween = Tween::settled(0.0);
        tween.animate_to(10.0, MS_300);

        let mut last = tween.value();
        for _ in 0..10 {
            tween.tick(Duration::from_millis(30));
            let now = tween.value();
            assert!(now >= last, "value went backwards: {} -> {}", last, now);
            last = now;
        }
        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_settled());
    }

    #[test]
    fn overshooting_tick_clamps_to_target() {
        let mut tween = Tween::settled(-20.0);
        tween.animate_to(-10.0, MS_300);
        tween.tick(Duration::from_secs(5));
        assert_eq!(tween.value(), -10.0);
    }

    #[test]
    fn retarget_midway_starts_from_presented_value() {
        let mut tween = Tween::settled(0.0).with_easing(Easing::Linear);
        tween.animate_to(10.0, Duration::from_millis(100));
        tween.tick(Duration::from_millis(50));
        assert_eq!(tween.value(), 5.0);

        tween.animate_to(20.0, Duration::from_millis(100));
        assert_eq!(tween.value(), 5.0);
        tween.tick(Duration::from_millis(50));
        assert_eq!(tween.value(), 12.5);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.25) > Easing::Linear.apply(0.25));
    }
}
