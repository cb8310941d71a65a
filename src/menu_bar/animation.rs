//! Indicator position animation.
//!
//! An animation is a plain value advanced by the host loop through
//! [`IndicatorAnimation::advance`]. Starting a new one from
//! [`IndicatorAnimation::current`] supersedes the old target; there is
//! nothing to cancel.

use std::time::Duration;

use tachyonfx::Interpolation;

use crate::models::IndicatorFrame;

/// Duration of the indicator slide.
pub const INDICATOR_ANIMATION: Duration = Duration::from_millis(400);

/// Easing of the indicator slide.
pub const INDICATOR_EASING: Interpolation = Interpolation::QuadInOut;

#[derive(Debug, Clone)]
pub struct IndicatorAnimation {
    from: IndicatorFrame,
    to: IndicatorFrame,
    elapsed: Duration,
    duration: Duration,
    easing: Interpolation,
}

impl IndicatorAnimation {
    pub fn new(from: IndicatorFrame, to: IndicatorFrame) -> Self {
        Self::with_timing(from, to, INDICATOR_ANIMATION, INDICATOR_EASING)
    }

    pub fn with_timing(
        from: IndicatorFrame,
        to: IndicatorFrame,
        duration: Duration,
        easing: Interpolation,
    ) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Advance by `delta`. Returns `true` once the animation has finished.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = (self.elapsed + delta).min(self.duration);
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Interpolated frame at the current point in time.
    pub fn current(&self) -> IndicatorFrame {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(&self.to, self.easing.alpha(t))
    }
}
