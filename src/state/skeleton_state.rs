//! Loading skeleton shimmer animation state

use std::time::{Duration, Instant};

/// Shimmer animation for skeleton placeholders.
///
/// The skeleton itself is shown for as long as the page's `loading` flag is
/// raised; this only drives the pulsing brightness of the placeholders.
#[derive(Debug)]
pub struct SkeletonState {
    /// When the skeleton started animating
    pub start_time: Instant,
}

impl SkeletonState {
    /// One full dark-light-dark pulse
    const PULSE_PERIOD: Duration = Duration::from_millis(1500);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Shimmer intensity in `0.0..=1.0` for the current instant
    pub fn intensity(&self) -> f32 {
        Self::intensity_at(self.start_time.elapsed())
    }

    /// Shimmer intensity after `elapsed` time
    pub fn intensity_at(elapsed: Duration) -> f32 {
        let period = Self::PULSE_PERIOD.as_secs_f32();
        let phase = (elapsed.as_secs_f32() % period) / period;
        // Rise for the first half of the period, fall for the second
        let progress = if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        };
        simple_easing::sine_in_out(progress).clamp(0.0, 1.0)
    }
}

impl Default for SkeletonState {
    fn default() -> Self {
        Self::new()
    }
}
