//! Particle burst played while an alert closes.

use serde::Serialize;

use crate::core::geometry::Size;

/// Upper bound (exclusive) of a particle's start delay, in seconds.
pub const MAX_DELAY_S: f64 = 0.3;

const DRIFT_PX: f64 = 60.0;

/// One particle of the burst, positioned relative to the alert's top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    /// Index within the burst.
    pub id: usize,
    /// Horizontal offset inside the alert.
    pub x: f64,
    /// Vertical offset inside the alert.
    pub y: f64,
    /// Animation delay in seconds, in `[0, MAX_DELAY_S)`.
    pub delay_s: f64,
    /// Horizontal travel during the animation.
    pub drift_x: f64,
    /// Vertical travel during the animation.
    pub drift_y: f64,
    /// Final rotation in degrees.
    pub rotate: f64,
}

impl Particle {
    /// Inline style positioning the particle and feeding the keyframe variables.
    #[must_use]
    pub fn style(&self, color: &str) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; background: {color}; animation-delay: {:.3}s; \
             --drift-x: {:.1}px; --drift-y: {:.1}px; --rotate: {:.0}deg;",
            self.x, self.y, self.delay_s, self.drift_x, self.drift_y, self.rotate
        )
    }
}

/// Scatter `count` particles inside `area`.
///
/// `sample` must return values in `[0, 1)`; the browser build passes `Math.random`.
#[must_use]
pub fn burst(count: usize, area: Size, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: sample() * area.width,
            y: sample() * area.height,
            delay_s: sample() * MAX_DELAY_S,
            drift_x: (sample() - 0.5) * 2.0 * DRIFT_PX,
            drift_y: (sample() - 0.5) * 2.0 * DRIFT_PX,
            rotate: sample() * 360.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepper() -> impl FnMut() -> f64 {
        let mut step = 0_u32;
        move || {
            step = (step + 1) % 10;
            f64::from(step) / 10.0
        }
    }

    #[test]
    fn burst_stays_inside_area_and_delay_window() {
        let area = Size {
            width: 320.0,
            height: 72.0,
        };
        let particles = burst(50, area, stepper());
        assert_eq!(particles.len(), 50);
        for particle in &particles {
            assert!((0.0..area.width).contains(&particle.x));
            assert!((0.0..area.height).contains(&particle.y));
            assert!((0.0..MAX_DELAY_S).contains(&particle.delay_s));
        }
        assert_eq!(particles.last().map(|p| p.id), Some(49));
    }

    #[test]
    fn empty_burst_when_count_is_zero() {
        assert!(burst(0, Size::default(), || 0.5).is_empty());
    }

    #[test]
    fn style_carries_color_and_delay() {
        let particle = burst(1, Size { width: 100.0, height: 10.0 }, || 0.5).remove(0);
        let style = particle.style("#ef4444");
        assert!(style.contains("left: 50.0px"));
        assert!(style.contains("background: #ef4444"));
        assert!(style.contains("animation-delay: 0.150s"));
    }
}
