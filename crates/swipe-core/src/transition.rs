//! Frame-driven eased transition between two container positions

use glam::Vec3;

/// Smoothstep easing on `[0, 1]`.
///
/// Input is clamped, so overshooting progress maps to exactly `1.0`.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Transition state, advanced once per host frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transition {
    /// No transition running
    #[default]
    Idle,
    /// Interpolating from `start` to `end`
    Animating {
        /// Position when the transition began
        start: Vec3,
        /// Destination position
        end: Vec3,
        /// Duration in seconds (always > 0)
        duration: f32,
        /// Normalized elapsed time in `[0, 1)`
        progress: f32,
    },
}

impl Transition {
    /// Begin a transition.
    ///
    /// A non-positive or non-finite duration has nothing to animate and
    /// yields `Idle`; the caller places the container at `end` directly.
    pub fn begin(start: Vec3, end: Vec3, duration: f32) -> Self {
        if !(duration.is_finite() && duration > 0.0) {
            return Self::Idle;
        }
        Self::Animating {
            start,
            end,
            duration,
            progress: 0.0,
        }
    }

    /// Whether a transition is running
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Destination of the running transition
    pub fn target(&self) -> Option<Vec3> {
        match *self {
            Self::Idle => None,
            Self::Animating { end, .. } => Some(end),
        }
    }

    /// Advance by `dt` seconds and return the position for this frame.
    ///
    /// Returns `None` when idle. The frame that reaches the end yields
    /// exactly `end` and leaves the transition `Idle`.
    pub fn advance(&mut self, dt: f32) -> Option<Vec3> {
        let Self::Animating {
            start,
            end,
            duration,
            progress,
        } = self
        else {
            return None;
        };

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        *progress += dt / *duration;

        if *progress >= 1.0 {
            let end = *end;
            *self = Self::Idle;
            return Some(end);
        }

        Some(start.lerp(*end, smoothstep(*progress)))
    }

    /// Drop any running transition
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < EPSILON);
        // Clamped outside the unit interval
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(1.7), 1.0);
    }

    #[test]
    fn test_transition_reaches_end() {
        let start = Vec3::ZERO;
        let end = Vec3::new(10.0, 0.0, 0.0);
        let mut transition = Transition::begin(start, end, 1.0);

        let mut last_x = start.x;
        let mut last = start;
        for _ in 0..8 {
            let pos = transition.advance(0.125).expect("transition should be running");
            assert!(pos.x >= last_x, "x must not decrease: {} < {}", pos.x, last_x);
            last_x = pos.x;
            last = pos;
        }

        assert!((last - end).length() < EPSILON);
        assert!(!transition.is_animating());
        assert_eq!(transition.advance(0.125), None);
    }

    #[test]
    fn test_transition_follows_smoothstep() {
        let end = Vec3::new(10.0, 0.0, 0.0);
        let mut transition = Transition::begin(Vec3::ZERO, end, 2.0);

        let pos = transition.advance(0.5).unwrap();
        let expected = 10.0 * smoothstep(0.25);
        assert!((pos.x - expected).abs() < EPSILON);

        // Eased: the first quarter covers less than a quarter of the distance
        assert!(pos.x < 2.5);
    }

    #[test]
    fn test_zero_duration_is_idle() {
        let transition = Transition::begin(Vec3::ZERO, Vec3::X, 0.0);
        assert_eq!(transition, Transition::Idle);

        let transition = Transition::begin(Vec3::ZERO, Vec3::X, -1.0);
        assert_eq!(transition, Transition::Idle);
    }

    #[test]
    fn test_invalid_dt_does_not_advance() {
        let mut transition = Transition::begin(Vec3::ZERO, Vec3::X, 1.0);

        let pos = transition.advance(f32::NAN).unwrap();
        assert_eq!(pos, Vec3::ZERO);
        let pos = transition.advance(-0.5).unwrap();
        assert_eq!(pos, Vec3::ZERO);
        assert!(transition.is_animating());
    }

    #[test]
    fn test_overshoot_snaps_to_end() {
        let end = Vec3::new(-200.0, 0.0, 0.0);
        let mut transition = Transition::begin(Vec3::ZERO, end, 0.5);

        assert_eq!(transition.target(), Some(end));
        assert_eq!(transition.advance(5.0), Some(end));
        assert_eq!(transition.target(), None);
    }
}
