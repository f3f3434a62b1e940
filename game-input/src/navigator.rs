//! Turns a continuous stick into discrete, rate-limited selection steps.
//!
//! A push past the threshold fires immediately when the refractory timer is
//! idle and then arms the cooldown. Holding the stick repeats once per
//! cooldown. Returning both axes to the dead zone re-arms instantly, so quick
//! taps are never swallowed while a held stick cannot spam.
//!
//! Horizontal input wins: the vertical axis is only looked at on frames where
//! the horizontal axis sits inside the dead zone, so a diagonal push yields
//! one horizontal step rather than two.

use std::time::Duration;

use game_types::InputSettings;

use crate::InputSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavStep {
    Left,
    Right,
    Up,
    Down,
}

impl NavStep {
    pub fn is_horizontal(self) -> bool {
        matches!(self, NavStep::Left | NavStep::Right)
    }

    /// Index delta in a top-to-bottom / left-to-right list.
    pub fn delta(self) -> isize {
        match self {
            NavStep::Left | NavStep::Up => -1,
            NavStep::Right | NavStep::Down => 1,
        }
    }
}

/// `index + delta` wrapped into `0..len`. `len` must be non-zero.
pub fn wrapped_index(index: usize, len: usize, delta: isize) -> usize {
    assert!(len > 0, "wrapped_index over an empty list");
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// `index + delta` clamped into `0..len`. `len` must be non-zero.
pub fn clamped_index(index: usize, len: usize, delta: isize) -> usize {
    assert!(len > 0, "clamped_index over an empty list");
    (index as isize + delta).clamp(0, len as isize - 1) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    pub threshold: f32,
    pub cooldown: Duration,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            cooldown: Duration::from_millis(300),
        }
    }
}

impl From<&InputSettings> for NavigatorConfig {
    fn from(settings: &InputSettings) -> Self {
        Self {
            threshold: settings.stick_threshold,
            cooldown: Duration::from_millis(settings.repeat_cooldown_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigatorState {
    pub x: f32,
    pub y: f32,
    pub refractory: Duration,
    pub last_step: Option<NavStep>,
}

#[derive(Debug, Clone, Default)]
pub struct AxisNavigator {
    config: NavigatorConfig,
    state: NavigatorState,
}

impl AxisNavigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            config,
            state: NavigatorState::default(),
        }
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = NavigatorState::default();
    }

    /// Advances the refractory timer by `dt` and converts this frame's sample
    /// into at most one step.
    pub fn tick(&mut self, sample: &InputSample, dt: Duration) -> Option<NavStep> {
        self.state.refractory = self.state.refractory.saturating_sub(dt);
        self.state.x = sample.x;
        self.state.y = sample.y;

        let threshold = self.config.threshold;
        let horizontal = if sample.x <= -threshold {
            Some(NavStep::Left)
        } else if sample.x >= threshold {
            Some(NavStep::Right)
        } else {
            None
        };
        if let Some(step) = horizontal {
            return self.fire(step);
        }

        let vertical = if sample.y <= -threshold {
            Some(NavStep::Down)
        } else if sample.y >= threshold {
            Some(NavStep::Up)
        } else {
            None
        };
        match vertical {
            Some(step) => self.fire(step),
            None => {
                self.state.refractory = Duration::ZERO;
                self.state.last_step = None;
                None
            }
        }
    }

    fn fire(&mut self, step: NavStep) -> Option<NavStep> {
        if !self.state.refractory.is_zero() {
            return None;
        }
        self.state.refractory = self.config.cooldown;
        self.state.last_step = Some(step);
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    fn count_steps(navigator: &mut AxisNavigator, sample: InputSample, dt: Duration, total: Duration) -> usize {
        let ticks = total.as_millis() / dt.as_millis();
        (0..ticks)
            .filter(|_| navigator.tick(&sample, dt).is_some())
            .count()
    }

    #[test]
    fn held_stick_repeats_once_per_cooldown() {
        let mut navigator = AxisNavigator::default();
        let held = InputSample::new(0.8, 0.0);

        // floor(10 / 0.3) + 1
        assert_eq!(count_steps(&mut navigator, held, TICK, Duration::from_secs(10)), 34);
    }

    #[test]
    fn repeat_rate_does_not_depend_on_tick_rate() {
        let mut navigator = AxisNavigator::default();
        let held = InputSample::new(0.8, 0.0);

        let fine = count_steps(&mut navigator, held, Duration::from_millis(50), Duration::from_secs(10));
        assert_eq!(fine, 34);
    }

    #[test]
    fn first_push_fires_immediately_then_cools_down() {
        let mut navigator = AxisNavigator::default();
        let right = InputSample::new(1.0, 0.0);

        assert_eq!(navigator.tick(&right, TICK), Some(NavStep::Right));
        assert_eq!(navigator.state().refractory, Duration::from_millis(300));
        assert_eq!(navigator.tick(&right, TICK), None);
        assert_eq!(navigator.tick(&right, TICK), None);
        assert_eq!(navigator.tick(&right, TICK), Some(NavStep::Right));
    }

    #[test]
    fn centering_re_arms_immediately() {
        let mut navigator = AxisNavigator::default();
        let left = InputSample::new(-0.9, 0.0);

        assert_eq!(navigator.tick(&left, TICK), Some(NavStep::Left));
        assert_eq!(navigator.tick(&InputSample::centered(), TICK), None);
        assert_eq!(navigator.state().refractory, Duration::ZERO);
        assert_eq!(navigator.state().last_step, None);
        assert_eq!(navigator.tick(&left, TICK), Some(NavStep::Left));
    }

    #[test]
    fn diagonal_push_only_steps_horizontally() {
        let mut navigator = AxisNavigator::default();
        let diagonal = InputSample::new(0.8, 0.8);

        let steps: Vec<_> = (0..10).filter_map(|_| navigator.tick(&diagonal, TICK)).collect();
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| *s == NavStep::Right));
    }

    #[test]
    fn vertical_steps_when_horizontal_is_centered() {
        let mut navigator = AxisNavigator::default();
        assert_eq!(navigator.tick(&InputSample::new(0.3, -0.9), TICK), Some(NavStep::Down));
        assert_eq!(navigator.tick(&InputSample::centered(), TICK), None);
        assert_eq!(navigator.tick(&InputSample::new(0.0, 0.6), TICK), Some(NavStep::Up));
    }

    #[test]
    fn switching_axes_while_held_respects_cooldown() {
        let mut navigator = AxisNavigator::default();
        assert_eq!(navigator.tick(&InputSample::new(0.9, 0.0), TICK), Some(NavStep::Right));
        assert_eq!(navigator.tick(&InputSample::new(0.0, 0.9), TICK), None);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut navigator = AxisNavigator::default();
        assert_eq!(navigator.tick(&InputSample::new(0.49, 0.0), TICK), None);
        assert_eq!(navigator.tick(&InputSample::new(0.5, 0.0), TICK), Some(NavStep::Right));
    }

    #[test]
    fn config_comes_from_settings() {
        let config = NavigatorConfig::from(&InputSettings {
            stick_threshold: 0.25,
            repeat_cooldown_ms: 150,
        });
        assert_eq!(config.cooldown, Duration::from_millis(150));
        assert_eq!(config.threshold, 0.25);
    }

    #[test]
    fn index_helpers_wrap_and_clamp() {
        assert_eq!(wrapped_index(0, 4, -1), 3);
        assert_eq!(wrapped_index(3, 4, 1), 0);
        assert_eq!(clamped_index(0, 6, -1), 0);
        assert_eq!(clamped_index(5, 6, 1), 5);
        assert_eq!(clamped_index(2, 6, 1), 3);
    }
}
