// SPDX-License-Identifier: MPL-2.0
//! Timer-driven animations.
//!
//! Everything here advances by explicit [`Duration`] deltas fed from the tick
//! subscription, never by reading the clock itself, so the exact step
//! sequences are reproducible under test. Each animation knows when it is
//! finished; the app drops the tick subscription once nothing is running.

use std::time::Duration;

/// Cadence of the animation tick subscription.
pub const TICK_INTERVAL: Duration = Duration::from_millis(15);

/// Total run time of a percent label count-up.
pub const COUNT_DURATION: Duration = Duration::from_millis(900);
/// Interval between count-up steps.
pub const COUNT_STEP: Duration = Duration::from_millis(15);
/// Discrete steps in a full count-up (60).
pub const COUNT_STEPS: u32 =
    (COUNT_DURATION.as_millis() / COUNT_STEP.as_millis()) as u32;

/// Delay between consecutive project-card reveals.
pub const STAGGER_STEP: Duration = Duration::from_millis(120);

/// Run time of the smooth-scroll tween.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

pub mod ease {
    /// Cubic ease-out over `0.0..=1.0`.
    pub fn out_cubic(t: f32) -> f32 {
        let u = 1.0 - t.clamp(0.0, 1.0);
        1.0 - u * u * u
    }
}

/// Counts a percent label from 0 to its target in fixed steps, rounding
/// intermediates and snapping to the exact target at the end.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u8,
    current: f32,
    display: u8,
    carry: Duration,
    done: bool,
}

impl CountUp {
    pub fn new(target: u8) -> Self {
        Self {
            target,
            current: 0.0,
            display: 0,
            carry: Duration::ZERO,
            done: false,
        }
    }

    /// A count-up already sitting at its target (reduce-motion path).
    pub fn instant(target: u8) -> Self {
        Self {
            target,
            current: target as f32,
            display: target,
            carry: Duration::ZERO,
            done: true,
        }
    }

    /// Advances the label by elapsed wall time, stepping once per
    /// [`COUNT_STEP`]. The timer self-cancels on reaching the target.
    pub fn advance(&mut self, dt: Duration) {
        if self.done {
            return;
        }
        self.carry += dt;
        let increment = self.target as f32 / COUNT_STEPS as f32;
        while !self.done && self.carry >= COUNT_STEP {
            self.carry -= COUNT_STEP;
            self.current += increment;
            if self.current >= self.target as f32 {
                self.display = self.target;
                self.done = true;
            } else {
                self.display = self.current.round() as u8;
            }
        }
    }

    /// The value the label shows right now.
    pub fn display(&self) -> u8 {
        self.display
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Reveals `count` cards one by one, `STAGGER_STEP` apart.
#[derive(Debug, Clone)]
pub struct Stagger {
    count: usize,
    elapsed: Duration,
}

impl Stagger {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            elapsed: Duration::ZERO,
        }
    }

    /// A cascade with every card already visible (reduce-motion path).
    pub fn instant(count: usize) -> Self {
        Self {
            count,
            elapsed: STAGGER_STEP * count.saturating_sub(1) as u32,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.is_done() {
            self.elapsed += dt;
        }
    }

    /// Whether card `index` has been revealed yet.
    pub fn is_visible(&self, index: usize) -> bool {
        index < self.count && self.elapsed >= STAGGER_STEP * index as u32
    }

    pub fn is_done(&self) -> bool {
        self.count == 0 || self.elapsed >= STAGGER_STEP * (self.count - 1) as u32
    }
}

/// Eased interpolation between two scroll offsets.
#[derive(Debug, Clone)]
pub struct ScrollTween {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl ScrollTween {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(SCROLL_DURATION);
    }

    /// Current offset along the tween.
    pub fn value(&self) -> f32 {
        let t = self.elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease::out_cubic(t)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= SCROLL_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_steps_is_sixty() {
        assert_eq!(COUNT_STEPS, 60);
    }

    #[test]
    fn count_up_reaches_exact_target_after_full_duration() {
        let mut count = CountUp::new(75);
        count.advance(COUNT_DURATION);
        assert!(count.is_done());
        assert_eq!(count.display(), 75);
    }

    #[test]
    fn count_up_is_monotonically_non_decreasing() {
        let mut count = CountUp::new(75);
        let mut previous = count.display();
        for _ in 0..COUNT_STEPS {
            count.advance(COUNT_STEP);
            assert!(count.display() >= previous);
            previous = count.display();
        }
        assert_eq!(count.display(), 75);
    }

    #[test]
    fn count_up_shows_rounded_intermediates() {
        let mut count = CountUp::new(75);
        // One step: 75/60 = 1.25, rounds to 1.
        count.advance(COUNT_STEP);
        assert_eq!(count.display(), 1);
        // Two more: 3.75 rounds to 4.
        count.advance(COUNT_STEP * 2);
        assert_eq!(count.display(), 4);
    }

    #[test]
    fn zero_target_finishes_on_first_step() {
        let mut count = CountUp::new(0);
        assert!(!count.is_done());
        count.advance(COUNT_STEP);
        assert!(count.is_done());
        assert_eq!(count.display(), 0);
    }

    #[test]
    fn count_up_ignores_time_after_finishing() {
        let mut count = CountUp::new(40);
        count.advance(COUNT_DURATION * 3);
        assert!(count.is_done());
        assert_eq!(count.display(), 40);
        count.advance(COUNT_DURATION);
        assert_eq!(count.display(), 40);
    }

    #[test]
    fn instant_count_up_is_already_done() {
        let count = CountUp::instant(80);
        assert!(count.is_done());
        assert_eq!(count.display(), 80);
    }

    #[test]
    fn sub_step_time_accumulates_across_calls() {
        let mut count = CountUp::new(60);
        count.advance(Duration::from_millis(10));
        assert_eq!(count.display(), 0);
        count.advance(Duration::from_millis(10));
        // 20ms total: one step done, 5ms carried.
        assert_eq!(count.display(), 1);
    }

    #[test]
    fn stagger_reveals_in_strictly_increasing_order() {
        let mut stagger = Stagger::new(4);
        assert!(stagger.is_visible(0));
        assert!(!stagger.is_visible(1));

        stagger.advance(STAGGER_STEP);
        assert!(stagger.is_visible(1));
        assert!(!stagger.is_visible(2));

        stagger.advance(STAGGER_STEP);
        assert!(stagger.is_visible(2));
        assert!(!stagger.is_visible(3));

        stagger.advance(STAGGER_STEP);
        assert!(stagger.is_visible(3));
        assert!(stagger.is_done());
    }

    #[test]
    fn stagger_never_reveals_out_of_range_indices() {
        let stagger = Stagger::instant(2);
        assert!(stagger.is_visible(0));
        assert!(stagger.is_visible(1));
        assert!(!stagger.is_visible(2));
    }

    #[test]
    fn empty_stagger_is_immediately_done() {
        assert!(Stagger::new(0).is_done());
    }

    #[test]
    fn tween_starts_at_from_and_ends_at_to() {
        let mut tween = ScrollTween::new(100.0, 500.0);
        assert_eq!(tween.value(), 100.0);
        tween.advance(SCROLL_DURATION);
        assert!(tween.is_done());
        assert_eq!(tween.value(), 500.0);
    }

    #[test]
    fn tween_moves_monotonically_towards_target() {
        let mut tween = ScrollTween::new(0.0, 300.0);
        let mut previous = tween.value();
        for _ in 0..30 {
            tween.advance(TICK_INTERVAL);
            assert!(tween.value() >= previous);
            previous = tween.value();
        }
    }

    #[test]
    fn tween_supports_scrolling_up() {
        let mut tween = ScrollTween::new(800.0, 200.0);
        tween.advance(SCROLL_DURATION / 2);
        assert!(tween.value() < 800.0);
        assert!(tween.value() > 200.0);
        tween.advance(SCROLL_DURATION);
        assert_eq!(tween.value(), 200.0);
    }

    #[test]
    fn ease_out_cubic_is_bounded() {
        assert_eq!(ease::out_cubic(0.0), 0.0);
        assert_eq!(ease::out_cubic(1.0), 1.0);
        assert!(ease::out_cubic(0.5) > 0.5);
    }
}
