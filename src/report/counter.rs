//! Animated Counters
//!
//! Linear count-up animation for dashboard metrics: a fixed number of
//! ticks from zero to the target, with the final tick clamped to land
//! exactly on the target value.
//!
//! Like the step player, the counter itself is synchronous; the async
//! driver only supplies the cadence.

use std::time::Duration;

/// Number of animation ticks from zero to target.
pub const COUNTER_TICKS: u32 = 60;

/// How a metric value is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricFormat {
    /// Prefix, e.g. "$"
    pub prefix: &'static str,
    /// Suffix, e.g. "%" or " mo"
    pub suffix: &'static str,
    /// Decimal places shown
    pub decimals: u32,
}

impl MetricFormat {
    pub const fn dollars() -> Self {
        Self {
            prefix: "$",
            suffix: "",
            decimals: 0,
        }
    }

    pub const fn percent() -> Self {
        Self {
            prefix: "",
            suffix: "%",
            decimals: 0,
        }
    }

    pub const fn plain(decimals: u32) -> Self {
        Self {
            prefix: "",
            suffix: "",
            decimals,
        }
    }

    pub const fn suffixed(suffix: &'static str, decimals: u32) -> Self {
        Self {
            prefix: "",
            suffix,
            decimals,
        }
    }

    /// Formats a value with prefix, thousands grouping and suffix.
    pub fn render(&self, value: f64) -> String {
        let body = group_thousands(value, self.decimals);
        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

/// Formats a number with comma-grouped integer digits.
fn group_thousands(value: f64, decimals: u32) -> String {
    let formatted = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Counts linearly from zero to a target over a fixed number of ticks.
///
/// # Example
///
/// ```
/// use showreel::report::{AnimatedCounter, COUNTER_TICKS};
/// use std::time::Duration;
///
/// let mut counter = AnimatedCounter::new(1_480_750.0, Duration::from_millis(2000));
/// for _ in 0..COUNTER_TICKS {
///     counter.tick();
/// }
/// assert_eq!(counter.value(), 1_480_750.0);
/// assert!(counter.is_done());
/// ```
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    target: f64,
    value: f64,
    ticks_done: u32,
    duration: Duration,
}

impl AnimatedCounter {
    /// Creates a counter at zero aiming for `target` over `duration`.
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            value: 0.0,
            ticks_done: 0,
            duration,
        }
    }

    /// Current animated value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The final value the animation lands on.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// True once all ticks have run.
    pub fn is_done(&self) -> bool {
        self.ticks_done >= COUNTER_TICKS
    }

    /// Interval between ticks for the configured duration.
    pub fn tick_interval(&self) -> Duration {
        self.duration / COUNTER_TICKS
    }

    /// Advances the animation by one tick.
    ///
    /// The increment is `target / 60`; the last tick sets the value to
    /// exactly the target so floating point drift can't leave it off
    /// by a fraction. Returns false once the animation has finished.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }

        self.ticks_done += 1;
        if self.ticks_done >= COUNTER_TICKS {
            self.value = self.target;
        } else {
            self.value += self.target / f64::from(COUNTER_TICKS);
        }
        true
    }

    /// Jumps straight to the target, skipping the animation.
    pub fn finish(&mut self) {
        self.ticks_done = COUNTER_TICKS;
        self.value = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_lands_exactly_on_target() {
        // 1/3 doesn't divide evenly into 60 increments; the clamp on
        // the final tick must still land exactly.
        let mut counter = AnimatedCounter::new(1.0 / 3.0, Duration::from_millis(2000));
        while counter.tick() {}
        assert_eq!(counter.value(), 1.0 / 3.0);
    }

    #[test]
    fn test_counter_runs_exactly_sixty_ticks() {
        let mut counter = AnimatedCounter::new(100.0, Duration::from_millis(2000));
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, COUNTER_TICKS);
        assert!(!counter.tick());
    }

    #[test]
    fn test_counter_is_monotonic_for_positive_target() {
        let mut counter = AnimatedCounter::new(1_480_750.0, Duration::from_millis(2000));
        let mut last = counter.value();
        while counter.tick() {
            assert!(counter.value() >= last);
            last = counter.value();
        }
        assert_eq!(counter.value(), 1_480_750.0);
    }

    #[test]
    fn test_counter_zero_target() {
        let mut counter = AnimatedCounter::new(0.0, Duration::from_millis(2000));
        while counter.tick() {}
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn test_tick_interval_divides_duration() {
        let counter = AnimatedCounter::new(10.0, Duration::from_millis(3000));
        assert_eq!(counter.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_finish_skips_animation() {
        let mut counter = AnimatedCounter::new(42.0, Duration::from_millis(2000));
        counter.finish();
        assert!(counter.is_done());
        assert_eq!(counter.value(), 42.0);
    }

    #[test]
    fn test_format_dollars_with_grouping() {
        let fmt = MetricFormat::dollars();
        assert_eq!(fmt.render(1_480_750.0), "$1,480,750");
        assert_eq!(fmt.render(405_500.0), "$405,500");
        assert_eq!(fmt.render(0.0), "$0");
    }

    #[test]
    fn test_format_decimals_and_suffix() {
        assert_eq!(MetricFormat::percent().render(293.0), "293%");
        assert_eq!(MetricFormat::plain(2).render(16.28), "16.28");
        assert_eq!(MetricFormat::suffixed(" mo", 1).render(4.1), "4.1 mo");
    }

    #[test]
    fn test_format_small_and_negative() {
        assert_eq!(MetricFormat::plain(0).render(999.0), "999");
        assert_eq!(MetricFormat::plain(0).render(-1234.0), "-1,234");
    }
}
