//! Step Player State Machine
//!
//! The single parameterized player behind every showcase. Holds the
//! ordered step list, a current index and a playback state; a timer
//! advances the index by one per tick until the last step, then stops.
//!
//! The state machine itself is synchronous and deterministic: `tick()`
//! is the only thing that moves the index, and the async [`StepPlayer::run`]
//! loop merely calls it on a fixed cadence. This keeps the playback
//! contract testable under a paused clock.
//!
//! # States
//!
//! - `Idle`: index 0, not advancing
//! - `Playing`: advancing one step per tick
//! - `Paused`: halted at the current index
//! - `Completed`: index at the last step, auto-stopped
//!
//! `play()` is a no-op while playing or once the index is already at
//! the last step; only `reset()` leaves the terminal state.

use std::time::Duration;

use log::debug;

use super::model::{Showcase, ShowcaseStep, StepStatus};

/// Minimum and maximum playback speed multipliers.
const SPEED_RANGE: (f64, f64) = (0.25, 4.0);

/// Playback state of a step player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Not started (or reset); index is 0
    Idle,
    /// Timer is advancing the index
    Playing,
    /// Halted without resetting the index
    Paused,
    /// Index reached the last step and the timer stopped
    Completed,
}

/// Animates progression through a fixed, ordered step list.
///
/// # Example
///
/// ```
/// use showreel::player::{Showcase, ShowcaseStep, StepPlayer, PlayerState};
///
/// let steps = vec![
///     ShowcaseStep::new("a", "A", "first"),
///     ShowcaseStep::new("b", "B", "second"),
/// ];
/// let mut player = StepPlayer::new(Showcase::new("demo", "Demo", steps));
///
/// player.play();
/// player.tick();
/// assert_eq!(player.current_index(), 1);
/// assert_eq!(player.state(), PlayerState::Completed);
/// ```
pub struct StepPlayer {
    showcase: Showcase,
    current: usize,
    state: PlayerState,
    speed: f64,
}

impl StepPlayer {
    /// Creates a player for a showcase, starting idle at index 0.
    pub fn new(showcase: Showcase) -> Self {
        Self {
            showcase,
            current: 0,
            state: PlayerState::Idle,
            speed: 1.0,
        }
    }

    /// Sets the playback speed multiplier, clamped to a sane range.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
        self
    }

    /// Returns the showcase being played.
    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    /// Returns the current playback state.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Returns the current step index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the index of the last step.
    pub fn last_index(&self) -> usize {
        self.showcase.len().saturating_sub(1)
    }

    /// Returns the step at the current index, if any.
    pub fn current_step(&self) -> Option<&ShowcaseStep> {
        self.showcase.steps.get(self.current)
    }

    /// Derived status of the step at `index` for the current frame.
    pub fn status_of(&self, index: usize) -> StepStatus {
        StepStatus::of(index, self.current)
    }

    /// Returns true once the player has auto-stopped at the last step.
    pub fn is_completed(&self) -> bool {
        self.state == PlayerState::Completed
    }

    /// Effective tick interval after applying the speed multiplier.
    pub fn interval(&self) -> Duration {
        self.showcase.interval().div_f64(self.speed)
    }

    /// Begins (or resumes) playback.
    ///
    /// No-op while already playing, or once the index is at the last
    /// step; in the latter case only `reset()` makes `play()` work
    /// again.
    pub fn play(&mut self) {
        match self.state {
            PlayerState::Idle | PlayerState::Paused if self.current < self.last_index() => {
                debug!(
                    "playback started: {} at step {}",
                    self.showcase.id, self.current
                );
                self.state = PlayerState::Playing;
            }
            _ => {}
        }
    }

    /// Halts the timer without resetting the index.
    pub fn pause(&mut self) {
        if self.state == PlayerState::Playing {
            debug!("playback paused: {} at step {}", self.showcase.id, self.current);
            self.state = PlayerState::Paused;
        }
    }

    /// Returns the index to 0 and stops the timer, from any state.
    pub fn reset(&mut self) {
        debug!("playback reset: {}", self.showcase.id);
        self.current = 0;
        self.state = PlayerState::Idle;
    }

    /// Advances the index by one if playing.
    ///
    /// Reaching the last step auto-stops the player. Ticks in any
    /// other state do nothing. Returns true if the index advanced.
    pub fn tick(&mut self) -> bool {
        if self.state != PlayerState::Playing {
            return false;
        }

        self.current += 1;
        if self.current >= self.last_index() {
            self.current = self.last_index();
            self.state = PlayerState::Completed;
            debug!("playback completed: {}", self.showcase.id);
        }
        true
    }

    /// Plays the showcase through to completion, invoking `on_frame`
    /// after every state change (including the initial frame).
    ///
    /// The cadence comes from the showcase interval scaled by the
    /// speed multiplier; under a paused tokio clock time can be
    /// advanced manually.
    pub async fn run<F>(&mut self, mut on_frame: F)
    where
        F: FnMut(&StepPlayer),
    {
        self.play();
        on_frame(self);

        while self.state == PlayerState::Playing {
            tokio::time::sleep(self.interval()).await;
            self.tick();
            on_frame(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::model::StepStatus;

    fn player_with(n: usize) -> StepPlayer {
        let steps = (0..n)
            .map(|i| ShowcaseStep::new(format!("s{}", i), format!("Step {}", i), "scripted"))
            .collect();
        StepPlayer::new(Showcase::new("demo", "Demo", steps))
    }

    #[test]
    fn test_initial_state_is_idle_at_zero() {
        let player = player_with(6);
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_ticks_advance_by_exactly_one() {
        let mut player = player_with(6);
        player.play();

        for expected in 1..=5 {
            assert!(player.tick());
            assert_eq!(player.current_index(), expected);
        }
    }

    #[test]
    fn test_auto_stop_at_last_step() {
        let mut player = player_with(6);
        player.play();
        for _ in 0..5 {
            player.tick();
        }

        assert_eq!(player.current_index(), 5);
        assert_eq!(player.state(), PlayerState::Completed);

        // Further ticks must not move the index.
        assert!(!player.tick());
        assert_eq!(player.current_index(), 5);
    }

    #[test]
    fn test_play_is_noop_when_completed() {
        let mut player = player_with(3);
        player.play();
        player.tick();
        player.tick();
        assert!(player.is_completed());

        player.play();
        assert_eq!(player.state(), PlayerState::Completed);
        assert!(!player.tick());
        assert_eq!(player.current_index(), 2);
    }

    #[test]
    fn test_play_is_noop_for_single_step_list() {
        // N = 1: index 0 is already the last step.
        let mut player = player_with(1);
        player.play();
        assert_eq!(player.state(), PlayerState::Idle);
        assert!(!player.tick());
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_pause_holds_index() {
        let mut player = player_with(6);
        player.play();
        player.tick();
        player.tick();

        player.pause();
        assert_eq!(player.state(), PlayerState::Paused);
        assert_eq!(player.current_index(), 2);

        // Ticks while paused do nothing.
        assert!(!player.tick());
        assert_eq!(player.current_index(), 2);

        // Resuming continues from the held index.
        player.play();
        player.tick();
        assert_eq!(player.current_index(), 3);
    }

    #[test]
    fn test_pause_is_noop_unless_playing() {
        let mut player = player_with(4);
        player.pause();
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut player = player_with(4);

        player.reset();
        assert_eq!(player.state(), PlayerState::Idle);

        player.play();
        player.tick();
        player.reset();
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.state(), PlayerState::Idle);

        player.play();
        player.tick();
        player.pause();
        player.reset();
        assert_eq!(player.current_index(), 0);

        player.play();
        player.tick();
        player.tick();
        player.tick();
        assert!(player.is_completed());
        player.reset();
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.state(), PlayerState::Idle);

        // After reset the player is playable again.
        player.play();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_status_follows_current_index() {
        let mut player = player_with(4);
        player.play();
        player.tick();

        assert_eq!(player.status_of(0), StepStatus::Completed);
        assert_eq!(player.status_of(1), StepStatus::Processing);
        assert_eq!(player.status_of(2), StepStatus::Waiting);
        assert_eq!(player.status_of(3), StepStatus::Waiting);
    }

    #[test]
    fn test_speed_is_clamped() {
        let player = player_with(2).with_speed(100.0);
        assert_eq!(player.interval(), Duration::from_millis(625));

        let player = player_with(2).with_speed(0.0);
        // Clamped to 0.25x => 4x the base interval.
        assert_eq!(player.interval(), Duration::from_millis(10_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_advances_once_per_interval() {
        // 6 steps at 2500 ms; after 5 ticks (12.5 s of simulated
        // time) the index is 5 and the player auto-stopped.
        let mut player = player_with(6);
        let mut indices = Vec::new();

        player.run(|p| indices.push(p.current_index())).await;

        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(player.is_completed());

        // play() after completion is a no-op until reset().
        player.play();
        assert_eq!(player.state(), PlayerState::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_respects_speed_multiplier() {
        let start = tokio::time::Instant::now();
        let mut player = player_with(3).with_speed(2.0);
        player.run(|_| {}).await;

        // Two ticks at 1250 ms each under the paused clock.
        assert_eq!(start.elapsed(), Duration::from_millis(2500));
    }
}
