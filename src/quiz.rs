// quiz.rs
use std::time::Duration;

use bevy::prelude::*;

use crate::geo::{GeoPoint, GeoRect};
use crate::targets::Target;

pub const STATUS_IDLE: &str = "Press Start.";
pub const STATUS_RUNNING: &str = "Double click the map to answer.";
pub const STATUS_DONE: &str = "Done.";

/// Outcome of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Your answer is correct!!",
            Verdict::Wrong => "Sorry wrong location.",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Verdict::Correct => Color::srgb_u8(0x2f, 0x7d, 0x2f),
            Verdict::Wrong => Color::srgb_u8(0xcc, 0x2d, 0x2d),
        }
    }
}

/// Where the guess marker and the answer rectangle are drawn.
pub trait MapWidget {
    fn show_guess(&mut self, guess: GeoPoint, answer: GeoRect, verdict: Verdict);
    fn clear_guess(&mut self);
}

/// Named text regions the quiz renders into.
pub trait DisplaySurface {
    fn set_progress(&mut self, text: String);
    fn set_elapsed(&mut self, text: String);
    fn set_status(&mut self, text: &str);
    fn set_feedback(&mut self, question: usize, verdict: Option<Verdict>);
    fn set_active(&mut self, question: Option<usize>);
    fn set_summary(&mut self, summary: Option<String>);
    fn set_start_enabled(&mut self, enabled: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub started: bool,
    pub index: usize,
    pub correct: usize,
    pub start_timestamp: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Running,
    Finished,
}

/// `MM:SS`, zero padded. The minutes field is not capped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Session state machine for the map quiz.
///
/// Every transition renders through the [`MapWidget`] and [`DisplaySurface`]
/// passed in, so the controller itself never touches the ECS world. The
/// elapsed-time refresh is a repeating [`Timer`] owned here; it only exists
/// while a session is running.
#[derive(Resource)]
pub struct QuizController {
    targets: Vec<Target>,
    session: SessionState,
    tick_interval: Duration,
    ticker: Option<Timer>,
}

impl QuizController {
    pub fn new(targets: impl Into<Vec<Target>>, tick_interval: Duration) -> Self {
        Self {
            targets: targets.into(),
            session: SessionState::default(),
            tick_interval,
            ticker: None,
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn until_next_tick(&self) -> Option<Duration> {
        self.ticker.as_ref().map(Timer::remaining)
    }

    pub fn phase(&self) -> QuizPhase {
        if self.session.started {
            QuizPhase::Running
        } else if self.session.index == self.targets.len() && !self.targets.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::Idle
        }
    }

    /// Begins a session. Returns `false` (and changes nothing) if one is
    /// already running.
    pub fn start<M: MapWidget, D: DisplaySurface>(
        &mut self,
        now: Duration,
        map: &mut M,
        display: &mut D,
    ) -> bool {
        if self.session.started {
            return false;
        }

        self.session.started = true;
        self.session.index = 0;
        self.session.correct = 0;

        map.clear_guess();
        self.clear_feedback(display);
        display.set_active(Some(0));
        display.set_summary(None);
        display.set_start_enabled(false);

        self.session.start_timestamp = Some(now);
        self.ticker = Some(Timer::new(self.tick_interval, TimerMode::Repeating));
        display.set_elapsed(format_elapsed(Duration::ZERO));

        self.render_progress(display);
        display.set_status(STATUS_RUNNING);
        true
    }

    /// Scores `point` against the current target. Ignored (returns `None`)
    /// unless a session is running.
    pub fn submit_guess<M: MapWidget, D: DisplaySurface>(
        &mut self,
        point: GeoPoint,
        map: &mut M,
        display: &mut D,
    ) -> Option<Verdict> {
        if !self.session.started {
            return None;
        }
        let target = *self.targets.get(self.session.index)?;

        let verdict = if target.bounds.contains(point) {
            Verdict::Correct
        } else {
            Verdict::Wrong
        };

        map.clear_guess();
        map.show_guess(point, target.bounds, verdict);
        display.set_feedback(self.session.index, Some(verdict));

        if verdict == Verdict::Correct {
            self.session.correct += 1;
        }
        self.session.index += 1;

        if self.session.index >= self.targets.len() {
            self.finish(display);
        } else {
            display.set_active(Some(self.session.index));
            self.render_progress(display);
        }

        Some(verdict)
    }

    pub fn finish<D: DisplaySurface>(&mut self, display: &mut D) {
        self.session.started = false;
        self.ticker = None;

        display.set_active(None);
        display.set_summary(Some(self.summary()));
        display.set_start_enabled(true);
        display.set_status(STATUS_DONE);
        self.render_progress(display);
    }

    /// Returns to the initial display. Valid in every phase.
    pub fn reset<M: MapWidget, D: DisplaySurface>(&mut self, map: &mut M, display: &mut D) {
        self.session.started = false;
        self.session.index = 0;
        self.session.correct = 0;

        self.ticker = None;
        display.set_elapsed(format_elapsed(Duration::ZERO));
        display.set_start_enabled(true);

        map.clear_guess();
        self.clear_feedback(display);
        display.set_active(None);
        display.set_summary(None);

        display.set_status(STATUS_IDLE);
        self.render_progress(display);
    }

    /// Advances the refresh timer by one frame. Returns whether a tick is due.
    pub fn advance(&mut self, delta: Duration) -> bool {
        match self.ticker.as_mut() {
            Some(timer) => {
                timer.tick(delta);
                timer.just_finished()
            }
            None => false,
        }
    }

    pub fn tick<D: DisplaySurface>(&self, now: Duration, display: &mut D) {
        if let Some(started_at) = self.session.start_timestamp {
            display.set_elapsed(format_elapsed(now.saturating_sub(started_at)));
        }
    }

    pub fn summary(&self) -> String {
        let wrong = self.targets.len().saturating_sub(self.session.correct);
        format!("{} Correct, {} Incorrect", self.session.correct, wrong)
    }

    fn clear_feedback<D: DisplaySurface>(&self, display: &mut D) {
        for question in 0..self.targets.len() {
            display.set_feedback(question, None);
        }
    }

    fn render_progress<D: DisplaySurface>(&self, display: &mut D) {
        let total = self.targets.len();
        display.set_progress(format!("{}/{}", self.session.index.min(total), total));
    }
}
