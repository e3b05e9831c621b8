// resources.rs
use bevy::prelude::*;
use std::time::Duration;

use crate::geo::{GeoPoint, GeoRect};
use crate::quiz::{format_elapsed, DisplaySurface, MapWidget, Verdict, STATUS_IDLE};

#[derive(Resource, Clone)]
pub struct QuizSettings {
    pub window_size: Vec2,
    pub panel_width: f32,
    pub map_margin: f32,
    pub overlay_image: String,
    pub overlay_opacity: f32,
    pub answer_fill_alpha: f32,
    pub tick_interval: Duration,
    pub double_click_window: Duration,
    pub double_click_slop: f32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            window_size: Vec2::new(1280.0, 760.0),
            panel_width: 360.0,
            map_margin: 20.0,
            overlay_image: "csun_map.png".into(),
            overlay_opacity: 0.95,
            answer_fill_alpha: 0.35,
            tick_interval: Duration::from_millis(250),
            double_click_window: Duration::from_millis(500),
            double_click_slop: 6.0, // pixels
        }
    }
}

impl QuizSettings {
    /// World-space area left for the map once the side panel is carved off.
    pub fn map_area(&self) -> Vec2 {
        Vec2::new(
            self.window_size.x - self.panel_width - 2.0 * self.map_margin,
            self.window_size.y - 2.0 * self.map_margin,
        )
    }

    /// Center of the map area with the camera at the origin.
    pub fn map_center(&self) -> Vec2 {
        Vec2::new(-self.panel_width / 2.0, 0.0)
    }
}

/// Everything the side panel shows. Written by the quiz, read by the HUD.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct QuizBoard {
    pub progress: String,
    pub elapsed: String,
    pub status: String,
    pub feedback: Vec<Option<Verdict>>,
    pub active: Option<usize>,
    pub summary: Option<String>,
    pub start_enabled: bool,
}

impl QuizBoard {
    pub fn new(questions: usize) -> Self {
        Self {
            progress: format!("0/{}", questions),
            elapsed: format_elapsed(Duration::ZERO),
            status: STATUS_IDLE.to_string(),
            feedback: vec![None; questions],
            active: None,
            summary: None,
            start_enabled: true,
        }
    }
}

impl DisplaySurface for QuizBoard {
    fn set_progress(&mut self, text: String) {
        self.progress = text;
    }

    fn set_elapsed(&mut self, text: String) {
        self.elapsed = text;
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_feedback(&mut self, question: usize, verdict: Option<Verdict>) {
        if let Some(slot) = self.feedback.get_mut(question) {
            *slot = verdict;
        }
    }

    fn set_active(&mut self, question: Option<usize>) {
        self.active = question;
    }

    fn set_summary(&mut self, summary: Option<String>) {
        self.summary = summary;
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMark {
    pub guess: GeoPoint,
    pub answer: GeoRect,
    pub verdict: Verdict,
}

/// The marker/rectangle pair currently on the map, if any.
#[derive(Resource, Debug, Default)]
pub struct GuessOverlay {
    pub mark: Option<GuessMark>,
}

impl MapWidget for GuessOverlay {
    fn show_guess(&mut self, guess: GeoPoint, answer: GeoRect, verdict: Verdict) {
        self.mark = Some(GuessMark {
            guess,
            answer,
            verdict,
        });
    }

    fn clear_guess(&mut self) {
        self.mark = None;
    }
}

/// World position under the mouse, `None` when the cursor is off the window.
#[derive(Resource, Debug, Default)]
pub struct CursorWorld(pub Option<Vec2>);

/// Pairs single presses into double-clicks.
#[derive(Resource, Debug, Default)]
pub struct DoubleClickTracker {
    last_press: Option<(Duration, Vec2)>,
}

impl DoubleClickTracker {
    /// Records a press at `position` (world units). Returns `true` when it
    /// completes a double-click; both presses are then consumed.
    pub fn register(&mut self, now: Duration, position: Vec2, window: Duration, slop: f32) -> bool {
        if let Some((at, first)) = self.last_press {
            if now.saturating_sub(at) <= window && first.distance(position) <= slop {
                self.last_press = None;
                return true;
            }
        }

        self.last_press = Some((now, position));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn test_second_press_nearby_is_double_click() {
        let mut tracker = DoubleClickTracker::default();
        assert!(!tracker.register(Duration::from_millis(1000), Vec2::new(10.0, 10.0), WINDOW, 6.0));
        assert!(tracker.register(Duration::from_millis(1300), Vec2::new(12.0, 11.0), WINDOW, 6.0));
    }

    #[test]
    fn test_slow_second_press_starts_new_pair() {
        let mut tracker = DoubleClickTracker::default();
        tracker.register(Duration::from_millis(0), Vec2::ZERO, WINDOW, 6.0);
        assert!(!tracker.register(Duration::from_millis(800), Vec2::ZERO, WINDOW, 6.0));
        assert!(tracker.register(Duration::from_millis(1000), Vec2::ZERO, WINDOW, 6.0));
    }

    #[test]
    fn test_distant_second_press_is_not_double_click() {
        let mut tracker = DoubleClickTracker::default();
        tracker.register(Duration::ZERO, Vec2::ZERO, WINDOW, 6.0);
        assert!(!tracker.register(Duration::from_millis(100), Vec2::new(50.0, 0.0), WINDOW, 6.0));
    }

    #[test]
    fn test_triple_click_yields_one_double_click() {
        let mut tracker = DoubleClickTracker::default();
        let at = |ms| Duration::from_millis(ms);
        assert!(!tracker.register(at(0), Vec2::ZERO, WINDOW, 6.0));
        assert!(tracker.register(at(100), Vec2::ZERO, WINDOW, 6.0));
        assert!(!tracker.register(at(200), Vec2::ZERO, WINDOW, 6.0));
    }

    #[test]
    fn test_board_ignores_feedback_for_unknown_question() {
        let mut board = QuizBoard::new(2);
        board.set_feedback(7, Some(Verdict::Wrong));
        assert_eq!(board.feedback, vec![None, None]);
    }
}
