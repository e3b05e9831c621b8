use crate::events::{MapDoubleClicked, ResetRequested, StartRequested};
use crate::quiz::{QuizController, QuizPhase};
use crate::resources::{GuessOverlay, QuizBoard};
use bevy::prelude::*;

// Paints the idle board once the panel exists
pub fn init_quiz_system(
    mut controller: ResMut<QuizController>,
    mut overlay: ResMut<GuessOverlay>,
    mut board: ResMut<QuizBoard>,
) {
    controller.reset(&mut *overlay, &mut *board);
}

pub fn start_quiz_system(
    time: Res<Time>,
    mut requests: EventReader<StartRequested>,
    mut controller: ResMut<QuizController>,
    mut overlay: ResMut<GuessOverlay>,
    mut board: ResMut<QuizBoard>,
) {
    for _ in requests.read() {
        if controller.start(time.elapsed(), &mut *overlay, &mut *board) {
            info!(
                "Quiz started with {} questions",
                controller.targets().len()
            );
        }
    }
}

pub fn reset_quiz_system(
    mut requests: EventReader<ResetRequested>,
    mut controller: ResMut<QuizController>,
    mut overlay: ResMut<GuessOverlay>,
    mut board: ResMut<QuizBoard>,
) {
    for _ in requests.read() {
        controller.reset(&mut *overlay, &mut *board);
        info!("Quiz reset");
    }
}

pub fn guess_system(
    mut clicks: EventReader<MapDoubleClicked>,
    mut controller: ResMut<QuizController>,
    mut overlay: ResMut<GuessOverlay>,
    mut board: ResMut<QuizBoard>,
) {
    for click in clicks.read() {
        let question = controller.session().index;
        let Some(verdict) = controller.submit_guess(click.point, &mut *overlay, &mut *board)
        else {
            continue;
        };

        if let Some(target) = controller.targets().get(question) {
            info!(
                "Question {} ({}): {:?} at ({:.5}, {:.5})",
                question + 1,
                target.name,
                verdict,
                click.point.lat,
                click.point.lng
            );
        }

        if controller.phase() == QuizPhase::Finished {
            info!("Quiz finished: {}", controller.summary());
        }
    }
}

pub fn quiz_tick_system(
    time: Res<Time>,
    mut controller: ResMut<QuizController>,
    mut board: ResMut<QuizBoard>,
) {
    if !controller.is_ticking() {
        return;
    }

    // The ticker counts from the frame after the one that started it
    if controller.session().start_timestamp == Some(time.elapsed()) {
        return;
    }

    if controller.advance(time.delta()) {
        controller.tick(time.elapsed(), &mut *board);
    }
}
