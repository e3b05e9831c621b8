use bevy::prelude::*;
mod components;
mod events;
mod geo;
mod quiz;
mod resources;
mod systems;
mod targets;

use events::{MapDoubleClicked, ResetRequested, StartRequested};
use quiz::QuizController;
use resources::*;
use systems::hud::*;
use systems::input::*;
use systems::map::*;
use systems::quiz::*;
use targets::CAMPUS_TARGETS;

fn main() {
    let settings = QuizSettings::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Campus Map Quiz".into(),
                resolution: (settings.window_size.x, settings.window_size.y).into(),
                // The map projection is fitted once at startup
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_event::<StartRequested>()
        .add_event::<ResetRequested>()
        .add_event::<MapDoubleClicked>()
        .insert_resource(QuizController::new(CAMPUS_TARGETS, settings.tick_interval))
        .insert_resource(QuizBoard::new(CAMPUS_TARGETS.len()))
        .insert_resource(GuessOverlay::default())
        .insert_resource(DoubleClickTracker::default())
        .insert_resource(CursorWorld::default())
        .insert_resource(settings)
        .add_systems(Startup, (setup_map, setup_hud, init_quiz_system))
        .add_systems(
            Update,
            (
                (
                    (cursor_world_system, map_click_system).chain(),
                    quiz_button_system,
                ),
                (
                    start_quiz_system,
                    reset_quiz_system,
                    guess_system,
                    quiz_tick_system,
                )
                    .chain(),
                (
                    render_guess_system,
                    outline_guess_system,
                    sync_hud_system,
                    button_style_system,
                ),
            )
                .chain(),
        )
        .run();
}
