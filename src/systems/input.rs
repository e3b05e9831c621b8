use crate::components::{MapCamera, QuizButton};
use crate::events::{MapDoubleClicked, ResetRequested, StartRequested};
use crate::geo::MapProjection;
use crate::resources::{CursorWorld, DoubleClickTracker, QuizBoard, QuizSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

// Camera scale is 1, so world units are logical pixels
pub fn cursor_world_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
    mut cursor: ResMut<CursorWorld>,
) {
    let world = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
        .and_then(|position| {
            let (camera, camera_transform) = cameras.get_single().ok()?;
            camera.viewport_to_world_2d(camera_transform, position).ok()
        });

    if cursor.0 != world {
        cursor.0 = world;
    }
}

pub fn map_click_system(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorWorld>,
    projection: Res<MapProjection>,
    settings: Res<QuizSettings>,
    mut tracker: ResMut<DoubleClickTracker>,
    mut clicks: EventWriter<MapDoubleClicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(world) = cursor.0 else {
        return;
    };

    // Presses on the side panel are not map clicks
    if !projection.contains_world(world) {
        return;
    }

    if tracker.register(
        time.elapsed(),
        world,
        settings.double_click_window,
        settings.double_click_slop,
    ) {
        let point = projection.to_geo(world);
        debug!("Map double-click at ({:.5}, {:.5})", point.lat, point.lng);
        clicks.send(MapDoubleClicked { point });
    }
}

pub fn quiz_button_system(
    interactions: Query<(&Interaction, &QuizButton), Changed<Interaction>>,
    board: Res<QuizBoard>,
    mut starts: EventWriter<StartRequested>,
    mut resets: EventWriter<ResetRequested>,
) {
    for (interaction, button) in interactions.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        match button {
            // Disabled while a session runs
            QuizButton::Start if !board.start_enabled => {}
            QuizButton::Start => {
                starts.send(StartRequested);
            }
            QuizButton::Reset => {
                resets.send(ResetRequested);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::{CAMPUS_TARGETS, OVERLAY_BOUNDS};
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn button_app() -> App {
        let mut app = App::new();
        app.add_event::<StartRequested>()
            .add_event::<ResetRequested>()
            .insert_resource(QuizBoard::new(5))
            .add_systems(Update, quiz_button_system);
        app
    }

    fn sent<E: Event>(app: &App) -> usize {
        app.world().resource::<Events<E>>().len()
    }

    #[test]
    fn test_pressed_start_button_requests_start() {
        let mut app = button_app();
        app.world_mut().spawn((Interaction::Pressed, QuizButton::Start));

        app.update();

        assert_eq!(sent::<StartRequested>(&app), 1);
        assert_eq!(sent::<ResetRequested>(&app), 0);
    }

    #[test]
    fn test_disabled_start_button_is_ignored() {
        let mut app = button_app();
        app.world_mut().resource_mut::<QuizBoard>().start_enabled = false;
        app.world_mut().spawn((Interaction::Pressed, QuizButton::Start));

        app.update();

        assert_eq!(sent::<StartRequested>(&app), 0);
    }

    #[test]
    fn test_reset_button_always_requests_reset() {
        let mut app = button_app();
        app.world_mut().resource_mut::<QuizBoard>().start_enabled = false;
        app.world_mut().spawn((Interaction::Pressed, QuizButton::Reset));
        app.world_mut().spawn((Interaction::Hovered, QuizButton::Start));

        app.update();

        assert_eq!(sent::<ResetRequested>(&app), 1);
        assert_eq!(sent::<StartRequested>(&app), 0);
    }

    fn click_app() -> App {
        let settings = QuizSettings::default();
        let projection =
            MapProjection::fit(OVERLAY_BOUNDS, settings.map_area(), settings.map_center());

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .add_event::<MapDoubleClicked>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<CursorWorld>()
            .init_resource::<DoubleClickTracker>()
            .insert_resource(projection)
            .insert_resource(settings)
            .add_systems(Update, map_click_system);
        app
    }

    fn press_at(app: &mut App, world: Vec2) {
        app.world_mut().resource_mut::<CursorWorld>().0 = Some(world);
        {
            let mut mouse = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
            mouse.release(MouseButton::Left);
            mouse.clear();
            mouse.press(MouseButton::Left);
        }
        app.update();
    }

    fn drain_clicks(app: &mut App) -> Vec<MapDoubleClicked> {
        app.world_mut()
            .resource_mut::<Events<MapDoubleClicked>>()
            .drain()
            .collect()
    }

    fn on_target(app: &App, question: usize) -> Vec2 {
        app.world()
            .resource::<MapProjection>()
            .to_world(CAMPUS_TARGETS[question].bounds.center())
    }

    fn on_panel(app: &App) -> Vec2 {
        let settings = app.world().resource::<QuizSettings>();
        Vec2::new(settings.window_size.x / 2.0 - settings.panel_width / 2.0, 0.0)
    }

    #[test]
    fn test_double_press_on_map_sends_geo_point() {
        let mut app = click_app();
        let spot = on_target(&app, 2);

        press_at(&mut app, spot);
        assert!(drain_clicks(&mut app).is_empty());
        press_at(&mut app, spot);

        let clicks = drain_clicks(&mut app);
        assert_eq!(clicks.len(), 1);
        assert!(CAMPUS_TARGETS[2].bounds.contains(clicks[0].point));
    }

    #[test]
    fn test_presses_on_panel_are_not_map_clicks() {
        let mut app = click_app();
        let panel = on_panel(&app);
        assert!(!app.world().resource::<MapProjection>().contains_world(panel));

        press_at(&mut app, panel);
        press_at(&mut app, panel);

        assert!(drain_clicks(&mut app).is_empty());
    }

    #[test]
    fn test_panel_press_between_map_presses_keeps_pair() {
        let mut app = click_app();
        let spot = on_target(&app, 0);
        let panel = on_panel(&app);

        press_at(&mut app, spot);
        press_at(&mut app, panel);
        press_at(&mut app, spot);

        let clicks = drain_clicks(&mut app);
        assert_eq!(clicks.len(), 1);
        assert!(CAMPUS_TARGETS[0].bounds.contains(clicks[0].point));
    }
}
