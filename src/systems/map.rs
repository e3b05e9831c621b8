use crate::components::{GuessSprite, MapCamera};
use crate::geo::MapProjection;
use crate::resources::{GuessOverlay, QuizSettings};
use crate::targets::OVERLAY_BOUNDS;
use bevy::math::Isometry2d;
use bevy::prelude::*;

const MARKER_SIZE: f32 = 12.0;

pub fn setup_map(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<QuizSettings>,
) {
    commands.spawn((Camera2d::default(), MapCamera));

    let projection = MapProjection::fit(OVERLAY_BOUNDS, settings.map_area(), settings.map_center());

    // Flat grey base under the campus image
    commands.spawn((
        Sprite {
            color: Color::srgb(0.82, 0.82, 0.82),
            custom_size: Some(settings.map_area() + Vec2::splat(settings.map_margin)),
            ..default()
        },
        Transform::from_translation(settings.map_center().extend(-0.2)),
    ));

    commands.spawn((
        Sprite {
            image: asset_server.load(settings.overlay_image.clone()),
            color: Color::WHITE.with_alpha(settings.overlay_opacity),
            custom_size: Some(projection.size),
            ..default()
        },
        Transform::from_translation(projection.center.extend(-0.1)),
    ));

    let center = OVERLAY_BOUNDS.center();
    info!(
        "Map overlay {} centered on ({:.4}, {:.4}), fitted to {:.0}x{:.0}",
        settings.overlay_image, center.lat, center.lng, projection.size.x, projection.size.y
    );

    commands.insert_resource(projection);
}

// Respawns the answer rectangle and guess marker whenever the guess changes
pub fn render_guess_system(
    mut commands: Commands,
    overlay: Res<GuessOverlay>,
    projection: Res<MapProjection>,
    settings: Res<QuizSettings>,
    sprites: Query<Entity, With<GuessSprite>>,
) {
    if !overlay.is_changed() {
        return;
    }

    for entity in sprites.iter() {
        commands.entity(entity).despawn();
    }

    let Some(mark) = overlay.mark else {
        return;
    };

    let (center, size) = projection.rect_to_world(mark.answer);
    commands.spawn((
        Sprite {
            color: mark.verdict.color().with_alpha(settings.answer_fill_alpha),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.1)),
        GuessSprite,
    ));

    commands.spawn((
        Sprite {
            color: Color::srgb(0.92, 0.26, 0.21),
            custom_size: Some(Vec2::splat(MARKER_SIZE)),
            ..default()
        },
        Transform::from_translation(projection.to_world(mark.guess).extend(0.2)),
        Name::new("Your Guess"),
        GuessSprite,
    ));
}

// Sprites have no stroke, so the rectangle border is a gizmo
pub fn outline_guess_system(
    mut gizmos: Gizmos,
    overlay: Res<GuessOverlay>,
    projection: Res<MapProjection>,
) {
    if let Some(mark) = overlay.mark {
        let (center, size) = projection.rect_to_world(mark.answer);
        gizmos.rect_2d(Isometry2d::from_translation(center), size, mark.verdict.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::quiz::{MapWidget, Verdict};
    use crate::targets::CAMPUS_TARGETS;

    fn render_app() -> App {
        let settings = QuizSettings::default();
        let projection =
            MapProjection::fit(OVERLAY_BOUNDS, settings.map_area(), settings.map_center());

        let mut app = App::new();
        app.insert_resource(settings)
            .insert_resource(projection)
            .insert_resource(GuessOverlay::default())
            .add_systems(Update, render_guess_system);
        app
    }

    fn guess_sprites(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<GuessSprite>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn test_guess_spawns_rectangle_and_marker() {
        let mut app = render_app();
        app.update();
        assert_eq!(guess_sprites(&mut app), 0);

        app.world_mut().resource_mut::<GuessOverlay>().show_guess(
            GeoPoint::new(34.2405, -118.5270),
            CAMPUS_TARGETS[0].bounds,
            Verdict::Correct,
        );
        app.update();

        assert_eq!(guess_sprites(&mut app), 2);
    }

    #[test]
    fn test_cleared_guess_removes_sprites() {
        let mut app = render_app();
        app.world_mut().resource_mut::<GuessOverlay>().show_guess(
            GeoPoint::new(0.0, 0.0),
            CAMPUS_TARGETS[1].bounds,
            Verdict::Wrong,
        );
        app.update();

        app.world_mut().resource_mut::<GuessOverlay>().clear_guess();
        app.update();

        assert_eq!(guess_sprites(&mut app), 0);
    }
}
