use crate::components::{HudText, QuestionBar, QuizButton, SummaryBanner};
use crate::quiz::{QuizController, Verdict};
use crate::resources::{QuizBoard, QuizSettings};
use bevy::prelude::*;

const PANEL_COLOR: Color = Color::srgb(0.13, 0.14, 0.16);
const BAR_COLOR: Color = Color::srgb(0.22, 0.23, 0.26);
const ACTIVE_BAR_COLOR: Color = Color::srgb(0.85, 0.62, 0.16);
const MUTED_TEXT: Color = Color::srgb(0.7, 0.7, 0.72);

const BUTTON_IDLE: Color = Color::srgb(0.25, 0.42, 0.75);
const BUTTON_HOVERED: Color = Color::srgb(0.32, 0.5, 0.85);
const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.32, 0.6);
const BUTTON_DISABLED: Color = Color::srgb(0.35, 0.35, 0.38);

pub fn setup_hud(
    mut commands: Commands,
    settings: Res<QuizSettings>,
    controller: Res<QuizController>,
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                right: Val::Px(0.0),
                width: Val::Px(settings.panel_width),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|header| {
                    header.spawn((
                        Text::default(),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        HudText::Progress,
                    ));
                    header.spawn((
                        Text::default(),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        HudText::Elapsed,
                    ));
                });

            panel.spawn((
                Text::default(),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
                HudText::Status,
            ));

            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(10.0),
                    ..default()
                })
                .with_children(|row| {
                    spawn_button(row, "Start", QuizButton::Start);
                    spawn_button(row, "Reset", QuizButton::Reset);
                });

            for (index, target) in controller.targets().iter().enumerate() {
                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(4.0),
                        ..default()
                    })
                    .with_children(|item| {
                        item.spawn((
                            Node {
                                padding: UiRect::all(Val::Px(8.0)),
                                ..default()
                            },
                            BackgroundColor(BAR_COLOR),
                            QuestionBar { index },
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                Text::new(format!("Where is {}?", target.name)),
                                TextFont {
                                    font_size: 17.0,
                                    ..default()
                                },
                            ));
                        });

                        item.spawn((
                            Text::default(),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            HudText::Feedback(index),
                        ));
                    });
            }

            panel.spawn((
                Text::default(),
                TextFont {
                    font_size: 34.0,
                    ..default()
                },
                HudText::Summary,
                SummaryBanner,
                Visibility::Hidden,
            ));
        });
}

fn spawn_button(parent: &mut ChildBuilder, label: &str, button: QuizButton) {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|inner| {
            inner.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
            ));
        });
}

/// Copies the board into the panel whenever the quiz touched it.
pub fn sync_hud_system(
    board: Res<QuizBoard>,
    mut texts: Query<(&HudText, &mut Text, &mut TextColor)>,
    mut bars: Query<(&QuestionBar, &mut BackgroundColor)>,
    mut banners: Query<&mut Visibility, With<SummaryBanner>>,
) {
    if !board.is_changed() {
        return;
    }

    for (field, mut text, mut color) in texts.iter_mut() {
        match *field {
            HudText::Progress => text.0 = board.progress.clone(),
            HudText::Elapsed => text.0 = board.elapsed.clone(),
            HudText::Status => text.0 = board.status.clone(),
            HudText::Summary => text.0 = board.summary.clone().unwrap_or_default(),
            HudText::Feedback(index) => {
                let verdict = board.feedback.get(index).copied().flatten();
                text.0 = verdict.map(Verdict::message).unwrap_or_default().to_string();
                if let Some(verdict) = verdict {
                    color.0 = verdict.color();
                }
            }
        }
    }

    for (bar, mut background) in bars.iter_mut() {
        background.0 = if board.active == Some(bar.index) {
            ACTIVE_BAR_COLOR
        } else {
            BAR_COLOR
        };
    }

    for mut visibility in banners.iter_mut() {
        *visibility = if board.summary.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub fn button_style_system(
    board: Res<QuizBoard>,
    mut buttons: Query<(&QuizButton, &Interaction, &mut BackgroundColor)>,
) {
    for (button, interaction, mut background) in buttons.iter_mut() {
        let disabled = *button == QuizButton::Start && !board.start_enabled;
        background.0 = match (disabled, interaction) {
            (true, _) => BUTTON_DISABLED,
            (false, Interaction::Pressed) => BUTTON_PRESSED,
            (false, Interaction::Hovered) => BUTTON_HOVERED,
            (false, Interaction::None) => BUTTON_IDLE,
        };
    }
}
