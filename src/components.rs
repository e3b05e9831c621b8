// components.rs
use bevy::prelude::*;

#[derive(Component)]
pub struct MapCamera;

// Sprites drawn for the last guess; despawned whenever the guess changes
#[derive(Component)]
pub struct GuessSprite;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizButton {
    Start,
    Reset,
}

/// Text regions of the side panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudText {
    Progress,
    Elapsed,
    Status,
    Summary,
    Feedback(usize),
}

#[derive(Component)]
pub struct QuestionBar {
    pub index: usize,
}

#[derive(Component)]
pub struct SummaryBanner;
