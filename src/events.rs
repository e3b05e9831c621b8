use bevy::prelude::*;

use crate::geo::GeoPoint;

#[derive(Event, Debug, Clone, Copy)]
pub struct StartRequested;

#[derive(Event, Debug, Clone, Copy)]
pub struct ResetRequested;

// A double-click that landed on the map, already converted to lat/lng
#[derive(Event, Debug, Clone, Copy)]
pub struct MapDoubleClicked {
    pub point: GeoPoint,
}
