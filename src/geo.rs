// geo.rs
use bevy::prelude::*;

/// A geographic coordinate reported by a click on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An inclusive latitude/longitude rectangle. `north > south` and `east > west`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoRect {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }
}

/// Linear fit of a geographic rectangle onto a world-space rectangle.
///
/// Longitude is scaled by the cosine of the middle latitude so the overlay
/// keeps its real-world aspect ratio. The fitted area is the largest that
/// fits inside `available` while keeping that aspect.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapProjection {
    pub bounds: GeoRect,
    pub center: Vec2,
    pub size: Vec2,
}

impl MapProjection {
    pub fn fit(bounds: GeoRect, available: Vec2, center: Vec2) -> Self {
        let mid_lat = (bounds.north + bounds.south) / 2.0;
        let geo_width = bounds.lng_span() * mid_lat.to_radians().cos();
        let geo_height = bounds.lat_span();

        let scale = (available.x as f64 / geo_width).min(available.y as f64 / geo_height);
        let size = Vec2::new((geo_width * scale) as f32, (geo_height * scale) as f32);

        Self {
            bounds,
            center,
            size,
        }
    }

    pub fn to_world(&self, point: GeoPoint) -> Vec2 {
        let fx = (point.lng - self.bounds.west) / self.bounds.lng_span();
        let fy = (point.lat - self.bounds.south) / self.bounds.lat_span();

        Vec2::new(
            self.center.x + ((fx - 0.5) as f32) * self.size.x,
            self.center.y + ((fy - 0.5) as f32) * self.size.y,
        )
    }

    pub fn to_geo(&self, world: Vec2) -> GeoPoint {
        let fx = ((world.x - self.center.x) / self.size.x) as f64 + 0.5;
        let fy = ((world.y - self.center.y) / self.size.y) as f64 + 0.5;

        GeoPoint::new(
            self.bounds.south + fy * self.bounds.lat_span(),
            self.bounds.west + fx * self.bounds.lng_span(),
        )
    }

    /// World-space center and size of `rect`.
    pub fn rect_to_world(&self, rect: GeoRect) -> (Vec2, Vec2) {
        let south_west = self.to_world(GeoPoint::new(rect.south, rect.west));
        let north_east = self.to_world(GeoPoint::new(rect.north, rect.east));

        ((south_west + north_east) / 2.0, north_east - south_west)
    }

    /// Whether a world position lies on the fitted map area.
    pub fn contains_world(&self, world: Vec2) -> bool {
        let half = self.size / 2.0;
        let offset = (world - self.center).abs();
        offset.x <= half.x && offset.y <= half.y
    }
}
