// targets.rs
use crate::geo::GeoRect;

/// One quiz question: a named place and the rectangle that counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub name: &'static str,
    pub bounds: GeoRect,
}

/// Geographic rectangle the campus map image is pinned to.
pub const OVERLAY_BOUNDS: GeoRect = GeoRect::new(34.2489, 34.2356, -118.5202, -118.5410);

pub const CAMPUS_TARGETS: [Target; 5] = [
    Target {
        name: "Bookstore",
        bounds: GeoRect::new(34.24095, 34.24005, -118.52655, -118.52755),
    },
    Target {
        name: "Bayramian Hall",
        bounds: GeoRect::new(34.24155, 34.24080, -118.53000, -118.53125),
    },
    Target {
        name: "Jacaranda Hall",
        bounds: GeoRect::new(34.24120, 34.24035, -118.52905, -118.53020),
    },
    Target {
        name: "Manzanita Hall",
        bounds: GeoRect::new(34.23780, 34.23685, -118.52870, -118.53010),
    },
    Target {
        name: "Donald Bianchi Planetarium (E3)",
        bounds: GeoRect::new(34.23955, 34.23860, -118.52770, -118.52920),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_rects_are_well_formed_and_on_the_map() {
        for target in CAMPUS_TARGETS.iter() {
            let b = target.bounds;
            assert!(b.north > b.south, "{} has inverted latitude", target.name);
            assert!(b.east > b.west, "{} has inverted longitude", target.name);
            assert!(OVERLAY_BOUNDS.contains(b.center()), "{} is off the map", target.name);
        }
    }
}
