//! Point-in-polygon tests for watch zones.
//!
//! Zones are stored as flat latitude/longitude vertex lists. The test is a
//! plain even-odd ray cast in coordinate space, treating latitude as the x
//! axis and longitude as the y axis. At dashboard scale that is accurate
//! enough; zones spanning the antimeridian are out of scope.

use alerthub_entity::geo::Coordinates;
use alerthub_entity::zone::AlertZone;

/// Returns whether `point` lies inside the polygon.
///
/// Fewer than three vertices cannot enclose anything and always return
/// `false`. A point exactly on an edge may land on either side; callers
/// must not rely on boundary behavior.
pub fn point_in_polygon(point: Coordinates, polygon: &[Coordinates]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let x = point.lat;
    let y = point.lng;

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].lat, polygon[i].lng);
        let (xj, yj) = (polygon[j].lat, polygon[j].lng);

        let crosses =
            ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi);
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Finds the first zone containing `point`, in the order zones are stored.
pub fn match_zone(point: Coordinates, zones: &[AlertZone]) -> Option<&AlertZone> {
    zones
        .iter()
        .find(|zone| point_in_polygon(point, &zone.coordinates))
}
