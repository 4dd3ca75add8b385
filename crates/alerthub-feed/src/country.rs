//! Coordinate-to-country resolution for the covered region.

/// A monitored country and its geographic center.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub name: &'static str,
    pub center_lat: f64,
    pub center_lng: f64,
}

/// The Southeast-Asian countries the dashboard covers.
pub const SEA_COUNTRIES: &[Country] = &[
    Country { name: "Indonesia", center_lat: -0.7893, center_lng: 113.9213 },
    Country { name: "Philippines", center_lat: 12.8797, center_lng: 121.7740 },
    Country { name: "Vietnam", center_lat: 14.0583, center_lng: 108.2772 },
    Country { name: "Thailand", center_lat: 15.8700, center_lng: 100.9925 },
    Country { name: "Myanmar", center_lat: 21.9162, center_lng: 95.9560 },
    Country { name: "Malaysia", center_lat: 4.2105, center_lng: 101.9758 },
    Country { name: "Cambodia", center_lat: 12.5657, center_lng: 104.9910 },
    Country { name: "Laos", center_lat: 19.8563, center_lng: 102.4955 },
    Country { name: "Singapore", center_lat: 1.3521, center_lng: 103.8198 },
    Country { name: "Brunei", center_lat: 4.5353, center_lng: 114.7277 },
    Country { name: "Timor-Leste", center_lat: -8.8742, center_lng: 125.7275 },
];

/// Degrees of separation within which a point is attributed to the
/// nearest country center. Roughly 1300 km at the equator.
const ATTRIBUTION_RADIUS_DEGREES: f64 = 12.0;

/// Names the country nearest to a coordinate.
///
/// Plain Euclidean distance in degree space against each country's
/// center; good enough at dashboard scale. Points farther than
/// [`ATTRIBUTION_RADIUS_DEGREES`] from every center resolve to `Region`.
pub fn resolve_country(lat: f64, lng: f64) -> String {
    let mut closest = "Region";
    let mut min_distance = f64::INFINITY;

    for country in SEA_COUNTRIES {
        let distance =
            ((lat - country.center_lat).powi(2) + (lng - country.center_lng).powi(2)).sqrt();
        if distance < min_distance {
            min_distance = distance;
            closest = country.name;
        }
    }

    if min_distance < ATTRIBUTION_RADIUS_DEGREES {
        closest.to_string()
    } else {
        "Region".to_string()
    }
}
