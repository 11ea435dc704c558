//! Trade-area circle geometry.
//!
//! The ring is a planar, latitude-corrected approximation of a circle of a
//! fixed real-world radius: degrees-per-km along a parallel shrink with
//! `cos(latitude)` while the meridian scale is treated as constant. Both
//! scales are first-order arc-length approximations, which is accurate
//! enough for radii that are small relative to Earth's curvature.

use serde::{Deserialize, Serialize};

/// Statute miles to kilometers. The exact factor matters: golden-output
/// tests reproduce ring coordinates bit-for-bit.
pub const MILES_TO_KM: f64 = 1.60934;

/// Kilometers per degree of latitude (meridian arc, first order).
pub const KM_PER_DEG_LAT: f64 = 110.574;

/// Kilometers per degree of longitude at the equator (parallel arc).
pub const KM_PER_DEG_LON_EQUATOR: f64 = 111.320;

/// Latitudes beyond this are rejected: the parallel scale collapses as
/// `cos(latitude)` approaches zero.
pub const MAX_RING_LATITUDE_DEG: f64 = 89.9;

/// Number of generated ring points when the caller has no preference.
pub const DEFAULT_RING_POINTS: usize = 64;

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting values outside the valid degree
    /// ranges.
    pub fn new(lng: f64, lat: f64) -> Result<Self, GeoError> {
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        Ok(Self { lng, lat })
    }

    /// GeoJSON position order: `[lng, lat]`.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("latitude {0} is too close to a pole for a planar ring")]
    PolarLatitude(f64),
    #[error("ring radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("ring needs at least 3 points, got {0}")]
    TooFewPoints(usize),
}

/// Produces a closed ring of `points + 1` coordinates approximating a
/// circle of `radius_miles` around `center`; the first point is repeated
/// at the end to close the polygon.
///
/// Deterministic: identical inputs yield identical rings. Centers within
/// 0.1° of a pole are rejected rather than producing non-finite
/// longitudes.
pub fn circle_ring(
    center: Coordinate,
    radius_miles: f64,
    points: usize,
) -> Result<Vec<Coordinate>, GeoError> {
    if !(radius_miles > 0.0) {
        return Err(GeoError::NonPositiveRadius(radius_miles));
    }
    if points < 3 {
        return Err(GeoError::TooFewPoints(points));
    }
    if center.lat.abs() > MAX_RING_LATITUDE_DEG {
        return Err(GeoError::PolarLatitude(center.lat));
    }

    let radius_km = radius_miles * MILES_TO_KM;
    let radius_deg_lng = radius_km / (KM_PER_DEG_LON_EQUATOR * center.lat.to_radians().cos());
    let radius_deg_lat = radius_km / KM_PER_DEG_LAT;

    let mut ring = Vec::with_capacity(points + 1);
    for i in 0..points {
        let theta = (i as f64 / points as f64) * std::f64::consts::TAU;
        ring.push(Coordinate {
            lng: center.lng + radius_deg_lng * theta.cos(),
            lat: center.lat + radius_deg_lat * theta.sin(),
        });
    }
    ring.push(ring[0]);

    tracing::trace!(
        points = ring.len(),
        radius_miles,
        "generated trade-area ring"
    );
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicago() -> Coordinate {
        Coordinate::new(-87.6233, 41.8827).unwrap()
    }

    #[test]
    fn test_ring_is_closed_with_n_plus_one_points() {
        let ring = circle_ring(chicago(), 5.0, 64).unwrap();
        assert_eq!(ring.len(), 65);
        assert_eq!(ring[0], ring[64]);
    }

    #[test]
    fn test_first_point_lies_due_east_of_center() {
        let center = chicago();
        let ring = circle_ring(center, 5.0, 64).unwrap();

        let radius_km = 5.0 * MILES_TO_KM;
        assert!((radius_km - 8.0467).abs() < 1e-12);
        let expected_lng =
            center.lng + radius_km / (KM_PER_DEG_LON_EQUATOR * center.lat.to_radians().cos());

        assert!((ring[0].lng - expected_lng).abs() < 1e-9);
        assert!((ring[0].lat - center.lat).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_point_lies_north_of_center() {
        let center = chicago();
        let ring = circle_ring(center, 5.0, 64).unwrap();
        let expected_lat = center.lat + 5.0 * MILES_TO_KM / KM_PER_DEG_LAT;

        // cos(pi/2) is not exactly zero in f64, so the longitude offset is
        // a rounding residue rather than a true zero.
        assert!((ring[16].lng - center.lng).abs() < 1e-12);
        assert!((ring[16].lat - expected_lat).abs() < 1e-12);
    }

    #[test]
    fn test_ring_is_deterministic() {
        let a = circle_ring(chicago(), 5.0, 64).unwrap();
        let b = circle_ring(chicago(), 5.0, 64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_minimum_point_count() {
        assert!(circle_ring(chicago(), 5.0, 3).is_ok());
        assert_eq!(
            circle_ring(chicago(), 5.0, 2),
            Err(GeoError::TooFewPoints(2))
        );
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        assert_eq!(
            circle_ring(chicago(), 0.0, 64),
            Err(GeoError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            circle_ring(chicago(), -5.0, 64),
            Err(GeoError::NonPositiveRadius(-5.0))
        );
    }

    #[test]
    fn test_polar_latitude_rejected_not_nan() {
        let pole = Coordinate::new(0.0, 90.0).unwrap();
        assert_eq!(
            circle_ring(pole, 5.0, 64),
            Err(GeoError::PolarLatitude(90.0))
        );

        let near_pole = Coordinate::new(0.0, 89.95).unwrap();
        assert_eq!(
            circle_ring(near_pole, 5.0, 64),
            Err(GeoError::PolarLatitude(89.95))
        );

        // The documented boundary itself is still allowed.
        let boundary = Coordinate::new(0.0, MAX_RING_LATITUDE_DEG).unwrap();
        let ring = circle_ring(boundary, 5.0, 64).unwrap();
        assert!(ring.iter().all(|c| c.lng.is_finite() && c.lat.is_finite()));
    }

    #[test]
    fn test_coordinate_validation() {
        assert_eq!(
            Coordinate::new(-181.0, 0.0),
            Err(GeoError::LongitudeOutOfRange(-181.0))
        );
        assert_eq!(
            Coordinate::new(0.0, 90.5),
            Err(GeoError::LatitudeOutOfRange(90.5))
        );
        assert!(Coordinate::new(180.0, -90.0).is_ok());
    }
}
