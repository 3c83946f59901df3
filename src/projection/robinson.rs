use super::Projection;
use crate::core::geo::{LatLng, Point};
use std::f64::consts::PI;

/// Parallel length relative to the equator, every 5° of latitude
const PARALLEL_LENGTH: [f64; 19] = [
    1.0000, 0.9986, 0.9954, 0.9900, 0.9822, 0.9730, 0.9600, 0.9427, 0.9216, 0.8962, 0.8679,
    0.8350, 0.7986, 0.7597, 0.7186, 0.6732, 0.6213, 0.5722, 0.5322,
];

/// Distance of the parallel from the equator, every 5° of latitude
const PARALLEL_DISTANCE: [f64; 19] = [
    0.0000, 0.0620, 0.1240, 0.1860, 0.2480, 0.3100, 0.3720, 0.4340, 0.4958, 0.5571, 0.6176,
    0.6769, 0.7346, 0.7903, 0.8435, 0.8936, 0.9394, 0.9761, 1.0000,
];

const TABLE_STEP_DEG: f64 = 5.0;
const X_SCALE: f64 = 0.8487;
const Y_SCALE: f64 = 1.3523;

/// Robinson pseudo-cylindrical world projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Robinson {
    /// Central meridian in degrees
    pub central_meridian: f64,
}

impl Robinson {
    pub fn new(central_meridian: f64) -> Self {
        Self { central_meridian }
    }

    /// Linear interpolation in a 5° table for |latitude| in degrees
    fn lookup(table: &[f64; 19], abs_lat: f64) -> f64 {
        let t = (abs_lat / TABLE_STEP_DEG).clamp(0.0, 18.0);
        let i = (t.floor() as usize).min(17);
        let f = t - i as f64;
        table[i] + (table[i + 1] - table[i]) * f
    }

    /// Inverse of the distance table: |latitude| for a normalized y in [0, 1]
    fn latitude_for(distance: f64) -> f64 {
        let i = PARALLEL_DISTANCE
            .windows(2)
            .position(|w| distance <= w[1])
            .unwrap_or(17);
        let (lo, hi) = (PARALLEL_DISTANCE[i], PARALLEL_DISTANCE[i + 1]);
        (i as f64 + (distance - lo) / (hi - lo)) * TABLE_STEP_DEG
    }
}

impl Default for Robinson {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Projection for Robinson {
    fn project(&self, location: &LatLng) -> Option<Point> {
        if !location.is_finite() || location.lat.abs() > 90.0 {
            return None;
        }

        let abs_lat = location.lat.abs();
        let delta_lng = LatLng::wrap_lng(location.lng - self.central_meridian).to_radians();
        let x = X_SCALE * Self::lookup(&PARALLEL_LENGTH, abs_lat) * delta_lng;
        let y = Y_SCALE * Self::lookup(&PARALLEL_DISTANCE, abs_lat) * location.lat.signum();
        Some(Point::new(x, y))
    }

    fn unproject(&self, point: &Point) -> Option<LatLng> {
        let distance = point.y.abs() / Y_SCALE;
        if distance > 1.0 {
            return None;
        }

        let abs_lat = Self::latitude_for(distance);
        let delta_lng = point.x / (X_SCALE * Self::lookup(&PARALLEL_LENGTH, abs_lat));
        if delta_lng.abs() > PI {
            return None;
        }

        let lat = abs_lat.copysign(point.y);
        let lng = LatLng::wrap_lng(self.central_meridian + delta_lng.to_degrees());
        Some(LatLng::new(lat, lng))
    }

    fn half_extent(&self) -> Point {
        Point::new(X_SCALE * PI, Y_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_and_poles() {
        let robin = Robinson::default();
        assert_eq!(robin.project(&LatLng::new(0.0, 0.0)), Some(Point::new(0.0, 0.0)));

        let north = robin.project(&LatLng::new(90.0, 0.0)).unwrap();
        assert!((north.y - Y_SCALE).abs() < 1e-12);
        let south = robin.project(&LatLng::new(-90.0, 45.0)).unwrap();
        assert!((south.y + Y_SCALE).abs() < 1e-12);
    }

    #[test]
    fn test_equator_spans_extent() {
        let robin = Robinson::default();
        let east = robin.project(&LatLng::new(0.0, 180.0)).unwrap();
        assert!((east.x - robin.half_extent().x).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let robin = Robinson::new(0.0);
        for &(lat, lng) in &[(38.3, 142.4), (-33.5, -71.6), (61.0, -147.7), (2.3, 93.0)] {
            let p = robin.project(&LatLng::new(lat, lng)).unwrap();
            let back = robin.unproject(&p).unwrap();
            assert!((back.lat - lat).abs() < 1e-9, "lat {} vs {}", back.lat, lat);
            assert!((back.lng - lng).abs() < 1e-9, "lng {} vs {}", back.lng, lng);
        }
    }

    #[test]
    fn test_outside_map() {
        let robin = Robinson::default();
        assert!(robin.unproject(&Point::new(0.0, 1.5)).is_none());
        // Near the pole the parallels are shorter than the equator
        assert!(robin.unproject(&Point::new(2.6, 1.3)).is_none());
        assert!(robin.project(&LatLng::new(f64::NAN, 0.0)).is_none());
    }

    #[test]
    fn test_central_meridian_shifts_longitude() {
        let robin = Robinson::new(150.0);
        let p = robin.project(&LatLng::new(0.0, -170.0)).unwrap();
        // -170 is 40° east of 150 across the antimeridian
        assert!(p.x > 0.0);
    }
}
