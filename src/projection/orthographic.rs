use super::Projection;
use crate::core::geo::{LatLng, Point};

/// Orthographic view of the globe from infinitely far away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    pub center: LatLng,
}

impl Orthographic {
    pub fn new(center: LatLng) -> Self {
        Self { center }
    }

    /// Globe centred on the equator at the given longitude
    pub fn equatorial(lng: f64) -> Self {
        Self::new(LatLng::new(0.0, lng))
    }
}

impl Projection for Orthographic {
    fn project(&self, location: &LatLng) -> Option<Point> {
        if !location.is_finite() {
            return None;
        }

        let (lat0, lng0) = self.center.to_radians();
        let (lat, lng) = location.to_radians();
        let delta = lng - lng0;

        // Cosine of the angular distance from the view centre
        let cos_c = lat0.sin() * lat.sin() + lat0.cos() * lat.cos() * delta.cos();
        if cos_c < 0.0 {
            return None;
        }

        let x = lat.cos() * delta.sin();
        let y = lat0.cos() * lat.sin() - lat0.sin() * lat.cos() * delta.cos();
        Some(Point::new(x, y))
    }

    fn unproject(&self, point: &Point) -> Option<LatLng> {
        let rho = point.length();
        if rho > 1.0 {
            return None;
        }
        if rho == 0.0 {
            return Some(LatLng::new(self.center.lat, LatLng::wrap_lng(self.center.lng)));
        }

        let (lat0, lng0) = self.center.to_radians();
        let c = rho.asin();
        let (sin_c, cos_c) = c.sin_cos();

        let lat = (cos_c * lat0.sin() + point.y * sin_c * lat0.cos() / rho).asin();
        let lng = lng0
            + (point.x * sin_c).atan2(rho * cos_c * lat0.cos() - point.y * sin_c * lat0.sin());

        Some(LatLng::new(
            lat.to_degrees(),
            LatLng::wrap_lng(lng.to_degrees()),
        ))
    }

    fn half_extent(&self) -> Point {
        Point::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_projects_to_origin() {
        let globe = Orthographic::equatorial(40.0);
        let p = globe.project(&LatLng::new(0.0, 40.0)).unwrap();
        assert!(p.length() < 1e-12);
    }

    #[test]
    fn test_far_side_is_hidden() {
        let globe = Orthographic::equatorial(0.0);
        assert!(globe.project(&LatLng::new(0.0, 179.0)).is_none());
        assert!(globe.project(&LatLng::new(10.0, 60.0)).is_some());
    }

    #[test]
    fn test_rotation_moves_points_west() {
        let event = LatLng::new(35.0, 139.0);
        let a = Orthographic::equatorial(120.0).project(&event).unwrap();
        let b = Orthographic::equatorial(130.0).project(&event).unwrap();
        assert!(b.x < a.x);
    }

    #[test]
    fn test_round_trip() {
        let globe = Orthographic::new(LatLng::new(20.0, -100.0));
        for &(lat, lng) in &[(19.4, -99.1), (45.0, -120.0), (-10.0, -80.0)] {
            let p = globe.project(&LatLng::new(lat, lng)).unwrap();
            let back = globe.unproject(&p).unwrap();
            assert!((back.lat - lat).abs() < 1e-9);
            assert!((back.lng - lng).abs() < 1e-9);
        }
        assert!(globe.unproject(&Point::new(0.8, 0.8)).is_none());
    }

    #[test]
    fn test_multi_turn_center_longitude() {
        // A centre of 720° is the same view as 0°
        let a = Orthographic::equatorial(720.0).project(&LatLng::new(5.0, 30.0)).unwrap();
        let b = Orthographic::equatorial(0.0).project(&LatLng::new(5.0, 30.0)).unwrap();
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}
