use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// One row of the Significant Earthquake Database
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuakeEvent {
    /// Event year; negative for BCE, absent when the source field is empty
    pub year: Option<f64>,
    /// Primary intensity/magnitude, always defined for catalogued events
    pub intensity: f64,
    /// Epicentre
    pub location: LatLng,
}

impl QuakeEvent {
    pub fn new(year: Option<f64>, intensity: f64, location: LatLng) -> Self {
        Self {
            year,
            intensity,
            location,
        }
    }

    /// Year as shown on the label, truncated toward zero
    pub fn year_label(&self) -> Option<i64> {
        self.year.filter(|y| y.is_finite()).map(|y| y.trunc() as i64)
    }
}

/// Marker area in points² for an intensity: `ln(intensity) * scale`.
///
/// Intensities at or below 1 give non-positive areas, which draw nothing.
pub fn marker_size(intensity: f64, scale: f64) -> f64 {
    intensity.ln() * scale
}

/// Events with a defined intensity, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCatalog {
    events: Vec<QuakeEvent>,
    /// Data rows read from the source, including those without intensity
    source_rows: usize,
}

impl EventCatalog {
    pub fn new(events: Vec<QuakeEvent>, source_rows: usize) -> Self {
        Self {
            events,
            source_rows,
        }
    }

    /// Builds a catalog from unfiltered events, dropping undefined intensities
    pub fn from_unfiltered(rows: Vec<QuakeEvent>) -> Self {
        let source_rows = rows.len();
        let events = rows
            .into_iter()
            .filter(|event| !event.intensity.is_nan())
            .collect();
        Self::new(events, source_rows)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[QuakeEvent] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&QuakeEvent> {
        self.events.get(index)
    }

    pub fn source_rows(&self) -> usize {
        self.source_rows
    }

    /// Rows dropped for lacking an intensity
    pub fn dropped_rows(&self) -> usize {
        self.source_rows.saturating_sub(self.events.len())
    }

    /// Marker areas for every event, see [`marker_size`]
    pub fn marker_sizes(&self, scale: f64) -> Vec<f64> {
        self.events
            .iter()
            .map(|event| marker_size(event.intensity, scale))
            .collect()
    }

    /// Smallest and largest intensity, used to normalize marker colours
    pub fn intensity_range(&self) -> Option<(f64, f64)> {
        self.events.iter().fold(None, |range, event| {
            let i = event.intensity;
            Some(match range {
                None => (i, i),
                Some((lo, hi)) => (lo.min(i), hi.max(i)),
            })
        })
    }

    pub fn locations(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.events.iter().map(|event| event.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(year: Option<f64>, intensity: f64) -> QuakeEvent {
        QuakeEvent::new(year, intensity, LatLng::new(0.0, 0.0))
    }

    #[test]
    fn test_filter_drops_undefined_intensity() {
        let catalog = EventCatalog::from_unfiltered(vec![
            event(Some(1900.0), 7.0),
            event(Some(1901.0), f64::NAN),
            event(None, 5.5),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.source_rows(), 3);
        assert_eq!(catalog.dropped_rows(), 1);
        assert_eq!(catalog.get(1).unwrap().year, None);
    }

    #[test]
    fn test_marker_size_is_monotonic() {
        let intensities = [1.5, 2.0, 4.0, 6.3, 7.1, 9.5, 12.0];
        let sizes: Vec<f64> = intensities.iter().map(|&i| marker_size(i, 5.0)).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(marker_size(1.0, 5.0), 0.0);
    }

    #[test]
    fn test_intensity_range() {
        let catalog = EventCatalog::from_unfiltered(vec![
            event(None, 6.0),
            event(None, 3.2),
            event(None, 8.8),
        ]);
        assert_eq!(catalog.intensity_range(), Some((3.2, 8.8)));
        assert_eq!(EventCatalog::default().intensity_range(), None);
    }

    #[test]
    fn test_year_label_truncates() {
        assert_eq!(event(Some(-2150.0), 7.0).year_label(), Some(-2150));
        assert_eq!(event(Some(1999.7), 7.0).year_label(), Some(1999));
        assert_eq!(event(None, 7.0).year_label(), None);
    }
}
