use crate::core::geo::LatLng;
use crate::spatial::coastline::{Coastline, COASTLINES};

/// Equirectangular land/ocean raster built from coastline rings
///
/// Row 0 is the northernmost band. A cell is land when its centre falls
/// inside any ring (even-odd rule per ring).
#[derive(Debug, Clone)]
pub struct LandMask {
    cells_per_degree: f64,
    cols: usize,
    rows: usize,
    land: Vec<bool>,
}

impl LandMask {
    /// Rasterizes the built-in coastlines
    pub fn new(cells_per_degree: f64) -> Self {
        Self::from_coastlines(COASTLINES, cells_per_degree)
    }

    pub fn from_coastlines(coastlines: &[Coastline], cells_per_degree: f64) -> Self {
        let cols = ((360.0 * cells_per_degree).round() as usize).max(1);
        let rows = ((180.0 * cells_per_degree).round() as usize).max(1);
        let cell_deg = 180.0 / rows as f64;
        let mut land = vec![false; cols * rows];

        let mut crossings = Vec::new();
        for row in 0..rows {
            let lat = 90.0 - (row as f64 + 0.5) * cell_deg;
            for coastline in coastlines {
                scanline_crossings(coastline.ring, lat, &mut crossings);
                for span in crossings.chunks_exact(2) {
                    let first = ((span[0] + 180.0) / 360.0 * cols as f64 - 0.5).ceil().max(0.0);
                    let last = ((span[1] + 180.0) / 360.0 * cols as f64 - 0.5).floor();
                    if last < first {
                        continue;
                    }
                    let last = (last as usize).min(cols - 1);
                    for col in first as usize..=last {
                        land[row * cols + col] = true;
                    }
                }
            }
        }

        log::debug!(
            "Built {}x{} land mask, {} land cells",
            cols,
            rows,
            land.iter().filter(|&&cell| cell).count()
        );

        Self {
            cells_per_degree,
            cols,
            rows,
            land,
        }
    }

    pub fn is_land(&self, location: &LatLng) -> bool {
        if !location.is_finite() {
            return false;
        }
        let lng = LatLng::wrap_lng(location.lng);
        let col = ((lng + 180.0) / 360.0 * self.cols as f64).floor() as isize;
        let row = ((90.0 - location.lat) / 180.0 * self.rows as f64).floor() as isize;
        let col = col.clamp(0, self.cols as isize - 1) as usize;
        let row = row.clamp(0, self.rows as isize - 1) as usize;
        self.land[row * self.cols + col]
    }

    pub fn cells_per_degree(&self) -> f64 {
        self.cells_per_degree
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }
}

/// Sorted longitudes where a ring crosses the given latitude
fn scanline_crossings(ring: &[(f64, f64)], lat: f64, out: &mut Vec<f64>) {
    out.clear();
    for edge in ring.windows(2) {
        let (lat1, lng1) = edge[0];
        let (lat2, lng2) = edge[1];
        if (lat1 > lat) != (lat2 > lat) {
            out.push(lng1 + (lat - lat1) * (lng2 - lng1) / (lat2 - lat1));
        }
    }
    out.sort_by(|a, b| a.total_cmp(b));
}
