use image::Rgba;

/// Piecewise-linear colour ramp over [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    stops: Vec<[u8; 3]>,
}

impl Colormap {
    /// Sequential orange-red ramp (ColorBrewer OrRd, 9 classes)
    pub fn or_rd() -> Self {
        Self {
            stops: vec![
                [255, 247, 236],
                [254, 232, 200],
                [253, 212, 158],
                [253, 187, 132],
                [252, 141, 89],
                [239, 101, 72],
                [215, 48, 31],
                [179, 0, 0],
                [127, 0, 0],
            ],
        }
    }

    /// Opaque colour at `t`, clamped to [0, 1]
    pub fn sample(&self, t: f64) -> Rgba<u8> {
        let last = self.stops.len() - 1;
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let position = t * last as f64;
        let i = (position.floor() as usize).min(last.saturating_sub(1));
        let f = position - i as f64;

        let lo = self.stops[i];
        let hi = self.stops[(i + 1).min(last)];
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
        Rgba([mix(lo[0], hi[0]), mix(lo[1], hi[1]), mix(lo[2], hi[2]), 255])
    }
}

/// Linear normalization of data values onto [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.vmin) / span).clamp(0.0, 1.0)
    }

    /// Evenly spaced whole-number ticks within the range, at most `max_ticks`
    pub fn ticks(&self, max_ticks: usize) -> Vec<f64> {
        let span = self.vmax - self.vmin;
        if !span.is_finite() || max_ticks == 0 {
            return Vec::new();
        }
        if span <= 0.0 {
            return vec![self.vmin];
        }

        let mut step = 1.0;
        for candidate in [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0] {
            step = candidate;
            if ((span / candidate).floor() as usize) < max_ticks {
                break;
            }
        }

        let first = (self.vmin / step).ceil() * step;
        let mut ticks = Vec::new();
        let mut tick = first;
        while tick <= self.vmax + 1e-9 && ticks.len() < max_ticks {
            ticks.push(tick);
            tick += step;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let cmap = Colormap::or_rd();
        assert_eq!(cmap.sample(0.0), Rgba([255, 247, 236, 255]));
        assert_eq!(cmap.sample(1.0), Rgba([127, 0, 0, 255]));
        assert_eq!(cmap.sample(7.0), cmap.sample(1.0));
        assert_eq!(cmap.sample(f64::NAN), cmap.sample(0.0));
    }

    #[test]
    fn test_ramp_darkens() {
        let cmap = Colormap::or_rd();
        let brightness = |t: f64| {
            let c = cmap.sample(t);
            c[0] as u32 + c[1] as u32 + c[2] as u32
        };
        assert!(brightness(0.2) > brightness(0.5));
        assert!(brightness(0.5) > brightness(0.9));
    }

    #[test]
    fn test_normalize() {
        let norm = Normalize::new(2.0, 10.0);
        assert_eq!(norm.apply(2.0), 0.0);
        assert_eq!(norm.apply(6.0), 0.5);
        assert_eq!(norm.apply(12.0), 1.0);
        assert_eq!(Normalize::new(5.0, 5.0).apply(5.0), 0.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(Normalize::new(1.6, 9.5).ticks(10), vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(Normalize::new(0.0, 40.0).ticks(6), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(Normalize::new(7.0, 7.0).ticks(5), vec![7.0]);
    }
}
