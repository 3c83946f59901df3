//! Core constants: the Significant Earthquake Database column layout and the
//! figure geometry every frame is drawn with.

/// Dataset file read when no input is given.
pub const DEFAULT_INPUT: &str = "signif.txt";

/// Video written when no output is given.
pub const DEFAULT_OUTPUT: &str = "Quakes.mp4";

/// Column holding the event year (may be empty).
pub const YEAR_COLUMN: usize = 2;

/// Column holding the primary intensity/magnitude (may be empty).
pub const INTENSITY_COLUMN: usize = 9;

/// Column holding the epicentre latitude.
pub const LATITUDE_COLUMN: usize = 20;

/// Column holding the epicentre longitude.
pub const LONGITUDE_COLUMN: usize = 21;

/// Target playback length of the whole animation, in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 30.0;

/// Frame rate the schedule aims for before rounding.
pub const DEFAULT_TARGET_FPS: f64 = 20.0;

/// Output resolution in dots per inch.
pub const DEFAULT_DPI: f64 = 120.0;

/// Figure size in inches (width, height).
pub const FIGURE_SIZE_INCHES: (f64, f64) = (16.0, 9.0);

/// Video codec handed to the encoder.
pub const DEFAULT_CODEC: &str = "h264";

/// Marker area (points²) is `ln(intensity) * MARKER_SCALE`.
pub const MARKER_SCALE: f64 = 5.0;

/// Main map markers are drawn this many times larger (in area) than on the globe.
pub const MAIN_MARKER_FACTOR: f64 = 2.0;

/// Marker opacity.
pub const MARKER_ALPHA: f32 = 0.5;

/// Globe centre longitude at frame zero, in degrees.
pub const GLOBE_START_LONGITUDE: f64 = 720.0;

/// Full globe revolutions over the animation.
pub const GLOBE_TURNS: f64 = 3.0;

/// Typographic points per inch; marker areas are given in points².
pub const POINTS_PER_INCH: f64 = 72.0;

/// Main axes placement as figure fractions (left, bottom, right, top).
pub const SUBPLOT_MARGINS: (f64, f64, f64, f64) = (0.125, 0.11, 0.9, 0.88);

/// Colorbar axes as figure fractions (left, bottom, width, height).
pub const COLORBAR_RECT: (f64, f64, f64, f64) = (0.9, 0.1, 0.03, 0.8);

/// Inset width as a fraction of the main axes width.
pub const INSET_WIDTH_FRACTION: f64 = 0.3;

/// Inset height in inches.
pub const INSET_HEIGHT_INCHES: f64 = 3.0;

/// Year label anchor in main axes fractions (from the lower-left corner).
pub const YEAR_LABEL_ANCHOR: (f64, f64) = (0.45, 0.01);

/// Column width the citation title is wrapped to.
pub const TITLE_WRAP: usize = 70;

/// Dataset citation shown as the figure title.
pub const CITATION: &str = "National Geophysical Data Center / World Data Service (NGDC/WDS): \
Significant Earthquake Database. National Geophysical Data Center, NOAA. doi:10.7289/V5TD9V7K";
