use quakemap::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// End-to-end tests: synthetic dataset on disk through to encoded frames
#[cfg(test)]
mod integration_tests {
    use super::*;

    const COLUMNS: usize = 47;

    /// One tab-separated row with the four read columns filled in
    fn row(year: &str, intensity: &str, lat: &str, lng: &str) -> String {
        let mut fields = vec![String::new(); COLUMNS];
        fields[0] = "1".to_string();
        fields[2] = year.to_string();
        fields[9] = intensity.to_string();
        fields[20] = lat.to_string();
        fields[21] = lng.to_string();
        fields.join("\t")
    }

    fn dataset(rows: &[String]) -> NamedTempFile {
        let header: Vec<String> = (0..COLUMNS).map(|i| format!("COL_{}", i)).collect();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", header.join("\t")).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    fn small_config() -> AnimationConfig {
        let mut config = AnimationConfig::default().with_profile(RenderProfile::Draft);
        config.dpi = 24.0;
        config
    }

    #[test]
    fn test_filtered_count_matches_defined_intensities() {
        let file = dataset(&[
            row("1906", "7.9", "37.75", "-122.55"),
            row("1923", "", "35.1", "139.5"),
            row("", "6.8", "39.0", "140.0"),
            row("2011", "9.1", "38.3", "142.4"),
        ]);

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.source_rows(), 4);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.events()[1].year, None);
        assert_eq!(catalog.events()[2].location, LatLng::new(38.3, 142.4));
    }

    #[test]
    fn test_three_rows_render_predicted_frames() {
        let file = dataset(&[
            row("-2150", "7.3", "35.5", "35.8"),
            row("1755", "8.7", "36.0", "-11.0"),
            row("2004", "9.1", "3.3", "95.9"),
        ]);
        let config = small_config();

        let catalog = load_catalog(file.path()).unwrap();
        let schedule = plan(catalog.len(), &config).unwrap();
        assert_eq!(schedule.frames, 3);

        let mut sink = MemorySink::new();
        let summary = render_catalog(catalog, schedule, &config, &mut sink).unwrap();

        assert_eq!(summary.frames, schedule.frames);
        assert_eq!(sink.frame_count(), schedule.frames);
        assert_eq!(summary.final_revealed, 3);
        assert!((summary.fps * config.duration_secs - summary.frames as f64).abs() < 1e-9);
        assert!(sink
            .frames()
            .iter()
            .all(|frame| frame.dimensions() == config.figure_pixels()));
        // The globe turns between frames
        assert_ne!(sink.frames()[0], sink.frames()[1]);
    }

    #[test]
    fn test_run_writes_png_sequence() {
        let file = dataset(&[
            row("1960", "9.5", "-38.2", "-73.0"),
            row("1964", "9.2", "61.0", "-147.7"),
        ]);
        let out = tempfile::tempdir().unwrap();

        let mut config = small_config();
        config.input = file.path().to_path_buf();
        config.output = out.path().join("frames");
        config.duration_secs = 2.0;

        let summary = run(&config).unwrap();
        assert_eq!(summary.frames, 2);
        assert!(config.output.join("frame_000000.png").is_file());
        assert!(config.output.join("frame_000001.png").is_file());
        assert!(!config.output.join("frame_000002.png").exists());
    }

    #[test]
    fn test_dataset_without_intensities_fails() {
        let file = dataset(&[row("1900", "", "0.0", "0.0")]);
        let mut config = small_config();
        config.input = file.path().to_path_buf();
        let err = run(&config).unwrap_err();
        assert!(matches!(err, quakemap::QuakeError::InvalidSchedule(_)));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let mut config = small_config();
        config.input = "does/not/exist/signif.txt".into();
        assert!(matches!(run(&config), Err(quakemap::QuakeError::Io(_))));
    }

    #[test]
    fn test_marker_size_increases_with_intensity() {
        let sizes: Vec<f64> = [1.5, 3.0, 5.5, 7.0, 9.5]
            .iter()
            .map(|&i| marker_size(i, 5.0))
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }
}
