//! Band Schedule Tests
//!
//! Validation of structural invariants, JSON loading, and fingerprints.

use commission_engine_core_rs::{Band, BandSchedule, ScheduleError};
use std::io::Write;

/// Helper to build a three-band table with one band overridden
fn with_band(index: usize, band: Band) -> Vec<Band> {
    let mut bands = vec![
        Band::new(0.0, 1_000.0, 0.0),
        Band::new(1_000.0, 2_000.0, 0.1),
        Band::unbounded(2_000.0, 0.2),
    ];
    bands[index] = band;
    bands
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_schedule_rejected() {
    assert_eq!(BandSchedule::new(vec![]), Err(ScheduleError::Empty));
}

#[test]
fn test_first_band_must_start_at_zero() {
    let bands = with_band(0, Band::new(100.0, 1_000.0, 0.0));
    assert_eq!(
        BandSchedule::new(bands),
        Err(ScheduleError::NonZeroStart { lower: 100.0 })
    );
}

#[test]
fn test_inverted_band_rejected() {
    let bands = with_band(1, Band::new(1_000.0, 1_000.0, 0.1));
    assert_eq!(
        BandSchedule::new(bands),
        Err(ScheduleError::InvertedBand {
            index: 1,
            lower: 1_000.0,
            upper: 1_000.0,
        })
    );
}

#[test]
fn test_gap_between_bands_rejected() {
    let bands = with_band(1, Band::new(1_500.0, 2_000.0, 0.1));
    assert_eq!(
        BandSchedule::new(bands),
        Err(ScheduleError::Gap {
            index: 1,
            expected: 1_000.0,
            found: 1_500.0,
        })
    );
}

#[test]
fn test_overlapping_bands_rejected() {
    let bands = with_band(1, Band::new(900.0, 2_000.0, 0.1));
    assert!(matches!(
        BandSchedule::new(bands),
        Err(ScheduleError::Gap { index: 1, .. })
    ));
}

#[test]
fn test_unbounded_band_must_be_last() {
    let bands = with_band(1, Band::unbounded(1_000.0, 0.1));
    assert_eq!(
        BandSchedule::new(bands),
        Err(ScheduleError::UnboundedNotLast { index: 1 })
    );
}

#[test]
fn test_last_band_must_be_unbounded() {
    let bands = with_band(2, Band::new(2_000.0, 3_000.0, 0.2));
    assert_eq!(BandSchedule::new(bands), Err(ScheduleError::MissingUnbounded));
}

#[test]
fn test_rate_out_of_range_rejected() {
    let bands = with_band(2, Band::unbounded(2_000.0, 1.5));
    assert_eq!(
        BandSchedule::new(bands),
        Err(ScheduleError::InvalidRate { index: 2, rate: 1.5 })
    );

    let bands = with_band(0, Band::new(0.0, 1_000.0, -0.1));
    assert!(matches!(
        BandSchedule::new(bands),
        Err(ScheduleError::InvalidRate { index: 0, .. })
    ));
}

#[test]
fn test_non_finite_bound_rejected() {
    let bands = with_band(1, Band::new(1_000.0, f64::INFINITY, 0.1));
    assert_eq!(
        BandSchedule::new(bands),
        Err(ScheduleError::NonFiniteBound { index: 1 })
    );
}

#[test]
fn test_decreasing_rates_are_allowed() {
    // Rate ordering is a convention, not a structural rule
    let bands = vec![Band::new(0.0, 1_000.0, 0.3), Band::unbounded(1_000.0, 0.1)];
    assert!(BandSchedule::new(bands).is_ok());
}

// ============================================================================
// JSON Loading
// ============================================================================

const WRAPPED_JSON: &str = r#"{
    "bands": [
        { "lower_bound": 0, "upper_bound": 1000, "rate": 0.0 },
        { "lower_bound": 1000, "upper_bound": null, "rate": 0.2 }
    ]
}"#;

#[test]
fn test_load_wrapped_json() {
    let schedule = BandSchedule::from_json_str(WRAPPED_JSON).unwrap();

    assert_eq!(schedule.len(), 2);
    assert!(schedule.bands()[1].is_unbounded());

    let result = schedule.allocate(1_500.0).unwrap();
    assert!((result.total_commission - 100.0).abs() < 1e-9);
}

#[test]
fn test_load_bare_array_json() {
    let json = r#"[
        { "lower_bound": 0, "upper_bound": 5000, "rate": 0.0 },
        { "lower_bound": 5000, "rate": 0.1 }
    ]"#;

    let schedule = BandSchedule::from_json_str(json).unwrap();
    assert_eq!(schedule.len(), 2);
}

#[test]
fn test_load_rejects_malformed_json() {
    let err = BandSchedule::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ScheduleError::Parse(_)));
}

#[test]
fn test_load_validates_bands() {
    let json = r#"[{ "lower_bound": 0, "upper_bound": 5000, "rate": 0.0 }]"#;
    assert_eq!(
        BandSchedule::from_json_str(json),
        Err(ScheduleError::MissingUnbounded)
    );
}

#[test]
fn test_deserialize_schedule_directly_validates() {
    let json = r#"[{ "lower_bound": 10, "rate": 0.1 }]"#;
    let result: Result<BandSchedule, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_reference_schedule_serde_round_trip() {
    let reference = BandSchedule::reference();
    let json = serde_json::to_string(&reference).unwrap();
    let parsed = BandSchedule::from_json_str(&json).unwrap();
    assert_eq!(parsed, reference);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "commission-bands-{}.json",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(WRAPPED_JSON.as_bytes()).unwrap();
    drop(file);

    let schedule = BandSchedule::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(schedule.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = BandSchedule::from_json_file("/nonexistent/bands.json").unwrap_err();
    assert!(matches!(err, ScheduleError::Io(_)));
}

// ============================================================================
// Fingerprints
// ============================================================================

#[test]
fn test_fingerprint_is_deterministic() {
    let a = BandSchedule::reference().fingerprint().unwrap();
    let b = BandSchedule::reference().fingerprint().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fingerprint_distinguishes_schedules() {
    let reference = BandSchedule::reference().fingerprint().unwrap();
    let custom = BandSchedule::from_json_str(WRAPPED_JSON)
        .unwrap()
        .fingerprint()
        .unwrap();
    assert_ne!(reference, custom);
}

#[test]
fn test_fingerprint_changes_with_a_single_rate() {
    let mut bands = BandSchedule::reference().bands().to_vec();
    bands[2].rate = 0.16;
    let adjusted = BandSchedule::new(bands).unwrap();

    assert_ne!(
        BandSchedule::reference().fingerprint().unwrap(),
        adjusted.fingerprint().unwrap()
    );
}

#[test]
fn test_fingerprint_matches_across_file_layouts() {
    let bare = r#"[
        { "lower_bound": 0, "upper_bound": 1000, "rate": 0.0 },
        { "lower_bound": 1000, "rate": 0.2 }
    ]"#;

    let a = BandSchedule::from_json_str(WRAPPED_JSON).unwrap();
    let b = BandSchedule::from_json_str(bare).unwrap();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}
