//! Integration tests for the interference engine.
//!
//! Coverage:
//! - Two-beam intensity bound, periodicity, and symmetry about extrema
//! - Constructive / destructive extrema at Δ = 0, λ/2, λ
//! - Single-beam limit (no interference)
//! - Field / grid positional correspondence and permutation equivariance
//! - Response-curve count, spacing, and the degenerate collapsed sweep
//! - Eager parameter validation

use approx::assert_relative_eq;

use michelson_core::engine::{
    intensity, intensity_field, intensity_xy, phase_difference, response_curve, round_trip,
    EngineError,
};
use michelson_core::types::{DetectorGrid, DisplacementSweep, OpticalParams};

// ─────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────

/// Parameters with a fixed round-trip displacement and no tilt.
fn params_at(displacement_nm: f64) -> OpticalParams {
    OpticalParams {
        wavelength_nm: 500.0,
        amplitude_1: 1.0,
        amplitude_2: 1.0,
        base_displacement_nm: displacement_nm,
        path_gradient: [0.0, 0.0],
    }
}

// ─────────────────────────────────────────────────────────────
// Phase
// ─────────────────────────────────────────────────────────────

#[test]
fn phase_is_two_pi_per_wavelength_of_path() {
    let phi = phase_difference(500.0, 500.0).unwrap();
    assert_relative_eq!(phi, 2.0 * std::f64::consts::PI, epsilon = 1e-12);

    let half = phase_difference(250.0, 500.0).unwrap();
    assert_relative_eq!(half, std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn phase_is_odd_in_displacement() {
    for &delta in &[0.0, 13.7, 250.0, 1234.5] {
        let forward = phase_difference(delta, 632.8).unwrap();
        let backward = phase_difference(-delta, 632.8).unwrap();
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }
}

#[test]
fn mechanical_shift_doubles_into_path_difference() {
    assert_eq!(round_trip(250.0), 500.0);
    assert_eq!(round_trip(-100.0), -200.0);
}

// ─────────────────────────────────────────────────────────────
// Two-beam intensity law
// ─────────────────────────────────────────────────────────────

#[test]
fn intensity_stays_within_interference_bounds() {
    let cases = [(1.0, 1.0), (1.0, 0.5), (0.3, 2.0), (0.0, 1.5)];
    for (a1, a2) in cases {
        let lo = (a1 - a2) * (a1 - a2);
        let hi = (a1 + a2) * (a1 + a2);
        for i in 0..200 {
            let params = OpticalParams {
                amplitude_1: a1,
                amplitude_2: a2,
                base_displacement_nm: i as f64 * 7.3 - 700.0,
                ..params_at(0.0)
            };
            let value = intensity(0.0, &params).unwrap();
            assert!(
                value >= lo - 1e-12 && value <= hi + 1e-12,
                "I = {value} outside [{lo}, {hi}] for A1={a1}, A2={a2}"
            );
        }
    }
}

#[test]
fn intensity_is_periodic_in_the_wavelength() {
    for i in 0..50 {
        let delta = i as f64 * 37.1 - 900.0;
        let base = intensity(0.0, &params_at(delta)).unwrap();
        let shifted = intensity(0.0, &params_at(delta + 500.0)).unwrap();
        assert_relative_eq!(base, shifted, epsilon = 1e-9);
    }
}

#[test]
fn intensity_is_even_about_extrema() {
    // Constructive extremum at Δ = 0, destructive at Δ = λ/2: the fringe is
    // symmetric about both.
    for &extremum in &[0.0, 250.0] {
        for i in 1..40 {
            let offset = i as f64 * 5.0;
            let ahead = intensity(0.0, &params_at(extremum + offset)).unwrap();
            let behind = intensity(0.0, &params_at(extremum - offset)).unwrap();
            assert_relative_eq!(ahead, behind, epsilon = 1e-9);
        }
    }
}

#[test]
fn worked_example_hene_style_500nm() {
    // λ = 500 nm, A1 = A2 = 1: bright at Δ = 0, dark at λ/2, bright again at λ.
    assert_relative_eq!(intensity(0.0, &params_at(0.0)).unwrap(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(
        intensity(0.0, &params_at(250.0)).unwrap(),
        0.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        intensity(0.0, &params_at(500.0)).unwrap(),
        4.0,
        epsilon = 1e-9
    );
}

#[test]
fn unbalanced_extrema_follow_amplitude_sums() {
    let params = OpticalParams {
        amplitude_1: 1.0,
        amplitude_2: 0.5,
        ..params_at(0.0)
    };
    assert_relative_eq!(intensity(0.0, &params).unwrap(), 2.25, epsilon = 1e-12);

    let dark = OpticalParams {
        base_displacement_nm: 250.0,
        ..params
    };
    assert_relative_eq!(intensity(0.0, &dark).unwrap(), 0.25, epsilon = 1e-12);
}

#[test]
fn single_beam_sees_no_interference() {
    // A2 = 0: intensity is A1² everywhere, independent of displacement,
    // position, and wavelength.
    for &delta in &[0.0, 125.0, 250.0, 1999.0] {
        for &x in &[-500.0, 0.0, 333.3] {
            let params = OpticalParams {
                amplitude_2: 0.0,
                base_displacement_nm: delta,
                path_gradient: [0.1, 0.0],
                ..params_at(0.0)
            };
            assert_relative_eq!(intensity(x, &params).unwrap(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn tilt_ramp_moves_fringes_across_the_detector() {
    // With g_x = 1 the detector coordinate adds directly to the path, so the
    // pattern along x reproduces the pattern along displacement.
    let params = OpticalParams {
        path_gradient: [1.0, 0.0],
        ..params_at(0.0)
    };
    assert_relative_eq!(intensity(0.0, &params).unwrap(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(intensity(250.0, &params).unwrap(), 0.0, epsilon = 1e-12);

    let planar = intensity_xy([250.0, 0.0], &params).unwrap();
    assert_relative_eq!(planar, 0.0, epsilon = 1e-12);
}

// ─────────────────────────────────────────────────────────────
// Intensity field
// ─────────────────────────────────────────────────────────────

#[test]
fn field_length_matches_grid_length() {
    let params = params_at(0.0);
    for points in [1, 2, 17, 2000] {
        let grid = DetectorGrid::line(-750.0, 750.0, points);
        let field = intensity_field(&grid, 100.0, &params).unwrap();
        assert_eq!(field.len(), points);
    }

    let plane = DetectorGrid::plane(500.0, 500.0, 8, 5);
    let field = intensity_field(&plane, 0.0, &params).unwrap();
    assert_eq!(field.len(), 40);
}

#[test]
fn field_entries_are_elementwise_independent() {
    // Permuting the grid permutes the output identically, including
    // duplicate coordinates.
    let params = OpticalParams {
        path_gradient: [0.4, 0.0],
        ..params_at(60.0)
    };
    let positions = vec![-300.0, 150.0, 0.0, 150.0, 42.0];

    let grid = DetectorGrid::Line {
        positions: positions.clone(),
    };
    let field = intensity_field(&grid, 60.0, &params).unwrap();

    let mut reversed = positions.clone();
    reversed.reverse();
    let grid_rev = DetectorGrid::Line {
        positions: reversed,
    };
    let field_rev = intensity_field(&grid_rev, 60.0, &params).unwrap();

    for i in 0..positions.len() {
        assert_relative_eq!(
            field.values[i],
            field_rev.values[positions.len() - 1 - i],
            epsilon = 1e-12
        );
    }
    // Duplicate coordinates get identical, separate entries.
    assert_relative_eq!(field.values[1], field.values[3], epsilon = 1e-15);
}

#[test]
fn field_displacement_overrides_base() {
    // The field operation evaluates at its own displacement argument.
    let params = params_at(125.0);
    let grid = DetectorGrid::line(0.0, 0.0, 1);

    let dark = intensity_field(&grid, 250.0, &params).unwrap();
    assert_relative_eq!(dark.values[0], 0.0, epsilon = 1e-12);

    let bright = intensity_field(&grid, 500.0, &params).unwrap();
    assert_relative_eq!(bright.values[0], 4.0, epsilon = 1e-9);
}

// ─────────────────────────────────────────────────────────────
// Response curve
// ─────────────────────────────────────────────────────────────

#[test]
fn response_curve_is_uniform_and_increasing() {
    let sweep = DisplacementSweep::new(0.0, 2000.0, 801).unwrap();
    let curve = response_curve(&sweep, &params_at(0.0)).unwrap();

    assert_eq!(curve.len(), 801);
    let step = 2000.0 / 800.0;
    for pair in curve.samples.windows(2) {
        assert!(pair[1].displacement_nm > pair[0].displacement_nm);
        assert_relative_eq!(
            pair[1].displacement_nm - pair[0].displacement_nm,
            step,
            epsilon = 1e-9
        );
    }
    assert_relative_eq!(curve.samples[0].displacement_nm, 0.0, epsilon = 1e-12);
    assert_relative_eq!(curve.samples[800].displacement_nm, 2000.0, epsilon = 1e-9);
}

#[test]
fn response_curve_matches_pointwise_intensity() {
    let sweep = DisplacementSweep::new(-500.0, 500.0, 101).unwrap();
    let curve = response_curve(&sweep, &params_at(0.0)).unwrap();

    for sample in &curve.samples {
        let direct = intensity(0.0, &params_at(sample.displacement_nm)).unwrap();
        assert_relative_eq!(sample.intensity, direct, epsilon = 1e-12);
    }
}

#[test]
fn collapsed_sweep_yields_identical_samples() {
    let sweep = DisplacementSweep::new(125.0, 125.0, 10).unwrap();
    let curve = response_curve(&sweep, &params_at(0.0)).unwrap();

    assert_eq!(curve.len(), 10);
    for sample in &curve.samples {
        assert_eq!(sample.displacement_nm, 125.0);
        assert_relative_eq!(sample.intensity, curve.samples[0].intensity, epsilon = 1e-15);
    }
}

// ─────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────

#[test]
fn zero_wavelength_is_rejected_before_computing() {
    let params = OpticalParams {
        wavelength_nm: 0.0,
        ..OpticalParams::default()
    };
    assert!(matches!(
        intensity(0.0, &params),
        Err(EngineError::NonPositiveWavelength { .. })
    ));
    assert!(matches!(
        phase_difference(100.0, 0.0),
        Err(EngineError::NonPositiveWavelength { .. })
    ));

    let grid = DetectorGrid::line(-1.0, 1.0, 3);
    assert!(intensity_field(&grid, 0.0, &params).is_err());
}

#[test]
fn negative_amplitude_is_rejected() {
    let params = OpticalParams {
        amplitude_2: -0.1,
        ..OpticalParams::default()
    };
    assert!(matches!(
        intensity(0.0, &params),
        Err(EngineError::NegativeAmplitude { .. })
    ));
}

#[test]
fn bad_sweeps_are_rejected() {
    assert!(matches!(
        DisplacementSweep::new(100.0, 0.0, 10),
        Err(EngineError::InvertedSweep { .. })
    ));
    assert!(matches!(
        DisplacementSweep::new(0.0, 100.0, 1),
        Err(EngineError::DegenerateSweep { .. })
    ));

    // Validation also runs when the sweep is built by hand.
    let sweep = DisplacementSweep {
        start_nm: 0.0,
        end_nm: 100.0,
        samples: 0,
    };
    assert!(response_curve(&sweep, &OpticalParams::default()).is_err());
}

// ─────────────────────────────────────────────────────────────
// Serde boundary
// ─────────────────────────────────────────────────────────────

#[test]
fn response_curve_json_round_trip() {
    let sweep = DisplacementSweep::new(0.0, 500.0, 6).unwrap();
    let curve = response_curve(&sweep, &params_at(0.0)).unwrap();

    let json = serde_json::to_string(&curve).unwrap();
    let back: michelson_core::types::ResponseCurve = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), curve.len());
    assert_relative_eq!(
        back.samples[5].intensity,
        curve.samples[5].intensity,
        epsilon = 1e-12
    );
}
