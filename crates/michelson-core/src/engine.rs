//! The two-beam interference engine.
//!
//! Models two coherent wavefronts recombining at the detector after
//! travelling arms of different optical length. The observable intensity
//! follows the two-beam interference law:
//!
//! $$I = A_1^2 + A_2^2 + 2 A_1 A_2 \cos\varphi$$
//!
//! with $\varphi = 2\pi \Delta / \lambda$ for a round-trip optical path
//! difference $\Delta$. Every operation is a stateless pure computation:
//! parameters in, freshly allocated results out.

use std::f64::consts::PI;

use num_complex::Complex64;
use rayon::prelude::*;
use thiserror::Error;

use crate::types::{
    DetectorGrid, DisplacementSweep, IntensityField, OpticalParams, ResponseCurve, ResponseSample,
};

/// Errors from the interference engine.
///
/// All variants are deterministic parameter-validation failures, detected
/// eagerly before any computation proceeds. Nothing is retried.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("wavelength must be positive, got {wavelength_nm} nm")]
    NonPositiveWavelength { wavelength_nm: f64 },

    #[error("beam amplitude must be non-negative, got {amplitude}")]
    NegativeAmplitude { amplitude: f64 },

    #[error("sweep start must not exceed end, got [{start_nm}, {end_nm}] nm")]
    InvertedSweep { start_nm: f64, end_nm: f64 },

    #[error("sweep needs at least two samples, got {samples}")]
    DegenerateSweep { samples: usize },
}

/// Convert a mechanical mirror shift into a round-trip optical path
/// difference.
///
/// Light traverses the moving arm twice, so a mirror moved by `d` lengthens
/// the optical path by `2d`. The engine works exclusively in round-trip
/// units; presentation layers apply this conversion at their boundary.
pub fn round_trip(mirror_shift_nm: f64) -> f64 {
    2.0 * mirror_shift_nm
}

/// Phase difference (radians) accumulated over a round-trip path difference.
///
/// $\varphi = 2\pi \Delta / \lambda$ — continuous and odd in the
/// displacement, one full fringe per wavelength of path difference.
pub fn phase_difference(path_difference_nm: f64, wavelength_nm: f64) -> Result<f64, EngineError> {
    if !(wavelength_nm > 0.0) {
        return Err(EngineError::NonPositiveWavelength { wavelength_nm });
    }
    Ok(2.0 * PI * path_difference_nm / wavelength_nm)
}

/// Time-averaged intensity of the recombined beams at a 1-D detector
/// coordinate.
///
/// The phase at `position` combines the fixed `base_displacement_nm` with
/// the tilt ramp `path_gradient[0] * position`. The result always lies in
/// $[(A_1 - A_2)^2, (A_1 + A_2)^2]$.
pub fn intensity(position: f64, params: &OpticalParams) -> Result<f64, EngineError> {
    params.validate()?;
    Ok(two_beam(
        params.path_gradient[0] * position,
        params.base_displacement_nm,
        params,
    ))
}

/// Coordinate-pair variant of [`intensity`] for planar detectors.
///
/// The tilt ramp is $g_x x + g_y y$.
pub fn intensity_xy(position: [f64; 2], params: &OpticalParams) -> Result<f64, EngineError> {
    params.validate()?;
    Ok(two_beam(
        ramp(position, params),
        params.base_displacement_nm,
        params,
    ))
}

/// Intensity at every grid coordinate for a fixed displacement.
///
/// Output order matches grid order exactly. Each entry is independent of
/// every other, so the map runs on the rayon thread pool and collects back
/// in place.
pub fn intensity_field(
    grid: &DetectorGrid,
    displacement_nm: f64,
    params: &OpticalParams,
) -> Result<IntensityField, EngineError> {
    params.validate()?;

    let values = match grid {
        DetectorGrid::Line { positions } => positions
            .par_iter()
            .map(|&x| two_beam(params.path_gradient[0] * x, displacement_nm, params))
            .collect(),
        DetectorGrid::Plane { positions, .. } => positions
            .par_iter()
            .map(|&point| two_beam(ramp(point, params), displacement_nm, params))
            .collect(),
    };

    Ok(IntensityField {
        displacement_nm,
        values,
    })
}

/// Centre-coordinate intensity across an evenly spaced displacement sweep.
///
/// Returns `sweep.samples` pairs in increasing displacement order, both
/// endpoints included. A sweep with `start == end` collapses every sample
/// onto the same displacement; that is a valid degenerate output.
pub fn response_curve(
    sweep: &DisplacementSweep,
    params: &OpticalParams,
) -> Result<ResponseCurve, EngineError> {
    params.validate()?;
    sweep.validate()?;

    let samples = sweep
        .values()
        .into_par_iter()
        .map(|displacement_nm| ResponseSample {
            displacement_nm,
            intensity: two_beam(0.0, displacement_nm, params),
        })
        .collect();

    Ok(ResponseCurve { samples })
}

/// Tilt contribution to the optical path at a planar detector coordinate.
fn ramp(position: [f64; 2], params: &OpticalParams) -> f64 {
    params.path_gradient[0] * position[0] + params.path_gradient[1] * position[1]
}

/// Two-beam law with parameters already validated.
///
/// Evaluated as the squared norm of the phasor sum $A_1 + A_2 e^{i\varphi}$,
/// which expands to $A_1^2 + A_2^2 + 2 A_1 A_2 \cos\varphi$.
fn two_beam(extra_path_nm: f64, displacement_nm: f64, params: &OpticalParams) -> f64 {
    let phi = 2.0 * PI * (displacement_nm + extra_path_nm) / params.wavelength_nm;
    let field = Complex64::from(params.amplitude_1) + Complex64::from_polar(params.amplitude_2, phi);
    field.norm_sqr()
}
