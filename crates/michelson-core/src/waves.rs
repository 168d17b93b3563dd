//! Instantaneous wave superposition across the detector axis.
//!
//! The operations in [`engine`](crate::engine) work with the time-averaged
//! two-beam law; this module samples the underlying waveforms themselves,
//!
//! $$y_1 = A_1 \sin(kx), \qquad y_2 = A_2 \sin(kx + \varphi),$$
//!
//! and their sum, so a front end can draw the waves the way an oscilloscope
//! snapshot would show them. Display-oriented only: the interference
//! observables come from the averaged law, not from squaring these samples.

use std::f64::consts::PI;

use ndarray::Array1;

use crate::engine::{phase_difference, EngineError};
use crate::types::{OpticalParams, WaveformSet};

/// Wavenumber $k = 2\pi / \lambda$ (rad/nm).
pub fn wavenumber(wavelength_nm: f64) -> Result<f64, EngineError> {
    if !(wavelength_nm > 0.0) {
        return Err(EngineError::NonPositiveWavelength { wavelength_nm });
    }
    Ok(2.0 * PI / wavelength_nm)
}

/// Sample both waveforms and their sum at the given round-trip displacement.
///
/// `positions` is the detector axis (nm), in the order the output vectors
/// follow. The second wave carries the displacement-induced phase
/// $\varphi = 2\pi \Delta / \lambda$.
pub fn superpose(
    positions: &[f64],
    displacement_nm: f64,
    params: &OpticalParams,
) -> Result<WaveformSet, EngineError> {
    params.validate()?;
    let k = wavenumber(params.wavelength_nm)?;
    let phi = phase_difference(displacement_nm, params.wavelength_nm)?;

    let axis = Array1::from_iter(positions.iter().copied());
    let wave_1 = axis.mapv(|x| params.amplitude_1 * (k * x).sin());
    let wave_2 = axis.mapv(|x| params.amplitude_2 * (k * x + phi).sin());
    let superposition = &wave_1 + &wave_2;

    Ok(WaveformSet {
        positions: axis.to_vec(),
        wave_1: wave_1.to_vec(),
        wave_2: wave_2.to_vec(),
        superposition: superposition.to_vec(),
        phase: phi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn superposition_is_pointwise_sum() {
        let params = OpticalParams::default();
        let axis: Vec<f64> = (0..50).map(|i| i as f64 * 10.0 - 250.0).collect();
        let set = superpose(&axis, 158.2, &params).unwrap();

        assert_eq!(set.positions.len(), 50);
        assert_eq!(set.superposition.len(), 50);
        for i in 0..50 {
            assert_relative_eq!(
                set.superposition[i],
                set.wave_1[i] + set.wave_2[i],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn zero_displacement_waves_coincide() {
        let params = OpticalParams::default();
        let axis: Vec<f64> = (0..20).map(|i| i as f64 * 31.64).collect();
        let set = superpose(&axis, 0.0, &params).unwrap();

        assert_eq!(set.phase, 0.0);
        for i in 0..20 {
            assert_relative_eq!(set.wave_1[i], set.wave_2[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn half_wavelength_displacement_cancels_balanced_waves() {
        let params = OpticalParams::default();
        let axis: Vec<f64> = (0..20).map(|i| i as f64 * 31.64).collect();
        let set = superpose(&axis, params.wavelength_nm / 2.0, &params).unwrap();

        for &y in &set.superposition {
            assert_relative_eq!(y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn wavenumber_rejects_zero_wavelength() {
        assert!(wavenumber(0.0).is_err());
        assert!(wavenumber(-632.8).is_err());
    }
}
