//! Core value types shared across the Michelson simulator.
//!
//! This module defines the immutable data structures exchanged between the
//! engine and the presentation layers: beam parameters, displacement sweeps,
//! detector grids, and the result containers they produce. Every structure is
//! a freshly allocated, caller-owned value.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// He-Ne laser wavelength (nm) of the reference bench setup.
pub const HELIUM_NEON_NM: f64 = 632.8;

/// Physical parameters of the two recombining beams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpticalParams {
    /// Source wavelength (nm). Must be positive.
    pub wavelength_nm: f64,
    /// Amplitude of the beam returning from the fixed arm (arbitrary units, ≥ 0).
    pub amplitude_1: f64,
    /// Amplitude of the beam returning from the moving arm (arbitrary units, ≥ 0).
    pub amplitude_2: f64,
    /// Round-trip optical path difference between the arms (nm). Any sign.
    pub base_displacement_nm: f64,
    /// Extra optical path per unit detector coordinate along x and y,
    /// as introduced by a small mirror tilt. `[0.0, 0.0]` gives a flat
    /// field with no spatial fringes.
    pub path_gradient: [f64; 2],
}

impl Default for OpticalParams {
    fn default() -> Self {
        Self {
            wavelength_nm: HELIUM_NEON_NM,
            amplitude_1: 1.0,
            amplitude_2: 1.0,
            base_displacement_nm: 0.0,
            path_gradient: [0.0, 0.0],
        }
    }
}

impl OpticalParams {
    /// Check the physical invariants: positive wavelength, non-negative
    /// amplitudes.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.wavelength_nm > 0.0) {
            return Err(EngineError::NonPositiveWavelength {
                wavelength_nm: self.wavelength_nm,
            });
        }
        for &amplitude in &[self.amplitude_1, self.amplitude_2] {
            if !(amplitude >= 0.0) {
                return Err(EngineError::NegativeAmplitude { amplitude });
            }
        }
        Ok(())
    }

    /// Fringe visibility $V = 2 A_1 A_2 / (A_1^2 + A_2^2)$.
    ///
    /// 1.0 for balanced beams, 0.0 when either beam (or both) is dark.
    pub fn fringe_visibility(&self) -> f64 {
        let total = self.amplitude_1 * self.amplitude_1 + self.amplitude_2 * self.amplitude_2;
        if total == 0.0 {
            0.0
        } else {
            2.0 * self.amplitude_1 * self.amplitude_2 / total
        }
    }
}

/// An inclusive, evenly spaced range of round-trip displacements to sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacementSweep {
    /// First sampled displacement (nm).
    pub start_nm: f64,
    /// Last sampled displacement (nm). Must be ≥ `start_nm`.
    pub end_nm: f64,
    /// Number of samples, endpoints included. Must be ≥ 2.
    pub samples: usize,
}

impl DisplacementSweep {
    /// Build a sweep, validating its invariants eagerly.
    pub fn new(start_nm: f64, end_nm: f64, samples: usize) -> Result<Self, EngineError> {
        let sweep = Self {
            start_nm,
            end_nm,
            samples,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    /// Check `start ≤ end` and `samples ≥ 2`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.samples < 2 {
            return Err(EngineError::DegenerateSweep {
                samples: self.samples,
            });
        }
        if !(self.start_nm <= self.end_nm) {
            return Err(EngineError::InvertedSweep {
                start_nm: self.start_nm,
                end_nm: self.end_nm,
            });
        }
        Ok(())
    }

    /// Spacing between consecutive samples (nm). Zero for a collapsed sweep.
    pub fn step_nm(&self) -> f64 {
        (self.end_nm - self.start_nm) / (self.samples - 1) as f64
    }

    /// The sampled displacement values, both endpoints included.
    pub fn values(&self) -> Vec<f64> {
        Array1::linspace(self.start_nm, self.end_nm, self.samples).to_vec()
    }
}

/// Detector sampling positions, in the order intensities are returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DetectorGrid {
    /// 1-D axis across the fringe pattern.
    Line {
        /// Detector coordinates (nm), caller-supplied order.
        positions: Vec<f64>,
    },
    /// 2-D raster, row-major with x varying fastest.
    Plane {
        /// (x, y) detector coordinates (nm).
        positions: Vec<[f64; 2]>,
        /// Number of points along x.
        nx: usize,
        /// Number of points along y.
        ny: usize,
    },
}

impl DetectorGrid {
    /// Evenly spaced 1-D axis from `min` to `max` inclusive.
    pub fn line(min: f64, max: f64, points: usize) -> Self {
        Self::Line {
            positions: Array1::linspace(min, max, points).to_vec(),
        }
    }

    /// Centred rectangular raster of `nx × ny` points spanning
    /// `±half_width` by `±half_height`, row-major with x fastest.
    pub fn plane(half_width: f64, half_height: f64, nx: usize, ny: usize) -> Self {
        let dx = if nx > 1 {
            2.0 * half_width / (nx - 1) as f64
        } else {
            0.0
        };
        let dy = if ny > 1 {
            2.0 * half_height / (ny - 1) as f64
        } else {
            0.0
        };

        let mut positions = Vec::with_capacity(nx * ny);
        for iy in 0..ny {
            for ix in 0..nx {
                positions.push([
                    -half_width + ix as f64 * dx,
                    -half_height + iy as f64 * dy,
                ]);
            }
        }

        Self::Plane { positions, nx, ny }
    }

    /// Number of detector coordinates.
    pub fn len(&self) -> usize {
        match self {
            Self::Line { positions } => positions.len(),
            Self::Plane { positions, .. } => positions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interference intensities over a detector grid at a fixed displacement.
///
/// `values[i]` belongs to the i-th grid coordinate; the correspondence is
/// positional, so duplicate coordinates each get their own entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityField {
    /// Round-trip displacement the field was computed at (nm).
    pub displacement_nm: f64,
    /// One non-negative intensity per grid coordinate, in grid order.
    pub values: Vec<f64>,
}

impl IntensityField {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Centre intensity at a single sampled displacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResponseSample {
    /// Round-trip displacement (nm).
    pub displacement_nm: f64,
    /// Intensity at the detector centre (arbitrary units).
    pub intensity: f64,
}

/// Centre-intensity response over a displacement sweep, in increasing
/// displacement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseCurve {
    pub samples: Vec<ResponseSample>,
}

impl ResponseCurve {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Instantaneous waveform snapshot across the detector axis.
///
/// Holds the two individual waves and their sum, sampled at the same
/// positions: `superposition[i] == wave_1[i] + wave_2[i]` for every i.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveformSet {
    /// Detector coordinates (nm).
    pub positions: Vec<f64>,
    /// First wave, $A_1 \sin(kx)$.
    pub wave_1: Vec<f64>,
    /// Second wave, $A_2 \sin(kx + \varphi)$.
    pub wave_2: Vec<f64>,
    /// Pointwise sum of the two waves.
    pub superposition: Vec<f64>,
    /// Phase difference φ (radians) applied to the second wave.
    pub phase: f64,
}
