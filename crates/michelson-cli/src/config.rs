//! TOML configuration deserialisation for simulation jobs.
//!
//! User-facing displacements in a job file are **mechanical mirror shifts**
//! in nanometres, the quantity read off a bench micrometer; the runner
//! doubles them into round-trip path differences before calling the engine.

use serde::Deserialize;

/// Laboratory laser lines selectable from `[optics] preset`.
pub const LASER_PRESETS: &[(&str, f64, &str)] = &[
    ("HeNe", 632.8, "Helium-neon, the bench reference line"),
    ("Nd:YAG-2x", 532.0, "Frequency-doubled Nd:YAG"),
    ("Ar-ion", 488.0, "Argon-ion blue-green line"),
    ("diode-red", 650.0, "Common red laser diode"),
];

/// Look up a preset wavelength by name.
pub fn preset_wavelength(name: &str) -> Option<f64> {
    LASER_PRESETS
        .iter()
        .find(|(id, _, _)| *id == name)
        .map(|&(_, wavelength_nm, _)| wavelength_nm)
}

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub optics: OpticsConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Source and beam parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct OpticsConfig {
    /// Named laser line (see `michelson-cli presets`).
    pub preset: Option<String>,
    /// Explicit wavelength (nm); wins over `preset` when both are given.
    pub wavelength_nm: Option<f64>,
    #[serde(default = "default_amplitude")]
    pub amplitude_1: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude_2: f64,
    /// Tilt-induced optical path per unit detector coordinate along x and y.
    #[serde(default)]
    pub tilt: [f64; 2],
}

impl Default for OpticsConfig {
    fn default() -> Self {
        Self {
            preset: None,
            wavelength_nm: None,
            amplitude_1: default_amplitude(),
            amplitude_2: default_amplitude(),
            tilt: [0.0, 0.0],
        }
    }
}

fn default_amplitude() -> f64 {
    1.0
}

/// Mirror sweep for the response curve (mechanical nm).
#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    /// Mirror travel [start, end] (nm).
    #[serde(default = "default_mirror_range")]
    pub mirror_range_nm: [f64; 2],
    /// Number of sampled mirror positions.
    #[serde(default = "default_sweep_points")]
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            mirror_range_nm: default_mirror_range(),
            points: default_sweep_points(),
        }
    }
}

fn default_mirror_range() -> [f64; 2] {
    [0.0, 2000.0]
}
fn default_sweep_points() -> usize {
    800
}

/// Detector axis for fringe and waveform sampling.
#[derive(Debug, Deserialize)]
pub struct DetectorConfig {
    /// Half-span of the axis, in units of the source wavelength.
    #[serde(default = "default_half_span")]
    pub half_span_wavelengths: f64,
    /// Number of detector samples.
    #[serde(default = "default_detector_points")]
    pub points: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            half_span_wavelengths: default_half_span(),
            points: default_detector_points(),
        }
    }
}

fn default_half_span() -> f64 {
    1.5
}
fn default_detector_points() -> usize {
    2000
}

/// Fixed mirror position (mechanical nm) for the fringe/wave snapshots.
#[derive(Debug, Default, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub mirror_nm: f64,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the response curve as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_response: bool,
    /// Whether to also save the response curve as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
    /// Whether to save the spatial fringe snapshot (default: false).
    #[serde(default)]
    pub save_fringes: bool,
    /// Whether to save the sampled waveforms (default: false).
    #[serde(default)]
    pub save_waves: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_response: true,
            save_json: false,
            save_fringes: false,
            save_waves: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}
