//! Job runner: ties configuration to the interference engine and writes
//! the output artefacts.

use std::path::Path;

use anyhow::{Context, Result};

use michelson_core::engine::{intensity_field, response_curve, round_trip};
use michelson_core::types::{
    DetectorGrid, DisplacementSweep, IntensityField, OpticalParams, ResponseCurve, WaveformSet,
};
use michelson_core::waves::superpose;

use crate::config::{preset_wavelength, JobConfig, OpticsConfig, LASER_PRESETS};

/// Results from a job run.
pub struct JobOutput {
    pub params: OpticalParams,
    /// Detector coordinates used for the fringe and wave snapshots (nm).
    pub detector_axis: Vec<f64>,
    pub response: ResponseCurve,
    pub fringes: Option<IntensityField>,
    pub waves: Option<WaveformSet>,
}

/// Run a full job from a parsed configuration.
pub fn run_job(job: &JobConfig) -> Result<JobOutput> {
    let params = build_params(job)?;
    println!(
        "  Source: λ = {:.1} nm, A1 = {}, A2 = {}, visibility = {:.3}",
        params.wavelength_nm,
        params.amplitude_1,
        params.amplitude_2,
        params.fringe_visibility()
    );

    let [start_nm, end_nm] = job.sweep.mirror_range_nm;
    let sweep = DisplacementSweep::new(round_trip(start_nm), round_trip(end_nm), job.sweep.points)
        .context("invalid mirror sweep")?;
    let response = response_curve(&sweep, &params).context("response curve failed")?;
    println!(
        "  Response curve: {} samples, mirror travel [{:.1}, {:.1}] nm",
        response.len(),
        start_nm,
        end_nm
    );

    // Detector axis for the snapshot artefacts, centred on zero.
    let half_span = job.detector.half_span_wavelengths * params.wavelength_nm;
    let points = job.detector.points;
    let detector_axis: Vec<f64> = (0..points)
        .map(|i| -half_span + 2.0 * half_span * i as f64 / (points - 1).max(1) as f64)
        .collect();

    let snapshot_path_nm = round_trip(job.field.mirror_nm);

    let fringes = if job.output.save_fringes {
        let grid = DetectorGrid::Line {
            positions: detector_axis.clone(),
        };
        let field = intensity_field(&grid, snapshot_path_nm, &params)
            .context("fringe snapshot failed")?;
        println!(
            "  Fringe snapshot: {} points at mirror position {:.1} nm",
            field.len(),
            job.field.mirror_nm
        );
        Some(field)
    } else {
        None
    };

    let waves = if job.output.save_waves {
        let set = superpose(&detector_axis, snapshot_path_nm, &params)
            .context("waveform sampling failed")?;
        println!(
            "  Waveforms: {} samples, φ = {:.3} rad",
            set.positions.len(),
            set.phase
        );
        Some(set)
    } else {
        None
    };

    Ok(JobOutput {
        params,
        detector_axis,
        response,
        fringes,
        waves,
    })
}

/// Check a job without computing anything: preset resolution, parameter
/// invariants, sweep invariants.
pub fn check_job(job: &JobConfig) -> Result<()> {
    let params = build_params(job)?;
    params.validate()?;

    let [start_nm, end_nm] = job.sweep.mirror_range_nm;
    DisplacementSweep::new(round_trip(start_nm), round_trip(end_nm), job.sweep.points)
        .context("invalid mirror sweep")?;
    Ok(())
}

/// Build engine parameters from the `[optics]` and `[field]` sections.
fn build_params(job: &JobConfig) -> Result<OpticalParams> {
    let wavelength_nm = resolve_wavelength(&job.optics)?;
    Ok(OpticalParams {
        wavelength_nm,
        amplitude_1: job.optics.amplitude_1,
        amplitude_2: job.optics.amplitude_2,
        base_displacement_nm: round_trip(job.field.mirror_nm),
        path_gradient: job.optics.tilt,
    })
}

/// Resolve the source wavelength: explicit value, then preset, then the
/// He-Ne default.
fn resolve_wavelength(optics: &OpticsConfig) -> Result<f64> {
    if let Some(wavelength_nm) = optics.wavelength_nm {
        return Ok(wavelength_nm);
    }
    if let Some(name) = &optics.preset {
        return preset_wavelength(name).ok_or_else(|| {
            let valid: Vec<&str> = LASER_PRESETS.iter().map(|(id, _, _)| *id).collect();
            anyhow::anyhow!(
                "Unknown laser preset '{}'. Valid presets: {}",
                name,
                valid.join(", ")
            )
        });
    }
    Ok(michelson_core::types::HELIUM_NEON_NM)
}

/// Write the response curve to a CSV file with a metadata header.
pub fn write_response_csv(output: &JobOutput, path: &Path, job: &JobConfig) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "# Michelson Simulator — Centre-Intensity Response")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# wavelength_nm: {}", output.params.wavelength_nm)?;
    writeln!(
        file,
        "# amplitudes: A1={}, A2={}",
        output.params.amplitude_1, output.params.amplitude_2
    )?;
    writeln!(
        file,
        "# fringe_visibility: {:.6}",
        output.params.fringe_visibility()
    )?;
    writeln!(
        file,
        "# mirror_range_nm: [{}, {}]",
        job.sweep.mirror_range_nm[0], job.sweep.mirror_range_nm[1]
    )?;
    writeln!(file, "#")?;
    writeln!(file, "mirror_nm,path_difference_nm,intensity")?;

    for sample in &output.response.samples {
        writeln!(
            file,
            "{:.4},{:.4},{:.6e}",
            sample.displacement_nm / 2.0,
            sample.displacement_nm,
            sample.intensity
        )?;
    }

    println!("Response curve written to: {}", path.display());
    Ok(())
}

/// Write the response curve to a JSON file.
pub fn write_response_json(response: &ResponseCurve, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(response)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Response curve (JSON) written to: {}", path.display());
    Ok(())
}

/// Write the spatial fringe snapshot to a CSV file.
pub fn write_fringes_csv(axis: &[f64], field: &IntensityField, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Michelson Simulator — Fringe Snapshot")?;
    writeln!(file, "# path_difference_nm: {}", field.displacement_nm)?;
    writeln!(file, "# points: {}", field.len())?;
    writeln!(file, "#")?;
    writeln!(file, "position_nm,intensity")?;

    for (x, value) in axis.iter().zip(field.values.iter()) {
        writeln!(file, "{:.4},{:.6e}", x, value)?;
    }

    println!("Fringe snapshot written to: {}", path.display());
    Ok(())
}

/// Write the sampled waveforms to a CSV file.
pub fn write_waves_csv(set: &WaveformSet, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Michelson Simulator — Sampled Waveforms")?;
    writeln!(file, "# phase_rad: {:.6}", set.phase)?;
    writeln!(file, "#")?;
    writeln!(file, "position_nm,wave_1,wave_2,superposition")?;

    for i in 0..set.positions.len() {
        writeln!(
            file,
            "{:.4},{:.6e},{:.6e},{:.6e}",
            set.positions[i], set.wave_1[i], set.wave_2[i], set.superposition[i]
        )?;
    }

    println!("Waveforms written to: {}", path.display());
    Ok(())
}
