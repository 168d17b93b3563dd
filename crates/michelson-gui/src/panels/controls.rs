//! Bench controls: mirror position, source, and beam amplitude sliders.

use egui::Ui;

use michelson_core::engine::{intensity, phase_difference, round_trip};
use michelson_core::types::{OpticalParams, HELIUM_NEON_NM};

/// State for the bench controls side panel.
#[derive(Debug)]
pub struct ControlsPanel {
    /// Mechanical mirror shift (nm).
    pub mirror_nm: f64,
    /// Source wavelength (nm).
    pub wavelength_nm: f64,
    /// Fixed-arm beam amplitude.
    pub amplitude_1: f64,
    /// Moving-arm beam amplitude.
    pub amplitude_2: f64,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            mirror_nm: 0.0,
            wavelength_nm: HELIUM_NEON_NM,
            amplitude_1: 1.0,
            amplitude_2: 1.0,
        }
    }
}

impl ControlsPanel {
    /// Engine parameters for the current slider state.
    pub fn optical_params(&self) -> OpticalParams {
        OpticalParams {
            wavelength_nm: self.wavelength_nm,
            amplitude_1: self.amplitude_1,
            amplitude_2: self.amplitude_2,
            base_displacement_nm: round_trip(self.mirror_nm),
            path_gradient: [0.0, 0.0],
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, params: &OpticalParams, path_nm: f64) {
        ui.add(
            egui::Slider::new(&mut self.mirror_nm, 0.0..=2000.0)
                .text("Mirror shift d (nm)"),
        );
        ui.add(
            egui::Slider::new(&mut self.wavelength_nm, 400.0..=700.0)
                .text("Wavelength (nm)"),
        );

        ui.add_space(8.0);
        ui.add(egui::Slider::new(&mut self.amplitude_1, 0.0..=2.0).text("Amplitude A1"));
        ui.add(egui::Slider::new(&mut self.amplitude_2, 0.0..=2.0).text("Amplitude A2"));

        if ui.button("Reset to He-Ne bench").clicked() {
            *self = Self::default();
        }

        ui.add_space(12.0);
        ui.separator();

        // Live readout, the counterpart of the original figure's text box.
        match (
            phase_difference(path_nm, params.wavelength_nm),
            intensity(0.0, params),
        ) {
            (Ok(phase), Ok(centre)) => {
                ui.label("φ = 4π d / λ");
                ui.monospace(format!("d        = {:7.1} nm", self.mirror_nm));
                ui.monospace(format!("Δ (path) = {:7.1} nm", path_nm));
                ui.monospace(format!("φ        = {:7.3} rad", phase));
                ui.monospace(format!("I_centre = {:7.3}", centre));
                ui.monospace(format!(
                    "V        = {:7.3}",
                    params.fringe_visibility()
                ));
            }
            _ => {
                ui.label("Readout unavailable for these parameters.");
            }
        }
    }
}
