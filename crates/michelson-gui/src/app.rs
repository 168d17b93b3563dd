//! Main application state and egui integration.

use eframe::egui;

use michelson_core::engine::{response_curve, round_trip};
use michelson_core::types::DisplacementSweep;
use michelson_core::waves::superpose;

use crate::panels;

/// Detector samples for the wave view.
const WAVE_POINTS: usize = 1000;
/// Mirror positions sampled for the response view.
const SWEEP_POINTS: usize = 800;
/// Mirror travel shown in the response view (nm).
const MIRROR_TRAVEL_NM: f64 = 2000.0;

/// The main Michelson application.
pub struct MichelsonApp {
    /// State for the bench controls side panel.
    pub controls: panels::controls::ControlsPanel,
    /// State for the response plot (export, marker options).
    pub response: panels::response::ResponsePanel,
    /// Error message from the last recompute, if any.
    error_message: Option<String>,
}

impl Default for MichelsonApp {
    fn default() -> Self {
        Self {
            controls: panels::controls::ControlsPanel::default(),
            response: panels::response::ResponsePanel::default(),
            error_message: None,
        }
    }
}

impl eframe::App for MichelsonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let params = self.controls.optical_params();
        let path_nm = round_trip(self.controls.mirror_nm);

        // The computation is a few thousand sines; recomputing per frame
        // keeps the sliders live with no caching bookkeeping.
        let half_span = 1.5 * params.wavelength_nm;
        let axis: Vec<f64> = (0..WAVE_POINTS)
            .map(|i| -half_span + 2.0 * half_span * i as f64 / (WAVE_POINTS - 1) as f64)
            .collect();

        let waves = superpose(&axis, path_nm, &params);
        let sweep = DisplacementSweep::new(0.0, round_trip(MIRROR_TRAVEL_NM), SWEEP_POINTS);
        let curve = sweep
            .and_then(|sweep| response_curve(&sweep, &params));

        self.error_message = match (&waves, &curve) {
            (Err(e), _) => Some(e.to_string()),
            (_, Err(e)) => Some(e.to_string()),
            _ => None,
        };

        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Michelson");
                ui.separator();
                self.controls.ui(ui, &params, path_nm);

                if let Some(err) = &self.error_message {
                    ui.add_space(8.0);
                    ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Ok(waves) = &waves {
                panels::waves::ui(ui, waves, &params);
            }
            ui.add_space(8.0);
            if let Ok(curve) = &curve {
                self.response.ui(ui, curve, self.controls.mirror_nm, &params);
            }
        });
    }
}
