//! Wave view: the two sampled waveforms and their superposition.

use egui::Ui;

use michelson_core::types::{OpticalParams, WaveformSet};

pub fn ui(ui: &mut Ui, waves: &WaveformSet, params: &OpticalParams) {
    ui.label(format!(
        "Superposed waves — λ = {:.1} nm, φ = {:.3} rad",
        params.wavelength_nm, waves.phase
    ));

    let wave_1: egui_plot::PlotPoints = waves
        .positions
        .iter()
        .zip(waves.wave_1.iter())
        .map(|(&x, &y)| [x, y])
        .collect();
    let wave_2: egui_plot::PlotPoints = waves
        .positions
        .iter()
        .zip(waves.wave_2.iter())
        .map(|(&x, &y)| [x, y])
        .collect();
    let sum: egui_plot::PlotPoints = waves
        .positions
        .iter()
        .zip(waves.superposition.iter())
        .map(|(&x, &y)| [x, y])
        .collect();

    let wave_1_line = egui_plot::Line::new(wave_1)
        .name("Wave 1")
        .color(egui::Color32::from_rgb(220, 50, 50))
        .width(2.0);
    let wave_2_line = egui_plot::Line::new(wave_2)
        .name("Wave 2")
        .color(egui::Color32::from_rgb(50, 120, 220))
        .width(2.0);
    let sum_line = egui_plot::Line::new(sum)
        .name("Sum")
        .color(egui::Color32::from_rgb(220, 220, 220))
        .width(2.0)
        .style(egui_plot::LineStyle::dashed_loose());

    egui_plot::Plot::new("waves_plot")
        .height(300.0)
        .x_axis_label("Position (nm)")
        .y_axis_label("Amplitude (a.u.)")
        .include_y(2.1)
        .include_y(-2.1)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(wave_1_line);
            plot_ui.line(wave_2_line);
            plot_ui.line(sum_line);
        });
}
