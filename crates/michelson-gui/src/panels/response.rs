//! Response view: centre intensity versus mirror displacement, with a
//! marker at the current slider position and CSV export.

use egui::Ui;

use michelson_core::engine::{intensity, round_trip};
use michelson_core::types::{OpticalParams, ResponseCurve};

/// State for the response display panel.
#[derive(Debug, Default)]
pub struct ResponsePanel {
    /// Whether to show the data table beneath the plot.
    pub show_table: bool,
}

impl ResponsePanel {
    pub fn ui(&mut self, ui: &mut Ui, curve: &ResponseCurve, mirror_nm: f64, params: &OpticalParams) {
        ui.label("Centre intensity vs mirror displacement");

        // The curve is sampled in round-trip path units; plot against the
        // mechanical mirror position the slider uses.
        let points: egui_plot::PlotPoints = curve
            .samples
            .iter()
            .map(|s| [s.displacement_nm / 2.0, s.intensity])
            .collect();

        let line = egui_plot::Line::new(points)
            .name("I_centre")
            .color(egui::Color32::from_rgb(50, 180, 80))
            .width(2.0);

        let marker_intensity = {
            let at_marker = OpticalParams {
                base_displacement_nm: round_trip(mirror_nm),
                ..params.clone()
            };
            intensity(0.0, &at_marker).unwrap_or(0.0)
        };

        let marker = egui_plot::Points::new(vec![[mirror_nm, marker_intensity]])
            .radius(5.0)
            .color(egui::Color32::from_rgb(220, 50, 50));

        let cursor = egui_plot::VLine::new(mirror_nm)
            .color(egui::Color32::from_rgb(220, 50, 50))
            .style(egui_plot::LineStyle::dashed_dense());

        egui_plot::Plot::new("response_plot")
            .height(280.0)
            .x_axis_label("Mirror displacement d (nm)")
            .y_axis_label("Centre intensity (a.u.)")
            .include_y(0.0)
            .legend(egui_plot::Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(line);
                plot_ui.vline(cursor);
                plot_ui.points(marker);
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_table, "Show data table");

            if ui.button("Export to CSV").clicked() {
                if let Err(e) = export_response_csv(curve) {
                    log::error!("Failed to export: {}", e);
                }
            }
        });

        if self.show_table {
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    egui::Grid::new("response_grid")
                        .striped(true)
                        .min_col_width(120.0)
                        .show(ui, |ui| {
                            ui.strong("Mirror d (nm)");
                            ui.strong("Path Δ (nm)");
                            ui.strong("Intensity (a.u.)");
                            ui.end_row();

                            for sample in &curve.samples {
                                ui.label(format!("{:.1}", sample.displacement_nm / 2.0));
                                ui.label(format!("{:.1}", sample.displacement_nm));
                                ui.label(format!("{:.4}", sample.intensity));
                                ui.end_row();
                            }
                        });
                });
        }
    }
}

fn export_response_csv(curve: &ResponseCurve) -> std::io::Result<()> {
    use std::io::Write;

    let path = "output/gui_response.csv";
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "mirror_nm,path_difference_nm,intensity")?;
    for sample in &curve.samples {
        writeln!(
            file,
            "{:.4},{:.4},{:.6e}",
            sample.displacement_nm / 2.0,
            sample.displacement_nm,
            sample.intensity
        )?;
    }

    Ok(())
}
