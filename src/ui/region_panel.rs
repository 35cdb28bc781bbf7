//! Right-hand region panel: cursor readout, region information, and the
//! energy computation controls.

use eframe::egui;

use crate::app::AmpScopeApp;
use crate::units::si_format;

impl AmpScopeApp {
    /// Render the information and energy groups
    pub fn render_region_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Region");
        ui.label(
            egui::RichText::new(format!(
                "{} ({} samples)",
                self.trace.name,
                self.trace.trace.len()
            ))
            .color(egui::Color32::GRAY)
            .small(),
        );
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        self.render_information_group(ui);
        ui.add_space(8.0);
        self.render_energy_group(ui);
        ui.add_space(8.0);

        // Cosmetic only
        ui.label("Line width:");
        ui.add(egui::Slider::new(&mut self.line_width, 1.0..=10.0).step_by(1.0));
    }

    /// Δt, averages, and the live cursor readout
    fn render_information_group(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Information").strong());
            ui.add_space(4.0);

            let (delta, avg_current, avg_power) = match &self.region_summary {
                Some(s) => (
                    si_format(s.delta_t_s, 3, "s"),
                    si_format(s.avg_current_a, 3, "A"),
                    si_format(s.avg_power_w, 3, "W"),
                ),
                None => ("—".to_string(), "—".to_string(), "—".to_string()),
            };

            ui.label(format!("\u{0394}t: {delta}"));
            ui.label(format!("Average current: {avg_current}"));
            ui.label(format!("Average power: {avg_power}"));

            ui.add_space(4.0);
            ui.separator();

            ui.label(format!(
                "Selected: {} – {}",
                si_format(self.selection.lo, 3, "s"),
                si_format(self.selection.hi, 3, "s")
            ));

            match self.cursor {
                Some((t, current_ma)) => {
                    // The trace stores mA; the readout reports amps
                    ui.label(format!(
                        "Cursor: t = {}, I = {}",
                        si_format(t, 3, "s"),
                        si_format(current_ma / 1000.0, 3, "A")
                    ));
                }
                None => {
                    ui.label(
                        egui::RichText::new("Hover the chart for a readout")
                            .color(egui::Color32::GRAY)
                            .small(),
                    );
                }
            }
        });
    }

    /// Ualim input, energy result, and the compute trigger
    fn render_energy_group(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Energy").strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Ualim (V):");
                let mut volts = self.supply_voltage;
                let response = ui.add(
                    egui::DragValue::new(&mut volts)
                        .range(0.0..=f64::MAX)
                        .speed(0.01),
                );
                if response.changed() {
                    self.on_voltage_changed(volts);
                }
            });

            ui.add_space(4.0);

            let mut energy_text = match &self.region_summary {
                Some(s) => si_format(s.energy_j, 3, "J"),
                None => "—".to_string(),
            };
            ui.add(
                egui::TextEdit::singleline(&mut energy_text)
                    .interactive(false)
                    .horizontal_align(egui::Align::Center),
            );

            ui.add_space(4.0);

            if ui
                .add_sized(
                    [ui.available_width(), 28.0],
                    egui::Button::new("Compute"),
                )
                .clicked()
            {
                self.on_compute_requested();
            }
        });
    }
}
