//! Menu bar (File, Help).

use eframe::egui;

use crate::app::AmpScopeApp;
use crate::state::SUPPORTED_EXTENSIONS;

impl AmpScopeApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                ui.set_min_width(180.0);

                if ui.button("Open trace…").clicked() {
                    let mut dialog = rfd::FileDialog::new()
                        .add_filter("Trace files", SUPPORTED_EXTENSIONS)
                        .add_filter("All files", &["*"]);
                    if let Some(dir) = self.settings.last_open_dir.clone() {
                        dialog = dialog.set_directory(dir);
                    }
                    // A cancelled dialog yields None and loads the placeholder
                    self.on_load(dialog.pick_file());
                    ui.close();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                ui.set_min_width(220.0);

                if ui.button("Documentation").clicked() {
                    let _ = open::that("https://github.com/SomethingNew71/AmpScope/wiki");
                    ui.close();
                }
                if ui.button("Report an Issue").clicked() {
                    let _ = open::that("https://github.com/SomethingNew71/AmpScope/issues");
                    ui.close();
                }
            });
        });
    }
}
