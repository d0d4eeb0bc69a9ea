//! Export preferences shown at the bottom of the sidebar.

use eframe::egui;
use egui::RichText;

use super::App;

impl App {
    pub(crate) fn show_export_settings(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Export Settings")
            .default_open(false)
            .show(ui, |ui| {
                let folder = self.config.resolve_export_folder();
                ui.label(
                    RichText::new(folder.display().to_string())
                        .small()
                        .monospace(),
                );
                ui.horizontal(|ui| {
                    if ui.button("Change Folder").clicked() {
                        self.pick_export_folder();
                    }
                    if ui
                        .add_enabled(
                            !self.config.export_folder.is_empty(),
                            egui::Button::new("Use Downloads"),
                        )
                        .clicked()
                    {
                        self.config.export_folder.clear();
                    }
                });
                ui.checkbox(
                    &mut self.config.reveal_after_export,
                    "Reveal file after export",
                );
                ui.checkbox(
                    &mut self.config.remember_last_folder,
                    "Remember last upload folder",
                );
            });
    }

    fn pick_export_folder(&mut self) {
        let dialog = rfd::FileDialog::new()
            .set_title("Export Folder")
            .set_directory(self.config.resolve_export_folder());
        if let Some(dir) = dialog.pick_folder() {
            self.config.export_folder = dir.to_string_lossy().into_owned();
        }
    }
}
