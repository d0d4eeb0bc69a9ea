//! Custom gradient library operations and the gradient builder window.

use eframe::egui;
use egui::{Color32, RichText};

use beautifier_config::HexColor;
use beautifier_core::presets::ANGLE_RANGE;
use beautifier_core::Action;

use super::App;

const BUILDER_PREVIEW: egui::Vec2 = egui::Vec2::new(280.0, 120.0);

/// Color button bound to a CSS hex string. Unparsable strings show as black
/// and are replaced on the first edit.
fn hex_color_edit(ui: &mut egui::Ui, hex: &mut String) -> bool {
    let parsed = HexColor::from_hex(hex).unwrap_or(HexColor::rgb(0, 0, 0));
    let mut color = Color32::from_rgb(parsed.r, parsed.g, parsed.b);
    let changed = ui.color_edit_button_srgba(&mut color).changed();
    if changed {
        *hex = HexColor::rgb(color.r(), color.g(), color.b()).to_css();
    }
    changed
}

impl App {
    /// Saves `css` to the library (most recent first) and makes it the
    /// active background.
    pub fn add_custom_gradient(&mut self, css: String) {
        self.gradients.add(css.clone());
        self.persist_gradients();
        self.dispatch(Action::SetBackground(css));
    }

    /// Removes the library entry at `index`. The active background is left
    /// alone even if it was the deleted entry.
    pub fn delete_custom_gradient(&mut self, index: usize) {
        if self.gradients.delete(index).is_some() {
            self.persist_gradients();
        }
    }

    fn persist_gradients(&self) {
        if let Err(e) = self.gradient_store.save(&self.gradients) {
            tracing::warn!("Failed to save custom gradients: {e:#}");
        }
    }

    pub(crate) fn show_gradient_builder(&mut self, ctx: &egui::Context) {
        if !self.builder_open {
            return;
        }

        let mut open = true;
        let mut save = false;
        egui::Window::new("Gradient Builder")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Start");
                    hex_color_edit(ui, &mut self.builder.start);
                    ui.add_space(12.0);
                    ui.label("End");
                    hex_color_edit(ui, &mut self.builder.end);
                });

                ui.label("Angle");
                ui.add(
                    egui::Slider::new(&mut self.builder.angle, ANGLE_RANGE.0..=ANGLE_RANGE.1)
                        .suffix("°"),
                );

                let css = self.builder.css();
                let texture = self.swatches.texture(ui.ctx(), &css);
                ui.add(
                    egui::Image::new((texture, BUILDER_PREVIEW))
                        .corner_radius(egui::CornerRadius::same(8)),
                );
                ui.label(RichText::new(css).monospace().small().weak());

                ui.horizontal(|ui| {
                    if ui.button("Save to Library").clicked() {
                        save = true;
                    }
                    if ui.button("Reset").clicked() {
                        self.builder = Default::default();
                    }
                });
            });

        if save {
            let css = self.builder.css();
            self.add_custom_gradient(css);
            open = false;
        }
        self.builder_open = open;
    }
}
