//! Control sidebar: mode toggle, snippet editor, adjustments, background
//! presets, the custom gradient library, and the export/share actions.

use eframe::egui;
use egui::{Color32, RichText};

use beautifier_config::config::{PADDING_RANGE, ROUNDING_RANGE, SHADOW_RANGE};
use beautifier_config::MAX_CUSTOM_GRADIENTS;
use beautifier_core::highlight::LANGUAGES;
use beautifier_core::presets::{preset_name, COMMUNITY_GRADIENTS, DEFAULT_BACKGROUNDS};
use beautifier_core::{Action, AspectRatio, Mode};

use super::{App, ACCENT};

const SECTION_COLOR: Color32 = Color32::from_rgb(113, 113, 122);
const SWATCH_DISPLAY: egui::Vec2 = egui::Vec2::new(64.0, 40.0);

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).small().strong().color(SECTION_COLOR));
}

/// A labelled pixel slider. Returns the new value when it was moved.
fn px_slider(ui: &mut egui::Ui, label: &str, value: u32, range: (u32, u32)) -> Option<u32> {
    let mut v = value;
    ui.label(label);
    let response = ui.add(egui::Slider::new(&mut v, range.0..=range.1).suffix("px"));
    (response.changed() && v != value).then_some(v)
}

impl App {
    pub(crate) fn show_sidebar(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.show_mode_toggle(ui);
                ui.separator();

                match self.state().mode {
                    Mode::Mockup => self.show_image_section(ui),
                    Mode::Snippet => self.show_editor_section(ui),
                }
                ui.separator();

                self.show_adjustments(ui);
                ui.separator();

                self.show_presets(ui);
                ui.separator();

                self.show_library(ui);
                ui.separator();

                self.show_export_settings(ui);
                ui.separator();

                self.show_actions(ui);
            });
    }

    fn show_mode_toggle(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.state().mode;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, Mode::Mockup, Mode::Mockup.label());
            ui.selectable_value(&mut mode, Mode::Snippet, Mode::Snippet.label());
        });
        if mode != self.state().mode {
            self.dispatch(Action::SetMode(mode));
        }
    }

    fn show_image_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "SCREENSHOT");
        let has_image = self.state().image.is_some();
        ui.horizontal(|ui| {
            if ui.button("Upload Image").clicked() {
                self.open_upload_dialog();
            }
            if ui
                .add_enabled(has_image, egui::Button::new("Clear Image"))
                .clicked()
            {
                self.clear_image();
            }
        });
        if let Some(image) = &self.state().image {
            ui.label(
                RichText::new(format!("{} x {} px", image.width(), image.height()))
                    .small()
                    .color(SECTION_COLOR),
            );
        }
    }

    fn show_editor_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "EDITOR");

        let mut language = self.state().language.clone();
        let selected = LANGUAGES
            .iter()
            .find(|(id, _)| *id == language)
            .map_or(language.as_str(), |(_, label)| *label)
            .to_string();
        egui::ComboBox::from_label("Language")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for (id, label) in LANGUAGES {
                    ui.selectable_value(&mut language, id.to_string(), label);
                }
            });
        if language != self.state().language {
            self.dispatch(Action::SetLanguage(language));
        }

        ui.label("Snippet Content");
        let mut code = self.state().code.clone();
        let response = ui.add(
            egui::TextEdit::multiline(&mut code)
                .code_editor()
                .hint_text("Paste your code here...")
                .desired_rows(10)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.dispatch(Action::SetCode(code));
        }
    }

    fn show_adjustments(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "ADJUSTMENTS");

        let mut ratio = self.state().aspect_ratio;
        egui::ComboBox::from_label("Canvas Ratio")
            .selected_text(ratio.label())
            .show_ui(ui, |ui| {
                for option in AspectRatio::ALL {
                    ui.selectable_value(&mut ratio, option, option.label());
                }
            });
        if ratio != self.state().aspect_ratio {
            self.dispatch(Action::SetAspectRatio(ratio));
        }

        let state = self.state();
        let (padding, rounding, shadow) = (state.padding, state.rounding, state.shadow);
        if let Some(v) = px_slider(ui, "Padding", padding, PADDING_RANGE) {
            self.dispatch(Action::SetPadding(v));
        }
        if let Some(v) = px_slider(ui, "Rounding", rounding, ROUNDING_RANGE) {
            self.dispatch(Action::SetRounding(v));
        }
        if let Some(v) = px_slider(ui, "Shadow Depth", shadow, SHADOW_RANGE) {
            self.dispatch(Action::SetShadow(v));
        }
    }

    /// A clickable background thumbnail, outlined when it is the active
    /// background.
    fn swatch_button(&mut self, ui: &mut egui::Ui, css: &str, tooltip: &str) -> egui::Response {
        let texture = self.swatches.texture(ui.ctx(), css);
        let selected = self.state().background == css;
        let stroke = if selected {
            egui::Stroke::new(2.0, ACCENT)
        } else {
            egui::Stroke::NONE
        };
        ui.add(
            egui::Button::image(egui::Image::new((texture, SWATCH_DISPLAY)))
                .stroke(stroke)
                .selected(selected),
        )
        .on_hover_text(tooltip)
    }

    fn show_presets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            section_heading(ui, "PRESETS");
            let active = preset_name(&self.state().background).unwrap_or("Custom");
            ui.label(
                RichText::new(format!("Background: {active}"))
                    .small()
                    .color(SECTION_COLOR),
            );
        });
        let mut picked = None;
        ui.horizontal_wrapped(|ui| {
            for preset in DEFAULT_BACKGROUNDS.iter().chain(COMMUNITY_GRADIENTS.iter()) {
                if self.swatch_button(ui, preset.css, preset.name).clicked() {
                    picked = Some(preset.css.to_string());
                }
            }
        });
        if let Some(css) = picked {
            self.dispatch(Action::SetBackground(css));
        }
    }

    fn show_library(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            section_heading(ui, "MY LIBRARY");
            ui.label(
                RichText::new(format!("{}/{MAX_CUSTOM_GRADIENTS}", self.gradients.len()))
                    .small()
                    .color(SECTION_COLOR),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Create Gradient").clicked() {
                    self.builder_open = !self.builder_open;
                }
            });
        });

        if self.gradients.is_empty() {
            ui.label(
                RichText::new("No saved gradients yet.")
                    .small()
                    .color(SECTION_COLOR),
            );
            return;
        }

        let entries = self.gradients.entries().to_vec();
        let mut picked = None;
        let mut deleted = None;
        ui.horizontal_wrapped(|ui| {
            for (index, css) in entries.iter().enumerate() {
                ui.vertical(|ui| {
                    if self.swatch_button(ui, css, css).clicked() {
                        picked = Some(css.clone());
                    }
                    if ui.small_button("Delete").clicked() {
                        deleted = Some(index);
                    }
                });
            }
        });
        if let Some(css) = picked {
            self.dispatch(Action::SetBackground(css));
        }
        if let Some(index) = deleted {
            self.delete_custom_gradient(index);
        }
    }

    fn show_actions(&mut self, ui: &mut egui::Ui) {
        let can_export = self.state().has_content();
        ui.horizontal(|ui| {
            let export = egui::Button::new(RichText::new("Export PNG").strong().color(Color32::WHITE))
                .fill(ACCENT);
            if ui.add_enabled(can_export, export).clicked() {
                self.start_export();
            }

            let share_label = if self.share_link_copied() {
                "Link Copied!"
            } else {
                "Share"
            };
            if ui.button(share_label).clicked() {
                self.share();
            }
        });

        if self.pending_exports > 0 {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Exporting...");
            });
        } else if let Some(path) = &self.last_export {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(
                RichText::new(format!("Saved {name}"))
                    .small()
                    .color(SECTION_COLOR),
            )
            .on_hover_text(path.display().to_string());
        }
    }
}
