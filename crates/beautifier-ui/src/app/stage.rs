//! Preview stage: the upload drop zone when there is nothing to show,
//! otherwise the composite scaled to fit the available space.

use eframe::egui;
use egui::{Color32, RichText};

use beautifier_core::Size;

use super::App;

/// Widest the empty-state drop zone gets, in points.
const DROP_ZONE_MAX_WIDTH: f32 = 672.0;

const ZINC_400: Color32 = Color32::from_rgb(161, 161, 170);
const ZINC_600: Color32 = Color32::from_rgb(82, 82, 91);
const ZINC_700: Color32 = Color32::from_rgb(63, 63, 70);
const ZINC_800: Color32 = Color32::from_rgb(39, 39, 42);

impl App {
    pub(crate) fn show_stage(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.fit.is_attached() {
                    ui.label(RichText::new(self.fit.percent_label()).monospace().color(ZINC_400));
                }
            });
        });

        let viewport = ui.available_rect_before_wrap();
        let Some(layout) = self.layout.layout(&self.compositor, &self.store) else {
            // The preview is unmounted while the drop zone shows.
            self.fit.detach();
            self.show_drop_zone(ui, viewport);
            return;
        };

        self.fit.attach();
        if self.fit.observe(Size::new(viewport.width(), viewport.height()), layout.size) {
            ui.ctx().request_repaint();
        }
        let scale = self.fit.scale();
        let rect = egui::Rect::from_center_size(
            viewport.center(),
            egui::vec2(layout.size.width * scale, layout.size.height * scale),
        );

        let revision = self.store.revision();
        let ctx = ui.ctx().clone();
        if let Some(texture) = self
            .preview
            .texture(&ctx, &self.compositor, self.store.state(), revision)
        {
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        ui.allocate_rect(viewport, egui::Sense::hover());
    }

    fn show_drop_zone(&mut self, ui: &mut egui::Ui, viewport: egui::Rect) {
        let width = (viewport.width() - 32.0).clamp(0.0, DROP_ZONE_MAX_WIDTH);
        let rect = egui::Rect::from_center_size(
            viewport.center(),
            egui::vec2(width, width * 9.0 / 16.0),
        );
        let response = ui.interact(rect, ui.id().with("drop_zone"), egui::Sense::click());
        let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        let painter = ui.painter();
        let border = if response.hovered() || hovering_files {
            ZINC_700
        } else {
            ZINC_800
        };
        painter.rect_stroke(
            rect,
            egui::CornerRadius::same(16),
            egui::Stroke::new(2.0, border),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center() - egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "Click to upload or paste (Ctrl+V)",
            egui::FontId::proportional(15.0),
            ZINC_400,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 16.0),
            egui::Align2::CENTER_CENTER,
            "MOCKUP MODE ACTIVE",
            egui::FontId::monospace(10.0),
            ZINC_600,
        );

        if response.clicked() {
            self.open_upload_dialog();
        }
    }
}
