//! Global keyboard shortcuts: Ctrl+V pastes a screenshot, Ctrl+S exports.

use eframe::egui;

use super::App;

impl App {
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        // A focused text edit (the snippet editor) consumes its own pastes.
        let text_focused = ctx.wants_keyboard_input();

        // egui turns Ctrl+V into Event::Paste when the clipboard holds text,
        // so both forms are checked.
        let (paste, export) = ctx.input(|i| {
            let ctrl = i.modifiers.ctrl || i.modifiers.command;
            let mut paste = false;
            let mut export = false;
            for event in &i.events {
                match event {
                    egui::Event::Paste(_) => paste = true,
                    egui::Event::Key {
                        key: egui::Key::V,
                        pressed: true,
                        ..
                    } if ctrl => paste = true,
                    egui::Event::Key {
                        key: egui::Key::S,
                        pressed: true,
                        ..
                    } if ctrl => export = true,
                    _ => {}
                }
            }
            (paste, export)
        });

        if paste && !text_focused {
            self.paste_image();
        }
        if export {
            self.start_export();
        }
    }
}
