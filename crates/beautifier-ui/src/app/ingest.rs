//! Screenshot ingestion: upload dialog, drag-and-drop, and clipboard paste.
//!
//! Nothing here reports errors to the user; images that fail to decode are
//! logged and ignored.

use std::path::Path;
use std::sync::Arc;

use eframe::egui;

use beautifier_core::ingest::{is_image_path, IMAGE_EXTENSIONS};
use beautifier_core::{Action, Mode, UploadedImage};

use super::App;

impl App {
    /// Opens a file dialog filtered to image files and loads the pick.
    pub(crate) fn open_upload_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Upload Screenshot")
            .add_filter("Images", &IMAGE_EXTENSIONS);
        if let Some(dir) = self.config.resolve_upload_folder() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.update_last_used_folder(&path);
            self.load_image_file(&path);
        }
    }

    /// Loads the image at `path`. Returns false (after logging) on failure.
    pub fn load_image_file(&mut self, path: &Path) -> bool {
        match UploadedImage::from_path(path) {
            Ok(image) => {
                self.set_image(image);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load image '{}': {e:#}", path.display());
                false
            }
        }
    }

    /// Loads encoded image bytes. Returns false (after logging) on failure.
    pub fn load_image_bytes(&mut self, bytes: &[u8]) -> bool {
        match UploadedImage::from_bytes(bytes) {
            Ok(image) => {
                self.set_image(image);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to decode dropped image: {e:#}");
                false
            }
        }
    }

    fn set_image(&mut self, image: UploadedImage) {
        tracing::info!("Loaded {}x{} screenshot", image.width(), image.height());
        self.dispatch(Action::SetImage(Arc::new(image)));
    }

    pub fn clear_image(&mut self) {
        self.dispatch(Action::ClearImage);
    }

    /// Takes the first decodable image among files dropped on the window.
    /// Drops are only accepted in mockup mode.
    pub(crate) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() || self.state().mode != Mode::Mockup {
            return;
        }
        for file in dropped {
            let loaded = if let Some(path) = &file.path {
                is_image_path(path) && self.load_image_file(path)
            } else if let Some(bytes) = &file.bytes {
                self.load_image_bytes(bytes)
            } else {
                false
            };
            if loaded {
                break;
            }
        }
    }

    /// Loads a bitmap from the system clipboard (mockup mode only).
    pub(crate) fn paste_image(&mut self) {
        if self.state().mode != Mode::Mockup {
            return;
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::warn!("Clipboard unavailable, cannot paste image");
            return;
        };
        let data = match clipboard.get_image() {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("No image on the clipboard: {e}");
                return;
            }
        };
        match UploadedImage::from_rgba(data.width as u32, data.height as u32, data.bytes.into_owned()) {
            Ok(image) => self.set_image(image),
            Err(e) => tracing::warn!("Failed to read clipboard image: {e:#}"),
        }
    }

    /// Remembers the folder of a picked file for the next dialog.
    fn update_last_used_folder(&mut self, file_path: &Path) {
        if self.config.remember_last_folder {
            if let Some(parent) = file_path.parent() {
                self.config.last_used_folder = parent.to_string_lossy().into_owned();
            }
        }
    }
}
