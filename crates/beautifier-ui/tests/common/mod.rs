use std::path::{Path, PathBuf};

use beautifier_core::Action;
use beautifier_ui::{App, StartupArgs};
use egui_kittest::Harness;
use tempfile::TempDir;

/// Startup args whose config and gradient library live in `dir`.
pub fn isolated_args(dir: &Path) -> StartupArgs {
    StartupArgs {
        actions: Vec::new(),
        config_path: Some(dir.join("beautifier.json")),
        data_dir: Some(dir.join("data")),
    }
}

/// Creates a standard test harness with the app at 1024x768. The returned
/// temp dir holds the app's config and data and must outlive the harness.
pub fn create_harness() -> (Harness<'static, App>, TempDir) {
    create_harness_with(Vec::new())
}

/// Like [`create_harness`], applying `actions` to the initial state.
pub fn create_harness_with(actions: Vec<Action>) -> (Harness<'static, App>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut args = isolated_args(dir.path());
    args.actions = actions;
    let harness = Harness::builder()
        .with_size(egui::Vec2::new(1024.0, 768.0))
        .build_eframe(move |cc| App::new(cc, args.clone()));
    (harness, dir)
}

/// Writes a solid-color PNG of the given size into `dir`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(width, height, image::Rgba([40, 90, 200, 255]))
        .save(&path)
        .unwrap();
    path
}
