//! egui front end: control sidebar, live preview stage, and export.

mod app;
mod preview;
mod swatches;

pub use app::{build_compositor, App, StartupArgs, SHARE_URL};
