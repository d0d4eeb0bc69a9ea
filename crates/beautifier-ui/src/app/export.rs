//! Background PNG export.
//!
//! Each export renders an owned snapshot of the state on its own thread and
//! reports back over a channel; the most recently finished export wins.

use std::path::PathBuf;

use beautifier_core::export::export_png;

use super::App;

impl App {
    /// Exports the current state into the configured export folder.
    pub fn start_export(&mut self) {
        let dir = self.config.resolve_export_folder();
        self.start_export_to(dir);
    }

    /// Exports the current state into `dir` on a background thread.
    pub fn start_export_to(&mut self, dir: PathBuf) {
        let state = self.state().clone();
        if !state.has_content() {
            tracing::info!("Nothing to export");
            return;
        }

        let compositor = self.compositor.clone();
        let tx = self.export_tx.clone();
        let reveal = self.config.reveal_after_export;
        let spawned = std::thread::Builder::new()
            .name("export".to_string())
            .spawn(move || {
                let result = export_png(&compositor, &state, &dir);
                if reveal {
                    if let Ok(path) = &result {
                        if let Err(e) = opener::reveal(path) {
                            tracing::warn!("Failed to reveal '{}': {e}", path.display());
                        }
                    }
                }
                // The app may have shut down; nobody is left to tell.
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => self.pending_exports += 1,
            Err(e) => tracing::error!("Failed to start export thread: {e}"),
        }
    }

    /// Collects finished exports. Failures are only logged.
    pub(crate) fn poll_exports(&mut self) {
        while let Ok(result) = self.export_rx.try_recv() {
            self.pending_exports = self.pending_exports.saturating_sub(1);
            match result {
                Ok(path) => self.last_export = Some(path),
                Err(e) => tracing::error!("Export failed: {e:#}"),
            }
        }
    }
}
