//! PNG export of the composite at a fixed supersampling factor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageFormat;

use crate::render::Compositor;
use crate::state::{Mode, ViewState};

/// Export is always rendered at this pixel ratio, regardless of the preview's
/// fit scale.
pub const EXPORT_PIXEL_RATIO: f32 = 3.0;

/// `beautified-{mode}-{millis}.png`
pub fn export_file_name(mode: Mode, millis: i64) -> String {
    format!("beautified-{}-{millis}.png", mode.id())
}

/// Renders `state` and writes it into `dir`, named after the current time.
/// Returns the written path.
pub fn export_png(compositor: &Compositor, state: &ViewState, dir: &Path) -> Result<PathBuf> {
    let millis = chrono::Utc::now().timestamp_millis();
    let path = dir.join(export_file_name(state.mode, millis));
    export_png_to(compositor, state, &path)?;
    Ok(path)
}

/// Renders `state` at [`EXPORT_PIXEL_RATIO`] and writes it to `path`.
pub fn export_png_to(compositor: &Compositor, state: &ViewState, path: &Path) -> Result<()> {
    let image = compositor
        .render(state, EXPORT_PIXEL_RATIO)
        .context("Failed to render composite")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export dir: {}", parent.display()))?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(
        "Exported {}x{} PNG to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use beautifier_config::SnippetTheme;

    use super::*;
    use crate::font::test_font;
    use crate::highlight::Tokenizer;
    use crate::ingest::{png_bytes, UploadedImage};
    use crate::render::{RenderAssets, RenderError};

    fn compositor() -> Compositor {
        Compositor::new(RenderAssets {
            tokenizer: Arc::new(Tokenizer::new()),
            font: Some(Arc::new(test_font())),
            theme: SnippetTheme::default(),
        })
    }

    #[test]
    fn file_name_embeds_mode_and_time() {
        assert_eq!(
            export_file_name(Mode::Mockup, 1_700_000_000_123),
            "beautified-image-1700000000123.png"
        );
        assert_eq!(export_file_name(Mode::Snippet, 5), "beautified-code-5.png");
    }

    #[test]
    fn export_writes_png_at_three_x() {
        let dir = tempfile::tempdir().unwrap();
        let image = UploadedImage::from_bytes(&png_bytes(40, 30, [10, 20, 30, 255])).unwrap();
        let state = ViewState {
            image: Some(Arc::new(image)),
            ..ViewState::default()
        };
        let path = export_png(&compositor(), &state, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("beautified-image-"));
        assert!(name.ends_with(".png"));

        assert_eq!(image::image_dimensions(&path).unwrap(), (900, 450));
    }

    #[test]
    fn export_without_content_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export_png(&compositor(), &ViewState::default(), dir.path()).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let state = ViewState {
            mode: Mode::Snippet,
            ..ViewState::default()
        };
        let path = export_png(&compositor(), &state, &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn tall_snippet_exports_at_three_x() {
        let dir = tempfile::tempdir().unwrap();
        let code: String = (0..250).map(|i| format!("let x{i} = {i};\n")).collect();
        let state = ViewState {
            mode: Mode::Snippet,
            code,
            ..ViewState::default()
        };
        let c = compositor();
        let layout = c.layout(&state).unwrap();
        assert!(layout.size.height * EXPORT_PIXEL_RATIO > 16_384.0);

        let path = export_png(&c, &state, dir.path()).unwrap();
        let (w, h) = image::image_dimensions(&path).unwrap();
        assert_eq!(w, (layout.size.width * EXPORT_PIXEL_RATIO).ceil() as u32);
        assert_eq!(h, (layout.size.height * EXPORT_PIXEL_RATIO).ceil() as u32);
    }

    #[test]
    fn render_failure_names_the_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_png(&compositor(), &ViewState::default(), dir.path()).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            RenderError::NothingToRender.to_string()
        );
    }
}
