//! Command line: startup overrides for the window, and headless export.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use beautifier_config::AppConfig;
use beautifier_core::export::export_png;
use beautifier_core::{Action, AspectRatio, Mode, Store, UploadedImage, ViewState};

/// Turns screenshots and code snippets into polished images.
#[derive(Parser, Debug)]
#[command(name = "beautifier", version, about)]
pub struct Cli {
    /// Screenshot to load.
    #[arg(long, value_name = "FILE", conflicts_with = "code_file")]
    pub image: Option<PathBuf>,

    /// Source file to show as a code snippet.
    #[arg(long = "code-file", value_name = "FILE")]
    pub code_file: Option<PathBuf>,

    /// Snippet language (javascript, typescript, css, html, python, ...).
    /// Defaults to the code file's extension.
    #[arg(long)]
    pub language: Option<String>,

    /// Write a PNG into this directory and exit without opening a window.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Padding around the content, in px.
    #[arg(long)]
    pub padding: Option<u32>,

    /// Corner rounding of the content, in px.
    #[arg(long)]
    pub rounding: Option<u32>,

    /// Drop shadow depth, in px.
    #[arg(long)]
    pub shadow: Option<u32>,

    /// Background as a CSS color or gradient expression.
    #[arg(long)]
    pub background: Option<String>,

    /// Canvas aspect ratio: auto, 16/9, 4/3, 1/1 or 4/5.
    #[arg(long, value_parser = parse_aspect)]
    pub aspect: Option<AspectRatio>,

    /// Config file to use instead of beautifier.json next to the executable.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Accepts ratio ids (`16/9`) and labels (`16:9`).
fn parse_aspect(s: &str) -> Result<AspectRatio, String> {
    AspectRatio::from_id(&s.trim().to_ascii_lowercase().replace(':', "/"))
        .ok_or_else(|| format!("unknown aspect ratio '{s}' (expected auto, 16/9, 4/3, 1/1 or 4/5)"))
}

impl Cli {
    /// Actions that bring the default state in line with the arguments.
    pub fn startup_actions(&self) -> Result<Vec<Action>> {
        let mut actions = Vec::new();

        if let Some(path) = &self.image {
            let image = UploadedImage::from_path(path)?;
            actions.push(Action::SetMode(Mode::Mockup));
            actions.push(Action::SetImage(Arc::new(image)));
        }

        if let Some(path) = &self.code_file {
            let code = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            actions.push(Action::SetMode(Mode::Snippet));
            actions.push(Action::SetCode(code));
            if self.language.is_none() {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    actions.push(Action::SetLanguage(ext.to_ascii_lowercase()));
                }
            }
        }

        if let Some(language) = &self.language {
            actions.push(Action::SetLanguage(language.clone()));
        }
        if let Some(v) = self.padding {
            actions.push(Action::SetPadding(v));
        }
        if let Some(v) = self.rounding {
            actions.push(Action::SetRounding(v));
        }
        if let Some(v) = self.shadow {
            actions.push(Action::SetShadow(v));
        }
        if let Some(css) = &self.background {
            actions.push(Action::SetBackground(css.clone()));
        }
        if let Some(ratio) = self.aspect {
            actions.push(Action::SetAspectRatio(ratio));
        }

        Ok(actions)
    }
}

/// Renders the state described by the arguments into `dir` and returns the
/// written path.
pub fn export_headless(cli: &Cli, dir: &Path, actions: Vec<Action>) -> Result<PathBuf> {
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path);

    let mut store = Store::new(ViewState::from_config(&config));
    for action in actions {
        store.dispatch(action);
    }
    if !store.state().has_content() {
        bail!("Nothing to export: pass --image or --code-file");
    }

    let compositor = beautifier_ui::build_compositor(&config);
    export_png(&compositor, store.state(), dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("beautifier").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn aspect_accepts_ids_and_labels() {
        assert_eq!(parse(&["--aspect", "16/9"]).aspect, Some(AspectRatio::Wide));
        assert_eq!(parse(&["--aspect", "4:5"]).aspect, Some(AspectRatio::Portrait));
        assert!(Cli::try_parse_from(["beautifier", "--aspect", "2/1"]).is_err());
    }

    #[test]
    fn image_and_code_file_conflict() {
        assert!(
            Cli::try_parse_from(["beautifier", "--image", "a.png", "--code-file", "b.py"]).is_err()
        );
    }

    #[test]
    fn code_file_sets_language_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.py");
        std::fs::write(&path, "print('hi')\n").unwrap();

        let cli = parse(&["--code-file", path.to_str().unwrap(), "--padding", "20"]);
        let mut store = Store::default();
        for action in cli.startup_actions().unwrap() {
            store.dispatch(action);
        }
        assert_eq!(store.state().mode, Mode::Snippet);
        assert_eq!(store.state().language, "py");
        assert_eq!(store.state().padding, 20);
    }

    #[test]
    fn explicit_language_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.txt");
        std::fs::write(&path, "a { color: red }").unwrap();

        let cli = parse(&["--code-file", path.to_str().unwrap(), "--language", "css"]);
        let actions = cli.startup_actions().unwrap();
        assert!(matches!(actions.last(), Some(Action::SetLanguage(l)) if l == "css"));
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::SetLanguage(l) if l == "txt")));
    }

    #[test]
    fn missing_image_is_an_error() {
        let cli = parse(&["--image", "/definitely/missing.png"]);
        assert!(cli.startup_actions().is_err());
    }

    #[test]
    fn headless_export_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("shot.png");
        image::RgbaImage::from_pixel(200, 100, image::Rgba([1, 2, 3, 255]))
            .save(&png)
            .unwrap();
        let config = dir.path().join("beautifier.json");
        let out = dir.path().join("out");

        let cli = parse(&[
            "--image",
            png.to_str().unwrap(),
            "--padding",
            "50",
            "--config",
            config.to_str().unwrap(),
        ]);
        let path = export_headless(&cli, &out, cli.startup_actions().unwrap()).unwrap();
        assert!(path.starts_with(&out));
        assert_eq!(image::image_dimensions(&path).unwrap(), (900, 600));
    }

    #[test]
    fn headless_export_without_content_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("beautifier.json");
        let cli = parse(&["--config", config.to_str().unwrap()]);
        assert!(export_headless(&cli, dir.path(), Vec::new()).is_err());
    }
}
