/// Integration tests for the beautifier App using egui_kittest.
///
/// These tests exercise the full `eframe::App::update` loop through AccessKit queries.
mod common;

use std::time::{Duration, Instant};

use egui::{Key, Modifiers};
use egui_kittest::kittest::Queryable;

use beautifier_config::config::DEFAULT_BACKGROUND;
use beautifier_config::{GradientStore, MAX_CUSTOM_GRADIENTS};
use beautifier_core::{Action, AspectRatio, Mode};

use common::{create_harness, create_harness_with, write_png};

// ── A. App Initialization ──────────────────────────────────────────────────

#[test]
fn test_app_initial_state() {
    let (harness, _dir) = create_harness();
    let app = harness.state();
    let state = app.state();
    assert_eq!(state.mode, Mode::Mockup);
    assert_eq!(state.padding, 60);
    assert_eq!(state.rounding, 12);
    assert_eq!(state.shadow, 40);
    assert_eq!(state.background, DEFAULT_BACKGROUND);
    assert_eq!(state.aspect_ratio, AspectRatio::Auto);
    assert!(state.image.is_none());
    assert!(app.gradients.is_empty());
    assert!(!app.builder_open);
}

#[test]
fn test_startup_actions_are_applied() {
    let (harness, _dir) = create_harness_with(vec![
        Action::SetMode(Mode::Snippet),
        Action::SetCode("print('hi')".to_string()),
        Action::SetLanguage("python".to_string()),
        Action::SetPadding(999),
    ]);
    let state = harness.state().state();
    assert_eq!(state.mode, Mode::Snippet);
    assert_eq!(state.code, "print('hi')");
    assert_eq!(state.language, "python");
    assert_eq!(state.padding, 150);
}

// ── B. Mode & Fit ──────────────────────────────────────────────────────────

#[test]
fn test_empty_mockup_shows_no_fit_label() {
    let (mut harness, _dir) = create_harness();
    harness.run();
    assert!(!harness.state().fit.is_attached());
    assert!(harness.query_by_label_contains("% Fit").is_none());
}

#[test]
fn test_switch_to_code_mode() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Code").click();
    harness.run();
    assert_eq!(harness.state().state().mode, Mode::Snippet);
    harness.get_by_label("Snippet Content");
}

#[test]
fn test_snippet_is_scaled_to_fit() {
    let (mut harness, _dir) = create_harness_with(vec![Action::SetMode(Mode::Snippet)]);
    harness.run();

    let app = harness.state();
    assert!(app.fit.is_attached());
    let scale = app.fit.scale();
    assert!(scale > 0.0 && scale <= 1.0);
    let label = app.fit.percent_label();
    harness.get_by_label(&label);
}

#[test]
fn test_fit_recomputes_when_padding_grows() {
    let (mut harness, _dir) = create_harness_with(vec![Action::SetMode(Mode::Snippet)]);
    harness.run();
    let before = harness.state().fit.scale();

    harness.state_mut().dispatch(Action::SetPadding(150));
    harness.run();
    let after = harness.state().fit.scale();
    assert!(after < before, "{after} should be below {before}");
}

// ── C. Image Ingestion ─────────────────────────────────────────────────────

#[test]
fn test_load_image_file_shows_preview() {
    let (mut harness, dir) = create_harness();
    let path = write_png(dir.path(), "shot.png", 400, 300);

    assert!(harness.state_mut().load_image_file(&path));
    harness.run();

    let app = harness.state();
    let image = app.state().image.as_ref().unwrap();
    assert_eq!((image.width(), image.height()), (400, 300));
    assert!(app.fit.is_attached());
    harness.get_by_label("400 x 300 px");
}

#[test]
fn test_clear_image_button() {
    let (mut harness, dir) = create_harness();
    let path = write_png(dir.path(), "shot.png", 64, 64);
    harness.state_mut().load_image_file(&path);
    harness.run();

    harness.get_by_label("Clear Image").click();
    harness.run();

    assert!(harness.state().state().image.is_none());
    assert!(!harness.state().fit.is_attached());
}

#[test]
fn test_undecodable_bytes_are_ignored() {
    let (mut harness, _dir) = create_harness();
    assert!(!harness.state_mut().load_image_bytes(b"definitely not an image"));
    assert!(harness.state().state().image.is_none());
}

#[test]
fn test_paste_in_code_mode_keeps_state() {
    let (mut harness, _dir) = create_harness_with(vec![Action::SetMode(Mode::Snippet)]);
    harness.run();
    let revision = harness.state().store.revision();

    let ctrl = Modifiers {
        ctrl: true,
        ..Default::default()
    };
    harness.key_press_modifiers(ctrl, Key::V);
    harness.run();

    assert_eq!(harness.state().store.revision(), revision);
    assert!(harness.state().state().image.is_none());
}

// ── D. Controls ────────────────────────────────────────────────────────────

#[test]
fn test_dispatch_clamps_sliders() {
    let (mut harness, _dir) = create_harness();
    let app = harness.state_mut();
    app.dispatch(Action::SetRounding(80));
    app.dispatch(Action::SetShadow(1000));
    assert_eq!(app.state().rounding, 50);
    assert_eq!(app.state().shadow, 100);
}

#[test]
fn test_redundant_dispatch_does_not_bump_revision() {
    let (mut harness, _dir) = create_harness();
    let app = harness.state_mut();
    let revision = app.store.revision();
    assert!(!app.dispatch(Action::SetPadding(60)));
    assert_eq!(app.store.revision(), revision);
}

// ── E. Gradient Library ────────────────────────────────────────────────────

#[test]
fn test_add_gradient_persists_and_selects() {
    let (mut harness, dir) = create_harness();
    let css = "linear-gradient(90deg, #000000 0%, #ffffff 100%)".to_string();
    harness.state_mut().add_custom_gradient(css.clone());

    let app = harness.state();
    assert_eq!(app.gradients.entries(), [css.clone()]);
    assert_eq!(app.state().background, css);

    let stored = GradientStore::new(&dir.path().join("data")).load();
    assert_eq!(stored.entries(), [css]);
}

#[test]
fn test_active_background_is_named() {
    let (mut harness, _dir) = create_harness();
    harness.run();
    harness.get_by_label("Background: Aurora");

    harness
        .state_mut()
        .add_custom_gradient("linear-gradient(30deg, #123456 0%, #654321 100%)".to_string());
    harness.run();
    harness.get_by_label("Background: Custom");
    assert!(harness.query_by_label("Background: Aurora").is_none());
}

#[test]
fn test_library_is_capped() {
    let (mut harness, _dir) = create_harness();
    for i in 0..MAX_CUSTOM_GRADIENTS + 3 {
        harness
            .state_mut()
            .add_custom_gradient(format!("linear-gradient({i}deg, #000 0%, #fff 100%)"));
    }
    let entries = harness.state().gradients.entries();
    assert_eq!(entries.len(), MAX_CUSTOM_GRADIENTS);
    assert!(entries[0].starts_with("linear-gradient(14deg"));
}

#[test]
fn test_delete_gradient_keeps_active_background() {
    let (mut harness, dir) = create_harness();
    let css = "linear-gradient(10deg, #111111 0%, #222222 100%)".to_string();
    harness.state_mut().add_custom_gradient(css.clone());

    harness.state_mut().delete_custom_gradient(0);
    harness.state_mut().delete_custom_gradient(7);

    let app = harness.state();
    assert!(app.gradients.is_empty());
    assert_eq!(app.state().background, css);
    assert!(GradientStore::new(&dir.path().join("data")).load().is_empty());
}

#[test]
fn test_gradient_builder_saves_to_library() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Create Gradient").click();
    harness.run();
    assert!(harness.state().builder_open);
    harness.get_by_label("Gradient Builder");

    harness.get_by_label("Save to Library").click();
    harness.run();

    let app = harness.state();
    assert!(!app.builder_open);
    assert_eq!(
        app.gradients.entries(),
        ["linear-gradient(45deg, #3b82f6 0%, #8b5cf6 100%)".to_string()]
    );
    assert!(harness.query_by_label("Gradient Builder").is_none());
}

// ── F. Share ───────────────────────────────────────────────────────────────

#[test]
fn test_share_shows_confirmation() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Share").click();
    harness.run();

    assert!(harness.state().share_link_copied());
    harness.get_by_label("Link Copied!");
}

// ── G. Export ──────────────────────────────────────────────────────────────

/// Steps the harness until the pending export finishes.
fn wait_for_export(harness: &mut egui_kittest::Harness<'static, beautifier_ui::App>) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while harness.state().pending_exports > 0 {
        assert!(Instant::now() < deadline, "export did not finish");
        std::thread::sleep(Duration::from_millis(20));
        harness.step();
    }
}

#[test]
fn test_ctrl_s_exports_png() {
    let (mut harness, dir) = create_harness_with(vec![Action::SetMode(Mode::Snippet)]);
    let out = dir.path().join("exports");
    harness.state_mut().config.export_folder = out.to_string_lossy().into_owned();
    harness.run();

    let ctrl = Modifiers {
        ctrl: true,
        ..Default::default()
    };
    harness.key_press_modifiers(ctrl, Key::S);
    harness.run();
    wait_for_export(&mut harness);

    let path = harness.state().last_export.clone().unwrap();
    assert_eq!(path.parent().unwrap(), out);
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("beautified-code-"));
    let (w, h) = image::image_dimensions(&path).unwrap();
    assert!(w >= 1800, "export should be 3x, got {w}x{h}");
}

#[test]
fn test_export_image_at_three_x() {
    let (mut harness, dir) = create_harness();
    let png = write_png(dir.path(), "shot.png", 100, 50);
    harness.state_mut().load_image_file(&png);
    harness.state_mut().dispatch(Action::SetPadding(0));
    harness.state_mut().start_export_to(dir.path().join("out"));
    wait_for_export(&mut harness);

    let path = harness.state().last_export.clone().unwrap();
    // 100x50 sits in the 300px minimum-width container.
    assert_eq!(image::image_dimensions(&path).unwrap(), (900, 150));
}

#[test]
fn test_export_without_content_is_skipped() {
    let (mut harness, dir) = create_harness();
    harness.state_mut().start_export_to(dir.path().join("out"));
    assert_eq!(harness.state().pending_exports, 0);
    assert!(!dir.path().join("out").exists());
}
