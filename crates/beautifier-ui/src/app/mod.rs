//! Top-level application tying together the control sidebar, the preview
//! stage, and export.

mod export;
mod gradients;
mod ingest;
mod settings;
mod share;
mod shortcuts;
mod sidebar;
mod stage;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;

use beautifier_config::gradients::resolve_data_dir;
use beautifier_config::{AppConfig, GradientLibrary, GradientStore};
use beautifier_core::font::CodeFont;
use beautifier_core::presets::GradientBuilder;
use beautifier_core::{Action, Compositor, FitScaler, RenderAssets, Store, Tokenizer, ViewState};

use crate::preview::{LayoutCache, PreviewCache};
use crate::swatches::SwatchCache;

pub use share::SHARE_URL;

/// Width of the control sidebar, in points.
const SIDEBAR_WIDTH: f32 = 360.0;

const PANEL_FILL: Color32 = Color32::from_rgb(24, 24, 27);
const STAGE_FILL: Color32 = Color32::from_rgb(12, 12, 14);
const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Applied in order to the initial state (preloaded image, code,
    /// control overrides).
    pub actions: Vec<Action>,
    /// Overrides the config file location.
    pub config_path: Option<PathBuf>,
    /// Overrides the directory holding the gradient library.
    pub data_dir: Option<PathBuf>,
}

/// Result sent back by an export thread.
type ExportOutcome = anyhow::Result<PathBuf>;

/// The main application state.
pub struct App {
    pub store: Store,
    pub gradients: GradientLibrary,
    gradient_store: GradientStore,
    pub builder: GradientBuilder,
    pub builder_open: bool,
    pub fit: FitScaler,
    compositor: Compositor,
    preview: PreviewCache,
    layout: LayoutCache,
    swatches: SwatchCache,
    pub config: AppConfig,
    config_path: PathBuf,
    clipboard: Option<arboard::Clipboard>,
    share_flash: Option<Instant>,
    export_tx: Sender<ExportOutcome>,
    export_rx: Receiver<ExportOutcome>,
    pub pending_exports: usize,
    pub last_export: Option<PathBuf>,
    last_window_title: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args.config_path.unwrap_or_else(AppConfig::config_path);
        let config = AppConfig::load_or_create(&config_path);

        let data_dir = args.data_dir.unwrap_or_else(resolve_data_dir);
        let gradient_store = GradientStore::new(&data_dir);
        let gradients = gradient_store.load();

        let mut store = Store::new(ViewState::from_config(&config));
        for action in args.actions {
            store.dispatch(action);
        }

        let compositor = build_compositor(&config);

        Self::apply_visuals(&cc.egui_ctx);

        let (export_tx, export_rx) = mpsc::channel();

        Self {
            store,
            gradients,
            gradient_store,
            builder: GradientBuilder::default(),
            builder_open: false,
            fit: FitScaler::new(),
            compositor,
            preview: PreviewCache::new(),
            layout: LayoutCache::new(),
            swatches: SwatchCache::new(),
            config,
            config_path,
            clipboard: arboard::Clipboard::new().ok(),
            share_flash: None,
            export_tx,
            export_rx,
            pending_exports: 0,
            last_export: None,
            last_window_title: String::new(),
        }
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    /// Applies `action` to the store. Returns true if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    /// Dark zinc look used throughout the app.
    fn apply_visuals(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = PANEL_FILL;
        visuals.window_fill = PANEL_FILL;
        visuals.extreme_bg_color = Color32::from_rgb(9, 9, 11);
        visuals.faint_bg_color = Color32::from_rgb(39, 39, 42);
        visuals.selection.bg_fill = ACCENT;
        visuals.hyperlink_color = ACCENT;

        let widget_rounding = egui::CornerRadius::same(6);
        visuals.widgets.noninteractive.corner_radius = widget_rounding;
        visuals.widgets.inactive.corner_radius = widget_rounding;
        visuals.widgets.hovered.corner_radius = widget_rounding;
        visuals.widgets.active.corner_radius = widget_rounding;
        visuals.widgets.open.corner_radius = widget_rounding;

        visuals.window_corner_radius = egui::CornerRadius::same(12);
        visuals.widgets.noninteractive.bg_stroke.color = Color32::from_rgb(39, 39, 42);

        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::Vec2::new(8.0, 8.0);
            style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
            style.spacing.slider_width = SIDEBAR_WIDTH - 120.0;
        });
    }

    /// Updates the OS window title with the active mode.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = format!("{} - Beautifier", self.state().mode.label());
        if title != self.last_window_title {
            self.last_window_title.clone_from(&title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }
}

/// Compositor drawing snippets with egui's bundled monospace font and the
/// configured snippet theme. Shared by the window and headless export.
pub fn build_compositor(config: &AppConfig) -> Compositor {
    Compositor::new(RenderAssets {
        tokenizer: Arc::new(Tokenizer::new()),
        font: load_code_font(),
        theme: config.snippet_theme.clone(),
    })
}

/// Loads the monospace font egui bundles, used for snippet text.
fn load_code_font() -> Option<Arc<CodeFont>> {
    let defs = egui::FontDefinitions::default();
    let Some(data) = defs.font_data.get("Hack") else {
        tracing::warn!("Bundled monospace font missing, snippet text will not render");
        return None;
    };
    match CodeFont::from_bytes(&data.font) {
        Ok(font) => Some(Arc::new(font)),
        Err(e) => {
            tracing::warn!("Failed to load code font: {e:#}");
            None
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_global_shortcuts(ctx);
        self.handle_dropped_files(ctx);
        self.poll_exports();
        self.update_window_title(ctx);

        egui::SidePanel::right("controls")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(PANEL_FILL)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.show_sidebar(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(STAGE_FILL)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.show_stage(ui);
            });

        self.show_gradient_builder(ctx);

        if self.pending_exports > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if let Some(remaining) = self.share_flash_remaining() {
            ctx.request_repaint_after(remaining);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save(&self.config_path) {
            tracing::warn!("Failed to save config on exit: {e}");
        }
    }
}
