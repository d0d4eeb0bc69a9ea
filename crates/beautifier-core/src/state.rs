//! View state and its reducer.
//!
//! `ViewState` is an immutable value owned by a [`Store`]. Views never mutate
//! it directly: they dispatch an [`Action`], and [`reduce`] produces the next
//! state.

use std::sync::Arc;

use beautifier_config::config::{PADDING_RANGE, ROUNDING_RANGE, SHADOW_RANGE};
use beautifier_config::AppConfig;

use crate::ingest::UploadedImage;

pub const DEFAULT_CODE: &str = "function HelloWorld() {\n  console.log(\"Hello, Beautifier!\");\n}";

/// What is composed onto the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// An uploaded screenshot.
    #[default]
    Mockup,
    /// Code text rendered in a stylized window.
    Snippet,
}

impl Mode {
    /// Identifier used in export file names.
    pub fn id(self) -> &'static str {
        match self {
            Mode::Mockup => "image",
            Mode::Snippet => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Mockup => "Mockup",
            Mode::Snippet => "Code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    #[default]
    Auto,
    Wide,
    Classic,
    Square,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Auto,
        AspectRatio::Wide,
        AspectRatio::Classic,
        AspectRatio::Square,
        AspectRatio::Portrait,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AspectRatio::Auto => "auto",
            AspectRatio::Wide => "16/9",
            AspectRatio::Classic => "4/3",
            AspectRatio::Square => "1/1",
            AspectRatio::Portrait => "4/5",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Auto => "Auto",
            AspectRatio::Wide => "16:9",
            AspectRatio::Classic => "4:3",
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "4:5",
        }
    }

    /// Width / height, or `None` for `Auto`.
    pub fn ratio(self) -> Option<f32> {
        match self {
            AspectRatio::Auto => None,
            AspectRatio::Wide => Some(16.0 / 9.0),
            AspectRatio::Classic => Some(4.0 / 3.0),
            AspectRatio::Square => Some(1.0),
            AspectRatio::Portrait => Some(4.0 / 5.0),
        }
    }
}

/// Every control of the composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    pub padding: u32,
    pub rounding: u32,
    pub shadow: u32,
    /// CSS background expression (gradient layers or a color).
    pub background: String,
    pub aspect_ratio: AspectRatio,
    pub code: String,
    pub language: String,
    pub image: Option<Arc<UploadedImage>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ViewState {
    /// Initial state seeded from the configured defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            mode: Mode::Mockup,
            padding: config.default_padding.clamp(PADDING_RANGE.0, PADDING_RANGE.1),
            rounding: config
                .default_rounding
                .clamp(ROUNDING_RANGE.0, ROUNDING_RANGE.1),
            shadow: config.default_shadow.clamp(SHADOW_RANGE.0, SHADOW_RANGE.1),
            background: config.default_background.clone(),
            aspect_ratio: AspectRatio::from_id(&config.default_aspect_ratio).unwrap_or_default(),
            code: DEFAULT_CODE.to_string(),
            language: config.default_language.clone(),
            image: None,
        }
    }

    /// True when there is something to render for the current mode.
    pub fn has_content(&self) -> bool {
        match self.mode {
            Mode::Mockup => self.image.is_some(),
            Mode::Snippet => true,
        }
    }
}

/// A state transition requested by a view.
#[derive(Debug, Clone)]
pub enum Action {
    SetMode(Mode),
    SetPadding(u32),
    SetRounding(u32),
    SetShadow(u32),
    SetBackground(String),
    SetAspectRatio(AspectRatio),
    SetCode(String),
    SetLanguage(String),
    SetImage(Arc<UploadedImage>),
    ClearImage,
}

impl Action {
    /// Whether the action can change the natural size of the composite.
    /// Rounding, shadow and background only repaint.
    pub fn affects_layout(&self) -> bool {
        !matches!(
            self,
            Action::SetRounding(_) | Action::SetShadow(_) | Action::SetBackground(_)
        )
    }
}

/// Pure state transition. Numeric controls are clamped to their slider ranges.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::SetMode(mode) => next.mode = mode,
        Action::SetPadding(v) => next.padding = v.clamp(PADDING_RANGE.0, PADDING_RANGE.1),
        Action::SetRounding(v) => next.rounding = v.clamp(ROUNDING_RANGE.0, ROUNDING_RANGE.1),
        Action::SetShadow(v) => next.shadow = v.clamp(SHADOW_RANGE.0, SHADOW_RANGE.1),
        Action::SetBackground(css) => next.background = css,
        Action::SetAspectRatio(ratio) => next.aspect_ratio = ratio,
        Action::SetCode(code) => next.code = code,
        Action::SetLanguage(language) => next.language = language,
        Action::SetImage(image) => next.image = Some(image),
        Action::ClearImage => next.image = None,
    }
    next
}

/// Owns the current [`ViewState`] and applies dispatched actions.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: ViewState,
    revision: u64,
    layout_revision: u64,
}

impl Store {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            revision: 0,
            layout_revision: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Bumped on every effective state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumped only when a change can affect the composite's natural size.
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    /// Applies `action`. Returns true if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let affects_layout = action.affects_layout();
        let next = reduce(&self.state, action);
        if next == self.state {
            return false;
        }
        tracing::debug!("state revision {}", self.revision + 1);
        self.state = next;
        self.revision += 1;
        if affects_layout {
            self.layout_revision += 1;
        }
        true
    }
}
