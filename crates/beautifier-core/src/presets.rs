//! Built-in background presets and the two-stop gradient builder.

use beautifier_config::config::DEFAULT_BACKGROUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub css: &'static str,
}

pub const DEFAULT_BACKGROUNDS: [Preset; 3] = [
    Preset {
        name: "Ocean",
        css: "linear-gradient(45deg, #00d2ff 0%, #3a7bd5 100%)",
    },
    Preset {
        name: "Sunset",
        css: "linear-gradient(45deg, #ee0979 0%, #ff6a00 100%)",
    },
    Preset {
        name: "Emerald",
        css: "linear-gradient(45deg, #10b981 0%, #059669 100%)",
    },
];

pub const COMMUNITY_GRADIENTS: [Preset; 4] = [
    Preset {
        name: "Aurora",
        css: DEFAULT_BACKGROUND,
    },
    Preset {
        name: "Midnight",
        css: "radial-gradient(at 0% 100%, hsla(339,49%,30%,1) 0, transparent 50%), radial-gradient(at 100% 100%, hsla(221,45%,32%,1) 0, transparent 50%), #09090b",
    },
    Preset {
        name: "Hyper",
        css: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    },
    Preset {
        name: "Vapor",
        css: "linear-gradient(45deg, #ff9a9e 0%, #fad0c4 99%, #fad0c4 100%)",
    },
];

pub fn all_presets() -> impl Iterator<Item = Preset> {
    DEFAULT_BACKGROUNDS
        .into_iter()
        .chain(COMMUNITY_GRADIENTS)
}

/// Looks up a preset name by its CSS value.
pub fn preset_name(css: &str) -> Option<&'static str> {
    all_presets().find(|p| p.css == css).map(|p| p.name)
}

/// Angle range of the builder's slider, in degrees.
pub const ANGLE_RANGE: (u32, u32) = (0, 360);

/// Two-color linear gradient builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientBuilder {
    pub start: String,
    pub end: String,
    pub angle: u32,
}

impl Default for GradientBuilder {
    fn default() -> Self {
        Self {
            start: "#3b82f6".to_string(),
            end: "#8b5cf6".to_string(),
            angle: 45,
        }
    }
}

impl GradientBuilder {
    /// CSS expression of the gradient being built.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            self.angle.min(ANGLE_RANGE.1),
            self.start,
            self.end
        )
    }
}
