pub mod color;
pub mod config;
pub mod gradients;
pub mod theme;

pub use color::HexColor;
pub use config::AppConfig;
pub use gradients::{GradientLibrary, GradientStore, MAX_CUSTOM_GRADIENTS};
pub use theme::{SnippetTheme, TokenColors, TokenStyle};
