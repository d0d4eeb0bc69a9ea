//! Rendering core of the beautifier: view state, fit scaling, syntax
//! tokenization, background parsing, layout, and software compositing.

pub mod background;
pub mod canvas;
pub mod export;
pub mod fit;
pub mod font;
pub mod geometry;
pub mod highlight;
pub mod ingest;
pub mod layout;
pub mod presets;
pub mod render;
pub mod state;

pub use fit::FitScaler;
pub use geometry::{Rect, Size};
pub use highlight::{TokenKind, TokenNode, Tokenizer};
pub use ingest::UploadedImage;
pub use render::{Compositor, RenderAssets, RenderError};
pub use state::{Action, AspectRatio, Mode, Store, ViewState};
