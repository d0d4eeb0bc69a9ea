//! Natural (1x) layout of the composite, in logical pixels.

use crate::geometry::{Rect, Size};
use crate::state::{Mode, ViewState};

pub const MOCKUP_MAX_WIDTH: f32 = 1200.0;
pub const MOCKUP_MIN_WIDTH: f32 = 300.0;
pub const SNIPPET_MIN_WIDTH: f32 = 600.0;

pub const HEADER_HEIGHT: f32 = 48.0;
pub const BODY_PADDING: f32 = 40.0;
pub const CARD_BORDER: f32 = 1.0;
pub const CODE_FONT_SIZE: f32 = 15.0;
pub const LINE_HEIGHT: f32 = CODE_FONT_SIZE * 1.625;
pub const TAB_WIDTH: usize = 8;

pub const PLACEHOLDER_CODE: &str = "// Start typing your code...";

/// Cell width used when no font is available.
pub fn fallback_cell_width() -> f32 {
    CODE_FONT_SIZE * 0.6
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLayout {
    /// Size of the whole composite (background area).
    pub size: Size,
    /// The screenshot or the code window, centered in the composite.
    pub content: Rect,
}

/// Lines of the snippet with tabs expanded. Empty code shows a placeholder.
pub fn snippet_lines(code: &str) -> Vec<String> {
    let code = if code.is_empty() { PLACEHOLDER_CODE } else { code };
    let mut lines: Vec<String> = code.lines().map(expand_tabs).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let spaces = TAB_WIDTH - column % TAB_WIDTH;
            out.push_str(&" ".repeat(spaces));
            column += spaces;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Size the image is displayed at: natural size, scaled down to
/// [`MOCKUP_MAX_WIDTH`].
pub fn mockup_image_size(width: u32, height: u32) -> Size {
    let (w, h) = (width as f32, height as f32);
    if w > MOCKUP_MAX_WIDTH {
        Size::new(MOCKUP_MAX_WIDTH, h * MOCKUP_MAX_WIDTH / w)
    } else {
        Size::new(w, h)
    }
}

/// Size of the code window for `lines` at `cell_width`.
pub fn snippet_card_size(lines: &[String], cell_width: f32) -> Size {
    let columns = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let text_width = columns as f32 * cell_width;
    let text_height = lines.len().max(1) as f32 * LINE_HEIGHT;
    Size::new(
        text_width + BODY_PADDING * 2.0 + CARD_BORDER * 2.0,
        HEADER_HEIGHT + text_height + BODY_PADDING * 2.0 + CARD_BORDER * 2.0,
    )
}

/// Computes the composite layout. Returns `None` in mockup mode with no image.
pub fn compute(state: &ViewState, cell_width: f32) -> Option<CompositeLayout> {
    let padding = state.padding as f32;
    let (content, min_width, stretch) = match state.mode {
        Mode::Mockup => {
            let image = state.image.as_ref()?;
            (
                mockup_image_size(image.width(), image.height()),
                MOCKUP_MIN_WIDTH,
                false,
            )
        }
        Mode::Snippet => (
            snippet_card_size(&snippet_lines(&state.code), cell_width),
            SNIPPET_MIN_WIDTH,
            true,
        ),
    };

    let mut width = (content.width + padding * 2.0).max(min_width);
    let mut height = content.height + padding * 2.0;
    // The code window fills the container's inner width.
    let content = if stretch {
        Size::new(width - padding * 2.0, content.height)
    } else {
        content
    };

    if let Some(ratio) = state.aspect_ratio.ratio() {
        if width / height < ratio {
            width = height * ratio;
        } else {
            height = width / ratio;
        }
    }

    Some(CompositeLayout {
        size: Size::new(width, height),
        content: Rect::new(
            (width - content.width) / 2.0,
            (height - content.height) / 2.0,
            content.width,
            content.height,
        ),
    })
}
