//! Software compositor: renders a [`ViewState`] to an RGBA bitmap.
//!
//! Painting order: background layers over the whole composite, the drop
//! shadow of the content, then the content itself (screenshot or code
//! window) clipped to its rounded rect.

use std::fmt;
use std::sync::Arc;

use beautifier_config::{HexColor, SnippetTheme};
use image::imageops::FilterType;
use image::RgbaImage;

use crate::background::{Background, Rgba};
use crate::canvas::{edge_coverage, Canvas};
use crate::font::CodeFont;
use crate::geometry::Rect;
use crate::highlight::{StyledRun, Tokenizer};
use crate::layout::{
    self, CompositeLayout, BODY_PADDING, CARD_BORDER, CODE_FONT_SIZE, HEADER_HEIGHT, LINE_HEIGHT,
    PLACEHOLDER_CODE, TAB_WIDTH,
};
use crate::state::{Mode, ViewState};

/// Largest composite, in device pixels, the compositor will allocate
/// (1 GiB of RGBA).
pub const MAX_PIXELS: u64 = 1 << 28;

const SHADOW_ALPHA: f32 = 0.5;
const TITLE_FONT_SIZE: f32 = 11.0;
const TITLE_SUFFIX: &str = " \u{2014} beautifier";
const HEADER_INSET: f32 = 24.0;
const LIGHT_DIAMETER: f32 = 12.0;
const LIGHT_GAP: f32 = 10.0;
const ITALIC_SKEW: f32 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    NothingToRender,
    InvalidPixelRatio(f32),
    TooLarge { width: u64, height: u64 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NothingToRender => write!(f, "nothing to render"),
            RenderError::InvalidPixelRatio(r) => write!(f, "invalid pixel ratio {r}"),
            RenderError::TooLarge { width, height } => {
                write!(f, "composite too large ({width}x{height} px)")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Shared resources the compositor draws with.
#[derive(Clone)]
pub struct RenderAssets {
    pub tokenizer: Arc<Tokenizer>,
    pub font: Option<Arc<CodeFont>>,
    pub theme: SnippetTheme,
}

#[derive(Clone)]
pub struct Compositor {
    assets: RenderAssets,
}

impl Compositor {
    pub fn new(assets: RenderAssets) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &RenderAssets {
        &self.assets
    }

    fn cell_width(&self) -> f32 {
        self.assets
            .font
            .as_ref()
            .map_or_else(layout::fallback_cell_width, |f| f.cell_width(CODE_FONT_SIZE))
    }

    /// Natural layout of `state`, or `None` when there is nothing to show.
    pub fn layout(&self, state: &ViewState) -> Option<CompositeLayout> {
        layout::compute(state, self.cell_width())
    }

    /// Renders `state` at `pixel_ratio` device pixels per logical pixel.
    pub fn render(&self, state: &ViewState, pixel_ratio: f32) -> Result<RgbaImage, RenderError> {
        let layout = self.layout(state).ok_or(RenderError::NothingToRender)?;
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(RenderError::InvalidPixelRatio(pixel_ratio));
        }
        let (width, height) = device_size(layout.size.width, layout.size.height, pixel_ratio)?;

        let mut canvas = Canvas::new(width, height);
        let background = Background::parse_or_fallback(&state.background);
        let prepared = background.prepare(width as f32, height as f32, pixel_ratio);
        canvas.fill_with(|x, y| prepared.sample(x, y));

        let content = layout.content.scaled(pixel_ratio);
        let radius = state.rounding as f32 * pixel_ratio;
        match state.mode {
            Mode::Mockup => {
                let image = state.image.as_ref().ok_or(RenderError::NothingToRender)?;
                // Snap to whole pixels so the resized bitmap lines up.
                let rect = Rect::new(
                    content.x.round(),
                    content.y.round(),
                    content.width.round().max(1.0),
                    content.height.round().max(1.0),
                );
                draw_shadow(&mut canvas, rect, radius, state.shadow, pixel_ratio);
                draw_image(&mut canvas, image.pixels(), rect, radius);
            }
            Mode::Snippet => {
                draw_shadow(&mut canvas, content, radius, state.shadow, pixel_ratio);
                self.draw_snippet(&mut canvas, state, content, radius, pixel_ratio);
            }
        }
        Ok(canvas.into_image())
    }

    fn draw_snippet(
        &self,
        canvas: &mut Canvas,
        state: &ViewState,
        card: Rect,
        radius: f32,
        ratio: f32,
    ) {
        let theme = &self.assets.theme;
        fill_rounded(canvas, card, radius, color(theme.window_bg));

        let border = CARD_BORDER * ratio;
        let inner = card.expanded(-border);
        let inner_radius = (radius - border).max(0.0);

        // Header and its bottom separator, clipped to the window's corners.
        let header = Rect::new(inner.x, inner.y, inner.width, HEADER_HEIGHT * ratio);
        let separator = Rect::new(header.x, header.bottom() - ratio, header.width, ratio);
        for (rect, fill) in [
            (header, theme.header_bg),
            (separator, theme.header_separator),
        ] {
            let fill = color(fill);
            canvas.blend_region(rect, |x, y| {
                let inside = edge_coverage(inner.rounded_distance(x, y, inner_radius));
                let clip = edge_coverage(rect.rounded_distance(x, y, 0.0));
                Some((fill, inside * clip))
            });
        }

        let border_color = color(theme.window_border);
        canvas.blend_region(card, |x, y| {
            let outer = edge_coverage(card.rounded_distance(x, y, radius));
            let inside = edge_coverage(inner.rounded_distance(x, y, inner_radius));
            Some((border_color, (outer - inside).max(0.0)))
        });

        let (_, header_cy) = header.center();
        for (i, light) in theme.traffic_lights.iter().enumerate() {
            let offset = HEADER_INSET + i as f32 * (LIGHT_DIAMETER + LIGHT_GAP);
            let cx = header.x + (offset + LIGHT_DIAMETER / 2.0) * ratio;
            let r = LIGHT_DIAMETER / 2.0 * ratio;
            fill_circle(canvas, cx, header_cy, r, color(*light));
        }

        let Some(font) = self.assets.font.as_deref() else {
            return;
        };

        let language = if state.language.trim().is_empty() {
            "javascript"
        } else {
            state.language.trim()
        };
        let title = language.to_uppercase();
        let title_size = TITLE_FONT_SIZE * ratio;
        let title_width =
            font.text_width(&title, title_size) + font.text_width(TITLE_SUFFIX, title_size);
        let title_x = header.x + (header.width - title_width) / 2.0;
        let baseline = header.y + font.baseline(title_size, header.height);
        let pen = draw_text(
            canvas,
            font,
            &title,
            title_x,
            baseline,
            title_size,
            color(theme.title_color),
        );
        draw_text(
            canvas,
            font,
            TITLE_SUFFIX,
            pen,
            baseline,
            title_size,
            color(theme.title_suffix_color),
        );

        let code = if state.code.is_empty() {
            PLACEHOLDER_CODE
        } else {
            state.code.as_str()
        };
        let runs = self
            .assets
            .tokenizer
            .highlight(code, language, &theme.tokens);
        let origin_x = inner.x + BODY_PADDING * ratio;
        let origin_y = header.bottom() + BODY_PADDING * ratio;
        draw_code(canvas, font, &runs, origin_x, origin_y, ratio, theme.text_color);
    }
}

/// Device size of a `width` x `height` composite, checked against
/// [`MAX_PIXELS`].
fn device_size(width: f32, height: f32, ratio: f32) -> Result<(u32, u32), RenderError> {
    let w = (width as f64 * ratio as f64).ceil().max(0.0) as u64;
    let h = (height as f64 * ratio as f64).ceil().max(0.0) as u64;
    if w == 0 || h == 0 {
        return Err(RenderError::NothingToRender);
    }
    if w.saturating_mul(h) > MAX_PIXELS || w > u32::MAX as u64 || h > u32::MAX as u64 {
        return Err(RenderError::TooLarge { width: w, height: h });
    }
    Ok((w as u32, h as u32))
}

fn color(c: HexColor) -> [f32; 4] {
    Rgba::from_hex_color(c).premultiplied()
}

fn fill_rounded(canvas: &mut Canvas, rect: Rect, radius: f32, fill: [f32; 4]) {
    canvas.blend_region(rect.expanded(1.0), |x, y| {
        Some((fill, edge_coverage(rect.rounded_distance(x, y, radius))))
    });
}

fn fill_circle(canvas: &mut Canvas, cx: f32, cy: f32, r: f32, fill: [f32; 4]) {
    let bounds = Rect::new(cx - r - 1.0, cy - r - 1.0, r * 2.0 + 2.0, r * 2.0 + 2.0);
    canvas.blend_region(bounds, |x, y| {
        let d = (x - cx).hypot(y - cy) - r;
        Some((fill, edge_coverage(d)))
    });
}

/// CSS `box-shadow: 0 {shadow/2}px {shadow}px rgba(0,0,0,0.5)`, approximated
/// by a Gaussian falloff around the rounded rect. The shadow is not drawn
/// under the content itself.
fn draw_shadow(canvas: &mut Canvas, content: Rect, radius: f32, shadow: u32, ratio: f32) {
    if shadow == 0 {
        return;
    }
    let blur = shadow as f32 * ratio;
    let sigma = (blur / 2.0).max(0.5);
    let caster = content.translated(0.0, blur / 2.0);
    let bounds = caster.expanded(blur * 1.5 + 1.0);
    canvas.blend_region(bounds, |x, y| {
        let d = caster.rounded_distance(x, y, radius);
        // 0.5 * erfc(d / (sigma * sqrt 2)), with erf approximated by tanh.
        let falloff = 0.5 * (1.0 - (1.2025 * d / (sigma * std::f32::consts::SQRT_2)).tanh());
        let outside = 1.0 - edge_coverage(content.rounded_distance(x, y, radius));
        let alpha = SHADOW_ALPHA * falloff * outside;
        (alpha > 0.001).then_some(([0.0, 0.0, 0.0, alpha], 1.0))
    });
}

/// Draws `image` resized into `rect`, clipped to rounded corners.
fn draw_image(canvas: &mut Canvas, image: &RgbaImage, rect: Rect, radius: f32) {
    let (w, h) = (rect.width as u32, rect.height as u32);
    let resized;
    let pixels = if image.width() == w && image.height() == h {
        image
    } else {
        resized = image::imageops::resize(image, w, h, FilterType::CatmullRom);
        &resized
    };
    let (ox, oy) = (rect.x as i64, rect.y as i64);
    for (x, y, px) in pixels.enumerate_pixels() {
        let coverage = edge_coverage(rect.rounded_distance(
            rect.x + x as f32 + 0.5,
            rect.y + y as f32 + 0.5,
            radius,
        ));
        if coverage <= 0.0 {
            continue;
        }
        let [r, g, b, a] = px.0;
        let straight = Rgba::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        );
        canvas.blend(ox + x as i64, oy + y as i64, straight.premultiplied(), coverage);
    }
}

/// Draws the highlighted code, one line box per source line.
fn draw_code(
    canvas: &mut Canvas,
    font: &CodeFont,
    runs: &[StyledRun],
    origin_x: f32,
    origin_y: f32,
    ratio: f32,
    text_color: HexColor,
) {
    let size = CODE_FONT_SIZE * ratio;
    let line_height = LINE_HEIGHT * ratio;
    let cell = font.cell_width(size);
    let baseline = font.baseline(size, line_height);
    let mut line = 0usize;
    let mut column = 0usize;
    for run in runs {
        let (fill, bold, italic) = match run.style {
            Some(style) => (color(style.color), style.bold, style.italic),
            None => (color(text_color), false, false),
        };
        for ch in run.text.chars() {
            match ch {
                '\n' => {
                    line += 1;
                    column = 0;
                }
                '\r' => {}
                '\t' => column += TAB_WIDTH - column % TAB_WIDTH,
                ch => {
                    let x = origin_x + column as f32 * cell;
                    let y = origin_y + line as f32 * line_height + baseline;
                    draw_glyph(canvas, font, ch, x, y, size, fill, italic);
                    if bold {
                        let offset = (ratio * 0.6).max(1.0).round();
                        draw_glyph(canvas, font, ch, x + offset, y, size, fill, italic);
                    }
                    column += 1;
                }
            }
        }
    }
}

/// Draws `text` on one line starting at `x`. Returns the pen position after
/// the last glyph.
fn draw_text(
    canvas: &mut Canvas,
    font: &CodeFont,
    text: &str,
    x: f32,
    baseline: f32,
    size: f32,
    fill: [f32; 4],
) -> f32 {
    let mut pen = x;
    for ch in text.chars() {
        draw_glyph(canvas, font, ch, pen, baseline, size, fill, false);
        pen += font.advance(ch, size);
    }
    pen
}

#[allow(clippy::too_many_arguments)]
fn draw_glyph(
    canvas: &mut Canvas,
    font: &CodeFont,
    ch: char,
    pen_x: f32,
    baseline: f32,
    size: f32,
    fill: [f32; 4],
    italic: bool,
) {
    if ch.is_whitespace() {
        return;
    }
    let glyph = font.glyph(ch, size);
    let m = glyph.metrics;
    if m.width == 0 || m.height == 0 {
        return;
    }
    let left = (pen_x + m.xmin as f32).round() as i64;
    let top = (baseline - (m.ymin + m.height as i32) as f32).round() as i64;
    for (i, &alpha) in glyph.coverage.iter().enumerate() {
        if alpha == 0 {
            continue;
        }
        let gx = (i % m.width) as i64;
        let gy = (i / m.width) as i64;
        let py = top + gy;
        let skew = if italic {
            ((baseline - py as f32) * ITALIC_SKEW).round() as i64
        } else {
            0
        };
        canvas.blend(left + gx + skew, py, fill, alpha as f32 / 255.0);
    }
}
