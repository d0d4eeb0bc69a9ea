//! Monospace font used to draw snippet text, rasterized with fontdue.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use fontdue::{Font, FontSettings, Metrics};

/// A rasterized glyph: metrics plus an 8-bit coverage bitmap.
#[derive(Debug)]
pub struct Glyph {
    pub metrics: Metrics,
    pub coverage: Vec<u8>,
}

type GlyphCacheKey = (char, u32);

/// A font with a shared glyph cache. Safe to use from the export thread.
pub struct CodeFont {
    font: Font,
    glyphs: Mutex<HashMap<GlyphCacheKey, Arc<Glyph>>>,
}

impl std::fmt::Debug for CodeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl CodeFont {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {e}"))?;
        Ok(Self {
            font,
            glyphs: Mutex::new(HashMap::new()),
        })
    }

    /// Horizontal advance of `ch` at `size` px.
    pub fn advance(&self, ch: char, size: f32) -> f32 {
        self.font.metrics(ch, size).advance_width
    }

    /// Advance of a single cell. The font is treated as monospace.
    pub fn cell_width(&self, size: f32) -> f32 {
        self.advance('M', size)
    }

    /// Distance from the top of the line box to the baseline, for a line of
    /// `line_height` px.
    pub fn baseline(&self, size: f32, line_height: f32) -> f32 {
        match self.font.horizontal_line_metrics(size) {
            Some(m) => {
                let content = m.ascent - m.descent;
                (line_height - content) / 2.0 + m.ascent
            }
            None => (line_height + size * 0.7) / 2.0,
        }
    }

    /// Width of `text` laid out on one line, without tab expansion.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }

    /// Returns the cached rasterization of `ch` at `size` px.
    pub fn glyph(&self, ch: char, size: f32) -> Arc<Glyph> {
        let key = (ch, size.to_bits());
        let mut glyphs = self.glyphs.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(glyphs.entry(key).or_insert_with(|| {
            let (metrics, coverage) = self.font.rasterize(ch, size);
            Arc::new(Glyph { metrics, coverage })
        }))
    }
}

/// Monospace font bytes bundled with egui, used by tests.
#[cfg(test)]
pub(crate) fn test_font() -> CodeFont {
    let defs = egui::FontDefinitions::default();
    let data = &defs.font_data["Hack"];
    CodeFont::from_bytes(&data.font).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_advances_match() {
        let font = test_font();
        let w = font.cell_width(15.0);
        assert!(w > 0.0);
        assert!((font.advance('i', 15.0) - w).abs() < 0.01);
        assert!((font.text_width("abcd", 15.0) - 4.0 * w).abs() < 0.05);
    }

    #[test]
    fn glyphs_are_cached() {
        let font = test_font();
        let a = font.glyph('x', 15.0);
        let b = font.glyph('x', 15.0);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.coverage.is_empty());
    }

    #[test]
    fn baseline_sits_inside_the_line() {
        let font = test_font();
        let line_height = 15.0 * 1.625;
        let baseline = font.baseline(15.0, line_height);
        assert!(baseline > 0.0 && baseline < line_height);
    }

    #[test]
    fn rejects_invalid_font_data() {
        assert!(CodeFont::from_bytes(b"not a font").is_err());
    }
}
