//! Small thumbnails of background expressions, rendered with the same
//! background painter as the composite.

use std::collections::HashMap;

use eframe::egui;

use beautifier_core::background::Background;

/// Thumbnail size in pixels.
pub(crate) const SWATCH_SIZE: [usize; 2] = [96, 60];

/// The builder preview produces a new expression per angle step, so the cache
/// is dropped once it grows past this many entries.
const MAX_SWATCHES: usize = 64;

pub(crate) struct SwatchCache {
    textures: HashMap<String, egui::TextureHandle>,
}

impl SwatchCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Texture for `css`, rendering it on first use.
    pub fn texture(&mut self, ctx: &egui::Context, css: &str) -> egui::TextureId {
        if let Some(texture) = self.textures.get(css) {
            return texture.id();
        }
        if self.textures.len() >= MAX_SWATCHES {
            self.textures.clear();
        }
        let texture = ctx.load_texture(
            format!("swatch-{css}"),
            swatch_image(css),
            egui::TextureOptions::LINEAR,
        );
        let id = texture.id();
        self.textures.insert(css.to_string(), texture);
        id
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

fn swatch_image(css: &str) -> egui::ColorImage {
    let [width, height] = SWATCH_SIZE;
    let prepared = Background::parse_or_fallback(css).prepare(width as f32, height as f32, 1.0);
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let px = prepared.sample(x as f32 + 0.5, y as f32 + 0.5);
            pixels.extend(px.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8));
        }
    }
    egui::ColorImage::from_rgba_premultiplied(SWATCH_SIZE, &pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_has_expected_size_and_color() {
        let image = swatch_image("#ff0000");
        assert_eq!(image.size, SWATCH_SIZE);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn textures_are_reused() {
        let ctx = egui::Context::default();
        let mut cache = SwatchCache::new();
        let a = cache.texture(&ctx, "#112233");
        let b = cache.texture(&ctx, "#112233");
        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_is_bounded() {
        let ctx = egui::Context::default();
        let mut cache = SwatchCache::new();
        for angle in 0..=MAX_SWATCHES {
            cache.texture(&ctx, &format!("linear-gradient({angle}deg, #000 0%, #fff 100%)"));
        }
        assert!(cache.len() <= MAX_SWATCHES);
    }
}
