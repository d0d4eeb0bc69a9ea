//! Texture cache for the rendered preview.
//!
//! The composite is rendered at 1x (times the display's pixel density) and
//! uploaded once per state revision; the stage scales the texture down by
//! the fit factor when painting it.

use eframe::egui;

use beautifier_core::layout::CompositeLayout;
use beautifier_core::{Compositor, RenderError, Store, ViewState};

pub(crate) struct PreviewCache {
    texture: Option<egui::TextureHandle>,
    /// Store revision the texture was rendered from.
    last_revision: u64,
    /// Pixel density the texture was rendered at.
    last_pixels_per_point: f32,
    renders: u64,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self {
            texture: None,
            last_revision: u64::MAX, // force a render on first use
            last_pixels_per_point: 0.0,
            renders: 0,
        }
    }

    /// Returns the preview for `state`, re-rendering when `revision` or the
    /// pixel density changed since the last call.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        compositor: &Compositor,
        state: &ViewState,
        revision: u64,
    ) -> Option<&egui::TextureHandle> {
        let pixels_per_point = ctx.pixels_per_point();
        if self.last_revision == revision
            && (self.last_pixels_per_point - pixels_per_point).abs() <= f32::EPSILON
        {
            return self.texture.as_ref();
        }
        self.last_revision = revision;
        self.last_pixels_per_point = pixels_per_point;
        self.renders += 1;

        match compositor.render(state, pixels_per_point) {
            Ok(image) => {
                let size = [image.width() as usize, image.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
                match &mut self.texture {
                    Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
                    None => {
                        self.texture = Some(ctx.load_texture(
                            "preview",
                            color_image,
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                }
            }
            Err(e) => {
                if e != RenderError::NothingToRender {
                    tracing::warn!("Failed to render preview: {e}");
                }
                self.texture = None;
            }
        }
        self.texture.as_ref()
    }

    /// Number of renders performed so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}

/// Natural layout of the store's state, recomputed only when the store's
/// layout revision moves.
pub(crate) struct LayoutCache {
    entry: Option<(u64, Option<CompositeLayout>)>,
    computations: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }

    pub fn layout(&mut self, compositor: &Compositor, store: &Store) -> Option<CompositeLayout> {
        let revision = store.layout_revision();
        match &self.entry {
            Some((cached, layout)) if *cached == revision => layout.clone(),
            _ => {
                self.computations += 1;
                let layout = compositor.layout(store.state());
                self.entry = Some((revision, layout.clone()));
                layout
            }
        }
    }

    /// Number of layout passes performed so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use beautifier_config::SnippetTheme;
    use beautifier_core::{Action, Mode, RenderAssets, Store, Tokenizer};

    use super::*;

    fn compositor() -> Compositor {
        Compositor::new(RenderAssets {
            tokenizer: Arc::new(Tokenizer::new()),
            font: None,
            theme: SnippetTheme::default(),
        })
    }

    #[test]
    fn renders_once_per_revision() {
        let ctx = egui::Context::default();
        let compositor = compositor();
        let mut store = Store::default();
        store.dispatch(Action::SetMode(Mode::Snippet));
        let mut cache = PreviewCache::new();

        let size = cache
            .texture(&ctx, &compositor, store.state(), store.revision())
            .map(|t| t.size());
        assert!(size.is_some());
        cache.texture(&ctx, &compositor, store.state(), store.revision());
        assert_eq!(cache.renders(), 1);

        store.dispatch(Action::SetPadding(10));
        cache.texture(&ctx, &compositor, store.state(), store.revision());
        assert_eq!(cache.renders(), 2);
    }

    #[test]
    fn empty_mockup_has_no_texture() {
        let ctx = egui::Context::default();
        let compositor = compositor();
        let store = Store::default();
        let mut cache = PreviewCache::new();
        assert!(cache
            .texture(&ctx, &compositor, store.state(), store.revision())
            .is_none());
    }

    #[test]
    fn layout_is_reused_until_it_can_change() {
        let compositor = compositor();
        let mut store = Store::default();
        store.dispatch(Action::SetMode(Mode::Snippet));
        let mut cache = LayoutCache::new();

        let first = cache.layout(&compositor, &store);
        assert!(first.is_some());
        store.dispatch(Action::SetShadow(5));
        store.dispatch(Action::SetBackground("#000000".into()));
        assert_eq!(cache.layout(&compositor, &store), first);
        assert_eq!(cache.computations(), 1);

        store.dispatch(Action::SetPadding(100));
        let grown = cache.layout(&compositor, &store).unwrap();
        assert_eq!(cache.computations(), 2);
        assert!(grown.size.height > first.unwrap().size.height);
    }
}
