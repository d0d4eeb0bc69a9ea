//! Premultiplied 8-bit pixel buffer the compositor draws into.

use image::RgbaImage;

use crate::geometry::Rect;

/// Holds premultiplied RGBA until [`Canvas::into_image`] converts it to
/// straight alpha in place.
pub struct Canvas {
    pixels: RgbaImage,
}

fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Overwrites every pixel with the premultiplied `f(x, y)` sampled at
    /// pixel centers.
    pub fn fill_with(&mut self, f: impl Fn(f32, f32) -> [f32; 4]) {
        for (x, y, px) in self.pixels.enumerate_pixels_mut() {
            px.0 = f(x as f32 + 0.5, y as f32 + 0.5).map(quantize);
        }
    }

    /// Composites premultiplied `src`, scaled by `coverage`, over one pixel.
    /// Out-of-bounds coordinates are ignored.
    pub fn blend(&mut self, x: i64, y: i64, src: [f32; 4], coverage: f32) {
        if x < 0
            || y < 0
            || x >= self.width() as i64
            || y >= self.height() as i64
            || coverage <= 0.0
        {
            return;
        }
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        let coverage = coverage.min(1.0);
        let inv = 1.0 - src[3] * coverage;
        for (d, s) in dst.0.iter_mut().zip(src) {
            *d = quantize(s * coverage + *d as f32 / 255.0 * inv);
        }
    }

    /// Calls `f(x, y)` for every pixel whose center lies in `bounds`,
    /// blending the premultiplied color and coverage it returns.
    pub fn blend_region(&mut self, bounds: Rect, f: impl Fn(f32, f32) -> Option<([f32; 4], f32)>) {
        let x0 = bounds.x.floor().max(0.0) as i64;
        let y0 = bounds.y.floor().max(0.0) as i64;
        let x1 = (bounds.right().ceil() as i64).min(self.width() as i64);
        let y1 = (bounds.bottom().ceil() as i64).min(self.height() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some((color, coverage)) = f(x as f32 + 0.5, y as f32 + 0.5) {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    /// Converts to a straight-alpha image.
    pub fn into_image(mut self) -> RgbaImage {
        for px in self.pixels.pixels_mut() {
            let [r, g, b, a] = px.0;
            if a == 0 {
                px.0 = [0; 4];
                continue;
            }
            let straight = |c: u8| ((c as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8;
            px.0 = [straight(r), straight(g), straight(b), a];
        }
        self.pixels
    }
}

/// Anti-aliased coverage of a pixel whose center is `distance` px from an
/// edge (negative inside).
pub fn edge_coverage(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let img = Canvas::new(2, 2).into_image();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn blend_over_composites() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend(0, 0, [0.0, 0.0, 1.0, 1.0], 1.0);
        canvas.blend(0, 0, [0.5, 0.0, 0.0, 0.5], 1.0);
        let px = canvas.into_image().get_pixel(0, 0).0;
        assert_eq!(px, [128, 0, 128, 255]);
    }

    #[test]
    fn blend_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend(-1, 0, [1.0; 4], 1.0);
        canvas.blend(0, 5, [1.0; 4], 1.0);
        assert_eq!(canvas.into_image().get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn blend_region_clips_to_canvas() {
        let mut canvas = Canvas::new(4, 4);
        canvas.blend_region(Rect::new(-10.0, -10.0, 12.0, 12.0), |_, _| {
            Some(([1.0, 1.0, 1.0, 1.0], 1.0))
        });
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(1, 1).0[3], 255);
        assert_eq!(img.get_pixel(2, 2).0[3], 0);
    }

    #[test]
    fn edge_coverage_is_half_on_the_edge() {
        assert_eq!(edge_coverage(0.0), 0.5);
        assert_eq!(edge_coverage(-3.0), 1.0);
        assert_eq!(edge_coverage(3.0), 0.0);
    }
}
