//! Image ingestion: decodes files, clipboard bitmaps, and data-URIs into an
//! [`UploadedImage`] carrying both pixels and the data-URI of its source.

use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, RgbaImage};

/// File extensions accepted by the upload dialog and drag-and-drop.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Counter for generating unique image IDs within a process lifetime.
static IMAGE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_image_id() -> u64 {
    IMAGE_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Returns true if `path` has one of the [`IMAGE_EXTENSIONS`].
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// A decoded screenshot. Two images are equal only if they come from the same
/// ingestion.
pub struct UploadedImage {
    id: u64,
    pixels: RgbaImage,
    data_uri: String,
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("id", &self.id)
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl PartialEq for UploadedImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl UploadedImage {
    /// Decodes encoded image bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes).context("Unrecognized image data")?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .context("Failed to decode image")?;
        let data_uri = format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(bytes)
        );
        Self::from_parts(decoded.to_rgba8(), data_uri)
    }

    /// Reads and decodes an image file. Files without an image extension are
    /// rejected without being read.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !is_image_path(path) {
            bail!("Not an image file: {}", path.display());
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image: {}", path.display()))?;
        Self::from_bytes(&bytes)
    }

    /// Wraps a raw RGBA bitmap (e.g. from the clipboard). The data-URI is
    /// produced by encoding the bitmap as PNG.
    pub fn from_rgba(width: u32, height: u32, raw: Vec<u8>) -> Result<Self> {
        let pixels = RgbaImage::from_raw(width, height, raw)
            .context("Clipboard bitmap has an unexpected size")?;
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(pixels.clone())
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .context("Failed to encode clipboard bitmap")?;
        let data_uri = format!("data:image/png;base64,{}", STANDARD.encode(&png));
        Self::from_parts(pixels, data_uri)
    }

    /// Parses a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .context("Missing data: prefix")?;
        let (header, payload) = rest.split_once(',').context("Malformed data-URI")?;
        if !header.starts_with("image/") {
            bail!("data-URI is not an image: {header}");
        }
        if !header.ends_with(";base64") {
            bail!("Only base64 data-URIs are supported");
        }
        let bytes = STANDARD
            .decode(payload.trim())
            .context("Invalid base64 payload")?;
        Self::from_bytes(&bytes)
    }

    fn from_parts(pixels: RgbaImage, data_uri: String) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            bail!("Image has no pixels");
        }
        Ok(Self {
            id: next_image_id(),
            pixels,
            data_uri,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, image::Rgba(color));
    let mut out = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .unwrap();
    out
}
