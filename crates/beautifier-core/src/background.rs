//! CSS background expressions: parsing and per-pixel sampling.
//!
//! Supported syntax is the subset the gradient presets and builder produce:
//! comma-separated layers (first on top) of `linear-gradient(...)`,
//! `radial-gradient(...)` and plain colors (`#hex`, `rgb[a]()`, `hsl[a]()`,
//! `transparent` and a few named colors).

use std::fmt;
use std::sync::LazyLock;

use beautifier_config::HexColor;
use regex::Regex;

/// Fill used when a background expression cannot be parsed.
pub const FALLBACK_COLOR: Rgba = Rgba::new(12.0 / 255.0, 12.0 / 255.0, 14.0 / 255.0, 1.0);

static NUMBER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))([a-z%]*)$").ok());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundError {
    Empty,
    UnbalancedParentheses,
    InvalidColor(String),
    InvalidLength(String),
    InvalidGradient(String),
    UnsupportedFunction(String),
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundError::Empty => write!(f, "empty background"),
            BackgroundError::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            BackgroundError::InvalidColor(s) => write!(f, "invalid color '{s}'"),
            BackgroundError::InvalidLength(s) => write!(f, "invalid length '{s}'"),
            BackgroundError::InvalidGradient(s) => write!(f, "invalid gradient: {s}"),
            BackgroundError::UnsupportedFunction(s) => write!(f, "unsupported function '{s}'"),
        }
    }
}

impl std::error::Error for BackgroundError {}

type ParseResult<T> = Result<T, BackgroundError>;

/// Straight-alpha color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex_color(c: HexColor) -> Self {
        Self::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.a as f32 / 255.0,
        )
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }
}

/// A length that is either relative to a reference size or absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Fraction(f32),
    Px(f32),
}

impl Length {
    /// Resolves against `total` device pixels at `pixel_ratio`.
    fn resolve(self, total: f32, pixel_ratio: f32) -> f32 {
        match self {
            Length::Fraction(f) => f * total,
            Length::Px(px) => px * pixel_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgba,
    pub position: Option<Length>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialShape {
    Circle,
    Ellipse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialExtent {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Solid(Rgba),
    Linear {
        /// CSS angle in degrees: 0 points up, clockwise.
        angle: f32,
        stops: Vec<ColorStop>,
    },
    Radial {
        shape: RadialShape,
        extent: RadialExtent,
        center: (Length, Length),
        stops: Vec<ColorStop>,
    },
}

/// A parsed background: layers ordered top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    layers: Vec<Layer>,
}

impl Background {
    pub fn parse(css: &str) -> ParseResult<Self> {
        let css = css.trim().trim_end_matches(';').trim();
        if css.is_empty() {
            return Err(BackgroundError::Empty);
        }
        let layers = split_top_level(css)?
            .into_iter()
            .map(parse_layer)
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Self { layers })
    }

    /// Parses `css`, logging and substituting [`Background::fallback`] on error.
    pub fn parse_or_fallback(css: &str) -> Self {
        match Self::parse(css) {
            Ok(bg) => bg,
            Err(e) => {
                tracing::warn!("Failed to parse background '{css}': {e}");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self::solid(FALLBACK_COLOR)
    }

    pub fn solid(color: Rgba) -> Self {
        Self {
            layers: vec![Layer::Solid(color)],
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Resolves layer geometry for a `width` x `height` device-pixel area.
    pub fn prepare(&self, width: f32, height: f32, pixel_ratio: f32) -> PreparedBackground {
        let mut layers: Vec<PreparedLayer> = self
            .layers
            .iter()
            .map(|layer| PreparedLayer::new(layer, width, height, pixel_ratio))
            .collect();
        // Composite bottom-up.
        layers.reverse();
        PreparedBackground { layers }
    }
}

/// Background layers resolved for a concrete size, ready to sample.
pub struct PreparedBackground {
    layers: Vec<PreparedLayer>,
}

impl PreparedBackground {
    /// Premultiplied color at device pixel `(x, y)`.
    pub fn sample(&self, x: f32, y: f32) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for layer in &self.layers {
            let src = layer.sample(x, y);
            let inv = 1.0 - src[3];
            for i in 0..4 {
                out[i] = src[i] + out[i] * inv;
            }
        }
        out
    }
}

enum Geometry {
    Solid,
    Linear {
        cx: f32,
        cy: f32,
        dx: f32,
        dy: f32,
        length: f32,
    },
    Radial {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
    },
}

struct PreparedLayer {
    geometry: Geometry,
    /// `(t, premultiplied color)`, positions non-decreasing.
    stops: Vec<(f32, [f32; 4])>,
}

impl PreparedLayer {
    fn new(layer: &Layer, w: f32, h: f32, ratio: f32) -> Self {
        match layer {
            Layer::Solid(color) => Self {
                geometry: Geometry::Solid,
                stops: vec![(0.0, color.premultiplied())],
            },
            Layer::Linear { angle, stops } => {
                let rad = angle.to_radians();
                let (dx, dy) = (rad.sin(), -rad.cos());
                let length = (w * dx).abs() + (h * dy).abs();
                Self {
                    geometry: Geometry::Linear {
                        cx: w / 2.0,
                        cy: h / 2.0,
                        dx,
                        dy,
                        length: length.max(f32::EPSILON),
                    },
                    stops: resolve_stops(stops, length, ratio),
                }
            }
            Layer::Radial {
                shape,
                extent,
                center,
                stops,
            } => {
                let cx = center.0.resolve(w, ratio);
                let cy = center.1.resolve(h, ratio);
                let near_x = cx.abs().min((w - cx).abs());
                let far_x = cx.abs().max((w - cx).abs());
                let near_y = cy.abs().min((h - cy).abs());
                let far_y = cy.abs().max((h - cy).abs());
                let (rx, ry) = match (shape, extent) {
                    (RadialShape::Ellipse, RadialExtent::ClosestSide) => (near_x, near_y),
                    (RadialShape::Ellipse, RadialExtent::FarthestSide) => (far_x, far_y),
                    (RadialShape::Ellipse, RadialExtent::ClosestCorner) => {
                        (near_x * std::f32::consts::SQRT_2, near_y * std::f32::consts::SQRT_2)
                    }
                    (RadialShape::Ellipse, RadialExtent::FarthestCorner) => {
                        (far_x * std::f32::consts::SQRT_2, far_y * std::f32::consts::SQRT_2)
                    }
                    (RadialShape::Circle, RadialExtent::ClosestSide) => {
                        let r = near_x.min(near_y);
                        (r, r)
                    }
                    (RadialShape::Circle, RadialExtent::FarthestSide) => {
                        let r = far_x.max(far_y);
                        (r, r)
                    }
                    (RadialShape::Circle, RadialExtent::ClosestCorner) => {
                        let r = near_x.hypot(near_y);
                        (r, r)
                    }
                    (RadialShape::Circle, RadialExtent::FarthestCorner) => {
                        let r = far_x.hypot(far_y);
                        (r, r)
                    }
                };
                let (rx, ry) = (rx.max(1e-3), ry.max(1e-3));
                Self {
                    geometry: Geometry::Radial { cx, cy, rx, ry },
                    stops: resolve_stops(stops, rx, ratio),
                }
            }
        }
    }

    fn sample(&self, x: f32, y: f32) -> [f32; 4] {
        let t = match self.geometry {
            Geometry::Solid => return self.stops[0].1,
            Geometry::Linear {
                cx,
                cy,
                dx,
                dy,
                length,
            } => ((x - cx) * dx + (y - cy) * dy) / length + 0.5,
            Geometry::Radial { cx, cy, rx, ry } => {
                let nx = (x - cx) / rx;
                let ny = (y - cy) / ry;
                (nx * nx + ny * ny).sqrt()
            }
        };
        sample_stops(&self.stops, t)
    }
}

/// Resolves stop positions to gradient-line fractions: missing first/last
/// positions become 0/1, positions never decrease, and runs of missing
/// positions are spread evenly between their neighbors.
fn resolve_stops(stops: &[ColorStop], length_device: f32, ratio: f32) -> Vec<(f32, [f32; 4])> {
    let length = length_device.max(f32::EPSILON);
    let mut positions: Vec<Option<f32>> = stops
        .iter()
        .map(|s| {
            s.position.map(|p| match p {
                Length::Fraction(f) => f,
                Length::Px(_) => p.resolve(length, ratio) / length,
            })
        })
        .collect();
    let n = positions.len();
    if n == 0 {
        return Vec::new();
    }
    if positions[0].is_none() {
        positions[0] = Some(0.0);
    }
    if positions[n - 1].is_none() {
        positions[n - 1] = Some(1.0);
    }
    let mut max_so_far = f32::NEG_INFINITY;
    for p in positions.iter_mut().flatten() {
        max_so_far = max_so_far.max(*p);
        *p = max_so_far;
    }
    let mut i = 0;
    while i < n {
        if positions[i].is_some() {
            i += 1;
            continue;
        }
        let start = i - 1;
        let mut end = i;
        while positions[end].is_none() {
            end += 1;
        }
        let (a, b) = (positions[start].unwrap_or(0.0), positions[end].unwrap_or(1.0));
        let span = (end - start) as f32;
        for (k, slot) in positions.iter_mut().enumerate().take(end).skip(i) {
            *slot = Some(a + (b - a) * (k - start) as f32 / span);
        }
        i = end;
    }
    stops
        .iter()
        .zip(positions)
        .map(|(s, p)| (p.unwrap_or(0.0), s.color.premultiplied()))
        .collect()
}

fn sample_stops(stops: &[(f32, [f32; 4])], t: f32) -> [f32; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (p0, c0) = pair[0];
        let (p1, c1) = pair[1];
        if t < p1 {
            let span = p1 - p0;
            if span <= f32::EPSILON {
                return c1;
            }
            let f = ((t - p0) / span).clamp(0.0, 1.0);
            let mut out = [0.0; 4];
            for i in 0..4 {
                out[i] = c0[i] + (c1[i] - c0[i]) * f;
            }
            return out;
        }
    }
    last.1
}

/// Splits on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> ParseResult<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(BackgroundError::UnbalancedParentheses);
                }
            }
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(BackgroundError::UnbalancedParentheses);
    }
    parts.push(s[start..].trim());
    Ok(parts)
}

/// Splits `name(args)` into its lower-cased name and inner arguments.
fn split_function(s: &str) -> Option<(String, &str)> {
    let open = s.find('(')?;
    let inner = s[open + 1..].strip_suffix(')')?;
    Some((s[..open].trim().to_ascii_lowercase(), inner))
}

fn parse_layer(s: &str) -> ParseResult<Layer> {
    if s.is_empty() {
        return Err(BackgroundError::Empty);
    }
    match split_function(s) {
        Some((name, args)) if name == "linear-gradient" => parse_linear(args),
        Some((name, args)) if name == "radial-gradient" => parse_radial(args),
        Some((name, _)) if matches!(name.as_str(), "rgb" | "rgba" | "hsl" | "hsla") => {
            Ok(Layer::Solid(parse_color(s)?))
        }
        Some((name, _)) => Err(BackgroundError::UnsupportedFunction(name)),
        None => Ok(Layer::Solid(parse_color(s)?)),
    }
}

fn parse_linear(args: &str) -> ParseResult<Layer> {
    let parts = split_top_level(args)?;
    let (angle, stop_args) = match parts.first() {
        Some(first) if first.to_ascii_lowercase().starts_with("to ") => {
            (parse_side(first)?, &parts[1..])
        }
        Some(first) => match parse_angle(first) {
            Some(angle) => (angle, &parts[1..]),
            None => (180.0, &parts[..]),
        },
        None => return Err(BackgroundError::InvalidGradient("no arguments".into())),
    };
    Ok(Layer::Linear {
        angle,
        stops: parse_stops(stop_args)?,
    })
}

fn parse_side(s: &str) -> ParseResult<f32> {
    let mut words: Vec<String> = s
        .split_whitespace()
        .skip(1)
        .map(|w| w.to_ascii_lowercase())
        .collect();
    words.sort();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    let angle = match words.as_slice() {
        ["top"] => 0.0,
        ["right", "top"] => 45.0,
        ["right"] => 90.0,
        ["bottom", "right"] => 135.0,
        ["bottom"] => 180.0,
        ["bottom", "left"] => 225.0,
        ["left"] => 270.0,
        ["left", "top"] => 315.0,
        _ => return Err(BackgroundError::InvalidGradient(s.to_string())),
    };
    Ok(angle)
}

fn parse_angle(s: &str) -> Option<f32> {
    let (value, unit) = parse_number(s)?;
    let degrees = match unit.as_str() {
        "deg" => value,
        "turn" => value * 360.0,
        "rad" => value.to_degrees(),
        "grad" => value * 0.9,
        "" if value == 0.0 => 0.0,
        _ => return None,
    };
    Some(degrees)
}

fn parse_radial(args: &str) -> ParseResult<Layer> {
    let parts = split_top_level(args)?;
    let mut shape = RadialShape::Ellipse;
    let mut extent = RadialExtent::FarthestCorner;
    let mut center = (Length::Fraction(0.5), Length::Fraction(0.5));
    let mut stop_args = &parts[..];

    if let Some(first) = parts.first() {
        let lower = first.to_ascii_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let is_preamble = words.first().is_some_and(|w| {
            matches!(
                *w,
                "at" | "circle"
                    | "ellipse"
                    | "closest-side"
                    | "closest-corner"
                    | "farthest-side"
                    | "farthest-corner"
            )
        });
        if is_preamble {
            stop_args = &parts[1..];
            let mut iter = words.iter();
            for word in iter.by_ref() {
                match *word {
                    "circle" => shape = RadialShape::Circle,
                    "ellipse" => shape = RadialShape::Ellipse,
                    "closest-side" => extent = RadialExtent::ClosestSide,
                    "closest-corner" => extent = RadialExtent::ClosestCorner,
                    "farthest-side" => extent = RadialExtent::FarthestSide,
                    "farthest-corner" => extent = RadialExtent::FarthestCorner,
                    "at" => break,
                    other => return Err(BackgroundError::InvalidGradient(other.to_string())),
                }
            }
            let position: Vec<&str> = iter.copied().collect();
            if !position.is_empty() {
                center = parse_position(&position)?;
            }
        }
    }
    Ok(Layer::Radial {
        shape,
        extent,
        center,
        stops: parse_stops(stop_args)?,
    })
}

fn parse_position(words: &[&str]) -> ParseResult<(Length, Length)> {
    let keyword = |w: &str| match w {
        "left" | "top" => Some(Length::Fraction(0.0)),
        "center" => Some(Length::Fraction(0.5)),
        "right" | "bottom" => Some(Length::Fraction(1.0)),
        _ => None,
    };
    let value = |w: &str| keyword(w).map_or_else(|| parse_length(w), Ok);
    match words {
        [single] => {
            let v = value(single)?;
            if matches!(*single, "top" | "bottom") {
                Ok((Length::Fraction(0.5), v))
            } else {
                Ok((v, Length::Fraction(0.5)))
            }
        }
        [a, b] => {
            // Keywords may come in either order ("top left").
            if matches!(*a, "top" | "bottom") || matches!(*b, "left" | "right") {
                Ok((value(b)?, value(a)?))
            } else {
                Ok((value(a)?, value(b)?))
            }
        }
        _ => Err(BackgroundError::InvalidGradient(format!(
            "unsupported position '{}'",
            words.join(" ")
        ))),
    }
}

fn parse_stops(args: &[&str]) -> ParseResult<Vec<ColorStop>> {
    let mut stops = Vec::new();
    for arg in args {
        let (color_part, rest) = split_color_prefix(arg);
        let color = parse_color(color_part)?;
        let lengths = rest
            .split_whitespace()
            .map(parse_length)
            .collect::<ParseResult<Vec<_>>>()?;
        match lengths.as_slice() {
            [] => stops.push(ColorStop {
                color,
                position: None,
            }),
            [p] => stops.push(ColorStop {
                color,
                position: Some(*p),
            }),
            [p1, p2] => {
                stops.push(ColorStop {
                    color,
                    position: Some(*p1),
                });
                stops.push(ColorStop {
                    color,
                    position: Some(*p2),
                });
            }
            _ => return Err(BackgroundError::InvalidGradient(arg.to_string())),
        }
    }
    if stops.len() < 2 {
        return Err(BackgroundError::InvalidGradient(
            "at least two color stops are required".into(),
        ));
    }
    Ok(stops)
}

/// Splits a color stop into its color and the remaining position text.
fn split_color_prefix(s: &str) -> (&str, &str) {
    let s = s.trim();
    if let Some(open) = s.find('(') {
        if let Some(close) = s[open..].find(')') {
            let end = open + close + 1;
            return (&s[..end], s[end..].trim());
        }
    }
    match s.split_once(char::is_whitespace) {
        Some((color, rest)) => (color, rest.trim()),
        None => (s, ""),
    }
}

fn parse_number(s: &str) -> Option<(f32, String)> {
    let re = NUMBER_RE.as_ref()?;
    let caps = re.captures(s.trim())?;
    let value: f32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2).map_or("", |m| m.as_str()).to_ascii_lowercase();
    Some((value, unit))
}

fn parse_length(s: &str) -> ParseResult<Length> {
    match parse_number(s) {
        Some((v, unit)) if unit == "%" => Ok(Length::Fraction(v / 100.0)),
        Some((v, unit)) if unit == "px" => Ok(Length::Px(v)),
        Some((v, unit)) if unit.is_empty() && v == 0.0 => Ok(Length::Fraction(0.0)),
        _ => Err(BackgroundError::InvalidLength(s.to_string())),
    }
}

/// Parses a single CSS color.
pub fn parse_color(s: &str) -> ParseResult<Rgba> {
    let s = s.trim();
    let invalid = || BackgroundError::InvalidColor(s.to_string());
    if s.starts_with('#') {
        return HexColor::from_hex(s)
            .map(Rgba::from_hex_color)
            .ok_or_else(invalid);
    }
    if let Some((name, args)) = split_function(s) {
        let parts: Vec<&str> = if args.contains(',') {
            args.split(',').map(str::trim).collect()
        } else {
            args.split(|c: char| c.is_whitespace() || c == '/')
                .filter(|p| !p.is_empty())
                .collect()
        };
        return match name.as_str() {
            "rgb" | "rgba" => parse_rgb_args(&parts).ok_or_else(invalid),
            "hsl" | "hsla" => parse_hsl_args(&parts).ok_or_else(invalid),
            _ => Err(invalid()),
        };
    }
    named_color(&s.to_ascii_lowercase()).ok_or_else(invalid)
}

fn named_color(name: &str) -> Option<Rgba> {
    let hex = match name {
        "transparent" => return Some(Rgba::TRANSPARENT),
        "black" => "#000000",
        "white" => "#ffffff",
        "red" => "#ff0000",
        "green" => "#008000",
        "blue" => "#0000ff",
        "yellow" => "#ffff00",
        "orange" => "#ffa500",
        "purple" => "#800080",
        "pink" => "#ffc0cb",
        "gray" | "grey" => "#808080",
        _ => return None,
    };
    HexColor::from_hex(hex).map(Rgba::from_hex_color)
}

fn parse_alpha(s: Option<&&str>) -> Option<f32> {
    let Some(s) = s else {
        return Some(1.0);
    };
    let (v, unit) = parse_number(s)?;
    match unit.as_str() {
        "%" => Some((v / 100.0).clamp(0.0, 1.0)),
        "" => Some(v.clamp(0.0, 1.0)),
        _ => None,
    }
}

fn parse_rgb_args(parts: &[&str]) -> Option<Rgba> {
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let channel = |s: &str| -> Option<f32> {
        let (v, unit) = parse_number(s)?;
        match unit.as_str() {
            "%" => Some((v / 100.0).clamp(0.0, 1.0)),
            "" => Some((v / 255.0).clamp(0.0, 1.0)),
            _ => None,
        }
    };
    Some(Rgba::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        parse_alpha(parts.get(3))?,
    ))
}

fn parse_hsl_args(parts: &[&str]) -> Option<Rgba> {
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let hue = parse_angle(parts[0]).or_else(|| match parse_number(parts[0])? {
        (v, unit) if unit.is_empty() => Some(v),
        _ => None,
    })?;
    let percent = |s: &str| -> Option<f32> {
        let (v, unit) = parse_number(s)?;
        (unit == "%" || unit.is_empty()).then(|| (v / 100.0).clamp(0.0, 1.0))
    };
    let (r, g, b) = hsl_to_rgb(hue, percent(parts[1])?, percent(parts[2])?);
    Some(Rgba::new(r, g, b, parse_alpha(parts.get(3))?))
}

fn hsl_to_rgb(hue: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(360.0) / 360.0;
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}
