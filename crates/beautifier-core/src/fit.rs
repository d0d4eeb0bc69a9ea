//! Shrink-to-fit scaling of the preview into its viewport.

use crate::geometry::Size;

/// Total inset (both sides) kept free around the content.
pub const FIT_MARGIN: f32 = 80.0;

/// Smallest scale ever reported. Keeps the scale positive when the viewport
/// is smaller than the margin.
pub const MIN_SCALE: f32 = 0.01;

/// Computes `min(1, (vw - margin) / cw, (vh - margin) / ch)`.
///
/// Returns `None` when the content is not measurable yet (a zero or negative
/// dimension) or any input is not finite.
pub fn fit_scale(viewport: Size, content: Size, margin: f32) -> Option<f32> {
    if !viewport.is_finite() || !content.is_finite() || !margin.is_finite() {
        return None;
    }
    if !content.is_positive() {
        return None;
    }
    let sx = (viewport.width - margin) / content.width;
    let sy = (viewport.height - margin) / content.height;
    let scale = sx.min(sy).min(1.0);
    if scale.is_nan() || scale <= 0.0 {
        Some(MIN_SCALE)
    } else {
        Some(scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FitState {
    #[default]
    Unmeasured,
    Measured { scale: f32 },
}

/// Observes viewport and content sizes and keeps the current fit scale.
///
/// The scaler only reacts while attached: a canvas attaches when it starts
/// showing content and detaches when it stops, which resets it.
#[derive(Debug, Clone, Default)]
pub struct FitScaler {
    state: FitState,
    attached: bool,
    last_observed: Option<(Size, Size)>,
}

impl FitScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        if !self.attached {
            tracing::debug!("fit scaler attached");
            self.attached = true;
        }
    }

    pub fn detach(&mut self) {
        if self.attached {
            tracing::debug!("fit scaler detached");
        }
        self.attached = false;
        self.state = FitState::Unmeasured;
        self.last_observed = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn state(&self) -> FitState {
        self.state
    }

    /// Feeds a size observation. Returns true when the scale was recomputed.
    pub fn observe(&mut self, viewport: Size, content: Size) -> bool {
        if !self.attached {
            return false;
        }
        if self.last_observed == Some((viewport, content)) {
            return false;
        }
        let Some(scale) = fit_scale(viewport, content, FIT_MARGIN) else {
            return false;
        };
        self.last_observed = Some((viewport, content));
        self.state = FitState::Measured { scale };
        true
    }

    /// Current scale; `1.0` until the first measurement.
    pub fn scale(&self) -> f32 {
        match self.state {
            FitState::Unmeasured => 1.0,
            FitState::Measured { scale } => scale,
        }
    }

    pub fn percent_label(&self) -> String {
        format!("{}% Fit", (self.scale() * 100.0).round() as i32)
    }
}
