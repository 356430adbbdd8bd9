use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::SensorLabels;
use crate::geometry::SensorGeometry;
use crate::input::SensorDimensions;
use crate::layout::SensorLayout;
use crate::render::{self, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Failure to bind the engine to a canvas element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The browser refused the `getContext("2d")` call.
    #[error("canvas context request failed: {0}")]
    ContextRequest(String),

    /// The element has no 2D context (already bound to another context type).
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
}

/// Core engine state — everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub dimensions: Option<SensorDimensions>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self { dimensions: None, viewport_width: 0.0, viewport_height: 0.0, dpr: 1.0 }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Show a new sensor.
    pub fn set_dimensions(&mut self, dimensions: SensorDimensions) {
        self.dimensions = Some(dimensions);
    }

    /// Forget the current sensor; the next render shows placeholders.
    pub fn clear_dimensions(&mut self) {
        self.dimensions = None;
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// A non-positive or non-finite ratio falls back to 1.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    /// Backing store size in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_store_size(&self) -> (u32, u32) {
        (
            (self.viewport_width * self.dpr).round() as u32,
            (self.viewport_height * self.dpr).round() as u32,
        )
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport { width: self.viewport_width, height: self.viewport_height, dpr: self.dpr }
    }

    // --- Queries ---

    /// Geometry for the current sensor, recomputed on every call.
    #[must_use]
    pub fn geometry(&self) -> Option<SensorGeometry> {
        self.dimensions.map(|d| d.geometry())
    }

    /// Layout for the current sensor inside the current viewport.
    ///
    /// `None` when a dimension overflows to a non-finite geometry; only the
    /// labels are drawn then.
    #[must_use]
    pub fn layout(&self) -> Option<SensorLayout> {
        self.geometry()
            .filter(SensorGeometry::is_finite)
            .map(|g| SensorLayout::new(&g, self.viewport_width, self.viewport_height))
    }

    /// Annotation texts for the current sensor, or placeholders.
    #[must_use]
    pub fn labels(&self) -> SensorLabels {
        self.geometry()
            .map_or_else(SensorLabels::placeholder, |g| SensorLabels::from_geometry(&g))
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the element cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| EngineError::ContextRequest(format!("{e:?}")))?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Delegated data inputs ---

    pub fn set_dimensions(&mut self, dimensions: SensorDimensions) {
        self.core.set_dimensions(dimensions);
    }

    pub fn clear_dimensions(&mut self) {
        self.core.clear_dimensions();
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
    }

    // --- Render ---

    /// Resize the backing store and draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let (width, height) = self.core.backing_store_size();
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        let layout = self.core.layout();
        render::draw(&self.ctx, layout.as_ref(), &self.core.labels(), self.core.viewport())
    }
}
