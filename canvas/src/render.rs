//! Rendering: draws the sensor visualization to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a precomputed [`SensorLayout`] and [`SensorLabels`] and produces
//! pixels. It does not compute geometry and holds no state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{INK, LABEL_FONT, SENSOR_FILL, STROKE_WIDTH_PX};
use crate::format::SensorLabels;
use crate::layout::{LabelPlacement, Point, SensorLayout};

/// Viewport description passed to [`draw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Device pixel ratio.
    pub dpr: f64,
}

/// Draw the full scene.
///
/// With `layout == None` only the width/height labels are drawn, centered in
/// the viewport, so an unreadable size still shows its `?mm` placeholders.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    layout: Option<&SensorLayout>,
    labels: &SensorLabels,
    viewport: Viewport,
) -> Result<(), JsValue> {
    // Layer 1: clear and apply the device pixel ratio.
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(INK);

    let Some(layout) = layout else {
        return draw_placeholder(ctx, labels, viewport);
    };

    // Layer 2: sensor body and diagonal.
    draw_sensor(ctx, layout)?;

    // Layer 3: annotations.
    ctx.set_fill_style_str(INK);
    draw_label(ctx, &labels.width, &layout.width_label)?;
    draw_label(ctx, &labels.height, &layout.height_label)?;
    draw_label(ctx, &labels.diagonal, &layout.diagonal_label)?;
    draw_label(ctx, &labels.area, &layout.area_label)?;

    Ok(())
}

fn draw_sensor(ctx: &CanvasRenderingContext2d, layout: &SensorLayout) -> Result<(), JsValue> {
    ctx.save();

    ctx.set_fill_style_str(SENSOR_FILL);
    ctx.fill_rect(layout.origin.x, layout.origin.y, layout.width, layout.height);

    ctx.set_stroke_style_str(INK);
    ctx.set_line_width(STROKE_WIDTH_PX);
    ctx.stroke_rect(layout.origin.x, layout.origin.y, layout.width, layout.height);

    // The diagonal is clipped to the body like the border.
    ctx.begin_path();
    ctx.rect(layout.origin.x, layout.origin.y, layout.width, layout.height);
    ctx.clip();

    ctx.begin_path();
    ctx.move_to(layout.diagonal_start.x, layout.diagonal_start.y);
    ctx.line_to(layout.diagonal_end.x, layout.diagonal_end.y);
    ctx.stroke();

    ctx.restore();
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, text: &str, placement: &LabelPlacement) -> Result<(), JsValue> {
    if text.is_empty() {
        return Ok(());
    }
    ctx.save();
    ctx.translate(placement.anchor.x, placement.anchor.y)?;
    ctx.rotate(placement.rotation_rad)?;
    ctx.set_text_align(placement.align.as_canvas_str());
    ctx.set_text_baseline(placement.baseline.as_canvas_str());
    ctx.fill_text(text, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

fn draw_placeholder(ctx: &CanvasRenderingContext2d, labels: &SensorLabels, viewport: Viewport) -> Result<(), JsValue> {
    let center = Point::new(viewport.width * 0.5, viewport.height * 0.5);
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.fill_text(&labels.width, center.x, center.y)?;
    ctx.set_text_baseline("top");
    ctx.fill_text(&labels.height, center.x, center.y)?;
    Ok(())
}
