//! `fallback`
//!
//! Procedurally draws the placeholder icon used when vector conversion
//! fails: a filled badge circle behind a white document with a folded
//! corner and three text bars. All proportions derive from the target size
//! with integer arithmetic, so the output is identical across runs.

use resvg::tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Draws the placeholder icon at the given square pixel size.
///
/// # Arguments
/// * `size`: The square pixel size, must be non-zero.
///
/// # Returns
/// The drawn pixmap, on a transparent canvas.
pub(crate) fn placeholder_icon(size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(size, size).expect("placeholder size must be non-zero");

    draw_badge_circle(&mut pixmap, size);
    draw_document(&mut pixmap, size);
    draw_text_bars(&mut pixmap, size);

    pixmap
}

/// The filled circle covering the central ~75% of the canvas.
fn draw_badge_circle(pixmap: &mut Pixmap, size: u32) {
    let margin = size / 8;
    let centre = size as f32 / 2.0;
    let radius = (size - 2 * margin) as f32 / 2.0;

    let Some(circle) = PathBuilder::from_circle(centre, centre, radius) else {
        return;
    };

    pixmap.fill_path(
        &circle,
        &solid(59, 130, 246, 255),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        &circle,
        &solid(29, 78, 216, 255),
        &Stroke {
            width: 2.0,
            ..Stroke::default()
        },
        Transform::identity(),
        None,
    );
}

/// The white rounded document rectangle with its folded top-right corner.
fn draw_document(pixmap: &mut Pixmap, size: u32) {
    let width = size / 2;
    let height = size * 3 / 5;
    let x = (size - width) / 2;
    let y = size / 4;
    let corner_radius = (size / 16).max(1);

    let Some(body) = rounded_rect(
        x as f32,
        y as f32,
        width as f32,
        height as f32,
        corner_radius as f32,
    ) else {
        return;
    };

    pixmap.fill_path(
        &body,
        &solid(255, 255, 255, 255),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        &body,
        &solid(200, 200, 200, 255),
        &Stroke {
            width: 1.0,
            ..Stroke::default()
        },
        Transform::identity(),
        None,
    );

    let fold = size / 8;
    let mut builder = PathBuilder::new();
    builder.move_to((x + width - fold) as f32, y as f32);
    builder.line_to((x + width) as f32, (y + fold) as f32);
    builder.line_to((x + width) as f32, y as f32);
    builder.close();
    let Some(triangle) = builder.finish() else {
        return;
    };

    pixmap.fill_path(
        &triangle,
        &solid(220, 220, 220, 255),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Three horizontal bars of decreasing width inside the document,
/// representing text lines. Thickness bottoms out at a single pixel so the
/// bars stay visible at the smallest sizes.
fn draw_text_bars(pixmap: &mut Pixmap, size: u32) {
    let document_width = size / 2;
    let document_x = (size - document_width) / 2;
    let document_y = size / 4;

    let thickness = (size / 32).max(1);
    let spacing = (size / 16).max(2);
    let base_width = document_width - size / 8;
    let x = document_x + size / 16;
    let top = document_y + size / 8;

    let widths = [base_width, base_width * 4 / 5, base_width * 3 / 5];
    let paint = solid(59, 130, 246, 180);
    for (index, width) in widths.into_iter().enumerate() {
        let y = top + index as u32 * spacing;
        if let Some(bar) = Rect::from_xywh(x as f32, y as f32, width as f32, thickness as f32) {
            pixmap.fill_rect(bar, &paint, Transform::identity(), None);
        }
    }
}

/// A solid-colour paint with anti-aliasing enabled.
fn solid(red: u8, green: u8, blue: u8, alpha: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color_rgba8(red, green, blue, alpha);
    paint
}

/// Builds a rectangle path with quarter-curve corners. The radius is
/// clamped so it never exceeds half of either side.
fn rounded_rect(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radius: f32,
) -> Option<resvg::tiny_skia::Path> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let radius = radius.min(width / 2.0).min(height / 2.0);

    let mut builder = PathBuilder::new();
    builder.move_to(x + radius, y);
    builder.line_to(x + width - radius, y);
    builder.quad_to(x + width, y, x + width, y + radius);
    builder.line_to(x + width, y + height - radius);
    builder.quad_to(x + width, y + height, x + width - radius, y + height);
    builder.line_to(x + radius, y + height);
    builder.quad_to(x, y + height, x, y + height - radius);
    builder.line_to(x, y + radius);
    builder.quad_to(x, y, x + radius, y);
    builder.close();
    builder.finish()
}
