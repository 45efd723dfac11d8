//! Derives the document-to-pixel mapping, fitting content to the canvas.

use crate::convert::PlotOptions;
use crate::math::{int_size, vector, Rect};
use crate::transform::Viewport;

/// Computes the viewport for a document with the given bounds.
///
/// An explicit scale or offset in the options always wins. Otherwise the
/// scale is the largest uniform factor that fits the bounds inside the
/// canvas minus its margins, and the offsets center the scaled bounds.
/// When the bounds are absent or degenerate (zero width or height) the
/// viewport falls back to the default scale and a canvas-center offset.
pub fn fit_viewport(bounds: Option<Rect>, options: &PlotOptions) -> Viewport {
    let canvas_w = options.canvas_width as f32;
    let canvas_h = options.canvas_height as f32;
    let canvas = int_size(options.canvas_width, options.canvas_height);

    let fit = match bounds {
        Some(rect) if rect.size.width > 0.0 && rect.size.height > 0.0 => Some(rect),
        _ => None,
    };

    let scale = options.scale.unwrap_or_else(|| match fit {
        Some(rect) => {
            let scale_x = (canvas_w - 2.0 * options.margin) / rect.size.width;
            let scale_y = (canvas_h - 2.0 * options.margin) / rect.size.height;
            scale_x.min(scale_y)
        }
        None => options.pixels_per_unit,
    });

    let offset = options.offset.unwrap_or_else(|| match fit {
        Some(rect) => vector(
            (canvas_w - rect.size.width * scale) / 2.0 - rect.origin.x * scale,
            (canvas_h - rect.size.height * scale) / 2.0 - rect.origin.y * scale,
        ),
        None => vector(canvas_w / 2.0, canvas_h / 2.0),
    });

    Viewport::new(scale, offset, canvas)
}

#[cfg(test)]
use crate::math::{point, rect};

#[test]
fn fit_centers_bounds() {
    let options = PlotOptions::default()
        .with_canvas(1000, 1000)
        .with_margin(100.0);
    let viewport = fit_viewport(Some(rect(0.0, 0.0, 40.0, 80.0)), &options);

    // The taller axis limits the scale.
    assert_eq!(viewport.scale, 10.0);
    assert_eq!(viewport.offset, vector(300.0, 100.0));

    // The bounds map to a rectangle centered on the canvas.
    assert_eq!(viewport.map(point(0.0, 0.0)), point(300.0, 100.0));
    assert_eq!(viewport.map(point(40.0, 80.0)), point(700.0, 900.0));
}

#[test]
fn fit_empty_document_uses_defaults() {
    let options = PlotOptions::default();
    let viewport = fit_viewport(None, &options);

    assert_eq!(viewport.scale, options.pixels_per_unit);
    assert_eq!(
        viewport.offset,
        vector(
            options.canvas_width as f32 / 2.0,
            options.canvas_height as f32 / 2.0
        )
    );
}

#[test]
fn fit_degenerate_bounds_use_defaults() {
    let options = PlotOptions::default();
    let viewport = fit_viewport(Some(rect(5.0, 5.0, 0.0, 10.0)), &options);

    assert_eq!(viewport.scale, options.pixels_per_unit);
}

#[test]
fn explicit_scale_and_offset_win() {
    let options = PlotOptions::default().with_scale(3.0).with_offset(7.0, 8.0);
    let viewport = fit_viewport(Some(rect(0.0, 0.0, 100.0, 100.0)), &options);

    assert_eq!(viewport.scale, 3.0);
    assert_eq!(viewport.offset, vector(7.0, 8.0));
}

#[test]
fn explicit_scale_still_centers() {
    let options = PlotOptions::default().with_canvas(1000, 1000).with_scale(1.0);
    let viewport = fit_viewport(Some(rect(0.0, 0.0, 100.0, 100.0)), &options);

    assert_eq!(viewport.scale, 1.0);
    assert_eq!(viewport.offset, vector(450.0, 450.0));
}
