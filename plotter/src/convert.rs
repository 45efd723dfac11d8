//! The compiler: walks an element tree and emits plotter commands.

use crate::bounds::document_bounds;
use crate::command::PlotterCommand;
use crate::element::{Element, ElementKind};
use crate::fit::fit_viewport;
use crate::math::{point, IntPoint, Point, Size, Vector};
use crate::simplify::simplify;
use crate::svg::build_polylines;
use crate::transform::{Transform, Viewport};

/// Parameters of a compilation.
///
/// The defaults target the original device: a 1404×1872 canvas at 10 pixels
/// per document unit with a 100 pixel margin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PlotOptions {
    /// Maximum deviation, in destination pixels, introduced by polyline
    /// simplification.
    pub tolerance: f32,
    /// Document-to-pixel factor used when auto-fit has no geometry to work
    /// with.
    pub pixels_per_unit: f32,
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Margin, in pixels, kept around auto-fitted content.
    pub margin: f32,
    /// Emit rectangles as a single primitive command instead of the
    /// 4-corner stroke sequence. Not every device build supports the
    /// primitive, hence the default.
    pub rectangle_as_primitive: bool,
    /// Use the fast-mode command prefix.
    pub fast: bool,
    /// Explicit scale, bypassing auto-fit.
    pub scale: Option<f32>,
    /// Explicit offset, bypassing auto-centering.
    pub offset: Option<Vector>,
}

impl PlotOptions {
    /// Default simplification tolerance, in pixels.
    pub const DEFAULT_TOLERANCE: f32 = 2.0;

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_canvas(mut self, width: i32, height: i32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_rectangle_primitive(mut self, enabled: bool) -> Self {
        self.rectangle_as_primitive = enabled;
        self
    }

    pub fn with_fast_mode(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Some(crate::math::vector(x, y));
        self
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            tolerance: Self::DEFAULT_TOLERANCE,
            pixels_per_unit: 10.0,
            canvas_width: 1404,
            canvas_height: 1872,
            margin: 100.0,
            rectangle_as_primitive: false,
            fast: false,
            scale: None,
            offset: None,
        }
    }
}

/// Compiles a document into plotter commands.
///
/// The viewport is derived from the document bounds (or the explicit
/// scale/offset in the options), then every drawable element is converted
/// in order. Never fails: malformed or unsupported content degrades to
/// fewer commands.
pub fn compile_document(elements: &[Element], options: &PlotOptions) -> Vec<PlotterCommand> {
    let viewport = fit_viewport(document_bounds(elements), options);

    let mut commands = Vec::new();
    for element in elements {
        compile_element(element, &Transform::identity(), &viewport, options, &mut commands);
    }

    commands
}

/// Converts one element (and its children) under an inherited transform.
pub fn compile_element(
    element: &Element,
    parent_transform: &Transform,
    viewport: &Viewport,
    options: &PlotOptions,
    output: &mut Vec<PlotterCommand>,
) {
    if !element.is_drawable() {
        return;
    }

    let transform = parent_transform.then(&element.transform);

    match element.kind {
        ElementKind::Path { ref data } => {
            convert_path(data, &transform, viewport, options, output);
        }
        ElementKind::Circle { center, radius } => {
            convert_circle(center, radius, &transform, viewport, output);
        }
        ElementKind::Rect { origin, size } => {
            convert_rect(origin, size, &transform, viewport, options, output);
        }
        ElementKind::Line { from, to } => {
            convert_line(from, to, &transform, viewport, output);
        }
        ElementKind::Polyline { ref points } => {
            convert_poly(points, false, &transform, viewport, output);
        }
        ElementKind::Polygon { ref points } => {
            convert_poly(points, true, &transform, viewport, output);
        }
        ElementKind::Group { ref children } => {
            for child in children {
                compile_element(child, &transform, viewport, options, output);
            }
        }
    }
}

fn convert_path(
    data: &str,
    transform: &Transform,
    viewport: &Viewport,
    options: &PlotOptions,
    output: &mut Vec<PlotterCommand>,
) {
    for polyline in build_polylines(data) {
        // Transform into float pixel space first: the tolerance is a pixel
        // distance and rounding must come last.
        let mapped: Vec<Point> = polyline
            .points
            .iter()
            .map(|&p| viewport.map(transform.apply(p)))
            .collect();

        let simplified = simplify(&mapped, options.tolerance);
        let snapped: Vec<IntPoint> = simplified.iter().map(|&p| viewport.snap(p)).collect();
        emit_stroke(&snapped, output);
    }
}

fn convert_circle(
    center: Point,
    radius: f32,
    transform: &Transform,
    viewport: &Viewport,
    output: &mut Vec<PlotterCommand>,
) {
    let center = viewport.to_pixel(transform.apply(center));
    let radius = ((radius * viewport.scale).round() as i32).max(1);

    output.push(PlotterCommand::Circle(center, radius, radius));
}

fn convert_rect(
    origin: Point,
    size: Size,
    transform: &Transform,
    viewport: &Viewport,
    options: &PlotOptions,
    output: &mut Vec<PlotterCommand>,
) {
    let corners = [
        origin,
        point(origin.x + size.width, origin.y),
        point(origin.x + size.width, origin.y + size.height),
        point(origin.x, origin.y + size.height),
    ];
    let corners: Vec<IntPoint> = corners
        .iter()
        .map(|&p| viewport.to_pixel(transform.apply(p)))
        .collect();

    if options.rectangle_as_primitive {
        output.push(PlotterCommand::Rectangle(corners[0], corners[2]));
        return;
    }

    // Compatibility path: stroke the four sides and close.
    output.push(PlotterCommand::Down(corners[0]));
    for &corner in &corners[1..] {
        output.push(PlotterCommand::Move(corner));
    }
    output.push(PlotterCommand::Move(corners[0]));
    output.push(PlotterCommand::Up);
}

fn convert_line(
    from: Point,
    to: Point,
    transform: &Transform,
    viewport: &Viewport,
    output: &mut Vec<PlotterCommand>,
) {
    let from = viewport.to_pixel(transform.apply(from));
    let to = viewport.to_pixel(transform.apply(to));

    output.push(PlotterCommand::Down(from));
    output.push(PlotterCommand::Move(to));
    output.push(PlotterCommand::Up);
}

fn convert_poly(
    points: &[Point],
    closed: bool,
    transform: &Transform,
    viewport: &Viewport,
    output: &mut Vec<PlotterCommand>,
) {
    if points.len() < 2 {
        return;
    }

    let snapped: Vec<IntPoint> = points
        .iter()
        .map(|&p| viewport.to_pixel(transform.apply(p)))
        .collect();

    output.push(PlotterCommand::Down(snapped[0]));
    for &p in &snapped[1..] {
        output.push(PlotterCommand::Move(p));
    }
    if closed {
        output.push(PlotterCommand::Move(snapped[0]));
    }
    output.push(PlotterCommand::Up);
}

fn emit_stroke(points: &[IntPoint], output: &mut Vec<PlotterCommand>) {
    let mut points = points.iter();
    if let Some(&first) = points.next() {
        output.push(PlotterCommand::Down(first));
        for &p in points {
            output.push(PlotterCommand::Move(p));
        }
        output.push(PlotterCommand::Up);
    }
}
