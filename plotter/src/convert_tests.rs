use crate::command::PlotterCommand;
use crate::convert::{compile_document, PlotOptions};
use crate::element::Element;
use crate::math::{point, size};
use crate::transform::Transform;

fn unit_options() -> PlotOptions {
    PlotOptions::default().with_scale(1.0).with_offset(0.0, 0.0)
}

fn as_text(commands: &[PlotterCommand]) -> Vec<String> {
    commands.iter().map(|c| c.to_string()).collect()
}

#[test]
fn triangle_round_trip() {
    let elements = vec![Element::path("M0,0 L10,0 L10,10 Z")];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(
        as_text(&commands),
        vec![
            "pen down 0 0",
            "pen move 10 0",
            "pen move 10 10",
            "pen move 0 0",
            "pen up",
        ]
    );
}

#[test]
fn circle_at_scale_ten() {
    let elements = vec![Element::circle(point(5.0, 5.0), 2.0)];
    let options = PlotOptions::default().with_scale(10.0).with_offset(0.0, 0.0);
    let commands = compile_document(&elements, &options);

    assert_eq!(as_text(&commands), vec!["pen circle 50 50 20 20"]);
}

#[test]
fn tiny_circle_keeps_one_pixel_radius() {
    let elements = vec![Element::circle(point(1.0, 1.0), 0.01)];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(as_text(&commands), vec!["pen circle 1 1 1 1"]);
}

#[test]
fn unterminated_path_gets_trailing_pen_up() {
    let elements = vec![Element::path("M0,0 L10,0")];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(commands.last(), Some(&PlotterCommand::Up));
}

#[test]
fn polyline_move_emits_down_then_moves() {
    // Extra coordinate pairs after the move are implicit line-tos.
    let elements = vec![Element::path("M0,0 5,0 5,5")];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(
        as_text(&commands),
        vec!["pen down 0 0", "pen move 5 0", "pen move 5 5", "pen up"]
    );
}

#[test]
fn empty_document_compiles_to_nothing() {
    let commands = compile_document(&[], &PlotOptions::default());
    assert!(commands.is_empty());
}

#[test]
fn unparsable_path_compiles_to_nothing() {
    // Zero commands out of a non-empty element is the caller's concern,
    // not an error here.
    let elements = vec![Element::path("this is not path data")];
    let commands = compile_document(&elements, &PlotOptions::default());
    assert!(commands.is_empty());
}

#[test]
fn degenerate_document_uses_default_viewport() {
    // A single dot has a zero-area bounding box: auto-fit falls back to the
    // default scale and a canvas-center offset.
    let elements = vec![Element::path("M5,5")];
    let commands = compile_document(&elements, &PlotOptions::default());

    assert_eq!(as_text(&commands), vec!["pen down 752 986", "pen up"]);
}

#[test]
fn hidden_elements_are_skipped() {
    let elements = vec![
        Element::circle(point(1.0, 1.0), 1.0).with_hidden(true),
        Element::circle(point(1.0, 1.0), 1.0).with_opacity(0.0),
        Element::circle(point(1.0, 1.0), 1.0).with_id("pin_2"),
    ];
    let commands = compile_document(&elements, &unit_options());

    assert!(commands.is_empty());
}

#[test]
fn group_transform_accumulates() {
    let group = Element::group(vec![Element::line(point(0.0, 0.0), point(10.0, 0.0))])
        .with_transform(Transform::translation(10.0, 0.0));
    let commands = compile_document(&[group], &unit_options());

    assert_eq!(
        as_text(&commands),
        vec!["pen down 10 0", "pen move 20 0", "pen up"]
    );
}

#[test]
fn nested_transforms_compose() {
    let inner = Element::line(point(0.0, 0.0), point(5.0, 0.0))
        .with_transform(Transform::translation(1.0, 0.0));
    let group = Element::group(vec![inner]).with_transform(Transform::scaling(2.0, 2.0));
    let commands = compile_document(&[group], &unit_options());

    // Translate then scale: (0 + 1) * 2 and (5 + 1) * 2.
    assert_eq!(
        as_text(&commands),
        vec!["pen down 2 0", "pen move 12 0", "pen up"]
    );
}

#[test]
fn rect_compatibility_mode() {
    let elements = vec![Element::rect(point(0.0, 0.0), size(10.0, 5.0))];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(
        as_text(&commands),
        vec![
            "pen down 0 0",
            "pen move 10 0",
            "pen move 10 5",
            "pen move 0 5",
            "pen move 0 0",
            "pen up",
        ]
    );
}

#[test]
fn rect_primitive_mode() {
    let elements = vec![Element::rect(point(0.0, 0.0), size(10.0, 5.0))];
    let options = unit_options().with_rectangle_primitive(true);
    let commands = compile_document(&elements, &options);

    assert_eq!(as_text(&commands), vec!["pen rectangle 0 0 10 5"]);
}

#[test]
fn line_element_strokes() {
    let elements = vec![Element::line(point(0.0, 0.0), point(10.0, 10.0))];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(
        as_text(&commands),
        vec!["pen down 0 0", "pen move 10 10", "pen up"]
    );
}

#[test]
fn polygon_closes_back_to_start() {
    let points = vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
    let commands = compile_document(&[Element::polygon(points.clone())], &unit_options());

    assert_eq!(
        as_text(&commands),
        vec![
            "pen down 0 0",
            "pen move 10 0",
            "pen move 10 10",
            "pen move 0 0",
            "pen up",
        ]
    );

    // The open variant does not close.
    let commands = compile_document(&[Element::polyline(points)], &unit_options());
    assert_eq!(
        as_text(&commands),
        vec!["pen down 0 0", "pen move 10 0", "pen move 10 10", "pen up"]
    );
}

#[test]
fn degenerate_poly_is_skipped() {
    let commands = compile_document(
        &[Element::polyline(vec![point(1.0, 1.0)])],
        &unit_options(),
    );
    assert!(commands.is_empty());
}

#[test]
fn strokes_clamp_to_canvas() {
    let options = unit_options().with_canvas(100, 100);
    let elements = vec![Element::line(point(-10.0, -10.0), point(500.0, 50.0))];
    let commands = compile_document(&elements, &options);

    assert_eq!(
        as_text(&commands),
        vec!["pen down 0 0", "pen move 99 50", "pen up"]
    );
}

#[test]
fn curved_path_is_sampled_and_simplified() {
    let options = PlotOptions::default().with_scale(10.0).with_offset(0.0, 0.0);
    let elements = vec![Element::path("M0,0 C0,10 10,10 10,0")];
    let commands = compile_document(&elements, &options);

    // The arch keeps intermediate samples after simplification.
    assert!(commands.len() > 4, "{:?}", commands);
    assert_eq!(commands[0], PlotterCommand::Down(crate::math::int_point(0, 0)));
    assert_eq!(
        &commands[commands.len() - 2..],
        &[
            PlotterCommand::Move(crate::math::int_point(100, 0)),
            PlotterCommand::Up,
        ]
    );
}

#[test]
fn quadratic_path_reaches_endpoint() {
    let elements = vec![Element::path("M0,0 Q5,10 10,0")];
    let commands = compile_document(&elements, &unit_options());

    assert_eq!(commands[0], PlotterCommand::Down(crate::math::int_point(0, 0)));
    assert_eq!(
        &commands[commands.len() - 2..],
        &[
            PlotterCommand::Move(crate::math::int_point(10, 0)),
            PlotterCommand::Up,
        ]
    );
}
