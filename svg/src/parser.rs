//! Assembles tokens into path events, enforcing operand group sizes.

use arrayvec::ArrayVec;

use crate::math::{point, vector};
use crate::path::SvgEvent;
use crate::tokenizer::{Token, Tokenizer};

/// An iterator over the path events of a path-data string.
///
/// Implements the operand grouping rules of the SVG path grammar:
/// a command letter followed by several full operand groups repeats the
/// command, extra pairs after a move become implicit line-tos, and a
/// partial trailing group is silently discarded.
pub struct PathParser<'l> {
    tokenizer: Tokenizer<'l>,
    lookahead: Option<Token>,
    cmd: u8,
}

impl<'l> PathParser<'l> {
    pub fn new(src: &'l str) -> Self {
        PathParser {
            tokenizer: Tokenizer::new(src),
            lookahead: None,
            cmd: 0,
        }
    }

    fn take_token(&mut self) -> Option<Token> {
        self.lookahead.take().or_else(|| self.tokenizer.next())
    }
}

impl<'l> Iterator for PathParser<'l> {
    type Item = SvgEvent;

    fn next(&mut self) -> Option<SvgEvent> {
        loop {
            let mut operands: ArrayVec<[f32; 7]> = ArrayVec::new();

            match self.take_token()? {
                Token::Command(c) => {
                    if c == b'Z' || c == b'z' {
                        self.cmd = 0;
                        return Some(SvgEvent::Close);
                    }
                    self.cmd = c;
                }
                Token::Number(value) => {
                    if self.cmd == 0 {
                        // Stray numbers before the first command.
                        continue;
                    }
                    operands.push(value);
                }
            }

            let arity = operand_count(self.cmd);
            let mut truncated = false;
            while operands.len() < arity {
                match self.take_token() {
                    Some(Token::Number(value)) => operands.push(value),
                    Some(token) => {
                        // A command interrupted the group: discard the
                        // partial operands and parse from the command.
                        self.lookahead = Some(token);
                        truncated = true;
                        break;
                    }
                    None => return None,
                }
            }
            if truncated {
                continue;
            }

            let event = to_event(self.cmd, &operands);

            // Groups repeating after a move are implicit line-tos, with the
            // same relativity.
            match self.cmd {
                b'M' => self.cmd = b'L',
                b'm' => self.cmd = b'l',
                _ => {}
            }

            return Some(event);
        }
    }
}

fn operand_count(cmd: u8) -> usize {
    match cmd {
        b'M' | b'm' | b'L' | b'l' | b'T' | b't' => 2,
        b'H' | b'h' | b'V' | b'v' => 1,
        b'C' | b'c' => 6,
        b'S' | b's' | b'Q' | b'q' => 4,
        b'A' | b'a' => 7,
        _ => 0,
    }
}

fn to_event(cmd: u8, ops: &[f32]) -> SvgEvent {
    match cmd {
        b'M' => SvgEvent::MoveTo(point(ops[0], ops[1])),
        b'm' => SvgEvent::RelativeMoveTo(vector(ops[0], ops[1])),
        b'L' => SvgEvent::LineTo(point(ops[0], ops[1])),
        b'l' => SvgEvent::RelativeLineTo(vector(ops[0], ops[1])),
        b'H' => SvgEvent::HorizontalLineTo(ops[0]),
        b'h' => SvgEvent::RelativeHorizontalLineTo(ops[0]),
        b'V' => SvgEvent::VerticalLineTo(ops[0]),
        b'v' => SvgEvent::RelativeVerticalLineTo(ops[0]),
        b'C' => SvgEvent::CubicTo(
            point(ops[0], ops[1]),
            point(ops[2], ops[3]),
            point(ops[4], ops[5]),
        ),
        b'c' => SvgEvent::RelativeCubicTo(
            vector(ops[0], ops[1]),
            vector(ops[2], ops[3]),
            vector(ops[4], ops[5]),
        ),
        b'S' => SvgEvent::SmoothCubicTo(point(ops[0], ops[1]), point(ops[2], ops[3])),
        b's' => SvgEvent::SmoothRelativeCubicTo(vector(ops[0], ops[1]), vector(ops[2], ops[3])),
        b'Q' => SvgEvent::QuadraticTo(point(ops[0], ops[1]), point(ops[2], ops[3])),
        b'q' => SvgEvent::RelativeQuadraticTo(vector(ops[0], ops[1]), vector(ops[2], ops[3])),
        b'T' => SvgEvent::SmoothQuadraticTo(point(ops[0], ops[1])),
        b't' => SvgEvent::SmoothRelativeQuadraticTo(vector(ops[0], ops[1])),
        // Only the endpoint of an arc is evaluated.
        b'A' => SvgEvent::ArcTo(point(ops[5], ops[6])),
        b'a' => SvgEvent::RelativeArcTo(vector(ops[5], ops[6])),
        _ => unreachable!(),
    }
}

#[test]
fn parse_simple_path() {
    let events: Vec<_> = PathParser::new("M 0 0 L 10 0 L 10 10 Z").collect();
    assert_eq!(
        events,
        vec![
            SvgEvent::MoveTo(point(0.0, 0.0)),
            SvgEvent::LineTo(point(10.0, 0.0)),
            SvgEvent::LineTo(point(10.0, 10.0)),
            SvgEvent::Close,
        ]
    );
}

#[test]
fn parse_polyline_move() {
    let events: Vec<_> = PathParser::new("M0,0 5,5 10,10").collect();
    assert_eq!(
        events,
        vec![
            SvgEvent::MoveTo(point(0.0, 0.0)),
            SvgEvent::LineTo(point(5.0, 5.0)),
            SvgEvent::LineTo(point(10.0, 10.0)),
        ]
    );
}

#[test]
fn parse_relative_polyline_move() {
    let events: Vec<_> = PathParser::new("m 1 2 3 4").collect();
    assert_eq!(
        events,
        vec![
            SvgEvent::RelativeMoveTo(vector(1.0, 2.0)),
            SvgEvent::RelativeLineTo(vector(3.0, 4.0)),
        ]
    );
}

#[test]
fn parse_command_repetition() {
    let events: Vec<_> = PathParser::new("M0 0 C 0 1 2 3 4 5 6 7 8 9 10 11").collect();
    assert_eq!(
        events,
        vec![
            SvgEvent::MoveTo(point(0.0, 0.0)),
            SvgEvent::CubicTo(point(0.0, 1.0), point(2.0, 3.0), point(4.0, 5.0)),
            SvgEvent::CubicTo(point(6.0, 7.0), point(8.0, 9.0), point(10.0, 11.0)),
        ]
    );
}

#[test]
fn parse_truncated_trailing_group() {
    let events: Vec<_> = PathParser::new("M 0 0 L 5").collect();
    assert_eq!(events, vec![SvgEvent::MoveTo(point(0.0, 0.0))]);
}

#[test]
fn parse_truncated_group_before_command() {
    let events: Vec<_> = PathParser::new("L 5 M 1 2").collect();
    assert_eq!(events, vec![SvgEvent::MoveTo(point(1.0, 2.0))]);
}

#[test]
fn parse_arc_endpoint_only() {
    let events: Vec<_> = PathParser::new("M0,0 A 5 5 0 0 1 10 10").collect();
    assert_eq!(
        events,
        vec![
            SvgEvent::MoveTo(point(0.0, 0.0)),
            SvgEvent::ArcTo(point(10.0, 10.0)),
        ]
    );
}

#[test]
fn parse_smooth_commands() {
    let events: Vec<_> = PathParser::new("M0,0 S 1 1 2 0 T 4 0").collect();
    assert_eq!(
        events,
        vec![
            SvgEvent::MoveTo(point(0.0, 0.0)),
            SvgEvent::SmoothCubicTo(point(1.0, 1.0), point(2.0, 0.0)),
            SvgEvent::SmoothQuadraticTo(point(4.0, 0.0)),
        ]
    );
}
