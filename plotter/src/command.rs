use std::fmt;
use std::io;

use crate::math::IntPoint;

/// The default command prefix.
pub const PEN_PREFIX: &str = "pen";

/// The fast-mode command prefix: the device sleeps less between events.
/// The substitution carries no other semantic difference.
pub const FAST_PREFIX: &str = "fastpen";

/// One instruction of the plotter's line-oriented command grammar.
///
/// Coordinates are destination pixels; no floating-point value ever appears
/// in the emitted text.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PlotterCommand {
    /// Put the pen down at a position, starting a stroke.
    Down(IntPoint),
    /// Draw a straight stroke segment to a position.
    Move(IntPoint),
    /// Lift the pen, ending the stroke.
    Up,
    /// Draw a circle (or ellipse) at a center with two radii.
    Circle(IntPoint, i32, i32),
    /// Draw a single straight line between two points.
    Line(IntPoint, IntPoint),
    /// Draw an axis-aligned rectangle between two opposite corners.
    Rectangle(IntPoint, IntPoint),
}

impl PlotterCommand {
    fn write_suffix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PlotterCommand::Down(p) => write!(f, "down {} {}", p.x, p.y),
            PlotterCommand::Move(p) => write!(f, "move {} {}", p.x, p.y),
            PlotterCommand::Up => write!(f, "up"),
            PlotterCommand::Circle(center, r1, r2) => {
                write!(f, "circle {} {} {} {}", center.x, center.y, r1, r2)
            }
            PlotterCommand::Line(from, to) => {
                write!(f, "line {} {} {} {}", from.x, from.y, to.x, to.y)
            }
            PlotterCommand::Rectangle(a, b) => {
                write!(f, "rectangle {} {} {} {}", a.x, a.y, b.x, b.y)
            }
        }
    }
}

impl fmt::Display for PlotterCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", PEN_PREFIX)?;
        self.write_suffix(f)
    }
}

/// Writes commands as text, one per line, with a configurable prefix.
#[derive(Copy, Clone, Debug)]
pub struct CommandWriter {
    prefix: &'static str,
}

impl CommandWriter {
    pub fn new(fast: bool) -> Self {
        CommandWriter {
            prefix: if fast { FAST_PREFIX } else { PEN_PREFIX },
        }
    }

    pub fn prefix(&self) -> &'static str { self.prefix }

    pub fn write<W: io::Write>(
        &self,
        output: &mut W,
        command: &PlotterCommand,
    ) -> io::Result<()> {
        writeln!(output, "{} {}", self.prefix, Suffix(command))
    }
}

/// Writes a whole command sequence with the prefix selected by `fast`.
pub fn write_commands<W: io::Write>(
    output: &mut W,
    commands: &[PlotterCommand],
    fast: bool,
) -> io::Result<()> {
    let writer = CommandWriter::new(fast);
    for command in commands {
        writer.write(output, command)?;
    }

    Ok(())
}

struct Suffix<'l>(&'l PlotterCommand);

impl<'l> fmt::Display for Suffix<'l> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.write_suffix(f)
    }
}

#[cfg(test)]
use crate::math::int_point;

#[test]
fn display_commands() {
    assert_eq!(PlotterCommand::Down(int_point(3, 4)).to_string(), "pen down 3 4");
    assert_eq!(PlotterCommand::Move(int_point(-1, 0)).to_string(), "pen move -1 0");
    assert_eq!(PlotterCommand::Up.to_string(), "pen up");
    assert_eq!(
        PlotterCommand::Circle(int_point(50, 50), 20, 20).to_string(),
        "pen circle 50 50 20 20"
    );
    assert_eq!(
        PlotterCommand::Line(int_point(0, 0), int_point(5, 5)).to_string(),
        "pen line 0 0 5 5"
    );
    assert_eq!(
        PlotterCommand::Rectangle(int_point(1, 2), int_point(3, 4)).to_string(),
        "pen rectangle 1 2 3 4"
    );
}

#[test]
fn fast_prefix() {
    let commands = [
        PlotterCommand::Down(int_point(0, 0)),
        PlotterCommand::Move(int_point(1, 1)),
        PlotterCommand::Up,
    ];

    let mut out = Vec::new();
    write_commands(&mut out, &commands, true).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "fastpen down 0 0\nfastpen move 1 1\nfastpen up\n"
    );

    let mut out = Vec::new();
    write_commands(&mut out, &commands, false).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "pen down 0 0\npen move 1 1\npen up\n"
    );
}
