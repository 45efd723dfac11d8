use std::io;
use std::io::Write;

use plume::plotter::path_bounds;

use crate::commands::BoundsCmd;

#[derive(Debug)]
pub enum BoundsError {
    Io(io::Error),
}

impl From<io::Error> for BoundsError {
    fn from(err: io::Error) -> Self { BoundsError::Io(err) }
}

pub fn bounds(mut cmd: BoundsCmd) -> Result<(), BoundsError> {
    match path_bounds(&cmd.input) {
        Some(rect) => {
            writeln!(
                &mut *cmd.output,
                "{} {} {} {}",
                rect.origin.x, rect.origin.y, rect.size.width, rect.size.height
            )?;
        }
        None => {
            writeln!(&mut *cmd.output, "empty")?;
        }
    }

    Ok(())
}
