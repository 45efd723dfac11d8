use std::io;
use std::io::Write;

use log::warn;
use plume::plotter::{compile_document, write_commands, Element};

use crate::commands::CompileCmd;

#[derive(Debug)]
pub enum CompileError {
    Io(io::Error),
}

impl From<io::Error> for CompileError {
    fn from(err: io::Error) -> Self { CompileError::Io(err) }
}

pub fn compile(mut cmd: CompileCmd) -> Result<(), CompileError> {
    let elements = vec![Element::path(&cmd.input)];
    let commands = compile_document(&elements, &cmd.options);

    if commands.is_empty() && !cmd.input.trim().is_empty() {
        warn!("no commands generated for a non-empty path");
    }

    if cmd.count {
        writeln!(&mut *cmd.output, "commands: {}", commands.len())?;
        return Ok(());
    }

    write_commands(&mut cmd.output, &commands, cmd.options.fast)?;

    Ok(())
}
