use std::io;

use plume::plotter::PlotOptions;

pub struct CompileCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: PlotOptions,
    pub count: bool,
}

pub struct BoundsCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
}
