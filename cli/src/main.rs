mod bounds;
mod commands;
mod compile;

use clap::*;

use crate::commands::*;
use plume::math::vector;
use plume::plotter::PlotOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::{stderr, stdout};

fn main() {
    env_logger::init();

    let matches = App::new("Plume command-line interface")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("Path to plotter command compiler")
        .subcommand(SubCommand::with_name("compile")
            .about("Compiles a path into plotter commands")
            .arg(Arg::with_name("TOLERANCE")
                .short("t")
                .long("tolerance")
                .help("Sets the simplification tolerance in pixels (2.0 by default)")
                .value_name("TOLERANCE")
                .takes_value(true)
            )
            .arg(Arg::with_name("SCALE")
                .short("s")
                .long("scale")
                .help("Sets an explicit scale instead of fitting the canvas")
                .value_name("SCALE")
                .takes_value(true)
            )
            .arg(Arg::with_name("OFFSET_X")
                .short("x")
                .long("offset-x")
                .help("Sets an explicit horizontal offset in pixels")
                .value_name("OFFSET")
                .takes_value(true)
            )
            .arg(Arg::with_name("OFFSET_Y")
                .short("y")
                .long("offset-y")
                .help("Sets an explicit vertical offset in pixels")
                .value_name("OFFSET")
                .takes_value(true)
            )
            .arg(Arg::with_name("WIDTH")
                .long("width")
                .help("Sets the canvas width in pixels (1404 by default)")
                .value_name("WIDTH")
                .takes_value(true)
            )
            .arg(Arg::with_name("HEIGHT")
                .long("height")
                .help("Sets the canvas height in pixels (1872 by default)")
                .value_name("HEIGHT")
                .takes_value(true)
            )
            .arg(Arg::with_name("MARGIN")
                .long("margin")
                .help("Sets the auto-fit margin in pixels (100 by default)")
                .value_name("MARGIN")
                .takes_value(true)
            )
            .arg(Arg::with_name("FAST")
                .short("f")
                .long("fast")
                .help("Uses the fast-mode command prefix")
            )
            .arg(Arg::with_name("RECT_PRIMITIVE")
                .long("rect-primitive")
                .help("Emits rectangles as a single primitive command")
            )
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of commands")
            )
        )
        .subcommand(SubCommand::with_name("bounds")
            .about("Prints the bounding box of a path")
        )
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .get_matches();

    let mut input_buffer = matches.value_of("PATH").unwrap_or(&"").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        if let Ok(mut file) = File::open(input_file) {
            file.read_to_string(&mut input_buffer).unwrap();
        } else {
            write!(&mut stderr(), "Cannot open file {}", input_file).unwrap();
            return;
        }
    }

    let mut output: Box<dyn Write> = Box::new(stdout());

    if let Some(output_file) = matches.value_of("OUTPUT") {
        if let Ok(file) = File::create(output_file) {
            output = Box::new(file);
        }
    }

    if let Some(compile_matches) = matches.subcommand_matches("compile") {
        let cmd = CompileCmd {
            input: input_buffer,
            output,
            options: get_options(compile_matches),
            count: compile_matches.is_present("COUNT"),
        };

        compile::compile(cmd).unwrap();

    } else if matches.subcommand_matches("bounds").is_some() {
        let cmd = BoundsCmd {
            input: input_buffer,
            output,
        };

        bounds::bounds(cmd).unwrap();
    }
}

fn get_options(matches: &ArgMatches) -> PlotOptions {
    let mut options = PlotOptions::default();

    options.tolerance = get_f32(matches, "TOLERANCE", PlotOptions::DEFAULT_TOLERANCE);
    options.margin = get_f32(matches, "MARGIN", options.margin);
    options.canvas_width = get_f32(matches, "WIDTH", options.canvas_width as f32) as i32;
    options.canvas_height = get_f32(matches, "HEIGHT", options.canvas_height as f32) as i32;
    options.fast = matches.is_present("FAST");
    options.rectangle_as_primitive = matches.is_present("RECT_PRIMITIVE");

    if let Some(scale_str) = matches.value_of("SCALE") {
        options.scale = scale_str.parse().ok();
    }

    if matches.is_present("OFFSET_X") || matches.is_present("OFFSET_Y") {
        options.offset = Some(vector(
            get_f32(matches, "OFFSET_X", 0.0),
            get_f32(matches, "OFFSET_Y", 0.0),
        ));
    }

    options
}

fn get_f32(matches: &ArgMatches, name: &str, default: f32) -> f32 {
    if let Some(value_str) = matches.value_of(name) {
        return value_str.parse().unwrap_or(default);
    }

    default
}
