use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lsys_sketch::{SketchCanvas, TurtleConfig, TurtleInterpreter, DEFAULT_TURN_ANGLE};

/// Traces an expanded L-System command file into a 2D sketch and writes it
/// as JSON on stdout.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// File whose entire content is the command string.
    path: PathBuf,

    /// Turn angle in degrees for `+` and `-`.
    #[arg(default_value_t = DEFAULT_TURN_ANGLE)]
    angle: f32,

    /// Any value here enables leaf mode: `{`/`}` are treated as leaf
    /// markers and no fill regions are produced.
    leaf: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let commands = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let config = TurtleConfig {
        turn_angle: args.angle,
        leaf_mode: args.leaf.is_some(),
        ..TurtleConfig::default()
    };

    let mut canvas = SketchCanvas::new();
    TurtleInterpreter::new(config).interpret(&commands, &mut canvas)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, canvas.sketch())?;
    writeln!(out)?;
    Ok(())
}
