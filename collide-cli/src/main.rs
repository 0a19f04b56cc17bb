//! CLI for the collision kernel.
//!
//! Provides:
//! - Coercion of loosely-typed (JSON) shape descriptions into canonical circles and lines
//! - Evaluation of a collision predicate between two shapes

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use collide_core::Input;

use check::{Predicate, Shapes};

#[derive(Parser)]
#[command(name = "collide")]
#[command(about = "2D shape coercion and collision tests", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce JSON arguments into a circle: `x y r`, `[x, y] r`, or one description
    Circle {
        /// One to three JSON values
        #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true)]
        args: Vec<String>,

        /// Print the canonical circle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Coerce JSON arguments into a line: `xa ya xb yb`, `[xa, ya] [xb, yb]`, or one description
    Line {
        /// One, two or four JSON values
        #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
        args: Vec<String>,

        /// Print the canonical line as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a collision predicate; prints `true` or `false`
    Check {
        #[arg(value_enum)]
        predicate: Predicate,

        /// First shape (JSON)
        a: String,

        /// Second shape (JSON)
        b: String,
    },

    /// Print the rect/line strategy selected for this CPU
    SimdLevel,
}

fn parse_args(args: &[String]) -> Result<Vec<Input>> {
    args.iter()
        .map(|arg| Input::from_json(arg).map_err(|e| anyhow::anyhow!("Invalid JSON {:?}: {}", arg, e)))
        .collect()
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Circle { args, json } => {
            let circle = check::circle(&parse_args(&args)?)?;
            Ok(if json { serde_json::to_string(&circle)? } else { circle.to_string() })
        }
        Commands::Line { args, json } => {
            let line = check::line(&parse_args(&args)?)?;
            Ok(if json { serde_json::to_string(&line)? } else { line.to_string() })
        }
        Commands::Check { predicate, a, b } => {
            let shapes = Shapes::parse(predicate, &a, &b)?;
            let collides = shapes.collides();
            debug!("{:?}: {}", shapes, collides);
            Ok(collides.to_string())
        }
        Commands::SimdLevel => Ok(collide_core::collision::simd_level().to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = collide_core::parse_log_level(cli.log_level.as_deref()).map_err(anyhow::Error::msg)?;
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    println!("{}", run(cli.command)?);
    Ok(())
}
