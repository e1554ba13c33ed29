use std::{
    fmt::Display,
    io::{self, BufWriter, Write},
};

use anyhow::{Context, Result};
use circle_strip::{
    circle::{CircleOptions, CircleSymmetry, create_circle, iter_points, max_radius_error},
    core::traits::Real,
};
use clap::{Parser, ValueEnum};
use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Symmetry {
    Half,
    Quarter,
}

impl From<Symmetry> for CircleSymmetry {
    fn from(s: Symmetry) -> Self {
        match s {
            Symmetry::Half => CircleSymmetry::Half,
            Symmetry::Quarter => CircleSymmetry::Quarter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Precision {
    F32,
    F64,
}

/// Print the points of a unit circle in triangle strip order, one `x,y` pair per line.
#[derive(Parser, Debug)]
#[command(name = "circle_demo", version)]
struct Args {
    /// Number of points on the circle.
    #[arg(default_value_t = 5)]
    count: usize,

    /// Walk the circle counter clockwise instead of clockwise.
    #[arg(long)]
    counter_clockwise: bool,

    /// Symmetry exploited when generating the points.
    #[arg(long, value_enum, default_value_t = Symmetry::Half)]
    symmetry: Symmetry,

    /// Floating point precision of the generated points.
    #[arg(long, value_enum, default_value_t = Precision::F32)]
    precision: Precision,

    /// Log the largest distance of any point from the unit circle.
    #[arg(long)]
    check: bool,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let options = CircleOptions::new()
        .with_clockwise(!args.counter_clockwise)
        .with_symmetry(args.symmetry.into());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let printed = match args.precision {
        Precision::F32 => print_circle::<f32>(&mut out, args.count, &options, args.check),
        Precision::F64 => print_circle::<f64>(&mut out, args.count, &options, args.check),
    };
    printed?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn print_circle<T>(
    out: &mut impl Write,
    count: usize,
    options: &CircleOptions,
    check: bool,
) -> Result<()>
where
    T: Real + Display,
{
    let len = count
        .checked_mul(2)
        .with_context(|| format!("point count {count} is too large"))?;
    let mut points = Vec::new();
    points
        .try_reserve_exact(len)
        .with_context(|| format!("failed to allocate memory using {count} points"))?;
    points.resize(len, T::zero());

    create_circle(count, &mut points, options)
        .with_context(|| format!("failed to generate circle with {count} points"))?;

    if check {
        info!(
            "largest radius error of {count} points: {:?}",
            max_radius_error(&points)
        );
    }

    write_points(out, &points)
}

fn write_points<T>(out: &mut impl Write, points: &[T]) -> Result<()>
where
    T: Real + Display,
{
    writeln!(out, "Circle with {} points:", points.len() / 2)?;
    for p in iter_points(points) {
        writeln!(out, "{},{}", p.x, p.y)?;
    }
    Ok(())
}
