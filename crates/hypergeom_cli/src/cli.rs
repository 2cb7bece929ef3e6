use std::io::Write;
use std::ops::RangeInclusive;

use eyre::{Context, Result};
use hypergeom::prelude::*;

/// Vector and hyperplane calculator
///
/// Objects are written as `v:1,2,3` for vectors and `h:4,5;-13` for
/// hyperplanes `4x1 + 5x2 - 13 = 0`.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print an object in human-readable form.
    Show { object: Object },

    /// Print the sum of two vectors.
    Add { a: Object, b: Object },
    /// Print the difference of two vectors.
    Sub { a: Object, b: Object },
    /// Print the projection of the first vector onto the second, along with
    /// the projection ratio.
    Project { a: Object, b: Object },
    /// Print the magnitude of a vector.
    Magnitude { v: Object },
    /// Print the unit vector in the direction of a vector.
    Unit { v: Object },
    /// Print whether two vectors are perpendicular.
    Perpendicular { a: Object, b: Object },

    /// Print the signed distance of a point from a hyperplane.
    PointDistance { plane: Object, point: Object },
    /// Print the signed distance of the origin from a hyperplane.
    OriginDistance { plane: Object },
    /// Print which half-space of a hyperplane contains a point (`-`, `0`, or
    /// `+`).
    Halfspace { plane: Object, point: Object },
    /// Print whether two hyperplanes are parallel.
    Parallel { a: Object, b: Object },
    /// Print the distance between two parallel hyperplanes.
    Distance { a: Object, b: Object },

    /// Plot 2D vectors and hyperplanes and print the draw commands as JSON.
    Plot {
        /// Objects to plot.
        #[arg(required = true)]
        objects: Vec<Object>,

        /// Output file, use '-' for stdout.
        #[arg(short, long, value_parser, default_value = "-")]
        output: clio::Output,

        /// Minimum X coordinate at which to sample lines.
        #[arg(long, default_value_t = *DEFAULT_PLOT_RANGE.start(), allow_negative_numbers = true)]
        x_min: i32,
        /// Maximum X coordinate at which to sample lines.
        #[arg(long, default_value_t = *DEFAULT_PLOT_RANGE.end(), allow_negative_numbers = true)]
        x_max: i32,
    },
}

pub(crate) fn exec(subcommand: Subcommand, out: &mut impl Write) -> Result<()> {
    log::debug!("executing {subcommand:?}");

    match subcommand {
        Subcommand::Show { object } => match object {
            Object::Vector(v) => writeln!(out, "{v}")?,
            Object::Hyperplane(h) => writeln!(out, "{h}")?,
        },

        Subcommand::Add { a, b } => writeln!(out, "{}", vector(a)?.checked_add(&vector(b)?)?)?,
        Subcommand::Sub { a, b } => writeln!(out, "{}", vector(a)?.checked_sub(&vector(b)?)?)?,
        Subcommand::Project { a, b } => {
            let (projection, ratio) = vector(a)?.projection_onto(&vector(b)?)?;
            writeln!(out, "{projection}")?;
            writeln!(out, "{ratio}")?;
        }
        Subcommand::Magnitude { v } => writeln!(out, "{}", vector(v)?.magnitude())?,
        Subcommand::Unit { v } => writeln!(out, "{}", vector(v)?.unit_vector()?)?,
        Subcommand::Perpendicular { a, b } => {
            writeln!(out, "{}", vector(a)?.is_perpendicular_to(&vector(b)?)?)?;
        }

        Subcommand::PointDistance { plane, point } => {
            let d = hyperplane(plane)?.distance_from_point(&vector(point)?)?;
            writeln!(out, "{d}")?;
        }
        Subcommand::OriginDistance { plane } => {
            writeln!(out, "{}", hyperplane(plane)?.distance_from_origin()?)?;
        }
        Subcommand::Halfspace { plane, point } => {
            let sign = hyperplane(plane)?.check_halfspace(&vector(point)?)?;
            writeln!(out, "{sign}")?;
        }
        Subcommand::Parallel { a, b } => {
            writeln!(out, "{}", hyperplane(a)?.is_parallel_to(&hyperplane(b)?)?)?;
        }
        Subcommand::Distance { a, b } => {
            let distance = hyperplane(a)?.distance_from_hyperplane(&hyperplane(b)?)?;
            writeln!(out, "{distance}")?;
        }

        Subcommand::Plot {
            objects,
            mut output,
            x_min,
            x_max,
        } => {
            let canvas = plot(&objects, x_min..=x_max)?;
            serde_json::to_writer_pretty(&mut output, &canvas.commands)
                .context("error serializing draw commands")?;
            writeln!(output)?;
        }
    }

    Ok(())
}

fn vector(object: Object) -> Result<Vector> {
    Ok(Vector::try_from(object)?)
}

fn hyperplane(object: Object) -> Result<Hyperplane> {
    Ok(Hyperplane::try_from(object)?)
}

fn plot(objects: &[Object], x_range: RangeInclusive<i32>) -> Result<RecordingCanvas> {
    let mut canvas = RecordingCanvas::default();
    for object in objects {
        let result = match object {
            Object::Vector(v) => v.plot_2d(&mut canvas, None, None, &Color::default()),
            Object::Hyperplane(h) => h.plot_2d(&mut canvas, x_range.clone()),
        };
        result.wrap_err_with(|| format!("error plotting {object}"))?;
    }
    Ok(canvas)
}
