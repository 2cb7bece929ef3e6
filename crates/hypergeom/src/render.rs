//! Minimal 2D plotting capability used by the `plot_2d()` methods.
//!
//! The geometry types never draw to a global surface. Instead, a [`Canvas`] is
//! passed to each plotting call. [`RecordingCanvas`] is a simple canvas that
//! records the draw commands so they can be serialized or inspected.

use std::fmt;

use crate::{Float, util};

/// Surface that 2D geometry can be drawn onto.
///
/// Draw calls are append-only; a canvas never reports errors back to the
/// geometry that is drawing onto it.
pub trait Canvas {
    /// Draws a polyline through `points`.
    fn draw_line(&mut self, points: &[[Float; 2]]);
    /// Draws an arrow representing `vector`, starting at `start`.
    fn draw_arrow(&mut self, start: [Float; 2], vector: [Float; 2], label: &str, color: &Color);
    /// Shows a legend for the labeled elements drawn so far.
    fn show_legend(&mut self);
}

impl<C: Canvas + ?Sized> Canvas for &'_ mut C {
    fn draw_line(&mut self, points: &[[Float; 2]]) {
        (**self).draw_line(points);
    }
    fn draw_arrow(&mut self, start: [Float; 2], vector: [Float; 2], label: &str, color: &Color) {
        (**self).draw_arrow(start, vector, label, color);
    }
    fn show_legend(&mut self) {
        (**self).show_legend();
    }
}

/// Named color, such as `green` or `#ff0000`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub String);

impl Default for Color {
    fn default() -> Self {
        Self::new("green")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Color {
    /// Constructs a color from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Single command recorded by a [`RecordingCanvas`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case", tag = "type")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Polyline
    Line {
        /// Points along the line.
        points: Vec<[Float; 2]>,
    },
    /// Arrow
    Arrow {
        /// Tail of the arrow.
        start: [Float; 2],
        /// Vector from the tail to the head of the arrow.
        vector: [Float; 2],
        /// Legend label.
        label: String,
        /// Arrow color.
        color: Color,
    },
    /// Legend
    Legend,
}

/// Canvas that records every draw command in order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingCanvas {
    /// Commands in the order they were drawn.
    pub commands: Vec<DrawCommand>,
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, points: &[[Float; 2]]) {
        log::trace!("drawing line through {} points", points.len());
        self.commands.push(DrawCommand::Line {
            points: points.to_vec(),
        });
    }

    fn draw_arrow(&mut self, start: [Float; 2], vector: [Float; 2], label: &str, color: &Color) {
        log::trace!("drawing arrow {vector:?} from {start:?} labeled {label:?}");
        self.commands.push(DrawCommand::Arrow {
            start,
            vector,
            label: label.to_owned(),
            color: color.clone(),
        });
    }

    fn show_legend(&mut self) {
        self.commands.push(DrawCommand::Legend);
    }
}

/// Returns the default legend label for a 2D vector.
pub(crate) fn default_label([x, y]: [Float; 2]) -> String {
    format!(
        "Vector(x:{} | y:{})",
        util::round_to(x, 2),
        util::round_to(y, 2),
    )
}
