#![cfg_attr(not(test), no_std)]

//! Word-wrapped text layout for small fixed-cell displays.

pub mod color;
pub mod format;
pub mod grid;
pub mod orientation;
pub mod printer;
pub mod wrap;

pub use color::Color;
pub use format::FormatState;
pub use grid::{Capacity, ConfigError, GlyphGrid, GridGeometry};
pub use orientation::{Orientation, OrientationClass};
pub use printer::{PrintError, PrintReport, Printer};
