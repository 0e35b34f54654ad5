//! Textformat für Kartendateien.
//!
//! Je Form ein Block aus fünf Zeilen in fester Reihenfolge:
//! `sides`, `fill`, `stroke`, `strokeWidth`, `points`.
pub mod parser;
pub mod writer;

pub use parser::{parse_map, parse_map_lines, parse_shape_block, ShapeBlock};
pub use writer::{write_map, write_shape_block, LINE_SEPARATOR};

/// Zeilen pro Form-Block
pub const BLOCK_LINES: usize = 5;

pub(crate) const SIDES: &str = "sides";
pub(crate) const FILL: &str = "fill";
pub(crate) const STROKE: &str = "stroke";
pub(crate) const STROKE_WIDTH: &str = "strokeWidth";
pub(crate) const POINTS: &str = "points";

/// Alle Schlüsselwörter in Block-Reihenfolge
pub(crate) const FIELD_ORDER: [&str; BLOCK_LINES] = [SIDES, FILL, STROKE, STROKE_WIDTH, POINTS];
