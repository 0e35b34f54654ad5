//! Writer für Kartendateien.

use super::{FILL, POINTS, SIDES, STROKE, STROKE_WIDTH};
use crate::core::PolyShape;

/// Zeilentrenner der Plattform
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Zeilentrenner der Plattform
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Schreibt den Fünf-Zeilen-Block einer Form (ohne abschließenden Zeilentrenner).
///
/// Zahlen werden verlustfrei formatiert, damit ein erneutes Einlesen
/// denselben Vertex-Buffer ergibt.
pub fn write_shape_block(shape: &PolyShape) -> String {
    let style = shape.style();
    let points = shape
        .vertices()
        .iter()
        .map(|v| format!("{v:?}"))
        .collect::<Vec<_>>()
        .join(" ");

    [
        format!("{SIDES} {}", shape.sides()),
        format!("{FILL} {}", style.fill),
        format!("{STROKE} {}", style.stroke),
        format!("{STROKE_WIDTH} {:?}", style.stroke_width),
        format!("{POINTS} {points}"),
    ]
    .join(LINE_SEPARATOR)
}

/// Verbindet die Blöcke aller Formen in der gegebenen Reihenfolge.
pub fn write_map<'a>(shapes: impl IntoIterator<Item = &'a PolyShape>) -> String {
    shapes
        .into_iter()
        .map(write_shape_block)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}
