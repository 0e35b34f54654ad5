//! Parser für Kartendateien.

mod fields;

use super::{BLOCK_LINES, FIELD_ORDER, FILL, STROKE, STROKE_WIDTH};
use crate::core::{EditorResult, MapFileError, PolyShape, ShapeKind, ShapeStyle};
use fields::{parse_color, parse_f64, parse_points, parse_sides, split_field};

/// Inhalt eines gelesenen Blocks vor dem Aufbau der Form
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBlock {
    pub sides: usize,
    pub style: ShapeStyle,
    pub vertices: Vec<f64>,
}

impl ShapeBlock {
    /// Baut eine finalisierte Form aus dem Block.
    pub fn into_shape(self) -> EditorResult<PolyShape> {
        PolyShape::from_vertices(ShapeKind::Room, self.sides, self.style, self.vertices)
    }
}

/// Parsed den vollständigen Inhalt einer Kartendatei.
pub fn parse_map(content: &str) -> EditorResult<Vec<PolyShape>> {
    let lines: Vec<&str> = content.lines().collect();
    parse_map_lines(&lines)
}

/// Gruppiert die Zeilen zu je fünf und baut daraus Formen in Dateireihenfolge.
///
/// Leerzeilen am Dateiende werden ignoriert. Ein fehlerhafter Block lässt
/// das gesamte Einlesen scheitern.
pub fn parse_map_lines<S: AsRef<str>>(lines: &[S]) -> EditorResult<Vec<PolyShape>> {
    let used = lines
        .iter()
        .rposition(|line| !line.as_ref().trim().is_empty())
        .map_or(0, |last| last + 1);
    let lines = &lines[..used];

    if lines.len() % BLOCK_LINES != 0 {
        return Err(MapFileError::IncompleteBlock { lines: lines.len() }.into());
    }

    let mut shapes = Vec::with_capacity(lines.len() / BLOCK_LINES);
    for (index, block) in lines.chunks(BLOCK_LINES).enumerate() {
        let first_line = index * BLOCK_LINES + 1;
        shapes.push(parse_shape_block(block, first_line)?.into_shape()?);
    }
    Ok(shapes)
}

/// Parsed einen Fünf-Zeilen-Block. `first_line` ist die 1-basierte Dateizeile der ersten Zeile.
pub fn parse_shape_block<S: AsRef<str>>(
    block: &[S],
    first_line: usize,
) -> Result<ShapeBlock, MapFileError> {
    if block.len() != BLOCK_LINES {
        return Err(MapFileError::IncompleteBlock { lines: block.len() });
    }

    let mut values = Vec::with_capacity(BLOCK_LINES);
    for (offset, (line, expected)) in block.iter().zip(FIELD_ORDER).enumerate() {
        values.push(split_field(line.as_ref(), expected, first_line + offset)?);
    }

    let sides = parse_sides(&values[0], first_line)?;
    let fill = parse_color(&values[1], FILL, first_line + 1)?;
    let stroke = parse_color(&values[2], STROKE, first_line + 2)?;
    let stroke_width = parse_single(&values[3], STROKE_WIDTH, first_line + 3)?;
    if stroke_width < 0.0 {
        return Err(MapFileError::InvalidNumber {
            line: first_line + 3,
            value: values[3][0].to_string(),
        });
    }
    let vertices = parse_points(&values[4], sides, first_line + 4)?;

    Ok(ShapeBlock {
        sides,
        style: ShapeStyle {
            fill,
            stroke,
            stroke_width,
        },
        vertices,
    })
}

fn parse_single(values: &[&str], field: &'static str, line: usize) -> Result<f64, MapFileError> {
    match values {
        [] => Err(MapFileError::MissingValue { line, field }),
        [value] => parse_f64(value, line),
        [_, extra, ..] => Err(MapFileError::TrailingValue {
            line,
            token: (*extra).to_string(),
        }),
    }
}
