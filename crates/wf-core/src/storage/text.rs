//! Line-oriented text format
//!
//! ```text
//! # comment
//! n <model name>
//! p <c1> ... <cN>    point, numbered from 1 in file order
//! l <i> <j>          line through points i and j
//! f <i> <j> <k>      face through points i, j and k
//! ```
//!
//! Blank lines and everything after `#` are ignored. Elements go through the
//! model's own validation, so collisions inside a file are format errors.
//! Coordinates must be finite. Names are written as-is, so a name holding `#`,
//! a line break or surrounding whitespace cannot be exported.

use std::io::{BufRead, Write};
use std::str::FromStr;

use super::{ExportOptions, ModelExporter, ModelImporter, StorageError};
use crate::collection::DistinctCollection;
use crate::constants::DEFAULT_MODEL_NAME;
use crate::element::Element;
use crate::model::Model;
use crate::point::Point;

/// Reader and writer for the `.wf` text format
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    options: ExportOptions,
}

impl TextFormat {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }
}

impl<const N: usize> ModelImporter<N> for TextFormat {
    fn read(&self, reader: &mut dyn BufRead) -> Result<Model<N>, StorageError> {
        let mut model = Model::new(DEFAULT_MODEL_NAME);
        let mut points: Vec<Point<N>> = Vec::new();

        for (index, raw) in reader.lines().enumerate() {
            let line = index + 1;
            let raw = raw.map_err(|e| StorageError::Io(e.to_string()))?;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let (tag, rest) = content
                .split_once(char::is_whitespace)
                .unwrap_or((content, ""));
            let rest = rest.trim();
            match tag {
                "n" => model.set_name(rest),
                "p" => {
                    let coords: [f64; N] = parse_fields(rest, line, "coordinate")?;
                    if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
                        return Err(format_error(line, format!("non-finite coordinate '{bad}'")));
                    }
                    points.push(Point::new(coords));
                }
                "l" => {
                    let line_element = element_from_indices::<N, 2>(rest, line, &points)?;
                    model
                        .add_line_element(line_element)
                        .map_err(|e| format_error(line, e))?;
                }
                "f" => {
                    let face = element_from_indices::<N, 3>(rest, line, &points)?;
                    model
                        .add_face_element(face)
                        .map_err(|e| format_error(line, e))?;
                }
                other => {
                    return Err(format_error(line, format!("unknown record '{other}'")));
                }
            }
        }

        tracing::debug!(
            "Parsed {} points, {} lines, {} faces",
            points.len(),
            model.lines().len(),
            model.faces().len()
        );
        Ok(model)
    }
}

impl<const N: usize> ModelExporter<N> for TextFormat {
    fn write(&self, model: &Model<N>, writer: &mut dyn Write) -> Result<(), StorageError> {
        let name = model.name();
        if name.contains(['#', '\n', '\r']) || name.trim() != name {
            return Err(StorageError::Serialize(format!(
                "model name {name:?} cannot be stored as a text record"
            )));
        }

        let points = model.points();
        let mut out = String::new();

        if self.options.write_header {
            out.push_str(&format!("# wireframe model, {N} dimensions\n"));
        }
        out.push_str(&format!("n {name}\n"));

        for point in &points {
            let coords: Vec<String> = point
                .to_array()
                .iter()
                .map(|c| self.options.format_coordinate(*c))
                .collect();
            out.push_str(&format!("p {}\n", coords.join(" ")));
        }
        for line in model.lines() {
            out.push_str(&format!("l {}\n", point_indices(line, &points)?));
        }
        for face in model.faces() {
            out.push_str(&format!("f {}\n", point_indices(face, &points)?));
        }

        writer
            .write_all(out.as_bytes())
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

fn format_error(line: usize, reason: impl ToString) -> StorageError {
    StorageError::Format {
        line,
        reason: reason.to_string(),
    }
}

/// Parse exactly `M` whitespace-separated fields
fn parse_fields<T: FromStr, const M: usize>(
    text: &str,
    line: usize,
    what: &str,
) -> Result<[T; M], StorageError> {
    let fields = text
        .split_whitespace()
        .map(|field| {
            field
                .parse::<T>()
                .map_err(|_| format_error(line, format!("invalid {what} '{field}'")))
        })
        .collect::<Result<Vec<T>, _>>()?;
    let count = fields.len();
    fields
        .try_into()
        .map_err(|_| format_error(line, format!("expected {M} {what} values, got {count}")))
}

/// Build an element from 1-based indices into the point table
fn element_from_indices<const N: usize, const K: usize>(
    text: &str,
    line: usize,
    points: &[Point<N>],
) -> Result<Element<N, K>, StorageError> {
    let indices: [usize; K] = parse_fields(text, line, "point index")?;
    let mut resolved = [Point::ORIGIN; K];
    for (slot, index) in resolved.iter_mut().zip(indices) {
        *slot = index
            .checked_sub(1)
            .and_then(|i| points.get(i))
            .copied()
            .ok_or_else(|| {
                format_error(
                    line,
                    format!("point index {index} out of range (1..={})", points.len()),
                )
            })?;
    }
    Ok(Element::new(resolved))
}

/// 1-based indices of an element's points in the exported point table
fn point_indices<const N: usize, const K: usize>(
    element: &Element<N, K>,
    points: &impl DistinctCollection<Point<N>>,
) -> Result<String, StorageError> {
    let indices = element
        .points()
        .iter()
        .map(|p| {
            points
                .position(p)
                .map(|i| (i + 1).to_string())
                .ok_or_else(|| StorageError::Serialize(format!("point {p} has no table entry")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(indices.join(" "))
}
