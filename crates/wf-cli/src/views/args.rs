//! Argument parsing for view commands

use wf_core::{Coords3, MODEL_DIMENSION};

use crate::error::CliError;

pub fn parse_index(arg: &str) -> Result<usize, CliError> {
    arg.parse()
        .map_err(|_| CliError::InvalidIndex(arg.to_string()))
}

pub fn parse_number(arg: &str) -> Result<f64, CliError> {
    match arg.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::InvalidNumber(arg.to_string())),
    }
}

/// Parse whitespace-separated coordinates into points of the model dimension
pub fn parse_points(args: &[&str]) -> Result<Vec<Coords3>, CliError> {
    if args.is_empty() || args.len() % MODEL_DIMENSION != 0 {
        return Err(CliError::Usage);
    }
    args.chunks(MODEL_DIMENSION)
        .map(|chunk| {
            let mut coords = [0.0; MODEL_DIMENSION];
            for (slot, arg) in coords.iter_mut().zip(chunk) {
                *slot = parse_number(arg)?;
            }
            Ok(coords)
        })
        .collect()
}
