//! Export options for model files

/// Export options for the text format
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Fixed number of decimals for coordinates (None = shortest exact form)
    pub precision: Option<usize>,
    /// Whether to write a leading comment describing the file
    pub write_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            precision: None,
            write_header: true,
        }
    }
}

impl ExportOptions {
    /// Format a coordinate according to these options
    pub(crate) fn format_coordinate(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        }
    }
}
