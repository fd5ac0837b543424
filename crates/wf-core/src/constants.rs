//! Global constants for wf-core

/// Name given to models that do not declare one
pub const DEFAULT_MODEL_NAME: &str = "untitled";

/// Pad value appended when promoting a point to a higher dimension
pub const DEFAULT_PAD: f64 = 0.0;

/// File extension of the line-oriented text format
pub const TEXT_FORMAT_EXTENSION: &str = "wf";

/// File extension of the RON snapshot format
pub const RON_FORMAT_EXTENSION: &str = "ron";

/// Dimension of models handled by the controller
pub const MODEL_DIMENSION: usize = 3;
