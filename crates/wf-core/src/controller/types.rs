//! Records, statistics and error codes exposed by the controller

use crate::error::GeometryError;
use crate::storage::StorageError;

/// Edit state of an element since the model was loaded or last saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementStatus {
    #[default]
    Untouched,
    Created,
    Modified,
}

impl ElementStatus {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementStatus::Untouched => "untouched",
            ElementStatus::Created => "created",
            ElementStatus::Modified => "modified",
        }
    }

    /// Status after an edit: new elements stay new
    pub(crate) fn after_edit(self) -> Self {
        match self {
            ElementStatus::Created => ElementStatus::Created,
            ElementStatus::Untouched | ElementStatus::Modified => ElementStatus::Modified,
        }
    }
}

/// An element together with its edit status
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord<E> {
    pub element: E,
    pub status: ElementStatus,
}

/// Model-wide measurements
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    /// Distinct points over all lines and faces
    pub total_point_count: usize,
    pub total_line_count: usize,
    pub total_line_length: f64,
    pub total_face_count: usize,
    pub total_face_area: f64,
    /// Zero for an empty model
    pub bounding_box_volume: f64,
}

/// Closed set of outcome codes reported to front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    StorageLookupError,
    FileOpenError,
    FileFormatError,
    IndexOverflow,
    PointIndexOverflow,
    PointCollision,
    ElementCollision,
}

impl ResultCode {
    pub fn from_result<T>(result: &Result<T, ControllerError>) -> Self {
        match result {
            Ok(_) => ResultCode::Ok,
            Err(e) => e.code(),
        }
    }

    /// Short user-facing description
    pub fn description(&self) -> &'static str {
        match self {
            ResultCode::Ok => "ok",
            ResultCode::StorageLookupError => "no model file to use",
            ResultCode::FileOpenError => "cannot open file",
            ResultCode::FileFormatError => "malformed model file",
            ResultCode::IndexOverflow => "element index out of range",
            ResultCode::PointIndexOverflow => "point index out of range",
            ResultCode::PointCollision => "points of the element coincide",
            ResultCode::ElementCollision => "an identical element already exists",
        }
    }
}

/// Controller-level failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error("no model path to save to")]
    StorageLookup,
    #[error("{0}")]
    FileOpen(String),
    #[error("{0}")]
    FileFormat(String),
    #[error("element index {index} out of range (count {len})")]
    IndexOverflow { index: usize, len: usize },
    #[error("point index {index} out of range (element has {arity} points)")]
    PointIndexOverflow { index: usize, arity: usize },
    #[error("points of the element coincide")]
    PointCollision,
    #[error("an identical element already exists")]
    ElementCollision,
}

impl ControllerError {
    pub fn code(&self) -> ResultCode {
        match self {
            ControllerError::StorageLookup => ResultCode::StorageLookupError,
            ControllerError::FileOpen(_) => ResultCode::FileOpenError,
            ControllerError::FileFormat(_) => ResultCode::FileFormatError,
            ControllerError::IndexOverflow { .. } => ResultCode::IndexOverflow,
            ControllerError::PointIndexOverflow { .. } => ResultCode::PointIndexOverflow,
            ControllerError::PointCollision => ResultCode::PointCollision,
            ControllerError::ElementCollision => ResultCode::ElementCollision,
        }
    }
}

impl From<GeometryError> for ControllerError {
    fn from(error: GeometryError) -> Self {
        match error {
            GeometryError::IndexOutOfRange { index, len } => {
                ControllerError::IndexOverflow { index, len }
            }
            GeometryError::PointIndexOverflow { index, arity } => {
                ControllerError::PointIndexOverflow { index, arity }
            }
            GeometryError::PointCollision => ControllerError::PointCollision,
            GeometryError::ElementCollision => ControllerError::ElementCollision,
            // Only raised while decoding stored data
            GeometryError::InvalidArgument(reason) => ControllerError::FileFormat(reason),
        }
    }
}

impl From<StorageError> for ControllerError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Open { .. } | StorageError::Io(_) => {
                ControllerError::FileOpen(error.to_string())
            }
            StorageError::Format { .. }
            | StorageError::Serialize(_)
            | StorageError::Deserialize(_) => ControllerError::FileFormat(error.to_string()),
        }
    }
}
