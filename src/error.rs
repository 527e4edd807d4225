//! Error types for shot and map operations.

use thiserror::Error;

use crate::map::types::{CameraId, FeatureId, LandmarkId, ShotId};
use crate::map::LinkMode;

/// Precondition violations on a single [`Shot`](crate::map::Shot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("feature {feature} out of range (shot has {len} features)")]
    FeatureOutOfRange { feature: FeatureId, len: usize },

    #[error("keypoint/descriptor length mismatch: {keypoints} keypoints, {descriptors} descriptors")]
    BufferLengthMismatch { keypoints: usize, descriptors: usize },

    /// Depth statistics were requested but the shot has no valid landmark.
    #[error("shot has no valid landmarks")]
    NoValidLandmarks,

    #[error("operation requires {expected:?} link mode, shot is in {actual:?} mode")]
    WrongLinkMode { expected: LinkMode, actual: LinkMode },

    #[error("no observation of landmark {0:?}")]
    ObservationNotFound(LandmarkId),
}

/// Errors raised by [`Map`](crate::map::Map) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("shot {0} not found")]
    ShotNotFound(ShotId),

    #[error("shot {0} already exists")]
    ShotExists(ShotId),

    #[error("landmark {0:?} not found")]
    LandmarkNotFound(LandmarkId),

    #[error("camera {0} not found")]
    CameraNotFound(CameraId),

    #[error(transparent)]
    Shot(#[from] ShotError),
}
