//! Core ID types for the map structures.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

/// Unique identifier for a Shot within a Map.
///
/// Shot identity, equality and ordering are defined by this value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShotId(pub u64);

impl ShotId {
    /// Create a new ShotId with the given value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ShotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shot{}", self.0)
    }
}

/// Identifier of a camera model shared between shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CameraId(pub u32);

impl CameraId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CameraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cam{}", self.0)
    }
}

/// Index of a feature inside a shot's keypoint/descriptor buffers.
///
/// Dense and contiguous from zero; stable for the lifetime of the shot.
pub type FeatureId = usize;

new_key_type! {
    /// Generational handle to a landmark owned by the map.
    ///
    /// A handle outlives the landmark it names: once the landmark is removed
    /// the handle no longer resolves, even if its slot is reused.
    pub struct LandmarkId;
}
