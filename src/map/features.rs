//! Per-shot feature storage: keypoints and descriptors aligned by feature index.

use nalgebra::{Vector2, Vector3};

use crate::error::ShotError;

use super::types::FeatureId;

/// Width of a binary descriptor in bytes.
pub const DESCRIPTOR_LEN: usize = 32;

/// Fixed-width binary descriptor.
pub type Descriptor = [u8; DESCRIPTOR_LEN];

/// A detected 2D feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Pixel position.
    pub point: Vector2<f64>,
    /// Feature scale (diameter of the meaningful neighborhood).
    pub size: f64,
}

impl Keypoint {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            point: Vector2::new(x, y),
            size,
        }
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Dense keypoint and descriptor buffers.
///
/// Both buffers always have the same length. They are written only by bulk
/// initialization; there is no per-slot mutation.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    keypoints: Vec<Keypoint>,
    descriptors: Vec<Descriptor>,
}

impl FeatureStore {
    /// Allocate `n` zeroed features.
    pub fn with_len(n: usize) -> Self {
        Self {
            keypoints: vec![Keypoint::default(); n],
            descriptors: vec![[0; DESCRIPTOR_LEN]; n],
        }
    }

    /// Take ownership of pre-built buffers.
    ///
    /// Fails without touching anything if the lengths differ.
    pub fn from_buffers(
        keypoints: Vec<Keypoint>,
        descriptors: Vec<Descriptor>,
    ) -> Result<Self, ShotError> {
        if keypoints.len() != descriptors.len() {
            return Err(ShotError::BufferLengthMismatch {
                keypoints: keypoints.len(),
                descriptors: descriptors.len(),
            });
        }
        Ok(Self {
            keypoints,
            descriptors,
        })
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    pub fn check_feature(&self, feature: FeatureId) -> Result<(), ShotError> {
        if feature < self.len() {
            Ok(())
        } else {
            Err(ShotError::FeatureOutOfRange {
                feature,
                len: self.len(),
            })
        }
    }

    pub fn keypoint(&self, feature: FeatureId) -> Result<&Keypoint, ShotError> {
        self.check_feature(feature)?;
        Ok(&self.keypoints[feature])
    }

    pub fn descriptor(&self, feature: FeatureId) -> Result<&Descriptor, ShotError> {
        self.check_feature(feature)?;
        Ok(&self.descriptors[feature])
    }

    /// Keypoint packed as `(x, y, size)`.
    pub fn keypoint_vector(&self, feature: FeatureId) -> Result<Vector3<f64>, ShotError> {
        let kp = self.keypoint(feature)?;
        Ok(Vector3::new(kp.point.x, kp.point.y, kp.size))
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
}
