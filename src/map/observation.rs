//! Observation - where and how a landmark was seen in a shot.

use nalgebra::{Vector2, Vector3};

use super::types::FeatureId;

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Pixel position.
    pub point: Vector2<f64>,
    pub scale: f64,
    /// RGB color sampled at the feature.
    pub color: Vector3<u8>,
    /// Feature that produced this observation.
    pub feature_id: FeatureId,
}

impl Observation {
    pub fn new(point: Vector2<f64>, scale: f64, color: Vector3<u8>, feature_id: FeatureId) -> Self {
        Self {
            point,
            scale,
            color,
            feature_id,
        }
    }
}
