//! Camera intrinsics and the per-shot camera handle.

use std::sync::Arc;

use nalgebra::{Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::types::CameraId;

/// Pinhole camera intrinsics.
///
/// Distortion is not modeled; keypoints handed to a shot are expected to be
/// undistorted already.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64, width: u32, height: u32) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            width,
            height,
        }
    }

    /// Build from a 3x3 calibration matrix K.
    pub fn from_k(k: &Matrix3<f64>, width: u32, height: u32) -> Self {
        Self::new(k[(0, 0)], k[(1, 1)], k[(0, 2)], k[(1, 2)], width, height)
    }

    pub fn k(&self) -> Matrix3<f64> {
        Matrix3::new(self.fx, 0.0, self.cx, 0.0, self.fy, self.cy, 0.0, 0.0, 1.0)
    }

    /// Project a point in camera coordinates to pixels.
    ///
    /// Returns `None` for points on or behind the image plane.
    pub fn project(&self, p_cam: &Vector3<f64>) -> Option<Vector2<f64>> {
        if p_cam.z <= 0.0 {
            return None;
        }
        Some(Vector2::new(
            self.fx * p_cam.x / p_cam.z + self.cx,
            self.fy * p_cam.y / p_cam.z + self.cy,
        ))
    }

    /// Unit bearing vector of a pixel.
    pub fn pixel_bearing(&self, pixel: &Vector2<f64>) -> Vector3<f64> {
        Vector3::new(
            (pixel.x - self.cx) / self.fx,
            (pixel.y - self.cy) / self.fy,
            1.0,
        )
        .normalize()
    }
}

/// Binds a shared camera model to a shot without copying it.
///
/// The model is reference counted, so it lives as long as any shot holds it.
#[derive(Debug, Clone)]
pub struct ShotCamera {
    model: Arc<Camera>,
    pub id: CameraId,
    pub name: String,
}

impl ShotCamera {
    pub fn new(model: Arc<Camera>, id: CameraId, name: impl Into<String>) -> Self {
        Self {
            model,
            id,
            name: name.into(),
        }
    }

    pub fn model(&self) -> &Camera {
        &self.model
    }

    /// Shared handle to the underlying model.
    pub fn model_handle(&self) -> Arc<Camera> {
        Arc::clone(&self.model)
    }
}
