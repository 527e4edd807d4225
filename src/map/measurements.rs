//! Capture metadata attached to a shot.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Auxiliary sensor and timing data recorded when a shot was captured.
///
/// Purely descriptive: nothing in the map reads these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotMeasurements {
    /// GPS position in the reconstruction's topocentric frame.
    pub gps: Vector3<f64>,
    /// Capture time in seconds.
    pub capture_time: f64,
    /// GPS dilution of precision.
    pub gps_dop: f64,
    /// Raw GPS reading (latitude, longitude, altitude).
    pub gps_position: [f64; 3],
    /// EXIF orientation code (1 = upright).
    pub orientation: i32,
    pub skey: String,
}

impl Default for ShotMeasurements {
    fn default() -> Self {
        Self {
            gps: Vector3::zeros(),
            capture_time: 0.0,
            gps_dop: 0.0,
            gps_position: [0.0; 3],
            orientation: 1,
            skey: String::new(),
        }
    }
}
