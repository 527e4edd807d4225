//! Map module - Core reconstruction data structures.
//!
//! This module contains:
//! - [`Shot`] - A camera at a pose, with its features and landmark links
//! - [`Landmark`] - 3D points observed by Shots
//! - [`Map`] - Container managing cameras, Shots, Landmarks and their relationships
//!
//! # Architecture
//!
//! The map forms a bipartite graph structure:
//! - Shots observe Landmarks (Shot → Landmark via [`LandmarkLinks`])
//! - Landmarks track their observers (Landmark → Shot via `observations`)
//!
//! A shot stores its links in one of two [`LinkMode`]s, chosen at creation:
//! one slot per feature (`Indexed`) or a sparse landmark → [`Observation`]
//! map (`Keyed`).
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use sfm_map::geometry::SE3;
//! use sfm_map::map::{Camera, CameraId, Keypoint, Map, ShotId};
//!
//! let mut map = Map::new();
//! map.create_camera(CameraId::new(0), "main", Camera::new(500.0, 500.0, 320.0, 240.0, 640, 480));
//!
//! let shot_id = ShotId::new(0);
//! map.create_shot(shot_id, "img_000.jpg", CameraId::new(0), SE3::identity())?;
//! map.load_features(shot_id, vec![Keypoint::new(320.0, 240.0, 2.0); 5], vec![[0; 32]; 5])?;
//!
//! let landmark = map.create_landmark(Vector3::new(0.0, 0.0, 10.0));
//! map.add_observation(shot_id, 1, landmark)?;
//!
//! assert_eq!(map.median_depth(shot_id)?, 10.0);
//! # Ok::<(), sfm_map::error::MapError>(())
//! ```

pub mod camera;
pub mod features;
pub mod landmark;
pub mod links;
pub mod map;
pub mod measurements;
pub mod observation;
pub mod shot;
pub mod types;

pub use camera::{Camera, ShotCamera};
pub use features::{DESCRIPTOR_LEN, Descriptor, FeatureStore, Keypoint};
pub use landmark::{Landmark, Landmarks};
pub use links::{LandmarkLinks, LinkMode};
pub use map::Map;
pub use measurements::ShotMeasurements;
pub use observation::Observation;
pub use shot::Shot;
pub use types::{CameraId, FeatureId, LandmarkId, ShotId};
