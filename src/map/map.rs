//! Map - Container for cameras, Shots and Landmarks.
//!
//! The Map owns both sides of the shot/landmark graph and is the only place
//! where they are kept consistent:
//! - Shot → Landmark edges live in each shot's link table
//! - Landmark → Shot edges live in each landmark's observation list
//!
//! It provides methods for:
//! - Creating cameras, shots and landmarks
//! - Creating and removing bidirectional associations
//! - Removing landmarks with invalidation of every shot that saw them
//! - Rescaling the whole reconstruction in one step

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use nalgebra::Vector3;
use slotmap::SlotMap;
use tracing::{debug, info};

use crate::config::MapConfig;
use crate::error::{MapError, ShotError};
use crate::geometry::SE3;

use super::camera::{Camera, ShotCamera};
use super::features::{Descriptor, Keypoint};
use super::landmark::{Landmark, Landmarks};
use super::links::LinkMode;
use super::observation::Observation;
use super::shot::Shot;
use super::types::{CameraId, FeatureId, LandmarkId, ShotId};

/// The reconstruction graph.
pub struct Map {
    cameras: HashMap<CameraId, ShotCamera>,

    /// All shots, ordered by id.
    shots: BTreeMap<ShotId, Shot>,

    /// All landmarks.
    landmarks: Landmarks,

    config: MapConfig,
}

impl Map {
    /// Create a new empty Map with default configuration.
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    pub fn with_config(config: MapConfig) -> Self {
        Self {
            cameras: HashMap::new(),
            shots: BTreeMap::new(),
            landmarks: SlotMap::with_key(),
            config,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cameras
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a camera model. Re-registering an id replaces it for shots
    /// created afterwards; existing shots keep the model they were built with.
    pub fn create_camera(
        &mut self,
        id: CameraId,
        name: impl Into<String>,
        camera: Camera,
    ) -> &ShotCamera {
        let shot_camera = ShotCamera::new(Arc::new(camera), id, name);
        debug!("Registered camera {} ({})", id, shot_camera.name);
        self.cameras.insert(id, shot_camera);
        &self.cameras[&id]
    }

    pub fn get_camera(&self, id: CameraId) -> Option<&ShotCamera> {
        self.cameras.get(&id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shot Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a shot in the configured default link mode.
    pub fn create_shot(
        &mut self,
        id: ShotId,
        name: impl Into<String>,
        camera_id: CameraId,
        pose: SE3,
    ) -> Result<&mut Shot, MapError> {
        let mode = self.config.link_mode;
        self.create_shot_with_mode(id, name, camera_id, pose, mode)
    }

    pub fn create_shot_with_mode(
        &mut self,
        id: ShotId,
        name: impl Into<String>,
        camera_id: CameraId,
        pose: SE3,
        mode: LinkMode,
    ) -> Result<&mut Shot, MapError> {
        if self.shots.contains_key(&id) {
            return Err(MapError::ShotExists(id));
        }
        let camera = self
            .cameras
            .get(&camera_id)
            .cloned()
            .ok_or(MapError::CameraNotFound(camera_id))?;

        debug!("Creating {} ({:?} mode)", id, mode);
        Ok(self
            .shots
            .entry(id)
            .or_insert(Shot::new(id, name, camera, pose, mode)))
    }

    /// Load the feature buffers of a shot.
    ///
    /// Reloading drops the shot's indexed links, so their reverse edges are
    /// removed from the landmarks first.
    pub fn load_features(
        &mut self,
        shot_id: ShotId,
        keypoints: Vec<Keypoint>,
        descriptors: Vec<Descriptor>,
    ) -> Result<(), MapError> {
        if keypoints.len() != descriptors.len() {
            return Err(ShotError::BufferLengthMismatch {
                keypoints: keypoints.len(),
                descriptors: descriptors.len(),
            }
            .into());
        }

        let shot = self
            .shots
            .get_mut(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;

        detach_indexed_links(shot, &mut self.landmarks);
        shot.init_and_take_datastructures(keypoints, descriptors)?;
        Ok(())
    }

    /// Allocate `n` zeroed features for a shot.
    ///
    /// Same link handling as [`Self::load_features`].
    pub fn init_features(&mut self, shot_id: ShotId, n: usize) -> Result<(), MapError> {
        let shot = self
            .shots
            .get_mut(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;

        detach_indexed_links(shot, &mut self.landmarks);
        shot.init_keypoints_and_descriptors(n);
        Ok(())
    }

    pub fn get_shot(&self, id: ShotId) -> Option<&Shot> {
        self.shots.get(&id)
    }

    /// Mutable access for pose and metadata updates.
    ///
    /// Landmark links changed through this reference bypass the reverse
    /// edges; use the association methods on the map instead. The same holds
    /// for re-initializing features, which resets indexed links: use
    /// [`Self::init_features`] or [`Self::load_features`].
    pub fn get_shot_mut(&mut self, id: ShotId) -> Option<&mut Shot> {
        self.shots.get_mut(&id)
    }

    /// All shots in id order.
    pub fn shots(&self) -> impl Iterator<Item = &Shot> {
        self.shots.values()
    }

    pub fn num_shots(&self) -> usize {
        self.shots.len()
    }

    /// Remove a shot and its reverse edges from every landmark it saw.
    pub fn remove_shot(&mut self, id: ShotId) -> Option<Shot> {
        let shot = self.shots.remove(&id)?;
        for lm_id in shot.compute_valid_landmarks() {
            if let Some(lm) = self.landmarks.get_mut(lm_id) {
                lm.erase_observation(id);
            }
        }
        debug!("Removed {}", id);
        Some(shot)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Landmark Operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn create_landmark(&mut self, position: Vector3<f64>) -> LandmarkId {
        self.landmarks.insert(Landmark::new(position))
    }

    pub fn get_landmark(&self, id: LandmarkId) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    pub fn get_landmark_mut(&mut self, id: LandmarkId) -> Option<&mut Landmark> {
        self.landmarks.get_mut(id)
    }

    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    pub fn num_landmarks(&self) -> usize {
        self.landmarks.len()
    }

    /// Remove a landmark and clear it from every shot that observed it.
    ///
    /// The handle stops resolving immediately, even for shots the broadcast
    /// did not reach.
    pub fn remove_landmark(&mut self, id: LandmarkId) -> Option<Landmark> {
        let landmark = self.landmarks.remove(id)?;
        let mut cleared = 0;
        for (shot_id, _) in landmark.observations() {
            if let Some(shot) = self.shots.get_mut(&shot_id) {
                cleared += shot.invalidate_landmark(id);
            }
        }
        debug!(
            "Removed landmark {:?}, cleared {} links in {} shots",
            id,
            cleared,
            landmark.num_observations()
        );
        Some(landmark)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Association (Shot ↔ Landmark)
    // ─────────────────────────────────────────────────────────────────────────

    /// Link feature `feature` of an indexed shot to `landmark`, both ways.
    ///
    /// A landmark is seen through at most one feature per shot: linking it
    /// to a new feature clears the old one. A landmark previously linked at
    /// `feature` loses its observation from this shot.
    pub fn add_observation(
        &mut self,
        shot_id: ShotId,
        feature: FeatureId,
        landmark: LandmarkId,
    ) -> Result<(), MapError> {
        let lm = self
            .landmarks
            .get_mut(landmark)
            .ok_or(MapError::LandmarkNotFound(landmark))?;
        let shot = self
            .shots
            .get_mut(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;

        // Validates mode and range before anything is written.
        shot.landmark(feature)?;

        // A reverse edge only counts if the shot still links it back.
        let old_feature = lm
            .feature_in(shot_id)
            .filter(|&old| old != feature && shot.landmark(old) == Ok(Some(landmark)));

        let previous = shot.add_landmark_observation(landmark, feature)?;
        if let Some(old) = old_feature {
            shot.remove_landmark_observation(old)?;
        }
        lm.add_observation(shot_id, feature);

        if let Some(prev) = previous.filter(|&prev| prev != landmark) {
            if let Some(prev_lm) = self.landmarks.get_mut(prev) {
                prev_lm.erase_observation(shot_id);
            }
        }
        Ok(())
    }

    /// Store an owned observation of `landmark` in a keyed shot, both ways.
    pub fn add_keyed_observation(
        &mut self,
        shot_id: ShotId,
        landmark: LandmarkId,
        observation: Observation,
    ) -> Result<(), MapError> {
        let lm = self
            .landmarks
            .get_mut(landmark)
            .ok_or(MapError::LandmarkNotFound(landmark))?;
        let shot = self
            .shots
            .get_mut(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;

        let Observation {
            point,
            scale,
            color,
            feature_id,
        } = observation;
        shot.create_observation(landmark, point, scale, color, feature_id)?;
        lm.add_observation(shot_id, feature_id);
        Ok(())
    }

    /// Clear the link of `feature` in an indexed shot, both ways.
    ///
    /// Returns the landmark that was linked, if any.
    pub fn remove_observation(
        &mut self,
        shot_id: ShotId,
        feature: FeatureId,
    ) -> Result<Option<LandmarkId>, MapError> {
        let shot = self
            .shots
            .get_mut(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;

        let removed = shot.remove_landmark_observation(feature)?;
        if let Some(lm) = removed.and_then(|id| self.landmarks.get_mut(id)) {
            lm.erase_observation(shot_id);
        }
        Ok(removed)
    }

    /// Remove the observation of `landmark` from a keyed shot, both ways.
    pub fn remove_keyed_observation(
        &mut self,
        shot_id: ShotId,
        landmark: LandmarkId,
    ) -> Result<Observation, MapError> {
        let shot = self
            .shots
            .get_mut(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;

        let observation = shot.remove_observation(landmark)?;
        if let Some(lm) = self.landmarks.get_mut(landmark) {
            lm.erase_observation(shot_id);
        }
        Ok(observation)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Landmarks of a shot seen by at least `config.min_observations` shots.
    pub fn num_valid_landmarks(&self, shot_id: ShotId) -> Result<usize, MapError> {
        let shot = self
            .shots
            .get(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;
        Ok(shot.compute_num_valid_landmarks(self.config.min_observations, &self.landmarks))
    }

    /// Median landmark depth of a shot, using `config.take_abs_depth`.
    pub fn median_depth(&self, shot_id: ShotId) -> Result<f64, MapError> {
        let shot = self
            .shots
            .get(&shot_id)
            .ok_or(MapError::ShotNotFound(shot_id))?;
        Ok(shot.compute_median_depth_of_landmarks(self.config.take_abs_depth, &self.landmarks)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Map Maintenance
    // ─────────────────────────────────────────────────────────────────────────

    /// Scale the whole reconstruction by `factor`.
    ///
    /// Every shot translation and every landmark position is scaled in one
    /// call, so no caller observes a half-scaled map. Landmarks that no shot
    /// observes are scaled too.
    pub fn rescale(&mut self, factor: f64) {
        for shot in self.shots.values_mut() {
            shot.scale_pose(factor);
        }
        for (_, lm) in self.landmarks.iter_mut() {
            lm.scale(factor);
        }
        info!(
            "Rescaled map by {:.6} ({} shots, {} landmarks)",
            factor,
            self.shots.len(),
            self.landmarks.len()
        );
    }

    /// Clear the entire map. Cameras stay registered.
    pub fn clear(&mut self) {
        self.shots.clear();
        self.landmarks.clear();
    }
}

/// Erase the reverse edges of every indexed link of `shot`, ahead of a
/// feature reset that drops the links themselves.
fn detach_indexed_links(shot: &Shot, landmarks: &mut Landmarks) {
    if shot.link_mode() != LinkMode::Indexed {
        return;
    }
    for lm_id in shot.compute_valid_landmarks() {
        if let Some(lm) = landmarks.get_mut(lm_id) {
            lm.erase_observation(shot.id());
        }
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("num_cameras", &self.cameras.len())
            .field("num_shots", &self.shots.len())
            .field("num_landmarks", &self.landmarks.len())
            .finish()
    }
}
