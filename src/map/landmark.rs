//! Landmark - a 3D point observed by shots.
//!
//! Landmarks are owned by the [`Map`](super::Map). Shots only hold
//! [`LandmarkId`](super::LandmarkId) handles; the reverse edges live here.

use std::collections::BTreeMap;

use nalgebra::Vector3;
use slotmap::SlotMap;

use super::types::{FeatureId, LandmarkId, ShotId};

/// Arena of landmarks addressed by generational handles.
pub type Landmarks = SlotMap<LandmarkId, Landmark>;

/// A 3D point in the reconstruction.
#[derive(Debug, Clone)]
pub struct Landmark {
    /// 3D position in world frame.
    pub position: Vector3<f64>,

    /// Observing shots, mapped to the feature index in that shot.
    observations: BTreeMap<ShotId, FeatureId>,
}

impl Landmark {
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            observations: BTreeMap::new(),
        }
    }

    /// Record that `shot` sees this landmark at `feature`.
    ///
    /// A shot observes a landmark at most once; re-adding replaces the
    /// feature index.
    pub fn add_observation(&mut self, shot: ShotId, feature: FeatureId) {
        self.observations.insert(shot, feature);
    }

    /// Returns true if the observation existed and was removed.
    pub fn erase_observation(&mut self, shot: ShotId) -> bool {
        self.observations.remove(&shot).is_some()
    }

    /// Number of shots observing this landmark.
    pub fn num_observations(&self) -> usize {
        self.observations.len()
    }

    pub fn observations(&self) -> impl Iterator<Item = (ShotId, FeatureId)> + '_ {
        self.observations.iter().map(|(&shot, &feature)| (shot, feature))
    }

    pub fn is_observed_by(&self, shot: ShotId) -> bool {
        self.observations.contains_key(&shot)
    }

    /// Feature through which `shot` sees this landmark.
    pub fn feature_in(&self, shot: ShotId) -> Option<FeatureId> {
        self.observations.get(&shot).copied()
    }

    pub fn scale(&mut self, factor: f64) {
        self.position *= factor;
    }
}
