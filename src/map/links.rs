//! Shot → landmark edges.
//!
//! A shot stores its half of the shot/landmark graph in one of two shapes,
//! fixed when the shot is created:
//!
//! - **Indexed**: one slot per feature, `slots[i]` names the landmark seen by
//!   feature `i`. Used when every feature is a candidate attachment point.
//! - **Keyed**: a sparse landmark → [`Observation`] map owned by the shot.
//!   Used by front ends that never pre-size per-feature buffers.
//!
//! Calls that belong to the other shape fail with
//! [`ShotError::WrongLinkMode`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ShotError;

use super::observation::Observation;
use super::types::{FeatureId, LandmarkId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    #[default]
    Indexed,
    Keyed,
}

#[derive(Debug, Clone)]
pub enum LandmarkLinks {
    Indexed(Vec<Option<LandmarkId>>),
    Keyed(BTreeMap<LandmarkId, Observation>),
}

impl LandmarkLinks {
    pub fn new(mode: LinkMode) -> Self {
        match mode {
            LinkMode::Indexed => Self::Indexed(Vec::new()),
            LinkMode::Keyed => Self::Keyed(BTreeMap::new()),
        }
    }

    pub fn mode(&self) -> LinkMode {
        match self {
            Self::Indexed(_) => LinkMode::Indexed,
            Self::Keyed(_) => LinkMode::Keyed,
        }
    }

    /// Reset to `n` empty slots after the feature buffers were (re)loaded.
    ///
    /// Keyed links are not tied to feature indices and are left untouched.
    pub(crate) fn reset_slots(&mut self, n: usize) {
        if let Self::Indexed(slots) = self {
            slots.clear();
            slots.resize(n, None);
        }
    }

    fn slots(&self) -> Result<&[Option<LandmarkId>], ShotError> {
        match self {
            Self::Indexed(slots) => Ok(slots.as_slice()),
            Self::Keyed(_) => Err(wrong_mode(LinkMode::Indexed, LinkMode::Keyed)),
        }
    }

    fn slot_mut(&mut self, feature: FeatureId) -> Result<&mut Option<LandmarkId>, ShotError> {
        match self {
            Self::Indexed(slots) => {
                let len = slots.len();
                slots
                    .get_mut(feature)
                    .ok_or(ShotError::FeatureOutOfRange { feature, len })
            }
            Self::Keyed(_) => Err(wrong_mode(LinkMode::Indexed, LinkMode::Keyed)),
        }
    }

    fn observations_mut(&mut self) -> Result<&mut BTreeMap<LandmarkId, Observation>, ShotError> {
        match self {
            Self::Keyed(observations) => Ok(observations),
            Self::Indexed(_) => Err(wrong_mode(LinkMode::Keyed, LinkMode::Indexed)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Indexed mode
    // ─────────────────────────────────────────────────────────────────────────

    /// Link `feature` to `landmark`, returning the previous link.
    pub fn set(
        &mut self,
        feature: FeatureId,
        landmark: LandmarkId,
    ) -> Result<Option<LandmarkId>, ShotError> {
        Ok(self.slot_mut(feature)?.replace(landmark))
    }

    /// Clear the link of `feature`, returning what it pointed to.
    pub fn clear(&mut self, feature: FeatureId) -> Result<Option<LandmarkId>, ShotError> {
        Ok(self.slot_mut(feature)?.take())
    }

    pub fn get(&self, feature: FeatureId) -> Result<Option<LandmarkId>, ShotError> {
        let slots = self.slots()?;
        slots
            .get(feature)
            .copied()
            .ok_or(ShotError::FeatureOutOfRange {
                feature,
                len: slots.len(),
            })
    }

    /// Full slot table, one entry per feature.
    pub fn slot_table(&self) -> Result<&[Option<LandmarkId>], ShotError> {
        self.slots()
    }

    /// Features with a landmark, ascending.
    pub fn valid_indices(&self) -> Result<Vec<FeatureId>, ShotError> {
        Ok(self.valid_pairs()?.into_iter().map(|(_, f)| f).collect())
    }

    /// (landmark, feature) pairs in ascending feature order.
    pub fn valid_pairs(&self) -> Result<Vec<(LandmarkId, FeatureId)>, ShotError> {
        Ok(self
            .slots()?
            .iter()
            .enumerate()
            .filter_map(|(feature, lm)| lm.map(|lm| (lm, feature)))
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keyed mode
    // ─────────────────────────────────────────────────────────────────────────

    /// Store `observation` under `landmark`. Last write wins.
    pub fn insert_observation(
        &mut self,
        landmark: LandmarkId,
        observation: Observation,
    ) -> Result<Option<Observation>, ShotError> {
        Ok(self.observations_mut()?.insert(landmark, observation))
    }

    pub fn remove_observation(&mut self, landmark: LandmarkId) -> Result<Observation, ShotError> {
        self.observations_mut()?
            .remove(&landmark)
            .ok_or(ShotError::ObservationNotFound(landmark))
    }

    pub fn observation(&self, landmark: LandmarkId) -> Result<Option<&Observation>, ShotError> {
        match self {
            Self::Keyed(observations) => Ok(observations.get(&landmark)),
            Self::Indexed(_) => Err(wrong_mode(LinkMode::Keyed, LinkMode::Indexed)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Both modes
    // ─────────────────────────────────────────────────────────────────────────

    /// Every linked landmark. Indexed links come in feature order, keyed
    /// links in handle order.
    pub fn valid_landmarks(&self) -> Vec<LandmarkId> {
        match self {
            Self::Indexed(slots) => slots.iter().flatten().copied().collect(),
            Self::Keyed(observations) => observations.keys().copied().collect(),
        }
    }

    pub fn num_valid(&self) -> usize {
        match self {
            Self::Indexed(slots) => slots.iter().flatten().count(),
            Self::Keyed(observations) => observations.len(),
        }
    }

    /// Drop every link to `landmark`. Returns the number of links removed.
    pub fn invalidate(&mut self, landmark: LandmarkId) -> usize {
        match self {
            Self::Indexed(slots) => {
                let mut removed = 0;
                for slot in slots.iter_mut().filter(|s| **s == Some(landmark)) {
                    *slot = None;
                    removed += 1;
                }
                removed
            }
            Self::Keyed(observations) => usize::from(observations.remove(&landmark).is_some()),
        }
    }
}

fn wrong_mode(expected: LinkMode, actual: LinkMode) -> ShotError {
    ShotError::WrongLinkMode { expected, actual }
}
