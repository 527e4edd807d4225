//! Shot - a camera at a pose, with its features and landmark links.
//!
//! A Shot owns:
//! - Its pose (world-to-camera transform, T_cw)
//! - Keypoint and descriptor buffers, aligned by feature index
//! - Its half of the shot/landmark graph ([`LandmarkLinks`])
//!
//! Landmarks themselves live in the map's [`Landmarks`] arena. Queries that
//! need landmark data (depth, observation counts) take the arena as an
//! argument; handles that no longer resolve are skipped.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use nalgebra::{Matrix4, Vector2, Vector3};

use crate::error::ShotError;
use crate::geometry::SE3;

use super::camera::{Camera, ShotCamera};
use super::features::{Descriptor, FeatureStore, Keypoint};
use super::landmark::Landmarks;
use super::links::{LandmarkLinks, LinkMode};
use super::measurements::ShotMeasurements;
use super::observation::Observation;
use super::types::{FeatureId, LandmarkId, ShotId};

/// A single observing camera in the reconstruction.
///
/// Equality, ordering and hashing use the shot id only.
#[derive(Clone)]
pub struct Shot {
    id: ShotId,
    name: String,
    camera: ShotCamera,

    /// Capture metadata.
    pub measurements: ShotMeasurements,

    /// World-to-camera transform (T_cw).
    pose: SE3,

    features: FeatureStore,
    links: LandmarkLinks,
}

impl Shot {
    /// Create a shot with no features.
    ///
    /// `mode` fixes how landmark links are stored for the lifetime of the shot.
    pub fn new(
        id: ShotId,
        name: impl Into<String>,
        camera: ShotCamera,
        pose: SE3,
        mode: LinkMode,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            camera,
            measurements: ShotMeasurements::default(),
            pose,
            features: FeatureStore::default(),
            links: LandmarkLinks::new(mode),
        }
    }

    pub fn id(&self) -> ShotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera(&self) -> &ShotCamera {
        &self.camera
    }

    pub fn camera_name(&self) -> &str {
        &self.camera.name
    }

    pub fn camera_model(&self) -> &Camera {
        self.camera.model()
    }

    pub fn link_mode(&self) -> LinkMode {
        self.links.mode()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Features
    // ─────────────────────────────────────────────────────────────────────────

    /// Allocate `n` zeroed features.
    ///
    /// In indexed mode this also resets the link table to `n` empty slots;
    /// any previous links are dropped.
    pub fn init_keypoints_and_descriptors(&mut self, n: usize) {
        self.features = FeatureStore::with_len(n);
        self.links.reset_slots(n);
    }

    /// Replace both feature buffers at once.
    ///
    /// Fails before touching the shot if the buffer lengths differ. On success
    /// indexed links are reset as in [`Self::init_keypoints_and_descriptors`].
    pub fn init_and_take_datastructures(
        &mut self,
        keypoints: Vec<Keypoint>,
        descriptors: Vec<Descriptor>,
    ) -> Result<(), ShotError> {
        self.features = FeatureStore::from_buffers(keypoints, descriptors)?;
        self.links.reset_slots(self.features.len());
        Ok(())
    }

    pub fn num_keypoints(&self) -> usize {
        self.features.len()
    }

    pub fn keypoint(&self, feature: FeatureId) -> Result<&Keypoint, ShotError> {
        self.features.keypoint(feature)
    }

    /// Keypoint as `(x, y, size)`.
    pub fn keypoint_vector(&self, feature: FeatureId) -> Result<Vector3<f64>, ShotError> {
        self.features.keypoint_vector(feature)
    }

    pub fn descriptor(&self, feature: FeatureId) -> Result<&Descriptor, ShotError> {
        self.features.descriptor(feature)
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        self.features.keypoints()
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        self.features.descriptors()
    }

    /// Unit bearing of every keypoint in the camera frame.
    pub fn keypoint_bearings(&self) -> Vec<Vector3<f64>> {
        let camera = self.camera.model();
        self.features
            .keypoints()
            .iter()
            .map(|kp| camera.pixel_bearing(&kp.point))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Landmark links (indexed mode)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn landmark(&self, feature: FeatureId) -> Result<Option<LandmarkId>, ShotError> {
        self.links.get(feature)
    }

    /// Link `feature` to `landmark`. Returns the landmark previously linked.
    pub fn add_landmark_observation(
        &mut self,
        landmark: LandmarkId,
        feature: FeatureId,
    ) -> Result<Option<LandmarkId>, ShotError> {
        self.links.set(feature, landmark)
    }

    /// Clear the link of `feature`. Feature buffers are left untouched.
    pub fn remove_landmark_observation(
        &mut self,
        feature: FeatureId,
    ) -> Result<Option<LandmarkId>, ShotError> {
        self.links.clear(feature)
    }

    pub fn landmark_links(&self) -> &LandmarkLinks {
        &self.links
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observations (keyed mode)
    // ─────────────────────────────────────────────────────────────────────────

    /// Store an observation of `landmark`, replacing any previous one.
    pub fn create_observation(
        &mut self,
        landmark: LandmarkId,
        point: Vector2<f64>,
        scale: f64,
        color: Vector3<u8>,
        feature: FeatureId,
    ) -> Result<Option<Observation>, ShotError> {
        self.links
            .insert_observation(landmark, Observation::new(point, scale, color, feature))
    }

    pub fn observation(&self, landmark: LandmarkId) -> Result<Option<&Observation>, ShotError> {
        self.links.observation(landmark)
    }

    pub fn remove_observation(&mut self, landmark: LandmarkId) -> Result<Observation, ShotError> {
        self.links.remove_observation(landmark)
    }

    /// Drop every link to `landmark`, whatever the mode.
    pub fn invalidate_landmark(&mut self, landmark: LandmarkId) -> usize {
        self.links.invalidate(landmark)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Valid landmark queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Linked landmarks; feature order in indexed mode.
    pub fn compute_valid_landmarks(&self) -> Vec<LandmarkId> {
        self.links.valid_landmarks()
    }

    /// Linked feature indices, ascending. Indexed mode only.
    pub fn compute_valid_landmarks_indices(&self) -> Result<Vec<FeatureId>, ShotError> {
        self.links.valid_indices()
    }

    /// (landmark, feature) pairs, ascending feature order. Indexed mode only.
    pub fn compute_valid_landmarks_and_indices(
        &self,
    ) -> Result<Vec<(LandmarkId, FeatureId)>, ShotError> {
        self.links.valid_pairs()
    }

    /// Count linked landmarks seen by at least `min_obs_thr` shots in total.
    pub fn compute_num_valid_landmarks(&self, min_obs_thr: usize, landmarks: &Landmarks) -> usize {
        self.links
            .valid_landmarks()
            .into_iter()
            .filter_map(|id| landmarks.get(id))
            .filter(|lm| lm.num_observations() >= min_obs_thr)
            .count()
    }

    /// Median camera-frame depth of the linked landmarks.
    ///
    /// Fails with [`ShotError::NoValidLandmarks`] when no linked handle
    /// resolves in `landmarks`.
    pub fn compute_median_depth_of_landmarks(
        &self,
        take_abs: bool,
        landmarks: &Landmarks,
    ) -> Result<f64, ShotError> {
        let mut depths: Vec<f64> = self
            .links
            .valid_landmarks()
            .into_iter()
            .filter_map(|id| landmarks.get(id))
            .map(|lm| {
                let z = self.pose.transform_point(&lm.position).z;
                if take_abs { z.abs() } else { z }
            })
            .collect();

        median(&mut depths).ok_or(ShotError::NoValidLandmarks)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pose
    // ─────────────────────────────────────────────────────────────────────────

    pub fn pose(&self) -> &SE3 {
        &self.pose
    }

    pub fn set_pose(&mut self, pose: SE3) {
        self.pose = pose;
    }

    /// Homogeneous world-to-camera matrix.
    pub fn world_to_cam(&self) -> Matrix4<f64> {
        self.pose.to_matrix()
    }

    /// Homogeneous camera-to-world matrix.
    pub fn cam_to_world(&self) -> Matrix4<f64> {
        self.pose.inverse().to_matrix()
    }

    /// Camera center in world coordinates.
    pub fn camera_center(&self) -> Vector3<f64> {
        self.pose.center()
    }

    /// Scale the pose translation by `factor`; rotation is unchanged.
    ///
    /// Only consistent when every shot and landmark of the reconstruction
    /// is scaled together, see [`Map::rescale`](super::Map::rescale).
    pub fn scale_pose(&mut self, factor: f64) {
        self.pose.scale_translation(factor);
    }

    /// Scale the position of every landmark linked from this shot.
    ///
    /// A landmark linked from several features is scaled once.
    pub fn scale_landmarks(&self, factor: f64, landmarks: &mut Landmarks) {
        let unique: BTreeSet<LandmarkId> = self.links.valid_landmarks().into_iter().collect();
        for id in unique {
            if let Some(lm) = landmarks.get_mut(id) {
                lm.scale(factor);
            }
        }
    }
}

/// Median of `values`; the mean of the two middle values for even lengths.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some(0.5 * (values[mid - 1] + values[mid]))
    } else {
        Some(values[mid])
    }
}

impl PartialEq for Shot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shot {}

impl PartialOrd for Shot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Shot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Shot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for Shot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shot")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("camera", &self.camera.id)
            .field("mode", &self.links.mode())
            .field("num_keypoints", &self.features.len())
            .field("num_landmarks", &self.links.num_valid())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};
    use std::sync::Arc;

    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use slotmap::SlotMap;

    use crate::map::features::DESCRIPTOR_LEN;
    use crate::map::landmark::Landmark;
    use crate::map::types::CameraId;

    fn test_camera() -> ShotCamera {
        ShotCamera::new(
            Arc::new(Camera::new(500.0, 500.0, 320.0, 240.0, 640, 480)),
            CameraId::new(0),
            "test_cam",
        )
    }

    fn create_test_shot(id: u64, mode: LinkMode) -> Shot {
        Shot::new(
            ShotId::new(id),
            format!("shot_{id}.jpg"),
            test_camera(),
            SE3::identity(),
            mode,
        )
    }

    fn create_shot_with_features(id: u64, n: usize) -> Shot {
        let mut shot = create_test_shot(id, LinkMode::Indexed);
        let keypoints = (0..n)
            .map(|i| Keypoint::new(10.0 * i as f64, 5.0, 2.0))
            .collect();
        let descriptors = (0..n).map(|i| [i as u8; DESCRIPTOR_LEN]).collect();
        shot.init_and_take_datastructures(keypoints, descriptors)
            .unwrap();
        shot
    }

    fn landmark_at(landmarks: &mut Landmarks, x: f64, y: f64, z: f64) -> LandmarkId {
        landmarks.insert(Landmark::new(Vector3::new(x, y, z)))
    }

    #[test]
    fn test_feature_access_range() {
        let shot = create_shot_with_features(1, 5);
        for i in 0..5 {
            assert!(shot.keypoint(i).is_ok());
            assert!(shot.descriptor(i).is_ok());
        }
        assert!(matches!(
            shot.keypoint(5),
            Err(ShotError::FeatureOutOfRange { feature: 5, len: 5 })
        ));
        assert!(matches!(
            shot.descriptor(7),
            Err(ShotError::FeatureOutOfRange { feature: 7, len: 5 })
        ));
    }

    #[test]
    fn test_init_sizes_link_table() {
        let mut shot = create_test_shot(1, LinkMode::Indexed);
        shot.init_keypoints_and_descriptors(3);

        assert_eq!(shot.num_keypoints(), 3);
        assert_eq!(shot.landmark_links().slot_table().unwrap().len(), 3);
        assert_eq!(shot.landmark(2), Ok(None));
    }

    #[test]
    fn test_mismatched_take_leaves_shot_untouched() {
        let mut shot = create_shot_with_features(1, 2);
        let err = shot
            .init_and_take_datastructures(vec![Keypoint::default(); 4], vec![[0; 32]; 3])
            .unwrap_err();

        assert_eq!(
            err,
            ShotError::BufferLengthMismatch {
                keypoints: 4,
                descriptors: 3
            }
        );
        assert_eq!(shot.num_keypoints(), 2);
    }

    #[test]
    fn test_link_then_clear_keeps_features() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let lm = landmark_at(&mut landmarks, 0.0, 0.0, 1.0);
        let mut shot = create_shot_with_features(1, 4);
        let kp_before = *shot.keypoint(2).unwrap();
        let desc_before = *shot.descriptor(2).unwrap();

        shot.add_landmark_observation(lm, 2).unwrap();
        assert_eq!(shot.landmark(2), Ok(Some(lm)));

        assert_eq!(shot.remove_landmark_observation(2), Ok(Some(lm)));
        assert_eq!(shot.landmark(2), Ok(None));
        assert_eq!(*shot.keypoint(2).unwrap(), kp_before);
        assert_eq!(*shot.descriptor(2).unwrap(), desc_before);
        assert_eq!(shot.num_keypoints(), 4);
    }

    #[test]
    fn test_link_out_of_range() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let lm = landmark_at(&mut landmarks, 0.0, 0.0, 1.0);
        let mut shot = create_shot_with_features(1, 4);

        assert!(shot.add_landmark_observation(lm, 4).is_err());
        assert!(shot.remove_landmark_observation(10).is_err());
        assert!(shot.landmark(4).is_err());
    }

    #[test]
    fn test_valid_landmarks_scenario() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let near = landmark_at(&mut landmarks, 0.0, 0.0, 10.0);
        let far = landmark_at(&mut landmarks, 0.0, 0.0, 20.0);

        let mut shot = create_shot_with_features(1, 5);
        shot.add_landmark_observation(far, 3).unwrap();
        shot.add_landmark_observation(near, 1).unwrap();

        assert_eq!(shot.compute_valid_landmarks(), vec![near, far]);
        assert_eq!(shot.compute_valid_landmarks_indices(), Ok(vec![1, 3]));
        assert_eq!(
            shot.compute_valid_landmarks_and_indices(),
            Ok(vec![(near, 1), (far, 3)])
        );
        assert_relative_eq!(
            shot.compute_median_depth_of_landmarks(false, &landmarks).unwrap(),
            15.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_median_depth_without_landmarks() {
        let landmarks: Landmarks = SlotMap::with_key();
        let shot = create_shot_with_features(1, 5);

        assert_eq!(
            shot.compute_median_depth_of_landmarks(false, &landmarks),
            Err(ShotError::NoValidLandmarks)
        );
        assert_eq!(
            create_test_shot(2, LinkMode::Keyed).compute_median_depth_of_landmarks(true, &landmarks),
            Err(ShotError::NoValidLandmarks)
        );
    }

    #[test]
    fn test_median_depth_skips_removed_landmarks() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let lm = landmark_at(&mut landmarks, 0.0, 0.0, 4.0);
        let mut shot = create_shot_with_features(1, 2);
        shot.add_landmark_observation(lm, 0).unwrap();
        landmarks.remove(lm);

        assert_eq!(
            shot.compute_median_depth_of_landmarks(false, &landmarks),
            Err(ShotError::NoValidLandmarks)
        );
        assert_eq!(shot.compute_num_valid_landmarks(0, &landmarks), 0);
    }

    #[test]
    fn test_median_depth_abs_and_odd_count() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let ids = [
            landmark_at(&mut landmarks, 0.0, 0.0, -9.0),
            landmark_at(&mut landmarks, 1.0, 0.0, 2.0),
            landmark_at(&mut landmarks, 0.0, 1.0, 5.0),
        ];
        let mut shot = create_shot_with_features(1, 3);
        for (feature, id) in ids.iter().enumerate() {
            shot.add_landmark_observation(*id, feature).unwrap();
        }

        assert_relative_eq!(
            shot.compute_median_depth_of_landmarks(false, &landmarks).unwrap(),
            2.0
        );
        assert_relative_eq!(
            shot.compute_median_depth_of_landmarks(true, &landmarks).unwrap(),
            5.0
        );
    }

    #[test]
    fn test_median_depth_uses_pose() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let lm = landmark_at(&mut landmarks, 0.0, 0.0, 10.0);
        let mut shot = create_shot_with_features(1, 1);
        shot.add_landmark_observation(lm, 0).unwrap();

        // Camera at world z = 4 looking down +z.
        shot.set_pose(SE3::new(UnitQuaternion::identity(), Vector3::new(0.0, 0.0, -4.0)));
        assert_relative_eq!(
            shot.compute_median_depth_of_landmarks(false, &landmarks).unwrap(),
            6.0
        );
    }

    #[test]
    fn test_num_valid_landmarks_threshold() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let seen_once = landmark_at(&mut landmarks, 0.0, 0.0, 1.0);
        let seen_thrice = landmark_at(&mut landmarks, 0.0, 0.0, 2.0);
        landmarks[seen_once].add_observation(ShotId::new(1), 0);
        for shot in 1..=3 {
            landmarks[seen_thrice].add_observation(ShotId::new(shot), 1);
        }

        let mut shot = create_shot_with_features(1, 2);
        shot.add_landmark_observation(seen_once, 0).unwrap();
        shot.add_landmark_observation(seen_thrice, 1).unwrap();

        assert_eq!(shot.compute_num_valid_landmarks(1, &landmarks), 2);
        assert_eq!(shot.compute_num_valid_landmarks(3, &landmarks), 1);
        assert_eq!(shot.compute_num_valid_landmarks(4, &landmarks), 0);
    }

    #[test]
    fn test_keyed_mode_observations() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let a = landmark_at(&mut landmarks, 0.0, 0.0, 3.0);
        let b = landmark_at(&mut landmarks, 0.0, 0.0, 7.0);
        let mut shot = create_test_shot(1, LinkMode::Keyed);

        let color = Vector3::new(10, 20, 30);
        shot.create_observation(a, Vector2::new(1.0, 1.0), 1.0, color, 0)
            .unwrap();
        shot.create_observation(b, Vector2::new(2.0, 2.0), 1.0, color, 1)
            .unwrap();
        let replaced = shot
            .create_observation(a, Vector2::new(3.0, 3.0), 2.0, color, 4)
            .unwrap();

        assert_eq!(replaced.map(|o| o.feature_id), Some(0));
        assert_eq!(shot.observation(a).unwrap().unwrap().feature_id, 4);

        let valid: HashSet<_> = shot.compute_valid_landmarks().into_iter().collect();
        assert_eq!(valid, HashSet::from([a, b]));
        assert_relative_eq!(
            shot.compute_median_depth_of_landmarks(false, &landmarks).unwrap(),
            5.0
        );

        // Index pairing is only defined for indexed shots.
        assert!(matches!(
            shot.compute_valid_landmarks_indices(),
            Err(ShotError::WrongLinkMode { .. })
        ));
        assert!(shot.compute_valid_landmarks_and_indices().is_err());
        assert!(shot.add_landmark_observation(a, 0).is_err());

        assert_eq!(shot.remove_observation(b).unwrap().feature_id, 1);
        assert_eq!(
            shot.remove_observation(b),
            Err(ShotError::ObservationNotFound(b))
        );
    }

    #[test]
    fn test_indexed_shot_rejects_observations() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let lm = landmark_at(&mut landmarks, 0.0, 0.0, 1.0);
        let mut shot = create_shot_with_features(1, 2);

        assert_eq!(
            shot.create_observation(lm, Vector2::zeros(), 1.0, Vector3::zeros(), 0),
            Err(ShotError::WrongLinkMode {
                expected: LinkMode::Keyed,
                actual: LinkMode::Indexed
            })
        );
    }

    #[test]
    fn test_scale_pose() {
        let mut shot = create_test_shot(1, LinkMode::Indexed);
        let rotation = UnitQuaternion::from_euler_angles(0.1, -0.2, 0.3);
        shot.set_pose(SE3::new(rotation, Vector3::new(1.0, -2.0, 3.0)));
        let before = shot.world_to_cam();

        shot.scale_pose(2.0);
        let after = shot.world_to_cam();

        for row in 0..3 {
            assert_relative_eq!(after[(row, 3)], 2.0 * before[(row, 3)], epsilon = 1e-12);
            for col in 0..3 {
                assert_relative_eq!(after[(row, col)], before[(row, col)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_world_cam_matrices_are_inverse() {
        let mut shot = create_test_shot(1, LinkMode::Indexed);
        shot.set_pose(SE3::new(
            UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1),
            Vector3::new(0.5, 1.0, -1.5),
        ));

        let product = shot.world_to_cam() * shot.cam_to_world();
        assert_relative_eq!(product, Matrix4::identity(), epsilon = 1e-10);

        let center = shot.camera_center();
        assert_relative_eq!(
            shot.pose().transform_point(&center),
            Vector3::zeros(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_scale_landmarks_once_per_landmark() {
        let mut landmarks: Landmarks = SlotMap::with_key();
        let lm = landmark_at(&mut landmarks, 1.0, 2.0, 3.0);
        let untouched = landmark_at(&mut landmarks, 1.0, 1.0, 1.0);
        let mut shot = create_shot_with_features(1, 3);
        shot.add_landmark_observation(lm, 0).unwrap();
        shot.add_landmark_observation(lm, 2).unwrap();

        shot.scale_landmarks(3.0, &mut landmarks);

        assert_eq!(landmarks[lm].position, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(landmarks[untouched].position, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_keypoint_bearings() {
        let mut shot = create_test_shot(1, LinkMode::Indexed);
        shot.init_and_take_datastructures(
            vec![Keypoint::new(320.0, 240.0, 1.0), Keypoint::new(820.0, 240.0, 1.0)],
            vec![[0; DESCRIPTOR_LEN]; 2],
        )
        .unwrap();

        let bearings = shot.keypoint_bearings();
        assert_relative_eq!(bearings[0], Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(
            bearings[1],
            Vector3::new(1.0, 0.0, 1.0).normalize(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_shot_identity_comparisons() {
        let shot3 = create_test_shot(3, LinkMode::Indexed);
        let shot7 = create_test_shot(7, LinkMode::Keyed);
        let also3 = create_shot_with_features(3, 10);

        assert!(shot3 < shot7);
        assert!(shot7 >= shot3);
        assert_ne!(shot3, shot7);
        assert_eq!(shot3, also3);

        let ordered: BTreeSet<Shot> = [shot7.clone(), shot3.clone(), also3].into_iter().collect();
        assert_eq!(ordered.len(), 2);
        assert_eq!(
            ordered.iter().map(Shot::id).collect::<Vec<_>>(),
            vec![ShotId::new(3), ShotId::new(7)]
        );

        let hashed: HashSet<Shot> = [shot3, shot7].into_iter().collect();
        assert!(hashed.contains(&create_test_shot(7, LinkMode::Indexed)));
    }

    #[test]
    fn test_camera_accessors() {
        let shot = create_test_shot(1, LinkMode::Indexed);
        assert_eq!(shot.camera_name(), "test_cam");
        assert_eq!(shot.camera_model().fx, 500.0);
        assert_eq!(shot.name(), "shot_1.jpg");
    }
}
