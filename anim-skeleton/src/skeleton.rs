//! Skeleton pose cache and pose-array conversion
//!
//! [`Skeleton`] is built once per character from the loader's ordered joint
//! list and is immutable afterwards, so it can be read concurrently without
//! synchronization. Construction populates six parallel pose arrays in a
//! single forward pass; the runtime surface is cached-pose accessors plus
//! two relative-to-absolute conversion operations over externally owned,
//! per-frame pose arrays.
//!
//! Index-range policy is two-tier and deliberate:
//!
//! - The cached-pose accessors and name/parent queries are **strict**: the
//!   joint index must be in `[0, joint_count())`, and an out-of-range index
//!   panics via the slice bounds check. They sit on the per-frame hot path
//!   and do not pay for graceful fallback.
//! - [`Skeleton::absolute_pose`] is **defensive**: an out-of-range index
//!   resolves to the identity pose, which tolerates pose arrays that have
//!   not yet been resized to match the skeleton.

use crate::error::{Result, SkeletonError};
use crate::joint::{Joint, NO_PARENT};
use crate::pose::Pose;

/// An immutable joint hierarchy with cached default and bind poses.
///
/// Joints are stored in a flat array and reference their parent by index;
/// the index in the original list is the stable joint ID. The joint list
/// must be topologically ordered (every parent at a smaller index than its
/// children), which [`Skeleton::from_joints`] validates once up front.
pub struct Skeleton {
    joints: Vec<Joint>,

    relative_pre_rotation_poses: Vec<Pose>,
    relative_post_rotation_poses: Vec<Pose>,
    relative_default_poses: Vec<Pose>,
    absolute_default_poses: Vec<Pose>,
    relative_bind_poses: Vec<Pose>,
    absolute_bind_poses: Vec<Pose>,
}

impl Skeleton {
    /// Build the skeleton cache from an ordered joint list.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::InvalidParentIndex`] if any joint's parent
    /// index is outside `{-1} ∪ [0, joint)`, i.e. if the list is not in
    /// parents-before-children order.
    pub fn from_joints(joints: Vec<Joint>) -> Result<Self> {
        for (i, joint) in joints.iter().enumerate() {
            let parent = joint.parent_index;
            if parent != NO_PARENT && (parent < 0 || parent as usize >= i) {
                return Err(SkeletonError::InvalidParentIndex { joint: i, parent });
            }
        }

        let count = joints.len();
        let mut skeleton = Self {
            joints,
            relative_pre_rotation_poses: Vec::with_capacity(count),
            relative_post_rotation_poses: Vec::with_capacity(count),
            relative_default_poses: Vec::with_capacity(count),
            absolute_default_poses: Vec::with_capacity(count),
            relative_bind_poses: Vec::with_capacity(count),
            absolute_bind_poses: Vec::with_capacity(count),
        };
        skeleton.build_pose_caches();
        Ok(skeleton)
    }

    /// Populate the six pose arrays in one forward pass.
    ///
    /// Absolute entries for a parent are always written before any child
    /// reads them, which is exactly what the topological-order check in
    /// `from_joints` guarantees.
    fn build_pose_caches(&mut self) {
        for i in 0..self.joints.len() {
            let joint = &self.joints[i];
            let parent = self.parent_index(i);

            // Pre/post rotation blocks: the baked pivot transforms wrap the
            // authored orient rotations on their outer side.
            let pre_rotation_pose =
                Pose::from_mat4(joint.pre_transform) * Pose::from_rotation(joint.pre_rotation);
            let post_rotation_pose =
                Pose::from_rotation(joint.post_rotation) * Pose::from_mat4(joint.post_transform);

            // Canonical five-term local transform chain. The source format
            // fixes this order; reordering any term changes the pose.
            let relative_default = Pose::from_translation(joint.translation)
                * pre_rotation_pose
                * Pose::from_rotation(joint.rotation)
                * post_rotation_pose;
            let absolute_default = match parent {
                Some(p) => self.absolute_default_poses[p] * relative_default,
                None => relative_default,
            };

            // Bind pose, falling back joint-by-joint to the default pose
            // when the source data carried no bind transform. A skeleton
            // with incomplete bind data degrades to its rest pose instead
            // of failing to build.
            let (relative_bind, absolute_bind) = if joint.bind_transform_valid {
                // The supplied bind transform is already in model space;
                // un-compose the parent's to get the relative form.
                let absolute_bind = Pose::from_mat4(joint.bind_transform);
                let relative_bind = match parent {
                    Some(p) => self.absolute_bind_poses[p].inverse() * absolute_bind,
                    None => absolute_bind,
                };
                (relative_bind, absolute_bind)
            } else {
                (relative_default, absolute_default)
            };

            self.relative_pre_rotation_poses.push(pre_rotation_pose);
            self.relative_post_rotation_poses.push(post_rotation_pose);
            self.relative_default_poses.push(relative_default);
            self.absolute_default_poses.push(absolute_default);
            self.relative_bind_poses.push(relative_bind);
            self.absolute_bind_poses.push(absolute_bind);
        }
    }

    /// Number of joints in the skeleton.
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Find a joint by exact name.
    ///
    /// Linear scan; when several joints share the name the lowest index
    /// wins. Returns `None` if no joint matches.
    pub fn joint_index_by_name(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|joint| joint.name == name)
    }

    /// Name of the joint at `joint_index`. Strict: panics if out of range.
    pub fn joint_name(&self, joint_index: usize) -> &str {
        &self.joints[joint_index].name
    }

    /// Parent of the joint at `joint_index`, or `None` for a root.
    /// Strict: panics if out of range.
    pub fn parent_index(&self, joint_index: usize) -> Option<usize> {
        let parent = self.joints[joint_index].parent_index;
        (parent >= 0).then_some(parent as usize)
    }

    /// Pre-multiplied transform block: baked pre-transform composed with
    /// the pre-rotation. Strict: panics if out of range.
    pub fn relative_pre_rotation_pose(&self, joint_index: usize) -> Pose {
        self.relative_pre_rotation_poses[joint_index]
    }

    /// Post-multiplied transform block: post-rotation composed with the
    /// baked post-transform. Strict: panics if out of range.
    pub fn relative_post_rotation_pose(&self, joint_index: usize) -> Pose {
        self.relative_post_rotation_poses[joint_index]
    }

    /// Rest pose relative to the parent joint. Strict: panics if out of
    /// range.
    pub fn relative_default_pose(&self, joint_index: usize) -> Pose {
        self.relative_default_poses[joint_index]
    }

    /// Rest pose in model space. Strict: panics if out of range.
    pub fn absolute_default_pose(&self, joint_index: usize) -> Pose {
        self.absolute_default_poses[joint_index]
    }

    /// Bind pose relative to the parent joint. Strict: panics if out of
    /// range.
    pub fn relative_bind_pose(&self, joint_index: usize) -> Pose {
        self.relative_bind_poses[joint_index]
    }

    /// Bind pose in model space. Strict: panics if out of range.
    pub fn absolute_bind_pose(&self, joint_index: usize) -> Pose {
        self.absolute_bind_poses[joint_index]
    }

    /// All relative default poses, index-aligned with the joint list.
    pub fn relative_default_poses(&self) -> &[Pose] {
        &self.relative_default_poses
    }

    /// All absolute default poses, index-aligned with the joint list.
    pub fn absolute_default_poses(&self) -> &[Pose] {
        &self.absolute_default_poses
    }

    /// All relative bind poses, index-aligned with the joint list.
    pub fn relative_bind_poses(&self) -> &[Pose] {
        &self.relative_bind_poses
    }

    /// All absolute bind poses, index-aligned with the joint list.
    pub fn absolute_bind_poses(&self) -> &[Pose] {
        &self.absolute_bind_poses
    }

    /// Resolve one joint of a relative pose array to model space.
    ///
    /// Recursively composes up the parent chain, O(depth) per call with no
    /// memoization. Defensive: an index at or beyond the pose array or the
    /// joint count yields [`Pose::IDENTITY`] instead of panicking, so a
    /// pose array that has not yet been resized to match the skeleton is
    /// tolerated.
    ///
    /// Callers that need every joint's absolute pose should use
    /// [`Skeleton::convert_relative_to_absolute`] instead; calling this
    /// once per joint is O(depth²) in the worst case.
    pub fn absolute_pose(&self, joint_index: usize, relative_poses: &[Pose]) -> Pose {
        if joint_index >= relative_poses.len() || joint_index >= self.joints.len() {
            return Pose::IDENTITY;
        }
        match self.parent_index(joint_index) {
            Some(parent) => self.absolute_pose(parent, relative_poses) * relative_poses[joint_index],
            None => relative_poses[joint_index],
        }
    }

    /// Convert a relative pose array to model space, in place.
    ///
    /// Single forward pass, O(n) total: by the time a child is reached its
    /// parent entry already holds an absolute pose. Entries beyond
    /// `min(poses.len(), joint_count())` are left untouched.
    pub fn convert_relative_to_absolute(&self, poses: &mut [Pose]) {
        let count = poses.len().min(self.joints.len());
        for i in 0..count {
            if let Some(parent) = self.parent_index(i) {
                poses[i] = poses[parent] * poses[i];
            }
        }
    }

    pub(crate) fn joints(&self) -> &[Joint] {
        &self.joints
    }
}
