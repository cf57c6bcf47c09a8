//! Development-time dump of skeleton state
//!
//! Emits a human-readable listing of the cached poses (and optionally a
//! caller-supplied pose array alongside them) through `log::debug!`. This
//! sits outside the core contract: nothing here affects correctness, and
//! the output format is not stable.

use log::debug;

use crate::pose::Pose;
use crate::skeleton::Skeleton;

/// Log every joint's cached poses and authoring data at debug level.
pub fn dump_skeleton(skeleton: &Skeleton) {
    debug!("skeleton [{} joints]", skeleton.joint_count());
    for i in 0..skeleton.joint_count() {
        let joint = &skeleton.joints()[i];
        debug!("  joint {} \"{}\"", i, joint.name);
        debug!("    abs_bind_pose    = {:?}", skeleton.absolute_bind_pose(i));
        debug!("    rel_bind_pose    = {:?}", skeleton.relative_bind_pose(i));
        debug!(
            "    abs_default_pose = {:?}",
            skeleton.absolute_default_pose(i)
        );
        debug!(
            "    rel_default_pose = {:?}",
            skeleton.relative_default_pose(i)
        );
        debug!("    translation      = {:?}", joint.translation);
        debug!("    rotation         = {:?}", joint.rotation);
        debug!("    pre_rotation     = {:?}", joint.pre_rotation);
        debug!("    post_rotation    = {:?}", joint.post_rotation);
        debug!("    bind_valid       = {}", joint.bind_transform_valid);
        if let Some(parent) = skeleton.parent_index(i) {
            debug!("    parent           = \"{}\"", skeleton.joint_name(parent));
        }
    }
}

/// Log a pose array next to the skeleton's cached poses.
///
/// Entries past the end of `poses` are skipped rather than treated as an
/// error, consistent with the defensive lookup policy.
pub fn dump_poses(skeleton: &Skeleton, poses: &[Pose]) {
    debug!(
        "skeleton [{} joints], pose array [{} entries]",
        skeleton.joint_count(),
        poses.len()
    );
    for i in 0..skeleton.joint_count() {
        debug!("  joint {} \"{}\"", i, skeleton.joint_name(i));
        debug!(
            "    abs_default_pose = {:?}",
            skeleton.absolute_default_pose(i)
        );
        debug!(
            "    rel_default_pose = {:?}",
            skeleton.relative_default_pose(i)
        );
        if let Some(pose) = poses.get(i) {
            debug!("    pose             = {pose:?}");
        }
        if let Some(parent) = skeleton.parent_index(i) {
            debug!("    parent           = \"{}\"", skeleton.joint_name(parent));
        }
    }
}
