//! Joint descriptor consumed by the skeleton builder
//!
//! A [`Joint`] carries the per-joint authoring data extracted by the model
//! loader: the local transform components in the order the source format
//! encodes them, plus the optional absolute bind transform recorded where
//! skin weights were authored.

use glam::{Mat4, Quat, Vec3};

/// Sentinel parent index marking a root joint.
pub const NO_PARENT: i32 = -1;

/// Per-joint authoring data, one per skeleton slot.
///
/// Names are not required to be unique; the joint's index in the list is
/// the stable identifier used everywhere else.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Joint {
    pub name: String,
    /// Index of the parent joint, or [`NO_PARENT`] for roots. Must be
    /// smaller than this joint's own index (parents precede children).
    pub parent_index: i32,
    pub translation: Vec3,
    pub rotation: Quat,
    /// Rotation applied before the primary rotation (authoring-tool joint
    /// orient).
    pub pre_rotation: Quat,
    /// Rotation applied after the primary rotation.
    pub post_rotation: Quat,
    /// Baked pivot/offset transform preceding the pre-rotation; not
    /// necessarily a pure rotation.
    pub pre_transform: Mat4,
    /// Baked pivot/offset transform following the post-rotation.
    pub post_transform: Mat4,
    /// Absolute (model-space) transform at which skin weights were
    /// authored. Only meaningful when `bind_transform_valid` is set.
    pub bind_transform: Mat4,
    /// Whether the source data actually supplied `bind_transform`. When
    /// false the builder falls back to the default pose for this joint.
    pub bind_transform_valid: bool,
}

impl Joint {
    /// A root joint with identity components and no bind data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_index: NO_PARENT,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            pre_rotation: Quat::IDENTITY,
            post_rotation: Quat::IDENTITY,
            pre_transform: Mat4::IDENTITY,
            post_transform: Mat4::IDENTITY,
            bind_transform: Mat4::IDENTITY,
            bind_transform_valid: false,
        }
    }
}

impl Default for Joint {
    fn default() -> Self {
        Self::new(String::new())
    }
}
