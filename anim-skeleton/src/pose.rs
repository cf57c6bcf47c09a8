//! Pose algebra for skeleton joints
//!
//! A [`Pose`] is a translation/rotation/scale triple describing one
//! coordinate frame relative to another. Composition (`a * b`, apply `b`
//! inside `a`'s frame) and inversion go through the 4x4 matrix form and
//! re-decompose the result, so poses built from arbitrary affine matrices
//! (pivot/offset transforms baked by authoring tools) compose consistently
//! with poses built from plain translation/rotation components.

use glam::{Mat4, Quat, Vec3};
use std::ops::Mul;

/// A joint transform: translation, rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Pose {
    /// The identity pose: no translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Decompose an affine transform matrix into a pose.
    ///
    /// This is how raw pre/post transform and bind transform matrices from
    /// the model file enter the pose algebra.
    pub fn from_mat4(mat: Mat4) -> Self {
        let (scale, rotation, translation) = mat.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// A pure translation pose.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// A pure rotation pose.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// The 4x4 matrix form of this pose.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// The pose mapping this pose's target frame back to its source frame.
    pub fn inverse(&self) -> Self {
        Self::from_mat4(self.to_mat4().inverse())
    }

    /// Approximate equality with `max_abs_diff` tolerance per component.
    ///
    /// Rotations compare up to quaternion sign, since `q` and `-q` encode
    /// the same rotation.
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.translation.abs_diff_eq(other.translation, max_abs_diff)
            && self.scale.abs_diff_eq(other.scale, max_abs_diff)
            && (self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
                || self.rotation.abs_diff_eq(-other.rotation, max_abs_diff))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composition: `a * b` applies `b`'s local frame inside `a`'s frame
/// (parent-then-child). Non-commutative.
impl Mul for Pose {
    type Output = Pose;

    fn mul(self, rhs: Pose) -> Pose {
        Pose::from_mat4(self.to_mat4() * rhs.to_mat4())
    }
}

/// Transform a point by this pose.
impl Mul<Vec3> for Pose {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.translation + self.rotation * (self.scale * rhs)
    }
}
