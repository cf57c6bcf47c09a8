//! Skeleton rest/bind pose cache and pose-array conversion
//!
//! This crate builds the immutable pose cache for a hierarchical, rigid-jointed
//! skeleton and converts per-frame pose arrays between parent-relative and
//! model-space (absolute) representations. It sits between a model loader
//! (which produces the ordered joint list) and the animation/render pipeline
//! (which queries cached poses and converts freshly evaluated pose arrays
//! every frame).

pub mod diagnostics;
pub mod error;
pub mod joint;
pub mod pose;
pub mod skeleton;

// Re-export common types
pub use error::{Result, SkeletonError};
pub use joint::{Joint, NO_PARENT};
pub use pose::Pose;
pub use skeleton::Skeleton;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
