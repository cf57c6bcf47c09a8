use thiserror::Error;

/// Error types for skeleton construction
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonError {
    /// A joint references a parent that is not at a smaller index.
    ///
    /// Joint lists must be topologically ordered: every parent appears
    /// before its children, so a valid parent index is either -1 (root)
    /// or in `[0, joint)`. Anything else would make the single forward
    /// build pass read uninitialized cache entries, so it is rejected
    /// up front. This rule also makes cycles impossible.
    #[error("joint {joint} has invalid parent index {parent}")]
    InvalidParentIndex { joint: usize, parent: i32 },
}

/// Result type using SkeletonError
pub type Result<T> = std::result::Result<T, SkeletonError>;
