use thiserror::Error;

use crate::system::EntityId;

/// Error types for skeleton, clip and entity construction
///
/// None of these are produced on the per-frame path; evaluation degrades to the
/// bind pose instead of failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkelAnimError {
    /// The skeleton has more bones than the skin-matrix palette can hold
    #[error("Skeleton error: {count} bones exceed the palette capacity of {capacity}")]
    TooManyBones { count: usize, capacity: usize },

    /// Clip timing data that cannot be played back
    #[error("Clip error: {0}")]
    InvalidClip(String),

    /// No instance is registered for the entity
    #[error("Entity error: unknown entity {0}")]
    UnknownEntity(EntityId),

    /// An instance is already registered for the entity
    #[error("Entity error: entity {0} is already registered")]
    DuplicateEntity(EntityId),
}

/// Result type using SkelAnimError
pub type Result<T> = std::result::Result<T, SkelAnimError>;
