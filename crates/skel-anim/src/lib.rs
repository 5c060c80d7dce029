//! Skeletal animation evaluation for GPU skinning
//!
//! Builds an immutable [`Skeleton`] and shareable [`AnimationClip`]s from
//! importer data, then turns wall-clock time into a fixed-size
//! [`SkinMatrixPalette`] every frame. Each entity owns a [`SkinnedInstance`];
//! an [`AnimationSystem`] drives all of them.
//!
//! ```rust
//! use std::sync::Arc;
//! use glam::Mat4;
//! use skel_anim::import::{ImportedBone, ImportedNode, ImportedSkeleton};
//! use skel_anim::{AnimationSystem, EntityId, Skeleton, SkeletonOptions};
//!
//! let imported = ImportedSkeleton {
//!     name: "rig".into(),
//!     bones: vec![ImportedBone { name: "root".into(), inverse_bind: Mat4::IDENTITY }],
//!     root: ImportedNode::new("root", Mat4::IDENTITY),
//! };
//! let skeleton = Arc::new(Skeleton::from_import(&imported, &SkeletonOptions::default())?);
//!
//! let mut system = AnimationSystem::new();
//! system.insert(EntityId(1), skeleton)?;
//! system.update(1.0 / 60.0);
//! assert!(system.bound_palette(EntityId(1)).is_some_and(|p| p.is_identity()));
//! # Ok::<(), skel_anim::SkelAnimError>(())
//! ```

pub mod animation;
pub mod binding;
pub mod error;
pub mod import;
pub mod instance;
pub mod pose;
pub mod skeleton;
pub mod skinning;
pub mod system;

// Re-export common types
pub use animation::{AnimationClip, ClipOptions, KeyframeTrack, PlaybackState};
pub use binding::PoseBinding;
pub use error::{Result, SkelAnimError};
pub use instance::SkinnedInstance;
pub use pose::GlobalPose;
pub use skeleton::{BindPaletteMode, BoneIndex, Skeleton, SkeletonBuilder, SkeletonOptions};
pub use skinning::{PALETTE_CAPACITY, SkinMatrixPalette};
pub use system::{AnimationSystem, EntityId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
