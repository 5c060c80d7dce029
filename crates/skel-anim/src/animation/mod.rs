//! Keyframe tracks, clips and playback state
//!
//! This module provides the time-varying half of the animation system:
//! - Keyframe sampling with linear and spherical interpolation
//! - Per-bone tracks producing a local T·R·S transform
//! - Immutable clips keyed by bone index, shared between instances
//! - Playback state with tick-rate scaling and looping
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use skel_anim::animation::{AnimationClip, Keyframe, KeyframeTrack, PlaybackState};
//! use skel_anim::BoneIndex;
//! use glam::Vec3;
//!
//! let track = KeyframeTrack::new(
//!     vec![Keyframe::new(0.0, Vec3::ZERO), Keyframe::new(2.0, Vec3::X)],
//!     Vec::new(),
//!     Vec::new(),
//! );
//! let clip = AnimationClip::new("slide", 2.0, 1.0, [(BoneIndex::new(0), track)])?;
//!
//! let mut playback = PlaybackState::new();
//! playback.bind(Arc::new(clip));
//! assert_eq!(playback.update(1.5), Some(1.5));
//! assert_eq!(playback.update(1.0), Some(0.5));
//! # Ok::<(), skel_anim::SkelAnimError>(())
//! ```

mod clip;
mod interpolation;
mod playback;
mod track;
mod types;

pub use clip::{AnimationClip, ClipOptions, DEFAULT_TICKS_PER_SECOND};
pub use interpolation::{find_segment, sample_keys, segment_factor};
pub use playback::PlaybackState;
pub use track::{KeyframeTrack, TrackSample};
pub use types::{Interpolate, Keyframe, normalize_rotation};
