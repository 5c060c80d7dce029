//! Per-entity animation instance
//!
//! A `SkinnedInstance` ties a shared skeleton to the mutable state one entity
//! needs to animate it: playback state, scratch pose storage, a live palette
//! and the binding that tells the renderer which palette to read.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use skel_anim::{AnimationClip, SkinnedInstance, Skeleton};
//!
//! let mut instance = SkinnedInstance::new(Arc::new(Skeleton::empty()));
//! instance.bind(Arc::new(AnimationClip::empty()));
//! instance.update(1.0 / 60.0);
//! assert_eq!(instance.bound_palette().len(), skel_anim::PALETTE_CAPACITY);
//! ```

use std::sync::Arc;

use crate::animation::{AnimationClip, PlaybackState};
use crate::binding::PoseBinding;
use crate::pose::{self, GlobalPose};
use crate::skeleton::Skeleton;
use crate::skinning::{self, SkinMatrixPalette};

/// Animation state of one skinned entity
#[derive(Debug, Clone)]
pub struct SkinnedInstance {
    skeleton: Arc<Skeleton>,
    playback: PlaybackState,
    pose: GlobalPose,
    live_palette: SkinMatrixPalette,
    binding: PoseBinding,
}

impl SkinnedInstance {
    /// Create an instance showing the bind pose
    pub fn new(skeleton: Arc<Skeleton>) -> Self {
        let pose = GlobalPose::new(&skeleton);
        Self {
            skeleton,
            playback: PlaybackState::new(),
            pose,
            live_palette: SkinMatrixPalette::identity(),
            binding: PoseBinding::BindPose,
        }
    }

    /// Attach a clip and start playing it from the beginning
    ///
    /// The displayed palette switches to the animation on the next update.
    pub fn bind(&mut self, clip: Arc<AnimationClip>) {
        if clip.bone_span() > self.skeleton.bone_count() {
            log::warn!(
                "Clip '{}' animates bones up to {} but skeleton '{}' has {}",
                clip.name(),
                clip.bone_span(),
                self.skeleton.name(),
                self.skeleton.bone_count()
            );
        }
        self.playback.bind(clip);
    }

    /// Detach the clip and revert to the bind pose
    pub fn unbind(&mut self) {
        self.playback.unbind();
        self.set_binding(PoseBinding::BindPose);
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    /// Freeze playback and show the bind pose
    pub fn pause(&mut self) {
        self.playback.pause();
        self.set_binding(PoseBinding::BindPose);
    }

    /// Stop, rewind and show the bind pose
    pub fn stop(&mut self) {
        self.playback.stop();
        self.set_binding(PoseBinding::BindPose);
    }

    /// Advance playback by `delta_seconds` and refresh the live palette
    ///
    /// When nothing is playing the binding reverts to the skeleton's default
    /// palette. The default palette itself is never written.
    pub fn update(&mut self, delta_seconds: f32) {
        let Some(time) = self.playback.update(delta_seconds) else {
            self.set_binding(PoseBinding::BindPose);
            return;
        };
        let Some(clip) = self.playback.clip() else {
            self.set_binding(PoseBinding::BindPose);
            return;
        };

        pose::evaluate_into(&self.skeleton, Some(clip.as_ref()), time, &mut self.pose);
        skinning::build_palette_into(&self.pose, &self.skeleton, &mut self.live_palette);
        self.set_binding(PoseBinding::Animated);
    }

    fn set_binding(&mut self, binding: PoseBinding) {
        if self.binding != binding {
            log::trace!(
                "Skeleton '{}': binding {:?} -> {:?}",
                self.skeleton.name(),
                self.binding,
                binding
            );
            self.binding = binding;
        }
    }

    /// The palette the renderer should upload this frame
    ///
    /// Valid until the next call to [`Self::update`].
    pub fn bound_palette(&self) -> &SkinMatrixPalette {
        self.binding
            .resolve(self.skeleton.default_palette(), &self.live_palette)
    }

    pub fn binding(&self) -> PoseBinding {
        self.binding
    }

    pub fn skeleton(&self) -> &Arc<Skeleton> {
        &self.skeleton
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Global pose from the most recent animated update
    pub fn global_pose(&self) -> &GlobalPose {
        &self.pose
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }
}
