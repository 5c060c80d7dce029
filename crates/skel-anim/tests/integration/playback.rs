//! Playback, looping and default-vs-live palette binding

use std::sync::Arc;

use glam::Vec3;
use pretty_assertions::assert_eq;
use skel_anim::animation::{AnimationClip, Keyframe, KeyframeTrack};
use skel_anim::{BoneIndex, PoseBinding, Skeleton, SkinnedInstance};

use crate::common::{EPSILON, init_logging, spin_clip, two_bone_skeleton};

#[test]
fn test_looping_wraps_current_time() {
    let mut instance = SkinnedInstance::new(two_bone_skeleton());
    instance.bind(spin_clip(2.0, 1.0));

    instance.update(1.5);
    instance.update(1.0);
    assert!((instance.playback().current_time() - 0.5).abs() < EPSILON);
}

#[test]
fn test_wall_clock_is_scaled_to_ticks() {
    let mut instance = SkinnedInstance::new(two_bone_skeleton());
    // 100 ticks at 25 per second is a four second clip
    instance.bind(spin_clip(100.0, 25.0));

    instance.update(1.0);
    let child = instance.global_pose().bone(BoneIndex::new(1));
    assert!(child.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::Y, EPSILON));
    assert_eq!(instance.playback().current_seconds(), 1.0);
}

#[test]
fn test_unbind_bind_round_trip_leaves_default_palette_untouched() {
    init_logging();
    let skeleton = two_bone_skeleton();
    let pristine = skeleton.default_palette().clone();
    let mut instance = SkinnedInstance::new(Arc::clone(&skeleton));

    instance.bind(spin_clip(4.0, 1.0));
    instance.update(1.0);
    assert_eq!(instance.binding(), PoseBinding::Animated);
    assert_ne!(instance.bound_palette(), &pristine);

    instance.unbind();
    assert_eq!(instance.binding(), PoseBinding::BindPose);
    assert_eq!(instance.bound_palette(), &pristine);

    instance.bind(spin_clip(4.0, 1.0));
    instance.update(0.5);
    instance.unbind();
    instance.update(0.5);

    assert_eq!(skeleton.default_palette(), &pristine);
    assert!(skeleton.default_palette().is_identity());
}

#[test]
fn test_instances_sharing_a_skeleton_do_not_alias() {
    let skeleton = two_bone_skeleton();
    let mut moving = SkinnedInstance::new(Arc::clone(&skeleton));
    let idle = SkinnedInstance::new(Arc::clone(&skeleton));

    moving.bind(spin_clip(4.0, 1.0));
    moving.update(1.0);

    assert!(!moving.bound_palette().is_identity());
    assert!(idle.bound_palette().is_identity());
}

#[test]
fn test_empty_clip_yields_bind_pose_every_frame() {
    let skeleton = two_bone_skeleton();
    let mut instance = SkinnedInstance::new(Arc::clone(&skeleton));
    instance.bind(Arc::new(AnimationClip::empty()));

    for _ in 0..10 {
        instance.update(1.0 / 30.0);
        assert!(instance.bound_palette().iter().all(|m| m.is_finite()));
    }
    // Rest globals times inverse-bind is identity for this rig
    assert!(
        instance
            .bound_palette()
            .iter()
            .all(|m| m.abs_diff_eq(glam::Mat4::IDENTITY, EPSILON))
    );
}

#[test]
fn test_empty_skeleton_renders_identity() {
    let mut instance = SkinnedInstance::new(Arc::new(Skeleton::empty()));
    instance.bind(spin_clip(4.0, 1.0));
    instance.update(1.0);
    assert!(instance.bound_palette().is_identity());
}

#[test]
fn test_clip_for_other_bones_keeps_bind_locals() {
    let track = KeyframeTrack::new(
        vec![Keyframe::new(0.0, Vec3::splat(9.0))],
        Vec::new(),
        Vec::new(),
    );
    let clip = AnimationClip::new("stray", 1.0, 1.0, [(BoneIndex::new(7), track)]).unwrap();

    let mut instance = SkinnedInstance::new(two_bone_skeleton());
    instance.bind(Arc::new(clip));
    instance.update(0.5);

    assert!(
        instance
            .bound_palette()
            .iter()
            .all(|m| m.abs_diff_eq(glam::Mat4::IDENTITY, EPSILON))
    );
}
