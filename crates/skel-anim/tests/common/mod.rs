//! Common test utilities and fixtures

#![allow(dead_code)]

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use skel_anim::animation::{AnimationClip, Keyframe, KeyframeTrack};
use skel_anim::import::{ImportedBone, ImportedNode, ImportedSkeleton};
use skel_anim::{BoneIndex, Skeleton, SkeletonOptions};

pub const EPSILON: f32 = 1e-5;

/// Route library logging to the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// root -> child with the child one unit along X
pub fn two_bone_rig() -> ImportedSkeleton {
    ImportedSkeleton {
        name: "two_bone".into(),
        bones: vec![
            ImportedBone {
                name: "root".into(),
                inverse_bind: Mat4::IDENTITY,
            },
            ImportedBone {
                name: "child".into(),
                inverse_bind: Mat4::from_translation(Vec3::NEG_X),
            },
        ],
        root: ImportedNode::new("root", Mat4::IDENTITY)
            .with_child(ImportedNode::new("child", Mat4::from_translation(Vec3::X))),
    }
}

pub fn two_bone_skeleton() -> Arc<Skeleton> {
    Arc::new(
        Skeleton::from_import(&two_bone_rig(), &SkeletonOptions::default())
            .expect("two bone rig is valid"),
    )
}

/// Straight chain of `count` bones, each one unit above its parent
pub fn chain_rig(count: usize) -> ImportedSkeleton {
    let names: Vec<String> = (0..count).map(|i| format!("bone_{i}")).collect();

    let mut node: Option<ImportedNode> = None;
    for name in names.iter().rev() {
        let mut current = ImportedNode::new(name.clone(), Mat4::from_translation(Vec3::Y));
        if let Some(child) = node.take() {
            current = current.with_child(child);
        }
        node = Some(current);
    }

    ImportedSkeleton {
        name: format!("chain_{count}"),
        bones: names
            .iter()
            .enumerate()
            .map(|(i, name)| ImportedBone {
                name: name.clone(),
                inverse_bind: Mat4::from_translation(Vec3::new(0.0, -((i + 1) as f32), 0.0)),
            })
            .collect(),
        root: node.unwrap_or_else(|| ImportedNode::new("empty", Mat4::IDENTITY)),
    }
}

/// One full turn about Z over `duration` ticks on bone 0, sampled at quarter turns
pub fn spin_clip(duration: f32, ticks_per_second: f32) -> Arc<AnimationClip> {
    let rotations = (0..=4)
        .map(|step| {
            let fraction = step as f32 / 4.0;
            Keyframe::new(
                duration * fraction,
                Quat::from_rotation_z(std::f32::consts::TAU * fraction),
            )
        })
        .collect();
    let track = KeyframeTrack::new(Vec::new(), rotations, Vec::new());

    Arc::new(
        AnimationClip::new("spin", duration, ticks_per_second, [(BoneIndex::new(0), track)])
            .expect("spin clip is valid"),
    )
}
