//! Pose evaluation over bone hierarchies

use glam::{Mat4, Vec3};
use pretty_assertions::assert_eq;
use skel_anim::pose;
use skel_anim::{BoneIndex, Skeleton, SkeletonOptions};

use crate::common::{EPSILON, chain_rig, init_logging, spin_clip, two_bone_skeleton};

#[test]
fn test_child_follows_root_around_unit_circle() {
    init_logging();
    let skeleton = two_bone_skeleton();
    let clip = spin_clip(8.0, 1.0);

    for step in 0..=32 {
        let time = step as f32 * 0.25;
        let global = pose::evaluate(&skeleton, Some(&*clip), time);
        let root = global.bone(BoneIndex::new(0));
        let child = global.bone(BoneIndex::new(1));

        assert!(child.abs_diff_eq(root * Mat4::from_translation(Vec3::X), EPSILON));

        let position = child.transform_point3(Vec3::ZERO);
        assert!(
            (position.length() - 1.0).abs() < EPSILON,
            "child at t={time} is {position}, off the unit circle"
        );
        assert!(position.z.abs() < EPSILON);
    }
}

#[test]
fn test_quarter_turn_positions() {
    let skeleton = two_bone_skeleton();
    let clip = spin_clip(4.0, 1.0);

    let expected = [
        (0.0, Vec3::X),
        (1.0, Vec3::Y),
        (2.0, Vec3::NEG_X),
        (3.0, Vec3::NEG_Y),
    ];
    for (time, target) in expected {
        let child = pose::evaluate(&skeleton, Some(&*clip), time).bone(BoneIndex::new(1));
        assert!(
            child.transform_point3(Vec3::ZERO).abs_diff_eq(target, EPSILON),
            "t={time}"
        );
    }
}

#[test]
fn test_parents_precede_children() {
    let skeleton = Skeleton::from_import(&chain_rig(12), &SkeletonOptions::default()).unwrap();

    assert_eq!(skeleton.node_count(), 12);
    for (index, node) in skeleton.nodes().iter().enumerate() {
        if let Some(parent) = node.parent {
            assert!(parent < index);
        }
    }
}

#[test]
fn test_chain_rest_pose_stacks_translations() {
    let skeleton = Skeleton::from_import(&chain_rig(5), &SkeletonOptions::default()).unwrap();
    let rest = pose::evaluate(&skeleton, None, 0.0);

    for i in 0..5 {
        let tip = rest.bone(BoneIndex::new(i)).transform_point3(Vec3::ZERO);
        assert!(tip.abs_diff_eq(Vec3::new(0.0, (i + 1) as f32, 0.0), EPSILON));
    }
}
