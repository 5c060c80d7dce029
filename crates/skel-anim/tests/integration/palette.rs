//! Skin-matrix palette construction

use std::sync::Arc;

use glam::Mat4;
use pretty_assertions::assert_eq;
use skel_anim::skinning::{self, FLOATS_PER_MATRIX};
use skel_anim::{
    BindPaletteMode, PALETTE_CAPACITY, SkelAnimError, Skeleton, SkeletonOptions, SkinnedInstance,
    pose,
};

use crate::common::{EPSILON, chain_rig, spin_clip};

#[test]
fn test_three_bone_skeleton_fills_full_palette() {
    let skeleton = Skeleton::from_import(&chain_rig(3), &SkeletonOptions::default()).unwrap();
    let rest = pose::evaluate(&skeleton, None, 0.0);
    let palette = skinning::build_palette(&rest, &skeleton);

    assert_eq!(palette.len(), PALETTE_CAPACITY);
    assert_eq!(palette.as_slice().len(), 100);
    for entry in &palette.as_slice()[3..] {
        assert_eq!(*entry, Mat4::IDENTITY);
    }
    // Rest globals cancel the inverse-bind offsets
    for entry in &palette.as_slice()[..3] {
        assert!(entry.abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }
}

#[test]
fn test_rest_pose_default_palette() {
    let options = SkeletonOptions {
        bind_palette: BindPaletteMode::RestPose,
    };
    let skeleton = Skeleton::from_import(&chain_rig(4), &options).unwrap();
    let palette = skeleton.default_palette();

    assert_eq!(palette.len(), PALETTE_CAPACITY);
    assert!(palette.iter().all(|m| m.abs_diff_eq(Mat4::IDENTITY, EPSILON)));
}

#[test]
fn test_oversized_skeleton_is_rejected() {
    let result = Skeleton::from_import(&chain_rig(PALETTE_CAPACITY + 1), &SkeletonOptions::default());
    assert_eq!(
        result.err(),
        Some(SkelAnimError::TooManyBones {
            count: PALETTE_CAPACITY + 1,
            capacity: PALETTE_CAPACITY,
        })
    );

    let full = Skeleton::from_import(&chain_rig(PALETTE_CAPACITY), &SkeletonOptions::default());
    assert!(full.is_ok());
}

#[test]
fn test_gpu_data_layout() {
    let skeleton = Arc::new(Skeleton::from_import(&chain_rig(2), &SkeletonOptions::default()).unwrap());
    let mut instance = SkinnedInstance::new(skeleton);
    instance.bind(spin_clip(4.0, 1.0));
    instance.update(1.0);

    let palette = instance.bound_palette();
    let data = palette.to_gpu_data();
    assert_eq!(data.len(), PALETTE_CAPACITY * FLOATS_PER_MATRIX);
    assert_eq!(&data[..FLOATS_PER_MATRIX], &palette[0].to_cols_array()[..]);
    assert_eq!(&data[data.len() - FLOATS_PER_MATRIX..], &Mat4::IDENTITY.to_cols_array()[..]);
}
