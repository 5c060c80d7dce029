//! Skin-matrix palette construction
//!
//! The palette is the per-bone matrix array a skinning shader reads. Each entry
//! combines a bone's animated global transform with its inverse-bind matrix:
//!
//! ```text
//! palette[bone] = global_pose[bone] * inverse_bind[bone]
//! ```
//!
//! The palette always holds [`PALETTE_CAPACITY`] matrices because the shader
//! declares a fixed-size uniform array; entries past the skeleton's bone count
//! are identity.

use glam::Mat4;

use crate::pose::GlobalPose;
use crate::skeleton::Skeleton;

/// Number of matrices in every palette (size of the shader's bone array)
pub const PALETTE_CAPACITY: usize = 100;

/// Floats per palette entry when flattened for upload
pub const FLOATS_PER_MATRIX: usize = 16;

/// Fixed-capacity array of skin matrices
#[derive(Debug, Clone, PartialEq)]
pub struct SkinMatrixPalette {
    matrices: Box<[Mat4; PALETTE_CAPACITY]>,
}

impl SkinMatrixPalette {
    /// Palette with every entry set to identity
    pub fn identity() -> Self {
        Self {
            matrices: Box::new([Mat4::IDENTITY; PALETTE_CAPACITY]),
        }
    }

    /// Number of matrices, always [`PALETTE_CAPACITY`]
    pub const fn len(&self) -> usize {
        PALETTE_CAPACITY
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Mat4> {
        self.matrices.get(index)
    }

    pub fn as_slice(&self) -> &[Mat4] {
        &self.matrices[..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mat4> {
        self.matrices.iter()
    }

    /// Check whether every entry is exactly identity
    pub fn is_identity(&self) -> bool {
        self.matrices.iter().all(|m| *m == Mat4::IDENTITY)
    }

    /// Reset every entry to identity
    pub fn reset(&mut self) {
        self.matrices.fill(Mat4::IDENTITY);
    }

    /// Get the palette as a flat column-major float array for GPU upload
    pub fn to_gpu_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(PALETTE_CAPACITY * FLOATS_PER_MATRIX);
        for matrix in self.matrices.iter() {
            data.extend_from_slice(&matrix.to_cols_array());
        }
        data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Mat4] {
        &mut self.matrices[..]
    }
}

impl Default for SkinMatrixPalette {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Index<usize> for SkinMatrixPalette {
    type Output = Mat4;

    fn index(&self, index: usize) -> &Self::Output {
        &self.matrices[index]
    }
}

impl<'a> IntoIterator for &'a SkinMatrixPalette {
    type Item = &'a Mat4;
    type IntoIter = std::slice::Iter<'a, Mat4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a fresh palette from a global pose
pub fn build_palette(pose: &GlobalPose, skeleton: &Skeleton) -> SkinMatrixPalette {
    let mut palette = SkinMatrixPalette::identity();
    build_palette_into(pose, skeleton, &mut palette);
    palette
}

/// Overwrite `palette` from a global pose
///
/// Entries past the bone count are reset to identity so a reused palette never
/// carries matrices from a larger skeleton.
pub fn build_palette_into(pose: &GlobalPose, skeleton: &Skeleton, palette: &mut SkinMatrixPalette) {
    let out = palette.as_mut_slice();
    let bone_count = skeleton.bone_count().min(PALETTE_CAPACITY);

    for bone in &skeleton.bones()[..bone_count] {
        let index = bone.index.as_usize();
        out[index] = pose.bone(bone.index) * bone.inverse_bind;
    }

    out[bone_count..].fill(Mat4::IDENTITY);
}
