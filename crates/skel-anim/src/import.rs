//! Importer boundary types
//!
//! These mirror what an asset decoder hands over after reading a model or
//! animation file: bone names with offset matrices, the raw node tree, and
//! per-channel keyframe arrays. Decoding the file itself happens elsewhere.

use glam::{Mat4, Quat, Vec3};

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// A skinned bone as reported by the importer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ImportedBone {
    /// Bone name, matching a node in the hierarchy
    pub name: String,
    /// Inverse-bind (offset) matrix, mesh space to bone space
    pub inverse_bind: Mat4,
}

/// A node of the source scene graph
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ImportedNode {
    pub name: String,
    /// Static local transform relative to the parent node
    pub transform: Mat4,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub children: Vec<ImportedNode>,
}

impl ImportedNode {
    /// Create a leaf node
    pub fn new(name: impl Into<String>, transform: Mat4) -> Self {
        Self {
            name: name.into(),
            transform,
            children: Vec::new(),
        }
    }

    /// Append a child node, builder style
    pub fn with_child(mut self, child: ImportedNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Skeleton data handed over by the importer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ImportedSkeleton {
    pub name: String,
    /// Bones in first-encounter order; names may repeat across meshes
    pub bones: Vec<ImportedBone>,
    pub root: ImportedNode,
}

/// A single keyframe sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ImportedKey<T> {
    /// Time in clip ticks
    pub time: f32,
    pub value: T,
}

impl<T> ImportedKey<T> {
    pub const fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Keyframes targeting one bone by name
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ImportedChannel {
    pub bone_name: String,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub position_keys: Vec<ImportedKey<Vec3>>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub rotation_keys: Vec<ImportedKey<Quat>>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub scale_keys: Vec<ImportedKey<Vec3>>,
}

/// Animation data handed over by the importer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ImportedAnimation {
    pub name: String,
    /// Clip length in ticks
    pub duration: f32,
    /// Playback rate; 0 means the source did not specify one
    pub ticks_per_second: f32,
    pub channels: Vec<ImportedChannel>,
}

/// Convert a row-major 4x4 matrix (a1, a2, a3, a4, b1, ...) to a column-major `Mat4`
///
/// Many interchange formats store node and offset matrices row by row with
/// the translation in the fourth column.
pub fn mat4_from_row_major(rows: &[f32; 16]) -> Mat4 {
    Mat4::from_cols_array(rows).transpose()
}
