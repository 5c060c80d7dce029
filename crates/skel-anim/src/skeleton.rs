//! Skeleton: bones, name table and node hierarchy
//!
//! A skeleton is built once from importer data and never mutated afterwards.
//! Besides the node tree it keeps a flattened preorder copy of the hierarchy
//! in which every node knows its parent index and, if it is skinned, its bone
//! index. The per-frame evaluator only walks that flat list, so name lookups
//! happen exactly once, here.

use std::collections::HashMap;
use std::fmt;

use glam::Mat4;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkelAnimError};
use crate::import::{ImportedNode, ImportedSkeleton};
use crate::pose;
use crate::skinning::{self, PALETTE_CAPACITY, SkinMatrixPalette};

/// Stable index of a bone within its skeleton and palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneIndex(u32);

impl BoneIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A skinned bone
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub name: String,
    pub index: BoneIndex,
    /// Mesh space to bone space at bind time
    pub inverse_bind: Mat4,
}

/// A node of the skeleton's hierarchy tree
///
/// Nodes without skinning weight are kept for hierarchy continuity and carry
/// no bone index.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    pub local_bind_transform: Mat4,
    pub bone: Option<BoneIndex>,
    pub children: Vec<HierarchyNode>,
}

/// A hierarchy node in flattened preorder form
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonNode {
    pub name: String,
    /// Index of the parent in the flat node list; always smaller than this node's
    pub parent: Option<usize>,
    pub local_bind_transform: Mat4,
    pub bone: Option<BoneIndex>,
}

/// What the skeleton's default palette contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum BindPaletteMode {
    /// Every entry identity
    #[default]
    Identity,
    /// Bind-pose globals combined with the inverse-bind matrices
    RestPose,
}

/// Options for building a skeleton
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct SkeletonOptions {
    pub bind_palette: BindPaletteMode,
}

/// Static bone hierarchy with inverse-bind matrices and a default palette
#[derive(Debug, Clone)]
pub struct Skeleton {
    name: String,
    bones: Vec<Bone>,
    bone_lookup: HashMap<String, BoneIndex>,
    root: Option<HierarchyNode>,
    nodes: Vec<SkeletonNode>,
    default_palette: SkinMatrixPalette,
}

impl Skeleton {
    /// Build a skeleton from importer data
    pub fn from_import(imported: &ImportedSkeleton, options: &SkeletonOptions) -> Result<Self> {
        let mut builder = SkeletonBuilder::new(imported.name.clone());
        for bone in &imported.bones {
            builder.add_bone(&bone.name, bone.inverse_bind);
        }
        builder.build(&imported.root, options)
    }

    /// Skeleton with no bones and no hierarchy
    ///
    /// Stands in for a model whose import failed; it evaluates to an identity
    /// palette.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            bones: Vec::new(),
            bone_lookup: HashMap::new(),
            root: None,
            nodes: Vec::new(),
            default_palette: SkinMatrixPalette::identity(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn bone(&self, index: BoneIndex) -> Option<&Bone> {
        self.bones.get(index.as_usize())
    }

    /// Look up a bone index by name
    pub fn find_bone(&self, name: &str) -> Option<BoneIndex> {
        self.bone_lookup.get(name).copied()
    }

    /// Root of the hierarchy tree, `None` for an empty skeleton
    pub fn root(&self) -> Option<&HierarchyNode> {
        self.root.as_ref()
    }

    /// Flattened hierarchy in parent-before-child order
    pub fn nodes(&self) -> &[SkeletonNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Position of the first node with the given name in [`Self::nodes`]
    pub fn find_node(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }

    /// Palette used while no animation is playing
    pub fn default_palette(&self) -> &SkinMatrixPalette {
        &self.default_palette
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty() && self.nodes.is_empty()
    }
}

/// Incremental skeleton construction
///
/// Bone indices are handed out in first-encounter order. Registering a name a
/// second time returns the existing index and keeps the first inverse-bind
/// matrix.
#[derive(Debug, Default)]
pub struct SkeletonBuilder {
    name: String,
    bones: Vec<Bone>,
    bone_lookup: HashMap<String, BoneIndex>,
}

impl SkeletonBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bones: Vec::new(),
            bone_lookup: HashMap::new(),
        }
    }

    /// Register a bone, returning its index
    pub fn add_bone(&mut self, name: &str, inverse_bind: Mat4) -> BoneIndex {
        if let Some(&index) = self.bone_lookup.get(name) {
            log::debug!("Bone '{}' already registered as {}", name, index);
            return index;
        }

        let index = BoneIndex::new(self.bones.len() as u32);
        self.bones.push(Bone {
            name: name.to_string(),
            index,
            inverse_bind,
        });
        self.bone_lookup.insert(name.to_string(), index);
        index
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Resolve the hierarchy against the registered bones and finish the skeleton
    pub fn build(self, root: &ImportedNode, options: &SkeletonOptions) -> Result<Skeleton> {
        if self.bones.len() > PALETTE_CAPACITY {
            return Err(SkelAnimError::TooManyBones {
                count: self.bones.len(),
                capacity: PALETTE_CAPACITY,
            });
        }

        let mut nodes = Vec::new();
        let tree = flatten(root, None, &self.bone_lookup, &mut nodes);

        let placed = nodes.iter().filter(|node| node.bone.is_some()).count();
        if placed < self.bones.len() {
            log::debug!(
                "Skeleton '{}': {} of {} bones have no hierarchy node",
                self.name,
                self.bones.len() - placed,
                self.bones.len()
            );
        }

        let mut skeleton = Skeleton {
            name: self.name,
            bones: self.bones,
            bone_lookup: self.bone_lookup,
            root: Some(tree),
            nodes,
            default_palette: SkinMatrixPalette::identity(),
        };

        if options.bind_palette == BindPaletteMode::RestPose {
            let rest = pose::evaluate(&skeleton, None, 0.0);
            skeleton.default_palette = skinning::build_palette(&rest, &skeleton);
        }

        log::debug!(
            "Built skeleton '{}': {} bones, {} nodes",
            skeleton.name,
            skeleton.bones.len(),
            skeleton.nodes.len()
        );

        Ok(skeleton)
    }
}

fn flatten(
    node: &ImportedNode,
    parent: Option<usize>,
    lookup: &HashMap<String, BoneIndex>,
    nodes: &mut Vec<SkeletonNode>,
) -> HierarchyNode {
    let bone = lookup.get(&node.name).copied();
    let position = nodes.len();
    nodes.push(SkeletonNode {
        name: node.name.clone(),
        parent,
        local_bind_transform: node.transform,
        bone,
    });

    let children = node
        .children
        .iter()
        .map(|child| flatten(child, Some(position), lookup, nodes))
        .collect();

    HierarchyNode {
        name: node.name.clone(),
        local_bind_transform: node.transform,
        bone,
        children,
    }
}
