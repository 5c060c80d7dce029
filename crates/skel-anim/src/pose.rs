//! Pose evaluation: hierarchy composition of local transforms
//!
//! Every node's global transform is its parent's global transform times its
//! own local transform. A node's local transform comes from the clip's track
//! for its bone when there is one, and from the static bind-local transform
//! otherwise. The skeleton's flattened node list is already in parent-first
//! order, so one forward pass over it visits every parent before its children.

use glam::Mat4;

use crate::animation::AnimationClip;
use crate::skeleton::{BoneIndex, Skeleton};

/// Global transforms for every hierarchy node and every bone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalPose {
    /// nodes[node_index] => global transform, aligned with `Skeleton::nodes`
    nodes: Vec<Mat4>,
    /// bones[bone_index] => global transform of the bone's node
    bones: Vec<Mat4>,
}

impl GlobalPose {
    /// Pose storage sized for `skeleton`, filled with identity
    pub fn new(skeleton: &Skeleton) -> Self {
        Self {
            nodes: vec![Mat4::IDENTITY; skeleton.node_count()],
            bones: vec![Mat4::IDENTITY; skeleton.bone_count()],
        }
    }

    fn prepare(&mut self, skeleton: &Skeleton) {
        self.nodes.resize(skeleton.node_count(), Mat4::IDENTITY);
        self.bones.clear();
        self.bones.resize(skeleton.bone_count(), Mat4::IDENTITY);
    }

    /// Global transform of a flattened node, identity if out of range
    pub fn node(&self, node_index: usize) -> Mat4 {
        self.nodes.get(node_index).copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Global transform of a bone, identity if out of range or never placed
    pub fn bone(&self, bone: BoneIndex) -> Mat4 {
        self.bones
            .get(bone.as_usize())
            .copied()
            .unwrap_or(Mat4::IDENTITY)
    }

    pub fn nodes(&self) -> &[Mat4] {
        &self.nodes
    }

    pub fn bones(&self) -> &[Mat4] {
        &self.bones
    }
}

/// Evaluate the pose of `skeleton` under `clip` at `time` (in ticks)
///
/// With no clip every node keeps its bind-local transform, giving the rest pose.
pub fn evaluate(skeleton: &Skeleton, clip: Option<&AnimationClip>, time: f32) -> GlobalPose {
    let mut pose = GlobalPose::new(skeleton);
    evaluate_into(skeleton, clip, time, &mut pose);
    pose
}

/// Evaluate into existing pose storage
///
/// The storage is resized to the skeleton, so one `GlobalPose` can be reused
/// every frame without reallocating.
pub fn evaluate_into(
    skeleton: &Skeleton,
    clip: Option<&AnimationClip>,
    time: f32,
    pose: &mut GlobalPose,
) {
    pose.prepare(skeleton);

    for (position, node) in skeleton.nodes().iter().enumerate() {
        let local = match node.bone.zip(clip).and_then(|(bone, clip)| clip.track(bone)) {
            Some(track) => track.local_transform(time),
            None => node.local_bind_transform,
        };

        let global = match node.parent {
            Some(parent) => pose.nodes[parent] * local,
            None => local,
        };
        pose.nodes[position] = global;

        if let Some(bone) = node.bone {
            pose.bones[bone.as_usize()] = global;
        }
    }
}
