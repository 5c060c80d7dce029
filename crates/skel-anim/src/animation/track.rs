//! Per-bone keyframe tracks

use glam::{Mat4, Quat, Vec3};

use super::interpolation::sample_keys;
use super::types::{Keyframe, normalize_rotation};
use crate::import::{ImportedChannel, ImportedKey};

/// Position, rotation and scale sampled from a track at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl TrackSample {
    /// No translation, identity rotation, unit scale
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Local transform `T * R * S`
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for TrackSample {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Animation data for one bone
///
/// The three sub-tracks are timestamped independently and may have different
/// key counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyframeTrack {
    positions: Vec<Keyframe<Vec3>>,
    rotations: Vec<Keyframe<Quat>>,
    scales: Vec<Keyframe<Vec3>>,
}

impl KeyframeTrack {
    pub fn new(
        positions: Vec<Keyframe<Vec3>>,
        rotations: Vec<Keyframe<Quat>>,
        scales: Vec<Keyframe<Vec3>>,
    ) -> Self {
        Self {
            positions,
            rotations,
            scales,
        }
    }

    /// Copy the keyframes of an imported channel
    pub fn from_channel(channel: &ImportedChannel) -> Self {
        fn convert<T: Copy>(keys: &[ImportedKey<T>]) -> Vec<Keyframe<T>> {
            keys.iter().map(|key| Keyframe::new(key.time, key.value)).collect()
        }

        Self {
            positions: convert(&channel.position_keys),
            rotations: convert(&channel.rotation_keys),
            scales: convert(&channel.scale_keys),
        }
    }

    pub fn positions(&self) -> &[Keyframe<Vec3>] {
        &self.positions
    }

    pub fn rotations(&self) -> &[Keyframe<Quat>] {
        &self.rotations
    }

    pub fn scales(&self) -> &[Keyframe<Vec3>] {
        &self.scales
    }

    /// Check if the track has no keys at all
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.rotations.is_empty() && self.scales.is_empty()
    }

    /// Check whether every sub-track has non-decreasing timestamps
    pub fn is_sorted(&self) -> bool {
        fn sorted<T>(keys: &[Keyframe<T>]) -> bool {
            keys.windows(2).all(|pair| pair[0].time <= pair[1].time)
        }

        sorted(&self.positions) && sorted(&self.rotations) && sorted(&self.scales)
    }

    /// Time of the last key across all sub-tracks
    pub fn end_time(&self) -> Option<f32> {
        [
            self.positions.last().map(|k| k.time),
            self.rotations.last().map(|k| k.time),
            self.scales.last().map(|k| k.time),
        ]
        .into_iter()
        .flatten()
        .reduce(f32::max)
    }

    /// Sample position, rotation and scale at `time` (in ticks)
    pub fn sample_at(&self, time: f32) -> TrackSample {
        TrackSample {
            position: sample_keys(&self.positions, time, Vec3::ZERO),
            rotation: normalize_rotation(sample_keys(&self.rotations, time, Quat::IDENTITY)),
            scale: sample_keys(&self.scales, time, Vec3::ONE),
        }
    }

    /// Local transform at `time` (in ticks)
    pub fn local_transform(&self, time: f32) -> Mat4 {
        self.sample_at(time).to_matrix()
    }
}
