//! Animation clips

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use super::track::KeyframeTrack;
use crate::error::{Result, SkelAnimError};
use crate::import::ImportedAnimation;
use crate::skeleton::{BoneIndex, Skeleton};
use crate::skinning::PALETTE_CAPACITY;

/// Playback rate used when the source does not specify one
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

/// Options for building clips from importer data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ClipOptions {
    /// Substituted when the imported ticks-per-second is zero
    pub default_ticks_per_second: f32,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            default_ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

/// A named set of keyframe tracks keyed by bone index
///
/// Clips are immutable once built and are meant to be shared (`Arc`) by every
/// instance playing them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    name: String,
    /// Length in ticks
    duration: f32,
    ticks_per_second: f32,
    /// tracks[bone_index] => track
    tracks: Vec<Option<KeyframeTrack>>,
    track_count: usize,
}

impl AnimationClip {
    /// Create a clip from tracks that already target bone indices
    ///
    /// If a bone appears more than once the first track wins. Bone indices at
    /// or past [`PALETTE_CAPACITY`] are rejected.
    pub fn new(
        name: impl Into<String>,
        duration: f32,
        ticks_per_second: f32,
        tracks: impl IntoIterator<Item = (BoneIndex, KeyframeTrack)>,
    ) -> Result<Self> {
        let name = name.into();

        if !duration.is_finite() || duration < 0.0 {
            return Err(SkelAnimError::InvalidClip(format!(
                "clip '{name}' has invalid duration {duration}"
            )));
        }
        if !ticks_per_second.is_finite() || ticks_per_second <= 0.0 {
            return Err(SkelAnimError::InvalidClip(format!(
                "clip '{name}' has invalid ticks per second {ticks_per_second}"
            )));
        }

        let mut slots: Vec<Option<KeyframeTrack>> = Vec::new();
        let mut track_count = 0;
        for (bone, track) in tracks {
            let index = bone.as_usize();
            if index >= PALETTE_CAPACITY {
                return Err(SkelAnimError::InvalidClip(format!(
                    "clip '{name}' targets bone {bone}, beyond the palette capacity of {PALETTE_CAPACITY}"
                )));
            }
            if slots.len() <= index {
                slots.resize(index + 1, None);
            }
            if slots[index].is_some() {
                log::debug!("Clip '{}': dropping second track for bone {}", name, bone);
                continue;
            }
            if !track.is_sorted() {
                log::warn!(
                    "Clip '{}': track for bone {} has unsorted timestamps",
                    name,
                    bone
                );
            }
            slots[index] = Some(track);
            track_count += 1;
        }

        Ok(Self {
            name,
            duration,
            ticks_per_second,
            tracks: slots,
            track_count,
        })
    }

    /// Build a clip from importer data, resolving channel names against `skeleton`
    ///
    /// Channels that name a bone the skeleton does not have are dropped.
    pub fn from_import(
        imported: &ImportedAnimation,
        skeleton: &Skeleton,
        options: &ClipOptions,
    ) -> Result<Self> {
        let ticks_per_second = if imported.ticks_per_second == 0.0 {
            log::warn!(
                "Clip '{}' has no tick rate, using {}",
                imported.name,
                options.default_ticks_per_second
            );
            options.default_ticks_per_second
        } else {
            imported.ticks_per_second
        };

        let tracks = imported.channels.iter().filter_map(|channel| {
            match skeleton.find_bone(&channel.bone_name) {
                Some(bone) => Some((bone, KeyframeTrack::from_channel(channel))),
                None => {
                    log::debug!(
                        "Clip '{}': skipping channel for unknown bone '{}'",
                        imported.name,
                        channel.bone_name
                    );
                    None
                }
            }
        });

        let clip = Self::new(
            imported.name.clone(),
            imported.duration,
            ticks_per_second,
            tracks,
        )?;

        log::debug!(
            "Built clip '{}': {} of {} channels bound to skeleton '{}'",
            clip.name,
            clip.track_count,
            imported.channels.len(),
            skeleton.name()
        );

        Ok(clip)
    }

    /// Clip with no tracks and zero duration
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            duration: 0.0,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            tracks: Vec::new(),
            track_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in ticks
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    /// Length in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.duration / self.ticks_per_second
    }

    /// Track for a bone, if the clip animates it
    pub fn track(&self, bone: BoneIndex) -> Option<&KeyframeTrack> {
        self.tracks.get(bone.as_usize()).and_then(Option::as_ref)
    }

    /// Iterate over animated bones and their tracks in bone order
    pub fn tracks(&self) -> impl Iterator<Item = (BoneIndex, &KeyframeTrack)> {
        self.tracks.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|track| (BoneIndex::new(index as u32), track))
        })
    }

    /// Number of animated bones
    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// One past the highest bone index the clip animates
    pub fn bone_span(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the clip animates nothing
    pub fn is_empty(&self) -> bool {
        self.track_count == 0
    }
}
