//! Playback state for one animated instance

use std::sync::Arc;

use super::clip::AnimationClip;

/// Current clip, time and playing flag of an instance
///
/// Time is kept in clip ticks: wall-clock deltas are scaled by the clip's
/// ticks-per-second before being added, so the value can be handed straight to
/// track sampling.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    clip: Option<Arc<AnimationClip>>,
    /// Ticks since the start of the clip, wrapped into [0, duration)
    current_time: f32,
    playing: bool,
}

impl PlaybackState {
    /// Stopped state with no clip
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a clip and start playing it from the beginning
    pub fn bind(&mut self, clip: Arc<AnimationClip>) {
        self.clip = Some(clip);
        self.current_time = 0.0;
        self.playing = true;
    }

    /// Detach the clip and stop
    pub fn unbind(&mut self) {
        self.clip = None;
        self.current_time = 0.0;
        self.playing = false;
    }

    /// Resume playback of the bound clip
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Halt playback, keeping the current time
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Halt playback and rewind to the start
    pub fn stop(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
    }

    /// Jump to `ticks`, wrapped into the clip's duration
    pub fn seek(&mut self, ticks: f32) {
        self.current_time = self.wrap(ticks);
    }

    /// Advance time by `delta_seconds`
    ///
    /// Returns the clip time (in ticks) to evaluate, or `None` when nothing is
    /// playing. The time loops whenever the clip has a positive duration.
    pub fn update(&mut self, delta_seconds: f32) -> Option<f32> {
        if !self.playing {
            return None;
        }
        let ticks_per_second = self.clip.as_ref()?.ticks_per_second();

        self.current_time = self.wrap(self.current_time + delta_seconds * ticks_per_second);
        Some(self.current_time)
    }

    fn wrap(&self, ticks: f32) -> f32 {
        if !ticks.is_finite() {
            return 0.0;
        }
        match &self.clip {
            Some(clip) if clip.duration() > 0.0 => {
                let wrapped = ticks.rem_euclid(clip.duration());
                // rem_euclid rounds tiny negative inputs up to exactly `duration`
                if wrapped >= clip.duration() { 0.0 } else { wrapped }
            }
            _ => ticks,
        }
    }

    pub fn clip(&self) -> Option<&Arc<AnimationClip>> {
        self.clip.as_ref()
    }

    /// Current time in ticks
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    /// Current time in seconds
    pub fn current_seconds(&self) -> f32 {
        match &self.clip {
            Some(clip) => self.current_time / clip.ticks_per_second(),
            None => 0.0,
        }
    }

    /// Check if a clip is bound and playing
    pub fn is_playing(&self) -> bool {
        self.playing && self.clip.is_some()
    }
}
