//! Keyframe interpolation
//!
//! Keys are assumed to be sorted by non-decreasing time. Unsorted input is not
//! reordered; the bracket chosen for it is whatever the search lands on.

use super::types::{Interpolate, Keyframe};

/// Find the interpolation segment for `time`
///
/// Returns the index `i` of the earlier key of the pair `[i, i + 1]` such that
/// `keys[i].time <= time < keys[i + 1].time`. Times before the first key map to
/// the first segment and times at or after the last bracket map to the final
/// segment (`len - 2`). Returns `None` when there are fewer than two keys.
pub fn find_segment<T>(keys: &[Keyframe<T>], time: f32) -> Option<usize> {
    if keys.len() < 2 {
        return None;
    }

    // Number of keys at or before `time`
    let upper = keys.partition_point(|key| key.time <= time);
    Some(upper.saturating_sub(1).min(keys.len() - 2))
}

/// Normalized position of `time` between `start` and `end`, clamped to `[0, 1]`
///
/// Zero-length (or inverted) segments yield 0.
pub fn segment_factor(start: f32, end: f32, time: f32) -> f32 {
    let span = end - start;
    if span > 0.0 {
        let factor = (time - start) / span;
        if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        }
    } else {
        0.0
    }
}

/// Sample a key sequence at `time`
///
/// * no keys: `default`
/// * one key: that key's value, for every time
/// * otherwise: interpolation across the bracketing segment
pub fn sample_keys<T: Interpolate>(keys: &[Keyframe<T>], time: f32, default: T) -> T {
    match keys {
        [] => default,
        [only] => only.value,
        _ => {
            let Some(index) = find_segment(keys, time) else {
                return default;
            };
            let from = &keys[index];
            let to = &keys[index + 1];
            let factor = segment_factor(from.time, to.time, time);
            from.value.interpolate(&to.value, factor)
        }
    }
}
