//! Common types for keyframe animation

use glam::{Quat, Vec3};

/// A timestamped sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    /// Time in clip ticks
    pub time: f32,
    pub value: T,
}

impl<T> Keyframe<T> {
    pub const fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Trait for values that can be interpolated between two keyframes
pub trait Interpolate: Copy {
    /// Interpolate from `self` towards `other` by `t` in `[0, 1]`
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(*other, t)
    }
}

impl Interpolate for Quat {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        // Shortest-arc slerp, renormalized to counter drift
        normalize_rotation(self.slerp(*other, t))
    }
}

/// Normalize a quaternion, falling back to identity for zero or non-finite input
pub fn normalize_rotation(q: Quat) -> Quat {
    let len = q.length();
    if len > 0.0 && len.is_finite() {
        q / len
    } else {
        Quat::IDENTITY
    }
}
