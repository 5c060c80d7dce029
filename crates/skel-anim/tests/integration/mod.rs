//! Level 2: Feature Integration Tests
//!
//! These tests drive skeletons and clips through the public API the way a
//! frame loop does.

pub mod hierarchy;
pub mod palette;
pub mod playback;
