//! Per-tick input value objects
//!
//! Hand observations arrive asynchronously from the tracking collaborator and
//! keyboard state is polled; both are gathered into one [`FrameInput`] before
//! the update step so ordering within a tick is explicit.

use glam::Vec2;

use crate::params::Params;

/// One detected hand: keypoints in arena coordinates, in detector order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandObservation {
    pub keypoints: Vec<Vec2>,
}

impl HandObservation {
    pub fn new(keypoints: Vec<Vec2>) -> Self {
        Self { keypoints }
    }

    /// Index fingertip, if the detector reported it with finite coordinates
    pub fn fingertip(&self) -> Option<Vec2> {
        self.keypoints
            .get(Params::FINGERTIP_INDEX)
            .copied()
            .filter(|tip| tip.is_finite())
    }
}

/// Held keys relevant to gameplay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pub left_up: bool,    // W
    pub left_down: bool,  // S
    pub right_up: bool,   // ArrowUp
    pub right_down: bool, // ArrowDown
    pub rematch: bool,    // Space
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything the simulation reads in one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput<'a> {
    pub hands: &'a [HandObservation],
    pub keys: KeyboardState,
}

impl<'a> FrameInput<'a> {
    pub fn new(hands: &'a [HandObservation], keys: KeyboardState) -> Self {
        Self { hands, keys }
    }

    /// Keyboard only, no tracked hands
    pub fn keys(keys: KeyboardState) -> Self {
        Self { hands: &[], keys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingertip_reads_index_eight() {
        let keypoints = (0..21).map(|i| Vec2::new(i as f32, i as f32 * 2.0)).collect();
        let hand = HandObservation::new(keypoints);
        assert_eq!(hand.fingertip(), Some(Vec2::new(8.0, 16.0)));
    }

    #[test]
    fn test_fingertip_missing_on_short_hand() {
        let hand = HandObservation::new(vec![Vec2::ZERO; 8]);
        assert_eq!(hand.fingertip(), None);
        assert_eq!(HandObservation::default().fingertip(), None);
    }

    #[test]
    fn test_fingertip_rejects_non_finite() {
        let mut keypoints = vec![Vec2::ZERO; 21];
        keypoints[8] = Vec2::new(100.0, f32::NAN);
        assert_eq!(HandObservation::new(keypoints.clone()).fingertip(), None);

        keypoints[8] = Vec2::new(f32::INFINITY, 200.0);
        assert_eq!(HandObservation::new(keypoints).fingertip(), None);
    }
}
