//! Hand keypoints delivered by the JS tracker
//!
//! The tracker hands over one flat `Float32Array` per detection: for each
//! hand, `keypoints_per_hand` consecutive `(x, y)` pairs in canvas pixels.

use game_core::HandObservation;
use glam::Vec2;

pub const COMPONENTS_PER_KEYPOINT: usize = 2;

/// Split a flat buffer into hands, keeping whole keypoints only
pub fn decode_hands(
    flat_data: &[f32],
    num_hands: usize,
    keypoints_per_hand: usize,
) -> Vec<HandObservation> {
    let hand_stride = keypoints_per_hand * COMPONENTS_PER_KEYPOINT;
    if hand_stride == 0 {
        return Vec::new();
    }

    flat_data
        .chunks(hand_stride)
        .take(num_hands)
        .map(|hand| {
            let keypoints = hand
                .chunks_exact(COMPONENTS_PER_KEYPOINT)
                .map(|xy| Vec2::new(xy[0], xy[1]))
                .collect();
            HandObservation::new(keypoints)
        })
        .collect()
}

/// Flatten hands back to `x, y` pairs for the debug overlay markers
pub fn flatten_keypoints(hands: &[HandObservation]) -> Vec<f32> {
    hands
        .iter()
        .flat_map(|hand| hand.keypoints.iter())
        .flat_map(|p| [p.x, p.y])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_hands() {
        let flat: Vec<f32> = (0..84).map(|i| i as f32).collect();

        let hands = decode_hands(&flat, 2, 21);

        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].keypoints.len(), 21);
        assert_eq!(hands[0].fingertip(), Some(Vec2::new(16.0, 17.0)));
        assert_eq!(hands[1].fingertip(), Some(Vec2::new(58.0, 59.0)));
    }

    #[test]
    fn test_num_hands_limits_decoding() {
        let flat = vec![1.0; 84];
        assert_eq!(decode_hands(&flat, 1, 21).len(), 1);
        assert!(decode_hands(&flat, 0, 21).is_empty());
    }

    #[test]
    fn test_short_buffer_keeps_whole_keypoints() {
        let flat = vec![5.0; 21];

        let hands = decode_hands(&flat, 1, 21);

        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].keypoints.len(), 10, "Trailing half keypoint dropped");
        assert_eq!(hands[0].fingertip(), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_zero_keypoints_per_hand() {
        assert!(decode_hands(&[1.0, 2.0], 3, 0).is_empty());
    }

    #[test]
    fn test_flatten_round_trips_overlay_points() {
        let hands = vec![HandObservation::new(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)])];
        assert_eq!(flatten_keypoints(&hands), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
