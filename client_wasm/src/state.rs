//! Render frame handed to the JS renderer after each tick

use game_core::{MatchState, Side, Snapshot};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Plain copy of the simulation state plus overlay data
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct RenderFrame {
    snapshot: Snapshot,
    debug: bool,
    hand_keypoints: Vec<f32>,
}

impl RenderFrame {
    pub fn new(snapshot: Snapshot, debug: bool, hand_keypoints: Vec<f32>) -> Self {
        Self {
            snapshot,
            debug,
            hand_keypoints,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl RenderFrame {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_x(&self) -> f32 {
        self.snapshot.ball_pos.x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_y(&self) -> f32 {
        self.snapshot.ball_pos.y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_radius(&self) -> f32 {
        self.snapshot.ball_radius
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_left_top(&self) -> f32 {
        self.snapshot.paddle_left_top
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_right_top(&self) -> f32 {
        self.snapshot.paddle_right_top
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_width(&self) -> f32 {
        self.snapshot.paddle_width
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_height(&self) -> f32 {
        self.snapshot.paddle_height
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn arena_width(&self) -> f32 {
        self.snapshot.arena_width
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn arena_height(&self) -> f32 {
        self.snapshot.arena_height
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_left(&self) -> u8 {
        self.snapshot.score_left
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_right(&self) -> u8 {
        self.snapshot.score_right
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn game_over(&self) -> bool {
        self.snapshot.state == MatchState::GameOver
    }

    /// Raw video backdrop and keypoint markers requested
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Flattened `x, y` pairs of the current hand snapshot
    pub fn hand_keypoints(&self) -> Vec<f32> {
        self.hand_keypoints.clone()
    }

    /// Game over banner, empty while playing
    pub fn winner_text(&self) -> String {
        match self.snapshot.winner {
            Some(side) => format!("{} player wins!", side.label()),
            None => String::new(),
        }
    }

    /// 0 = none, 1 = left, 2 = right
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn winner(&self) -> u8 {
        match self.snapshot.winner {
            None => 0,
            Some(Side::Left) => 1,
            Some(Side::Right) => 2,
        }
    }
}
