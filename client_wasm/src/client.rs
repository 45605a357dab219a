//! Browser-side game client
//!
//! Holds the input slots the JS collaborators write into between ticks: the
//! latest hand snapshot (replaced wholesale by each detection callback) and
//! the held-key state. Each render tick assembles them into one
//! [`FrameInput`] and advances the simulation once.

use game_core::{FrameInput, HandObservation, KeyboardState, Simulation};

use crate::hands::{decode_hands, flatten_keypoints};
use crate::input::{handle_key_down, handle_key_up, is_debug_toggle};
use crate::state::RenderFrame;

pub struct Client {
    simulation: Simulation,
    hands: Vec<HandObservation>,
    keys: KeyboardState,
    debug: bool,
}

impl Client {
    pub fn new(seed: u64) -> Self {
        Self {
            simulation: Simulation::new(seed),
            hands: Vec::new(),
            keys: KeyboardState::new(),
            debug: false,
        }
    }

    /// Detection callback: replace the hand snapshot
    pub fn apply_hand_keypoints(
        &mut self,
        flat_data: &[f32],
        num_hands: usize,
        keypoints_per_hand: usize,
    ) {
        self.hands = decode_hands(flat_data, num_hands, keypoints_per_hand);
    }

    /// Drop tracked hands, e.g. when the camera stream stops
    pub fn clear_hands(&mut self) {
        self.hands.clear();
    }

    /// Returns true if the key is bound to the game
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        if is_debug_toggle(key) {
            if !repeat {
                self.debug = !self.debug;
                log::info!("debug overlay {}", if self.debug { "on" } else { "off" });
            }
            return true;
        }
        handle_key_down(key, &mut self.keys)
    }

    /// Returns true if the key is bound to the game
    pub fn key_up(&mut self, key: &str) -> bool {
        handle_key_up(key, &mut self.keys)
    }

    /// Advance one tick and report what to draw
    pub fn tick(&mut self) -> RenderFrame {
        let input = FrameInput::new(&self.hands, self.keys);
        self.simulation.step(&input);
        self.frame()
    }

    /// Current state without advancing
    pub fn frame(&self) -> RenderFrame {
        let overlay = if self.debug {
            flatten_keypoints(&self.hands)
        } else {
            Vec::new()
        };
        RenderFrame::new(self.simulation.snapshot(), self.debug, overlay)
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }
}
