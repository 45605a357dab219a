//! Browser bridge for hand-tracked Pong
//!
//! Receives hand keypoints and key events from the page, runs the
//! `game_core` simulation one tick per animation frame and hands a
//! [`RenderFrame`] back for drawing.

pub mod client;
pub mod hands;
pub mod input;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;
pub use client::Client;
pub use state::RenderFrame;
