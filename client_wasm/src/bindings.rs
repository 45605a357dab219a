//! JS entry points
//!
//! The page owns the camera, the hand tracker and the canvas; it forwards
//! detections and key events here and draws whatever `tick` returns.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::client::Client;
use crate::input::get_key_from_event;
use crate::logger;
use crate::state::RenderFrame;

thread_local! {
    // Detection callbacks and render ticks share the main thread
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Game not initialized")),
    })
}

/// Create the game; without a seed the serve sequence is random
#[wasm_bindgen]
pub fn init_game(seed: Option<f64>) {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let seed = seed.unwrap_or_else(|| js_sys::Math::random() * u32::MAX as f64) as u64;
    CLIENT.with(|cell| *cell.borrow_mut() = Some(Client::new(seed)));
}

/// Hand detection callback: `num_hands` hands of `keypoints_per_hand`
/// `(x, y)` pairs each
#[wasm_bindgen]
pub fn apply_hand_keypoints(
    flat_data: &[f32],
    num_hands: usize,
    keypoints_per_hand: usize,
) -> Result<(), JsValue> {
    with_client(|client| client.apply_hand_keypoints(flat_data, num_hands, keypoints_per_hand))
}

#[wasm_bindgen]
pub fn clear_hands() -> Result<(), JsValue> {
    with_client(Client::clear_hands)
}

/// Returns true if the key is bound; the page should then `preventDefault`
#[wasm_bindgen]
pub fn key_down(key: &str, repeat: bool) -> Result<bool, JsValue> {
    with_client(|client| client.key_down(key, repeat))
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<bool, JsValue> {
    with_client(|client| client.key_up(key))
}

/// Forward a raw `keydown`/`keyup` event, suppressing page scroll for bound keys
#[wasm_bindgen]
pub fn handle_keyboard_event(event: &KeyboardEvent) -> Result<(), JsValue> {
    let key = get_key_from_event(event);
    let handled = match event.type_().as_str() {
        "keydown" => key_down(&key, event.repeat())?,
        "keyup" => key_up(&key)?,
        _ => false,
    };
    if handled {
        event.prevent_default();
    }
    Ok(())
}

/// Render tick: advance once and return the frame to draw
#[wasm_bindgen]
pub fn tick() -> Result<RenderFrame, JsValue> {
    with_client(Client::tick)
}

/// Current frame without advancing
#[wasm_bindgen]
pub fn frame() -> Result<RenderFrame, JsValue> {
    with_client(|client| client.frame())
}
