//! Gamepad API polling

use game_core::{ButtonState, GamepadSnapshot};
use wasm_bindgen::JsCast;
use web_sys::{Gamepad, GamepadButton};

/// Snapshot of the first connected gamepad, if any
pub fn poll_gamepad() -> Option<GamepadSnapshot> {
    let navigator = web_sys::window()?.navigator();
    let pads = navigator.get_gamepads().ok()?;

    pads.iter()
        .filter_map(|value| value.dyn_into::<Gamepad>().ok())
        .find(|pad| pad.connected())
        .map(|pad| snapshot(&pad))
}

fn snapshot(pad: &Gamepad) -> GamepadSnapshot {
    let axes = pad
        .axes()
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0) as f32)
        .collect();

    let buttons = pad
        .buttons()
        .iter()
        .map(|v| match v.dyn_into::<GamepadButton>() {
            Ok(button) => ButtonState {
                pressed: button.pressed(),
                value: button.value() as f32,
            },
            Err(_) => ButtonState::default(),
        })
        .collect();

    GamepadSnapshot {
        connected: true,
        id: pad.id(),
        axes,
        buttons,
    }
}
