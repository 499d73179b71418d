use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, info};

use super::{Axis, Button, ButtonMap, GamepadSnapshot, InputError, Key, KeyboardState};
use crate::components::{PaddleIntent, Side};
use crate::Config;

/// Axis magnitude that counts as a deliberate flick in the raw monitor
const MONITOR_AXIS_THRESHOLD: f32 = 0.5;

/// Everything the host hands over for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keyboard: KeyboardState,
    pub gamepad: Option<GamepadSnapshot>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Edge-triggered actions outside paddle movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuActions {
    pub restart: bool,
    pub toggle_decoration: bool,
    pub cycle_palette: bool,
}

/// Resolver output for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedInput {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
    pub actions: MenuActions,
}

impl ResolvedInput {
    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Which controls drive one paddle
#[derive(Debug, Clone, Copy)]
pub struct PaddleBinding {
    pub key_up: Key,
    pub key_down: Key,
    pub stick: Axis,
    pub dpad: Option<(Button, Button)>,
    pub button_up: Button,
    pub button_down: Button,
    pub trigger: Button,
}

impl PaddleBinding {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                key_up: Key::W,
                key_down: Key::S,
                stick: Axis::LeftStickY,
                dpad: Some((Button::DpadUp, Button::DpadDown)),
                button_up: Button::Lb,
                button_down: Button::X,
                trigger: Button::Lt,
            },
            Side::Right => Self {
                key_up: Key::ArrowUp,
                key_down: Key::ArrowDown,
                stick: Axis::RightStickY,
                dpad: None,
                button_up: Button::Rb,
                button_down: Button::B,
                trigger: Button::Rt,
            },
        }
    }
}

/// Rising-edge detector keyed by logical control
#[derive(Debug, Clone)]
pub struct EdgeTracker<K> {
    previous: HashMap<K, bool>,
}

impl<K: Copy + Eq + Hash> Default for EdgeTracker<K> {
    fn default() -> Self {
        Self {
            previous: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> EdgeTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pressed` for `control`; true only when it was up last frame
    pub fn just_pressed(&mut self, control: K, pressed: bool) -> bool {
        let was_pressed = self.previous.insert(control, pressed).unwrap_or(false);
        pressed && !was_pressed
    }
}

/// Keyboard and gamepad controls share one edge tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Control {
    Key(Key),
    Pad(Button),
}

/// Logs raw presses and stick flicks, to help with custom mappings
#[derive(Debug, Clone, Default)]
struct RawMonitor {
    buttons: Vec<bool>,
    axes: Vec<f32>,
}

impl RawMonitor {
    fn observe(&mut self, pad: &GamepadSnapshot, map: &ButtonMap) {
        self.buttons.resize(pad.buttons.len(), false);
        for (i, state) in pad.buttons.iter().enumerate() {
            if state.pressed && !self.buttons[i] {
                let name = map.button_at(i).map(Button::name).unwrap_or("Unknown");
                debug!("Gamepad button {} pressed ({})", i, name);
            }
            self.buttons[i] = state.pressed;
        }

        self.axes.resize(pad.axes.len(), 0.0);
        for (i, value) in pad.axes.iter().copied().enumerate() {
            if value.abs() > MONITOR_AXIS_THRESHOLD && self.axes[i].abs() <= MONITOR_AXIS_THRESHOLD {
                let name = Axis::from_index(i).map(Axis::name).unwrap_or("Unknown");
                debug!("Gamepad axis {}: {:.2} ({})", i, value, name);
            }
            self.axes[i] = value;
        }
    }

    fn reset(&mut self) {
        self.buttons.clear();
        self.axes.clear();
    }
}

/// Merges keyboard and gamepad state into paddle intents and menu actions
#[derive(Debug, Clone)]
pub struct InputResolver {
    deadzone: f32,
    trigger_threshold: f32,
    button_map: ButtonMap,
    left: PaddleBinding,
    right: PaddleBinding,
    edges: EdgeTracker<Control>,
    monitor: RawMonitor,
    gamepad_connected: bool,
}

impl InputResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            deadzone: config.stick_deadzone,
            trigger_threshold: config.trigger_threshold,
            button_map: ButtonMap::new(),
            left: PaddleBinding::for_side(Side::Left),
            right: PaddleBinding::for_side(Side::Right),
            edges: EdgeTracker::new(),
            monitor: RawMonitor::default(),
            gamepad_connected: false,
        }
    }

    /// Remap one logical button by name, for non-standard controllers
    pub fn set_button_mapping(&mut self, name: &str, index: usize) -> Result<Button, InputError> {
        let button = self.button_map.set_by_name(name, index)?;
        info!("Gamepad mapping: {} -> button {}", button.name(), index);
        Ok(button)
    }

    pub fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    /// Resolve one frame. Must be called exactly once per frame, since
    /// edge detection compares against the previous call.
    pub fn resolve(&mut self, frame: &FrameInput) -> ResolvedInput {
        let disconnected = GamepadSnapshot::disconnected();
        let pad = frame
            .gamepad
            .as_ref()
            .filter(|p| p.connected)
            .unwrap_or(&disconnected);
        self.track_connection(pad);

        let left = self.paddle_intent(&frame.keyboard, pad, &self.left);
        let right = self.paddle_intent(&frame.keyboard, pad, &self.right);

        // Evaluate every edge each frame so no control misses its update
        let restart_key = self.key_just_pressed(&frame.keyboard, Key::Space);
        let restart_pad = self.pad_just_pressed(pad, Button::Start);
        let toggle_key = self.key_just_pressed(&frame.keyboard, Key::B);
        let toggle_pad = self.pad_just_pressed(pad, Button::Select);
        let cycle_key = self.key_just_pressed(&frame.keyboard, Key::C);
        let cycle_pad = self.pad_just_pressed(pad, Button::Y);

        ResolvedInput {
            left,
            right,
            actions: MenuActions {
                restart: restart_key || restart_pad,
                toggle_decoration: toggle_key || toggle_pad,
                cycle_palette: cycle_key || cycle_pad,
            },
        }
    }

    /// Deadzone filter for analog sticks
    pub fn apply_deadzone(&self, value: f32) -> f32 {
        if value.abs() < self.deadzone {
            0.0
        } else {
            value
        }
    }

    /// Gamepad direction for one paddle: stick, then d-pad, then buttons,
    /// then trigger (downward only)
    pub fn gamepad_direction(&self, pad: &GamepadSnapshot, binding: &PaddleBinding) -> f32 {
        let stick = self.apply_deadzone(pad.axis(binding.stick.index()));
        if stick != 0.0 {
            return stick;
        }

        if let Some((up, down)) = binding.dpad {
            let dpad = self.digital_direction(pad, up, down);
            if dpad != 0.0 {
                return dpad;
            }
        }

        let buttons = self.digital_direction(pad, binding.button_up, binding.button_down);
        if buttons != 0.0 {
            return buttons;
        }

        let trigger = pad.button(self.button_map.index(binding.trigger)).value;
        if trigger > self.trigger_threshold {
            trigger
        } else {
            0.0
        }
    }

    fn paddle_intent(
        &self,
        keyboard: &KeyboardState,
        pad: &GamepadSnapshot,
        binding: &PaddleBinding,
    ) -> PaddleIntent {
        PaddleIntent {
            key_up: keyboard.is_down(binding.key_up),
            key_down: keyboard.is_down(binding.key_down),
            analog: self.gamepad_direction(pad, binding),
        }
    }

    // Down wins when both are held
    fn digital_direction(&self, pad: &GamepadSnapshot, up: Button, down: Button) -> f32 {
        let mut dir = 0.0;
        if pad.button(self.button_map.index(up)).pressed {
            dir = -1.0;
        }
        if pad.button(self.button_map.index(down)).pressed {
            dir = 1.0;
        }
        dir
    }

    fn key_just_pressed(&mut self, keyboard: &KeyboardState, key: Key) -> bool {
        self.edges.just_pressed(Control::Key(key), keyboard.is_down(key))
    }

    fn pad_just_pressed(&mut self, pad: &GamepadSnapshot, button: Button) -> bool {
        let pressed = pad.button(self.button_map.index(button)).pressed;
        self.edges.just_pressed(Control::Pad(button), pressed)
    }

    fn track_connection(&mut self, pad: &GamepadSnapshot) {
        if pad.connected && !self.gamepad_connected {
            info!(
                id = %pad.id,
                buttons = pad.buttons.len(),
                axes = pad.axes.len(),
                family = ?pad.family(),
                "Gamepad connected"
            );
        } else if !pad.connected && self.gamepad_connected {
            info!("Gamepad disconnected");
            self.monitor.reset();
        }
        self.gamepad_connected = pad.connected;

        if pad.connected {
            self.monitor.observe(pad, &self.button_map);
        }
    }
}
