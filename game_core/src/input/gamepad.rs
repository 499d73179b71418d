use std::collections::HashMap;
use std::str::FromStr;

use super::InputError;

/// Logical gamepad buttons, laid out like the W3C "standard" mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    Lb,
    Rb,
    Lt,
    Rt,
    Select,
    Start,
    Ls,
    Rs,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Home,
}

impl Button {
    pub const ALL: [Button; 17] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::Lb,
        Button::Rb,
        Button::Lt,
        Button::Rt,
        Button::Select,
        Button::Start,
        Button::Ls,
        Button::Rs,
        Button::DpadUp,
        Button::DpadDown,
        Button::DpadLeft,
        Button::DpadRight,
        Button::Home,
    ];

    /// Raw button index on a standard-mapping controller
    pub fn default_index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::X => 2,
            Button::Y => 3,
            Button::Lb => 4,
            Button::Rb => 5,
            Button::Lt => 6,
            Button::Rt => 7,
            Button::Select => 8,
            Button::Start => 9,
            Button::Ls => 10,
            Button::Rs => 11,
            Button::DpadUp => 12,
            Button::DpadDown => 13,
            Button::DpadLeft => 14,
            Button::DpadRight => 15,
            Button::Home => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::Lb => "LB",
            Button::Rb => "RB",
            Button::Lt => "LT",
            Button::Rt => "RT",
            Button::Select => "SELECT",
            Button::Start => "START",
            Button::Ls => "LS",
            Button::Rs => "RS",
            Button::DpadUp => "DPAD_UP",
            Button::DpadDown => "DPAD_DOWN",
            Button::DpadLeft => "DPAD_LEFT",
            Button::DpadRight => "DPAD_RIGHT",
            Button::Home => "HOME",
        }
    }
}

impl FromStr for Button {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Button::ALL
            .iter()
            .copied()
            .find(|b| b.name() == wanted)
            .ok_or_else(|| InputError::UnknownButton(s.to_string()))
    }
}

/// Analog axes on a standard-mapping controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    LeftTrigger,
    RightTrigger,
}

impl Axis {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::LeftStickX),
            1 => Some(Axis::LeftStickY),
            2 => Some(Axis::RightStickX),
            3 => Some(Axis::RightStickY),
            4 => Some(Axis::LeftTrigger),
            5 => Some(Axis::RightTrigger),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::LeftStickX => 0,
            Axis::LeftStickY => 1,
            Axis::RightStickX => 2,
            Axis::RightStickY => 3,
            Axis::LeftTrigger => 4,
            Axis::RightTrigger => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::LeftStickX => "Left Stick X",
            Axis::LeftStickY => "Left Stick Y",
            Axis::RightStickX => "Right Stick X",
            Axis::RightStickY => "Right Stick Y",
            Axis::LeftTrigger => "Left Trigger",
            Axis::RightTrigger => "Right Trigger",
        }
    }
}

/// Logical button -> raw index, overridable for odd controllers
#[derive(Debug, Clone)]
pub struct ButtonMap {
    indices: HashMap<Button, usize>,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            indices: Button::ALL
                .iter()
                .map(|b| (*b, b.default_index()))
                .collect(),
        }
    }
}

impl ButtonMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self, button: Button) -> usize {
        self.indices
            .get(&button)
            .copied()
            .unwrap_or_else(|| button.default_index())
    }

    pub fn set(&mut self, button: Button, index: usize) {
        self.indices.insert(button, index);
    }

    /// Override one entry by its display name (e.g. `"START"`)
    pub fn set_by_name(&mut self, name: &str, index: usize) -> Result<Button, InputError> {
        let button = name.parse::<Button>()?;
        self.set(button, index);
        Ok(button)
    }

    /// Reverse lookup, used when reporting raw presses
    pub fn button_at(&self, index: usize) -> Option<Button> {
        Button::ALL.iter().copied().find(|b| self.index(*b) == index)
    }
}

/// One button as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonState {
    pub pressed: bool,
    pub value: f32, // 0..1, analog for triggers
}

/// Broad controller family, sniffed from the id string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerFamily {
    Xbox,
    PlayStation,
    Nintendo,
    Generic,
}

impl ControllerFamily {
    pub fn detect(id: &str) -> Self {
        let id = id.to_lowercase();
        if id.contains("xbox") {
            ControllerFamily::Xbox
        } else if id.contains("playstation") || id.contains("ps") {
            ControllerFamily::PlayStation
        } else if id.contains("nintendo") || id.contains("switch") {
            ControllerFamily::Nintendo
        } else {
            ControllerFamily::Generic
        }
    }
}

/// Gamepad state polled once per frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub connected: bool,
    pub id: String,
    pub axes: Vec<f32>,
    pub buttons: Vec<ButtonState>,
}

impl GamepadSnapshot {
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Axis value, 0 when missing or disconnected
    pub fn axis(&self, index: usize) -> f32 {
        if !self.connected {
            return 0.0;
        }
        self.axes
            .get(index)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Button state, released when missing or disconnected
    pub fn button(&self, index: usize) -> ButtonState {
        if !self.connected {
            return ButtonState::default();
        }
        self.buttons.get(index).copied().unwrap_or_default()
    }

    pub fn family(&self) -> ControllerFamily {
        ControllerFamily::detect(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indices_are_standard_layout() {
        let map = ButtonMap::new();
        assert_eq!(map.index(Button::A), 0);
        assert_eq!(map.index(Button::Start), 9);
        assert_eq!(map.index(Button::DpadDown), 13);
        assert_eq!(map.index(Button::Home), 16);
    }

    #[test]
    fn test_custom_mapping_by_name() {
        let mut map = ButtonMap::new();
        assert_eq!(map.set_by_name("start", 7), Ok(Button::Start));
        assert_eq!(map.index(Button::Start), 7);
        assert_eq!(
            map.set_by_name("TURBO", 3),
            Err(InputError::UnknownButton("TURBO".to_string()))
        );
    }

    #[test]
    fn test_button_at_reverse_lookup() {
        let map = ButtonMap::new();
        assert_eq!(map.button_at(12), Some(Button::DpadUp));
        assert_eq!(map.button_at(99), None);
    }

    #[test]
    fn test_out_of_range_reads_as_no_input() {
        let pad = GamepadSnapshot {
            connected: true,
            id: "pad".to_string(),
            axes: vec![0.5],
            buttons: vec![],
        };
        assert_eq!(pad.axis(3), 0.0);
        assert_eq!(pad.button(9), ButtonState::default());
    }

    #[test]
    fn test_disconnected_reads_all_zero() {
        let mut pad = GamepadSnapshot {
            connected: true,
            id: "pad".to_string(),
            axes: vec![0.9, 0.9],
            buttons: vec![ButtonState { pressed: true, value: 1.0 }],
        };
        pad.connected = false;
        assert_eq!(pad.axis(1), 0.0);
        assert!(!pad.button(0).pressed);
    }

    #[test]
    fn test_family_detection() {
        assert_eq!(
            ControllerFamily::detect("Xbox Wireless Controller"),
            ControllerFamily::Xbox
        );
        assert_eq!(
            ControllerFamily::detect("DualSense Wireless Controller (PlayStation)"),
            ControllerFamily::PlayStation
        );
        assert_eq!(
            ControllerFamily::detect("Nintendo Switch Pro Controller"),
            ControllerFamily::Nintendo
        );
        assert_eq!(
            ControllerFamily::detect("USB Gamepad 0810-e501"),
            ControllerFamily::Generic
        );
    }
}
