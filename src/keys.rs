// src/keys.rs

//! Logical key codes and the fixed virtual-key descriptor table.
//!
//! A logical key code is a platform-independent identifier for a key,
//! distinct from any raw scan code. The host forwards codes verbatim to the
//! engine; the constants below name the codes the virtual key panel emits.

use serde::{Deserialize, Serialize};

use crate::input::{InputEvent, KeyPhase};

/// A logical key code as reported by the hosting platform.
///
/// Kept as an opaque newtype rather than an enum: the code space belongs to
/// the platform, and the engine owns interpretation. Only the codes the
/// virtual key panel synthesizes need names on this side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const ESCAPE: KeyCode = KeyCode(111);
    pub const CTRL_LEFT: KeyCode = KeyCode(113);
    pub const ALT_LEFT: KeyCode = KeyCode(57);
    pub const TAB: KeyCode = KeyCode(61);
    pub const DPAD_UP: KeyCode = KeyCode(19);
    pub const DPAD_DOWN: KeyCode = KeyCode(20);
    pub const DPAD_LEFT: KeyCode = KeyCode(21);
    pub const DPAD_RIGHT: KeyCode = KeyCode(22);
    pub const ENTER: KeyCode = KeyCode(66);
    pub const BACKSPACE: KeyCode = KeyCode(67);
    pub const SPACE: KeyCode = KeyCode(62);
}

/// A single auxiliary key on the virtual key panel.
///
/// The descriptor set is bound statically at panel construction; there is no
/// dynamic remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualKeyDescriptor {
    /// Label shown on the panel button. Presentation only; never forwarded.
    pub label: &'static str,
    /// Logical code synthesized when the key is activated.
    pub code: KeyCode,
}

/// The fixed palette of auxiliary keys: escape, modifiers, tab, and the four
/// directional arrows.
pub const PANEL_KEYS: &[VirtualKeyDescriptor] = &[
    VirtualKeyDescriptor {
        label: "ESC",
        code: KeyCode::ESCAPE,
    },
    VirtualKeyDescriptor {
        label: "CTRL",
        code: KeyCode::CTRL_LEFT,
    },
    VirtualKeyDescriptor {
        label: "ALT",
        code: KeyCode::ALT_LEFT,
    },
    VirtualKeyDescriptor {
        label: "TAB",
        code: KeyCode::TAB,
    },
    VirtualKeyDescriptor {
        label: "↑",
        code: KeyCode::DPAD_UP,
    },
    VirtualKeyDescriptor {
        label: "↓",
        code: KeyCode::DPAD_DOWN,
    },
    VirtualKeyDescriptor {
        label: "←",
        code: KeyCode::DPAD_LEFT,
    },
    VirtualKeyDescriptor {
        label: "→",
        code: KeyCode::DPAD_RIGHT,
    },
];

/// Synthesizes the key-down/key-up pair for one virtual key activation.
///
/// Virtual keys never carry literal text, so both events have no character.
/// The pair is identical in shape to a fast physical key press, which lets
/// the engine keep a single key-handling path.
pub fn key_event_pair(descriptor: &VirtualKeyDescriptor) -> (InputEvent, InputEvent) {
    (
        InputEvent::Key {
            phase: KeyPhase::Down,
            code: descriptor.code,
            character: None,
        },
        InputEvent::Key {
            phase: KeyPhase::Up,
            code: descriptor.code,
            character: None,
        },
    )
}
