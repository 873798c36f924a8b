// src/input/mod.rs

//! Input event model and the normalizer that maps raw platform signals into
//! the small closed set of events the engine understands.
//!
//! The normalizer is a pure translator: no queue, no coalescing. Anything
//! outside the normalized set (unknown pointer phases, negative key codes)
//! is dropped here so it can never reach the engine.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::keys::KeyCode;

#[cfg(test)]
mod tests;

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Phase of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A normalized input event bound for the engine.
///
/// Immutable once constructed and consumed exactly once by the engine
/// boundary; the host never buffers one beyond the current dispatch call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer gesture at surface-local coordinates.
    Pointer { phase: PointerPhase, x: f32, y: f32 },
    /// A key transition. `character` is the key's textual value, present
    /// only on key-down and only for keys that produce text (arrow keys and
    /// virtual panel keys do not). Key-up never carries a character.
    Key {
        phase: KeyPhase,
        code: KeyCode,
        character: Option<char>,
    },
}

/// Raw touch action encoding used by the platform callbacks.
const RAW_POINTER_DOWN: i32 = 0;
const RAW_POINTER_MOVE: i32 = 1;
const RAW_POINTER_UP: i32 = 2;

/// Translates raw pointer and key signals into [`InputEvent`]s.
///
/// Stateless by construction; it exists as a type so the translation rules
/// have one owner and one test surface.
#[derive(Debug, Default)]
pub struct InputNormalizer;

impl InputNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Maps a raw pointer phase to a normalized event.
    ///
    /// Returns `None` for phases outside the Down/Move/Up set. Platforms
    /// routinely emit gestures beyond it (multi-touch pointer indices,
    /// cancel, hover); those must never reach the engine.
    pub fn normalize_pointer(&self, raw_phase: i32, x: f32, y: f32) -> Option<InputEvent> {
        let phase = match raw_phase {
            RAW_POINTER_DOWN => PointerPhase::Down,
            RAW_POINTER_MOVE => PointerPhase::Move,
            RAW_POINTER_UP => PointerPhase::Up,
            other => {
                trace!("InputNormalizer: dropping unrecognized pointer phase {}", other);
                return None;
            }
        };
        Some(InputEvent::Pointer { phase, x, y })
    }

    /// Maps a raw key-down to a normalized event.
    ///
    /// `raw_character` is the key's unicode value, 0 when the key has no
    /// textual value. Negative codes are dropped as unrecognized.
    pub fn normalize_key_down(&self, raw_code: i32, raw_character: u32) -> Option<InputEvent> {
        if raw_code < 0 {
            trace!("InputNormalizer: dropping key-down with code {}", raw_code);
            return None;
        }
        let character = match raw_character {
            0 => None,
            c => char::from_u32(c),
        };
        Some(InputEvent::Key {
            phase: KeyPhase::Down,
            code: KeyCode(raw_code),
            character,
        })
    }

    /// Maps a raw key-up to a normalized event. Key-up never carries a
    /// character.
    pub fn normalize_key_up(&self, raw_code: i32) -> Option<InputEvent> {
        if raw_code < 0 {
            trace!("InputNormalizer: dropping key-up with code {}", raw_code);
            return None;
        }
        Some(InputEvent::Key {
            phase: KeyPhase::Up,
            code: KeyCode(raw_code),
            character: None,
        })
    }
}
