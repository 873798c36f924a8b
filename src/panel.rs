// src/panel.rs

//! The virtual key panel: a fixed palette of auxiliary keys (escape,
//! modifiers, tab, arrows) whose taps synthesize key-down/key-up pairs
//! shaped exactly like physical presses.
//!
//! Synthesis itself is the pure function [`crate::keys::key_event_pair`];
//! this type is the thin dispatch adapter around it, so the logic stays
//! testable with no UI framework present. Layout and styling of the panel
//! are the platform's concern.

use log::debug;

use crate::input::InputEvent;
use crate::keys::{key_event_pair, VirtualKeyDescriptor, PANEL_KEYS};

/// A statically bound set of virtual keys.
#[derive(Debug)]
pub struct VirtualKeyPanel {
    descriptors: &'static [VirtualKeyDescriptor],
}

impl Default for VirtualKeyPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualKeyPanel {
    /// Panel with the standard terminal key set.
    pub fn new() -> Self {
        Self {
            descriptors: PANEL_KEYS,
        }
    }

    /// Panel over a custom static descriptor set. The set is fixed for the
    /// panel's lifetime; there is no remapping after construction.
    pub fn with_descriptors(descriptors: &'static [VirtualKeyDescriptor]) -> Self {
        Self { descriptors }
    }

    /// The keys this panel exposes, in display order.
    pub fn descriptors(&self) -> &[VirtualKeyDescriptor] {
        self.descriptors
    }

    /// Looks a key up by its label, for platforms that key their button
    /// callbacks by text.
    pub fn find_by_label(&self, label: &str) -> Option<&VirtualKeyDescriptor> {
        self.descriptors.iter().find(|d| d.label == label)
    }

    /// One tap on `descriptor`: emits the key-down then the key-up through
    /// `dispatch`, back to back. The caller's dispatcher decides delivery;
    /// when that is a `SurfaceHost`, the active-only gate applies as for any
    /// physical key.
    pub fn activate(
        &self,
        descriptor: &VirtualKeyDescriptor,
        dispatch: &mut dyn FnMut(InputEvent),
    ) {
        debug!(
            "VirtualKeyPanel: activating '{}' ({:?})",
            descriptor.label, descriptor.code
        );
        let (down, up) = key_event_pair(descriptor);
        dispatch(down);
        dispatch(up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyPhase;
    use crate::keys::KeyCode;

    #[test]
    fn it_should_expose_the_standard_key_set_in_order() {
        let panel = VirtualKeyPanel::new();
        assert_eq!(panel.descriptors().len(), 8);
        assert_eq!(panel.descriptors()[0].label, "ESC");
    }

    #[test]
    fn it_should_find_keys_by_label() {
        let panel = VirtualKeyPanel::new();
        let tab = panel.find_by_label("TAB").unwrap();
        assert_eq!(tab.code, KeyCode::TAB);
        assert!(panel.find_by_label("NO SUCH KEY").is_none());
    }

    #[test]
    fn it_should_dispatch_down_then_up_for_one_activation() {
        let panel = VirtualKeyPanel::new();
        let ctrl = panel.find_by_label("CTRL").unwrap();

        let mut seen = Vec::new();
        panel.activate(ctrl, &mut |event| seen.push(event));

        assert_eq!(seen.len(), 2);
        assert!(matches!(
            seen[0],
            InputEvent::Key {
                phase: KeyPhase::Down,
                code: KeyCode::CTRL_LEFT,
                character: None,
            }
        ));
        assert!(matches!(
            seen[1],
            InputEvent::Key {
                phase: KeyPhase::Up,
                code: KeyCode::CTRL_LEFT,
                character: None,
            }
        ));
    }
}
