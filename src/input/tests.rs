// src/input/tests.rs

use super::*;

#[test]
fn it_should_map_raw_pointer_phases_one_to_one() {
    let normalizer = InputNormalizer::new();

    let down = normalizer.normalize_pointer(0, 10.0, 10.0);
    let moved = normalizer.normalize_pointer(1, 20.0, 15.0);
    let up = normalizer.normalize_pointer(2, 20.0, 15.0);

    assert_eq!(
        down,
        Some(InputEvent::Pointer {
            phase: PointerPhase::Down,
            x: 10.0,
            y: 10.0,
        })
    );
    assert_eq!(
        moved,
        Some(InputEvent::Pointer {
            phase: PointerPhase::Move,
            x: 20.0,
            y: 15.0,
        })
    );
    assert_eq!(
        up,
        Some(InputEvent::Pointer {
            phase: PointerPhase::Up,
            x: 20.0,
            y: 15.0,
        })
    );
}

#[test]
fn it_should_drop_unrecognized_pointer_phases() {
    let normalizer = InputNormalizer::new();

    // ACTION_CANCEL-style and garbage phases alike must vanish here.
    assert_eq!(normalizer.normalize_pointer(3, 1.0, 1.0), None);
    assert_eq!(normalizer.normalize_pointer(-1, 1.0, 1.0), None);
    assert_eq!(normalizer.normalize_pointer(255, 1.0, 1.0), None);
}

#[test]
fn it_should_carry_a_character_on_key_down_only_when_the_key_has_text() {
    let normalizer = InputNormalizer::new();

    let a = normalizer.normalize_key_down(29, 'a' as u32);
    assert_eq!(
        a,
        Some(InputEvent::Key {
            phase: KeyPhase::Down,
            code: KeyCode(29),
            character: Some('a'),
        })
    );

    // Arrow keys report unicode 0.
    let up_arrow = normalizer.normalize_key_down(KeyCode::DPAD_UP.0, 0);
    assert_eq!(
        up_arrow,
        Some(InputEvent::Key {
            phase: KeyPhase::Down,
            code: KeyCode::DPAD_UP,
            character: None,
        })
    );
}

#[test]
fn it_should_never_attach_a_character_to_key_up() {
    let normalizer = InputNormalizer::new();

    let event = normalizer.normalize_key_up(29);
    assert_eq!(
        event,
        Some(InputEvent::Key {
            phase: KeyPhase::Up,
            code: KeyCode(29),
            character: None,
        })
    );
}

#[test]
fn it_should_drop_negative_key_codes() {
    let normalizer = InputNormalizer::new();

    assert_eq!(normalizer.normalize_key_down(-1, 0), None);
    assert_eq!(normalizer.normalize_key_up(-7), None);
}

#[test]
fn it_should_drop_invalid_character_scalars_but_keep_the_key() {
    let normalizer = InputNormalizer::new();

    // 0xD800 is a surrogate, not a valid char; the key still forwards.
    let event = normalizer.normalize_key_down(29, 0xD800);
    assert_eq!(
        event,
        Some(InputEvent::Key {
            phase: KeyPhase::Down,
            code: KeyCode(29),
            character: None,
        })
    );
}
