//! Test assertions on what the fake application received

use std::time::Duration;

use crate::headless::HeadlessGui;

/// Assert the exact sequence of keys pressed so far
pub fn assert_pressed(gui: &HeadlessGui, expected: &[&str]) {
    let actual = gui.pressed_keys();
    assert_eq!(
        actual, expected,
        "pressed keys mismatch: expected {:?}, got {:?}",
        expected, actual
    );
}

/// Assert nothing was pressed
pub fn assert_no_presses(gui: &HeadlessGui) {
    let actual = gui.pressed_keys();
    assert!(actual.is_empty(), "expected no key presses, got {:?}", actual);
}

/// Assert that `count` presses were made, all of them `key`
///
/// This is how navigation is checked: the number of movement commands and
/// that they all go in one direction.
pub fn assert_moves(gui: &HeadlessGui, key: &str, count: usize) {
    let actual = gui.pressed_keys();
    assert_eq!(
        actual.len(),
        count,
        "expected {} presses of {}, got {:?}",
        count,
        key,
        actual
    );
    if let Some(other) = actual.iter().find(|k| *k != key) {
        panic!("expected only {} presses, found {} in {:?}", key, other, actual);
    }
}

/// Assert the selected row of the focused list
pub fn assert_selected(gui: &HeadlessGui, expected: usize) {
    assert_eq!(
        gui.selected_line_idx(),
        Some(expected),
        "selection should be at row {}",
        expected
    );
}

/// Assert consecutive presses are at least `delay` apart
pub fn assert_paced(gui: &HeadlessGui, delay: Duration) {
    let presses = gui.presses();
    for (i, pair) in presses.windows(2).enumerate() {
        let gap = pair[1].at.duration_since(pair[0].at);
        assert!(
            gap >= delay,
            "press {} ({}) came {:?} after press {} ({}), expected at least {:?}",
            i + 1,
            pair[1].key,
            gap,
            i,
            pair[0].key,
            delay
        );
    }
}

/// Assert the application log received a message containing `needle`
pub fn assert_logged(gui: &HeadlessGui, needle: &str) {
    let log = gui.log_messages();
    assert!(
        log.iter().any(|m| m.contains(needle)),
        "expected a log message containing {:?}, got {:?}",
        needle,
        log
    );
}
