//! End-to-end tests for the tick driver: input path, external channel, and
//! clear semantics together.

use std::fs::OpenOptions;
use std::io::Write;

use tempfile::TempDir;
use tinycanvas::{ColorCode, DeviceConfig, Emulator, InputState};

fn emulator(dir: &TempDir) -> Emulator {
    Emulator::with_config(
        dir.path().join("commands.txt"),
        DeviceConfig {
            debounce: 150,
            origin: (100, 100),
        },
    )
}

fn append(dir: &TempDir, content: &str) {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.path().join("commands.txt"))
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn buttons_move_and_paint() {
    let dir = TempDir::new().unwrap();
    let mut emulator = emulator(&dir);
    let input = InputState {
        down: true,
        red: true,
        blue: true,
        brush: true,
        ..InputState::default()
    };
    assert_eq!(emulator.tick(input, 200), 0);
    assert_eq!(emulator.device().cursor().position(), (100, 101));
    assert_eq!(emulator.device().grid().get(100, 101), ColorCode::Magenta);
}

#[test]
fn external_commands_paint_between_ticks() {
    let dir = TempDir::new().unwrap();
    let mut emulator = emulator(&dir);
    append(&dir, "10,20,12\n30,40,15\n");
    assert_eq!(emulator.tick(InputState::default(), 0), 2);
    assert_eq!(emulator.device().grid().get(10, 20), ColorCode::Red);
    assert_eq!(emulator.device().grid().get(30, 40), ColorCode::White);
    assert_eq!(emulator.commands_seen(), 2);
}

#[test]
fn idle_ticks_change_nothing() {
    let dir = TempDir::new().unwrap();
    let mut emulator = emulator(&dir);
    emulator.tick(InputState::default(), 0);
    let before = emulator.device().grid().clone();
    for now in 1..10 {
        assert_eq!(emulator.tick(InputState::default(), now), 0);
    }
    assert_eq!(emulator.device().grid(), &before);
}

#[test]
fn clear_resets_grid_and_channel() {
    let dir = TempDir::new().unwrap();
    let mut emulator = emulator(&dir);
    append(&dir, "10,20,12\n");
    assert_eq!(emulator.tick(InputState::default(), 0), 1);
    assert!(emulator.log_offset() > 0);

    emulator.clear().unwrap();
    assert!(emulator.device().grid().is_blank());
    assert_eq!(emulator.log_offset(), 0);

    // Fresh commands after the clear are read from the start of a new log.
    append(&dir, "1,2,10\n");
    assert_eq!(emulator.tick(InputState::default(), 1), 1);
    assert_eq!(emulator.device().grid().get(1, 2), ColorCode::Green);
}

#[test]
fn status_byte_tracks_input() {
    let dir = TempDir::new().unwrap();
    let mut emulator = emulator(&dir);
    let input = InputState {
        up: true,
        green: true,
        brush: true,
        ..InputState::default()
    };
    emulator.tick(input, 0);
    // Up + Brush + Green(010).
    assert_eq!(emulator.device().status().byte(), 0x80 | 0x08 | 0x02);
}
