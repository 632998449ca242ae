//! Headless demo: draw a box through the external command channel.
//!
//! Appends `X,Y,STATUS` lines to a command log, ticks the emulator so it
//! ingests them, and prints an ASCII snapshot of the painted region.
//!
//! ```sh
//! cargo run -p tinycanvas --example draw_box
//! ```

use std::fs::OpenOptions;
use std::io::Write;

use tinycanvas::{ColorCode, Emulator, InputState, Status};

const LOG: &str = "draw_box_commands.txt";

fn send(file: &mut impl Write, x: u8, y: u8, status: Status) {
    writeln!(file, "{},{},{}", x, y, status.byte()).expect("append command");
}

fn main() {
    let mut emulator = Emulator::new(LOG);
    emulator.clear().expect("reset command log");

    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG)
        .expect("open command log");

    // Magenta box outline, brush mode: status 0x0D.
    let magenta = Status::BRUSH | Status::RED | Status::BLUE;
    let (left, top, side) = (100u8, 100u8, 24u8);
    for i in 0..side {
        send(&mut log, left + i, top, magenta);
        send(&mut log, left + i, top + side - 1, magenta);
        send(&mut log, left, top + i, magenta);
        send(&mut log, left + side - 1, top + i, magenta);
    }
    log.flush().expect("flush command log");

    let ingested = emulator.tick(InputState::default(), 0);
    println!(
        "ingested {ingested} commands (total {})",
        emulator.commands_seen()
    );

    let device = emulator.device();
    for y in top - 2..top + side + 2 {
        let row: String = (left - 2..left + side + 2)
            .map(|x| match device.grid().get(x, y) {
                ColorCode::Black => '.',
                code => code.name().chars().next().unwrap_or('?'),
            })
            .collect();
        println!("{row}");
    }

    emulator.clear().expect("clean up command log");
}
