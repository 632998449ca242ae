//! The device context.
//!
//! [`Device`] ties the grid, cursor FSM, status codec, and frame assembler
//! together behind one explicit context object — there is no ambient or
//! singleton state. The host drives it with a fixed per-tick sequence:
//! [`step`](Device::step) (input + clock), then any bus words it has for
//! [`receive_word`](Device::receive_word).
//!
//! `step` also runs the change-detection transmitter: whenever the observed
//! `(x, y, status)` triple differs from the last tick's, the device
//! synthesizes a frame from its own state and feeds it back through its own
//! bus path. This loopback guarantees the grid reflects the latest observed
//! state even when nothing external ever writes to the command channel.

use crate::cursor::{Cursor, DEBOUNCE};
use crate::frame::FrameAssembler;
use crate::grid::Grid;
use crate::status::{InputState, Status};

/// Device construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Minimum elapsed clock units between accepted cursor moves.
    pub debounce: u64,
    /// Cursor start coordinate.
    pub origin: (u8, u8),
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE,
            origin: (128, 128),
        }
    }
}

/// The emulated pixel-canvas peripheral.
#[derive(Debug, Clone)]
pub struct Device {
    grid: Grid,
    cursor: Cursor,
    assembler: FrameAssembler,
    input: InputState,
    /// Snapshot for change detection: `(x, y, status)` as of the last step.
    last_observed: Option<(u8, u8, Status)>,
}

impl Device {
    /// Create a device with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DeviceConfig::default())
    }

    /// Create a device with an explicit configuration.
    pub fn with_config(config: DeviceConfig) -> Self {
        let (x, y) = config.origin;
        Self {
            grid: Grid::new(),
            cursor: Cursor::new(x, y, config.debounce),
            assembler: FrameAssembler::new(),
            input: InputState::default(),
            last_observed: None,
        }
    }

    /// Run one tick of the pure core: cursor FSM, paint, and the
    /// change-detection transmitter.
    ///
    /// `now` is a monotonic clock in the same units as the debounce
    /// interval. No I/O happens here; external bus words are fed separately
    /// through [`receive_word`](Self::receive_word).
    pub fn step(&mut self, input: InputState, now: u64) {
        self.input = input;

        if self.cursor.update(&input, now) {
            // Paint request: write the mixed color at the new position.
            self.grid.set(self.cursor.x, self.cursor.y, input.mixed_color());
        }

        let status = Status::encode(&input);
        let current = (self.cursor.x, self.cursor.y, status);
        if self.last_observed != Some(current) {
            // Loopback: re-ingest our own state as a bus frame.
            self.receive_word(u16::from(current.0));
            self.receive_word(u16::from(current.1));
            self.receive_word(u16::from(status.byte()));
        }
        self.last_observed = Some(current);
    }

    /// Feed one inbound bus word. The single write path into the grid from
    /// the bus, shared by the loopback transmitter and the external channel.
    pub fn receive_word(&mut self, word: u16) {
        if let Some(frame) = self.assembler.receive(word) {
            frame.apply(&mut self.grid);
        }
    }

    /// Reset every grid cell to zero. Channel-side clear (offset and log
    /// invalidation) is the ingester's job.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Canvas contents.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The device's own pointer into the grid.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The status byte for the most recently stepped input.
    pub fn status(&self) -> Status {
        Status::encode(&self.input)
    }

    /// Partially received bus words, for diagnostic display.
    pub fn pending_frame(&self) -> &[u16] {
        self.assembler.pending()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}
