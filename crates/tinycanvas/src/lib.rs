#![forbid(unsafe_code)]

//! Tiny Canvas public facade crate.
//!
//! This crate provides the stable surface area for hosts: re-exports of the
//! core device model and the command-channel adapter, plus [`Emulator`], the
//! tick driver that runs the fixed per-frame sequence a presentation layer
//! is expected to call.

use std::fmt;
use std::path::PathBuf;

// --- Core re-exports -------------------------------------------------------

pub use tinycanvas_core::color::{ColorCode, mix};
pub use tinycanvas_core::cursor::{Cursor, DEBOUNCE, Phase};
pub use tinycanvas_core::device::{Device, DeviceConfig};
pub use tinycanvas_core::frame::{FRAME_WORDS, Frame, FrameAssembler};
pub use tinycanvas_core::grid::{GRID_SIDE, Grid};
pub use tinycanvas_core::status::{InputState, Status};

// --- Feed re-exports -------------------------------------------------------

pub use tinycanvas_feed::{LogTail, parse_line};

// --- Errors ----------------------------------------------------------------

/// Top-level error type for emulator hosts.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while manipulating the command log.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

// --- Emulator --------------------------------------------------------------

/// Tick-driven emulator: the device model plus its external command channel.
///
/// A host calls [`tick`](Self::tick) once per frame with the current input
/// levels and a monotonic clock; everything else (painting, loopback,
/// log ingestion) happens inside the tick. All state lives in this value —
/// embedding it in a multi-threaded host requires serializing access behind
/// a single owner, since frame assembly is not safe under concurrent
/// mutation.
#[derive(Debug)]
pub struct Emulator {
    device: Device,
    tail: LogTail,
}

impl Emulator {
    /// Create an emulator tailing the command log at `log_path`.
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self::with_config(log_path, DeviceConfig::default())
    }

    /// Create an emulator with an explicit device configuration.
    pub fn with_config(log_path: impl Into<PathBuf>, config: DeviceConfig) -> Self {
        Self {
            device: Device::with_config(config),
            tail: LogTail::new(log_path),
        }
    }

    /// Run one tick: step the pure core, then poll the external channel.
    ///
    /// Returns the number of external commands ingested this tick.
    pub fn tick(&mut self, input: InputState, now: u64) -> usize {
        self.device.step(input, now);
        self.tail.poll(&mut self.device)
    }

    /// Clear the canvas and the external channel: all cells to zero, the
    /// read offset rewound, and the backing log removed so stale offsets
    /// cannot replay.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.device.clear();
        self.tail.reset()?;
        Ok(())
    }

    /// The device model, for reading grid, cursor, and status state.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Total external commands ingested since creation.
    pub fn commands_seen(&self) -> u64 {
        self.tail.commands_seen()
    }

    /// Current read offset into the command log.
    pub fn log_offset(&self) -> u64 {
        self.tail.offset()
    }
}
