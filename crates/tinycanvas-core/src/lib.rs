#![forbid(unsafe_code)]

//! Host-agnostic Tiny Canvas device model.
//!
//! `tinycanvas-core` is the platform-independent model of a small addressable
//! pixel-canvas peripheral: a 256×256 grid of 3-bit color codes driven by
//! discrete input lines and a narrow 3-byte-framed bus. It owns the grid,
//! the status codec, cursor movement, and bus frame assembly — all without
//! any host I/O dependencies.
//!
//! # Primary responsibilities
//!
//! - **Grid**: 2D matrix of 3-bit color codes, the canvas contents.
//! - **Color**: enumerated color codes and the brush/eraser color mixer.
//! - **Status**: the packed status byte shared by the encode and decode paths.
//! - **Cursor**: debounced, priority-ordered movement with paint-on-move.
//! - **Frame**: accumulation of bus words into `(X, Y, Status)` frames.
//! - **Device**: the explicit device context tying the pieces together,
//!   including the change-detection loopback transmitter.
//!
//! # Design principles
//!
//! - **No I/O**: all types are pure data + logic; the host adapter supplies
//!   input levels, a monotonic clock, and bus words.
//! - **Deterministic**: identical input/word sequences always produce
//!   identical grid state.
//! - **No-op degradation**: malformed or out-of-range frames are consumed
//!   without desynchronizing framing and without touching the grid.

pub mod color;
pub mod cursor;
pub mod device;
pub mod frame;
pub mod grid;
pub mod status;

pub use color::{ColorCode, mix};
pub use cursor::{Cursor, Phase};
pub use device::{Device, DeviceConfig};
pub use frame::{Frame, FrameAssembler};
pub use grid::{GRID_SIDE, Grid};
pub use status::{InputState, Status};
