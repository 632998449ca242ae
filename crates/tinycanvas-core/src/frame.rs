//! Bus frame assembly.
//!
//! The bus carries a logical 3-byte framing: `(X, Y, Status)`. The assembler
//! is a deterministic accumulator that emits a [`Frame`] on every third word
//! and clears its buffer unconditionally — a malformed or out-of-range frame
//! still consumes its three words and never desynchronizes later framing.
//!
//! Words are `u16`, not `u8`: the external command channel may legitimately
//! deliver values ≥ 256, which must travel through framing and be rejected
//! as out-of-range *coordinates* at write time rather than corrupt the
//! stream. Negative values are unrepresentable by type.

use crate::grid::Grid;
use crate::status::Status;

/// Words per frame.
pub const FRAME_WORDS: usize = 3;

/// A complete `(X, Y, Status)` bus frame: one "paint at position with the
/// status byte's color" command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: u16,
    pub y: u16,
    pub status: u16,
}

impl Frame {
    /// Whether both coordinates address the grid.
    pub fn in_range(&self) -> bool {
        self.x <= u8::MAX as u16 && self.y <= u8::MAX as u16
    }

    /// The status word truncated to its byte, as bus hardware would see it.
    pub fn status(&self) -> Status {
        Status::from_byte((self.status & 0xFF) as u8)
    }

    /// Write the frame's color field through to the grid.
    ///
    /// Only the color field of the status byte is consulted; button and mode
    /// bits ride along as informational state. Out-of-range coordinates make
    /// this a no-op and return `false`.
    pub fn apply(&self, grid: &mut Grid) -> bool {
        if !self.in_range() {
            return false;
        }
        grid.set(self.x as u8, self.y as u8, self.status().color());
        true
    }
}

/// Accumulates inbound bus words into frames.
///
/// Holds at most two pending words; the buffer length is always `< 3`
/// immediately after any call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameAssembler {
    buf: [u16; FRAME_WORDS - 1],
    len: u8,
}

impl FrameAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one bus word.
    ///
    /// Returns the completed frame on every third word; the buffer is
    /// cleared before returning it.
    pub fn receive(&mut self, word: u16) -> Option<Frame> {
        if (self.len as usize) < FRAME_WORDS - 1 {
            self.buf[self.len as usize] = word;
            self.len += 1;
            return None;
        }
        let frame = Frame {
            x: self.buf[0],
            y: self.buf[1],
            status: word,
        };
        self.len = 0;
        Some(frame)
    }

    /// The partially received frame, for diagnostic display.
    pub fn pending(&self) -> &[u16] {
        &self.buf[..self.len as usize]
    }

    /// Drop any partial frame.
    pub fn reset(&mut self) {
        self.len = 0;
    }
}
