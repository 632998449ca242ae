//! Status byte codec and raw input state.
//!
//! The device reports (and accepts) its discrete state as a single packed
//! byte. The layout here is the canonical one and is the single source of
//! truth for both the encode and decode paths:
//!
//! ```text
//! bit 7   6     5     4      3            2    1      0
//!     Up  Down  Left  Right  Mode(brush)  Red  Green  Blue
//! ```
//!
//! Button bits reflect instantaneous pressed/released level, not edge
//! events. The low 3 bits carry the *mixed* color (the mixer runs before
//! encoding), so an eraser-mode status always has color bits `000` — which
//! is what keeps the loopback write path consistent with direct paints.
//!
//! All 8 bits are defined, so every byte value is a valid [`Status`] and
//! encode/decode are exact inverses over all 256 values.

use bitflags::bitflags;

use crate::color::{ColorCode, mix};

bitflags! {
    /// Packed device status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        const UP    = 1 << 7;
        const DOWN  = 1 << 6;
        const LEFT  = 1 << 5;
        const RIGHT = 1 << 4;
        /// 1 = brush, 0 = eraser.
        const BRUSH = 1 << 3;
        const RED   = 1 << 2;
        const GREEN = 1 << 1;
        const BLUE  = 1 << 0;
    }
}

/// Raw switch/button levels, overwritten every tick by the host adapter.
///
/// The core never mutates this; it is plain input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    /// Mode switch: `true` = brush, `false` = eraser.
    pub brush: bool,
}

impl InputState {
    /// The color the device would paint right now (mixer applied).
    pub fn mixed_color(&self) -> ColorCode {
        mix(self.brush, self.red, self.green, self.blue)
    }
}

impl Status {
    /// Encode the current input levels into the status byte.
    ///
    /// The color field is the mixed color, not the raw switch levels.
    pub fn encode(input: &InputState) -> Self {
        let mut status = Status::from_bits_retain(input.mixed_color().bits());
        status.set(Status::UP, input.up);
        status.set(Status::DOWN, input.down);
        status.set(Status::LEFT, input.left);
        status.set(Status::RIGHT, input.right);
        status.set(Status::BRUSH, input.brush);
        status
    }

    /// Decode a raw byte. Total: every byte value is a valid status.
    pub fn from_byte(byte: u8) -> Self {
        Status::from_bits_retain(byte)
    }

    /// The packed byte value, as transmitted on the bus.
    pub fn byte(self) -> u8 {
        self.bits()
    }

    /// The color field (low 3 bits).
    pub fn color(self) -> ColorCode {
        ColorCode::from_bits(self.bits())
    }

    /// The mode bit: `true` = brush.
    pub fn is_brush(self) -> bool {
        self.contains(Status::BRUSH)
    }

    /// Button levels as (up, down, left, right).
    pub fn buttons(self) -> (bool, bool, bool, bool) {
        (
            self.contains(Status::UP),
            self.contains(Status::DOWN),
            self.contains(Status::LEFT),
            self.contains(Status::RIGHT),
        )
    }
}
