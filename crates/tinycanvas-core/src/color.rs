//! Color codes and the color mixer.
//!
//! Each grid cell stores a 3-bit color code: the concatenation of the red,
//! green, and blue switch levels (`r<<2 | g<<1 | b`). The eight resulting
//! mixes are modeled as a fieldless enum with total conversions in both
//! directions, plus total mappings to display metadata for hosts that render
//! the grid.

/// 3-bit color code stored per grid cell.
///
/// The discriminant is the wire encoding: bit 2 red, bit 1 green, bit 0 blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorCode {
    /// No channels lit. Also the eraser output and the cleared-cell value.
    #[default]
    Black = 0b000,
    Blue = 0b001,
    Green = 0b010,
    Cyan = 0b011,
    Red = 0b100,
    Magenta = 0b101,
    Yellow = 0b110,
    White = 0b111,
}

impl ColorCode {
    /// Decode a color code from raw bits. Only the low 3 bits are consulted,
    /// so this is total over `u8`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Black,
            0b001 => Self::Blue,
            0b010 => Self::Green,
            0b011 => Self::Cyan,
            0b100 => Self::Red,
            0b101 => Self::Magenta,
            0b110 => Self::Yellow,
            _ => Self::White,
        }
    }

    /// The 3-bit wire encoding.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Human-readable name, for host UIs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Red => "Red",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::White => "White",
        }
    }

    /// Full-intensity RGB triple for rendering the code.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::Blue => (0, 0, 255),
            Self::Green => (0, 255, 0),
            Self::Cyan => (0, 255, 255),
            Self::Red => (255, 0, 0),
            Self::Magenta => (255, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::White => (255, 255, 255),
        }
    }
}

/// Color mixer: combine the mode line and the three color switches into the
/// code to paint.
///
/// Eraser mode forces [`ColorCode::Black`] regardless of the switches; brush
/// mode concatenates the switch levels. Pure, no state.
pub fn mix(brush: bool, red: bool, green: bool, blue: bool) -> ColorCode {
    if !brush {
        return ColorCode::Black;
    }
    ColorCode::from_bits(u8::from(red) << 2 | u8::from(green) << 1 | u8::from(blue))
}
