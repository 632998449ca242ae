//! Cursor movement FSM.
//!
//! The device's own pointer into the grid. Movement is debounced against a
//! monotonic host clock and evaluated once per tick in a fixed priority
//! order — Up, Down, Left, Right — so at most one axis move happens per
//! tick and simultaneous opposite presses never cancel or move diagonally.
//! An accepted move requests a paint at the new position; the device context
//! satisfies that request with the currently mixed color.

use crate::status::InputState;

/// Default minimum elapsed clock units between two accepted moves.
pub const DEBOUNCE: u64 = 150;

/// Cursor FSM phase.
///
/// `Moved` is observable only for the tick that accepted a move; the next
/// [`Cursor::update`] re-arms it to `Idle` before evaluating buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Moved,
}

/// Cursor position plus the movement debounce timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub x: u8,
    pub y: u8,
    debounce: u64,
    last_move: u64,
    phase: Phase,
}

impl Cursor {
    /// Create a cursor at a fixed start coordinate.
    pub fn new(x: u8, y: u8, debounce: u64) -> Self {
        Self {
            x,
            y,
            debounce,
            last_move: 0,
            phase: Phase::Idle,
        }
    }

    /// Evaluate one tick of button state against the clock.
    ///
    /// Returns `true` when a move was accepted, which doubles as the paint
    /// request. Within the debounce window nothing happens regardless of
    /// button state. A pressed direction that would leave the grid yields to
    /// the next direction in priority order. Y origin is top-left: Up
    /// decrements y.
    pub fn update(&mut self, input: &InputState, now: u64) -> bool {
        self.phase = Phase::Idle;
        if now.saturating_sub(self.last_move) < self.debounce {
            return false;
        }

        let moved = if input.up && self.y > 0 {
            self.y -= 1;
            true
        } else if input.down && self.y < u8::MAX {
            self.y += 1;
            true
        } else if input.left && self.x > 0 {
            self.x -= 1;
            true
        } else if input.right && self.x < u8::MAX {
            self.x += 1;
            true
        } else {
            false
        };

        if moved {
            self.last_move = now;
            self.phase = Phase::Moved;
        }
        moved
    }

    /// Current position as `(x, y)`.
    pub fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    /// Phase after the most recent [`update`](Self::update).
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressing(up: bool, down: bool, left: bool, right: bool) -> InputState {
        InputState {
            up,
            down,
            left,
            right,
            ..InputState::default()
        }
    }

    #[test]
    fn idle_without_buttons() {
        let mut cursor = Cursor::new(10, 10, DEBOUNCE);
        assert!(!cursor.update(&InputState::default(), 1_000));
        assert_eq!(cursor.position(), (10, 10));
        assert_eq!(cursor.phase(), Phase::Idle);
    }

    #[test]
    fn debounce_blocks_from_clock_zero() {
        let mut cursor = Cursor::new(10, 10, DEBOUNCE);
        assert!(!cursor.update(&pressing(true, false, false, false), 0));
        assert!(!cursor.update(&pressing(true, false, false, false), 149));
        assert!(cursor.update(&pressing(true, false, false, false), 150));
        assert_eq!(cursor.position(), (10, 9));
    }

    #[test]
    fn two_ticks_inside_window_move_once() {
        let mut cursor = Cursor::new(10, 10, DEBOUNCE);
        let input = pressing(false, false, false, true);
        assert!(cursor.update(&input, 200));
        assert!(!cursor.update(&input, 200 + DEBOUNCE - 1));
        assert_eq!(cursor.position(), (11, 10));
        assert!(cursor.update(&input, 200 + DEBOUNCE));
        assert_eq!(cursor.position(), (12, 10));
    }

    #[test]
    fn priority_up_beats_everything() {
        let mut cursor = Cursor::new(10, 10, DEBOUNCE);
        assert!(cursor.update(&pressing(true, true, true, true), 500));
        assert_eq!(cursor.position(), (10, 9));
    }

    #[test]
    fn opposite_presses_do_not_cancel() {
        let mut cursor = Cursor::new(10, 10, DEBOUNCE);
        assert!(cursor.update(&pressing(true, true, false, false), 500));
        // Up wins; no diagonal, no standstill.
        assert_eq!(cursor.position(), (10, 9));
    }

    #[test]
    fn blocked_direction_yields_to_next() {
        let mut cursor = Cursor::new(10, 0, DEBOUNCE);
        // Up is pressed at the top edge; Down acts instead.
        assert!(cursor.update(&pressing(true, true, false, false), 500));
        assert_eq!(cursor.position(), (10, 1));
    }

    #[test]
    fn edge_moves_are_rejected() {
        let mut cursor = Cursor::new(255, 255, DEBOUNCE);
        assert!(!cursor.update(&pressing(false, true, false, false), 500));
        assert!(!cursor.update(&pressing(false, false, false, true), 700));
        assert_eq!(cursor.position(), (255, 255));
        assert_eq!(cursor.phase(), Phase::Idle);
    }

    #[test]
    fn moved_phase_lasts_one_tick() {
        let mut cursor = Cursor::new(10, 10, DEBOUNCE);
        assert!(cursor.update(&pressing(false, true, false, false), 500));
        assert_eq!(cursor.phase(), Phase::Moved);
        assert!(!cursor.update(&InputState::default(), 501));
        assert_eq!(cursor.phase(), Phase::Idle);
    }
}
