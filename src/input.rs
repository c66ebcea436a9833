//! Pad input snapshot
//!
//! The input collaborator hands the core one byte of de-bounced, active-high
//! button state per frame. Edge detection (launch on press, not hold) is the
//! core's job and lives in [`sim::TickInput`](crate::sim::TickInput).

use bitflags::bitflags;

bitflags! {
    /// One frame's button state.
    ///
    /// Bit assignments match the pad shift register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const RIGHT = 0x01;
        const LEFT  = 0x02;
        const DOWN  = 0x04;
        const UP    = 0x08;
        const A     = 0x10;
        const B     = 0x20;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simultaneous_directions() {
        let pad = Buttons::LEFT | Buttons::RIGHT;
        assert!(pad.contains(Buttons::LEFT));
        assert!(pad.contains(Buttons::RIGHT));
        assert!(!pad.contains(Buttons::A));
    }
}
