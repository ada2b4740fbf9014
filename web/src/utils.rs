use bitflags::bitflags;
use emojisweeper_core::PointerButton;

bitflags! {
    /// Mirror of `MouseEvent.buttons`.
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

impl MouseButtons {
    /// Secondary wins when both buttons are down, anything else is not a game action.
    pub(crate) fn pointer_button(self) -> Option<PointerButton> {
        if self.contains(Self::RIGHT) {
            Some(PointerButton::Secondary)
        } else if self.contains(Self::LEFT) {
            Some(PointerButton::Primary)
        } else {
            None
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_pointer_actions() {
        assert_eq!(
            MouseButtons::LEFT.pointer_button(),
            Some(PointerButton::Primary)
        );
        assert_eq!(
            MouseButtons::RIGHT.pointer_button(),
            Some(PointerButton::Secondary)
        );
        assert_eq!(
            (MouseButtons::LEFT | MouseButtons::RIGHT).pointer_button(),
            Some(PointerButton::Secondary)
        );
        assert_eq!(MouseButtons::MIDDLE.pointer_button(), None);
        assert_eq!(MouseButtons::from_bits_truncate(1 << 7).pointer_button(), None);
    }
}
