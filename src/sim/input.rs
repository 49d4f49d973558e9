use bitflags::bitflags;

bitflags! {
    /// Directional keys held during one frame.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct InputCmd: u8 {
        const TURN_LEFT    = 0x01;
        const TURN_RIGHT   = 0x02;
        const MOVE_BACK    = 0x04;
        const MOVE_FORWARD = 0x08;
    }
}

impl InputCmd {
    /// Build a command from the four polled key states.
    pub fn from_keys(turn_left: bool, turn_right: bool, back: bool, forward: bool) -> Self {
        let mut cmd = Self::empty();
        cmd.set(Self::TURN_LEFT, turn_left);
        cmd.set(Self::TURN_RIGHT, turn_right);
        cmd.set(Self::MOVE_BACK, back);
        cmd.set(Self::MOVE_FORWARD, forward);
        cmd
    }
}
