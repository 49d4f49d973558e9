use super::InputCmd;
use crate::world::Pose;

/// Fixed per-second rates applied to held keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveSpeeds {
    pub walk: f32, // map units / s
    pub turn: f32, // radians / s
}

impl Default for MoveSpeeds {
    fn default() -> Self {
        Self {
            walk: 120.0,
            turn: std::f32::consts::PI, // 180°/s
        }
    }
}

impl Pose {
    /// Advance the pose by one frame of `dt` seconds.
    ///
    /// Opposing keys cancel out. Movement is unconstrained (no collision)
    /// and `dir` is left unwrapped. A negative `dt` counts as zero.
    pub fn apply_input(&mut self, cmd: InputCmd, dt: f32, speeds: MoveSpeeds) {
        let dt = dt.max(0.0);

        if cmd.contains(InputCmd::TURN_LEFT) {
            self.dir += speeds.turn * dt;
        }
        if cmd.contains(InputCmd::TURN_RIGHT) {
            self.dir -= speeds.turn * dt;
        }

        // heading after turning, as the keys are read in that order
        let step = self.forward() * (speeds.walk * dt);
        if cmd.contains(InputCmd::MOVE_BACK) {
            self.pos -= step;
        }
        if cmd.contains(InputCmd::MOVE_FORWARD) {
            self.pos += step;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
