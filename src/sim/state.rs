use super::{InputCmd, MoveSpeeds};
use crate::world::{Pose, WallPolyline};

/// Everything the frame loop reads or mutates. The walls are borrowed: they
/// outlive the simulation and never change.
#[derive(Clone, Copy, Debug)]
pub struct Simulation<'w> {
    pub pose: Pose,
    pub walls: &'w WallPolyline,
    pub speeds: MoveSpeeds,
}

impl<'w> Simulation<'w> {
    pub fn new(pose: Pose, walls: &'w WallPolyline, speeds: MoveSpeeds) -> Self {
        Self {
            pose,
            walls,
            speeds,
        }
    }

    /// Run one frame of player movement.
    #[inline]
    pub fn step(&mut self, cmd: InputCmd, dt: f32) {
        self.pose.apply_input(cmd, dt, self.speeds);
    }
}
