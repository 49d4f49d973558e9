//! Overhead map: untransformed world geometry plus the player marker.

use glam::Vec2;

use crate::world::{Pose, WallPolyline};

pub const PLAYER_RADIUS: f32 = 5.0;
pub const FACING_LEN: f32 = 20.0;
pub const CAMERA_PLANE_LEN: f32 = 200.0;

/// Draw-ready minimap data for one frame. Walls are borrowed, not copied.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapData<'a> {
    pub player: Vec2,
    pub player_radius: f32,
    /// Short segment from the player along the facing direction.
    pub facing: (Vec2, Vec2),
    /// Field-of-view plane, perpendicular to facing, centred on the player.
    pub camera_plane: Option<(Vec2, Vec2)>,
    pub walls: &'a WallPolyline,
}

impl<'a> MinimapData<'a> {
    pub fn assemble(pose: &Pose, walls: &'a WallPolyline, show_camera_plane: bool) -> Self {
        Self {
            player: pose.pos,
            player_radius: PLAYER_RADIUS,
            facing: (pose.pos, pose.facing_tip(FACING_LEN)),
            camera_plane: show_camera_plane.then(|| pose.camera_plane(CAMERA_PLANE_LEN)),
            walls,
        }
    }
}
