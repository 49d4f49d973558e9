//! Built-in demo map.

use glam::{Vec2, vec2};

use super::{Pose, WallPolyline};

/// Closed outline of a room with a notch cut into its far wall,
/// laid out inside a 640×480 world.
const ROOM: [Vec2; 9] = [
    vec2(100.0, 60.0),
    vec2(540.0, 60.0),
    vec2(540.0, 420.0),
    vec2(400.0, 420.0),
    vec2(400.0, 320.0),
    vec2(240.0, 320.0),
    vec2(240.0, 420.0),
    vec2(100.0, 420.0),
    vec2(100.0, 60.0),
];

pub fn demo_walls() -> WallPolyline {
    WallPolyline::new(ROOM.to_vec())
}

/// Player start: centre of a `width × height` world, facing +Y.
pub fn demo_start(width: usize, height: usize) -> Pose {
    Pose::new(
        vec2(width as f32 * 0.5, height as f32 * 0.5),
        std::f32::consts::FRAC_PI_2,
    )
}
