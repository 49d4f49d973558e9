//! Frame assembly: minimap + projected walls → ordered [`DrawCall`]s.

use glam::{Vec2, vec2};

use super::{MinimapData, Screen};
use crate::{
    renderer::{DrawCall, Rgba, colour},
    world::WallPolyline,
};

/// Colours and toggles used when building a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub background: Rgba,
    pub map_walls: Rgba,
    pub view_walls: Rgba,
    pub player: Rgba,
    pub camera_plane: Rgba,
    pub horizon: Option<Rgba>,
    /// Full-height vertical guide at `x`.
    pub divider: Option<(f32, Rgba)>,
    pub line_width: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: colour::SKY_BLUE,
            map_walls: colour::BLACK,
            view_walls: colour::DARK_GREEN,
            player: colour::RED,
            camera_plane: colour::GREY,
            horizon: None,
            divider: Some((200.0, colour::BLACK)),
            line_width: 1.0,
        }
    }
}

/// Rebuild `out` with this frame's draw list.
///
/// Order: clear, divider, horizon guide, projected walls, minimap walls,
/// camera plane, player marker. `visible` yields the projector's segments.
pub fn build<'a>(
    minimap: &MinimapData<'a>,
    visible: impl IntoIterator<Item = (Vec2, Vec2)>,
    screen: &Screen,
    style: &SceneStyle,
    out: &mut Vec<DrawCall<'a>>,
) {
    out.clear();
    out.push(DrawCall::Clear(style.background));

    if let Some((x, c)) = style.divider {
        out.push(DrawCall::Line {
            a: vec2(x, 0.0),
            b: vec2(x, screen.h as f32),
            width: 1.0,
            colour: c,
        });
    }

    if let Some(c) = style.horizon {
        let y = screen.horizon_y();
        out.push(DrawCall::Line {
            a: vec2(0.0, y),
            b: vec2(screen.w as f32, y),
            width: 1.0,
            colour: c,
        });
    }

    out.extend(visible.into_iter().map(|(a, b)| DrawCall::Line {
        a,
        b,
        width: style.line_width,
        colour: style.view_walls,
    }));

    push_walls(minimap.walls, style, out);

    if let Some((a, b)) = minimap.camera_plane {
        out.push(DrawCall::Line {
            a,
            b,
            width: 1.0,
            colour: style.camera_plane,
        });
    }

    out.push(DrawCall::Circle {
        centre: minimap.player,
        radius: minimap.player_radius,
        colour: style.player,
    });
    out.push(DrawCall::Line {
        a: minimap.facing.0,
        b: minimap.facing.1,
        width: 1.0,
        colour: style.player,
    });
}

/// Closed runs become one polygon outline; open ones are drawn per segment
/// so no edge is invented between the ends.
fn push_walls<'a>(walls: &'a WallPolyline, style: &SceneStyle, out: &mut Vec<DrawCall<'a>>) {
    if walls.is_closed() {
        let points = walls.points();
        out.push(DrawCall::Polygon {
            points: &points[..points.len() - 1],
            width: style.line_width,
            colour: style.map_walls,
        });
    } else {
        out.extend(walls.segments().map(|(a, b)| DrawCall::Line {
            a,
            b,
            width: style.line_width,
            colour: style.map_walls,
        }));
    }
}
