use glam::Vec2;

use super::{Screen, clip::clip_to_horizon, projection::rotate_all};
use crate::world::{Pose, WallPolyline};

/// Turns the wall polyline into drawable view-frame segments, once per frame.
///
/// Both buffers are owned here and survive across frames; `project` clears
/// and refills them, so steady-state frames do not allocate.
#[derive(Debug, Default)]
pub struct ViewProjector {
    screen: Screen,
    rotated: Vec<Vec2>,
    visible: Vec<Vec2>,
}

impl ViewProjector {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            rotated: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Rotate `walls` into the view frame and keep what lies in front of the
    /// horizon. Returns the visible list: consecutive pairs, one per
    /// surviving segment, in source order.
    pub fn project(&mut self, pose: &Pose, walls: &WallPolyline) -> &[Vec2] {
        rotate_all(pose, walls.points(), self.screen.centre(), &mut self.rotated);

        let horizon = self.screen.horizon_y();
        self.visible.clear();
        for w in self.rotated.windows(2) {
            if let Some((a, b)) = clip_to_horizon(w[0], w[1], horizon).pair() {
                self.visible.push(a);
                self.visible.push(b);
            }
        }

        debug_assert_eq!(self.rotated.len(), walls.len());
        debug_assert!(self.visible.len() % 2 == 0);
        debug_assert!(self.visible.len() <= 2 * walls.segment_count());

        log::trace!(
            "projected {} of {} segments",
            self.visible.len() / 2,
            walls.segment_count()
        );
        &self.visible
    }

    /// World polyline in view-frame coordinates, from the last `project`.
    #[inline]
    pub fn rotated(&self) -> &[Vec2] {
        &self.rotated
    }

    /// Visible list from the last `project`, one tuple per segment.
    pub fn visible_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.visible.chunks_exact(2).map(|p| (p[0], p[1]))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
