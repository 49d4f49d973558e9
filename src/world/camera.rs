use glam::{Vec2, vec2};

/// Player view-point in world space.
///
/// * Only the heading is simulated, there is no pitch or eye height.
/// * `dir` is never wrapped; it may grow without bound as the player spins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec2, // map units
    pub dir: f32,  // radians (0 = +X, counter-clockwise)
}

impl Pose {
    /// Create a pose at `pos`, facing `dir`.
    pub fn new(pos: Vec2, dir: f32) -> Self {
        Self { pos, dir }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the player looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.dir.sin_cos();
        vec2(c, s)
    }

    /// Unit vector pointing to the player's right.
    #[inline(always)]
    pub fn right(self) -> Vec2 {
        // (x, y) -> (y, -x)
        let f = self.forward();
        vec2(f.y, -f.x)
    }

    /// Angle that brings the facing direction onto the view frame's +Y axis.
    #[inline]
    pub fn view_angle(self) -> f32 {
        std::f32::consts::FRAC_PI_2 - self.dir
    }

    /*──────────────────────── minimap helpers ───────────────────────*/

    /// Tip of a forward indicator of length `len` starting at the player.
    #[inline]
    pub fn facing_tip(self, len: f32) -> Vec2 {
        self.pos + self.forward() * len
    }

    /// Endpoints of the camera plane: a segment of length `len`
    /// perpendicular to the facing direction, centred on the player.
    pub fn camera_plane(self, len: f32) -> (Vec2, Vec2) {
        let half = self.right() * (len * 0.5);
        (self.pos - half, self.pos + half)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
